use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize row {row}")]
    Serialize {
        row: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write rows")]
    Io(#[from] std::io::Error),
}
