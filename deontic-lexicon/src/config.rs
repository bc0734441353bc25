//! Loading and sharing of the complete configuration.

use crate::{ConfigError, ConfigResult, Grammar, Lexicon, LexiconTables};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::path::Path;

/// Built-in tables for Portuguese collective-bargaining agreements.
const PORTUGUESE_CBA: &str = include_str!("../data/pt_cba.ron");

static BUILTIN: Lazy<DeonticConfig> = Lazy::new(|| {
    match DeonticConfig::from_ron_str(PORTUGUESE_CBA) {
        Ok(config) => config,
        // The embedded tables ship with the binary; a broken copy must stop
        // the process before any clause is classified.
        Err(err) => panic!("built-in deontic configuration is invalid: {}", err),
    }
});

#[derive(Deserialize)]
struct ConfigFile {
    grammar: Grammar,
    lexicon: LexiconTables,
}

/// Grammar and lexicon, validated together.
#[derive(Debug, Clone)]
pub struct DeonticConfig {
    pub grammar: Grammar,
    pub lexicon: Lexicon,
}

impl DeonticConfig {
    /// The built-in Portuguese configuration, parsed once per process.
    pub fn builtin() -> &'static DeonticConfig {
        &BUILTIN
    }

    /// Parse and validate a RON configuration.
    pub fn from_ron_str(input: &str) -> ConfigResult<Self> {
        let file: ConfigFile = ron::from_str(input)?;
        file.grammar.validate()?;
        let lexicon = Lexicon::from_tables(file.lexicon)?;
        log::debug!(
            "loaded deontic configuration: {} subject relations, {} strict modals",
            file.grammar.subject_dependencies.len(),
            lexicon.tables().strict_modal_lemmas.len()
        );
        Ok(Self {
            grammar: file.grammar,
            lexicon,
        })
    }

    /// Load a RON configuration file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_ron_str(&content)
    }
}
