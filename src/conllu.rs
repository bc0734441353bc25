//! Reader for the CoNLL-U export of dependency parsers.
//!
//! Each token line has ten tab-separated columns:
//! `ID FORM LEMMA UPOS XPOS FEATS HEAD DEPREL DEPS MISC`. Sentences are
//! separated by blank lines and may be preceded by `# key = value` comments.
//! Multiword-token ranges (`1-2`) and empty nodes (`1.1`) are skipped, since
//! the dependency tree is defined over syntactic words only.

use crate::{Document, ParseError, Sentence, Token};
use std::collections::BTreeMap;

const COLUMNS: usize = 10;

/// Parse a whole CoNLL-U document.
pub fn parse_document(input: &str) -> Result<Document, ParseError> {
    let mut sentences = Vec::new();
    let mut pending = PendingSentence::default();

    for (line_idx, line) in input.lines().enumerate() {
        let line_num = line_idx + 1;
        let trimmed = line.trim_end_matches('\r');

        if trimmed.trim().is_empty() {
            if let Some(sentence) = pending.finish()? {
                sentences.push(sentence);
            }
            continue;
        }

        if let Some(comment) = trimmed.strip_prefix('#') {
            if let Some((key, value)) = comment.split_once('=') {
                pending
                    .metadata
                    .insert(key.trim().to_string(), value.trim().to_string());
            }
            continue;
        }

        pending.push_line(trimmed, line_num)?;
    }

    if let Some(sentence) = pending.finish()? {
        sentences.push(sentence);
    }

    Ok(Document::new(sentences))
}

/// Parse input expected to hold exactly one sentence.
pub fn parse_sentence(input: &str) -> Result<Sentence, ParseError> {
    let mut doc = parse_document(input)?;
    match doc.sentences.len() {
        1 => Ok(doc.sentences.remove(0)),
        n => Err(ParseError::Malformed {
            line: 1,
            message: format!("expected exactly one sentence, found {}", n),
        }),
    }
}

#[derive(Default)]
struct PendingSentence {
    tokens: Vec<Token>,
    /// 1-based CoNLL-U heads, resolved once the sentence is complete.
    heads: Vec<(usize, usize)>,
    metadata: BTreeMap<String, String>,
}

impl PendingSentence {
    fn push_line(&mut self, line: &str, line_num: usize) -> Result<(), ParseError> {
        let columns: Vec<&str> = line.split('\t').collect();
        if columns.len() != COLUMNS {
            return Err(ParseError::Malformed {
                line: line_num,
                message: format!("expected {} columns, found {}", COLUMNS, columns.len()),
            });
        }

        let id = columns[0];
        if id.contains('-') || id.contains('.') {
            return Ok(());
        }

        let id: usize = id.parse().map_err(|_| ParseError::Malformed {
            line: line_num,
            message: format!("invalid token id {:?}", id),
        })?;
        if id != self.tokens.len() + 1 {
            return Err(ParseError::Malformed {
                line: line_num,
                message: format!("expected token id {}, found {}", self.tokens.len() + 1, id),
            });
        }

        let head: usize = columns[6].parse().map_err(|_| ParseError::Malformed {
            line: line_num,
            message: format!("invalid head {:?}", columns[6]),
        })?;

        let space_after = !columns[9].split('|').any(|item| item == "SpaceAfter=No");

        self.tokens.push(Token {
            text: columns[1].to_string(),
            lemma: columns[2].to_string(),
            tag: columns[3].to_string(),
            dep: columns[7].to_string(),
            head: 0,
            space_after,
        });
        self.heads.push((head, line_num));
        Ok(())
    }

    fn finish(&mut self) -> Result<Option<Sentence>, ParseError> {
        if self.tokens.is_empty() {
            self.metadata.clear();
            return Ok(None);
        }

        let mut tokens = std::mem::take(&mut self.tokens);
        let heads = std::mem::take(&mut self.heads);
        let metadata = std::mem::take(&mut self.metadata);

        for (idx, (head, line_num)) in heads.into_iter().enumerate() {
            tokens[idx].head = match head {
                0 => idx,
                n if n <= tokens.len() => n - 1,
                n => {
                    return Err(ParseError::Malformed {
                        line: line_num,
                        message: format!("head {} is outside the sentence", n),
                    })
                }
            };
        }

        Ok(Some(Sentence::new(tokens)?.with_metadata(metadata)))
    }
}
