use super::Sentence;
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

/// Inclusive token range with the label drawn under it.
struct Mark {
    start: usize,
    end: usize,
    label: String,
}

/// Renders a sentence on one line and underlines labelled token ranges.
///
/// ```text
/// Os  empregados  deverão  cumprir
///     ╰────────╯subject
/// ```
pub struct SentenceDisplay<'a> {
    sentence: &'a Sentence,
    marks: Vec<Mark>,
}

impl<'a> SentenceDisplay<'a> {
    pub fn new(sentence: &'a Sentence) -> Self {
        SentenceDisplay {
            sentence,
            marks: Vec::new(),
        }
    }

    /// Underline tokens `start..=end` with `label`. Out-of-range marks are ignored.
    pub fn mark(&mut self, start: usize, end: usize, label: impl Into<String>) {
        if start <= end && end < self.sentence.len() {
            self.marks.push(Mark {
                start,
                end,
                label: label.into(),
            });
        }
    }

    /// Takes self
    pub fn with_mark(mut self, idx: usize, label: impl Into<String>) -> Self {
        self.mark(idx, idx, label);
        self
    }

    /// Mark every non-root token with `dep→head`, and the root with `root`.
    pub fn with_dependencies(mut self) -> Self {
        for token in self.sentence.iter() {
            let label = if token.is_root() {
                "root".to_string()
            } else {
                format!("{}→{}", token.dep(), token.head().text())
            };
            self.mark(token.idx(), token.idx(), label);
        }
        self
    }
}

impl<'a> std::fmt::Display for SentenceDisplay<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const SPACE_PADDING: usize = 2;
        let mut start_cols = Vec::with_capacity(self.sentence.len());
        let mut end_cols = Vec::with_capacity(self.sentence.len());

        let mut opening_line = String::new();
        for (idx, token) in self.sentence.tokens().iter().enumerate() {
            if idx > 0 {
                opening_line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
            }
            start_cols.push(UnicodeWidthStr::width(&*opening_line));
            opening_line.push_str(&token.text);
            end_cols.push(UnicodeWidthStr::width(&*opening_line));
        }

        f.write_str(&opening_line)?;

        for mark in &self.marks {
            f.write_char('\n')?;

            let start_col = start_cols[mark.start];
            for _ in 0..start_col {
                f.write_char(' ')?;
            }

            f.write_char('╰')?;

            let end_col = end_cols[mark.end];
            let char_len = end_col - start_col;
            for _ in (start_col + 1)..end_col.saturating_sub(1) {
                f.write_char('─')?;
            }

            if char_len > 1 {
                f.write_char('╯')?;
            }

            f.write_str(&mark.label)?;
        }

        Ok(())
    }
}
