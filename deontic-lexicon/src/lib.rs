//! Configuration tables for deontic clause analysis.
//!
//! Two table sets drive the analysis:
//!
//! - [`Grammar`] - dependency relations, closed lemma classes and suffixes the
//!   clause extractor matches against
//! - [`Lexicon`] - strict modals, voice-qualified verb-category lexicons and
//!   the agent lexicon the provision classifier looks up
//!
//! Both are bundled in a [`DeonticConfig`], loaded from RON and validated once.
//! The built-in Portuguese configuration is parsed on first use of
//! [`DeonticConfig::builtin`] and shared for the life of the process.
//!
//! ## Example
//!
//! ```
//! use deontic_lexicon::{AgentCategory, DeonticConfig};
//!
//! let config = DeonticConfig::builtin();
//! assert_eq!(config.lexicon.agent_category("sindicato"), AgentCategory::Union);
//! assert!(config.grammar.is_modal_verb("dever"));
//! ```

mod agent;
mod config;
mod errors;
mod grammar;
mod lexicon;

pub use agent::AgentCategory;
pub use config::DeonticConfig;
pub use errors::{ConfigError, ConfigResult};
pub use grammar::{Grammar, Relations, Tags};
pub use lexicon::{AgentTables, Lexicon, LexiconTables, VerbLexicons, Voice, VoicedLemmas};
