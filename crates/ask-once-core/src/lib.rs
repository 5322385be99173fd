//! ask-once-core - Memoized answers to interactive questions
//!
//! Asks a named question only when no answer is known, and remembers the
//! answer for next time:
//!
//! - **resolver**: override → data → store lookup cascade
//! - **lifecycle**: `init` / `force` reconciliation with a previous-answer buffer
//! - **defaults**: seeding prompt defaults from archived answers
//! - **once**: the orchestrator tying the pieces together
//! - **store**: persistent answer stores (JSON file, in-memory)
//! - **questions**: question definitions and prompters (terminal, scripted)

pub mod config;
pub mod defaults;
pub mod error;
pub mod lifecycle;
pub mod once;
pub mod path;
pub mod questions;
pub mod resolver;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use config::{AskOnceConfig, StoreSpec};
pub use error::{AskError, Result};
pub use once::{AskOnce, AskOnceSettings, OnceOptions};
pub use questions::{Prompter, QuestionCache, QuestionSource, ScriptedPrompter};
pub use store::{AnswerStore, JsonFileStore, MemoryStore};
pub use types::{Answers, QuestionDefinition, QuestionKind};
