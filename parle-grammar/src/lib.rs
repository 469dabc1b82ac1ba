//! Parle Grammar - offline data for a speech recognizer
//!
//! - `slots`: every unit name the resolver understands, one per line
//! - `intents`: annotated example requests with alternative wordings
//!
//! Both read the same lexicon as the converter and never run at
//! conversion time.

mod intents;
mod slots;

pub use intents::{IntentGenerator, ALTERNATIVES, SENTENCES};
pub use slots::{slot_values, write_slots};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("no alternative wording for \"{0}\"")]
    MissingAlternative(String),

    #[error("invalid slot pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}
