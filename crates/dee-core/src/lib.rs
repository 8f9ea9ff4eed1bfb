//! Dee responder core.
//!
//! A line of free text is normalized and routed through an ordered table of
//! trigger phrases; the first matching handler produces a reply and,
//! optionally, a new session ledger (power level, constraint tags, unlocked
//! flag). The power level is clamped to [0.1, 9.8] and only rises with a
//! justification word.
//!
//! Zero I/O. The read-eval-print loop lives in the CLI crate.

pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod interpreter;
pub mod ledger;
pub mod persona;
pub mod router;
pub mod tokenizer;

pub use config::{ConfigFile, DeeConfig};
pub use constants::{
    DECREASE_FACTOR, INCREASE_FACTOR, POWER_INITIAL, POWER_MAX, POWER_MIN, UNSHACKLED,
};
pub use error::{ConfigError, DeeError, LedgerError, Result};
pub use interpreter::{Interpreter, Turn, normalize};
pub use ledger::{PowerLevel, SessionState, UnlockPolicy};
pub use persona::{Persona, Voice};
pub use router::{Action, MatchMode, Outcome, Route};
pub use tokenizer::{contains_words, tokenize};
