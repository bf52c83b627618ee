//! Rule-based text responder.
//!
//! Classifies a free-form utterance into one of a fixed set of categories
//! (list samples, "or" choices, pig rolls, dice rolls, yes/no questions) and
//! generates the reply lines. Every handler draws its randomness through
//! [`Entropy`], so replies are reproducible under a seeded or scripted
//! source.

pub mod choice;
pub mod config;
pub mod dice;
pub mod dispatch;
pub mod entropy;
pub mod error;
pub mod oracle;
pub mod pigs;
pub mod response;
pub mod sample;
pub mod text;

pub use config::WhimConfig;
pub use dice::{DiceSpec, RollResult};
pub use dispatch::{Category, Intent, Responder, classify, dispatch, respond, transform};
pub use entropy::{Entropy, ScriptedEntropy};
pub use error::{WhimError, WhimResult};
pub use pigs::PigToss;
pub use response::Response;
pub use sample::SampleRequest;
