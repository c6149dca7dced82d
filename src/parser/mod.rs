//! Instruction parsing pipeline
//!
//! Raw instruction text flows through three stages: the extractors pull
//! scalar values out of the text, the classifier picks one of the four
//! intents, and the synthesizer applies the intent to the schedule. The
//! shared vocabulary all three draw on lives in [`lexicon`].

pub mod extract;
pub mod intent;
pub mod lexicon;
pub mod synthesize;

pub use intent::{classify, Intent};
pub use synthesize::{apply, ParseOutcome};
