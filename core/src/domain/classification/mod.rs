pub mod ai;
pub mod entities;
pub mod heuristic;
pub mod language;
pub mod lexicon;
pub mod metadata;
pub mod pipeline;
pub mod ports;
pub mod prompts;
pub mod translation;

pub use entities::*;
pub use ports::*;
