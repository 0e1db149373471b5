//! BLEU scores for in-memory corpora via an external multi-bleu scorer.
//!
//! Corpora are written to temp files, the scorer is run once per candidate
//! against every reference, and its summary line is parsed into a
//! [`BleuResult`].

pub mod config;
pub mod corpus;
pub mod error;
pub mod materialize;
pub mod result;
pub mod runner;
pub mod scorer;

pub use config::BleuConfig;
pub use corpus::{Corpora, Corpus};
pub use error::{BleuError, Result};
pub use result::{parse_output, BleuResult};
pub use runner::{compute_bleu, BleuRunner};
pub use scorer::{ExternalScorer, Scorer};
