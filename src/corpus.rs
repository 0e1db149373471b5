use std::collections::BTreeMap;

/// A named blob of text, one sentence per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    pub contents: String,
}

impl Corpus {
    pub fn new(contents: impl Into<String>) -> Self {
        Corpus {
            contents: contents.into(),
        }
    }
}

/// Corpora keyed by name. Iteration order is by key, so temp files are always
/// created and scored in the same order.
pub type Corpora = BTreeMap<String, Corpus>;
