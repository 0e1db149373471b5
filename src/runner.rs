use std::collections::BTreeMap;

use log::{info, warn};

use crate::config::BleuConfig;
use crate::corpus::Corpora;
use crate::error::Result;
use crate::materialize::{self, TempCorpora};
use crate::result::{parse_output, BleuResult};
use crate::scorer::{ExternalScorer, Scorer};

/// Scores each candidate separately against the full set of references.
pub struct BleuRunner<S> {
    scorer: S,
    config: BleuConfig,
}

impl BleuRunner<ExternalScorer> {
    pub fn new(config: BleuConfig) -> Self {
        BleuRunner {
            scorer: ExternalScorer::new(&config),
            config,
        }
    }
}

impl<S: Scorer> BleuRunner<S> {
    pub fn with_scorer(scorer: S, config: BleuConfig) -> Self {
        BleuRunner { scorer, config }
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Returns one result per candidate, keyed by candidate name. The inputs
    /// are left untouched and every temp file is removed before returning,
    /// whether or not scoring succeeded.
    pub fn compute_bleu(
        &self,
        references: &Corpora,
        candidates: &Corpora,
    ) -> Result<BTreeMap<String, BleuResult>> {
        let groups = materialize::materialize(&[references, candidates], &self.config)?;
        let scored = self.score_all(&groups[0], &groups[1]);

        if let Err(e) = materialize::cleanup(groups) {
            warn!("failed to remove temp corpora: {}", e);
        }
        scored
    }

    fn score_all(
        &self,
        references: &TempCorpora,
        candidates: &TempCorpora,
    ) -> Result<BTreeMap<String, BleuResult>> {
        let reference_paths = references.paths();
        let mut results = BTreeMap::new();
        for candidate in candidates.iter() {
            let raw = self.scorer.run(&reference_paths, candidate.path())?;
            let res = parse_output(&raw)?;
            info!("{}: {}", candidate.name(), res);
            results.insert(candidate.name().to_string(), res);
        }
        Ok(results)
    }
}

/// Score `candidates` against `references` with the external scorer described by `config`.
pub fn compute_bleu(
    config: &BleuConfig,
    references: &Corpora,
    candidates: &Corpora,
) -> Result<BTreeMap<String, BleuResult>> {
    BleuRunner::new(config.clone()).compute_bleu(references, candidates)
}
