//! Runs the external BLEU scorer.
//!
//! The command line is `<interpreter> <script> [-lc] <ref>...` with the
//! candidate file on stdin, the way multi-bleu expects it.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::{debug, warn};

use crate::config::BleuConfig;
use crate::error::{BleuError, Result};

/// Produces raw scorer output for one candidate against a set of references.
pub trait Scorer {
    fn run(&self, reference_paths: &[&Path], candidate_path: &Path) -> Result<String>;
}

#[derive(Debug, Clone)]
pub struct ExternalScorer {
    interpreter: String,
    script: PathBuf,
    lowercase: bool,
    check_exit_status: bool,
}

impl ExternalScorer {
    pub fn new(config: &BleuConfig) -> Self {
        ExternalScorer {
            interpreter: config.interpreter.clone(),
            script: config.script.clone(),
            lowercase: config.lowercase,
            check_exit_status: config.check_exit_status,
        }
    }

    fn command(&self, reference_paths: &[&Path]) -> Command {
        let mut cmd = Command::new(&self.interpreter);
        cmd.arg(&self.script);
        if self.lowercase {
            cmd.arg("-lc");
        }
        cmd.args(reference_paths);
        cmd
    }
}

impl Scorer for ExternalScorer {
    fn run(&self, reference_paths: &[&Path], candidate_path: &Path) -> Result<String> {
        if reference_paths.is_empty() {
            return Err(BleuError::tool("no reference files given"));
        }

        let candidate = File::open(candidate_path).map_err(|e| {
            BleuError::tool_io(
                format!("cannot open candidate {}", candidate_path.display()),
                e,
            )
        })?;

        let mut cmd = self.command(reference_paths);
        debug!("running {:?} < {}", cmd, candidate_path.display());

        let output = cmd
            .stdin(Stdio::from(candidate))
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                BleuError::tool_io(format!("cannot spawn {:?}", self.interpreter), e)
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            if self.check_exit_status {
                return Err(BleuError::tool(format!(
                    "{} {} exited with {}: {}",
                    self.interpreter,
                    self.script.display(),
                    output.status,
                    stderr.trim()
                )));
            }
            warn!(
                "scorer exited with {}, parsing its output anyway",
                output.status
            );
        } else if !stderr.trim().is_empty() {
            debug!("scorer stderr: {}", stderr.trim());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
