use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{BleuError, Result};

pub const DEFAULT_INTERPRETER: &str = "perl";
pub const DEFAULT_SCRIPT: &str = "textmetrics/bleu/multi-bleu.perl";
pub const DEFAULT_TEMP_PREFIX: &str = "textmetrics-bleu-";

/// How to run the external scorer and where to put temporary corpora.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BleuConfig {
    pub interpreter: String,
    pub script: PathBuf,
    /// Pass `-lc` to the scorer for case-insensitive matching.
    pub lowercase: bool,
    /// Treat a non-zero exit from the scorer as a failure even if it printed
    /// something parseable. Off means whatever was printed gets parsed.
    pub check_exit_status: bool,
    /// Directory for temporary corpus files; the system temp dir when unset.
    pub temp_dir: Option<PathBuf>,
    pub temp_prefix: String,
}

impl Default for BleuConfig {
    fn default() -> Self {
        BleuConfig {
            interpreter: DEFAULT_INTERPRETER.to_string(),
            script: PathBuf::from(DEFAULT_SCRIPT),
            lowercase: false,
            check_exit_status: true,
            temp_dir: None,
            temp_prefix: DEFAULT_TEMP_PREFIX.to_string(),
        }
    }
}

impl BleuConfig {
    /// Load a JSON config file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| BleuError::io(Some(path.to_path_buf()), e))?;
        Self::from_json(&text).map_err(|e| {
            BleuError::io(
                Some(path.to_path_buf()),
                std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            )
        })
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_bundled_scorer() {
        let config = BleuConfig::default();
        assert_eq!(config.interpreter, "perl");
        assert_eq!(config.script, PathBuf::from("textmetrics/bleu/multi-bleu.perl"));
        assert!(!config.lowercase);
        assert!(config.check_exit_status);
        assert!(config.temp_dir.is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = BleuConfig::from_json(r#"{"script": "/opt/multi-bleu.perl", "lowercase": true}"#).unwrap();
        assert_eq!(config.script, PathBuf::from("/opt/multi-bleu.perl"));
        assert!(config.lowercase);
        assert_eq!(config.interpreter, "perl");
        assert!(config.check_exit_status);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(BleuConfig::from_json(r#"{"scirpt": "x"}"#).is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"interpreter": "sh", "check_exit_status": false}}"#).unwrap();

        let config = BleuConfig::from_file(file.path()).unwrap();
        assert_eq!(config.interpreter, "sh");
        assert!(!config.check_exit_status);

        let missing = file.path().with_extension("missing");
        assert!(matches!(
            BleuConfig::from_file(&missing),
            Err(BleuError::Io { .. })
        ));
    }
}
