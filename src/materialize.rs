//! Writes in-memory corpora to temporary files the scorer can read.
//!
//! Every file is held as a [`TempPath`]. [`TempCorpora::cleanup`] removes them
//! and reports failures; if a pass bails out before that, dropping the handles
//! still removes the files.

use std::io::Write;
use std::path::Path;

use log::debug;
use tempfile::{Builder, TempPath};

use crate::config::BleuConfig;
use crate::corpus::Corpora;
use crate::error::{BleuError, Result};

#[derive(Debug)]
pub struct TempCorpus {
    name: String,
    path: TempPath,
}

impl TempCorpus {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// One collection of corpora on disk, in the collection's iteration order.
#[derive(Debug, Default)]
pub struct TempCorpora {
    files: Vec<TempCorpus>,
}

impl TempCorpora {
    pub fn write(corpora: &Corpora, config: &BleuConfig) -> Result<Self> {
        let mut files = Vec::with_capacity(corpora.len());
        for (name, corpus) in corpora {
            let path = write_temp(&corpus.contents, config)?;
            debug!("materialized corpus {:?} at {}", name, path.display());
            files.push(TempCorpus {
                name: name.clone(),
                path,
            });
        }
        Ok(TempCorpora { files })
    }

    pub fn iter(&self) -> impl Iterator<Item = &TempCorpus> {
        self.files.iter()
    }

    pub fn paths(&self) -> Vec<&Path> {
        self.files.iter().map(TempCorpus::path).collect()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Remove every file. All removals are attempted; the first failure is
    /// returned, e.g. when a file has already disappeared.
    pub fn cleanup(self) -> Result<()> {
        let mut first_err = None;
        for file in self.files {
            let path = file.path.to_path_buf();
            match file.path.close() {
                Ok(()) => debug!("removed {}", path.display()),
                Err(e) => {
                    if first_err.is_none() {
                        first_err = Some(BleuError::io(Some(path), e));
                    }
                }
            }
        }
        first_err.map_or(Ok(()), Err)
    }
}

/// Materialize several collections in order. If any write fails, the handles
/// already created are dropped with the partial result, which removes their
/// files before the error is returned.
pub fn materialize(collections: &[&Corpora], config: &BleuConfig) -> Result<Vec<TempCorpora>> {
    collections
        .iter()
        .map(|corpora| TempCorpora::write(corpora, config))
        .collect()
}

/// Clean up every collection, returning the first failure.
pub fn cleanup(collections: Vec<TempCorpora>) -> Result<()> {
    let mut first_err = None;
    for corpora in collections {
        if let Err(e) = corpora.cleanup() {
            first_err.get_or_insert(e);
        }
    }
    first_err.map_or(Ok(()), Err)
}

fn write_temp(contents: &str, config: &BleuConfig) -> Result<TempPath> {
    let mut builder = Builder::new();
    builder.prefix(&config.temp_prefix).suffix(".txt");
    let created = match &config.temp_dir {
        Some(dir) => builder.tempfile_in(dir),
        None => builder.tempfile(),
    };
    let mut file = created.map_err(|e| BleuError::io(config.temp_dir.clone(), e))?;
    file.write_all(contents.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|e| BleuError::io(Some(file.path().to_path_buf()), e))?;
    Ok(file.into_temp_path())
}
