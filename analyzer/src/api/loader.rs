//! Loading `.api` files from disk.
//!
//! Only [`ApiTable::try_load_file`] reports failures; every other loader swallows them
//! and contributes no entries.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::ApiTable;
use crate::config::ApiConfig;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read declaration file {path:?}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to list declaration directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot locate the running executable: {0}")]
    CurrentExe(#[source] io::Error),
}

impl ApiTable {
    /// Replaces the table with the declarations in `path`.
    ///
    /// On error the table is left untouched.
    pub fn try_load_file(&mut self, path: &Path) -> Result<usize, LoadError> {
        let source = read_lossy(path)?;
        self.clear();
        let inserted = self.extend_from_source(&source);
        tracing::debug!(path = %path.display(), inserted, "loaded declaration file");
        Ok(inserted)
    }

    /// Replaces the table with the declarations in `path`; unreadable files are ignored.
    pub fn load_file(&mut self, path: &Path) {
        if let Err(err) = self.try_load_file(path) {
            tracing::debug!(%err, "skipping declaration file");
        }
    }

    /// Rebuilds the table from every `*.<extension>` file in `dir`, in file-name order.
    ///
    /// Returns the number of entries in the rebuilt table.
    pub fn load_dir(&mut self, dir: &Path, extension: &str) -> usize {
        self.clear();
        let files = match declaration_files(dir, extension) {
            Ok(files) => files,
            Err(err) => {
                tracing::debug!(%err, "skipping declaration directory");
                return 0;
            }
        };

        for path in files {
            match read_lossy(&path) {
                Ok(source) => {
                    let inserted = self.extend_from_source(&source);
                    tracing::debug!(path = %path.display(), inserted, "loaded declaration file");
                }
                Err(err) => tracing::debug!(%err, "skipping declaration file"),
            }
        }
        self.len()
    }

    /// Rebuilds the table from the configured directory beside the running executable.
    pub fn load_default_dir(&mut self, config: &ApiConfig) -> usize {
        match default_api_dir(config) {
            Ok(dir) => self.load_dir(&dir, &config.extension),
            Err(err) => {
                tracing::debug!(%err, "skipping default declaration directory");
                self.clear();
                0
            }
        }
    }
}

/// `<directory of current exe>/<config.dir_name>`.
pub(crate) fn default_api_dir(config: &ApiConfig) -> Result<PathBuf, LoadError> {
    let exe = std::env::current_exe().map_err(LoadError::CurrentExe)?;
    let base = exe.parent().map(Path::to_path_buf).unwrap_or_default();
    Ok(base.join(&config.dir_name))
}

fn declaration_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, LoadError> {
    let read_dir = fs::read_dir(dir).map_err(|source| LoadError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<PathBuf> = read_dir
        .filter_map(|ent| ent.ok())
        .filter(|ent| ent.file_type().is_ok_and(|ty| !ty.is_dir()))
        .map(|ent| ent.path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
        })
        .collect();
    files.sort();
    Ok(files)
}

fn read_lossy(path: &Path) -> Result<String, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
