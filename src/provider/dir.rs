//! Locale files read from a directory: one `<locale>.toml` per locale

use std::path::PathBuf;

use super::LocaleProvider;
use crate::error::LoadError;
use crate::model::{LocaleId, ResourceTree};

/// Reads `<dir>/<locale>.toml` files
#[derive(Debug, Clone)]
pub struct DirProvider {
    dir: PathBuf,
}

impl DirProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn file_for(&self, locale: &LocaleId) -> PathBuf {
        self.dir.join(format!("{}.toml", locale))
    }
}

impl LocaleProvider for DirProvider {
    fn available(&self) -> Result<Vec<LocaleId>, LoadError> {
        let io_err = |source| LoadError::Io {
            path: self.dir.clone(),
            source,
        };

        let mut locales = Vec::new();
        for entry in std::fs::read_dir(&self.dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.extension().map_or(true, |ext| ext != "toml") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match LocaleId::parse(stem) {
                Ok(locale) => locales.push(locale),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping locale file");
                }
            }
        }
        locales.sort();
        locales.dedup();
        Ok(locales)
    }

    fn load(&self, locale: &LocaleId) -> Result<ResourceTree, LoadError> {
        let mut path = self.file_for(locale);
        if !path.exists() {
            // Tolerate files named with non-canonical case, e.g. zh-tw.toml or zh_TW.toml
            path = match self.find_case_insensitive(locale)? {
                Some(found) => found,
                None => return Err(LoadError::NotFound(locale.clone())),
            };
        }

        let content = std::fs::read_to_string(&path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(%locale, path = %path.display(), "loading locale file");
        ResourceTree::from_toml_str(&content, &path.display().to_string())
    }
}

impl DirProvider {
    fn find_case_insensitive(&self, locale: &LocaleId) -> Result<Option<PathBuf>, LoadError> {
        let io_err = |source| LoadError::Io {
            path: self.dir.clone(),
            source,
        };
        for entry in std::fs::read_dir(&self.dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.extension().map_or(true, |ext| ext != "toml") {
                continue;
            }
            let matches = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|stem| LocaleId::parse(stem).ok())
                .is_some_and(|found| found == *locale);
            if matches {
                return Ok(Some(path));
            }
        }
        Ok(None)
    }
}
