use rayon::prelude::*;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::error::AnalysisError;

/// A located class definition: the defining file and its complete source.
#[derive(Debug, Clone)]
pub struct LocatedSource {
    pub path: PathBuf,
    pub source: String,
}

/// Maps a class name to the file and source text defining it.
pub trait SourceLocator {
    fn locate(&self, class_name: &str) -> Result<LocatedSource, AnalysisError>;
}

/// Filesystem-backed locator: walks a root directory for Python files and
/// keeps those whose text defines the class at column zero. Candidate files
/// are read and matched in parallel; ties are broken by lexicographically
/// smallest path so repeated runs agree.
pub struct FileSystemLocator {
    root: PathBuf,
}

impl FileSystemLocator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn python_files(&self) -> Vec<PathBuf> {
        WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter(|entry| {
                matches!(
                    entry.path().extension().and_then(|ext| ext.to_str()),
                    Some("py") | Some("pyi") | Some("pyw")
                )
            })
            .map(|entry| entry.into_path())
            .collect()
    }
}

impl SourceLocator for FileSystemLocator {
    fn locate(&self, class_name: &str) -> Result<LocatedSource, AnalysisError> {
        // column-zero anchor: a nested (indented) class is not a module
        // top-level definition and must not match
        let pattern = Regex::new(&format!(r"(?m)^class\s+{}\b", regex::escape(class_name)))
            .map_err(|e| AnalysisError::Parse(e.to_string()))?;

        let files = self.python_files();

        let candidate = files
            .par_iter()
            .filter_map(|path| {
                let source = fs::read_to_string(path).ok()?;
                pattern
                    .is_match(&source)
                    .then(|| (path.clone(), source))
            })
            .min_by(|a, b| a.0.cmp(&b.0));

        match candidate {
            Some((path, source)) => Ok(LocatedSource { path, source }),
            None => Err(AnalysisError::ClassNotFound(class_name.to_string())),
        }
    }
}
