//! Output file naming.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{OutputError, Result};

/// Suffixes appended to the source file stem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputNaming {
    pub edited_suffix: String,
    pub log_suffix: String,
}

impl Default for OutputNaming {
    fn default() -> Self {
        Self {
            edited_suffix: "_edited".to_string(),
            log_suffix: "_log".to_string(),
        }
    }
}

/// Source and output locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub source: PathBuf,
    pub save_dir: PathBuf,
    /// `<save_dir>/<stem><edited_suffix>.<ext>`
    pub edited: PathBuf,
    /// `<save_dir>/<stem><log_suffix>.txt`
    pub log: PathBuf,
}

impl OutputPaths {
    /// Derives output paths from the source file.
    ///
    /// `save_dir` defaults to the directory holding `source`. The edited file
    /// keeps the source extension (`csv` when there is none).
    pub fn derive(source: &Path, save_dir: Option<&Path>, naming: &OutputNaming) -> Result<Self> {
        let stem = source
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| OutputError::InvalidSourcePath {
                path: source.to_path_buf(),
            })?;
        let extension = source
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("csv");

        let save_dir = match save_dir {
            Some(dir) => dir.to_path_buf(),
            None => match source.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            },
        };

        let edited = save_dir.join(format!("{stem}{}.{extension}", naming.edited_suffix));
        let log = save_dir.join(format!("{stem}{}.txt", naming.log_suffix));

        for output in [&edited, &log] {
            if same_file(output, source) {
                return Err(OutputError::OverwritesSource {
                    path: output.clone(),
                });
            }
        }

        Ok(Self {
            source: source.to_path_buf(),
            save_dir,
            edited,
            log,
        })
    }

    /// Creates the save directory if it does not exist.
    pub fn ensure_save_dir(&self) -> Result<()> {
        if self.save_dir.as_os_str().is_empty() {
            return Ok(());
        }
        fs::create_dir_all(&self.save_dir)
            .map_err(|e| OutputError::io("create directory", &self.save_dir, e))
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_next_to_source() {
        let paths = OutputPaths::derive(
            Path::new("/data/testDoc.csv"),
            None,
            &OutputNaming::default(),
        )
        .unwrap();

        assert_eq!(paths.save_dir, PathBuf::from("/data"));
        assert_eq!(paths.edited, PathBuf::from("/data/testDoc_edited.csv"));
        assert_eq!(paths.log, PathBuf::from("/data/testDoc_log.txt"));
    }

    #[test]
    fn test_derive_into_save_dir() {
        let paths = OutputPaths::derive(
            Path::new("/data/contacts.CSV"),
            Some(Path::new("/out")),
            &OutputNaming::default(),
        )
        .unwrap();

        assert_eq!(paths.edited, PathBuf::from("/out/contacts_edited.CSV"));
        assert_eq!(paths.log, PathBuf::from("/out/contacts_log.txt"));
    }

    #[test]
    fn test_derive_bare_file_name() {
        let paths =
            OutputPaths::derive(Path::new("contacts"), None, &OutputNaming::default()).unwrap();
        assert_eq!(paths.save_dir, PathBuf::from("."));
        assert_eq!(paths.edited, PathBuf::from("./contacts_edited.csv"));
    }

    #[test]
    fn test_derive_rejects_overwrite() {
        let naming = OutputNaming {
            edited_suffix: String::new(),
            ..OutputNaming::default()
        };
        let result = OutputPaths::derive(Path::new("/data/contacts.csv"), None, &naming);
        assert!(matches!(result, Err(OutputError::OverwritesSource { .. })));
    }

    #[test]
    fn test_derive_rejects_missing_name() {
        let result = OutputPaths::derive(Path::new("/"), None, &OutputNaming::default());
        assert!(matches!(result, Err(OutputError::InvalidSourcePath { .. })));
    }
}
