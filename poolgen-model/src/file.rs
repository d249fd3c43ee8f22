use std::path::{Path, PathBuf};

use crate::{Manifest, Result};

/// A poolgen.toml file with both raw content and parsed manifest.
#[derive(Debug)]
pub struct ManifestFile {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl ManifestFile {
    /// Open and parse a poolgen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Resolve the output directory relative to the manifest's location.
    ///
    /// Absolute directories are returned unchanged.
    pub fn output_directory(&self) -> String {
        let directory = Path::new(&self.manifest.output.directory);
        match self.path.parent() {
            Some(parent) if directory.is_relative() && !parent.as_os_str().is_empty() => {
                parent.join(directory).display().to_string()
            }
            _ => self.manifest.output.directory.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::Error;

    const CONTENT: &str = r#"
[output]
directory = "Assets/Scripts"
"#;

    #[test]
    fn test_open() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("poolgen.toml");
        fs::write(&path, CONTENT).unwrap();

        let file = ManifestFile::open(&path).unwrap();

        assert_eq!(file.path(), path);
        assert_eq!(file.content(), CONTENT);
        assert_eq!(file.manifest().output.directory, "Assets/Scripts");
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = ManifestFile::open(temp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_output_directory_is_relative_to_manifest() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("poolgen.toml");
        fs::write(&path, CONTENT).unwrap();

        let file = ManifestFile::open(&path).unwrap();

        assert_eq!(
            file.output_directory(),
            temp.path().join("Assets/Scripts").display().to_string()
        );
    }
}
