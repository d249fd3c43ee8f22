//! Output directory management.
//!
//! Every run writes into a dedicated `Generated` directory. Before a run the
//! directory is cleared of previously generated artifacts so renamed or
//! removed components never leave stale files behind.

use std::{
    ffi::OsStr,
    fs, io,
    path::{Path, PathBuf, is_separator},
};

use poolgen_core::GeneratedArtifact;
use tracing::{debug, warn};

use crate::{Diagnostic, GenerateError, Result};

/// Name of the directory all artifacts are written into.
pub const GENERATED_DIR_NAME: &str = "Generated";

/// Default extension (without dot) of generated files.
pub const DEFAULT_EXTENSION: &str = "cs";

const PREPARE_PHASE: &str = "prepare";

/// Normalize `directory` so it ends in `Generated/`.
///
/// A separator is appended when missing, then `Generated/` unless the path
/// already ends in `Generated/`. This is a plain suffix test, so
/// `Assets/NotGenerated` is kept as is. Applying this to its own output
/// returns the output unchanged.
///
/// ```
/// use poolgen_codegen::resolve_safe_path;
///
/// assert_eq!(resolve_safe_path("Assets/Scripts"), "Assets/Scripts/Generated/");
/// assert_eq!(resolve_safe_path("Assets/Scripts/Generated"), "Assets/Scripts/Generated/");
/// ```
pub fn resolve_safe_path(directory: &str) -> String {
    let mut path = directory.to_string();
    if !path.ends_with(is_separator) {
        path.push('/');
    }

    if !path.trim_end_matches(is_separator).ends_with(GENERATED_DIR_NAME) {
        path.push_str(GENERATED_DIR_NAME);
        path.push('/');
    }
    path
}

/// Outcome of [`OutputDir::prepare`].
#[derive(Debug, Default)]
pub struct Cleanup {
    /// Stale artifacts that were removed.
    pub deleted: Vec<PathBuf>,
    /// Whether the directory had to be created.
    pub created: bool,
    /// Files that could not be removed.
    pub diagnostics: Vec<Diagnostic>,
}

/// A resolved output directory for generated artifacts.
#[derive(Debug, Clone)]
pub struct OutputDir {
    path: PathBuf,
    extension: String,
}

impl OutputDir {
    /// Resolve `directory` into its `Generated` output directory.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::EmptyTargetDirectory`] if `directory` is empty
    /// or only whitespace.
    pub fn resolve(directory: &str) -> Result<Self> {
        if directory.trim().is_empty() {
            return Err(GenerateError::EmptyTargetDirectory);
        }
        Ok(Self {
            path: PathBuf::from(resolve_safe_path(directory)),
            extension: DEFAULT_EXTENSION.to_string(),
        })
    }

    /// Use a different file extension (without dot).
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Get the resolved directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the artifact file extension.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Path an artifact is written to.
    pub fn artifact_path(&self, artifact: &GeneratedArtifact) -> PathBuf {
        self.path.join(artifact.file_name(&self.extension))
    }

    /// Remove previously generated artifacts, or create the directory.
    ///
    /// Every file carrying the artifact extension anywhere below the
    /// directory is deleted. Files with other extensions are left alone.
    /// Symbolic links are never followed: a link to a directory is skipped
    /// and a link named like an artifact is removed without touching its
    /// target. A file that cannot be deleted is reported as a warning and
    /// the remaining files are still processed.
    pub fn prepare(&self) -> Result<Cleanup> {
        let mut cleanup = Cleanup::default();

        if self.path.is_dir() {
            self.clean_dir(&self.path, &mut cleanup);
        } else {
            create_dir(&self.path)?;
            cleanup.created = true;
        }

        Ok(cleanup)
    }

    fn clean_dir(&self, dir: &Path, cleanup: &mut Cleanup) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                cleanup.diagnostics.push(delete_warning(dir, &e));
                return;
            }
        };

        for entry in entries {
            let (path, file_type) = match entry.and_then(|e| Ok((e.path(), e.file_type()?))) {
                Ok(entry) => entry,
                Err(e) => {
                    cleanup.diagnostics.push(delete_warning(dir, &e));
                    continue;
                }
            };

            if file_type.is_dir() {
                self.clean_dir(&path, cleanup);
            } else if path.extension() == Some(OsStr::new(&self.extension)) {
                match fs::remove_file(&path) {
                    Ok(()) => {
                        debug!(path = %path.display(), "deleted stale artifact");
                        cleanup.deleted.push(path);
                    }
                    Err(e) => cleanup.diagnostics.push(delete_warning(&path, &e)),
                }
            }
        }
    }

    /// Write artifacts as `<name>.<extension>` directly into the directory.
    ///
    /// The directory is created if it does not exist. Existing files with
    /// the same name are overwritten. The first failed write aborts the
    /// batch; files written before it stay on disk.
    ///
    /// # Errors
    ///
    /// An artifact whose name is empty, contains a path separator or is a
    /// `.`/`..` component is rejected with [`GenerateError::Write`] before
    /// anything in the batch is written.
    pub fn persist(&self, artifacts: &[GeneratedArtifact]) -> Result<Vec<PathBuf>> {
        for artifact in artifacts {
            check_artifact_name(artifact, &self.path)?;
        }
        if !self.path.is_dir() {
            create_dir(&self.path)?;
        }

        let mut written = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            let path = self.artifact_path(artifact);
            fs::write(&path, artifact.render()).map_err(|source| GenerateError::Write {
                path: path.clone(),
                source,
            })?;
            debug!(
                path = %path.display(),
                generator = artifact.generator_name(),
                "wrote artifact"
            );
            written.push(path);
        }
        Ok(written)
    }
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| GenerateError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Artifacts must land directly in the output directory.
fn check_artifact_name(artifact: &GeneratedArtifact, dir: &Path) -> Result<()> {
    let name = artifact.name();
    if name.is_empty() || name == "." || name == ".." || name.contains(is_separator) {
        return Err(GenerateError::Write {
            path: dir.join(name),
            source: io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "artifact name '{}' from {} is not a plain file name",
                    name,
                    artifact.generator_name()
                ),
            ),
        });
    }
    Ok(())
}

fn delete_warning(path: &Path, error: &io::Error) -> Diagnostic {
    warn!(path = %path.display(), %error, "could not delete generated file");
    Diagnostic::warning(PREPARE_PHASE, format!("could not delete: {}", error))
        .at(path.display().to_string())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn output_in(temp: &TempDir) -> OutputDir {
        OutputDir::resolve(temp.path().to_str().unwrap()).unwrap()
    }

    #[test]
    fn test_resolve_safe_path() {
        assert_eq!(resolve_safe_path("Assets/Scripts"), "Assets/Scripts/Generated/");
        assert_eq!(resolve_safe_path("Assets/Scripts/"), "Assets/Scripts/Generated/");
        assert_eq!(resolve_safe_path("Assets/Generated"), "Assets/Generated/");
        assert_eq!(resolve_safe_path("Assets/Generated/"), "Assets/Generated/");
        assert_eq!(resolve_safe_path("Generated"), "Generated/");
        assert_eq!(resolve_safe_path("/"), "/Generated/");
    }

    #[test]
    fn test_resolve_safe_path_is_a_suffix_test() {
        assert_eq!(resolve_safe_path("Assets/NotGenerated"), "Assets/NotGenerated/");
        assert_eq!(resolve_safe_path("Assets/Generated2"), "Assets/Generated2/Generated/");
    }

    #[test]
    fn test_resolve_safe_path_is_idempotent() {
        for dir in [
            "Assets/Scripts",
            "Assets/Scripts/",
            "Assets/Generated",
            "Generated/",
            "a",
            "/",
            "./out//",
            "Assets/NotGenerated",
        ] {
            let once = resolve_safe_path(dir);
            assert_eq!(resolve_safe_path(&once), once, "input {dir:?}");
        }
    }

    #[test]
    fn test_resolve_rejects_empty_directory() {
        assert!(matches!(
            OutputDir::resolve(""),
            Err(GenerateError::EmptyTargetDirectory)
        ));
        assert!(matches!(
            OutputDir::resolve("   "),
            Err(GenerateError::EmptyTargetDirectory)
        ));
    }

    #[test]
    fn test_prepare_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let output = output_in(&temp);

        let cleanup = output.prepare().unwrap();

        assert!(cleanup.created);
        assert!(cleanup.deleted.is_empty());
        assert!(temp.path().join("Generated").is_dir());
    }

    #[test]
    fn test_prepare_removes_only_artifact_extension() {
        let temp = TempDir::new().unwrap();
        let generated = temp.path().join("Generated");
        let nested = generated.join("Nested");
        fs::create_dir_all(&nested).unwrap();
        fs::write(generated.join("Old.cs"), "stale").unwrap();
        fs::write(nested.join("Deep.cs"), "stale").unwrap();
        fs::write(generated.join("Old.cs.meta"), "keep").unwrap();
        fs::write(generated.join("notes.txt"), "keep").unwrap();

        let cleanup = output_in(&temp).prepare().unwrap();

        assert!(!cleanup.created);
        assert_eq!(cleanup.deleted.len(), 2);
        assert!(cleanup.diagnostics.is_empty());
        assert!(!generated.join("Old.cs").exists());
        assert!(!nested.join("Deep.cs").exists());
        assert!(nested.is_dir());
        assert!(generated.join("Old.cs.meta").exists());
        assert!(generated.join("notes.txt").exists());
    }

    #[test]
    fn test_prepare_leaves_parent_directory_alone() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Handwritten.cs"), "user code").unwrap();

        output_in(&temp).prepare().unwrap();

        assert!(temp.path().join("Handwritten.cs").exists());
    }

    #[test]
    fn test_prepare_respects_custom_extension() {
        let temp = TempDir::new().unwrap();
        let generated = temp.path().join("Generated");
        fs::create_dir_all(&generated).unwrap();
        fs::write(generated.join("a.cs"), "").unwrap();
        fs::write(generated.join("b.rs"), "").unwrap();

        output_in(&temp).with_extension("rs").prepare().unwrap();

        assert!(generated.join("a.cs").exists());
        assert!(!generated.join("b.rs").exists());
    }

    #[test]
    fn test_persist_writes_header_and_body() {
        let temp = TempDir::new().unwrap();
        let output = output_in(&temp);
        let artifact = GeneratedArtifact::new("Pools", "PoolsGenerator", "class Pools {}\n");

        let written = output.persist(std::slice::from_ref(&artifact)).unwrap();

        let path = temp.path().join("Generated").join("Pools.cs");
        assert_eq!(written, vec![output.path().join("Pools.cs")]);
        assert_eq!(fs::read_to_string(&path).unwrap(), artifact.render());
    }

    #[test]
    fn test_persist_creates_directory_and_overwrites() {
        let temp = TempDir::new().unwrap();
        let output = output_in(&temp);

        output
            .persist(&[GeneratedArtifact::new("A", "G", "first\n")])
            .unwrap();
        output
            .persist(&[GeneratedArtifact::new("A", "G", "second\n")])
            .unwrap();

        let content = fs::read_to_string(output.path().join("A.cs")).unwrap();
        assert!(content.ends_with("second\n"));
        assert!(!content.contains("first"));
    }

    #[test]
    fn test_persist_failure_is_fatal() {
        let temp = TempDir::new().unwrap();
        let output = output_in(&temp);
        // A directory where the artifact file should go makes the write fail.
        fs::create_dir_all(output.path().join("Blocked.cs")).unwrap();

        let result = output.persist(&[
            GeneratedArtifact::new("Before", "G", ""),
            GeneratedArtifact::new("Blocked", "G", ""),
            GeneratedArtifact::new("After", "G", ""),
        ]);

        assert!(matches!(result, Err(GenerateError::Write { .. })));
        assert!(output.path().join("Before.cs").exists());
        assert!(!output.path().join("After.cs").exists());
    }

    #[test]
    fn test_persist_rejects_names_outside_directory() {
        let temp = TempDir::new().unwrap();
        let output = output_in(&temp);

        for name in ["../Escaped", "Nested/Inner", "..", ""] {
            let result = output.persist(&[
                GeneratedArtifact::new("First", "G", ""),
                GeneratedArtifact::new(name, "G", ""),
            ]);
            assert!(
                matches!(result, Err(GenerateError::Write { ref source, .. })
                    if source.kind() == io::ErrorKind::InvalidInput),
                "{name:?} should be rejected"
            );
        }

        assert!(!temp.path().join("Escaped.cs").exists());
        assert!(!output.path().join("Nested").exists());
        assert!(!output.path().join("First.cs").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_prepare_does_not_follow_symlinks() {
        use std::os::unix::fs::symlink;

        let temp = TempDir::new().unwrap();
        let user_code = temp.path().join("UserCode");
        fs::create_dir_all(&user_code).unwrap();
        fs::write(user_code.join("Handwritten.cs"), "user code").unwrap();
        let generated = temp.path().join("Generated");
        fs::create_dir_all(&generated).unwrap();
        symlink(&user_code, generated.join("link")).unwrap();
        symlink(user_code.join("Handwritten.cs"), generated.join("Alias.cs")).unwrap();

        let cleanup = output_in(&temp).prepare().unwrap();

        assert!(user_code.join("Handwritten.cs").exists());
        assert!(generated.join("link").exists());
        assert_eq!(cleanup.deleted, vec![generated.join("Alias.cs")]);
        assert!(cleanup.diagnostics.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_prepare_warns_and_continues_when_delete_fails() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let generated = temp.path().join("Generated");
        let locked = generated.join("Locked");
        fs::create_dir_all(&locked).unwrap();
        fs::write(locked.join("Stuck.cs"), "stale").unwrap();
        fs::write(generated.join("Free.cs"), "stale").unwrap();
        fs::write(generated.join("Other.cs"), "stale").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

        // Permission bits do not stop root.
        if fs::write(locked.join("root_check"), "").is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let cleanup = output_in(&temp).prepare().unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(cleanup.diagnostics.len(), 1);
        let warning = &cleanup.diagnostics[0];
        assert_eq!(warning.phase, "prepare");
        assert_eq!(
            warning.location.as_deref(),
            Some(locked.join("Stuck.cs").to_str().unwrap())
        );
        assert!(locked.join("Stuck.cs").exists());
        assert!(!generated.join("Free.cs").exists());
        assert!(!generated.join("Other.cs").exists());
        assert_eq!(cleanup.deleted.len(), 2);
    }
}
