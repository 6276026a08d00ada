//! Writing and cleaning generated files.
//!
//! Files are only rewritten when their contents change, so build systems that
//! track timestamps do not rebuild after a no-op generation.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::generator::GeneratedSources;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Result of writing one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Existing contents were identical; nothing was written.
    Unchanged,
    /// The file was created or replaced.
    Generated,
}

/// Result of removing one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanOutcome {
    /// The file was deleted.
    Removed,
    /// The file did not exist.
    Missing,
}

/// Outcome of writing one generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    /// Target path.
    pub path: PathBuf,
    /// What happened.
    pub outcome: WriteOutcome,
}

/// Outcome of cleaning one generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanReport {
    /// Target path.
    pub path: PathBuf,
    /// What happened.
    pub outcome: CleanOutcome,
}

/// Writes `contents` to `path` unless the file already holds exactly them.
///
/// The new contents go to a temporary file in the same directory which then
/// replaces the target, so readers never see a partial file.
///
/// # Errors
/// Returns `CodegenError::Read` if the existing file cannot be read and
/// `CodegenError::Write` if writing or replacing fails.
pub fn write_if_changed(path: &Path, contents: &str) -> Result<WriteOutcome, CodegenError> {
    match fs::read(path) {
        Ok(existing) if existing == contents.as_bytes() => {
            tracing::info!(path = %path.display(), "up to date");
            return Ok(WriteOutcome::Unchanged);
        }
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(source) => {
            return Err(CodegenError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| CodegenError::write(path, e))?;
    tmp.write_all(contents.as_bytes())
        .map_err(|e| CodegenError::write(path, e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| CodegenError::write(path, e))?;
    set_generated_permissions(tmp.as_file()).map_err(|e| CodegenError::write(path, e))?;
    tmp.persist(path)
        .map_err(|e| CodegenError::write(path, e.error))?;

    tracing::info!(path = %path.display(), bytes = contents.len(), "generated");
    Ok(WriteOutcome::Generated)
}

#[cfg(unix)]
fn set_generated_permissions(file: &fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_generated_permissions(_file: &fs::File) -> std::io::Result<()> {
    Ok(())
}

/// Writes both generated files into `output_dir`, creating it if needed.
///
/// # Errors
/// Returns `CodegenError` if the directory cannot be created or either file
/// cannot be written.
pub fn write_sources(
    sources: &GeneratedSources,
    output_dir: &Path,
    config: &GeneratorConfig,
) -> Result<Vec<WriteReport>, CodegenError> {
    fs::create_dir_all(output_dir).map_err(|e| CodegenError::write(output_dir, e))?;

    let targets = [
        (config.header_path(output_dir), &sources.header),
        (config.source_path(output_dir), &sources.source),
    ];

    let mut reports = Vec::with_capacity(targets.len());
    for (path, contents) in targets {
        let outcome = write_if_changed(&path, contents)?;
        reports.push(WriteReport { path, outcome });
    }
    Ok(reports)
}

/// Deletes both generated files from `output_dir`.
///
/// Missing files are logged and reported as [`CleanOutcome::Missing`]; clean
/// can be run any number of times.
///
/// # Errors
/// Returns `CodegenError::Config` if the configured file names are not plain
/// names inside `output_dir`, or `CodegenError::Remove` if an existing file
/// cannot be deleted.
pub fn clean(
    output_dir: &Path,
    config: &GeneratorConfig,
) -> Result<Vec<CleanReport>, CodegenError> {
    config.validate()?;

    let mut reports = Vec::with_capacity(2);

    for path in [config.source_path(output_dir), config.header_path(output_dir)] {
        let outcome = match fs::remove_file(&path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "removed");
                CleanOutcome::Removed
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "doesn't exist");
                CleanOutcome::Missing
            }
            Err(source) => return Err(CodegenError::Remove { path, source }),
        };
        reports.push(CleanReport { path, outcome });
    }

    Ok(reports)
}
