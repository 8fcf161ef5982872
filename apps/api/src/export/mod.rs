pub mod docx;
pub mod handlers;
pub mod snapshot;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;
use tracing::info;

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Failed to write artifact to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One exported file, ready to be written or streamed.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

fn whitespace_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

/// `Jane  Q Doe` + `docx` → `Jane_Q_Doe_CV.docx`.
pub fn artifact_file_name(full_name: &str, ext: &str) -> String {
    let stem = whitespace_runs().replace_all(full_name, "_");
    format!("{stem}_CV.{ext}")
}

/// Persists an artifact into `dir`.
///
/// Bytes go to a temp file in the same directory which is then renamed over
/// the target, so a failed write never leaves a partial artifact behind.
pub fn write_artifact(dir: &Path, artifact: &Artifact) -> Result<PathBuf, ArtifactError> {
    let target = dir.join(&artifact.file_name);
    let io_err = |source| ArtifactError::Io {
        path: target.clone(),
        source,
    };

    std::fs::create_dir_all(dir).map_err(io_err)?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(&artifact.bytes).map_err(io_err)?;
    tmp.flush().map_err(io_err)?;
    tmp.persist(&target).map_err(|e| io_err(e.error))?;

    info!(
        "Wrote {} ({} bytes) to {}",
        artifact.file_name,
        artifact.bytes.len(),
        target.display()
    );
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_collapses_whitespace() {
        assert_eq!(artifact_file_name("Jane Doe", "html"), "Jane_Doe_CV.html");
        assert_eq!(
            artifact_file_name("Alex  \tMorgan Jr", "docx"),
            "Alex_Morgan_Jr_CV.docx"
        );
    }

    #[test]
    fn test_file_name_of_empty_name() {
        assert_eq!(artifact_file_name("", "html"), "_CV.html");
    }

    #[test]
    fn test_write_artifact_creates_dir_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested");
        let artifact = Artifact {
            file_name: "Jane_Doe_CV.html".to_string(),
            content_type: HTML_CONTENT_TYPE,
            bytes: b"<!DOCTYPE html>".to_vec(),
        };

        let path = write_artifact(&out, &artifact).unwrap();
        assert_eq!(path, out.join("Jane_Doe_CV.html"));
        assert_eq!(std::fs::read(&path).unwrap(), b"<!DOCTYPE html>");
        // Only the final file remains; the temp file was renamed away.
        assert_eq!(std::fs::read_dir(&out).unwrap().count(), 1);
    }

    #[test]
    fn test_write_artifact_overwrites_previous_export() {
        let dir = tempfile::tempdir().unwrap();
        let mut artifact = Artifact {
            file_name: "a_CV.html".to_string(),
            content_type: HTML_CONTENT_TYPE,
            bytes: b"first".to_vec(),
        };
        write_artifact(dir.path(), &artifact).unwrap();
        artifact.bytes = b"second".to_vec();
        let path = write_artifact(dir.path(), &artifact).unwrap();
        assert_eq!(std::fs::read(path).unwrap(), b"second");
    }
}
