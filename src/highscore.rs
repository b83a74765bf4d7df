use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The file in which the best score ever achieved is kept.
///
/// The file holds a JSON object of the form `{"highscore": 42}`.  A
/// `HighScoreFile` without a path (because no data directory could be
/// determined) reads as zero and discards saves.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct HighScoreFile {
    path: Option<PathBuf>,
}

impl HighScoreFile {
    pub(crate) fn new(path: Option<PathBuf>) -> HighScoreFile {
        HighScoreFile { path }
    }

    pub(crate) fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Read the stored high score, treating any failure as "no high score"
    pub(crate) fn load(&self) -> u32 {
        match self.try_load() {
            Ok(score) => score,
            Err(e) => {
                log::warn!("{:#}", anyhow::Error::new(e));
                0
            }
        }
    }

    /// Store `score` if it beats the stored high score.  Failures are logged
    /// and otherwise ignored.  Returns `true` if a new high score was
    /// written.
    pub(crate) fn save(&self, score: u32) -> bool {
        match self.try_save(score) {
            Ok(written) => written,
            Err(e) => {
                log::warn!("{:#}", anyhow::Error::new(e));
                false
            }
        }
    }

    /// Read the stored high score.  A missing file yields zero.
    pub(crate) fn try_load(&self) -> Result<u32, LoadError> {
        let path = self.path.as_deref().ok_or(LoadError::NoPath)?;
        let src = match fs_err::read(path) {
            Ok(src) => src,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(LoadError::Read(e)),
        };
        let record = serde_json::from_slice::<HighScoreRecord>(&src)?;
        Ok(record.highscore)
    }

    /// Write `score` to disk if it exceeds the stored high score (as read by
    /// [`HighScoreFile::load()`]).  Returns `true` if the file was written.
    pub(crate) fn try_save(&self, score: u32) -> Result<bool, SaveError> {
        let path = self.path.as_deref().ok_or(SaveError::NoPath)?;
        if score <= self.load() {
            return Ok(false);
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::Mkdir)?;
        }
        let mut src = serde_json::to_string(&HighScoreRecord { highscore: score })?;
        src.push('\n');
        fs_err::write(path, &src).map_err(SaveError::Write)?;
        log::info!("New high score {score} saved to {}", path.display());
        Ok(true)
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
struct HighScoreRecord {
    #[serde(default)]
    highscore: u32,
}

#[derive(Debug, Error)]
pub(crate) enum LoadError {
    #[error("failed to determine path to local data directory")]
    NoPath,
    #[error("failed to read high score file")]
    Read(#[source] std::io::Error),
    #[error("failed to deserialize high score")]
    Deserialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub(crate) enum SaveError {
    #[error("failed to determine path to local data directory")]
    NoPath,
    #[error("failed to create parent directories for high score file")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to serialize high score")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write high score to disk")]
    Write(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    fn tmp_store() -> (TempDir, HighScoreFile) {
        let dir = tempfile::tempdir().expect("failed to create temporary directory");
        let store = HighScoreFile::new(Some(dir.path().join("scores").join("highscore.json")));
        (dir, store)
    }

    #[test]
    fn absent_file_reads_zero() {
        let (_dir, store) = tmp_store();
        assert_eq!(store.try_load().expect("missing file should not fail"), 0);
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn save_only_improves() {
        let (_dir, store) = tmp_store();
        assert!(store.save(5));
        assert_eq!(store.load(), 5);
        assert!(!store.save(3));
        assert_eq!(store.load(), 5);
        assert!(!store.save(5));
        assert!(store.save(12));
        assert_eq!(store.load(), 12);
    }

    #[test]
    fn file_format() {
        let (_dir, store) = tmp_store();
        assert!(store.save(7));
        let path = store.path().expect("store should have a path");
        let src = fs_err::read_to_string(path).expect("high score file should be readable");
        assert_eq!(src, "{\"highscore\":7}\n");
    }

    #[rstest]
    #[case("not json at all")]
    #[case("{\"highscore\": -3}")]
    #[case("{\"highscore\": \"lots\"}")]
    #[case("{\"highscore\": 1.5}")]
    #[case("")]
    fn corrupt_file_reads_zero(#[case] content: &str) {
        let (_dir, store) = tmp_store();
        let path = store.path().expect("store should have a path");
        fs_err::create_dir_all(path.parent().expect("path should have a parent"))
            .expect("failed to create directory");
        fs_err::write(path, content).expect("failed to write file");
        assert!(matches!(store.try_load(), Err(LoadError::Deserialize(_))));
        assert_eq!(store.load(), 0);
        assert!(store.save(1));
        assert_eq!(store.load(), 1);
    }

    #[test]
    fn missing_key_reads_zero() {
        let (_dir, store) = tmp_store();
        let path = store.path().expect("store should have a path");
        fs_err::create_dir_all(path.parent().expect("path should have a parent"))
            .expect("failed to create directory");
        fs_err::write(path, "{\"best\": 99}").expect("failed to write file");
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn unwritable_path_is_not_fatal() {
        let dir = tempfile::tempdir().expect("failed to create temporary directory");
        let blocker = dir.path().join("blocker");
        fs_err::write(&blocker, "").expect("failed to write file");
        let store = HighScoreFile::new(Some(blocker.join("highscore.json")));
        assert!(matches!(store.try_save(4), Err(SaveError::Mkdir(_))));
        assert!(!store.save(4));
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn no_path() {
        let store = HighScoreFile::default();
        assert_eq!(store.load(), 0);
        assert!(!store.save(10));
        assert!(matches!(store.try_load(), Err(LoadError::NoPath)));
    }
}
