use crate::consts;
use std::fmt::Write;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The best scores achieved so far, highest first, at most
/// [`MAX_HIGH_SCORES`][consts::MAX_HIGH_SCORES] of them
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct HighScores(Vec<u32>);

impl HighScores {
    /// Record a score.  Negative scores are recorded as zero.  Returns the
    /// score's zero-based position in the list, or `None` if it didn't make
    /// the cut.
    pub(crate) fn submit(&mut self, score: i64) -> Option<usize> {
        let score = u32::try_from(score.max(0)).unwrap_or(u32::MAX);
        // Insert after any equal scores so that an equal later score never
        // displaces an earlier one
        let rank = self.0.partition_point(|&s| s >= score);
        self.0.insert(rank, score);
        self.0.truncate(consts::MAX_HIGH_SCORES);
        (rank < self.0.len()).then_some(rank)
    }

    pub(crate) fn reset(&mut self) {
        self.0.clear();
    }

    pub(crate) fn get(&self) -> &[u32] {
        &self.0
    }

    /// Write the scores to `path`, one per line, creating parent directories
    /// as needed
    pub(crate) fn save(&self, path: &Path) -> Result<(), SaveError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
        }
        let src = self.0.iter().fold(String::new(), |mut src, score| {
            let _ = writeln!(src, "{score}");
            src
        });
        fs_err::write(path, src).map_err(SaveError::write)?;
        Ok(())
    }

    /// Replace the scores with those read from `path`.  On failure, the
    /// current scores are left as they are.
    ///
    /// The file is read as a sequence of whitespace-separated integers;
    /// reading stops at the first token that is not an integer.  The values
    /// are submitted in file order rather than kept as-is, so the result is
    /// always sorted highest first, with negative values recorded as zero and
    /// only the top ten kept.  A file written by [`HighScores::save()`] loads
    /// back unchanged.
    pub(crate) fn load(&mut self, path: &Path) -> Result<(), LoadError> {
        let src = fs_err::read_to_string(path).map_err(LoadError::read)?;
        let mut scores = HighScores::default();
        for token in src.split_whitespace() {
            let Ok(score) = token.parse::<i64>() else {
                tracing::warn!(
                    path = %path.display(),
                    token,
                    "Ignoring rest of high scores file after non-integer"
                );
                break;
            };
            let _ = scores.submit(score);
        }
        *self = scores;
        Ok(())
    }
}

/// Return the default path at which the high scores are stored
pub(crate) fn default_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join("toxsnake").join("highscores.txt"))
}

#[derive(Debug, Error)]
#[error("Failed to save high scores to disk")]
pub(crate) struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to write high scores file")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, Error)]
#[error("Failed to read high scores from disk")]
pub(crate) struct LoadError(#[source] LoadErrorSource);

impl LoadError {
    fn read(e: std::io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }

    /// True if loading failed only because there is no high scores file yet
    pub(crate) fn is_not_found(&self) -> bool {
        matches!(&self.0, LoadErrorSource::Read(e) if e.kind() == ErrorKind::NotFound)
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to read high scores file")]
    Read(#[source] std::io::Error),
}
