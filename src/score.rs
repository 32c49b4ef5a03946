use std::path::{Path, PathBuf};

/// The single persisted value: the best score ever achieved, stored as a
/// plain integer in a dotfile. Absent or malformed contents read as 0 and
/// the value on disk never decreases.
pub struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$HOME/.galaxy_runner_score`, falling back to the working directory.
    pub fn at_default_location() -> Self {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        Self::new(Path::new(&home).join(".galaxy_runner_score"))
    }

    pub fn load(&self) -> u32 {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Writes `score` only if it beats the stored value. Returns the high
    /// score after the call. Storage being unavailable is not an error, the
    /// game keeps the in-memory value.
    pub fn record(&self, score: u32) -> u32 {
        let current = self.load();
        if score > current {
            let _ = std::fs::write(&self.path, score.to_string());
            score
        } else {
            current
        }
    }
}
