//! Best-score persistence
//!
//! A single durable scalar. Native builds keep it in a RON file in the
//! per-user data directory; wasm builds have no filesystem here, so the best
//! score lives for the session only. Reads degrade to 0 on any problem (a
//! missing file is the normal first-run case) and write failures are logged
//! and ignored - losing a high score is not worth a crash.

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    best: u32,
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::ScoreStore;

#[cfg(target_arch = "wasm32")]
pub use wasm::ScoreStore;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::ScoreFile;
    use std::path::PathBuf;

    /// File-backed best-score store.
    pub struct ScoreStore {
        path: PathBuf,
    }

    impl ScoreStore {
        /// Open the store at its standard per-user location.
        pub fn open() -> Self {
            let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
            Self { path: base.join("hotlane").join("scores.ron") }
        }

        /// Open a store at an explicit path (tests use a temp dir).
        #[cfg(test)]
        pub fn with_path(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// Current best score; 0 when the file is missing or unreadable.
        pub fn best(&self) -> u32 {
            std::fs::read_to_string(&self.path)
                .ok()
                .and_then(|text| ron::from_str::<ScoreFile>(&text).ok())
                .map(|file| file.best)
                .unwrap_or(0)
        }

        /// Record a finished run. The stored best is overwritten only when
        /// strictly beaten; returns whether this run set a new best.
        pub fn record(&self, score: u32) -> bool {
            if score <= self.best() {
                return false;
            }
            if let Err(e) = self.write(ScoreFile { best: score }) {
                eprintln!("could not persist best score: {}", e);
            }
            true
        }

        fn write(&self, file: ScoreFile) -> Result<(), std::io::Error> {
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let text = ron::to_string(&file)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            std::fs::write(&self.path, text)
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::Cell;

    /// Session-lifetime best-score store.
    pub struct ScoreStore {
        best: Cell<u32>,
    }

    impl ScoreStore {
        pub fn open() -> Self {
            Self { best: Cell::new(0) }
        }

        pub fn best(&self) -> u32 {
            self.best.get()
        }

        pub fn record(&self, score: u32) -> bool {
            if score <= self.best.get() {
                return false;
            }
            self.best.set(score);
            true
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::ScoreStore;

    #[test]
    fn first_run_reads_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScoreStore::with_path(dir.path().join("scores.ron"));
        assert_eq!(store.best(), 0);
    }

    #[test]
    fn higher_score_updates_stored_best() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScoreStore::with_path(dir.path().join("scores.ron"));
        assert!(store.record(30));
        assert_eq!(store.best(), 30);
        assert!(store.record(40));
        assert_eq!(store.best(), 40);
    }

    #[test]
    fn lower_score_leaves_stored_best() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScoreStore::with_path(dir.path().join("scores.ron"));
        assert!(store.record(30));
        assert!(!store.record(20));
        assert_eq!(store.best(), 30);
    }

    #[test]
    fn equal_score_is_not_a_new_best() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScoreStore::with_path(dir.path().join("scores.ron"));
        assert!(store.record(30));
        assert!(!store.record(30));
        assert_eq!(store.best(), 30);
    }

    #[test]
    fn store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.ron");
        ScoreStore::with_path(&path).record(55);
        assert_eq!(ScoreStore::with_path(&path).best(), 55);
    }
}
