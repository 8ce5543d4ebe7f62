use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

const APP_DIR_NAME: &str = "snake-tui";
const SCORE_FILE_NAME: &str = "highscore.txt";

/// Durable best-score storage.
///
/// Implementations absorb their own failures: `read` falls back to 0 when no
/// record exists or the record is unreadable, and `write` is best-effort.
/// The game state machine never sees a persistence error.
pub trait ScoreStore {
    fn read(&self) -> u32;
    fn write(&self, value: u32);
}

/// Returns the platform-correct high-score file path.
#[must_use]
pub fn high_score_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

/// File-backed store holding a single plain decimal integer.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: high_score_path(),
        }
    }

    /// Creates a store over an explicit path, used by tests.
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for FileScoreStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreStore for FileScoreStore {
    fn read(&self) -> u32 {
        read_from_path(&self.path)
    }

    fn write(&self, value: u32) {
        if let Err(error) = write_to_path(&self.path, value) {
            eprintln!("failed to save high score: {error}");
        }
    }
}

/// Reads the stored value, trimming surrounding whitespace.
///
/// A missing file, unreadable file, or non-numeric content all count as
/// "no high score yet".
fn read_from_path(path: &Path) -> u32 {
    fs::read_to_string(path)
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(0)
}

fn write_to_path(path: &Path, value: u32) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, value.to_string())
}

/// In-process store for tests and headless simulations.
///
/// Clones share the same backing record, so a test can keep one handle while
/// the game owns another. Every write is recorded for exactly-once
/// assertions.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    inner: Rc<RefCell<MemoryRecord>>,
}

#[derive(Debug, Default)]
struct MemoryRecord {
    value: u32,
    writes: Vec<u32>,
}

impl MemoryScoreStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with an existing best score.
    #[must_use]
    pub fn with_value(value: u32) -> Self {
        let store = Self::new();
        store.inner.borrow_mut().value = value;
        store
    }

    /// Returns every value written so far, oldest first.
    #[must_use]
    pub fn writes(&self) -> Vec<u32> {
        self.inner.borrow().writes.clone()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn read(&self) -> u32 {
        self.inner.borrow().value
    }

    fn write(&self, value: u32) {
        let mut record = self.inner.borrow_mut();
        record.value = value;
        record.writes.push(value);
    }
}
