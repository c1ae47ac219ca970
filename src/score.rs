#![cfg(feature = "std")]
//! Win tallies and their line-oriented score file.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Failure to persist or read scores. A win already counted in memory
/// stays counted.
#[derive(Debug)]
pub enum ScoreError {
    Persistence { path: PathBuf, source: io::Error },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::Persistence { path, source } => {
                write!(f, "failed to persist scores to {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ScoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScoreError::Persistence { source, .. } => Some(source),
        }
    }
}

/// Where wins are recorded.
pub trait ScoreStore {
    /// Count one more win for `player`.
    fn record_win(&mut self, player: &str) -> Result<(), ScoreError>;

    /// All tallies as `"<name>: <wins>"`, ordered by first win.
    fn load_all(&self) -> Result<Vec<String>, ScoreError>;
}

/// Win counts in order of each player's first win.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTable {
    entries: Vec<(String, u32)>,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, player: &str) -> u32 {
        match self.entries.iter_mut().find(|(name, _)| name == player) {
            Some((_, wins)) => {
                *wins += 1;
                *wins
            }
            None => {
                self.entries.push((player.to_string(), 1));
                1
            }
        }
    }

    pub fn wins(&self, player: &str) -> u32 {
        self.entries
            .iter()
            .find(|(name, _)| name == player)
            .map_or(0, |(_, wins)| *wins)
    }

    pub fn lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(name, wins)| format!("{}: {}", name, wins))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Scores kept only for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryScores {
    table: ScoreTable,
}

impl InMemoryScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(&self) -> &ScoreTable {
        &self.table
    }
}

impl ScoreStore for InMemoryScores {
    fn record_win(&mut self, player: &str) -> Result<(), ScoreError> {
        self.table.record(player);
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<String>, ScoreError> {
        Ok(self.table.lines())
    }
}

/// Scores mirrored to a text file, one `"<name>: <wins>"` line per player.
/// The file is rewritten in full on every win.
#[derive(Debug)]
pub struct FileScoreStore {
    path: PathBuf,
    table: ScoreTable,
}

impl FileScoreStore {
    /// Tallies start empty for this session; the file is replaced at the
    /// first recorded win.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            table: ScoreTable::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn table(&self) -> &ScoreTable {
        &self.table
    }

    fn persistence(&self, source: io::Error) -> ScoreError {
        ScoreError::Persistence {
            path: self.path.clone(),
            source,
        }
    }

    fn write_all(&self) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(&self.path)?);
        for line in self.table.lines() {
            writeln!(out, "{}", line)?;
        }
        out.flush()
    }
}

impl ScoreStore for FileScoreStore {
    fn record_win(&mut self, player: &str) -> Result<(), ScoreError> {
        let wins = self.table.record(player);
        log::debug!("{} now has {} win(s)", player, wins);
        self.write_all().map_err(|e| {
            log::warn!("could not write {}: {}", self.path.display(), e);
            self.persistence(e)
        })
    }

    fn load_all(&self) -> Result<Vec<String>, ScoreError> {
        read_score_file(&self.path).map_err(|e| self.persistence(e))
    }
}

/// Read every non-empty line of a score file, trimmed.
pub fn read_score_file(path: &Path) -> io::Result<Vec<String>> {
    let reader = BufReader::new(fs::File::open(path)?);
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}
