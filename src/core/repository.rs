//! In-memory repositories with tracked file snapshots and a commit log.
//!
//! A [`Repository`] records files by the full path they were added from and keeps
//! an append-only log of [`CommitRecord`]s. Nothing is persisted; the repository
//! lives exactly as long as the catalog that owns it.
//!
//! # Public API
//! - [`Repository`]: Named collection of tracked files plus commit log
//! - [`CommitRecord`]: One immutable entry of the commit log
//! - [`CommitAction`]: Whether a record describes an add or a remove
//!
//! # Lookup by suffix
//! Files are stored under their exact path, but [`Repository::remove_file`] and
//! [`Repository::open_file`] look them up by the trailing part of the path. The
//! first tracked path, in ascending path order, that ends with the query wins.
//! Use [`Repository::matching_paths`] to detect ambiguous queries beforehand.
//!
//! # Snapshots vs. disk
//! `add_file` stores a snapshot of the content, while `open_file` re-reads the
//! file from disk, so the two can drift if the file changes in between.

use crate::core::error::{HubError, Result};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Default ceiling for a single file read, in bytes
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitAction {
    Added,
    Removed,
}

impl CommitAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitAction::Added => "Added",
            CommitAction::Removed => "Removed",
        }
    }
}

/// A single commit log entry.
///
/// The `Display` form is the stable log line format:
/// `"Added file: {path} | Commit: {message}"` or
/// `"Removed file: {path} | Commit: {message}"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub action: CommitAction,
    pub path: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl CommitRecord {
    fn new(action: CommitAction, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            action,
            path: path.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

impl fmt::Display for CommitRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} file: {} | Commit: {}",
            self.action.as_str(),
            self.path,
            self.message
        )
    }
}

#[derive(Debug, Clone)]
pub struct Repository {
    name: String,
    tracked_files: BTreeMap<String, String>,
    commit_log: Vec<CommitRecord>,
    max_file_size: u64,
}

impl Repository {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_file_limit(name, DEFAULT_MAX_FILE_SIZE)
    }

    pub fn with_file_limit(name: impl Into<String>, max_file_size: u64) -> Self {
        Self {
            name: name.into(),
            tracked_files: BTreeMap::new(),
            commit_log: Vec::new(),
            max_file_size,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }

    /// Track the file at `path`, capturing its current content.
    ///
    /// Adding an already tracked path replaces its snapshot and still appends a
    /// new log entry. On any error the repository is left untouched.
    pub fn add_file(&mut self, path: &str, commit_message: &str) -> Result<()> {
        log::debug!("Adding '{path}' to repository '{}'", self.name);

        if !Path::new(path).is_file() {
            log::warn!("Rejected add of '{path}': not a regular file");
            return Err(HubError::file_not_found(path));
        }

        let content = read_text(path, self.max_file_size)?;

        self.tracked_files.insert(path.to_string(), content);
        self.commit_log
            .push(CommitRecord::new(CommitAction::Added, path, commit_message));

        log::info!(
            "Repository '{}' now tracks {} file(s)",
            self.name,
            self.tracked_files.len()
        );
        Ok(())
    }

    /// Stop tracking the first path ending with `file_name`.
    ///
    /// Returns the full path that was removed.
    pub fn remove_file(&mut self, file_name: &str, commit_message: &str) -> Result<String> {
        let path = self
            .find_path(file_name)
            .map(str::to_string)
            .ok_or_else(|| {
                log::warn!("No tracked path in '{}' ends with '{file_name}'", self.name);
                HubError::not_tracked(file_name)
            })?;

        self.tracked_files.remove(&path);
        self.commit_log.push(CommitRecord::new(
            CommitAction::Removed,
            path.as_str(),
            commit_message,
        ));

        log::info!("Removed '{path}' from repository '{}'", self.name);
        Ok(path)
    }

    /// Read the current on-disk content of the first path ending with `file_name`.
    ///
    /// This reads the file again rather than returning the add-time snapshot.
    pub fn open_file(&self, file_name: &str) -> Result<String> {
        let path = self
            .find_path(file_name)
            .ok_or_else(|| HubError::not_tracked(file_name))?;

        log::debug!("Opening '{path}' from repository '{}'", self.name);

        if !Path::new(path).is_file() {
            return Err(HubError::missing_on_disk(path));
        }

        read_text(path, self.max_file_size)
    }

    /// All tracked paths ending with `query`, in lookup order.
    ///
    /// More than one entry means `remove_file`/`open_file` would pick the first.
    pub fn matching_paths(&self, query: &str) -> Vec<&str> {
        self.tracked_files
            .keys()
            .filter(|path| path.ends_with(query))
            .map(String::as_str)
            .collect()
    }

    /// Tracked paths in ascending order
    pub fn file_names(&self) -> Vec<&str> {
        self.tracked_files.keys().map(String::as_str).collect()
    }

    /// Content captured when `path` was last added
    pub fn snapshot(&self, path: &str) -> Option<&str> {
        self.tracked_files.get(path).map(String::as_str)
    }

    pub fn file_count(&self) -> usize {
        self.tracked_files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracked_files.is_empty()
    }

    /// Full commit log, oldest first
    pub fn commit_history(&self) -> &[CommitRecord] {
        &self.commit_log
    }

    /// Commit log rendered as log lines, oldest first
    pub fn history_lines(&self) -> Vec<String> {
        self.commit_log.iter().map(ToString::to_string).collect()
    }

    fn find_path(&self, query: &str) -> Option<&str> {
        self.tracked_files
            .keys()
            .find(|path| path.ends_with(query))
            .map(String::as_str)
    }
}

/// Read a whole file as UTF-8 text, refusing anything above `limit` bytes.
///
/// The file handle is dropped before returning.
fn read_text(path: &str, limit: u64) -> Result<String> {
    let file = File::open(path).map_err(|e| HubError::io_read(path, e))?;
    let size = file
        .metadata()
        .map_err(|e| HubError::io_read(path, e))?
        .len();
    if size > limit {
        return Err(HubError::file_too_large(path, size, limit));
    }

    // The file may grow between stat and read.
    let mut reader = file.take(limit.saturating_add(1));
    let mut content = String::with_capacity(size as usize);
    reader
        .read_to_string(&mut content)
        .map_err(|e| HubError::io_read(path, e))?;

    let read = content.len() as u64;
    if read > limit {
        return Err(HubError::file_too_large(path, read, limit));
    }

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, relative: &str, content: &[u8]) -> Result<String> {
        let path = dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path.to_string_lossy().into_owned())
    }

    #[test]
    fn test_add_file_records_snapshot_and_log() -> Result<()> {
        let dir = TempDir::new()?;
        let path = write_file(&dir, "a.txt", b"hello")?;
        let mut repo = Repository::new("Alpha");

        repo.add_file(&path, "init")?;

        assert_eq!(repo.file_names(), vec![path.as_str()]);
        assert_eq!(repo.snapshot(&path), Some("hello"));
        assert_eq!(
            repo.history_lines(),
            vec![format!("Added file: {path} | Commit: init")]
        );
        Ok(())
    }

    #[test]
    fn test_add_distinct_paths_logs_in_call_order() -> Result<()> {
        let dir = TempDir::new()?;
        let first = write_file(&dir, "z.txt", b"z")?;
        let second = write_file(&dir, "a.txt", b"a")?;
        let mut repo = Repository::new("Order");

        repo.add_file(&first, "one")?;
        repo.add_file(&second, "two")?;

        let logged: Vec<_> = repo.commit_history().iter().map(|c| c.path.as_str()).collect();
        assert_eq!(logged, vec![first.as_str(), second.as_str()]);
        assert_eq!(repo.file_count(), 2);
        Ok(())
    }

    #[test]
    fn test_re_adding_path_overwrites_snapshot_and_appends_entry() -> Result<()> {
        let dir = TempDir::new()?;
        let path = write_file(&dir, "notes.md", b"v1")?;
        let mut repo = Repository::new("Notes");

        repo.add_file(&path, "first")?;
        fs::write(&path, "v2")?;
        repo.add_file(&path, "second")?;

        assert_eq!(repo.file_count(), 1);
        assert_eq!(repo.snapshot(&path), Some("v2"));
        assert_eq!(repo.commit_history().len(), 2);
        Ok(())
    }

    #[test]
    fn test_add_missing_file_leaves_state_unchanged() -> Result<()> {
        let dir = TempDir::new()?;
        let missing = dir.path().join("missing.txt");
        let mut repo = Repository::new("Empty");

        let err = repo
            .add_file(&missing.to_string_lossy(), "nope")
            .unwrap_err();

        assert!(matches!(err, HubError::FileNotFound { .. }));
        assert!(repo.is_empty());
        assert!(repo.commit_history().is_empty());
        Ok(())
    }

    #[test]
    fn test_add_directory_is_not_found() -> Result<()> {
        let dir = TempDir::new()?;
        let mut repo = Repository::new("Dirs");

        let err = repo
            .add_file(&dir.path().to_string_lossy(), "dir")
            .unwrap_err();

        assert!(matches!(err, HubError::FileNotFound { .. }));
        assert!(repo.commit_history().is_empty());
        Ok(())
    }

    #[test]
    fn test_add_non_utf8_file_is_read_error() -> Result<()> {
        let dir = TempDir::new()?;
        let path = write_file(&dir, "binary.bin", &[0xff, 0xfe, 0x00, 0xc3])?;
        let mut repo = Repository::new("Bin");

        let err = repo.add_file(&path, "binary").unwrap_err();

        assert!(matches!(err, HubError::IoRead { .. }));
        assert!(repo.is_empty());
        assert!(repo.commit_history().is_empty());
        Ok(())
    }

    #[test]
    fn test_add_file_over_limit_is_rejected() -> Result<()> {
        let dir = TempDir::new()?;
        let path = write_file(&dir, "big.txt", b"0123456789")?;
        let mut repo = Repository::with_file_limit("Small", 4);

        let err = repo.add_file(&path, "too big").unwrap_err();

        assert!(matches!(
            err,
            HubError::FileTooLarge {
                size: 10,
                limit: 4,
                ..
            }
        ));
        assert!(repo.is_empty());
        Ok(())
    }

    #[test]
    fn test_remove_by_suffix() -> Result<()> {
        let dir = TempDir::new()?;
        let path = write_file(&dir, "sub/report.txt", b"data")?;
        let mut repo = Repository::new("Reports");
        repo.add_file(&path, "add")?;

        let removed = repo.remove_file("report.txt", "cleanup")?;

        assert_eq!(removed, path);
        assert!(repo.is_empty());
        assert_eq!(
            repo.history_lines()[1],
            format!("Removed file: {path} | Commit: cleanup")
        );
        Ok(())
    }

    #[test]
    fn test_remove_unknown_leaves_state_unchanged() -> Result<()> {
        let dir = TempDir::new()?;
        let path = write_file(&dir, "kept.txt", b"data")?;
        let mut repo = Repository::new("Keep");
        repo.add_file(&path, "add")?;

        let err = repo.remove_file("other.txt", "nope").unwrap_err();

        assert!(matches!(err, HubError::NotTracked { .. }));
        assert_eq!(repo.file_count(), 1);
        assert_eq!(repo.commit_history().len(), 1);
        Ok(())
    }

    #[test]
    fn test_suffix_lookup_picks_first_path_in_order() -> Result<()> {
        let dir = TempDir::new()?;
        let plain = write_file(&dir, "x/b.txt", b"plain")?;
        let prefixed = write_file(&dir, "y/sub_b.txt", b"prefixed")?;
        let mut repo = Repository::new("Suffix");
        repo.add_file(&prefixed, "one")?;
        repo.add_file(&plain, "two")?;

        assert_eq!(repo.matching_paths("b.txt"), vec![plain.as_str(), prefixed.as_str()]);
        assert_eq!(repo.open_file("b.txt")?, "plain");

        let removed = repo.remove_file("b.txt", "drop")?;
        assert_eq!(removed, plain);
        assert_eq!(repo.file_names(), vec![prefixed.as_str()]);
        Ok(())
    }

    #[test]
    fn test_open_reads_current_disk_content() -> Result<()> {
        let dir = TempDir::new()?;
        let path = write_file(&dir, "live.txt", b"before")?;
        let mut repo = Repository::new("Live");
        repo.add_file(&path, "add")?;

        fs::write(&path, "after")?;

        assert_eq!(repo.open_file("live.txt")?, "after");
        assert_eq!(repo.snapshot(&path), Some("before"));
        Ok(())
    }

    #[test]
    fn test_open_deleted_file_reports_path() -> Result<()> {
        let dir = TempDir::new()?;
        let path = write_file(&dir, "gone.txt", b"bye")?;
        let mut repo = Repository::new("Gone");
        repo.add_file(&path, "add")?;

        fs::remove_file(&path)?;
        let err = repo.open_file("gone.txt").unwrap_err();

        assert!(matches!(err, HubError::MissingOnDisk { .. }));
        assert!(err.to_string().contains(&path));
        assert_eq!(repo.file_count(), 1);
        Ok(())
    }

    #[test]
    fn test_unbounded_limit_reads_whole_file() -> Result<()> {
        let dir = TempDir::new()?;
        let path = write_file(&dir, "max.txt", b"hello")?;
        let mut repo = Repository::with_file_limit("Max", u64::MAX);

        repo.add_file(&path, "init")?;

        assert_eq!(repo.snapshot(&path), Some("hello"));
        assert_eq!(repo.open_file("max.txt")?, "hello");
        Ok(())
    }

    #[test]
    fn test_open_non_utf8_file_is_read_error() -> Result<()> {
        let dir = TempDir::new()?;
        let path = write_file(&dir, "text.txt", b"fine")?;
        let mut repo = Repository::new("Bytes");
        repo.add_file(&path, "add")?;

        fs::write(&path, [0xff, 0xfe, 0x00, 0x80])?;
        let err = repo.open_file("text.txt").unwrap_err();

        assert!(matches!(err, HubError::IoRead { .. }));
        assert_eq!(repo.file_count(), 1);
        assert_eq!(repo.commit_history().len(), 1);
        assert_eq!(repo.snapshot(&path), Some("fine"));
        Ok(())
    }

    #[test]
    fn test_open_file_grown_past_limit() -> Result<()> {
        let dir = TempDir::new()?;
        let path = write_file(&dir, "grow.txt", b"tiny")?;
        let mut repo = Repository::with_file_limit("Small", 8);
        repo.add_file(&path, "add")?;

        fs::write(&path, "much longer now")?;
        let err = repo.open_file("grow.txt").unwrap_err();

        assert!(matches!(
            err,
            HubError::FileTooLarge {
                size: 15,
                limit: 8,
                ..
            }
        ));
        assert_eq!(repo.file_count(), 1);
        assert_eq!(repo.commit_history().len(), 1);
        Ok(())
    }

    #[test]
    fn test_open_untracked_name() {
        let repo = Repository::new("Nothing");
        let err = repo.open_file("a.txt").unwrap_err();
        assert_eq!(err.to_string(), "File 'a.txt' not found in repository");
    }

    #[test]
    fn test_commit_record_display() {
        let record = CommitRecord::new(CommitAction::Removed, "/tmp/a.txt", "cleanup");
        assert_eq!(
            record.to_string(),
            "Removed file: /tmp/a.txt | Commit: cleanup"
        );
    }
}
