//! Rotating file writer with size-based rotation and backup retention.
//!
//! [`RotatingFile`] appends log lines to a file and, once the file has grown
//! past a size threshold, shifts it into numbered backups
//! (`rolodex.log.1` is the newest) keeping a fixed number of them. It
//! implements [`MakeWriter`] so it can back a `tracing_subscriber` fmt layer
//! directly.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;

/// Size above which the log file is rotated.
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of rotated files kept next to the live one.
const MAX_BACKUP_FILES: usize = 3;

/// Append-only log file that rotates itself by size.
pub struct RotatingFile {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    writer: Mutex<Option<File>>,
}

impl RotatingFile {
    /// Creates a writer for `file_path` with the default limits (10MB, 3 backups).
    ///
    /// The file is opened lazily on the first write.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    #[must_use]
    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            writer: Mutex::new(None),
        }
    }

    /// Appends `bytes` to the file, rotating first if it is over the limit.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned or a filesystem operation fails.
    pub fn append(&self, bytes: &[u8]) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;

        file.write_all(bytes)?;
        file.flush()
    }

    fn check_and_rotate(&self, writer: &mut Option<File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_bytes {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    /// Shifts `log.N-1 → log.N, ..., log → log.1`, dropping the oldest.
    fn rotate_files(&self) -> io::Result<()> {
        if self.max_backups == 0 {
            return fs::remove_file(&self.file_path);
        }

        let oldest = self.backup_path(self.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }

        for n in (1..self.max_backups).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }

        fs::rename(&self.file_path, self.backup_path(1))
    }

    fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self.file_path.as_os_str().to_owned();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

/// Writer handed to the fmt layer for one event.
#[derive(Debug)]
pub struct LogLine<'a> {
    target: &'a RotatingFile,
}

impl Write for LogLine<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.target.append(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for RotatingFile {
    type Writer = LogLine<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        LogLine { target: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingFile::new(dir.path().join("test.log"));

        writer.append(b"first\n").unwrap();
        writer.make_writer().write_all(b"second\n").unwrap();

        let contents = fs::read_to_string(writer.path()).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn test_rotates_and_keeps_backup_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.log");
        let writer = RotatingFile::with_limits(path.clone(), 16, 2);

        for i in 0..12 {
            writer.append(format!("line number {i:02}\n").as_bytes()).unwrap();
        }

        assert!(path.exists());
        assert!(dir.path().join("test.log.1").exists());
        assert!(dir.path().join("test.log.2").exists());
        assert!(!dir.path().join("test.log.3").exists());

        let newest = fs::read_to_string(&path).unwrap();
        assert!(newest.ends_with("line number 11\n"));
    }
}
