//! Append-only JSONL writer for one session.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::entry::JsonLogEntry;

/// Appends entries to `<logs_dir>/<date>_<session>.jsonl`.
pub struct SessionLogWriter {
    session: String,
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl SessionLogWriter {
    /// Open (or create) today's log file for `session`, creating `logs_dir`.
    pub fn new(logs_dir: impl AsRef<Path>, session: impl Into<String>) -> std::io::Result<Self> {
        let session = session.into();
        let logs_dir = logs_dir.as_ref();
        fs::create_dir_all(logs_dir)?;

        let date = chrono::Local::now().format("%Y-%m-%d");
        let path = logs_dir.join(format!("{}_{}.jsonl", date, session));

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            session,
            writer: Mutex::new(BufWriter::new(file)),
            path,
        })
    }

    pub fn session(&self) -> &str {
        &self.session
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write one entry as a line and flush.
    pub fn write(&self, entry: &JsonLogEntry) -> std::io::Result<()> {
        let json = entry
            .to_json_line()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        let mut writer = self.writer.lock();
        writeln!(writer, "{}", json)?;
        writer.flush()
    }

    pub fn flush(&self) -> std::io::Result<()> {
        self.writer.lock().flush()
    }
}

impl Drop for SessionLogWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// Read every entry of a JSONL file, skipping malformed lines.
pub fn read_entries(path: impl AsRef<Path>) -> std::io::Result<Vec<JsonLogEntry>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .filter_map(|l| JsonLogEntry::from_json_line(l).ok())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_and_reads_back() {
        let temp = TempDir::new().unwrap();
        let writer = SessionLogWriter::new(temp.path().join("logs"), "test").unwrap();

        writer
            .write(&JsonLogEntry::new("info", "test", "portfolio", "one"))
            .unwrap();
        writer
            .write(&JsonLogEntry::new("debug", "test", "portfolio", "two"))
            .unwrap();

        let entries = read_entries(writer.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].msg, "two");
        assert!(writer.path().to_string_lossy().ends_with("_test.jsonl"));
    }

    #[test]
    fn malformed_lines_skipped() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("x.jsonl");
        let good = JsonLogEntry::new("info", "s", "t", "ok").to_json_line().unwrap();
        fs::write(&path, format!("{}\nnot json\n\n", good)).unwrap();

        assert_eq!(read_entries(&path).unwrap().len(), 1);
    }
}
