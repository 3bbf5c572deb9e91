//! Backup writer.
//!
//! Serializes the frequency database to a flat text file, one
//! `"<name> <count>"` line per entry, in enumeration order. The file is
//! written to a temp path and atomically renamed into place.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::db::FrequencyDb;
use crate::error::Error;

/// Write every `(name, count)` pair to `writer`, one per line, separated
/// by a single space. Returns the number of lines written. Read-only with
/// respect to the database.
pub fn write_to<W: Write>(db: &FrequencyDb, writer: &mut W) -> crate::Result<usize> {
    let mut lines = 0usize;
    for (name, count) in db.entries()? {
        writeln!(writer, "{} {}", name, count)?;
        lines += 1;
    }
    Ok(lines)
}

/// Write the backup to `path`. Fails with [`Error::SinkUnavailable`] if
/// the destination cannot be created.
pub fn write_file<P: AsRef<Path>>(db: &FrequencyDb, path: P) -> crate::Result<usize> {
    let path = path.as_ref();
    let temp_path = format!("{}.tmp", path.display());

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|source| Error::SinkUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

    let mut writer = BufWriter::new(file);
    let lines = write_to(db, &mut writer)?;
    writer.flush()?;
    drop(writer);

    // Atomic rename
    std::fs::rename(&temp_path, path).map_err(|source| Error::SinkUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    info!("backup written: {} entries to {}", lines, path.display());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db() -> FrequencyDb {
        let mut db = FrequencyDb::new();
        db.ingest(
            ["Apple", "Banana", "Orange", "Apple"]
                .iter()
                .map(|s| s.to_string()),
        )
        .unwrap();
        db
    }

    #[test]
    fn test_format_one_line_per_entry() {
        let mut buf = Vec::new();
        let lines = write_to(&db(), &mut buf).unwrap();
        assert_eq!(lines, 3);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Apple 2\nBanana 1\nOrange 1\n"
        );
    }

    #[test]
    fn test_round_trip_reproduces_entries() {
        let db = db();
        let mut buf = Vec::new();
        write_to(&db, &mut buf).unwrap();

        let parsed: Vec<(String, u64)> = String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(|line| {
                let (name, count) = line.rsplit_once(' ').unwrap();
                (name.to_string(), count.parse().unwrap())
            })
            .collect();

        let original: Vec<(String, u64)> = db
            .entries()
            .unwrap()
            .map(|(n, c)| (n.to_string(), c))
            .collect();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frequency.dat");
        let lines = write_file(&db(), &path).unwrap();
        assert_eq!(lines, 3);
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Apple 2\nBanana 1\nOrange 1\n");
        // No temp file left behind.
        assert!(!dir.path().join("frequency.dat.tmp").exists());
    }

    #[test]
    fn test_sink_unavailable() {
        let err = write_file(&db(), "no/such/dir/frequency.dat").err().unwrap();
        assert!(matches!(err, Error::SinkUnavailable { .. }));
    }

    #[test]
    fn test_not_ready_propagates() {
        let empty = FrequencyDb::new();
        let mut buf = Vec::new();
        assert!(matches!(
            write_to(&empty, &mut buf),
            Err(Error::NotReady)
        ));
    }
}
