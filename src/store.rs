// src/store.rs
//
// The CSV store is the sole source of truth for "have we seen this
// listing before". Append-only: initialized once, rows added at the
// end thereafter, existing rows never touched.

use std::error::Error;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::consts::STORE_HEADERS;
use crate::csv::{parse_rows, write_row};
use crate::data::JobRecord;

/// Read the full store. `None` when the file does not exist yet
/// (first run). A present-but-malformed store is a hard error.
pub fn load(path: &Path) -> Result<Option<Vec<JobRecord>>, Box<dyn Error>> {
    if !path.exists() {
        return Ok(None);
    }

    let text = fs::read_to_string(path)?;
    let mut rows = parse_rows(&text);

    if rows.is_empty() {
        return Err(format!("Store file {} has no header row", path.display()).into());
    }

    let header = rows.remove(0);
    if header != STORE_HEADERS {
        return Err(format!("Store file {} has an unexpected header row", path.display()).into());
    }

    let mut records = Vec::with_capacity(rows.len());
    for row in &rows {
        records.push(JobRecord::from_row(row)?);
    }
    Ok(Some(records))
}

/// First-run initialization: header row plus every record, in order.
pub fn init(path: &Path, records: &[JobRecord]) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    let headers: Vec<String> = STORE_HEADERS.iter().map(|h| s!(*h)).collect();
    write_row(&mut out, &headers)?;
    for r in records {
        write_row(&mut out, &r.to_row())?;
    }
    out.flush()?;
    Ok(())
}

/// Append new rows to an existing store. No rewrite of prior bytes.
pub fn append(path: &Path, records: &[JobRecord]) -> Result<(), Box<dyn Error>> {
    let file = OpenOptions::new().append(true).open(path)?;
    let mut out = BufWriter::new(file);
    for r in records {
        write_row(&mut out, &r.to_row())?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn tmp_store(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("mp_store_{}", name));
        let _ = fs::remove_dir_all(&p);
        fs::create_dir_all(&p).unwrap();
        p.join("jobs.csv")
    }

    fn record(position: &str) -> JobRecord {
        JobRecord {
            position: s!(position),
            company: s!("Acme"),
            location: s!("Zagreb"),
            deadline: s!("2025-01-01"),
            link: s!("https://mojposao.hr/job/1"),
        }
    }

    #[test]
    fn load_missing_file_is_none() {
        let path = tmp_store("missing");
        assert!(load(&path).unwrap().is_none());
    }

    #[test]
    fn init_writes_exact_header() {
        let path = tmp_store("header");
        init(&path, &[record("Backend Developer")]).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Pozicija,Firma,Lokacija,Datum prijave do,Link\n"));
    }

    #[test]
    fn append_preserves_existing_rows() {
        let path = tmp_store("append");
        init(&path, &[record("Backend Developer")]).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        append(&path, &[record("QA Engineer")]).unwrap();
        let after = fs::read_to_string(&path).unwrap();

        // old contents are a bit-exact prefix of the new contents
        assert!(after.starts_with(&before));

        let records = load(&path).unwrap().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].position, "Backend Developer");
        assert_eq!(records[1].position, "QA Engineer");
    }

    #[test]
    fn load_rejects_foreign_header() {
        let path = tmp_store("badheader");
        fs::write(&path, "Position,Company\nx,y\n").unwrap();
        assert!(load(&path).is_err());
    }

    #[test]
    fn load_rejects_short_row() {
        let path = tmp_store("badrow");
        fs::write(&path, "Pozicija,Firma,Lokacija,Datum prijave do,Link\nonly,three,cols\n").unwrap();
        assert!(load(&path).is_err());
    }

    #[test]
    fn quoted_fields_survive_the_round_trip() {
        let path = tmp_store("quotes");
        let mut r = record("Senior Dev, Backend");
        r.company = s!("\"Acme\" d.o.o.");
        init(&path, &[r.clone()]).unwrap();
        let records = load(&path).unwrap().unwrap();
        assert_eq!(records, vec![r]);
    }
}
