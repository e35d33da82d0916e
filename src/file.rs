// src/file.rs
// Output side: the HTML report and the details CSV.

use std::{
    fs,
    io::Write,
    path::Path,
};

use crate::enrich::DetailRow;
use crate::error::{Error, Result};

/// Create `dir` (and parents) unless it already exists as a directory.
pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("path exists but is not a directory: {}", dir.display()),
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

/// Write the rendered document, replacing any previous report.
pub fn write_report(path: &Path, html: &str) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, html)?;
    Ok(())
}

/// Serialize detail rows with a header line.
pub fn write_details_to<W: Write>(w: W, rows: &[DetailRow]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(w);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the details CSV. Returns `false` (and writes nothing) when there are no rows.
pub fn write_details(path: &Path, rows: &[DetailRow]) -> Result<bool> {
    if rows.is_empty() {
        return Ok(false);
    }
    ensure_parent(path)?;
    let file = fs::File::create(path)?;
    write_details_to(std::io::BufWriter::new(file), rows)?;
    Ok(true)
}
