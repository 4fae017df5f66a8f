use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::ProductRow;

// Matches the utf-8-sig output of the sibling crawlers so spreadsheet tools
// detect the encoding.
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Writes the rows to `path` as CSV and returns how many were written.
///
/// With `append` set the existing contents are preserved and no second
/// header is emitted; otherwise the file is truncated. The BOM and header
/// row only ever appear on a freshly created file. An empty slice writes
/// nothing: the file and its parent directories are not created or touched.
pub fn write_rows(rows: &[ProductRow], path: &Path, append: bool) -> Result<usize> {
    if rows.is_empty() {
        return Ok(0);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
    }

    let fresh = !append || !path.exists();

    let mut file = OpenOptions::new()
        .create(true)
        .append(append)
        .write(!append)
        .truncate(!append)
        .open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    if fresh {
        file.write_all(UTF8_BOM)
            .with_context(|| format!("failed to write to {}", path.display()))?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(fresh)
        .from_writer(file);

    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("failed to write row to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;

    Ok(rows.len())
}
