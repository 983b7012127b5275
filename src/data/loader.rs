use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ndarray::Array2;

use super::model::{Flag, KernelDataset};
use crate::error::{KernelError, Result};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a kernel file from disk.
///
/// Expected layout (whitespace-separated fields, one record per line):
///
/// ```text
/// 3
/// pics funny gonewild
/// 0 0 1
/// 1.0 0.4 0.0
/// 0.4 1.0 0.1
/// 0.0 0.1 1.0
/// ```
///
/// The file is closed before this function returns, whatever the outcome.
pub fn load_kernel(path: &Path) -> Result<KernelDataset> {
    let io_err = |source| KernelError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    let dataset = parse_kernel(BufReader::new(file)).map_err(|e| match e {
        KernelError::Io { source, .. } => io_err(source),
        other => other,
    })?;
    log::info!(
        "Loaded {} entities ({} flagged NSFW) from {}",
        dataset.len(),
        dataset.nsfw_count(),
        path.display()
    );
    Ok(dataset)
}

/// Parse a kernel from any buffered reader.
///
/// Every count must match the header: exactly `n` names, `n` flags, `n` rows
/// and `n` values per row. Blank lines after the header are skipped.
pub fn parse_kernel<R: BufRead>(reader: R) -> Result<KernelDataset> {
    let mut lines = reader.lines().enumerate().map(|(i, line)| {
        line.map(|l| (i + 1, l)).map_err(|source| KernelError::Io {
            path: Default::default(),
            source,
        })
    });

    // Header lines are fixed, so a missing one is reported at its own position.
    let mut next_line = |line_no: usize, what: &str| -> Result<(usize, String)> {
        lines
            .next()
            .transpose()?
            .ok_or_else(|| KernelError::parse(line_no, format!("missing {what}")))
    };

    // ---- Line 1: entity count ----
    let (line_no, header) = next_line(1, "entity count")?;
    let n: usize = header.trim().parse().map_err(|_| {
        KernelError::parse(
            line_no,
            format!("entity count '{}' is not a non-negative integer", header.trim()),
        )
    })?;

    // ---- Line 2: names ----
    let (_, names_line) = next_line(2, "entity names")?;
    let names: Vec<String> = names_line.split_whitespace().map(str::to_string).collect();
    if names.len() != n {
        return Err(KernelError::shape("entity names", n, names.len()));
    }

    // ---- Line 3: flags ----
    let (line_no, flags_line) = next_line(3, "NSFW flags")?;
    let flags = flags_line
        .split_whitespace()
        .enumerate()
        .map(|(j, tok)| {
            tok.parse::<Flag>().map_err(|_| {
                KernelError::parse(line_no, format!("flag[{j}]: '{tok}' is not an integer"))
            })
        })
        .collect::<Result<Vec<Flag>>>()?;
    if flags.len() != n {
        return Err(KernelError::shape("NSFW flags", n, flags.len()));
    }

    // ---- Remaining lines: matrix rows ----
    // Grown row by row: `n` comes from the file and may be wildly wrong.
    let mut values = Vec::new();
    let mut rows = 0usize;
    for line in lines {
        let (line_no, text) = line?;
        if text.trim().is_empty() {
            continue;
        }
        let row = parse_row(&text, line_no)?;
        if row.len() != n {
            return Err(KernelError::shape(
                format!("values in kernel row {}", rows + 1),
                n,
                row.len(),
            ));
        }
        values.extend(row);
        rows += 1;
    }
    if rows != n {
        return Err(KernelError::shape("kernel rows", n, rows));
    }

    let found = values.len();
    let matrix = Array2::from_shape_vec((n, n), values)
        .map_err(|_| KernelError::shape("kernel values", n * n, found))?;

    KernelDataset::new(matrix, names, flags)
}

fn parse_row(text: &str, line_no: usize) -> Result<Vec<f64>> {
    text.split_whitespace()
        .enumerate()
        .map(|(j, tok)| {
            tok.parse::<f64>().map_err(|_| {
                KernelError::parse(line_no, format!("value[{j}]: '{tok}' is not a number"))
            })
        })
        .collect()
}
