use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::model::KernelDataset;
use crate::error::{KernelError, Result};

/// Write a dataset in the layout [`load_kernel`](super::loader::load_kernel) reads.
pub fn write_kernel(path: &Path, dataset: &KernelDataset) -> Result<()> {
    let io_err = |source| KernelError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    write_kernel_to(&mut out, dataset).map_err(io_err)?;
    out.flush().map_err(io_err)?;
    log::debug!("Wrote {} entities to {}", dataset.len(), path.display());
    Ok(())
}

/// Serialize a dataset to any writer.
///
/// Names containing whitespace would split into several tokens on reload,
/// so callers are expected to pass single-token names (subreddit names are).
pub fn write_kernel_to<W: Write>(out: &mut W, dataset: &KernelDataset) -> std::io::Result<()> {
    writeln!(out, "{}", dataset.len())?;
    writeln!(out, "{}", dataset.names.join(" "))?;

    let flags: Vec<String> = dataset.flags.iter().map(|f| f.to_string()).collect();
    writeln!(out, "{}", flags.join(" "))?;

    for row in dataset.matrix.rows() {
        let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        writeln!(out, "{}", cells.join(" "))?;
    }
    Ok(())
}
