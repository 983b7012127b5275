use std::fmt;
use std::str::FromStr;

use ndarray::Array2;

use crate::error::{KernelError, Result};

// ---------------------------------------------------------------------------
// Flag – the per-entity NSFW marker
// ---------------------------------------------------------------------------

/// The integer flag attached to each entity on line 3 of a kernel file.
///
/// Only the value `1` marks an entity as NSFW. Any other integer, including
/// `2` or `-1`, is treated as a regular entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Flag(pub i64);

impl Flag {
    pub const SAFE: Flag = Flag(0);
    pub const NSFW: Flag = Flag(1);

    pub fn is_nsfw(self) -> bool {
        self.0 == 1
    }
}

impl FromStr for Flag {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse::<i64>().map(Flag)
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<bool> for Flag {
    fn from(nsfw: bool) -> Self {
        if nsfw {
            Flag::NSFW
        } else {
            Flag::SAFE
        }
    }
}

// ---------------------------------------------------------------------------
// KernelDataset – the complete loaded file
// ---------------------------------------------------------------------------

/// A square similarity kernel with one name and one flag per row.
///
/// Row `i` of `matrix`, `names[i]` and `flags[i]` always describe the same
/// entity.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelDataset {
    pub matrix: Array2<f64>,
    pub names: Vec<String>,
    pub flags: Vec<Flag>,
}

impl KernelDataset {
    /// Assemble a dataset, checking that every part agrees on the entity count.
    pub fn new(matrix: Array2<f64>, names: Vec<String>, flags: Vec<Flag>) -> Result<Self> {
        let n = names.len();
        if flags.len() != n {
            return Err(KernelError::shape("flag count", n, flags.len()));
        }
        if matrix.nrows() != n {
            return Err(KernelError::shape("kernel rows", n, matrix.nrows()));
        }
        if matrix.ncols() != n {
            return Err(KernelError::shape("kernel columns", n, matrix.ncols()));
        }
        Ok(KernelDataset {
            matrix,
            names,
            flags,
        })
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn nsfw_count(&self) -> usize {
        self.flags.iter().filter(|f| f.is_nsfw()).count()
    }
}
