mod test_scene;

use ndarray::Array2;

use crate::data::loader::parse_kernel;
use crate::data::model::{Flag, KernelDataset};

/// The two-entity kernel used across the tests.
pub(crate) const TWO_ENTITY_KERNEL: &str = "2\na b\n0 1\n1.0 0.2\n0.2 1.0\n";

pub(crate) fn parse_str(text: &str) -> crate::Result<KernelDataset> {
    parse_kernel(text.as_bytes())
}

/// `groups` blocks of `per_group` entities; entities in the same block are
/// similar, entities in different blocks are not.
pub(crate) fn block_dataset(groups: usize, per_group: usize) -> KernelDataset {
    let n = groups * per_group;
    let matrix = Array2::from_shape_fn((n, n), |(i, j)| {
        if i == j {
            1.0
        } else if i / per_group == j / per_group {
            0.8 - 0.01 * ((i + j) % per_group) as f64
        } else {
            0.05
        }
    });
    let names = (0..n).map(|i| format!("e{i}")).collect();
    let flags = (0..n).map(|i| Flag::from(i / per_group == 0)).collect();
    KernelDataset::new(matrix, names, flags).expect("consistent block dataset")
}
