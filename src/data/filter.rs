use super::model::KernelDataset;

// ---------------------------------------------------------------------------
// Filter predicate: which flag groups are shown
// ---------------------------------------------------------------------------

/// Visibility of the two flag groups. Both are shown by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagFilter {
    pub show_nsfw: bool,
    pub show_safe: bool,
}

impl Default for FlagFilter {
    fn default() -> Self {
        Self {
            show_nsfw: true,
            show_safe: true,
        }
    }
}

impl FlagFilter {
    pub fn allows(&self, nsfw: bool) -> bool {
        if nsfw {
            self.show_nsfw
        } else {
            self.show_safe
        }
    }
}

/// Return indices of entities that pass the filter and whose name contains
/// `query` (case-insensitive). An empty query matches every name.
pub fn filtered_indices(dataset: &KernelDataset, filter: &FlagFilter, query: &str) -> Vec<usize> {
    let query = query.trim().to_lowercase();
    dataset
        .names
        .iter()
        .zip(dataset.flags.iter())
        .enumerate()
        .filter(|(_, (name, flag))| {
            filter.allows(flag.is_nsfw())
                && (query.is_empty() || name.to_lowercase().contains(&query))
        })
        .map(|(i, _)| i)
        .collect()
}
