/// Data layer: kernel file types, loading, writing and flag filtering.
///
/// Architecture:
/// ```text
///   kernel (text)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → KernelDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ KernelDataset  │  n×n matrix, names, flags
///   └───────────────┘
///        │
///        ├──────────────► writer   KernelDataset → text (same layout)
///        ▼
///   ┌──────────┐
///   │  filter   │  NSFW / non-NSFW visibility → visible indices
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod writer;
