use std::path::Path;

use crate::data::filter::{filtered_indices, FlagFilter};
use crate::embed::TsneEmbedder;
use crate::pipeline::{build_map, KernelMap};
use crate::scene::PlotStyle;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Current map (None until a kernel has been embedded).
    pub map: Option<KernelMap>,

    /// Used when another kernel is opened from the viewer.
    pub embedder: TsneEmbedder,
    pub style: PlotStyle,

    pub filter: FlagFilter,

    /// Case-insensitive name search.
    pub search: String,

    /// Indices of markers passing the filter and search (cached).
    pub visible_indices: Vec<usize>,

    pub show_labels: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(embedder: TsneEmbedder, style: PlotStyle) -> Self {
        Self {
            map: None,
            embedder,
            style,
            filter: FlagFilter::default(),
            search: String::new(),
            visible_indices: Vec::new(),
            show_labels: true,
            status_message: None,
        }
    }

    /// Ingest a freshly built map and show all of it.
    pub fn set_map(&mut self, map: KernelMap) {
        self.map = Some(map);
        self.status_message = None;
        self.refilter();
    }

    /// Recompute `visible_indices` after a filter or search change.
    pub fn refilter(&mut self) {
        self.visible_indices = match &self.map {
            Some(map) => filtered_indices(&map.dataset, &self.filter, &self.search),
            None => Vec::new(),
        };
    }

    pub fn set_filter(&mut self, filter: FlagFilter) {
        if filter != self.filter {
            self.filter = filter;
            self.refilter();
        }
    }

    /// Run the whole pipeline on another kernel file.
    ///
    /// On failure the current map stays on screen and the error is shown in
    /// the status line.
    pub fn open_kernel(&mut self, path: &Path) {
        match build_map(path, &self.embedder, &self.style) {
            Ok(map) => {
                log::info!("Opened {} ({} entities)", path.display(), map.dataset.len());
                self.set_map(map);
            }
            Err(e) => {
                log::error!("Failed to open {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
