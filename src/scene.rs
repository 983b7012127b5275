//! Renderer-independent description of the scatter plot.
//!
//! The viewer only draws what a [`ScatterScene`] lists, so everything about
//! which entity ends up where, in which color, can be checked without a window.

use eframe::egui::Color32;
use ndarray::Array2;

use crate::color::FlagPalette;
use crate::data::model::KernelDataset;
use crate::error::{KernelError, Result};

/// How markers and labels are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotStyle {
    pub palette: FlagPalette,
    /// Added to both coordinates of a marker to place its label.
    pub label_offset: f64,
    pub font_size: f32,
    pub marker_radius: f32,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            palette: FlagPalette::default(),
            label_offset: 0.3,
            font_size: 9.0,
            marker_radius: 4.0,
        }
    }
}

/// One entity on the plot: a cross at `position`, its name at `label_position`.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub name: String,
    pub position: [f64; 2],
    pub label_position: [f64; 2],
    pub nsfw: bool,
    pub color: Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterScene {
    /// Same order as the dataset rows.
    pub markers: Vec<Marker>,
    pub style: PlotStyle,
}

impl ScatterScene {
    /// Pair each dataset row with its embedded coordinates.
    ///
    /// Only the first two coordinate columns are plotted.
    pub fn build(dataset: &KernelDataset, coords: &Array2<f64>, style: &PlotStyle) -> Result<Self> {
        if coords.nrows() != dataset.len() {
            return Err(KernelError::shape("embedded points", dataset.len(), coords.nrows()));
        }
        if coords.ncols() < 2 {
            return Err(KernelError::shape("coordinate columns", 2, coords.ncols()));
        }

        let markers = dataset
            .names
            .iter()
            .zip(dataset.flags.iter())
            .zip(coords.rows())
            .map(|((name, flag), row)| {
                let (x, y) = (row[0], row[1]);
                let nsfw = flag.is_nsfw();
                Marker {
                    name: name.clone(),
                    position: [x, y],
                    label_position: [x + style.label_offset, y + style.label_offset],
                    nsfw,
                    color: style.palette.color_for(nsfw),
                }
            })
            .collect();

        Ok(ScatterScene {
            markers,
            style: *style,
        })
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// `[[min_x, min_y], [max_x, max_y]]` over marker positions, `None` when empty.
    pub fn bounds(&self) -> Option<[[f64; 2]; 2]> {
        let first = self.markers.first()?.position;
        Some(self.markers.iter().fold([first, first], |[lo, hi], m| {
            let [x, y] = m.position;
            [[lo[0].min(x), lo[1].min(y)], [hi[0].max(x), hi[1].max(y)]]
        }))
    }
}
