use eframe::egui::{Align2, RichText, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Text};

use crate::color::{NSFW_LABEL, SAFE_LABEL};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Scatter plot (central panel)
// ---------------------------------------------------------------------------

/// Render the embedded entities in the central panel.
pub fn scatter_plot(ui: &mut Ui, state: &AppState) {
    let map = match &state.map {
        Some(map) => map,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a kernel file to view the map  (File → Open kernel…)");
            });
            return;
        }
    };

    let scene = &map.scene;
    let style = &scene.style;

    // Split visible markers by flag so each group is one legend entry.
    let (nsfw, safe): (Vec<usize>, Vec<usize>) = state
        .visible_indices
        .iter()
        .copied()
        .partition(|&i| scene.markers[i].nsfw);

    Plot::new("kernel_map")
        .legend(Legend::default())
        .data_aspect(1.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (indices, label, color) in [
                (&safe, SAFE_LABEL, style.palette.safe),
                (&nsfw, NSFW_LABEL, style.palette.nsfw),
            ] {
                if indices.is_empty() {
                    continue;
                }
                let points: PlotPoints = indices
                    .iter()
                    .map(|&i| scene.markers[i].position)
                    .collect();
                plot_ui.points(
                    Points::new(points)
                        .name(label)
                        .shape(MarkerShape::Cross)
                        .color(color)
                        .radius(style.marker_radius),
                );
            }

            if state.show_labels {
                for &i in &state.visible_indices {
                    let marker = &scene.markers[i];
                    let [x, y] = marker.label_position;
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(x, y),
                            RichText::new(&marker.name).size(style.font_size),
                        )
                        .anchor(Align2::LEFT_BOTTOM),
                    );
                }
            }
        });
}
