use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color::{NSFW_LABEL, SAFE_LABEL};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(map) = &state.map else {
        ui.label("No kernel loaded.");
        return;
    };

    let palette = map.scene.style.palette;
    let n_nsfw = map.dataset.nsfw_count();
    let n_safe = map.dataset.len() - n_nsfw;

    // ---- Flag group toggles ----
    let mut filter = state.filter;
    ui.checkbox(
        &mut filter.show_safe,
        RichText::new(format!("{SAFE_LABEL}  ({n_safe})")).color(palette.safe),
    );
    ui.checkbox(
        &mut filter.show_nsfw,
        RichText::new(format!("{NSFW_LABEL}  ({n_nsfw})")).color(palette.nsfw),
    );
    state.set_filter(filter);

    ui.separator();

    // ---- Name search ----
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Search");
        if ui.text_edit_singleline(&mut state.search).changed() {
            state.refilter();
        }
    });

    ui.separator();

    // ---- Visible entities ----
    let Some(map) = &state.map else {
        return;
    };
    ui.strong(format!("Entities ({})", state.visible_indices.len()));
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for &i in &state.visible_indices {
                let marker = &map.scene.markers[i];
                let [x, y] = marker.position;
                ui.label(RichText::new(&marker.name).color(marker.color))
                    .on_hover_text(format!("({x:.3}, {y:.3})"));
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open kernel…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(map) = &state.map {
            ui.label(format!(
                "{}: {} entities, {} visible",
                map.source.display(),
                map.dataset.len(),
                state.visible_indices.len()
            ));
        }

        ui.separator();

        if ui.selectable_label(state.show_labels, "Labels").clicked() {
            state.show_labels = !state.show_labels;
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open PPMI kernel")
        .pick_file();

    if let Some(path) = file {
        state.open_kernel(&path);
    }
}
