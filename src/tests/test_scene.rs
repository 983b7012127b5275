use approx::assert_abs_diff_eq;
use ndarray::{array, Array2};

use super::{parse_str, TWO_ENTITY_KERNEL};
use crate::color::FlagPalette;
use crate::data::model::{Flag, KernelDataset};
use crate::error::KernelError;
use crate::scene::{PlotStyle, ScatterScene};

fn three_entities(flags: [i64; 3]) -> KernelDataset {
    KernelDataset::new(
        Array2::eye(3),
        vec!["x".into(), "y".into(), "z".into()],
        flags.iter().copied().map(Flag).collect(),
    )
    .unwrap()
}

fn three_coords() -> Array2<f64> {
    array![[0.0, 0.0], [1.0, 2.0], [-3.0, 4.0]]
}

// ============================================================================
// Marker assignment
// ============================================================================

#[test]
fn test_two_entity_scene() {
    let ds = parse_str(TWO_ENTITY_KERNEL).unwrap();
    let coords = array![[0.5, -0.5], [2.0, 1.0]];
    let style = PlotStyle::default();

    let scene = ScatterScene::build(&ds, &coords, &style).unwrap();

    assert_eq!(scene.len(), 2);
    let a = &scene.markers[0];
    let b = &scene.markers[1];
    assert_eq!(a.name, "a");
    assert!(!a.nsfw);
    assert_eq!(a.color, style.palette.safe);
    assert_eq!(b.name, "b");
    assert!(b.nsfw);
    assert_eq!(b.color, style.palette.nsfw);
}

#[test]
fn test_only_flag_one_is_nsfw() {
    let ds = three_entities([1, 0, 2]);
    let style = PlotStyle::default();
    let scene = ScatterScene::build(&ds, &three_coords(), &style).unwrap();

    let colors: Vec<_> = scene.markers.iter().map(|m| m.color).collect();
    assert_eq!(
        colors,
        vec![style.palette.nsfw, style.palette.safe, style.palette.safe]
    );
}

#[test]
fn test_permuting_flags_only_changes_colors() {
    let style = PlotStyle::default();
    let before = ScatterScene::build(&three_entities([1, 0, 0]), &three_coords(), &style).unwrap();
    let after = ScatterScene::build(&three_entities([0, 0, 1]), &three_coords(), &style).unwrap();

    for (b, a) in before.markers.iter().zip(after.markers.iter()) {
        assert_eq!(b.name, a.name);
        assert_eq!(b.position, a.position);
        assert_eq!(b.label_position, a.label_position);
    }
    assert_ne!(before.markers[0].color, after.markers[0].color);
    assert_eq!(before.markers[1].color, after.markers[1].color);
    assert_ne!(before.markers[2].color, after.markers[2].color);
}

#[test]
fn test_label_is_offset_from_marker() {
    let style = PlotStyle {
        label_offset: 0.3,
        ..PlotStyle::default()
    };
    let scene = ScatterScene::build(&three_entities([0, 0, 0]), &three_coords(), &style).unwrap();

    let m = &scene.markers[1];
    assert_eq!(m.position, [1.0, 2.0]);
    assert_abs_diff_eq!(m.label_position[0], 1.3, epsilon = 1e-12);
    assert_abs_diff_eq!(m.label_position[1], 2.3, epsilon = 1e-12);
}

#[test]
fn test_custom_palette_is_used() {
    let palette = FlagPalette {
        nsfw: eframe::egui::Color32::from_rgb(1, 2, 3),
        safe: eframe::egui::Color32::from_rgb(4, 5, 6),
    };
    let style = PlotStyle {
        palette,
        ..PlotStyle::default()
    };
    let scene = ScatterScene::build(&three_entities([1, 0, 0]), &three_coords(), &style).unwrap();
    assert_eq!(scene.markers[0].color, palette.nsfw);
    assert_eq!(scene.markers[2].color, palette.safe);
}

#[test]
fn test_extra_coordinate_columns_are_ignored() {
    let coords = array![[0.0, 0.0, 9.0], [1.0, 2.0, 9.0], [-3.0, 4.0, 9.0]];
    let scene =
        ScatterScene::build(&three_entities([0, 0, 0]), &coords, &PlotStyle::default()).unwrap();
    assert_eq!(scene.markers[2].position, [-3.0, 4.0]);
}

// ============================================================================
// Shape checks
// ============================================================================

#[test]
fn test_coordinate_rows_must_match_entities() {
    let coords = array![[0.0, 0.0], [1.0, 1.0]];
    let err =
        ScatterScene::build(&three_entities([0, 0, 0]), &coords, &PlotStyle::default()).unwrap_err();
    assert!(matches!(err, KernelError::Shape { expected: 3, found: 2, .. }));
}

#[test]
fn test_one_dimensional_coordinates_rejected() {
    let coords = array![[0.0], [1.0], [2.0]];
    let err =
        ScatterScene::build(&three_entities([0, 0, 0]), &coords, &PlotStyle::default()).unwrap_err();
    assert!(matches!(err, KernelError::Shape { expected: 2, found: 1, .. }));
}

// ============================================================================
// Bounds
// ============================================================================

#[test]
fn test_bounds() {
    let scene =
        ScatterScene::build(&three_entities([0, 0, 0]), &three_coords(), &PlotStyle::default())
            .unwrap();
    assert_eq!(scene.bounds(), Some([[-3.0, 0.0], [1.0, 4.0]]));
}

#[test]
fn test_empty_scene_has_no_bounds() {
    let ds = parse_str("0\n\n\n").unwrap();
    let scene = ScatterScene::build(&ds, &Array2::zeros((0, 2)), &PlotStyle::default()).unwrap();
    assert!(scene.is_empty());
    assert_eq!(scene.bounds(), None);
}
