//! End-to-end tests: kernel file on disk → embedding → scene.

use std::fs;

use ndarray::{array, Array2};
use tempfile::TempDir;

use kernel_map::data::model::{Flag, KernelDataset};
use kernel_map::data::writer::write_kernel;
use kernel_map::embed::{EmbedConfig, Embedder, TsneEmbedder};
use kernel_map::pipeline::build_map;
use kernel_map::scene::PlotStyle;
use kernel_map::state::AppState;
use kernel_map::KernelError;

/// Places entity `i` at `(i, -i)` so tests can tell which row went where.
struct DiagonalEmbedder;

impl Embedder for DiagonalEmbedder {
    fn embed(&self, matrix: &Array2<f64>) -> kernel_map::Result<Array2<f64>> {
        Ok(Array2::from_shape_fn((matrix.nrows(), 2), |(i, j)| {
            if j == 0 {
                i as f64
            } else {
                -(i as f64)
            }
        }))
    }
}

fn clustered_dataset() -> KernelDataset {
    let (groups, per_group) = (3, 6);
    let n = groups * per_group;
    let matrix = Array2::from_shape_fn((n, n), |(i, j)| {
        if i / per_group == j / per_group {
            1.0 / (1.0 + (i as f64 - j as f64).abs())
        } else {
            0.0
        }
    });
    let names = (0..n).map(|i| format!("sub{i}")).collect();
    let flags = (0..n).map(|i| Flag::from(i % 4 == 1)).collect();
    KernelDataset::new(matrix, names, flags).unwrap()
}

#[test]
fn test_two_entity_file_end_to_end() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kernel");
    fs::write(&path, "2\na b\n0 1\n1.0 0.2\n0.2 1.0\n").unwrap();

    let style = PlotStyle::default();
    let map = build_map(&path, &DiagonalEmbedder, &style).unwrap();

    assert_eq!(map.dataset.matrix, array![[1.0, 0.2], [0.2, 1.0]]);
    assert_eq!(map.dataset.names, vec!["a", "b"]);
    assert_eq!(map.dataset.flags, vec![Flag(0), Flag(1)]);
    assert_eq!(map.coords.dim(), (2, 2));

    assert_eq!(map.scene.len(), 2);
    assert_eq!(map.scene.markers[0].name, "a");
    assert_eq!(map.scene.markers[0].color, style.palette.safe);
    assert_eq!(map.scene.markers[1].name, "b");
    assert_eq!(map.scene.markers[1].color, style.palette.nsfw);
    assert_eq!(map.scene.markers[1].position, [1.0, -1.0]);
}

#[test]
fn test_tsne_map_keeps_row_alignment() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kernel");
    let dataset = clustered_dataset();
    write_kernel(&path, &dataset).unwrap();

    let embedder = TsneEmbedder::new(EmbedConfig {
        seed: Some(11),
        ..EmbedConfig::default()
    });
    let map = build_map(&path, &embedder, &PlotStyle::default()).unwrap();

    assert_eq!(map.scene.len(), dataset.len());
    for (i, marker) in map.scene.markers.iter().enumerate() {
        assert_eq!(marker.name, dataset.names[i]);
        assert_eq!(marker.nsfw, dataset.flags[i].is_nsfw());
        assert_eq!(marker.position, [map.coords[[i, 0]], map.coords[[i, 1]]]);
    }
}

#[test]
fn test_tiny_kernel_fails_in_embedding() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kernel");
    fs::write(&path, "2\na b\n0 1\n1.0 0.2\n0.2 1.0\n").unwrap();

    let err = build_map(&path, &TsneEmbedder::default(), &PlotStyle::default()).unwrap_err();
    assert!(matches!(err, KernelError::Embedding(_)));
}

#[test]
fn test_malformed_file_fails_before_embedding() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kernel");
    fs::write(&path, "5\na b c\n0 0 0 0 0\n").unwrap();

    let err = build_map(&path, &DiagonalEmbedder, &PlotStyle::default()).unwrap_err();
    assert!(matches!(err, KernelError::Shape { expected: 5, found: 3, .. }));
}

#[test]
fn test_failed_open_keeps_current_map() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good");
    let bad = dir.path().join("missing");
    write_kernel(&good, &clustered_dataset()).unwrap();

    let embedder = TsneEmbedder::new(EmbedConfig {
        seed: Some(3),
        ..EmbedConfig::default()
    });
    let mut state = AppState::new(embedder, PlotStyle::default());
    state.open_kernel(&good);
    assert!(state.status_message.is_none());
    assert_eq!(state.visible_indices.len(), 18);

    state.open_kernel(&bad);
    assert!(state.status_message.as_deref().unwrap().starts_with("Error:"));
    assert_eq!(state.map.as_ref().unwrap().source, good);
}
