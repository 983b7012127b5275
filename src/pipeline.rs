use std::path::{Path, PathBuf};
use std::time::Instant;

use ndarray::Array2;

use crate::data::loader::load_kernel;
use crate::data::model::KernelDataset;
use crate::embed::Embedder;
use crate::error::Result;
use crate::scene::{PlotStyle, ScatterScene};

/// A kernel file taken all the way to a drawable scene.
#[derive(Debug, Clone)]
pub struct KernelMap {
    pub source: PathBuf,
    pub dataset: KernelDataset,
    pub coords: Array2<f64>,
    pub scene: ScatterScene,
}

/// Load → embed → scene. Fails on the first error; nothing is retried.
pub fn build_map(path: &Path, embedder: &dyn Embedder, style: &PlotStyle) -> Result<KernelMap> {
    let dataset = load_kernel(path)?;

    let started = Instant::now();
    let coords = embedder.embed(&dataset.matrix)?;
    log::info!("Embedding finished in {:.2?}", started.elapsed());

    let scene = ScatterScene::build(&dataset, &coords, style)?;
    Ok(KernelMap {
        source: path.to_path_buf(),
        dataset,
        coords,
        scene,
    })
}
