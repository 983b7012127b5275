use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use kernel_map::data::model::{Flag, KernelDataset};
use kernel_map::data::writer::write_kernel;

/// Write a synthetic clustered kernel file for trying out the viewer.
#[derive(Parser, Debug)]
#[command(name = "generate_sample", version, about)]
struct Args {
    /// Output path.
    #[arg(default_value = "kernel")]
    out: PathBuf,

    #[arg(long, default_value_t = 4)]
    clusters: usize,

    #[arg(long, default_value_t = 8)]
    per_cluster: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Entities sit around random cluster centres in a hidden 2D space; the kernel
/// is a Gaussian similarity of their hidden positions, so a good layout
/// recovers the clusters. Every third cluster is flagged NSFW.
fn synthetic_kernel(clusters: usize, per_cluster: usize, rng: &mut StdRng) -> Result<KernelDataset> {
    let mut positions = Vec::with_capacity(clusters * per_cluster);
    let mut names = Vec::with_capacity(clusters * per_cluster);
    let mut flags = Vec::with_capacity(clusters * per_cluster);

    for c in 0..clusters {
        let centre = [rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)];
        for m in 0..per_cluster {
            let p: [f64; 2] = [
                centre[0] + rng.gen_range(-1.0..1.0),
                centre[1] + rng.gen_range(-1.0..1.0),
            ];
            positions.push(p);
            names.push(format!("topic{c}_{m}"));
            flags.push(Flag::from(c % 3 == 2));
        }
    }

    let n = positions.len();
    let matrix = Array2::from_shape_fn((n, n), |(i, j)| {
        let dx = positions[i][0] - positions[j][0];
        let dy = positions[i][1] - positions[j][1];
        (-(dx * dx + dy * dy) / 8.0).exp()
    });

    Ok(KernelDataset::new(matrix, names, flags)?)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut rng = StdRng::seed_from_u64(args.seed);
    let dataset = synthetic_kernel(args.clusters, args.per_cluster, &mut rng)?;
    write_kernel(&args.out, &dataset)
        .with_context(|| format!("writing {}", args.out.display()))?;

    println!(
        "Wrote {} entities ({} NSFW) in {} clusters to {}",
        dataset.len(),
        dataset.nsfw_count(),
        args.clusters,
        args.out.display()
    );
    Ok(())
}
