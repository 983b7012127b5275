//! Two-dimensional layout of a kernel via Barnes-Hut t-SNE.

use linfa::traits::Transformer;
use linfa::ParamGuard;
use linfa_tsne::TSneParams;
use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::{KernelError, Result};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Gradient step size used by the `linfa-tsne` backend. It is fixed there and
/// cannot be configured.
pub const BACKEND_LEARNING_RATE: f64 = 200.0;

/// Hyperparameters of the embedding step. Unknown keys in a settings file
/// are rejected rather than dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmbedConfig {
    /// Target dimensionality. The viewer draws the first two columns.
    pub components: usize,
    /// Effective neighborhood size per point.
    pub perplexity: f64,
    /// Barnes-Hut angle; 0 computes exact gradients. Ignored when `seed` is set.
    pub approx_threshold: f64,
    pub max_iter: usize,
    /// Pin the RNG for reproducible layouts. `None` seeds from OS entropy.
    ///
    /// The Barnes-Hut tree is built from an unseeded thread RNG inside the
    /// backend, so a pinned seed also switches to exact gradients. That costs
    /// O(n²) per iteration, which is fine for kernels of a few hundred rows.
    pub seed: Option<u64>,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            components: 2,
            perplexity: 5.0,
            approx_threshold: 0.5,
            max_iter: 1000,
            seed: None,
        }
    }
}

impl EmbedConfig {
    /// Smallest entity count the backend accepts for the configured perplexity.
    pub fn min_entities(&self) -> usize {
        (3.0 * self.perplexity).ceil() as usize + 1
    }

    /// Barnes-Hut angle actually passed to the backend.
    pub fn effective_threshold(&self) -> f64 {
        if self.seed.is_some() {
            0.0
        } else {
            self.approx_threshold
        }
    }

    /// Check the parameters against a kernel with `n` entities.
    pub fn validate(&self, n: usize) -> Result<()> {
        if n == 0 {
            return Err(KernelError::Embedding("kernel is empty".into()));
        }
        if self.components == 0 || self.components > n {
            return Err(KernelError::Embedding(format!(
                "cannot embed {n} entities into {} dimensions",
                self.components
            )));
        }
        if !(self.perplexity.is_finite() && self.perplexity > 0.0) {
            return Err(KernelError::Embedding(format!(
                "perplexity must be positive, got {}",
                self.perplexity
            )));
        }
        if !(self.approx_threshold.is_finite() && self.approx_threshold >= 0.0) {
            return Err(KernelError::Embedding(format!(
                "Barnes-Hut threshold must be non-negative, got {}",
                self.approx_threshold
            )));
        }
        if n < self.min_entities() {
            return Err(KernelError::Embedding(format!(
                "perplexity {} needs at least {} entities, kernel has {n}",
                self.perplexity,
                self.min_entities()
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Embedder
// ---------------------------------------------------------------------------

/// Maps an `n×n` kernel to `n×k` coordinates, row order preserved.
pub trait Embedder {
    fn embed(&self, matrix: &Array2<f64>) -> Result<Array2<f64>>;
}

/// t-SNE through `linfa-tsne`; each kernel row is one sample.
#[derive(Debug, Clone, Default)]
pub struct TsneEmbedder {
    pub config: EmbedConfig,
}

impl TsneEmbedder {
    pub fn new(config: EmbedConfig) -> Self {
        Self { config }
    }

    fn rng(&self) -> SmallRng {
        match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        }
    }
}

impl Embedder for TsneEmbedder {
    fn embed(&self, matrix: &Array2<f64>) -> Result<Array2<f64>> {
        let n = matrix.nrows();
        if matrix.ncols() != n {
            return Err(KernelError::shape("kernel columns", n, matrix.ncols()));
        }
        self.config.validate(n)?;
        if let Some((idx, v)) = matrix.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(KernelError::Embedding(format!(
                "kernel value at row {}, column {} is {v}",
                idx / n,
                idx % n
            )));
        }

        let cfg = &self.config;
        let theta = cfg.effective_threshold();
        if theta != cfg.approx_threshold {
            log::debug!("Seed is pinned, using exact gradients instead of theta={}", cfg.approx_threshold);
        }
        log::info!(
            "Running t-SNE on {n} entities (perplexity={}, learning_rate={BACKEND_LEARNING_RATE}, theta={theta}, max_iter={}, seed={:?})",
            cfg.perplexity,
            cfg.max_iter,
            cfg.seed
        );

        let params = TSneParams::embedding_size_with_rng(cfg.components, self.rng())
            .perplexity(cfg.perplexity)
            .approx_threshold(theta)
            .max_iter(cfg.max_iter)
            .check()
            .map_err(|e| KernelError::Embedding(e.to_string()))?;

        let coords = params
            .transform(matrix.clone())
            .map_err(|e| KernelError::Embedding(e.to_string()))?;

        if coords.nrows() != n {
            return Err(KernelError::shape("embedded rows", n, coords.nrows()));
        }
        log::debug!("t-SNE produced a {}x{} layout", coords.nrows(), coords.ncols());
        Ok(coords)
    }
}
