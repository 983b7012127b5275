//! Load a PPMI kernel over labeled entities, lay it out in 2D with t-SNE and
//! show the result as a labeled scatter plot.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod embed;
pub mod error;
pub mod pipeline;
pub mod scene;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

pub use error::{KernelError, Result};
