use std::path::PathBuf;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use kernel_map::app::run_viewer;
use kernel_map::config::{Settings, DEFAULT_KERNEL_PATH};
use kernel_map::embed::TsneEmbedder;
use kernel_map::pipeline::build_map;
use kernel_map::state::AppState;

/// Lay out a PPMI kernel with t-SNE and show it as a labeled scatter plot.
#[derive(Parser, Debug)]
#[command(name = "kernel-map", version, about)]
struct Cli {
    /// Kernel file: count, names, flags, then the n×n matrix.
    #[arg(default_value = DEFAULT_KERNEL_PATH)]
    kernel: PathBuf,

    /// JSON settings file; command-line flags override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    perplexity: Option<f64>,

    #[arg(long)]
    max_iter: Option<usize>,

    /// Barnes-Hut angle (0 = exact gradients). Ignored with --seed.
    #[arg(long)]
    theta: Option<f64>,

    /// Pin the t-SNE random seed for a reproducible layout.
    #[arg(long)]
    seed: Option<u64>,

    /// Compute the layout and log a summary without opening a window.
    #[arg(long)]
    headless: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        let embed = &mut settings.embed;
        if let Some(p) = self.perplexity {
            embed.perplexity = p;
        }
        if let Some(it) = self.max_iter {
            embed.max_iter = it;
        }
        if let Some(theta) = self.theta {
            embed.approx_threshold = theta;
        }
        if self.seed.is_some() {
            embed.seed = self.seed;
        }
        Ok(settings)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// One-line diagnostic with the whole context chain, outermost first.
fn error_report(err: &anyhow::Error) -> String {
    format!("Error: {err:#}")
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", error_report(&e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let settings = cli.settings().context("loading settings")?;
    let style = settings.style.to_plot_style().context("resolving plot style")?;
    let embedder = TsneEmbedder::new(settings.embed);

    let map = build_map(&cli.kernel, &embedder, &style)
        .with_context(|| format!("building map from {}", cli.kernel.display()))?;

    if cli.headless {
        println!(
            "{}: {} markers ({} NSFW), bounds {:?}",
            cli.kernel.display(),
            map.scene.len(),
            map.dataset.nsfw_count(),
            map.scene.bounds()
        );
        return Ok(());
    }

    let title = format!("Kernel Map – {}", cli.kernel.display());
    let mut state = AppState::new(embedder, style);
    state.set_map(map);
    run_viewer(state, &title)
        .map_err(|e| anyhow::anyhow!(e.to_string()))
        .context("viewer failed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel_map::KernelError;

    #[test]
    fn test_error_report_shows_whole_chain_on_one_line() {
        let err = anyhow::Error::new(KernelError::Shape {
            what: "entity names".into(),
            expected: 5,
            found: 3,
        })
        .context("building map from kernel");

        assert_eq!(
            error_report(&err),
            "Error: building map from kernel: entity names: expected 5, found 3"
        );
    }

    #[test]
    fn test_cli_has_no_step_size_flag() {
        assert!(Cli::try_parse_from(["kernel-map", "--learning-rate", "10"]).is_err());
        let cli = Cli::try_parse_from(["kernel-map", "--seed", "4"]).unwrap();
        assert_eq!(cli.settings().unwrap().embed.seed, Some(4));
    }
}
