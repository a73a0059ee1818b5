//! CLI entry point: flags in, [`AppConfig`] out, event loop until quit.

use clap::Parser;
use folio::theme::{PRESET_NAMES, get_preset};
use folio::{AppConfig, run};

#[derive(Parser)]
#[command(name = "folio", version, about = "A portfolio that lives in your terminal")]
struct Cli {
    /// Color theme.
    #[arg(long, default_value = "aurora", value_parser = parse_theme)]
    theme: String,

    /// Target frames per second.
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u64).range(1..=240))]
    fps: u64,

    /// Include the blog section.
    #[arg(long)]
    blog: bool,

    /// Seed for the particle bursts. The same seed replays the same bursts.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Skip decorative animation (counters land instantly, nothing drifts).
    #[arg(long)]
    reduced_motion: bool,
}

fn parse_theme(s: &str) -> Result<String, String> {
    if get_preset(s).is_some() {
        Ok(s.to_lowercase())
    } else {
        Err(format!(
            "unknown theme '{s}' (expected one of: {})",
            PRESET_NAMES.join(", ")
        ))
    }
}

fn main() -> std::io::Result<()> {
    let cli = Cli::parse();
    run(AppConfig {
        theme: cli.theme,
        fps: cli.fps,
        show_blog: cli.blog,
        particle_seed: cli.seed,
        reduced_motion: cli.reduced_motion,
    })
}
