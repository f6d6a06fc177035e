use anyhow::Context;
use clap::Parser;
use smoothdraw::script::Script;
use smoothdraw::{Config, DrawingSession};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "smoothdraw")]
#[command(version, about = "Freehand drawing surface with smoothed strokes")]
struct Cli {
    /// Replay a session script (TOML list of pointer and toolbar events)
    #[arg(long, short = 's', value_name = "PATH")]
    script: Option<PathBuf>,

    /// Write the final drawing to this PNG instead of the export directory
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Use this config file instead of ~/.config/smoothdraw/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(script_path) = cli.script else {
        println!("smoothdraw: Freehand drawing surface with smoothed strokes");
        println!();
        println!("Usage:");
        println!("  smoothdraw --script session.toml              Replay and export to the configured directory");
        println!("  smoothdraw --script session.toml -o out.png   Replay and export to out.png");
        println!("  smoothdraw --help                             Show help");
        return Ok(());
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let script = Script::load(&script_path)?;
    let mut session =
        DrawingSession::from_config(&config).context("Drawing surface unavailable")?;

    let base_dir = script_path.parent().unwrap_or(Path::new("."));
    let exported = script.replay(&mut session, base_dir, &config.export)?;
    log::debug!("Script exported {} file(s)", exported.len());

    let saved = match &cli.output {
        Some(path) => session.save_to(path)?,
        None => session.save(&config.export)?,
    };
    println!("{}", saved.display());

    Ok(())
}
