use anyhow::Result;
use clap::Parser;
use launcher_icons::config::Config;
use launcher_icons::resize::{self, ResizeOutcome};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "launcher-icons")]
#[command(about = "Generate Android launcher icons from a source logo", long_about = None)]
struct Cli {
    /// Source logo. Defaults to logoapp.png or the configured source
    #[arg(short, long)]
    source: Option<PathBuf>,
    /// Android res directory that receives the mipmap-* folders
    #[arg(short, long)]
    res_dir: Option<PathBuf>,
    /// YAML settings file (icons.yaml in the working directory is used if present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let source = cli.source.unwrap_or(config.source);
    let res_dir = cli.res_dir.unwrap_or(config.res_dir);

    match resize::create_icons(&source, &res_dir)? {
        ResizeOutcome::Generated(pairs) => {
            println!("✅ Wrote {} icons to {}", pairs.len() * 2, res_dir.display());
        }
        // Already reported; nothing was written
        ResizeOutcome::SourceMissing(_) => {}
    }

    Ok(())
}
