use anyhow::Result;
use clap::Parser;
use launcher_icons::config::Config;
use launcher_icons::heart;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "generate-heart")]
#[command(about = "Draw the gradient heart logo and derive Android launcher icons from it", long_about = None)]
struct Cli {
    /// Where to save the master logo. Defaults to the configured source
    #[arg(short, long)]
    output: Option<PathBuf>,
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

    println!("Generating heart logo...");

    let master = cli.output.unwrap_or(config.source);
    let res_dir = cli.res_dir.unwrap_or(config.res_dir);
    let pairs = heart::run(&master, &res_dir, config.master_size)?;

    println!("✅ Logo saved to {} and {} icons written to {}", master.display(), pairs.len() * 2, res_dir.display());

    Ok(())
}
