use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "balance-assets",
    about = "Generate the app icons and social preview image from assets/icon.png"
)]
struct Args {
    /// Project root containing the `assets` directory.
    #[clap(value_name = "ROOT", default_value = ".")]
    root: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let root = std::path::absolute(&args.root)
        .with_context(|| format!("Can't resolve project root {}", args.root.display()))?;

    let written = balance_assets::generate_all(&root)?;

    println!("Generated:");
    for path in written {
        println!("- {}", path.display());
    }

    Ok(())
}
