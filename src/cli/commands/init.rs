//! Initialize the framecam configuration

use std::path::PathBuf;

use framecam::config::ServeConfig;
use framecam::output::OutputMode;
use framecam::paths;

/// Write a starter config file
pub fn init(path: Option<PathBuf>, force: bool, _mode: OutputMode) -> anyhow::Result<()> {
    let path = path.unwrap_or_else(paths::global_config);

    if path.exists() && !force {
        println!("Already initialized ({}).", path.display());
        println!("Use --force to overwrite.");
        return Ok(());
    }

    ServeConfig::default().save(&path)?;
    println!("Created {}", path.display());

    println!("\nNext steps:");
    println!("  framecam serve");
    println!(
        "  curl 'http://localhost:8886/renderimg?posX=0&posY=6&posZ=30&ortX=0&ortY=0&ortZ=0&ortW=1'"
    );

    Ok(())
}
