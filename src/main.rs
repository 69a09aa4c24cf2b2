use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

use cardgen::cli::Args;
use cardgen::config::Settings;
use cardgen::render::ScriptGenerator;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    let settings = Settings::from_args(&args);

    if settings.debug {
        let geometry = settings
            .recalculate()
            .with_context(|| "Invalid card configuration")?;
        println!("{}", settings);
        println!("{}", geometry);
    }

    let command_line: Vec<String> = std::env::args().collect();
    let (script, stats) = ScriptGenerator::new(&settings)
        .render_with_stats(&command_line)
        .with_context(|| "Failed to generate script")?;

    log::info!(
        "Generated {} cards and {} jokers ({} without artwork)",
        stats.cards,
        stats.jokers,
        stats.fallback_jokers
    );

    // Write output
    let script_path = &settings.script_filename;
    fs::write(script_path, script)
        .with_context(|| format!("Failed to write script file: {}", script_path.display()))?;

    make_executable(script_path)
        .with_context(|| format!("Failed to make {} executable", script_path.display()))?;

    println!("Successfully wrote script to {}", script_path.display());

    Ok(())
}

#[cfg(unix)]
fn make_executable(path: &std::path::Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
}

#[cfg(not(unix))]
fn make_executable(_path: &std::path::Path) -> std::io::Result<()> {
    Ok(())
}
