pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod parser;
pub mod render;

pub use cli::Args;
pub use config::{Geometry, Settings};
pub use error::{ConfigError, LayoutError, ScriptError};
pub use model::{Card, PercentagePosition, Rank, Suit};
pub use render::{ScriptGenerator, ScriptStats};

/// High-level API for generating a deck drawing script.
///
/// This is the recommended entry point for library consumers. The geometry
/// is derived from `settings`, artwork is looked up under
/// `settings.asset_root` and the returned text is a complete `/bin/sh`
/// script; nothing is written to disk.
///
/// # Arguments
///
/// * `settings` - Card layout and artwork selection
/// * `command_line` - The invoking command, program name first. It is
///   recorded in the script and replayed by the generated refresh script.
///
/// # Example
///
/// ```no_run
/// use cardgen::{generate_script, Settings};
///
/// let settings = Settings {
///     quad: true,
///     ..Default::default()
/// };
/// let command_line: Vec<String> = std::env::args().collect();
///
/// let script = generate_script(&settings, &command_line).unwrap();
/// std::fs::write(&settings.script_filename, script).unwrap();
/// ```
pub fn generate_script(settings: &Settings, command_line: &[String]) -> Result<String, ScriptError> {
    ScriptGenerator::new(settings).render(command_line)
}
