//! Assembly of the complete `convert` script

use std::fmt::Write;

use crate::config::Settings;
use crate::error::ScriptError;
use crate::model::Suit;

use super::card::CardRenderer;
use super::joker::JokerRenderer;

/// Script summary for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScriptStats {
    pub cards: usize,
    pub jokers: usize,
    pub fallback_jokers: usize,
}

/// Builds the shell script drawing a full deck
pub struct ScriptGenerator<'a> {
    settings: &'a Settings,
}

impl<'a> ScriptGenerator<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Generate the script text.
    ///
    /// `command_line` is recorded in the script header and replayed by the
    /// refresh script; its first element is the program name.
    pub fn render(&self, command_line: &[String]) -> Result<String, ScriptError> {
        self.render_with_stats(command_line).map(|(text, _)| text)
    }

    pub fn render_with_stats(
        &self,
        command_line: &[String],
    ) -> Result<(String, ScriptStats), ScriptError> {
        let geometry = self.settings.recalculate()?;
        let mut out = String::new();
        let mut stats = ScriptStats::default();

        self.preamble(&mut out, command_line, &geometry.output_directory)?;

        let cards = CardRenderer::new(self.settings, &geometry);
        for suit in Suit::all() {
            cards.render_suit(&mut out, suit)?;
            stats.cards += 13;
        }

        let joker_settings = self.settings.for_jokers();
        let joker_geometry = joker_settings.recalculate()?;
        log::debug!("Joker geometry:\n{}", joker_geometry);

        let jokers = JokerRenderer::new(&joker_settings, &joker_geometry);
        for suit in Suit::all() {
            let style = jokers.render(&mut out, suit, stats.fallback_jokers)?;
            stats.jokers += 1;
            if style.is_fallback() {
                stats.fallback_jokers += 1;
            }
        }

        writeln!(out, "echo Output created in cards/{}/", geometry.output_directory)?;
        writeln!(out)?;

        Ok((out, stats))
    }

    fn preamble(
        &self,
        out: &mut String,
        command_line: &[String],
        output_directory: &str,
    ) -> Result<(), ScriptError> {
        let script = self.settings.script_filename.display();
        let refresh = &self.settings.refresh_filename;
        let command = command_line.join(" ");
        let program = command_line.first().map_or("cardgen", String::as_str);

        writeln!(out, "#!/bin/sh")?;
        writeln!(out)?;
        writeln!(
            out,
            "# This file was generated as \"{}\" using the following command:",
            script
        )?;
        writeln!(out, "#")?;
        writeln!(out, "#  {}", command)?;
        writeln!(out, "#")?;
        writeln!(out)?;
        writeln!(out, "# Make the directories.")?;
        writeln!(out, "mkdir -p cards")?;
        writeln!(out, "mkdir -p cards/{}", output_directory)?;
        writeln!(out)?;
        writeln!(out, "# Generate the refresh script.")?;
        writeln!(out, "cat <<EOM >cards/{}/{}", output_directory, refresh)?;
        writeln!(out, "#!/bin/sh")?;
        writeln!(out)?;
        writeln!(
            out,
            "# This file was generated using the following {} command.",
            program
        )?;
        writeln!(out, "#")?;
        writeln!(out, "cd ../../")?;
        writeln!(out, "{}", command)?;
        writeln!(out, "./{}", script)?;
        writeln!(out, "EOM")?;
        writeln!(out)?;
        writeln!(out, "chmod +x cards/{}/{}", output_directory, refresh)?;
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> Vec<String> {
        vec!["cardgen".to_string(), "-q".to_string()]
    }

    fn settings_in(dir: &tempfile::TempDir) -> Settings {
        Settings {
            asset_root: dir.path().to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn test_preamble() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(&dir);
        let text = ScriptGenerator::new(&settings).render(&command()).unwrap();

        let expected = "#!/bin/sh\n\
\n\
# This file was generated as \"draw.sh\" using the following command:\n\
#\n\
#  cardgen -q\n\
#\n\
\n\
# Make the directories.\n\
mkdir -p cards\n\
mkdir -p cards/1\n\
\n\
# Generate the refresh script.\n\
cat <<EOM >cards/1/x_refresh.sh\n\
#!/bin/sh\n\
\n\
# This file was generated using the following cardgen command.\n\
#\n\
cd ../../\n\
cardgen -q\n\
./draw.sh\n\
EOM\n\
\n\
chmod +x cards/1/x_refresh.sh\n\
\n";
        assert!(text.starts_with(expected));
    }

    #[test]
    fn test_every_card_has_a_stanza() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(&dir);
        let (text, stats) = ScriptGenerator::new(&settings)
            .render_with_stats(&command())
            .unwrap();

        assert_eq!(stats.cards, 52);
        assert_eq!(stats.jokers, 4);
        assert_eq!(stats.fallback_jokers, 4);
        assert_eq!(text.matches("convert -size").count(), 56);
        assert_eq!(text.matches("+dither -colors 256").count(), 56);
        assert!(text.contains("# Draw the Ace of Clubs as file CA.png.\n"));
        assert!(text.contains("# Draw the King of Spades as file SK.png.\n"));
        assert!(text.contains("# Draw the Spades Joker as file SJoker.png\n"));
        assert!(text.ends_with("echo Output created in cards/1/\n\n"));
    }

    #[test]
    fn test_output_directory_used_throughout() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            output_directory: Some("proof".to_string()),
            ..settings_in(&dir)
        };
        let text = ScriptGenerator::new(&settings).render(&command()).unwrap();
        assert!(text.contains("mkdir -p cards/proof\n"));
        assert!(text.contains("\tcards/proof/D10.png\n"));
        assert!(text.contains("\tcards/proof/CJoker.png\n"));
        assert!(!text.contains("cards/1/"));
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let settings = Settings {
            card_width_px: -1,
            ..Default::default()
        };
        let err = ScriptGenerator::new(&settings).render(&command()).unwrap_err();
        assert!(matches!(err, ScriptError::Config(_)));
    }
}
