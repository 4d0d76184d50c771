use std::io::{self, Write};

use anyhow::Result;
use colored::{ColoredString, Colorize};

use crate::game::effect::Narration;
use crate::game::scenario::{Line, Tone};

const HEART: &str = "\u{2665}";

const TITLE_ART: &str = r"
   _      _                         _
  | |    | |                       | |
  | |    | | ___  _ __   ___  _ __| |_
  | |    | |/ _ \| '_ \ / _ \| '__| __|
  | |____| | (_) | | | | (_) | |  | |_
  |______|_|\___/|_| |_|\___/|_|   \__|
";

const GAME_OVER_ART: &str = "
  ███████╗██╗   ██╗██████╗ ██████╗ ██╗   ██╗███████╗
  ██╔════╝██║   ██║██╔══██╗██╔══██╗██║   ██║██╔════╝
  ███████╗██║   ██║██████╔╝██████╔╝██║   ██║███████╗
  ╚════██║██║   ██║██╔═══╝ ██╔═══╝ ██║   ██║╚════██║
  ███████║╚██████╔╝██║     ██║     ╚██████╔╝███████║
  ╚══════╝ ╚═════╝ ╚═╝     ╚═╝      ╚═════╝ ╚══════╝
  ";

/// Colourised console output for everything that is not a prompt.
pub struct Renderer<W> {
    out: W,
    max_health: u8,
}

impl Renderer<io::Stdout> {
    pub fn stdout(max_health: u8) -> Self {
        Self::new(io::stdout(), max_health)
    }
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, max_health: u8) -> Self {
        Self { out, max_health }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn welcome(&mut self) -> Result<()> {
        writeln!(self.out, "{}", "*********************************************".blue())?;
        writeln!(self.out, "{}", "*               The Adventure                *".blue())?;
        writeln!(self.out, "{}\n", "*********************************************".blue())?;
        write!(
            self.out,
            "{}",
            "Welcome to The Adventure! You wake up in a dark room.".yellow()
        )?;
        writeln!(self.out, "{}", TITLE_ART.yellow())?;
        Ok(())
    }

    pub fn narrate(&mut self, narration: &Narration) -> Result<()> {
        match narration {
            Narration::Say(line) => writeln!(self.out, "{}", paint(line))?,
            Narration::HealthLost { remaining } => writeln!(
                self.out,
                "{}{}",
                "You lost 1 health point. Health remaining: ".red(),
                self.health_bar(*remaining)
            )?,
        }
        Ok(())
    }

    pub fn invalid_choice(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "{}",
            "Invalid choice! Please select a valid option.".red()
        )?;
        Ok(())
    }

    pub fn game_over(&mut self) -> Result<()> {
        writeln!(self.out, "{}", GAME_OVER_ART.red())?;
        writeln!(self.out, "\n{}\n", "Game Over!".on_bright_red())?;
        Ok(())
    }

    pub fn farewell(&mut self) -> Result<()> {
        writeln!(self.out, "{}", "\nThanks for playing!".green())?;
        self.out.flush()?;
        Ok(())
    }

    /// Remaining hearts in red, lost ones in gray.
    fn health_bar(&self, health: u8) -> String {
        let health = health.min(self.max_health);
        let lost = self.max_health - health;
        format!(
            "{}{}",
            HEART.repeat(health.into()).as_str().red(),
            HEART.repeat(lost.into()).as_str().bright_black()
        )
    }
}

fn paint(line: &Line) -> ColoredString {
    match line.tone {
        Tone::Info => line.text.yellow(),
        Tone::Good => line.text.green(),
        Tone::Bad => line.text.red(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(f: impl FnOnce(&mut Renderer<Vec<u8>>) -> Result<()>) -> String {
        colored::control::set_override(false);
        let mut renderer = Renderer::new(Vec::new(), 5);
        f(&mut renderer).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn health_bar_shows_remaining_and_lost_hearts() {
        let out = rendered(|r| r.narrate(&Narration::HealthLost { remaining: 3 }));
        assert_eq!(
            out,
            "You lost 1 health point. Health remaining: \u{2665}\u{2665}\u{2665}\u{2665}\u{2665}\n"
        );
        assert_eq!(out.matches(HEART).count(), 5);
    }

    #[test]
    fn narration_prints_the_line() {
        let out = rendered(|r| r.narrate(&Narration::Say(Line::good("You take the key."))));
        assert_eq!(out, "You take the key.\n");
    }

    #[test]
    fn game_over_banner() {
        let out = rendered(|r| r.game_over());
        assert!(out.contains("Game Over!"));
        assert!(out.contains("███████╗██╗"));
    }
}
