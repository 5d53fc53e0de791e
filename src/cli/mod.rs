use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(name = "endevina", about = "Catalan word-guessing game in three rounds")]
pub struct Cli {
    /// TOML config file. Defaults to `endevina.toml` if present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Start with dictionary validation switched off.
    #[arg(long)]
    pub accept_any: bool,

    /// Print every snapshot as a JSON line instead of drawing the board.
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(clap::Subcommand, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print the resolved configuration and exit.
    Config,

    #[default]
    Play,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.unwrap_or_default()
    }
}

impl Command {
    pub fn is_play(&self) -> bool {
        matches!(self, Self::Play)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command};

    #[test]
    fn plays_by_default() {
        let cli = Cli::parse_from(["endevina"]);

        assert!(cli.command().is_play());
        assert!(!cli.accept_any);
    }

    #[test]
    fn flags_and_subcommand() {
        let cli = Cli::parse_from(["endevina", "--accept-any", "--config", "a.toml", "config"]);

        assert_eq!(cli.command(), Command::Config);
        assert!(cli.accept_any);
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("a.toml")));
    }
}
