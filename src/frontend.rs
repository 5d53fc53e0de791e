//! Line-based terminal frontend. Each line typed is either a word (its letters
//! followed by Enter) or a `:command`.

use std::{fmt::Write as _, future, pin::Pin};

use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
    time::Sleep,
};
use tracing::{debug, info};

use crate::{
    errors::Result,
    games::wordle::{
        game::Tile, messages, AsEmoji, Game, Input, Phase, ScheduledAdvance, Snapshot,
        ValidationMode, KEY_ROWS,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Input(Input),
    Share,
    Restart,
    ToggleValidation,
    Dismiss,
    Help,
    Quit,
}

pub const HELP: &str = "Escriu una paraula i prem Enter. Ordres: :del, :share, :reset, :validacio, :ok, :help, :quit";

pub fn parse_line(line: &str) -> Vec<Command> {
    let line = line.trim();

    if let Some(command) = line.strip_prefix(':') {
        let command = match command.trim() {
            "del" | "d" => Command::Input(Input::Delete),
            "share" | "s" => Command::Share,
            "reset" | "r" => Command::Restart,
            "validacio" | "v" => Command::ToggleValidation,
            "ok" | "" => Command::Dismiss,
            "quit" | "q" => Command::Quit,
            _ => Command::Help,
        };

        return vec![command];
    }

    line.chars()
        .filter_map(|ch| Input::from_key(ch.encode_utf8(&mut [0; 4])))
        .chain([Input::Submit])
        .map(Command::Input)
        .collect()
}

fn tile(tile: &Tile) -> String {
    match (tile.letter, tile.state) {
        (Some(letter), Some(state)) => format!("{}{}", letter.to_uppercase(), state.as_emoji()),
        (Some(letter), None) => format!("{}  ", letter.to_uppercase()),
        (None, _) => "_  ".to_owned(),
    }
}

/// Draws a snapshot as plain text.
pub fn render(snapshot: &Snapshot) -> String {
    let mut out = String::new();

    if let Some(summary) = &snapshot.summary {
        let _ = writeln!(out, "{}", summary.title);
        let _ = writeln!(out, "{}", summary.message);
        let _ = writeln!(out, "(:reset per tornar a comencar)");
        return out;
    }

    let validation = match snapshot.validation {
        ValidationMode::Dictionary => "activada",
        ValidationMode::AcceptAny => "desactivada",
    };
    let _ = writeln!(
        out,
        "Ronda {}/{}  Validacio: {validation}",
        snapshot.round, snapshot.total_rounds
    );

    for row in &snapshot.rows {
        let tiles: Vec<String> = row.iter().map(tile).collect();
        let _ = writeln!(out, "  {}", tiles.join(" "));
    }

    out.push('\n');
    for keys in KEY_ROWS {
        let keys: Vec<String> = keys
            .iter()
            .map(|key| {
                let state = key
                    .chars()
                    .next()
                    .filter(|_| key.chars().count() == 1)
                    .and_then(|letter| snapshot.keyboard.get(letter));

                match state {
                    Some(state) => format!("{}{}", key.to_uppercase(), state.as_emoji()),
                    None => key.to_uppercase(),
                }
            })
            .collect();
        let _ = writeln!(out, "  {}", keys.join(" "));
    }

    if let Some(message) = &snapshot.message {
        let _ = writeln!(out, "\n{message}");
    }

    if let Some(overlay) = &snapshot.overlay {
        let _ = writeln!(out, "\n*** {} ***\n{}\n(:ok per continuar)", overlay.title, overlay.message);
    }

    out
}

#[derive(Debug, Clone)]
pub struct Options {
    pub json: bool,
    pub share_title: String,
}

type Pending = Option<(ScheduledAdvance, Pin<Box<Sleep>>)>;

async fn next_advance(pending: &mut Pending) -> ScheduledAdvance {
    match pending {
        Some((advance, sleep)) => {
            sleep.as_mut().await;
            *advance
        }
        None => future::pending().await,
    }
}

async fn draw(game: &Game, options: &Options) -> Result<()> {
    let snapshot = game.snapshot();
    let text = if options.json {
        serde_json::to_string(&snapshot)? + "\n"
    } else {
        render(&snapshot)
    };

    let mut stdout = tokio::io::stdout();
    stdout.write_all(text.as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}

async fn share(game: &mut Game, options: &Options) {
    let text = game.share_text(&options.share_title) + "\n";

    let mut stdout = tokio::io::stdout();
    let written = async {
        stdout.write_all(text.as_bytes()).await?;
        stdout.flush().await
    }
    .await;

    match written {
        Ok(()) => game.notify(messages::COPIED),
        Err(err) => {
            debug!("could not write share text: {err}");
            game.notify(messages::COPY_FAILED);
        }
    }
}

/// Plays until stdin closes or `:quit`. Round changes fire after their delay
/// even while the player is idle.
pub async fn run(mut game: Game, options: Options) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut pending: Pending = None;

    draw(&game, &options).await?;

    loop {
        tokio::select! {
            advance = next_advance(&mut pending) => {
                pending = None;
                let result = game.advance(advance);
                debug!(?result, "advance fired");
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };

                for command in parse_line(&line) {
                    match command {
                        Command::Input(input) => {
                            if let Some(advance) = game.input(input) {
                                pending = Some((advance, Box::pin(tokio::time::sleep(advance.delay()))));
                            }
                        }
                        Command::Share => share(&mut game, &options).await,
                        Command::Restart => game.restart(),
                        Command::ToggleValidation => {
                            game.toggle_mode();
                        }
                        Command::Dismiss => game.dismiss_overlay(),
                        Command::Help => game.notify(HELP),
                        Command::Quit => {
                            info!("quitting");
                            return Ok(());
                        }
                    }
                }
            }
        }

        draw(&game, &options).await?;

        if game.phase() == Phase::Summary {
            debug!(summary = ?game.summary(), "waiting for restart");
        }
    }

    Ok(())
}
