use anyhow::Context as _;
use clap::Parser;
use tracing::{debug, info};
use tracing_unwrap::ResultExt;

use endevina::{
    config::Config,
    frontend,
    games::wordle::{messages, words_list, Game, ValidationMode},
    logging, Cli,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(path) = dotenvy::dotenv() {
        // tracing isn't up yet
        eprintln!("loaded environment from {}", path.display());
    }

    logging::init_tracing();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("loading config")?;

    if let Some(flavor_text) = config.flavor_text() {
        info!("{flavor_text}")
    }

    if !cli.command().is_play() {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    // validated when the config was loaded
    let rounds = config.rounds().expect_or_log("round table should be valid");

    if !cli.json {
        println!("{}", messages::LOADING_DICTIONARY);
    }

    let outcome = words_list::load(&words_list::Fetcher::new(), &config.dictionary.sources).await;
    debug!(words = outcome.words.len(), source = ?outcome.loaded_from);

    let mut game = Game::from_load(rounds, outcome).with_round_delay(config.round_delay());

    if cli.accept_any {
        game.set_mode(ValidationMode::AcceptAny);
    }

    let options = frontend::Options {
        json: cli.json,
        share_title: config.share_title.clone(),
    };

    frontend::run(game, options).await?;

    Ok(())
}
