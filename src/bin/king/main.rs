//! Hot-seat terminal shell for King of Cards.
//!
//! Collects the setup (player count, names, starting life), prints the
//! rules, then plays the game with everyone sharing one terminal.

mod render;

use std::error::Error;

use clap::Parser;
use colored::Colorize;
use dialoguer::Input;

use king_of_cards::core::{
    validate_life, validate_name, validate_player_count, GameConfig, DEFAULT_LIFE,
};
use king_of_cards::rules::{Game, RULES};

use render::Terminal;

#[derive(Parser, Debug)]
#[command(author, version, about = "A hot-seat elimination card game for 2 to 20 players")]
struct Args {
    /// Seed the shuffles, to replay a game
    #[arg(long)]
    seed: Option<u64>,

    /// Number of players (2 to 20), skips the prompt
    #[arg(long)]
    players: Option<usize>,

    /// Starting life for every player (2 to 10), skips the prompt
    #[arg(long)]
    life: Option<u32>,

    /// Print engine logs (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    render::banner();
    println!("{}", "RULES".bold().yellow());
    println!("{RULES}");

    let count = match args.players {
        Some(count) => {
            validate_player_count(count)?;
            count
        }
        None => Input::<usize>::new()
            .with_prompt("Number of players")
            .validate_with(|count: &usize| validate_player_count(*count))
            .interact_text()?,
    };

    let mut names = Vec::with_capacity(count);
    for i in 0..count {
        let name = Input::<String>::new()
            .with_prompt(format!("Player {} name", i + 1))
            .validate_with(|name: &String| validate_name(name))
            .interact_text()?;
        names.push(name);
    }

    let life = match args.life {
        Some(life) => {
            validate_life(life)?;
            life
        }
        None => Input::<u32>::new()
            .with_prompt("Starting life")
            .default(DEFAULT_LIFE)
            .validate_with(|life: &u32| validate_life(*life))
            .interact_text()?,
    };

    let mut config = GameConfig::new(names).with_starting_life(life);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut game = Game::new(&config)?;
    render::roll_call(game.state());
    println!("{} {}", "Seed:".dimmed(), game.seed().to_string().dimmed());

    game.play(&mut Terminal);
    Ok(())
}
