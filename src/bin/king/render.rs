//! Colored terminal rendering and the interactive seat.

use colored::{ColoredString, Colorize};
use dialoguer::Confirm;

use king_of_cards::cards::{Card, Rank};
use king_of_cards::core::{DecisionKind, DecisionMaker, DecisionRequest, GameState, Player, PlayerId};
use king_of_cards::effects::{EffectEvent, GameEvent};
use king_of_cards::rules::{GameResult, VictoryKind};

const RULE: &str = "════════════════════════════════════════════════════════════════════════════════";

pub fn banner() {
    println!("{}", RULE.cyan());
    println!("{}", "                         WELCOME TO KING OF CARDS".bold().yellow());
    println!("{}", RULE.cyan());
}

/// Everyone at the table, in seat order.
pub fn roll_call(state: &GameState) {
    println!(
        "{}",
        format!("{} players, {} life each:", state.active_count(), life_of_first(state)).bold().green()
    );
    for (seat, player) in state.roster.survivors().enumerate() {
        println!("  {}) {}", seat + 1, player.name);
    }
}

fn life_of_first(state: &GameState) -> u32 {
    state.roster.survivors().next().map_or(0, |p| p.life)
}

fn card(card: Card) -> ColoredString {
    let text = format!("{} {}", card.rank.label(), card.suit.symbol());
    match card.rank {
        Rank::Ace => text.red().bold(),
        Rank::Seven => text.yellow().bold(),
        Rank::Jack | Rank::Queen => text.cyan().bold(),
        Rank::King => text.green().bold(),
        _ => text.white(),
    }
}

/// Name, seat, life and hand with the hidden card masked.
fn status_panel(player: &Player) {
    let seat = player.seat.map_or(0, |s| s + 1);
    println!("{}", "╔══════════════════════════════════════════════════════════════════════════════╗".cyan().bold());
    println!("  {} {}", "TURN OF".yellow().bold(), player.name.green().bold());
    println!(
        "  {} {:>2}   {} {}",
        "Seat:".bold(),
        seat.to_string().blue(),
        "Life:".bold(),
        player.life.to_string().red()
    );
    if let Some(hand) = player.hand.as_ref() {
        println!("  {} {}", "card 1)".bold(), card(hand.primary));
        match hand.visible_secondary() {
            Some(secondary) => println!("  {} {}", "card 2)".bold(), card(secondary)),
            None => println!("  {} {}", "card 2)".bold(), "HIDDEN".red()),
        }
    }
    println!("{}", "╚══════════════════════════════════════════════════════════════════════════════╝".cyan().bold());
}

fn effect(state: &GameState, event: &EffectEvent) {
    let name = |id: PlayerId| state.name(id).bold();
    let actor = name(event.actor());
    match *event {
        EffectEvent::AceDeposit { lost: 0, .. } => {
            println!("{}", format!("Ace! {actor} has no life left to put on the field").red());
        }
        EffectEvent::AceDeposit { pool, .. } => println!(
            "{}",
            format!("Ace! {actor} loses a life point to the field ({pool} on the field)").red()
        ),
        EffectEvent::NoEffect { card: c, .. } => println!("{} has no effect", card(c)),
        EffectEvent::SevenReveal { target, card: c, .. } => println!(
            "{}",
            format!("Seven! {actor} exposes {}'s hidden card: {}", name(target), card(c)).yellow()
        ),
        EffectEvent::SevenFizzle { target, .. } => println!(
            "{}",
            format!("Seven! {}'s hidden card is already face up", name(target)).yellow()
        ),
        EffectEvent::JackTransfer { to, .. } => println!(
            "{}",
            format!("Jack! {actor} gives a life point to {}", name(to)).cyan()
        ),
        EffectEvent::QueenNullified { .. } => {
            println!("{}", "Queen! With two players left it has no effect".red());
        }
        EffectEvent::QueenTransfer { to, .. } => println!(
            "{}",
            format!("Queen! {actor} gives a life point to {}", name(to)).cyan()
        ),
        EffectEvent::KingClaim { amount, .. } => println!(
            "{}",
            format!("King! {actor} takes all {amount} life on the field").green()
        ),
        EffectEvent::KingEmpty { .. } => println!(
            "{}",
            format!("King! The field is empty, nothing for {actor}").red()
        ),
    }
}

/// Final life totals for everyone who sat down.
fn standings(state: &GameState, result: &GameResult) {
    for player in state.roster.players() {
        let line = format!("  {:<14} {:>2}", player.name, player.life);
        if result.is_winner(player.id) {
            println!("{} {}", line.green().bold(), "winner".green());
        } else if player.is_active() {
            println!("{line}");
        } else {
            println!("{} {}", line.dimmed(), "out".red());
        }
    }
}

/// An unreadable terminal answers "no" and is logged.
fn answer_or_no(name: &str, reply: dialoguer::Result<bool>) -> bool {
    match reply {
        Ok(answer) => answer,
        Err(err) => {
            log::warn!("no answer from {name}, counting it as no: {err}");
            false
        }
    }
}

/// Everyone shares one terminal: every event is printed, every question
/// goes to whoever's turn it is.
pub struct Terminal;

impl DecisionMaker for Terminal {
    fn decide(&mut self, state: &GameState, request: &DecisionRequest) -> bool {
        let prompt = match request.kind {
            DecisionKind::Reveal => format!("{}, reveal your hidden card?", state.name(request.player)),
            DecisionKind::Apply => "Apply its effect?".to_string(),
        };
        let reply = Confirm::new().with_prompt(prompt).default(false).interact();
        answer_or_no(state.name(request.player), reply)
    }

    fn notify(&mut self, state: &GameState, event: &GameEvent) {
        match event {
            GameEvent::RoundStarted { round, pool } => {
                println!();
                println!("{}", RULE.yellow().bold());
                println!("{}", format!("                                   ROUND {round}").yellow().bold());
                println!("{}", RULE.yellow().bold());
                println!("{} {}", "                          LIFE ON THE FIELD:".bold(), pool.to_string().green());
            }
            GameEvent::FirstPlayer { player } => {
                println!("{} plays first this round", state.name(*player).green().bold());
            }
            GameEvent::TurnStarted { player } => {
                println!();
                status_panel(state.player(*player));
            }
            GameEvent::CardChecked { slot, .. } => println!("{}", format!("Checking {slot}:").cyan()),
            GameEvent::Effect(e) => effect(state, e),
            GameEvent::Revealed { player, card: c } => {
                println!("{} reveals {}", state.name(*player).bold(), card(*c));
            }
            GameEvent::CardKept { .. } => println!("{}", "The card stays face down".yellow()),
            GameEvent::EffectDeclined { .. } => {
                println!("{}", "The card stays face up without effect".yellow());
            }
            GameEvent::DefenseSpent { player } => println!(
                "{}",
                format!(
                    "{}, your hidden card was exposed before your turn. Time for revenge!",
                    state.name(*player)
                )
                .magenta()
                .bold()
            ),
            GameEvent::RoundEnded { round } => {
                println!();
                println!("{}", format!("Round {round} is over").bold());
            }
            GameEvent::Eliminated { player } => {
                println!("{}", format!("{} is out of the game", state.name(*player)).red().bold());
            }
            GameEvent::GameOver(result) => {
                println!();
                println!("{}", RULE.green().bold());
                println!("{}", "                                     VICTORY!".green().bold());
                let how = match result.kind {
                    VictoryKind::LastStanding => "last one standing",
                    VictoryKind::LastEliminated => "last to fall",
                };
                println!(
                    "{}",
                    format!(
                        "{} wins after {} round(s), {how}. Congratulations!",
                        state.name(result.winner),
                        result.rounds
                    )
                    .magenta()
                    .bold()
                );
                standings(state, result);
                println!("{}", RULE.green().bold());
            }
        }
    }
}
