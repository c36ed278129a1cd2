//! End-to-end scenarios with stacked decks.
//!
//! Each test fixes the deal with `Game::stack_next_round` so the outcome of
//! the first turns is known in advance.

use king_of_cards::cards::{Card, Deck, Rank, Suit};
use king_of_cards::core::{DecisionRequest, FixedAnswer, GameConfig, GameRng, GameState, PlayerId, Roster};
use king_of_cards::effects::{EffectEvent, GameEvent};
use king_of_cards::rules::{Game, Progress, VictoryKind};

fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn game(names: &[&str], life: u32) -> Game {
    let config = GameConfig::new(names.iter().copied())
        .with_starting_life(life)
        .with_seed(42);
    Game::new(&config).unwrap()
}

/// Ace as the first player's face-up card.
#[test]
fn test_ace_puts_life_on_the_field() {
    let mut game = game(&["Ada", "Bo"], 5);
    game.stack_next_round(
        Deck::stacked(&[
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Clubs, Rank::Two),
            card(Suit::Diamonds, Rank::Three),
            card(Suit::Spades, Rank::Four),
        ]),
        0,
    );

    let progress = game.advance();

    assert_eq!(progress, Progress::Decision(DecisionRequest::reveal(PlayerId::new(0))));
    assert_eq!(game.state().player(PlayerId::new(0)).life, 4);
    assert_eq!(game.state().player(PlayerId::new(1)).life, 5);
    assert_eq!(game.state().pool, 1);

    let events = game.drain_events();
    assert!(events.contains(&GameEvent::Effect(EffectEvent::AceDeposit {
        actor: PlayerId::new(0),
        lost: 1,
        pool: 1,
    })));
}

/// Seven exposes the next player's hidden card and resolves it for them.
#[test]
fn test_seven_resolves_next_players_hidden_card() {
    let mut game = game(&["Ada", "Bo", "Cy"], 5);
    let hidden_ace = card(Suit::Clubs, Rank::Ace);
    game.stack_next_round(
        Deck::stacked(&[
            card(Suit::Hearts, Rank::Seven),
            card(Suit::Hearts, Rank::Two),
            card(Suit::Clubs, Rank::Three),
            hidden_ace,
            card(Suit::Spades, Rank::Four),
            card(Suit::Spades, Rank::Five),
        ]),
        0,
    );

    game.advance();

    let bo = game.state().player(PlayerId::new(1));
    assert!(bo.dealt_hand().secondary_revealed);
    assert_eq!(bo.life, 4);
    assert_eq!(game.state().player(PlayerId::new(0)).life, 5);
    assert_eq!(game.state().pool, 1);

    let effects: Vec<EffectEvent> = game
        .drain_events()
        .into_iter()
        .filter_map(|e| match e {
            GameEvent::Effect(effect) => Some(effect),
            _ => None,
        })
        .collect();
    assert_eq!(
        effects,
        vec![
            EffectEvent::SevenReveal {
                actor: PlayerId::new(0),
                target: PlayerId::new(1),
                card: hidden_ace,
            },
            EffectEvent::AceDeposit {
                actor: PlayerId::new(1),
                lost: 1,
                pool: 1,
            },
        ]
    );
}

/// Revealing a hidden card and then declining its effect still spends it:
/// a later Seven aimed at that player fizzles.
#[test]
fn test_revealed_but_unapplied_card_blocks_seven() {
    let mut game = game(&["Ada", "Bo", "Cy"], 5);
    let hidden_ace = card(Suit::Clubs, Rank::Ace);
    game.stack_next_round(
        Deck::stacked(&[
            card(Suit::Hearts, Rank::Two),
            hidden_ace,
            card(Suit::Clubs, Rank::Three),
            card(Suit::Clubs, Rank::Four),
            card(Suit::Spades, Rank::Seven),
            card(Suit::Spades, Rank::Five),
        ]),
        0,
    );
    let (ada, bo, cy) = (PlayerId::new(0), PlayerId::new(1), PlayerId::new(2));

    assert_eq!(game.advance(), Progress::Decision(DecisionRequest::reveal(ada)));
    game.answer(true).unwrap();
    assert!(game.state().player(ada).dealt_hand().secondary_revealed);

    assert_eq!(game.advance(), Progress::Decision(DecisionRequest::apply(ada, hidden_ace)));
    game.answer(false).unwrap();

    assert_eq!(game.advance(), Progress::Decision(DecisionRequest::reveal(bo)));
    game.answer(false).unwrap();

    assert_eq!(game.advance(), Progress::Decision(DecisionRequest::reveal(cy)));

    assert_eq!(game.state().player(ada).life, 5);
    assert_eq!(game.state().pool, 0);
    let events = game.drain_events();
    assert!(events.contains(&GameEvent::Revealed { player: ada, card: hidden_ace }));
    assert!(events.contains(&GameEvent::EffectDeclined { player: ada }));
    assert!(events.contains(&GameEvent::Effect(EffectEvent::SevenFizzle { actor: cy, target: ada })));
    assert!(!events
        .iter()
        .any(|e| matches!(e, GameEvent::Effect(EffectEvent::AceDeposit { .. }))));
}

/// Queen in a four-player game gives a life point two seats ahead.
#[test]
fn test_queen_gives_two_seats_ahead() {
    let mut game = game(&["Ada", "Bo", "Cy", "Di"], 5);
    game.stack_next_round(
        Deck::stacked(&[
            card(Suit::Hearts, Rank::Queen),
            card(Suit::Hearts, Rank::Two),
            card(Suit::Clubs, Rank::Three),
            card(Suit::Clubs, Rank::Four),
            card(Suit::Diamonds, Rank::Five),
            card(Suit::Diamonds, Rank::Six),
            card(Suit::Spades, Rank::Two),
            card(Suit::Spades, Rank::Three),
        ]),
        2,
    );

    let progress = game.advance();

    assert_eq!(progress, Progress::Decision(DecisionRequest::reveal(PlayerId::new(2))));
    let lives: Vec<u32> = game.state().roster.players().iter().map(|p| p.life).collect();
    assert_eq!(lives, vec![6, 5, 4, 5]);
    assert_eq!(game.state().pool, 0);
}

/// Everyone falls in the same sweep: the last one swept out wins.
#[test]
fn test_everyone_eliminated_last_to_fall_wins() {
    let state = GameState::new(Roster::new(["Ada", "Bo"], 1));
    let mut game = Game::with_state(state, GameRng::new(0));

    // Bo plays first, but Ada sits first and is swept out first
    game.stack_next_round(
        Deck::stacked(&[
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Hearts, Rank::Two),
            card(Suit::Clubs, Rank::Ace),
            card(Suit::Clubs, Rank::Three),
        ]),
        1,
    );

    let result = game.play(&mut FixedAnswer(false));

    assert_eq!(result.winner, PlayerId::new(1));
    assert_eq!(result.kind, VictoryKind::LastEliminated);
    assert_eq!(result.rounds, 1);
    assert_eq!(game.state().active_count(), 0);
    assert_eq!(game.state().last_eliminated, Some(PlayerId::new(1)));
    assert_eq!(game.state().pool, 2);
    assert_eq!(game.state().name(result.winner), "Bo");
}

/// Same ending through the step-by-step interface, checking the event order.
#[test]
fn test_everyone_eliminated_event_order() {
    let state = GameState::new(Roster::new(["Ada", "Bo", "Cy"], 1));
    let mut game = Game::with_state(state, GameRng::new(0));
    game.stack_next_round(
        Deck::stacked(&[
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Hearts, Rank::Two),
            card(Suit::Clubs, Rank::Ace),
            card(Suit::Clubs, Rank::Three),
            card(Suit::Spades, Rank::Ace),
            card(Suit::Spades, Rank::Four),
        ]),
        0,
    );

    let result = loop {
        match game.advance() {
            Progress::Decision(_) => game.answer(false).unwrap(),
            Progress::Finished(result) => break result,
        }
    };

    let tail: Vec<GameEvent> = game
        .drain_events()
        .into_iter()
        .skip_while(|e| !matches!(e, GameEvent::RoundEnded { .. }))
        .collect();
    assert_eq!(
        tail,
        vec![
            GameEvent::RoundEnded { round: 1 },
            GameEvent::Eliminated { player: PlayerId::new(0) },
            GameEvent::Eliminated { player: PlayerId::new(1) },
            GameEvent::Eliminated { player: PlayerId::new(2) },
            GameEvent::GameOver(result.clone()),
        ]
    );
    assert_eq!(result.winner, PlayerId::new(2));
}

/// A sole survivor wins outright.
#[test]
fn test_last_standing_wins() {
    let mut state = GameState::new(Roster::new(["Ada", "Bo", "Cy"], 3));
    state.roster.player_mut(PlayerId::new(0)).life = 1;
    state.roster.player_mut(PlayerId::new(2)).life = 1;
    let mut game = Game::with_state(state, GameRng::new(0));

    // Ada and Cy each play an Ace, Bo's cards do nothing
    game.stack_next_round(
        Deck::stacked(&[
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Hearts, Rank::Two),
            card(Suit::Clubs, Rank::Five),
            card(Suit::Clubs, Rank::Three),
            card(Suit::Spades, Rank::Ace),
            card(Suit::Spades, Rank::Four),
        ]),
        0,
    );

    let result = game.play(&mut FixedAnswer(false));

    assert_eq!(result.winner, PlayerId::new(1));
    assert_eq!(result.kind, VictoryKind::LastStanding);
    assert_eq!(game.state().player(PlayerId::new(1)).life, 3);
    assert_eq!(game.state().pool, 2);
    assert_eq!(game.state().last_eliminated, Some(PlayerId::new(2)));
}
