//! Round orchestration and game loop tests.
//!
//! These drive whole games through `Game::play` and `Game::advance` and
//! check the bookkeeping that spans rounds: turn counts, the persistent
//! pool, seat renumbering, and replay by seed.

use king_of_cards::cards::{Card, Deck, Rank, Suit};
use king_of_cards::core::{
    DecisionMaker, DecisionRequest, FixedAnswer, GameConfig, GameRng, GameState, PlayerId, Roster,
};
use king_of_cards::effects::GameEvent;
use king_of_cards::rules::{Game, GameError, Progress, VictoryKind};

/// Answers in a fixed repeating pattern and records every event.
struct Recorder {
    pattern: Vec<bool>,
    asked: usize,
    events: Vec<GameEvent>,
}

impl Recorder {
    fn new(pattern: &[bool]) -> Self {
        Self {
            pattern: pattern.to_vec(),
            asked: 0,
            events: Vec::new(),
        }
    }
}

impl DecisionMaker for Recorder {
    fn decide(&mut self, _state: &GameState, _request: &DecisionRequest) -> bool {
        let answer = self.pattern[self.asked % self.pattern.len()];
        self.asked += 1;
        answer
    }

    fn notify(&mut self, _state: &GameState, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

fn names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("p{i}")).collect()
}

fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

#[test]
fn test_games_finish_for_every_table_size() {
    for n in 2..=20 {
        for pattern in [&[true][..], &[false], &[true, false, false]] {
            let config = GameConfig::new(names(n)).with_seed(n as u64);
            let mut game = Game::new(&config).unwrap();
            let mut recorder = Recorder::new(pattern);

            let result = game.play(&mut recorder);

            assert!(result.winner.index() < n);
            assert!(result.rounds >= 1);
            assert!(game.state().active_count() <= 1);
            assert_eq!(recorder.events.last(), Some(&GameEvent::GameOver(result.clone())));
            match result.kind {
                VictoryKind::LastStanding => {
                    assert_eq!(game.state().roster.active(), &[result.winner]);
                }
                VictoryKind::LastEliminated => {
                    assert!(game.state().roster.is_empty());
                    assert_eq!(game.state().last_eliminated, Some(result.winner));
                }
            }
        }
    }
}

#[test]
fn test_every_active_player_takes_one_turn_per_round() {
    let n = 8;
    let config = GameConfig::new(names(n)).with_seed(2024);
    let mut game = Game::new(&config).unwrap();
    let mut recorder = Recorder::new(&[true, true, false]);
    game.play(&mut recorder);

    let mut active = n;
    let mut turns = 0;
    let mut rounds = 0;
    for event in &recorder.events {
        match event {
            GameEvent::RoundStarted { .. } => {
                turns = 0;
                rounds += 1;
            }
            GameEvent::TurnStarted { .. } => turns += 1,
            GameEvent::RoundEnded { .. } => assert_eq!(turns, active),
            GameEvent::Eliminated { .. } => active -= 1,
            _ => {}
        }
    }
    assert_eq!(rounds, game.result().unwrap().rounds);
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed: u64| {
        let config = GameConfig::new(names(5)).with_seed(seed);
        let mut game = Game::new(&config).unwrap();
        let mut recorder = Recorder::new(&[true, false]);
        let result = game.play(&mut recorder);
        (result, recorder.events)
    };

    let (first, first_events) = play(77);
    let (second, second_events) = play(77);

    assert_eq!(first, second);
    assert_eq!(first_events, second_events);
}

#[test]
fn test_pool_carries_over_to_next_round() {
    let config = GameConfig::new(["Ada", "Bo"]).with_seed(1);
    let mut game = Game::new(&config).unwrap();

    // Round 1: Ada's Ace puts a point on the field
    game.stack_next_round(
        Deck::stacked(&[
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Hearts, Rank::Two),
            card(Suit::Clubs, Rank::Three),
            card(Suit::Clubs, Rank::Four),
        ]),
        0,
    );
    assert_eq!(game.advance(), Progress::Decision(DecisionRequest::reveal(PlayerId::new(0))));

    // Round 2: Ada's King takes it back
    game.stack_next_round(
        Deck::stacked(&[
            card(Suit::Hearts, Rank::King),
            card(Suit::Hearts, Rank::Three),
            card(Suit::Clubs, Rank::Five),
            card(Suit::Clubs, Rank::Six),
        ]),
        0,
    );
    game.answer(false).unwrap();
    assert_eq!(game.advance(), Progress::Decision(DecisionRequest::reveal(PlayerId::new(1))));
    game.answer(false).unwrap();
    assert_eq!(game.advance(), Progress::Decision(DecisionRequest::reveal(PlayerId::new(0))));

    assert_eq!(game.state().round, 2);
    assert_eq!(game.state().pool, 0);
    assert_eq!(game.state().player(PlayerId::new(0)).life, 5);

    let events = game.drain_events();
    assert!(events.contains(&GameEvent::RoundStarted { round: 2, pool: 1 }));
}

#[test]
fn test_survivors_are_reseated_after_a_sweep() {
    let mut state = GameState::new(Roster::new(["Ada", "Bo", "Cy"], 5));
    state.roster.player_mut(PlayerId::new(0)).life = 1;
    let mut game = Game::with_state(state, GameRng::new(3));

    game.stack_next_round(
        Deck::stacked(&[
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Hearts, Rank::Two),
            card(Suit::Clubs, Rank::Three),
            card(Suit::Clubs, Rank::Four),
            card(Suit::Spades, Rank::Five),
            card(Suit::Spades, Rank::Six),
        ]),
        0,
    );
    assert!(matches!(game.advance(), Progress::Decision(_)));

    // Round 2 is dealt to the two survivors, Cy (now seat 1) first
    game.stack_next_round(
        Deck::stacked(&[
            card(Suit::Diamonds, Rank::Two),
            card(Suit::Diamonds, Rank::Three),
            card(Suit::Diamonds, Rank::Four),
            card(Suit::Diamonds, Rank::Five),
        ]),
        1,
    );
    for _ in 0..2 {
        game.answer(false).unwrap();
        assert!(matches!(game.advance(), Progress::Decision(_)));
    }
    game.answer(false).unwrap();

    assert_eq!(
        game.advance(),
        Progress::Decision(DecisionRequest::reveal(PlayerId::new(2)))
    );

    let state = game.state();
    assert_eq!(state.round, 2);
    assert_eq!(state.roster.active(), &[PlayerId::new(1), PlayerId::new(2)]);
    assert_eq!(state.player(PlayerId::new(0)).seat, None);
    assert_eq!(state.player(PlayerId::new(1)).seat, Some(0));
    assert_eq!(state.player(PlayerId::new(2)).seat, Some(1));
    assert!(game
        .drain_events()
        .contains(&GameEvent::Eliminated { player: PlayerId::new(0) }));
}

#[test]
fn test_decision_protocol_errors() {
    let config = GameConfig::new(["Ada", "Bo"]).with_seed(9);
    let mut game = Game::new(&config).unwrap();

    assert_eq!(game.answer(true), Err(GameError::NoPendingDecision));

    game.play(&mut FixedAnswer(true));
    assert_eq!(game.answer(true), Err(GameError::GameOver));
    assert_eq!(GameError::GameOver.to_string(), "the game is already over");
}

#[test]
fn test_play_after_advance_picks_up_mid_turn() {
    let config = GameConfig::new(names(4)).with_seed(12);
    let mut game = Game::new(&config).unwrap();

    assert!(matches!(game.advance(), Progress::Decision(_)));
    game.drain_events();

    let result = game.play(&mut FixedAnswer(false));
    assert_eq!(game.result(), Some(&result));
    assert!(game.is_over());
}
