//! End-to-end game flow tests.
//!
//! These tests play through whole games on the public API:
//! - Deals at every reference size
//! - Deselect, match, mismatch and win
//! - Reset and board size changes from any state

use std::collections::HashMap;
use std::time::Duration;

use memory_match::deck::Deck;
use memory_match::{
    ActionLabel, BoardSize, CardFace, CardId, FlipOutcome, FlipRejection, GameConfig,
    GameController, GameRng, PairValue, Phase, TimerQueue,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn value_counts(game: &GameController) -> HashMap<PairValue, usize> {
    let mut counts = HashMap::new();
    for card in game.deck() {
        *counts.entry(card.value).or_insert(0) += 1;
    }
    counts
}

/// Solve every pair by looking up partners in the deck.
fn solve_all(game: &mut GameController) {
    let ids = game.deck().ids();
    for id in ids {
        if game.is_solved(id) {
            continue;
        }
        let partner = game.deck().partner_of(id).expect("every card has a partner");
        game.flip_card(id);
        game.flip_card(partner);
    }
}

// =============================================================================
// Deck Generation
// =============================================================================

#[test]
fn test_deck_sizes_for_reference_boards() {
    init_logging();
    let mut game = GameController::with_seed(GameConfig::default(), 42).unwrap();

    for side in [2u8, 4, 6] {
        game.set_board_size(side);
        let size = BoardSize::new(side);

        assert_eq!(game.deck().len(), size.cell_count());
        let counts = value_counts(&game);
        assert_eq!(counts.len(), size.pair_count());
        assert!(counts.values().all(|&count| count == 2));
        for value in 1..=size.pair_count() as u32 {
            assert_eq!(counts.get(&PairValue::new(value)), Some(&2));
        }
    }
}

#[test]
fn test_two_deals_differ_in_order_only() {
    let mut game = GameController::with_seed(GameConfig::default(), 5).unwrap();
    game.set_board_size(6);
    let first_ids = game.deck().ids();
    let first_counts = value_counts(&game);

    game.reset();

    assert_eq!(game.deck().len(), first_ids.len());
    assert_eq!(value_counts(&game), first_counts);
    assert_ne!(game.deck().ids(), first_ids);
}

#[test]
fn test_same_seed_same_deals() {
    let mut a = GameController::with_seed(GameConfig::default(), 99).unwrap();
    let mut b = GameController::with_seed(GameConfig::default(), 99).unwrap();

    assert_eq!(a.deck().ids(), b.deck().ids());
    a.set_board_size(4);
    b.set_board_size(4);
    assert_eq!(a.deck().ids(), b.deck().ids());
}

#[test]
fn test_rng_state_replays_next_deal() {
    let mut game = GameController::with_seed(GameConfig::default(), 17).unwrap();
    game.reset();
    let state = game.rng_state();

    game.reset();
    let replay = GameController::with_rng(
        GameConfig::default(),
        GameRng::from_state(&state),
        TimerQueue::new(),
    )
    .unwrap();

    assert_eq!(replay.deck(), game.deck());
}

// =============================================================================
// Flip Sequencing
// =============================================================================

#[test]
fn test_double_click_returns_to_idle() {
    let mut game = GameController::with_seed(GameConfig::default(), 1).unwrap();
    let id = game.deck().at(0).unwrap().id;

    game.flip_card(id);
    assert_eq!(game.phase(), Phase::OneFlipped);

    assert_eq!(game.flip_card(id), FlipOutcome::Deselected(id));
    assert_eq!(game.phase(), Phase::Idle);
    assert!(game.selection().is_empty());
    assert!(!game.is_input_locked());
    assert!(game.pending_reset().is_none());
}

#[test]
fn test_matching_pair_is_solved_immediately() {
    let mut game = GameController::with_seed(GameConfig::default(), 1).unwrap();
    let id = game.deck().at(0).unwrap().id;
    let partner = game.deck().partner_of(id).unwrap();

    game.flip_card(id);
    let outcome = game.flip_card(partner);

    assert!(matches!(outcome, FlipOutcome::Matched { won: false, .. }));
    assert!(game.is_solved(id));
    assert!(game.is_solved(partner));
    assert!(game.selection().is_empty());
    assert!(!game.is_input_locked());
}

#[test]
fn test_mismatch_scenario_from_fixed_layout() {
    // Positions hold [1, 1, 2, 2]; flip position 0 then position 2
    let mut game = GameController::with_seed(GameConfig::default(), 1).unwrap();
    game.deal(Deck::from_values([1, 1, 2, 2]).unwrap()).unwrap();
    let pos0 = game.deck().at(0).unwrap().id;
    let pos2 = game.deck().at(2).unwrap().id;

    game.flip_card(pos0);
    let outcome = game.flip_card(pos2);

    assert!(matches!(outcome, FlipOutcome::Mismatched { .. }));
    assert!(game.is_input_locked());
    assert_eq!(game.selection().as_slice(), &[pos0, pos2]);

    let view = game.view();
    assert_eq!(view.cards[0].face, CardFace::FaceUp(PairValue::new(1)));
    assert_eq!(view.cards[2].face, CardFace::FaceUp(PairValue::new(2)));
    assert!(view.input_locked);

    game.advance(Duration::from_millis(1000));

    assert!(game.selection().is_empty());
    assert!(!game.is_input_locked());
    assert!(game.solved().is_empty());
    assert_eq!(game.view().face_up_count(), 0);
}

#[test]
fn test_custom_mismatch_delay() {
    let config = GameConfig::new().with_mismatch_delay(Duration::from_millis(250));
    let mut game = GameController::with_seed(config, 1).unwrap();
    game.deal(Deck::from_values([1, 2, 1, 2]).unwrap()).unwrap();

    game.flip_card(CardId::new(1));
    let ticket = game.flip_card(CardId::new(2)).ticket().unwrap();
    assert_eq!(game.scheduler().remaining(ticket), Some(Duration::from_millis(250)));

    assert_eq!(game.advance(Duration::from_millis(249)), 0);
    assert!(game.is_input_locked());
    assert_eq!(game.advance(Duration::from_millis(1)), 1);
    assert!(!game.is_input_locked());
}

// =============================================================================
// Winning
// =============================================================================

#[test]
fn test_two_by_two_win() {
    let mut game = GameController::with_seed(GameConfig::default(), 3).unwrap();
    assert_eq!(game.deck().len(), 4);
    assert_eq!(game.action_label(), ActionLabel::Reset);

    solve_all(&mut game);

    assert!(game.is_won());
    assert!(game.view().won);
    assert_eq!(game.view().action, ActionLabel::PlayAgain);
    assert_eq!(game.solved().len(), 4);

    let any = game.deck().at(0).unwrap().id;
    assert_eq!(game.flip_card(any), FlipOutcome::Ignored(FlipRejection::GameWon));
}

#[test]
fn test_six_by_six_win() {
    let mut game = GameController::with_seed(GameConfig::default(), 11).unwrap();
    game.set_board_size(6);

    solve_all(&mut game);

    assert!(game.is_won());
    assert_eq!(game.solved().len(), 36);
}

#[test]
fn test_play_again_after_win() {
    let mut game = GameController::with_seed(GameConfig::default(), 3).unwrap();
    solve_all(&mut game);
    assert!(game.is_won());

    game.reset();

    assert!(!game.is_won());
    assert!(game.solved().is_empty());
    assert_eq!(game.action_label(), ActionLabel::Reset);
    let id = game.deck().at(0).unwrap().id;
    assert_eq!(game.flip_card(id), FlipOutcome::FirstRevealed(id));
}

// =============================================================================
// Board Size Control
// =============================================================================

#[test]
fn test_out_of_range_size_keeps_game() {
    let mut game = GameController::with_seed(GameConfig::default(), 8).unwrap();
    let id = game.deck().at(0).unwrap().id;
    game.flip_card(id);
    let epoch = game.epoch();

    for requested in [0u8, 1, 3, 5, 7, 8, 255] {
        assert!(!game.set_board_size(requested));
    }

    assert_eq!(game.epoch(), epoch);
    assert_eq!(game.board_size(), BoardSize::new(2));
    assert_eq!(game.selection().as_slice(), &[id]);
}

#[test]
fn test_size_change_mid_game_resets() {
    let mut game = GameController::with_seed(GameConfig::default(), 8).unwrap();
    let id = game.deck().at(0).unwrap().id;
    let partner = game.deck().partner_of(id).unwrap();
    game.flip_card(id);
    game.flip_card(partner);
    assert_eq!(game.solved().len(), 2);

    assert!(game.set_board_size(4));

    assert_eq!(game.deck().len(), 16);
    assert!(game.solved().is_empty());
    assert!(game.selection().is_empty());
    assert!(!game.is_won());
    assert!(!game.is_input_locked());
}

#[test]
fn test_custom_allowed_sizes() {
    let config = GameConfig::new().with_allowed_sizes([4, 8]);
    let mut game = GameController::with_seed(config, 2).unwrap();

    assert_eq!(game.board_size(), BoardSize::new(4));
    assert!(!game.set_board_size(2));
    assert!(game.set_board_size(8));
    assert_eq!(game.deck().len(), 64);
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_render_text_tracks_state() {
    let mut game = GameController::with_seed(GameConfig::default(), 1).unwrap();
    game.deal(Deck::from_values([1, 2, 2, 1]).unwrap()).unwrap();

    assert_eq!(game.view().render_text(), " ?   ?\n ?   ?\n");

    game.flip_card(CardId::new(1));
    game.flip_card(CardId::new(4));
    game.flip_card(CardId::new(2));

    assert_eq!(game.view().render_text(), "[1]  2\n ?  [1]\n");

    game.flip_card(CardId::new(3));
    assert!(game.view().render_text().ends_with("You Won!\n"));
}
