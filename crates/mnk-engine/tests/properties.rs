//! Property tests over randomly played games.

use mnk_engine::{Color, Game, GameConfig, GameError, Square, Variant};
use proptest::prelude::*;

/// One move group: the squares and the piece placed on them.
type Group = (Vec<Square>, Color);

/// Picks a legal group from `choice`, placing the opponent's piece on odd
/// choices where the variant allows it.
fn pick_group(game: &Game, choice: usize) -> Group {
    let moves = game.legal_moves();
    let needed = game.stones_to_place();
    let squares = (0..needed)
        .map(|i| moves[(choice + i) % moves.len()])
        .collect();

    let turn = game.turn();
    let variant = game.config().variant;
    let piece = if choice % 2 == 1 && variant.may_place(turn, turn.opposite()) {
        turn.opposite()
    } else {
        variant.default_piece(turn)
    };
    (squares, piece)
}

fn apply(game: &mut Game, (squares, piece): &Group) -> Result<(), GameError> {
    match squares.as_slice() {
        [square] => game.wild_move(*square, *piece),
        _ => game.make_multimove(squares),
    }
}

/// Plays moves picked by `choices` until they run out or the game ends.
fn play_out(game: &mut Game, choices: &[usize]) {
    for &choice in choices {
        if game.is_game_over() {
            break;
        }
        let group = pick_group(game, choice);
        apply(game, &group).unwrap();
    }
}

fn small_config() -> impl Strategy<Value = GameConfig> {
    (1u32..6, 1u32..6, 1u32..5, 0usize..7).prop_map(|(m, n, k, variant)| {
        let variant = match variant {
            0 => Variant::TicTacToe,
            1 => Variant::Misere,
            2 => Variant::Impartial,
            3 => Variant::Wild,
            4 => Variant::ORDER_AND_CHAOS,
            5 => Variant::CONNECT6,
            _ => Variant::Pente { max_captures: 3 },
        };
        GameConfig::tic_tac_toe(m, n, k, false).with_variant(variant)
    })
}

proptest! {
    #[test]
    fn pop_restores_previous_state(
        config in small_config(),
        choices in prop::collection::vec(any::<usize>(), 0..30),
    ) {
        let mut game = Game::new(config).unwrap();
        for &choice in &choices {
            if game.is_game_over() {
                break;
            }
            let group = pick_group(&game, choice);
            let before = game.clone();
            apply(&mut game, &group).unwrap();
            let after = game.clone();

            game.pop().unwrap();
            prop_assert_eq!(&game, &before);

            apply(&mut game, &group).unwrap();
            prop_assert_eq!(&game, &after);
        }
    }

    #[test]
    fn notation_round_trips_position(
        config in small_config(),
        choices in prop::collection::vec(any::<usize>(), 0..30),
    ) {
        let mut game = Game::new(config).unwrap();
        play_out(&mut game, &choices);

        let notation = game.to_notation().unwrap();
        let mut decoded = Game::new(config).unwrap();
        decoded.load_notation(&notation).unwrap();

        prop_assert_eq!(decoded.board(), game.board());
        prop_assert_eq!(decoded.turn(), game.turn());
        prop_assert_eq!(decoded.fullmove_number(), game.fullmove_number());
        prop_assert_eq!(decoded.to_notation().unwrap(), notation);
    }

    #[test]
    fn finite_board_always_reaches_a_result(
        config in small_config(),
        choices in prop::collection::vec(any::<usize>(), 25..40),
    ) {
        let mut game = Game::new(config).unwrap();
        while !game.is_game_over() {
            let moves = game.legal_moves();
            prop_assert!(
                moves.len() >= game.stones_to_place(),
                "undecided game with no legal move group"
            );
            let choice = choices[game.move_count() % choices.len()];
            let group = pick_group(&game, choice);
            apply(&mut game, &group).unwrap();
        }
        prop_assert!(game.result().is_some());
        prop_assert!(game.legal_moves().is_empty());
    }

    #[test]
    fn stone_count_tracks_history(
        choices in prop::collection::vec(any::<usize>(), 0..40),
    ) {
        let mut game = Game::new(GameConfig::tic_tac_toe(5, 5, 4, true)).unwrap();
        play_out(&mut game, &choices);
        prop_assert_eq!(game.board().len(), game.move_count());
        prop_assert_eq!(game.legal_moves().is_empty(), game.is_game_over());
    }
}
