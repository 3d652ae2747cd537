//! Stable error codes exposed by the board crate.

use hexlink_board::{
    Board, BoardCoord, BoardError, Game, GameError, Piece, Player, PlayerError, RandomPlayer,
    Seat,
};
use hexlink_core::GraphError;
use rand::{SeedableRng, rngs::SmallRng};
use rstest::rstest;

#[rstest]
#[case(BoardError::InvalidDimensions { width: 0, height: 2 }, "BOARD_INVALID_DIMENSIONS")]
#[case(BoardError::TooLarge { width: usize::MAX, height: 2 }, "BOARD_TOO_LARGE")]
#[case(BoardError::OffBoard { coord: BoardCoord::new(4, 0) }, "BOARD_OFF_BOARD")]
#[case(BoardError::Occupied { coord: BoardCoord::new(0, 0) }, "BOARD_OCCUPIED")]
#[case(BoardError::Graph { source: GraphError::EmptyGraph }, "BOARD_GRAPH")]
fn board_errors_expose_stable_codes(#[case] err: BoardError, #[case] code: &str) {
    assert_eq!(err.code().as_str(), code);
    assert_eq!(err.code().to_string(), code);
}

#[test]
fn board_errors_expose_the_graph_code() {
    let err = BoardError::from(GraphError::SelfLoop { vertex: 3 });
    assert_eq!(err.graph_code(), Some(GraphError::SelfLoop { vertex: 3 }.code()));
    assert_eq!(
        BoardError::OffBoard {
            coord: BoardCoord::new(0, 9)
        }
        .graph_code(),
        None
    );
}

#[test]
fn error_messages_use_one_based_coordinates() {
    let err = BoardError::Occupied {
        coord: BoardCoord::new(1, 2),
    };
    assert_eq!(err.to_string(), "row 3 col 2 is already occupied");
}

#[rstest]
#[case(PlayerError::NoEmptyCells, "PLAYER_NO_EMPTY_CELLS")]
#[case(PlayerError::InputClosed, "PLAYER_INPUT_CLOSED")]
#[case(
    PlayerError::from(std::io::Error::other("terminal gone")),
    "PLAYER_IO"
)]
fn player_errors_expose_stable_codes(#[case] err: PlayerError, #[case] code: &str) {
    assert_eq!(err.code().as_str(), code);
}

#[test]
fn game_errors_wrap_their_sources() {
    let board = GameError::from(BoardError::OffBoard {
        coord: BoardCoord::new(5, 5),
    });
    assert_eq!(board.code().as_str(), "GAME_BOARD");
    assert_eq!(board.to_string(), "row 6 col 6 is not on the board");

    let player = GameError::from(PlayerError::InputClosed);
    assert_eq!(player.code().as_str(), "GAME_PLAYER");

    let finished = GameError::Finished { winner: Seat::Two };
    assert_eq!(finished.code().as_str(), "GAME_FINISHED");
    assert_eq!(finished.to_string(), "the game is already won by player 2");

    let stalled = GameError::NoWinner { moves: 9 };
    assert_eq!(stalled.code().as_str(), "GAME_NO_WINNER");
}

/// Plays red on the given cells regardless of the board.
struct Fixed(Vec<BoardCoord>);

impl Player for Fixed {
    fn take_turn(&mut self, _board: &Board) -> Result<BoardCoord, PlayerError> {
        self.0.pop().ok_or(PlayerError::InputClosed)
    }
}

#[test]
fn games_can_be_driven_with_external_players() {
    let mut game = Game::new(Board::new(3, 1).expect("valid board"));
    let mut one = Fixed(vec![BoardCoord::new(2, 0), BoardCoord::new(0, 0)]);
    let mut two = RandomPlayer::new(SmallRng::seed_from_u64(9));
    let result = game.play(&mut one, &mut two).expect("game completes");
    // Any black piece joins the only row to itself.
    assert_eq!(result.winner, Seat::Two);
    assert_eq!(result.moves, 2);
    assert_eq!(game.board().piece_at(BoardCoord::new(0, 0)), Some(Piece::Red));
}
