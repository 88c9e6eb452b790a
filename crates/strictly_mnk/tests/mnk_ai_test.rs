//! Tests for the minimax opponent.

use strictly_mnk::{
    BoardGeometry, Game, GameStatus, Mark, Move, Score, find_best_move, minimax,
};

fn game_after(cells: &[(usize, usize)]) -> Game {
    let mut game = Game::new(BoardGeometry::new(3, 3).unwrap(), 3).unwrap();
    for &(row, col) in cells {
        let mark = game.whose_turn();
        let position = game.geometry().position(row, col).unwrap();
        game.make_move(Move::new(position, mark)).unwrap();
    }
    game
}

fn best(game: &Game, mark: Mark) -> (usize, usize) {
    let position = find_best_move(game.current_state(), game.num_in_row_needed(), mark)
        .unwrap()
        .expect("board has empty squares");
    (position.row(), position.col())
}

#[test]
fn test_takes_immediate_win() {
    // X (AI) at (0,0) and (0,1), O at (1,0) and (1,1)
    let game = game_after(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
    assert_eq!(best(&game, Mark::X), (0, 2));
}

#[test]
fn test_blocks_opponent() {
    // X at (0,0) and (0,1), O (AI) at (1,1)
    let game = game_after(&[(0, 0), (1, 1), (0, 1)]);
    assert_eq!(best(&game, Mark::O), (0, 2));
}

#[test]
fn test_prefers_win_over_block() {
    // X threatens (0,2); O can complete row 1 at (1,2) instead
    let game = game_after(&[(0, 0), (1, 0), (0, 1), (1, 1), (2, 0)]);
    assert_eq!(best(&game, Mark::O), (1, 2));
}

#[test]
fn test_forced_win_scored() {
    let game = game_after(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
    assert_eq!(
        minimax(game.current_state(), 3, true, Mark::X),
        Ok(Score::Win)
    );
}

#[test]
fn test_perfect_play_draws() {
    let mut game = game_after(&[(1, 1)]);
    while game.status() == GameStatus::InProgress {
        let mark = game.whose_turn();
        let position = find_best_move(game.current_state(), 3, mark)
            .unwrap()
            .unwrap();
        game.make_move(Move::new(position, mark)).unwrap();
    }
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.history().len(), 9);
}

#[test]
fn test_punishes_edge_reply() {
    // X centre, O edge (0,1) loses against perfect play
    let game = game_after(&[(1, 1), (0, 1)]);
    assert_eq!(
        minimax(game.current_state(), 3, true, Mark::X),
        Ok(Score::Win)
    );
}

#[test]
fn test_best_move_on_rectangular_board() {
    // 2x4 with three in a row: only rows are long enough, O must block (0,2)
    let geometry = BoardGeometry::new(2, 4).unwrap();
    let moves = [
        Move::new(geometry.position(0, 0).unwrap(), Mark::X),
        Move::new(geometry.position(1, 3).unwrap(), Mark::O),
        Move::new(geometry.position(0, 1).unwrap(), Mark::X),
    ];
    let game = Game::replay(geometry, 3, &moves).unwrap();
    let position = find_best_move(game.current_state(), 3, Mark::O).unwrap().unwrap();
    assert_eq!((position.row(), position.col()), (0, 2));
    assert_eq!(
        minimax(game.current_state(), 3, true, Mark::O),
        Ok(Score::Draw)
    );
}
