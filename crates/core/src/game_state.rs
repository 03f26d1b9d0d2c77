//! Game state module - manages the complete game state
//!
//! This module ties together all core components: the three grids, pieces, RNG,
//! and scoring. It handles piece movement, rotation, board switching, line clears
//! with side-board multipliers, level progression, and game lifecycle.
//!
//! The active grid is never a separate copy: it is `boards[current_board]`, so
//! the selected board and its stored grid cannot drift apart.

use tracing::debug;

use crate::board::Grid;
use crate::rng::PieceRandomizer;
use crate::scoring::{board_multiplier, calculate_score, fall_interval, lines_for_next_level};
use crate::shape::{Piece, Position};
use crate::snapshot::GameSnapshot;
use crate::types::{BoardId, GameAction, PieceKind, BOARD_COUNT, BOARD_WIDTH};

/// The falling piece and its anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub piece: Piece,
    pub position: Position,
}

impl ActivePiece {
    /// Place a piece at its spawn position: row 0, horizontally centered.
    ///
    /// A piece without usable dimensions becomes a single cell at column `WIDTH / 2`.
    pub fn spawn(piece: Piece) -> Self {
        if piece.rows() == 0 || piece.cols() == 0 {
            return Self {
                piece: Piece::single_cell(),
                position: Position::new(0, (BOARD_WIDTH / 2) as i8),
            };
        }

        Self {
            piece,
            position: Position::new(0, (BOARD_WIDTH / 2 - piece.cols() / 2) as i8),
        }
    }

    /// Check if all cells are at valid positions on the grid
    pub fn is_valid(&self, grid: &Grid) -> bool {
        grid.fits(&self.piece, self.position)
    }
}

/// Outcome of a lock that cleared rows on the center board
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearEvent {
    pub center_rows: usize,
    pub left_multiplier: f64,
    pub right_multiplier: f64,
    pub points: f64,
    pub leveled_up: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    boards: [Grid; BOARD_COUNT],
    current_board: BoardId,
    active: Option<ActivePiece>,
    next: Piece,
    randomizer: PieceRandomizer,
    /// Last center clear (consumed by observers).
    last_event: Option<ClearEvent>,
    score: f64,
    level: u32,
    total_lines: u32,
    lines_for_next_level: u32,
    fall_interval: f64,
    game_over: bool,
    started: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed.
    ///
    /// The first piece is drawn immediately as the "next" piece; `start` spawns it.
    pub fn new(seed: u64) -> Self {
        let mut randomizer = PieceRandomizer::new(seed);
        let next = Piece::of(randomizer.pick_random());

        Self {
            boards: [Grid::new(); BOARD_COUNT],
            current_board: BoardId::Center,
            active: None,
            next,
            randomizer,
            last_event: None,
            score: 0.0,
            level: 0,
            total_lines: 0,
            lines_for_next_level: lines_for_next_level(0),
            fall_interval: fall_interval(0),
            game_over: false,
            started: false,
        }
    }

    /// Start a game whose first two pieces are fixed.
    ///
    /// Later pieces still come from the seeded randomizer.
    pub fn with_pieces(seed: u64, first: PieceKind, second: PieceKind) -> Self {
        let mut state = Self::new(seed);
        state.next = Piece::of(first);
        state.start();
        state.next = Piece::of(second);
        state
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn total_lines(&self) -> u32 {
        self.total_lines
    }

    pub fn lines_for_next_level(&self) -> u32 {
        self.lines_for_next_level
    }

    /// Fall interval in ticker units
    pub fn fall_interval(&self) -> f64 {
        self.fall_interval
    }

    pub fn current_board(&self) -> BoardId {
        self.current_board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    /// Grid of any board
    pub fn grid(&self, board: BoardId) -> &Grid {
        &self.boards[board.index()]
    }

    /// Mutable grid of any board, for setting up positions in tests and benches
    pub fn grid_mut(&mut self, board: BoardId) -> &mut Grid {
        &mut self.boards[board.index()]
    }

    /// Grid of the selected board
    pub fn active_grid(&self) -> &Grid {
        self.grid(self.current_board)
    }

    fn active_grid_mut(&mut self) -> &mut Grid {
        self.grid_mut(self.current_board)
    }

    /// Replace the upcoming piece
    pub fn set_next_piece(&mut self, piece: Piece) {
        self.next = piece;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            boards: self.boards,
            current_board: self.current_board,
            active: self.active,
            next: self.next,
            score: self.score,
            level: self.level,
            lines: self.total_lines,
            game_over: self.game_over,
        }
    }

    /// Spawn the next piece and draw a new one.
    ///
    /// Returns false (and ends the game) when the piece does not fit at its
    /// spawn position on the active board. The blocked piece stays in place so
    /// the final frame shows it over the stack.
    pub fn spawn_piece(&mut self) -> bool {
        let piece = ActivePiece::spawn(self.next);

        if !piece.is_valid(self.active_grid()) {
            debug!(board = self.current_board.as_str(), "spawn blocked");
            self.active = Some(piece);
            self.game_over = true;
            return false;
        }

        self.active = Some(piece);
        self.next = Piece::of(self.randomizer.pick_random());
        true
    }

    /// The falling piece while the game is still running
    fn live_piece(&self) -> Option<ActivePiece> {
        if self.game_over {
            return None;
        }
        self.active
    }

    /// Try to move the active piece
    fn try_move(&mut self, drow: i8, dcol: i8) -> bool {
        let Some(active) = self.live_piece() else {
            return false;
        };

        let moved = ActivePiece {
            position: active.position.offset(drow, dcol),
            ..active
        };

        if moved.is_valid(self.active_grid()) {
            self.active = Some(moved);
            return true;
        }

        false
    }

    /// Move the active piece down one row
    pub fn move_down(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// Shift the active piece sideways; silently ignored when blocked
    pub fn move_horizontal(&mut self, dcol: i8) -> bool {
        self.try_move(0, dcol)
    }

    /// Rotate the active piece clockwise in place.
    ///
    /// No wall kicks: a rotation that does not fit at the same anchor is dropped.
    pub fn rotate(&mut self) -> bool {
        let Some(active) = self.live_piece() else {
            return false;
        };
        if active.piece.is_empty() {
            return false;
        }

        let rotated = ActivePiece {
            piece: active.piece.rotated(),
            ..active
        };

        if rotated.is_valid(self.active_grid()) {
            self.active = Some(rotated);
            return true;
        }

        false
    }

    /// Drop the active piece as far as it goes, lock it, and spawn the next one.
    /// Returns the number of rows dropped.
    pub fn hard_drop(&mut self) -> u32 {
        if self.live_piece().is_none() {
            return 0;
        }

        let mut distance = 0;
        while self.move_down() {
            distance += 1;
        }

        self.lock_piece();
        distance
    }

    /// One fall step: move down, or lock and spawn when blocked
    pub fn tick(&mut self) -> bool {
        if !self.started || self.live_piece().is_none() {
            return false;
        }

        if !self.move_down() {
            self.lock_piece();
        }
        true
    }

    /// Lock the active piece onto the active board, clear lines, spawn the next piece
    pub fn lock_piece(&mut self) {
        let Some(active) = self.live_piece() else {
            return;
        };
        self.active = None;

        let board = self.current_board;
        self.active_grid_mut().lock_piece(&active.piece, active.position);
        debug!(board = board.as_str(), row = active.position.row, "piece locked");

        if let Some(event) = self.clear_lines() {
            self.last_event = Some(event);
        }

        if !self.game_over {
            self.spawn_piece();
        }
    }

    /// Clear full rows on the center board and score them.
    ///
    /// Does nothing unless the center board is active. A clear also consumes the
    /// full rows of both side boards, which become the multipliers of this clear.
    pub fn clear_lines(&mut self) -> Option<ClearEvent> {
        if self.current_board != BoardId::Center {
            return None;
        }

        let center_rows = self.active_grid_mut().clear_full_rows();
        if center_rows == 0 {
            return None;
        }

        self.total_lines += center_rows as u32;
        let leveled_up = self.advance_level();

        let left_multiplier = self.compute_multiplier(BoardId::Left);
        let right_multiplier = self.compute_multiplier(BoardId::Right);
        let result = calculate_score(center_rows, left_multiplier, right_multiplier);
        self.score += result.total;

        debug!(
            center_rows,
            left_multiplier,
            right_multiplier,
            points = result.total,
            score = self.score,
            "center clear"
        );

        Some(ClearEvent {
            center_rows,
            left_multiplier,
            right_multiplier,
            points: result.total,
            leveled_up,
        })
    }

    /// Clear the full rows of `board` and turn their count into a multiplier.
    ///
    /// The rows are removed for good. The selected board does not change.
    pub fn compute_multiplier(&mut self, board: BoardId) -> f64 {
        board_multiplier(self.grid_mut(board).clear_full_rows())
    }

    /// Level up once when the line threshold is reached
    fn advance_level(&mut self) -> bool {
        if self.total_lines < self.lines_for_next_level {
            return false;
        }

        self.level += 1;
        self.lines_for_next_level = lines_for_next_level(self.level);
        self.fall_interval = fall_interval(self.level);
        debug!(
            level = self.level,
            fall_interval = self.fall_interval,
            "level up"
        );
        true
    }

    /// Make `target` the active board.
    ///
    /// Rejected (returns false) when the falling piece would not fit on the
    /// target grid at its current position.
    pub fn switch_board(&mut self, target: BoardId) -> bool {
        let Some(active) = self.live_piece() else {
            return false;
        };

        if !active.is_valid(self.grid(target)) {
            return false;
        }

        self.current_board = target;
        true
    }

    /// End the game immediately
    pub fn quit(&mut self) {
        self.game_over = true;
    }

    /// Take and clear the last center clear event.
    pub fn take_last_event(&mut self) -> Option<ClearEvent> {
        self.last_event.take()
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.game_over {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.move_horizontal(-1),
            GameAction::MoveRight => self.move_horizontal(1),
            GameAction::SoftDrop => self.tick(),
            GameAction::Rotate => self.rotate(),
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
            GameAction::BoardBackward => self.switch_board(self.current_board.backward()),
            GameAction::BoardForward => self.switch_board(self.current_board.forward()),
            GameAction::Exit => {
                self.quit();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BOARD_HEIGHT;

    fn bottom() -> i32 {
        BOARD_HEIGHT as i32 - 1
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert!(!state.started);
        assert!(!state.game_over);
        assert_eq!(state.score, 0.0);
        assert_eq!(state.level, 0);
        assert_eq!(state.total_lines, 0);
        assert_eq!(state.lines_for_next_level, 10);
        assert_eq!(state.fall_interval, 10.0);
        assert_eq!(state.current_board, BoardId::Center);
        assert!(state.active.is_none());
    }

    #[test]
    fn test_start_spawns_previewed_piece() {
        let mut state = GameState::new(12345);
        let previewed = state.next;

        state.start();

        assert!(state.started);
        assert_eq!(state.active.unwrap().piece, previewed);
    }

    #[test]
    fn test_spawn_position_is_centered() {
        let i = ActivePiece::spawn(Piece::of(PieceKind::I));
        assert_eq!(i.position, Position::new(0, 3));

        let o = ActivePiece::spawn(Piece::of(PieceKind::O));
        assert_eq!(o.position, Position::new(0, 4));

        let t = ActivePiece::spawn(Piece::of(PieceKind::T));
        assert_eq!(t.position, Position::new(0, 4));
    }

    #[test]
    fn test_spawn_empty_piece_falls_back_to_single_cell() {
        let spawned = ActivePiece::spawn(Piece::empty());
        assert_eq!(spawned.piece, Piece::single_cell());
        assert_eq!(spawned.position, Position::new(0, 5));
    }

    #[test]
    fn test_move_down_until_floor() {
        let mut state = GameState::with_pieces(1, PieceKind::I, PieceKind::O);

        let mut moves = 0;
        while state.move_down() {
            moves += 1;
        }

        assert_eq!(moves, BOARD_HEIGHT - 1);
        assert_eq!(state.active.unwrap().position.row, bottom() as i8);
    }

    #[test]
    fn test_move_horizontal_stops_at_wall() {
        let mut state = GameState::with_pieces(1, PieceKind::O, PieceKind::O);

        let mut moved = 0;
        for _ in 0..10 {
            if state.move_horizontal(-1) {
                moved += 1;
            }
        }

        assert_eq!(moved, 4);
        assert_eq!(state.active.unwrap().position.col, 0);
    }

    #[test]
    fn test_rotate_rejected_without_wall_kick() {
        let mut state = GameState::with_pieces(1, PieceKind::I, PieceKind::O);
        // A vertical I needs 4 rows; at the floor there is only one.
        while state.move_down() {}

        let before = state.active;
        assert!(!state.rotate());
        assert_eq!(state.active, before);
    }

    #[test]
    fn test_hard_drop_locks_and_spawns() {
        let mut state = GameState::with_pieces(1, PieceKind::O, PieceKind::T);

        let distance = state.hard_drop();

        assert_eq!(distance, BOARD_HEIGHT as u32 - 2);
        assert!(state.grid(BoardId::Center).is_occupied(bottom(), 4));
        assert!(state.grid(BoardId::Center).is_occupied(bottom(), 5));
        assert_eq!(state.active.unwrap().piece, Piece::of(PieceKind::T));
    }

    #[test]
    fn test_lock_on_side_board_never_clears() {
        let mut state = GameState::with_pieces(1, PieceKind::I, PieceKind::O);
        // The I piece spawns flat over columns 3..=6; leave exactly that gap.
        let left = state.grid_mut(BoardId::Left);
        for col in (0..3).chain(7..BOARD_WIDTH as i32) {
            left.set(bottom(), col, true);
        }
        assert!(state.switch_board(BoardId::Left));

        state.hard_drop();

        assert!(state.grid(BoardId::Left).is_row_full(BOARD_HEIGHT - 1));
        assert_eq!(state.score, 0.0);
        assert_eq!(state.total_lines, 0);
        assert!(state.take_last_event().is_none());
    }

    #[test]
    fn test_side_board_full_row_is_banked() {
        let mut state = GameState::with_pieces(1, PieceKind::O, PieceKind::O);
        // Leave a 2-wide gap on the right board for the O piece.
        let right = state.grid_mut(BoardId::Right);
        for row in [bottom() - 1, bottom()] {
            for col in 0..BOARD_WIDTH as i32 {
                if col != 4 && col != 5 {
                    right.set(row, col, true);
                }
            }
        }
        assert!(state.switch_board(BoardId::Right));

        state.hard_drop();

        // Two full rows sit on the right board, untouched.
        assert!(state.grid(BoardId::Right).is_row_full(BOARD_HEIGHT - 1));
        assert!(state.grid(BoardId::Right).is_row_full(BOARD_HEIGHT - 2));
        assert_eq!(state.score, 0.0);
    }

    #[test]
    fn test_compute_multiplier_consumes_rows() {
        let mut state = GameState::with_pieces(1, PieceKind::O, PieceKind::O);
        state.grid_mut(BoardId::Left).fill_row(BOARD_HEIGHT - 1);
        state.grid_mut(BoardId::Left).fill_row(BOARD_HEIGHT - 2);
        state.grid_mut(BoardId::Left).fill_row(BOARD_HEIGHT - 3);

        assert_eq!(state.compute_multiplier(BoardId::Left), 2.5);
        assert_eq!(state.grid(BoardId::Left).filled_count(), 0);
        assert_eq!(state.compute_multiplier(BoardId::Left), 1.0);
        assert_eq!(state.current_board, BoardId::Center);
    }

    #[test]
    fn test_clear_lines_only_on_center() {
        let mut state = GameState::with_pieces(1, PieceKind::O, PieceKind::O);
        state.grid_mut(BoardId::Left).fill_row(BOARD_HEIGHT - 1);
        assert!(state.switch_board(BoardId::Left));

        assert!(state.clear_lines().is_none());
        assert!(state.grid(BoardId::Left).is_row_full(BOARD_HEIGHT - 1));
    }

    #[test]
    fn test_clear_lines_without_full_rows_leaves_sides_alone() {
        let mut state = GameState::with_pieces(1, PieceKind::O, PieceKind::O);
        state.grid_mut(BoardId::Left).fill_row(BOARD_HEIGHT - 1);

        assert!(state.clear_lines().is_none());
        assert!(state.grid(BoardId::Left).is_row_full(BOARD_HEIGHT - 1));
        assert_eq!(state.score, 0.0);
    }

    #[test]
    fn test_level_up_once_per_clear() {
        let mut state = GameState::with_pieces(1, PieceKind::O, PieceKind::O);
        state.total_lines = 9;
        state.grid_mut(BoardId::Center).fill_row(BOARD_HEIGHT - 1);

        let event = state.clear_lines().unwrap();

        assert!(event.leveled_up);
        assert_eq!(state.level, 1);
        assert_eq!(state.lines_for_next_level, 20);
        assert_eq!(state.fall_interval, 9.5);
    }

    #[test]
    fn test_switch_board_rejected_on_collision() {
        let mut state = GameState::with_pieces(1, PieceKind::O, PieceKind::O);
        let pos = state.active.unwrap().position;
        state
            .grid_mut(BoardId::Right)
            .set(pos.row as i32, pos.col as i32, true);

        assert!(!state.switch_board(BoardId::Right));
        assert_eq!(state.current_board, BoardId::Center);

        assert!(state.switch_board(BoardId::Left));
        assert_eq!(state.current_board, BoardId::Left);
    }

    #[test]
    fn test_board_cycle_actions() {
        let mut state = GameState::with_pieces(1, PieceKind::O, PieceKind::O);

        assert!(state.apply_action(GameAction::BoardForward));
        assert_eq!(state.current_board, BoardId::Right);
        assert!(state.apply_action(GameAction::BoardForward));
        assert_eq!(state.current_board, BoardId::Left);

        assert!(state.apply_action(GameAction::BoardBackward));
        assert_eq!(state.current_board, BoardId::Right);
        assert!(state.apply_action(GameAction::BoardBackward));
        assert_eq!(state.current_board, BoardId::Center);
    }

    #[test]
    fn test_spawn_collision_is_game_over() {
        let mut state = GameState::with_pieces(1, PieceKind::O, PieceKind::O);
        state.grid_mut(BoardId::Center).set(0, 4, true);

        assert!(!state.spawn_piece());
        assert!(state.game_over);
        assert!(!state.apply_action(GameAction::MoveLeft));

        // The blocked piece is kept for the final frame but no longer moves.
        let blocked = state.active.unwrap();
        assert_eq!(blocked.position, Position::new(0, 4));
        assert!(!state.move_down());
        assert!(!state.rotate());
        assert_eq!(state.hard_drop(), 0);
        assert!(!state.switch_board(BoardId::Left));
        assert_eq!(state.active, Some(blocked));

        let final_frame = state.snapshot().composited(BoardId::Center);
        assert!(final_frame.is_occupied(1, 5));
    }

    #[test]
    fn test_exit_action_ends_game() {
        let mut state = GameState::with_pieces(1, PieceKind::O, PieceKind::O);
        assert!(state.apply_action(GameAction::Exit));
        assert!(state.game_over);
        assert!(!state.tick());
    }

    #[test]
    fn test_soft_drop_locks_when_blocked() {
        let mut state = GameState::with_pieces(1, PieceKind::O, PieceKind::I);
        while state.move_down() {}

        assert!(state.apply_action(GameAction::SoftDrop));

        assert_eq!(state.grid(BoardId::Center).filled_count(), 4);
        assert_eq!(state.active.unwrap().piece, Piece::of(PieceKind::I));
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = GameState::with_pieces(1, PieceKind::T, PieceKind::L);
        state.grid_mut(BoardId::Left).set(3, 3, true);

        let snap = state.snapshot();

        assert_eq!(snap.current_board, BoardId::Center);
        assert_eq!(snap.next, Piece::of(PieceKind::L));
        assert_eq!(snap.active, state.active);
        assert!(snap.boards[BoardId::Left.index()].is_occupied(3, 3));
    }
}
