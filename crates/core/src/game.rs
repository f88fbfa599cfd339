//! Game module - the controller that owns all game state
//!
//! Ties the grid, the active and lookahead pieces, the piece pool and the score
//! together. Player commands are applied speculatively to the active piece and
//! rolled back when the result leaves the grid or overlaps a locked cell.
//! A failed move down is what locks a piece.

use log::{debug, trace};

use crate::canvas::{preview_anchor, Canvas, BOARD_ANCHOR};
use crate::events::GameEvent;
use crate::grid::Grid;
use crate::piece::Piece;
use crate::rng::PiecePool;
use crate::scoring::calculate_score;
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{GameAction, GRID_COLS, GRID_ROWS, SOFT_DROP_POINTS};

/// Controller state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    current: Piece,
    next: Piece,
    pool: PiecePool,
    score: u32,
    game_over: bool,
    /// Pieces locked since the last reset
    locked_pieces: u32,
    /// Notifications not yet drained by the outer loop
    events: Vec<GameEvent>,
}

impl Game {
    /// Create a new game with the given pool seed
    pub fn new(seed: u32) -> Self {
        Self::with_grid(seed, Grid::new())
    }

    /// Create a game that starts on a prepared grid
    pub fn with_grid(seed: u32, grid: Grid) -> Self {
        let mut pool = PiecePool::new(seed);
        let current = Piece::new(pool.draw());
        let next = Piece::new(pool.draw());
        Self {
            grid,
            current,
            next,
            pool,
            score: 0,
            game_over: false,
            locked_pieces: 0,
            events: Vec::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The active falling piece
    pub fn current(&self) -> &Piece {
        &self.current
    }

    /// The lookahead piece
    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn pool(&self) -> &PiecePool {
        &self.pool
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn status(&self) -> GameStatus {
        if self.game_over {
            GameStatus::GameOver
        } else {
            GameStatus::Playing
        }
    }

    pub fn locked_pieces(&self) -> u32 {
        self.locked_pieces
    }

    /// Add the row-clear bonus for `lines_cleared` plus `move_down_points`
    pub fn update_score(&mut self, lines_cleared: usize, move_down_points: u32) {
        self.score = self
            .score
            .saturating_add(calculate_score(lines_cleared, move_down_points));
    }

    /// Draw a fresh piece from the pool
    pub fn get_random_block(&mut self) -> Piece {
        Piece::new(self.pool.draw())
    }

    /// Every cell of the active piece is on the grid
    pub fn block_inside(&self) -> bool {
        self.current
            .cell_positions()
            .iter()
            .all(|p| self.grid.is_inside(p.row, p.column))
    }

    /// Every cell of the active piece is on an empty grid cell
    pub fn block_fits(&self) -> bool {
        self.current
            .cell_positions()
            .iter()
            .all(|p| matches!(self.grid.is_empty(p.row, p.column), Ok(true)))
    }

    fn is_placement_valid(&self) -> bool {
        self.block_inside() && self.block_fits()
    }

    /// Translate the active piece, undoing the move if it does not fit.
    fn try_shift(&mut self, rows: i32, columns: i32) -> bool {
        self.current.move_by(rows, columns);
        if !self.is_placement_valid() {
            self.current.move_by(-rows, -columns);
            trace!("rejected move ({}, {}) of {:?}", rows, columns, self.current.kind());
            return false;
        }
        true
    }

    pub fn move_left(&mut self) {
        if self.game_over {
            return;
        }
        self.try_shift(0, -1);
    }

    pub fn move_right(&mut self) {
        if self.game_over {
            return;
        }
        self.try_shift(0, 1);
    }

    /// Move the active piece one row down, locking it if it cannot go further
    pub fn move_down(&mut self) {
        if self.game_over {
            return;
        }
        if !self.try_shift(1, 0) {
            self.lock_block();
        }
    }

    /// Rotate the active piece; a colliding rotation is undone. No wall kicks.
    pub fn rotate(&mut self) {
        if self.game_over {
            return;
        }
        self.current.rotate();
        if !self.is_placement_valid() {
            self.current.undo_rotation();
            trace!("rejected rotation of {:?}", self.current.kind());
        } else {
            self.events.push(GameEvent::RotateAccepted);
        }
    }

    /// Commit the active piece to the grid and bring in the next one
    pub fn lock_block(&mut self) {
        if self.game_over {
            return;
        }

        let id = self.current.type_id();
        for p in self.current.cell_positions() {
            // Moves and rotations are rolled back before they leave the grid.
            if let Err(e) = self.grid.set(p.row, p.column, id) {
                panic!("locking {:?} off the grid: {}", self.current.kind(), e);
            }
        }
        self.locked_pieces += 1;
        self.events.push(GameEvent::Locked {
            kind: self.current.kind(),
        });
        debug!(
            "locked {:?} at ({}, {}) rotation {}",
            self.current.kind(),
            self.current.row_offset(),
            self.current.column_offset(),
            self.current.rotation_state()
        );

        let promoted = self.get_random_block();
        self.current = std::mem::replace(&mut self.next, promoted);

        let rows_cleared = self.grid.clear_full_rows();
        if rows_cleared > 0 {
            self.events.push(GameEvent::RowsCleared {
                count: rows_cleared,
            });
            self.update_score(rows_cleared, 0);
            debug!("cleared {} rows, score {}", rows_cleared, self.score);
        }

        if !self.block_fits() {
            self.game_over = true;
            self.events.push(GameEvent::GameOver);
            debug!("game over with score {}", self.score);
        }
    }

    /// One gravity step
    pub fn tick(&mut self) {
        self.move_down();
    }

    /// Start over: empty grid, full pool, new pieces, zero score
    pub fn reset(&mut self) {
        self.grid.reset();
        self.pool.refill();
        self.current = self.get_random_block();
        self.next = self.get_random_block();
        self.score = 0;
        self.game_over = false;
        self.locked_pieces = 0;
        debug!("reset");
    }

    /// Apply a player command. A player move down earns soft-drop points.
    ///
    /// While the game is over only `Reset` does anything.
    pub fn apply_action(&mut self, action: GameAction) {
        if self.game_over && action != GameAction::Reset {
            return;
        }
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::MoveDown => {
                self.move_down();
                self.update_score(0, SOFT_DROP_POINTS);
            }
            GameAction::Rotate => self.rotate(),
            GameAction::Reset => self.reset(),
        }
    }

    /// Take the queued notifications
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Draw the grid, the active piece, and the lookahead piece in the preview box
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        self.grid.draw(canvas, BOARD_ANCHOR);
        self.current.draw(canvas, BOARD_ANCHOR);
        self.next.draw(canvas, preview_anchor(self.next.kind()));
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_u8_grid(&mut out.grid);
        out.active = PieceSnapshot::from(&self.current);
        out.next = PieceSnapshot::from(&self.next);
        out.score = self.score;
        out.game_over = self.game_over;
        out.pool_remaining = self.pool.len();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot {
            grid: [[0; GRID_COLS]; GRID_ROWS],
            active: PieceSnapshot::from(&self.current),
            next: PieceSnapshot::from(&self.next),
            score: self.score,
            game_over: self.game_over,
            pool_remaining: self.pool.len(),
        };
        self.grid.write_u8_grid(&mut s.grid);
        s
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn game_with(kind: PieceKind) -> Game {
        let mut game = Game::new(1);
        game.current = Piece::new(kind);
        game
    }

    #[test]
    fn test_move_left_stops_at_wall() {
        let mut game = game_with(PieceKind::O);
        for _ in 0..20 {
            game.move_left();
        }
        let min_col = game
            .current()
            .cell_positions()
            .iter()
            .map(|p| p.column)
            .min()
            .unwrap();
        assert_eq!(min_col, 0);
    }

    #[test]
    fn test_move_right_stops_at_wall() {
        let mut game = game_with(PieceKind::I);
        for _ in 0..20 {
            game.move_right();
        }
        let max_col = game
            .current()
            .cell_positions()
            .iter()
            .map(|p| p.column)
            .max()
            .unwrap();
        assert_eq!(max_col, GRID_COLS as i32 - 1);
    }

    #[test]
    fn test_move_rejected_by_locked_cell() {
        let mut game = game_with(PieceKind::O);
        // O occupies columns 4-5; block column 3 on row 1.
        game.grid.set(1, 3, 2).unwrap();
        let before = game.current;
        game.move_left();
        assert_eq!(game.current, before);
    }

    #[test]
    fn test_rotation_blocked_at_floor_is_undone() {
        let mut game = game_with(PieceKind::I);
        // Drop the horizontal I onto the floor.
        for _ in 0..(GRID_ROWS - 1) {
            game.current.move_by(1, 0);
        }
        assert!(game.block_inside());
        let before = game.current;
        game.rotate();
        assert_eq!(game.current, before);
        assert!(game.drain_events().is_empty());
    }

    #[test]
    fn test_rotation_accepted_queues_event() {
        let mut game = game_with(PieceKind::T);
        game.rotate();
        assert_eq!(game.current().rotation_state(), 1);
        assert_eq!(game.drain_events(), vec![GameEvent::RotateAccepted]);
    }

    #[test]
    fn test_lock_promotes_next_piece() {
        let mut game = game_with(PieceKind::O);
        let next_kind = game.next().kind();
        game.lock_block();
        assert_eq!(game.current().kind(), next_kind);
        assert_eq!(game.grid().occupied_count(), 4);
        assert_eq!(game.locked_pieces(), 1);
    }

    #[test]
    fn test_lock_with_cleared_rows_scores() {
        let mut game = game_with(PieceKind::I);
        // Bottom row full except the four columns the I piece will fill.
        for column in 0..GRID_COLS as i32 {
            if !(3..=6).contains(&column) {
                game.grid.set(19, column, 1).unwrap();
            }
        }
        while !game.drain_events().iter().any(|e| matches!(e, GameEvent::Locked { .. })) {
            game.move_down();
        }
        assert_eq!(game.score(), 100);
        assert_eq!(game.grid().occupied_count(), 0);
    }

    #[test]
    fn test_game_over_when_spawn_blocked() {
        let mut game = game_with(PieceKind::O);
        for row in 0..2 {
            for column in 0..GRID_COLS as i32 {
                if column % 2 == 0 {
                    game.grid.set(row, column, 7).unwrap();
                }
            }
        }
        // Park the active piece lower so the lock itself succeeds.
        game.current.move_by(10, 0);
        game.lock_block();
        assert!(game.is_game_over());
        assert_eq!(game.status(), GameStatus::GameOver);
        assert!(game.drain_events().contains(&GameEvent::GameOver));
    }

    #[test]
    fn test_game_over_ignores_commands_until_reset() {
        let mut game = Game::new(3);
        game.game_over = true;
        let before = game.current;
        let score = game.score();

        game.apply_action(GameAction::MoveLeft);
        game.apply_action(GameAction::MoveDown);
        game.apply_action(GameAction::Rotate);
        game.tick();
        game.lock_block();
        assert_eq!(game.current, before);
        assert_eq!(game.score(), score);
        assert_eq!(game.grid().occupied_count(), 0);

        game.apply_action(GameAction::Reset);
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn test_player_move_down_earns_soft_drop_point() {
        let mut game = Game::new(5);
        game.apply_action(GameAction::MoveDown);
        assert_eq!(game.score(), 1);
        game.tick();
        assert_eq!(game.score(), 1);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut game = Game::new(9);
        game.grid.set(19, 0, 1).unwrap();
        game.update_score(2, 0);
        game.pool.draw();
        game.reset();

        assert_eq!(game.score(), 0);
        assert_eq!(game.grid().occupied_count(), 0);
        assert_eq!(game.pool().len(), 5);
        assert!(!game.is_game_over());
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut game = Game::new(11);
        game.grid.set(18, 2, 4).unwrap();
        let snap = game.snapshot();
        assert_eq!(snap.grid[18][2], 4);
        assert_eq!(snap.active.kind, game.current().kind());
        assert_eq!(snap.next.kind, game.next().kind());
        assert_eq!(snap.pool_remaining, game.pool().len());

        let mut again = snap;
        again.grid = [[0; GRID_COLS]; GRID_ROWS];
        game.snapshot_into(&mut again);
        assert_eq!(again, snap);
    }

    #[test]
    #[should_panic(expected = "off the grid")]
    fn test_lock_outside_grid_panics() {
        let mut game = game_with(PieceKind::T);
        game.current.move_by(-3, 0);
        game.lock_block();
    }

    #[test]
    fn test_lock_at_spawn_writes_every_cell() {
        let mut game = game_with(PieceKind::O);
        let cells = game.current.cell_positions();
        game.lock_block();
        for p in cells {
            assert_eq!(game.grid().cell(p.row, p.column), Ok(PieceKind::O.type_id()));
        }
    }
}
