/// Core board logic - grid dimensions and active-key state
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::synth::{note_for_cell, Note};

pub mod autoplay;

pub const MIN_COLUMNS: usize = 2;
pub const MAX_COLUMNS: usize = 5;
pub const DEFAULT_COLUMNS: usize = 3;

/// Row count is fixed; only columns are user-adjustable.
pub const ROWS: usize = 4;

/// How long a pressed key stays in its active visual state. Independent of
/// the audio clip length.
pub const KEY_FLASH: Duration = Duration::from_millis(300);

pub struct Board {
    columns: usize,
    rows: usize,
    cell_count: Arc<Mutex<usize>>,
    active_cell: Option<(usize, Instant)>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: ROWS,
            cell_count: Arc::new(Mutex::new(DEFAULT_COLUMNS * ROWS)),
            active_cell: None,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn total_cells(&self) -> usize {
        self.columns * self.rows
    }

    /// Shared cell count read by the autoplay thread, so a resize mid-run
    /// is picked up on the next tick.
    pub fn shared_cell_count(&self) -> Arc<Mutex<usize>> {
        Arc::clone(&self.cell_count)
    }

    pub fn increase_columns(&mut self) {
        self.set_columns(self.columns + 1);
    }

    pub fn decrease_columns(&mut self) {
        self.set_columns(self.columns.saturating_sub(1));
    }

    fn set_columns(&mut self, columns: usize) {
        self.columns = columns.clamp(MIN_COLUMNS, MAX_COLUMNS);
        let mut shared = self.cell_count.lock().unwrap();
        *shared = self.total_cells();
    }

    pub fn note_for_cell(&self, index: usize) -> &'static Note {
        note_for_cell(index)
    }

    /// Marks a cell pressed. A new press replaces any earlier one.
    pub fn press(&mut self, index: usize) {
        self.active_cell = Some((index, Instant::now()));
    }

    /// Drops the active mark once its flash window has elapsed.
    pub fn clear_expired(&mut self) {
        if let Some((_, pressed_at)) = self.active_cell {
            if pressed_at.elapsed() >= KEY_FLASH {
                self.active_cell = None;
            }
        }
    }

    pub fn active_cell(&self) -> Option<usize> {
        self.active_cell.map(|(index, _)| index)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_board_defaults() {
        let board = Board::new();
        assert_eq!(board.columns(), 3);
        assert_eq!(board.rows(), 4);
        assert_eq!(board.total_cells(), 12);
        assert_eq!(board.active_cell(), None);
    }

    #[test]
    fn test_decrease_clamps_at_minimum() {
        let mut board = Board::new();
        for _ in 0..5 {
            board.decrease_columns();
        }
        assert_eq!(board.columns(), MIN_COLUMNS);
    }

    #[test]
    fn test_increase_clamps_at_maximum() {
        let mut board = Board::new();
        for _ in 0..5 {
            board.decrease_columns();
        }
        for _ in 0..10 {
            board.increase_columns();
        }
        assert_eq!(board.columns(), MAX_COLUMNS);
    }

    #[test]
    fn test_resize_updates_shared_count() {
        let mut board = Board::new();
        let shared = board.shared_cell_count();
        assert_eq!(*shared.lock().unwrap(), 12);
        board.increase_columns();
        assert_eq!(*shared.lock().unwrap(), 16);
        board.decrease_columns();
        board.decrease_columns();
        assert_eq!(*shared.lock().unwrap(), 8);
    }

    #[test]
    fn test_cells_map_onto_catalog() {
        let board = Board::new();
        assert_eq!(board.note_for_cell(0).name, "C3");
        assert_eq!(board.note_for_cell(7).name, "C4");
        assert_eq!(board.note_for_cell(21).name, "C3");
    }

    #[test]
    fn test_press_expires_after_flash_window() {
        let mut board = Board::new();
        board.press(5);
        board.clear_expired();
        assert_eq!(board.active_cell(), Some(5));

        thread::sleep(KEY_FLASH + Duration::from_millis(20));
        board.clear_expired();
        assert_eq!(board.active_cell(), None);
    }

    #[test]
    fn test_new_press_replaces_previous() {
        let mut board = Board::new();
        board.press(1);
        board.press(9);
        assert_eq!(board.active_cell(), Some(9));
    }
}
