use super::player::PlayerId;

/// A board square: empty, or holding the piece of one player.
pub type Cell = Option<PlayerId>;

/// Rectangular grid of cells. Row 0 is the top, row `height - 1` the bottom.
///
/// Cells only ever go from empty to occupied, and every column is filled from
/// the bottom up. Both hold because pieces enter the board solely through
/// [`Board::landing_row`] followed by [`Board::place`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(height: usize, width: usize) -> Self {
        assert!(
            height > 0 && width > 0,
            "board dimensions must be positive, got {height}x{width}"
        );
        Board {
            height,
            width,
            cells: vec![None; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Lowest empty row in `col`, or `None` when the column is full.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        self.assert_column(col);
        (0..self.height)
            .rev()
            .find(|&row| self.get(row, col).is_none())
    }

    /// Occupy an empty cell.
    ///
    /// # Panics
    ///
    /// If the position is out of bounds or already occupied. Callers must
    /// obtain `row` from [`Board::landing_row`].
    pub fn place(&mut self, row: usize, col: usize, player: PlayerId) {
        let idx = self.index(row, col);
        if let Some(owner) = self.cells[idx] {
            panic!("cell ({row}, {col}) is already occupied by player {owner}");
        }
        self.cells[idx] = Some(player);
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        self.assert_column(col);
        self.get(0, col).is_some()
    }

    /// Columns that can still take a piece, left to right.
    pub fn open_columns(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "position ({row}, {col}) is outside a {}x{} board",
            self.height,
            self.width
        );
        row * self.width + col
    }

    fn assert_column(&self, col: usize) {
        assert!(
            col < self.width,
            "column {col} out of range 0..{}",
            self.width
        );
    }
}
