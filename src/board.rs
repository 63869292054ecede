use crate::types::Player;

/// 9-cell tic-tac-toe grid, row-major (cell = r*3 + c).
///
/// Equality and hashing run over the full cell content: two boards with the
/// same marks are the same position no matter how they were reached, which is
/// what the graph dedup relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Option<Player>; 9],
}

impl Board {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, idx: u8) -> Option<Player> {
        self.cells[idx as usize]
    }

    #[inline]
    pub fn set(&mut self, idx: u8, mark: Option<Player>) {
        self.cells[idx as usize] = mark;
    }

    #[inline]
    pub fn is_empty(&self, idx: u8) -> bool {
        self.cells[idx as usize].is_none()
    }

    #[inline]
    pub fn filled_count(&self) -> u8 {
        self.cells.iter().filter(|c| c.is_some()).count() as u8
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.filled_count() == 9
    }

    /// Pure placement: returns the board with `mark` added at `idx`.
    /// Caller guarantees the cell is empty.
    #[inline]
    pub fn place(&self, idx: u8, mark: Player) -> Self {
        debug_assert!(self.is_empty(idx));
        let mut next = *self;
        next.cells[idx as usize] = Some(mark);
        next
    }

    /// Scan all 3 rows, all 3 columns, and both diagonals for three equal
    /// non-empty marks. Returns the owning player of the first line found.
    /// At most one player can hold a line on a reachable board.
    pub fn winning_player(&self) -> Option<Player> {
        for i in 0u8..3 {
            if let Some(p) = self.line_owner(i * 3, i * 3 + 1, i * 3 + 2) {
                return Some(p); // row i
            }
            if let Some(p) = self.line_owner(i, i + 3, i + 6) {
                return Some(p); // column i
            }
        }
        self.line_owner(0, 4, 8).or_else(|| self.line_owner(2, 4, 6))
    }

    #[inline]
    fn line_owner(&self, a: u8, b: u8, c: u8) -> Option<Player> {
        match (self.get(a), self.get(b), self.get(c)) {
            (Some(p), Some(q), Some(r)) if p == q && q == r => Some(p),
            _ => None,
        }
    }

    /// Parse the 9-character text form: 'X', 'O', or ' ' per cell, row-major.
    pub fn from_text(s: &str) -> Result<Self, String> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 9 {
            return Err(format!("Board text must be 9 chars, got {}", chars.len()));
        }
        let mut board = Self::new();
        for (i, ch) in chars.into_iter().enumerate() {
            let mark = match ch {
                'X' => Some(Player::X),
                'O' => Some(Player::O),
                ' ' => None,
                other => return Err(format!("Invalid board char '{other}' at cell {i}")),
            };
            board.cells[i] = mark;
        }
        Ok(board)
    }

    /// 9-character text form, the inverse of [`Board::from_text`].
    pub fn to_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.map_or(' ', Player::mark))
            .collect()
    }
}
