use crate::board::Board;
use crate::types::Player;

/// Packed content key for a board: 2 bits per cell, cell 0 in the low bits.
///
/// Encoding per cell: 0 = empty, 1 = X, 2 = O. The packing is injective, so
/// key equality is exactly board-content equality; the dedup table keys on
/// this instead of the full cell array.
#[inline]
pub fn board_key(board: &Board) -> u32 {
    let mut key: u32 = 0;
    for idx in 0u8..9 {
        let code: u32 = match board.get(idx) {
            None => 0,
            Some(Player::X) => 1,
            Some(Player::O) => 2,
        };
        key |= code << (2 * idx);
    }
    key
}

/// Inverse of [`board_key`]. Used to validate dedup-table contents in tests.
pub fn key_to_board(key: u32) -> Result<Board, String> {
    let mut board = Board::new();
    for idx in 0u8..9 {
        let code = (key >> (2 * idx)) & 0b11;
        let mark = match code {
            0 => None,
            1 => Some(Player::X),
            2 => Some(Player::O),
            _ => return Err(format!("Invalid cell code {code} at cell {idx}")),
        };
        board.set(idx, mark);
    }
    if key >> 18 != 0 {
        return Err(format!("Key {key:#x} has bits beyond cell 8"));
    }
    Ok(board)
}
