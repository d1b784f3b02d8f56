use crate::game_state::chess_types::Square;
use crate::moves::path::is_path_clear;

/// Every square sharing a row or column with the index square.
pub const ROOK_RAYS: [u64; 64] = generate_rook_rays();

#[inline]
pub const fn is_rook_shape(from: Square, to: Square) -> bool {
    ROOK_RAYS[from.index() as usize] & to.mask() != 0
}

/// Rook shape with every intervening square empty.
#[inline]
pub fn rook_reaches(occupancy: u64, from: Square, to: Square) -> bool {
    is_rook_shape(from, to) && is_path_clear(occupancy, from, to)
}

const fn generate_rook_rays() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = sq / 8;
        let col = sq % 8;
        let mut rays = 0u64;
        let mut i = 0usize;

        while i < 8 {
            rays |= 1u64 << (row * 8 + i);
            rays |= 1u64 << (i * 8 + col);
            i += 1;
        }

        table[sq] = rays & !(1u64 << sq);
        sq += 1;
    }

    table
}
