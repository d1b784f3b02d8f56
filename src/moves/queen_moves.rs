use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::{bishop_reaches, BISHOP_RAYS};
use crate::moves::rook_moves::{rook_reaches, ROOK_RAYS};

pub const QUEEN_RAYS: [u64; 64] = generate_queen_rays();

#[inline]
pub fn queen_reaches(occupancy: u64, from: Square, to: Square) -> bool {
    QUEEN_RAYS[from.index() as usize] & to.mask() != 0
        && (rook_reaches(occupancy, from, to) || bishop_reaches(occupancy, from, to))
}

const fn generate_queen_rays() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        table[sq] = BISHOP_RAYS[sq] | ROOK_RAYS[sq];
        sq += 1;
    }

    table
}
