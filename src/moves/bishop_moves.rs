use crate::game_state::chess_types::Square;
use crate::moves::path::is_path_clear;

/// Every square sharing a diagonal with the index square.
pub const BISHOP_RAYS: [u64; 64] = generate_bishop_rays();

#[inline]
pub const fn is_bishop_shape(from: Square, to: Square) -> bool {
    BISHOP_RAYS[from.index() as usize] & to.mask() != 0
}

/// Bishop shape with every intervening square empty.
#[inline]
pub fn bishop_reaches(occupancy: u64, from: Square, to: Square) -> bool {
    is_bishop_shape(from, to) && is_path_clear(occupancy, from, to)
}

const fn generate_bishop_rays() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let sq_i = sq as i32;
        let mut rays = 0u64;

        rays |= trace_ray_const(sq_i, 1, 1);
        rays |= trace_ray_const(sq_i, 1, -1);
        rays |= trace_ray_const(sq_i, -1, 1);
        rays |= trace_ray_const(sq_i, -1, -1);

        table[sq] = rays;
        sq += 1;
    }

    table
}

const fn trace_ray_const(square: i32, row_step: i32, col_step: i32) -> u64 {
    let mut row = (square / 8) + row_step;
    let mut col = (square % 8) + col_step;
    let mut ray = 0u64;

    while row >= 0 && row < 8 && col >= 0 && col < 8 {
        ray |= 1u64 << (row * 8 + col);
        row += row_step;
        col += col_step;
    }

    ray
}
