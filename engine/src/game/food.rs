use std::collections::HashSet;

use super::body::Body;
use super::types::{Arena, Cell};
use crate::session_rng::SessionRng;
use crate::warn_log;

/// Picks a free grid cell for the next food item.
///
/// Draws up to `retry_limit` uniform candidates first; if all of them land on
/// the body, falls back to scanning the arena and choosing among the free
/// cells. Returns `None` only when the body covers every cell.
pub fn place_food(
    body: &Body,
    arena: &Arena,
    rng: &mut SessionRng,
    retry_limit: usize,
) -> Option<Cell> {
    if arena.columns() <= 0 || arena.rows() <= 0 {
        return None;
    }

    for _ in 0..retry_limit {
        let candidate = rng.random_cell(arena);
        if !body.contains(candidate) {
            return Some(candidate);
        }
    }

    let occupied: HashSet<Cell> = body.iter().copied().collect();
    let free: Vec<Cell> = arena
        .cells()
        .filter(|cell| !occupied.contains(cell))
        .collect();

    warn_log!(
        "Food placement fell back to a scan after {} draws ({} free cells)",
        retry_limit,
        free.len()
    );

    rng.choose_cell(&free)
}
