use super::body::Body;
use super::types::{Arena, DeathReason};

/// Why the body in its current shape ends the game, if it does.
///
/// The tail is left out of the self-bite test: in a non-growing step it is
/// vacated in the same tick the head arrives.
pub fn collision(body: &Body, arena: &Arena) -> Option<DeathReason> {
    let head = body.head();

    if head.x < 0 || head.x > arena.max_x() || head.y < 0 || head.y > arena.max_y() {
        return Some(DeathReason::WallCollision);
    }

    if body.interior().any(|segment| *segment == head) {
        return Some(DeathReason::SelfCollision);
    }

    None
}

pub fn is_game_over(body: &Body, arena: &Arena) -> bool {
    collision(body, arena).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Cell;

    fn arena() -> Arena {
        Arena::new(300, 300, 10)
    }

    fn body(cells: &[(i32, i32)]) -> Body {
        Body::from_cells(cells.iter().map(|&(x, y)| Cell::new(x, y))).unwrap()
    }

    #[test]
    fn test_right_wall_breach() {
        let b = body(&[(305, 100), (295, 100), (285, 100)]);
        assert_eq!(collision(&b, &arena()), Some(DeathReason::WallCollision));
    }

    #[test]
    fn test_last_column_is_inside() {
        let b = body(&[(290, 100), (280, 100)]);
        assert!(!is_game_over(&b, &arena()));
    }

    #[test]
    fn test_left_top_and_bottom_breaches() {
        assert!(is_game_over(&body(&[(-10, 100), (0, 100)]), &arena()));
        assert!(is_game_over(&body(&[(100, -10), (100, 0)]), &arena()));
        assert!(is_game_over(&body(&[(100, 300), (100, 290)]), &arena()));
        assert!(!is_game_over(&body(&[(0, 0), (10, 0)]), &arena()));
    }

    #[test]
    fn test_head_on_interior_segment() {
        let b = body(&[
            (100, 90),
            (100, 100),
            (110, 100),
            (110, 90),
            (100, 90),
            (90, 90),
        ]);
        assert_eq!(collision(&b, &arena()), Some(DeathReason::SelfCollision));
    }

    #[test]
    fn test_head_on_tail_is_not_a_bite() {
        let b = body(&[(100, 90), (100, 100), (110, 100), (110, 90), (100, 90)]);
        assert!(!is_game_over(&b, &arena()));
    }

    #[test]
    fn test_wall_reported_before_bite() {
        let b = body(&[(-10, 0), (0, 0), (-10, 0), (-20, 0)]);
        assert_eq!(collision(&b, &arena()), Some(DeathReason::WallCollision));
    }
}
