use snake_engine::{Cell, Direction, EngineCommand, GameState, GameStatus, InputSource};

/// Greedy driver for unattended runs: heads for the food along the shortest
/// Manhattan distance and refuses moves that would end the game next tick.
pub struct Autopilot {
    restart_finished_games: bool,
}

impl Autopilot {
    pub fn new(restart_finished_games: bool) -> Self {
        Self {
            restart_finished_games,
        }
    }

    pub fn choose_direction(state: &GameState) -> Option<Direction> {
        let head = state.body().head();
        let current = state.direction();
        let food = state.food();

        Direction::ALL
            .into_iter()
            .filter(|dir| !dir.is_opposite(&current))
            .filter_map(|dir| {
                let next = Self::next_cell(head, dir, state);
                Self::is_safe(next, state).then_some((dir, next))
            })
            .min_by_key(|&(dir, next)| {
                // Prefer keeping course on ties.
                (Self::manhattan_distance(next, food), dir != current)
            })
            .map(|(dir, _)| dir)
    }

    fn next_cell(from: Cell, direction: Direction, state: &GameState) -> Cell {
        let (dx, dy) = direction.velocity(state.arena().segment_size);
        from.offset(dx, dy)
    }

    fn is_safe(next: Cell, state: &GameState) -> bool {
        if !state.arena().contains(next) {
            return false;
        }
        let body = state.body();
        if next == state.food() {
            return !body.contains(next);
        }
        let tail = body.tail();
        !body.iter().any(|&segment| segment == next && segment != tail)
    }

    fn manhattan_distance(a: Cell, b: Cell) -> i32 {
        (a.x - b.x).abs() + (a.y - b.y).abs()
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, state: &GameState) -> Vec<EngineCommand> {
        match state.status() {
            GameStatus::Over if self.restart_finished_games => vec![EngineCommand::Restart],
            GameStatus::Running => match Self::choose_direction(state) {
                Some(direction) if direction != state.direction() => {
                    vec![EngineCommand::Turn(direction)]
                }
                _ => Vec::new(),
            },
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_engine::{Arena, Body, GameSettings, SnakeEngine, TickOutcome};

    fn state(cells: &[(i32, i32)], direction: Direction, food: (i32, i32)) -> GameState {
        let body = Body::from_cells(cells.iter().map(|&(x, y)| Cell::new(x, y))).unwrap();
        GameState::from_parts(
            Arena::new(300, 300, 10),
            body,
            direction,
            Cell::new(food.0, food.1),
            300,
        )
        .unwrap()
    }

    #[test]
    fn test_turns_toward_food() {
        let s = state(&[(100, 100), (90, 100)], Direction::Right, (100, 50));
        assert_eq!(Autopilot::choose_direction(&s), Some(Direction::Up));
    }

    #[test]
    fn test_keeps_course_when_aligned() {
        let s = state(&[(100, 100), (90, 100)], Direction::Right, (200, 100));
        let mut autopilot = Autopilot::new(false);
        assert!(autopilot.poll(&s).is_empty());
    }

    #[test]
    fn test_avoids_wall() {
        let s = state(&[(290, 100), (280, 100)], Direction::Right, (290, 0));
        assert_eq!(Autopilot::choose_direction(&s), Some(Direction::Up));
    }

    #[test]
    fn test_avoids_own_body_but_may_follow_tail() {
        let s = state(
            &[(100, 100), (110, 100), (110, 90), (100, 90)],
            Direction::Left,
            (100, 0),
        );
        assert_eq!(Autopilot::choose_direction(&s), Some(Direction::Up));

        let s = state(
            &[(100, 100), (110, 100), (110, 90), (100, 90), (90, 90)],
            Direction::Left,
            (100, 0),
        );
        assert_eq!(Autopilot::choose_direction(&s), Some(Direction::Left));
    }

    #[test]
    fn test_restarts_finished_game_when_enabled() {
        let mut engine = SnakeEngine::new(GameSettings::default(), 3).unwrap();
        while !matches!(engine.tick(), TickOutcome::GameOver(_)) {}

        assert_eq!(Autopilot::new(true).poll(engine.state()), vec![EngineCommand::Restart]);
        assert!(Autopilot::new(false).poll(engine.state()).is_empty());
    }

    #[test]
    fn test_autopilot_eats_on_default_arena() {
        let mut engine = SnakeEngine::new(GameSettings::default(), 11).unwrap();
        let mut autopilot = Autopilot::new(false);
        for _ in 0..2_000 {
            for command in autopilot.poll(engine.state()) {
                engine.apply(command);
            }
            if let TickOutcome::GameOver(_) = engine.tick() {
                break;
            }
        }
        assert!(engine.state().score() >= 30);
    }
}
