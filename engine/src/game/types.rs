use std::fmt;

/// Grid-aligned position in arena units. Signed so a head that left the arena
/// through the left or top wall is still representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }

    /// Step vector for one tick; `y` grows downwards.
    pub fn velocity(&self, segment_size: i32) -> (i32, i32) {
        match self {
            Direction::Up => (0, -segment_size),
            Direction::Down => (0, segment_size),
            Direction::Left => (-segment_size, 0),
            Direction::Right => (segment_size, 0),
        }
    }
}

/// Fixed playing field. Every cell lies on a multiple of `segment_size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Arena {
    pub width: i32,
    pub height: i32,
    pub segment_size: i32,
}

impl Arena {
    pub fn new(width: i32, height: i32, segment_size: i32) -> Self {
        Self {
            width,
            height,
            segment_size,
        }
    }

    pub fn columns(&self) -> i32 {
        self.width / self.segment_size
    }

    pub fn rows(&self) -> i32 {
        self.height / self.segment_size
    }

    pub fn cell_count(&self) -> usize {
        (self.columns().max(0) as usize) * (self.rows().max(0) as usize)
    }

    /// Largest x a segment may occupy without crossing the right wall.
    pub fn max_x(&self) -> i32 {
        self.width - self.segment_size
    }

    pub fn max_y(&self) -> i32 {
        self.height - self.segment_size
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..=self.max_x()).contains(&cell.x) && (0..=self.max_y()).contains(&cell.y)
    }

    /// Arena centre snapped down to the grid.
    pub fn centre(&self) -> Cell {
        let s = self.segment_size;
        Cell::new(self.width / 2 / s * s, self.height / 2 / s * s)
    }

    /// Every grid cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let s = self.segment_size;
        (0..self.rows()).flat_map(move |row| {
            (0..self.columns()).map(move |column| Cell::new(column * s, row * s))
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

impl fmt::Display for DeathReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeathReason::WallCollision => write!(f, "hit the wall"),
            DeathReason::SelfCollision => write!(f, "bit itself"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Paused,
    Over,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites() {
        assert!(Direction::Left.is_opposite(&Direction::Right));
        assert!(Direction::Up.is_opposite(&Direction::Down));
        assert!(!Direction::Up.is_opposite(&Direction::Left));
        assert!(!Direction::Up.is_opposite(&Direction::Up));
    }

    #[test]
    fn test_velocity_is_axis_aligned_and_scaled() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.velocity(10);
            assert_eq!(dx.abs() + dy.abs(), 10);
            assert!(dx == 0 || dy == 0);
        }
        assert_eq!(Direction::Up.velocity(10), (0, -10));
    }

    #[test]
    fn test_arena_bounds_account_for_segment_width() {
        let arena = Arena::new(300, 300, 10);
        assert_eq!(arena.max_x(), 290);
        assert!(arena.contains(Cell::new(290, 290)));
        assert!(!arena.contains(Cell::new(300, 0)));
        assert!(!arena.contains(Cell::new(-10, 0)));
    }

    #[test]
    fn test_arena_cells_cover_grid() {
        let arena = Arena::new(40, 30, 10);
        let cells: Vec<Cell> = arena.cells().collect();
        assert_eq!(cells.len(), arena.cell_count());
        assert_eq!(cells.len(), 12);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[11], Cell::new(30, 20));
        assert!(cells.iter().all(|c| arena.contains(*c)));
    }

    #[test]
    fn test_centre_snaps_to_grid() {
        assert_eq!(Arena::new(300, 300, 10).centre(), Cell::new(150, 150));
        assert_eq!(Arena::new(50, 70, 10).centre(), Cell::new(20, 30));
    }
}
