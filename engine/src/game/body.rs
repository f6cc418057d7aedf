use std::collections::VecDeque;

use super::types::{Arena, Cell};

/// Snake segments, head first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Body {
    cells: VecDeque<Cell>,
}

impl Body {
    /// Initial body for a new game: head one segment left of the arena centre,
    /// the rest trailing to the left, ready to travel right.
    pub fn centered(arena: &Arena, length: usize) -> Self {
        let centre = arena.centre();
        let s = arena.segment_size;
        let cells = (1..=length as i32)
            .map(|k| Cell::new(centre.x - s * k, centre.y))
            .collect();
        Self { cells }
    }

    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Result<Self, String> {
        let cells: VecDeque<Cell> = cells.into_iter().collect();
        if cells.is_empty() {
            return Err("Snake body must have at least one segment".to_string());
        }
        Ok(Self { cells })
    }

    pub fn head(&self) -> Cell {
        *self.cells.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Cell {
        *self.cells.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Segments strictly between head and tail.
    pub fn interior(&self) -> impl Iterator<Item = &Cell> {
        let end = self.cells.len().saturating_sub(1).max(1);
        self.cells.range(1..end)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub(crate) fn push_head(&mut self, cell: Cell) {
        self.cells.push_front(cell);
    }

    /// Removes the tail. A single-segment body is left intact.
    pub(crate) fn pop_tail(&mut self) -> Option<Cell> {
        if self.cells.len() <= 1 {
            return None;
        }
        self.cells.pop_back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_body_matches_default_layout() {
        let body = Body::centered(&Arena::new(300, 300, 10), 4);
        let cells: Vec<Cell> = body.iter().copied().collect();
        assert_eq!(
            cells,
            vec![
                Cell::new(140, 150),
                Cell::new(130, 150),
                Cell::new(120, 150),
                Cell::new(110, 150),
            ]
        );
        assert_eq!(body.head(), Cell::new(140, 150));
        assert_eq!(body.tail(), Cell::new(110, 150));
    }

    #[test]
    fn test_empty_body_rejected() {
        assert!(Body::from_cells(Vec::new()).is_err());
    }

    #[test]
    fn test_interior_excludes_head_and_tail() {
        let body = Body::from_cells([
            Cell::new(0, 0),
            Cell::new(10, 0),
            Cell::new(20, 0),
            Cell::new(30, 0),
        ])
        .unwrap();
        let interior: Vec<Cell> = body.interior().copied().collect();
        assert_eq!(interior, vec![Cell::new(10, 0), Cell::new(20, 0)]);
    }

    #[test]
    fn test_interior_of_short_bodies_is_empty() {
        let one = Body::from_cells([Cell::new(0, 0)]).unwrap();
        assert_eq!(one.interior().count(), 0);
        let two = Body::from_cells([Cell::new(0, 0), Cell::new(10, 0)]).unwrap();
        assert_eq!(two.interior().count(), 0);
    }

    #[test]
    fn test_pop_tail_keeps_last_segment() {
        let mut body = Body::from_cells([Cell::new(0, 0), Cell::new(10, 0)]).unwrap();
        assert_eq!(body.pop_tail(), Some(Cell::new(10, 0)));
        assert_eq!(body.pop_tail(), None);
        assert_eq!(body.len(), 1);
    }
}
