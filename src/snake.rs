use std::collections::VecDeque;

use crate::board::Cell;

/// Ordered snake body, head first, tail last.
///
/// Pure movement mechanics only: bounds and collision rules are enforced by
/// the game state machine, which tests the prospective head before calling
/// [`Snake::advance`].
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Creates a snake from explicit body cells (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>) -> Self {
        debug_assert!(!segments.is_empty());
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Returns the current head cell.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Prepends `new_head`; pops the tail unless this is a growing step.
    pub fn advance(&mut self, new_head: Cell, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns true when moving the head to `new_head` would hit the body.
    ///
    /// On a non-growing step the tail cell vacates in the same step the head
    /// arrives, so it is not a collision target; on a growing step the tail
    /// stays put and the full body counts.
    #[must_use]
    pub fn would_self_collide(&self, new_head: Cell, growing: bool) -> bool {
        let collision_targets = if growing {
            self.body.len()
        } else {
            self.body.len() - 1
        };

        self.body
            .iter()
            .take(collision_targets)
            .any(|segment| *segment == new_head)
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body cells from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Cell;

    use super::Snake;

    fn three_cell_snake() -> Snake {
        Snake::from_segments(vec![Cell::new(2, 0), Cell::new(1, 0), Cell::new(0, 0)])
    }

    #[test]
    fn advance_without_growth_vacates_the_tail() {
        let mut snake = three_cell_snake();

        snake.advance(Cell::new(3, 0), false);

        assert_eq!(snake.head(), Cell::new(3, 0));
        assert_eq!(snake.len(), 3);
        assert!(!snake.occupies(Cell::new(0, 0)));
    }

    #[test]
    fn advance_with_growth_keeps_the_tail() {
        let mut snake = three_cell_snake();

        snake.advance(Cell::new(3, 0), true);

        assert_eq!(snake.len(), 4);
        assert!(snake.occupies(Cell::new(0, 0)));
    }

    #[test]
    fn outgoing_tail_is_not_a_collision_target() {
        // Square loop: the head chases the tail cell.
        let snake = Snake::from_segments(vec![
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(1, 1),
            Cell::new(1, 0),
        ]);

        assert!(!snake.would_self_collide(Cell::new(1, 0), false));
    }

    #[test]
    fn tail_cell_collides_on_a_growing_step() {
        let snake = Snake::from_segments(vec![
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(1, 1),
            Cell::new(1, 0),
        ]);

        assert!(snake.would_self_collide(Cell::new(1, 0), true));
    }

    #[test]
    fn mid_body_cells_always_collide() {
        let snake = three_cell_snake();

        assert!(snake.would_self_collide(Cell::new(1, 0), false));
        assert!(snake.would_self_collide(Cell::new(1, 0), true));
    }

    #[test]
    fn occupies_matches_every_segment() {
        let snake = three_cell_snake();

        assert!(snake.occupies(Cell::new(2, 0)));
        assert!(snake.occupies(Cell::new(0, 0)));
        assert!(!snake.occupies(Cell::new(3, 0)));
    }
}
