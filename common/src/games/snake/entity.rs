use std::collections::{HashSet, VecDeque};

use super::types::Point;

/// Snake body, head first. `body_set` mirrors `body` for O(1) occupancy checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
}

impl Snake {
    pub fn new(start_pos: Point) -> Self {
        let mut body = VecDeque::new();
        let mut body_set = HashSet::new();
        body.push_back(start_pos);
        body_set.insert(start_pos);
        Self { body, body_set }
    }

    /// Builds a snake from head-first segments. Duplicates and empty input are rejected.
    pub fn from_segments(segments: &[Point]) -> Result<Self, String> {
        if segments.is_empty() {
            return Err("Snake needs at least one segment".to_string());
        }

        let mut body = VecDeque::with_capacity(segments.len());
        let mut body_set = HashSet::with_capacity(segments.len());
        for &segment in segments {
            if !body_set.insert(segment) {
                return Err(format!(
                    "Snake segment ({}, {}) appears twice",
                    segment.x, segment.y
                ));
            }
            body.push_back(segment);
        }

        Ok(Self { body, body_set })
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.body_set.contains(point)
    }

    pub fn segments(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }

    pub fn push_head(&mut self, head: Point) {
        self.body.push_front(head);
        self.body_set.insert(head);
    }

    pub fn drop_tail(&mut self) {
        if self.body.len() <= 1 {
            return;
        }
        if let Some(tail) = self.body.pop_back() {
            self.body_set.remove(&tail);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snake_has_single_segment() {
        let snake = Snake::new(Point::new(3, 4));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Point::new(3, 4));
        assert!(snake.contains(&Point::new(3, 4)));
    }

    #[test]
    fn test_from_segments_rejects_overlap() {
        let result = Snake::from_segments(&[Point::new(1, 1), Point::new(1, 2), Point::new(1, 1)]);
        assert!(result.is_err());
        assert!(Snake::from_segments(&[]).is_err());
    }

    #[test]
    fn test_push_head_and_drop_tail_keep_set_in_sync() {
        let mut snake = Snake::from_segments(&[Point::new(2, 2), Point::new(1, 2)]).unwrap();
        snake.push_head(Point::new(3, 2));
        snake.drop_tail();

        let segments: Vec<Point> = snake.segments().copied().collect();
        assert_eq!(segments, vec![Point::new(3, 2), Point::new(2, 2)]);
        assert!(!snake.contains(&Point::new(1, 2)));
    }

    #[test]
    fn test_drop_tail_never_empties_snake() {
        let mut snake = Snake::new(Point::new(0, 0));
        snake.drop_tail();
        assert_eq!(snake.len(), 1);
    }
}
