use super::game_state::SnakeGameState;
use super::types::Phase;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub color: Rgba,
    /// Blur radius in grid cells.
    pub radius: f32,
}

/// Axis-aligned rectangle in grid units: a cell at (x, y) spans `x..x+1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Rgba,
    pub glow: Option<Glow>,
}

impl DrawRect {
    fn cell(x: usize, y: usize, inset: f32, color: Rgba, glow: Option<Glow>) -> Self {
        Self {
            x: x as f32 + inset,
            y: y as f32 + inset,
            width: 1.0 - inset * 2.0,
            height: 1.0 - inset * 2.0,
            color,
            glow,
        }
    }
}

pub const BACKGROUND: Rgba = Rgba::rgb(15, 15, 35);
pub const GRID_LINE: Rgba = Rgba::rgb(40, 40, 70);
pub const FOOD: Rgba = Rgba::rgb(255, 71, 87);
pub const SNAKE_HEAD: Rgba = Rgba::rgb(0, 255, 136);
pub const SNAKE_BODY: Rgba = Rgba::rgb(0, 204, 106);

const GRID_LINE_WIDTH: f32 = 0.04;
const CELL_INSET: f32 = 0.05;

/// Draw list for one frame, back to front. Pure: the state is not touched.
pub fn render(state: &SnakeGameState) -> Vec<DrawRect> {
    let size = state.grid_size();
    let side = size as f32;
    let mut rects = Vec::with_capacity(2 * (size + 1) + state.snake().len() + 2);

    rects.push(DrawRect {
        x: 0.0,
        y: 0.0,
        width: side,
        height: side,
        color: BACKGROUND,
        glow: None,
    });

    for i in 0..=size {
        let offset = i as f32 - GRID_LINE_WIDTH / 2.0;
        rects.push(DrawRect {
            x: offset,
            y: 0.0,
            width: GRID_LINE_WIDTH,
            height: side,
            color: GRID_LINE,
            glow: None,
        });
        rects.push(DrawRect {
            x: 0.0,
            y: offset,
            width: side,
            height: GRID_LINE_WIDTH,
            color: GRID_LINE,
            glow: None,
        });
    }

    if let Some(food) = state.food() {
        rects.push(DrawRect::cell(
            food.x,
            food.y,
            CELL_INSET,
            FOOD,
            Some(Glow { color: FOOD, radius: 0.75 }),
        ));
    }

    // Body first so the head is drawn on top.
    let dimmed = state.phase() == Phase::Over;
    let head = state.snake().head();
    for segment in state.snake().segments().skip(1) {
        let color = if dimmed { SNAKE_BODY.with_alpha(120) } else { SNAKE_BODY };
        rects.push(DrawRect::cell(segment.x, segment.y, CELL_INSET, color, None));
    }
    let head_color = if dimmed { SNAKE_HEAD.with_alpha(120) } else { SNAKE_HEAD };
    rects.push(DrawRect::cell(
        head.x,
        head.y,
        CELL_INSET,
        head_color,
        Some(Glow { color: SNAKE_HEAD, radius: 0.5 }),
    ));

    rects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::SessionRng;
    use crate::games::snake::{Direction, Point, SnakeSettings};

    fn state_with_layout() -> SnakeGameState {
        let mut rng = SessionRng::new(4);
        let mut state = SnakeGameState::new(SnakeSettings::default(), 0, &mut rng);
        state.set_layout(
            &[Point::new(5, 5), Point::new(4, 5), Point::new(3, 5)],
            Direction::Right,
            Some(Point::new(8, 2)),
        );
        state
    }

    #[test]
    fn test_render_contains_background_grid_food_and_snake() {
        let state = state_with_layout();
        let rects = render(&state);

        assert_eq!(rects[0].color, BACKGROUND);
        let grid_lines = rects.iter().filter(|r| r.color == GRID_LINE).count();
        assert_eq!(grid_lines, 2 * 21);
        assert_eq!(rects.iter().filter(|r| r.color == FOOD).count(), 1);
        assert_eq!(rects.iter().filter(|r| r.color == SNAKE_BODY).count(), 2);

        let head = rects.last().unwrap();
        assert_eq!(head.color, SNAKE_HEAD);
        assert!(head.glow.is_some());
        assert!((head.x - 5.05).abs() < 1e-5);
        assert!((head.y - 5.05).abs() < 1e-5);
    }

    #[test]
    fn test_render_does_not_mutate_state() {
        let state = state_with_layout();
        let before = format!("{:?}", state);
        let first = render(&state);
        let second = render(&state);
        assert_eq!(first, second);
        assert_eq!(before, format!("{:?}", state));
    }

    #[test]
    fn test_food_cell_glows() {
        let state = state_with_layout();
        let food = render(&state).into_iter().find(|r| r.color == FOOD).unwrap();
        assert!(food.glow.is_some());
        assert!((food.x - 8.05).abs() < 1e-5);
    }
}
