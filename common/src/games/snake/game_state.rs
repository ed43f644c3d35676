use crate::games::SessionRng;
use super::entity::Snake;
use super::settings::SnakeSettings;
use super::types::{Direction, GameOverReason, Phase, Point, TickOutcome, WallCollisionMode};

const MAX_FOOD_ATTEMPTS: usize = 100;
// Above this share of occupied cells, random probing wastes most attempts.
const FREE_CELL_SCAN_OCCUPANCY: f32 = 0.5;

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    snake: Snake,
    direction: Direction,
    pending_direction: Direction,
    food: Option<Point>,
    score: u32,
    high_score: u32,
    speed_interval_ms: u32,
    phase: Phase,
    game_over_reason: Option<GameOverReason>,
    settings: SnakeSettings,
}

impl SnakeGameState {
    pub fn new(settings: SnakeSettings, high_score: u32, rng: &mut SessionRng) -> Self {
        let center = settings.grid_size / 2;
        let mut state = Self {
            snake: Snake::new(Point::new(center, center)),
            direction: Direction::Right,
            pending_direction: Direction::Right,
            food: None,
            score: 0,
            high_score,
            speed_interval_ms: settings.initial_interval_ms,
            phase: Phase::Idle,
            game_over_reason: None,
            settings,
        };
        state.food = state.pick_food_cell(rng);
        state
    }

    /// Back to the initial layout in `Idle`. The high score survives.
    pub fn reset(&mut self, rng: &mut SessionRng) {
        *self = Self::new(self.settings.clone(), self.high_score, rng);
    }

    pub fn start(&mut self, rng: &mut SessionRng) {
        if self.phase == Phase::Over {
            self.reset(rng);
        }
        self.phase = Phase::Running;
    }

    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            other => other,
        };
    }

    /// Returns `false` when the request reverses the applied direction and is ignored.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(&self.direction) {
            return false;
        }
        self.pending_direction = direction;
        true
    }

    pub fn tick(&mut self, rng: &mut SessionRng) -> TickOutcome {
        if self.phase != Phase::Running {
            return TickOutcome::Skipped;
        }

        self.direction = self.pending_direction;

        let Some(next_head) = self.next_head() else {
            return self.finish(GameOverReason::WallCollision);
        };

        if self.snake.contains(&next_head) {
            return self.finish(GameOverReason::SelfCollision);
        }

        self.snake.push_head(next_head);

        if self.food != Some(next_head) {
            self.snake.drop_tail();
            return TickOutcome::Moved;
        }

        self.score = self.score.saturating_add(self.settings.food_reward);
        self.high_score = self.high_score.max(self.score);
        self.speed_interval_ms = self.settings.next_interval_ms(self.speed_interval_ms);
        self.food = self.pick_food_cell(rng);

        if self.food.is_none() {
            return self.finish(GameOverReason::BoardFilled);
        }

        TickOutcome::AteFood { score: self.score }
    }

    fn finish(&mut self, reason: GameOverReason) -> TickOutcome {
        self.phase = Phase::Over;
        self.game_over_reason = Some(reason);
        TickOutcome::GameOver(reason)
    }

    fn next_head(&self) -> Option<Point> {
        let head = self.snake.head();
        let (dx, dy) = self.direction.delta();
        let size = self.settings.grid_size as i64;
        let x = head.x as i64 + dx as i64;
        let y = head.y as i64 + dy as i64;

        match self.settings.wall_collision_mode {
            WallCollisionMode::Death => {
                if x < 0 || y < 0 || x >= size || y >= size {
                    return None;
                }
                Some(Point::new(x as usize, y as usize))
            }
            WallCollisionMode::WrapAround => Some(Point::new(
                x.rem_euclid(size) as usize,
                y.rem_euclid(size) as usize,
            )),
        }
    }

    /// Uniformly random free cell, `None` once the snake covers the board.
    fn pick_food_cell(&self, rng: &mut SessionRng) -> Option<Point> {
        let size = self.settings.grid_size;
        let total_cells = size * size;
        if self.snake.len() >= total_cells {
            return None;
        }

        let occupancy = self.snake.len() as f32 / total_cells as f32;
        if occupancy < FREE_CELL_SCAN_OCCUPANCY {
            for _ in 0..MAX_FOOD_ATTEMPTS {
                let candidate = Point::new(rng.random_range(0..size), rng.random_range(0..size));
                if !self.snake.contains(&candidate) {
                    return Some(candidate);
                }
            }
        }

        let free_cells: Vec<Point> = (0..size)
            .flat_map(|y| (0..size).map(move |x| Point::new(x, y)))
            .filter(|cell| !self.snake.contains(cell))
            .collect();
        rng.choose(&free_cells).copied()
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    pub fn food(&self) -> Option<Point> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn speed_interval_ms(&self) -> u32 {
        self.speed_interval_ms
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over_reason
    }

    pub fn grid_size(&self) -> usize {
        self.settings.grid_size
    }


    #[cfg(test)]
    pub(crate) fn set_layout(&mut self, segments: &[Point], direction: Direction, food: Option<Point>) {
        self.snake = Snake::from_segments(segments).expect("test layout must be a valid snake");
        self.direction = direction;
        self.pending_direction = direction;
        self.food = food;
    }
}
