//! Snake game data structures.
//!
//! A grid game on a toroidal board: the snake wraps around the edges and
//! only dies by running into itself.

use rand::Rng;
use std::collections::VecDeque;

/// Board width in cells.
pub const BOARD_WIDTH: i16 = 17;
/// Board height in cells.
pub const BOARD_HEIGHT: i16 = 15;
/// Fixed simulation step period in milliseconds.
pub const MOVE_INTERVAL_MS: u64 = 100;

/// Random placement attempts before falling back to a scan of free cells.
pub const FOOD_RETRY_LIMIT: u32 = 4096;

/// Cardinal direction for snake movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the (dx, dy) delta for this direction.
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// A position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: i16,
    pub y: i16,
}

impl Cell {
    /// Shift one cell in `dir`, wrapping around the board edges.
    ///
    /// Uses `rem_euclid` so the result is in-bounds even for the negative
    /// intermediate values produced at x = 0 or y = 0.
    pub fn step_wrapped(&self, dir: Direction) -> Cell {
        let (dx, dy) = dir.delta();
        Cell {
            x: (self.x + dx).rem_euclid(BOARD_WIDTH),
            y: (self.y + dy).rem_euclid(BOARD_HEIGHT),
        }
    }
}

/// Lifecycle phase of a snake session.
///
/// Only `Playing` consumes simulation ticks; every other phase is
/// render-only and reacts to control commands alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakePhase {
    Staged,
    Playing,
    Paused,
    GameOver,
}

/// Read-only state export consumed by the renderer.
#[derive(Debug, Clone)]
pub struct SnakeSnapshot {
    pub phase: SnakePhase,
    /// Body cells, head first.
    pub segments: Vec<Cell>,
    pub food: Cell,
    pub score: u32,
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct SnakeGame {
    pub phase: SnakePhase,

    /// Snake body segments. Head is at the front (index 0).
    pub snake: VecDeque<Cell>,
    /// Current facing direction.
    pub direction: Direction,
    /// Direction latched for the next step. At most one request is accepted
    /// per step window; it is consumed (and the latch freed) at step start.
    pub pending_direction: Option<Direction>,

    pub food: Cell,

    pub score: u32,

    /// Sub-step time accumulator (milliseconds).
    pub accumulated_time_ms: u64,
    /// Total simulation steps elapsed.
    pub tick_count: u64,
}

impl Default for SnakeGame {
    fn default() -> Self {
        Self::new()
    }
}

impl SnakeGame {
    /// Create a freshly staged session.
    ///
    /// The snake starts three segments long at mid-board facing right, with
    /// the first food a fixed distance ahead of it.
    pub fn new() -> Self {
        let snake: VecDeque<Cell> = [
            Cell { x: 4, y: 7 },
            Cell { x: 3, y: 7 },
            Cell { x: 2, y: 7 },
        ]
        .into_iter()
        .collect();

        Self {
            phase: SnakePhase::Staged,
            snake,
            direction: Direction::Right,
            pending_direction: None,
            food: Cell { x: 11, y: 7 },
            score: 0,
            accumulated_time_ms: 0,
            tick_count: 0,
        }
    }

    /// Export the read-only snapshot for rendering.
    pub fn snapshot(&self) -> SnakeSnapshot {
        SnakeSnapshot {
            phase: self.phase,
            segments: self.snake.iter().copied().collect(),
            food: self.food,
            score: self.score,
        }
    }
}

/// Find an empty cell for food (not occupied by the snake).
///
/// Draws uniformly at random, rejecting occupied cells. After
/// `FOOD_RETRY_LIMIT` rejections it degrades to a row-major scan of free
/// cells, so the loop terminates even with the board nearly full.
///
/// # Panics
///
/// Panics if no free cell exists. A board-full state is unreachable in
/// normal play: self-collision ends the game before the body can cover
/// every cell.
pub fn place_food<R: Rng>(body: &VecDeque<Cell>, rng: &mut R) -> Cell {
    for _ in 0..FOOD_RETRY_LIMIT {
        let candidate = Cell {
            x: rng.gen_range(0..BOARD_WIDTH),
            y: rng.gen_range(0..BOARD_HEIGHT),
        };
        if !body.contains(&candidate) {
            return candidate;
        }
    }

    for y in 0..BOARD_HEIGHT {
        for x in 0..BOARD_WIDTH {
            let candidate = Cell { x, y };
            if !body.contains(&candidate) {
                return candidate;
            }
        }
    }

    panic!("snake board is full: no free cell left for food placement");
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_game_defaults() {
        let game = SnakeGame::new();
        assert_eq!(game.phase, SnakePhase::Staged);
        assert_eq!(game.score, 0);
        assert_eq!(game.snake.len(), 3);
        assert_eq!(game.direction, Direction::Right);
        assert!(game.pending_direction.is_none());
        assert_eq!(game.food, Cell { x: 11, y: 7 });
    }

    #[test]
    fn test_snake_initial_position() {
        let game = SnakeGame::new();
        assert_eq!(game.snake[0], Cell { x: 4, y: 7 });
        assert_eq!(game.snake[1], Cell { x: 3, y: 7 });
        assert_eq!(game.snake[2], Cell { x: 2, y: 7 });
    }

    #[test]
    fn test_initial_food_not_on_snake() {
        let game = SnakeGame::new();
        assert!(!game.snake.contains(&game.food));
    }

    #[test]
    fn test_direction_opposite() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_step_wrapped_interior() {
        let cell = Cell { x: 4, y: 7 };
        assert_eq!(cell.step_wrapped(Direction::Right), Cell { x: 5, y: 7 });
        assert_eq!(cell.step_wrapped(Direction::Up), Cell { x: 4, y: 6 });
    }

    #[test]
    fn test_step_wrapped_edges() {
        // Max x moving right wraps to column 0
        let cell = Cell {
            x: BOARD_WIDTH - 1,
            y: 7,
        };
        assert_eq!(cell.step_wrapped(Direction::Right), Cell { x: 0, y: 7 });

        // Origin moving left/up wraps to the far edge (negative intermediate)
        let origin = Cell { x: 0, y: 0 };
        assert_eq!(
            origin.step_wrapped(Direction::Left),
            Cell {
                x: BOARD_WIDTH - 1,
                y: 0
            }
        );
        assert_eq!(
            origin.step_wrapped(Direction::Up),
            Cell {
                x: 0,
                y: BOARD_HEIGHT - 1
            }
        );
    }

    #[test]
    fn test_step_wrapped_stays_in_bounds_everywhere() {
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                for dir in [
                    Direction::Up,
                    Direction::Down,
                    Direction::Left,
                    Direction::Right,
                ] {
                    let next = Cell { x, y }.step_wrapped(dir);
                    assert!(next.x >= 0 && next.x < BOARD_WIDTH);
                    assert!(next.y >= 0 && next.y < BOARD_HEIGHT);
                }
            }
        }
    }

    #[test]
    fn test_place_food_avoids_snake() {
        let game = SnakeGame::new();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let food = place_food(&game.snake, &mut rng);
            assert!(!game.snake.contains(&food));
            assert!(food.x >= 0 && food.x < BOARD_WIDTH);
            assert!(food.y >= 0 && food.y < BOARD_HEIGHT);
        }
    }

    #[test]
    fn test_place_food_on_nearly_full_board() {
        // Occupy every cell except one; placement must find it.
        let free = Cell { x: 9, y: 11 };
        let mut body = VecDeque::new();
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                let cell = Cell { x, y };
                if cell != free {
                    body.push_back(cell);
                }
            }
        }

        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(place_food(&body, &mut rng), free);
    }

    #[test]
    #[should_panic(expected = "board is full")]
    fn test_place_food_panics_on_full_board() {
        let mut body = VecDeque::new();
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                body.push_back(Cell { x, y });
            }
        }

        let mut rng = ChaCha8Rng::seed_from_u64(0);
        place_food(&body, &mut rng);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let game = SnakeGame::new();
        let snap = game.snapshot();
        assert_eq!(snap.phase, SnakePhase::Staged);
        assert_eq!(snap.segments.len(), 3);
        assert_eq!(snap.segments[0], game.snake[0]);
        assert_eq!(snap.food, game.food);
        assert_eq!(snap.score, 0);
    }
}
