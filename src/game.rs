use std::sync::Arc;

use crate::board::{Board, Cell};
use crate::config::INITIAL_SNAKE_LENGTH;
use crate::food::FoodSpawner;
use crate::input::{Direction, DirectionLatch};
use crate::score::ScoreStore;
use crate::snake::Snake;

/// Current simulation status. The transition to `Over` is one-way; a new
/// game starts only through [`GameState::reset`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Over,
}

/// What ended the game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameOverReason {
    WallCollision,
    SelfCollision,
    /// The snake covers every cell, leaving nowhere to spawn food.
    BoardFilled,
}

/// Complete simulation state for one session.
///
/// Owns the board, snake, food, score, and high-score lifecycle; one
/// coordinating context drives it exclusively through [`GameState::tick`].
/// The presentation layer reads it through immutable accessors only. The
/// pending direction is held in a [`DirectionLatch`] so an input callback
/// may feed directions concurrently with a pending tick.
pub struct GameState {
    board: Board,
    snake: Snake,
    food: Cell,
    spawner: FoodSpawner,
    latch: Arc<DirectionLatch>,
    score: u32,
    high_score: u32,
    status: GameStatus,
    over_reason: Option<GameOverReason>,
    store: Box<dyn ScoreStore>,
}

impl GameState {
    /// Creates a fresh game. The high score is loaded from the store once,
    /// here, and persists across resets.
    #[must_use]
    pub fn new(board: Board, store: Box<dyn ScoreStore>) -> Self {
        Self::with_spawner(board, store, FoodSpawner::new())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(board: Board, store: Box<dyn ScoreStore>, seed: u64) -> Self {
        Self::with_spawner(board, store, FoodSpawner::with_seed(seed))
    }

    fn with_spawner(board: Board, store: Box<dyn ScoreStore>, mut spawner: FoodSpawner) -> Self {
        debug_assert!(i32::from(board.size()) >= INITIAL_SNAKE_LENGTH);

        let snake = starting_snake();
        let food = spawner
            .spawn(board, &snake)
            .expect("a fresh board must have free cells");

        Self {
            board,
            snake,
            food,
            spawner,
            latch: Arc::new(DirectionLatch::new(Direction::Right)),
            score: 0,
            high_score: store.read(),
            status: GameStatus::Running,
            over_reason: None,
            store,
        }
    }

    /// Creates a fully specified state for scripted test scenarios.
    #[must_use]
    pub fn from_parts(
        board: Board,
        snake: Snake,
        food: Cell,
        direction: Direction,
        store: Box<dyn ScoreStore>,
        seed: u64,
    ) -> Self {
        Self {
            board,
            snake,
            food,
            spawner: FoodSpawner::with_seed(seed),
            latch: Arc::new(DirectionLatch::new(direction)),
            score: 0,
            high_score: store.read(),
            status: GameStatus::Running,
            over_reason: None,
            store,
        }
    }

    /// Advances the simulation by one tick. Does nothing once the game is
    /// over.
    pub fn tick(&mut self) {
        if self.status == GameStatus::Over {
            return;
        }

        let direction = self.latch.commit();
        let new_head = self.snake.head().step(direction);
        let is_eating = new_head == self.food;

        // Collision rules run against the prospective body, before any
        // mutation: on a non-growing step the outgoing tail cell is legal.
        if !self.board.in_bounds(new_head) {
            self.game_over(GameOverReason::WallCollision);
            return;
        }
        if self.snake.would_self_collide(new_head, is_eating) {
            self.game_over(GameOverReason::SelfCollision);
            return;
        }

        self.snake.advance(new_head, is_eating);
        if is_eating {
            self.score += 1;
            match self.spawner.spawn(self.board, &self.snake) {
                Some(cell) => self.food = cell,
                None => self.game_over(GameOverReason::BoardFilled),
            }
        }
    }

    /// Records the direction to apply on the next tick.
    ///
    /// Reversals of the current direction of travel are ignored; among valid
    /// requests the last one before the tick wins.
    pub fn set_direction(&self, direction: Direction) {
        self.latch.request(direction);
    }

    /// Returns a handle for feeding directions from a separate input
    /// context.
    #[must_use]
    pub fn direction_handle(&self) -> Arc<DirectionLatch> {
        Arc::clone(&self.latch)
    }

    /// Starts a new game on the same board. The high score carries over.
    pub fn reset(&mut self) {
        self.snake = starting_snake();
        self.latch.reset(Direction::Right);
        self.food = self
            .spawner
            .spawn(self.board, &self.snake)
            .expect("a fresh board must have free cells");
        self.score = 0;
        self.status = GameStatus::Running;
        self.over_reason = None;
    }

    #[must_use]
    pub fn board(&self) -> Board {
        self.board
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn food(&self) -> Cell {
        self.food
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn over_reason(&self) -> Option<GameOverReason> {
        self.over_reason
    }

    /// Returns the current direction of travel.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.latch.current()
    }

    fn game_over(&mut self, reason: GameOverReason) {
        self.status = GameStatus::Over;
        self.over_reason = Some(reason);

        // The one place the high score is written: once, on the transition.
        if self.score > self.high_score {
            self.high_score = self.score;
            self.store.write(self.high_score);
        }
    }
}

/// The fixed starting layout: three cells along the top row, head rightmost,
/// moving right.
fn starting_snake() -> Snake {
    let cells = (0..INITIAL_SNAKE_LENGTH)
        .rev()
        .map(|x| Cell::new(x, 0))
        .collect();
    Snake::from_segments(cells)
}
