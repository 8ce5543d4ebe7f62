use snake_tui::board::{Board, Cell};
use snake_tui::game::{GameOverReason, GameState, GameStatus};
use snake_tui::input::Direction;
use snake_tui::score::MemoryScoreStore;
use snake_tui::snake::Snake;

#[test]
fn stepwise_turn_food_collection_wall_collision_and_restart() {
    let store = MemoryScoreStore::new();
    let mut state = GameState::from_parts(
        Board::new(6),
        Snake::from_segments(vec![Cell::new(2, 1), Cell::new(1, 1)]),
        Cell::new(2, 0),
        Direction::Right,
        Box::new(store.clone()),
        42,
    );

    // Turn up onto the food cell.
    state.set_direction(Direction::Up);
    state.tick();
    assert_eq!(state.status(), GameStatus::Running);
    assert_eq!(state.score(), 1);
    assert_eq!(state.snake().len(), 3);
    assert_eq!(state.snake().head(), Cell::new(2, 0));
    assert!(state.board().in_bounds(state.food()));
    assert!(!state.snake().occupies(state.food()));

    // Next step leaves the board through the top edge.
    state.tick();
    assert_eq!(state.status(), GameStatus::Over);
    assert_eq!(state.over_reason(), Some(GameOverReason::WallCollision));
    assert_eq!(state.high_score(), 1);
    assert_eq!(store.writes(), vec![1]);

    state.reset();
    assert_eq!(state.status(), GameStatus::Running);
    assert_eq!(state.score(), 0);
    assert_eq!(state.high_score(), 1);
    assert_eq!(state.snake().head(), Cell::new(2, 0));
    assert_eq!(store.writes(), vec![1]);
}
