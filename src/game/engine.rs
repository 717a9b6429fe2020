use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::{
    action::{Action, GameOverChoice},
    config::GameConfig,
    difficulty::DifficultyController,
    food::{Food, FoodKind},
    predator::{Predator, PredatorKind},
    snake::Snake,
    state::{GameState, Phase},
};

/// What ended a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    /// Snake left the playfield
    Boundary,
    /// Snake ran into its own body
    SelfCollision,
    /// A predator caught the head without boost
    Predator(PredatorKind),
}

/// Something noteworthy that happened during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    FoodEaten { kind: FoodKind, score: u32 },
    /// Uneaten special food ran out and was replaced
    FoodExpired,
    /// Boost carried the head through a predator
    Escaped(PredatorKind),
    /// A predator ran into the body and fled
    Repelled(PredatorKind),
    Taunted { kind: PredatorKind, anger: u8 },
    Died(DeathCause),
    NewHighScore(u32),
    Paused,
    Resumed,
}

/// Result of a game step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepResult {
    /// Whether the game is over after this step
    pub terminated: bool,
    /// Events in the order they happened
    pub events: Vec<StepEvent>,
}

impl StepResult {
    pub fn ate_food(&self) -> Option<FoodKind> {
        self.events.iter().find_map(|event| match event {
            StepEvent::FoodEaten { kind, .. } => Some(*kind),
            _ => None,
        })
    }

    pub fn death(&self) -> Option<DeathCause> {
        self.events.iter().find_map(|event| match event {
            StepEvent::Died(cause) => Some(*cause),
            _ => None,
        })
    }

    pub fn new_high_score(&self) -> Option<u32> {
        self.events.iter().find_map(|event| match event {
            StepEvent::NewHighScore(score) => Some(*score),
            _ => None,
        })
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: ChaCha8Rng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Create an engine whose random choices are reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build a fresh world waiting on the main menu
    pub fn reset(&mut self, high_score: u32) -> GameState {
        let field = self.config.playfield();
        let snake = Snake::new(field.center(), &self.config);
        let food = Food::spawn(snake.body(), &self.config, &mut self.rng);
        let predators = PredatorKind::ALL
            .iter()
            .map(|&kind| Predator::new(kind, &self.config, &mut self.rng))
            .collect();

        GameState {
            snake,
            food,
            predators,
            difficulty: DifficultyController::new(&self.config),
            field,
            phase: Phase::Menu,
            score: 0,
            high_score,
            beat_high_score: false,
            frames: 0,
            speed: self.config.initial_frame_rate,
            taunt_timer: self.config.first_taunt.sample(&mut self.rng),
            death_frames: 0,
            death_animation_frames: self.config.death_animation_frames,
            idle_frame_rate: self.config.idle_frame_rate,
        }
    }

    /// Leave the main menu and begin playing
    pub fn start(&mut self, state: &mut GameState) -> bool {
        if state.phase != Phase::Menu {
            return false;
        }
        state.phase = Phase::Playing;
        tracing::info!(high_score = state.high_score, "game started");
        true
    }

    /// Replace the world with a new game, keeping the high score
    pub fn restart(&mut self, state: &mut GameState) {
        *state = self.reset(state.high_score);
        state.phase = Phase::Playing;
        tracing::info!(high_score = state.high_score, "game restarted");
    }

    /// Apply the game-over screen choice once the death animation is done
    pub fn choose(&mut self, state: &mut GameState, choice: GameOverChoice) -> bool {
        if !state.death_animation_finished() {
            return false;
        }
        match choice {
            GameOverChoice::Restart => self.restart(state),
            GameOverChoice::MainMenu => *state = self.reset(state.high_score),
        }
        true
    }

    /// Execute one frame with the inputs gathered since the previous one
    pub fn step(&mut self, state: &mut GameState, inputs: &[Action]) -> StepResult {
        let mut result = StepResult::default();

        for &action in inputs {
            self.apply(state, action, &mut result);
        }

        match state.phase {
            Phase::Playing => self.advance(state, &mut result),
            Phase::GameOver => {
                if state.death_frames < state.death_animation_frames {
                    state.death_frames += 1;
                }
            }
            Phase::Menu | Phase::Paused => {}
        }

        result.terminated = state.phase == Phase::GameOver;
        result
    }

    fn apply(&mut self, state: &mut GameState, action: Action, result: &mut StepResult) {
        match (action, state.phase) {
            (Action::TogglePause, Phase::Playing) => {
                state.phase = Phase::Paused;
                result.events.push(StepEvent::Paused);
            }
            (Action::TogglePause, Phase::Paused) => {
                state.phase = Phase::Playing;
                result.events.push(StepEvent::Resumed);
            }
            (Action::Move(direction), Phase::Playing) => state.snake.change_direction(direction),
            (Action::Boost, Phase::Playing) => {
                if state.snake.activate_boost() {
                    tracing::debug!(charge = state.snake.boost_charge(), "boost activated");
                }
            }
            _ => {}
        }
    }

    fn advance(&mut self, state: &mut GameState, result: &mut StepResult) {
        state.snake.update_boost();
        self.tick_taunts(state, result);
        state.snake.move_forward();
        state.frames += 1;

        if state.snake.check_collision_with_boundaries(&state.field) {
            let head = state.snake.head_index();
            state.snake.mark_dead(head);
            self.end_game(state, DeathCause::Boundary, result);
        } else if state.snake.check_collision_with_self() {
            let index = state.snake.collision_index().unwrap_or(0);
            state.snake.mark_dead(index);
            self.end_game(state, DeathCause::SelfCollision, result);
        } else {
            self.eat(state, result);
            self.run_predators(state, result);
            if state.phase == Phase::Playing && !state.food.update() {
                state.food.regenerate(state.snake.body(), &self.config, &mut self.rng);
                result.events.push(StepEvent::FoodExpired);
            }
        }

        if state.score > state.high_score {
            state.high_score = state.score;
            state.beat_high_score = true;
            result.events.push(StepEvent::NewHighScore(state.score));
        }
    }

    fn tick_taunts(&mut self, state: &mut GameState, result: &mut StepResult) {
        state.taunt_timer -= 1;
        if state.taunt_timer > 0 {
            return;
        }
        state.taunt_timer = self.config.taunt_interval.sample(&mut self.rng);

        let active: Vec<PredatorKind> = state.active_predators().map(|p| p.kind()).collect();
        if let Some(&kind) = active.choose(&mut self.rng) {
            let anger = state.difficulty.taunt(kind);
            result.events.push(StepEvent::Taunted { kind, anger });
        }
    }

    fn eat(&mut self, state: &mut GameState, result: &mut StepResult) {
        if !state.snake.check_collision_with_food(&state.food) {
            return;
        }

        let kind = state.food.kind();
        let reward = match kind {
            FoodKind::Regular => self.config.regular_food,
            FoodKind::Special => self.config.special_food,
        };
        state.score += reward.score;
        state.snake.grow(reward.growth);
        for _ in 0..reward.boost_charges {
            state.snake.add_boost_charge();
        }
        state.speed = (state.speed + self.config.frame_rate_step).min(self.config.max_frame_rate);

        state.food.regenerate(state.snake.body(), &self.config, &mut self.rng);
        result.events.push(StepEvent::FoodEaten {
            kind,
            score: state.score,
        });
    }

    fn run_predators(&mut self, state: &mut GameState, result: &mut StepResult) {
        let level = state.difficulty.assess(state.score);
        let head = state.snake.head();

        for index in 0..state.predators.len() {
            let kind = state.predators[index].kind();
            if !level.is_eligible(kind) {
                continue;
            }
            let active_count = state.active_predators().count();

            let predator = &mut state.predators[index];
            predator.set_speed(level.speed(kind));
            predator.set_anger(state.difficulty.anger(kind));

            if !predator.is_active() {
                if active_count >= level.max_simultaneous {
                    predator.hold_spawn();
                    continue;
                }
                if predator.spawn_timer() > 0 {
                    predator.accelerate_spawn(level.spawn_acceleration);
                }
            }

            let contact = predator.update(head, state.snake.body(), &mut self.rng);
            if contact.head {
                if state.snake.is_boost_active() {
                    predator.deactivate(self.config.escape_respawn, &mut self.rng);
                    tracing::debug!(?kind, "snake escaped on boost");
                    result.events.push(StepEvent::Escaped(kind));
                } else {
                    let head_index = state.snake.head_index();
                    state.snake.mark_dead(head_index);
                    self.end_game(state, DeathCause::Predator(kind), result);
                    break;
                }
            } else if contact.body {
                predator.deactivate(self.config.repel_respawn, &mut self.rng);
                tracing::debug!(?kind, "predator repelled by body");
                result.events.push(StepEvent::Repelled(kind));
            }
        }
    }

    fn end_game(&mut self, state: &mut GameState, cause: DeathCause, result: &mut StepResult) {
        state.phase = Phase::GameOver;
        state.death_frames = 0;
        tracing::info!(?cause, score = state.score, frames = state.frames, "game over");
        result.events.push(StepEvent::Died(cause));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, FrameWindow, Point, Position};

    /// Config with taunts pushed out of the way
    fn quiet_config() -> GameConfig {
        GameConfig {
            first_taunt: FrameWindow::new(10_000, 10_000),
            ..GameConfig::default()
        }
    }

    fn playing(config: GameConfig) -> (GameEngine, GameState) {
        let mut engine = GameEngine::with_seed(config, 17);
        let mut state = engine.reset(0);
        engine.start(&mut state);
        // Food out of the snake's way unless a test moves it
        state.food = Food::regular_at(Position::new(0, 0));
        (engine, state)
    }

    fn place_predator(state: &mut GameState, kind: PredatorKind, at: Point) {
        let predator = state.predator_mut(kind).unwrap();
        predator.activate_at(at);
    }

    #[test]
    fn test_reset() {
        let mut engine = GameEngine::with_seed(GameConfig::default(), 1);
        let state = engine.reset(12);

        assert_eq!(state.phase, Phase::Menu);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 12);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), state.field.center());
        assert!(!state.snake.body().contains(&state.food.position()));
        assert_eq!(state.active_predators().count(), 0);
    }

    #[test]
    fn test_menu_does_not_advance() {
        let mut engine = GameEngine::with_seed(GameConfig::default(), 1);
        let mut state = engine.reset(0);
        let result = engine.step(&mut state, &[Action::Move(Direction::Up)]);
        assert!(!result.terminated);
        assert_eq!(state.frames, 0);
        assert!(engine.start(&mut state));
        assert!(!engine.start(&mut state));
        assert!(state.is_playing());
    }

    #[test]
    fn test_basic_movement() {
        let (mut engine, mut state) = playing(quiet_config());
        let initial_head = state.snake.head();

        let result = engine.step(&mut state, &[Action::Move(Direction::Right)]);

        assert!(!result.terminated);
        assert_eq!(state.frames, 1);
        assert_eq!(state.snake.head(), initial_head.moved_by(20, 0));
    }

    #[test]
    fn test_food_consumption() {
        let (mut engine, mut state) = playing(quiet_config());
        let head = state.snake.head();
        state.food = Food::regular_at(head.moved_by(20, 0));

        let result = engine.step(&mut state, &[Action::Move(Direction::Right)]);

        assert_eq!(result.ate_food(), Some(FoodKind::Regular));
        assert_eq!(state.score, 1);
        assert_eq!(state.snake.target_length(), 2);
        assert_eq!(state.snake.boost_charge(), 1);
        assert_eq!(state.speed, 8.25);
        assert!(!state.snake.body().contains(&state.food.position()));
        assert_eq!(result.new_high_score(), Some(1));
    }

    #[test]
    fn test_special_food_consumption() {
        let (mut engine, mut state) = playing(quiet_config());
        let head = state.snake.head();
        state.food = Food::special_at(head.moved_by(0, -20), 150);

        let result = engine.step(&mut state, &[Action::Move(Direction::Up)]);

        assert_eq!(result.ate_food(), Some(FoodKind::Special));
        assert_eq!(state.score, 5);
        assert_eq!(state.snake.target_length(), 4);
        assert_eq!(state.snake.boost_charge(), 2);
    }

    #[test]
    fn test_speed_capped() {
        let (mut engine, mut state) = playing(quiet_config());
        state.speed = 24.9;
        state.food = Food::regular_at(state.snake.head().moved_by(20, 0));
        engine.step(&mut state, &[Action::Move(Direction::Right)]);
        assert_eq!(state.speed, 25.0);
    }

    #[test]
    fn test_wall_collision() {
        let config = quiet_config();
        let (mut engine, mut state) = playing(config.clone());
        state.snake = Snake::new(Position::new(0, 100), &config);

        let result = engine.step(&mut state, &[Action::Move(Direction::Left)]);

        assert!(result.terminated);
        assert_eq!(result.death(), Some(DeathCause::Boundary));
        assert_eq!(state.phase, Phase::GameOver);
        assert!(state.snake.is_dead());
        assert_eq!(state.snake.collision_index(), Some(state.snake.head_index()));
    }

    #[test]
    fn test_self_collision_ends_game() {
        let config = quiet_config();
        let (mut engine, mut state) = playing(config.clone());
        let mut snake = Snake::new(Position::new(100, 100), &config);
        snake.grow(4);
        for direction in [Direction::Right, Direction::Right, Direction::Down, Direction::Left] {
            snake.change_direction(direction);
            snake.move_forward();
        }
        state.snake = snake;

        let result = engine.step(&mut state, &[Action::Move(Direction::Up)]);
        assert_eq!(result.death(), Some(DeathCause::SelfCollision));
        assert!(state.snake.collision_index().unwrap() < state.snake.head_index());
    }

    #[test]
    fn test_pause_gates_simulation() {
        let (mut engine, mut state) = playing(quiet_config());
        let head = state.snake.head();

        let result = engine.step(
            &mut state,
            &[Action::TogglePause, Action::Move(Direction::Down)],
        );
        assert_eq!(result.events, vec![StepEvent::Paused]);
        assert_eq!(state.phase, Phase::Paused);

        for _ in 0..5 {
            engine.step(&mut state, &[Action::Boost, Action::Move(Direction::Down)]);
        }
        assert_eq!(state.snake.head(), head);
        assert_eq!(state.frames, 0);

        let result = engine.step(&mut state, &[Action::TogglePause]);
        assert_eq!(result.events, vec![StepEvent::Resumed]);
        assert!(state.is_playing());
    }

    #[test]
    fn test_boost_escape_keeps_snake_alive() {
        let (mut engine, mut state) = playing(quiet_config());
        state.snake.add_boost_charge();
        let head = state.snake.head();
        let center = head.cell_center(20);
        place_predator(&mut state, PredatorKind::DirectPursuit, center);

        let result = engine.step(&mut state, &[Action::Boost]);

        assert!(!result.terminated);
        assert!(result.events.contains(&StepEvent::Escaped(PredatorKind::DirectPursuit)));
        let predator = state.predator(PredatorKind::DirectPursuit).unwrap();
        assert!(!predator.is_active());
        assert!((200..=400).contains(&predator.spawn_timer()));
        assert!(state.is_playing());
        assert!(!state.snake.is_dead());
    }

    #[test]
    fn test_head_contact_without_boost_kills() {
        let (mut engine, mut state) = playing(quiet_config());
        let center = state.snake.head().cell_center(20);
        place_predator(&mut state, PredatorKind::DirectPursuit, center);

        let result = engine.step(&mut state, &[]);

        assert!(result.terminated);
        assert_eq!(
            result.death(),
            Some(DeathCause::Predator(PredatorKind::DirectPursuit))
        );
        assert!(state.snake.is_dead());
    }

    #[test]
    fn test_body_contact_repels_predator() {
        let config = quiet_config();
        let (mut engine, mut state) = playing(config.clone());
        let mut snake = Snake::new(Position::new(400, 300), &config);
        snake.grow(4);
        snake.change_direction(Direction::Right);
        for _ in 0..4 {
            snake.move_forward();
        }
        state.snake = snake;
        place_predator(&mut state, PredatorKind::DirectPursuit, Point::new(410.0, 310.0));

        let result = engine.step(&mut state, &[]);

        assert!(!result.terminated);
        assert!(result.events.contains(&StepEvent::Repelled(PredatorKind::DirectPursuit)));
        let predator = state.predator(PredatorKind::DirectPursuit).unwrap();
        assert!(!predator.is_active());
        assert!((300..=500).contains(&predator.spawn_timer()));
    }

    #[test]
    fn test_ineligible_predators_frozen() {
        let (mut engine, mut state) = playing(quiet_config());
        let before = state.predator(PredatorKind::ErraticPursuit).unwrap().spawn_timer();
        engine.step(&mut state, &[]);
        let after = state.predator(PredatorKind::ErraticPursuit).unwrap().spawn_timer();
        assert_eq!(before, after);
    }

    #[test]
    fn test_spawn_accelerates_below_cap() {
        let (mut engine, mut state) = playing(quiet_config());
        state
            .predator_mut(PredatorKind::DirectPursuit)
            .unwrap()
            .set_spawn_timer(50);
        engine.step(&mut state, &[]);
        let timer = state.predator(PredatorKind::DirectPursuit).unwrap().spawn_timer();
        assert_eq!(timer, 48);
    }

    #[test]
    fn test_spawn_held_at_cap() {
        let (mut engine, mut state) = playing(quiet_config());
        state.score = 6;
        state.high_score = 6;
        place_predator(&mut state, PredatorKind::DirectPursuit, Point::new(50.0, 50.0));
        state
            .predator_mut(PredatorKind::ErraticPursuit)
            .unwrap()
            .set_spawn_timer(1);

        engine.step(&mut state, &[]);

        let erratic = state.predator(PredatorKind::ErraticPursuit).unwrap();
        assert!(!erratic.is_active());
        assert_eq!(erratic.spawn_timer(), 1);
    }

    #[test]
    fn test_speeds_follow_difficulty() {
        let (mut engine, mut state) = playing(quiet_config());
        state.score = 25;
        state.high_score = 25;
        engine.step(&mut state, &[]);
        let direct = state.predator(PredatorKind::DirectPursuit).unwrap();
        assert_eq!(direct.speed(), 3.5);
    }

    #[test]
    fn test_special_food_expiry_regenerates() {
        let (mut engine, mut state) = playing(quiet_config());
        state.food = Food::special_at(Position::new(0, 0), 2);

        let result = engine.step(&mut state, &[]);
        assert!(!result.events.contains(&StepEvent::FoodExpired));

        let result = engine.step(&mut state, &[]);
        assert!(result.events.contains(&StepEvent::FoodExpired));
        assert!(!state.snake.body().contains(&state.food.position()));
    }

    #[test]
    fn test_high_score_reported_once() {
        let (mut engine, mut state) = playing(quiet_config());
        state.food = Food::regular_at(state.snake.head().moved_by(20, 0));
        let first = engine.step(&mut state, &[Action::Move(Direction::Right)]);
        assert_eq!(first.new_high_score(), Some(1));
        assert_eq!(state.high_score, 1);
        assert!(state.is_new_high_score());

        let second = engine.step(&mut state, &[]);
        assert_eq!(second.new_high_score(), None);
    }

    #[test]
    fn test_taunt_raises_anger_of_active_predator() {
        let config = GameConfig {
            first_taunt: FrameWindow::new(1, 1),
            ..GameConfig::default()
        };
        let (mut engine, mut state) = playing(config);
        place_predator(&mut state, PredatorKind::DirectPursuit, Point::new(50.0, 50.0));

        let result = engine.step(&mut state, &[]);

        assert!(result.events.contains(&StepEvent::Taunted {
            kind: PredatorKind::DirectPursuit,
            anger: 2
        }));
        assert_eq!(state.difficulty.anger(PredatorKind::DirectPursuit), 2);
        assert_eq!(state.predator(PredatorKind::DirectPursuit).unwrap().anger(), 2);
        assert!((180..=240).contains(&state.taunt_timer));
    }

    #[test]
    fn test_taunt_without_predators_is_silent() {
        let config = GameConfig {
            first_taunt: FrameWindow::new(1, 1),
            ..GameConfig::default()
        };
        let (mut engine, mut state) = playing(config);
        let result = engine.step(&mut state, &[]);
        assert!(!result
            .events
            .iter()
            .any(|e| matches!(e, StepEvent::Taunted { .. })));
    }

    #[test]
    fn test_death_animation_then_restart() {
        let config = quiet_config();
        let (mut engine, mut state) = playing(config.clone());
        state.snake = Snake::new(Position::new(0, 100), &config);
        state.score = 3;
        state.high_score = 3;
        engine.step(&mut state, &[Action::Move(Direction::Left)]);
        assert_eq!(state.phase, Phase::GameOver);

        assert!(!engine.choose(&mut state, GameOverChoice::Restart));
        for _ in 0..config.death_animation_frames + 10 {
            let result = engine.step(&mut state, &[Action::Move(Direction::Up)]);
            assert!(result.terminated);
        }
        assert_eq!(state.death_frames, config.death_animation_frames);
        assert!(state.death_animation_finished());

        assert!(engine.choose(&mut state, GameOverChoice::Restart));
        assert!(state.is_playing());
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 3);
        assert!(!state.snake.is_dead());
    }

    #[test]
    fn test_restart_calms_predators_and_reschedules_taunts() {
        let config = GameConfig {
            first_taunt: FrameWindow::new(1, 1),
            death_animation_frames: 0,
            ..GameConfig::default()
        };
        let (mut engine, mut state) = playing(config.clone());
        place_predator(&mut state, PredatorKind::DirectPursuit, Point::new(50.0, 50.0));
        engine.step(&mut state, &[]);
        assert_eq!(state.difficulty.anger(PredatorKind::DirectPursuit), 2);

        state.snake = Snake::new(Position::new(0, 100), &config);
        engine.step(&mut state, &[Action::Move(Direction::Left)]);
        assert_eq!(state.phase, Phase::GameOver);

        assert!(engine.choose(&mut state, GameOverChoice::Restart));
        for kind in PredatorKind::ALL {
            assert_eq!(state.difficulty.anger(kind), 1);
            assert!(!state.predator(kind).unwrap().is_active());
        }
        assert_eq!(state.taunt_timer, 1);
        assert!(!state.is_new_high_score());
    }

    #[test]
    fn test_predator_kill_stops_remaining_predators() {
        let (mut engine, mut state) = playing(quiet_config());
        state.score = 6;
        state.high_score = 6;
        let center = state.snake.head().cell_center(20);
        place_predator(&mut state, PredatorKind::DirectPursuit, center);
        place_predator(&mut state, PredatorKind::ErraticPursuit, center);
        let erratic_before = state.predator(PredatorKind::ErraticPursuit).unwrap().clone();

        let result = engine.step(&mut state, &[]);

        let deaths = result
            .events
            .iter()
            .filter(|e| matches!(e, StepEvent::Died(_)))
            .count();
        assert_eq!(deaths, 1);
        assert_eq!(
            result.death(),
            Some(DeathCause::Predator(PredatorKind::DirectPursuit))
        );
        let erratic = state.predator(PredatorKind::ErraticPursuit).unwrap();
        assert_eq!(*erratic, erratic_before);
    }

    #[test]
    fn test_game_over_to_main_menu() {
        let config = GameConfig {
            death_animation_frames: 0,
            ..quiet_config()
        };
        let (mut engine, mut state) = playing(config.clone());
        state.snake = Snake::new(Position::new(0, 100), &config);
        engine.step(&mut state, &[Action::Move(Direction::Left)]);

        assert!(engine.choose(&mut state, GameOverChoice::MainMenu));
        assert_eq!(state.phase, Phase::Menu);
    }

    #[test]
    fn test_seeded_engines_agree() {
        let mut a = GameEngine::with_seed(GameConfig::default(), 99);
        let mut b = GameEngine::with_seed(GameConfig::default(), 99);
        let sa = a.reset(0);
        let sb = b.reset(0);
        assert_eq!(sa.food, sb.food);
        assert_eq!(sa.predators, sb.predators);
    }
}
