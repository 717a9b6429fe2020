use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval, interval_at};

use crate::game::{
    Action, GameConfig, GameEngine, GameOverChoice, GameState, Phase, StepEvent,
};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::persistence::Store;
use crate::render::{ColorScheme, Renderer};

pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    store: Store,
    scheme: ColorScheme,
    should_quit: bool,
    /// Inputs gathered since the last step
    pending: Vec<Action>,
}

impl HumanMode {
    pub fn new(config: GameConfig, store: Store, seed: Option<u64>) -> Self {
        let mut engine = match seed {
            Some(seed) => GameEngine::with_seed(config, seed),
            None => GameEngine::new(config),
        };
        let state = engine.reset(store.load_high_score());
        let scheme = store.load_color_scheme();

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            store,
            scheme,
            should_quit: false,
            pending: Vec::new(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Step rate follows the snake's speed, so the timer is rebuilt on change
        let mut tick_rate = self.state.frame_rate();
        let mut tick_timer = tick_interval(tick_rate);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics, self.scheme);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }

            let rate = self.state.frame_rate();
            if rate != tick_rate {
                tracing::debug!(from = tick_rate, to = rate, "frame rate changed");
                tick_rate = rate;
                tick_timer = tick_interval(rate);
            }
        }

        tracing::info!(
            games = self.metrics.games_played,
            best = self.metrics.best_session_score,
            escapes = self.metrics.escapes,
            "session ended"
        );
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Game(action) => self.pending.push(action),
                KeyAction::Confirm => {
                    if self.engine.start(&mut self.state) {
                        self.metrics.on_game_start();
                        self.pending.clear();
                    }
                }
                KeyAction::Restart => self.choose(GameOverChoice::Restart),
                KeyAction::MainMenu => self.choose(GameOverChoice::MainMenu),
                KeyAction::CycleScheme => self.cycle_scheme(),
                KeyAction::Quit => self.should_quit = true,
                KeyAction::None => {}
            }
        }
    }

    fn update_game(&mut self) {
        let inputs = std::mem::take(&mut self.pending);
        let result = self.engine.step(&mut self.state, &inputs);

        for event in &result.events {
            match *event {
                StepEvent::NewHighScore(score) => {
                    if let Err(err) = self.store.save_high_score(score) {
                        tracing::warn!("{err:#}");
                    }
                }
                StepEvent::Died(cause) => self.metrics.on_game_over(self.state.score, cause),
                StepEvent::Escaped(_) => self.metrics.on_escape(),
                StepEvent::Paused => self.metrics.pause(),
                StepEvent::Resumed => self.metrics.resume(),
                StepEvent::FoodEaten { kind, score } => {
                    tracing::debug!(?kind, score, "food eaten");
                }
                StepEvent::FoodExpired | StepEvent::Repelled(_) | StepEvent::Taunted { .. } => {}
            }
        }
    }

    fn choose(&mut self, choice: GameOverChoice) {
        if self.engine.choose(&mut self.state, choice) {
            self.pending.clear();
            if self.state.phase == Phase::Playing {
                self.metrics.on_game_start();
            }
        }
    }

    /// Switch to the next colour scheme; only offered outside of active play
    fn cycle_scheme(&mut self) {
        if !matches!(self.state.phase, Phase::Menu | Phase::Paused) {
            return;
        }
        self.scheme = self.scheme.next();
        tracing::info!(scheme = %self.scheme, "colour scheme changed");
        if let Err(err) = self.store.save_color_scheme(self.scheme) {
            tracing::warn!("{err:#}");
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

/// Step timer whose first tick is one full period away
fn tick_interval(frames_per_second: f32) -> Interval {
    let period = Duration::from_secs_f32(1.0 / frames_per_second.max(1.0));
    let mut timer = interval_at(Instant::now() + period, period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    timer
}
