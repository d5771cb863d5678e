use std::time::{Duration, Instant};

use sdl2::event::Event;
use sdl2::{AudioSubsystem, EventPump, Sdl};
use tracing::{debug, error, info, trace, warn};

use crate::audio::Audio;
use crate::constants::{CANVAS_SIZE, WINDOW_TITLE};
use crate::context::GameContext;
use crate::error::{GameError, GameResult};
use crate::formatter;
use crate::game::Game;
use crate::input::{self, InputEvent};
use crate::platform;
use crate::screen::{render, Flow, MenuAction, Screen};
use crate::systems::RunOutcome;

/// Main application wrapper that manages SDL initialization, the window, and the screen loop.
pub struct App {
    ctx: GameContext,
    event_pump: EventPump,
    screen: Screen,
    game: Option<Game>,
    last_tick: Instant,
    focused: bool,
    // Keep SDL alive for the app lifetime so subsystems (audio) are not shut down
    _sdl_context: Sdl,
    _audio_subsystem: Option<AudioSubsystem>,
}

impl App {
    /// Initializes SDL, opens the window and loads every asset.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Sdl` if any SDL initialization step fails, or an asset
    /// error if a bundled file is missing or undecodable.
    pub fn new() -> GameResult<Self> {
        info!("Initializing SDL2 application");
        let sdl_context = sdl2::init().map_err(GameError::Sdl)?;

        debug!("Initializing SDL2 subsystems");
        let ttf_context = sdl2::ttf::init().map_err(|e| GameError::Sdl(e.to_string()))?;
        let video_subsystem = sdl_context.video().map_err(GameError::Sdl)?;
        let event_pump = sdl_context.event_pump().map_err(GameError::Sdl)?;

        trace!(width = CANVAS_SIZE.x, height = CANVAS_SIZE.y, "Creating game window");
        let window = video_subsystem
            .window(WINDOW_TITLE, CANVAS_SIZE.x, CANVAS_SIZE.y)
            .position_centered()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        let mut canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        canvas
            .set_logical_size(CANVAS_SIZE.x, CANVAS_SIZE.y)
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        debug!(renderer_info = ?canvas.info(), "Canvas renderer initialized");

        let (audio_subsystem, audio) = Audio::with_subsystem(sdl_context.audio());
        if audio.is_disabled() {
            warn!("Continuing without sound");
        }

        let ctx = GameContext::new(canvas, &ttf_context, audio)?;

        info!("Application initialization completed successfully");
        Ok(App {
            ctx,
            event_pump,
            screen: Screen::default(),
            game: None,
            last_tick: Instant::now(),
            focused: true,
            _sdl_context: sdl_context,
            _audio_subsystem: audio_subsystem,
        })
    }

    /// Runs one frame: input, update, draw, then sleep out the frame budget.
    ///
    /// Returns `false` once the player has asked to quit.
    /// A frame that fails to draw is logged and skipped.
    pub fn run(&mut self) -> GameResult<bool> {
        let start = Instant::now();
        let dt_ms = start.duration_since(self.last_tick).as_millis() as u64;
        self.last_tick = start;

        formatter::increment_frame();

        let events: Vec<Event> = self.event_pump.poll_iter().collect();
        for input in input::collect(&events) {
            let (flow, action) = match input {
                InputEvent::Quit => {
                    info!(screen = ?self.screen, "Window closed, exiting");
                    return Ok(false);
                }
                InputEvent::FocusGained | InputEvent::FocusLost => {
                    self.focused = input == InputEvent::FocusGained;
                    debug!(focused = self.focused, "Window focus changed");
                    continue;
                }
                InputEvent::Jump => {
                    if let Some(game) = self.game.as_mut() {
                        game.jump();
                    }
                    continue;
                }
                InputEvent::Click(point) => {
                    let Some(button) = self.screen.button_at(point) else {
                        continue;
                    };
                    (self.screen.click(point), Some(button.action))
                }
            };

            if !self.apply(flow, action) {
                return Ok(false);
            }
        }

        self.update(dt_ms);
        if let Err(e) = self.draw() {
            error!(error = %e, screen = ?self.screen, "Failed to draw frame");
        }

        let budget = self.screen.loop_time();
        let elapsed = start.elapsed();
        if elapsed < budget {
            let remaining = budget.saturating_sub(elapsed);
            if remaining != Duration::ZERO {
                platform::sleep(remaining, self.focused);
            }
        } else {
            warn!(behind = ?(elapsed - budget), "Frame over budget");
        }

        Ok(true)
    }

    fn update(&mut self, dt_ms: u64) {
        let flow = match self.screen {
            Screen::Loading { .. } => self.screen.advance_loading(dt_ms),
            Screen::Playing { .. } => match self.game.as_mut().and_then(|game| game.tick(dt_ms)) {
                Some(outcome) => self.finish_run(outcome),
                None => Flow::Stay,
            },
            _ => Flow::Stay,
        };
        self.apply(flow, None);
    }

    fn finish_run(&mut self, outcome: RunOutcome) -> Flow {
        let Some(game) = self.game.take() else {
            return Flow::Stay;
        };
        let keeper = game.score_keeper();
        keeper.record(&mut self.ctx.high_scores);
        info!(?outcome, score = keeper.score, high_score = self.ctx.high_scores.high_score(), "Run finished");
        self.screen.after_run(outcome, keeper.score)
    }

    /// Moves to the next screen, playing its transition sounds. Returns `false` on exit.
    fn apply(&mut self, flow: Flow, action: Option<MenuAction>) -> bool {
        let next = match flow {
            Flow::Stay => return true,
            Flow::Exit => {
                info!(screen = ?self.screen, "Exit requested");
                return false;
            }
            Flow::Goto(next) => next,
        };

        for sound in self.screen.transition_sounds(&next, action) {
            self.ctx.play(sound);
        }

        if std::mem::discriminant(&next) != std::mem::discriminant(&self.screen) {
            info!(from = ?self.screen, to = ?next, "Screen transition");
        }

        self.game = match next {
            Screen::Playing { speed } => Some(self.ctx.new_game(speed)),
            _ => None,
        };
        self.screen = next;
        true
    }

    fn draw(&mut self) -> GameResult<()> {
        let screen = self.screen;
        match (screen, self.game.as_mut()) {
            (Screen::Playing { .. }, Some(game)) => game.draw(&mut self.ctx.canvas, &self.ctx.sprites, &mut self.ctx.atlas)?,
            _ => render::draw_screen(&mut self.ctx, &screen)?,
        }
        self.ctx.canvas.present();
        Ok(())
    }
}
