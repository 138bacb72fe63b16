//! Dino Run entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use dino_run::audio::{AudioManager, AudioSink, SoundEffect};
    use dino_run::persistence::LocalStore;
    use dino_run::platform::{InputAction, action_for_key};
    use dino_run::renderer::CanvasRenderer;
    use dino_run::sim::{FrameClock, GameEvent, GameState, RunPhase, TickInput, tick};
    use dino_run::{HighScore, Settings};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        clock: FrameClock,
        renderer: Option<CanvasRenderer>,
        audio: AudioManager,
        store: LocalStore,
        input: TickInput,
        /// Result line shown on the overlay after a run
        final_text: Option<String>,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            let store = LocalStore::new();
            let high_score = HighScore::load(&store);
            let settings = Settings::load(&store);
            Self {
                state: GameState::new(seed, high_score, settings),
                clock: FrameClock::new(),
                renderer: None,
                audio: AudioManager::new(settings.muted),
                store,
                input: TickInput::default(),
                final_text: None,
            }
        }

        /// Queue an input action and unlock audio on the user gesture
        fn press(&mut self, action: InputAction) {
            self.input.apply(action);
            self.audio.resume();
        }

        /// Run one simulation tick
        fn update(&mut self, time: f64) {
            let dt = self.clock.advance(time);
            tick(&mut self.state, &self.input, dt);
            // Clear one-shot inputs after processing
            self.input.clear_one_shots();

            for event in self.state.drain_events() {
                self.handle_event(event);
            }
        }

        fn handle_event(&mut self, event: GameEvent) {
            if let Some(effect) = SoundEffect::for_event(&event) {
                self.audio.play(effect);
            }

            match event {
                GameEvent::Started => self.final_text = None,
                GameEvent::NewHighScore(_) => {
                    if let Err(e) = self.state.high_score.save(&mut self.store) {
                        log::warn!("Failed to save high score: {}", e);
                    }
                }
                GameEvent::GameOver {
                    score,
                    new_high_score,
                } => {
                    let mut text = format!("Score: {}", score);
                    if new_high_score {
                        text.push_str("  New High!");
                    }
                    self.final_text = Some(text);
                }
                GameEvent::MuteChanged(muted) => {
                    self.audio.set_muted(muted);
                    if let Err(e) = self.state.settings.save(&mut self.store) {
                        log::warn!("Failed to save settings: {}", e);
                    }
                }
                GameEvent::Jump | GameEvent::Milestone(_) | GameEvent::Collision => {}
            }
        }

        /// Render the current frame
        fn render(&self, time: f64) {
            if let Some(renderer) = &self.renderer {
                renderer.draw(&self.state.snapshot(), time);
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let frame = self.state.snapshot();

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&frame.score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("highscore") {
                el.set_text_content(Some(&format!("High: {}", frame.high_score)));
            }
            if let Some(el) = document.get_element_by_id("overlay") {
                let _ = el
                    .class_list()
                    .toggle_with_force("hidden", frame.phase == RunPhase::Running);
            }
            if let Some(el) = document.get_element_by_id("finalScore") {
                match &self.final_text {
                    Some(text) => {
                        el.set_text_content(Some(text));
                        let _ = el.class_list().remove_1("hidden");
                    }
                    None => {
                        let _ = el.class_list().add_1("hidden");
                    }
                }
            }
            if let Some(el) = document.get_element_by_id("muteBtn") {
                el.set_text_content(Some(if frame.muted { "🔇" } else { "🔊" }));
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Dino Run starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Initialize game
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        log::info!("Game initialized with seed: {}", seed);

        let renderer = CanvasRenderer::new(&canvas);
        if renderer.is_none() {
            log::error!("Canvas 2D context unavailable - nothing will be drawn");
        }
        game.borrow_mut().renderer = renderer;

        setup_input_handlers(&canvas, game.clone());
        setup_buttons(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Dino Run ready - press space or tap to start");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Keyboard
        {
            let game = game.clone();
            let Some(window) = web_sys::window() else { return };
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let Some(action) = action_for_key(&event.code()) else {
                    return;
                };
                // Keep space/arrow from scrolling the page
                if action == InputAction::Trigger {
                    event.prevent_default();
                }
                if action == InputAction::ToggleAutopilot {
                    log::info!("Autopilot: {}", !game.borrow().input.autopilot);
                }
                game.borrow_mut().press(action);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().press(InputAction::Trigger);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse press
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                event.prevent_default();
                game.borrow_mut().press(InputAction::Trigger);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let buttons = [
            ("startBtn", InputAction::Trigger),
            ("muteBtn", InputAction::ToggleMute),
        ];
        for (id, action) in buttons {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Missing #{} button", id);
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().press(action);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render(time);
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Dino Run (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - build for wasm32 to play");

    native::run_demo();
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::time::{SystemTime, UNIX_EPOCH};

    use dino_run::audio::{AudioSink, LogAudio, SoundEffect};
    use dino_run::consts::DEMO_DT;
    use dino_run::persistence::MemoryStore;
    use dino_run::platform::InputAction;
    use dino_run::sim::{FrameClock, GameEvent, GameState, TickInput, tick};
    use dino_run::{HighScore, Settings, Tuning};

    const DEFAULT_DEMO_SECS: f32 = 60.0;

    fn load_tuning() -> Tuning {
        let Ok(path) = std::env::var("DINO_RUN_TUNING") else {
            return Tuning::default();
        };
        match Tuning::load(&path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::warn!("{} - using default tuning", e);
                Tuning::default()
            }
        }
    }

    fn demo_secs() -> f32 {
        std::env::var("DINO_RUN_DEMO_SECS")
            .ok()
            .and_then(|s| s.parse::<f32>().ok())
            .filter(|s| *s > 0.0)
            .unwrap_or(DEFAULT_DEMO_SECS)
    }

    /// Play back-to-back autopilot runs at a fixed 60 Hz
    pub fn run_demo() {
        let mut store = MemoryStore::new();
        let settings = Settings::load(&store);
        let audio = LogAudio::new(settings.muted);

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        log::info!("Demo seed: {}", seed);
        let mut state = GameState::with_tuning(seed, load_tuning(), HighScore::load(&store), settings);

        let mut input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        input.apply(InputAction::Trigger);

        let mut clock = FrameClock::new();
        clock.reset(0.0);
        let steps = (demo_secs() / DEMO_DT).ceil() as u64;

        for step in 1..=steps {
            let dt = clock.advance(step as f64 * DEMO_DT as f64 * 1000.0);
            tick(&mut state, &input, dt);
            input.clear_one_shots();

            for event in state.drain_events() {
                if let Some(effect) = SoundEffect::for_event(&event) {
                    audio.play(effect);
                }
                match event {
                    GameEvent::NewHighScore(_) => {
                        if let Err(e) = state.high_score.save(&mut store) {
                            log::warn!("Failed to save high score: {}", e);
                        }
                    }
                    GameEvent::Milestone(score) => log::info!("Reached {}", score),
                    // Straight into the next run
                    GameEvent::GameOver { .. } => input.apply(InputAction::Trigger),
                    _ => {}
                }
            }
        }

        println!(
            "Demo finished: {} runs, current score {}, best {}",
            state.runs,
            state.difficulty.floored_score(),
            HighScore::load(&store).best
        );
    }
}
