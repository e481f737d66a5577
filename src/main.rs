//! Cow Hop entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{AddEventListenerOptions, HtmlCanvasElement, HtmlElement, KeyboardEvent, TouchEvent};

    use cow_hop::consts::{FIELD_HEIGHT, FIELD_WIDTH};
    use cow_hop::renderer::CanvasSurface;
    use cow_hop::sim::GameEvent;
    use cow_hop::{Game, Signal, Tuning};

    /// Everything the frame loop and the input handlers share
    struct App {
        game: Game,
        surface: CanvasSurface,
    }

    type Shared = Rc<RefCell<App>>;

    fn document() -> Option<web_sys::Document> {
        web_sys::window()?.document()
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
        }

        log::info!("Cow Hop starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .ok_or("no canvas")?
            .dyn_into()?;

        // Logical resolution never changes; CSS does the scaling
        canvas.set_width(FIELD_WIDTH as u32);
        canvas.set_height(FIELD_HEIGHT as u32);
        resize_canvas(&canvas);
        setup_resize_handler(&canvas)?;

        let surface = CanvasSurface::new(&canvas)?;
        let game = Game::new(Tuning::load());
        let app = Rc::new(RefCell::new(App { game, surface }));

        {
            let mut a = app.borrow_mut();
            let App { game, surface } = &mut *a;
            let assets = surface.assets();
            game.render(surface, &assets);
        }

        setup_input_handlers(app.clone())?;
        setup_buttons(app)?;

        log::info!("Cow Hop ready, waiting for start");
        Ok(())
    }

    /// Stretch the canvas to the wrapper width, keeping the aspect ratio
    fn resize_canvas(canvas: &HtmlCanvasElement) {
        let Some(wrapper) = document().and_then(|d| d.get_element_by_id("game-wrapper")) else {
            return;
        };
        let width = wrapper.client_width() as f32;
        let scale = width / FIELD_WIDTH;

        let style = canvas.style();
        let _ = style.set_property("width", &format!("{}px", width));
        let _ = style.set_property("height", &format!("{}px", FIELD_HEIGHT * scale));
    }

    fn setup_resize_handler(canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            resize_canvas(&canvas);
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    /// Forward a signal and kick off the frame loop if it was stopped
    fn signal(app: &Shared, signal: Signal) {
        let needs_frame = app.borrow_mut().game.push_signal(signal);
        if needs_frame {
            request_animation_frame(app.clone());
        }
    }

    fn setup_input_handlers(app: Shared) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        // Keyboard
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.code() == "Space" {
                    event.prevent_default();
                    signal(&app, Signal::Action);
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch, non-passive so the page doesn't scroll
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                signal(&app, Signal::Action);
            });
            let options = AddEventListenerOptions::new();
            options.set_passive(false);
            window.add_event_listener_with_callback_and_add_event_listener_options(
                "touchstart",
                closure.as_ref().unchecked_ref(),
                &options,
            )?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_buttons(app: Shared) -> Result<(), JsValue> {
        let document = document().ok_or("no document")?;

        for id in ["start-screen", "restart-btn"] {
            if let Some(el) = document.get_element_by_id(id) {
                let app = app.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                    signal(&app, Signal::Start);
                });
                el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
                closure.forget();
            } else {
                log::warn!("#{} not found, that control is disabled", id);
            }
        }

        Ok(())
    }

    /// Show or hide the start and game-over screens
    fn apply_event(event: &GameEvent) {
        let Some(document) = document() else {
            return;
        };
        let start_screen = document
            .get_element_by_id("start-screen")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let game_over = document.get_element_by_id("game-over-screen");

        match event {
            GameEvent::SessionStarted => {
                if let Some(el) = start_screen {
                    let _ = el.style().set_property("display", "none");
                }
                if let Some(el) = game_over {
                    let _ = el.class_list().add_1("hidden");
                }
            }
            GameEvent::SessionEnded { final_score } => {
                if let Some(el) = document.get_element_by_id("final-score") {
                    el.set_text_content(Some(&final_score.to_string()));
                }
                if let Some(el) = game_over {
                    let _ = el.class_list().remove_1("hidden");
                }
                if let Some(el) = start_screen {
                    let _ = el.style().set_property("display", "flex");
                }
            }
            _ => {}
        }
    }

    fn request_animation_frame(app: Shared) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Shared, time: f64) {
        let outcome = {
            let mut a = app.borrow_mut();
            let App { game, surface } = &mut *a;
            let assets = surface.assets();
            game.frame(time, surface, &assets)
        };

        for event in &outcome.events {
            apply_event(event);
        }

        if outcome.reschedule {
            request_animation_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Cow Hop failed to start: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Cow Hop (native) starting...");
    log::info!("Native mode is a headless demo - run with `trunk serve` for the web version");

    headless::run(60 * 60);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Plays the game without a display using a simple auto-jump policy
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use cow_hop::consts::{PLAYER_WIDTH, PLAYER_X};
    use cow_hop::renderer::{AssetId, Assets, Surface, TextStyle};
    use cow_hop::sim::{GameEvent, GameState, Rect};
    use cow_hop::{Game, Signal, Tuning};

    /// 60 Hz display
    const FRAME_MS: f64 = 1000.0 / 60.0;

    struct NullSurface;

    impl Surface for NullSurface {
        fn clear(&mut self) {}
        fn fill_rect(&mut self, _rect: Rect, _color: &str) {}
        fn draw_image(&mut self, _asset: AssetId, _rect: Rect) {}
        fn fill_text(&mut self, _text: &str, _x: f32, _y: f32, _style: &TextStyle) {}
    }

    /// Jump when the nearest fence is about to reach the cow
    fn should_jump(state: &GameState) -> bool {
        let front = PLAYER_X + PLAYER_WIDTH;
        state.obstacles.iter().any(|o| {
            let gap = o.pos.x - front;
            gap > 0.0 && gap <= state.speed * 8.0
        })
    }

    pub fn run(frames: u32) {
        let mut game = Game::new(Tuning::default());
        let mut surface = NullSurface;
        let assets = Assets::default();

        game.push_signal(Signal::Start);
        let mut now = 0.0;
        for _ in 0..frames {
            if should_jump(&game.state) {
                game.push_signal(Signal::Jump);
            }
            let outcome = game.frame(now, &mut surface, &assets);
            for event in &outcome.events {
                match event {
                    GameEvent::Milestone { score } => log::info!("GMOO! at {}", score),
                    GameEvent::SessionEnded { final_score } => {
                        log::info!("Game over, final score {}", final_score)
                    }
                    _ => {}
                }
            }
            if !outcome.reschedule {
                break;
            }
            now += FRAME_MS;
        }

        println!(
            "Score {} with {} lives left after {} frames",
            game.state.score, game.state.lives, game.state.frames
        );
    }
}
