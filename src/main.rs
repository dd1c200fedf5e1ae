//! Steer Viz entry point
//!
//! Handles platform-specific initialization and runs the visualization loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent};

    use steer_viz::consts::*;
    use steer_viz::renderer::RenderState;
    use steer_viz::sim::{Canvas, SteeringModel};
    use steer_viz::ui::{Direction, InputController, InputEvent, UiAction};
    use steer_viz::Settings;

    /// App instance holding all state
    struct App {
        model: SteeringModel,
        controller: InputController,
        settings: Settings,
        render_state: Option<RenderState>,
        /// Events queued by DOM handlers, drained once per frame
        pending: Vec<InputEvent>,
        accumulator: f32,
        last_time: f64,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl App {
        fn new(settings: Settings) -> Self {
            let model = SteeringModel::from_settings(&settings);
            let canvas = model.canvas();
            Self {
                model,
                controller: InputController::for_canvas(canvas.width, canvas.height),
                settings,
                render_state: None,
                pending: Vec::new(),
                accumulator: 0.0,
                last_time: 0.0,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Pick up the current drawable size (CSS pixels)
        fn refresh_canvas(&mut self, canvas: &HtmlCanvasElement) {
            let w = canvas.client_width() as f32;
            let h = canvas.client_height() as f32;
            if w <= 0.0 || h <= 0.0 {
                return;
            }
            let current = self.model.canvas();
            if current.width == w && current.height == h {
                return;
            }

            log::info!("Canvas resized to {}x{}", w, h);
            self.model.set_canvas(Canvas::new(w, h));
            self.controller.resize(w, h);

            if let Some(ref mut render_state) = self.render_state {
                let dpr = render_state.pixel_ratio;
                let (pw, ph) = ((w * dpr) as u32, (h * dpr) as u32);
                canvas.set_width(pw);
                canvas.set_height(ph);
                render_state.resize(pw, ph);
            }
        }

        /// Apply queued input, then run simulation ticks
        fn update(&mut self, dt: f32, time: f64) {
            let events: Vec<InputEvent> = self.pending.drain(..).collect();
            self.controller.apply_all(&mut self.model, events);

            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                self.model.advance();
                self.accumulator -= SIM_DT;
                substeps += 1;
            }
            if substeps == MAX_SUBSTEPS {
                // Drop the backlog instead of catching up forever
                self.accumulator = 0.0;
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let snapshot = self.model.snapshot();
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render_scene(&snapshot, self.controller.layout()) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let snapshot = self.model.snapshot();

            let set_text = |selector: &str, text: String| {
                if let Some(el) = document.query_selector(selector).ok().flatten() {
                    el.set_text_content(Some(&text));
                }
            };

            set_text("#hud-radius .hud-value", format!("{:.2}", snapshot.turn_radius));
            set_text("#hud-inner .hud-value", format!("{:.2}", snapshot.inner_wheel_angle));
            set_text("#hud-outer .hud-value", format!("{:.2}", snapshot.outer_wheel_angle));
            set_text("#hud-speed .hud-value", format!("{:.2}", snapshot.speed));
            set_text("#hud-zoom .hud-value", format!("{:.2}", snapshot.zoom_level));

            if let Some(el) = document.get_element_by_id("hud-fps") {
                if self.settings.show_fps {
                    dom_ok("set_attribute", el.set_attribute("class", "hud-item"));
                    set_text("#hud-fps .hud-value", self.fps.to_string());
                } else {
                    dom_ok("set_attribute", el.set_attribute("class", "hud-item hidden"));
                }
            }

            // "Radius: r" tag riding alongside the vehicle
            if let Some(tag) = document
                .get_element_by_id("radius-tag")
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            {
                if self.settings.show_radius_label && snapshot.turn_radius > 0.0 {
                    let style = tag.style();
                    dom_ok(
                        "set_property",
                        style.set_property("left", &format!("{}px", snapshot.position.x + 10.0)),
                    );
                    dom_ok(
                        "set_property",
                        style.set_property("top", &format!("{}px", snapshot.position.y - 30.0)),
                    );
                    tag.set_text_content(Some(&format!("Radius: {:.2}", snapshot.turn_radius)));
                    dom_ok("set_attribute", tag.set_attribute("class", ""));
                } else {
                    dom_ok("set_attribute", tag.set_attribute("class", "hidden"));
                }
            }

            // Button captions sit on top of the rectangles the renderer draws
            for region in &self.controller.layout().regions {
                let (Some(label), Some(id)) = (region.action.label(), label_id(region.action))
                else {
                    continue;
                };
                if let Some(el) = document
                    .get_element_by_id(id)
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                {
                    let style = el.style();
                    dom_ok(
                        "set_property",
                        style.set_property("left", &format!("{}px", region.rect.x)),
                    );
                    dom_ok(
                        "set_property",
                        style.set_property("top", &format!("{}px", region.rect.y)),
                    );
                    dom_ok(
                        "set_property",
                        style.set_property("width", &format!("{}px", region.rect.width)),
                    );
                    dom_ok(
                        "set_property",
                        style.set_property("height", &format!("{}px", region.rect.height)),
                    );
                    el.set_text_content(Some(label));
                }
            }
        }
    }

    /// DOM writes only affect the overlay; a failure is logged and skipped
    fn dom_ok(what: &str, result: Result<(), JsValue>) {
        if let Err(e) = result {
            log::debug!("DOM call {} failed: {:?}", what, e);
        }
    }

    /// DOM id of the caption element for a button
    fn label_id(action: UiAction) -> Option<&'static str> {
        match action {
            UiAction::TurnRadiusSlider => None,
            UiAction::ZoomIn => Some("label-zoom-in"),
            UiAction::ZoomOut => Some("label-zoom-out"),
            UiAction::SpeedUp => Some("label-speed-up"),
            UiAction::SpeedDown => Some("label-speed-down"),
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Steer Viz starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        if let Some(loading) = document.get_element_by_id("loading") {
            dom_ok("set_attribute", loading.set_attribute("class", "hidden"));
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio() as f32;
        let client_w = canvas.client_width();
        let client_h = canvas.client_height();
        let width = (client_w as f32 * dpr) as u32;
        let height = (client_h as f32 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        let app = Rc::new(RefCell::new(App::new(settings)));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height, dpr).await;
        {
            let mut a = app.borrow_mut();
            a.render_state = Some(render_state);
            a.refresh_canvas(&canvas);
        }

        setup_input_handlers(&canvas, app.clone());

        if let Some(hud) = document.get_element_by_id("hud") {
            dom_ok("set_attribute", hud.set_attribute("class", ""));
        }

        request_animation_frame(app, canvas);

        log::info!("Steer Viz running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Pointer press - queue with canvas-relative coordinates
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                app.borrow_mut().pending.push(InputEvent::PointerPress {
                    x: event.offset_x() as f32,
                    y: event.offset_y() as f32,
                });
            });
            dom_ok(
                "add_event_listener_with_callback",
                canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref()),
            );
            closure.forget();
        }

        // Arrow keys
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(direction) = Direction::from_key(&event.key()) {
                    event.prevent_default();
                    app.borrow_mut().pending.push(InputEvent::KeyPress(direction));
                }
            });
            dom_ok(
                "add_event_listener_with_callback",
                window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref()),
            );
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>, canvas: HtmlCanvasElement) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            frame(app, canvas, time);
        });
        dom_ok(
            "request_animation_frame",
            window
                .request_animation_frame(closure.as_ref().unchecked_ref())
                .map(drop),
        );
        closure.forget();
    }

    fn frame(app: Rc<RefCell<App>>, canvas: HtmlCanvasElement, time: f64) {
        {
            let mut a = app.borrow_mut();

            let dt = if a.last_time > 0.0 {
                ((time - a.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            a.last_time = time;

            a.refresh_canvas(&canvas);
            a.update(dt, time);
            a.render();
            a.update_hud();
        }

        request_animation_frame(app, canvas);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Steer Viz (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the interactive version");

    run_headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the model through a scripted session and log snapshots as JSON
#[cfg(not(target_arch = "wasm32"))]
fn run_headless_demo() {
    use steer_viz::consts::SIM_DT;
    use steer_viz::ui::{Direction, InputController, InputEvent, UiAction};
    use steer_viz::{Settings, SteeringModel};

    let settings = Settings::load();
    let mut model = SteeringModel::from_settings(&settings);
    let canvas = model.canvas();
    let controller = InputController::for_canvas(canvas.width, canvas.height);

    let press = |action: UiAction| {
        controller
            .layout()
            .region(action)
            .map(|r| r.rect.center())
            .map(|c| InputEvent::PointerPress { x: c.x, y: c.y })
    };

    // (tick, event) pairs, one simulated second apart
    let ticks_per_second = (1.0 / SIM_DT).round() as usize;
    let script: Vec<(usize, InputEvent)> = [
        Some(InputEvent::KeyPress(Direction::Left)),
        Some(InputEvent::KeyPress(Direction::Down)),
        press(UiAction::SpeedUp),
        Some(InputEvent::PointerPress {
            x: 3.0 * steer_viz::consts::PIXELS_PER_METER,
            y: canvas.height - 50.0,
        }),
        press(UiAction::ZoomIn),
    ]
    .into_iter()
    .flatten()
    .enumerate()
    .map(|(i, e)| ((i + 1) * ticks_per_second, e))
    .collect();

    let total_ticks = (script.len() + 1) * ticks_per_second;
    let mut script = script.into_iter().peekable();

    for tick in 0..total_ticks {
        while let Some((_, event)) = script.next_if(|(at, _)| *at == tick) {
            log::info!("tick {tick}: {:?}", event);
            controller.apply(&mut model, event);
        }

        model.advance();

        if tick % ticks_per_second == 0 {
            match serde_json::to_string(&model.snapshot()) {
                Ok(json) => log::info!("tick {tick}: {json}"),
                Err(e) => log::warn!("Could not serialize snapshot: {}", e),
            }
        }
    }

    log::info!("Headless run finished after {total_ticks} ticks");
}
