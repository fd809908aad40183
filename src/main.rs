//! Bounce Pong entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use bounce_pong::Config;
    use bounce_pong::platform::{FrameLoop, InputEvent};
    use bounce_pong::renderer::{RenderState, VertexBatch};
    use bounce_pong::sim::SimState;

    /// Browser-side app: simulation, CPU batch and GPU presenter
    struct App {
        frame_loop: FrameLoop<VertexBatch>,
        render_state: Option<RenderState>,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
        last_fps_log: f64,
    }

    impl App {
        fn new(frame_loop: FrameLoop<VertexBatch>) -> Self {
            Self {
                frame_loop,
                render_state: None,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
                last_fps_log: 0.0,
            }
        }

        /// Present the current batch
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.frame_loop.canvas) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        fn track_fps(&mut self, time: f64) {
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            // Oldest sample sits at the next write slot
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }

            if time - self.last_fps_log >= 1000.0 {
                log::debug!("{} fps, frame {}", self.fps, self.frame_loop.state.frame);
                self.last_fps_log = time;
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Bounce Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Backing store in physical pixels, playfield in CSS pixels
        let dpr = window.device_pixel_ratio();
        let client_w = canvas.client_width();
        let client_h = canvas.client_height();
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Write back the validated config so the stored copy is complete and editable
        let config = Config::load();
        config.save();
        let config = config.with_playfield(client_w as f32, client_h as f32);
        let seed = config.seed.unwrap_or(js_sys::Date::now() as u64);
        let playfield = config.playfield();

        let mut state = SimState::new(config, seed);
        state.initialize();
        let frame_loop = FrameLoop::new(state, VertexBatch::new(playfield.size()));
        let app = Rc::new(RefCell::new(App::new(frame_loop)));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
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

        let render_state =
            RenderState::new(surface, &adapter, width, height, playfield.size()).await;
        app.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(app.clone());

        request_animation_frame(app);

        log::info!("Bounce Pong running!");
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut()
                    .frame_loop
                    .handle_input(&InputEvent::KeyDown(event.key()));
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut()
                    .frame_loop
                    .handle_input(&InputEvent::KeyUp(event.key()));
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            frame(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            a.frame_loop.frame();
            a.render();
            a.track_fps(time);
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use bounce_pong::Config;
    use bounce_pong::platform::{FrameLoop, HeadlessScheduler, NoInput};
    use bounce_pong::renderer::VertexBatch;
    use bounce_pong::sim::SimState;

    env_logger::init();
    log::info!("Bounce Pong (native) starting...");
    log::info!("Native mode runs headless - serve the wasm build for the interactive version");

    let config = Config::load();
    let seed = config.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    });
    let frames = config.headless_frames;
    let playfield = config.playfield();

    let state = SimState::new(config, seed);
    let mut frame_loop = FrameLoop::new(state, VertexBatch::new(playfield.size()));
    frame_loop.run(&mut HeadlessScheduler::new(frames), &mut NoInput);

    let state = &frame_loop.state;
    for (i, body) in state.bodies.iter().enumerate() {
        log::info!(
            "body {} ({:?}, r={}): pos=({:.1}, {:.1}) vel=({:.2}, {:.2})",
            i,
            body.color,
            body.radius,
            body.pos.x,
            body.pos.y,
            body.vel.x,
            body.vel.y
        );
    }
    log::info!(
        "player y={:.1}, autopilot y={:.1} heading {:?}, {} vertices in last frame",
        state.player.pos.y,
        state.autopilot.pos.y,
        state.autopilot.direction,
        frame_loop.canvas.len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
