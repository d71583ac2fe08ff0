//! Platform abstraction layer
//!
//! The browser build exposes the simulation to the JavaScript presentation
//! through `wasm-bindgen`. Presentation code owns the render loop and input
//! devices; it pushes intents and calls `frame(dt)` once per animation frame,
//! then reads the JSON snapshot back.

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::prelude::*;

    use crate::sim::{Intent, World};
    use crate::tuning::Tuning;

    /// Install logging and the panic hook (call once at startup)
    #[wasm_bindgen(start)]
    pub fn init() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    }

    /// A run handle owned by the page
    #[wasm_bindgen]
    pub struct WebRunner {
        world: World,
    }

    #[wasm_bindgen]
    impl WebRunner {
        /// Create a runner; `tuning_json` may be empty for defaults
        #[wasm_bindgen(constructor)]
        pub fn new(tuning_json: &str) -> Result<WebRunner, JsError> {
            let tuning = if tuning_json.trim().is_empty() {
                Tuning::default()
            } else {
                Tuning::from_json(tuning_json)?
            };
            let seed = js_sys::Date::now() as u64;
            Ok(WebRunner {
                world: World::new(tuning, seed),
            })
        }

        pub fn start(&mut self) {
            self.world.push_intent(Intent::Start);
        }

        /// -1 for left, +1 for right
        pub fn request_lane_change(&mut self, direction: i32) {
            self.world.push_intent(Intent::LaneChange(direction.signum()));
        }

        pub fn request_jump(&mut self) {
            self.world.push_intent(Intent::Jump);
        }

        pub fn request_pause_toggle(&mut self) {
            self.world.push_intent(Intent::PauseToggle);
        }

        pub fn quit(&mut self) {
            self.world.push_intent(Intent::Quit);
        }

        pub fn reset(&mut self) {
            self.world.push_intent(Intent::Reset);
        }

        /// Advance by the frame's elapsed seconds
        pub fn frame(&mut self, dt: f32) {
            self.world.frame(dt);
        }

        /// Current frame state as JSON
        pub fn snapshot(&self) -> Result<String, JsError> {
            Ok(serde_json::to_string(&self.world.snapshot())?)
        }

        /// End-of-run report as JSON, empty while the run is still going
        pub fn summary(&self) -> Result<String, JsError> {
            match self.world.summary() {
                Some(summary) => Ok(serde_json::to_string(&summary)?),
                None => Ok(String::new()),
            }
        }

        /// Food encyclopedia (items with their notes) as JSON
        pub fn catalog() -> Result<String, JsError> {
            Ok(serde_json::to_string(&crate::sim::encyclopedia())?)
        }
    }
}
