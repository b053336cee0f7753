//! Rain Catcher entry point
//!
//! The graphical bootstrap belongs to the host engine, so the native binary
//! is a headless smoke harness: it drives a full session against a
//! synthetic engine at a fixed 60 Hz for thirty simulated seconds with the
//! demo AI steering the bucket.

use std::path::PathBuf;

use rain_catcher::Settings;
use rain_catcher::engine::{Engine, Key, ResourceLoadError};
use rain_catcher::session::Session;

/// Simulated run length in frames (60 Hz)
const DEMO_FRAMES: u32 = 30 * 60;

/// Headless engine: assets always "load", sounds are counted, draw calls
/// are discarded, and time advances one fixed step per frame.
struct HeadlessEngine {
    next_handle: u32,
    clock_ns: u64,
    sounds_played: u64,
}

impl HeadlessEngine {
    fn new() -> Self {
        Self {
            next_handle: 1,
            clock_ns: 0,
            sounds_played: 0,
        }
    }

    fn advance_clock(&mut self, dt: f32) {
        self.clock_ns += (dt as f64 * 1e9) as u64;
    }
}

impl Engine for HeadlessEngine {
    type Texture = u32;
    type Sound = u32;
    type Music = u32;

    fn load_texture(&mut self, path: &str) -> Result<u32, ResourceLoadError> {
        let h = self.next_handle;
        self.next_handle += 1;
        log::debug!("loaded texture {path} as handle {h}");
        Ok(h)
    }
    fn load_sound(&mut self, path: &str) -> Result<u32, ResourceLoadError> {
        let h = self.next_handle;
        self.next_handle += 1;
        log::debug!("loaded sound {path} as handle {h}");
        Ok(h)
    }
    fn load_music(&mut self, path: &str) -> Result<u32, ResourceLoadError> {
        let h = self.next_handle;
        self.next_handle += 1;
        log::debug!("loaded music {path} as handle {h}");
        Ok(h)
    }
    fn unload_texture(&mut self, t: u32) {
        log::debug!("released texture handle {t}");
    }
    fn unload_sound(&mut self, s: u32) {
        log::debug!("released sound handle {s}");
    }
    fn unload_music(&mut self, m: u32) {
        log::debug!("released music handle {m}");
    }

    fn play_sound(&mut self, _sound: &u32, _volume: f32) {
        self.sounds_played += 1;
    }
    fn play_music_looping(&mut self, _music: &u32, _volume: f32) {}
    fn stop_music(&mut self, _music: &u32) {}

    fn begin_frame(&mut self) {}
    fn draw(&mut self, _texture: &u32, _x: f32, _y: f32) {}
    fn end_frame(&mut self) {}

    fn poll_pointer(&mut self) -> Option<(f32, f32)> {
        None
    }
    fn poll_key(&mut self, _key: Key) -> bool {
        false
    }
    fn delta_time(&mut self) -> f32 {
        1.0 / 60.0
    }
    fn monotonic_ns(&mut self) -> u64 {
        self.clock_ns
    }
    fn viewport_size(&mut self) -> (u32, u32) {
        (800, 480)
    }
}

fn main() {
    env_logger::init();
    log::info!("Rain Catcher (headless demo) starting...");

    let settings_path = PathBuf::from(Settings::FILE_NAME);
    let mut settings = Settings::load(&settings_path);
    if settings.seed.is_none() {
        // Fixed seed so repeated demo runs are comparable
        settings.seed = Some(0xDECAF);
    }

    let mut engine = HeadlessEngine::new();
    let mut session = match Session::init(&mut engine, settings) {
        Ok(session) => session,
        Err(e) => {
            log::error!("startup failed: {e}");
            std::process::exit(1);
        }
    };

    session.set_idle_mode(true);
    for frame in 0..DEMO_FRAMES {
        let dt = engine.delta_time();
        engine.advance_clock(dt);
        session.frame(&mut engine);

        if frame % (5 * 60) == 0 {
            log::info!(
                "t={:>4.1}s drops active {} caught {}",
                frame as f32 / 60.0,
                session.state().raindrops.len(),
                session.state().drops_caught,
            );
        }
    }

    let caught = session.state().drops_caught;
    session.shutdown(&mut engine);
    log::info!("demo finished: {caught} drops caught, {} sound cues", engine.sounds_played);
}
