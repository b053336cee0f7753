//! Session lifecycle: init, per-frame step, shutdown
//!
//! A `Session` replaces the ambient globals of a typical engine sample: it
//! owns the asset handles, the camera, and the game state, and is passed by
//! reference into every call. The host loop drives it explicitly:
//! `init` once, `frame` per rendered frame, `shutdown` once.

use log::{debug, info};

use crate::camera::Camera;
use crate::engine::{Engine, Key, ResourceLoadError};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, advance};

/// Fixed asset names, resolved by the engine's own file lookup
pub const DROPLET_TEXTURE: &str = "droplet.png";
pub const BUCKET_TEXTURE: &str = "bucket.png";
pub const DROP_SOUND: &str = "drop.wav";
pub const RAIN_MUSIC: &str = "rain.mp3";

/// Engine-native handles acquired at startup, released exactly once at
/// shutdown (or on a failed init before the error propagates).
struct Assets<E: Engine> {
    droplet: E::Texture,
    bucket: E::Texture,
    drop_sound: E::Sound,
    rain_music: E::Music,
}

/// A running game session
pub struct Session<E: Engine> {
    assets: Assets<E>,
    camera: Camera,
    state: GameState,
    settings: Settings,
    /// Demo mode: the sim steers the bucket itself
    idle_mode: bool,
}

impl<E: Engine> Session<E> {
    /// Load all assets, start the background music, and build the initial
    /// game state.
    ///
    /// On a load failure every handle acquired so far is released before the
    /// error is returned; startup failures are fatal to the caller.
    pub fn init(engine: &mut E, settings: Settings) -> Result<Self, ResourceLoadError> {
        let droplet = engine.load_texture(DROPLET_TEXTURE)?;

        let bucket = match engine.load_texture(BUCKET_TEXTURE) {
            Ok(t) => t,
            Err(e) => {
                engine.unload_texture(droplet);
                return Err(e);
            }
        };

        let drop_sound = match engine.load_sound(DROP_SOUND) {
            Ok(s) => s,
            Err(e) => {
                engine.unload_texture(droplet);
                engine.unload_texture(bucket);
                return Err(e);
            }
        };

        let rain_music = match engine.load_music(RAIN_MUSIC) {
            Ok(m) => m,
            Err(e) => {
                engine.unload_texture(droplet);
                engine.unload_texture(bucket);
                engine.unload_sound(drop_sound);
                return Err(e);
            }
        };

        engine.play_music_looping(&rain_music, settings.music_gain());

        let seed = settings.effective_seed();
        let now = engine.monotonic_ns();
        info!("session started (seed {seed})");

        Ok(Self {
            assets: Assets {
                droplet,
                bucket,
                drop_sound,
                rain_music,
            },
            camera: {
                let (w, h) = engine.viewport_size();
                Camera::new(w, h)
            },
            state: GameState::new(seed, now),
            settings,
            idle_mode: false,
        })
    }

    /// Toggle demo mode (bucket plays itself)
    pub fn set_idle_mode(&mut self, on: bool) {
        self.idle_mode = on;
    }

    /// Read-only view of the simulation state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run one frame: poll input, advance the simulation, play sound cues,
    /// draw the current positions.
    pub fn frame(&mut self, engine: &mut E) {
        let dt = engine.delta_time();
        let now = engine.monotonic_ns();

        let (vw, vh) = engine.viewport_size();
        self.camera.set_viewport(vw, vh);

        let input = TickInput {
            pointer: engine
                .poll_pointer()
                .map(|(x, y)| self.camera.unproject(x, y)),
            left: engine.poll_key(Key::Left),
            right: engine.poll_key(Key::Right),
            idle_mode: self.idle_mode,
        };

        let events = advance(&mut self.state, &input, dt, now);
        for event in &events {
            match event {
                GameEvent::DropCaught => {
                    debug!("drop caught (total {})", self.state.drops_caught);
                    engine.play_sound(&self.assets.drop_sound, self.settings.sfx_gain());
                }
            }
        }

        // Rendering is a pure read of the simulation state
        engine.begin_frame();
        engine.draw(&self.assets.bucket, self.state.bucket.x, self.state.bucket.y);
        for drop in &self.state.raindrops {
            engine.draw(&self.assets.droplet, drop.rect.x, drop.rect.y);
        }
        engine.end_frame();
    }

    /// Stop the music and release every asset handle.
    pub fn shutdown(self, engine: &mut E) {
        info!(
            "session ended: {} drops caught",
            self.state.drops_caught
        );
        engine.stop_music(&self.assets.rain_music);
        engine.unload_texture(self.assets.droplet);
        engine.unload_texture(self.assets.bucket);
        engine.unload_sound(self.assets.drop_sound);
        engine.unload_music(self.assets.rain_music);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    /// Scripted fake engine that tracks handle lifetimes and draw calls
    struct FakeEngine {
        fail_on: Option<&'static str>,
        next_handle: u32,
        live_handles: BTreeMap<u32, String>,
        sounds_played: u32,
        music_playing: bool,
        frames_drawn: u32,
        draws_this_frame: Vec<(u32, f32, f32)>,
        pointer: Option<(f32, f32)>,
        dt: f32,
        clock_ns: u64,
    }

    impl FakeEngine {
        fn new() -> Self {
            Self {
                fail_on: None,
                next_handle: 1,
                live_handles: BTreeMap::new(),
                sounds_played: 0,
                music_playing: false,
                frames_drawn: 0,
                draws_this_frame: Vec::new(),
                pointer: None,
                dt: 1.0 / 60.0,
                clock_ns: 0,
            }
        }

        fn acquire(&mut self, path: &str) -> Result<u32, ResourceLoadError> {
            if self.fail_on == Some(path) {
                return Err(ResourceLoadError::new(path));
            }
            let h = self.next_handle;
            self.next_handle += 1;
            self.live_handles.insert(h, path.to_string());
            Ok(h)
        }

        fn release(&mut self, handle: u32) {
            let was_live = self.live_handles.remove(&handle).is_some();
            assert!(was_live, "handle {handle} released twice");
        }
    }

    impl Engine for FakeEngine {
        type Texture = u32;
        type Sound = u32;
        type Music = u32;

        fn load_texture(&mut self, path: &str) -> Result<u32, ResourceLoadError> {
            self.acquire(path)
        }
        fn load_sound(&mut self, path: &str) -> Result<u32, ResourceLoadError> {
            self.acquire(path)
        }
        fn load_music(&mut self, path: &str) -> Result<u32, ResourceLoadError> {
            self.acquire(path)
        }
        fn unload_texture(&mut self, t: u32) {
            self.release(t);
        }
        fn unload_sound(&mut self, s: u32) {
            self.release(s);
        }
        fn unload_music(&mut self, m: u32) {
            self.release(m);
        }

        fn play_sound(&mut self, _sound: &u32, _volume: f32) {
            self.sounds_played += 1;
        }
        fn play_music_looping(&mut self, _music: &u32, _volume: f32) {
            self.music_playing = true;
        }
        fn stop_music(&mut self, _music: &u32) {
            self.music_playing = false;
        }

        fn begin_frame(&mut self) {
            self.draws_this_frame.clear();
        }
        fn draw(&mut self, texture: &u32, x: f32, y: f32) {
            self.draws_this_frame.push((*texture, x, y));
        }
        fn end_frame(&mut self) {
            self.frames_drawn += 1;
        }

        fn poll_pointer(&mut self) -> Option<(f32, f32)> {
            self.pointer
        }
        fn poll_key(&mut self, _key: Key) -> bool {
            false
        }
        fn delta_time(&mut self) -> f32 {
            self.dt
        }
        fn monotonic_ns(&mut self) -> u64 {
            self.clock_ns
        }
        fn viewport_size(&mut self) -> (u32, u32) {
            (800, 480)
        }
    }

    #[test]
    fn test_init_loads_assets_and_starts_music() {
        let mut engine = FakeEngine::new();
        let session = Session::init(&mut engine, Settings::default()).unwrap();
        assert_eq!(engine.live_handles.len(), 4);
        assert!(engine.music_playing);
        assert_eq!(session.state().raindrops.len(), 1);
    }

    #[test]
    fn test_failed_init_releases_acquired_handles() {
        let mut engine = FakeEngine::new();
        engine.fail_on = Some(DROP_SOUND);

        let Err(err) = Session::init(&mut engine, Settings::default()) else {
            panic!("init must fail when {DROP_SOUND} is missing");
        };
        assert_eq!(err.path, DROP_SOUND);
        // Both textures acquired before the failure were released
        assert!(engine.live_handles.is_empty());
    }

    #[test]
    fn test_shutdown_releases_every_handle_once() {
        let mut engine = FakeEngine::new();
        let session = Session::init(&mut engine, Settings::default()).unwrap();
        session.shutdown(&mut engine);
        assert!(engine.live_handles.is_empty());
        assert!(!engine.music_playing);
    }

    #[test]
    fn test_frame_draws_bucket_and_drops() {
        let mut engine = FakeEngine::new();
        let mut session = Session::init(&mut engine, Settings::default()).unwrap();
        session.frame(&mut engine);

        assert_eq!(engine.frames_drawn, 1);
        // Bucket plus the initial raindrop
        assert_eq!(engine.draws_this_frame.len(), 2);
        session.shutdown(&mut engine);
    }

    #[test]
    fn test_pointer_input_flows_through_camera() {
        let mut engine = FakeEngine::new();
        let mut session = Session::init(&mut engine, Settings::default()).unwrap();

        // Device coords equal world coords at an 800x480 viewport (y flips)
        engine.pointer = Some((500.0, 100.0));
        session.frame(&mut engine);
        assert_eq!(session.state().bucket.x, 500.0 - 32.0);
        session.shutdown(&mut engine);
    }

    #[test]
    fn test_catch_plays_sound() {
        let mut engine = FakeEngine::new();
        let mut session = Session::init(&mut engine, Settings::default()).unwrap();

        // Drive the only raindrop straight into the bucket
        session.set_idle_mode(true);
        engine.dt = 1.0 / 60.0;
        for _ in 0..600 {
            session.frame(&mut engine);
            if engine.sounds_played > 0 {
                break;
            }
        }
        assert_eq!(engine.sounds_played, 1);
        assert_eq!(session.state().drops_caught, 1);
        session.shutdown(&mut engine);
    }
}
