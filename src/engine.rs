//! Engine collaborator boundary
//!
//! The windowing, texture decode, audio playback, and sprite batching all
//! live in an external game-engine runtime. This trait is the fixed surface
//! the game relies on; hosts implement it over their native handles.

use std::fmt;

/// Keys the game polls each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
}

/// Pointer sample for one frame, in device/window coordinates (y-down,
/// origin at the top-left). `None` when the pointer is not pressed.
pub type PointerSample = Option<(f32, f32)>;

/// Asset acquisition failed (missing or corrupt file).
///
/// The only failure surface in the game; fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLoadError {
    pub path: String,
}

impl ResourceLoadError {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl fmt::Display for ResourceLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to load asset: {}", self.path)
    }
}

impl std::error::Error for ResourceLoadError {}

/// The external game-engine runtime.
///
/// Handle types are associated so each backend keeps its own native
/// representation; the session releases every acquired handle exactly once
/// through the matching `unload_*` call.
pub trait Engine {
    type Texture;
    type Sound;
    type Music;

    // Resource acquisition/release
    fn load_texture(&mut self, path: &str) -> Result<Self::Texture, ResourceLoadError>;
    fn load_sound(&mut self, path: &str) -> Result<Self::Sound, ResourceLoadError>;
    fn load_music(&mut self, path: &str) -> Result<Self::Music, ResourceLoadError>;
    fn unload_texture(&mut self, texture: Self::Texture);
    fn unload_sound(&mut self, sound: Self::Sound);
    fn unload_music(&mut self, music: Self::Music);

    // Audio
    fn play_sound(&mut self, sound: &Self::Sound, volume: f32);
    fn play_music_looping(&mut self, music: &Self::Music, volume: f32);
    fn stop_music(&mut self, music: &Self::Music);

    // Rendering (positions are world units; the engine applies the camera)
    fn begin_frame(&mut self);
    fn draw(&mut self, texture: &Self::Texture, x: f32, y: f32);
    fn end_frame(&mut self);

    // Input and time
    fn poll_pointer(&mut self) -> PointerSample;
    fn poll_key(&mut self, key: Key) -> bool;
    fn delta_time(&mut self) -> f32;
    fn monotonic_ns(&mut self) -> u64;

    /// Current device viewport in pixels, for pointer unprojection
    fn viewport_size(&mut self) -> (u32, u32);
}
