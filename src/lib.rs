//! Rain Catcher - a bucket-catches-raindrops arcade demo
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bucket, raindrops, spawn timer)
//! - `engine`: Trait boundary to the external game-engine runtime
//! - `camera`: Orthographic unprojection from device to world space
//! - `session`: Startup/frame/shutdown lifecycle owning assets and state
//! - `settings`: User preferences (volumes, seed override)

pub mod camera;
pub mod engine;
pub mod session;
pub mod settings;
pub mod sim;

pub use camera::Camera;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Logical screen width in world units (device-independent)
    pub const WORLD_WIDTH: f32 = 800.0;
    /// Logical screen height in world units
    pub const WORLD_HEIGHT: f32 = 480.0;

    /// Bucket and raindrop sprites are both 64x64 world units
    pub const SPRITE_SIZE: f32 = 64.0;

    /// Rightmost x a sprite can occupy and stay fully on screen
    pub const MAX_SPRITE_X: f32 = WORLD_WIDTH - SPRITE_SIZE;

    /// Bucket starting y (fixed; the bucket only moves horizontally)
    pub const BUCKET_Y: f32 = 20.0;

    /// Horizontal bucket speed under key input (world units/s)
    pub const BUCKET_SPEED: f32 = 200.0;
    /// Raindrop fall speed (world units/s)
    pub const DROP_FALL_SPEED: f32 = 200.0;

    /// Minimum gap between raindrop spawns (monotonic nanoseconds)
    pub const SPAWN_INTERVAL_NS: u64 = 1_000_000_000;
}
