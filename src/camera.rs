//! Orthographic camera unprojection
//!
//! The world is a fixed 800x480 logical space no matter the device
//! resolution. Pointer input arrives in device coordinates (y-down, top-left
//! origin) and must be unprojected into world space (y-up, bottom-left
//! origin) before the simulation sees it.

use glam::Vec2;

use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};

/// Inverse orthographic projection from device space to world space.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    viewport_w: f32,
    viewport_h: f32,
}

impl Camera {
    pub fn new(viewport_w: u32, viewport_h: u32) -> Self {
        Self {
            viewport_w: viewport_w.max(1) as f32,
            viewport_h: viewport_h.max(1) as f32,
        }
    }

    /// Track a window resize
    pub fn set_viewport(&mut self, w: u32, h: u32) {
        self.viewport_w = w.max(1) as f32;
        self.viewport_h = h.max(1) as f32;
    }

    /// Map a device pointer position to world units, flipping y.
    pub fn unproject(&self, device_x: f32, device_y: f32) -> Vec2 {
        Vec2::new(
            device_x / self.viewport_w * WORLD_WIDTH,
            (1.0 - device_y / self.viewport_h) * WORLD_HEIGHT,
        )
    }
}
