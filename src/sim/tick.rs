//! Per-frame simulation step
//!
//! Advances the game state by one variable-timestep frame. Order matters and
//! matches the reference behavior exactly: pointer, keys, clamp, spawn, fall,
//! removal.

use glam::Vec2;

use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Input sampled for a single frame (already converted to world space)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Pointer position in world units, if the pointer is down
    pub pointer: Option<Vec2>,
    /// Left arrow held
    pub left: bool,
    /// Right arrow held
    pub right: bool,
    /// Idle/demo mode - steer the bucket under the lowest raindrop
    pub idle_mode: bool,
}

/// Advance the game state by one frame.
///
/// `dt` is the frame delta in seconds (finite, >= 0; zero is a valid no-op
/// frame). `now_ns` is a monotonic clock reading used only for spawn gating.
///
/// Returns the sound events the caller should play. This function never
/// fails: it is a pure state transition over in-memory data.
pub fn advance(state: &mut GameState, input: &TickInput, dt: f32, now_ns: u64) -> Vec<GameEvent> {
    debug_assert!(dt.is_finite() && dt >= 0.0, "dt must be finite and >= 0");

    let mut input = *input;
    if input.idle_mode {
        // Chase the drop closest to the bottom; it lands first.
        let target = state
            .raindrops
            .iter()
            .min_by(|a, b| {
                a.rect
                    .y
                    .partial_cmp(&b.rect.y)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|drop| Vec2::new(drop.rect.x + SPRITE_SIZE / 2.0, drop.rect.y));
        if let Some(target) = target {
            input.pointer = Some(target);
        }
    }

    // Pointer sets the bucket position absolutely; keys compound afterward.
    if let Some(pointer) = input.pointer {
        state.bucket.x = pointer.x - SPRITE_SIZE / 2.0;
    }
    if input.left {
        state.bucket.x -= BUCKET_SPEED * dt;
    }
    if input.right {
        state.bucket.x += BUCKET_SPEED * dt;
    }
    state.bucket.x = state.bucket.x.clamp(0.0, MAX_SPRITE_X);

    // Time-gated spawn: at most one per frame even if several intervals
    // elapsed while the frame was stalled.
    if now_ns.saturating_sub(state.last_spawn_ns) > SPAWN_INTERVAL_NS {
        state.spawn_raindrop(now_ns);
    }

    // Fall, then two-phase removal in stable order: off-screen drops leave
    // silently and are never also collision-checked.
    let mut events = Vec::new();
    let bucket = state.bucket;
    let mut caught = 0u64;
    state.raindrops.retain_mut(|drop| {
        drop.rect.y -= DROP_FALL_SPEED * dt;

        if drop.rect.top() < 0.0 {
            return false;
        }
        if drop.rect.overlaps(&bucket) {
            events.push(GameEvent::DropCaught);
            caught += 1;
            return false;
        }
        true
    });
    state.drops_caught += caught;

    events
}
