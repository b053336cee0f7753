//! Game state and core simulation types
//!
//! All state that carries across frames lives here: the bucket, the active
//! raindrops, the spawn timer, and the seeded RNG.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::consts::*;

/// Side effects emitted by a simulation step for the host to act on.
///
/// The simulation never touches the audio device itself; it reports what
/// happened and the session layer plays the matching sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A raindrop landed in the bucket
    DropCaught,
}

/// A falling raindrop entity
#[derive(Debug, Clone, Copy)]
pub struct Raindrop {
    pub id: u32,
    pub rect: Rect,
}

/// Complete game state (deterministic given seed and input script)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// The player's bucket; lives for the whole session, only x changes
    pub bucket: Rect,
    /// Active raindrops in spawn order (stable iteration, IDs ascending)
    pub raindrops: Vec<Raindrop>,
    /// Monotonic timestamp of the last spawn (ns)
    pub last_spawn_ns: u64,
    /// Total drops caught this session
    pub drops_caught: u64,
    /// Spawn-position RNG (seeded, never a hidden global)
    rng: Pcg32,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state and spawn the first raindrop at `now_ns`.
    pub fn new(seed: u64, now_ns: u64) -> Self {
        let mut state = Self {
            seed,
            bucket: Rect::new(
                WORLD_WIDTH / 2.0 - SPRITE_SIZE / 2.0,
                BUCKET_Y,
                SPRITE_SIZE,
                SPRITE_SIZE,
            ),
            raindrops: Vec::new(),
            last_spawn_ns: now_ns,
            drops_caught: 0,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        };

        state.spawn_raindrop(now_ns);
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn one raindrop at the top of the screen at a uniform-random x,
    /// and reset the spawn timer to `now_ns`.
    pub fn spawn_raindrop(&mut self, now_ns: u64) {
        let id = self.next_entity_id();
        let x = self.rng.random_range(0.0..=MAX_SPRITE_X);
        self.raindrops.push(Raindrop {
            id,
            rect: Rect::new(x, WORLD_HEIGHT, SPRITE_SIZE, SPRITE_SIZE),
        });
        self.last_spawn_ns = now_ns;
    }
}
