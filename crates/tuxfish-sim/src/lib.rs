// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! tuxfish-sim: the fishing game as a deterministic, windowless simulation.
//!
//! Time and input come in through [`Game::update`]; a draw list of
//! model-view matrices comes out through [`Game::scene`] and
//! [`Game::render`]. Nothing here touches a window or a GPU.
#![forbid(unsafe_code)]

pub mod angler;
pub mod camera;
mod clock;
pub mod constants;
mod error;
pub mod fish;
mod game;
pub mod input;
pub mod scene;
pub mod shoal;
pub mod water;

pub use angler::Angler;
pub use camera::{Lens, OrbitCamera, Viewport};
pub use clock::{FrameClock, REPORT_INTERVAL};
pub use constants::ModelId;
pub use error::SimError;
pub use fish::{roll_wild_fish, CatchLog, FishId};
pub use game::{Game, GameConfig, GameEvent, HookSource, Trophy, BASE_TITLE};
pub use input::{InputEvent, Key, MouseButton, PointerDrag};
pub use scene::{DrawCall, RenderPort, Shading};
pub use shoal::{JumpPhase, Shoal};
pub use water::{wave_offset, WaterSurface};
