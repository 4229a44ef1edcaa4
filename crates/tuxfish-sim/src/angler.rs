// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scripted player for headless runs.
//!
//! The angler reads the game after each frame and answers with the key
//! events a person would press: turn the rod towards a shoal that has just
//! jumped, hold Space until the rod is pitched far enough to land the float
//! on it, then wait. With no shoal in play it casts straight ahead and waits
//! for a wild bite.

use tracing::debug;
use tuxfish_math::scalar::{FRAC_PI_2, PI, TAU};

use crate::constants::{CAST_REACH_OFFSET, CAST_REACH_SCALE, ROD_TURN_RATE};
use crate::game::Game;
use crate::input::{InputEvent, Key};

/// Yaw error accepted before casting (radians).
pub const AIM_TOLERANCE: f32 = 0.03;
/// Shoals are targeted while their countdown lies in `(TARGET_AFTER, 0)`.
pub const TARGET_AFTER: f32 = -7.0;
/// Rod pitch used for blind casts.
pub const BLIND_PITCH: f32 = 1.0;
/// Highest pitch the angler waits for; the rod stops rising at 2.
const MAX_PITCH: f32 = 1.99;
/// Seconds a shoal cast is given before the angler tries again.
pub const SHOAL_PATIENCE: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Plan {
    Idle,
    Aim {
        yaw: f32,
        pitch: f32,
        shoal: Option<usize>,
    },
    Cast {
        pitch: f32,
        shoal: Option<usize>,
    },
    Wait {
        shoal: Option<usize>,
        next_jump: f32,
        since: f32,
    },
}

/// Keyboard-driving bot.
#[derive(Debug, Clone, PartialEq)]
pub struct Angler {
    plan: Plan,
    held: Option<Key>,
}

impl Default for Angler {
    fn default() -> Self {
        Self::new()
    }
}

impl Angler {
    /// An angler with no plan and no keys down.
    pub fn new() -> Self {
        Self {
            plan: Plan::Idle,
            held: None,
        }
    }

    /// Key currently held down by the angler.
    pub fn held(&self) -> Option<Key> {
        self.held
    }

    /// Input for the next frame, given the state after the last one.
    pub fn act(&mut self, game: &Game) -> Vec<InputEvent> {
        let mut out = Vec::new();
        if game.hooked().is_some() {
            self.release(&mut out);
            self.plan = Plan::Idle;
            return out;
        }

        match self.plan {
            Plan::Idle => {
                self.plan = Self::choose(game);
                debug!(plan = ?self.plan, "angler planned a cast");
            }
            Plan::Aim { yaw, pitch, shoal } => {
                let error = wrap_angle(yaw - game.rod_yaw());
                let tolerance = AIM_TOLERANCE.max(0.5 * ROD_TURN_RATE * game.delta());
                if error.abs() > tolerance {
                    let key = if error < 0.0 { Key::Left } else { Key::Right };
                    self.hold(key, &mut out);
                } else {
                    self.release(&mut out);
                    if game.rod_pitch() <= 0.0 {
                        self.hold(Key::Space, &mut out);
                        self.plan = Plan::Cast { pitch, shoal };
                    }
                }
            }
            Plan::Cast { pitch, shoal } => {
                if game.rod_pitch() >= pitch {
                    self.release(&mut out);
                    let next_jump = shoal
                        .and_then(|i| game.shoals().get(i))
                        .map_or(0.0, |s| s.next_jump());
                    self.plan = Plan::Wait {
                        shoal,
                        next_jump,
                        since: game.time(),
                    };
                }
            }
            Plan::Wait {
                shoal,
                next_jump,
                since,
            } => {
                let give_up = match shoal.and_then(|i| game.shoals().get(i)) {
                    Some(s) => {
                        s.next_jump().to_bits() != next_jump.to_bits()
                            || game.time() - since > SHOAL_PATIENCE
                    }
                    None => target_shoal(game).is_some() || !game.float_is_out(),
                };
                if give_up {
                    self.plan = Plan::Idle;
                }
            }
        }
        out
    }

    fn choose(game: &Game) -> Plan {
        if let Some(i) = target_shoal(game) {
            let shoal = &game.shoals()[i];
            let radius = shoal.x().hypot(shoal.y());
            return Plan::Aim {
                yaw: shoal.x().atan2(shoal.y()) - FRAC_PI_2,
                pitch: (radius / CAST_REACH_SCALE - CAST_REACH_OFFSET).min(MAX_PITCH),
                shoal: Some(i),
            };
        }
        Plan::Aim {
            yaw: game.rod_yaw(),
            pitch: BLIND_PITCH,
            shoal: None,
        }
    }

    fn hold(&mut self, key: Key, out: &mut Vec<InputEvent>) {
        if self.held == Some(key) {
            return;
        }
        self.release(out);
        out.push(InputEvent::KeyDown(key));
        self.held = Some(key);
    }

    fn release(&mut self, out: &mut Vec<InputEvent>) {
        if let Some(key) = self.held.take() {
            out.push(InputEvent::KeyUp(key));
        }
    }
}

/// The shoal with the most time left in its catch window, if any has jumped.
fn target_shoal(game: &Game) -> Option<usize> {
    let t = game.time();
    game.shoals()
        .iter()
        .enumerate()
        .filter(|(_, s)| {
            let d = s.countdown(t);
            d < 0.0 && d > TARGET_AFTER
        })
        .max_by(|(_, a), (_, b)| a.countdown(t).total_cmp(&b.countdown(t)))
        .map(|(i, _)| i)
}

/// Wraps an angle into `[-π, π)`.
fn wrap_angle(a: f32) -> f32 {
    (a + PI).rem_euclid(TAU) - PI
}
