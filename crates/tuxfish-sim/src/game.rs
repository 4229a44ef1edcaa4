// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The fishing game state machine.
//!
//! [`Game::update`] runs one frame: clock, input, rod logic, waves, camera,
//! then the render pass which also drives reeling, wild bites, shoals and
//! the trophy. Gameplay that happens "while drawing" stays in draw order so
//! the draw list of a frame matches the state it was produced from.

use tracing::{debug, info, warn};
use tuxfish_math::scalar::{DEG2RAD, FRAC_PI_2};
use tuxfish_math::{Mat4, Prng, Vec3, DEFAULT_SEED};

use crate::camera::{Lens, OrbitCamera, Viewport, DEFAULT_SENSITIVITY};
use crate::clock::FrameClock;
use crate::constants::{
    ModelId, BOAT_BOB, CAST_PITCH_RATE, CAST_REACH_OFFSET, CAST_REACH_SCALE, LANDING_DISTANCE_SQ,
    MAX_CAST_PITCH, REEL_FRACTION, REEL_ROD_PITCH, REEL_SPEED, ROD_RELAX_RATE, ROD_TURN_RATE,
    SHOAL_COUNT, SPECIES_COUNT, TROPHY_SECS, WILD_BITE_DELAY,
};
use crate::fish::{roll_wild_fish, CatchLog, FishId};
use crate::input::{InputEvent, Key, PointerDrag};
use crate::scene::{DrawCall, RenderPort, SceneBuilder, Shading};
use crate::shoal::Shoal;
use crate::water::{wave_offset, WaterSurface};
use crate::SimError;

/// Window title before anything has been caught.
pub const BASE_TITLE: &str = "Tux Fishing";

/// Height of the rod pivot above the boat.
const ROD_PIVOT_Z: f32 = 0.125378;
/// Height the trophy spins at.
const TROPHY_Z: f32 = 0.37;
/// Splash rings sit this far below the local water height.
const SPLASH_SINK: f32 = 0.016;

/// Everything needed to start a game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Generator seed; equal seeds and inputs replay identically.
    pub seed: i32,
    /// Camera radians per pixel of drag.
    pub sensitivity: f32,
    /// Projection parameters.
    pub lens: Lens,
    /// Initial surface width in pixels.
    pub width: u32,
    /// Initial surface height in pixels.
    pub height: u32,
    /// Surface used for float and splash heights.
    pub water: WaterSurface,
    /// Timestamp the first frame delta is measured from.
    pub start_time: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            sensitivity: DEFAULT_SENSITIVITY,
            lens: Lens::default(),
            width: 1024,
            height: 768,
            water: WaterSurface::build_grid(4.0, 32, 0.02),
            start_time: 0.0,
        }
    }
}

/// Where a hooked fish came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookSource {
    /// A timed bite while the float was out.
    Wild,
    /// The float landed on a shoal that had just jumped.
    Shoal(usize),
}

/// Notable things that happened during a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A fish took the bait and is being reeled in.
    Hooked {
        /// Species on the line.
        fish: FishId,
        /// Wild bite or shoal.
        source: HookSource,
    },
    /// A fish reached the boat.
    Caught {
        /// Species landed.
        fish: FishId,
        /// Fish landed so far.
        total: u32,
        /// Distinct species landed so far.
        distinct: usize,
    },
    /// The game was reset.
    Reset,
    /// Frame rate since the previous report (F released).
    FrameRate {
        /// Average frames per second.
        fps: f32,
    },
}

/// The most recent catch, shown spinning above the boat until `until`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trophy {
    /// Species shown.
    pub fish: FishId,
    /// Timestamp the display ends at.
    pub until: f32,
}

/// Headless fishing game.
#[derive(Debug)]
pub struct Game {
    rng: Prng,
    clock: FrameClock,
    t: f32,
    dt: f32,
    camera: OrbitCamera,
    drag: PointerDrag,
    lens: Lens,
    viewport: Viewport,
    projection: Mat4,
    water: WaterSurface,
    woff: f32,
    turn_left: bool,
    turn_right: bool,
    casting: bool,
    rod_yaw: f32,
    rod_pitch: f32,
    float_pos: Vec3,
    heading: (f32, f32),
    float_yaw: f32,
    hooked: Option<FishId>,
    last_catches: [Option<FishId>; 2],
    last_slot: usize,
    trophy: Option<Trophy>,
    log: CatchLog,
    next_wild_fish: f32,
    shoals: [Shoal; SHOAL_COUNT],
    scene: SceneBuilder,
    events: Vec<GameEvent>,
}

impl Game {
    /// Validates `config` and starts a fresh game at `config.start_time`.
    pub fn new(config: GameConfig) -> Result<Self, SimError> {
        config.lens.validate()?;
        let viewport = Viewport::new(config.width, config.height)?;
        let camera = OrbitCamera::with_sensitivity(config.sensitivity)?;
        let mut rng = Prng::from_seed(config.seed);
        let t = config.start_time;
        let next_wild_fish = t + rng.next_range(WILD_BITE_DELAY.0, WILD_BITE_DELAY.1);
        let shoals = [(); SHOAL_COUNT].map(|()| Shoal::spawn(&mut rng, t));

        let game = Self {
            rng,
            clock: FrameClock::new(t),
            t,
            dt: 0.0,
            camera,
            drag: PointerDrag::default(),
            lens: config.lens,
            projection: viewport.projection(&config.lens),
            viewport,
            water: config.water,
            woff: 0.0,
            turn_left: false,
            turn_right: false,
            casting: false,
            rod_yaw: 0.0,
            rod_pitch: 0.0,
            float_pos: Vec3::ZERO,
            heading: (0.0, 0.0),
            float_yaw: 0.0,
            hooked: None,
            last_catches: [None; 2],
            last_slot: 0,
            trophy: None,
            log: CatchLog::default(),
            next_wild_fish,
            shoals,
            scene: SceneBuilder::default(),
            events: Vec::new(),
        };
        debug!(seed = config.seed, "game started");
        Ok(game)
    }

    /// Clears the rod, float, catches and trophy, re-rolls the wild bite
    /// timer and respawns every shoal. Emits [`GameEvent::Reset`] with the
    /// next update.
    ///
    /// Held keys, the camera and the window size survive a reset.
    pub fn reset(&mut self) {
        self.casting = false;
        self.rod_yaw = 0.0;
        self.rod_pitch = 0.0;
        self.float_pos = Vec3::ZERO;
        self.heading = (0.0, 0.0);
        self.float_yaw = 0.0;
        self.hooked = None;
        self.last_catches = [None; 2];
        self.last_slot = 0;
        self.trophy = None;
        self.log.clear();
        self.next_wild_fish = self.t + self.rng.next_range(WILD_BITE_DELAY.0, WILD_BITE_DELAY.1);
        for shoal in &mut self.shoals {
            shoal.respawn(&mut self.rng, self.t);
        }
        info!("game reset");
        self.events.push(GameEvent::Reset);
    }

    /// Advances the game to timestamp `t` (seconds), applying `input` in
    /// order, and rebuilds the frame's draw list. Returns what happened.
    pub fn update(&mut self, t: f32, input: &[InputEvent]) -> Vec<GameEvent> {
        self.dt = self.clock.tick(t);
        self.t = t;

        for event in input {
            self.handle(*event);
        }
        if self.hooked.is_none() {
            self.steer_rod();
        }

        self.woff = wave_offset(t);
        if let Some((dx, dy)) = self.drag.take_delta() {
            self.camera.orbit(dx, dy);
        }
        self.scene.begin(self.camera.view());

        self.draw_boat();
        self.update_float();
        self.update_shoals();
        self.draw_trophy();

        core::mem::take(&mut self.events)
    }

    fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Resized { width, height } => match Viewport::new(width, height) {
                Ok(viewport) => {
                    self.viewport = viewport;
                    self.projection = viewport.projection(&self.lens);
                }
                Err(err) => warn!(%err, "ignoring resize"),
            },
            InputEvent::KeyDown(key) => {
                if key.turns_left() {
                    self.turn_left = true;
                } else if key.turns_right() {
                    self.turn_right = true;
                } else if key == Key::Space {
                    self.casting = true;
                    self.next_wild_fish =
                        self.t + self.rng.next_range(WILD_BITE_DELAY.0, WILD_BITE_DELAY.1);
                }
            }
            InputEvent::KeyUp(key) => {
                if key.turns_left() {
                    self.turn_left = false;
                } else if key.turns_right() {
                    self.turn_right = false;
                } else if key == Key::Space {
                    self.casting = false;
                } else if key == Key::F {
                    if let Some(fps) = self.clock.report(self.t) {
                        info!(fps, "frame rate");
                        self.events.push(GameEvent::FrameRate { fps });
                    }
                }
            }
            InputEvent::MouseDown { button, x, y } => self.drag.press(button, x, y),
            InputEvent::MouseUp { button } => self.drag.release(button),
            InputEvent::MouseMotion { x, y } => self.drag.motion(x, y),
            InputEvent::Wheel { y } => self.camera.wheel(y),
        }
    }

    /// Turning, casting and rod relaxation while nothing is on the line.
    fn steer_rod(&mut self) {
        let dt = self.dt;
        if self.turn_left {
            self.rod_yaw -= ROD_TURN_RATE * dt;
            self.float_pos = Vec3::ZERO;
        }
        if self.turn_right {
            self.rod_yaw += ROD_TURN_RATE * dt;
            self.float_pos = Vec3::ZERO;
        }
        if self.casting {
            if self.rod_pitch < MAX_CAST_PITCH {
                self.rod_pitch += CAST_PITCH_RATE * dt;
            }
            let reach = (self.rod_pitch + CAST_REACH_OFFSET) * CAST_REACH_SCALE;
            let heading = self.rod_yaw + FRAC_PI_2;
            self.heading = (heading.sin(), heading.cos());
            self.float_yaw = -FRAC_PI_2 + self.rod_yaw;
            let x = self.heading.0 * reach;
            let y = self.heading.1 * reach;
            // Waves have not advanced yet this frame.
            self.float_pos = Vec3::new(x, y, self.water.height_at(x, y, self.woff));
        } else if self.rod_pitch > 0.0 {
            self.rod_pitch -= ROD_RELAX_RATE * dt;
        }
    }

    /// Sky, water, boat, the last two catches, Tux and the rod.
    fn draw_boat(&mut self) {
        let bob = self.woff * BOAT_BOB;

        self.scene.push_view(ModelId::SKY, Shading::FULLBRIGHT);
        let mut water = Mat4::identity();
        water.scale(1.0, 1.0, self.woff);
        self.scene.push(ModelId::WATER, Shading::FULLBRIGHT, &water, None);

        self.scene
            .push(ModelId::BOAT, Shading::LAMBERT, &placed(0.0, 0.0, bob), None);
        if let Some(fish) = self.last_catches[0] {
            let model = placed(0.0, -0.14, 0.04 + bob);
            self.scene.push(fish.model(), Shading::LAMBERT, &model, None);
        }
        if let Some(fish) = self.last_catches[1] {
            let mut model = placed(0.02, 0.2, 0.05 + bob);
            model.rotate_z(90.0 * DEG2RAD);
            self.scene.push(fish.model(), Shading::LAMBERT, &model, None);
        }

        let mut tux = placed(0.0, 0.0, bob);
        tux.rotate_z(self.rod_yaw);
        self.scene.push(ModelId::TUX, Shading::LAMBERT, &tux, None);

        let mut rod = placed(0.0, 0.0, ROD_PIVOT_Z + bob);
        rod.rotate_z(self.rod_yaw);
        rod.rotate_x(self.rod_pitch);
        self.scene.push(ModelId::ROD, Shading::LAMBERT, &rod, None);
    }

    /// Reels in a hooked fish or waits for a wild bite, then draws whatever
    /// is on the end of the line.
    fn update_float(&mut self) {
        if self.float_pos == Vec3::ZERO {
            return;
        }
        match self.hooked {
            Some(fish) => self.reel(fish),
            None => {
                if self.t > self.next_wild_fish {
                    let fish = roll_wild_fish(&mut self.rng);
                    self.next_wild_fish =
                        self.t + self.rng.next_range(WILD_BITE_DELAY.0, WILD_BITE_DELAY.1);
                    self.hook(fish, HookSource::Wild);
                }
                let model = placed(self.float_pos.x, self.float_pos.y, self.float_pos.z * self.woff);
                let opacity = self.casting.then_some(0.5);
                self.scene
                    .push(ModelId::FLOAT, Shading::LAMBERT, &model, opacity);
            }
        }
    }

    /// Moves the float towards the boat by one of two steps: a fixed speed
    /// back along the cast heading, or a fraction of the remaining distance.
    /// Steps are compared by the square of their component sums and the
    /// proportional one is taken only when it compares larger.
    fn reel(&mut self, fish: FishId) {
        let dt = self.dt;
        self.rod_pitch = REEL_ROD_PITCH;
        let fixed = REEL_SPEED * dt;
        let proportional = (
            -self.float_pos.x * REEL_FRACTION * dt,
            -self.float_pos.y * REEL_FRACTION * dt,
        );
        let along_heading = (-self.heading.0 * fixed, -self.heading.1 * fixed);
        let a = along_heading.0 + along_heading.1;
        let b = proportional.0 + proportional.1;
        let step = if a * a < b * b {
            proportional
        } else {
            along_heading
        };
        self.float_pos.x += step.0;
        self.float_pos.y += step.1;
        self.float_pos.z = self
            .water
            .height_at(self.float_pos.x, self.float_pos.y, self.woff);

        if self.float_pos.length_squared() < LANDING_DISTANCE_SQ {
            self.land(fish);
        } else {
            let mut model = placed(self.float_pos.x, self.float_pos.y, self.float_pos.z * self.woff);
            model.rotate_z(self.float_yaw);
            self.scene.push(fish.model(), Shading::LAMBERT, &model, None);
        }
    }

    fn land(&mut self, fish: FishId) {
        self.trophy = Some(Trophy {
            fish,
            until: self.t + TROPHY_SECS,
        });
        self.float_pos = Vec3::ZERO;
        self.last_catches[self.last_slot] = Some(fish);
        self.last_slot = (self.last_slot + 1) % self.last_catches.len();
        self.log.record(fish);
        self.hooked = None;
        let total = self.log.total();
        let distinct = self.log.distinct();
        info!(%fish, total, distinct, "fish caught: {total} ({distinct}/{SPECIES_COUNT})");
        self.events.push(GameEvent::Caught {
            fish,
            total,
            distinct,
        });
    }

    fn hook(&mut self, fish: FishId, source: HookSource) {
        self.hooked = Some(fish);
        debug!(%fish, ?source, "fish hooked");
        self.events.push(GameEvent::Hooked { fish, source });
    }

    /// Hooks, respawns, animates and draws the jumping shoals.
    fn update_shoals(&mut self) {
        let t = self.t;
        for i in 0..SHOAL_COUNT {
            if self.hooked.is_none()
                && self.shoals[i].is_catchable(self.float_pos.x, self.float_pos.y, t)
            {
                let fish = self.shoals[i].fish();
                self.hook(fish, HookSource::Shoal(i));
            }

            if self.shoals[i].needs_respawn(t) {
                self.shoals[i].respawn(&mut self.rng, t);
                debug!(shoal = i, fish = %self.shoals[i].fish(), "shoal respawned");
            }

            let phase = self.shoals[i].phase(t);
            let Some(z) = phase.height() else {
                continue;
            };
            let (x, y) = (self.shoals[i].x(), self.shoals[i].y());

            let mut splash = placed(x, y, self.water.height_at(x, y, self.woff) * self.woff - SPLASH_SINK);
            splash.rotate_z(t * 0.3);
            self.scene
                .push(ModelId::SPLASH, Shading::LAMBERT, &splash, phase.splash_opacity());

            self.shoals[i].advance_spin(&mut self.rng, self.dt);
            let [rx, ry, rz] = self.shoals[i].spin();
            let mut body = placed(x, y, z);
            body.rotate_x(rx);
            body.rotate_y(ry);
            body.rotate_z(rz);
            self.scene
                .push(self.shoals[i].fish().model(), Shading::LAMBERT, &body, None);
        }
    }

    /// The last catch spins above the boat and fades out over its final second.
    fn draw_trophy(&mut self) {
        let Some(trophy) = self.trophy else {
            return;
        };
        let remaining = trophy.until - self.t;
        if remaining <= 0.0 {
            self.trophy = None;
            return;
        }
        let mut model = placed(0.0, 0.0, TROPHY_Z);
        model.scale_uniform(3.0);
        model.rotate_z(self.t * 2.1);
        let opacity = (remaining < 1.0).then_some(remaining);
        self.scene
            .push(trophy.fish.model(), Shading::LAMBERT, &model, opacity);
    }

    /// Window title: `Tux Fishing` until the first catch, then the catch
    /// count and species ratio.
    pub fn title(&self) -> String {
        if self.log.total() == 0 {
            return BASE_TITLE.to_owned();
        }
        format!(
            "Tux 🐟 {} ({}/{SPECIES_COUNT}) 🐟 Fishing",
            self.log.total(),
            self.log.distinct()
        )
    }

    /// Draw calls of the last update, in order.
    pub fn scene(&self) -> &[DrawCall] {
        self.scene.calls()
    }

    /// Replays the last frame into a renderer.
    pub fn render<P: RenderPort + ?Sized>(&self, port: &mut P) {
        port.set_projection(&self.projection);
        for call in self.scene.calls() {
            port.draw(call);
        }
    }

    /// Timestamp of the last update.
    pub fn time(&self) -> f32 {
        self.t
    }

    /// Seconds between the last two updates.
    pub fn delta(&self) -> f32 {
        self.dt
    }

    /// Wave offset of the last update.
    pub fn wave_offset(&self) -> f32 {
        self.woff
    }

    /// Rod yaw about world Z (radians).
    pub fn rod_yaw(&self) -> f32 {
        self.rod_yaw
    }

    /// Rod pitch about its local X (radians).
    pub fn rod_pitch(&self) -> f32 {
        self.rod_pitch
    }

    /// True while Space is held.
    pub fn is_casting(&self) -> bool {
        self.casting
    }

    /// Float position; all zeros while the line is in.
    pub fn float_position(&self) -> Vec3 {
        self.float_pos
    }

    /// True when the float is in the water.
    pub fn float_is_out(&self) -> bool {
        self.float_pos != Vec3::ZERO
    }

    /// Fish currently on the line.
    pub fn hooked(&self) -> Option<FishId> {
        self.hooked
    }

    /// The two catch display slots next to Tux.
    pub fn last_catches(&self) -> [Option<FishId>; 2] {
        self.last_catches
    }

    /// The trophy display, while it lasts.
    pub fn trophy(&self) -> Option<Trophy> {
        self.trophy
    }

    /// Everything caught since the last reset.
    pub fn catch_log(&self) -> &CatchLog {
        &self.log
    }

    /// The jumping shoals.
    pub fn shoals(&self) -> &[Shoal] {
        &self.shoals
    }

    /// Timestamp after which a wild fish bites the float.
    pub fn next_wild_fish(&self) -> f32 {
        self.next_wild_fish
    }

    /// Orbit camera.
    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    /// Current surface size.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current projection matrix.
    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// Water surface used for height queries.
    pub fn water(&self) -> &WaterSurface {
        &self.water
    }
}

/// Identity with its origin moved to `(x, y, z)`.
fn placed(x: f32, y: f32, z: f32) -> Mat4 {
    let mut m = Mat4::identity();
    m.set_position(Vec3::new(x, y, z));
    m
}
