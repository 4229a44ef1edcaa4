// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `tuxfish run`: simulate a session frame by frame.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use comfy_table::Table;
use serde::Serialize;
use tracing::info;
use tuxfish_math::Mat4;
use tuxfish_sim::constants::SPECIES_COUNT;
use tuxfish_sim::{Angler, DrawCall, FishId, Game, GameEvent, RenderPort};

use crate::cli::RunArgs;
use crate::prefs;

/// Render port that only counts what it is asked to draw.
#[derive(Debug, Default)]
struct FrameStats {
    frames: u64,
    draws: u64,
    translucent: u64,
    in_frame: u32,
    peak: u32,
}

impl RenderPort for FrameStats {
    fn set_projection(&mut self, _projection: &Mat4) {
        self.frames += 1;
        self.in_frame = 0;
    }

    fn draw(&mut self, call: &DrawCall) {
        self.draws += 1;
        if call.opacity.is_some() {
            self.translucent += 1;
        }
        self.in_frame += 1;
        self.peak = self.peak.max(self.in_frame);
    }
}

#[derive(Debug, Serialize)]
struct SpeciesCount {
    fish: u32,
    count: u32,
}

#[derive(Debug, Serialize)]
struct Summary {
    seed: i32,
    frames: u64,
    seconds: f32,
    msaa: u8,
    draws: u64,
    translucent_draws: u64,
    peak_draws_per_frame: u32,
    hooked: u32,
    caught: u32,
    distinct: usize,
    title: String,
    species: Vec<SpeciesCount>,
}

#[allow(clippy::cast_precision_loss)]
fn frame_time(frame: u32, fps: f32) -> f32 {
    frame as f32 / fps
}

/// Runs the session described by `args` and writes a summary to `out`.
pub fn run(args: &RunArgs, config_dir: Option<&Path>, out: &mut impl Write) -> Result<()> {
    ensure!(
        args.fps.is_finite() && args.fps > 0.0,
        "--fps must be finite and positive, got {}",
        args.fps
    );
    let mut prefs = prefs::load(config_dir)?;
    if let Some(msaa) = args.msaa {
        prefs.render.msaa = msaa;
    }
    prefs.validate().context("invalid command-line override")?;

    let config = prefs::game_config(&prefs, args.seed);
    let seed = config.seed;
    let mut game = Game::new(config).context("start game")?;
    let mut angler = args.autocast.then(Angler::new);
    let mut stats = FrameStats::default();
    let mut landed: BTreeMap<FishId, u32> = BTreeMap::new();
    let mut hooked = 0;

    info!(
        frames = args.frames,
        fps = args.fps,
        seed,
        msaa = prefs.render.msaa,
        autocast = args.autocast,
        "simulating"
    );
    for frame in 1..=args.frames {
        let input = angler.as_mut().map_or_else(Vec::new, |a| a.act(&game));
        for event in game.update(frame_time(frame, args.fps), &input) {
            match event {
                GameEvent::Hooked { .. } => hooked += 1,
                GameEvent::Caught { fish, .. } => *landed.entry(fish).or_default() += 1,
                GameEvent::Reset | GameEvent::FrameRate { .. } => {}
            }
        }
        game.render(&mut stats);
    }

    let summary = Summary {
        seed,
        frames: stats.frames,
        seconds: game.time(),
        msaa: prefs.render.msaa,
        draws: stats.draws,
        translucent_draws: stats.translucent,
        peak_draws_per_frame: stats.peak,
        hooked,
        caught: game.catch_log().total(),
        distinct: game.catch_log().distinct(),
        title: game.title(),
        species: landed
            .into_iter()
            .map(|(fish, count)| SpeciesCount {
                fish: fish.get(),
                count,
            })
            .collect(),
    };
    info!(caught = summary.caught, distinct = summary.distinct, "session finished");

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &summary).context("encode summary")?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", render_tables(&summary))?;
    }
    Ok(())
}

fn render_tables(summary: &Summary) -> String {
    let mut overview = Table::new();
    overview.set_header(vec!["session", ""]);
    overview.add_row(vec!["title".to_owned(), summary.title.clone()]);
    overview.add_row(vec!["seed".to_owned(), summary.seed.to_string()]);
    overview.add_row(vec![
        "frames".to_owned(),
        format!("{} ({:.1} s)", summary.frames, summary.seconds),
    ]);
    overview.add_row(vec!["msaa".to_owned(), summary.msaa.to_string()]);
    overview.add_row(vec![
        "draws".to_owned(),
        format!(
            "{} ({} translucent, peak {}/frame)",
            summary.draws, summary.translucent_draws, summary.peak_draws_per_frame
        ),
    ]);
    overview.add_row(vec!["hooked".to_owned(), summary.hooked.to_string()]);
    overview.add_row(vec![
        "caught".to_owned(),
        format!("{} ({}/{SPECIES_COUNT})", summary.caught, summary.distinct),
    ]);

    if summary.species.is_empty() {
        return overview.to_string();
    }
    let mut species = Table::new();
    species.set_header(vec!["fish", "caught"]);
    for row in &summary.species {
        species.add_row(vec![row.fish.to_string(), row.count.to_string()]);
    }
    format!("{overview}\n{species}")
}
