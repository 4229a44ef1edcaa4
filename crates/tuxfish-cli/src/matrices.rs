// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `tuxfish matrices`: the projection and starting view for a surface size.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tuxfish_math::Mat4;
use tuxfish_sim::{Lens, OrbitCamera, Viewport};

use crate::cli::MatricesArgs;
use crate::prefs;

#[derive(Debug, Serialize)]
struct Matrices {
    width: u32,
    height: u32,
    projection: Mat4,
    view: Mat4,
}

/// Writes the matrices for `args` to `out`.
pub fn matrices(args: &MatricesArgs, config_dir: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let saved = prefs::load(config_dir)?;
    let width = args.width.unwrap_or(saved.render.width);
    let height = args.height.unwrap_or(saved.render.height);
    let viewport = Viewport::new(width, height).context("surface size")?;
    let lens = Lens {
        fov_y_degrees: saved.camera.fov_y_degrees,
        near: saved.camera.near,
        far: saved.camera.far,
    };
    lens.validate()?;
    let camera = OrbitCamera::with_sensitivity(saved.camera.sensitivity)?;

    let report = Matrices {
        width,
        height,
        projection: viewport.projection(&lens),
        view: camera.view(),
    };
    report.projection.dump("projection");
    report.view.dump("view");

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &report).context("encode matrices")?;
        writeln!(out)?;
    } else {
        writeln!(out, "projection ({width}x{height}, aspect {:.4})", viewport.aspect())?;
        writeln!(out, "{}", report.projection)?;
        writeln!(out, "view")?;
        writeln!(out, "{}", report.view)?;
    }
    Ok(())
}
