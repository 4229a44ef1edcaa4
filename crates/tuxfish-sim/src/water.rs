// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Water surface height lookup and the global wave offset.

use crate::constants::WAVE_FREQUENCY;
use crate::SimError;

/// Squared distance a vertex must beat to be considered at all.
const SEARCH_RADIUS_SQ: f32 = 9999.0;

/// Largest accepted [`WaterSurface::grid`] resolution.
pub const MAX_GRID_DIVISIONS: u32 = 1024;

/// Global wave offset at time `t` (seconds): `sin(t * 0.42)`.
///
/// The water model is z-scaled by it and floating objects bob with it.
pub fn wave_offset(t: f32) -> f32 {
    (t * WAVE_FREQUENCY).sin()
}

/// Water mesh vertices used for nearest-vertex height queries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaterSurface {
    vertices: Vec<[f32; 3]>,
}

impl WaterSurface {
    /// Wraps explicit `(x, y, z)` vertices.
    pub fn new(vertices: Vec<[f32; 3]>) -> Self {
        Self { vertices }
    }

    /// Builds a surface from a flat `x, y, z, x, y, z, ...` vertex array,
    /// the layout mesh exporters emit.
    pub fn from_flat(data: &[f32]) -> Result<Self, SimError> {
        if data.len() % 3 != 0 {
            return Err(SimError::InvalidWater(format!(
                "flat vertex array length {} is not a multiple of 3",
                data.len()
            )));
        }
        let vertices = data
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();
        Ok(Self { vertices })
    }

    /// A square procedural swell for headless runs.
    ///
    /// `(divisions + 1)²` vertices span `[-half_extent, half_extent]` on X
    /// and Y; heights are `amplitude * sin(2.3x) * cos(1.7y)`.
    pub fn grid(half_extent: f32, divisions: u32, amplitude: f32) -> Result<Self, SimError> {
        if !(half_extent.is_finite() && half_extent > 0.0) {
            return Err(SimError::InvalidWater(format!(
                "half extent must be finite and positive, got {half_extent}"
            )));
        }
        if divisions == 0 || divisions > MAX_GRID_DIVISIONS {
            return Err(SimError::InvalidWater(format!(
                "grid divisions must be 1..={MAX_GRID_DIVISIONS}, got {divisions}"
            )));
        }
        if !amplitude.is_finite() {
            return Err(SimError::InvalidWater(format!(
                "amplitude must be finite, got {amplitude}"
            )));
        }
        Ok(Self::build_grid(half_extent, divisions, amplitude))
    }

    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn build_grid(half_extent: f32, divisions: u32, amplitude: f32) -> Self {
        let step = 2.0 * half_extent / divisions as f32;
        let mut vertices = Vec::with_capacity(((divisions + 1) * (divisions + 1)) as usize);
        for j in 0..=divisions {
            let y = -half_extent + step * j as f32;
            for i in 0..=divisions {
                let x = -half_extent + step * i as f32;
                let z = amplitude * (x * 2.3).sin() * (y * 1.7).cos();
                vertices.push([x, y, z]);
            }
        }
        Self { vertices }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True for a surface without vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Height of the vertex nearest to `(x, y)` on the XY plane.
    ///
    /// The first vertex wins ties. When no vertex lies within the search
    /// radius (or the mesh is empty) the wave offset `woff` stands in.
    pub fn height_at(&self, x: f32, y: f32, woff: f32) -> f32 {
        let mut best: Option<f32> = None;
        let mut best_dist = SEARCH_RADIUS_SQ;
        for v in &self.vertices {
            let xm = v[0] - x;
            let ym = v[1] - y;
            let nd = xm * xm + ym * ym;
            if nd < best_dist {
                best = Some(v[2]);
                best_dist = nd;
            }
        }
        best.unwrap_or(woff)
    }
}
