// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Per-frame draw list and the renderer port.
//!
//! The game never talks to a graphics API. Each update rebuilds an ordered
//! list of [`DrawCall`]s; a renderer adapter implements [`RenderPort`] and
//! replays it. Order matters: the sky and water go first, translucent calls
//! are issued where they fall in the list.

use tuxfish_math::Mat4;

use crate::constants::ModelId;

/// Ambient term for Lambert-shaded models.
pub const LAMBERT_AMBIENT: f32 = 0.4;
/// Saturation term for Lambert-shaded models.
pub const LAMBERT_SATURATE: f32 = 0.5;
/// Lightness for fullbright models.
pub const FULLBRIGHT_LIGHTNESS: f32 = 1.0;

/// Shader program a model is drawn with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shading {
    /// Unlit, vertex colour times `lightness`.
    Fullbright {
        /// Colour multiplier.
        lightness: f32,
    },
    /// Diffuse lighting with ambient and saturation terms.
    Lambert {
        /// Ambient floor.
        ambient: f32,
        /// Colour saturation.
        saturate: f32,
    },
}

impl Shading {
    /// Sky and water.
    pub const FULLBRIGHT: Self = Self::Fullbright {
        lightness: FULLBRIGHT_LIGHTNESS,
    };
    /// Everything else.
    pub const LAMBERT: Self = Self::Lambert {
        ambient: LAMBERT_AMBIENT,
        saturate: LAMBERT_SATURATE,
    };
}

/// One model draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    /// Model to draw.
    pub model: ModelId,
    /// Shader program and uniforms.
    pub shading: Shading,
    /// `model * view`.
    pub model_view: Mat4,
    /// Blend with this opacity; `None` draws opaque.
    pub opacity: Option<f32>,
}

/// Renderer adapter contract.
///
/// Adapters own the window, buffers and shaders. They receive the
/// projection whenever a frame is rendered and then one call per draw, in
/// order.
pub trait RenderPort {
    /// Projection for the draws that follow.
    fn set_projection(&mut self, projection: &Mat4);

    /// Draws one model.
    fn draw(&mut self, call: &DrawCall);
}

/// Accumulates draw calls for one frame.
#[derive(Debug, Default)]
pub(crate) struct SceneBuilder {
    view: Mat4,
    calls: Vec<DrawCall>,
}

impl SceneBuilder {
    /// Starts a frame, reusing the previous frame's allocation.
    pub(crate) fn begin(&mut self, view: Mat4) {
        self.view = view;
        self.calls.clear();
    }

    /// Pushes a draw whose model matrix is `model`.
    pub(crate) fn push(&mut self, model: ModelId, shading: Shading, transform: &Mat4, opacity: Option<f32>) {
        self.calls.push(DrawCall {
            model,
            shading,
            model_view: transform.multiply(&self.view),
            opacity,
        });
    }

    /// Pushes a draw that uses the view matrix as is.
    pub(crate) fn push_view(&mut self, model: ModelId, shading: Shading) {
        self.calls.push(DrawCall {
            model,
            shading,
            model_view: self.view,
            opacity: None,
        });
    }

    pub(crate) fn calls(&self) -> &[DrawCall] {
        &self.calls
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use tuxfish_math::Vec3;

    use super::*;

    #[test]
    fn model_view_is_model_times_view() {
        let mut view = Mat4::identity();
        view.set_position(Vec3::new(0.0, 0.0, -3.0));
        let mut model = Mat4::identity();
        model.set_position(Vec3::new(1.0, 2.0, 0.0));

        let mut builder = SceneBuilder::default();
        builder.begin(view);
        builder.push_view(ModelId::SKY, Shading::FULLBRIGHT);
        builder.push(ModelId::BOAT, Shading::LAMBERT, &model, Some(0.5));

        let calls = builder.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].model_view, view);
        assert_eq!(calls[1].model_view, model.multiply(&view));
        assert_eq!(calls[1].opacity, Some(0.5));

        builder.begin(Mat4::identity());
        assert!(builder.calls().is_empty());
    }
}
