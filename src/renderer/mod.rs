//! Rendering backend: a single full-screen pass reading [`SceneUniform`].
//!
//! The renderer knows nothing about parameters or animation. It is handed a
//! packed uniform once per frame and draws it.
//!
//! [`SceneUniform`]: crate::params::SceneUniform

mod scene_pass;

pub use scene_pass::ScenePass;

use crate::gpu::render_context::RenderContext;
use crate::params::SceneUniform;

/// Owns the GPU context and the scene pass.
pub struct SceneRenderer {
    context: RenderContext,
    pass: ScenePass,
}

impl SceneRenderer {
    /// Build the scene pass for an initialized context.
    #[must_use]
    pub fn new(context: RenderContext) -> Self {
        let pass = ScenePass::new(&context);
        Self { context, pass }
    }

    /// Reconfigure the surface. Ignores zero-sized dimensions.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
    }

    /// Upload `uniform` and draw one frame.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the swapchain frame cannot be
    /// acquired.
    pub fn render(
        &self,
        uniform: &SceneUniform,
    ) -> Result<(), wgpu::SurfaceError> {
        self.pass.update(&self.context.queue, uniform);

        let mut frame = self.context.begin_frame()?;
        self.pass.draw(&mut frame.encoder, &frame.view);
        self.context.end_frame(frame);
        Ok(())
    }
}
