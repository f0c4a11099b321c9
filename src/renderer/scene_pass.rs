//! Full-screen gooey-squares pass.

use bytemuck::Zeroable;
use wgpu::util::DeviceExt;

use crate::gpu::pipeline_helpers::{fragment_uniform, fullscreen_pipeline};
use crate::gpu::render_context::RenderContext;
use crate::params::SceneUniform;

/// Pipeline, uniform buffer and bind group for the scene shader.
pub struct ScenePass {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl ScenePass {
    /// Compile the scene shader for the context's surface format.
    #[must_use]
    pub fn new(context: &RenderContext) -> Self {
        let device = &context.device;
        let shader =
            device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Gooey Shader"),
                source: wgpu::ShaderSource::Wgsl(
                    include_str!("../../assets/shaders/screen/gooey.wgsl")
                        .into(),
                ),
            });

        let buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Scene Uniform Buffer"),
                contents: bytemuck::bytes_of(&SceneUniform::zeroed()),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });

        let bind_group_layout = device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Scene Bind Group Layout"),
                entries: &[fragment_uniform(0)],
            },
        );

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Scene Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });

        let pipeline = fullscreen_pipeline(
            device,
            &shader,
            context.format(),
            &bind_group_layout,
        );

        Self {
            pipeline,
            uniform_buffer: buffer,
            bind_group,
        }
    }

    /// Upload this frame's parameter values.
    pub fn update(&self, queue: &wgpu::Queue, uniform: &SceneUniform) {
        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(uniform),
        );
    }

    /// Record the full-screen draw into `encoder`.
    pub fn draw(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
    ) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Scene Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                depth_slice: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.draw(0..3, 0..1);
    }
}
