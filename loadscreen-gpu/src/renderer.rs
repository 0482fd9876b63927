//! Progress bar render pipeline and offscreen target.

use crate::buffers::{padded_bytes_per_row, BarUniforms};
use crate::device::GpuContext;
use crate::error::GpuError;
use crate::shader::{BAR_SHADER, BAR_VERTEX_COUNT};
use loadscreen_core::{BarConfig, ProgressVisualStateController, SceneConfig};

/// Draws the progress bar into any color target of the configured format.
pub struct BarRenderer {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    uniforms: wgpu::Buffer,
    bar: BarConfig,
    /// Last uploaded uniforms, to skip redundant writes.
    uploaded: Option<BarUniforms>,
}

impl BarRenderer {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat, scene: &SceneConfig) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("bar_shader"),
            source: wgpu::ShaderSource::Wgsl(BAR_SHADER.into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bar_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("bar_pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("bar_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let uniforms = BarUniforms::create_buffer(device);

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bar_bind_group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniforms.as_entire_binding(),
            }],
        });

        Self {
            pipeline,
            bind_group,
            uniforms,
            bar: scene.bar,
            uploaded: None,
        }
    }

    /// Upload the controller's current bar fill.
    pub fn update(&mut self, queue: &wgpu::Queue, controller: &ProgressVisualStateController) {
        self.set_fill(queue, controller.bar_fill_ratio() as f32);
    }

    /// Upload a bar fill pushed from outside the controller.
    pub fn set_fill(&mut self, queue: &wgpu::Queue, fill_ratio: f32) {
        let uniforms = BarUniforms::new(&self.bar, fill_ratio);
        if self.uploaded == Some(uniforms) {
            return;
        }
        queue.write_buffer(&self.uniforms, 0, bytemuck::bytes_of(&uniforms));
        self.uploaded = Some(uniforms);
    }

    /// Clear `view` and draw the bar.
    pub fn render(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        view: &wgpu::TextureView,
        clear: wgpu::Color,
    ) {
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("bar_encoder"),
        });
        self.encode(&mut encoder, view, clear);
        queue.submit(std::iter::once(encoder.finish()));
    }

    fn encode(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        clear: wgpu::Color,
    ) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("bar_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.draw(0..BAR_VERTEX_COUNT, 0..1);
    }
}

/// Texture + readback buffer for rendering without a window.
pub struct OffscreenTarget {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    readback: wgpu::Buffer,
    width: u32,
    height: u32,
}

impl OffscreenTarget {
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("offscreen_target"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let readback = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("offscreen_readback"),
            size: (padded_bytes_per_row(width) * height) as u64,
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            mapped_at_creation: false,
        });

        Self {
            texture,
            view,
            readback,
            width,
            height,
        }
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    /// Copy the texture back as tightly packed RGBA8 rows, top row first.
    pub async fn read_pixels(&self, context: &GpuContext) -> Result<Vec<u8>, GpuError> {
        let padded_row = padded_bytes_per_row(self.width);

        let mut encoder = context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("offscreen_copy_encoder"),
            });
        encoder.copy_texture_to_buffer(
            wgpu::ImageCopyTexture {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            wgpu::ImageCopyBuffer {
                buffer: &self.readback,
                layout: wgpu::ImageDataLayout {
                    offset: 0,
                    bytes_per_row: Some(padded_row),
                    rows_per_image: Some(self.height),
                },
            },
            wgpu::Extent3d {
                width: self.width,
                height: self.height,
                depth_or_array_layers: 1,
            },
        );
        context.queue.submit(std::iter::once(encoder.finish()));

        let slice = self.readback.slice(..);
        let (tx, rx) = futures_channel::oneshot::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = tx.send(result);
        });

        #[cfg(not(target_arch = "wasm32"))]
        let _ = context.device.poll(wgpu::Maintain::Wait);

        rx.await
            .map_err(|_| GpuError::Unavailable("Channel closed".into()))?
            .map_err(GpuError::BufferMap)?;

        let row_bytes = (self.width * 4) as usize;
        let pixels = {
            let mapped = slice.get_mapped_range();
            mapped
                .chunks(padded_row as usize)
                .flat_map(|row| &row[..row_bytes])
                .copied()
                .collect()
        };
        self.readback.unmap();

        Ok(pixels)
    }
}

/// Bar renderer bound to its own device and offscreen target.
pub struct HeadlessBarRenderer {
    context: GpuContext,
    renderer: BarRenderer,
    target: OffscreenTarget,
}

impl HeadlessBarRenderer {
    pub fn new(context: GpuContext, scene: &SceneConfig, width: u32, height: u32) -> Self {
        let renderer = BarRenderer::new(&context.device, OffscreenTarget::FORMAT, scene);
        let target = OffscreenTarget::new(&context.device, width, height);
        Self {
            context,
            renderer,
            target,
        }
    }

    /// Render the controller's state over a transparent background and read
    /// the result back as RGBA8.
    pub async fn render_frame(
        &mut self,
        controller: &ProgressVisualStateController,
    ) -> Result<Vec<u8>, GpuError> {
        self.renderer.update(&self.context.queue, controller);
        self.renderer.render(
            &self.context.device,
            &self.context.queue,
            self.target.view(),
            wgpu::Color::TRANSPARENT,
        );
        self.target.read_pixels(&self.context).await
    }
}
