//! Bar rendering onto a browser canvas.

use crate::device::request_device;
use crate::error::GpuError;
use crate::renderer::BarRenderer;
use loadscreen_core::SceneConfig;
use web_sys::HtmlCanvasElement;

/// A configured canvas surface plus the bar pipeline drawing into it.
pub struct CanvasSurface {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    renderer: BarRenderer,
}

impl CanvasSurface {
    pub async fn new(canvas: HtmlCanvasElement, scene: &SceneConfig) -> Result<Self, GpuError> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(GpuError::NoAdapter)?;

        log::info!("GPU adapter: {:?}", adapter.get_info());

        let (device, queue) = request_device(&adapter).await?;

        let mut config = surface
            .get_default_config(&adapter, width, height)
            .ok_or_else(|| GpuError::Unavailable("canvas surface not supported".into()))?;
        let caps = surface.get_capabilities(&adapter);
        if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            config.alpha_mode = wgpu::CompositeAlphaMode::PreMultiplied;
        }
        surface.configure(&device, &config);

        log::info!(
            "Canvas surface configured: {}x{} {:?}",
            width,
            height,
            config.format
        );

        let renderer = BarRenderer::new(&device, config.format, scene);

        Ok(Self {
            surface,
            device,
            queue,
            renderer,
        })
    }

    /// Draw the bar at `fill_ratio` and present.
    pub fn draw(&mut self, fill_ratio: f32) -> Result<(), GpuError> {
        self.renderer.set_fill(&self.queue, fill_ratio);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.renderer
            .render(&self.device, &self.queue, &view, wgpu::Color::TRANSPARENT);
        frame.present();

        Ok(())
    }
}
