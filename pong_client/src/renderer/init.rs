use pong_core::RenderError;
use web_sys::HtmlCanvasElement;
use wgpu::*;

/// Device, queue and the canvas surface the court is drawn into
pub struct GpuContext {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub config: SurfaceConfiguration,
}

pub async fn acquire_gpu(canvas: HtmlCanvasElement) -> Result<GpuContext, RenderError> {
    let size = (canvas.width().max(1), canvas.height().max(1));
    let instance = Instance::new(&InstanceDescriptor {
        backends: Backends::BROWSER_WEBGPU,
        ..Default::default()
    });
    let surface = instance
        .create_surface(SurfaceTarget::Canvas(canvas))
        .map_err(|e| RenderError::Surface(format!("{e:?}")))?;

    let adapter = instance
        .request_adapter(&RequestAdapterOptions {
            compatible_surface: Some(&surface),
            ..Default::default()
        })
        .await
        .ok_or(RenderError::NoAdapter)?;

    // Flat-colored triangles need nothing past the downlevel limits
    let (device, queue) = adapter
        .request_device(
            &DeviceDescriptor {
                label: Some("Killer Pong"),
                required_limits: Limits::downlevel_webgl2_defaults(),
                ..Default::default()
            },
            None,
        )
        .await
        .map_err(|e| RenderError::Device(format!("{e:?}")))?;

    let format = surface_format(&surface.get_capabilities(&adapter))?;
    let config = SurfaceConfiguration {
        usage: TextureUsages::RENDER_ATTACHMENT,
        format,
        width: size.0,
        height: size.1,
        present_mode: PresentMode::Fifo,
        alpha_mode: CompositeAlphaMode::Auto,
        view_formats: Vec::new(),
        desired_maximum_frame_latency: 2,
    };
    surface.configure(&device, &config);
    log::info!("court surface {}x{} {format:?}", size.0, size.1);

    Ok(GpuContext {
        device,
        queue,
        surface,
        config,
    })
}

/// Prefer an sRGB format so the palette hex values land as authored
fn surface_format(caps: &SurfaceCapabilities) -> Result<TextureFormat, RenderError> {
    caps.formats
        .iter()
        .copied()
        .find(TextureFormat::is_srgb)
        .or_else(|| caps.formats.first().copied())
        .ok_or_else(|| RenderError::Surface("no surface formats available".into()))
}
