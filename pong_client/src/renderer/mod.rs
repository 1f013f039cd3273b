pub mod init;
pub mod pipeline;
pub mod shaders;

use pong_core::draw::Vertex;
use pong_core::{Frame, RenderError, Renderer};
use web_sys::HtmlCanvasElement;
use wgpu::*;

/// Uniform block matching `View` in the shader
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct ViewUniform {
    court_to_clip: [[f32; 4]; 4],
}

const INITIAL_VERTEX_CAPACITY: usize = 1024;

/// WebGPU renderer owning every GPU resource the mode draws with
pub struct WgpuRenderer {
    device: Device,
    queue: Queue,
    surface: Surface<'static>,
    surface_config: SurfaceConfiguration,
    pipeline: RenderPipeline,
    view_buffer: Buffer,
    view_bind_group: BindGroup,
    vertex_buffer: Buffer,
    vertex_capacity: usize,
}

impl WgpuRenderer {
    pub async fn new(canvas: HtmlCanvasElement) -> Result<Self, RenderError> {
        let ctx = init::acquire_gpu(canvas).await?;
        let pipes = pipeline::create_pipeline(&ctx.device, ctx.config.format);

        let view_buffer = ctx.device.create_buffer(&BufferDescriptor {
            label: Some("View Uniform Buffer"),
            size: std::mem::size_of::<ViewUniform>() as u64,
            usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let view_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("View Bind Group"),
            layout: &pipes.view_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: view_buffer.as_entire_binding(),
            }],
        });

        let vertex_buffer = create_vertex_buffer(&ctx.device, INITIAL_VERTEX_CAPACITY);

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            pipeline: pipes.pipeline,
            view_buffer,
            view_bind_group,
            vertex_buffer,
            vertex_capacity: INITIAL_VERTEX_CAPACITY,
        })
    }

    /// Reconfigure the surface; zero sizes are ignored
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0
            && height > 0
            && (width != self.surface_config.width || height != self.surface_config.height)
        {
            self.surface_config.width = width;
            self.surface_config.height = height;
            self.surface.configure(&self.device, &self.surface_config);
            log::debug!("surface resized to {width}x{height}");
        }
    }

    fn reserve_vertices(&mut self, count: usize) {
        if count <= self.vertex_capacity {
            return;
        }
        let capacity = count.next_power_of_two();
        self.vertex_buffer.destroy();
        self.vertex_buffer = create_vertex_buffer(&self.device, capacity);
        self.vertex_capacity = capacity;
        log::debug!("vertex buffer grown to {capacity} vertices");
    }

    fn acquire(&mut self) -> Result<SurfaceTexture, RenderError> {
        match self.surface.get_current_texture() {
            Ok(texture) => Ok(texture),
            Err(SurfaceError::Lost) => {
                self.surface.configure(&self.device, &self.surface_config);
                Err(RenderError::SurfaceLost)
            }
            Err(SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.surface_config);
                Err(RenderError::SurfaceOutdated)
            }
            Err(SurfaceError::OutOfMemory) => Err(RenderError::OutOfMemory),
            Err(SurfaceError::Timeout) => Err(RenderError::Timeout),
            Err(e) => Err(RenderError::Other(format!("{e:?}"))),
        }
    }
}

impl Renderer for WgpuRenderer {
    fn submit(&mut self, frame: &Frame) -> Result<(), RenderError> {
        self.resize(frame.drawable_size.x, frame.drawable_size.y);
        self.reserve_vertices(frame.vertices.len());

        let uniform = ViewUniform {
            court_to_clip: frame.court_to_clip.to_cols_array_2d(),
        };
        self.queue
            .write_buffer(&self.view_buffer, 0, bytemuck::bytes_of(&uniform));
        if !frame.vertices.is_empty() {
            self.queue
                .write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(frame.vertices));
        }

        let output = self.acquire()?;
        let view = output
            .texture
            .create_view(&TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let [r, g, b, a] = frame.clear_color;
            let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
                label: Some("Court Pass"),
                color_attachments: &[Some(RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: Operations {
                        load: LoadOp::Clear(Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
                            a: a as f64,
                        }),
                        store: StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if !frame.vertices.is_empty() {
                let byte_len = std::mem::size_of_val(frame.vertices) as u64;
                pass.set_pipeline(&self.pipeline);
                pass.set_bind_group(0, &self.view_bind_group, &[]);
                pass.set_vertex_buffer(0, self.vertex_buffer.slice(0..byte_len));
                pass.draw(0..frame.vertices.len() as u32, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

impl Drop for WgpuRenderer {
    fn drop(&mut self) {
        self.vertex_buffer.destroy();
        self.view_buffer.destroy();
        log::debug!("renderer released");
    }
}

fn create_vertex_buffer(device: &Device, capacity: usize) -> Buffer {
    device.create_buffer(&BufferDescriptor {
        label: Some("Court Vertex Buffer"),
        size: (capacity * std::mem::size_of::<Vertex>()) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
