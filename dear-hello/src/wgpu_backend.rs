//! WGPU rendering backend: owns the surface, device and ImGui renderer, and
//! wires them into a [`RenderingCallbacks`] bundle.
use crate::error::{HelloError, HelloResult};
use crate::rendering_callbacks::RenderingCallbacks;
use dear_imgui_rs as imgui;
use dear_imgui_wgpu as imgui_wgpu;
use pollster::block_on;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use tracing::{debug, info};
use wgpu::SurfaceError;
use winit::window::Window;

pub(crate) struct WgpuState {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_desc: wgpu::SurfaceConfiguration,
    surface: wgpu::Surface<'static>,
    renderer: imgui_wgpu::WgpuRenderer,
    frame: Option<wgpu::SurfaceTexture>,
    clear_color: wgpu::Color,
}

impl WgpuState {
    pub(crate) fn new(
        window: Arc<Window>,
        present_mode: wgpu::PresentMode,
        context: &mut imgui::Context,
    ) -> HelloResult<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let physical_size = window.inner_size();
        let surface = instance
            .create_surface(window)
            .map_err(|e| HelloError::Renderer(format!("Failed to create surface: {e}")))?;

        let adapter = block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .map_err(|e| HelloError::Renderer(format!("No suitable GPU adapter found: {e}")))?;

        let (device, queue) = block_on(adapter.request_device(&wgpu::DeviceDescriptor::default()))
            .map_err(|e| HelloError::Renderer(format!("request_device failed: {e}")))?;

        let caps = surface.get_capabilities(&adapter);
        let preferred_srgb = [
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ];
        let format = preferred_srgb
            .iter()
            .copied()
            .find(|f| caps.formats.contains(f))
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| HelloError::Renderer("Surface reports no texture format".into()))?;

        let surface_desc = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: physical_size.width.max(1),
            height: physical_size.height.max(1),
            present_mode,
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_desc);

        let init_info =
            imgui_wgpu::WgpuInitInfo::new(device.clone(), queue.clone(), surface_desc.format);
        let mut renderer = imgui_wgpu::WgpuRenderer::new(init_info, context)
            .map_err(|e| HelloError::Renderer(format!("Failed to init renderer: {e}")))?;
        renderer.set_gamma_mode(imgui_wgpu::GammaMode::Auto);

        info!(
            "WGPU backend ready: {:?}, {}x{}",
            format, surface_desc.width, surface_desc.height
        );

        Ok(Self {
            device,
            queue,
            surface_desc,
            surface,
            renderer,
            frame: None,
            clear_color: wgpu::Color::BLACK,
        })
    }

    pub(crate) fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.surface_desc.width = new_size.width;
            self.surface_desc.height = new_size.height;
            self.surface.configure(&self.device, &self.surface_desc);
        }
    }

    fn acquire_frame(&mut self) -> HelloResult<()> {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(SurfaceError::Lost) => {
                self.surface.configure(&self.device, &self.surface_desc);
                return Err(HelloError::SurfaceLost);
            }
            Err(SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.surface_desc);
                return Err(HelloError::SurfaceOutdated);
            }
            Err(SurfaceError::Timeout) => return Err(HelloError::SurfaceTimeout),
            Err(e) => return Err(HelloError::from(e)),
        };
        self.frame = Some(frame);
        self.renderer
            .new_frame()
            .map_err(|e| HelloError::Renderer(format!("new_frame failed: {e}")))
    }

    fn render(&mut self, draw_data: &imgui::render::DrawData) -> HelloResult<()> {
        let Some(frame) = self.frame.as_ref() else {
            debug!("render_draw_data_to_3d without an acquired frame, skipping");
            return Ok(());
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("dear-hello encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("dear-hello pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
            self.renderer
                .render_draw_data(draw_data, &mut rpass)
                .map_err(|e| HelloError::Renderer(format!("render_draw_data failed: {e}")))?;
        }
        self.queue.submit(Some(encoder.finish()));
        Ok(())
    }

    fn present(&mut self) {
        if let Some(frame) = self.frame.take() {
            frame.present();
        }
    }

    fn shutdown(&mut self) {
        self.frame = None;
        info!("WGPU backend shut down");
    }
}

pub(crate) fn rendering_callbacks(state: &Rc<RefCell<WgpuState>>) -> RenderingCallbacks {
    let new_frame = state.clone();
    let clear = state.clone();
    let draw = state.clone();
    let swap = state.clone();
    let shutdown = state.clone();
    let fb_size = state.clone();
    RenderingCallbacks {
        new_frame_3d: Box::new(move || new_frame.borrow_mut().acquire_frame()),
        frame_3d_clear_color: Box::new(move |c| {
            clear.borrow_mut().clear_color = wgpu::Color {
                r: c[0] as f64,
                g: c[1] as f64,
                b: c[2] as f64,
                a: c[3] as f64,
            };
            Ok(())
        }),
        render_draw_data_to_3d: Box::new(move |draw_data| draw.borrow_mut().render(draw_data)),
        swap_buffers: Box::new(move || {
            swap.borrow_mut().present();
            Ok(())
        }),
        shutdown_3d: Box::new(move || {
            shutdown.borrow_mut().shutdown();
            Ok(())
        }),
        get_framebuffer_size: Some(Box::new(move || {
            let s = fb_size.borrow();
            [s.surface_desc.width as i32, s.surface_desc.height as i32]
        })),
        // Surface textures are not created with COPY_SRC, so screenshots stay unsupported.
        ..Default::default()
    }
}
