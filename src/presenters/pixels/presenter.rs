use crate::adapters::pixel_format::{PixelFormatError, copy_rgb_to_rgba};
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::presenter_port::InteractiveControllerPresenterPort;
use crate::input::gui::app::ports::presenter::{GuiPresenterPort, PresenterStatus};
use crate::input::gui::errors::GuiError;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::adapter::PixelsAdapter;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::{Pixels, SurfaceTexture, wgpu};
use std::sync::Arc;
use tracing::warn;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

/// Shows rendered frames through a pixels surface with egui drawn on top.
///
/// The frame buffer always has the view's pixel dimensions; pixels scales it
/// to whatever size the window surface currently has.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    adapter: Arc<PixelsAdapter>,
    buffer_width: u32,
    buffer_height: u32,
    surface_width: u32,
    surface_height: u32,
    has_frame: bool,
    status: PresenterStatus,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        buffer_width: u32,
        buffer_height: u32,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> Result<Self, GuiError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(buffer_width, buffer_height, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            buffer_width,
            buffer_height,
            surface_width: size.width,
            surface_height: size.height,
            has_frame: false,
            status: PresenterStatus::default(),
        })
    }

    fn draw_placeholder(&mut self) {
        for pixel in self.pixels.frame_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&[0, 0, 0, 255]);
        }
    }

    /// Copies the newest frame into the pixels buffer if it is newer than the
    /// one on screen and matches the buffer size.
    fn take_latest_frame(&mut self) {
        let Some(event) = self.adapter.take_render_event() else {
            return;
        };

        match event {
            RenderEvent::Frame(frame) => {
                let pixel_rect = frame.pixel_buffer.pixel_rect();

                if frame.generation <= self.status.presented_generation
                    || pixel_rect.width() != self.buffer_width
                    || pixel_rect.height() != self.buffer_height
                {
                    return;
                }

                match self.copy_into_pixels_frame(&frame) {
                    Ok(()) => {
                        self.has_frame = true;
                        self.status = PresenterStatus {
                            presented_generation: frame.generation,
                            render_duration: Some(frame.render_duration),
                            error_message: None,
                        };
                    }
                    Err(err) => {
                        warn!(generation = frame.generation, error = %err, "frame could not be presented");
                        self.status.error_message = Some(err.to_string());
                    }
                }
            }
            RenderEvent::Error(error) => {
                if error.generation >= self.status.presented_generation {
                    self.status.error_message = Some(error.message);
                }
            }
        }
    }

    fn copy_into_pixels_frame(&mut self, frame: &FrameData) -> Result<(), PixelFormatError> {
        copy_rgb_to_rgba(frame.pixel_buffer.buffer(), self.pixels.frame_mut())
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn InteractiveControllerPresenterPort>
    }

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), GuiError> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        self.take_latest_frame();

        if !self.has_frame {
            self.draw_placeholder();
        }

        let surface_size = [self.surface_width, self.surface_height];
        let egui_renderer = &mut self.egui_renderer;

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: surface_size,
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
            }

            egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            // keep the fractal underneath
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                egui_renderer.free_texture(id);
            }

            Ok(())
        })?;

        Ok(())
    }

    fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        self.surface_width = width;
        self.surface_height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;

        Ok(())
    }

    fn window_to_buffer(&self, x: f64, y: f64) -> (f64, f64) {
        let (px, py) = self
            .pixels
            .window_pos_to_pixel((x as f32, y as f32))
            .unwrap_or_else(|outside| self.pixels.clamp_pixel_pos(outside));

        (px as f64, py as f64)
    }

    fn status(&self) -> &PresenterStatus {
        &self.status
    }
}
