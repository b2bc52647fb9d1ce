// ui.rs - egui window hosting the drawing surface and frame clock

use std::time::Instant;

use eframe::egui;
use egui::{Color32, Painter, Pos2, Rect, Vec2};
use tracing::info;

use conway_canvas::{Driver, DrawList, PixelRect, Poll, Surface, SurfaceSize, Ticker};

/// Window showing one simulation, ticked from egui's repaint cycle.
pub struct CanvasApp {
    driver: Driver<DrawList>,
    ticker: Ticker,
}

impl CanvasApp {
    pub fn new(driver: Driver<DrawList>, ticker: Ticker) -> Self {
        Self { driver, ticker }
    }
}

/// Adapts an egui painter to `Surface`, anchored at `origin`.
struct PainterSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
    size: SurfaceSize,
    clear_color: Color32,
}

impl PainterSurface<'_> {
    fn to_screen(&self, rect: PixelRect) -> Rect {
        Rect::from_min_size(
            self.origin + Vec2::new(rect.x as f32, rect.y as f32),
            Vec2::new(rect.width as f32, rect.height as f32),
        )
    }
}

impl Surface for PainterSurface<'_> {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn clear(&mut self, region: PixelRect) {
        self.painter.rect_filled(self.to_screen(region), 0.0, self.clear_color);
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Color32) {
        self.painter.rect_filled(self.to_screen(rect), 0.0, color);
    }
}

impl eframe::App for CanvasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.ticker.stop();
            info!(generation = self.driver.grid().generation(), "stopped by user");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        if self.ticker.poll(Instant::now()) == Poll::Due {
            self.driver.tick();
            self.ticker.finished(Instant::now());
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let frame = self.driver.surface();
                let size = frame.size();
                let (response, painter) = ui.allocate_painter(
                    Vec2::new(size.width as f32, size.height as f32),
                    egui::Sense::hover(),
                );

                // egui redraws from scratch every frame, so replay the last
                // rendered generation each time.
                let mut target = PainterSurface {
                    painter: &painter,
                    origin: response.rect.min,
                    size,
                    clear_color: Color32::WHITE,
                };
                frame.replay(&mut target);
            });

        // Wait out the fixed delay, then ask for the frame that runs the
        // next tick.
        if let Poll::Wait(delay) = self.ticker.poll(Instant::now()) {
            ctx.request_repaint_after(delay);
        }
    }
}
