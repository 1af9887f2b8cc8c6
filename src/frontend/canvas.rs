use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};

use crate::scene::render::{Blend, Frame, Layer, Point2};
use crate::scene::{Surface, Viewport};

const MAX_PIXEL_RATIO: f64 = 2.0;

#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("canvas element is not mounted")]
    Missing,
    #[error("2d context is unavailable")]
    ContextUnavailable,
}

/// Paints projected frames onto a 2D canvas sized to the viewport.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    pixel_ratio: f64,
    viewport: Viewport,
}

impl CanvasSurface {
    pub fn attach(canvas: Option<HtmlCanvasElement>) -> Result<Self, SurfaceError> {
        let canvas = canvas.ok_or(SurfaceError::Missing)?;
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|context| context.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(SurfaceError::ContextUnavailable)?;
        let pixel_ratio = window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0)
            .clamp(1.0, MAX_PIXEL_RATIO);

        Ok(Self {
            canvas,
            context,
            pixel_ratio,
            viewport: Viewport::FALLBACK,
        })
    }

    fn paint(&self, frame: &Frame) -> Result<(), JsValue> {
        let ctx = &self.context;
        ctx.set_transform(self.pixel_ratio, 0.0, 0.0, self.pixel_ratio, 0.0, 0.0)?;
        ctx.clear_rect(0.0, 0.0, self.viewport.width, self.viewport.height);

        for layer in frame.layers() {
            match layer {
                Layer::Points {
                    color,
                    alpha,
                    blend,
                    sprites,
                } => {
                    let operation = match blend {
                        Blend::Additive => "lighter",
                        Blend::Normal => "source-over",
                    };
                    ctx.set_global_composite_operation(operation)?;
                    ctx.set_global_alpha(*alpha);
                    ctx.set_fill_style_str(&color.css(1.0));
                    for sprite in sprites {
                        let half = sprite.size / 2.0;
                        ctx.fill_rect(
                            sprite.center.x - half,
                            sprite.center.y - half,
                            sprite.size,
                            sprite.size,
                        );
                    }
                    ctx.set_global_composite_operation("source-over")?;
                    ctx.set_global_alpha(1.0);
                }
                Layer::Lines {
                    color,
                    alpha,
                    segments,
                } => {
                    ctx.set_stroke_style_str(&color.css(*alpha));
                    ctx.set_line_width(1.0);
                    ctx.begin_path();
                    for [from, to] in segments {
                        ctx.move_to(from.x, from.y);
                        ctx.line_to(to.x, to.y);
                    }
                    ctx.stroke();
                }
                Layer::Faces { faces, alpha } => {
                    for face in faces {
                        ctx.set_fill_style_str(&face.fill.css(*alpha));
                        trace_polygon(ctx, &face.corners);
                        ctx.fill();
                    }
                }
            }
        }

        Ok(())
    }
}

fn trace_polygon(ctx: &CanvasRenderingContext2d, corners: &[Point2]) {
    let Some((first, rest)) = corners.split_first() else {
        return;
    };

    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for corner in rest {
        ctx.line_to(corner.x, corner.y);
    }
    ctx.close_path();
}

impl Surface for CanvasSurface {
    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.canvas
            .set_width((viewport.width * self.pixel_ratio).round() as u32);
        self.canvas
            .set_height((viewport.height * self.pixel_ratio).round() as u32);

        let style = self.canvas.style();
        let _ = style.set_property("width", &format!("{}px", viewport.width));
        let _ = style.set_property("height", &format!("{}px", viewport.height));
    }

    fn present(&mut self, frame: &Frame) {
        let _ = self.paint(frame);
    }

    fn release(&mut self) {
        self.context
            .clear_rect(0.0, 0.0, self.viewport.width, self.viewport.height);
        self.canvas.set_width(0);
        self.canvas.set_height(0);
    }
}
