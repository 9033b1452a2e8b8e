use std::f64::consts::TAU;

use plinko_engine::FrameSnapshot;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Paints a `FrameSnapshot` onto a 2D canvas context.
pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasPainter {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context available"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    pub fn paint(&self, snapshot: &FrameSnapshot) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(&css_color(snapshot.background));
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);

        for label in &snapshot.labels {
            self.ctx.set_fill_style_str(&css_color(label.color));
            self.ctx.set_font(&format!("bold {}px sans-serif", label.size));
            self.ctx.set_text_align("center");
            self.ctx.set_text_baseline("middle");
            self.ctx
                .fill_text(&label.text, label.pos.x as f64, label.pos.y as f64)?;
        }

        for circle in &snapshot.circles {
            self.ctx.set_fill_style_str(&css_color(circle.color));
            self.ctx.begin_path();
            self.ctx.arc(
                circle.pos.x as f64,
                circle.pos.y as f64,
                circle.radius as f64,
                0.0,
                TAU,
            )?;
            self.ctx.fill();

            if let Some(text) = &circle.label {
                let size = (circle.radius / 2.0).min(20.0);
                self.ctx.set_fill_style_str("rgb(0,0,0)");
                self.ctx.set_font(&format!("bold {size}px sans-serif"));
                self.ctx.set_text_align("center");
                self.ctx.set_text_baseline("middle");
                self.ctx
                    .fill_text(text, circle.pos.x as f64, circle.pos.y as f64)?;
            }
        }

        // walls last, covering particles settled against them
        for rect in &snapshot.rects {
            self.ctx.set_fill_style_str(&css_color(rect.color));
            self.ctx.fill_rect(
                (rect.center.x - rect.size.x / 2.0) as f64,
                (rect.center.y - rect.size.y / 2.0) as f64,
                rect.size.x as f64,
                rect.size.y as f64,
            );
        }

        Ok(())
    }
}

fn css_color([r, g, b]: [u8; 3]) -> String {
    format!("rgb({r},{g},{b})")
}
