use strum::IntoEnumIterator;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::domain::{
    chart::{ChartGeometry, LineSeries, Point},
    logging::{LogComponent, get_logger},
};

const BACKGROUND: &str = "#0f0c29";
const GRID_COLOR: &str = "#3b0077";
const DATE_AXIS_COLOR: &str = "#00fff7";
const PRICE_AXIS_COLOR: &str = "#39ff14";
const LEGEND_COLOR: &str = "#00fff7";
const AXIS_FONT: &str = "bold 12px monospace";
const LEGEND_FONT: &str = "bold 13px monospace";

const LINE_WIDTH: f64 = 3.0;
const DOT_RADIUS: f64 = 3.0;
const ACTIVE_DOT_RADIUS: f64 = 6.0;
const LEGEND_SWATCH: f64 = 14.0;
const LEGEND_GAP: f64 = 28.0;

/// Canvas 2D renderer for the open/close line chart
#[derive(Debug, Default, Clone, Copy)]
pub struct LineChartRenderer;

impl LineChartRenderer {
    pub fn new() -> Self {
        Self
    }

    fn context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
        canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("Failed to cast to 2D context"))
    }

    /// Draw the whole chart; `active` highlights the hovered bar.
    pub fn render(
        &self,
        canvas: &HtmlCanvasElement,
        geometry: &ChartGeometry,
        active: Option<usize>,
    ) -> Result<(), JsValue> {
        let layout = &geometry.layout;
        canvas.set_width(layout.width as u32);
        canvas.set_height(layout.height as u32);
        let ctx = Self::context(canvas)?;

        ctx.set_fill_style_str(BACKGROUND);
        ctx.fill_rect(0.0, 0.0, layout.width, layout.height);

        self.render_grid(&ctx, geometry)?;
        self.render_axes(&ctx, geometry)?;
        for line in LineSeries::iter() {
            self.render_line(&ctx, geometry.points(line), line.color(), active)?;
        }
        self.render_legend(&ctx, geometry)?;

        get_logger().trace(
            LogComponent::Infrastructure("LineChartRenderer"),
            &format!("Rendered {} bars (active: {:?})", geometry.len(), active),
        );
        Ok(())
    }

    fn render_grid(
        &self,
        ctx: &CanvasRenderingContext2d,
        geometry: &ChartGeometry,
    ) -> Result<(), JsValue> {
        let layout = &geometry.layout;
        let dash = js_sys::Array::of2(&JsValue::from_f64(4.0), &JsValue::from_f64(4.0));
        ctx.set_line_dash(&dash)?;
        ctx.set_stroke_style_str(GRID_COLOR);
        ctx.set_line_width(1.0);

        ctx.begin_path();
        for tick in &geometry.price_ticks {
            ctx.move_to(layout.plot_left(), tick.position);
            ctx.line_to(layout.plot_right(), tick.position);
        }
        for tick in &geometry.date_ticks {
            ctx.move_to(tick.position, layout.plot_top());
            ctx.line_to(tick.position, layout.plot_bottom());
        }
        ctx.stroke();

        ctx.set_line_dash(&js_sys::Array::new())?;
        Ok(())
    }

    fn render_axes(
        &self,
        ctx: &CanvasRenderingContext2d,
        geometry: &ChartGeometry,
    ) -> Result<(), JsValue> {
        let layout = &geometry.layout;
        ctx.set_font(AXIS_FONT);

        ctx.set_fill_style_str(DATE_AXIS_COLOR);
        ctx.set_text_align("center");
        ctx.set_text_baseline("top");
        for tick in &geometry.date_ticks {
            ctx.fill_text(&tick.label, tick.position, layout.plot_bottom() + 8.0)?;
        }

        ctx.set_fill_style_str(PRICE_AXIS_COLOR);
        ctx.set_text_align("right");
        ctx.set_text_baseline("middle");
        for tick in &geometry.price_ticks {
            ctx.fill_text(&tick.label, layout.plot_left() - 8.0, tick.position)?;
        }
        Ok(())
    }

    fn render_line(
        &self,
        ctx: &CanvasRenderingContext2d,
        points: &[Point],
        color: &str,
        active: Option<usize>,
    ) -> Result<(), JsValue> {
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };

        ctx.set_stroke_style_str(color);
        ctx.set_line_width(LINE_WIDTH);
        ctx.set_line_join("round");
        ctx.begin_path();
        ctx.move_to(first.x, first.y);
        for point in rest {
            ctx.line_to(point.x, point.y);
        }
        ctx.stroke();

        ctx.set_line_width(2.0);
        for (i, point) in points.iter().enumerate() {
            let (radius, fill) = if active == Some(i) {
                (ACTIVE_DOT_RADIUS, color)
            } else {
                (DOT_RADIUS, BACKGROUND)
            };
            ctx.begin_path();
            ctx.arc(point.x, point.y, radius, 0.0, std::f64::consts::TAU)?;
            ctx.set_fill_style_str(fill);
            ctx.fill();
            ctx.stroke();
        }
        Ok(())
    }

    /// Legend row centred above the plot
    fn render_legend(
        &self,
        ctx: &CanvasRenderingContext2d,
        geometry: &ChartGeometry,
    ) -> Result<(), JsValue> {
        ctx.set_font(LEGEND_FONT);
        ctx.set_text_align("left");
        ctx.set_text_baseline("middle");

        let entries: Vec<(LineSeries, f64)> = LineSeries::iter()
            .map(|line| Ok((line, ctx.measure_text(line.as_ref())?.width())))
            .collect::<Result<_, JsValue>>()?;
        let total: f64 = entries.iter().map(|(_, w)| LEGEND_SWATCH + 6.0 + w).sum::<f64>()
            + LEGEND_GAP * entries.len().saturating_sub(1) as f64;

        let y = geometry.layout.margin_top / 2.0 - 6.0;
        let mut x = (geometry.layout.width - total) / 2.0;
        for (line, text_width) in entries {
            ctx.set_fill_style_str(line.color());
            ctx.fill_rect(x, y - LEGEND_SWATCH / 2.0, LEGEND_SWATCH, LEGEND_SWATCH);
            ctx.set_fill_style_str(LEGEND_COLOR);
            ctx.fill_text(line.as_ref(), x + LEGEND_SWATCH + 6.0, y)?;
            x += LEGEND_SWATCH + 6.0 + text_width + LEGEND_GAP;
        }
        Ok(())
    }
}
