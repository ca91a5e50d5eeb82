//! Canvas-backed dashboard charts.
//!
//! Each chart redraws from the shared [`ChartSet`] whenever the dashboard
//! state changes; there is no animation.
//!
//! [`ChartSet`]: crate::dashboard::charts::ChartSet

use leptos::prelude::*;

use crate::dashboard::charts::ChartId;
use crate::state::ViewSession;

const CANVAS_WIDTH: u32 = 320;
const CANVAS_HEIGHT: u32 = 200;

#[component]
pub fn ChartCanvas(id: ChartId) -> impl IntoView {
    let dashboard = expect_context::<ViewSession>().dashboard;
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    Effect::new(move || {
        let chart = dashboard.with(|d| d.charts.as_ref().and_then(|set| set.get(id)).cloned());

        #[cfg(feature = "csr")]
        {
            if let (Some(canvas), Some(chart)) = (canvas_ref.get(), chart) {
                if let Err(err) = painter::paint(&canvas, &chart) {
                    log::warn!("chart {}: draw failed: {err:?}", id.title());
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            log::trace!("chart {} has data: {}", id.title(), chart.is_some());
        }
    });

    view! {
        <figure class="chart-card">
            <figcaption class="chart-title">{id.title()}</figcaption>
            <canvas node_ref=canvas_ref width=CANVAS_WIDTH height=CANVAS_HEIGHT></canvas>
        </figure>
    }
}

#[cfg(feature = "csr")]
mod painter {
    use std::f64::consts::TAU;

    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use crate::dashboard::charts::{
        Chart, ChartKind, ChartStyle, GAUGE_TRACK, GRID_COLOR, RADAR_MAX, TICK_COLOR,
    };
    use crate::dashboard::geometry::{gauge_arcs, line_points, radar_points};

    const PAD: f64 = 24.0;
    const POINT_RADIUS: f64 = 3.0;

    pub fn paint(canvas: &HtmlCanvasElement, chart: &Chart) -> Result<(), JsValue> {
        let Some(ctx) = canvas.get_context("2d")? else {
            return Ok(());
        };
        let ctx: CanvasRenderingContext2d = ctx.dyn_into()?;
        let width = f64::from(canvas.width());
        let height = f64::from(canvas.height());
        ctx.clear_rect(0.0, 0.0, width, height);

        let style = chart.id.style();
        match chart.id.kind() {
            ChartKind::Gauge => paint_gauge(&ctx, &chart.data, style, width, height),
            ChartKind::Radar => paint_radar(&ctx, chart, style, width, height),
            ChartKind::Line => paint_line(&ctx, chart, style, width, height),
        }
    }

    /// Doughnut with a 75% cutout.
    fn paint_gauge(
        ctx: &CanvasRenderingContext2d,
        data: &[f64],
        style: ChartStyle,
        width: f64,
        height: f64,
    ) -> Result<(), JsValue> {
        let radius = (width.min(height) / 2.0 - PAD / 2.0).max(1.0);
        let ring = radius * 0.25;
        let (cx, cy) = (width / 2.0, height / 2.0);
        ctx.set_line_width(ring);
        for (i, (start, end)) in gauge_arcs(data).into_iter().enumerate() {
            ctx.set_stroke_style_str(if i == 0 { style.stroke } else { GAUGE_TRACK });
            ctx.begin_path();
            ctx.arc(cx, cy, radius - ring / 2.0, start, end)?;
            ctx.stroke();
        }
        if let Some(value) = data.first() {
            ctx.set_fill_style_str(TICK_COLOR);
            ctx.set_font("16px sans-serif");
            ctx.set_text_align("center");
            ctx.set_text_baseline("middle");
            ctx.fill_text(&crate::util::format::percent(*value), cx, cy)?;
        }
        Ok(())
    }

    fn paint_radar(
        ctx: &CanvasRenderingContext2d,
        chart: &Chart,
        style: ChartStyle,
        width: f64,
        height: f64,
    ) -> Result<(), JsValue> {
        let center = (width / 2.0, height / 2.0);
        let radius = (width.min(height) / 2.0 - PAD).max(1.0);
        let axes = chart.labels.len().max(chart.data.len());

        ctx.set_line_width(1.0);
        ctx.set_stroke_style_str(GRID_COLOR);
        for ring in 1..=4 {
            let level = RADAR_MAX * f64::from(ring) / 4.0;
            trace_polygon(ctx, &radar_points(&vec![level; axes], RADAR_MAX, center, radius));
            ctx.stroke();
        }

        let outer = radar_points(&vec![RADAR_MAX; axes], RADAR_MAX, center, radius);
        ctx.set_fill_style_str(TICK_COLOR);
        ctx.set_font("11px sans-serif");
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        for (label, (x, y)) in chart.labels.iter().zip(&outer) {
            let lx = center.0 + (x - center.0) * 1.12;
            let ly = center.1 + (y - center.1) * 1.12;
            ctx.fill_text(label, lx, ly)?;
        }

        let points = radar_points(&chart.data, RADAR_MAX, center, radius);
        trace_polygon(ctx, &points);
        ctx.set_fill_style_str(style.fill);
        ctx.fill();
        ctx.set_line_width(2.0);
        ctx.set_stroke_style_str(style.stroke);
        ctx.stroke();
        paint_points(ctx, &points, style.stroke)
    }

    fn paint_line(
        ctx: &CanvasRenderingContext2d,
        chart: &Chart,
        style: ChartStyle,
        width: f64,
        height: f64,
    ) -> Result<(), JsValue> {
        ctx.set_line_width(1.0);
        ctx.set_stroke_style_str(GRID_COLOR);
        ctx.set_fill_style_str(TICK_COLOR);
        ctx.set_font("10px sans-serif");
        ctx.set_text_align("right");
        ctx.set_text_baseline("middle");
        for tick in [0.0, 25.0, 50.0, 75.0, 100.0] {
            let y = PAD + (height - 2.0 * PAD) * (1.0 - tick / 100.0);
            ctx.begin_path();
            ctx.move_to(PAD, y);
            ctx.line_to(width - PAD, y);
            ctx.stroke();
            ctx.fill_text(&crate::util::format::format_number(tick), PAD - 4.0, y)?;
        }

        let points = line_points(&chart.data, width, height, PAD);
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return Ok(());
        };
        let baseline = height - PAD;

        ctx.begin_path();
        ctx.move_to(first.0, baseline);
        for (x, y) in &points {
            ctx.line_to(*x, *y);
        }
        ctx.line_to(last.0, baseline);
        ctx.close_path();
        ctx.set_fill_style_str(style.fill);
        ctx.fill();

        ctx.begin_path();
        ctx.move_to(first.0, first.1);
        for (x, y) in points.iter().skip(1) {
            ctx.line_to(*x, *y);
        }
        ctx.set_line_width(2.0);
        ctx.set_stroke_style_str(style.stroke);
        ctx.stroke();
        paint_points(ctx, &points, style.stroke)
    }

    fn trace_polygon(ctx: &CanvasRenderingContext2d, points: &[(f64, f64)]) {
        ctx.begin_path();
        for (i, (x, y)) in points.iter().enumerate() {
            if i == 0 {
                ctx.move_to(*x, *y);
            } else {
                ctx.line_to(*x, *y);
            }
        }
        ctx.close_path();
    }

    fn paint_points(ctx: &CanvasRenderingContext2d, points: &[(f64, f64)], color: &str) -> Result<(), JsValue> {
        ctx.set_fill_style_str(color);
        for (x, y) in points {
            ctx.begin_path();
            ctx.arc(*x, *y, POINT_RADIUS, 0.0, TAU)?;
            ctx.fill();
        }
        Ok(())
    }
}
