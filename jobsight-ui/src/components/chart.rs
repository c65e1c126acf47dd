//! Chart Components
//!
//! Canvas renderers for the dashboard series: pie, vertical and horizontal
//! bars, and the applications-over-time line. Every renderer clears the
//! canvas and draws nothing further when its series is empty.

use chrono::NaiveDate;
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Chart colors for different slices / series
const SERIES_COLORS: [&str; 8] = [
    "#FF9800", // Orange (primary)
    "#4CAF50", // Green
    "#2196F3", // Blue
    "#9C27B0", // Purple
    "#F44336", // Red
    "#00BCD4", // Cyan
    "#FFC107", // Amber
    "#8BC34A", // Light green
];

const BACKGROUND: &str = "#1f2937"; // gray-800
const GRID: &str = "#374151"; // gray-700
const LABEL: &str = "#9ca3af"; // gray-400

/// Pie chart over a (label, count) series
#[component]
pub fn PieChart(#[prop(into)] series: Signal<Vec<(String, u64)>>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let series = series.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_pie(&canvas, &series);
        }
    });

    view! {
        <div>
            <canvas
                node_ref=canvas_ref
                width="400"
                height="300"
                class="w-full rounded-lg"
            />
            <SeriesLegend series=series />
        </div>
    }
}

/// Bar chart over a (label, count) series
#[component]
pub fn BarChart(
    #[prop(into)] series: Signal<Vec<(String, u64)>>,
    /// Horizontal bars with labels on the left
    #[prop(default = false)]
    horizontal: bool,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let series = series.get();
        if let Some(canvas) = canvas_ref.get() {
            if horizontal {
                draw_horizontal_bars(&canvas, &series);
            } else {
                draw_vertical_bars(&canvas, &series);
            }
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="520"
            height="300"
            class="w-full rounded-lg"
        />
    }
}

/// Line chart over a (date, count) series
#[component]
pub fn TimelineChart(#[prop(into)] series: Signal<Vec<(NaiveDate, u64)>>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let series = series.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_timeline(&canvas, &series);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="300"
            class="w-full rounded-lg"
        />
    }
}

/// Legend showing slice colors with counts
#[component]
fn SeriesLegend(#[prop(into)] series: Signal<Vec<(String, u64)>>) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {move || {
                series.get()
                    .into_iter()
                    .enumerate()
                    .map(|(idx, (label, count))| {
                        let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
                        view! {
                            <div class="flex items-center space-x-2">
                                <div
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", color)
                                />
                                <span class="text-sm text-gray-300 capitalize">
                                    {format!("{} ({})", label, count)}
                                </span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

/// Clear the canvas and hand back a 2d context
fn context_for(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    let ctx = canvas
        .get_context("2d")
        .ok()??
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;

    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);

    Some(ctx)
}

fn draw_pie(canvas: &HtmlCanvasElement, series: &[(String, u64)]) {
    let Some(ctx) = context_for(canvas) else {
        return;
    };
    let total: u64 = series.iter().map(|(_, c)| c).sum();
    if total == 0 {
        return;
    }

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = (width.min(height) / 2.0) - 20.0;

    let mut start = -std::f64::consts::FRAC_PI_2;

    for (idx, (_, count)) in series.iter().enumerate() {
        let sweep = (*count as f64 / total as f64) * std::f64::consts::PI * 2.0;
        let color = SERIES_COLORS[idx % SERIES_COLORS.len()];

        ctx.set_fill_style_str(color);
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, start, start + sweep);
        ctx.close_path();
        ctx.fill();

        start += sweep;
    }
}

fn draw_vertical_bars(canvas: &HtmlCanvasElement, series: &[(String, u64)]) {
    let Some(ctx) = context_for(canvas) else {
        return;
    };
    if series.is_empty() {
        return;
    }

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 50.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    let max = series.iter().map(|(_, c)| *c).max().unwrap_or(1).max(1) as f64;

    draw_value_grid(&ctx, width, margin_left, margin_right, margin_top, chart_height, max);

    let slot = chart_width / series.len() as f64;
    let bar_width = slot * 0.7;

    for (idx, (label, count)) in series.iter().enumerate() {
        let x = margin_left + idx as f64 * slot + (slot - bar_width) / 2.0;
        let bar_height = (*count as f64 / max) * chart_height;
        let y = margin_top + chart_height - bar_height;

        ctx.set_fill_style_str(SERIES_COLORS[idx % SERIES_COLORS.len()]);
        ctx.fill_rect(x, y, bar_width, bar_height);

        // Label under the bar
        ctx.set_fill_style_str(LABEL);
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&clip_label(label), x, height - 10.0);
    }
}

fn draw_horizontal_bars(canvas: &HtmlCanvasElement, series: &[(String, u64)]) {
    let Some(ctx) = context_for(canvas) else {
        return;
    };
    if series.is_empty() {
        return;
    }

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 120.0;
    let margin_right = 40.0;
    let margin_top = 20.0;
    let margin_bottom = 20.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    let max = series.iter().map(|(_, c)| *c).max().unwrap_or(1).max(1) as f64;

    let slot = chart_height / series.len() as f64;
    let bar_height = slot * 0.7;

    for (idx, (label, count)) in series.iter().enumerate() {
        let y = margin_top + idx as f64 * slot + (slot - bar_height) / 2.0;
        let bar_width = (*count as f64 / max) * chart_width;

        ctx.set_fill_style_str(SERIES_COLORS[idx % SERIES_COLORS.len()]);
        ctx.fill_rect(margin_left, y, bar_width, bar_height);

        ctx.set_fill_style_str(LABEL);
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&clip_label(label), 5.0, y + bar_height / 2.0 + 4.0);
        let _ = ctx.fill_text(
            &count.to_string(),
            margin_left + bar_width + 6.0,
            y + bar_height / 2.0 + 4.0,
        );
    }
}

fn draw_timeline(canvas: &HtmlCanvasElement, series: &[(NaiveDate, u64)]) {
    let Some(ctx) = context_for(canvas) else {
        return;
    };
    if series.is_empty() {
        return;
    }

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 50.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    let max = series.iter().map(|(_, c)| *c).max().unwrap_or(1).max(1) as f64;

    draw_value_grid(&ctx, width, margin_left, margin_right, margin_top, chart_height, max);

    let first = series[0].0;
    let last = series[series.len() - 1].0;
    let span_days = (last - first).num_days().max(1) as f64;

    let x_for = |date: NaiveDate| {
        margin_left + ((date - first).num_days() as f64 / span_days) * chart_width
    };
    let y_for = |count: u64| margin_top + (1.0 - count as f64 / max) * chart_height;

    // Line
    ctx.set_stroke_style_str(SERIES_COLORS[0]);
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, (date, count)) in series.iter().enumerate() {
        if i == 0 {
            ctx.move_to(x_for(*date), y_for(*count));
        } else {
            ctx.line_to(x_for(*date), y_for(*count));
        }
    }
    ctx.stroke();

    // Points
    ctx.set_fill_style_str(SERIES_COLORS[0]);
    for (date, count) in series {
        ctx.begin_path();
        let _ = ctx.arc(x_for(*date), y_for(*count), 3.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }

    // X-axis date labels
    ctx.set_fill_style_str(LABEL);
    ctx.set_font("12px sans-serif");

    let num_labels = 5.min(series.len().saturating_sub(1)).max(1);
    for i in 0..=num_labels {
        let date = first + chrono::Days::new((span_days * i as f64 / num_labels as f64) as u64);
        let x = margin_left + (i as f64 / num_labels as f64) * chart_width;
        let _ = ctx.fill_text(&date.format("%m/%d").to_string(), x - 15.0, height - 10.0);
    }
}

/// Horizontal grid lines with value labels down the left edge
fn draw_value_grid(
    ctx: &CanvasRenderingContext2d,
    width: f64,
    margin_left: f64,
    margin_right: f64,
    margin_top: f64,
    chart_height: f64,
    max: f64,
) {
    ctx.set_stroke_style_str(GRID);
    ctx.set_line_width(1.0);

    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = max - (i as f64 / 5.0) * max;
        ctx.set_fill_style_str(LABEL);
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }
}

fn clip_label(label: &str) -> String {
    if label.chars().count() > 12 {
        let clipped: String = label.chars().take(11).collect();
        format!("{}…", clipped)
    } else {
        label.to_string()
    }
}
