
use itertools::Itertools;
use log::*;
use ndarray::Array2;

use crate::report::{MetricCard, Trend};
use crate::segmenter::Segment;
use crate::utils::RenderProgressBar;

pub const DOC_WIDTH: f64 = 680.0;
const MARGIN: f64 = 20.0;
const GAP: f64 = 16.0;
const CONTENT_WIDTH: f64 = DOC_WIDTH - 2.0 * MARGIN;

const PAGE_BG: &str = "#030712";
const PANEL_BG: &str = "#111827";
const PANEL_BORDER: &str = "#1F2937";
const TEXT_PRIMARY: &str = "#FFFFFF";
const TEXT_MUTED: &str = "#9CA3AF";
const ACCENT: &str = "#8B5CF6";
const TREND_UP: &str = "#22C55E";
const TREND_DOWN: &str = "#EF4444";

const HEADER_HEIGHT: f64 = 56.0;
const METRIC_HEIGHT: f64 = 84.0;
const PIE_HEIGHT: f64 = 280.0;
const ADVANCED_HEIGHT: f64 = 120.0;

const CELL_SIZE: f64 = 20.0;
const CELL_GAP: f64 = 2.0;
const DAY_LABEL_WIDTH: f64 = 40.0;

/// Filled pie wedge: move to the origin, line to the start boundary
/// point, arc to the end boundary point, close. The sweep direction is
/// fixed, the large-arc flag disambiguates the two candidate arcs.
pub fn wedge_path(segment: &Segment, origin: (f64, f64), radius: f64) -> String {
    let (start, end) = segment.boundary_points(origin, radius);
    format!(
        "M {} {} L {:.3} {:.3} A {} {} 0 {} 1 {:.3} {:.3} Z",
        origin.0,
        origin.1,
        start.0,
        start.1,
        radius,
        radius,
        segment.large_arc(),
        end.0,
        end.1
    )
}

pub fn heat_color(intensity: f64) -> String {
    format!("rgba(139, 92, 246, {:.2})", intensity)
}

fn panel_frame(width: f64, height: f64, title: &str) -> String {
    format!(
        r##"<rect width="{}" height="{}" rx="8" fill="{}" stroke="{}"/>
    <text x="16" y="28" font-size="15" font-weight="600" fill="{}">{}</text>"##,
        width, height, PANEL_BG, PANEL_BORDER, TEXT_PRIMARY, title
    )
}

pub fn pie_panel(segments: &[Segment], total: f64, radius: f64) -> String {
    let diameter = radius * 2.0;
    let origin = (radius, radius);

    let wedges = segments
        .iter()
        .filter(|segment| !segment.is_degenerate())
        .map(|segment| {
            format!(
                r##"<path d="{}" fill="{}"/>"##,
                wedge_path(segment, origin, radius),
                segment.color
            )
        })
        .join("\n      ");

    format!(
        r##"{frame}
    <svg x="24" y="56" width="200" height="200" viewBox="0 0 {d} {d}">
      {wedges}
    </svg>
    <text x="124" y="152" text-anchor="middle" font-size="22" font-weight="700" fill="{primary}">{total}</text>
    <text x="124" y="168" text-anchor="middle" font-size="9" fill="{muted}">Total</text>
    <g transform="translate(280 110)">
      {legend}
    </g>"##,
        frame = panel_frame(CONTENT_WIDTH, PIE_HEIGHT, "Pie Chart"),
        d = diameter,
        wedges = wedges,
        total = total,
        primary = TEXT_PRIMARY,
        muted = TEXT_MUTED,
        legend = pie_legend(segments, total),
    )
}

fn pie_legend(segments: &[Segment], total: f64) -> String {
    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            let y = i as f64 * 24.0;
            let percent = if total > 0.0 {
                segment.value / total * 100.0
            } else {
                0.0
            };
            format!(
                r##"<circle cx="6" cy="{cy:.1}" r="5" fill="{color}"/>
      <text x="20" y="{ty:.1}" font-size="12" fill="{muted}">{label}</text>
      <text x="110" y="{ty:.1}" font-size="12" font-weight="500" fill="{primary}">{value} ({percent:.1}%)</text>"##,
                cy = y,
                ty = y + 4.0,
                color = segment.color,
                label = segment.label,
                value = segment.value,
                percent = percent,
                muted = TEXT_MUTED,
                primary = TEXT_PRIMARY,
            )
        })
        .join("\n      ")
}

pub fn heatmap_panel(intensities: &Array2<f64>, day_labels: &[String]) -> String {
    let rows = intensities.nrows();
    let cols = intensities.ncols();
    debug!("drawing heatmap with {} cells", rows * cols);

    let hour_labels = (0..cols)
        .map(|hour| {
            let x = DAY_LABEL_WIDTH + hour as f64 * (CELL_SIZE + CELL_GAP) + CELL_SIZE / 2.0;
            format!(
                r##"<text x="{:.1}" y="52" text-anchor="middle" font-size="9" fill="{}">{}</text>"##,
                x, TEXT_MUTED, hour
            )
        })
        .join("\n    ");

    let progress = RenderProgressBar::new_from_len("debug", rows);
    let mut cells = String::new();
    for (row, intensity_row) in intensities.outer_iter().enumerate() {
        let label = day_labels.get(row).map(|l| l.as_str()).unwrap_or("");
        let y = 60.0 + row as f64 * (CELL_SIZE + CELL_GAP);
        cells.push_str(&format!(
            r##"    <text x="12" y="{:.1}" font-size="10" fill="{}">{}</text>
"##,
            y + 14.0,
            TEXT_MUTED,
            label
        ));
        for (col, intensity) in intensity_row.iter().enumerate() {
            let x = DAY_LABEL_WIDTH + col as f64 * (CELL_SIZE + CELL_GAP);
            cells.push_str(&format!(
                r##"    <rect x="{:.1}" y="{:.1}" width="{}" height="{}" rx="2" fill="{}"/>
"##,
                x,
                y,
                CELL_SIZE,
                CELL_SIZE,
                heat_color(*intensity)
            ));
        }
        progress.inc();
    }
    progress.finish_and_clear();

    let scale_y = 60.0 + rows as f64 * (CELL_SIZE + CELL_GAP) + 18.0;
    format!(
        "{frame}\n    {hour_labels}\n{cells}    {scale}",
        frame = panel_frame(CONTENT_WIDTH, heatmap_panel_height(rows), "Heatmap"),
        hour_labels = hour_labels,
        cells = cells,
        scale = scale_strip(scale_y),
    )
}

pub fn heatmap_panel_height(rows: usize) -> f64 {
    60.0 + rows as f64 * (CELL_SIZE + CELL_GAP) + 44.0
}

fn scale_strip(y: f64) -> String {
    [(0.2, "Low"), (0.5, "Medium"), (1.0, "High")]
        .iter()
        .enumerate()
        .map(|(i, (intensity, label))| {
            let x = DAY_LABEL_WIDTH + i as f64 * 80.0;
            format!(
                r##"<rect x="{x:.1}" y="{y:.1}" width="12" height="12" rx="2" fill="{color}"/>
    <text x="{tx:.1}" y="{ty:.1}" font-size="10" fill="{muted}">{label}</text>"##,
                x = x,
                y = y,
                tx = x + 18.0,
                ty = y + 10.0,
                color = heat_color(*intensity),
                label = label,
                muted = TEXT_MUTED,
            )
        })
        .join("\n    ")
}

pub fn metric_strip(cards: &[MetricCard]) -> String {
    if cards.is_empty() {
        return String::new();
    }
    let card_width = (CONTENT_WIDTH - (cards.len() - 1) as f64 * GAP) / cards.len() as f64;

    cards
        .iter()
        .enumerate()
        .map(|(i, card)| {
            let x = i as f64 * (card_width + GAP);
            let (glyph, color) = match card.trend() {
                Trend::Up => ("▲", TREND_UP),
                Trend::Down => ("▼", TREND_DOWN),
            };
            format!(
                r##"<g transform="translate({x:.1} 0)">
      <rect width="{w:.1}" height="{h}" rx="8" fill="{bg}" stroke="{border}"/>
      <text x="14" y="22" font-size="11" fill="{muted}">{title}</text>
      <text x="14" y="48" font-size="20" font-weight="700" fill="{primary}">{value}</text>
      <text x="14" y="68" font-size="10" font-weight="500" fill="{color}">{glyph} {change:.1}%</text>
      <text x="72" y="68" font-size="10" fill="{muted}">from last period</text>
    </g>"##,
                x = x,
                w = card_width,
                h = METRIC_HEIGHT,
                bg = PANEL_BG,
                border = PANEL_BORDER,
                muted = TEXT_MUTED,
                primary = TEXT_PRIMARY,
                title = card.title,
                value = card.value,
                color = color,
                glyph = glyph,
                change = card.change.abs(),
            )
        })
        .join("\n    ")
}

pub fn advanced_panel(premium: bool) -> String {
    let (headline, detail) = if premium {
        (
            "Advanced Visualizations",
            "AI-powered predictive analytics and custom visualization tools",
        )
    } else {
        (
            "Upgrade to Pro",
            "Get access to advanced visualizations and predictive analytics",
        )
    };

    format!(
        r##"{frame}
    <text x="{cx}" y="64" text-anchor="middle" font-size="16" font-weight="500" fill="{primary}">{headline}</text>
    <text x="{cx}" y="86" text-anchor="middle" font-size="12" fill="{muted}">{detail}</text>"##,
        frame = panel_frame(CONTENT_WIDTH, ADVANCED_HEIGHT, "Advanced"),
        cx = CONTENT_WIDTH / 2.0,
        primary = TEXT_PRIMARY,
        muted = TEXT_MUTED,
        headline = headline,
        detail = detail,
    )
}

fn header(premium: bool) -> String {
    let upgrade = if premium {
        String::new()
    } else {
        format!(
            r##"<g transform="translate({x} 8)">
      <rect width="160" height="32" rx="16" fill="{accent}"/>
      <text x="16" y="21" font-size="12" font-weight="500" fill="{primary}">Upgrade to Pro</text>
      <text x="110" y="21" font-size="9" fill="{primary}" opacity="0.8">SAVE 20%</text>
    </g>"##,
            x = CONTENT_WIDTH - 160.0,
            accent = ACCENT,
            primary = TEXT_PRIMARY,
        )
    };

    format!(
        r##"<text y="24" font-size="22" font-weight="700" fill="{primary}">Analytics Dashboard</text>
    <text y="44" font-size="12" fill="{muted}">Interactive data visualizations and insights</text>
    {upgrade}"##,
        primary = TEXT_PRIMARY,
        muted = TEXT_MUTED,
        upgrade = upgrade,
    )
}

/// Lays the header, metric strip, and the three panels out into one
/// self-contained SVG document.
pub fn document(
    metrics: &[MetricCard],
    segments: &[Segment],
    total: f64,
    intensities: &Array2<f64>,
    day_labels: &[String],
    pie_radius: f64,
    premium: bool,
) -> String {
    let mut body = String::new();
    let mut y = MARGIN;

    body.push_str(&place(MARGIN, y, &header(premium)));
    y += HEADER_HEIGHT + GAP;
    body.push_str(&place(MARGIN, y, &metric_strip(metrics)));
    y += METRIC_HEIGHT + GAP;
    body.push_str(&place(MARGIN, y, &pie_panel(segments, total, pie_radius)));
    y += PIE_HEIGHT + GAP;
    body.push_str(&place(MARGIN, y, &heatmap_panel(intensities, day_labels)));
    y += heatmap_panel_height(intensities.nrows()) + GAP;
    body.push_str(&place(MARGIN, y, &advanced_panel(premium)));
    y += ADVANCED_HEIGHT + MARGIN;

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h:.0}" font-family="sans-serif">
  <rect width="{w}" height="{h:.0}" fill="{bg}"/>
{body}</svg>"##,
        w = DOC_WIDTH,
        h = y,
        bg = PAGE_BG,
        body = body,
    )
}

fn place(x: f64, y: f64, content: &str) -> String {
    format!(
        "  <g transform=\"translate({} {})\">\n    {}\n  </g>\n",
        x, y, content
    )
}
