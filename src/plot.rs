//! Visualization utilities for generating charts

use crate::bps::Bps;
use crate::sampler::CurvePoint;
use anyhow::{anyhow, Result};
use plotters::prelude::*;

/// Basis points rendered as a percentage string, e.g. `58.42%`.
pub fn format_pct(v: Bps) -> String {
    format!("{:.2}%", v.value() / 100.0)
}

/// USD amount with a K/M/B suffix, e.g. `$1.5M`.
pub fn format_usd(v: f64) -> String {
    let a = v.abs();
    let (scaled, suffix) = if a >= 1e9 {
        (v / 1e9, "B")
    } else if a >= 1e6 {
        (v / 1e6, "M")
    } else if a >= 1e3 {
        (v / 1e3, "K")
    } else {
        (v, "")
    };
    let s = format!("{:.1}", scaled);
    let s = s.strip_suffix(".0").unwrap_or(&s);
    format!("${}{}", s, suffix)
}

fn series(points: &[CurvePoint]) -> [(&'static str, Vec<(f64, f64)>, RGBColor); 3] {
    let pct = |f: fn(&CurvePoint) -> Bps| -> Vec<(f64, f64)> {
        points.iter().map(|p| (p.tvl, f(p).value() / 100.0)).collect()
    };
    [
        ("Low Trigger (%)", pct(|p| p.low), RGBColor(237, 108, 2)),
        ("Target Ratio (%)", pct(|p| p.target), RGBColor(25, 118, 210)),
        ("High Trigger (%)", pct(|p| p.high), RGBColor(237, 108, 2)),
    ]
}

/// Upper bound of the ratio axis, in percent. Fixed so charts for different
/// parameter sets compare directly; the band above it is clipped.
pub const Y_AXIS_MAX_PCT: f64 = 50.0;

/// TVL extent of the sampled curve and the percent range of the ratio axis.
pub fn axis_bounds(points: &[CurvePoint]) -> Result<((f64, f64), (f64, f64))> {
    match (points.first(), points.last()) {
        (Some(a), Some(b)) if points.len() >= 2 => Ok(((a.tvl, b.tvl), (0.0, Y_AXIS_MAX_PCT))),
        _ => Err(anyhow!("need at least 2 samples to plot (got {})", points.len())),
    }
}

/// Draws low / target / high curves against TVL, with an optional vertical
/// marker at the simulated TVL. Uses a log x-axis when `logarithmic`.
pub fn plot_ratio_vs_tvl(
    points: &[CurvePoint],
    logarithmic: bool,
    marker_tvl: Option<f64>,
    out_path: &str,
) -> Result<()> {
    let ((first, last), (y_min, y_max)) = axis_bounds(points)?;
    let root = BitMapBackend::new(out_path, (1200, 700)).into_drawing_area();
    root.fill(&WHITE)?;
    let marker = marker_tvl.filter(|t| *t >= first && *t <= last);
    let marker_color = RGBColor(46, 125, 50);

    if logarithmic {
        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .caption("Liquidity Buffer vs Vault TVL", ("sans-serif", 28))
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d((first..last).log_scale(), y_min..y_max)?;
        chart
            .configure_mesh()
            .x_desc("Vault TVL (USD)")
            .y_desc("Liquidity Ratio (%)")
            .x_label_formatter(&|v: &f64| format_usd(*v))
            .draw()?;
        for (label, data, color) in series(points) {
            chart
                .draw_series(LineSeries::new(data, color))?
                .label(label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }
        if let Some(t) = marker {
            chart.draw_series(LineSeries::new(vec![(t, y_min), (t, y_max)], marker_color))?;
        }
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    } else {
        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .caption("Liquidity Buffer vs Vault TVL", ("sans-serif", 28))
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(first..last, y_min..y_max)?;
        chart
            .configure_mesh()
            .x_desc("Vault TVL (USD)")
            .y_desc("Liquidity Ratio (%)")
            .x_label_formatter(&|v: &f64| format_usd(*v))
            .draw()?;
        for (label, data, color) in series(points) {
            chart
                .draw_series(LineSeries::new(data, color))?
                .label(label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }
        if let Some(t) = marker {
            chart.draw_series(LineSeries::new(vec![(t, y_min), (t, y_max)], marker_color))?;
        }
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }
    root.present()?;
    Ok(())
}
