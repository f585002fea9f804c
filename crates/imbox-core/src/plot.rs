//! Public plot entry points
//!
//! Five variants over one shared layout skeleton, in increasing order
//! of sophistication:
//!
//! - [`simple_box`]: fixed default styling
//! - [`styled_box`]: seven named color overrides
//! - [`banded_box`]: adds mid-percentile band lines
//! - [`hist_box`]: box plus binned histogram bars on the right half
//! - [`composite_box`]: configurable fences, variable widths, smoothed
//!   density silhouette, mean line, inter-slot trend line, labels
//!
//! Every entry point validates its input and options, lays out all
//! slots, and only then draws; on error the canvas is untouched.

use imbox_stats::DEFAULT_WHISKER_MULTIPLIER;

use crate::canvas::Canvas;
use crate::compose::{self, BoxSpan, DensityMode, OutlierStyle, VariantConfig, WidthMode};
use crate::error::ImboxResult;
use crate::geometry::{COMPOSITE_BOX_HALF_WIDTH, FULL_BOX_HALF_WIDTH};
use crate::style::{BoxColors, Color, CompositeOptions, Stroke};

/// Plain box plot: quartiles, whiskers, caps, outlier markers.
pub fn simple_box<C: Canvas>(canvas: &mut C, data: &[Vec<f64>]) -> ImboxResult<()> {
    // unstyled outliers: white face, black edge
    let colors = BoxColors::default()
        .with_outlier_face(Color::WHITE)
        .with_outlier_edge(Color::BLACK);
    let cfg = full_box_config(&colors, false, false);
    compose::render(canvas, data, &cfg)
}

/// Box plot with the seven component colors overridable.
pub fn styled_box<C: Canvas>(
    canvas: &mut C,
    data: &[Vec<f64>],
    colors: &BoxColors,
) -> ImboxResult<()> {
    let cfg = full_box_config(colors, true, false);
    compose::render(canvas, data, &cfg)
}

/// Styled box plot with optional mid-percentile band lines (every
/// fifth percentile from the 30th to the 70th).
pub fn banded_box<C: Canvas>(
    canvas: &mut C,
    data: &[Vec<f64>],
    colors: &BoxColors,
    show_bands: bool,
) -> ImboxResult<()> {
    let cfg = full_box_config(colors, true, show_bands);
    compose::render(canvas, data, &cfg)
}

/// Hybrid plot: box on the left half of each slot, binned histogram
/// bars on the right.
pub fn hist_box<C: Canvas>(canvas: &mut C, data: &[Vec<f64>], bins: usize) -> ImboxResult<()> {
    let cfg = VariantConfig {
        width: WidthMode::Fixed(FULL_BOX_HALF_WIDTH),
        span: BoxSpan::LeftHalf,
        half_caps: true,
        whisker_multiplier: DEFAULT_WHISKER_MULTIPLIER,
        show_caps: true,
        show_fliers: true,
        mean: None,
        trend: None,
        show_band: false,
        density: Some(DensityMode::Bars {
            bins,
            face: Color::SILVER,
            edge: Stroke::solid(Color::BLACK, 1.0),
        }),
        box_face: None,
        box_edge: Stroke::solid(Color::BLACK, 1.0),
        whisker: Stroke::solid(Color::BLACK, 1.0),
        cap: Stroke::solid(Color::BLACK, 1.0),
        median: Stroke::solid(Color::BLACK, 1.0),
        outlier: OutlierStyle {
            face: Color::WHITE,
            edge: Color::BLACK,
            edge_width: 1.0,
        },
        labels: None,
    };
    compose::render(canvas, data, &cfg)
}

/// Richest variant: box on the left half, smoothed density silhouette
/// on the right, with every style and toggle configurable.
pub fn composite_box<C: Canvas>(
    canvas: &mut C,
    data: &[Vec<f64>],
    opts: &CompositeOptions,
) -> ImboxResult<()> {
    let cfg = VariantConfig {
        width: match opts.variable_width {
            true => WidthMode::Proportional,
            false => WidthMode::Fixed(COMPOSITE_BOX_HALF_WIDTH),
        },
        span: BoxSpan::LeftHalf,
        half_caps: false,
        whisker_multiplier: opts.whisker_multiplier,
        show_caps: opts.show_caps,
        show_fliers: opts.show_fliers,
        mean: opts.show_means.then_some(opts.mean),
        trend: opts.show_trend.then_some(opts.trend),
        show_band: false,
        density: Some(DensityMode::Silhouette {
            bins: opts.bins,
            face: opts.silhouette_face,
            edge: opts.silhouette_edge,
            alpha: opts.silhouette_alpha,
        }),
        box_face: Some(opts.box_face),
        box_edge: opts.box_edge,
        whisker: opts.whisker,
        cap: opts.cap,
        median: opts.median,
        outlier: OutlierStyle {
            face: opts.outlier_face,
            edge: opts.outlier_edge,
            edge_width: opts.outlier_edge_width,
        },
        labels: opts
            .labels
            .as_ref()
            .map(|labels| (labels.clone(), opts.rotation)),
    };
    compose::render(canvas, data, &cfg)
}

/// Shared configuration of the three full-width variants.
fn full_box_config(colors: &BoxColors, fill_face: bool, show_band: bool) -> VariantConfig {
    VariantConfig {
        width: WidthMode::Fixed(FULL_BOX_HALF_WIDTH),
        span: BoxSpan::Full,
        half_caps: false,
        whisker_multiplier: DEFAULT_WHISKER_MULTIPLIER,
        show_caps: true,
        show_fliers: true,
        mean: None,
        trend: None,
        show_band,
        density: None,
        box_face: fill_face.then_some(colors.box_face),
        box_edge: Stroke::solid(colors.box_edge, 1.0),
        whisker: Stroke::solid(colors.whisker, 1.0),
        cap: Stroke::solid(colors.cap, 1.0),
        median: Stroke::solid(colors.median, 1.0),
        outlier: OutlierStyle {
            face: colors.outlier_face,
            edge: colors.outlier_edge,
            edge_width: 1.0,
        },
        labels: None,
    }
}
