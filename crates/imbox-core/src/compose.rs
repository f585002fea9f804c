//! Multi-dataset composition
//!
//! One parameterized layout skeleton shared by all five plot
//! variants. Each dataset is assigned a 1-based slot on the
//! categorical axis; per slot the pipeline is quartiles -> fences ->
//! outlier split -> box geometry -> optional density, and only after
//! every slot has laid out successfully are primitives emitted
//! (rendering is atomic per call).
//!
//! The trend line carries the previous slot's median as fold-state
//! through the iteration; there is no state outside one call.

use imbox_stats::{
    build_density, mean, mid_band, split_outliers, DensityProfile, MonotoneSpline,
    QuartileSummary,
};

use crate::canvas::Canvas;
use crate::error::{validation, ImboxResult};
use crate::geometry::{build_box, proportional_half_width, BoxGeometry};
use crate::input;
use crate::style::{Color, Stroke};

/// Outlier marker radius, in display units
pub const OUTLIER_RADIUS: f64 = 0.04;

/// Density display budget to the right of the slot spine
pub const DENSITY_MAX_WIDTH: f64 = 0.5;

/// Resolution of the smoothed silhouette resampling
const SILHOUETTE_SAMPLES: usize = 1000;

/// Fractional y-axis padding. Applied as `0.1 * |global_max|` on both
/// ends; the lower bound's own magnitude does not enter the padding.
const Y_PADDING: f64 = 0.1;

/// Box width policy
#[derive(Clone, Copy, Debug)]
pub(crate) enum WidthMode {
    /// Same half-width for every slot
    Fixed(f64),
    /// `0.5 * n_slot / n_total`, independently per slot
    Proportional,
}

/// Horizontal extent of the box around the slot spine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BoxSpan {
    /// `[slot - w, slot + w]`
    Full,
    /// `[slot - w, slot]`; the right half belongs to the density
    LeftHalf,
}

/// Density rendering on the right of the slot spine
#[derive(Clone, Copy, Debug)]
pub(crate) enum DensityMode {
    /// Discrete histogram bars
    Bars { bins: usize, face: Color, edge: Stroke },
    /// Smoothed silhouette through the bucket midpoints
    Silhouette {
        bins: usize,
        face: Color,
        edge: Color,
        alpha: f32,
    },
}

impl DensityMode {
    fn bins(&self) -> usize {
        match self {
            DensityMode::Bars { bins, .. } => *bins,
            DensityMode::Silhouette { bins, .. } => *bins,
        }
    }
}

/// Outlier marker styling
#[derive(Clone, Copy, Debug)]
pub(crate) struct OutlierStyle {
    pub face: Color,
    pub edge: Color,
    pub edge_width: f64,
}

/// Everything that distinguishes one plot variant from another
#[derive(Clone, Debug)]
pub(crate) struct VariantConfig {
    pub width: WidthMode,
    pub span: BoxSpan,
    /// Caps drawn on the left half only (histogram hybrid)
    pub half_caps: bool,
    pub whisker_multiplier: f64,
    pub show_caps: bool,
    pub show_fliers: bool,
    /// Mean line stroke, when shown
    pub mean: Option<Stroke>,
    /// Trend segment stroke, when shown
    pub trend: Option<Stroke>,
    /// Mid-percentile band lines (banded variant)
    pub show_band: bool,
    pub density: Option<DensityMode>,
    /// Box face fill; the plain variant draws no face
    pub box_face: Option<Color>,
    pub box_edge: Stroke,
    pub whisker: Stroke,
    pub cap: Stroke,
    pub median: Stroke,
    pub outlier: OutlierStyle,
    /// Tick labels and rotation, when overridden
    pub labels: Option<(Vec<String>, f64)>,
}

/// Density layout for one slot, styled and ready to draw
enum SlotDensity {
    Bars {
        profile: DensityProfile,
        face: Color,
        edge: Stroke,
    },
    Curve {
        /// (y, x) points of the resampled silhouette, x >= slot
        points: Vec<(f64, f64)>,
        face: Color,
        edge: Color,
    },
}

/// Fully computed layout for one slot, ready to draw
struct SlotLayout {
    slot: f64,
    geometry: BoxGeometry,
    band: Option<Vec<f64>>,
    mean: Option<f64>,
    outliers: Vec<f64>,
    density: Option<SlotDensity>,
}

/// Lay out and draw all datasets.
pub(crate) fn render<C: Canvas>(
    canvas: &mut C,
    data: &[Vec<f64>],
    cfg: &VariantConfig,
) -> ImboxResult<()> {
    input::validate(data)?;
    if let Some(density) = &cfg.density {
        validation::validate_bins(density.bins())?;
    }
    validation::validate_whisker_multiplier(cfg.whisker_multiplier)?;
    if let Some((labels, _)) = &cfg.labels {
        validation::validate_labels(labels.len(), data.len())?;
    }

    let slots = layout_slots(data, cfg)?;
    draw(canvas, data, &slots, cfg);
    Ok(())
}

/// Layout phase: compute every slot; any failure aborts before the
/// first primitive is emitted.
fn layout_slots(data: &[Vec<f64>], cfg: &VariantConfig) -> ImboxResult<Vec<SlotLayout>> {
    let total_samples: usize = data.iter().map(Vec::len).sum();

    let mut slots = Vec::with_capacity(data.len());
    for (i, dataset) in data.iter().enumerate() {
        let slot = (i + 1) as f64;
        let quartiles = QuartileSummary::from_data(dataset)?;
        let fences = quartiles.fences(cfg.whisker_multiplier);
        let (trimmed, outliers) = split_outliers(dataset, &fences);

        let half_width = match cfg.width {
            WidthMode::Fixed(w) => w,
            WidthMode::Proportional => proportional_half_width(dataset.len(), total_samples),
        };
        let geometry = build_box(&trimmed, &quartiles, &fences, slot, half_width)?;

        let band = match cfg.show_band {
            true => Some(mid_band(&trimmed)?),
            false => None,
        };
        let mean_value = match cfg.mean {
            Some(_) => Some(mean(&trimmed)?),
            None => None,
        };
        let density = match &cfg.density {
            Some(mode) => Some(layout_density(&trimmed, &geometry, slot, mode)?),
            None => None,
        };

        slots.push(SlotLayout {
            slot,
            geometry,
            band,
            mean: mean_value,
            outliers,
            density,
        });
    }
    Ok(slots)
}

/// Bin the trimmed data; for the silhouette, additionally fit the
/// monotone spline through the bucket midpoints plus zero-width
/// endpoints at the whiskers and resample it finely.
fn layout_density(
    trimmed: &[f64],
    geometry: &BoxGeometry,
    slot: f64,
    mode: &DensityMode,
) -> ImboxResult<SlotDensity> {
    let profile = build_density(trimmed, mode.bins(), DENSITY_MAX_WIDTH)?;

    match mode {
        DensityMode::Bars { face, edge, .. } => Ok(SlotDensity::Bars {
            profile,
            face: *face,
            edge: *edge,
        }),
        DensityMode::Silhouette {
            face, edge, alpha, ..
        } => {
            // Knots on the value axis: whisker_low < midpoints < whisker_high
            let mut ys = Vec::with_capacity(profile.buckets.len() + 2);
            let mut xs = Vec::with_capacity(profile.buckets.len() + 2);
            ys.push(geometry.whisker_low);
            xs.push(slot);
            for bucket in &profile.buckets {
                ys.push(bucket.midpoint);
                xs.push(slot + bucket.width);
            }
            ys.push(geometry.whisker_high);
            xs.push(slot);

            let spline = MonotoneSpline::with_flat_ends(&ys, &xs)?;
            let points = spline
                .resample(SILHOUETTE_SAMPLES)
                .into_iter()
                // overshoot guard: never cross left of the baseline
                .map(|(y, x)| (y, x.max(slot)))
                .collect();
            Ok(SlotDensity::Curve {
                points,
                face: face.with_alpha(*alpha),
                edge: *edge,
            })
        }
    }
}

/// Draw phase: axes first, then each slot left to right, threading
/// the previous median through for the trend line.
fn draw<C: Canvas>(canvas: &mut C, data: &[Vec<f64>], slots: &[SlotLayout], cfg: &VariantConfig) {
    let global_min = data
        .iter()
        .flat_map(|row| row.iter().copied())
        .fold(f64::INFINITY, f64::min);
    let global_max = data
        .iter()
        .flat_map(|row| row.iter().copied())
        .fold(f64::NEG_INFINITY, f64::max);

    let pad = Y_PADDING * global_max.abs();
    canvas.set_ylim(global_min - pad, global_max + pad);
    canvas.set_xlim(0.0, data.len() as f64 + 1.0);

    let ticks: Vec<f64> = (1..=data.len()).map(|i| i as f64).collect();
    canvas.set_xticks(&ticks);
    if let Some((labels, rotation)) = &cfg.labels {
        canvas.set_xtick_labels(labels, *rotation);
    }

    let mut prev_median: Option<f64> = None;
    for layout in slots {
        draw_slot(canvas, layout, cfg);

        if let Some(trend) = &cfg.trend {
            if let Some(last) = prev_median {
                canvas.segment(
                    layout.slot - 1.0,
                    last,
                    layout.slot,
                    layout.geometry.median,
                    trend,
                );
            }
            prev_median = Some(layout.geometry.median);
        }
    }
}

fn draw_slot<C: Canvas>(canvas: &mut C, layout: &SlotLayout, cfg: &VariantConfig) {
    let g = &layout.geometry;
    let slot = layout.slot;
    let (x_left, x_right) = match cfg.span {
        BoxSpan::Full => (slot - g.half_width, slot + g.half_width),
        BoxSpan::LeftHalf => (slot - g.half_width, slot),
    };

    // density on the right of the slot spine, behind the box
    if let Some(density) = &layout.density {
        draw_density(canvas, slot, density);
    }

    if let Some(face) = cfg.box_face {
        canvas.rect(x_left, g.q1, x_right - x_left, g.q3 - g.q1, face, None);
    }

    // box edges
    canvas.hline(g.q1, x_left, x_right, &cfg.box_edge);
    canvas.hline(g.q3, x_left, x_right, &cfg.box_edge);
    canvas.vline(x_left, g.q1, g.q3, &cfg.box_edge);
    if cfg.span == BoxSpan::Full {
        canvas.vline(x_right, g.q1, g.q3, &cfg.box_edge);
    }

    canvas.hline(g.median, x_left, x_right, &cfg.median);

    if let Some(band) = &layout.band {
        for &value in band {
            canvas.hline(value, x_left, x_right, &cfg.box_edge);
        }
        // re-draw the median on top of the band, heavier
        let emphasis = Stroke {
            width: 3.0,
            ..cfg.median
        };
        canvas.hline(g.median, x_left, x_right, &emphasis);
    }

    if cfg.show_caps {
        let (cap_left, cap_right) = match cfg.half_caps {
            true => (slot - g.half_width / 2.0, slot),
            false => (slot - g.half_width / 2.0, slot + g.half_width / 2.0),
        };
        canvas.hline(g.whisker_high, cap_left, cap_right, &cfg.cap);
        canvas.hline(g.whisker_low, cap_left, cap_right, &cfg.cap);
    }

    // whiskers
    canvas.vline(slot, g.whisker_low, g.q1, &cfg.whisker);
    canvas.vline(slot, g.q3, g.whisker_high, &cfg.whisker);

    if let Some(mean_value) = layout.mean {
        if let Some(stroke) = &cfg.mean {
            canvas.hline(mean_value, x_left, x_right, stroke);
        }
    }

    if cfg.show_fliers {
        for &value in &layout.outliers {
            canvas.marker(
                slot,
                value,
                OUTLIER_RADIUS,
                cfg.outlier.face,
                cfg.outlier.edge,
                cfg.outlier.edge_width,
            );
        }
    }
}

fn draw_density<C: Canvas>(canvas: &mut C, slot: f64, density: &SlotDensity) {
    match density {
        SlotDensity::Bars { profile, face, edge } => {
            // spine spanning the trimmed value range
            canvas.vline(
                slot,
                profile.value_min,
                profile.value_max,
                &Stroke::solid(edge.color, 1.0),
            );
            for bucket in &profile.buckets {
                canvas.rect(
                    slot,
                    bucket.midpoint - profile.bucket_height / 2.0,
                    bucket.width,
                    profile.bucket_height,
                    *face,
                    Some(*edge),
                );
            }
        }
        SlotDensity::Curve { points, face, edge } => {
            // the resampled curve spans the trimmed value range exactly
            if let (Some(first), Some(last)) = (points.first(), points.last()) {
                canvas.vline(slot, first.0, last.0, &Stroke::solid(*edge, 1.0));
            }
            canvas.fill_between(slot, points, *face, *edge);
        }
    }
}
