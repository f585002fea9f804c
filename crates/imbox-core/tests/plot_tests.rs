//! End-to-end scenarios for the five plot variants
//!
//! Drives each entry point against a RecordingCanvas and checks the
//! emitted command stream against hand-computed statistics.

use imbox_core::canvas::{DrawCommand, RecordingCanvas};
use imbox_core::stats::StatsError;
use imbox_core::style::{BoxColors, Color, CompositeOptions};
use imbox_core::{banded_box, composite_box, hist_box, simple_box, styled_box, ImboxError};

fn hlines_at(canvas: &RecordingCanvas, y: f64) -> usize {
    canvas.count_where(|c| matches!(c, DrawCommand::HLine { y: at, .. } if (at - y).abs() < 1e-9))
}

// === simple_box ===

#[test]
fn test_simple_box_one_to_ten_quartile_lines() {
    let mut canvas = RecordingCanvas::new();
    let data = vec![(1..=10).map(f64::from).collect::<Vec<f64>>()];
    simple_box(&mut canvas, &data).unwrap();

    // q1/median/q3 from linear interpolation
    assert_eq!(hlines_at(&canvas, 3.25), 1);
    assert_eq!(hlines_at(&canvas, 5.5), 1);
    assert_eq!(hlines_at(&canvas, 7.75), 1);
    // whiskers clamp to the data extremes, caps drawn there
    assert_eq!(hlines_at(&canvas, 1.0), 1);
    assert_eq!(hlines_at(&canvas, 10.0), 1);
    // no outliers inside the fences [-3.5, 14.5]
    assert_eq!(canvas.marker_count(), 0);
}

#[test]
fn test_simple_box_axis_ranges() {
    let mut canvas = RecordingCanvas::new();
    let data = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
    simple_box(&mut canvas, &data).unwrap();

    let ylim = canvas
        .commands()
        .iter()
        .find_map(|c| match c {
            DrawCommand::YLim { min, max } => Some((*min, *max)),
            _ => None,
        })
        .unwrap();
    // [global_min - 0.1*|global_max|, global_max + 0.1*|global_max|]
    assert!((ylim.0 - 0.4).abs() < 1e-10);
    assert!((ylim.1 - 6.6).abs() < 1e-10);

    let xlim = canvas
        .commands()
        .iter()
        .find_map(|c| match c {
            DrawCommand::XLim { min, max } => Some((*min, *max)),
            _ => None,
        })
        .unwrap();
    assert_eq!(xlim, (0.0, 3.0));
}

#[test]
fn test_simple_box_degenerate_iqr_collapses_whiskers() {
    let mut canvas = RecordingCanvas::new();
    let data = vec![vec![1.0, 1.0, 1.0, 1.0, 100.0]];
    simple_box(&mut canvas, &data).unwrap();

    // 100 is the single outlier
    assert_eq!(canvas.marker_count(), 1);
    let marker_ys: Vec<f64> = canvas
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Marker { y, .. } => Some(*y),
            _ => None,
        })
        .collect();
    assert_eq!(marker_ys, vec![100.0]);

    // whisker_low == whisker_high == q1 == q3 == 1: every horizontal
    // element of the box collapses onto y = 1
    let vlines_with_extent = canvas.count_where(|c| {
        matches!(c, DrawCommand::VLine { y0, y1, .. } if (y1 - y0).abs() > 1e-12)
    });
    assert_eq!(vlines_with_extent, 0);
}

#[test]
fn test_empty_dataset_rejected() {
    let mut canvas = RecordingCanvas::new();
    let err = simple_box(&mut canvas, &[]).unwrap_err();
    assert!(matches!(err, ImboxError::InvalidInput { .. }));
    assert!(canvas.is_empty());
}

#[test]
fn test_nan_rejected_before_drawing() {
    let mut canvas = RecordingCanvas::new();
    let data = vec![vec![1.0, 2.0], vec![3.0, f64::NAN]];
    let err = simple_box(&mut canvas, &data).unwrap_err();
    assert!(matches!(err, ImboxError::InvalidInput { .. }));
    assert!(canvas.is_empty());
}

// === styled_box ===

#[test]
fn test_styled_box_colors_flow_to_primitives() {
    let mut canvas = RecordingCanvas::new();
    let colors = BoxColors::default()
        .with_median(Color::BLUE)
        .with_box_face(Color::SILVER);
    let data = vec![vec![1.0, 2.0, 3.0, 4.0, 5.0]];
    styled_box(&mut canvas, &data, &colors).unwrap();

    let blue_hlines = canvas.count_where(|c| {
        matches!(c, DrawCommand::HLine { stroke, .. } if stroke.color == Color::BLUE)
    });
    assert_eq!(blue_hlines, 1);

    let silver_faces = canvas.count_where(|c| {
        matches!(c, DrawCommand::Rect { fill, .. } if *fill == Color::SILVER)
    });
    assert_eq!(silver_faces, 1);
}

// === banded_box ===

#[test]
fn test_banded_box_band_values_use_midpoint_interpolation() {
    let mut canvas = RecordingCanvas::new();
    let data = vec![(1..=10).map(f64::from).collect::<Vec<f64>>()];
    banded_box(&mut canvas, &data, &BoxColors::default(), true).unwrap();

    // 30th percentile of 1..10 by midpoint bracketing: h = 2.7 -> (3+4)/2
    assert!(hlines_at(&canvas, 3.5) >= 1);
    // 50th: h = 4.5 -> (5+6)/2 = 5.5, coincides with the median line
    assert!(hlines_at(&canvas, 5.5) >= 2);
}

// === hist_box ===

#[test]
fn test_hist_box_bucket_rects_sit_right_of_spine() {
    let mut canvas = RecordingCanvas::new();
    let data = vec![vec![1.0, 1.0, 2.0, 2.0, 2.0, 3.0, 3.0, 4.0, 5.0]];
    hist_box(&mut canvas, &data, 4).unwrap();

    let rects: Vec<(f64, f64)> = canvas
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Rect { x, width, .. } => Some((*x, *width)),
            _ => None,
        })
        .collect();
    assert_eq!(rects.len(), 4);
    for (x, width) in rects {
        assert_eq!(x, 1.0); // bars anchored on the slot spine
        assert!(width >= 0.0 && width <= 0.5 + 1e-12);
    }
}

#[test]
fn test_hist_box_max_value_lands_in_top_bucket() {
    let mut canvas = RecordingCanvas::new();
    // 4 buckets over [0, 4]; counts 1,2,1,2 with the max 4.0 counted
    // in the closed top bucket. A half-open top bucket would drop it
    // and leave the top bar at width zero.
    let data = vec![vec![0.0, 1.0, 1.0, 2.0, 3.0, 4.0]];
    hist_box(&mut canvas, &data, 4).unwrap();

    let bars: Vec<(f64, f64)> = canvas
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Rect { y, width, .. } => Some((*y, *width)),
            _ => None,
        })
        .collect();
    assert_eq!(bars.len(), 4);
    let top_bar_width = bars
        .iter()
        .max_by(|a, b| a.0.partial_cmp(&b.0).unwrap())
        .unwrap()
        .1;
    assert!((top_bar_width - 0.5).abs() < 1e-10);
}

#[test]
fn test_hist_box_flat_histogram_is_reported() {
    let mut canvas = RecordingCanvas::new();
    // one sample per bucket
    let data = vec![vec![0.5, 1.5, 2.5, 3.5]];
    let err = hist_box(&mut canvas, &data, 4).unwrap_err();
    assert!(matches!(
        err,
        ImboxError::Stats(StatsError::DegenerateBinning { .. })
    ));
    assert!(canvas.is_empty());
}

// === composite_box ===

#[test]
fn test_composite_variable_width_ratio_is_exact() {
    let mut canvas = RecordingCanvas::new();
    let small: Vec<f64> = (0..10).map(|i| (i * i) as f64).collect();
    let large: Vec<f64> = (0..90).map(|i| ((i * i) % 83) as f64).collect();
    let opts = CompositeOptions::default()
        .with_variable_width(true)
        .with_trend(false)
        .with_means(false);
    composite_box(&mut canvas, &vec![small, large], &opts).unwrap();

    // box faces reveal the half-widths: 0.5 * 10/100 and 0.5 * 90/100
    let widths: Vec<f64> = canvas
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Rect { width, .. } => Some(*width),
            _ => None,
        })
        .collect();
    assert_eq!(widths.len(), 2);
    assert!((widths[0] - 0.05).abs() < 1e-12);
    assert!((widths[1] - 0.45).abs() < 1e-12);
}

#[test]
fn test_composite_silhouette_stays_right_of_baseline() {
    let mut canvas = RecordingCanvas::new();
    let data = vec![vec![1.0, 1.0, 2.0, 2.0, 2.0, 3.0, 3.0, 4.0, 5.0, 9.0]];
    let opts = CompositeOptions::default().with_bins(5);
    composite_box(&mut canvas, &data, &opts).unwrap();

    let curve = canvas
        .commands()
        .iter()
        .find_map(|c| match c {
            DrawCommand::FillBetween {
                baseline_x, curve, ..
            } => Some((*baseline_x, curve.clone())),
            _ => None,
        })
        .unwrap();
    assert_eq!(curve.0, 1.0);
    assert_eq!(curve.1.len(), 1000);
    for (_, x) in &curve.1 {
        assert!(*x >= 1.0 - 1e-12);
    }
    // the silhouette starts and ends with zero width at the whiskers
    assert!((curve.1.first().unwrap().1 - 1.0).abs() < 1e-9);
    assert!((curve.1.last().unwrap().1 - 1.0).abs() < 1e-9);
}

#[test]
fn test_composite_center_spine_spans_trimmed_range() {
    let mut canvas = RecordingCanvas::new();
    // 9 is trimmed as an outlier, so the spine spans [1, 5]
    let data = vec![vec![1.0, 1.0, 2.0, 2.0, 2.0, 3.0, 3.0, 4.0, 5.0, 9.0]];
    let opts = CompositeOptions::default().with_bins(5);
    composite_box(&mut canvas, &data, &opts).unwrap();

    let spines = canvas.count_where(|c| {
        matches!(c, DrawCommand::VLine { x, y0, y1, .. }
            if (*x - 1.0).abs() < 1e-12
                && (*y0 - 1.0).abs() < 1e-9
                && (*y1 - 5.0).abs() < 1e-9)
    });
    assert_eq!(spines, 1);
}

#[test]
fn test_composite_trend_carries_previous_median() {
    let mut canvas = RecordingCanvas::new();
    let data = vec![
        vec![1.0, 1.0, 2.0, 3.0, 3.0, 5.0],
        vec![4.0, 4.0, 5.0, 6.0, 6.0, 9.0],
        vec![7.0, 7.0, 8.0, 9.0, 9.0, 12.0],
    ];
    let opts = CompositeOptions::default().with_bins(3);
    composite_box(&mut canvas, &data, &opts).unwrap();

    let segments: Vec<(f64, f64, f64, f64)> = canvas
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Segment { x0, y0, x1, y1, .. } => Some((*x0, *y0, *x1, *y1)),
            _ => None,
        })
        .collect();
    assert_eq!(segments.len(), 2);
    // consecutive segments share the joint median
    assert_eq!(segments[0].2, segments[1].0);
    assert!((segments[0].3 - segments[1].1).abs() < 1e-12);
}

#[test]
fn test_composite_labels_emitted_with_rotation() {
    let mut canvas = RecordingCanvas::new();
    let data = vec![
        vec![1.0, 1.0, 2.0, 3.0, 3.0, 5.0],
        vec![4.0, 4.0, 5.0, 6.0, 6.0, 9.0],
    ];
    let opts = CompositeOptions::default()
        .with_bins(3)
        .with_labels(vec!["before".to_string(), "after".to_string()])
        .with_rotation(45.0);
    composite_box(&mut canvas, &data, &opts).unwrap();

    let found = canvas.commands().iter().any(|c| {
        matches!(c, DrawCommand::XTickLabels { labels, rotation }
            if labels.len() == 2 && *rotation == 45.0)
    });
    assert!(found);
}

#[test]
fn test_composite_all_toggles_off_is_minimal() {
    let mut canvas = RecordingCanvas::new();
    let data = vec![vec![1.0, 1.0, 2.0, 3.0, 3.0, 100.0]];
    let opts = CompositeOptions::default()
        .with_bins(3)
        .with_caps(false)
        .with_fliers(false)
        .with_means(false)
        .with_trend(false);
    composite_box(&mut canvas, &data, &opts).unwrap();

    assert_eq!(canvas.marker_count(), 0);
    assert_eq!(canvas.segment_count(), 0);
}
