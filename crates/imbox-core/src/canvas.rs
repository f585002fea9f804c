//! Canvas abstraction and recorded draw commands
//!
//! The plotting surface is an external collaborator: imbox only needs
//! a small set of primitive operations, all in data coordinates. Any
//! backend (SVG writer, GPU renderer, test recorder) implements
//! `Canvas`; `RecordingCanvas` appends every call to a command list
//! and is what the tests and the demo binary inspect.
//!
//! Rendering is atomic per plot call: the composer computes and
//! validates every slot's layout before the first primitive is
//! emitted, so a failed call leaves the canvas untouched.

use serde::{Deserialize, Serialize};

use crate::style::{Color, Stroke};

/// Primitive drawing surface in data coordinates
pub trait Canvas {
    /// Set the x-axis data range
    fn set_xlim(&mut self, min: f64, max: f64);

    /// Set the y-axis data range
    fn set_ylim(&mut self, min: f64, max: f64);

    /// Place x-axis tick marks
    fn set_xticks(&mut self, ticks: &[f64]);

    /// Label x-axis ticks, rotated by `rotation` degrees
    fn set_xtick_labels(&mut self, labels: &[String], rotation: f64);

    /// Horizontal line segment at height `y` from `x0` to `x1`
    fn hline(&mut self, y: f64, x0: f64, x1: f64, stroke: &Stroke);

    /// Vertical line segment at `x` from `y0` to `y1`
    fn vline(&mut self, x: f64, y0: f64, y1: f64, stroke: &Stroke);

    /// Filled rectangle anchored at its lower-left corner
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: Color, edge: Option<Stroke>);

    /// Filled circle marker
    fn marker(&mut self, x: f64, y: f64, radius: f64, fill: Color, edge: Color, edge_width: f64);

    /// Fill the region between a vertical baseline and a curve of
    /// (y, x) points
    fn fill_between(&mut self, baseline_x: f64, curve: &[(f64, f64)], fill: Color, edge: Color);

    /// Straight styled segment between two points
    fn segment(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, stroke: &Stroke);
}

/// One recorded primitive
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    XLim { min: f64, max: f64 },
    YLim { min: f64, max: f64 },
    XTicks { ticks: Vec<f64> },
    XTickLabels { labels: Vec<String>, rotation: f64 },
    HLine { y: f64, x0: f64, x1: f64, stroke: Stroke },
    VLine { x: f64, y0: f64, y1: f64, stroke: Stroke },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Color,
        edge: Option<Stroke>,
    },
    Marker {
        x: f64,
        y: f64,
        radius: f64,
        fill: Color,
        edge: Color,
        edge_width: f64,
    },
    FillBetween {
        baseline_x: f64,
        curve: Vec<(f64, f64)>,
        fill: Color,
        edge: Color,
    },
    Segment {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        stroke: Stroke,
    },
}

/// Canvas that records every primitive for inspection
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded commands in emission order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Count commands matching a predicate
    pub fn count_where(&self, predicate: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| predicate(c)).count()
    }

    /// Number of recorded markers (outlier dots)
    pub fn marker_count(&self) -> usize {
        self.count_where(|c| matches!(c, DrawCommand::Marker { .. }))
    }

    /// Number of recorded trend/path segments
    pub fn segment_count(&self) -> usize {
        self.count_where(|c| matches!(c, DrawCommand::Segment { .. }))
    }
}

impl Canvas for RecordingCanvas {
    fn set_xlim(&mut self, min: f64, max: f64) {
        self.commands.push(DrawCommand::XLim { min, max });
    }

    fn set_ylim(&mut self, min: f64, max: f64) {
        self.commands.push(DrawCommand::YLim { min, max });
    }

    fn set_xticks(&mut self, ticks: &[f64]) {
        self.commands.push(DrawCommand::XTicks {
            ticks: ticks.to_vec(),
        });
    }

    fn set_xtick_labels(&mut self, labels: &[String], rotation: f64) {
        self.commands.push(DrawCommand::XTickLabels {
            labels: labels.to_vec(),
            rotation,
        });
    }

    fn hline(&mut self, y: f64, x0: f64, x1: f64, stroke: &Stroke) {
        self.commands.push(DrawCommand::HLine {
            y,
            x0,
            x1,
            stroke: *stroke,
        });
    }

    fn vline(&mut self, x: f64, y0: f64, y1: f64, stroke: &Stroke) {
        self.commands.push(DrawCommand::VLine {
            x,
            y0,
            y1,
            stroke: *stroke,
        });
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: Color, edge: Option<Stroke>) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            fill,
            edge,
        });
    }

    fn marker(&mut self, x: f64, y: f64, radius: f64, fill: Color, edge: Color, edge_width: f64) {
        self.commands.push(DrawCommand::Marker {
            x,
            y,
            radius,
            fill,
            edge,
            edge_width,
        });
    }

    fn fill_between(&mut self, baseline_x: f64, curve: &[(f64, f64)], fill: Color, edge: Color) {
        self.commands.push(DrawCommand::FillBetween {
            baseline_x,
            curve: curve.to_vec(),
            fill,
            edge,
        });
    }

    fn segment(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, stroke: &Stroke) {
        self.commands.push(DrawCommand::Segment {
            x0,
            y0,
            x1,
            y1,
            stroke: *stroke,
        });
    }
}
