//! imbox-core - Box-and-whisker plots as primitive draw commands
//!
//! imbox renders statistical box plots (and hybrid box/histogram/
//! density visualizations) for one or more numeric datasets onto a
//! shared 2-D surface. Given raw samples it computes quartiles,
//! fences, outliers, and optional density silhouettes, then emits the
//! geometric primitives - lines, rectangles, markers, filled regions -
//! positioned in data coordinates against an abstract [`Canvas`].
//!
//! # Key Components
//!
//! - **Canvas**: the external drawing surface, reduced to primitive
//!   operations; [`RecordingCanvas`] captures the command stream
//! - **Geometry**: box, whisker, and cap extents per slot
//! - **Composer**: slot assignment, shared axes, and the per-slot
//!   layout pipeline shared by all variants
//! - **Styles**: colors, strokes, and per-variant option bags
//!
//! # Variants
//!
//! Five entry points of increasing sophistication share one layout
//! skeleton: [`simple_box`], [`styled_box`], [`banded_box`],
//! [`hist_box`], and [`composite_box`].
//!
//! One call performs one pass: validate, lay out every slot, draw.
//! Errors are reported before anything is drawn.

pub mod canvas;
mod compose;
pub mod error;
pub mod geometry;
pub mod input;
pub mod plot;
pub mod style;
pub mod synthetic;

pub use canvas::{Canvas, DrawCommand, RecordingCanvas};
pub use error::{ImboxError, ImboxResult};
pub use geometry::{build_box, proportional_half_width, BoxGeometry};
pub use plot::{banded_box, composite_box, hist_box, simple_box, styled_box};
pub use style::{BoxColors, Color, CompositeOptions, LineStyle, Stroke};

// re-export the statistical building blocks
pub use imbox_stats as stats;
