//! Colors, strokes, and per-variant style bags
//!
//! Pure presentation data: flat configuration structs with defaults
//! matching the classic boxplot appearance (black edges, orange
//! median, steelblue outliers) and chainable `with_*` builders.

use serde::{Deserialize, Serialize};

/// A color in RGBA format (0.0 to 1.0)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a new color
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from RGB (alpha = 1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from hex string (e.g., "#FF5733" or "FF5733")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()? as f32 / 255.0;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()? as f32 / 255.0;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()? as f32 / 255.0;

        Some(Self::rgb(r, g, b))
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            (self.r * 255.0) as u8,
            (self.g * 255.0) as u8,
            (self.b * 255.0) as u8
        )
    }

    /// Return this color with a different alpha
    pub fn with_alpha(mut self, a: f32) -> Self {
        self.a = a;
        self
    }

    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
    pub const STEELBLUE: Color = Color {
        r: 70.0 / 255.0,
        g: 130.0 / 255.0,
        b: 180.0 / 255.0,
        a: 1.0,
    };
    pub const ORANGE: Color = Color {
        r: 1.0,
        g: 165.0 / 255.0,
        b: 0.0,
        a: 1.0,
    };
    pub const GREEN: Color = Color {
        r: 0.0,
        g: 128.0 / 255.0,
        b: 0.0,
        a: 1.0,
    };
    pub const BLUE: Color = Color { r: 0.0, g: 0.0, b: 1.0, a: 1.0 };
    pub const SILVER: Color = Color {
        r: 192.0 / 255.0,
        g: 192.0 / 255.0,
        b: 192.0 / 255.0,
        a: 1.0,
    };
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// Line dash pattern
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStyle {
    Solid,
    Dashed,
    DashDot,
    Dotted,
}

impl Default for LineStyle {
    fn default() -> Self {
        LineStyle::Solid
    }
}

/// Color, width, and dash pattern of a line
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    pub style: LineStyle,
}

impl Stroke {
    /// Solid stroke of the given color and width
    pub fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            style: LineStyle::Solid,
        }
    }

    pub fn new(color: Color, width: f64, style: LineStyle) -> Self {
        Self { color, width, style }
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::solid(Color::BLACK, 1.0)
    }
}

/// The seven color overrides of the styled box variants
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxColors {
    /// Face of the box rectangle
    pub box_face: Color,
    /// Face of outlier markers
    pub outlier_face: Color,
    /// Edge of outlier markers
    pub outlier_edge: Color,
    /// Box edges (top, bottom, sides, band lines)
    pub box_edge: Color,
    /// Whisker lines
    pub whisker: Color,
    /// Caps at the whisker ends
    pub cap: Color,
    /// Median line
    pub median: Color,
}

impl Default for BoxColors {
    fn default() -> Self {
        Self {
            box_face: Color::WHITE,
            outlier_face: Color::STEELBLUE,
            outlier_edge: Color::WHITE,
            box_edge: Color::BLACK,
            whisker: Color::BLACK,
            cap: Color::BLACK,
            median: Color::ORANGE,
        }
    }
}

impl BoxColors {
    pub fn with_box_face(mut self, color: Color) -> Self {
        self.box_face = color;
        self
    }

    pub fn with_outlier_face(mut self, color: Color) -> Self {
        self.outlier_face = color;
        self
    }

    pub fn with_outlier_edge(mut self, color: Color) -> Self {
        self.outlier_edge = color;
        self
    }

    pub fn with_box_edge(mut self, color: Color) -> Self {
        self.box_edge = color;
        self
    }

    pub fn with_whisker(mut self, color: Color) -> Self {
        self.whisker = color;
        self
    }

    pub fn with_cap(mut self, color: Color) -> Self {
        self.cap = color;
        self
    }

    pub fn with_median(mut self, color: Color) -> Self {
        self.median = color;
        self
    }
}

/// Full option bag for the composite variant
///
/// Defaults reproduce the classic appearance: Tukey fences, variable
/// box widths, smoothed silhouette, dashed green mean line, dotted
/// blue trend line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompositeOptions {
    /// Histogram bucket count for the silhouette
    pub bins: usize,
    /// Whisker reach multiplier (k in q1 - k*iqr / q3 + k*iqr)
    pub whisker_multiplier: f64,
    /// Per-slot tick labels (must match the dataset count when set)
    pub labels: Option<Vec<String>>,
    /// Tick label rotation in degrees
    pub rotation: f64,
    /// Draw caps at the whisker ends
    pub show_caps: bool,
    /// Draw outlier markers
    pub show_fliers: bool,
    /// Draw the mean line
    pub show_means: bool,
    /// Connect consecutive medians with a trend segment
    pub show_trend: bool,
    /// Scale box widths by relative sample count
    pub variable_width: bool,
    /// Silhouette fill color
    pub silhouette_face: Color,
    /// Silhouette edge color
    pub silhouette_edge: Color,
    /// Silhouette fill opacity
    pub silhouette_alpha: f32,
    /// Outlier marker face
    pub outlier_face: Color,
    /// Outlier marker edge
    pub outlier_edge: Color,
    /// Outlier marker edge width
    pub outlier_edge_width: f64,
    /// Cap stroke
    pub cap: Stroke,
    /// Whisker stroke
    pub whisker: Stroke,
    /// Box face color
    pub box_face: Color,
    /// Box edge stroke
    pub box_edge: Stroke,
    /// Median stroke
    pub median: Stroke,
    /// Mean stroke
    pub mean: Stroke,
    /// Trend stroke
    pub trend: Stroke,
}

impl Default for CompositeOptions {
    fn default() -> Self {
        Self {
            bins: 10,
            whisker_multiplier: 1.5,
            labels: None,
            rotation: 0.0,
            show_caps: true,
            show_fliers: true,
            show_means: true,
            show_trend: true,
            variable_width: true,
            silhouette_face: Color::WHITE,
            silhouette_edge: Color::BLACK,
            silhouette_alpha: 1.0,
            outlier_face: Color::STEELBLUE,
            outlier_edge: Color::WHITE,
            outlier_edge_width: 1.0,
            cap: Stroke::solid(Color::BLACK, 1.0),
            whisker: Stroke::solid(Color::BLACK, 1.0),
            box_face: Color::WHITE,
            box_edge: Stroke::solid(Color::BLACK, 1.0),
            median: Stroke::solid(Color::ORANGE, 1.0),
            mean: Stroke::new(Color::GREEN, 1.0, LineStyle::Dashed),
            trend: Stroke::new(Color::BLUE, 1.5, LineStyle::Dotted),
        }
    }
}

impl CompositeOptions {
    pub fn with_bins(mut self, bins: usize) -> Self {
        self.bins = bins;
        self
    }

    pub fn with_whisker_multiplier(mut self, multiplier: f64) -> Self {
        self.whisker_multiplier = multiplier;
        self
    }

    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = Some(labels);
        self
    }

    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn with_caps(mut self, show: bool) -> Self {
        self.show_caps = show;
        self
    }

    pub fn with_fliers(mut self, show: bool) -> Self {
        self.show_fliers = show;
        self
    }

    pub fn with_means(mut self, show: bool) -> Self {
        self.show_means = show;
        self
    }

    pub fn with_trend(mut self, show: bool) -> Self {
        self.show_trend = show;
        self
    }

    pub fn with_variable_width(mut self, enabled: bool) -> Self {
        self.variable_width = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let color = Color::from_hex("#FF5733").unwrap();
        assert_eq!(color.to_hex(), "#FF5733");
    }

    #[test]
    fn test_hex_without_hash() {
        assert!(Color::from_hex("4682B4").is_some());
        assert!(Color::from_hex("46").is_none());
        assert!(Color::from_hex("not-hex").is_none());
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(Color::STEELBLUE.to_hex(), "#4682B4");
        assert_eq!(Color::ORANGE.to_hex(), "#FFA500");
        assert_eq!(Color::SILVER.to_hex(), "#C0C0C0");
    }

    #[test]
    fn test_box_colors_defaults() {
        let colors = BoxColors::default();
        assert_eq!(colors.median, Color::ORANGE);
        assert_eq!(colors.outlier_face, Color::STEELBLUE);
        assert_eq!(colors.box_edge, Color::BLACK);
    }

    #[test]
    fn test_box_colors_builder() {
        let colors = BoxColors::default()
            .with_median(Color::BLUE)
            .with_box_face(Color::SILVER);
        assert_eq!(colors.median, Color::BLUE);
        assert_eq!(colors.box_face, Color::SILVER);
        assert_eq!(colors.whisker, Color::BLACK);
    }

    #[test]
    fn test_composite_defaults() {
        let opts = CompositeOptions::default();
        assert_eq!(opts.bins, 10);
        assert!((opts.whisker_multiplier - 1.5).abs() < 1e-12);
        assert!(opts.variable_width);
        assert_eq!(opts.mean.style, LineStyle::Dashed);
        assert_eq!(opts.trend.style, LineStyle::Dotted);
        assert!((opts.trend.width - 1.5).abs() < 1e-12);
    }
}
