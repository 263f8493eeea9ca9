//! Conversion configuration

use crate::error::{Error, Result};
use crate::geometry::ARC_SEGMENTS;

/// Default stroke width for path segments
pub const DEFAULT_LINE_WIDTH: f64 = 0.02;

/// How arcs with an x-axis rotation are sampled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ArcMode {
    /// Sample the ellipse axis-aligned, dropping the x-axis rotation.
    ///
    /// Start and end angles are still measured in the rotated frame, so arcs
    /// with a non-zero rotation come out turned and detached from their
    /// endpoints. Sampling uses the effective radii, scaled up when the
    /// given radii are too small to span the chord.
    #[default]
    Compatible,
    /// Reapply the x-axis rotation when sampling
    Rotated,
}

impl ArcMode {
    /// Get a human-readable name for this mode
    pub fn name(&self) -> &'static str {
        match self {
            ArcMode::Compatible => "compatible",
            ArcMode::Rotated => "rotated",
        }
    }
}

/// Settings for converting a drawing into a mesh
///
/// # Example
///
/// ```
/// use svg2mesh::{ArcMode, ConversionConfig};
///
/// let config = ConversionConfig::new()
///     .with_line_width(0.5)
///     .with_arc_segments(64)
///     .with_arc_mode(ArcMode::Rotated);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionConfig {
    /// Stroke width of extruded path segments
    pub line_width: f64,
    /// Extrusion depth of path segments
    pub line_depth: f64,
    /// Extrusion depth of rectangles
    pub rect_depth: f64,
    /// Number of chords each arc is split into
    pub arc_segments: usize,
    /// Arc sampling mode
    pub arc_mode: ArcMode,
}

impl ConversionConfig {
    /// Create a configuration with the default settings
    pub fn new() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            line_depth: 0.0,
            rect_depth: 0.0,
            arc_segments: ARC_SEGMENTS,
            arc_mode: ArcMode::Compatible,
        }
    }

    /// Set the stroke width of path segments
    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    /// Set the extrusion depth of path segments
    pub fn with_line_depth(mut self, depth: f64) -> Self {
        self.line_depth = depth;
        self
    }

    /// Set the extrusion depth of rectangles
    pub fn with_rect_depth(mut self, depth: f64) -> Self {
        self.rect_depth = depth;
        self
    }

    /// Set the extrusion depth of both rectangles and path segments
    pub fn with_depth(self, depth: f64) -> Self {
        self.with_line_depth(depth).with_rect_depth(depth)
    }

    /// Set the number of chords per arc
    pub fn with_arc_segments(mut self, segments: usize) -> Self {
        self.arc_segments = segments;
        self
    }

    /// Set the arc sampling mode
    pub fn with_arc_mode(mut self, mode: ArcMode) -> Self {
        self.arc_mode = mode;
        self
    }

    /// Check that the settings can produce a mesh
    pub fn validate(&self) -> Result<()> {
        if self.arc_segments == 0 {
            return Err(Error::InvalidConfig(
                "arc_segments must be at least 1".to_string(),
            ));
        }
        for (name, value) in [
            ("line_width", self.line_width),
            ("line_depth", self.line_depth),
            ("rect_depth", self.rect_depth),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(Error::InvalidConfig(format!(
                    "{} must be a finite, non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self::new()
    }
}
