//! Arc tessellation
//!
//! Arcs are approximated by a fixed number of chords at equal angular steps,
//! independent of radius or span. Each chord is extruded as a stroked line.

use super::arc::ArcCenterParams;
use crate::config::ArcMode;
use crate::error::{Error, Result};
use crate::model::{Mesh, Point};

/// Default number of chords per arc
pub const ARC_SEGMENTS: usize = 20;

/// Sample `segments + 1` points along an arc, from start angle to end angle
///
/// In [`ArcMode::Compatible`] the ellipse is sampled axis-aligned even when
/// the arc carries a rotation; [`ArcMode::Rotated`] reapplies it.
pub fn sample_arc(arc: &ArcCenterParams, segments: usize, mode: ArcMode) -> Vec<Point> {
    let step = arc.sweep_angle() / segments as f64;
    let rotated = mode == ArcMode::Rotated;
    (0..=segments)
        .map(|i| arc.point_at(arc.start_angle + i as f64 * step, rotated))
        .collect()
}

impl Mesh {
    /// Append an arc as `segments` stroked chords
    pub fn add_arc(
        &mut self,
        arc: &ArcCenterParams,
        segments: usize,
        mode: ArcMode,
        width: f64,
        depth: f64,
    ) -> Result<()> {
        if segments == 0 {
            return Err(Error::InvalidConfig(
                "arc tessellation needs at least one segment".to_string(),
            ));
        }

        let points = sample_arc(arc, segments, mode);
        for chord in points.windows(2) {
            self.add_line(chord[0], chord[1], width, depth)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{ArcEndpointParams, endpoint_to_center};
    use std::f64::consts::{FRAC_PI_2, PI};

    fn half_circle() -> ArcCenterParams {
        ArcCenterParams {
            center: Point::new(0.0, 0.0),
            rx: 5.0,
            ry: 5.0,
            rotation: 0.0,
            start_angle: 0.0,
            end_angle: PI,
        }
    }

    #[test]
    fn test_sample_count_and_endpoints() {
        let points = sample_arc(&half_circle(), ARC_SEGMENTS, ArcMode::Compatible);

        assert_eq!(points.len(), ARC_SEGMENTS + 1);
        assert!(points[0].distance(&Point::new(5.0, 0.0)) < 1e-12);
        assert!(points[ARC_SEGMENTS].distance(&Point::new(-5.0, 0.0)) < 1e-12);
    }

    #[test]
    fn test_add_arc_emits_one_box_per_chord() {
        let mut mesh = Mesh::new();
        mesh.add_arc(&half_circle(), ARC_SEGMENTS, ArcMode::Compatible, 0.02, 0.0)
            .unwrap();

        assert_eq!(mesh.vertices.len(), ARC_SEGMENTS * 8);
        assert_eq!(mesh.faces.len(), ARC_SEGMENTS * 6);
    }

    #[test]
    fn test_rotation_only_applies_in_rotated_mode() {
        let arc = ArcCenterParams {
            center: Point::new(0.0, 0.0),
            rx: 2.0,
            ry: 1.0,
            rotation: FRAC_PI_2,
            start_angle: 0.0,
            end_angle: FRAC_PI_2,
        };

        let plain = sample_arc(&arc, 4, ArcMode::Compatible);
        assert!(plain[0].distance(&Point::new(2.0, 0.0)) < 1e-12);

        let rotated = sample_arc(&arc, 4, ArcMode::Rotated);
        assert!(rotated[0].distance(&Point::new(0.0, 2.0)) < 1e-12);
        assert!(rotated[4].distance(&Point::new(-1.0, 0.0)) < 1e-12);
    }

    #[test]
    fn test_compatible_mode_samples_effective_radii() {
        let arc = endpoint_to_center(&ArcEndpointParams {
            start: Point::new(0.0, 0.0),
            rx: 1.0,
            ry: 1.0,
            x_axis_rotation_deg: 0.0,
            large_arc: false,
            sweep: true,
            end: Point::new(10.0, 0.0),
        })
        .unwrap();

        let center = Point::new(5.0, 0.0);
        let points = sample_arc(&arc, ARC_SEGMENTS, ArcMode::Compatible);
        for p in &points {
            assert!((p.distance(&center) - 5.0).abs() < 1e-9, "{:?}", p);
        }
        assert!(points[0].distance(&Point::new(0.0, 0.0)) < 1e-9);
        assert!(points[ARC_SEGMENTS].distance(&Point::new(10.0, 0.0)) < 1e-9);
    }

    #[test]
    fn test_zero_segments_is_rejected() {
        let mut mesh = Mesh::new();
        let result = mesh.add_arc(&half_circle(), 0, ArcMode::Compatible, 0.02, 0.0);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }
}
