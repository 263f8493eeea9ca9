//! Elliptical arc parameterization
//!
//! SVG describes an arc by its endpoints, radii, x-axis rotation and two
//! flags. Sampling needs the center form instead: center, radii and the
//! angle range swept from start to end.

use std::f64::consts::TAU;

use crate::error::{Error, Result};
use crate::model::Point;

/// An arc in SVG endpoint parameterization
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcEndpointParams {
    /// Start point (the current point of the path)
    pub start: Point,
    /// X radius
    pub rx: f64,
    /// Y radius
    pub ry: f64,
    /// Rotation of the ellipse's x axis, in degrees
    pub x_axis_rotation_deg: f64,
    /// Pick the arc spanning more than 180 degrees
    pub large_arc: bool,
    /// Sweep in the positive-angle direction
    pub sweep: bool,
    /// End point
    pub end: Point,
}

/// An arc in center parameterization
///
/// `end_angle` may lie outside `[-π, π]`; it is always on the side of
/// `start_angle` that matches the sweep direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcCenterParams {
    /// Ellipse center
    pub center: Point,
    /// X radius (scaled up when the given radii could not span the chord)
    pub rx: f64,
    /// Y radius (scaled up when the given radii could not span the chord)
    pub ry: f64,
    /// Rotation of the ellipse's x axis, in radians
    pub rotation: f64,
    /// Angle of the start point, in radians
    pub start_angle: f64,
    /// Angle of the end point, in radians
    pub end_angle: f64,
}

impl ArcCenterParams {
    /// Signed angular span from start to end
    pub fn sweep_angle(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Point on the ellipse at parametric angle `theta`
    ///
    /// With `rotated` unset the ellipse is sampled axis-aligned, ignoring
    /// [`rotation`](Self::rotation).
    pub fn point_at(&self, theta: f64, rotated: bool) -> Point {
        let ex = self.rx * theta.cos();
        let ey = self.ry * theta.sin();
        if rotated {
            let (sin_phi, cos_phi) = self.rotation.sin_cos();
            Point::new(
                self.center.x + cos_phi * ex - sin_phi * ey,
                self.center.y + sin_phi * ex + cos_phi * ey,
            )
        } else {
            Point::new(self.center.x + ex, self.center.y + ey)
        }
    }
}

/// Convert an endpoint arc to center parameterization
///
/// Radii too small to span the chord are scaled up to the smallest ellipse
/// that does, which places the center on the chord midpoint. Rounding that
/// would make the center equation's radicand negative is clamped to zero.
///
/// Fails with [`Error::DegenerateGeometry`] for non-positive or non-finite
/// radii and for arcs whose endpoints coincide.
pub fn endpoint_to_center(params: &ArcEndpointParams) -> Result<ArcCenterParams> {
    let ArcEndpointParams {
        start,
        end,
        large_arc,
        sweep,
        ..
    } = *params;
    let (mut rx, mut ry) = (params.rx, params.ry);

    if !(rx > 0.0 && ry > 0.0 && rx.is_finite() && ry.is_finite()) {
        return Err(Error::DegenerateGeometry(format!(
            "arc radii must be positive, got rx={} ry={}",
            rx, ry
        )));
    }
    if !start.is_finite() || !end.is_finite() {
        return Err(Error::DegenerateGeometry(
            "arc endpoints must be finite".to_string(),
        ));
    }
    if start == end {
        return Err(Error::DegenerateGeometry(format!(
            "arc starts and ends at the same point ({}, {})",
            start.x, start.y
        )));
    }

    let phi = params.x_axis_rotation_deg.to_radians();
    let (sin_phi, cos_phi) = phi.sin_cos();

    // Midpoint offset in the ellipse's own frame
    let dx2 = (start.x - end.x) / 2.0;
    let dy2 = (start.y - end.y) / 2.0;
    let x1p = cos_phi * dx2 + sin_phi * dy2;
    let y1p = -sin_phi * dx2 + cos_phi * dy2;
    let x1p_sq = x1p * x1p;
    let y1p_sq = y1p * y1p;

    let lambda = x1p_sq / (rx * rx) + y1p_sq / (ry * ry);
    if lambda > 1.0 {
        let scale = lambda.sqrt();
        rx *= scale;
        ry *= scale;
    }

    let rx_sq = rx * rx;
    let ry_sq = ry * ry;
    let radicand =
        ((rx_sq * ry_sq - rx_sq * y1p_sq - ry_sq * x1p_sq) / (rx_sq * y1p_sq + ry_sq * x1p_sq))
            .max(0.0);
    let sign = if large_arc != sweep { 1.0 } else { -1.0 };
    let coef = sign * radicand.sqrt();
    let cxp = coef * rx * y1p / ry;
    let cyp = coef * -ry * x1p / rx;

    let center = Point::new(
        cos_phi * cxp - sin_phi * cyp + (start.x + end.x) / 2.0,
        sin_phi * cxp + cos_phi * cyp + (start.y + end.y) / 2.0,
    );

    let start_angle = ((y1p - cyp) / ry).atan2((x1p - cxp) / rx);
    let mut end_angle = ((-y1p - cyp) / ry).atan2((-x1p - cxp) / rx);
    if !sweep && end_angle > start_angle {
        end_angle -= TAU;
    } else if sweep && end_angle < start_angle {
        end_angle += TAU;
    }

    Ok(ArcCenterParams {
        center,
        rx,
        ry,
        rotation: phi,
        start_angle,
        end_angle,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    fn arc(
        start: (f64, f64),
        r: (f64, f64),
        rot: f64,
        flags: (bool, bool),
        end: (f64, f64),
    ) -> ArcEndpointParams {
        ArcEndpointParams {
            start: Point::new(start.0, start.1),
            rx: r.0,
            ry: r.1,
            x_axis_rotation_deg: rot,
            large_arc: flags.0,
            sweep: flags.1,
            end: Point::new(end.0, end.1),
        }
    }

    /// Unrotated arc between two points
    fn convert(
        start: (f64, f64),
        r: (f64, f64),
        flags: (bool, bool),
        end: (f64, f64),
    ) -> Result<ArcCenterParams> {
        endpoint_to_center(&arc(start, r, 0.0, flags, end))
    }

    #[test]
    fn test_half_circle_center_on_midpoint() {
        let center = convert((0.0, 0.0), (5.0, 5.0), (false, true), (10.0, 0.0)).unwrap();

        assert!((center.center.x - 5.0).abs() < EPS);
        assert!(center.center.y.abs() < EPS);
        assert!((center.sweep_angle().abs() - PI).abs() < EPS);
        assert!(center.end_angle >= center.start_angle);
    }

    #[test]
    fn test_flags_select_center_side() {
        // Quarter circle from (1,0) to (0,1) with radius 1: the two candidate
        // centers are the origin and (1,1).
        let small_ccw = convert((1.0, 0.0), (1.0, 1.0), (false, true), (0.0, 1.0)).unwrap();
        assert!(small_ccw.center.x.abs() < EPS && small_ccw.center.y.abs() < EPS);
        assert!((small_ccw.sweep_angle() - PI / 2.0).abs() < EPS);

        let large_ccw = convert((1.0, 0.0), (1.0, 1.0), (true, true), (0.0, 1.0)).unwrap();
        assert!((large_ccw.center.x - 1.0).abs() < EPS);
        assert!((large_ccw.center.y - 1.0).abs() < EPS);
        assert!((large_ccw.sweep_angle() - 1.5 * PI).abs() < EPS);
    }

    #[test]
    fn test_sweep_direction_correction() {
        let cw = convert((1.0, 0.0), (1.0, 1.0), (false, false), (0.0, 1.0)).unwrap();
        assert!(cw.end_angle <= cw.start_angle);

        let ccw = convert((0.0, 1.0), (1.0, 1.0), (false, true), (1.0, 0.0)).unwrap();
        assert!(ccw.end_angle >= ccw.start_angle);
    }

    #[test]
    fn test_small_radii_are_scaled_up() {
        let center = convert((0.0, 0.0), (1.0, 1.0), (false, true), (10.0, 0.0)).unwrap();

        assert!((center.rx - 5.0).abs() < EPS);
        assert!((center.ry - 5.0).abs() < EPS);
        assert!((center.center.x - 5.0).abs() < EPS);

        let start = center.point_at(center.start_angle, true);
        let end = center.point_at(center.end_angle, true);
        assert!(start.distance(&Point::new(0.0, 0.0)) < 1e-6);
        assert!(end.distance(&Point::new(10.0, 0.0)) < 1e-6);
    }

    #[test]
    fn test_rotated_ellipse_reproduces_endpoints() {
        let params = arc((2.0, 1.0), (4.0, 2.0), 30.0, (true, false), (-1.0, 3.0));
        let center = endpoint_to_center(&params).unwrap();

        assert!(center.point_at(center.start_angle, true).distance(&params.start) < 1e-6);
        assert!(center.point_at(center.end_angle, true).distance(&params.end) < 1e-6);
    }

    #[test]
    fn test_degenerate_arcs_are_rejected() {
        let zero_radius = convert((0.0, 0.0), (0.0, 5.0), (false, true), (10.0, 0.0));
        assert!(matches!(zero_radius, Err(Error::DegenerateGeometry(_))));

        let negative_radius = convert((0.0, 0.0), (5.0, -5.0), (false, true), (10.0, 0.0));
        assert!(matches!(negative_radius, Err(Error::DegenerateGeometry(_))));

        let same_point = convert((3.0, 3.0), (5.0, 5.0), (false, true), (3.0, 3.0));
        assert!(matches!(same_point, Err(Error::DegenerateGeometry(_))));
    }
}
