//! Extrusion of rectangles and stroked line segments into closed boxes

use crate::error::{Error, Result};
use crate::model::{Mesh, Point};

impl Mesh {
    /// Append an axis-aligned rectangle extruded to `depth`
    ///
    /// A depth of zero is allowed and yields a flat, zero-thickness box.
    pub fn add_rectangle(&mut self, x: f64, y: f64, width: f64, height: f64, depth: f64) {
        self.push_box(
            [
                Point::new(x, y),
                Point::new(x + width, y),
                Point::new(x + width, y + height),
                Point::new(x, y + height),
            ],
            depth,
        );
    }

    /// Append a line segment stroked to `width` and extruded to `depth`
    ///
    /// The stroke is centered on the segment: each endpoint is offset by half
    /// the width along the segment's left normal in both directions.
    ///
    /// Fails with [`Error::DegenerateGeometry`] when the endpoints coincide,
    /// since the segment then has no direction.
    pub fn add_line(&mut self, start: Point, end: Point, width: f64, depth: f64) -> Result<()> {
        let length = start.distance(&end);
        if !(length > 0.0 && length.is_finite()) {
            return Err(Error::DegenerateGeometry(format!(
                "line segment from ({}, {}) to ({}, {}) has no length",
                start.x, start.y, end.x, end.y
            )));
        }

        let ux = (end.x - start.x) / length;
        let uy = (end.y - start.y) / length;
        let half = width / 2.0;
        let (ox, oy) = (-uy * half, ux * half);

        self.push_box(
            [
                Point::new(start.x + ox, start.y + oy),
                Point::new(start.x - ox, start.y - oy),
                Point::new(end.x - ox, end.y - oy),
                Point::new(end.x + ox, end.y + oy),
            ],
            depth,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Vertex;

    #[test]
    fn test_rectangle_corners() {
        let mut mesh = Mesh::new();
        mesh.add_rectangle(1.0, 2.0, 10.0, 5.0, 0.5);

        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.faces.len(), 6);
        assert_eq!(mesh.vertices[0], Vertex::new(1.0, 2.0, 0.0));
        assert_eq!(mesh.vertices[2], Vertex::new(11.0, 7.0, 0.0));
        assert_eq!(mesh.vertices[6], Vertex::new(11.0, 7.0, 0.5));
    }

    #[test]
    fn test_horizontal_line_offsets_vertically() {
        let mut mesh = Mesh::new();
        mesh.add_line(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 2.0, 0.0)
            .unwrap();

        let corners: Vec<(f64, f64)> = mesh.vertices[..4].iter().map(|v| (v.x, v.y)).collect();
        assert_eq!(corners, vec![(0.0, 1.0), (0.0, -1.0), (10.0, -1.0), (10.0, 1.0)]);
    }

    #[test]
    fn test_diagonal_line_is_centered() {
        let mut mesh = Mesh::new();
        mesh.add_line(Point::new(0.0, 0.0), Point::new(3.0, 4.0), 1.0, 1.0)
            .unwrap();

        let a = Point::new(mesh.vertices[0].x, mesh.vertices[0].y);
        let b = Point::new(mesh.vertices[1].x, mesh.vertices[1].y);
        assert!((a.distance(&b) - 1.0).abs() < 1e-12);
        assert!(((a.x + b.x) / 2.0).abs() < 1e-12);
        assert!(((a.y + b.y) / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_length_line_is_rejected() {
        let mut mesh = Mesh::new();
        let result = mesh.add_line(Point::new(2.0, 2.0), Point::new(2.0, 2.0), 0.02, 0.0);

        assert!(matches!(result, Err(Error::DegenerateGeometry(_))));
        assert!(mesh.is_empty());
    }
}
