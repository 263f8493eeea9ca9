//! Mesh data structures
//!
//! The [`Mesh`] is the single accumulator shared by every extrusion step of a
//! conversion. It is append-only: vertices are never welded or removed, and
//! each extruded primitive contributes its own block of eight vertices.

/// A point in the drawing plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Whether both coordinates are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A vertex in 3D space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    pub z: f64,
}

impl Vertex {
    /// Create a new vertex
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Lift a planar point to the given height
    pub fn from_point(point: Point, z: f64) -> Self {
        Self::new(point.x, point.y, z)
    }
}

/// A planar quad referencing four vertices
///
/// Indices are 1-based, matching the convention of the OBJ text format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    /// 1-based vertex indices, in winding order
    pub indices: [usize; 4],
}

impl Face {
    /// Create a new quad face
    pub fn new(a: usize, b: usize, c: usize, d: usize) -> Self {
        Self {
            indices: [a, b, c, d],
        }
    }
}

/// Axis-aligned bounding box of a mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimum corner
    pub min: Vertex,
    /// Maximum corner
    pub max: Vertex,
}

/// Summary counts for a mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshStats {
    /// Number of vertices
    pub vertices: usize,
    /// Number of faces
    pub faces: usize,
    /// Number of extruded boxes (8 vertices / 6 faces each)
    pub boxes: usize,
    /// Bounding box, `None` for an empty mesh
    pub bounds: Option<Bounds>,
}

/// A polygonal mesh made of quads
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// List of vertices
    pub vertices: Vec<Vertex>,
    /// List of quad faces
    pub faces: Vec<Face>,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a new mesh with room for the given number of extruded boxes
    pub fn with_capacity(boxes: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(boxes * 8),
            faces: Vec::with_capacity(boxes * 6),
        }
    }

    /// Check if the mesh has no geometry
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.faces.is_empty()
    }

    /// Append a closed box from four planar corners
    ///
    /// The corners are emitted at `z = 0` and again at `z = depth`, followed by
    /// the bottom, top and four side quads. Corners must be given in order
    /// around the outline.
    pub(crate) fn push_box(&mut self, corners: [Point; 4], depth: f64) {
        let idx = self.vertices.len() + 1;

        for z in [0.0, depth] {
            self.vertices
                .extend(corners.iter().map(|&corner| Vertex::from_point(corner, z)));
        }

        self.faces.extend([
            Face::new(idx, idx + 1, idx + 2, idx + 3),
            Face::new(idx + 4, idx + 5, idx + 6, idx + 7),
            Face::new(idx, idx + 1, idx + 5, idx + 4),
            Face::new(idx + 1, idx + 2, idx + 6, idx + 5),
            Face::new(idx + 2, idx + 3, idx + 7, idx + 6),
            Face::new(idx + 3, idx, idx + 4, idx + 7),
        ]);
    }

    /// Compute the axis-aligned bounding box
    pub fn bounds(&self) -> Option<Bounds> {
        let first = *self.vertices.first()?;
        let mut bounds = Bounds {
            min: first,
            max: first,
        };
        for v in &self.vertices[1..] {
            bounds.min.x = bounds.min.x.min(v.x);
            bounds.min.y = bounds.min.y.min(v.y);
            bounds.min.z = bounds.min.z.min(v.z);
            bounds.max.x = bounds.max.x.max(v.x);
            bounds.max.y = bounds.max.y.max(v.y);
            bounds.max.z = bounds.max.z.max(v.z);
        }
        Some(bounds)
    }

    /// Summarize the mesh
    pub fn stats(&self) -> MeshStats {
        MeshStats {
            vertices: self.vertices.len(),
            faces: self.faces.len(),
            boxes: self.faces.len() / 6,
            bounds: self.bounds(),
        }
    }
}
