//! Planar geometry and extrusion
//!
//! This module turns 2D drawing primitives into closed boxes on a [`Mesh`]:
//!
//! - [`arc`] converts SVG endpoint arcs into center parameterization
//! - [`extrude`] builds boxes for rectangles and stroked line segments
//! - [`tessellate`] samples arcs and extrudes each chord
//!
//! [`Mesh`]: crate::model::Mesh

pub mod arc;
pub mod extrude;
pub mod tessellate;

pub use arc::{ArcCenterParams, ArcEndpointParams, endpoint_to_center};
pub use tessellate::{ARC_SEGMENTS, sample_arc};
