//! # svg2mesh
//!
//! Convert 2D SVG drawings into extruded 3D meshes written as OBJ text.
//!
//! Rectangles become boxes. Path data made of `M`, `L` and `A` commands is
//! stroked into thin ribbons: each line segment becomes one box, and each
//! elliptical arc is split into a fixed number of chords that are boxed the
//! same way. Every box contributes eight fresh vertices and six quad faces;
//! vertices are never shared between boxes.
//!
//! ## Features
//!
//! - Pure Rust implementation with no unsafe code
//! - SVG endpoint arcs converted to center form, with optional rotation
//! - Configurable stroke width, extrusion depth and arc resolution
//! - Explicit, coded errors for malformed documents, path data and geometry
//!
//! ## Example
//!
//! ```
//! use svg2mesh::{ConversionConfig, convert_str_with_config};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let svg = r#"<svg xmlns="http://www.w3.org/2000/svg">
//!   <rect x="0" y="0" width="10" height="5"/>
//!   <path d="M 0 0 L 10 0 A 5 5 0 0 1 20 0"/>
//! </svg>"#;
//!
//! let config = ConversionConfig::new().with_depth(1.0);
//! let mesh = convert_str_with_config(svg, &config)?;
//!
//! // One rectangle, one line and twenty arc chords
//! assert_eq!(mesh.faces.len(), 22 * 6);
//! let obj = mesh.to_obj_string();
//! assert!(obj.starts_with("v "));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod convert;
pub mod error;
pub mod geometry;
pub mod model;
pub mod parser;
pub mod path;
pub mod writer;

pub use config::{ArcMode, ConversionConfig};
pub use convert::{Converter, convert_file, convert_str, convert_str_with_config};
pub use error::{Error, Result};
pub use geometry::{ArcCenterParams, ArcEndpointParams, endpoint_to_center};
pub use model::{Bounds, Face, Mesh, MeshStats, Point, Vertex};
pub use parser::{Drawing, Element, parse_drawing};
pub use path::{PathCommand, PathInterpreter, parse_path_data};
