//! SVG path data
//!
//! A path's `d` attribute is scanned into typed [`PathCommand`]s by
//! [`parse_path_data`], then walked by a [`PathInterpreter`] that extrudes
//! each segment onto a mesh.

mod interpreter;
mod parser;

pub use interpreter::PathInterpreter;
pub use parser::{PathCommand, parse_path_data};
