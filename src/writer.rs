//! OBJ text output
//!
//! The format is deliberately minimal: one `v x y z` line per vertex followed
//! by one `f a b c d` line per quad, with 1-based indices. No normals, texture
//! coordinates, groups or materials are written.

use crate::error::Result;
use crate::model::Mesh;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a mesh as OBJ text
pub fn write_obj<W: Write>(mesh: &Mesh, mut writer: W) -> Result<()> {
    for v in &mesh.vertices {
        writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
    }
    for face in &mesh.faces {
        let [a, b, c, d] = face.indices;
        writeln!(writer, "f {} {} {} {}", a, b, c, d)?;
    }
    writer.flush()?;
    Ok(())
}

impl Mesh {
    /// Write the mesh as OBJ text to a writer
    ///
    /// Returns the writer so in-memory buffers can be inspected afterwards.
    ///
    /// # Example
    ///
    /// ```
    /// use svg2mesh::Mesh;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut mesh = Mesh::new();
    /// mesh.add_rectangle(0.0, 0.0, 10.0, 5.0, 0.0);
    /// let buffer = mesh.to_writer(Vec::new())?;
    /// let text = String::from_utf8(buffer)?;
    /// assert!(text.starts_with("v 0 0 0\n"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn to_writer<W: Write>(&self, mut writer: W) -> Result<W> {
        write_obj(self, &mut writer)?;
        Ok(writer)
    }

    /// Write the mesh as OBJ text to a file, replacing it if it exists
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        write_obj(self, BufWriter::new(file))
    }

    /// Render the mesh as an OBJ string
    pub fn to_obj_string(&self) -> String {
        // Writing into a Vec cannot fail and the output is ASCII
        self.to_writer(Vec::new())
            .map(|buffer| String::from_utf8_lossy(&buffer).into_owned())
            .unwrap_or_default()
    }
}
