//! Drawing to mesh conversion
//!
//! Rectangles are extruded directly. Paths are decoded and handed to a fresh
//! [`PathInterpreter`]. Every other element is skipped. The first error aborts
//! the conversion; no partial mesh is returned.

use crate::config::ConversionConfig;
use crate::error::{Error, Result};
use crate::model::Mesh;
use crate::parser::{Drawing, Element, parse_drawing};
use crate::path::{PathInterpreter, parse_path_data};
use std::path::Path;

/// Converts drawings into meshes with a fixed configuration
#[derive(Debug, Clone)]
pub struct Converter {
    config: ConversionConfig,
}

impl Converter {
    /// Create a converter, validating the configuration
    pub fn new(config: ConversionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Convert every element of a drawing into one mesh
    pub fn convert_drawing(&self, drawing: &Drawing) -> Result<Mesh> {
        let mut mesh = Mesh::new();
        for element in &drawing.elements {
            self.convert_element(&mut mesh, element)?;
        }
        log::info!(
            "converted drawing: {} vertices, {} faces",
            mesh.vertices.len(),
            mesh.faces.len()
        );
        Ok(mesh)
    }

    /// Append the geometry of a single element
    pub fn convert_element(&self, mesh: &mut Mesh, element: &Element) -> Result<()> {
        match element.tag.as_str() {
            "rect" => {
                let x = number_attribute(element, "x")?;
                let y = number_attribute(element, "y")?;
                let width = number_attribute(element, "width")?;
                let height = number_attribute(element, "height")?;
                log::debug!("rect x={} y={} width={} height={}", x, y, width, height);
                mesh.add_rectangle(x, y, width, height, self.config.rect_depth);
            }
            "path" => {
                let data = element
                    .attribute("d")
                    .ok_or_else(|| Error::missing_attribute("path", "d"))?;
                let commands = parse_path_data(data)?;
                log::debug!("path d={:?}: {} commands", data, commands.len());
                PathInterpreter::new(&self.config).run(mesh, &commands, data)?;
            }
            other => {
                log::trace!("skipping <{}>", other);
            }
        }
        Ok(())
    }
}

/// Read a numeric attribute, treating a missing attribute as zero
fn number_attribute(element: &Element, name: &str) -> Result<f64> {
    let Some(raw) = element.attribute(name) else {
        return Ok(0.0);
    };
    let field = format!("{} {}", element.tag, name);
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| Error::invalid_number(&field, raw))?;
    if !value.is_finite() {
        return Err(Error::invalid_number(&field, raw));
    }
    Ok(value)
}

/// Convert SVG text with the default configuration
///
/// # Example
///
/// ```
/// let mesh = svg2mesh::convert_str(r#"<svg><path d="M0,0 L10,0"/></svg>"#).unwrap();
/// assert_eq!(mesh.vertices.len(), 8);
/// assert_eq!(mesh.faces.len(), 6);
/// ```
pub fn convert_str(svg: &str) -> Result<Mesh> {
    convert_str_with_config(svg, &ConversionConfig::default())
}

/// Convert SVG text with a custom configuration
pub fn convert_str_with_config(svg: &str, config: &ConversionConfig) -> Result<Mesh> {
    let converter = Converter::new(config.clone())?;
    let drawing = parse_drawing(svg)?;
    converter.convert_drawing(&drawing)
}

/// Convert an SVG file and write the mesh to `output`
///
/// The output file is only created once the whole drawing has converted.
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    config: &ConversionConfig,
) -> Result<Mesh> {
    let svg = std::fs::read_to_string(input.as_ref())?;
    let mesh = convert_str_with_config(&svg, config)?;
    mesh.write_to_file(output.as_ref())?;
    log::info!("wrote {}", output.as_ref().display());
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_rect_attributes_default_to_zero() {
        let converter = Converter::new(ConversionConfig::default()).unwrap();
        let mut mesh = Mesh::new();
        let rect = Element::new("rect").with_attribute("width", "4");
        converter.convert_element(&mut mesh, &rect).unwrap();

        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.vertices[1].x, 4.0);
        assert!(mesh.vertices.iter().all(|v| v.y == 0.0));
    }

    #[test]
    fn test_rect_attribute_must_be_numeric() {
        let converter = Converter::new(ConversionConfig::default()).unwrap();
        let mut mesh = Mesh::new();
        let rect = Element::new("rect").with_attribute("width", "10px");
        let err = converter.convert_element(&mut mesh, &rect).unwrap_err();

        assert!(matches!(err, Error::InvalidNumber(_)));
        assert!(err.to_string().contains("rect width"));
    }

    #[test]
    fn test_non_finite_rect_attribute_is_rejected() {
        let converter = Converter::new(ConversionConfig::default()).unwrap();
        let mut mesh = Mesh::new();
        let rect = Element::new("rect").with_attribute("x", "inf");
        assert!(converter.convert_element(&mut mesh, &rect).is_err());
    }

    #[test]
    fn test_path_without_data_is_rejected() {
        let converter = Converter::new(ConversionConfig::default()).unwrap();
        let mut mesh = Mesh::new();
        let err = converter
            .convert_element(&mut mesh, &Element::new("path"))
            .unwrap_err();
        assert!(matches!(err, Error::MalformedDocument(_)));
    }

    #[test]
    fn test_other_elements_are_skipped() {
        let converter = Converter::new(ConversionConfig::default()).unwrap();
        let mut mesh = Mesh::new();
        let circle = Element::new("circle").with_attribute("r", "5");
        converter.convert_element(&mut mesh, &circle).unwrap();
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = ConversionConfig::new().with_arc_segments(0);
        assert!(matches!(
            Converter::new(config),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rect_depth_is_applied() {
        let config = ConversionConfig::new().with_rect_depth(3.0);
        let mesh = convert_str_with_config(r#"<svg><rect width="1" height="1"/></svg>"#, &config)
            .unwrap();
        assert_eq!(mesh.vertices[7].z, 3.0);
    }
}
