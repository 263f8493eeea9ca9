//! SVG to OBJ converter
//!
//! Reads an SVG drawing, extrudes its rectangles and `M`/`L`/`A` paths into
//! boxes and writes the resulting mesh as OBJ text.

#![forbid(unsafe_code)]

use clap::Parser;
use std::path::PathBuf;
use std::process;
use svg2mesh::{ArcMode, ConversionConfig, convert_file};

/// Command-line arguments for the converter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// SVG drawing to convert
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// OBJ file to write (defaults to INPUT with an .obj extension)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Stroke width of path segments
    #[arg(long, default_value_t = svg2mesh::config::DEFAULT_LINE_WIDTH)]
    line_width: f64,

    /// Extrusion depth of rectangles and path segments
    #[arg(long, default_value_t = 0.0)]
    depth: f64,

    /// Number of chords each arc is split into
    #[arg(long, default_value_t = svg2mesh::geometry::ARC_SEGMENTS)]
    arc_segments: usize,

    /// How arcs with an x-axis rotation are sampled
    #[arg(long, value_enum, default_value = "compatible")]
    arc_mode: ArcMode,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("obj"));

    let config = ConversionConfig::new()
        .with_line_width(args.line_width)
        .with_depth(args.depth)
        .with_arc_segments(args.arc_segments)
        .with_arc_mode(args.arc_mode);

    log::info!(
        "converting {} -> {} ({} arc mode)",
        args.input.display(),
        output.display(),
        config.arc_mode.name()
    );

    match convert_file(&args.input, &output, &config) {
        Ok(mesh) => {
            let stats = mesh.stats();
            log::info!(
                "{} boxes: {} vertices, {} faces",
                stats.boxes,
                stats.vertices,
                stats.faces
            );
            if let Some(bounds) = stats.bounds {
                log::info!(
                    "bounds: ({}, {}, {}) .. ({}, {}, {})",
                    bounds.min.x,
                    bounds.min.y,
                    bounds.min.z,
                    bounds.max.x,
                    bounds.max.y,
                    bounds.max.z
                );
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
