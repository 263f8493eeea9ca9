//! Path command state machine

use std::f64::consts::TAU;

use super::parser::PathCommand;
use crate::config::{ArcMode, ConversionConfig};
use crate::error::{Error, Result};
use crate::geometry::{ArcEndpointParams, endpoint_to_center};
use crate::model::{Mesh, Point};

/// Walks the commands of one path, extruding each drawn segment
///
/// The interpreter starts without a current point. `M` sets it; `L` and `A`
/// draw from it and move it to their end point. Drawing before the first `M`
/// fails with [`Error::MissingStartPoint`]. Create a fresh interpreter for
/// every path.
#[derive(Debug)]
pub struct PathInterpreter<'a> {
    config: &'a ConversionConfig,
    current: Option<Point>,
}

impl<'a> PathInterpreter<'a> {
    /// Create an interpreter with no current point
    pub fn new(config: &'a ConversionConfig) -> Self {
        Self {
            config,
            current: None,
        }
    }

    /// The current point, if a move has been seen
    pub fn current_point(&self) -> Option<Point> {
        self.current
    }

    /// Run every command of a path in order
    ///
    /// `data` is the path's `d` attribute, used for error reporting.
    pub fn run(&mut self, mesh: &mut Mesh, commands: &[PathCommand], data: &str) -> Result<()> {
        for command in commands {
            self.apply(mesh, command, data)?;
        }
        Ok(())
    }

    /// Apply a single command
    pub fn apply(&mut self, mesh: &mut Mesh, command: &PathCommand, data: &str) -> Result<()> {
        log::trace!("path command {:?}", command);

        match *command {
            PathCommand::MoveTo(_) => {}
            PathCommand::LineTo(end) => {
                let start = self.start_point(data)?;
                mesh.add_line(start, end, self.config.line_width, self.config.line_depth)?;
            }
            PathCommand::ArcTo {
                rx,
                ry,
                x_axis_rotation_deg,
                large_arc,
                sweep,
                end,
            } => {
                let start = self.start_point(data)?;
                let arc = endpoint_to_center(&ArcEndpointParams {
                    start,
                    rx,
                    ry,
                    x_axis_rotation_deg,
                    large_arc,
                    sweep,
                    end,
                })?;

                if self.config.arc_mode == ArcMode::Compatible && arc.rotation % TAU != 0.0 {
                    log::warn!(
                        "arc to ({}, {}) has a {} degree rotation that compatible mode does not apply",
                        end.x,
                        end.y,
                        x_axis_rotation_deg
                    );
                }

                mesh.add_arc(
                    &arc,
                    self.config.arc_segments,
                    self.config.arc_mode,
                    self.config.line_width,
                    self.config.line_depth,
                )?;
            }
        }
        self.current = Some(command.end_point());
        Ok(())
    }

    fn start_point(&self, data: &str) -> Result<Point> {
        self.current.ok_or_else(|| Error::MissingStartPoint {
            path: data.to_string(),
        })
    }
}
