//! Parametric 3D rocket model.

pub mod figure;
pub mod geometry;

pub use figure::{to_figure, Figure, Trace};
pub use geometry::build_geometry;

use crate::error::Result;
use crate::models::{RocketGeometry, RocketGeometryParams};

/// Validate slider values, then build the geometry.
pub fn render(params: &RocketGeometryParams) -> Result<RocketGeometry> {
    params.validate()?;
    Ok(build_geometry(params))
}
