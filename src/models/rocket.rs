use serde::{Deserialize, Serialize};

use super::page::{
    BODY_RADIUS, FIN_COUNT, FIN_HEIGHT, FLAME_HEIGHT, FLAME_RADIUS, NOSE_HEIGHT, ROCKET_HEIGHT,
};
use crate::error::Result;

/// Slider-controlled rocket dimensions, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RocketGeometryParams {
    pub height: f64,
    pub body_radius: f64,
    pub nose_height: f64,
    pub fin_count: u32,
    pub fin_height: f64,
    pub flame_radius: f64,
    pub flame_height: f64,
}

impl Default for RocketGeometryParams {
    fn default() -> Self {
        Self {
            height: ROCKET_HEIGHT.default,
            body_radius: BODY_RADIUS.default,
            nose_height: NOSE_HEIGHT.default,
            fin_count: FIN_COUNT.default as u32,
            fin_height: FIN_HEIGHT.default,
            flame_radius: FLAME_RADIUS.default,
            flame_height: FLAME_HEIGHT.default,
        }
    }
}

impl RocketGeometryParams {
    pub fn validate(&self) -> Result<()> {
        ROCKET_HEIGHT.check(self.height)?;
        BODY_RADIUS.check(self.body_radius)?;
        NOSE_HEIGHT.check(self.nose_height)?;
        FIN_COUNT.check(self.fin_count as f64)?;
        FIN_HEIGHT.check(self.fin_height)?;
        FLAME_RADIUS.check(self.flame_radius)?;
        FLAME_HEIGHT.check(self.flame_height)?;
        Ok(())
    }
}

/// A parametric surface as three equally shaped coordinate grids.
///
/// Rows run over the angular axis, columns over the height axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshSurface {
    pub x: Vec<Vec<f64>>,
    pub y: Vec<Vec<f64>>,
    pub z: Vec<Vec<f64>>,
}

impl MeshSurface {
    pub fn rows(&self) -> usize {
        self.z.len()
    }

    pub fn cols(&self) -> usize {
        self.z.first().map_or(0, Vec::len)
    }

    /// Min and max of the z grid.
    pub fn z_range(&self) -> (f64, f64) {
        self.z
            .iter()
            .flatten()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &z| {
                (lo.min(z), hi.max(z))
            })
    }

    /// Distance from the z axis of the point at (row, col).
    pub fn radius_at(&self, row: usize, col: usize) -> f64 {
        self.x[row][col].hypot(self.y[row][col])
    }

    /// Whether all three grids share one shape and hold only finite values.
    pub fn is_consistent(&self) -> bool {
        let rows = self.rows();
        let cols = self.cols();
        rows > 0
            && cols > 0
            && [&self.x, &self.y, &self.z].iter().all(|grid| {
                grid.len() == rows
                    && grid
                        .iter()
                        .all(|row| row.len() == cols && row.iter().all(|v| v.is_finite()))
            })
    }
}

/// One flat fin as a quadrilateral, corners in drawing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinQuad {
    pub index: u32,
    /// Rotation about the z axis in radians.
    pub angle: f64,
    pub x: [f64; 4],
    pub y: [f64; 4],
    pub z: [f64; 4],
}

/// Every renderable part of the rocket model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RocketGeometry {
    pub body: MeshSurface,
    pub nose: MeshSurface,
    pub fins: Vec<FinQuad>,
    pub flame: MeshSurface,
}
