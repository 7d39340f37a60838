//! Procedural rocket mesh generation.
//!
//! ```text
//!        /\        nose    z in [height, height + nose_height]
//!       /  \
//!      |    |
//!      |    |      body    z in [0, height]
//!     /|    |\     fins    z in [0, fin_height]
//!      \    /      flame   z in [-flame_height, 0]
//!       \  /
//! ```

use std::f64::consts::TAU;

use crate::models::{FinQuad, MeshSurface, RocketGeometry, RocketGeometryParams};

pub const ANGULAR_SAMPLES: usize = 30;
pub const BODY_SAMPLES: usize = 50;
pub const NOSE_SAMPLES: usize = 20;
pub const FLAME_SAMPLES: usize = 10;

/// How far a fin sticks out from the body, in meters.
pub const FIN_SPAN: f64 = 0.5;
/// Half the fin's thickness, in meters.
pub const FIN_HALF_THICKNESS: f64 = 0.1;

/// `n` evenly spaced values from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            values[n - 1] = end;
            values
        }
    }
}

/// Sweep a (radius, z) profile around the z axis, one row per angle.
pub fn revolve(profile: &[(f64, f64)], theta: &[f64]) -> MeshSurface {
    let mut x = Vec::with_capacity(theta.len());
    let mut y = Vec::with_capacity(theta.len());
    let mut z = Vec::with_capacity(theta.len());

    for &t in theta {
        let (sin, cos) = t.sin_cos();
        x.push(profile.iter().map(|&(r, _)| r * cos).collect());
        y.push(profile.iter().map(|&(r, _)| r * sin).collect());
        z.push(profile.iter().map(|&(_, h)| h).collect());
    }

    MeshSurface { x, y, z }
}

fn body(params: &RocketGeometryParams, theta: &[f64]) -> MeshSurface {
    let profile: Vec<_> = linspace(0.0, params.height, BODY_SAMPLES)
        .into_iter()
        .map(|h| (params.body_radius, h))
        .collect();
    revolve(&profile, theta)
}

fn nose(params: &RocketGeometryParams, theta: &[f64]) -> MeshSurface {
    let radii = linspace(params.body_radius, 0.0, NOSE_SAMPLES);
    let heights = linspace(params.height, params.height + params.nose_height, NOSE_SAMPLES);
    let profile: Vec<_> = radii.into_iter().zip(heights).collect();
    revolve(&profile, theta)
}

fn flame(params: &RocketGeometryParams, theta: &[f64]) -> MeshSurface {
    let radii = linspace(0.0, params.flame_radius, FLAME_SAMPLES);
    let heights = linspace(-params.flame_height, 0.0, FLAME_SAMPLES);
    let profile: Vec<_> = radii.into_iter().zip(heights).collect();
    revolve(&profile, theta)
}

/// Fins evenly spaced around the body. No fins when `fin_count` is zero.
pub fn fins(params: &RocketGeometryParams) -> Vec<FinQuad> {
    if params.fin_count == 0 {
        return Vec::new();
    }

    let r = params.body_radius;
    let local_x = [r, r + FIN_SPAN, r + FIN_SPAN, r];
    let local_y = [
        -FIN_HALF_THICKNESS,
        -FIN_HALF_THICKNESS,
        FIN_HALF_THICKNESS,
        FIN_HALF_THICKNESS,
    ];
    let z = [0.0, 0.0, params.fin_height, params.fin_height];

    (0..params.fin_count)
        .map(|index| {
            let angle = index as f64 * TAU / params.fin_count as f64;
            let (sin, cos) = angle.sin_cos();
            FinQuad {
                index,
                angle,
                x: std::array::from_fn(|k| local_x[k] * cos - local_y[k] * sin),
                y: std::array::from_fn(|k| local_x[k] * sin + local_y[k] * cos),
                z,
            }
        })
        .collect()
}

/// Build every part of the rocket from its dimensions.
pub fn build_geometry(params: &RocketGeometryParams) -> RocketGeometry {
    let theta = linspace(0.0, TAU, ANGULAR_SAMPLES);

    let geometry = RocketGeometry {
        body: body(params, &theta),
        nose: nose(params, &theta),
        fins: fins(params),
        flame: flame(params, &theta),
    };
    tracing::debug!(
        "Built rocket geometry: height {} + nose {}, {} fins",
        params.height,
        params.nose_height,
        geometry.fins.len()
    );
    geometry
}
