//! Plotly figure description for the rocket model.
//!
//! The JSON produced here can be passed straight to `Plotly.newPlot` in the
//! browser: surfaces for the body, nose, and flame, and one `mesh3d` per fin.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::models::{FinQuad, MeshSurface, RocketGeometry};

pub const FIGURE_TITLE: &str = "Interactive Rocket Model (Drag to Rotate)";
pub const FIGURE_HEIGHT: u32 = 700;

/// One colour stop: position in [0, 1] and a CSS colour.
pub type ColorStop = (f64, String);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Surface {
        name: String,
        x: Vec<Vec<f64>>,
        y: Vec<Vec<f64>>,
        z: Vec<Vec<f64>>,
        surfacecolor: Vec<Vec<f64>>,
        colorscale: Vec<ColorStop>,
        showscale: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        opacity: Option<f64>,
    },
    Mesh3d {
        name: String,
        x: Vec<f64>,
        y: Vec<f64>,
        z: Vec<f64>,
        color: String,
        opacity: f64,
    },
}

impl Trace {
    pub fn name(&self) -> &str {
        match self {
            Self::Surface { name, .. } | Self::Mesh3d { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: serde_json::Value,
}

fn colorscale(stops: &[(f64, &str)]) -> Vec<ColorStop> {
    stops.iter().map(|&(at, c)| (at, c.to_string())).collect()
}

/// Surface trace colored by height.
fn surface(name: &str, mesh: &MeshSurface, stops: &[(f64, &str)], opacity: Option<f64>) -> Trace {
    Trace::Surface {
        name: name.to_string(),
        x: mesh.x.clone(),
        y: mesh.y.clone(),
        z: mesh.z.clone(),
        surfacecolor: mesh.z.clone(),
        colorscale: colorscale(stops),
        showscale: false,
        opacity,
    }
}

fn fin(quad: &FinQuad) -> Trace {
    Trace::Mesh3d {
        name: format!("fin {}", quad.index),
        x: quad.x.to_vec(),
        y: quad.y.to_vec(),
        z: quad.z.to_vec(),
        color: "red".to_string(),
        opacity: 0.8,
    }
}

fn layout() -> serde_json::Value {
    json!({
        "title": FIGURE_TITLE,
        "height": FIGURE_HEIGHT,
        "margin": { "l": 0, "r": 0, "b": 0, "t": 40 },
        "scene": {
            "xaxis": { "title": "X (m)" },
            "yaxis": { "title": "Y (m)" },
            "zaxis": { "title": "Height (m)" },
            "aspectmode": "data",
            "camera": { "eye": { "x": 1.5, "y": 1.5, "z": 1.2 } }
        }
    })
}

/// Turn built geometry into a renderable figure.
pub fn to_figure(geometry: &RocketGeometry) -> Figure {
    let mut data = Vec::with_capacity(3 + geometry.fins.len());
    data.push(surface(
        "body",
        &geometry.body,
        &[(0.0, "rgb(180,180,180)"), (1.0, "rgb(90,90,90)")],
        None,
    ));
    data.push(surface(
        "nose",
        &geometry.nose,
        &[(0.0, "rgb(220,220,220)"), (1.0, "rgb(120,120,120)")],
        None,
    ));
    data.extend(geometry.fins.iter().map(fin));
    data.push(surface(
        "flame",
        &geometry.flame,
        &[(0.0, "yellow"), (0.5, "orange"), (1.0, "red")],
        Some(0.6),
    ));

    Figure {
        data,
        layout: layout(),
    }
}
