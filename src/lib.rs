//! ARES: rocket and habitat design assistant.
//!
//! Three independent, stateless pages behind one HTTP shell:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`assistant`] | Keyword lookup over a fixed table of space terms |
//! | [`optimizer`] | Comfort model trained on synthetic data, layout recommendation |
//! | [`visualizer`] | Procedural rocket mesh and Plotly figure |
//! | [`api`] | axum router, handlers, page shell |
//! | [`config`] | Environment-driven server configuration |
//! | [`models`] | Plain data types shared by the above |

pub mod api;
pub mod assistant;
pub mod config;
pub mod error;
pub mod models;
pub mod optimizer;
pub mod visualizer;

pub use error::{AresError, Result};
