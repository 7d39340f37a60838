//! Data types for the ARES design assistant.
//!
//! # Static Data
//!
//! - [`KeywordEntry`]: One row of the assistant's keyword table. The table is
//!   defined once and never mutated; order matters because the first match wins.
//! - [`SliderRange`] / [`Page`]: The page selector and the bounded controls on each page.
//!
//! # Per-Request Data
//!
//! Everything else is built fresh for one interaction and discarded afterwards:
//!
//! - [`SyntheticSample`]: Generated training row with a formula comfort label.
//! - [`CandidateLayout`]: Layout sampled around the caller's sliders, scored by the model.
//! - [`RocketGeometryParams`]: Rocket dimensions for one render.
//! - [`MeshSurface`] / [`FinQuad`]: Coordinates of one rocket part.

mod habitat;
mod knowledge;
pub mod page;
mod rocket;

pub use habitat::*;
pub use knowledge::*;
pub use page::{pages, Page, PageId, SliderRange};
pub use rocket::*;
