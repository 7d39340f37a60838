use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::{AresError, Result};

/// A bounded numeric control (slider) shown on one of the pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub name: Cow<'static, str>,
    pub label: Cow<'static, str>,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

impl SliderRange {
    pub const fn new(
        name: &'static str,
        label: &'static str,
        min: f64,
        max: f64,
        default: f64,
        step: f64,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            label: Cow::Borrowed(label),
            min,
            max,
            default,
            step,
        }
    }

    /// Reject values outside `[min, max]`. NaN is never in range.
    pub fn check(&self, value: f64) -> Result<f64> {
        if value >= self.min && value <= self.max {
            Ok(value)
        } else {
            Err(AresError::OutOfRange {
                field: self.name.to_string(),
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

// Habitat optimizer controls
pub const CREW_SIZE: SliderRange = SliderRange::new("crew_size", "Crew Size", 2.0, 8.0, 4.0, 1.0);
pub const CYLINDER_RADIUS: SliderRange =
    SliderRange::new("radius", "Cylinder Radius (m)", 3.0, 6.0, 4.0, 0.01);
pub const NHV_TARGET: SliderRange =
    SliderRange::new("nhv_target", "NHV Utilization (%)", 60.0, 120.0, 95.0, 1.0);

// Rocket visualizer controls
pub const ROCKET_HEIGHT: SliderRange =
    SliderRange::new("height", "Rocket Body Height (m)", 5.0, 20.0, 10.0, 0.1);
pub const BODY_RADIUS: SliderRange =
    SliderRange::new("body_radius", "Body Radius (m)", 0.5, 3.0, 1.0, 0.05);
pub const NOSE_HEIGHT: SliderRange =
    SliderRange::new("nose_height", "Nose Cone Height (m)", 1.0, 5.0, 2.0, 0.1);
pub const FIN_COUNT: SliderRange =
    SliderRange::new("fin_count", "Number of Fins", 0.0, 6.0, 3.0, 1.0);
pub const FIN_HEIGHT: SliderRange =
    SliderRange::new("fin_height", "Fin Height (m)", 0.2, 2.0, 0.5, 0.05);
pub const FLAME_RADIUS: SliderRange =
    SliderRange::new("flame_radius", "Flame Radius (m)", 0.2, 1.5, 0.5, 0.05);
pub const FLAME_HEIGHT: SliderRange =
    SliderRange::new("flame_height", "Flame Height (m)", 0.5, 2.0, 1.0, 0.05);

/// The three pages offered by the page selector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PageId {
    Assistant,
    Optimizer,
    Visualizer,
}

impl PageId {
    pub const ALL: [PageId; 3] = [PageId::Assistant, PageId::Optimizer, PageId::Visualizer];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Assistant => "AI Assistant",
            Self::Optimizer => "Habitat Optimizer",
            Self::Visualizer => "Rocket Visualization",
        }
    }

    pub fn controls(&self) -> Vec<SliderRange> {
        match self {
            Self::Assistant => Vec::new(),
            Self::Optimizer => vec![CREW_SIZE, CYLINDER_RADIUS, NHV_TARGET],
            Self::Visualizer => vec![
                ROCKET_HEIGHT,
                BODY_RADIUS,
                NOSE_HEIGHT,
                FIN_COUNT,
                FIN_HEIGHT,
                FLAME_RADIUS,
                FLAME_HEIGHT,
            ],
        }
    }
}

/// A page as presented by the page selector, with its bounded controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub title: Cow<'static, str>,
    pub controls: Vec<SliderRange>,
}

impl From<PageId> for Page {
    fn from(id: PageId) -> Self {
        Self {
            id,
            title: Cow::Borrowed(id.title()),
            controls: id.controls(),
        }
    }
}

/// All pages in selector order.
pub fn pages() -> Vec<Page> {
    PageId::ALL.into_iter().map(Page::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_accepts_bounds_inclusive() {
        assert_eq!(CREW_SIZE.check(2.0).unwrap(), 2.0);
        assert_eq!(CREW_SIZE.check(8.0).unwrap(), 8.0);
    }

    #[test]
    fn check_rejects_out_of_range_and_nan() {
        assert!(CYLINDER_RADIUS.check(2.99).is_err());
        assert!(CYLINDER_RADIUS.check(f64::NAN).is_err());
        match NHV_TARGET.check(121.0) {
            Err(AresError::OutOfRange { field, .. }) => assert_eq!(field, "nhv_target"),
            other => panic!("expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn defaults_lie_inside_their_ranges() {
        for page in pages() {
            for control in page.controls {
                assert!(control.check(control.default).is_ok(), "{}", control.name);
            }
        }
    }

    #[test]
    fn pages_are_in_selector_order() {
        let ids: Vec<_> = pages().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, PageId::ALL.to_vec());
    }
}
