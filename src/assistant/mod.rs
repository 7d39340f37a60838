//! Keyword lookup over a fixed table of rocket and habitat terms.
//!
//! Matching is "first substring hit in table order": the lower-cased query is
//! tested against each keyword in declaration order and the first keyword that
//! occurs anywhere in it wins. This is neither longest-match nor word-boundary
//! matching, so "engineering" answers with the `engine` entry and a query
//! mentioning both "rocket" and "fuel" always gets the rocket answer.

use crate::error::{AresError, Result};
use crate::models::{AskResponse, KeywordEntry};

pub const FALLBACK_ANSWER: &str =
    "ARES: I’m still learning about this topic! You can ask about rockets, fuel, habitat design, or space terms.";

const fn entry(keyword: &'static str, answer: &'static str) -> KeywordEntry {
    KeywordEntry { keyword, answer }
}

/// Keywords are lower case; table order is match priority.
pub static KNOWLEDGE: &[KeywordEntry] = &[
    // Rocket basics
    entry(
        "rocket",
        "A rocket is a vehicle designed to travel into space by producing thrust through fuel combustion.",
    ),
    entry(
        "fuel",
        "Rocket fuel provides the chemical energy converted into thrust to propel the rocket.",
    ),
    entry(
        "oxidizer",
        "An oxidizer provides oxygen to fuel in space, since there is no atmospheric oxygen.",
    ),
    entry("engine", "The rocket engine generates thrust to lift the rocket off the ground."),
    entry(
        "thrust",
        "Thrust is the force that propels the rocket forward, overcoming gravity and drag.",
    ),
    entry(
        "payload",
        "Payload is the cargo a rocket carries, like satellites, instruments, or crew.",
    ),
    entry(
        "stages",
        "Rockets often have multiple stages that detach to reduce weight and improve efficiency.",
    ),
    entry("fin", "Fins stabilize the rocket during flight and help maintain proper orientation."),
    entry(
        "nose cone",
        "The nose cone is the aerodynamic tip of the rocket that reduces drag during ascent.",
    ),
    entry("launch", "Launch is the process of sending a rocket from Earth into space."),
    entry(
        "orbit",
        "An orbit is the path a spacecraft follows around a celestial body due to gravity.",
    ),
    entry(
        "gravity",
        "Gravity is the force pulling objects toward each other; rockets must overcome it to launch.",
    ),
    // Habitat basics
    entry(
        "habitat",
        "A space habitat is a structure designed to support life in space, providing air, water, temperature control, and space for activities.",
    ),
    entry("nhv", "NHV stands for Net Habitable Volume; it’s the usable living space in a habitat."),
    entry("crew", "Crew refers to the astronauts or people living in the habitat."),
    entry("sleep volume", "Sleep volume is the space allocated per person for sleeping and rest."),
    entry(
        "social volume",
        "Social volume is the shared space for communal activities and recreation.",
    ),
    entry(
        "exercise volume",
        "Exercise volume is the area allocated for physical activity to maintain health in microgravity.",
    ),
    // Space and physics
    entry(
        "microgravity",
        "Microgravity is the condition in space where objects appear weightless.",
    ),
    entry("vacuum", "Space is a vacuum, meaning it has no atmosphere, air, or drag."),
    entry(
        "life support",
        "Life support systems provide oxygen, remove CO2, regulate temperature, and manage water and waste.",
    ),
    entry(
        "radiation",
        "Space radiation comes from the sun and cosmic rays; habitats must shield crew from it.",
    ),
    entry(
        "spacewalk",
        "A spacewalk is when an astronaut exits the habitat to work outside in space with a suit.",
    ),
    // App terms
    entry(
        "comfort score",
        "Comfort score is a numerical value predicting crew satisfaction based on habitat design.",
    ),
    entry(
        "optimization",
        "Optimization means adjusting habitat parameters to maximize comfort or efficiency.",
    ),
    entry(
        "layout",
        "Layout refers to how the habitat spaces are arranged, like sleep, social, and exercise areas.",
    ),
];

/// Read-only view over an ordered keyword table.
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeBase {
    entries: &'static [KeywordEntry],
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new(KNOWLEDGE)
    }
}

impl KnowledgeBase {
    pub const fn new(entries: &'static [KeywordEntry]) -> Self {
        Self { entries }
    }

    /// First entry whose keyword occurs in `query`, in table order.
    ///
    /// Returns `Err(MissingQuery)` for blank input instead of searching, and
    /// `Ok(None)` when nothing matches.
    pub fn lookup(&self, query: &str) -> Result<Option<&'static KeywordEntry>> {
        if query.trim().is_empty() {
            return Err(AresError::MissingQuery);
        }

        let text = query.to_lowercase();
        Ok(self.entries.iter().find(|e| text.contains(e.keyword)))
    }

    /// The answer text for `query`, falling back to [`FALLBACK_ANSWER`].
    pub fn answer(&self, query: &str) -> Result<AskResponse> {
        let response = match self.lookup(query)? {
            Some(entry) => {
                tracing::debug!("Query matched keyword '{}'", entry.keyword);
                AskResponse {
                    answer: entry.answer.to_string(),
                    keyword: Some(entry.keyword.to_string()),
                    matched: true,
                }
            }
            None => {
                tracing::debug!("No keyword matched query");
                AskResponse {
                    answer: FALLBACK_ANSWER.to_string(),
                    keyword: None,
                    matched: false,
                }
            }
        };
        Ok(response)
    }
}
