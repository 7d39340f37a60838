use serde::{Deserialize, Serialize};

/// One keyword and the answer given when a query contains it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeywordEntry {
    pub keyword: &'static str,
    pub answer: &'static str,
}

/// Input for the knowledge assistant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskInput {
    #[serde(default)]
    pub query: String,
}

/// What the assistant says back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
    /// Keyword that produced the answer. `None` for the fallback message.
    pub keyword: Option<String>,
    pub matched: bool,
}
