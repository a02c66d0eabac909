use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One page of the catalog collection, exactly as the service returned it.
///
/// Items stay as `{name, url}` summaries; nothing is resolved or reshaped.
/// The four envelope fields are required. Any other top-level field lands in
/// `extra` and is serialized back out unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingPage {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

impl ListingPage {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(|item| item.name.as_str())
    }
}
