use serde::{Deserialize, Serialize};

/// Configuration for the accommodations module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccommodationsConfig {
    /// Category names created at start-up when missing
    #[serde(default = "default_seed_categories")]
    pub seed_categories: Vec<String>,
}

impl Default for AccommodationsConfig {
    fn default() -> Self {
        Self {
            seed_categories: default_seed_categories(),
        }
    }
}

fn default_seed_categories() -> Vec<String> {
    ["Domestic", "Overseas", "Camping"]
        .into_iter()
        .map(String::from)
        .collect()
}
