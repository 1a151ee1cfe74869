//! Report configuration.

use serde::{Deserialize, Serialize};

use crate::application::DEFAULT_TOP_RISKS;

/// Recalculation report configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Number of highest scoring risks listed.
    #[serde(default = "default_top_risks")]
    pub top_risks: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_risks: default_top_risks(),
        }
    }
}

const fn default_top_risks() -> usize {
    DEFAULT_TOP_RISKS
}
