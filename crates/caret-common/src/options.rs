//! Options shared by all tree queries.
//!
//! Options are plain data. Callers either use `AnalysisOptions::default()`
//! or load them from the `caret` section of an editor settings file:
//!
//! ```json
//! { "constructorName": "<init>", "maxTraversalDepth": 1024 }
//! ```

use crate::limits::MAX_TRAVERSAL_DEPTH;
use serde::{Deserialize, Serialize};

/// Name the front end gives to constructors in the tree.
pub const DEFAULT_CONSTRUCTOR_NAME: &str = "<init>";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisOptions {
    /// Internal method name marking a constructor. Name lookups for such
    /// methods use the simple name of the enclosing type instead.
    pub constructor_name: String,
    /// Depth bound for recursive tree walks.
    pub max_traversal_depth: u32,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            constructor_name: DEFAULT_CONSTRUCTOR_NAME.to_string(),
            max_traversal_depth: MAX_TRAVERSAL_DEPTH,
        }
    }
}

impl AnalysisOptions {
    /// Parse options from JSON. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    #[must_use]
    pub fn with_max_traversal_depth(mut self, depth: u32) -> Self {
        self.max_traversal_depth = depth;
        self
    }

    /// Whether `name` is the constructor marker.
    #[inline]
    pub fn is_constructor_name(&self, name: &str) -> bool {
        name == self.constructor_name
    }
}
