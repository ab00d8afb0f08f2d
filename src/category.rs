use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use tracing::debug;

use crate::util::read_json;

const DEFAULT_GROUPS: [(&str, &str); 14] = [
    ("buddhism", "spirituality"),
    ("christianity", "spirituality"),
    ("hinduism", "spirituality"),
    ("islam", "spirituality"),
    ("judaism", "spirituality"),
    ("religion", "spirituality"),
    ("true", "true-crime"),
    ("society", "society-culture"),
    ("music", "arts"),
    ("tv", "arts"),
    ("news", "news-government"),
    ("government", "news-government"),
    ("technology", "science-technology"),
    ("science", "science-technology"),
];

/// Supercategory to analysis-group lookup. Unmapped names pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMapping {
    groups: BTreeMap<String, String>,
}

impl Default for CategoryMapping {
    fn default() -> Self {
        Self::new(
            DEFAULT_GROUPS
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        )
    }
}

impl CategoryMapping {
    pub fn new(groups: BTreeMap<String, String>) -> Self {
        Self { groups }
    }

    /// Reads a flat JSON object such as `{"tv": "arts"}`.
    pub fn from_json(path: &Path) -> Result<Self> {
        let groups: BTreeMap<String, String> = read_json(path)?;
        debug!(path = %path.display(), entries = groups.len(), "loaded category mapping");
        Ok(Self::new(groups))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn group<'a>(&'a self, supercategory: &'a str) -> &'a str {
        self.groups
            .get(supercategory)
            .map(String::as_str)
            .unwrap_or(supercategory)
    }
}

/// First name of a category list, cut at the first `-`.
///
/// `"tv-film,arts"` yields `"tv"`.
pub fn extract_supercategory(category: &str) -> &str {
    let first = category.split(',').next().unwrap_or(category);
    first.split('-').next().unwrap_or(first)
}

pub fn grouping<'a>(supercategory: &'a str, mapping: Option<&'a CategoryMapping>) -> &'a str {
    match mapping {
        Some(mapping) => mapping.group(supercategory),
        None => DEFAULT_GROUPS
            .iter()
            .find(|(from, _)| *from == supercategory)
            .map(|(_, to)| *to)
            .unwrap_or(supercategory),
    }
}

pub fn normalize_category<'a>(category: &'a str, mapping: Option<&'a CategoryMapping>) -> &'a str {
    grouping(extract_supercategory(category), mapping)
}
