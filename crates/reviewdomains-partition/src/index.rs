//! Category → business-id index.

use std::collections::{BTreeMap, HashSet};

use reviewdomains_core::{BusinessRecord, HighLevelCategory};
use tracing::debug;

/// Business ids per category. Categories with no businesses have no entry.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    entries: BTreeMap<HighLevelCategory, HashSet<String>>,
}

impl CategoryIndex {
    /// Tag each business with every category whose display name occurs in its
    /// `categories` string (case-sensitive substring, no tokenization).
    pub fn build(businesses: &[BusinessRecord], categories: &[HighLevelCategory]) -> Self {
        let mut entries = BTreeMap::new();

        for &category in categories {
            let name = category.as_str();
            let ids: HashSet<String> = businesses
                .iter()
                .filter(|b| b.categories.contains(name))
                .map(|b| b.business_id.clone())
                .collect();

            if ids.is_empty() {
                debug!("No businesses tagged {}", name);
                continue;
            }
            entries.insert(category, ids);
        }

        Self { entries }
    }

    /// Business ids for a category, or `None` when the corpus has none.
    pub fn get(&self, category: HighLevelCategory) -> Option<&HashSet<String>> {
        self.entries.get(&category)
    }

    pub fn contains(&self, category: HighLevelCategory) -> bool {
        self.entries.contains_key(&category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in category order.
    pub fn iter(&self) -> impl Iterator<Item = (HighLevelCategory, &HashSet<String>)> {
        self.entries.iter().map(|(c, ids)| (*c, ids))
    }
}
