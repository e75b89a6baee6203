use std::collections::HashMap;

use crate::features::regions::data::REGION_TABLE;

/// A state, union territory or the `NULL` fallback, with its district list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub name: &'static str,
    /// Authored order, sentinel first
    pub districts: &'static [&'static str],
}

/// Immutable state → districts directory.
///
/// Built once from a static table and shared by reference afterwards. Regions keep
/// the order in which the table declares them; lookups go through a name index.
#[derive(Debug, Clone)]
pub struct RegionDirectory {
    regions: Vec<Region>,
    index: HashMap<&'static str, usize>,
}

impl RegionDirectory {
    pub fn new() -> Self {
        Self::from_table(REGION_TABLE)
    }

    /// Build a directory from `(region, districts)` rows. A repeated region name
    /// keeps its first row.
    pub fn from_table(table: &'static [(&'static str, &'static [&'static str])]) -> Self {
        let mut regions = Vec::with_capacity(table.len());
        let mut index = HashMap::with_capacity(table.len());

        for &(name, districts) in table {
            if index.contains_key(name) {
                tracing::warn!("Duplicate region '{}' in table, keeping first entry", name);
                continue;
            }
            index.insert(name, regions.len());
            regions.push(Region { name, districts });
        }

        Self { regions, index }
    }

    /// Regions in declaration order
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn get(&self, name: &str) -> Option<&Region> {
        self.index.get(name).map(|&i| &self.regions[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl Default for RegionDirectory {
    fn default() -> Self {
        Self::new()
    }
}
