use crate::core::error::{AppError, Result};
use crate::features::regions::models::{Choice, Region, RegionDirectory};
use crate::shared::constants::{
    NULL_REGION, SELECT_DISTRICT, SELECT_DISTRICT_LABEL, SELECT_STATE_LABEL,
};

/// Read-only lookups over the state → districts directory
pub struct RegionService {
    directory: RegionDirectory,
}

impl RegionService {
    pub fn new(directory: RegionDirectory) -> Self {
        Self { directory }
    }

    pub fn region_count(&self) -> usize {
        self.directory.len()
    }

    pub fn contains_region(&self, name: &str) -> bool {
        self.directory.contains(name)
    }

    // ==================== Region Methods ====================

    /// List all region names in declaration order
    pub fn list_regions(&self) -> Vec<&'static str> {
        self.directory.regions().iter().map(|r| r.name).collect()
    }

    /// List region names alphabetically, with the `NULL` fallback last
    pub fn list_regions_sorted(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self
            .list_regions()
            .into_iter()
            .filter(|name| *name != NULL_REGION)
            .collect();
        names.sort_unstable();

        if self.contains_region(NULL_REGION) {
            names.push(NULL_REGION);
        }

        names
    }

    /// Placeholder option followed by every region, in form order
    pub fn region_choices(&self) -> Vec<Choice> {
        std::iter::once(Choice::new("", SELECT_STATE_LABEL))
            .chain(self.list_regions_sorted().into_iter().map(Choice::named))
            .collect()
    }

    // ==================== District Methods ====================

    /// List a region's districts, sentinel included
    pub fn list_districts(&self, region: &str) -> Result<&'static [&'static str]> {
        Ok(self.find_region(region)?.districts)
    }

    /// List the districts a user can actually pick: no sentinel, no blanks.
    /// The `NULL` region yields only `NULL`.
    pub fn selectable_districts(&self, region: &str) -> Result<Vec<&'static str>> {
        let districts = self.list_districts(region)?;

        if region == NULL_REGION {
            return Ok(vec![NULL_REGION]);
        }

        Ok(districts
            .iter()
            .copied()
            .filter(|d| !d.is_empty() && *d != SELECT_DISTRICT)
            .collect())
    }

    /// Options for the district `<select>` of a region
    pub fn district_choices(&self, region: &str) -> Result<Vec<Choice>> {
        let districts = self.selectable_districts(region)?;

        if region == NULL_REGION {
            return Ok(vec![Choice::named(NULL_REGION)]);
        }

        Ok(std::iter::once(Choice::new("", SELECT_DISTRICT_LABEL))
            .chain(districts.into_iter().map(Choice::named))
            .collect())
    }

    fn find_region(&self, name: &str) -> Result<&Region> {
        self.directory.get(name).ok_or_else(|| {
            tracing::debug!("Region lookup miss: {:?}", name);
            AppError::NotFound(format!("Region '{}' not found", name))
        })
    }
}

impl Default for RegionService {
    fn default() -> Self {
        Self::new(RegionDirectory::new())
    }
}
