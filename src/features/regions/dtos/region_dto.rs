use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::regions::models::Choice;

/// Ordering of the region list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RegionOrder {
    /// Order in which the directory declares regions
    #[default]
    Declared,
    /// Alphabetical, with the `NULL` fallback last
    Alphabetical,
}

/// Query parameters for listing regions
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct RegionListQuery {
    /// `declared` (default) or `alphabetical`
    #[param(example = "alphabetical")]
    pub order: Option<RegionOrder>,
}

/// Query parameters for listing a region's districts
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct DistrictListQuery {
    /// Drop the "Select district" placeholder (default: false)
    pub selectable: Option<bool>,
}

/// Response DTO for a region's district list
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegionDistrictsResponseDto {
    pub region: String,
    pub districts: Vec<String>,
}

impl RegionDistrictsResponseDto {
    pub fn new(region: &str, districts: &[&str]) -> Self {
        Self {
            region: region.to_string(),
            districts: districts.iter().map(|d| d.to_string()).collect(),
        }
    }
}

/// Response DTO for a `<select>` option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceResponseDto {
    pub value: String,
    pub label: String,
}

impl From<Choice> for ChoiceResponseDto {
    fn from(choice: Choice) -> Self {
        Self {
            value: choice.value.to_string(),
            label: choice.label.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_order_deserializes_lowercase() {
        let order: RegionOrder = serde_json::from_str("\"alphabetical\"").unwrap();
        assert_eq!(order, RegionOrder::Alphabetical);
        assert!(serde_json::from_str::<RegionOrder>("\"random\"").is_err());
        assert_eq!(RegionOrder::default(), RegionOrder::Declared);
    }

    #[test]
    fn test_choice_dto_from_choice() {
        let dto: ChoiceResponseDto = Choice::new("", "Select a State").into();
        assert_eq!(dto.value, "");
        assert_eq!(dto.label, "Select a State");
    }
}
