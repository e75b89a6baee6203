use utoipa::{Modify, OpenApi};

use crate::features::regions::{dtos as regions_dtos, handlers as regions_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Regions
        regions_handlers::list_regions,
        regions_handlers::list_region_choices,
        // Districts
        regions_handlers::list_districts,
        regions_handlers::list_district_choices,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Regions
            regions_dtos::RegionOrder,
            regions_dtos::RegionDistrictsResponseDto,
            regions_dtos::ChoiceResponseDto,
            ApiResponse<Vec<String>>,
            ApiResponse<regions_dtos::RegionDistrictsResponseDto>,
            ApiResponse<Vec<regions_dtos::ChoiceResponseDto>>,
        )
    ),
    tags(
        (name = "regions", description = "States, union territories and their districts")
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_region_paths() {
        let openapi = ApiDoc::openapi();
        let paths = &openapi.paths.paths;
        assert!(paths.contains_key("/api/regions"));
        assert!(paths.contains_key("/api/regions/choices"));
        assert!(paths.contains_key("/api/regions/{name}/districts"));
        assert!(paths.contains_key("/api/regions/{name}/districts/choices"));
    }

    fn get_parameters(path: &str) -> Vec<serde_json::Value> {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        doc["paths"][path]["get"]["parameters"]
            .as_array()
            .cloned()
            .unwrap_or_default()
    }

    #[test]
    fn test_region_list_order_is_optional_query_param() {
        let params = get_parameters("/api/regions");
        assert_eq!(params.len(), 1);
        assert_eq!(params[0]["name"], "order");
        assert_eq!(params[0]["in"], "query");
        assert_ne!(params[0]["required"], true);
    }

    #[test]
    fn test_district_list_params_split_path_and_query() {
        let params = get_parameters("/api/regions/{name}/districts");

        let name = params.iter().find(|p| p["name"] == "name").unwrap();
        assert_eq!(name["in"], "path");
        assert_eq!(name["required"], true);

        let selectable = params.iter().find(|p| p["name"] == "selectable").unwrap();
        assert_eq!(selectable["in"], "query");
        assert_ne!(selectable["required"], true);
    }

    #[test]
    fn test_swagger_info_modifier_overrides_info() {
        let mut openapi = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Directory".to_string(),
            version: "9.9.9".to_string(),
            description: "desc".to_string(),
        }
        .modify(&mut openapi);

        assert_eq!(openapi.info.title, "Directory");
        assert_eq!(openapi.info.version, "9.9.9");
        assert_eq!(openapi.info.description.as_deref(), Some("desc"));
    }
}
