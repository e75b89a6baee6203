use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::regions::handlers;
use crate::features::regions::services::RegionService;

/// Create routes for the regions feature
pub fn routes(service: Arc<RegionService>) -> Router {
    Router::new()
        // Region routes
        .route("/api/regions", get(handlers::list_regions))
        .route("/api/regions/choices", get(handlers::list_region_choices))
        // District routes
        .route(
            "/api/regions/{name}/districts",
            get(handlers::list_districts),
        )
        .route(
            "/api/regions/{name}/districts/choices",
            get(handlers::list_district_choices),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;
    use serde_json::Value;

    use crate::features::regions::dtos::{ChoiceResponseDto, RegionDistrictsResponseDto};
    use crate::shared::types::ApiResponse;

    fn server() -> TestServer {
        TestServer::new(routes(Arc::new(RegionService::default()))).unwrap()
    }

    #[tokio::test]
    async fn test_list_regions_declared_order() {
        let response = server().get("/api/regions").await;
        response.assert_status_ok();

        let body: ApiResponse<Vec<String>> = response.json();
        assert!(body.success);
        let names = body.data.unwrap();
        assert_eq!(names.first().map(String::as_str), Some("Andhra Pradesh"));
        assert_eq!(names.last().map(String::as_str), Some("NULL"));
        assert_eq!(body.meta.unwrap().total, names.len() as i64);
    }

    #[tokio::test]
    async fn test_list_regions_alphabetical_order() {
        let response = server()
            .get("/api/regions")
            .add_query_param("order", "alphabetical")
            .await;
        response.assert_status_ok();

        let body: ApiResponse<Vec<String>> = response.json();
        let names = body.data.unwrap();
        assert_eq!(
            names.first().map(String::as_str),
            Some("Andaman and Nicobar")
        );
        assert_eq!(names.last().map(String::as_str), Some("NULL"));
    }

    #[tokio::test]
    async fn test_list_regions_rejects_unknown_order() {
        let response = server()
            .get("/api/regions")
            .add_query_param("order", "random")
            .await;
        response.assert_status_bad_request();

        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_list_districts_goa() {
        let response = server().get("/api/regions/Goa/districts").await;
        response.assert_status_ok();

        let body: ApiResponse<RegionDistrictsResponseDto> = response.json();
        let dto = body.data.unwrap();
        assert_eq!(dto.region, "Goa");
        assert_eq!(dto.districts, vec!["Select district", "North Goa", "South Goa"]);
        assert_eq!(body.meta.unwrap().total, 3);
    }

    #[tokio::test]
    async fn test_list_districts_decodes_spaces() {
        let response = server()
            .get("/api/regions/Dadra%20and%20Nagar%20Haveli/districts")
            .await;
        response.assert_status_ok();

        let body: ApiResponse<RegionDistrictsResponseDto> = response.json();
        assert_eq!(
            body.data.unwrap().districts,
            vec!["Select district", "Dadra and Nagar Haveli"]
        );
    }

    #[tokio::test]
    async fn test_list_selectable_districts() {
        let response = server()
            .get("/api/regions/Chandigarh/districts")
            .add_query_param("selectable", true)
            .await;
        response.assert_status_ok();

        let body: ApiResponse<RegionDistrictsResponseDto> = response.json();
        assert_eq!(body.data.unwrap().districts, vec!["Chandigarh"]);
    }

    #[tokio::test]
    async fn test_list_districts_unknown_region_is_404() {
        let response = server().get("/api/regions/Atlantis/districts").await;
        response.assert_status_not_found();

        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body["message"].as_str().unwrap().contains("Atlantis"));
    }

    #[tokio::test]
    async fn test_list_district_choices_null_region() {
        let response = server().get("/api/regions/NULL/districts/choices").await;
        response.assert_status_ok();

        let body: ApiResponse<Vec<ChoiceResponseDto>> = response.json();
        assert_eq!(
            body.data.unwrap(),
            vec![ChoiceResponseDto {
                value: "NULL".to_string(),
                label: "NULL".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_list_region_choices() {
        let response = server().get("/api/regions/choices").await;
        response.assert_status_ok();

        let body: ApiResponse<Vec<ChoiceResponseDto>> = response.json();
        let choices = body.data.unwrap();
        assert_eq!(choices[0].value, "");
        assert_eq!(choices[0].label, "Select a State");
    }
}
