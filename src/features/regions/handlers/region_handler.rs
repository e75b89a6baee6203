use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppQuery;
use crate::features::regions::dtos::{
    ChoiceResponseDto, DistrictListQuery, RegionDistrictsResponseDto, RegionListQuery,
    RegionOrder,
};
use crate::features::regions::services::RegionService;
use crate::shared::types::{ApiResponse, Meta};

// ==================== Region Handlers ====================

/// List all regions
#[utoipa::path(
    get,
    path = "/api/regions",
    params(RegionListQuery),
    responses(
        (status = 200, description = "List of region names", body = ApiResponse<Vec<String>>),
        (status = 400, description = "Invalid order parameter")
    ),
    tag = "regions"
)]
pub async fn list_regions(
    State(service): State<Arc<RegionService>>,
    AppQuery(query): AppQuery<RegionListQuery>,
) -> Result<Json<ApiResponse<Vec<String>>>> {
    let names = match query.order.unwrap_or_default() {
        RegionOrder::Declared => service.list_regions(),
        RegionOrder::Alphabetical => service.list_regions_sorted(),
    };
    let total = names.len();
    let names: Vec<String> = names.into_iter().map(String::from).collect();
    Ok(Json(ApiResponse::success(
        Some(names),
        None,
        Some(Meta::with_total(total)),
    )))
}

/// List state `<select>` options
#[utoipa::path(
    get,
    path = "/api/regions/choices",
    responses(
        (status = 200, description = "Region options, placeholder first", body = ApiResponse<Vec<ChoiceResponseDto>>)
    ),
    tag = "regions"
)]
pub async fn list_region_choices(
    State(service): State<Arc<RegionService>>,
) -> Result<Json<ApiResponse<Vec<ChoiceResponseDto>>>> {
    let dtos: Vec<ChoiceResponseDto> = service
        .region_choices()
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

// ==================== District Handlers ====================

/// List districts in a region
#[utoipa::path(
    get,
    path = "/api/regions/{name}/districts",
    params(
        ("name" = String, Path, description = "Region name, exact spelling (e.g. \"Tamil Nadu\")"),
        DistrictListQuery
    ),
    responses(
        (status = 200, description = "Districts of the region", body = ApiResponse<RegionDistrictsResponseDto>),
        (status = 404, description = "Region not found")
    ),
    tag = "regions"
)]
pub async fn list_districts(
    State(service): State<Arc<RegionService>>,
    Path(name): Path<String>,
    AppQuery(query): AppQuery<DistrictListQuery>,
) -> Result<Json<ApiResponse<RegionDistrictsResponseDto>>> {
    let dto = if query.selectable.unwrap_or(false) {
        RegionDistrictsResponseDto::new(&name, &service.selectable_districts(&name)?)
    } else {
        RegionDistrictsResponseDto::new(&name, service.list_districts(&name)?)
    };
    let total = dto.districts.len();
    Ok(Json(ApiResponse::success(
        Some(dto),
        None,
        Some(Meta::with_total(total)),
    )))
}

/// List district `<select>` options for a region
#[utoipa::path(
    get,
    path = "/api/regions/{name}/districts/choices",
    params(
        ("name" = String, Path, description = "Region name, exact spelling (e.g. \"Tamil Nadu\")")
    ),
    responses(
        (status = 200, description = "District options for the region", body = ApiResponse<Vec<ChoiceResponseDto>>),
        (status = 404, description = "Region not found")
    ),
    tag = "regions"
)]
pub async fn list_district_choices(
    State(service): State<Arc<RegionService>>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<Vec<ChoiceResponseDto>>>> {
    let dtos: Vec<ChoiceResponseDto> = service
        .district_choices(&name)?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}
