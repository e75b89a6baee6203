//! Indian states and union territories with their districts.
//!
//! The directory is a static table compiled into the binary, built once at startup
//! and shared read-only with every handler. Each district list starts with the
//! "Select district" placeholder; the `NULL` region is the fallback used when no
//! state has been chosen.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/regions` | List all regions (`?order=declared\|alphabetical`) |
//! | GET | `/api/regions/choices` | State `<select>` options |
//! | GET | `/api/regions/{name}/districts` | List districts in a region (`?selectable=true` drops the placeholder) |
//! | GET | `/api/regions/{name}/districts/choices` | District `<select>` options |

pub mod data;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use models::RegionDirectory;
pub use services::RegionService;
