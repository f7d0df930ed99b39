//! OpenAPI documentation for the entire public API,
//! served as a plain JSON document.

use actix_web::{get, HttpResponse, Responder};
use utoipa::OpenApi;


#[derive(OpenApi)]
#[openapi(
    info(
        title = "Carta",
        description = "API of the Carta menu catalog service.",
    ),
    paths(
        crate::api::categories::create_category,
        crate::api::categories::get_all_categories,
        crate::api::categories::get_specific_category,
        crate::api::categories::update_specific_category,
        crate::api::categories::get_subcategories_in_category,
        crate::api::categories::get_items_in_category,
        crate::api::subcategories::create_subcategory,
        crate::api::subcategories::get_all_subcategories,
        crate::api::subcategories::get_specific_subcategory,
        crate::api::subcategories::update_specific_subcategory,
        crate::api::subcategories::delete_specific_subcategory,
        crate::api::subcategories::get_items_in_subcategory,
        crate::api::items::create_item,
        crate::api::items::get_all_items,
        crate::api::items::search_items,
        crate::api::items::get_specific_item,
        crate::api::items::update_specific_item,
        crate::api::items::delete_specific_item,
        crate::api::health::ping,
    ),
    components(
        schemas(
            carta_core::api_models::Category,
            carta_core::api_models::CategoryCreationRequest,
            carta_core::api_models::CategoryUpdateRequest,
            carta_core::api_models::Subcategory,
            carta_core::api_models::SubcategoryCreationRequest,
            carta_core::api_models::SubcategoryUpdateRequest,
            carta_core::api_models::Item,
            carta_core::api_models::ItemCreationRequest,
            carta_core::api_models::ItemUpdateRequest,
            carta_core::api_models::ErrorResponse,
            carta_core::tax::TaxType,
        )
    )
)]
pub struct ApiDocumentation;


#[get("/api-docs/openapi.json")]
pub async fn openapi_document() -> impl Responder {
    HttpResponse::Ok().json(ApiDocumentation::openapi())
}
