use actix_web::{get, patch, post, web};
use carta_core::api_models::{
    Category,
    CategoryCreationRequest,
    CategoryUpdateRequest,
    ErrorResponse,
    Item,
    Subcategory,
};
use carta_core::ids::CategoryId;
use carta_database::entities;
use futures_util::StreamExt;
use sqlx::Acquire;

use crate::api::errors::{
    CategoryErrorReason,
    EndpointError,
    EndpointResponseBuilder,
    EndpointResult,
    SubcategoryErrorReason,
};
use crate::api::parse_uuid;
use crate::api::traits::IntoApiModel;
use crate::state::ApplicationState;



/// Create a new category
///
/// The category name must not already be in use; tax settings default
/// to "not applicable" with a zero rate when not provided.
#[utoipa::path(
    post,
    path = "/categories",
    tag = "categories",
    request_body(
        content = CategoryCreationRequest
    ),
    responses(
        (
            status = 201,
            description = "The category has been created.",
            body = Category,
        ),
        (
            status = 409,
            description = "A category with the provided name already exists.",
            body = ErrorResponse,
        ),
        (
            status = 500,
            description = "Internal server error.",
            body = ErrorResponse,
        ),
    )
)]
#[post("")]
pub async fn create_category(
    state: ApplicationState,
    request_body: web::Json<CategoryCreationRequest>,
) -> EndpointResult {
    let mut database_connection = state.acquire_database_connection().await?;
    let mut transaction = database_connection.begin().await?;

    let request_body = request_body.into_inner();


    let category_exists_by_name =
        entities::CategoryQuery::exists_by_name(&mut transaction, &request_body.name).await?;

    if category_exists_by_name {
        return EndpointResponseBuilder::conflict()
            .with_error_reason(CategoryErrorReason::name_already_exists())
            .build();
    }


    let newly_created_category = entities::CategoryMutation::create(
        &mut transaction,
        entities::NewCategory {
            name: request_body.name,
            image_url: request_body.image_url,
            description: request_body.description,
            tax_applicability: request_body.tax_applicability.unwrap_or(false),
            tax: request_body.tax.unwrap_or(0.0),
            tax_type: request_body.tax_type,
        },
    )
    .await?;

    transaction.commit().await?;


    EndpointResponseBuilder::created()
        .with_json_body(newly_created_category.into_api_model())
        .build()
}




/// List all categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    responses(
        (
            status = 200,
            description = "The category list.",
            body = Vec<Category>,
        ),
        (
            status = 500,
            description = "Internal server error.",
            body = ErrorResponse,
        ),
    )
)]
#[get("")]
pub async fn get_all_categories(state: ApplicationState) -> EndpointResult {
    let mut database_connection = state.acquire_database_connection().await?;

    let mut category_stream =
        entities::CategoryQuery::get_all_categories(&mut database_connection).await;


    let mut categories: Vec<Category> = Vec::new();
    while let Some(internal_category) = category_stream.next().await {
        categories.push(internal_category?.into_api_model());
    }


    EndpointResponseBuilder::ok()
        .with_json_body(categories)
        .build()
}




/// Get a category
#[utoipa::path(
    get,
    path = "/categories/{category_id}",
    tag = "categories",
    params(
        (
            "category_id" = String,
            Path,
            format = Uuid,
            description = "UUID of the category."
        )
    ),
    responses(
        (
            status = 200,
            description = "Category information.",
            body = Category,
        ),
        (
            status = 400,
            description = "Invalid UUID path parameter.",
            body = ErrorResponse,
        ),
        (
            status = 404,
            description = "Category does not exist.",
            body = ErrorResponse,
        ),
        (
            status = 500,
            description = "Internal server error.",
            body = ErrorResponse,
        ),
    )
)]
#[get("/{category_id}")]
pub async fn get_specific_category(
    state: ApplicationState,
    parameters: web::Path<(String,)>,
) -> EndpointResult {
    let mut database_connection = state.acquire_database_connection().await?;

    let target_category_id = parse_uuid::<CategoryId>(parameters.into_inner().0)?;


    let category =
        entities::CategoryQuery::get_by_id(&mut database_connection, target_category_id).await?;

    let Some(category) = category else {
        return EndpointResponseBuilder::not_found()
            .with_error_reason(CategoryErrorReason::category_not_found())
            .build();
    };


    EndpointResponseBuilder::ok()
        .with_json_body(category.into_api_model())
        .build()
}




/// Update a category
///
/// Applies a partial update: fields absent from the request body are
/// left untouched. Tax settings of existing subcategories and items are
/// not re-resolved; they keep the values resolved at their creation.
#[utoipa::path(
    patch,
    path = "/categories/{category_id}",
    tag = "categories",
    params(
        (
            "category_id" = String,
            Path,
            format = Uuid,
            description = "UUID of the category to update."
        )
    ),
    request_body(
        content = CategoryUpdateRequest
    ),
    responses(
        (
            status = 200,
            description = "Updated category information.",
            body = Category,
        ),
        (
            status = 400,
            description = "Invalid UUID path parameter, or no fields to update.",
            body = ErrorResponse,
        ),
        (
            status = 404,
            description = "Category does not exist.",
            body = ErrorResponse,
        ),
        (
            status = 409,
            description = "Another category already has the requested name.",
            body = ErrorResponse,
        ),
        (
            status = 500,
            description = "Internal server error.",
            body = ErrorResponse,
        ),
    )
)]
#[patch("/{category_id}")]
pub async fn update_specific_category(
    state: ApplicationState,
    parameters: web::Path<(String,)>,
    request_body: web::Json<CategoryUpdateRequest>,
) -> EndpointResult {
    let mut database_connection = state.acquire_database_connection().await?;
    let mut transaction = database_connection.begin().await?;

    let target_category_id = parse_uuid::<CategoryId>(parameters.into_inner().0)?;

    let request_body = request_body.into_inner();


    if request_body.has_no_fields_to_update() {
        return EndpointResponseBuilder::bad_request()
            .with_error_reason(CategoryErrorReason::no_fields_to_update())
            .build();
    }


    let target_category_exists =
        entities::CategoryQuery::exists_by_id(&mut transaction, target_category_id).await?;

    if !target_category_exists {
        return EndpointResponseBuilder::not_found()
            .with_error_reason(CategoryErrorReason::category_not_found())
            .build();
    }


    let would_conflict_by_name = if let Some(new_name) = request_body.new_name.as_ref() {
        entities::CategoryQuery::exists_by_name(&mut transaction, new_name).await?
    } else {
        false
    };

    if would_conflict_by_name {
        return EndpointResponseBuilder::conflict()
            .with_error_reason(CategoryErrorReason::name_already_exists())
            .build();
    }


    let successfully_updated = entities::CategoryMutation::update(
        &mut transaction,
        target_category_id,
        entities::CategoryValuesToUpdate {
            name: request_body.new_name,
            image_url: request_body.new_image_url,
            description: request_body.new_description,
            tax_applicability: request_body.new_tax_applicability,
            tax: request_body.new_tax,
            tax_type: request_body.new_tax_type,
        },
    )
    .await?;

    if !successfully_updated {
        return Err(EndpointError::invalid_database_state(
            "failed to update a category that existed \
             in a previous call inside the same transaction",
        ));
    }


    let target_category_after_update =
        entities::CategoryQuery::get_by_id(&mut transaction, target_category_id).await?;

    let Some(target_category_after_update) = target_category_after_update else {
        return Err(EndpointError::invalid_database_state(
            "failed to fetch a category that was just updated \
             in a previous call inside the same transaction",
        ));
    };

    transaction.commit().await?;


    EndpointResponseBuilder::ok()
        .with_json_body(target_category_after_update.into_api_model())
        .build()
}




/// List subcategories of a category
///
/// Unlike the item listing below, this endpoint verifies that the
/// parent category exists and responds with a 404 when it doesn't.
#[utoipa::path(
    get,
    path = "/categories/{category_id}/subcategories",
    tag = "categories",
    params(
        (
            "category_id" = String,
            Path,
            format = Uuid,
            description = "UUID of the parent category."
        )
    ),
    responses(
        (
            status = 200,
            description = "Subcategories belonging to the category.",
            body = Vec<Subcategory>,
        ),
        (
            status = 400,
            description = "Invalid UUID path parameter.",
            body = ErrorResponse,
        ),
        (
            status = 404,
            description = "Category does not exist.",
            body = ErrorResponse,
        ),
        (
            status = 500,
            description = "Internal server error.",
            body = ErrorResponse,
        ),
    )
)]
#[get("/{category_id}/subcategories")]
pub async fn get_subcategories_in_category(
    state: ApplicationState,
    parameters: web::Path<(String,)>,
) -> EndpointResult {
    let mut database_connection = state.acquire_database_connection().await?;

    let target_category_id = parse_uuid::<CategoryId>(parameters.into_inner().0)?;


    let target_category_exists =
        entities::CategoryQuery::exists_by_id(&mut database_connection, target_category_id)
            .await?;

    if !target_category_exists {
        return EndpointResponseBuilder::not_found()
            .with_error_reason(SubcategoryErrorReason::parent_category_not_found())
            .build();
    }


    let mut subcategory_stream = entities::SubcategoryQuery::get_all_by_category_id(
        &mut database_connection,
        target_category_id,
    )
    .await;

    let mut subcategories: Vec<Subcategory> = Vec::new();
    while let Some(internal_subcategory) = subcategory_stream.next().await {
        subcategories.push(internal_subcategory?.into_api_model());
    }


    EndpointResponseBuilder::ok()
        .with_json_body(subcategories)
        .build()
}




/// List items of a category
///
/// An unknown category id simply produces an empty list; the parent
/// existence is not checked here.
#[utoipa::path(
    get,
    path = "/categories/{category_id}/items",
    tag = "categories",
    params(
        (
            "category_id" = String,
            Path,
            format = Uuid,
            description = "UUID of the parent category."
        )
    ),
    responses(
        (
            status = 200,
            description = "Items belonging to the category.",
            body = Vec<Item>,
        ),
        (
            status = 400,
            description = "Invalid UUID path parameter.",
            body = ErrorResponse,
        ),
        (
            status = 500,
            description = "Internal server error.",
            body = ErrorResponse,
        ),
    )
)]
#[get("/{category_id}/items")]
pub async fn get_items_in_category(
    state: ApplicationState,
    parameters: web::Path<(String,)>,
) -> EndpointResult {
    let mut database_connection = state.acquire_database_connection().await?;

    let target_category_id = parse_uuid::<CategoryId>(parameters.into_inner().0)?;


    let mut item_stream =
        entities::ItemQuery::get_all_by_category_id(&mut database_connection, target_category_id)
            .await;

    let mut items: Vec<Item> = Vec::new();
    while let Some(internal_item) = item_stream.next().await {
        items.push(internal_item?.into_api_model());
    }


    EndpointResponseBuilder::ok().with_json_body(items).build()
}
