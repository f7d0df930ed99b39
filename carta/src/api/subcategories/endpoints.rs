use actix_web::{delete, get, patch, post, web};
use carta_core::api_models::{
    ErrorResponse,
    Item,
    Subcategory,
    SubcategoryCreationRequest,
    SubcategoryUpdateRequest,
};
use carta_core::ids::{CategoryId, SubcategoryId};
use carta_core::tax::{resolve_subcategory_tax, TaxDefaults, TaxOverrides};
use carta_database::entities;
use futures_util::StreamExt;
use sqlx::Acquire;
use tracing::debug;

use super::model_impls::IntoApiModelWithCategoryName;
use crate::api::errors::{
    EndpointError,
    EndpointResponseBuilder,
    EndpointResult,
    SubcategoryErrorReason,
};
use crate::api::parse_uuid;
use crate::api::traits::IntoApiModel;
use crate::state::ApplicationState;



/// Create a new subcategory
///
/// The referenced parent category must exist. Tax settings not provided
/// in the request are inherited from the parent category at this moment;
/// later changes to the category do not propagate back.
#[utoipa::path(
    post,
    path = "/subcategories",
    tag = "subcategories",
    request_body(
        content = SubcategoryCreationRequest
    ),
    responses(
        (
            status = 201,
            description = "The subcategory has been created.",
            body = Subcategory,
        ),
        (
            status = 404,
            description = "The referenced parent category does not exist.",
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
pub async fn create_subcategory(
    state: ApplicationState,
    request_body: web::Json<SubcategoryCreationRequest>,
) -> EndpointResult {
    let mut database_connection = state.acquire_database_connection().await?;
    let mut transaction = database_connection.begin().await?;

    let request_body = request_body.into_inner();

    let parent_category_id = CategoryId::new(request_body.category_id);


    let parent_category =
        entities::CategoryQuery::get_by_id(&mut transaction, parent_category_id).await?;

    let Some(parent_category) = parent_category else {
        return EndpointResponseBuilder::not_found()
            .with_error_reason(SubcategoryErrorReason::parent_category_not_found())
            .build();
    };


    let resolved_tax = resolve_subcategory_tax(
        TaxOverrides::new(request_body.tax_applicability, request_body.tax),
        TaxDefaults {
            applicability: parent_category.tax_applicability,
            rate: parent_category.tax,
        },
    );


    let newly_created_subcategory = entities::SubcategoryMutation::create(
        &mut transaction,
        entities::NewSubcategory {
            name: request_body.name,
            image_url: request_body.image_url,
            description: request_body.description,
            category_id: parent_category_id,
            tax_applicability: resolved_tax.applicability,
            tax: resolved_tax.rate,
        },
    )
    .await?;

    transaction.commit().await?;


    EndpointResponseBuilder::created()
        .with_json_body(
            newly_created_subcategory.into_api_model_with_category_name(parent_category.name),
        )
        .build()
}




/// List all subcategories
///
/// Every entry carries its parent category's name, joined in at read time.
#[utoipa::path(
    get,
    path = "/subcategories",
    tag = "subcategories",
    responses(
        (
            status = 200,
            description = "The subcategory list.",
            body = Vec<Subcategory>,
        ),
        (
            status = 500,
            description = "Internal server error.",
            body = ErrorResponse,
        ),
    )
)]
#[get("")]
pub async fn get_all_subcategories(state: ApplicationState) -> EndpointResult {
    let mut database_connection = state.acquire_database_connection().await?;

    let mut subcategory_stream =
        entities::SubcategoryQuery::get_all_subcategories(&mut database_connection).await;


    let mut subcategories: Vec<Subcategory> = Vec::new();
    while let Some(internal_subcategory) = subcategory_stream.next().await {
        subcategories.push(internal_subcategory?.into_api_model());
    }


    EndpointResponseBuilder::ok()
        .with_json_body(subcategories)
        .build()
}




/// Get a subcategory
#[utoipa::path(
    get,
    path = "/subcategories/{subcategory_id}",
    tag = "subcategories",
    params(
        (
            "subcategory_id" = String,
            Path,
            format = Uuid,
            description = "UUID of the subcategory."
        )
    ),
    responses(
        (
            status = 200,
            description = "Subcategory information.",
            body = Subcategory,
        ),
        (
            status = 400,
            description = "Invalid UUID path parameter.",
            body = ErrorResponse,
        ),
        (
            status = 404,
            description = "Subcategory does not exist.",
            body = ErrorResponse,
        ),
        (
            status = 500,
            description = "Internal server error.",
            body = ErrorResponse,
        ),
    )
)]
#[get("/{subcategory_id}")]
pub async fn get_specific_subcategory(
    state: ApplicationState,
    parameters: web::Path<(String,)>,
) -> EndpointResult {
    let mut database_connection = state.acquire_database_connection().await?;

    let target_subcategory_id = parse_uuid::<SubcategoryId>(parameters.into_inner().0)?;


    let subcategory =
        entities::SubcategoryQuery::get_by_id(&mut database_connection, target_subcategory_id)
            .await?;

    let Some(subcategory) = subcategory else {
        return EndpointResponseBuilder::not_found()
            .with_error_reason(SubcategoryErrorReason::subcategory_not_found())
            .build();
    };


    EndpointResponseBuilder::ok()
        .with_json_body(subcategory.into_api_model())
        .build()
}




/// Update a subcategory
///
/// Applies a partial update restricted to the subcategory's own fields;
/// the parent category reference is immutable, and tax fields are stored
/// as-is without re-running inheritance (existing items are unaffected).
#[utoipa::path(
    patch,
    path = "/subcategories/{subcategory_id}",
    tag = "subcategories",
    params(
        (
            "subcategory_id" = String,
            Path,
            format = Uuid,
            description = "UUID of the subcategory to update."
        )
    ),
    request_body(
        content = SubcategoryUpdateRequest
    ),
    responses(
        (
            status = 200,
            description = "Updated subcategory information.",
            body = Subcategory,
        ),
        (
            status = 400,
            description = "Invalid UUID path parameter, or no fields to update.",
            body = ErrorResponse,
        ),
        (
            status = 404,
            description = "Subcategory does not exist.",
            body = ErrorResponse,
        ),
        (
            status = 500,
            description = "Internal server error.",
            body = ErrorResponse,
        ),
    )
)]
#[patch("/{subcategory_id}")]
pub async fn update_specific_subcategory(
    state: ApplicationState,
    parameters: web::Path<(String,)>,
    request_body: web::Json<SubcategoryUpdateRequest>,
) -> EndpointResult {
    let mut database_connection = state.acquire_database_connection().await?;
    let mut transaction = database_connection.begin().await?;

    let target_subcategory_id = parse_uuid::<SubcategoryId>(parameters.into_inner().0)?;

    let request_body = request_body.into_inner();


    if request_body.has_no_fields_to_update() {
        return EndpointResponseBuilder::bad_request()
            .with_error_reason(SubcategoryErrorReason::no_fields_to_update())
            .build();
    }


    let target_subcategory_exists =
        entities::SubcategoryQuery::exists_by_id(&mut transaction, target_subcategory_id).await?;

    if !target_subcategory_exists {
        return EndpointResponseBuilder::not_found()
            .with_error_reason(SubcategoryErrorReason::subcategory_not_found())
            .build();
    }


    let successfully_updated = entities::SubcategoryMutation::update(
        &mut transaction,
        target_subcategory_id,
        entities::SubcategoryValuesToUpdate {
            name: request_body.new_name,
            image_url: request_body.new_image_url,
            description: request_body.new_description,
            tax_applicability: request_body.new_tax_applicability,
            tax: request_body.new_tax,
        },
    )
    .await?;

    if !successfully_updated {
        return Err(EndpointError::invalid_database_state(
            "failed to update a subcategory that existed \
             in a previous call inside the same transaction",
        ));
    }


    let target_subcategory_after_update =
        entities::SubcategoryQuery::get_by_id(&mut transaction, target_subcategory_id).await?;

    let Some(target_subcategory_after_update) = target_subcategory_after_update else {
        return Err(EndpointError::invalid_database_state(
            "failed to fetch a subcategory that was just updated \
             in a previous call inside the same transaction",
        ));
    };

    transaction.commit().await?;


    EndpointResponseBuilder::ok()
        .with_json_body(target_subcategory_after_update.into_api_model())
        .build()
}




/// Delete a subcategory
///
/// Items referencing the deleted subcategory are not deleted with it;
/// their subcategory reference is cleared instead. Both steps happen
/// inside a single transaction, so a failed cleanup never leaves items
/// pointing at a missing subcategory.
#[utoipa::path(
    delete,
    path = "/subcategories/{subcategory_id}",
    tag = "subcategories",
    params(
        (
            "subcategory_id" = String,
            Path,
            format = Uuid,
            description = "UUID of the subcategory to delete."
        )
    ),
    responses(
        (
            status = 200,
            description = "Subcategory has been deleted; items under it were orphaned.",
        ),
        (
            status = 400,
            description = "Invalid UUID path parameter.",
            body = ErrorResponse,
        ),
        (
            status = 404,
            description = "Subcategory does not exist.",
            body = ErrorResponse,
        ),
        (
            status = 500,
            description = "Internal server error.",
            body = ErrorResponse,
        ),
    )
)]
#[delete("/{subcategory_id}")]
pub async fn delete_specific_subcategory(
    state: ApplicationState,
    parameters: web::Path<(String,)>,
) -> EndpointResult {
    let mut database_connection = state.acquire_database_connection().await?;
    let mut transaction = database_connection.begin().await?;

    let target_subcategory_id = parse_uuid::<SubcategoryId>(parameters.into_inner().0)?;


    let target_subcategory_exists =
        entities::SubcategoryQuery::exists_by_id(&mut transaction, target_subcategory_id).await?;

    if !target_subcategory_exists {
        return EndpointResponseBuilder::not_found()
            .with_error_reason(SubcategoryErrorReason::subcategory_not_found())
            .build();
    }


    let successfully_deleted =
        entities::SubcategoryMutation::delete(&mut transaction, target_subcategory_id).await?;

    if !successfully_deleted {
        return Err(EndpointError::invalid_database_state(
            "failed to delete a subcategory that \
             just existed in the same transaction",
        ));
    }


    let orphaned_item_count = entities::ItemMutation::unlink_all_from_subcategory(
        &mut transaction,
        target_subcategory_id,
    )
    .await?;

    transaction.commit().await?;

    debug!(
        subcategory_id = %target_subcategory_id,
        orphaned_item_count,
        "Deleted subcategory and cleared references from its items."
    );


    EndpointResponseBuilder::ok().build()
}




/// List items of a subcategory
///
/// An unknown subcategory id simply produces an empty list; the parent
/// existence is not checked here.
#[utoipa::path(
    get,
    path = "/subcategories/{subcategory_id}/items",
    tag = "subcategories",
    params(
        (
            "subcategory_id" = String,
            Path,
            format = Uuid,
            description = "UUID of the parent subcategory."
        )
    ),
    responses(
        (
            status = 200,
            description = "Items belonging to the subcategory.",
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
#[get("/{subcategory_id}/items")]
pub async fn get_items_in_subcategory(
    state: ApplicationState,
    parameters: web::Path<(String,)>,
) -> EndpointResult {
    let mut database_connection = state.acquire_database_connection().await?;

    let target_subcategory_id = parse_uuid::<SubcategoryId>(parameters.into_inner().0)?;


    let mut item_stream = entities::ItemQuery::get_all_by_subcategory_id(
        &mut database_connection,
        target_subcategory_id,
    )
    .await;

    let mut items: Vec<Item> = Vec::new();
    while let Some(internal_item) = item_stream.next().await {
        items.push(internal_item?.into_api_model());
    }


    EndpointResponseBuilder::ok().with_json_body(items).build()
}
