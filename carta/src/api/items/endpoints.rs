use actix_web::{delete, get, patch, post, web};
use carta_core::api_models::{
    ErrorResponse,
    Item,
    ItemCreationRequest,
    ItemSearchParameters,
    ItemUpdateRequest,
};
use carta_core::ids::{CategoryId, ItemId, SubcategoryId};
use carta_core::tax::{resolve_item_tax, TaxDefaults, TaxOverrides};
use carta_database::entities;
use futures_util::StreamExt;
use sqlx::Acquire;

use super::model_impls::IntoApiModelWithParentNames;
use crate::api::errors::{
    EndpointError,
    EndpointResponseBuilder,
    EndpointResult,
    ItemErrorReason,
};
use crate::api::parse_uuid;
use crate::api::traits::IntoApiModel;
use crate::state::ApplicationState;



/// Create a new item
///
/// The referenced category must exist; when a subcategory is referenced
/// as well, it must exist *and* belong to that same category. Tax fields
/// not provided in the request are resolved at this moment with the
/// item > subcategory > category priority; later parent edits do not
/// propagate back.
#[utoipa::path(
    post,
    path = "/items",
    tag = "items",
    request_body(
        content = ItemCreationRequest
    ),
    responses(
        (
            status = 201,
            description = "The item has been created.",
            body = Item,
        ),
        (
            status = 400,
            description = "The referenced subcategory does not belong \
                           to the referenced category.",
            body = ErrorResponse,
        ),
        (
            status = 404,
            description = "The referenced category or subcategory does not exist.",
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
pub async fn create_item(
    state: ApplicationState,
    request_body: web::Json<ItemCreationRequest>,
) -> EndpointResult {
    let mut database_connection = state.acquire_database_connection().await?;
    let mut transaction = database_connection.begin().await?;

    let request_body = request_body.into_inner();

    let parent_category_id = CategoryId::new(request_body.category_id);


    let parent_category =
        entities::CategoryQuery::get_by_id(&mut transaction, parent_category_id).await?;

    let Some(parent_category) = parent_category else {
        return EndpointResponseBuilder::not_found()
            .with_error_reason(ItemErrorReason::parent_category_not_found())
            .build();
    };


    let parent_subcategory = match request_body.subcategory_id {
        Some(subcategory_uuid) => {
            let parent_subcategory_id = SubcategoryId::new(subcategory_uuid);

            let parent_subcategory =
                entities::SubcategoryQuery::get_by_id(&mut transaction, parent_subcategory_id)
                    .await?;

            let Some(parent_subcategory) = parent_subcategory else {
                return EndpointResponseBuilder::not_found()
                    .with_error_reason(ItemErrorReason::parent_subcategory_not_found())
                    .build();
            };

            if parent_subcategory.category_id != parent_category_id {
                return EndpointResponseBuilder::bad_request()
                    .with_error_reason(ItemErrorReason::subcategory_does_not_belong_to_category())
                    .build();
            }

            Some(parent_subcategory)
        }
        None => None,
    };


    let resolved_tax = resolve_item_tax(
        TaxOverrides::new(request_body.tax_applicability, request_body.tax),
        parent_subcategory
            .as_ref()
            .map(|subcategory| {
                TaxOverrides::new(subcategory.tax_applicability, subcategory.tax)
            }),
        TaxDefaults {
            applicability: parent_category.tax_applicability,
            rate: parent_category.tax,
        },
    );


    let newly_created_item = entities::ItemMutation::create(
        &mut transaction,
        entities::NewItem {
            name: request_body.name,
            image_url: request_body.image_url,
            description: request_body.description,
            category_id: parent_category_id,
            subcategory_id: parent_subcategory
                .as_ref()
                .map(|subcategory| subcategory.id),
            tax_applicability: resolved_tax.applicability,
            tax: resolved_tax.rate,
            base_amount: request_body.base_amount,
            discount: request_body.discount.unwrap_or(0.0),
        },
    )
    .await?;

    transaction.commit().await?;


    EndpointResponseBuilder::created()
        .with_json_body(newly_created_item.into_api_model_with_parent_names(
            parent_category.name,
            parent_subcategory.map(|subcategory| subcategory.name),
        ))
        .build()
}




/// List all items
///
/// Every entry carries its parent names (joined in at read time) and the
/// derived `total_amount`.
#[utoipa::path(
    get,
    path = "/items",
    tag = "items",
    responses(
        (
            status = 200,
            description = "The item list.",
            body = Vec<Item>,
        ),
        (
            status = 500,
            description = "Internal server error.",
            body = ErrorResponse,
        ),
    )
)]
#[get("")]
pub async fn get_all_items(state: ApplicationState) -> EndpointResult {
    let mut database_connection = state.acquire_database_connection().await?;

    let mut item_stream = entities::ItemQuery::get_all_items(&mut database_connection).await;


    let mut items: Vec<Item> = Vec::new();
    while let Some(internal_item) = item_stream.next().await {
        items.push(internal_item?.into_api_model());
    }


    EndpointResponseBuilder::ok().with_json_body(items).build()
}




/// Search items by name
///
/// Case-insensitive substring match on item names; the search term is
/// required and must be non-empty. An empty result list is a valid
/// outcome.
#[utoipa::path(
    get,
    path = "/items/search",
    tag = "items",
    params(
        ItemSearchParameters
    ),
    responses(
        (
            status = 200,
            description = "Items whose name matches the search term.",
            body = Vec<Item>,
        ),
        (
            status = 400,
            description = "Missing or empty search term.",
            body = ErrorResponse,
        ),
        (
            status = 500,
            description = "Internal server error.",
            body = ErrorResponse,
        ),
    )
)]
#[get("/search")]
pub async fn search_items(
    state: ApplicationState,
    parameters: web::Query<ItemSearchParameters>,
) -> EndpointResult {
    let search_term = parameters.into_inner().name;

    let Some(search_term) = search_term else {
        return EndpointResponseBuilder::bad_request()
            .with_error_reason(ItemErrorReason::missing_search_term())
            .build();
    };

    if search_term.is_empty() {
        return EndpointResponseBuilder::bad_request()
            .with_error_reason(ItemErrorReason::missing_search_term())
            .build();
    }


    let mut database_connection = state.acquire_database_connection().await?;

    let mut item_stream =
        entities::ItemQuery::search_by_name(&mut database_connection, &search_term).await;

    let mut items: Vec<Item> = Vec::new();
    while let Some(internal_item) = item_stream.next().await {
        items.push(internal_item?.into_api_model());
    }


    EndpointResponseBuilder::ok().with_json_body(items).build()
}




/// Get an item
#[utoipa::path(
    get,
    path = "/items/{item_id}",
    tag = "items",
    params(
        (
            "item_id" = String,
            Path,
            format = Uuid,
            description = "UUID of the item."
        )
    ),
    responses(
        (
            status = 200,
            description = "Item information.",
            body = Item,
        ),
        (
            status = 400,
            description = "Invalid UUID path parameter.",
            body = ErrorResponse,
        ),
        (
            status = 404,
            description = "Item does not exist.",
            body = ErrorResponse,
        ),
        (
            status = 500,
            description = "Internal server error.",
            body = ErrorResponse,
        ),
    )
)]
#[get("/{item_id}")]
pub async fn get_specific_item(
    state: ApplicationState,
    parameters: web::Path<(String,)>,
) -> EndpointResult {
    let mut database_connection = state.acquire_database_connection().await?;

    let target_item_id = parse_uuid::<ItemId>(parameters.into_inner().0)?;


    let item = entities::ItemQuery::get_by_id(&mut database_connection, target_item_id).await?;

    let Some(item) = item else {
        return EndpointResponseBuilder::not_found()
            .with_error_reason(ItemErrorReason::item_not_found())
            .build();
    };


    EndpointResponseBuilder::ok()
        .with_json_body(item.into_api_model())
        .build()
}




/// Update an item
///
/// Applies a partial update restricted to the item's own fields. Stored
/// references and tax fields are written as-is: consistency between
/// category and subcategory is not re-validated and tax inheritance is
/// not re-run on edit. `total_amount` is not a stored field and cannot
/// be set; it follows `base_amount - discount` on the next read.
#[utoipa::path(
    patch,
    path = "/items/{item_id}",
    tag = "items",
    params(
        (
            "item_id" = String,
            Path,
            format = Uuid,
            description = "UUID of the item to update."
        )
    ),
    request_body(
        content = ItemUpdateRequest
    ),
    responses(
        (
            status = 200,
            description = "Updated item information.",
            body = Item,
        ),
        (
            status = 400,
            description = "Invalid UUID path parameter, or no fields to update.",
            body = ErrorResponse,
        ),
        (
            status = 404,
            description = "Item does not exist.",
            body = ErrorResponse,
        ),
        (
            status = 500,
            description = "Internal server error.",
            body = ErrorResponse,
        ),
    )
)]
#[patch("/{item_id}")]
pub async fn update_specific_item(
    state: ApplicationState,
    parameters: web::Path<(String,)>,
    request_body: web::Json<ItemUpdateRequest>,
) -> EndpointResult {
    let mut database_connection = state.acquire_database_connection().await?;
    let mut transaction = database_connection.begin().await?;

    let target_item_id = parse_uuid::<ItemId>(parameters.into_inner().0)?;

    let request_body = request_body.into_inner();


    if request_body.has_no_fields_to_update() {
        return EndpointResponseBuilder::bad_request()
            .with_error_reason(ItemErrorReason::no_fields_to_update())
            .build();
    }


    let target_item_exists =
        entities::ItemQuery::exists_by_id(&mut transaction, target_item_id).await?;

    if !target_item_exists {
        return EndpointResponseBuilder::not_found()
            .with_error_reason(ItemErrorReason::item_not_found())
            .build();
    }


    let successfully_updated = entities::ItemMutation::update(
        &mut transaction,
        target_item_id,
        entities::ItemValuesToUpdate {
            name: request_body.new_name,
            image_url: request_body.new_image_url,
            description: request_body.new_description,
            category_id: request_body.new_category_id.map(CategoryId::new),
            subcategory_id: request_body
                .new_subcategory_id
                .map(|optional_id| optional_id.map(SubcategoryId::new)),
            tax_applicability: request_body.new_tax_applicability,
            tax: request_body.new_tax,
            base_amount: request_body.new_base_amount,
            discount: request_body.new_discount,
        },
    )
    .await?;

    if !successfully_updated {
        return Err(EndpointError::invalid_database_state(
            "failed to update an item that existed \
             in a previous call inside the same transaction",
        ));
    }


    let target_item_after_update =
        entities::ItemQuery::get_by_id(&mut transaction, target_item_id).await?;

    let Some(target_item_after_update) = target_item_after_update else {
        return Err(EndpointError::invalid_database_state(
            "failed to fetch an item that was just updated \
             in a previous call inside the same transaction",
        ));
    };

    transaction.commit().await?;


    EndpointResponseBuilder::ok()
        .with_json_body(target_item_after_update.into_api_model())
        .build()
}




/// Delete an item
///
/// Nothing references items, so no cascade is needed.
#[utoipa::path(
    delete,
    path = "/items/{item_id}",
    tag = "items",
    params(
        (
            "item_id" = String,
            Path,
            format = Uuid,
            description = "UUID of the item to delete."
        )
    ),
    responses(
        (
            status = 200,
            description = "Item has been deleted.",
        ),
        (
            status = 400,
            description = "Invalid UUID path parameter.",
            body = ErrorResponse,
        ),
        (
            status = 404,
            description = "Item does not exist.",
            body = ErrorResponse,
        ),
        (
            status = 500,
            description = "Internal server error.",
            body = ErrorResponse,
        ),
    )
)]
#[delete("/{item_id}")]
pub async fn delete_specific_item(
    state: ApplicationState,
    parameters: web::Path<(String,)>,
) -> EndpointResult {
    let mut database_connection = state.acquire_database_connection().await?;

    let target_item_id = parse_uuid::<ItemId>(parameters.into_inner().0)?;


    let successfully_deleted =
        entities::ItemMutation::delete(&mut database_connection, target_item_id).await?;

    if !successfully_deleted {
        return EndpointResponseBuilder::not_found()
            .with_error_reason(ItemErrorReason::item_not_found())
            .build();
    }


    EndpointResponseBuilder::ok().build()
}
