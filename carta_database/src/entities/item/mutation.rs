use std::borrow::Cow;

use carta_core::ids::{CategoryId, ItemId, SubcategoryId};
use chrono::Utc;
use sqlx::{PgConnection, Postgres, QueryBuilder};

use super::ItemModel;
use crate::{IntoExternalModel, QueryError, QueryResult};



#[derive(Clone, PartialEq, Debug)]
pub struct NewItem {
    pub name: String,
    pub image_url: String,
    pub description: Option<String>,
    pub category_id: CategoryId,
    pub subcategory_id: Option<SubcategoryId>,
    /// Already resolved against the parents (see `carta_core::tax`).
    pub tax_applicability: bool,
    pub tax: f64,
    pub base_amount: f64,
    pub discount: f64,
}



#[derive(Clone, PartialEq, Debug)]
pub struct ItemValuesToUpdate {
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<Option<String>>,
    pub category_id: Option<CategoryId>,
    pub subcategory_id: Option<Option<SubcategoryId>>,
    pub tax_applicability: Option<bool>,
    pub tax: Option<f64>,
    pub base_amount: Option<f64>,
    pub discount: Option<f64>,
}

impl ItemValuesToUpdate {
    fn has_any_values_to_update(&self) -> bool {
        self.name.is_some()
            || self.image_url.is_some()
            || self.description.is_some()
            || self.category_id.is_some()
            || self.subcategory_id.is_some()
            || self.tax_applicability.is_some()
            || self.tax.is_some()
            || self.base_amount.is_some()
            || self.discount.is_some()
    }
}


fn build_item_update_query(
    item_id: ItemId,
    values_to_update: ItemValuesToUpdate,
) -> QueryBuilder<'static, Postgres> {
    let mut update_query_builder = QueryBuilder::new("UPDATE carta.item SET ");

    let mut separated_set_expressions = update_query_builder.separated(", ");

    if let Some(new_name) = values_to_update.name {
        separated_set_expressions.push("name = ");
        separated_set_expressions.push_bind_unseparated(new_name);
    }

    if let Some(new_image_url) = values_to_update.image_url {
        separated_set_expressions.push("image_url = ");
        separated_set_expressions.push_bind_unseparated(new_image_url);
    }

    if let Some(new_description) = values_to_update.description {
        separated_set_expressions.push("description = ");
        separated_set_expressions.push_bind_unseparated(new_description);
    }

    if let Some(new_category_id) = values_to_update.category_id {
        separated_set_expressions.push("category_id = ");
        separated_set_expressions.push_bind_unseparated(new_category_id.into_uuid());
    }

    if let Some(new_subcategory_id) = values_to_update.subcategory_id {
        separated_set_expressions.push("subcategory_id = ");
        separated_set_expressions
            .push_bind_unseparated(new_subcategory_id.map(|id| id.into_uuid()));
    }

    if let Some(new_tax_applicability) = values_to_update.tax_applicability {
        separated_set_expressions.push("tax_applicability = ");
        separated_set_expressions.push_bind_unseparated(new_tax_applicability);
    }

    if let Some(new_tax) = values_to_update.tax {
        separated_set_expressions.push("tax = ");
        separated_set_expressions.push_bind_unseparated(new_tax);
    }

    if let Some(new_base_amount) = values_to_update.base_amount {
        separated_set_expressions.push("base_amount = ");
        separated_set_expressions.push_bind_unseparated(new_base_amount);
    }

    if let Some(new_discount) = values_to_update.discount {
        separated_set_expressions.push("discount = ");
        separated_set_expressions.push_bind_unseparated(new_discount);
    }

    separated_set_expressions.push("last_modified_at = ");
    separated_set_expressions.push_bind_unseparated(Utc::now());


    update_query_builder.push(" WHERE id = ");
    update_query_builder.push_bind(item_id.into_uuid());

    update_query_builder
}




pub struct ItemMutation;

impl ItemMutation {
    pub async fn create(
        database_connection: &mut PgConnection,
        new_item: NewItem,
    ) -> QueryResult<ItemModel> {
        let new_item_id = ItemId::generate();
        let new_item_created_at = Utc::now();
        let new_item_last_modified_at = new_item_created_at;

        let newly_created_item = sqlx::query_as::<_, super::InternalItemModel>(
            "INSERT INTO carta.item \
                (id, name, image_url, description, category_id, subcategory_id, \
                 tax_applicability, tax, base_amount, discount, \
                 created_at, last_modified_at) \
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
                RETURNING \
                    id, name, image_url, description, category_id, subcategory_id, \
                    tax_applicability, tax, base_amount, discount, \
                    created_at, last_modified_at",
        )
        .bind(new_item_id.into_uuid())
        .bind(new_item.name)
        .bind(new_item.image_url)
        .bind(new_item.description)
        .bind(new_item.category_id.into_uuid())
        .bind(new_item.subcategory_id.map(|id| id.into_uuid()))
        .bind(new_item.tax_applicability)
        .bind(new_item.tax)
        .bind(new_item.base_amount)
        .bind(new_item.discount)
        .bind(new_item_created_at)
        .bind(new_item_last_modified_at)
        .fetch_one(database_connection)
        .await?;

        Ok(newly_created_item.into_external_model())
    }


    pub async fn update(
        database_connection: &mut PgConnection,
        item_id: ItemId,
        item_values_to_update: ItemValuesToUpdate,
    ) -> QueryResult<bool> {
        if !item_values_to_update.has_any_values_to_update() {
            return Ok(true);
        }


        let mut update_query_builder = build_item_update_query(item_id, item_values_to_update);

        let query_result = update_query_builder
            .build()
            .execute(database_connection)
            .await?;


        if query_result.rows_affected() > 1 {
            return Err(QueryError::DatabaseInconsistencyError {
                problem: Cow::from(
                    "attempted to update an item by ID, but more than one row matched",
                ),
            });
        }

        Ok(query_result.rows_affected() == 1)
    }

    pub async fn delete(
        database_connection: &mut PgConnection,
        item_id: ItemId,
    ) -> QueryResult<bool> {
        let query_result = sqlx::query(
            "DELETE FROM carta.item \
                WHERE id = $1",
        )
        .bind(item_id.into_uuid())
        .execute(database_connection)
        .await?;


        if query_result.rows_affected() > 1 {
            return Err(QueryError::DatabaseInconsistencyError {
                problem: Cow::from(
                    "attempted to delete an item by ID, but more than one row matched",
                ),
            });
        }

        Ok(query_result.rows_affected() == 1)
    }

    /// Detaches every item that references the given subcategory,
    /// leaving the items themselves in place. Returns how many items
    /// were orphaned.
    pub async fn unlink_all_from_subcategory(
        database_connection: &mut PgConnection,
        subcategory_id: SubcategoryId,
    ) -> QueryResult<u64> {
        let query_result = sqlx::query(
            "UPDATE carta.item \
                SET subcategory_id = NULL, last_modified_at = $1 \
                WHERE subcategory_id = $2",
        )
        .bind(Utc::now())
        .bind(subcategory_id.into_uuid())
        .execute(database_connection)
        .await?;

        Ok(query_result.rows_affected())
    }
}
