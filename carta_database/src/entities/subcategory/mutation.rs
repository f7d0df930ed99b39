use std::borrow::Cow;

use carta_core::ids::{CategoryId, SubcategoryId};
use chrono::Utc;
use sqlx::{PgConnection, Postgres, QueryBuilder};

use super::SubcategoryModel;
use crate::{IntoExternalModel, QueryError, QueryResult};



#[derive(Clone, PartialEq, Debug)]
pub struct NewSubcategory {
    pub name: String,
    pub image_url: String,
    pub description: Option<String>,
    pub category_id: CategoryId,
    /// Already resolved against the parent category (see `carta_core::tax`).
    pub tax_applicability: bool,
    pub tax: f64,
}



#[derive(Clone, PartialEq, Debug)]
pub struct SubcategoryValuesToUpdate {
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<Option<String>>,
    pub tax_applicability: Option<Option<bool>>,
    pub tax: Option<Option<f64>>,
}

impl SubcategoryValuesToUpdate {
    fn has_any_values_to_update(&self) -> bool {
        self.name.is_some()
            || self.image_url.is_some()
            || self.description.is_some()
            || self.tax_applicability.is_some()
            || self.tax.is_some()
    }
}


fn build_subcategory_update_query(
    subcategory_id: SubcategoryId,
    values_to_update: SubcategoryValuesToUpdate,
) -> QueryBuilder<'static, Postgres> {
    let mut update_query_builder = QueryBuilder::new("UPDATE carta.subcategory SET ");

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

    if let Some(new_tax_applicability) = values_to_update.tax_applicability {
        separated_set_expressions.push("tax_applicability = ");
        separated_set_expressions.push_bind_unseparated(new_tax_applicability);
    }

    if let Some(new_tax) = values_to_update.tax {
        separated_set_expressions.push("tax = ");
        separated_set_expressions.push_bind_unseparated(new_tax);
    }

    separated_set_expressions.push("last_modified_at = ");
    separated_set_expressions.push_bind_unseparated(Utc::now());


    update_query_builder.push(" WHERE id = ");
    update_query_builder.push_bind(subcategory_id.into_uuid());

    update_query_builder
}




pub struct SubcategoryMutation;

impl SubcategoryMutation {
    pub async fn create(
        database_connection: &mut PgConnection,
        new_subcategory: NewSubcategory,
    ) -> QueryResult<SubcategoryModel> {
        let new_subcategory_id = SubcategoryId::generate();
        let new_subcategory_created_at = Utc::now();
        let new_subcategory_last_modified_at = new_subcategory_created_at;

        let newly_created_subcategory =
            sqlx::query_as::<_, super::InternalSubcategoryModel>(
                "INSERT INTO carta.subcategory \
                    (id, name, image_url, description, category_id, \
                     tax_applicability, tax, created_at, last_modified_at) \
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
                    RETURNING \
                        id, name, image_url, description, category_id, \
                        tax_applicability, tax, created_at, last_modified_at",
            )
            .bind(new_subcategory_id.into_uuid())
            .bind(new_subcategory.name)
            .bind(new_subcategory.image_url)
            .bind(new_subcategory.description)
            .bind(new_subcategory.category_id.into_uuid())
            .bind(new_subcategory.tax_applicability)
            .bind(new_subcategory.tax)
            .bind(new_subcategory_created_at)
            .bind(new_subcategory_last_modified_at)
            .fetch_one(database_connection)
            .await?;

        Ok(newly_created_subcategory.into_external_model())
    }


    pub async fn update(
        database_connection: &mut PgConnection,
        subcategory_id: SubcategoryId,
        subcategory_values_to_update: SubcategoryValuesToUpdate,
    ) -> QueryResult<bool> {
        if !subcategory_values_to_update.has_any_values_to_update() {
            return Ok(true);
        }


        let mut update_query_builder =
            build_subcategory_update_query(subcategory_id, subcategory_values_to_update);

        let query_result = update_query_builder
            .build()
            .execute(database_connection)
            .await?;


        if query_result.rows_affected() > 1 {
            return Err(QueryError::DatabaseInconsistencyError {
                problem: Cow::from(
                    "attempted to update a subcategory by ID, but more than one row matched",
                ),
            });
        }

        Ok(query_result.rows_affected() == 1)
    }

    pub async fn delete(
        database_connection: &mut PgConnection,
        subcategory_id: SubcategoryId,
    ) -> QueryResult<bool> {
        let query_result = sqlx::query(
            "DELETE FROM carta.subcategory \
                WHERE id = $1",
        )
        .bind(subcategory_id.into_uuid())
        .execute(database_connection)
        .await?;


        if query_result.rows_affected() > 1 {
            return Err(QueryError::DatabaseInconsistencyError {
                problem: Cow::from(
                    "attempted to delete a subcategory by ID, but more than one row matched",
                ),
            });
        }

        Ok(query_result.rows_affected() == 1)
    }
}



#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reverting_tax_fields_to_inherit_counts_as_an_update() {
        let values = SubcategoryValuesToUpdate {
            name: None,
            image_url: None,
            description: None,
            tax_applicability: Some(None),
            tax: Some(None),
        };

        assert!(values.has_any_values_to_update());
    }
}
