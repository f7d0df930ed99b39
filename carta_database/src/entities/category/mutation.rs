use std::borrow::Cow;

use carta_core::ids::CategoryId;
use carta_core::tax::TaxType;
use chrono::Utc;
use sqlx::{PgConnection, Postgres, QueryBuilder};

use super::CategoryModel;
use crate::{QueryError, QueryResult, TryIntoExternalModel};



#[derive(Clone, PartialEq, Debug)]
pub struct NewCategory {
    pub name: String,
    pub image_url: String,
    pub description: Option<String>,
    pub tax_applicability: bool,
    pub tax: f64,
    pub tax_type: Option<TaxType>,
}



#[derive(Clone, PartialEq, Debug)]
pub struct CategoryValuesToUpdate {
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<Option<String>>,
    pub tax_applicability: Option<bool>,
    pub tax: Option<f64>,
    pub tax_type: Option<Option<TaxType>>,
}

impl CategoryValuesToUpdate {
    fn has_any_values_to_update(&self) -> bool {
        self.name.is_some()
            || self.image_url.is_some()
            || self.description.is_some()
            || self.tax_applicability.is_some()
            || self.tax.is_some()
            || self.tax_type.is_some()
    }
}


fn build_category_update_query(
    category_id: CategoryId,
    values_to_update: CategoryValuesToUpdate,
) -> QueryBuilder<'static, Postgres> {
    let mut update_query_builder = QueryBuilder::new("UPDATE carta.category SET ");

    // `push` inserts the comma between set expressions,
    // `push_bind_unseparated` keeps the bound value glued to its column.
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

    if let Some(new_tax_type) = values_to_update.tax_type {
        separated_set_expressions.push("tax_type = ");
        separated_set_expressions
            .push_bind_unseparated(new_tax_type.map(|tax_type| tax_type.as_str().to_string()));
    }

    separated_set_expressions.push("last_modified_at = ");
    separated_set_expressions.push_bind_unseparated(Utc::now());


    update_query_builder.push(" WHERE id = ");
    update_query_builder.push_bind(category_id.into_uuid());

    update_query_builder
}




pub struct CategoryMutation;

impl CategoryMutation {
    pub async fn create(
        database_connection: &mut PgConnection,
        new_category: NewCategory,
    ) -> QueryResult<CategoryModel> {
        let new_category_id = CategoryId::generate();
        let new_category_created_at = Utc::now();
        let new_category_last_modified_at = new_category_created_at;

        let newly_created_category = sqlx::query_as::<_, super::InternalCategoryModel>(
            "INSERT INTO carta.category \
                (id, name, image_url, description, \
                 tax_applicability, tax, tax_type, \
                 created_at, last_modified_at) \
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
                RETURNING \
                    id, name, image_url, description, \
                    tax_applicability, tax, tax_type, \
                    created_at, last_modified_at",
        )
        .bind(new_category_id.into_uuid())
        .bind(new_category.name)
        .bind(new_category.image_url)
        .bind(new_category.description)
        .bind(new_category.tax_applicability)
        .bind(new_category.tax)
        .bind(
            new_category
                .tax_type
                .map(|tax_type| tax_type.as_str().to_string()),
        )
        .bind(new_category_created_at)
        .bind(new_category_last_modified_at)
        .fetch_one(database_connection)
        .await?;

        newly_created_category.try_into_external_model()
    }


    pub async fn update(
        database_connection: &mut PgConnection,
        category_id: CategoryId,
        category_values_to_update: CategoryValuesToUpdate,
    ) -> QueryResult<bool> {
        if !category_values_to_update.has_any_values_to_update() {
            return Ok(true);
        }


        let mut update_query_builder =
            build_category_update_query(category_id, category_values_to_update);

        let query_result = update_query_builder
            .build()
            .execute(database_connection)
            .await?;


        if query_result.rows_affected() > 1 {
            return Err(QueryError::DatabaseInconsistencyError {
                problem: Cow::from(
                    "attempted to update a category by ID, but more than one row matched",
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
    fn empty_update_has_no_values_to_apply() {
        let values = CategoryValuesToUpdate {
            name: None,
            image_url: None,
            description: None,
            tax_applicability: None,
            tax: None,
            tax_type: None,
        };

        assert!(!values.has_any_values_to_update());
    }

    #[test]
    fn clearing_a_nullable_field_counts_as_an_update() {
        let values = CategoryValuesToUpdate {
            name: None,
            image_url: None,
            description: Some(None),
            tax_applicability: None,
            tax: None,
            tax_type: None,
        };

        assert!(values.has_any_values_to_update());
    }
}
