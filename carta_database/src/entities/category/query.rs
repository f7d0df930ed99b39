use carta_core::ids::CategoryId;
use futures_core::stream::BoxStream;
use sqlx::PgConnection;

use super::CategoryModel;
use crate::{QueryError, QueryResult, TryIntoExternalModel};

type RawCategoryStream<'c> = BoxStream<'c, Result<super::InternalCategoryModel, sqlx::Error>>;

create_async_stream_wrapper!(
    pub struct CategoryStream<'c>;
    transforms stream RawCategoryStream<'c> => stream of QueryResult<super::CategoryModel>:
        |value|
            value.map(
                |some| some
                    .map_err(|error| QueryError::SqlxError { error })
                    .and_then(super::InternalCategoryModel::try_into_external_model)
            )
);


pub struct CategoryQuery;

impl CategoryQuery {
    pub async fn get_all_categories(database_connection: &mut PgConnection) -> CategoryStream<'_> {
        let internal_category_stream = sqlx::query_as::<_, super::InternalCategoryModel>(
            "SELECT id, name, image_url, description, \
                    tax_applicability, tax, tax_type, created_at, last_modified_at \
                FROM carta.category \
                ORDER BY created_at",
        )
        .fetch(database_connection);

        CategoryStream::new(internal_category_stream)
    }

    pub async fn get_by_id(
        database_connection: &mut PgConnection,
        category_id: CategoryId,
    ) -> QueryResult<Option<CategoryModel>> {
        let internal_category = sqlx::query_as::<_, super::InternalCategoryModel>(
            "SELECT id, name, image_url, description, \
                    tax_applicability, tax, tax_type, created_at, last_modified_at \
                FROM carta.category \
                WHERE id = $1",
        )
        .bind(category_id.into_uuid())
        .fetch_optional(database_connection)
        .await?;

        internal_category
            .map(|category| category.try_into_external_model())
            .transpose()
    }

    pub async fn exists_by_id(
        database_connection: &mut PgConnection,
        category_id: CategoryId,
    ) -> QueryResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (\
                SELECT 1 \
                    FROM carta.category \
                    WHERE id = $1\
            )",
        )
        .bind(category_id.into_uuid())
        .fetch_one(database_connection)
        .await?;

        Ok(exists)
    }

    pub async fn exists_by_name(
        database_connection: &mut PgConnection,
        category_name: &str,
    ) -> QueryResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (\
                SELECT 1 \
                    FROM carta.category \
                    WHERE name = $1\
            )",
        )
        .bind(category_name)
        .fetch_one(database_connection)
        .await?;

        Ok(exists)
    }
}
