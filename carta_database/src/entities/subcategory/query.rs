use carta_core::ids::{CategoryId, SubcategoryId};
use futures_core::stream::BoxStream;
use sqlx::PgConnection;

use super::ExtendedSubcategoryModel;
use crate::{IntoExternalModel, QueryError, QueryResult};

type RawExtendedSubcategoryStream<'c> =
    BoxStream<'c, Result<super::InternalExtendedSubcategoryModel, sqlx::Error>>;

create_async_stream_wrapper!(
    pub struct ExtendedSubcategoryStream<'c>;
    transforms stream RawExtendedSubcategoryStream<'c> => stream of QueryResult<super::ExtendedSubcategoryModel>:
        |value|
            value.map(
                |some| some
                    .map(super::InternalExtendedSubcategoryModel::into_external_model)
                    .map_err(|error| QueryError::SqlxError { error })
            )
);


pub struct SubcategoryQuery;

impl SubcategoryQuery {
    pub async fn get_all_subcategories(
        database_connection: &mut PgConnection,
    ) -> ExtendedSubcategoryStream<'_> {
        let internal_subcategory_stream =
            sqlx::query_as::<_, super::InternalExtendedSubcategoryModel>(
                "SELECT \
                        subcategory.id AS id, \
                        subcategory.name AS name, \
                        subcategory.image_url AS image_url, \
                        subcategory.description AS description, \
                        subcategory.category_id AS category_id, \
                        category.name AS category_name, \
                        subcategory.tax_applicability AS tax_applicability, \
                        subcategory.tax AS tax, \
                        subcategory.created_at AS created_at, \
                        subcategory.last_modified_at AS last_modified_at \
                    FROM carta.subcategory AS subcategory \
                    INNER JOIN carta.category AS category \
                        ON subcategory.category_id = category.id \
                    ORDER BY subcategory.created_at",
            )
            .fetch(database_connection);

        ExtendedSubcategoryStream::new(internal_subcategory_stream)
    }

    pub async fn get_all_by_category_id(
        database_connection: &mut PgConnection,
        category_id: CategoryId,
    ) -> ExtendedSubcategoryStream<'_> {
        let internal_subcategory_stream =
            sqlx::query_as::<_, super::InternalExtendedSubcategoryModel>(
                "SELECT \
                        subcategory.id AS id, \
                        subcategory.name AS name, \
                        subcategory.image_url AS image_url, \
                        subcategory.description AS description, \
                        subcategory.category_id AS category_id, \
                        category.name AS category_name, \
                        subcategory.tax_applicability AS tax_applicability, \
                        subcategory.tax AS tax, \
                        subcategory.created_at AS created_at, \
                        subcategory.last_modified_at AS last_modified_at \
                    FROM carta.subcategory AS subcategory \
                    INNER JOIN carta.category AS category \
                        ON subcategory.category_id = category.id \
                    WHERE subcategory.category_id = $1 \
                    ORDER BY subcategory.created_at",
            )
            .bind(category_id.into_uuid())
            .fetch(database_connection);

        ExtendedSubcategoryStream::new(internal_subcategory_stream)
    }

    pub async fn get_by_id(
        database_connection: &mut PgConnection,
        subcategory_id: SubcategoryId,
    ) -> QueryResult<Option<ExtendedSubcategoryModel>> {
        let internal_subcategory =
            sqlx::query_as::<_, super::InternalExtendedSubcategoryModel>(
                "SELECT \
                        subcategory.id AS id, \
                        subcategory.name AS name, \
                        subcategory.image_url AS image_url, \
                        subcategory.description AS description, \
                        subcategory.category_id AS category_id, \
                        category.name AS category_name, \
                        subcategory.tax_applicability AS tax_applicability, \
                        subcategory.tax AS tax, \
                        subcategory.created_at AS created_at, \
                        subcategory.last_modified_at AS last_modified_at \
                    FROM carta.subcategory AS subcategory \
                    INNER JOIN carta.category AS category \
                        ON subcategory.category_id = category.id \
                    WHERE subcategory.id = $1",
            )
            .bind(subcategory_id.into_uuid())
            .fetch_optional(database_connection)
            .await?;

        Ok(internal_subcategory.map(|subcategory| subcategory.into_external_model()))
    }

    pub async fn exists_by_id(
        database_connection: &mut PgConnection,
        subcategory_id: SubcategoryId,
    ) -> QueryResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (\
                SELECT 1 \
                    FROM carta.subcategory \
                    WHERE id = $1\
            )",
        )
        .bind(subcategory_id.into_uuid())
        .fetch_one(database_connection)
        .await?;

        Ok(exists)
    }
}
