use carta_core::ids::{CategoryId, ItemId, SubcategoryId};
use futures_core::stream::BoxStream;
use sqlx::PgConnection;

use super::ExtendedItemModel;
use crate::{IntoExternalModel, QueryError, QueryResult};

type RawExtendedItemStream<'c> =
    BoxStream<'c, Result<super::InternalExtendedItemModel, sqlx::Error>>;

create_async_stream_wrapper!(
    pub struct ExtendedItemStream<'c>;
    transforms stream RawExtendedItemStream<'c> => stream of QueryResult<super::ExtendedItemModel>:
        |value|
            value.map(
                |some| some
                    .map(super::InternalExtendedItemModel::into_external_model)
                    .map_err(|error| QueryError::SqlxError { error })
            )
);


/// Escapes `LIKE`/`ILIKE` metacharacters in a user-provided search term,
/// so the term always matches literally.
fn escape_like_metacharacters(search_term: &str) -> String {
    search_term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}


pub struct ItemQuery;

impl ItemQuery {
    pub async fn get_all_items(database_connection: &mut PgConnection) -> ExtendedItemStream<'_> {
        let internal_item_stream = sqlx::query_as::<_, super::InternalExtendedItemModel>(
            "SELECT \
                    item.id AS id, \
                    item.name AS name, \
                    item.image_url AS image_url, \
                    item.description AS description, \
                    item.category_id AS category_id, \
                    category.name AS category_name, \
                    item.subcategory_id AS subcategory_id, \
                    subcategory.name AS subcategory_name, \
                    item.tax_applicability AS tax_applicability, \
                    item.tax AS tax, \
                    item.base_amount AS base_amount, \
                    item.discount AS discount, \
                    item.created_at AS created_at, \
                    item.last_modified_at AS last_modified_at \
                FROM carta.item AS item \
                INNER JOIN carta.category AS category \
                    ON item.category_id = category.id \
                LEFT JOIN carta.subcategory AS subcategory \
                    ON item.subcategory_id = subcategory.id \
                ORDER BY item.created_at",
        )
        .fetch(database_connection);

        ExtendedItemStream::new(internal_item_stream)
    }

    pub async fn get_all_by_category_id(
        database_connection: &mut PgConnection,
        category_id: CategoryId,
    ) -> ExtendedItemStream<'_> {
        let internal_item_stream = sqlx::query_as::<_, super::InternalExtendedItemModel>(
            "SELECT \
                    item.id AS id, \
                    item.name AS name, \
                    item.image_url AS image_url, \
                    item.description AS description, \
                    item.category_id AS category_id, \
                    category.name AS category_name, \
                    item.subcategory_id AS subcategory_id, \
                    subcategory.name AS subcategory_name, \
                    item.tax_applicability AS tax_applicability, \
                    item.tax AS tax, \
                    item.base_amount AS base_amount, \
                    item.discount AS discount, \
                    item.created_at AS created_at, \
                    item.last_modified_at AS last_modified_at \
                FROM carta.item AS item \
                INNER JOIN carta.category AS category \
                    ON item.category_id = category.id \
                LEFT JOIN carta.subcategory AS subcategory \
                    ON item.subcategory_id = subcategory.id \
                WHERE item.category_id = $1 \
                ORDER BY item.created_at",
        )
        .bind(category_id.into_uuid())
        .fetch(database_connection);

        ExtendedItemStream::new(internal_item_stream)
    }

    pub async fn get_all_by_subcategory_id(
        database_connection: &mut PgConnection,
        subcategory_id: SubcategoryId,
    ) -> ExtendedItemStream<'_> {
        let internal_item_stream = sqlx::query_as::<_, super::InternalExtendedItemModel>(
            "SELECT \
                    item.id AS id, \
                    item.name AS name, \
                    item.image_url AS image_url, \
                    item.description AS description, \
                    item.category_id AS category_id, \
                    category.name AS category_name, \
                    item.subcategory_id AS subcategory_id, \
                    subcategory.name AS subcategory_name, \
                    item.tax_applicability AS tax_applicability, \
                    item.tax AS tax, \
                    item.base_amount AS base_amount, \
                    item.discount AS discount, \
                    item.created_at AS created_at, \
                    item.last_modified_at AS last_modified_at \
                FROM carta.item AS item \
                INNER JOIN carta.category AS category \
                    ON item.category_id = category.id \
                LEFT JOIN carta.subcategory AS subcategory \
                    ON item.subcategory_id = subcategory.id \
                WHERE item.subcategory_id = $1 \
                ORDER BY item.created_at",
        )
        .bind(subcategory_id.into_uuid())
        .fetch(database_connection);

        ExtendedItemStream::new(internal_item_stream)
    }

    /// Case-insensitive substring search on item names.
    /// The search term is matched literally (`%` and `_` are escaped).
    pub async fn search_by_name<'c>(
        database_connection: &'c mut PgConnection,
        search_term: &str,
    ) -> ExtendedItemStream<'c> {
        let escaped_search_term = escape_like_metacharacters(search_term);

        let internal_item_stream = sqlx::query_as::<_, super::InternalExtendedItemModel>(
            "SELECT \
                    item.id AS id, \
                    item.name AS name, \
                    item.image_url AS image_url, \
                    item.description AS description, \
                    item.category_id AS category_id, \
                    category.name AS category_name, \
                    item.subcategory_id AS subcategory_id, \
                    subcategory.name AS subcategory_name, \
                    item.tax_applicability AS tax_applicability, \
                    item.tax AS tax, \
                    item.base_amount AS base_amount, \
                    item.discount AS discount, \
                    item.created_at AS created_at, \
                    item.last_modified_at AS last_modified_at \
                FROM carta.item AS item \
                INNER JOIN carta.category AS category \
                    ON item.category_id = category.id \
                LEFT JOIN carta.subcategory AS subcategory \
                    ON item.subcategory_id = subcategory.id \
                WHERE item.name ILIKE '%' || $1 || '%' \
                ORDER BY item.created_at",
        )
        .bind(escaped_search_term)
        .fetch(database_connection);

        ExtendedItemStream::new(internal_item_stream)
    }

    pub async fn get_by_id(
        database_connection: &mut PgConnection,
        item_id: ItemId,
    ) -> QueryResult<Option<ExtendedItemModel>> {
        let internal_item = sqlx::query_as::<_, super::InternalExtendedItemModel>(
            "SELECT \
                    item.id AS id, \
                    item.name AS name, \
                    item.image_url AS image_url, \
                    item.description AS description, \
                    item.category_id AS category_id, \
                    category.name AS category_name, \
                    item.subcategory_id AS subcategory_id, \
                    subcategory.name AS subcategory_name, \
                    item.tax_applicability AS tax_applicability, \
                    item.tax AS tax, \
                    item.base_amount AS base_amount, \
                    item.discount AS discount, \
                    item.created_at AS created_at, \
                    item.last_modified_at AS last_modified_at \
                FROM carta.item AS item \
                INNER JOIN carta.category AS category \
                    ON item.category_id = category.id \
                LEFT JOIN carta.subcategory AS subcategory \
                    ON item.subcategory_id = subcategory.id \
                WHERE item.id = $1",
        )
        .bind(item_id.into_uuid())
        .fetch_optional(database_connection)
        .await?;

        Ok(internal_item.map(|item| item.into_external_model()))
    }

    pub async fn exists_by_id(
        database_connection: &mut PgConnection,
        item_id: ItemId,
    ) -> QueryResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (\
                SELECT 1 \
                    FROM carta.item \
                    WHERE id = $1\
            )",
        )
        .bind(item_id.into_uuid())
        .fetch_one(database_connection)
        .await?;

        Ok(exists)
    }
}



#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn escapes_percent_underscore_and_backslash() {
        assert_eq!(
            escape_like_metacharacters("50%_off\\now"),
            "50\\%\\_off\\\\now"
        );
    }

    #[test]
    fn leaves_plain_terms_untouched() {
        assert_eq!(escape_like_metacharacters("piz"), "piz");
    }
}
