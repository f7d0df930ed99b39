use carta_core::api_models::Item;
use carta_database::entities;

use crate::api::traits::IntoApiModel;



impl IntoApiModel<Item> for entities::ExtendedItemModel {
    fn into_api_model(self) -> Item {
        Item {
            id: self.id,
            name: self.name,
            image_url: self.image_url,
            description: self.description,
            category_id: self.category_id,
            category_name: self.category_name,
            subcategory_id: self.subcategory_id,
            subcategory_name: self.subcategory_name,
            tax_applicability: self.tax_applicability,
            tax: self.tax,
            // Derived, never stored: recomputed on every serialization.
            total_amount: self.base_amount - self.discount,
            base_amount: self.base_amount,
            discount: self.discount,
            created_at: self.created_at,
            last_modified_at: self.last_modified_at,
        }
    }
}


/// Freshly-created items come out of the mutation layer without the
/// joined parent names; creation endpoints already hold the parents
/// (they just validated them), so the names are attached here.
pub(super) trait IntoApiModelWithParentNames {
    fn into_api_model_with_parent_names(
        self,
        category_name: String,
        subcategory_name: Option<String>,
    ) -> Item;
}

impl IntoApiModelWithParentNames for entities::ItemModel {
    fn into_api_model_with_parent_names(
        self,
        category_name: String,
        subcategory_name: Option<String>,
    ) -> Item {
        Item {
            id: self.id,
            name: self.name,
            image_url: self.image_url,
            description: self.description,
            category_id: self.category_id,
            category_name,
            subcategory_id: self.subcategory_id,
            subcategory_name,
            tax_applicability: self.tax_applicability,
            tax: self.tax,
            total_amount: self.base_amount - self.discount,
            base_amount: self.base_amount,
            discount: self.discount,
            created_at: self.created_at,
            last_modified_at: self.last_modified_at,
        }
    }
}
