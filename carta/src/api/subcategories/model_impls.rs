use carta_core::api_models::Subcategory;
use carta_database::entities;

use crate::api::traits::IntoApiModel;



impl IntoApiModel<Subcategory> for entities::ExtendedSubcategoryModel {
    fn into_api_model(self) -> Subcategory {
        Subcategory {
            id: self.id,
            name: self.name,
            image_url: self.image_url,
            description: self.description,
            category_id: self.category_id,
            category_name: self.category_name,
            tax_applicability: self.tax_applicability,
            tax: self.tax,
            created_at: self.created_at,
            last_modified_at: self.last_modified_at,
        }
    }
}


/// Freshly-created subcategories come out of the mutation layer without
/// the parent category's name; creation endpoints already hold the parent
/// (they just validated it), so the name is attached here.
pub(super) trait IntoApiModelWithCategoryName {
    fn into_api_model_with_category_name(self, category_name: String) -> Subcategory;
}

impl IntoApiModelWithCategoryName for entities::SubcategoryModel {
    fn into_api_model_with_category_name(self, category_name: String) -> Subcategory {
        Subcategory {
            id: self.id,
            name: self.name,
            image_url: self.image_url,
            description: self.description,
            category_id: self.category_id,
            category_name,
            tax_applicability: self.tax_applicability,
            tax: self.tax,
            created_at: self.created_at,
            last_modified_at: self.last_modified_at,
        }
    }
}
