use carta_core::api_models::Category;
use carta_database::entities;

use crate::api::traits::IntoApiModel;



impl IntoApiModel<Category> for entities::CategoryModel {
    fn into_api_model(self) -> Category {
        Category {
            id: self.id,
            name: self.name,
            image_url: self.image_url,
            description: self.description,
            tax_applicability: self.tax_applicability,
            tax: self.tax,
            tax_type: self.tax_type,
            created_at: self.created_at,
            last_modified_at: self.last_modified_at,
        }
    }
}
