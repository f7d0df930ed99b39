use carta_core::ids::{CategoryId, SubcategoryId};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::IntoExternalModel;


/// A bare `carta.subcategory` row; what mutations return.
pub struct SubcategoryModel {
    pub id: SubcategoryId,

    pub name: String,

    pub image_url: String,

    pub description: Option<String>,

    pub category_id: CategoryId,

    pub tax_applicability: Option<bool>,

    pub tax: Option<f64>,

    pub created_at: DateTime<Utc>,

    pub last_modified_at: DateTime<Utc>,
}


/// A subcategory with its parent category's name joined in;
/// what read queries return.
pub struct ExtendedSubcategoryModel {
    pub id: SubcategoryId,

    pub name: String,

    pub image_url: String,

    pub description: Option<String>,

    pub category_id: CategoryId,

    pub category_name: String,

    pub tax_applicability: Option<bool>,

    pub tax: Option<f64>,

    pub created_at: DateTime<Utc>,

    pub last_modified_at: DateTime<Utc>,
}


#[derive(sqlx::FromRow)]
pub(super) struct InternalSubcategoryModel {
    pub(super) id: Uuid,

    pub(super) name: String,

    pub(super) image_url: String,

    pub(super) description: Option<String>,

    pub(super) category_id: Uuid,

    pub(super) tax_applicability: Option<bool>,

    pub(super) tax: Option<f64>,

    pub(super) created_at: DateTime<Utc>,

    pub(super) last_modified_at: DateTime<Utc>,
}

impl IntoExternalModel for InternalSubcategoryModel {
    type ExternalModel = SubcategoryModel;

    fn into_external_model(self) -> Self::ExternalModel {
        Self::ExternalModel {
            id: SubcategoryId::new(self.id),
            name: self.name,
            image_url: self.image_url,
            description: self.description,
            category_id: CategoryId::new(self.category_id),
            tax_applicability: self.tax_applicability,
            tax: self.tax,
            created_at: self.created_at,
            last_modified_at: self.last_modified_at,
        }
    }
}


#[derive(sqlx::FromRow)]
pub(super) struct InternalExtendedSubcategoryModel {
    pub(super) id: Uuid,

    pub(super) name: String,

    pub(super) image_url: String,

    pub(super) description: Option<String>,

    pub(super) category_id: Uuid,

    pub(super) category_name: String,

    pub(super) tax_applicability: Option<bool>,

    pub(super) tax: Option<f64>,

    pub(super) created_at: DateTime<Utc>,

    pub(super) last_modified_at: DateTime<Utc>,
}

impl IntoExternalModel for InternalExtendedSubcategoryModel {
    type ExternalModel = ExtendedSubcategoryModel;

    fn into_external_model(self) -> Self::ExternalModel {
        Self::ExternalModel {
            id: SubcategoryId::new(self.id),
            name: self.name,
            image_url: self.image_url,
            description: self.description,
            category_id: CategoryId::new(self.category_id),
            category_name: self.category_name,
            tax_applicability: self.tax_applicability,
            tax: self.tax,
            created_at: self.created_at,
            last_modified_at: self.last_modified_at,
        }
    }
}
