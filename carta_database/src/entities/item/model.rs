use carta_core::ids::{CategoryId, ItemId, SubcategoryId};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::IntoExternalModel;


/// A bare `carta.item` row; what mutations return.
///
/// The derived total amount is absent here: it is computed
/// in the API layer from `base_amount` and `discount` on serialization.
pub struct ItemModel {
    pub id: ItemId,

    pub name: String,

    pub image_url: String,

    pub description: Option<String>,

    pub category_id: CategoryId,

    pub subcategory_id: Option<SubcategoryId>,

    pub tax_applicability: bool,

    pub tax: f64,

    pub base_amount: f64,

    pub discount: f64,

    pub created_at: DateTime<Utc>,

    pub last_modified_at: DateTime<Utc>,
}


/// An item with its parent names joined in; what read queries return.
pub struct ExtendedItemModel {
    pub id: ItemId,

    pub name: String,

    pub image_url: String,

    pub description: Option<String>,

    pub category_id: CategoryId,

    pub category_name: String,

    pub subcategory_id: Option<SubcategoryId>,

    pub subcategory_name: Option<String>,

    pub tax_applicability: bool,

    pub tax: f64,

    pub base_amount: f64,

    pub discount: f64,

    pub created_at: DateTime<Utc>,

    pub last_modified_at: DateTime<Utc>,
}


#[derive(sqlx::FromRow)]
pub(super) struct InternalItemModel {
    pub(super) id: Uuid,

    pub(super) name: String,

    pub(super) image_url: String,

    pub(super) description: Option<String>,

    pub(super) category_id: Uuid,

    pub(super) subcategory_id: Option<Uuid>,

    pub(super) tax_applicability: bool,

    pub(super) tax: f64,

    pub(super) base_amount: f64,

    pub(super) discount: f64,

    pub(super) created_at: DateTime<Utc>,

    pub(super) last_modified_at: DateTime<Utc>,
}

impl IntoExternalModel for InternalItemModel {
    type ExternalModel = ItemModel;

    fn into_external_model(self) -> Self::ExternalModel {
        Self::ExternalModel {
            id: ItemId::new(self.id),
            name: self.name,
            image_url: self.image_url,
            description: self.description,
            category_id: CategoryId::new(self.category_id),
            subcategory_id: self.subcategory_id.map(SubcategoryId::new),
            tax_applicability: self.tax_applicability,
            tax: self.tax,
            base_amount: self.base_amount,
            discount: self.discount,
            created_at: self.created_at,
            last_modified_at: self.last_modified_at,
        }
    }
}


#[derive(sqlx::FromRow)]
pub(super) struct InternalExtendedItemModel {
    pub(super) id: Uuid,

    pub(super) name: String,

    pub(super) image_url: String,

    pub(super) description: Option<String>,

    pub(super) category_id: Uuid,

    pub(super) category_name: String,

    pub(super) subcategory_id: Option<Uuid>,

    pub(super) subcategory_name: Option<String>,

    pub(super) tax_applicability: bool,

    pub(super) tax: f64,

    pub(super) base_amount: f64,

    pub(super) discount: f64,

    pub(super) created_at: DateTime<Utc>,

    pub(super) last_modified_at: DateTime<Utc>,
}

impl IntoExternalModel for InternalExtendedItemModel {
    type ExternalModel = ExtendedItemModel;

    fn into_external_model(self) -> Self::ExternalModel {
        Self::ExternalModel {
            id: ItemId::new(self.id),
            name: self.name,
            image_url: self.image_url,
            description: self.description,
            category_id: CategoryId::new(self.category_id),
            category_name: self.category_name,
            subcategory_id: self.subcategory_id.map(SubcategoryId::new),
            subcategory_name: self.subcategory_name,
            tax_applicability: self.tax_applicability,
            tax: self.tax,
            base_amount: self.base_amount,
            discount: self.discount,
            created_at: self.created_at,
            last_modified_at: self.last_modified_at,
        }
    }
}
