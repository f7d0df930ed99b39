use std::str::FromStr;

use carta_core::ids::CategoryId;
use carta_core::tax::TaxType;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{QueryError, TryIntoExternalModel};


pub struct CategoryModel {
    pub id: CategoryId,

    pub name: String,

    pub image_url: String,

    pub description: Option<String>,

    pub tax_applicability: bool,

    pub tax: f64,

    pub tax_type: Option<TaxType>,

    pub created_at: DateTime<Utc>,

    pub last_modified_at: DateTime<Utc>,
}


/// Raw `carta.category` row, as fetched by the query layer.
#[derive(sqlx::FromRow)]
pub(super) struct InternalCategoryModel {
    pub(super) id: Uuid,

    pub(super) name: String,

    pub(super) image_url: String,

    pub(super) description: Option<String>,

    pub(super) tax_applicability: bool,

    pub(super) tax: f64,

    pub(super) tax_type: Option<String>,

    pub(super) created_at: DateTime<Utc>,

    pub(super) last_modified_at: DateTime<Utc>,
}

impl TryIntoExternalModel for InternalCategoryModel {
    type ExternalModel = CategoryModel;
    type Error = QueryError;

    fn try_into_external_model(self) -> Result<Self::ExternalModel, Self::Error> {
        let tax_type = self
            .tax_type
            .map(|stored_tax_type| {
                TaxType::from_str(&stored_tax_type).map_err(|error| {
                    QueryError::database_inconsistency(format!(
                        "category {} has an unrecognized tax type: {}",
                        self.id, error.unrecognized_value
                    ))
                })
            })
            .transpose()?;

        Ok(Self::ExternalModel {
            id: CategoryId::new(self.id),
            name: self.name,
            image_url: self.image_url,
            description: self.description,
            tax_applicability: self.tax_applicability,
            tax: self.tax,
            tax_type,
            created_at: self.created_at,
            last_modified_at: self.last_modified_at,
        })
    }
}
