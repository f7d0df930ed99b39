use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ids::CategoryId;
use crate::tax::TaxType;


#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct Category {
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



#[derive(Deserialize, Clone, PartialEq, Debug, ToSchema)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Serialize))]
#[schema(
    example = json!({
        "name": "Beverages",
        "image_url": "https://cdn.example.com/images/beverages.png",
        "tax_applicability": true,
        "tax": 5.0,
        "tax_type": "percentage",
    })
)]
pub struct CategoryCreationRequest {
    pub name: String,

    pub image_url: String,

    pub description: Option<String>,

    /// Defaults to `false` when not provided.
    pub tax_applicability: Option<bool>,

    /// Defaults to `0` when not provided.
    pub tax: Option<f64>,

    pub tax_type: Option<TaxType>,
}



#[derive(Deserialize, Clone, PartialEq, Debug, ToSchema)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Serialize))]
pub struct CategoryUpdateRequest {
    pub new_name: Option<String>,

    pub new_image_url: Option<String>,

    /// # Interpreting the double option
    /// To distinguish an unset from a null JSON value, this field is a
    /// double option. `None` indicates the field was not present
    /// (i.e. that the description should not change as part of this update),
    /// while `Some(None)` indicates it was set to `null`
    /// (i.e. that the description should be cleared).
    ///
    /// See also: [`serde_with::rust::double_option`].
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub new_description: Option<Option<String>>,

    pub new_tax_applicability: Option<bool>,

    pub new_tax: Option<f64>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<TaxType>)]
    pub new_tax_type: Option<Option<TaxType>>,
}

impl CategoryUpdateRequest {
    pub fn has_no_fields_to_update(&self) -> bool {
        self.new_name.is_none()
            && self.new_image_url.is_none()
            && self.new_description.is_none()
            && self.new_tax_applicability.is_none()
            && self.new_tax.is_none()
            && self.new_tax_type.is_none()
    }
}
