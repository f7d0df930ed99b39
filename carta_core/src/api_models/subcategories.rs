use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::ids::{CategoryId, SubcategoryId};


/// A subcategory, as returned by the API.
///
/// `category_name` is joined in from the parent category at read time;
/// it is not stored on the subcategory itself.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct Subcategory {
    pub id: SubcategoryId,

    pub name: String,

    pub image_url: String,

    pub description: Option<String>,

    pub category_id: CategoryId,

    pub category_name: String,

    /// `None` means the subcategory defers to its category
    /// when items under it resolve their tax settings.
    pub tax_applicability: Option<bool>,

    pub tax: Option<f64>,

    pub created_at: DateTime<Utc>,

    pub last_modified_at: DateTime<Utc>,
}



#[derive(Deserialize, Clone, PartialEq, Debug, ToSchema)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Serialize))]
#[schema(
    example = json!({
        "name": "Soda",
        "image_url": "https://cdn.example.com/images/soda.png",
        "category_id": "0191c8a23c6e7d30934c65e7a6271d6a",
    })
)]
pub struct SubcategoryCreationRequest {
    pub name: String,

    pub image_url: String,

    pub description: Option<String>,

    pub category_id: Uuid,

    /// Inherited from the parent category when not provided.
    pub tax_applicability: Option<bool>,

    /// Inherited from the parent category when not provided.
    pub tax: Option<f64>,
}



#[derive(Deserialize, Clone, PartialEq, Debug, ToSchema)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Serialize))]
pub struct SubcategoryUpdateRequest {
    pub new_name: Option<String>,

    pub new_image_url: Option<String>,

    /// # Interpreting the double option
    /// `None` indicates the field was not present in the request
    /// (i.e. the description should not change as part of this update),
    /// while `Some(None)` indicates it was set to `null`
    /// (i.e. the description should be cleared).
    ///
    /// See also: [`serde_with::rust::double_option`].
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub new_description: Option<Option<String>>,

    /// Setting this to `null` reverts the subcategory to inheriting
    /// applicability from its category (for items created afterwards).
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<bool>)]
    pub new_tax_applicability: Option<Option<bool>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<f64>)]
    pub new_tax: Option<Option<f64>>,
}

impl SubcategoryUpdateRequest {
    pub fn has_no_fields_to_update(&self) -> bool {
        self.new_name.is_none()
            && self.new_image_url.is_none()
            && self.new_description.is_none()
            && self.new_tax_applicability.is_none()
            && self.new_tax.is_none()
    }
}



#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn update_request_distinguishes_absent_from_null() {
        let absent: SubcategoryUpdateRequest =
            serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(absent.new_tax, None);
        assert!(absent.has_no_fields_to_update());

        let null: SubcategoryUpdateRequest =
            serde_json::from_value(serde_json::json!({ "new_tax": null })).unwrap();
        assert_eq!(null.new_tax, Some(None));
        assert!(!null.has_no_fields_to_update());

        let explicit: SubcategoryUpdateRequest =
            serde_json::from_value(serde_json::json!({ "new_tax": 2.5 })).unwrap();
        assert_eq!(explicit.new_tax, Some(Some(2.5)));
    }
}
