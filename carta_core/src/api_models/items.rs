use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::ids::{CategoryId, ItemId, SubcategoryId};


/// An item, as returned by the API.
///
/// `category_name` and `subcategory_name` are joined in from the parents at
/// read time. `total_amount` is always computed as `base_amount - discount`
/// and is never stored or directly updatable.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct Item {
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

    pub total_amount: f64,

    pub created_at: DateTime<Utc>,

    pub last_modified_at: DateTime<Utc>,
}



#[derive(Deserialize, Clone, PartialEq, Debug, ToSchema)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Serialize))]
#[schema(
    example = json!({
        "name": "Pizza Margherita",
        "image_url": "https://cdn.example.com/images/margherita.png",
        "category_id": "0191c8a23c6e7d30934c65e7a6271d6a",
        "base_amount": 100.0,
        "discount": 15.0,
    })
)]
pub struct ItemCreationRequest {
    pub name: String,

    pub image_url: String,

    pub description: Option<String>,

    pub category_id: Uuid,

    pub subcategory_id: Option<Uuid>,

    /// Resolved at creation time when not provided:
    /// subcategory first (if any), category otherwise.
    pub tax_applicability: Option<bool>,

    /// Resolved at creation time when not provided, like `tax_applicability`.
    pub tax: Option<f64>,

    pub base_amount: f64,

    /// Defaults to `0` when not provided.
    pub discount: Option<f64>,
}



#[derive(Deserialize, Clone, PartialEq, Debug, ToSchema)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Serialize))]
pub struct ItemUpdateRequest {
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

    /// References are not re-validated on edit; the new id is stored as-is.
    pub new_category_id: Option<Uuid>,

    /// Setting this to `null` detaches the item from its subcategory.
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<Uuid>)]
    pub new_subcategory_id: Option<Option<Uuid>>,

    pub new_tax_applicability: Option<bool>,

    pub new_tax: Option<f64>,

    pub new_base_amount: Option<f64>,

    pub new_discount: Option<f64>,
}

impl ItemUpdateRequest {
    pub fn has_no_fields_to_update(&self) -> bool {
        self.new_name.is_none()
            && self.new_image_url.is_none()
            && self.new_description.is_none()
            && self.new_category_id.is_none()
            && self.new_subcategory_id.is_none()
            && self.new_tax_applicability.is_none()
            && self.new_tax.is_none()
            && self.new_base_amount.is_none()
            && self.new_discount.is_none()
    }
}



/// Query parameters accepted by the item search endpoint.
#[derive(Deserialize, Clone, PartialEq, Eq, Debug, IntoParams)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Serialize))]
#[into_params(parameter_in = Query)]
pub struct ItemSearchParameters {
    /// Case-insensitive substring to match against item names.
    pub name: Option<String>,
}



#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn update_request_distinguishes_absent_null_and_set_subcategory() {
        let absent: ItemUpdateRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(absent.new_subcategory_id, None);
        assert!(absent.has_no_fields_to_update());

        let cleared: ItemUpdateRequest =
            serde_json::from_value(serde_json::json!({ "new_subcategory_id": null })).unwrap();
        assert_eq!(cleared.new_subcategory_id, Some(None));

        let target_id = "0191c8a2-3c6e-7d30-934c-65e7a6271d6a".parse::<Uuid>().unwrap();
        let replaced: ItemUpdateRequest = serde_json::from_value(serde_json::json!({
            "new_subcategory_id": target_id,
        }))
        .unwrap();
        assert_eq!(replaced.new_subcategory_id, Some(Some(target_id)));
    }
}
