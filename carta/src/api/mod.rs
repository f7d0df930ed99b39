//! API definitions and annotations for the Carta backend.
//!
//! # Development note
//!
//! We use "" instead of "/" in many places (e.g. `#[get("")]`, etc.)
//! because this allows the user to request e.g. `GET /categories` OR
//! `GET /categories/` and get the correct endpoint both times.
//!
//! For more information, see `actix_web::middleware::NormalizePath` (trim mode).

use std::str::FromStr;

use actix_web::{web, Scope};
use carta_core::ids::CartaUuidNewtype;

use self::categories::categories_router;
use self::health::health_router;
use self::items::items_router;
use self::subcategories::subcategories_router;
use crate::api::errors::EndpointError;

pub mod categories;
pub mod errors;
pub mod health;
pub mod items;
pub mod openapi;
pub mod subcategories;
pub mod traits;


/// Given a string or a string slice (or something that implements `AsRef<str>`),
/// this function attempts to parse the string as a UUID, returning it
/// as the specified Carta UUID newtype, e.g. [`CategoryId`], [`ItemId`], ...
///
/// A malformed value produces an [`EndpointError::InvalidUuidFormat`],
/// i.e. a `400 Bad Request` when propagated out of an endpoint.
///
///
/// [`CategoryId`]: carta_core::ids::CategoryId
/// [`ItemId`]: carta_core::ids::ItemId
#[inline]
pub fn parse_uuid<U>(string: impl AsRef<str>) -> Result<U, EndpointError>
where
    U: CartaUuidNewtype + FromStr<Err = uuid::Error>,
{
    U::from_str(string.as_ref()).map_err(|error| EndpointError::InvalidUuidFormat { error })
}


/// Router for the entire public API, mounted at the server root.
#[rustfmt::skip]
pub fn api_router() -> Scope {
    web::scope("")
        .service(categories_router())
        .service(subcategories_router())
        .service(items_router())
        .service(health_router())
        .service(openapi::openapi_document)
}
