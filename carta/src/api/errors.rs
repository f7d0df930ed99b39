//! Provides ways of handling errors in API endpoint functions
//! and ways to have those errors automatically turned into correct
//! HTTP error responses when returned as `Err(error)` from those functions.

use std::borrow::Cow;

use actix_http::header::{HeaderName, HeaderValue};
use actix_web::body::BoxBody;
use actix_web::http::{header, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use carta_core::api_models::ErrorResponse;
use carta_database::QueryError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;


/// Pertains to all endpoints under `/categories`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[non_exhaustive]
pub enum CategoryErrorReason {
    CategoryNotFound,

    /// This error is returned when:
    /// - attempting to create a category with a name that is
    ///   already present on an existing category,
    /// - attempting to rename an existing category to a name that is
    ///   already present on another category.
    NameAlreadyExists,

    /// This error is returned when:
    /// - calling the category update endpoint with the request
    ///   body not indicating any fields to update (no fields present).
    NoFieldsToUpdate,
}

impl CategoryErrorReason {
    pub const fn category_not_found() -> Self {
        Self::CategoryNotFound
    }

    pub const fn name_already_exists() -> Self {
        Self::NameAlreadyExists
    }

    pub const fn no_fields_to_update() -> Self {
        Self::NoFieldsToUpdate
    }
}


/// Pertains to all endpoints under `/subcategories`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[non_exhaustive]
pub enum SubcategoryErrorReason {
    SubcategoryNotFound,

    /// The category referenced by a subcategory being created does not exist.
    ParentCategoryNotFound,

    NoFieldsToUpdate,
}

impl SubcategoryErrorReason {
    pub const fn subcategory_not_found() -> Self {
        Self::SubcategoryNotFound
    }

    pub const fn parent_category_not_found() -> Self {
        Self::ParentCategoryNotFound
    }

    pub const fn no_fields_to_update() -> Self {
        Self::NoFieldsToUpdate
    }
}


/// Pertains to all endpoints under `/items`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[non_exhaustive]
pub enum ItemErrorReason {
    ItemNotFound,

    /// The category referenced by an item being created does not exist.
    ParentCategoryNotFound,

    /// The subcategory referenced by an item being created does not exist.
    ParentSubcategoryNotFound,

    /// The referenced subcategory exists, but belongs to a different
    /// category than the one provided for the item.
    SubcategoryDoesNotBelongToCategory,

    /// The search endpoint was called without a (non-empty) search term.
    MissingSearchTerm,

    NoFieldsToUpdate,
}

impl ItemErrorReason {
    pub const fn item_not_found() -> Self {
        Self::ItemNotFound
    }

    pub const fn parent_category_not_found() -> Self {
        Self::ParentCategoryNotFound
    }

    pub const fn parent_subcategory_not_found() -> Self {
        Self::ParentSubcategoryNotFound
    }

    pub const fn subcategory_does_not_belong_to_category() -> Self {
        Self::SubcategoryDoesNotBelongToCategory
    }

    pub const fn missing_search_term() -> Self {
        Self::MissingSearchTerm
    }

    pub const fn no_fields_to_update() -> Self {
        Self::NoFieldsToUpdate
    }
}



#[derive(Debug, PartialEq, Eq, Clone)]
#[non_exhaustive]
pub enum ErrorReason {
    Category(CategoryErrorReason),

    Subcategory(SubcategoryErrorReason),

    Item(ItemErrorReason),

    /// A path parameter that should have been a UUID wasn't one.
    InvalidUuidFormat,

    Other { message: Cow<'static, str> },
}

impl ErrorReason {
    pub const fn invalid_uuid_format() -> Self {
        Self::InvalidUuidFormat
    }

    /// The `message` string that ends up in the response body for
    /// this reason.
    pub fn message(&self) -> Cow<'static, str> {
        match self {
            Self::Category(category_error_reason) => match category_error_reason {
                CategoryErrorReason::CategoryNotFound => Cow::from("Category not found"),
                CategoryErrorReason::NameAlreadyExists => Cow::from("Category already exists"),
                CategoryErrorReason::NoFieldsToUpdate => {
                    Cow::from("At least one field to update must be provided")
                }
            },
            Self::Subcategory(subcategory_error_reason) => match subcategory_error_reason {
                SubcategoryErrorReason::SubcategoryNotFound => Cow::from("Sub-category not found"),
                SubcategoryErrorReason::ParentCategoryNotFound => {
                    Cow::from("Parent category not found")
                }
                SubcategoryErrorReason::NoFieldsToUpdate => {
                    Cow::from("At least one field to update must be provided")
                }
            },
            Self::Item(item_error_reason) => match item_error_reason {
                ItemErrorReason::ItemNotFound => Cow::from("Item not found"),
                ItemErrorReason::ParentCategoryNotFound => Cow::from("Parent category not found"),
                ItemErrorReason::ParentSubcategoryNotFound => {
                    Cow::from("Parent sub-category not found")
                }
                ItemErrorReason::SubcategoryDoesNotBelongToCategory => {
                    Cow::from("Sub-category does not belong to the provided category")
                }
                ItemErrorReason::MissingSearchTerm => {
                    Cow::from("Search query \"name\" is required")
                }
                ItemErrorReason::NoFieldsToUpdate => {
                    Cow::from("At least one field to update must be provided")
                }
            },
            Self::InvalidUuidFormat => Cow::from("Invalid UUID format"),
            Self::Other { message } => message.clone(),
        }
    }
}

impl From<CategoryErrorReason> for ErrorReason {
    fn from(value: CategoryErrorReason) -> Self {
        Self::Category(value)
    }
}

impl From<SubcategoryErrorReason> for ErrorReason {
    fn from(value: SubcategoryErrorReason) -> Self {
        Self::Subcategory(value)
    }
}

impl From<ItemErrorReason> for ErrorReason {
    fn from(value: ItemErrorReason) -> Self {
        Self::Item(value)
    }
}



/// General-purpose Carta API error type.
///
/// Use this type alongside an [`EndpointResult`] return type in actix
/// endpoint handlers: `?`-returning any of these variants produces the
/// matching 4xx/5xx HTTP response (see the [`ResponseError`] impl below).
///
/// Client errors with a *known* reason should not go through this type;
/// respond with [`EndpointResponseBuilder`] and an [`ErrorReason`] instead,
/// so the status code stays visible in the endpoint function.
#[derive(Debug, Error)]
pub enum EndpointError {
    /*
     * Client errors.
     */
    /// A path parameter that should have been a UUID wasn't one.
    /// Produces a `400 Bad Request`.
    #[error("invalid UUID format")]
    InvalidUuidFormat {
        #[source]
        error: uuid::Error,
    },

    /*
     * Server errors.
     */
    /// Internal error with a string reason.
    /// Produces a `500 Internal Server Error`.
    #[error("internal error: {}", .reason)]
    InternalErrorWithReason { reason: Cow<'static, str> },

    /// Internal error, constructed from a boxed [`Error`][std::error::Error].
    /// Produces a `500 Internal Server Error`.
    #[error("internal error")]
    InternalGenericError {
        #[from]
        #[source]
        error: Box<dyn std::error::Error>,
    },

    /// Internal error, constructed from a [`sqlx::Error`].
    /// Produces a `500 Internal Server Error`.
    #[error("internal database error")]
    InternalDatabaseError {
        #[from]
        #[source]
        error: sqlx::Error,
    },

    /// The database returned something that should not be possible
    /// (e.g. a delete by primary key affecting two rows).
    /// Produces a `500 Internal Server Error`.
    #[error("invalid database state: {}", .problem)]
    InvalidDatabaseState { problem: Cow<'static, str> },
}

impl EndpointError {
    #[allow(unused)]
    pub fn internal_error<E>(error: E) -> Self
    where
        E: std::error::Error + 'static,
    {
        Self::InternalGenericError {
            error: Box::new(error),
        }
    }

    #[inline]
    pub fn internal_error_with_reason<S>(reason: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::InternalErrorWithReason {
            reason: reason.into(),
        }
    }

    #[inline]
    pub fn invalid_database_state<S>(problem: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::InvalidDatabaseState {
            problem: problem.into(),
        }
    }

    /// The `error` string exposed in the response body, if any.
    ///
    /// Internal reasons and database-state problems stay internal;
    /// the underlying error message of a storage failure is passed
    /// through, matching what callers of this API historically got.
    fn external_error_string(&self) -> Option<String> {
        match self {
            Self::InvalidUuidFormat { error } => Some(error.to_string()),
            Self::InternalErrorWithReason { .. } => None,
            Self::InternalGenericError { error } => Some(error.to_string()),
            Self::InternalDatabaseError { error } => Some(error.to_string()),
            Self::InvalidDatabaseState { .. } => None,
        }
    }
}

impl ResponseError for EndpointError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidUuidFormat { .. } => StatusCode::BAD_REQUEST,
            Self::InternalErrorWithReason { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InternalGenericError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InternalDatabaseError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidDatabaseState { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        if self.status_code().is_server_error() {
            error!(error = ?self, "Endpoint failed with an internal error.");
        }

        let message = match self {
            Self::InvalidUuidFormat { .. } => ErrorReason::invalid_uuid_format().message(),
            _ => Cow::from("Internal server error"),
        };

        let response_body = match self.external_error_string() {
            Some(error_string) => ErrorResponse::with_error(message, error_string),
            None => ErrorResponse::new(message),
        };

        let fallibly_built_response = EndpointResponseBuilder::new(self.status_code())
            .with_json_body(response_body)
            .build();

        fallibly_built_response.unwrap_or_else(|_| HttpResponse::InternalServerError().finish())
    }
}


impl From<QueryError> for EndpointError {
    fn from(value: QueryError) -> Self {
        match value {
            QueryError::SqlxError { error } => Self::InternalDatabaseError { error },
            QueryError::ModelError { reason } => Self::InternalErrorWithReason { reason },
            QueryError::DatabaseInconsistencyError { problem } => {
                Self::InvalidDatabaseState { problem }
            }
        }
    }
}



pub struct EndpointResponseBuilder {
    status_code: StatusCode,

    body: Option<Result<Vec<u8>, serde_json::Error>>,

    additional_headers: Vec<(HeaderName, HeaderValue)>,
}

impl EndpointResponseBuilder {
    pub fn new(status_code: StatusCode) -> Self {
        Self {
            status_code,
            body: None,
            additional_headers: Vec::with_capacity(1),
        }
    }

    #[inline]
    pub fn ok() -> Self {
        Self::new(StatusCode::OK)
    }

    #[inline]
    pub fn created() -> Self {
        Self::new(StatusCode::CREATED)
    }

    #[inline]
    pub fn bad_request() -> Self {
        Self::new(StatusCode::BAD_REQUEST)
    }

    #[inline]
    pub fn conflict() -> Self {
        Self::new(StatusCode::CONFLICT)
    }

    #[inline]
    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND)
    }

    pub fn with_json_body<S>(mut self, data: S) -> Self
    where
        S: Serialize,
    {
        let body = serde_json::to_vec(&data);

        self.additional_headers.push((
            header::CONTENT_TYPE,
            HeaderValue::from_static(mime::APPLICATION_JSON.as_ref()),
        ));

        Self {
            status_code: self.status_code,
            body: Some(body),
            additional_headers: self.additional_headers,
        }
    }

    pub fn with_error_reason<R>(self, reason: R) -> Self
    where
        R: Into<ErrorReason>,
    {
        self.with_json_body(ErrorResponse::new(reason.into().message()))
    }

    pub fn build(self) -> Result<HttpResponse<BoxBody>, EndpointError> {
        let optional_body = match self.body {
            Some(body_or_error) => match body_or_error {
                Ok(body) => Some(body),
                Err(serialization_error) => {
                    return Err(EndpointError::internal_error(serialization_error))
                }
            },
            None => None,
        };


        let mut response_builder = HttpResponse::build(self.status_code);

        for (header_name, header_value) in self.additional_headers {
            response_builder.insert_header((header_name, header_value));
        }


        match optional_body {
            Some(body) => Ok(response_builder.body(body)),
            None => Ok(response_builder.finish()),
        }
    }
}




/// Short for [`Result`]`<`[`HttpResponse`]`, `[`EndpointError`]`>`,
/// the return type of nearly every endpoint handler in this crate.
pub type EndpointResult<Body = BoxBody> = Result<HttpResponse<Body>, EndpointError>;



#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reason_messages_match_the_public_api_contract() {
        assert_eq!(
            ErrorReason::from(CategoryErrorReason::category_not_found()).message(),
            "Category not found"
        );
        assert_eq!(
            ErrorReason::from(CategoryErrorReason::name_already_exists()).message(),
            "Category already exists"
        );
        assert_eq!(
            ErrorReason::from(ItemErrorReason::subcategory_does_not_belong_to_category())
                .message(),
            "Sub-category does not belong to the provided category"
        );
        assert_eq!(
            ErrorReason::from(ItemErrorReason::missing_search_term()).message(),
            "Search query \"name\" is required"
        );
    }

    #[test]
    fn uuid_errors_turn_into_bad_requests() {
        let parse_error = "definitely-not-a-uuid".parse::<uuid::Uuid>().unwrap_err();

        let endpoint_error = EndpointError::InvalidUuidFormat { error: parse_error };

        assert_eq!(endpoint_error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_errors_turn_into_internal_server_errors() {
        let endpoint_error = EndpointError::from(QueryError::SqlxError {
            error: sqlx::Error::PoolClosed,
        });

        assert_eq!(
            endpoint_error.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
