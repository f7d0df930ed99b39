/// Conversion from an internal (database-layer) model
/// into the API model serialized in responses.
pub trait IntoApiModel<A> {
    fn into_api_model(self) -> A;
}
