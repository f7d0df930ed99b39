/// Defines a struct whose sole purpose is wrapping an async [`Stream`],
/// mapping each item using a closure provided by the user.
///
/// Database queries that return many rows are exposed as streams of raw
/// row structures; wrapping such a stream lets us hand out a stream of
/// strongly-typed models instead, without collecting everything first.
/// The wrapped stream is pinned via [`pin_project_lite`] and the mapping
/// closure runs on every `poll_next` result.
///
/// ```rust,ignore
/// type RawStream<'c> = BoxStream<'c, Result<InternalModel, sqlx::Error>>;
///
/// create_async_stream_wrapper!(
///     pub struct ModelStream<'c>;
///     transforms stream RawStream<'c> => stream of QueryResult<Model>:
///         |value|
///             value.map(
///                 |some| some
///                     .map(InternalModel::into_external_model)
///                     .map_err(|error| QueryError::SqlxError { error })
///             )
/// );
/// ```
///
///
/// [`Stream`]: futures_core::Stream
macro_rules! create_async_stream_wrapper {
    (
        $struct_visibility:vis struct $struct_identifier:ident<$struct_lifetime:lifetime>;
        transforms stream $wrapped_type:ty => stream of $resulting_type:ty:
            |$captured_value:ident| $mapper:expr
    ) => {
        pin_project_lite::pin_project! {
            $struct_visibility struct $struct_identifier<$struct_lifetime> {
                #[pin]
                wrapped: $wrapped_type
            }
        }

        impl<$struct_lifetime> $struct_identifier<$struct_lifetime> {
            #[inline]
            fn new(wrapped: $wrapped_type) -> Self {
                Self { wrapped }
            }
        }

        impl<$struct_lifetime> futures_core::Stream for $struct_identifier<$struct_lifetime> {
            type Item = $resulting_type;

            fn poll_next(
                self: std::pin::Pin<&mut Self>,
                cx: &mut std::task::Context<'_>,
            ) -> std::task::Poll<Option<Self::Item>> {
                let this = self.project();

                match <$wrapped_type as futures_core::Stream>::poll_next(this.wrapped, cx) {
                    std::task::Poll::Ready($captured_value) => std::task::Poll::Ready($mapper),
                    std::task::Poll::Pending => std::task::Poll::Pending,
                }
            }
        }
    };
}
