use std::str::FromStr;


pub trait CartaUuidNewtype: FromStr {}


macro_rules! create_uuid_newtype {
    ($struct_name:ident) => {
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $struct_name(#[serde(with = "uuid::serde::simple")] pub(crate) uuid::Uuid);

        impl $struct_name {
            #[inline]
            pub fn new(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }

            #[inline]
            pub fn generate() -> Self {
                Self(uuid::Uuid::now_v7())
            }

            #[inline]
            pub fn into_uuid(self) -> uuid::Uuid {
                self.0
            }
        }

        impl std::str::FromStr for $struct_name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let inner_uuid = <uuid::Uuid as std::str::FromStr>::from_str(s)?;

                Ok(Self(inner_uuid))
            }
        }

        impl $crate::ids::CartaUuidNewtype for $struct_name {}

        impl std::fmt::Display for $struct_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                uuid::fmt::Simple::from_uuid(self.0).fmt(f)
            }
        }

        impl<'s> utoipa::ToSchema<'s> for $struct_name {
            fn schema() -> (
                &'s str,
                utoipa::openapi::RefOr<utoipa::openapi::schema::Schema>,
            ) {
                (
                    stringify!($struct_name),
                    utoipa::openapi::ObjectBuilder::new()
                        .schema_type(utoipa::openapi::SchemaType::String)
                        .format(Some(utoipa::openapi::SchemaFormat::KnownFormat(
                            utoipa::openapi::KnownFormat::Uuid,
                        )))
                        .into(),
                )
            }
        }
    };
}



create_uuid_newtype!(CategoryId);

create_uuid_newtype!(SubcategoryId);

create_uuid_newtype!(ItemId);



#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn parses_both_hyphenated_and_simple_uuid_formats() {
        let hyphenated = CategoryId::from_str("0191c8a2-3c6e-7d30-934c-65e7a6271d6a").unwrap();
        let simple = CategoryId::from_str("0191c8a23c6e7d30934c65e7a6271d6a").unwrap();

        assert_eq!(hyphenated, simple);
    }

    #[test]
    fn serializes_as_simple_uuid_string() {
        let id = ItemId::from_str("0191c8a2-3c6e-7d30-934c-65e7a6271d6a").unwrap();

        let serialized = serde_json::to_value(id).unwrap();

        assert_eq!(
            serialized.as_str().unwrap(),
            "0191c8a23c6e7d30934c65e7a6271d6a"
        );
    }

    #[test]
    fn display_matches_serialized_representation() {
        let id = SubcategoryId::generate();

        let serialized = serde_json::to_value(id).unwrap();

        assert_eq!(serialized.as_str().unwrap(), id.to_string());
    }
}
