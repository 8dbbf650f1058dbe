//! Helpers for `#[serde(with = "...")]` fields holding bytes as base58 strings.

use serde::{de::Error as DeserializerError, Deserialize, Deserializer, Serializer};

pub fn serialize<S>(value: impl AsRef<[u8]>, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer
{
    serializer.serialize_str(&super::encode(value))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where D: Deserializer<'de>
{
    let value = String::deserialize(deserializer)?;
    super::decode(value).map_err(DeserializerError::custom)
}

/// Same as the parent module, for optional fields.
pub mod option {
    use serde::{de::Error as DeserializerError, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<impl AsRef<[u8]>>, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        match value {
            Some(value) => serializer.serialize_some(&crate::base58::encode(value)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
        where D: Deserializer<'de>
    {
        let value: Option<String> = Option::deserialize(deserializer)?;
        value
            .map(|value| crate::base58::decode(value).map_err(DeserializerError::custom))
            .transpose()
    }
}
