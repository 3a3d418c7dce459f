use async_graphql::SimpleObject;
use serde::{
    de::{self, Unexpected},
    Deserialize, Deserializer,
};

/// A customer record held by the customer store.
///
/// Store responses are decoded strictly into this shape: keys other than the
/// six declared fields are rejected, missing optional fields resolve to null.
#[derive(SimpleObject, Deserialize, Debug, Clone, PartialEq, Eq)]
#[graphql(rename_fields = "snake_case")]
#[serde(deny_unknown_fields)]
pub struct Customer {
    /// The identifier assigned by the store
    #[serde(deserialize_with = "string_or_int")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "int_or_numeric_string")]
    pub age: Option<i32>,
    #[serde(default)]
    pub hair_colour: Option<String>,
    #[serde(default)]
    pub eye_colour: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Age {
    Int(i32),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Id {
    Text(String),
    Int(i64),
}

/// Stores seeded with numeric ids keep assigning integers.
fn string_or_int<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Id::deserialize(deserializer)? {
        Id::Text(id) => id,
        Id::Int(id) => id.to_string(),
    })
}

/// `addCustomer` sends `age` as a string and the store keeps it verbatim.
fn int_or_numeric_string<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Age>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Age::Int(age)) => Ok(Some(age)),
        Some(Age::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| de::Error::invalid_value(Unexpected::Str(&text), &"an integer")),
    }
}
