use async_graphql::MaybeUndefined;
use serde::Serialize;

/// Body of a create call. The store assigns the `id`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub age: String,
    pub hair_colour: String,
    pub eye_colour: String,
}

/// Body of a partial update. `id` travels in both the path and the body.
///
/// Undefined fields are left out of the body, explicit nulls are sent as null.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerPatch {
    pub id: String,
    #[serde(skip_serializing_if = "MaybeUndefined::is_undefined")]
    pub name: MaybeUndefined<String>,
    #[serde(skip_serializing_if = "MaybeUndefined::is_undefined")]
    pub age: MaybeUndefined<i32>,
    #[serde(skip_serializing_if = "MaybeUndefined::is_undefined")]
    pub email: MaybeUndefined<String>,
    #[serde(skip_serializing_if = "MaybeUndefined::is_undefined")]
    pub hair_colour: MaybeUndefined<String>,
    #[serde(skip_serializing_if = "MaybeUndefined::is_undefined")]
    pub eye_colour: MaybeUndefined<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn patch_keeps_id_and_skips_undefined() {
        let patch = CustomerPatch {
            id: "2".to_string(),
            name: MaybeUndefined::Value("X".to_string()),
            age: MaybeUndefined::Undefined,
            email: MaybeUndefined::Null,
            hair_colour: MaybeUndefined::Undefined,
            eye_colour: MaybeUndefined::Undefined,
        };

        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({ "id": "2", "name": "X", "email": null })
        );
    }
}
