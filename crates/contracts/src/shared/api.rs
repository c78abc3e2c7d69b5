use serde::Deserialize;
use std::collections::BTreeMap;

/// List endpoints wrap the collection as `{ "data": [...] }`.
///
/// The explicit bound stops serde from inferring `T: Default` for the
/// defaulted field; item types only need `Deserialize`.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListEnvelope<T> {
    #[serde(default)]
    pub data: Vec<T>,
}

/// Error body for failed mutations. On HTTP 422 `data` carries a
/// field-keyed map of validation messages; on other failures only
/// `message` is populated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<BTreeMap<String, Vec<String>>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_envelope_unwraps_data() {
        let env: ListEnvelope<String> =
            serde_json::from_str(r#"{"data":["a","b"]}"#).unwrap();
        assert_eq!(env.data, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn list_envelope_tolerates_missing_data() {
        let env: ListEnvelope<String> = serde_json::from_str("{}").unwrap();
        assert!(env.data.is_empty());
    }

    #[test]
    fn list_envelope_items_need_no_default_impl() {
        // Stuff has no Default; this must still deserialize
        let env: ListEnvelope<crate::domain::stuff::Stuff> = serde_json::from_str(
            r#"{"data":[{"id":"s1","name":"Projector","type":"Lab"}]}"#,
        )
        .unwrap();
        assert_eq!(env.data.len(), 1);
        assert_eq!(env.data[0].name, "Projector");

        let empty: ListEnvelope<crate::domain::stuff::Stuff> =
            serde_json::from_str("{}").unwrap();
        assert!(empty.data.is_empty());
    }

    #[test]
    fn validation_body_keeps_field_messages() {
        let body: ApiErrorBody = serde_json::from_str(
            r#"{"message":"Invalid input","data":{"name":["Name is required"],"total":["Must be positive"]}}"#,
        )
        .unwrap();
        assert_eq!(body.message.as_deref(), Some("Invalid input"));
        let fields = body.data.unwrap();
        assert_eq!(fields["name"], vec!["Name is required"]);
        assert_eq!(fields["total"], vec!["Must be positive"]);
    }

    #[test]
    fn plain_message_body_parses_without_fields() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"message":"Server error"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("Server error"));
        assert!(body.data.is_none());
    }
}
