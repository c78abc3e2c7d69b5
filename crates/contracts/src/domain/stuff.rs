use serde::{Deserialize, Serialize};

/// Item categories offered by the create/edit form. The server accepts
/// free-form values, so list filters are still driven by the fetched data.
pub const STUFF_TYPES: &[&str] = &["HTL/KLN", "Lab", "Sarpras"];

/// Derived stock summary. Never edited directly; it moves only through
/// inbound and restoration records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StuffStock {
    #[serde(default)]
    pub total_available: i64,
    #[serde(default)]
    pub total_defec: i64,
}

/// An inventory item type as returned by `GET /stuffs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stuff {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub stuff_type: String,
    #[serde(default)]
    pub stuff_stock: Option<StuffStock>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Stuff {
    /// Available quantity, 0 when no stock record exists yet.
    pub fn available(&self) -> i64 {
        self.stuff_stock
            .as_ref()
            .map(|s| s.total_available)
            .unwrap_or(0)
    }

    pub fn defective(&self) -> i64 {
        self.stuff_stock
            .as_ref()
            .map(|s| s.total_defec)
            .unwrap_or(0)
    }
}

/// Body for `POST /stuffs` and `PATCH /stuffs/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StuffPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub stuff_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_item_with_stock() {
        let stuff: Stuff = serde_json::from_str(
            r#"{"id":"s1","name":"Projector","type":"Lab","stuff_stock":{"total_available":4,"total_defec":1},"updated_at":"2024-01-05T09:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(stuff.stuff_type, "Lab");
        assert_eq!(stuff.available(), 4);
        assert_eq!(stuff.defective(), 1);
    }

    #[test]
    fn missing_stock_reads_as_zero() {
        let stuff: Stuff =
            serde_json::from_str(r#"{"id":"s2","name":"Chair","type":"Sarpras"}"#).unwrap();
        assert!(stuff.stuff_stock.is_none());
        assert_eq!(stuff.available(), 0);
        assert_eq!(stuff.defective(), 0);
    }

    #[test]
    fn payload_serializes_type_field_name() {
        let payload = StuffPayload {
            name: "Router".into(),
            stuff_type: "HTL/KLN".into(),
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"name":"Router","type":"HTL/KLN"}"#);
    }
}
