use crate::domain::stuff::Stuff;
use serde::{Deserialize, Serialize};

/// A stock receipt as returned by `GET /inbound-stuffs`. Immutable after
/// creation except for delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboundStuff {
    pub id: String,
    #[serde(default)]
    pub stuff_id: Option<String>,
    #[serde(default)]
    pub stuff: Option<Stuff>,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub proof_file: Option<String>,
    #[serde(default)]
    pub date_time: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl InboundStuff {
    /// Name of the related item, when the relation populated.
    pub fn stuff_name(&self) -> Option<&str> {
        self.stuff.as_ref().map(|s| s.name.as_str())
    }

    /// Most specific timestamp, falling back to creation time.
    pub fn timestamp(&self) -> Option<&str> {
        self.date_time.as_deref().or(self.created_at.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_receipt_with_relation() {
        let item: InboundStuff = serde_json::from_str(
            r#"{"id":"i1","stuff_id":"s1","stuff":{"id":"s1","name":"Projector","type":"Lab"},"total":10,"proof_file":"proof.jpg","date_time":"2024-01-06T08:30:00Z"}"#,
        )
        .unwrap();
        assert_eq!(item.stuff_name(), Some("Projector"));
        assert_eq!(item.timestamp(), Some("2024-01-06T08:30:00Z"));
    }

    #[test]
    fn timestamp_falls_back_to_created_at() {
        let item: InboundStuff = serde_json::from_str(
            r#"{"id":"i2","total":3,"created_at":"2024-01-05T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(item.stuff_name(), None);
        assert_eq!(item.timestamp(), Some("2024-01-05T00:00:00Z"));
    }
}
