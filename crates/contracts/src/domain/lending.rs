use crate::domain::restoration::Restoration;
use crate::domain::stuff::Stuff;
use serde::{Deserialize, Serialize};

/// A borrowing transaction. Terminal once a restoration is attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lending {
    pub id: String,
    #[serde(default)]
    pub stuff_id: Option<String>,
    #[serde(default)]
    pub stuff: Option<Stuff>,
    /// Borrower name.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub total_stuff: i64,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub date_time: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub restoration: Option<Restoration>,
}

impl Lending {
    pub fn is_returned(&self) -> bool {
        self.restoration.is_some()
    }

    pub fn stuff_name(&self) -> Option<&str> {
        self.stuff.as_ref().map(|s| s.name.as_str())
    }

    /// Most specific timestamp, falling back to creation time.
    pub fn timestamp(&self) -> Option<&str> {
        self.date_time.as_deref().or(self.created_at.as_deref())
    }
}

/// Body for `POST /lendings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LendingPayload {
    pub stuff_id: String,
    pub name: String,
    pub total_stuff: i64,
    pub note: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_open_lending() {
        let lending: Lending = serde_json::from_str(
            r#"{"id":"l1","stuff_id":"s1","name":"Budi","total_stuff":5,"date_time":"2024-02-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert!(!lending.is_returned());
        assert_eq!(lending.stuff_name(), None);
        assert_eq!(lending.timestamp(), Some("2024-02-01T10:00:00Z"));
    }

    #[test]
    fn embedded_restoration_marks_returned() {
        let lending: Lending = serde_json::from_str(
            r#"{"id":"l2","name":"Sari","total_stuff":2,
                "restoration":{"id":"r1","lending_id":"l2","total_good_stuff":2,"total_defec_stuff":0}}"#,
        )
        .unwrap();
        assert!(lending.is_returned());
        assert_eq!(lending.restoration.unwrap().total_good_stuff, 2);
    }
}
