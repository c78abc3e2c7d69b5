use serde::{Deserialize, Serialize};

/// The return transaction closing a lending. Created at most once per
/// lending; the good/defective split must sum to the borrowed quantity
/// (enforced server-side, checked client-side before dispatch).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restoration {
    pub id: String,
    #[serde(default)]
    pub lending_id: Option<String>,
    #[serde(default)]
    pub total_good_stuff: i64,
    #[serde(default)]
    pub total_defec_stuff: i64,
    #[serde(default)]
    pub date_time: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Restoration {
    /// Most specific timestamp, falling back to creation time.
    pub fn timestamp(&self) -> Option<&str> {
        self.date_time.as_deref().or(self.created_at.as_deref())
    }
}

/// Body for `POST /restorations`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RestorationPayload {
    pub lending_id: String,
    pub total_good_stuff: i64,
    pub total_defec_stuff: i64,
}
