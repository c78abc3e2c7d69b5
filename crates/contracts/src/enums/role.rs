use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of user roles. Every role maps to exactly one home route
/// subtree; there is no fallback branch, adding a role forces the match
/// arms to be extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Staff,
}

impl Role {
    /// Landing page for this role after login or a wrong-subtree redirect.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin/dashboard",
            Role::Staff => "/staff/dashboard",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_lowercase_wire_values() {
        assert_eq!(serde_json::from_str::<Role>("\"admin\"").unwrap(), Role::Admin);
        assert_eq!(serde_json::from_str::<Role>("\"staff\"").unwrap(), Role::Staff);
        assert!(serde_json::from_str::<Role>("\"root\"").is_err());
    }

    #[test]
    fn every_role_has_a_home_path() {
        assert_eq!(Role::Admin.home_path(), "/admin/dashboard");
        assert_eq!(Role::Staff.home_path(), "/staff/dashboard");
    }
}
