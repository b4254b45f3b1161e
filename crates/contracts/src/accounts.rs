use serde::{Deserialize, Serialize};

/// One registered account, as returned by `GET /api/users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountEntry {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Inactive accounts cannot log in until an administrator approves them.
    pub activo: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_parses() {
        let entry: AccountEntry = serde_json::from_str(
            r#"{"id": 3, "username": "maria", "email": "maria@example.com", "activo": false}"#,
        )
        .unwrap();
        assert_eq!(entry.username, "maria");
        assert!(!entry.activo);
    }
}
