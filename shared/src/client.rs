//! Auth-related types shared between the API and the client
//!
//! Login/identity payloads used by `sipinjam-client` and persisted in the
//! CLI session file.

use serde::{Deserialize, Serialize};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Account role, decides which screens/commands are available
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    BuildingManager,
    Borrower,
    #[serde(other)]
    Unknown,
}

impl UserRole {
    /// Whether the role may use the admin CRUD screens
    pub fn is_staff(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::BuildingManager)
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::BuildingManager => "Pengelola Gedung",
            UserRole::Borrower => "Peminjam",
            UserRole::Unknown => "Tidak Diketahui",
        }
    }
}

/// User information
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub borrower_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_role_does_not_fail() {
        let user: UserInfo = serde_json::from_value(serde_json::json!({
            "id": "u1",
            "name": "Sari",
            "email": "sari@kampus.ac.id",
            "role": "AUDITOR"
        }))
        .unwrap();
        assert_eq!(user.role, UserRole::Unknown);
        assert!(!user.role.is_staff());
    }

    #[test]
    fn test_staff_roles() {
        assert!(UserRole::Admin.is_staff());
        assert!(UserRole::BuildingManager.is_staff());
        assert!(!UserRole::Borrower.is_staff());
    }
}
