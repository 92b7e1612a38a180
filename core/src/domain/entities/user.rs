//! User entity representing a registered user in the ProjectHub system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Privilege level of a user in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full administrative access
    Admin,
    /// Regular team member
    Member,
}

impl UserRole {
    /// The role name as carried inside tokens ("admin" / "member")
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Member => "member",
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(UserRole::Admin),
            "member" => Ok(UserRole::Member),
            _ => Err(format!("Invalid user role: {}", s)),
        }
    }
}

/// User entity representing a registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address, unique login identifier
    pub email: String,

    /// Display name
    pub name: String,

    /// bcrypt hash of the password; never serialized out of the core layer
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Privilege level
    pub role: UserRole,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,

    /// Timestamp of the user's last login
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Creates a new User instance with the `member` role
    pub fn new(email: String, name: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            name,
            password_hash,
            role: UserRole::Member,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        }
    }

    /// Creates a new User with an explicit role
    pub fn with_role(email: String, name: String, password_hash: String, role: UserRole) -> Self {
        let mut user = Self::new(email, name, password_hash);
        user.role = role;
        user
    }

    /// Updates the last login timestamp
    pub fn update_last_login(&mut self) {
        self.last_login_at = Some(Utc::now());
        self.updated_at = Utc::now();
    }

    /// Checks if the user has administrative privileges
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}
