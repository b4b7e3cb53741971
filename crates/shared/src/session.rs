//! Session context and role-based module access.
//!
//! The authentication collaborator stores `{email, role}` against an opaque
//! session token. Once the request boundary resolves that token, the result is
//! carried explicitly as a [`SessionContext`]; nothing downstream reads ambient
//! session state.

use serde::{Deserialize, Serialize};

/// A user role as recorded by the authentication collaborator.
///
/// Roles are compared case-insensitively. Unknown roles are preserved verbatim
/// in [`Role::Other`] so they can still be logged and matched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    /// Full administrative access.
    Admin,
    /// Read-mostly visitor account.
    Guest,
    /// Finance staff.
    Accountant,
    /// Human resources staff.
    Hr,
    /// Warehouse staff.
    InventoryManager,
    /// Default role for self-registered users.
    User,
    /// Any other role string.
    Other(String),
}

impl Role {
    /// Parses a role string, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "admin" => Self::Admin,
            "guest" => Self::Guest,
            "accountant" => Self::Accountant,
            "hr" => Self::Hr,
            "inventorymanager" => Self::InventoryManager,
            "user" => Self::User,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    /// Returns the canonical spelling of the role.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "Admin",
            Self::Guest => "Guest",
            Self::Accountant => "Accountant",
            Self::Hr => "HR",
            Self::InventoryManager => "InventoryManager",
            Self::User => "User",
            Self::Other(s) => s,
        }
    }

    fn matches(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Other(a), Self::Other(b)) => a.eq_ignore_ascii_case(b),
            _ => self == other,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// The resolved identity of the caller for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Email of the signed-in user.
    pub email: String,
    /// Role recorded for the session.
    pub role: Role,
}

impl SessionContext {
    /// Creates a new session context.
    #[must_use]
    pub fn new(email: impl Into<String>, role: Role) -> Self {
        Self {
            email: email.into(),
            role,
        }
    }
}

/// Set of roles permitted to reach a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPolicy {
    allowed: Vec<Role>,
}

impl AccessPolicy {
    /// Creates a policy from role names.
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            allowed: names.into_iter().map(|n| Role::parse(n.as_ref())).collect(),
        }
    }

    /// Roles that may open the financial ledger.
    #[must_use]
    pub fn ledger() -> Self {
        Self {
            allowed: vec![Role::Admin, Role::Guest, Role::Accountant],
        }
    }

    /// Returns true if the role may pass.
    #[must_use]
    pub fn permits(&self, role: &Role) -> bool {
        self.allowed.iter().any(|allowed| allowed.matches(role))
    }

    /// Returns the allowed roles.
    #[must_use]
    pub fn roles(&self) -> &[Role] {
        &self.allowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("admin", Role::Admin)]
    #[case("ADMIN", Role::Admin)]
    #[case(" Guest ", Role::Guest)]
    #[case("accountant", Role::Accountant)]
    #[case("HR", Role::Hr)]
    #[case("InventoryManager", Role::InventoryManager)]
    #[case("user", Role::User)]
    fn test_role_parse_known(#[case] raw: &str, #[case] expected: Role) {
        assert_eq!(Role::parse(raw), expected);
    }

    #[test]
    fn test_role_parse_unknown_keeps_text() {
        assert_eq!(Role::parse(" Auditor "), Role::Other("Auditor".to_string()));
    }

    #[rstest]
    #[case("Admin", true)]
    #[case("admin", true)]
    #[case("GUEST", true)]
    #[case("Accountant", true)]
    #[case("HR", false)]
    #[case("InventoryManager", false)]
    #[case("user", false)]
    #[case("", false)]
    fn test_ledger_policy(#[case] raw: &str, #[case] allowed: bool) {
        assert_eq!(AccessPolicy::ledger().permits(&Role::parse(raw)), allowed);
    }

    #[test]
    fn test_policy_from_names_matches_custom_roles_case_insensitively() {
        let policy = AccessPolicy::from_names(["admin", "Auditor"]);
        assert!(policy.permits(&Role::parse("auditor")));
        assert!(policy.permits(&Role::Admin));
        assert!(!policy.permits(&Role::Guest));
    }

    #[test]
    fn test_role_serde_uses_canonical_spelling() {
        let ctx = SessionContext::new("admin@example.com", Role::parse("admin"));
        let json = serde_json::to_value(&ctx).unwrap();
        assert_eq!(json["role"], "Admin");
        let back: SessionContext = serde_json::from_value(json).unwrap();
        assert_eq!(back, ctx);
    }
}
