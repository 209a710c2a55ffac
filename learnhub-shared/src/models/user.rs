use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Platform role attached to the signed-in account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Instructor,
    Learner,
}

impl UserRole {
    /// Return the canonical string representation used by the identity service.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Instructor => "instructor",
            Self::Learner => "learner",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Self::Admin),
            "instructor" => Ok(Self::Instructor),
            "learner" => Ok(Self::Learner),
            _ => Err("unknown user role"),
        }
    }
}

/// The signed-in user as reported by `user/v1/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AuthenticatedUser {
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub roles: Vec<UserRole>,
}

impl AuthenticatedUser {
    /// Admins may preview the dashboard in instructor mode.
    #[must_use]
    pub fn can_switch_to_instructor(&self) -> bool {
        self.roles
            .iter()
            .any(|role| matches!(role, UserRole::Admin | UserRole::Instructor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [UserRole::Admin, UserRole::Instructor, UserRole::Learner] {
            assert_eq!(role.as_str().parse::<UserRole>().unwrap(), role);
            assert_eq!(role.to_string(), role.as_str());
        }
        assert!("owner".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_instructor_switch_permission() {
        let learner = AuthenticatedUser {
            username: "kofi".to_string(),
            roles: vec![UserRole::Learner],
            ..AuthenticatedUser::default()
        };
        assert!(!learner.can_switch_to_instructor());

        let admin = AuthenticatedUser {
            roles: vec![UserRole::Learner, UserRole::Admin],
            ..learner
        };
        assert!(admin.can_switch_to_instructor());
    }

    #[test]
    fn test_user_deserializes_without_roles() {
        let user: AuthenticatedUser = serde_json::from_str(r#"{"username":"zainab"}"#).unwrap();
        assert_eq!(user.username, "zainab");
        assert!(user.roles.is_empty());
    }
}
