use serde::{Deserialize, Serialize};

/// Account record as the backend sends it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiUser {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub email_verified_at: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Instructor,
    #[default]
    Student,
}

impl UserRole {
    /// Collapses the backend's role list to a single client role. Admin
    /// outranks instructor outranks student; unknown roles map to student.
    pub fn from_api_roles(roles: &[String]) -> Self {
        if roles.iter().any(|r| r == "admin") {
            Self::Admin
        } else if roles.iter().any(|r| r == "instructor") {
            Self::Instructor
        } else {
            Self::Student
        }
    }
}

impl From<&str> for UserRole {
    fn from(value: &str) -> Self {
        match value {
            "admin" => Self::Admin,
            "instructor" => Self::Instructor,
            _ => Self::Student,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Instructor => write!(f, "instructor"),
            Self::Student => write!(f, "student"),
        }
    }
}

/// Client-side user shape the pages work with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
    pub total_points: i64,
    pub created_at: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl From<ApiUser> for User {
    fn from(api_user: ApiUser) -> Self {
        let mut parts = api_user.name.split_whitespace();
        let first_name = parts
            .next()
            .map(str::to_string)
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| {
                api_user
                    .email
                    .split('@')
                    .next()
                    .unwrap_or_default()
                    .to_string()
            });
        let last_name = parts.collect::<Vec<_>>().join(" ");

        Self {
            id: api_user.id,
            first_name,
            last_name,
            email: api_user.email,
            role: UserRole::from_api_roles(&api_user.roles),
            total_points: 0,
            created_at: api_user.created_at,
        }
    }
}
