//! Session context: the acting role and theme, passed explicitly
//!
//! Replaces ambient globals. Rendering and store operations receive the
//! context as an argument; nothing looks the role up out of thin air.

use serde::{Deserialize, Serialize};

/// The acting user's capability class. One active role at a time; there is
/// no concurrent multi-role session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl Role {
    /// Display name of the demo user for this role
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Student => "John Doe",
            Role::Teacher => "Prof. Smith",
            Role::Admin => "Admin User",
        }
    }

    /// Teachers and admins share the reviewing capabilities
    pub fn is_staff(&self) -> bool {
        matches!(self, Role::Teacher | Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Student => write!(f, "student"),
            Role::Teacher => write!(f, "teacher"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// Color theme, toggled from the navbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Per-page-session state: role, theme, and a trace id for log correlation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionContext {
    pub role: Role,
    pub theme: Theme,
    pub trace_id: String,
}

impl SessionContext {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            theme: Theme::Light,
            trace_id: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// Switch the acting role; the trace id stays with the page session
    pub fn switch_role(&mut self, role: Role) {
        tracing::debug!(from = %self.role, to = %role, "role switched");
        self.role = role;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new(Role::Student)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_capabilities() {
        assert!(!Role::Student.is_staff());
        assert!(Role::Teacher.is_staff());
        assert!(Role::Admin.is_staff());
    }

    #[test]
    fn theme_toggle_round_trips() {
        let mut ctx = SessionContext::new(Role::Student);
        assert_eq!(ctx.theme, Theme::Light);
        ctx.toggle_theme();
        assert_eq!(ctx.theme, Theme::Dark);
        ctx.toggle_theme();
        assert_eq!(ctx.theme, Theme::Light);
    }

    #[test]
    fn display_names_follow_role() {
        let mut ctx = SessionContext::new(Role::Student);
        assert_eq!(ctx.role.display_name(), "John Doe");
        ctx.switch_role(Role::Teacher);
        assert_eq!(ctx.role.display_name(), "Prof. Smith");
    }
}
