use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Role
///
/// The three access levels the backend assigns to accounts. The canonical
/// (serialized) casing is capitalized, matching what the backend emits, but
/// parsing is case-insensitive: historic call sites compared `'Admin'` and
/// `'admin'` interchangeably, so normalization happens once, here at the
/// boundary, instead of at every comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Viewer,
    Editor,
    Admin,
}

impl Role {
    /// Case-insensitive parse. Returns None for any string that is not a
    /// known role; callers decide whether that is an error or a "deny".
    pub fn parse(s: &str) -> Option<Role> {
        match s.to_ascii_lowercase().as_str() {
            "viewer" => Some(Role::Viewer),
            "editor" => Some(Role::Editor),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    /// Canonical wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Viewer => "Viewer",
            Role::Editor => "Editor",
            Role::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Role::parse(&s)
            .ok_or_else(|| de::Error::unknown_variant(&s, &["Viewer", "Editor", "Admin"]))
    }
}

/// Action
///
/// The full set of UI-affordance actions the permission table knows about.
/// Identifiers mirror the backend's action strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ViewPosts,
    CreatePosts,
    EditOwnPosts,
    EditAnyPost,
    DeletePosts,
    AccessAdminDashboard,
}

impl Action {
    pub fn parse(s: &str) -> Option<Action> {
        match s {
            "view_posts" => Some(Action::ViewPosts),
            "create_posts" => Some(Action::CreatePosts),
            "edit_own_posts" => Some(Action::EditOwnPosts),
            "edit_any_post" => Some(Action::EditAnyPost),
            "delete_posts" => Some(Action::DeletePosts),
            "access_admin_dashboard" => Some(Action::AccessAdminDashboard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::ViewPosts => "view_posts",
            Action::CreatePosts => "create_posts",
            Action::EditOwnPosts => "edit_own_posts",
            Action::EditAnyPost => "edit_any_post",
            Action::DeletePosts => "delete_posts",
            Action::AccessAdminDashboard => "access_admin_dashboard",
        }
    }

    /// Human-readable label, used by the admin dashboard permission summary.
    pub fn label(&self) -> &'static str {
        match self {
            Action::ViewPosts => "View Posts",
            Action::CreatePosts => "Create Posts",
            Action::EditOwnPosts => "Edit Own Posts",
            Action::EditAnyPost => "Edit Any Post",
            Action::DeletePosts => "Delete Posts",
            Action::AccessAdminDashboard => "Admin Dashboard",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// allowed_actions
///
/// The static role → action-set mapping. Immutable, process-wide, ordered from
/// least to most privileged action. This is the single source of truth for
/// "is this action conceptually allowed for this role".
pub fn allowed_actions(role: Role) -> &'static [Action] {
    match role {
        Role::Viewer => &[Action::ViewPosts],
        Role::Editor => &[Action::ViewPosts, Action::CreatePosts, Action::EditOwnPosts],
        Role::Admin => &[
            Action::ViewPosts,
            Action::CreatePosts,
            Action::EditOwnPosts,
            Action::EditAnyPost,
            Action::DeletePosts,
            Action::AccessAdminDashboard,
        ],
    }
}

/// has_permission
///
/// Pure membership lookup in the static table. No side effects.
///
/// Advisory only: this decides what UI to render, it does not block network
/// calls. Server-side enforcement remains authoritative, and a server
/// rejection is final even when this function returned true.
pub fn has_permission(role: Role, action: Action) -> bool {
    allowed_actions(role).contains(&action)
}

/// has_permission_str
///
/// String-boundary variant for call sites holding raw role/action strings.
/// Unknown role or unknown action yields false, never an error, and the role
/// string is normalized case-insensitively.
pub fn has_permission_str(role: &str, action: &str) -> bool {
    match (Role::parse(role), Action::parse(action)) {
        (Some(r), Some(a)) => has_permission(r, a),
        _ => false,
    }
}
