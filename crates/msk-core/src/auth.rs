//! Admin sign-in against a fixed directory, with a file-backed session.
//!
//! The session is an explicit [`AuthService`] value rather than ambient
//! global state. Signing in writes `{user, timestamp}` as JSON to the session
//! file; every read checks the timestamp against the TTL.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};

/// Sessions older than this are discarded.
pub const DEFAULT_SESSION_TTL: SignedDuration = SignedDuration::from_hours(24);

/// Something a signed-in admin may be allowed to do.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    CreateSuggestions,
    UpdateStatus,
    ViewAll,
}

impl Permission {
    pub const ALL: [Permission; 3] = [
        Permission::CreateSuggestions,
        Permission::UpdateStatus,
        Permission::ViewAll,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::CreateSuggestions => "create_suggestions",
            Permission::UpdateStatus => "update_status",
            Permission::ViewAll => "view_all",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "create_suggestions" => Ok(Permission::CreateSuggestions),
            "update_status" => Ok(Permission::UpdateStatus),
            "view_all" => Ok(Permission::ViewAll),
            _ => Err(format!("Invalid permission: {s}")),
        }
    }
}

/// A member of the admin directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminUser {
    pub email: String,
    pub name: String,
    pub role: String,
    pub permissions: Vec<Permission>,
}

impl AdminUser {
    fn new(email: &str, name: &str, role: &str, permissions: &[Permission]) -> Self {
        Self {
            email: email.to_string(),
            name: name.to_string(),
            role: role.to_string(),
            permissions: permissions.to_vec(),
        }
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }
}

impl fmt::Display for AdminUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}\n", self.name)?;
        writeln!(f, "- **Email**: {}", self.email)?;
        writeln!(f, "- **Role**: {}", self.role)?;
        let permissions: Vec<&str> = self.permissions.iter().map(Permission::as_str).collect();
        writeln!(f, "- **Permissions**: {}", permissions.join(", "))
    }
}

/// The admins who may sign in.
pub fn admin_directory() -> Vec<AdminUser> {
    vec![
        AdminUser::new(
            "hsmanager@company.com",
            "Alex Thompson",
            "Health & Safety Manager",
            &Permission::ALL,
        ),
        AdminUser::new(
            "admin@company.com",
            "Admin User",
            "Administrator",
            &Permission::ALL,
        ),
        AdminUser::new(
            "viewer@company.com",
            "Viewer User",
            "Viewer",
            &[Permission::ViewAll],
        ),
    ]
}

/// On-disk session record. `timestamp` is epoch milliseconds.
#[derive(Debug, Serialize, Deserialize)]
struct Session {
    user: AdminUser,
    timestamp: i64,
}

/// Sign-in, sign-out and permission checks over a session file.
#[derive(Debug, Clone)]
pub struct AuthService {
    session_path: PathBuf,
    ttl: SignedDuration,
}

impl AuthService {
    pub fn new<P: AsRef<Path>>(session_path: P) -> Self {
        Self {
            session_path: session_path.as_ref().to_path_buf(),
            ttl: DEFAULT_SESSION_TTL,
        }
    }

    /// Uses `$XDG_STATE_HOME/msk-dashboard/session.json`.
    pub fn with_default_path() -> Result<Self> {
        let path = xdg::BaseDirectories::with_prefix("msk-dashboard")
            .place_state_file("session.json")
            .map_err(|e| DashboardError::XdgDirectory(e.to_string()))?;
        Ok(Self::new(path))
    }

    pub fn with_ttl(mut self, ttl: SignedDuration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn session_path(&self) -> &Path {
        &self.session_path
    }

    /// Signs in the directory admin with `email` and persists the session.
    ///
    /// Returns `Ok(None)` for an unknown email; any previous session is left
    /// in place.
    pub fn sign_in(&self, email: &str) -> Result<Option<AdminUser>> {
        self.sign_in_at(email, Timestamp::now())
    }

    pub fn sign_in_at(&self, email: &str, now: Timestamp) -> Result<Option<AdminUser>> {
        let email = email.trim();
        let Some(admin) = admin_directory().into_iter().find(|a| a.email == email) else {
            log::warn!("Sign-in attempted for unknown admin {email}");
            return Ok(None);
        };

        let session = Session {
            user: admin.clone(),
            timestamp: now.as_millisecond(),
        };
        if let Some(parent) = self
            .session_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
        {
            fs::create_dir_all(parent).map_err(|e| DashboardError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        fs::write(&self.session_path, serde_json::to_vec(&session)?).map_err(|e| {
            DashboardError::FileSystem {
                path: self.session_path.clone(),
                source: e,
            }
        })?;

        log::info!("Signed in as {}", admin.email);
        Ok(Some(admin))
    }

    /// The signed-in admin, if the session exists and is within the TTL.
    ///
    /// An expired or unreadable session file is removed.
    pub fn current_admin(&self) -> Option<AdminUser> {
        self.current_admin_at(Timestamp::now())
    }

    pub fn current_admin_at(&self, now: Timestamp) -> Option<AdminUser> {
        let raw = fs::read(&self.session_path).ok()?;

        let session = match serde_json::from_slice::<Session>(&raw) {
            Ok(session) => session,
            Err(e) => {
                log::warn!("Discarding unreadable session file: {e}");
                self.remove_session();
                return None;
            }
        };

        let age = SignedDuration::from_millis(now.as_millisecond() - session.timestamp);
        if age > self.ttl {
            log::info!("Session for {} expired", session.user.email);
            self.remove_session();
            return None;
        }

        Some(session.user)
    }

    /// Ends the session. Signing out without a session is not an error.
    pub fn sign_out(&self) -> Result<()> {
        match fs::remove_file(&self.session_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DashboardError::FileSystem {
                path: self.session_path.clone(),
                source: e,
            }),
        }
    }

    fn remove_session(&self) {
        if let Err(e) = self.sign_out() {
            log::warn!("{e}");
        }
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.current_admin()
            .is_some_and(|admin| admin.has_permission(permission))
    }

    pub fn can_create_suggestions(&self) -> bool {
        self.has_permission(Permission::CreateSuggestions)
    }

    pub fn can_update_status(&self) -> bool {
        self.has_permission(Permission::UpdateStatus)
    }

    pub fn can_view_all(&self) -> bool {
        self.has_permission(Permission::ViewAll)
    }

    /// The signed-in admin, provided they hold `permission`.
    ///
    /// # Errors
    ///
    /// * `DashboardError::PermissionDenied` - When nobody is signed in or the
    ///   admin lacks the permission
    pub fn require(&self, permission: Permission) -> Result<AdminUser> {
        self.current_admin()
            .filter(|admin| admin.has_permission(permission))
            .ok_or_else(|| DashboardError::PermissionDenied {
                permission: permission.to_string(),
            })
    }
}
