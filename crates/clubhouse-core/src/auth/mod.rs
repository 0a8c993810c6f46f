//! Operator identity as reported by the identity provider, and the route
//! guards built on it.
//!
//! The provider owns login, logout and tokens. The console only consumes the
//! authenticated flag and the user's display fields.

use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;

pub const LOGIN_SCOPE: &str = "openid profile email";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Identity provider state at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthSnapshot {
    pub is_loading: bool,
    pub error: Option<String>,
    pub is_authenticated: bool,
    pub user: Option<UserProfile>,
}

impl AuthSnapshot {
    pub fn signed_in(user: UserProfile) -> Self {
        Self {
            is_authenticated: true,
            user: Some(user),
            ..Self::default()
        }
    }

    pub const fn is_admin(&self) -> bool {
        self.is_authenticated && self.user.is_some()
    }

    /// The user's name, else their email.
    pub fn display_name(&self) -> Option<&str> {
        let user = self.user.as_ref()?;
        user.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or(user.email.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Tags,
    Evidence,
    GolfCourses,
}

impl Route {
    pub const ALL: [Self; 5] = [
        Self::Login,
        Self::Dashboard,
        Self::Tags,
        Self::Evidence,
        Self::GolfCourses,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/",
            Self::Tags => "/tags",
            Self::Evidence => "/evidence",
            Self::GolfCourses => "/golf-courses",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    const fn requires_admin(self) -> bool {
        matches!(self, Self::Tags | Self::Evidence | Self::GolfCourses)
    }
}

/// What the shell should show for a requested path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Loading,
    AuthError(String),
    Render(Route),
    Redirect(Route),
}

pub fn resolve(auth: &AuthSnapshot, path: &str) -> Navigation {
    if auth.is_loading {
        return Navigation::Loading;
    }
    if let Some(error) = &auth.error {
        return Navigation::AuthError(error.clone());
    }

    let Some(route) = Route::from_path(path) else {
        return Navigation::Redirect(Route::Dashboard);
    };
    match route {
        Route::Login if auth.is_authenticated => Navigation::Redirect(Route::Dashboard),
        Route::Login => Navigation::Render(Route::Login),
        Route::Dashboard if auth.is_authenticated => Navigation::Render(route),
        _ if route.requires_admin() && auth.is_authenticated && auth.is_admin() => {
            Navigation::Render(route)
        }
        _ => Navigation::Redirect(Route::Login),
    }
}

/// Parameters forwarded to the provider's login redirect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginParams {
    pub scope: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
}

impl LoginParams {
    pub fn from_config(config: &ApiConfig) -> Self {
        Self {
            scope: LOGIN_SCOPE.to_string(),
            audience: config.auth_audience.clone(),
        }
    }
}
