//! Detail view for one user picked by the identifier taken from the command
//! line. Lookup is a linear scan of the provider's current users.

use crate::features::users::{FetchState, User};
use std::fmt;

/// How the detail view treats a snapshot that is still loading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadingMode {
    /// A pending fetch renders the same as a missing user.
    #[default]
    NotFound,
    /// A pending fetch renders its own loading state.
    Distinct,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserDetailView {
    Loading,
    NotFound,
    Found(User),
}

impl UserDetailView {
    /// Derives the view for `raw_id` from a provider snapshot.
    #[must_use]
    pub fn resolve(state: &FetchState, raw_id: &str, mode: LoadingMode) -> Self {
        if state.loading && mode == LoadingMode::Distinct {
            return Self::Loading;
        }

        parse_user_id(raw_id)
            .and_then(|id| find_user(&state.users, id))
            .map_or(Self::NotFound, |user| Self::Found(user.clone()))
    }

    /// `"<name> <surname>"` for a found user.
    #[must_use]
    pub fn heading(&self) -> Option<String> {
        match self {
            Self::Found(user) => Some(user.full_name()),
            Self::Loading | Self::NotFound => None,
        }
    }

    /// `"Email: <email>"` for a found user.
    #[must_use]
    pub fn paragraph(&self) -> Option<String> {
        match self {
            Self::Found(user) => Some(format!("Email: {}", user.email)),
            Self::Loading | Self::NotFound => None,
        }
    }
}

impl fmt::Display for UserDetailView {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => write!(formatter, "Loading..."),
            Self::NotFound => write!(formatter, "User not found"),
            Self::Found(user) => {
                writeln!(formatter, "{}", user.full_name())?;
                write!(formatter, "Email: {}", user.email)
            }
        }
    }
}

/// Converts the identifier to a number. Integral decimal forms such as `"1.0"`
/// or `"1e0"` are accepted; anything else, including blank input, is `None`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn parse_user_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(id) = trimmed.parse::<i64>() {
        return Some(id);
    }

    let value = trimmed.parse::<f64>().ok()?;
    if value.is_finite()
        && value.fract() == 0.0
        && value >= i64::MIN as f64
        && value < i64::MAX as f64
    {
        Some(value as i64)
    } else {
        None
    }
}

/// First user whose id equals `id`, in list order.
#[must_use]
pub fn find_user(users: &[User], id: i64) -> Option<&User> {
    users.iter().find(|user| user.id == id)
}
