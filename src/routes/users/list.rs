//! Users list view. Unlike the detail view it surfaces the fetch error.

use crate::features::users::FetchState;

/// Renders the whole snapshot: loading notice, error, empty notice, or one
/// line per user in server order.
#[must_use]
pub fn render_list(state: &FetchState) -> String {
    if state.loading {
        return "Loading users...".to_string();
    }

    if let Some(error) = &state.error {
        return format!("Error: {error}");
    }

    if state.users.is_empty() {
        return "No users found.".to_string();
    }

    state
        .users
        .iter()
        .map(|user| format!("{}  {}  {}", user.id, user.full_name(), user.email))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::render_list;
    use crate::{
        app_lib::FetchError,
        features::users::{FetchState, User},
    };

    #[test]
    fn loading_state() {
        assert_eq!(render_list(&FetchState::pending()), "Loading users...");
    }

    #[test]
    fn error_state_shows_message() {
        let mut state = FetchState::pending();
        state.settle(Err(FetchError::Http { status: 500 }));
        assert_eq!(render_list(&state), "Error: Error fetching users");
    }

    #[test]
    fn empty_state() {
        let mut state = FetchState::pending();
        state.settle(Ok(Vec::new()));
        assert_eq!(render_list(&state), "No users found.");
    }

    #[test]
    fn one_line_per_user_in_order() {
        let mut state = FetchState::pending();
        state.settle(Ok(vec![
            User {
                id: 2,
                name: "María".to_string(),
                surname: "García".to_string(),
                email: "maria.garcia@example.com".to_string(),
            },
            User {
                id: 1,
                name: "Vicent".to_string(),
                surname: "Foo".to_string(),
                email: "vicent@example.com".to_string(),
            },
        ]));

        assert_eq!(
            render_list(&state),
            "2  María García  maria.garcia@example.com\n1  Vicent Foo  vicent@example.com"
        );
    }
}
