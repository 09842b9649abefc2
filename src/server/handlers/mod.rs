pub mod health;
pub use self::health::health;

pub mod root;
pub use self::root::root;

pub mod users;
pub use self::users::{get_user, list_users};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON body returned for lookups that miss.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}
