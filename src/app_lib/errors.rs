use std::fmt;

/// Failure of a fetch against the users API.
///
/// Variants only record where the failure came from so it can be logged;
/// consumers are expected to surface the `Display` text and nothing else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchError {
    Network(String),
    Http { status: u16 },
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(message) | FetchError::Parse(message) => {
                write!(formatter, "{message}")
            }
            FetchError::Http { .. } => write!(formatter, "Error fetching users"),
        }
    }
}

impl std::error::Error for FetchError {}
