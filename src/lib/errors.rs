use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Network(String),
    Http { status: u16, message: Option<String> },
    Parse(String),
    Serialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Http {
                status,
                message: Some(message),
            } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Http {
                status,
                message: None,
            } => {
                write!(formatter, "Request failed ({status})")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn http_display_includes_server_message_when_present() {
        let err = AppError::Http {
            status: 409,
            message: Some("User already exists".to_string()),
        };
        assert_eq!(err.to_string(), "Request failed (409): User already exists");
    }

    #[test]
    fn http_display_omits_missing_message() {
        let err = AppError::Http {
            status: 500,
            message: None,
        };
        assert_eq!(err.to_string(), "Request failed (500)");
    }

    #[test]
    fn network_display_keeps_cause() {
        let err = AppError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }
}
