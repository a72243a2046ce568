use reqwest::StatusCode;
use thiserror::Error;

/// Failure while fetching the file list. Never shown to the user, only logged.
#[derive(Debug, Error, Clone)]
pub enum ListError {
    #[error("Failed to send request: {0}")]
    Transport(String),
    #[error("Listing failed with status: {0}")]
    Status(StatusCode),
    #[error("Failed to parse file list: {0}")]
    InvalidBody(String),
}

/// Failure while uploading. The display text is the reason shown after
/// "Upload Failed:".
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UploadError {
    #[error("{0}")]
    ServerDetail(String),
    #[error("{0}")]
    HttpStatus(String),
    #[error("No response from server")]
    NoResponse,
    #[error("{0}")]
    Transport(String),
}

impl UploadError {
    /// Picks the most specific reason for an error response: the server's
    /// `detail`, then the status text.
    pub fn from_response(status: StatusCode, detail: Option<String>) -> Self {
        match detail {
            Some(detail) if !detail.is_empty() => Self::ServerDetail(detail),
            _ => Self::HttpStatus(
                status
                    .canonical_reason()
                    .map(str::to_string)
                    .unwrap_or_else(|| status.as_str().to_string()),
            ),
        }
    }
}

impl From<reqwest::Error> for UploadError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() || value.is_connect() || value.is_request() {
            Self::NoResponse
        } else {
            Self::Transport(value.to_string())
        }
    }
}

impl From<reqwest::Error> for ListError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            Self::InvalidBody(value.to_string())
        } else {
            Self::Transport(value.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_wins_over_status_text() {
        let err = UploadError::from_response(
            StatusCode::BAD_REQUEST,
            Some("File type not allowed".to_string()),
        );
        assert_eq!(err.to_string(), "File type not allowed");
    }

    #[test]
    fn falls_back_to_status_text() {
        let err = UploadError::from_response(StatusCode::INTERNAL_SERVER_ERROR, None);
        assert_eq!(err.to_string(), "Internal Server Error");

        let empty = UploadError::from_response(StatusCode::NOT_FOUND, Some(String::new()));
        assert_eq!(empty.to_string(), "Not Found");
    }

    #[test]
    fn no_response_message() {
        assert_eq!(
            UploadError::NoResponse.to_string(),
            "No response from server"
        );
    }
}
