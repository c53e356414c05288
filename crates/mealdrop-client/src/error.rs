use thiserror::Error;

/// Failure of a backend call.
///
/// `Http` carries the response body verbatim; its display form is exactly
/// the line the UI shows for a rejected request.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Error: {body}")]
    Http { status: u16, body: String },
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_displays_body_verbatim() {
        let err = ApiError::Http {
            status: 500,
            body: "DB unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "Error: DB unavailable");
    }
}
