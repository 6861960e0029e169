use thiserror::Error;

/// Errors raised before a scan does any work.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    #[error("please enter a URL")]
    EmptyUrl,
}

/// Rejects empty or whitespace-only input.
pub fn validate_url(url: &str) -> Result<(), ScanError> {
    if url.trim().is_empty() {
        return Err(ScanError::EmptyUrl);
    }
    Ok(())
}
