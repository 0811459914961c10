#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An unexpected fault while producing data. The message is echoed to
    /// clients verbatim, which is acceptable only because the data is mock.
    #[error("Internal server error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_error_display_prefixes_message() {
        let err = CoreError::Internal("sampler exhausted".into());
        assert_eq!(err.to_string(), "Internal server error: sampler exhausted");
    }
}
