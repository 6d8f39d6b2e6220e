use thiserror::Error;

/// Errors a movie submission can be rejected with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("movie title cannot be empty")]
    EmptyTitle,
}

/// Checks a raw movie title as submitted by a client.
///
/// Emptiness is judged on the raw string; whitespace-only titles pass.
pub fn validate_title(raw: &str) -> Result<&str, CatalogError> {
    if raw.is_empty() {
        Err(CatalogError::EmptyTitle)
    } else {
        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_title() {
        assert_eq!(validate_title(""), Err(CatalogError::EmptyTitle));
    }

    #[test]
    fn accepts_non_empty_title() {
        assert_eq!(validate_title("Inception"), Ok("Inception"));
    }

    #[test]
    fn accepts_whitespace_only_title() {
        assert_eq!(validate_title("   "), Ok("   "));
    }

    #[test]
    fn empty_title_error_names_the_problem() {
        assert_eq!(
            CatalogError::EmptyTitle.to_string(),
            "movie title cannot be empty"
        );
    }
}
