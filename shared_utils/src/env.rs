use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading process environment variables.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvError {
    /// An environment variable required by the application is not set.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// The variable is set but holds only whitespace.
    #[error("Environment variable {0} is empty")]
    EmptyEnvVar(String),
}

/// Raw value of `name`, unset and non-unicode values both reported as
/// [`EnvError::MissingEnvVar`].
pub fn get_env_var(name: &str) -> Result<String, EnvError> {
    match std::env::var(name) {
        Ok(value) => Ok(value),
        Err(_) => Err(EnvError::MissingEnvVar(name.to_owned())),
    }
}

/// Filesystem path held in `name`, such as the location of a levels config
/// file.
///
/// Surrounding whitespace is trimmed; a blank value is rejected rather than
/// resolving to the current directory.
pub fn get_env_path(name: &str) -> Result<PathBuf, EnvError> {
    let raw = get_env_var(name)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EnvError::EmptyEnvVar(name.to_string()));
    }
    Ok(PathBuf::from(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_var_names_the_variable() {
        let err = get_env_var("SHARED_UTILS_TEST_SURELY_UNSET_VAR").unwrap_err();
        assert_eq!(
            err,
            EnvError::MissingEnvVar("SHARED_UTILS_TEST_SURELY_UNSET_VAR".into())
        );
        assert!(err.to_string().contains("SHARED_UTILS_TEST_SURELY_UNSET_VAR"));
    }

    #[test]
    fn path_var_is_trimmed_and_blank_rejected() {
        // Each test uses its own variable name; cargo runs tests in parallel.
        unsafe {
            std::env::set_var("SHARED_UTILS_TEST_PATH_SET", "  /tmp/levels.toml ");
            std::env::set_var("SHARED_UTILS_TEST_PATH_BLANK", "   ");
        }
        assert_eq!(
            get_env_path("SHARED_UTILS_TEST_PATH_SET").unwrap(),
            PathBuf::from("/tmp/levels.toml")
        );
        assert_eq!(
            get_env_path("SHARED_UTILS_TEST_PATH_BLANK").unwrap_err(),
            EnvError::EmptyEnvVar("SHARED_UTILS_TEST_PATH_BLANK".into())
        );
    }
}
