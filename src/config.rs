#[cfg(feature = "ssr")]
pub mod server {
    use std::env;
    use thiserror::Error;

    pub const FUNCTION_URL_VAR: &str = "AZURE_FUNCTION_URL";
    pub const FUNCTION_KEY_VAR: &str = "AZURE_FUNCTION_KEY";

    #[derive(Error, Debug)]
    pub enum ConfigError {
        #[error("Missing environment variable: {0}")]
        MissingEnvironmentVar(&'static str),
    }

    /// Where the question-answering function lives and how to reach it.
    #[derive(Debug, Clone)]
    pub struct RelayConfig {
        pub function_url: String,
        pub function_key: String,
    }

    impl RelayConfig {
        pub fn new(function_url: impl Into<String>, function_key: impl Into<String>) -> Self {
            Self {
                function_url: function_url.into(),
                function_key: function_key.into(),
            }
        }

        pub fn from_env() -> Result<Self, ConfigError> {
            let function_url = env::var(FUNCTION_URL_VAR)
                .map_err(|_| ConfigError::MissingEnvironmentVar(FUNCTION_URL_VAR))?;
            let function_key = env::var(FUNCTION_KEY_VAR)
                .map_err(|_| ConfigError::MissingEnvironmentVar(FUNCTION_KEY_VAR))?;

            Ok(Self::new(function_url, function_key))
        }

        /// The key travels as the `code` query parameter.
        pub fn endpoint(&self) -> String {
            format!(
                "{}?code={}",
                self.function_url,
                urlencoding::encode(&self.function_key)
            )
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn endpoint_appends_encoded_key() {
            let config = RelayConfig::new("https://fn.example.net/api/ask", "a+b/c");
            assert_eq!(
                config.endpoint(),
                "https://fn.example.net/api/ask?code=a%2Bb%2Fc"
            );
        }

        #[test]
        fn missing_variable_is_named() {
            let err = ConfigError::MissingEnvironmentVar(FUNCTION_KEY_VAR);
            assert_eq!(
                err.to_string(),
                "Missing environment variable: AZURE_FUNCTION_KEY"
            );
        }
    }
}
