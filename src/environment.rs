use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the backend the dashboard connects to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Local bot backend on the default port.
    #[default]
    Local,
    /// Any other backend, identified by its base URL.
    Custom { base_url: String },
}

impl Environment {
    /// Returns the base URL of the bot backend for this environment.
    pub fn base_url(&self) -> String {
        match self {
            Environment::Local => "http://127.0.0.1:8000".to_string(),
            Environment::Custom { base_url } => base_url.clone(),
        }
    }

    /// Builds an environment from an explicit base URL.
    pub fn from_base_url(base_url: impl Into<String>) -> Self {
        Environment::Custom {
            base_url: base_url.into(),
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            url if url.starts_with("http://") || url.starts_with("https://") => {
                Ok(Environment::Custom {
                    base_url: s.to_string(),
                })
            }
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { base_url } => write!(f, "{}", base_url),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_local_environment() {
        assert_eq!("local".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!("Local".parse::<Environment>(), Ok(Environment::Local));
    }

    #[test]
    fn parse_custom_environment_from_url() {
        let env = "http://10.0.0.5:9000".parse::<Environment>().unwrap();
        assert_eq!(env.base_url(), "http://10.0.0.5:9000");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("not-a-url".parse::<Environment>().is_err());
    }
}
