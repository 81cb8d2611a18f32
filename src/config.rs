use crate::error::Result;
use crate::types::Product;
use serde::Deserialize;
use std::path::Path;

/// Environment variable whose value is appended to the default User-Agent.
pub const APPEND_USER_AGENT_ENV: &str = "TF_APPEND_USER_AGENT";

/// Inputs for building a User-Agent.
///
/// The builders never look at the process environment themselves; an
/// override is captured here once, either explicitly or via
/// [`Config::from_env`].
///
/// ```yaml
/// products:
///   - name: HashiCorp
///     version: "1.0"
///   - name: Terraform
///     version: "1.2.3"
/// append: terraform-github-actions/1.0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base products, rendered first.
    pub products: Vec<Product>,
    /// Raw user-supplied suffix. Trimmed before use.
    pub append: Option<String>,
}

impl Config {
    /// Read the suffix from [`APPEND_USER_AGENT_ENV`].
    pub fn from_env() -> Self {
        Self::from_env_var(APPEND_USER_AGENT_ENV)
    }

    /// Read the suffix from an arbitrary environment variable.
    pub fn from_env_var(name: &str) -> Self {
        Self {
            products: Vec::new(),
            append: std::env::var(name).ok(),
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    pub fn with_products(mut self, products: impl IntoIterator<Item = Product>) -> Self {
        self.products = products.into_iter().collect();
        self
    }

    pub fn with_append(mut self, append: impl Into<String>) -> Self {
        self.append = Some(append.into());
        self
    }

    /// Replace `append` with the value of [`APPEND_USER_AGENT_ENV`] if it is
    /// set and not blank.
    pub fn with_env_override(self) -> Self {
        self.with_env_var_override(APPEND_USER_AGENT_ENV)
    }

    /// Replace `append` with the value of `name` if it is set and not blank.
    pub fn with_env_var_override(self, name: &str) -> Self {
        match std::env::var(name) {
            Ok(value) if !value.trim().is_empty() => self.with_append(value),
            _ => self,
        }
    }

    /// The trimmed suffix, or `None` when it is unset or blank.
    pub fn append_value(&self) -> Option<&str> {
        self.append
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_append_is_absent() {
        for raw in ["", " ", " \n", "\t\t"] {
            assert_eq!(Config::default().with_append(raw).append_value(), None, "{raw:?}");
        }
        assert_eq!(Config::default().append_value(), None);
    }

    #[test]
    fn append_is_trimmed() {
        let config = Config::default().with_append(" test/3 ");
        assert_eq!(config.append_value(), Some("test/3"));
        let config = Config::default().with_append("test/4 \n");
        assert_eq!(config.append_value(), Some("test/4"));
    }

    #[test]
    fn loads_yaml() {
        let config = Config::from_yaml_str(
            r#"
products:
  - name: HashiCorp
    version: "1.0"
  - name: Terraform
    version: "1.2.3"
    comment: "linux; amd64"
append: " tfe/1 "
"#,
        )
        .unwrap();

        assert_eq!(
            config.products,
            vec![
                Product::new("HashiCorp", "1.0"),
                Product::new("Terraform", "1.2.3").with_comment("linux; amd64"),
            ]
        );
        assert_eq!(config.append_value(), Some("tfe/1"));
    }

    #[test]
    fn yaml_fields_are_optional() {
        let config = Config::from_yaml_str("products:\n  - name: bare\n").unwrap();
        assert_eq!(config.products, vec![Product::named("bare")]);
        assert_eq!(config.append, None);
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let err = Config::from_yaml_str("products: 12").unwrap_err();
        assert!(matches!(err, crate::Error::YAML(_)));
    }

    #[test]
    fn env_overlay_replaces_configured_append() {
        const VAR: &str = "HTTP_USERAGENT_CONFIG_OVERLAY";
        std::env::set_var(VAR, " test/5 ");
        let config = Config::default().with_append("tfe/1").with_env_var_override(VAR);
        std::env::remove_var(VAR);
        assert_eq!(config.append_value(), Some("test/5"));
    }

    #[test]
    fn blank_env_overlay_keeps_configured_append() {
        const VAR: &str = "HTTP_USERAGENT_CONFIG_BLANK_OVERLAY";
        for blank in ["", " ", " \n"] {
            std::env::set_var(VAR, blank);
            let config = Config::default().with_append("tfe/1").with_env_var_override(VAR);
            assert_eq!(config.append_value(), Some("tfe/1"), "{blank:?}");
        }
        std::env::remove_var(VAR);
    }

    #[test]
    fn unset_env_overlay_keeps_configured_append() {
        const VAR: &str = "HTTP_USERAGENT_CONFIG_UNSET_OVERLAY";
        std::env::remove_var(VAR);
        let config = Config::default().with_append("tfe/1").with_env_var_override(VAR);
        assert_eq!(config.append, Some("tfe/1".to_owned()));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = Config::from_file("does/not/exist.yml").unwrap_err();
        assert!(matches!(err, crate::Error::IO(_)));
    }
}
