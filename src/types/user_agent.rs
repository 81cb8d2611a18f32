use super::Product;
use crate::config::Config;
use crate::error::Result;
use crate::parser::parse_user_agent;
use http::HeaderValue;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// An ordered list of [`Product`]s, rendered first to last.
///
/// Build it once and treat it as immutable afterwards; it is `Send + Sync`
/// and can be shared freely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UserAgent {
    products: Vec<Product>,
}

impl UserAgent {
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: products.into_iter().collect(),
        }
    }

    /// The configured base products, followed by whatever the config's
    /// append value parses to.
    pub fn from_config(config: &Config) -> Self {
        let ua = Self::new(config.products.iter().cloned());
        match config.append_value() {
            Some(extra) => {
                let ua = ua.append(parse_user_agent(extra));
                tracing::debug!(user_agent = %ua, "using modified User-Agent");
                ua
            }
            None => ua,
        }
    }

    /// `HashiCorp/1.0 Terraform/<version>`
    pub fn terraform(version: impl Into<String>) -> Self {
        Self::new([
            Product::new("HashiCorp", "1.0"),
            Product::new("Terraform", version),
        ])
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn append(mut self, products: impl IntoIterator<Item = Product>) -> Self {
        self.products.extend(products);
        self
    }

    /// Render into a header value.
    ///
    /// Fails if any product carries bytes that are not allowed in a header.
    pub fn to_header_value(&self) -> Result<HeaderValue> {
        Ok(HeaderValue::try_from(self.to_string())?)
    }
}

impl fmt::Display for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, product) in self.products.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{product}")?;
        }
        Ok(())
    }
}

impl FromStr for UserAgent {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(parse_user_agent(s)))
    }
}
