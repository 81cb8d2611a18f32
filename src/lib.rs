mod config;
mod default;
mod error;
mod layer;
mod parser;
mod types;

pub use config::{Config, APPEND_USER_AGENT_ENV};
pub use default::build_default;
pub use error::{Error, Result};
pub use layer::{SetUserAgent, SetUserAgentLayer};
pub use parser::{parse_user_agent, tokenize, Token, Tokens};
pub use types::*;
