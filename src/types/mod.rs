mod product;
mod user_agent;

pub use product::*;
pub use user_agent::*;
