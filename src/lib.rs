mod composer;
mod db;
mod error;
mod helpers;
mod literal;
mod parser;
mod parser_data;
mod renderer;
mod resolver;
mod substitution;
mod translator;
mod types;
mod user_agent_parser;

pub use composer::{client_display_name, compose, device_display_name};
pub use error::{Error, Result};
pub use renderer::DisplayNameRenderer;
pub use resolver::resolve;
pub use translator::{keys, Message, Params, Translate, Translator};
pub use types::*;
pub use user_agent_parser::{ParseUserAgent, UserAgentParser};
