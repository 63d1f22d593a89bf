mod client;
mod device_name;
mod device_type;
mod locale;
mod user_agent;

pub use client::*;
pub use device_name::*;
pub use device_type::*;
pub use locale::*;
pub use user_agent::*;
