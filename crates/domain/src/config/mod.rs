mod blocking;
mod custom_records;
mod drbl;
mod errors;
mod logging;
mod root;
mod server;
mod upstream;

pub use blocking::BlockingConfig;
pub use custom_records::parse_custom_records;
pub use drbl::DrblConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;
