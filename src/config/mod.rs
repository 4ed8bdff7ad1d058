mod defaults;
mod io;
mod schema;
mod validate;

pub use io::load_config;
#[allow(unused_imports)]
pub use schema::{
    Config, DeliveryConfig, DispatchConfig, HistoryConfig, SlackConfig, WebApiConfig,
};
#[allow(unused_imports)]
pub use validate::ConfigError;

#[cfg(test)]
mod tests;
