mod config;
mod env;
mod load;

pub mod prelude {
    pub use crate::config::{
        store_run_config, store_run_config_pretty, write_run_config, E2eSettings, RunConfig,
        DEFAULT_COMMAND_TIMEOUT_MS, REPORTER, REQUEST_TIMEOUT_MS, SPEC_PATTERN,
    };
    pub use crate::env::{capture, PASS_THROUGH_ENV};
    pub use crate::load::{load_configuration, load_configuration_from};
}
