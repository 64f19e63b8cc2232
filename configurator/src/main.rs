#[macro_use]
extern crate log;

use std::io::Write as _;

use clap::Parser as _;

use e2e_harness_config::prelude::{
    load_configuration, load_configuration_from, store_run_config, store_run_config_pretty,
    write_run_config, PASS_THROUGH_ENV,
};

mod cli;

const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> anyhow::Result<()> {
    env_logger::try_init()?;

    let args = cli::CliArgs::try_parse()?;
    info!("{CRATE_NAME} {CRATE_VERSION}");

    let config = match &args.env_file {
        Some(path) => load_configuration_from(path)?,
        None => load_configuration(),
    };
    debug!("Configuration fingerprint: {}", config.fingerprint());

    // Report unset variables by name only. The values are credentials and
    // must never reach the logs.
    let unset = PASS_THROUGH_ENV
        .into_iter()
        .filter(|name| !config.env.contains_key(*name))
        .collect::<Vec<_>>();
    if !unset.is_empty() {
        debug!("Pass-through variables not set: {}", unset.join(", "));
    }

    if args.check {
        for name in PASS_THROUGH_ENV {
            let state = if config.env.contains_key(name) {
                "set"
            } else {
                "unset"
            };
            info!("{name}: {state}");
        }
        return Ok(());
    }

    match &args.output {
        Some(path) => {
            write_run_config(&config, path.clone())?;
            info!("Wrote run configuration to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            if args.pretty {
                store_run_config_pretty(&config, &mut stdout)?;
            } else {
                store_run_config(&config, &mut stdout)?;
            }
            writeln!(stdout)?;
        }
    }

    Ok(())
}
