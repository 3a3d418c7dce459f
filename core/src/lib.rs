//! Shared prelude and process bootstrap for the customers services.

pub use anyhow;
pub use clap;
pub use tokio;
pub use tracing;
use tracing_subscriber::EnvFilter;
pub use url;

pub mod prelude {
    pub use std::time::Duration;

    pub use anyhow::{anyhow, bail, Context, Result};
    pub use clap::Parser;
    pub use tracing::{debug, error, info, warn};
    pub use url::Url;
}

use prelude::*;

/// Static configuration for a service entrypoint
#[derive(Debug, Clone, Copy)]
pub struct StartConfig {
    pub service_name: &'static str,
}

/// Process-wide resources handed to the service closure
#[derive(Debug)]
pub struct Common {
    pub rt: tokio::runtime::Runtime,
}

impl Common {
    fn new() -> Result<Self> {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .context("failed to build tokio runtime")?;

        Ok(Self { rt })
    }
}

#[derive(Debug, clap::Parser)]
#[command(version, author, about)]
struct Opts<T: clap::Args> {
    #[command(flatten)]
    args: T,
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize tracing: {e}"))
}

/// Parses the command line into `T`, installs logging, builds the runtime and
/// runs `f`. Exits the process with a non-zero status if any step fails.
pub fn run<T: clap::Args>(config: StartConfig, f: impl FnOnce(Common, T) -> Result<()>) {
    let Opts { args } = Opts::<T>::parse();

    let res = init_tracing().and_then(|()| {
        let common = Common::new()?;

        info!(service = config.service_name, "starting");

        f(common, args)
    });

    if let Err(e) = res {
        error!(service = config.service_name, "{e:?}");
        std::process::exit(1);
    }
}
