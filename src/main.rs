use log::{error, info};
use proxylist_fetch::config::Config;
use proxylist_fetch::fetcher::ProxyListDownloadSource;
use proxylist_fetch::logging;
use proxylist_fetch::runner::{self, RunOutcome};

use std::error::Error;
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::load();
    logging::init(&config.log_level)?;

    let source = ProxyListDownloadSource::default();
    let output = Path::new(&config.proxies_txt_file);

    match runner::run(&source, output) {
        Ok(RunOutcome::Written { path, bytes }) => {
            info!("Wrote {} bytes to {}", bytes, path.display());
            Ok(())
        }
        // The API body was already printed by the fetcher
        Ok(RunOutcome::NoResult { .. }) => Ok(()),
        Err(e) => {
            error!("{}", e);
            Err(e.into())
        }
    }
}
