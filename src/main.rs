mod config;
mod data;
mod error;
mod pipeline;

use anyhow::Result;
use config::AmplifyConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let stdout = std::io::stdout();
    pipeline::run(&AmplifyConfig::default(), &mut stdout.lock())
}
