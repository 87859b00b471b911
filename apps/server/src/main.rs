use aasm::domain::config::SiteConfig;
use aasm::kernel::config::load_config;
use aasm_logger::{Logger, parse_level};
use aasm_server::Server;
use anyhow::Context;

#[aasm_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let cfg: SiteConfig =
        load_config(None::<&str>).context("Critical: Configuration is malformed")?;

    let mut logger = Logger::builder().level(parse_level(&cfg.logging.level)?).json(cfg.logging.json);
    if let Some(path) = &cfg.logging.path {
        logger = logger.path(path);
    }
    let _log = logger.name(env!("CARGO_PKG_NAME")).init()?;

    Server::builder().config(cfg).build()?.run().await
}
