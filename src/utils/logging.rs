use std::path::Path;

use anyhow::Context;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    Config,
};

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} [Dictionary API] {l} {t} - {m}{n}";

/// Installs the global logger: from a log4rs YAML file when one is given,
/// otherwise a console appender at `level`.
pub fn configure_logging(level: LevelFilter, config_file: Option<&Path>) -> anyhow::Result<()> {
    if let Some(path) = config_file {
        log4rs::init_file(path, Default::default())
            .with_context(|| format!("failed to load log config {}", path.display()))?;
        log::info!("loggers configured from {}", path.display());
        return Ok(());
    }

    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))?;

    log4rs::init_config(config)?;
    Ok(())
}
