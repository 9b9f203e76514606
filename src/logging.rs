use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;

use crate::error::MystifyError;

const PATTERN: &str = "{d(%H:%M:%S%.3f)} {h({l})} {t} - {m}{n}";

/// Builds the log4rs config: stderr always, plus `log_file` when given.
pub fn logging_config(level: LevelFilter, log_file: Option<&Path>) -> Result<Config, MystifyError> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();
    let mut builder = Config::builder().appender(Appender::builder().build("stderr", Box::new(stderr)));
    let mut root = Root::builder().appender("stderr");

    if let Some(path) = log_file {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(PATTERN)))
            .build(path)
            .map_err(|e| MystifyError::Logging(format!("{}: {}", path.display(), e)))?;
        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    builder
        .build(root.build(level))
        .map_err(|e| MystifyError::Logging(e.to_string()))
}

pub fn init_logging(level: LevelFilter, log_file: Option<&Path>) -> Result<(), MystifyError> {
    let config = logging_config(level, log_file)?;
    log4rs::init_config(config).map_err(|e| MystifyError::Logging(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_only_config() {
        let config = logging_config(LevelFilter::Warn, None).unwrap();
        assert_eq!(config.root().level(), LevelFilter::Warn);
        assert_eq!(config.appenders().len(), 1);
    }
}
