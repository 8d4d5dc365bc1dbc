use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;

use std::error::Error;
use std::str::FromStr;

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}";

pub fn level_from_str(level: &str) -> LevelFilter {
    LevelFilter::from_str(level.trim()).unwrap_or(LevelFilter::Warn)
}

pub fn build_config(level: LevelFilter) -> Result<LogConfig, Box<dyn Error>> {
    // stdout is reserved for the API error body
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();

    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;

    Ok(config)
}

pub fn init(level: &str) -> Result<(), Box<dyn Error>> {
    log4rs::init_config(build_config(level_from_str(level))?)?;
    Ok(())
}
