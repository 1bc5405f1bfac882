// This file is part of stardrift.
// Copyright (c) 2025-2026 the stardrift project developers. All rights reserved.
// Licensed under the GPLv3. See LICENSE file in the project root for full license text.

use std::collections::HashMap;
use std::str::FromStr;

use log::{LevelFilter, Log, Metadata, Record};

pub struct Logger {
    level: LevelFilter,
    targets: HashMap<String, LevelFilter>,
}

impl Logger {
    pub fn build(level: &str, target_levels: &[(String, String)]) -> Result<Logger, String> {
        let level = parse_level(level)?;
        let mut logger = Logger {
            level,
            targets: HashMap::new(),
        };
        for (target, level) in target_levels {
            logger.add_target(target.clone(), level)?;
        }
        Ok(logger)
    }

    pub fn enable(logger: Logger) -> Result<(), String> {
        let max_level = logger.max_level();
        log::set_boxed_logger(Box::new(logger))
            .map(|_| log::set_max_level(max_level))
            .map_err(|_| "cannot initialize logging".to_string())
    }

    pub fn add_target(&mut self, target: String, level: &str) -> Result<(), String> {
        let level = parse_level(level)
            .map_err(|_| format!("invalid log level {} for target {}", level, target))?;
        self.targets.insert(target, level);
        Ok(())
    }

    fn level_for(&self, target: &str) -> LevelFilter {
        *self.targets.get(target).unwrap_or(&self.level)
    }

    fn max_level(&self) -> LevelFilter {
        self.targets
            .values()
            .fold(self.level, |max, level| max.max(*level))
    }
}

fn parse_level(level: &str) -> Result<LevelFilter, String> {
    LevelFilter::from_str(level).map_err(|_| format!("invalid log level {}", level))
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level_for(metadata.target())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("{} [{}] - {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_level() {
        let result = Logger::build("noisy", &[]);
        assert!(result.is_err());
    }

    #[test]
    fn target_override_wins() {
        let target_levels = vec![("menu".to_string(), "debug".to_string())];
        let logger = Logger::build("warn", &target_levels).unwrap();
        assert_eq!(LevelFilter::Debug, logger.level_for("menu"));
        assert_eq!(LevelFilter::Warn, logger.level_for("app"));
    }

    #[test]
    fn max_level_covers_target_overrides() {
        let target_levels = vec![("menu".to_string(), "trace".to_string())];
        let logger = Logger::build("info", &target_levels).unwrap();
        assert_eq!(LevelFilter::Trace, logger.max_level());
    }

    #[test]
    fn rejects_invalid_target_level() {
        let target_levels = vec![("menu".to_string(), "loud".to_string())];
        let result = Logger::build("info", &target_levels);
        assert!(result.is_err());
    }
}
