//! Builds a `LoggerRegistry` from loaded configuration

use super::file_config::{
    ConfigValidationError, FileConfig, FileLoggerConfig, FileOutputKind, FileRotationConfig,
};
use crate::file::{RotatingFile, RotatingFileConfig};
use crate::sinks::{StderrSink, StdoutSink};
use plog_application::{ByteSink, Logger, LoggerConfig, LoggerRegistry, TimestampFormat};
use plog_domain::{LevelColorMap, LogLevel, NameTemplate, SequencerKind, TagColorMap};
use tracing::{debug, warn};

/// Name of the logger used when the configuration defines none
pub const DEFAULT_LOGGER: &str = "stdout";

pub struct RegistryBuilder;

impl RegistryBuilder {
    /// Validate `config` and create one logger per entry
    ///
    /// Files are not opened here; each rotating file opens on its first
    /// write. An empty configuration yields a single colored stdout logger.
    pub fn build(config: &FileConfig) -> Result<LoggerRegistry, ConfigValidationError> {
        Self::validate(config)?;

        let mut registry = LoggerRegistry::new();
        if config.loggers.is_empty() {
            debug!("No loggers configured, using stdout");
            registry.add(DEFAULT_LOGGER, Logger::new(StdoutSink, LoggerConfig::new()))?;
            return Ok(registry);
        }

        for (name, logger) in &config.loggers {
            let sink = Self::sink(logger);
            let logger_config = Self::logger_config(name, logger)?;
            debug!(
                logger = %name,
                output = ?logger.output,
                level = %logger_config.level,
                "Building logger"
            );
            registry.add(name.as_str(), Logger::from_boxed(sink, logger_config))?;
        }

        Ok(registry)
    }

    /// Check every logger without building anything
    pub fn validate(config: &FileConfig) -> Result<(), ConfigValidationError> {
        for (name, logger) in &config.loggers {
            if logger.output != FileOutputKind::File {
                continue;
            }

            let Some(file) = &logger.file else {
                return Err(ConfigValidationError::MissingFileSection {
                    logger: name.clone(),
                });
            };
            Self::validate_file(name, file)?;

            if let Some(format) = logger.format
                && format != file.writer.record_format()
            {
                warn!(
                    logger = %name,
                    format = %format,
                    writer = %file.writer,
                    "Line format does not match the file writer"
                );
            }
        }
        Ok(())
    }

    fn validate_file(name: &str, file: &FileRotationConfig) -> Result<(), ConfigValidationError> {
        if file.name_format.trim().is_empty() {
            return Err(ConfigValidationError::EmptyNameFormat {
                logger: name.to_string(),
            });
        }

        // Increment and datetime fill the placeholder; noop uses the name as is
        if matches!(
            file.sequencer,
            Some(SequencerKind::Increment | SequencerKind::DateTime)
        ) {
            NameTemplate::parse(&file.name_format).map_err(|source| {
                ConfigValidationError::InvalidNameFormat {
                    logger: name.to_string(),
                    source,
                }
            })?;
        }

        if file.max_size > 0 && file.sequencer.is_none() {
            warn!(logger = %name, "max_size is set without a sequencer; rotation will fail");
        }
        Ok(())
    }

    fn sink(logger: &FileLoggerConfig) -> Box<dyn ByteSink> {
        match (&logger.output, &logger.file) {
            (FileOutputKind::File, Some(file)) => Box::new(RotatingFile::new(Self::rotating(file))),
            (FileOutputKind::Stderr, _) => Box::new(StderrSink),
            _ => Box::new(StdoutSink),
        }
    }

    fn rotating(file: &FileRotationConfig) -> RotatingFileConfig {
        let mut config = RotatingFileConfig::new(file.name_format.as_str())
            .with_writer(file.writer.writer())
            .with_max_size(file.max_size);
        if let Some(kind) = file.sequencer {
            config = config.with_sequencer(kind.sequencer());
        }
        config
    }

    /// Translate the raw settings of one logger
    pub fn logger_config(
        name: &str,
        logger: &FileLoggerConfig,
    ) -> Result<LoggerConfig, ConfigValidationError> {
        let timestamp_format = match &logger.timestamp_format {
            Some(pattern) => TimestampFormat::Custom(pattern.clone()),
            None => TimestampFormat::Rfc3339,
        };

        let mut level_colors = LevelColorMap::default();
        for (level, attributes) in &logger.level_colors {
            let level: LogLevel = level.parse().map_err(|_| ConfigValidationError::UnknownLevel {
                logger: name.to_string(),
                level: level.clone(),
            })?;
            level_colors.set(level, attributes.clone());
        }

        let mut tag_colors = TagColorMap::new();
        for (tag, attributes) in &logger.tag_colors {
            tag_colors.set(tag.as_str(), attributes.clone());
        }

        Ok(LoggerConfig::new()
            .with_level(logger.level)
            .with_format(logger.effective_format())
            .with_color(logger.effective_color())
            .with_timestamp_format(timestamp_format)
            .with_level_colors(level_colors)
            .with_tag_colors(tag_colors))
    }
}
