use std::{error::Error, io::stdout};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use chat_auth_application::infrastructure_config::{Config, LogFormat};

/// Installs the global subscriber. Fails if one is already installed.
pub fn setup_logging(config: &Config) -> Result<(), Box<dyn Error + Send + Sync>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => {
            let formatting_layer = BunyanFormattingLayer::new("chat-auth".to_string(), stdout);
            let json_layer = JsonStorageLayer;

            tracing_subscriber::registry()
                .with(env_filter)
                .with(json_layer)
                .with(formatting_layer)
                .try_init()?;
        }
        LogFormat::Pretty => {
            let format = fmt::format().with_target(false).compact();

            let mut subscriber = tracing_subscriber::fmt()
                .event_format(format)
                .with_env_filter(env_filter);

            if config.logging.include_location {
                subscriber = subscriber.with_file(true).with_line_number(true);
            }

            subscriber.try_init()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chat_auth_application::infrastructure_config::LoggingConfig;

    #[test]
    fn second_install_is_reported_not_panicked() {
        let pretty = Config::default();
        let json = Config {
            logging: LoggingConfig {
                format: LogFormat::Json,
                ..Config::default().logging
            },
            ..Config::default()
        };

        setup_logging(&pretty).ok();

        assert!(setup_logging(&pretty).is_err());
        assert!(setup_logging(&json).is_err());
    }
}
