// Command line interface parsing
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use clap::{
    crate_authors,
    crate_description,
    crate_name,
    crate_version,
    Arg,
    ArgMatches,
    Command,
};
use crate::common::{
    ClientConfig,
    Region,
};
use crate::report::{
    NotifierConfig,
    DEFAULT_ICON_EMOJI,
};
use tracing::debug;

// Every argument can be given in the environment, which is how the report is
// normally configured when run from a scheduler.
fn create_app() -> Command {
    debug!("Creating CLI app");

    Command::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .arg(
            Arg::new("WEBHOOK_URL")
                .env("SLACK_WEBHOOK_URL")
                .hide_env_values(true)
                .long("webhook-url")
                .short('w')
                .value_name("URL")
                .help("Slack incoming webhook URL the report is posted to")
                .required(true)
        )
        .arg(
            Arg::new("CHANNEL")
                .env("SLACK_CHANNEL")
                .long("channel")
                .short('c')
                .value_name("CHANNEL")
                .help("Slack channel the report is posted to")
                .required(true)
        )
        .arg(
            Arg::new("ICON_EMOJI")
                .env("SLACK_ICON_EMOJI")
                .long("icon-emoji")
                .value_name("EMOJI")
                .help("Emoji used as the icon of the report message")
                .default_value(DEFAULT_ICON_EMOJI)
        )
        .arg(
            Arg::new("REGION")
                .env("AWS_REGION")
                .hide_env_values(true)
                .long("region")
                .short('r')
                .value_name("REGION")
                .help("Set the AWS region to create the client in.")
        )
}

/// Parse the command line, exiting with usage information on error.
pub fn parse_args() -> ArgMatches {
    debug!("Parsing command line arguments");

    create_app().get_matches()
}

/// Returns the `ClientConfig` selected by `matches`.
pub fn client_config(matches: &ArgMatches) -> ClientConfig {
    let region = match matches.get_one::<String>("REGION") {
        Some(region) => Region::new().set_region(region),
        None         => Region::new(),
    };

    ClientConfig {
        region,
    }
}

/// Returns the `NotifierConfig` selected by `matches`.
pub fn notifier_config(matches: &ArgMatches) -> Result<NotifierConfig> {
    let get = |id: &str| {
        matches.get_one::<String>(id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Missing argument {}", id))
    };

    Ok(NotifierConfig {
        webhook_url: get("WEBHOOK_URL")?,
        channel:     get("CHANNEL")?,
        icon_emoji:  get("ICON_EMOJI")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_notifier_config() {
        let matches = create_app().try_get_matches_from(vec![
            "s3report",
            "--webhook-url", "https://hooks.slack.com/services/T/B/X",
            "--channel", "#storage",
            "--icon-emoji", ":wastebasket:",
        ]).unwrap();

        let config = notifier_config(&matches).unwrap();

        assert_eq!(config.webhook_url, "https://hooks.slack.com/services/T/B/X");
        assert_eq!(config.channel, "#storage");
        assert_eq!(config.icon_emoji, ":wastebasket:");
    }

    #[test]
    fn test_client_config_region() {
        let matches = create_app().try_get_matches_from(vec![
            "s3report",
            "--webhook-url", "https://hooks.slack.com/services/T/B/X",
            "--channel", "#storage",
            "--region", "eu-central-1",
        ]).unwrap();

        let config = client_config(&matches);

        assert_eq!(config.region.name(), "eu-central-1");
    }

    #[test]
    fn test_app_is_valid() {
        create_app().debug_assert();
    }
}
