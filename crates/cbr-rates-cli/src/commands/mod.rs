mod info;
mod list;
mod rate;

use std::sync::Arc;

use cbr_rates_core::{
    Client, FetcherConfig, OutputForm, RateDate, ReqwestHttpClient, TracingObserver,
};
use serde_json::Value;

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Rendered result of one command: JSON payload plus its plain-text line.
pub struct CommandResult {
    pub data: Value,
    pub text: String,
}

impl CommandResult {
    pub fn new(data: Value, text: impl Into<String>) -> Self {
        Self {
            data,
            text: text.into(),
        }
    }
}

pub async fn run(cli: &Cli) -> Result<CommandResult, CliError> {
    let date = match cli.date.as_deref() {
        Some(raw) => RateDate::parse(raw)?,
        None => RateDate::today(),
    };

    let mut client = Client::with_http_client(Arc::new(ReqwestHttpClient::new()))
        .with_config(fetcher_config(cli))
        .with_observer(Arc::new(TracingObserver));
    client.set_use_cache(!cli.no_cache);

    execute(&cli.command, &client, date).await
}

pub async fn execute(
    command: &Command,
    client: &Client,
    date: RateDate,
) -> Result<CommandResult, CliError> {
    match command {
        Command::Rate(args) => {
            let form = if args.raw {
                OutputForm::FloatRaw
            } else {
                OutputForm::Float
            };
            rate::run(&args.code, form, client, date).await
        }
        Command::Decimal(args) => {
            let form = if args.raw {
                OutputForm::DecimalRaw
            } else {
                OutputForm::Decimal
            };
            rate::run(&args.code, form, client, date).await
        }
        Command::String(args) => rate::run(&args.code, OutputForm::Text, client, date).await,
        Command::Info(args) => info::run(&args.code, client, date).await,
        Command::List => list::run(client, date).await,
    }
}

fn fetcher_config(cli: &Cli) -> FetcherConfig {
    let mut config = FetcherConfig::from_env();
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.clone());
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config = config.with_timeout_ms(timeout_ms);
    }
    config
}


#[cfg(test)]
mod tests {
    use super::fixtures::{client, day};
    use super::*;
    use crate::cli::{CodeArgs, RateArgs};

    #[tokio::test]
    async fn raw_flag_selects_uncorrected_form() {
        let command = Command::Decimal(RateArgs {
            code: String::from("JPY"),
            raw: true,
        });

        let result = execute(&command, &client(), day()).await.expect("resolved");
        assert_eq!(result.text, "61.2153");
    }

    #[tokio::test]
    async fn string_command_keeps_trailing_zeros() {
        let command = Command::String(CodeArgs {
            code: String::from("USD"),
        });

        let result = execute(&command, &client(), day()).await.expect("resolved");
        assert_eq!(result.data["value"], "91.6359");
    }

    #[tokio::test]
    async fn unknown_code_is_a_rate_error() {
        let command = Command::Info(CodeArgs {
            code: String::from("XXX"),
        });

        let error = execute(&command, &client(), day())
            .await
            .err()
            .expect("must fail");
        assert_eq!(error.exit_code(), 3);
    }
}
