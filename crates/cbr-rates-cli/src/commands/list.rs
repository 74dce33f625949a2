use cbr_rates_core::{Client, RateDate};

use crate::error::CliError;

use super::CommandResult;

pub async fn run(client: &Client, date: RateDate) -> Result<CommandResult, CliError> {
    let document = client.document(date).await?;

    let text = document
        .currencies
        .iter()
        .map(|currency| {
            format!(
                "{}\t{}\t{}",
                currency.char_code,
                currency.nominal,
                currency.value_string()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    Ok(CommandResult::new(serde_json::to_value(&*document)?, text))
}
