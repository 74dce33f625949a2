use cbr_rates_core::{Client, RateDate};

use crate::error::CliError;

use super::CommandResult;

pub async fn run(code: &str, client: &Client, date: RateDate) -> Result<CommandResult, CliError> {
    let currency = client.currency_info(code, date).await?;

    let text = format!(
        "{} {:03} {} nominal={} {} {}",
        currency.char_code,
        currency.num_code,
        currency.id,
        currency.nominal,
        currency.name,
        currency.value_string()
    );
    Ok(CommandResult::new(serde_json::to_value(&currency)?, text))
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{client, day};
    use super::*;

    #[tokio::test]
    async fn info_reports_the_full_record() {
        let result = run("JPY", &client(), day()).await.expect("resolved");

        assert_eq!(result.data["id"], "R01820");
        assert_eq!(result.data["nominal"], 100);
        assert_eq!(result.data["value"], "61,2153");
        assert_eq!(
            result.text,
            "JPY 392 R01820 nominal=100 Japanese Yen 61.2153"
        );
    }
}
