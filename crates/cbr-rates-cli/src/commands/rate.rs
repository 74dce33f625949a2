use cbr_rates_core::{Client, OutputForm, RateDate, RateValue};
use serde::Serialize;

use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct RateResponseData<'a> {
    code: &'a str,
    date: RateDate,
    form: OutputForm,
    value: &'a RateValue,
}

pub async fn run(
    code: &str,
    form: OutputForm,
    client: &Client,
    date: RateDate,
) -> Result<CommandResult, CliError> {
    let value = client
        .resolver()
        .rate(code, date, client.use_cache(), form)
        .await?;

    let data = serde_json::to_value(RateResponseData {
        code,
        date,
        form,
        value: &value,
    })?;
    Ok(CommandResult::new(data, value.to_string()))
}
