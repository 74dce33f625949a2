use std::io::{self, Write};

use crate::cli::OutputFormat;
use crate::commands::CommandResult;
use crate::error::CliError;

pub fn render(result: &CommandResult, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    let payload = match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(&result.data)?,
        OutputFormat::Json => serde_json::to_string(&result.data)?,
        OutputFormat::Text => result.text.clone(),
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{payload}")?;
    handle.flush()?;
    Ok(())
}
