//! `miwifi validate`: one response against one endpoint schema.

use crate::cli::{OutputFormat, ValidateArgs};
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

pub fn handle(args: &ValidateArgs, settings: &Settings) -> Result<(), CliError> {
    let raw = util::read_json(args.file.as_deref())?;
    let response = miwifi_api::parse_named(&args.endpoint, &raw)?;
    util::check_code(&response, settings.strict_code)?;

    tracing::info!(
        endpoint = %response.endpoint(),
        record = response.endpoint().record_name(),
        "response accepted"
    );

    let body = output::render_record(settings.output, &response)?;
    if settings.output == OutputFormat::Table && !settings.quiet {
        let endpoint = response.endpoint();
        let heading = match response.code() {
            Some(code) => format!("{endpoint} · {} · code {code}", endpoint.record_name()),
            None => format!("{endpoint} · {}", endpoint.record_name()),
        };
        println!("{}", output::title(&heading, output::should_color(settings.color)));
    }
    output::print_output(&body, settings.quiet);
    Ok(())
}
