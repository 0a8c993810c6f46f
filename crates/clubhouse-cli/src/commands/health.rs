use clubhouse_core::health::test_connection;

use crate::commands::common::{print_json, Console};
use crate::error::CliError;

pub async fn run_health(console: &Console, as_json: bool) -> Result<(), CliError> {
    let status = test_connection(&console.api).await;

    if as_json {
        print_json(&status)?;
    } else {
        println!("{} ({})", status.message, console.api.base_url());
    }

    if status.is_connected() {
        Ok(())
    } else {
        Err(CliError::Unreachable(status.message))
    }
}
