use clubhouse_core::filter::{filter_evidence, unique_statuses};
use clubhouse_core::models::EvidenceStatus;
use clubhouse_core::sync::EvidenceController;

use crate::cli::EvidenceCommands;
use crate::commands::common::{
    evidence_row, format_evidence_details, normalize_status_filter, print_json, render_table,
    Console, EVIDENCE_HEADERS,
};
use crate::error::CliError;

pub async fn run_evidence(console: &Console, command: EvidenceCommands) -> Result<(), CliError> {
    let controller = EvidenceController::new(console.api.clone(), console.notifier.clone());

    match command {
        EvidenceCommands::List {
            search,
            status,
            json,
        } => {
            controller.activate().await?;
            let state = controller.state();
            let status = normalize_status_filter(status.as_deref()).map(EvidenceStatus::from);
            let records = filter_evidence(
                &state.items,
                search.as_deref().unwrap_or(""),
                status.as_ref(),
            );

            if json {
                print_json(&records)?;
                return Ok(());
            }
            if records.is_empty() {
                println!("No evidence records found.");
            } else {
                let rows: Vec<Vec<String>> =
                    records.iter().map(|record| evidence_row(record)).collect();
                for line in render_table(&EVIDENCE_HEADERS, &rows) {
                    println!("{line}");
                }
            }
            let statuses: Vec<String> = unique_statuses(&state.items)
                .iter()
                .map(ToString::to_string)
                .collect();
            println!(
                "Evidence Records ({} of {}); statuses: {}",
                records.len(),
                state.items.len(),
                if statuses.is_empty() {
                    "none".to_string()
                } else {
                    statuses.join(", ")
                }
            );
        }
        EvidenceCommands::Get { id, json } => {
            let record = controller.get_one(&id).await?;
            if json {
                print_json(&record)?;
            } else {
                for line in format_evidence_details(&record, &console.config.evidence_viewer_url) {
                    println!("{line}");
                }
            }
        }
    }

    Ok(())
}
