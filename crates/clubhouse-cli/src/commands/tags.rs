use clubhouse_core::filter::filter_tags;
use clubhouse_core::models::{PrintTagsRequest, TagStatus};
use clubhouse_core::sync::TagsController;

use crate::cli::TagsCommands;
use crate::commands::common::{
    format_tag_details, normalize_status_filter, parse_json_data, print_json, render_table,
    tag_row, Console, TAG_HEADERS,
};
use crate::error::CliError;

pub async fn run_tags(console: &Console, command: TagsCommands) -> Result<(), CliError> {
    let controller = TagsController::new(console.api.clone(), console.notifier.clone());

    match command {
        TagsCommands::List {
            search,
            status,
            json,
        } => {
            controller.activate().await?;
            let state = controller.state();
            let status = normalize_status_filter(status.as_deref()).map(TagStatus::from);
            let tags = filter_tags(&state.items, search.as_deref().unwrap_or(""), status.as_ref());

            if json {
                print_json(&tags)?;
            } else if tags.is_empty() {
                println!("No tags found.");
            } else {
                let rows: Vec<Vec<String>> = tags.iter().map(|tag| tag_row(tag)).collect();
                for line in render_table(&TAG_HEADERS, &rows) {
                    println!("{line}");
                }
                println!("Tags ({} of {})", tags.len(), state.items.len());
            }
        }
        TagsCommands::Get { id, json } => {
            let tag = controller.get_one(&id).await?;
            if json {
                print_json(&tag)?;
            } else {
                for line in format_tag_details(&tag) {
                    println!("{line}");
                }
            }
        }
        TagsCommands::Create { data } => {
            let tag = controller.create(&parse_json_data(&data)?).await?;
            println!("{}", tag.tag_id);
        }
        TagsCommands::Update { id, data } => {
            let tag = controller.update(&id, &parse_json_data(&data)?).await?;
            println!("{} {}", tag.tag_id, tag.status);
        }
        TagsCommands::Delete { id } => {
            controller.delete(&id).await?;
        }
        TagsCommands::Print {
            quantity,
            golf_course,
        } => {
            let request = PrintTagsRequest {
                quantity,
                golf_course: golf_course.trim().to_string(),
            };
            request.validate()?;
            let response = controller.print(&request).await?;
            println!("{}", response.file_url);
        }
    }

    Ok(())
}
