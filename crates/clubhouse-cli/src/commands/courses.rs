use std::io::Write;

use clubhouse_core::models::{CourseQuery, SortDirection};
use clubhouse_core::sync::{CourseBrowser, CourseListState, GolfCoursesController};
use clubhouse_core::table::{
    golf_course_columns, render_rows, PageTarget, PaginationControls, SortState, TableEvent,
};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::{CoursesCommands, SortOrder};
use crate::commands::common::{format_course_details, print_json, render_table, Console};
use crate::error::CliError;

const EMPTY_MESSAGE: &str = "No golf courses found.";

/// One line of input in the interactive browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Go(PageTarget),
    /// Toggle sort on a column; `None` clears the sort.
    Sort(Option<String>),
    Search(String),
    Refresh,
    Quit,
    Help,
}

pub fn parse_browse_command(line: &str) -> Option<BrowseCommand> {
    let line = line.trim();
    if let Some(text) = line.strip_prefix('/') {
        return Some(BrowseCommand::Search(text.trim().to_string()));
    }
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(word, rest)| (word, rest.trim()));
    let command = match word {
        "n" | "next" => BrowseCommand::Go(PageTarget::Next),
        "p" | "prev" | "previous" => BrowseCommand::Go(PageTarget::Previous),
        "f" | "first" => BrowseCommand::Go(PageTarget::First),
        "l" | "last" => BrowseCommand::Go(PageTarget::Last),
        "s" | "sort" => BrowseCommand::Sort((!rest.is_empty()).then(|| rest.to_string())),
        "r" | "refresh" => BrowseCommand::Refresh,
        "q" | "quit" | "exit" => BrowseCommand::Quit,
        "?" | "h" | "help" => BrowseCommand::Help,
        _ => return None,
    };
    Some(command)
}

pub async fn run_courses(console: &Console, command: CoursesCommands) -> Result<(), CliError> {
    let controller = GolfCoursesController::new(console.api.clone(), console.notifier.clone());

    match command {
        CoursesCommands::List {
            page,
            limit,
            sort,
            order,
            search,
            json,
        } => {
            let query = CourseQuery {
                page,
                limit,
                sort,
                order: sort_direction(order),
                search,
            };
            let page = controller.fetch_all(&query).await?;
            if json {
                print_json(&page)?;
            } else {
                for line in render_course_page(&controller.state()) {
                    println!("{line}");
                }
            }
        }
        CoursesCommands::Get { id, json } => {
            let course = controller.get_one(&id).await?;
            if json {
                print_json(&course)?;
            } else {
                for line in format_course_details(&course) {
                    println!("{line}");
                }
            }
        }
        CoursesCommands::Browse => browse(CourseBrowser::new(controller)).await?,
    }

    Ok(())
}

async fn browse(mut browser: CourseBrowser) -> Result<(), CliError> {
    let mut sort = SortState::default();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    // Failures are reported through the notifier; the browser stays usable.
    let _ = browser.load().await;
    print_page(&browser.controller().state());

    loop {
        print!("courses> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let event = match parse_browse_command(&line) {
            Some(BrowseCommand::Quit) => break,
            Some(BrowseCommand::Help) | None => {
                println!("{}", browse_help());
                continue;
            }
            Some(BrowseCommand::Go(target)) => {
                let controls = PaginationControls::new(Some(browser.controller().state().meta));
                let Some(event) = controls.event(target) else {
                    println!("No {} page.", target_name(target));
                    continue;
                };
                event
            }
            Some(BrowseCommand::Sort(Some(field))) => sort.toggle(&field),
            Some(BrowseCommand::Sort(None)) => sort.clear(),
            Some(BrowseCommand::Search(text)) => TableEvent::SearchChanged(text),
            Some(BrowseCommand::Refresh) => TableEvent::Refresh,
        };

        tracing::debug!(?event, "Course table event");
        let _ = browser.handle(event).await;
        print_page(&browser.controller().state());
    }

    Ok(())
}

fn print_page(state: &CourseListState) {
    for line in render_course_page(state) {
        println!("{line}");
    }
}

pub fn render_course_page(state: &CourseListState) -> Vec<String> {
    let columns = golf_course_columns();
    let mut lines = if state.items.is_empty() {
        vec![EMPTY_MESSAGE.to_string()]
    } else {
        let headers: Vec<&str> = columns.iter().map(|column| column.header).collect();
        render_table(&headers, &render_rows(&columns, &state.items))
    };

    let controls = PaginationControls::new(Some(state.meta));
    lines.push(String::new());
    lines.push(controls.summary());
    lines.push(format!("{}  {}", controls.label(), controls_hint(&controls)));
    lines
}

fn controls_hint(controls: &PaginationControls) -> String {
    [
        (PageTarget::First, "[f]irst"),
        (PageTarget::Previous, "[p]rev"),
        (PageTarget::Next, "[n]ext"),
        (PageTarget::Last, "[l]ast"),
    ]
    .into_iter()
    .map(|(target, label)| {
        if controls.is_disabled(target) {
            "-".repeat(label.len())
        } else {
            label.to_string()
        }
    })
    .collect::<Vec<_>>()
    .join(" ")
}

const fn target_name(target: PageTarget) -> &'static str {
    match target {
        PageTarget::First => "first",
        PageTarget::Previous => "previous",
        PageTarget::Next => "next",
        PageTarget::Last => "last",
    }
}

fn browse_help() -> &'static str {
    "n/p/f/l  next, previous, first, last page\n\
     s FIELD  toggle sort on FIELD (s alone resets to name)\n\
     /TEXT    search by name (/ alone clears)\n\
     r        refresh current page\n\
     q        quit"
}

pub const fn sort_direction(order: SortOrder) -> SortDirection {
    match order {
        SortOrder::Asc => SortDirection::Asc,
        SortOrder::Desc => SortDirection::Desc,
    }
}
