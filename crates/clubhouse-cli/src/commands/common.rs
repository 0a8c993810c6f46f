use std::sync::Arc;

use clubhouse_core::models::{EvidenceRecord, GolfCourse, Tag};
use clubhouse_core::notify::{Notification, NotificationLevel, Notifier};
use clubhouse_core::{ApiClient, ApiConfig};
use serde::Serialize;
use serde_json::Value;

use crate::error::CliError;

/// Everything a command needs to talk to the backend.
pub struct Console {
    pub config: ApiConfig,
    pub api: ApiClient,
    pub notifier: Arc<dyn Notifier>,
}

impl Console {
    pub fn from_env(api_url: Option<String>, token: Option<String>) -> Result<Self, CliError> {
        let config = ApiConfig::from_env()?.with_overrides(api_url, token)?;
        let api = ApiClient::new(&config)?;
        tracing::debug!(base_url = %api.base_url(), "Console configured");
        Ok(Self {
            config,
            api,
            notifier: Arc::new(StderrNotifier),
        })
    }
}

/// Prints notifications to stderr so stdout stays pipeable.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, notification: Notification) {
        eprintln!("{}", notification_line(&notification));
    }
}

pub fn notification_line(notification: &Notification) -> String {
    let marker = match notification.level {
        NotificationLevel::Success => '✓',
        NotificationLevel::Error => '✗',
    };
    format!("{marker} {}", notification.description)
}

pub fn parse_json_data(raw: &str) -> Result<Value, CliError> {
    serde_json::from_str(raw.trim()).map_err(|error| CliError::InvalidData(error.to_string()))
}

/// `None` means no status filter; `all` and blank values disable filtering.
pub fn normalize_status_filter(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|status| !status.is_empty() && !status.eq_ignore_ascii_case("all"))
        .map(str::to_lowercase)
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Left-aligned text table with a header row.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    let mut widths: Vec<usize> = headers.iter().map(|header| header.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render_row = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![render_row(headers.to_vec())];
    lines.extend(
        rows.iter()
            .map(|row| render_row(row.iter().map(String::as_str).collect())),
    );
    lines
}

pub fn tag_row(tag: &Tag) -> Vec<String> {
    vec![
        tag.tag_id.clone(),
        tag.status.to_string(),
        tag.owner_info
            .as_ref()
            .map_or_else(|| "-".to_string(), |owner| owner.full_name()),
        tag.golf_course_name().unwrap_or("-").to_string(),
        tag.batch_id(),
        tag.created.to_string(),
    ]
}

pub const TAG_HEADERS: [&str; 6] = ["TAG ID", "STATUS", "OWNER", "GOLF COURSE", "BATCH", "CREATED"];

pub fn format_tag_details(tag: &Tag) -> Vec<String> {
    let mut lines = vec![
        format!("Tag:         {}", tag.tag_id),
        format!("Status:      {}", tag.status),
        format!("Created:     {}", tag.created),
    ];
    if let Some(owner) = &tag.owner_info {
        lines.push(format!("Owner:       {} <{}>", owner.full_name(), owner.email));
        if let Some(phone) = &owner.phone {
            lines.push(format!("Phone:       {phone}"));
        }
        if let Some(address) = &owner.address {
            lines.push(format!("Address:     {address}"));
        }
    }
    if let Some(batch) = &tag.batch {
        lines.push(format!(
            "Batch:       {} ({} tags, {})",
            batch.id.display_or_na(),
            batch.total_tags,
            batch.created
        ));
    }
    if let Some(course) = tag.golf_course_name() {
        lines.push(format!("Golf course: {course}"));
    }
    if let Some(form) = &tag.registration_form {
        let fields: Vec<&str> = form.fields.iter().map(String::as_str).collect();
        lines.push(format!("Form fields: {}", fields.join(", ")));
    }
    lines
}

pub const EVIDENCE_HEADERS: [&str; 5] = ["ID", "STATUS", "GOLF COURSE", "STARTED", "LOCATION"];

pub fn evidence_row(record: &EvidenceRecord) -> Vec<String> {
    vec![
        record.id.clone(),
        record.status.to_string(),
        record.golf_course_name().unwrap_or("-").to_string(),
        record.timestamp_start.to_string(),
        record.location_label(),
    ]
}

pub fn format_evidence_details(record: &EvidenceRecord, viewer_base: &str) -> Vec<String> {
    let mut lines = vec![
        format!("Evidence:    {}", record.id),
        format!("Status:      {}", record.status),
        format!("Started:     {}", record.timestamp_start),
        format!("Golf course: {}", record.golf_course_name().unwrap_or("N/A")),
        format!("Location:    {}", record.location_label()),
    ];
    if let Some(point) = record.location_start {
        lines.push(format!("Map:         {}", point.maps_url()));
    }
    if let Some(envelope) = &record.digital_envelope {
        lines.push(format!(
            "Envelope:    {} <{}> ({}, {})",
            envelope.name,
            envelope.email,
            if envelope.verification_complete {
                "verified"
            } else {
                "pending verification"
            },
            envelope.timestamp
        ));
    }
    if !record.digital_signature.is_empty() {
        lines.push(format!("Signature:   {}", record.digital_signature));
    }
    if let Some(files) = &record.files {
        for (label, url) in files.links() {
            lines.push(format!("{:<13}{url}", format!("{label}:")));
        }
    }
    if let Some(claim) = record.claim_link() {
        lines.push(format!("Claim:       {claim}"));
    }
    lines.push(format!("Viewer:      {}", record.viewer_url(viewer_base)));
    lines
}

pub fn format_course_details(course: &GolfCourse) -> Vec<String> {
    let mut lines = vec![
        format!("Golf course: {}", course.name),
        format!("Course ID:   {}", course.id.display_or_na()),
        format!("Holes:       {}", course.holes().unwrap_or_else(|| "N/A".to_string())),
        format!("Par:         {}", course.par().unwrap_or_else(|| "N/A".to_string())),
        format!("Operator:    {}", course.operator().unwrap_or_else(|| "N/A".to_string())),
        format!("Website:     {}", course.website().unwrap_or_else(|| "None".to_string())),
    ];
    if !course.points_of_interest.is_empty() {
        lines.push("Points of interest:".to_string());
        for poi in &course.points_of_interest {
            lines.push(format!(
                "  {} {} ({}) {}",
                poi.kind,
                poi.label,
                poi.location,
                poi.location.maps_url()
            ));
        }
    }
    lines
}
