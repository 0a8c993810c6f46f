use clubhouse_core::sync::{ApiOperations, OperationOptions};
use clubhouse_core::transport::{ApiResponse, Method, RequestOptions};

use crate::cli::HttpMethod;
use crate::commands::common::{parse_json_data, print_json, Console};
use crate::error::CliError;

pub async fn run_request(
    console: &Console,
    method: HttpMethod,
    endpoint: &str,
    data: Option<&str>,
    message: Option<String>,
) -> Result<(), CliError> {
    let operations = ApiOperations::new(console.api.clone(), console.notifier.clone());
    let request = match data {
        Some(raw) => RequestOptions::json(&parse_json_data(raw)?)?,
        None => RequestOptions::default(),
    };
    let options = OperationOptions {
        success_message: message,
        ..OperationOptions::default()
    };

    let response = operations
        .request(to_method(method), &normalize_endpoint(endpoint), request, &options)
        .await?;
    match response {
        ApiResponse::Json(value) => print_json(&value)?,
        ApiResponse::Text(text) => println!("{text}"),
    }
    Ok(())
}

pub fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// Endpoints are joined onto the base URL, so they always start with `/`.
pub fn normalize_endpoint(endpoint: &str) -> String {
    let endpoint = endpoint.trim();
    if endpoint.starts_with('/') {
        endpoint.to_string()
    } else {
        format!("/{endpoint}")
    }
}
