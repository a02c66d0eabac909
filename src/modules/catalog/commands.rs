use crate::modules::catalog::{ListingPage, ListingParams, SearchSession};
use serde::Serialize;
use std::fmt::Write as _;

/// Rendered command output, ready for stdout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

impl CommandOutput {
    fn ok(text: String) -> Self {
        Self {
            text,
            success: true,
        }
    }

    fn failed(text: String) -> Self {
        Self {
            text,
            success: false,
        }
    }
}

pub async fn show_creature(session: &SearchSession, query: &str, json: bool) -> CommandOutput {
    match session.search(query).await {
        Ok(record) if json => render_json(&record),
        Ok(record) => CommandOutput::ok(record.to_string()),
        Err(e) if json => match serde_json::to_string_pretty(&e) {
            Ok(text) => CommandOutput::failed(text),
            Err(_) => CommandOutput::failed(e.message()),
        },
        Err(e) => CommandOutput::failed(e.message()),
    }
}

pub async fn list_creatures(
    session: &SearchSession,
    params: ListingParams,
    json: bool,
) -> CommandOutput {
    match session.browse(params).await {
        Ok(page) if json => render_json(&page),
        Ok(page) => CommandOutput::ok(render_listing(&page, &params)),
        Err(e) => CommandOutput::failed(e.message()),
    }
}

fn render_json<T: Serialize>(value: &T) -> CommandOutput {
    match serde_json::to_string_pretty(value) {
        Ok(text) => CommandOutput::ok(text),
        Err(e) => CommandOutput::failed(format!("Failed to render JSON: {}", e)),
    }
}

pub fn render_listing(page: &ListingPage, params: &ListingParams) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} creatures in catalog (offset {}, limit {})",
        page.count, params.offset, params.limit
    );
    for (i, name) in page.names().enumerate() {
        let _ = writeln!(out, "{:>5}. {}", params.offset + i as i64 + 1, name);
    }
    if let Some(previous) = &page.previous {
        let _ = writeln!(out, "previous: {}", previous);
    }
    if let Some(next) = &page.next {
        let _ = writeln!(out, "next: {}", next);
    }
    out.trim_end().to_string()
}
