//! HTML dashboard rendering
//!
//! Every value taken from upstream data is escaped before it reaches the page.

use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::version::checker::ReconciliationResult;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report to {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

const STYLE: &str = r#"        body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; background: #121212; padding: 40px; color: #e0e0e0; }
        .container { max-width: 1000px; margin: auto; background: #1e1e1e; padding: 20px; border-radius: 8px; box-shadow: 0 4px 15px rgba(0,0,0,0.5); }
        h1 { border-bottom: 2px solid #3a86ff; padding-bottom: 10px; color: #3a86ff; }
        table { width: 100%; border-collapse: collapse; margin-top: 20px; }
        th, td { padding: 15px; text-align: left; border-bottom: 1px solid #333; }
        th { background-color: #2a2a2a; color: #b0b0b0; text-transform: uppercase; font-size: 0.85rem; }
        tr:hover { background-color: #252525; }
        .status-ok { color: #28a745; font-weight: bold; }
        .status-update { background: rgba(255, 193, 7, 0.15); color: #ffc107; font-weight: bold; padding: 4px 8px; border-radius: 4px; }
        .status-unknown { color: #a0a0a0; font-style: italic; }
        a { color: #3a86ff; text-decoration: none; }
        a:hover { text-decoration: underline; }
        code { background: #2a2a2a; color: #e0e0e0; padding: 2px 5px; border-radius: 3px; font-family: monospace; border: 1px solid #333; }
"#;

/// Escapes text for use in HTML element content and quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders a single table row
fn render_row(result: &ReconciliationResult) -> String {
    format!(
        r#"            <tr>
                <td><a href="{url}" target="_blank" rel="noopener">{name}</a></td>
                <td><code>{current}</code></td>
                <td><code>{latest}</code></td>
                <td>{date}</td>
                <td><span class="{class}">{label}</span></td>
            </tr>
"#,
        url = escape_html(&result.release.url),
        name = escape_html(&result.project.name),
        current = escape_html(&result.current_version),
        latest = escape_html(&result.release.version),
        date = escape_html(&result.release.date),
        class = result.status.css_class(),
        label = result.status.label(),
    )
}

/// Renders the full dashboard page
pub fn render_html(results: &[ReconciliationResult], dashboard_version: &str) -> String {
    let title = format!("Version Monitor {}", escape_html(dashboard_version));

    let rows: String = results.iter().map(render_row).collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>
{STYLE}    </style>
</head>
<body>
    <div class="container">
        <h1>{title}</h1>
        <table>
            <tr>
                <th>Service</th>
                <th>Current (BookStack)</th>
                <th>Latest (GitHub)</th>
                <th>Release Date</th>
                <th>Status</th>
            </tr>
{rows}        </table>
    </div>
</body>
</html>
"#
    )
}

/// Writes the page to `path`, replacing any previous content
pub fn write_report(path: &Path, html: &str) -> Result<(), ReportError> {
    std::fs::write(path, html).map_err(|source| ReportError::Write {
        path: path.display().to_string(),
        source,
    })?;

    info!("Dashboard updated: {}", path.display());
    Ok(())
}
