use analyst_core::{AppViewModel, ReportView, RequestView};

/// Renders the current view as printable lines. Pure so it can be tested
/// without a terminal.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("URL:   {}", field_or_placeholder(&view.url)));
    lines.push(format!("Query: {}", field_or_placeholder(&view.query)));

    match &view.request {
        RequestView::Idle => {}
        RequestView::Loading { .. } => {
            lines.push("Analyzing... (request in flight)".to_string());
        }
        RequestView::Failed(message) => {
            lines.push("Error: analysis failed".to_string());
            lines.push(format!("  {message}"));
        }
        RequestView::Succeeded(report) => render_report(report, &mut lines),
    }

    lines
}

fn render_report(report: &ReportView, lines: &mut Vec<String>) {
    lines.push("Operations".to_string());
    lines.push(format!("  {}", report.ops_summary));
    lines.push("Answer".to_string());
    lines.push(format!("  {}", report.answer));

    // Empty lists get no section at all, same as an absent field.
    if !report.sources.is_empty() {
        lines.push("Sources".to_string());
        for source in &report.sources {
            lines.push(format!("  - {source}"));
        }
    }
    if !report.quotes.is_empty() {
        lines.push("Quotes".to_string());
        for quote in &report.quotes {
            lines.push(format!("  \"{quote}\""));
        }
    }
}

fn field_or_placeholder(value: &str) -> &str {
    if value.is_empty() {
        "(not set)"
    } else {
        value
    }
}
