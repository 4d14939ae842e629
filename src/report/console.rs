//! Console table reporter.

use std::io::Write;

use colored::*;

use super::types::ScanReport;
use super::ReportSink;
use crate::config::{MAX_SERVER_DISPLAY_CHARS, NOT_AVAILABLE};
use crate::error_handling::ReportError;
use crate::models::ProbeResult;

const HEADERS: [&str; 6] = [
    "Subdomain",
    "IPs/CNAMEs",
    "HTTP Status",
    "Server",
    "API Likely",
    "URL",
];

/// Writes the result table and summary to any `Write` (stdout in the CLI).
pub struct ConsoleReport<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for ConsoleReport<W> {
    fn emit(&mut self, report: &ScanReport) -> Result<(), ReportError> {
        let rendered = if report.results.is_empty() {
            format!("{}\n", "❌ No subdomains found".red())
        } else {
            format!("{}\n{}", render_table(report), render_summary(report))
        };
        self.out
            .write_all(rendered.as_bytes())
            .and_then(|_| self.out.flush())
            .map_err(ReportError::Console)
    }
}

/// Renders the result table, likely APIs first.
pub fn render_table(report: &ScanReport) -> String {
    let rows: Vec<[String; 6]> = report
        .sorted_results()
        .into_iter()
        .map(table_row)
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        format!("Subdomains found for {}", report.target_domain).bold()
    ));

    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| pad(h, *w).bold().to_string())
        .collect();
    out.push_str(&header.join(" │ "));
    out.push('\n');

    let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    out.push_str(&rule.join("─┼─"));
    out.push('\n');

    for row in &rows {
        let cells = [
            pad(&row[0], widths[0]).cyan(),
            pad(&row[1], widths[1]).green(),
            pad(&row[2], widths[2]).yellow(),
            pad(&row[3], widths[3]).blue(),
            pad(&row[4], widths[4]).red(),
            pad(&row[5], widths[5]).magenta(),
        ];
        let line: Vec<String> = cells.iter().map(|c| c.to_string()).collect();
        out.push_str(line.join(" │ ").trim_end());
        out.push('\n');
    }

    out
}

/// Renders the three-line numeric summary.
pub fn render_summary(report: &ScanReport) -> String {
    format!(
        "\n{}\n• Total subdomains found: {}\n• Accessible subdomains: {}\n• Likely APIs: {}\n",
        "📊 SUMMARY:".bold(),
        report.subdomains_found,
        report.accessible_count(),
        report.likely_apis
    )
}

fn table_row(result: &ProbeResult) -> [String; 6] {
    let addresses = if result.dns().addresses.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        result.dns().addresses.join(", ")
    };
    let http = result.http();

    [
        result.fqdn().to_string(),
        addresses,
        http.map(|h| h.http_status.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        http.map(|h| h.server.chars().take(MAX_SERVER_DISPLAY_CHARS).collect())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        if result.likely_api() { "🎯 YES" } else { "No" }.to_string(),
        http.map(|h| h.url.clone())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
    ]
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DnsResult, HttpDetails, Protocol, RecordKind};

    fn reachable(fqdn: &str, server: &str, likely_api: bool) -> ProbeResult {
        ProbeResult::reachable(
            DnsResult::new(fqdn, RecordKind::A, vec!["10.0.0.1".to_string()]),
            HttpDetails {
                url: format!("https://{fqdn}"),
                protocol: Protocol::Https,
                http_status: 200,
                server: server.to_string(),
                content_type: "text/html".to_string(),
            },
            likely_api,
        )
    }

    fn sample_report() -> ScanReport {
        ScanReport::new(
            "example.com",
            39,
            vec![
                reachable("www.example.com", "Apache", false),
                ProbeResult::unreachable(DnsResult::new(
                    "old.example.com",
                    RecordKind::Cname,
                    vec!["gone.example.net.".to_string(), "alt.example.net.".to_string()],
                )),
                reachable(
                    "api.example.com",
                    "a-very-long-server-banner/1.2.3 (Unix)",
                    true,
                ),
            ],
        )
    }

    #[test]
    fn test_likely_apis_are_listed_first() {
        let table = render_table(&sample_report());
        let api = table.find("api.example.com").expect("api row");
        let www = table.find("www.example.com").expect("www row");
        let old = table.find("old.example.com").expect("old row");
        assert!(api < www);
        // Non-API rows keep discovery order
        assert!(www < old);
    }

    #[test]
    fn test_row_contents() {
        let table = render_table(&sample_report());
        assert!(table.contains("gone.example.net., alt.example.net."));
        assert!(table.contains("N/A"));
        assert!(table.contains("🎯 YES"));
        assert!(table.contains("a-very-long-server-b"));
        assert!(!table.contains("a-very-long-server-ba"));
    }

    #[test]
    fn test_summary_counts() {
        let summary = render_summary(&sample_report());
        assert!(summary.contains("Total subdomains found: 3"));
        assert!(summary.contains("Accessible subdomains: 2"));
        assert!(summary.contains("Likely APIs: 1"));
    }

    #[test]
    fn test_empty_report_prints_single_line() {
        let mut sink = ConsoleReport::new(Vec::new());
        sink.emit(&ScanReport::new("example.com", 39, Vec::new()))
            .expect("write to Vec");
        let output = String::from_utf8(sink.into_inner()).expect("utf8");
        assert!(output.contains("No subdomains found"));
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_emit_writes_table_and_summary() {
        let mut sink = ConsoleReport::new(Vec::new());
        sink.emit(&sample_report()).expect("write to Vec");
        let output = String::from_utf8(sink.into_inner()).expect("utf8");
        assert!(output.contains("Subdomains found for example.com"));
        assert!(output.contains("Likely APIs: 1"));
    }
}
