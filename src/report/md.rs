use crate::derive::dependency::Severity;
use crate::source::SourceKind;
use crate::types::report::AnalysisReport;
use crate::types::scoring::ScoreRating;

pub fn to_markdown(report: &AnalysisReport) -> String {
    let mut output = String::new();
    output.push_str("# PageSpeed Insights Report\n\n");
    output.push_str(&format!("URL: {}\n", report.url));
    if let Some(domain) = &report.domain {
        output.push_str(&format!("Domain: {domain}\n"));
    }
    output.push_str(&format!("Source: {}", source_label(report.source)));
    if report.mocked {
        output.push_str(" (mocked)");
    }
    output.push_str("\n\n");

    output.push_str("## Scores\n\n");
    for category in &report.categories {
        output.push_str(&format!(
            "- {}: {} ({})\n",
            category.label,
            category.score,
            rating_label(category.rating)
        ));
    }
    output.push('\n');

    output.push_str("## Core Web Vitals (Mobile)\n\n");
    for reading in report.vitals.readings() {
        output.push_str(&format!(
            "- {}: {}{} [{}]\n",
            reading.label, reading.value, reading.unit, reading.status
        ));
    }
    output.push('\n');

    output.push_str("## Performance Breakdown\n\n");
    for share in &report.breakdown.shares {
        output.push_str(&format!("- {}: {}%\n", share.resource.name(), share.percent));
    }
    output.push('\n');

    output.push_str("## Network Waterfall\n\n");
    for request in &report.waterfall.requests {
        output.push_str(&format!(
            "- {}: starts at {} ms, takes {} ms\n",
            request.name, request.start, request.duration
        ));
    }
    output.push('\n');

    output.push_str("## Visual Performance Impact\n\n");
    for region in &report.overlay.regions {
        output.push_str(&format!("- {}: {:.3}\n", region.label, region.intensity));
    }
    output.push('\n');

    output.push_str("## Resource Dependency Matrix\n\n");
    let resources = &report.dependencies.resources;
    output.push_str("| from \\ to |");
    for resource in resources {
        output.push_str(&format!(" {} |", resource.name()));
    }
    output.push_str("\n|---|");
    output.push_str(&"---|".repeat(resources.len()));
    output.push('\n');
    for (from, row) in resources.iter().zip(&report.dependencies.cells) {
        output.push_str(&format!("| {} |", from.name()));
        for severity in row {
            output.push_str(&format!(" {} |", severity_label(*severity)));
        }
        output.push('\n');
    }
    output.push('\n');

    output.push_str("## Opportunities\n\n");
    for item in &report.opportunities {
        output.push_str(&format!("- {item}\n"));
    }
    output.push('\n');

    output.push_str("## Diagnostics\n\n");
    for item in &report.diagnostics {
        output.push_str(&format!("- {item}\n"));
    }

    output
}

fn source_label(source: SourceKind) -> &'static str {
    match source {
        SourceKind::Simulated => "simulated",
        SourceKind::Pagespeed => "pagespeed",
        SourceKind::Mock => "mock",
    }
}

fn rating_label(rating: ScoreRating) -> &'static str {
    match rating {
        ScoreRating::Pass => "pass",
        ScoreRating::Average => "average",
        ScoreRating::Fail => "fail",
    }
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::None => "-",
        Severity::Low => "low",
        Severity::Medium => "medium",
        Severity::High => "high",
    }
}
