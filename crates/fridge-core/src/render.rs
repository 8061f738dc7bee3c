//! Plain-text rendering of issue sets.

use crate::tags::visible_additional_tags;
use crate::types::{AdvisoryIssue, AvoidIssue, IssueSet};

/// Message without its trailing effect word (which is shown as a tag instead).
fn message_head(message: &str) -> &str {
    let trimmed = message.trim_end();
    match trimmed.rfind(char::is_whitespace) {
        Some(idx) => trimmed[..idx].trim_end(),
        None => "",
    }
}

/// `P1 contains AHA, so please avoid combining, causes [ irritation, sensitivity ] like P2.`
pub fn render_avoid(issue: &AvoidIssue) -> String {
    let tags = visible_additional_tags(&issue.rule.tag, &issue.rule.additional_tags).join(", ");
    let head = message_head(&issue.rule.message);
    let mut line = format!("{} contains {}, so please ", issue.comp, issue.rule.tag);
    if !head.is_empty() {
        line.push_str(head);
        line.push(' ');
    }
    line.push_str(&format!("[ {} ] like {}.", tags, issue.source));
    line
}

pub fn render_advisory(issue: &AdvisoryIssue) -> String {
    format!("{}: {}", issue.source, issue.rule.message)
}

/// One line per issue: avoid first, then use-with, then use-when.
pub fn render_lines(issues: &IssueSet) -> Vec<String> {
    issues
        .avoid
        .iter()
        .map(render_avoid)
        .chain(issues.usewith.iter().map(render_advisory))
        .chain(issues.usewhen.iter().map(render_advisory))
        .collect()
}

pub fn render_issue_report(issues: &IssueSet) -> String {
    let lines = render_lines(issues);
    let mut out = format!("Issues Found ({})\n", lines.len());
    if lines.is_empty() {
        out.push_str("  (no issues)\n");
    }
    for line in lines {
        out.push_str("  - ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}
