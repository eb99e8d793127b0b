//! The governance report shipped with the expense approval solution.
//!
//! The report is static prose; the only values substituted into it are the generation
//! timestamp (document header) and the generation date (version history row).

use crate::error::Result;
use chrono::{DateTime, Local};
use minijinja::{context, Environment};

const GOVERNANCE_TEMPLATE_NAME: &str = "governance.md";

const GOVERNANCE_TEMPLATE: &str = include_str!("templates/governance.md.tmp");

pub fn render(now: DateTime<Local>) -> Result<String> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.add_template(GOVERNANCE_TEMPLATE_NAME, GOVERNANCE_TEMPLATE)?;

    let template = env.get_template(GOVERNANCE_TEMPLATE_NAME)?;
    let rendered = template.render(context! {
        generated_at => now.format("%Y-%m-%d %H:%M:%S").to_string(),
        version_date => now.format("%Y-%m-%d").to_string(),
    })?;
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap()
    }

    fn headings(markdown: &str, level: HeadingLevel) -> Vec<String> {
        let mut found = Vec::new();
        let mut current: Option<String> = None;
        for event in Parser::new(markdown) {
            match event {
                Event::Start(Tag::Heading { level: l, .. }) if l == level => {
                    current = Some(String::new());
                }
                Event::Text(text) => {
                    if let Some(heading) = current.as_mut() {
                        heading.push_str(&text);
                    }
                }
                Event::End(TagEnd::Heading(_)) => {
                    if let Some(heading) = current.take() {
                        found.push(heading);
                    }
                }
                _ => {}
            }
        }
        found
    }

    #[test]
    fn test_embeds_timestamp_and_date() {
        let report = render(fixed_time()).unwrap();
        assert!(report.contains("**Generated**: 2025-03-14 09:26:53"));
        assert!(report.contains("| 1.0.0   | 2025-03-14 | Initial deployment | [Pending] |"));
        assert!(!report.contains("{{"));
    }

    #[test]
    fn test_document_structure() {
        let report = render(fixed_time()).unwrap();
        assert_eq!(
            headings(&report, HeadingLevel::H1),
            vec!["Governance Documentation: Expense Approval System"]
        );

        let sections = headings(&report, HeadingLevel::H2);
        for expected in [
            "Executive Summary",
            "Security Framework",
            "Compliance & Governance",
            "Licensing Requirements",
            "Application Lifecycle Management (ALM)",
            "Risk Assessment",
            "Monitoring & Support",
            "Deployment Checklist",
            "Version History",
        ] {
            assert!(sections.iter().any(|s| s == expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_is_deterministic_for_a_given_time() {
        assert_eq!(render(fixed_time()).unwrap(), render(fixed_time()).unwrap());
    }

    #[test]
    fn test_ends_with_newline() {
        let report = render(fixed_time()).unwrap();
        assert!(report.starts_with("# Governance Documentation"));
        assert!(report.ends_with("Enterprise Edition*\n"));
    }
}
