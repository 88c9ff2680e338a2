//! Console output for validation verdicts, plans and the rule catalog

use colored::Colorize;
use serde::Serialize;
use supervision_domain::{
    ConfigIssue, DayPlanning, RuleCatalog, SectorType, Severity, ValidationResult,
};

/// Formats command results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a validation verdict with its errors, warnings and suggestions
    pub fn format_result(title: &str, result: &ValidationResult) -> String {
        let mut output = Self::header(title);
        output.push('\n');

        let verdict = if result.is_valid() {
            "VALID".green().bold()
        } else {
            "INVALID".red().bold()
        };
        output.push_str(&format!("{} {}\n", "Verdict:".cyan().bold(), verdict));

        Self::push_list(&mut output, &"Errors:".red().bold().to_string(), &result.errors);
        Self::push_list(&mut output, &"Warnings:".yellow().bold().to_string(), &result.warnings);
        Self::push_list(
            &mut output,
            &"Suggestions:".cyan().bold().to_string(),
            &result.suggestions,
        );

        output.push_str(&Self::footer());
        output
    }

    /// Format a day plan as one line per assignment
    pub fn format_plan(plan: &DayPlanning) -> String {
        let mut output = Self::header(&format!("Planning du {}", plan.date));
        output.push('\n');
        output.push_str(&format!(
            "{} {:?}\n",
            "Status:".cyan().bold(),
            plan.status
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Day:".cyan().bold(),
            plan.day_of_week()
        ));

        if plan.assignments.is_empty() {
            output.push_str("\n  (no assignments)\n");
        } else {
            output.push('\n');
            for assignment in &plan.assignments {
                output.push_str(&format!("  * {}\n", assignment));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format the effective catalog and any configuration issues
    pub fn format_catalog(catalog: &RuleCatalog, issues: &[ConfigIssue]) -> String {
        let mut output = Self::header("Rule catalog");
        output.push('\n');

        let rows = [
            ("default_max_rooms", catalog.default_max_rooms.to_string()),
            (
                "exceptional_max_rooms",
                catalog.exceptional_max_rooms.to_string(),
            ),
            (
                "requires_contiguous_rooms",
                catalog.default_requires_contiguous.to_string(),
            ),
            ("minimum_rest_hours", catalog.minimum_rest_hours.to_string()),
            ("max_shifts_per_week", catalog.max_shifts_per_week.to_string()),
        ];
        for (key, value) in rows {
            output.push_str(&format!("  {:<28}{}\n", key, value));
        }

        output.push_str(&Self::section_header("Compatibility"));
        for sector_type in SectorType::ALL {
            let compatible = catalog
                .compatible_types(sector_type)
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            output.push_str(&format!("  {:<16}{}\n", sector_type.as_str(), compatible));
        }

        if !issues.is_empty() {
            output.push_str(&Self::section_header("Configuration issues"));
            for issue in issues {
                let label = match issue.severity {
                    Severity::Error => "error".red().bold(),
                    Severity::Warning => "warning".yellow().bold(),
                };
                output.push_str(&format!("  {}: {}\n", label, issue.message));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format any serializable result as JSON
    pub fn format_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn push_list(output: &mut String, title: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }
        output.push_str(&format!("\n{}\n", title));
        for item in items {
            output.push_str(&format!("  * {}\n", item));
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
