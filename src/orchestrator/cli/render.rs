//! # Rendering Module
//!
//! Styled terminal output for the binary. Templates (see `templates.rs`) describe the
//! layout; a `style` filter maps semantic names onto `console::Style`s from the theme.
//! Colors are applied only when stdout supports them, so piped output stays plain.
//!
//! Layout math that needs Unicode widths (the start banner box) stays in Rust.

use super::styles::{names, ORCHESTRATOR_THEME};
use super::templates::{
    BANNER_TEMPLATE, CLOSING_TEMPLATE, GENERATED_TEMPLATE, GENERATING_TEMPLATE,
    PATTERNS_TEMPLATE, WELCOME_TEMPLATE,
};
use colored::Colorize;
use console::Style;
use minijinja::{Environment, Value};
use orchestrator::error::Result;
use orchestrator::model::GeneratedSolution;
use orchestrator::patterns::expense_approval::{
    APP_DEFINITION_FILE, GOVERNANCE_FILE, SECURITY_ROLES_FILE,
};
use orchestrator::patterns::PatternRegistry;
use serde::Serialize;
use std::collections::HashMap;
use unicode_width::UnicodeWidthStr;

/// Prefix shown when a template asks for a style the theme does not define.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

pub const RULE_WIDTH: usize = 70;
pub const BOX_WIDTH: usize = 70;

pub const CONTACT_EMAIL: &str = "mheck83@gmail.com";
pub const PORTFOLIO: &str = "github.com/markheck-solutions/power-platform-solutions";

const BANNER_LINES: [&str; 8] = [
    "",
    "   Power Platform Solutions Orchestrator - Demonstration Version",
    "",
    "   Enterprise-grade solution generation with governance framework",
    "",
    "   © 2025 Mark Heck Solutions",
    "   Professional Power Platform development and architecture",
    "",
];

const ENTERPRISE_FEATURES: [&str; 6] = [
    "Asset tracking with mobile barcode scanning",
    "Data collection forms with business process flows",
    "External system integration with Virtual Tables",
    "Analytics dashboards with embedded Power BI",
    "Advanced error handling and logging",
    "Multi-environment deployment automation",
];

const COMPONENTS: [&str; 6] = [
    "Model-Driven App configuration",
    "Dataverse table schemas",
    "Power Automate approval flow",
    "Security role definitions",
    "Governance documentation",
    "ALM deployment package",
];

const NEXT_STEPS: [&str; 4] = [
    "Review governance.md for deployment requirements",
    "Customize app_definition.json for your environment",
    "Configure security_roles.json per your org structure",
    "Contact for enterprise version with full ALM automation",
];

/// Named styles applied through the `style` template filter.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

#[derive(Serialize)]
struct BannerData {
    box_lines: Vec<String>,
    features: Vec<&'static str>,
    contact_email: &'static str,
}

#[derive(Serialize)]
struct RuleData {
    rule: String,
}

#[derive(Serialize)]
struct GeneratingData {
    rule: String,
    components: Vec<&'static str>,
}

#[derive(Serialize)]
struct FileEntry {
    name: String,
    description: &'static str,
}

#[derive(Serialize)]
struct GeneratedData {
    rule: String,
    name: String,
    path: String,
    files: Vec<FileEntry>,
    next_steps: Vec<&'static str>,
}

#[derive(Serialize)]
struct ClosingData {
    rule: String,
    contact_email: &'static str,
    portfolio: &'static str,
}

#[derive(Serialize)]
struct PatternEntry {
    id: String,
    title: &'static str,
    status: &'static str,
    style: &'static str,
}

#[derive(Serialize)]
struct PatternsData {
    patterns: Vec<PatternEntry>,
}

fn environment(use_color: bool) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_keep_trailing_newline(true);

    let theme = ORCHESTRATOR_THEME.clone();
    env.add_filter("style", move |value: Value, name: String| -> String {
        theme.apply(&name, &value.to_string(), use_color)
    });
    env
}

fn render_template<S: Serialize>(
    name: &'static str,
    source: &'static str,
    data: &S,
    use_color: bool,
) -> Result<String> {
    let mut env = environment(use_color);
    env.add_template(name, source)?;
    let rendered = env.get_template(name)?.render(data)?;
    Ok(rendered)
}

fn use_color() -> bool {
    console::colors_enabled()
}

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Frames `lines` in a double-line box `BOX_WIDTH` columns wide on the inside.
pub fn boxed(lines: &[&str]) -> Vec<String> {
    let horizontal = "═".repeat(BOX_WIDTH);
    let mut framed = Vec::with_capacity(lines.len() + 2);
    framed.push(format!("╔{}╗", horizontal));
    for line in lines {
        let padding = BOX_WIDTH.saturating_sub(line.width());
        framed.push(format!("║{}{}║", line, " ".repeat(padding)));
    }
    framed.push(format!("╚{}╝", horizontal));
    framed
}

fn describe_file(file: &str) -> &'static str {
    match file {
        APP_DEFINITION_FILE => "Model-Driven App configuration",
        GOVERNANCE_FILE => "Comprehensive governance documentation",
        SECURITY_ROLES_FILE => "Role-based access control definitions",
        _ => "Generated artifact",
    }
}

pub fn render_banner() -> Result<String> {
    render_banner_with_color(use_color())
}

fn render_banner_with_color(use_color: bool) -> Result<String> {
    let data = BannerData {
        box_lines: boxed(&BANNER_LINES),
        features: ENTERPRISE_FEATURES.to_vec(),
        contact_email: CONTACT_EMAIL,
    };
    render_template("banner", BANNER_TEMPLATE, &data, use_color)
}

pub fn render_welcome() -> Result<String> {
    render_welcome_with_color(use_color())
}

fn render_welcome_with_color(use_color: bool) -> Result<String> {
    render_template("welcome", WELCOME_TEMPLATE, &RuleData { rule: rule() }, use_color)
}

pub fn render_generating() -> Result<String> {
    render_generating_with_color(use_color())
}

fn render_generating_with_color(use_color: bool) -> Result<String> {
    let data = GeneratingData {
        rule: rule(),
        components: COMPONENTS.to_vec(),
    };
    render_template("generating", GENERATING_TEMPLATE, &data, use_color)
}

pub fn render_generated(solution: &GeneratedSolution) -> Result<String> {
    render_generated_with_color(solution, use_color())
}

fn render_generated_with_color(solution: &GeneratedSolution, use_color: bool) -> Result<String> {
    let data = GeneratedData {
        rule: rule(),
        name: solution.name.clone(),
        path: solution.path.display().to_string(),
        files: solution
            .files
            .iter()
            .map(|file| FileEntry {
                name: file.clone(),
                description: describe_file(file),
            })
            .collect(),
        next_steps: NEXT_STEPS.to_vec(),
    };
    render_template("generated", GENERATED_TEMPLATE, &data, use_color)
}

pub fn render_closing() -> Result<String> {
    render_closing_with_color(use_color())
}

fn render_closing_with_color(use_color: bool) -> Result<String> {
    let data = ClosingData {
        rule: rule(),
        contact_email: CONTACT_EMAIL,
        portfolio: PORTFOLIO,
    };
    render_template("closing", CLOSING_TEMPLATE, &data, use_color)
}

pub fn render_patterns(registry: &PatternRegistry) -> Result<String> {
    render_patterns_with_color(registry, use_color())
}

fn render_patterns_with_color(registry: &PatternRegistry, use_color: bool) -> Result<String> {
    let patterns = registry
        .entries()
        .map(|(id, available)| PatternEntry {
            id: format!("{:<22}", id.as_str()),
            title: id.title(),
            status: if available {
                "(available)"
            } else {
                "(enterprise version)"
            },
            style: if available {
                names::AVAILABLE
            } else {
                names::UNAVAILABLE
            },
        })
        .collect();
    render_template(
        "patterns",
        PATTERNS_TEMPLATE,
        &PatternsData { patterns },
        use_color,
    )
}

/// One-line status messages that sit outside the templated blocks.
#[derive(Debug, Clone, Copy)]
pub enum Status {
    Notice,
    Error,
}

pub fn print_status(status: Status, message: &str) {
    match status {
        Status::Notice => println!("{}", message.yellow()),
        Status::Error => println!("{}", message.red()),
    }
}
