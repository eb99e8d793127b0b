use super::render::Theme;
use console::Style;
use once_cell::sync::Lazy;

pub mod names {
    pub const BANNER: &str = "banner";
    pub const HEADING: &str = "heading";
    pub const CHECK: &str = "check";
    pub const EMPHASIS: &str = "emphasis";
    pub const MUTED: &str = "muted";
    pub const AVAILABLE: &str = "available";
    pub const UNAVAILABLE: &str = "unavailable";
}

pub static ORCHESTRATOR_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::BANNER, Style::new().cyan())
        .add(names::HEADING, Style::new().bold())
        .add(names::CHECK, Style::new().green())
        .add(names::EMPHASIS, Style::new().yellow())
        .add(names::MUTED, Style::new().dim().italic())
        .add(names::AVAILABLE, Style::new().green().bold())
        .add(names::UNAVAILABLE, Style::new().dim())
});
