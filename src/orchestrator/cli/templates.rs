//! Console templates, kept as standalone minijinja files and embedded at compile time.
//!
//! The rendering environment runs with `trim_blocks`, so the newline right after a
//! `{% ... %}` tag is dropped. Put block tags on their own lines and every other line of
//! a template comes out exactly as written.

pub const BANNER_TEMPLATE: &str = include_str!("templates/banner.tmp");
pub const WELCOME_TEMPLATE: &str = include_str!("templates/welcome.tmp");
pub const GENERATING_TEMPLATE: &str = include_str!("templates/generating.tmp");
pub const GENERATED_TEMPLATE: &str = include_str!("templates/generated.tmp");
pub const CLOSING_TEMPLATE: &str = include_str!("templates/closing.tmp");
pub const PATTERNS_TEMPLATE: &str = include_str!("templates/patterns.tmp");
