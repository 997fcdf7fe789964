// drawtext filter construction

use std::fmt;

use crate::config::VideoConfig;

/// A `drawtext` video filter.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawTextFilter {
    pub text: String,
    pub font: String,
    pub font_size: u32,
    pub font_color: String,
    pub opacity: f32,
    pub x: i32,
    pub y: i32,
}

impl Default for DrawTextFilter {
    fn default() -> Self {
        Self::from_config(&VideoConfig::default())
    }
}

impl DrawTextFilter {
    pub fn from_config(config: &VideoConfig) -> Self {
        Self {
            text: config.text.clone(),
            font: config.font.clone(),
            font_size: config.font_size,
            font_color: config.font_color.clone(),
            opacity: config.opacity,
            x: config.x,
            y: config.y,
        }
    }
}

impl fmt::Display for DrawTextFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "drawtext=font={}:text={}:fontsize={}:fontcolor={}@{}:x={}:y={}",
            escape_graph(&escape_option(&self.font)),
            quote_graph(&escape_option(&escape_expansion(&self.text))),
            self.font_size,
            self.font_color,
            self.opacity,
            self.x,
            self.y
        )
    }
}

// ffmpeg unescapes a drawtext value three times: once when splitting the
// filtergraph, once when parsing the filter options and, for `text`, once
// more during `%{...}` expansion. Each level is escaped innermost first.

/// Text expansion level: `\` and `%`.
fn escape_expansion(value: &str) -> String {
    value.replace('\\', "\\\\").replace('%', "\\%")
}

/// Option level: `\`, `'` and the `:` separator.
fn escape_option(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace(':', "\\:")
}

/// Filtergraph level, unquoted.
fn escape_graph(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '\'' | '[' | ']' | ',' | ';') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Filtergraph level, single-quoted. Backslashes are literal inside quotes,
/// so a quote is written as `'\''`.
fn quote_graph(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
