use std::io::{self, Write};

use chrono::{DateTime, Utc};
use colored::Colorize;

use crate::model::{Star, Tag};
use crate::output::{describe_failures, write_inline, write_line, Render};
use crate::spinner::Spinner;

/// ANSI colorized output. The `colored` crate drops the escape
/// sequences on its own when stdout is not a terminal.
#[derive(Debug, Clone, Default)]
pub struct ColorOutput;

impl ColorOutput {
    pub fn new() -> Self {
        Self
    }

    /// One line: name, ` ★ :<count>`, then language and URL when
    /// present, each field in its own color.
    pub fn summary_line(star: &Star) -> String {
        let mut line = star.display_name().blue().to_string();
        line.push_str(&format!(" ★ :{}", star.stargazers).yellow().to_string());
        if let Some(language) = &star.language {
            line.push_str(&format!(" {language}").green().to_string());
        }
        if let Some(url) = &star.url {
            line.push_str(&format!(" {url}").red().to_string());
        }
        line
    }

    pub fn tags_line(tags: &[Tag]) -> String {
        tags.iter()
            .map(|tag| tag.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
            .magenta()
            .to_string()
    }

    pub fn homepage_line(homepage: &str) -> String {
        format!("Home page: {homepage}").red().to_string()
    }

    pub fn starred_line(starred_at: &DateTime<Utc>) -> String {
        format!("Starred on {}", starred_at.to_rfc2822())
            .green()
            .to_string()
    }

    pub fn tick_line(glyph: char) -> String {
        format!("\rUpdating . . . {glyph} ").cyan().to_string()
    }

    /// All lines of the full record, in render order: summary, tags
    /// (when non-empty), description, homepage, then the starred-on
    /// line. Empty-string fields are treated as absent.
    pub fn detail_lines(star: &Star) -> Vec<String> {
        let mut lines = vec![Self::summary_line(star)];
        if !star.tags.is_empty() {
            lines.push(Self::tags_line(&star.tags));
        }
        if let Some(description) = star.description.as_deref().filter(|d| !d.is_empty()) {
            lines.push(description.white().to_string());
        }
        if let Some(homepage) = star.homepage.as_deref().filter(|h| !h.is_empty()) {
            lines.push(Self::homepage_line(homepage));
        }
        lines.push(Self::starred_line(&star.starred_at));
        lines
    }
}

impl Render for ColorOutput {
    fn name(&self) -> &'static str {
        "color"
    }

    fn inline(&mut self, text: &str) {
        if let Err(err) = write_inline(&text.green().to_string()) {
            self.error(&err.to_string());
        }
    }

    fn info(&mut self, text: &str) {
        if let Err(err) = write_line(&text.green().to_string()) {
            self.error(&err.to_string());
        }
    }

    fn error(&mut self, text: &str) {
        // Last resort for reporting; a failing stderr write has
        // nowhere left to go.
        let mut err_stream = io::stderr();
        let _ = writeln!(err_stream, "{}", text.red());
    }

    fn summary(&mut self, star: &Star) {
        if let Err(err) = write_line(&Self::summary_line(star)) {
            self.error(&err.to_string());
        }
    }

    fn detail(&mut self, star: &Star) {
        let mut failures = Vec::new();
        for line in Self::detail_lines(star) {
            if let Err(err) = write_line(&line) {
                failures.push(err);
            }
        }
        if !failures.is_empty() {
            self.error(&describe_failures(&failures));
        }
    }

    fn tick(&mut self, spinner: &mut Spinner) {
        if let Err(err) = write_inline(&Self::tick_line(spinner.next())) {
            self.error(&err.to_string());
        }
    }
}
