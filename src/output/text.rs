use std::io::{self, Write};

use chrono::{DateTime, Utc};

use crate::model::{Star, Tag};
use crate::output::{describe_failures, write_inline, write_line, Render};
use crate::spinner::Spinner;

/// Plain-text output: the same line layout as [`super::ColorOutput`]
/// with no escape sequences, for pipes and logs.
#[derive(Debug, Clone, Default)]
pub struct TextOutput;

impl TextOutput {
    pub fn new() -> Self {
        Self
    }

    pub fn summary_line(star: &Star) -> String {
        let mut line = format!("{} ★ :{}", star.display_name(), star.stargazers);
        if let Some(language) = &star.language {
            line.push_str(&format!(" {language}"));
        }
        if let Some(url) = &star.url {
            line.push_str(&format!(" {url}"));
        }
        line
    }

    pub fn tags_line(tags: &[Tag]) -> String {
        tags.iter()
            .map(|tag| tag.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn homepage_line(homepage: &str) -> String {
        format!("Home page: {homepage}")
    }

    pub fn starred_line(starred_at: &DateTime<Utc>) -> String {
        format!("Starred on {}", starred_at.to_rfc2822())
    }

    pub fn tick_line(glyph: char) -> String {
        format!("\rUpdating . . . {glyph} ")
    }

    /// All lines of the full record, in render order; same layout
    /// contract as the color backend.
    pub fn detail_lines(star: &Star) -> Vec<String> {
        let mut lines = vec![Self::summary_line(star)];
        if !star.tags.is_empty() {
            lines.push(Self::tags_line(&star.tags));
        }
        if let Some(description) = star.description.as_deref().filter(|d| !d.is_empty()) {
            lines.push(description.to_string());
        }
        if let Some(homepage) = star.homepage.as_deref().filter(|h| !h.is_empty()) {
            lines.push(Self::homepage_line(homepage));
        }
        lines.push(Self::starred_line(&star.starred_at));
        lines
    }
}

impl Render for TextOutput {
    fn name(&self) -> &'static str {
        "text"
    }

    fn inline(&mut self, text: &str) {
        if let Err(err) = write_inline(text) {
            self.error(&err.to_string());
        }
    }

    fn info(&mut self, text: &str) {
        if let Err(err) = write_line(text) {
            self.error(&err.to_string());
        }
    }

    fn error(&mut self, text: &str) {
        let mut err_stream = io::stderr();
        let _ = writeln!(err_stream, "{text}");
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
