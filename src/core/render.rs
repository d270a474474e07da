//! Renderer module
//!
//! Renders an [`EntryList`] to different output formats: plain, jsonl,
//! json.

use crate::core::entries::EntryList;
use std::io::Write;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One name per line, exactly as decorated.
    #[default]
    Plain,
    /// One JSON string per line.
    Jsonl,
    /// A single JSON array.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(OutputFormat::Plain),
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    /// Pretty-print JSON output. Has no effect on plain/jsonl.
    pub pretty: bool,
}

impl RenderConfig {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for entry lists
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render an entry list to a string
    pub fn render(&self, list: &EntryList) -> String {
        match self.config.format {
            OutputFormat::Plain => self.render_plain(list),
            OutputFormat::Jsonl => self.render_jsonl(list),
            OutputFormat::Json => self.render_json(list),
        }
    }

    /// Render to a writer
    #[allow(dead_code)]
    pub fn render_to<W: Write>(&self, list: &EntryList, mut writer: W) -> std::io::Result<()> {
        let output = self.render(list);
        writer.write_all(output.as_bytes())
    }

    fn render_plain(&self, list: &EntryList) -> String {
        list.names().join("\n")
    }

    fn render_jsonl(&self, list: &EntryList) -> String {
        list.iter()
            .filter_map(|name| serde_json::to_string(name).ok())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_json(&self, list: &EntryList) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(list).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(list).unwrap_or_else(|_| "[]".to_string())
        }
    }
}
