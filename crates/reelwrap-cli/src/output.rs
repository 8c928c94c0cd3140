use clap::ValueEnum;
use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn is_human(&self) -> bool {
        self.format == OutputFormat::Human
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        self.message("success", "✓".green().to_string(), msg.as_ref());
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        self.message("warning", "⚠".yellow().to_string(), msg.as_ref());
    }

    fn message(&self, kind: &str, marker: String, msg: &str) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Human => println!("{} {}", marker, msg),
            _ => self.print_json(&json!({ "type": kind, "message": msg })),
        }
    }

    /// Boxed section banner; human format only
    pub fn banner(&self, title: &str) {
        if self.quiet || !self.is_human() {
            return;
        }
        let rule = "═".repeat(60);
        println!("\n{}", format!("╔{}╗", rule).bright_white());
        println!("{} {}", "║".bright_white(), title.bright_cyan().bold());
        println!("{}", format!("╚{}╝", rule).bright_white());
        println!();
    }

    /// Emit a serializable value as JSON. Always printed in human mode too, since the caller asked for data.
    pub fn data<T: Serialize>(&self, value: &T) -> serde_json::Result<()> {
        if self.quiet && !self.is_human() {
            return Ok(());
        }
        let data = serde_json::to_value(value)?;
        self.print_json(&data);
        Ok(())
    }

    fn print_json(&self, data: &serde_json::Value) {
        match self.format {
            OutputFormat::JsonPretty => {
                println!("{}", serde_json::to_string_pretty(data).unwrap_or_default());
            }
            OutputFormat::Json | OutputFormat::Human => {
                println!("{}", serde_json::to_string(data).unwrap_or_default());
            }
        }
    }
}
