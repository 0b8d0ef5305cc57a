use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

/// One value's place in an encoded buffer.
#[derive(Debug, Serialize)]
pub struct Field {
    pub index: usize,
    #[serde(rename = "type")]
    pub wire_type: &'static str,
    pub offset: usize,
    pub size: usize,
    pub value: String,
    pub hex: String,
}

impl Field {
    pub fn new(
        index: usize,
        wire_type: &'static str,
        offset: usize,
        bytes: &[u8],
        value: String,
    ) -> Self {
        Self {
            index,
            wire_type,
            offset,
            size: bytes.len(),
            value,
            hex: hex::encode(bytes),
        }
    }
}

/// Result of a pack, unpack or legacy run.
#[derive(Debug, Serialize)]
pub struct Report {
    pub operation: &'static str,
    pub size: usize,
    pub hex: String,
    pub fields: Vec<Field>,
    pub trailing: usize,
}

impl Report {
    pub fn new(operation: &'static str, bytes: &[u8], fields: Vec<Field>, trailing: usize) -> Self {
        Self {
            operation,
            size: bytes.len(),
            hex: hex::encode(bytes),
            fields,
            trailing,
        }
    }
}

pub fn print_report(report: &Report, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(report).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["#", "TYPE", "OFFSET", "SIZE", "VALUE", "HEX"]);
            for field in &report.fields {
                table.add_row(vec![
                    field.index.to_string(),
                    field.wire_type.to_string(),
                    field.offset.to_string(),
                    field.size.to_string(),
                    field.value.clone(),
                    field.hex.clone(),
                ]);
            }
            println!("{table}");
            println!("{}", summary(report));
        }
        OutputFormat::Pretty => {
            for field in &report.fields {
                println!(
                    "[{}] {} offset={} size={} value={} hex={}",
                    field.index, field.wire_type, field.offset, field.size, field.value, field.hex
                );
            }
            println!("{}", summary(report));
        }
        OutputFormat::Raw => {
            for field in &report.fields {
                println!("{}", raw_line(field));
            }
        }
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

/// One value per line; control characters are escaped so a decoded `\n`
/// cannot be mistaken for a field boundary.
fn raw_line(field: &Field) -> String {
    field.value.escape_debug().to_string()
}

fn summary(report: &Report) -> String {
    let mut line = format!("{} size={} hex={}", report.operation, report.size, report.hex);
    if report.trailing > 0 {
        line.push_str(&format!(" trailing={}", report.trailing));
    }
    line
}
