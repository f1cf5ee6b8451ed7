//! Output formatting for parsed maps and token classifications.

use argmap_core::{ArgumentMap, TokenKind};
use serde::Serialize;

use crate::error::Result;

/// Supported output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
    Table,
}

/// One classified input token.
#[derive(Debug, Serialize)]
pub struct TokenReport<'a> {
    pub token: &'a str,
    pub kind: TokenKind,
}

/// Formats an argument map in the requested output format.
pub fn format_map(map: &ArgumentMap, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(map)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(map)?),
        OutputFormat::Table => Ok(map_to_table(map)),
    }
}

/// Formats token classifications in the requested output format.
pub fn format_tokens(tokens: &[TokenReport<'_>], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(tokens)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(tokens)?),
        OutputFormat::Table => Ok(tokens_to_table(tokens)),
    }
}

fn map_to_table(map: &ArgumentMap) -> String {
    let mut out = String::new();

    out.push_str(&format!("Flags: {}\n", map.num_flags()));
    if map.is_empty() {
        return out;
    }

    let max_flag = map.flags().map(str::len).max().unwrap_or(4).max(4);

    out.push('\n');
    out.push_str(&format!("  {:<max_flag$}  VALUE\n", "FLAG"));
    for (flag, value) in map.iter() {
        out.push_str(&format!("  {flag:<max_flag$}  {}\n", value.unwrap_or("-")));
    }

    out
}

fn tokens_to_table(tokens: &[TokenReport<'_>]) -> String {
    let mut out = String::new();

    let max_token = tokens
        .iter()
        .map(|report| format!("{:?}", report.token).len())
        .max()
        .unwrap_or(5)
        .max(5);

    out.push_str(&format!("{:<max_token$}  KIND\n", "TOKEN"));
    for report in tokens {
        let kind = match report.kind {
            TokenKind::Flag => "flag",
            TokenKind::Value => "value",
            TokenKind::Blank => "blank",
        };
        let token = format!("{:?}", report.token);
        out.push_str(&format!("{token:<max_token$}  {kind}\n"));
    }

    out
}
