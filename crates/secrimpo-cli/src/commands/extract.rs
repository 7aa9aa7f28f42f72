//! Extract command - pull the record fields out of a single report.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use secrimpo_core::models::config::{OutputFormat, SecrimpoConfig};
use secrimpo_core::{CaseRecordParser, ExtractionResult, RecordParser};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input text file, or "-" for stdin
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Emit the form keys instead of the raw field map
    #[arg(long)]
    form: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Replace a bare law abbreviation with the law's name
    #[arg(long)]
    expand_laws: bool,

    /// List the fields that could not be resolved
    #[arg(long)]
    show_missing: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum FormatArg {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Text => OutputFormat::Text,
        }
    }
}

/// Resolved output settings, command-line flags over configuration.
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub form: bool,
    pub pretty: bool,
}

impl RenderOptions {
    pub fn resolve(config: &SecrimpoConfig, format: Option<FormatArg>, form: bool, pretty: bool) -> Self {
        Self {
            format: format.map(Into::into).unwrap_or(config.output.format),
            form: form || config.output.form_mapping,
            pretty: pretty || config.output.pretty,
        }
    }

    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self.format {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    let text = read_input(&args.input)?;
    info!("Extracting fields from {}", args.input.display());

    let parser = CaseRecordParser::from_config(&config.extraction)
        .with_law_name_expansion(args.expand_laws || config.extraction.expand_law_names);
    let result = parser.parse(&text);

    let options = RenderOptions::resolve(&config, args.format, args.form, args.pretty);
    let output = render(&result, options)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_missing && !result.missing_fields.is_empty() {
        let missing: Vec<&str> = result.missing_fields.iter().map(|f| f.key()).collect();
        eprintln!(
            "{} Unresolved fields: {}",
            style("ℹ").blue(),
            missing.join(", ")
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Read a report from a file, or from stdin when the path is "-".
pub fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = Vec::new();
        std::io::stdin().read_to_end(&mut buffer)?;
        return Ok(String::from_utf8_lossy(&buffer).into_owned());
    }

    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    let data = fs::read(path)?;
    Ok(String::from_utf8_lossy(&data).into_owned())
}

/// Render an extraction result in the requested format.
pub fn render(result: &ExtractionResult, options: RenderOptions) -> anyhow::Result<String> {
    match options.format {
        OutputFormat::Json => format_json(result, options),
        OutputFormat::Csv => format_csv(&rows(result, options.form)),
        OutputFormat::Text => Ok(format_text(result, options.form)),
    }
}

/// Key/value pairs to print. The raw map keeps unresolved keys as empty values.
fn rows(result: &ExtractionResult, form: bool) -> Vec<(&'static str, String)> {
    if form {
        result
            .form
            .entries()
            .into_iter()
            .map(|(key, value)| (key, value.to_string()))
            .collect()
    } else {
        result
            .fields
            .iter()
            .map(|(field, value)| (field.key(), value.unwrap_or_default().to_string()))
            .collect()
    }
}

fn format_json(result: &ExtractionResult, options: RenderOptions) -> anyhow::Result<String> {
    let value = if options.form {
        serde_json::to_value(&result.form)?
    } else {
        serde_json::to_value(&result.fields)?
    };

    if options.pretty {
        Ok(serde_json::to_string_pretty(&value)?)
    } else {
        Ok(serde_json::to_string(&value)?)
    }
}

fn format_csv(rows: &[(&'static str, String)]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(rows.iter().map(|(key, _)| *key))?;
    wtr.write_record(rows.iter().map(|(_, value)| value.as_str()))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(result: &ExtractionResult, form: bool) -> String {
    let mut output = String::new();

    for (key, value) in rows(result, form) {
        let value = if value.is_empty() { "-" } else { value.as_str() };
        output.push_str(&format!("{:<18} {}\n", format!("{}:", key), value));
    }

    if !form && !result.missing_fields.is_empty() {
        let total = result.fields.iter().count();
        output.push_str(&format!(
            "\nResolved {} of {} fields\n",
            total - result.missing_fields.len(),
            total
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(format: OutputFormat, form: bool) -> RenderOptions {
        RenderOptions {
            format,
            form,
            pretty: false,
        }
    }

    #[test]
    fn test_json_keeps_unresolved_keys() {
        let result = CaseRecordParser::new().parse("CPF: 123.456.789-01");
        let json = render(&result, options(OutputFormat::Json, false)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["cpf"], "123.456.789-01");
        assert!(value["rg"].is_null());
        assert_eq!(value.as_object().unwrap().len(), 16);
    }

    #[test]
    fn test_form_json_skips_unresolved_keys() {
        let result = CaseRecordParser::new().parse("CPF: 123.456.789-01");
        let json = render(&result, options(OutputFormat::Json, true)).unwrap();

        assert_eq!(
            json,
            r#"{"tipoDocumento":"CPF","numeroDocumento":"123.456.789-01"}"#
        );
    }

    #[test]
    fn test_csv_header_and_row() {
        let result = CaseRecordParser::new().parse("CPF: 123.456.789-01");
        let csv = render(&result, options(OutputFormat::Csv, true)).unwrap();
        let mut lines = csv.lines();

        assert_eq!(lines.next(), Some("tipoDocumento,numeroDocumento"));
        assert_eq!(lines.next(), Some("CPF,123.456.789-01"));
    }

    #[test]
    fn test_text_marks_missing_values() {
        let result = CaseRecordParser::new().parse("CPF: 123.456.789-01");
        let text = render(&result, options(OutputFormat::Text, false)).unwrap();

        assert!(text.contains("cpf:"));
        assert!(text.contains("123.456.789-01"));
        assert!(text.lines().any(|line| line.starts_with("rg:") && line.ends_with('-')));
        assert!(text.contains("of 16 fields"));
    }
}
