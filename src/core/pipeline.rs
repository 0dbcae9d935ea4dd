use crate::core::aggregator::{aggregate, rank};
use crate::core::parser::parse_lines;
use crate::core::report::{render_csv, render_error_log, render_json, render_table};
use crate::core::{ConfigProvider, Pipeline, RenderedReport, Storage, TransformResult};
use crate::domain::model::OutputFormat;
use crate::utils::error::Result;

pub struct RosterPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> RosterPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

/// Splits roster text into lines. `\r\n` and lone `\r` end a line like `\n`
/// does, and a trailing newline leaves one final empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .split('\n')
        .map(str::to_string)
        .collect()
}

impl<S: Storage, C: ConfigProvider> Pipeline for RosterPipeline<S, C> {
    fn extract(&self) -> Result<Vec<String>> {
        let path = self.config.input_path();
        let bytes = self.storage.read_file(path)?;
        tracing::debug!("Read {} bytes from {}", bytes.len(), path);

        let text = String::from_utf8(bytes)?;
        Ok(split_lines(&text))
    }

    fn transform(&self, lines: Vec<String>) -> Result<TransformResult> {
        let lines_read = lines.len();
        let (records, errors) = parse_lines(&lines);
        let accepted_records = records.len();

        if !errors.is_empty() {
            tracing::warn!("{} line(s) failed validation", errors.len());
        }

        let students = rank(&aggregate(records));

        Ok(TransformResult {
            lines_read,
            accepted_records,
            students,
            errors,
        })
    }

    fn load(&self, result: TransformResult) -> Result<RenderedReport> {
        let errors = if self.config.show_errors() {
            result.errors.as_slice()
        } else {
            &[]
        };

        let report = match self.config.output_format() {
            OutputFormat::Table => {
                let mut body = render_table(&result.students, self.config.name_margin());
                body.push_str(&render_error_log(errors));
                RenderedReport {
                    body,
                    error_log: String::new(),
                }
            }
            OutputFormat::Csv => RenderedReport {
                body: render_csv(&result.students)?,
                error_log: render_error_log(errors),
            },
            OutputFormat::Json => RenderedReport {
                body: render_json(&result.students, errors)?,
                error_log: String::new(),
            },
        };

        Ok(report)
    }
}
