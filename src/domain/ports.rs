use crate::domain::model::{OutputFormat, RenderedReport, TransformResult};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_format(&self) -> OutputFormat;
    fn name_margin(&self) -> usize;
    fn show_errors(&self) -> bool;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<String>>;
    fn transform(&self, lines: Vec<String>) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<RenderedReport>;
}
