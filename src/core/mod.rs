pub mod aggregator;
pub mod etl;
pub mod parser;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{RenderedReport, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
