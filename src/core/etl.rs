use crate::core::{Pipeline, RenderedReport};
use crate::utils::error::Result;

pub struct GpaEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> GpaEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<RenderedReport> {
        tracing::debug!("Starting GPA report");

        let lines = self.pipeline.extract()?;
        tracing::info!("Read {} line(s)", lines.len());

        let result = self.pipeline.transform(lines)?;
        tracing::info!(
            "Accepted {} of {} line(s); ranked {} student(s)",
            result.accepted_records,
            result.lines_read,
            result.students.len()
        );

        let report = self.pipeline.load(result)?;
        tracing::debug!("Rendered {} bytes", report.body.len());

        Ok(report)
    }
}
