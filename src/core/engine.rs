use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct PlannerEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> PlannerEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Extract and transform without writing anything.
    pub fn preview(&self) -> Result<P::Output> {
        tracing::info!("🧭 Building learner profile...");
        let input = self.pipeline.extract()?;

        tracing::info!("🧩 Matching courses and composing plan...");
        self.pipeline.transform(input)
    }

    pub fn run(&self) -> Result<String> {
        self.run_with_report(|_| {})
    }

    /// Full run; `report` sees the transformed output before it is written.
    pub fn run_with_report<F: FnOnce(&P::Output)>(&self, report: F) -> Result<String> {
        let output = self.preview()?;
        report(&output);

        tracing::info!("💾 Writing outputs...");
        let output_path = self.pipeline.load(output)?;
        tracing::info!("📁 Output saved to: {}", output_path);

        Ok(output_path)
    }
}
