pub mod json;
pub mod md;

use crate::error::PsiError;
use crate::types::report::AnalysisReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &AnalysisReport, format: OutputFormat) -> Result<String, PsiError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(PsiError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
