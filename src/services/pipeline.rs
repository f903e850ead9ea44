use crate::config::Config;
use crate::domain::Sheet;
use crate::error::{AppError, Result};
use crate::infrastructure::{HttpPageFetcher, Selectors, SheetFormat};
use crate::services::batch::{BatchReport, BatchService};
use crate::services::extraction::ExtractionService;
use crate::services::progress::TerminalProgress;
use tracing::{info, warn};

/// Load the input sheet, scrape every link, write the augmented sheet.
pub struct StatsPipeline {
    config: Config,
}

impl StatsPipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn process(&self) -> Result<()> {
        let args = &self.config.args;
        let sheet = self.load_sheet()?;

        if args.list_columns {
            for header in &sheet.headers {
                println!("{header}");
            }
            return Ok(());
        }

        if let Some(rows) = args.preview {
            println!("{}", sheet.head(rows).render());
            return Ok(());
        }

        let column = args.column.as_deref().ok_or_else(|| {
            AppError::Column(format!(
                "no link column given, pass --column (available: {})",
                sheet.headers.join(", ")
            ))
        })?;
        // Fail on a bad output path before spending minutes on requests.
        let output_format = SheetFormat::from_output(&args.output)?;

        if sheet.is_empty() {
            warn!("{} has no data rows", args.input.display());
        }

        let report = self.extract(sheet, column).await?;
        self.show_results(&report, column)?;

        output_format.store().save(&report.sheet, &args.output)?;
        info!(
            "Wrote {} ({})",
            args.output.display(),
            output_format.mime_type()
        );
        Ok(())
    }

    fn load_sheet(&self) -> Result<Sheet> {
        let args = &self.config.args;
        let format = SheetFormat::from_input(&args.input)?;
        format.store().load(&args.input, args.sheet.as_deref())
    }

    async fn extract(&self, sheet: Sheet, column: &str) -> Result<BatchReport> {
        let selectors = Selectors::new(&self.config.selectors)?;
        let fetcher = HttpPageFetcher::new(self.config.http_client.clone());
        let batch = BatchService::new(ExtractionService::new(fetcher, selectors), self.config.delay());

        let mut progress = TerminalProgress::new();
        batch.run(sheet, column, &mut progress).await
    }

    fn show_results(&self, report: &BatchReport, column: &str) -> Result<()> {
        if !self.config.args.quiet {
            println!("{}", report.results_table(column)?.render());
        }

        for (outcome, count) in report.tally() {
            info!("{}: {} rows", outcome.label(), count);
        }
        Ok(())
    }
}
