use crate::domain::{Outcome, Sheet, StatsResult, GAMES_COLUMN, MINUTES_COLUMN};
use crate::error::Result;
use crate::infrastructure::PageFetcher;
use crate::services::extraction::ExtractionService;
use crate::services::progress::ProgressSink;
use std::collections::BTreeMap;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// What a finished run hands to the caller: the augmented sheet plus the
/// per-row results it was built from.
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub sheet: Sheet,
    pub results: Vec<StatsResult>,
}

impl BatchReport {
    /// How many rows ended in each kind of outcome.
    pub fn tally(&self) -> BTreeMap<Outcome, usize> {
        let mut counts = BTreeMap::new();
        for result in &self.results {
            *counts.entry(result.outcome()).or_insert(0) += 1;
        }
        counts
    }

    /// The link column next to both stats columns.
    pub fn results_table(&self, link_column: &str) -> Result<Sheet> {
        self.sheet
            .select(&[link_column, GAMES_COLUMN, MINUTES_COLUMN])
    }
}

pub struct BatchService<F> {
    extraction: ExtractionService<F>,
    delay: Duration,
}

impl<F: PageFetcher> BatchService<F> {
    pub fn new(extraction: ExtractionService<F>, delay: Duration) -> Self {
        Self { extraction, delay }
    }

    /// Extracts the stats of every row, one request at a time, in row order.
    pub async fn run(
        &self,
        sheet: Sheet,
        link_column: &str,
        progress: &mut dyn ProgressSink,
    ) -> Result<BatchReport> {
        let links = sheet.links(link_column)?;
        let total = links.len();
        info!("Starting extraction for {} rows", total);
        progress.begin(total);

        let mut results = Vec::with_capacity(total);
        for (index, link) in links.iter().enumerate() {
            if index > 0 {
                sleep(self.delay).await;
            }
            progress.status(&format!("Processing {}/{}...", index + 1, total));

            let result = self.extraction.extract(link.as_deref()).await;
            match result.outcome() {
                Outcome::Found | Outcome::NotFound => debug!(
                    "Row {}: games={} minutes={}",
                    index + 1,
                    result.games,
                    result.minutes
                ),
                _ => warn!("Row {} ({:?}): {}", index + 1, link, result.games),
            }

            progress.row_done(index, &result);
            results.push(result);
        }
        progress.finish("Extraction complete!");

        let sheet = sheet.with_stats(&results)?;
        Ok(BatchReport { sheet, results })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SelectorConfig;
    use crate::domain::Cell;
    use crate::infrastructure::Selectors;
    use crate::services::extraction::tests::{profile_page, FakeFetcher};
    use crate::services::progress::NullProgress;

    fn batch(fetcher: FakeFetcher) -> BatchService<FakeFetcher> {
        let selectors = Selectors::new(&SelectorConfig::default()).unwrap();
        BatchService::new(ExtractionService::new(fetcher, selectors), Duration::ZERO)
    }

    fn column(sheet: &Sheet, name: &str) -> Vec<String> {
        let index = sheet.column_index(name).unwrap();
        (0..sheet.rows.len())
            .map(|row| sheet.cell(row, index).to_string())
            .collect()
    }

    #[derive(Default)]
    struct Recorder {
        total: usize,
        statuses: Vec<String>,
        done: Vec<usize>,
        finished: bool,
    }

    impl ProgressSink for Recorder {
        fn begin(&mut self, total: usize) {
            self.total = total;
        }
        fn status(&mut self, msg: &str) {
            self.statuses.push(msg.to_string());
        }
        fn row_done(&mut self, row: usize, _result: &StatsResult) {
            self.done.push(row);
        }
        fn finish(&mut self, _msg: &str) {
            self.finished = true;
        }
    }

    #[tokio::test]
    async fn mixed_rows_keep_their_order() {
        let fetcher = FakeFetcher::default()
            .with_page("https://example.com/ok", 200, &profile_page(12, "987'"))
            .with_page("https://example.com/gone", 404, "");
        let sheet = Sheet::new(
            vec!["Player".into(), "Link".into()],
            vec![
                vec!["Ana".into(), "https://example.com/ok".into()],
                vec!["Bia".into(), Cell::Empty],
                vec!["Caio".into(), "https://example.com/gone".into()],
            ],
        );

        let report = batch(fetcher)
            .run(sheet, "Link", &mut NullProgress)
            .await
            .unwrap();

        assert_eq!(
            column(&report.sheet, GAMES_COLUMN),
            vec!["12", "Invalid link", "HTTP error 404"]
        );
        assert_eq!(
            column(&report.sheet, MINUTES_COLUMN),
            vec!["987'", "Invalid link", "HTTP error 404"]
        );
        assert_eq!(column(&report.sheet, "Player"), vec!["Ana", "Bia", "Caio"]);
    }

    #[tokio::test]
    async fn failures_do_not_stop_the_batch() {
        let fetcher = FakeFetcher::default().with_page("https://example.com/b", 200, &profile_page(2, "180'"));
        let sheet = Sheet::new(
            vec!["Link".into()],
            vec![
                vec!["https://down.example/a".into()],
                vec!["https://example.com/b".into()],
                vec![Cell::Int(7)],
            ],
        );

        let batch = batch(fetcher);
        let report = batch.run(sheet, "Link", &mut NullProgress).await.unwrap();

        assert_eq!(report.results.len(), 3);
        assert!(report.results[0].games.starts_with("Error: "));
        assert_eq!(report.results[1].games, "2");
        assert_eq!(report.results[2].games, "Invalid link");
        assert_eq!(
            batch.extraction_requests(),
            vec!["https://down.example/a", "https://example.com/b"]
        );

        let tally = report.tally();
        assert_eq!(tally.get(&Outcome::Error), Some(&1));
        assert_eq!(tally.get(&Outcome::Found), Some(&1));
        assert_eq!(tally.get(&Outcome::InvalidLink), Some(&1));
        assert_eq!(tally.get(&Outcome::HttpError), None);
    }

    #[tokio::test]
    async fn progress_is_reported_per_row() {
        let sheet = Sheet::new(
            vec!["Link".into()],
            vec![vec!["x".into()], vec!["y".into()]],
        );
        let mut recorder = Recorder::default();

        batch(FakeFetcher::default())
            .run(sheet, "Link", &mut recorder)
            .await
            .unwrap();

        assert_eq!(recorder.total, 2);
        assert_eq!(recorder.statuses, vec!["Processing 1/2...", "Processing 2/2..."]);
        assert_eq!(recorder.done, vec![0, 1]);
        assert!(recorder.finished);
    }

    #[tokio::test]
    async fn unknown_link_column_fails_before_fetching() {
        let sheet = Sheet::new(vec!["Link".into()], vec![vec!["https://example.com".into()]]);
        let batch = batch(FakeFetcher::default());

        assert!(batch.run(sheet, "URL", &mut NullProgress).await.is_err());
        assert!(batch.extraction_requests().is_empty());
    }

    #[tokio::test]
    async fn results_table_shows_link_and_stats() {
        let fetcher = FakeFetcher::default().with_page("https://example.com/ok", 200, &profile_page(1, "90'"));
        let sheet = Sheet::new(
            vec!["Player".into(), "Link".into()],
            vec![vec!["Ana".into(), "https://example.com/ok".into()]],
        );
        let report = batch(fetcher).run(sheet, "Link", &mut NullProgress).await.unwrap();

        let table = report.results_table("Link").unwrap();
        assert_eq!(table.headers, vec!["Link", GAMES_COLUMN, MINUTES_COLUMN]);
        assert_eq!(table.rows[0], vec![
            Cell::Text("https://example.com/ok".into()),
            Cell::Text("1".into()),
            Cell::Text("90'".into()),
        ]);
    }

    impl BatchService<FakeFetcher> {
        fn extraction_requests(&self) -> Vec<String> {
            self.extraction.fetcher().requests()
        }
    }
}
