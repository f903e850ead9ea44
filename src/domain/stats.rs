use thiserror::Error;

/// Why a row did not produce a value. The `Display` text is what lands in
/// the output sheet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("Invalid link")]
    InvalidLink,
    #[error("HTTP error {0}")]
    HttpError(u16),
    #[error("Error: {0}")]
    GenericError(String),
    #[error("Not found")]
    NotFound,
}

/// Values found on a fetched page. `None` means the page had no such value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageStats {
    pub games: Option<usize>,
    pub minutes: Option<String>,
}

/// What a single row ends up with: both fields are text so sentinels and
/// numbers can share a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsResult {
    pub games: String,
    pub minutes: String,
}

impl StatsResult {
    pub fn failed(error: &StatsError) -> Self {
        let text = error.to_string();
        Self {
            games: text.clone(),
            minutes: text,
        }
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::classify(&self.games)
    }
}

impl From<PageStats> for StatsResult {
    fn from(stats: PageStats) -> Self {
        let not_found = || StatsError::NotFound.to_string();
        Self {
            games: stats
                .games
                .map(|count| count.to_string())
                .unwrap_or_else(not_found),
            minutes: stats.minutes.unwrap_or_else(not_found),
        }
    }
}

impl From<std::result::Result<PageStats, StatsError>> for StatsResult {
    fn from(result: std::result::Result<PageStats, StatsError>) -> Self {
        match result {
            Ok(stats) => stats.into(),
            Err(e) => Self::failed(&e),
        }
    }
}

/// Coarse kind of a row outcome, used for the end-of-run tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    Found,
    NotFound,
    InvalidLink,
    HttpError,
    Error,
}

impl Outcome {
    fn classify(games: &str) -> Self {
        if games == StatsError::NotFound.to_string() {
            Outcome::NotFound
        } else if games == StatsError::InvalidLink.to_string() {
            Outcome::InvalidLink
        } else if games.starts_with("HTTP error ") {
            Outcome::HttpError
        } else if games.starts_with("Error: ") {
            Outcome::Error
        } else {
            Outcome::Found
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Found => "found",
            Outcome::NotFound => "not found",
            Outcome::InvalidLink => "invalid link",
            Outcome::HttpError => "http error",
            Outcome::Error => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_match_output_text() {
        assert_eq!(StatsError::InvalidLink.to_string(), "Invalid link");
        assert_eq!(StatsError::HttpError(404).to_string(), "HTTP error 404");
        assert_eq!(
            StatsError::GenericError("timed out".into()).to_string(),
            "Error: timed out"
        );
        assert_eq!(StatsError::NotFound.to_string(), "Not found");
    }

    #[test]
    fn failure_fills_both_fields() {
        let result = StatsResult::from(Err::<PageStats, _>(StatsError::HttpError(503)));
        assert_eq!(result.games, "HTTP error 503");
        assert_eq!(result.minutes, "HTTP error 503");
    }

    #[test]
    fn missing_values_become_not_found() {
        let result = StatsResult::from(PageStats {
            games: Some(7),
            minutes: None,
        });
        assert_eq!(result.games, "7");
        assert_eq!(result.minutes, "Not found");
    }

    #[test]
    fn outcome_is_read_from_games_field() {
        let found = StatsResult::from(PageStats {
            games: Some(0),
            minutes: Some("0'".into()),
        });
        assert_eq!(found.outcome(), Outcome::Found);
        assert_eq!(
            StatsResult::failed(&StatsError::InvalidLink).outcome(),
            Outcome::InvalidLink
        );
        assert_eq!(
            StatsResult::failed(&StatsError::GenericError("x".into())).outcome(),
            Outcome::Error
        );
        assert_eq!(StatsResult::from(PageStats::default()).outcome(), Outcome::NotFound);
    }
}
