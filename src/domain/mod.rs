mod sheet;
mod stats;
pub(crate) mod storage;

pub use sheet::{Cell, Sheet, GAMES_COLUMN, MINUTES_COLUMN};
pub use stats::{Outcome, PageStats, StatsError, StatsResult};
