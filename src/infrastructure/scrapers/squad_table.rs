//! Stats of a player profile page: how many matches the player was in the
//! squad for, and the season's total minutes.

use super::Selectors;
use crate::domain::PageStats;
use scraper::{ElementRef, Html};

const MIN_GAME_CELLS: usize = 6;
const MIN_FOOTER_CELLS: usize = 3;

/// A place on the page that may hold the total minutes.
type MinutesStrategy = fn(&Html, ElementRef<'_>, &Selectors) -> Option<String>;

/// Tried in order; the first one returning a value wins.
const MINUTES_STRATEGIES: [MinutesStrategy; 2] = [footer_total, summary_total];

pub fn extract_stats(document: &Html, selectors: &Selectors) -> PageStats {
    let Some(table) = document.select(&selectors.games_table).next() else {
        return PageStats::default();
    };

    PageStats {
        games: count_games(table, selectors),
        minutes: MINUTES_STRATEGIES
            .iter()
            .find_map(|strategy| strategy(document, table, selectors)),
    }
}

/// Rows of the match table the player was part of, unused substitute
/// appearances included. `None` when the table has no body at all.
fn count_games(table: ElementRef<'_>, selectors: &Selectors) -> Option<usize> {
    let bodies: Vec<ElementRef<'_>> = table.select(&selectors.tbody).collect();
    if bodies.is_empty() {
        return None;
    }

    let count = bodies
        .iter()
        .flat_map(|body| body.select(&selectors.row))
        .filter(|row| is_game_row(*row, selectors))
        .count();
    Some(count)
}

fn is_game_row(row: ElementRef<'_>, selectors: &Selectors) -> bool {
    let subheader = row
        .value()
        .classes()
        .any(|class| class == selectors.subheader_class);
    !subheader && row.select(&selectors.cell).count() >= MIN_GAME_CELLS
}

fn footer_total(_: &Html, table: ElementRef<'_>, selectors: &Selectors) -> Option<String> {
    let footer = table.select(&selectors.tfoot).next()?;
    let cells: Vec<ElementRef<'_>> = footer.select(&selectors.cell).collect();
    if cells.len() < MIN_FOOTER_CELLS {
        return None;
    }
    cells.last().map(|cell| stripped_text(*cell))
}

fn summary_total(document: &Html, _: ElementRef<'_>, selectors: &Selectors) -> Option<String> {
    let summary = document.select(&selectors.summary_table).next()?;
    let body = summary.select(&selectors.tbody).next()?;
    let first_row = body.select(&selectors.row).next()?;
    first_row
        .select(&selectors.cell)
        .last()
        .map(stripped_text)
}

/// Every text node trimmed, then glued together.
fn stripped_text(element: ElementRef<'_>) -> String {
    element.text().map(str::trim).collect()
}
