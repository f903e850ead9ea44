use crate::config::SelectorConfig;
use crate::error::{AppError, Result};
use scraper::Selector;

pub(crate) mod squad_table;

pub struct Selectors {
    pub games_table: Selector,
    pub summary_table: Selector,
    pub subheader_class: String,
    pub tbody: Selector,
    pub tfoot: Selector,
    pub row: Selector,
    pub cell: Selector,
}

impl Selectors {
    pub fn new(config: &SelectorConfig) -> Result<Self> {
        Ok(Self {
            games_table: parse(&config.games_table)?,
            summary_table: parse(&config.summary_table)?,
            subheader_class: config.subheader_class.clone(),
            tbody: parse("tbody")?,
            tfoot: parse("tfoot")?,
            row: parse("tr")?,
            cell: parse("td")?,
        })
    }
}

fn parse(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| AppError::Selector(format!("{selector}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selectors_parse() {
        assert!(Selectors::new(&SelectorConfig::default()).is_ok());
    }

    #[test]
    fn broken_selector_is_reported() {
        let config = SelectorConfig {
            games_table: "div >> ".to_string(),
            ..SelectorConfig::default()
        };
        let err = Selectors::new(&config).err().unwrap();
        assert!(matches!(err, AppError::Selector(ref msg) if msg.starts_with("div >> ")));
    }
}
