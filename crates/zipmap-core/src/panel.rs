//! Info panel text for the current selection
//!
//! Produces the lines shown in the side panel and popup: the feature's
//! display name, market size and housing units with thousands
//! separators, and the market share to two decimals.

use zipmap_io::schema::ZipDemand;

use crate::format;

/// Prompt shown when nothing is selected
pub const DEFAULT_PROMPT: &str = "Click on map features for details";

/// Panel lines for a selection, or the default prompt without one
pub fn info_lines(selection: Option<&ZipDemand>) -> Vec<String> {
    match selection {
        Some(demand) => selection_lines(demand),
        None => vec![DEFAULT_PROMPT.to_string()],
    }
}

/// Panel lines for a selected feature
pub fn selection_lines(demand: &ZipDemand) -> Vec<String> {
    vec![
        demand.display_name().to_string(),
        format!(
            "Electric Market Size: {}",
            format::thousands(demand.market_size)
        ),
        format!(
            "Total Housing Units: {}",
            format::thousands(demand.housing_units)
        ),
        format!(
            "Sparky Market Share: {}",
            format::percent(demand.market_share)
        ),
    ]
}

/// Popup heading for a selected feature
pub fn popup_title(demand: &ZipDemand) -> String {
    format!("ZIP: {}", demand.zip_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demand() -> ZipDemand {
        serde_json::from_str(
            r#"{
                "ZIP_Code": "60018",
                "zip_statename": "Des Plaines, IL",
                "elec_market_size": 1234567.0,
                "Total Housing Units": 8900,
                "SparyMarketShare": 12.3456,
                "Built 2020 or later": 1,
                "Built 2010 to 2019": 2,
                "Built 2000 to 2009": 3,
                "Built 1990 to 1999": 4,
                "Built 1980 to 1989": 5,
                "Built 1970 to 1979": 6,
                "Built 1960 to 1969": 7,
                "Built 1950 to 1959": 8,
                "Built 1940 to 1949": 9,
                "Built 1939 or earlier": 10
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_selection_lines_round_trip() {
        let lines = selection_lines(&demand());

        assert_eq!(lines[0], "Des Plaines, IL");
        assert_eq!(lines[1], "Electric Market Size: 1,234,567");
        assert_eq!(lines[2], "Total Housing Units: 8,900");
        assert_eq!(lines[3], "Sparky Market Share: 12.35%");
    }

    #[test]
    fn test_info_lines_default_prompt() {
        assert_eq!(info_lines(None), vec![DEFAULT_PROMPT.to_string()]);
    }

    #[test]
    fn test_popup_title() {
        assert_eq!(popup_title(&demand()), "ZIP: 60018");
    }
}
