use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Label of the synthetic slice holding movies beyond the pie limit
pub const OTHER_LABEL: &str = "Other";

/// Default number of movie slices in the revenue pie
pub const DEFAULT_TOP_MOVIES: usize = 5;

/// What happens to movies beyond the pie-chart limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PieOverflow {
    /// Omit them; the slices then cover less than 100% of revenue
    #[default]
    Drop,
    /// Sum them into one trailing "Other" slice
    Rollup,
}

impl FromStr for PieOverflow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "drop" => Ok(PieOverflow::Drop),
            "rollup" | "roll-up" | "other" => Ok(PieOverflow::Rollup),
            _ => Err(format!("Invalid pie overflow mode: {} (expected drop or rollup)", s)),
        }
    }
}

impl fmt::Display for PieOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieOverflow::Drop => write!(f, "drop"),
            PieOverflow::Rollup => write!(f, "rollup"),
        }
    }
}

/// Bar or line chart point
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: Decimal,
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: Decimal,
    pub percentage: Decimal,
    pub display: String,
}

/// Breakdown table row for a movie or cinema
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownRow {
    pub key: Option<String>,
    pub label: String,
    pub revenue: String,
    pub ticket_count: u64,
    pub percentage: String,
}

/// Everything the revenue screen renders
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RevenueView {
    pub cinema_bars: Vec<ChartPoint>,
    pub movie_pie: Vec<PieSlice>,
    pub daily_line: Vec<ChartPoint>,
    pub movie_rows: Vec<BreakdownRow>,
    pub cinema_rows: Vec<BreakdownRow>,
    pub grand_total: Decimal,
    pub grand_total_display: String,
    pub ticket_count: u64,
}
