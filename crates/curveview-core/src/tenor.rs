//! Treasury constant-maturity tenors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The ten constant-maturity Treasury tenors published by FRED.
///
/// The discriminant order is ascending duration, which is also the fetch
/// order and the column order of the assembled [`YieldTable`]. Chart x-axes
/// use this order as-is.
///
/// [`YieldTable`]: crate::YieldTable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TreasuryTenor {
    /// 1-month bill yield (`DGS1MO`)
    OneMonth,
    /// 3-month bill yield (`DGS3MO`)
    ThreeMonth,
    /// 6-month bill yield (`DGS6MO`)
    SixMonth,
    /// 1-year yield (`DGS1`)
    OneYear,
    /// 2-year yield (`DGS2`)
    TwoYear,
    /// 5-year yield (`DGS5`)
    FiveYear,
    /// 7-year yield (`DGS7`)
    SevenYear,
    /// 10-year yield (`DGS10`)
    TenYear,
    /// 20-year yield (`DGS20`)
    TwentyYear,
    /// 30-year yield (`DGS30`)
    ThirtyYear,
}

impl TreasuryTenor {
    /// All ten tenors in fetch order (ascending duration).
    pub const ALL: [TreasuryTenor; 10] = [
        TreasuryTenor::OneMonth,
        TreasuryTenor::ThreeMonth,
        TreasuryTenor::SixMonth,
        TreasuryTenor::OneYear,
        TreasuryTenor::TwoYear,
        TreasuryTenor::FiveYear,
        TreasuryTenor::SevenYear,
        TreasuryTenor::TenYear,
        TreasuryTenor::TwentyYear,
        TreasuryTenor::ThirtyYear,
    ];

    /// Returns the FRED series identifier for this tenor.
    ///
    /// These identifiers double as column labels in the assembled table and
    /// as x-axis values in the charts.
    #[must_use]
    pub fn series_id(&self) -> &'static str {
        match self {
            TreasuryTenor::OneMonth => "DGS1MO",
            TreasuryTenor::ThreeMonth => "DGS3MO",
            TreasuryTenor::SixMonth => "DGS6MO",
            TreasuryTenor::OneYear => "DGS1",
            TreasuryTenor::TwoYear => "DGS2",
            TreasuryTenor::FiveYear => "DGS5",
            TreasuryTenor::SevenYear => "DGS7",
            TreasuryTenor::TenYear => "DGS10",
            TreasuryTenor::TwentyYear => "DGS20",
            TreasuryTenor::ThirtyYear => "DGS30",
        }
    }

    /// Parse a tenor from its FRED series identifier (e.g. `"DGS10"`).
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim().to_uppercase();
        TreasuryTenor::ALL
            .iter()
            .copied()
            .find(|t| t.series_id() == s)
            .ok_or_else(|| format!("unknown treasury series identifier: {s}"))
    }

    /// Convert the tenor to approximate calendar days.
    #[must_use]
    pub fn approx_days(&self) -> u32 {
        match self {
            TreasuryTenor::OneMonth => 30,
            TreasuryTenor::ThreeMonth => 90,
            TreasuryTenor::SixMonth => 180,
            TreasuryTenor::OneYear => 365,
            TreasuryTenor::TwoYear => 2 * 365,
            TreasuryTenor::FiveYear => 5 * 365,
            TreasuryTenor::SevenYear => 7 * 365,
            TreasuryTenor::TenYear => 10 * 365,
            TreasuryTenor::TwentyYear => 20 * 365,
            TreasuryTenor::ThirtyYear => 30 * 365,
        }
    }
}

impl fmt::Display for TreasuryTenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.series_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_has_ten_tenors_in_ascending_duration() {
        assert_eq!(TreasuryTenor::ALL.len(), 10);
        for pair in TreasuryTenor::ALL.windows(2) {
            assert!(pair[0].approx_days() < pair[1].approx_days());
        }
    }

    #[test]
    fn test_series_ids_in_fetch_order() {
        let ids: Vec<&str> = TreasuryTenor::ALL.iter().map(|t| t.series_id()).collect();
        assert_eq!(
            ids,
            vec![
                "DGS1MO", "DGS3MO", "DGS6MO", "DGS1", "DGS2", "DGS5", "DGS7", "DGS10", "DGS20",
                "DGS30",
            ]
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            TreasuryTenor::parse("DGS10").unwrap(),
            TreasuryTenor::TenYear
        );
        assert_eq!(
            TreasuryTenor::parse(" dgs1mo ").unwrap(),
            TreasuryTenor::OneMonth
        );
        assert!(TreasuryTenor::parse("DGS3").is_err());
        assert!(TreasuryTenor::parse("").is_err());
    }

    #[test]
    fn test_display_matches_series_id() {
        assert_eq!(TreasuryTenor::ThirtyYear.to_string(), "DGS30");
    }
}
