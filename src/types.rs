//! Common types and data structures

use crate::generator::HotelListing;

/// Phase of the simulated scan
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    Idle,
    Running,
    Cancelled,
    Complete,
}

/// State shared between the scan task and the UI loop
pub struct ScanState {
    pub phase: ScanPhase,
    pub progress: u8,
    pub message: String,
    pub results: Option<Vec<HotelListing>>, // set once at completion
}

impl Default for ScanState {
    fn default() -> Self {
        Self {
            phase: ScanPhase::Idle,
            progress: 0,
            message: String::new(),
            results: None,
        }
    }
}

/// Field to rank listings by
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SortKey {
    Opportunity,
    Financial,
    Seo,
    Revenue,
    Name,
    Equity,
    Employees,
}

impl SortKey {
    /// Keys offered in the sort dropdown (the table exposes the rest)
    pub const DROPDOWN: [SortKey; 4] = [
        SortKey::Opportunity,
        SortKey::Financial,
        SortKey::Seo,
        SortKey::Revenue,
    ];

    pub fn dropdown_label(self) -> &'static str {
        match self {
            SortKey::Opportunity => "Sort by Opportunity",
            SortKey::Financial => "Sort by Financial Health",
            SortKey::Seo => "Sort by SEO Score (Low First)",
            SortKey::Revenue => "Sort by Revenue",
            _ => "Sort",
        }
    }

    /// SEO ranks weakest-first; everything else strongest-first.
    pub fn default_direction(self) -> SortDirection {
        match self {
            SortKey::Seo | SortKey::Name => SortDirection::Ascending,
            _ => SortDirection::Descending,
        }
    }
}

/// Sort direction for the results table
#[derive(Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Summary of the most recent completed scan
#[derive(Clone)]
pub struct ScanStats {
    pub total_scanned: usize,
    pub qualifying: usize,
    pub avg_opportunity: u32,
    pub top_issue: String,
}
