use serde::{Deserialize, Serialize};

/// Structured, print-ready report for one allocation mode.
///
/// The backend computes grouping, ordering, and totals; rendering the merged
/// cells and styling is the presentation layer's concern.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReportModel {
    pub title: String,
    /// Station-wise reports omit the summary panel and summary table.
    pub station_wise: bool,
    /// Aggregate panel, present only on the unfiltered report.
    pub summary: Option<ReportSummary>,
    pub summary_table: Option<SummaryTable>,
    pub sections: Vec<ReportSection>,
}

/// Cap / shop count / allocated / remaining panel.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReportSummary {
    pub token_cap: i32,
    pub total_shops: u64,
    pub tokens_allocated: i64,
    pub remaining: i64,
}

/// One row per (district, station) pair plus a grand total.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SummaryTable {
    pub rows: Vec<SummaryRow>,
    pub grand_total: i64,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SummaryRow {
    pub serial: u32,
    /// Set on the first station row of each district; continuation rows of
    /// the same district carry no district cell (rowspan display grouping).
    pub district: Option<DistrictCell>,
    pub station: String,
    pub tokens: i64,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DistrictCell {
    pub name: String,
    pub rowspan: u32,
}

/// Detail table for one (district, station) group.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReportSection {
    pub district: String,
    pub station: String,
    pub rows: Vec<ReportRow>,
    pub subtotal: i64,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReportRow {
    /// Running serial across all sections of the report.
    pub serial: u32,
    pub display_name: String,
    #[serde(flatten)]
    pub columns: ReportColumns,
}

/// Mode-specific detail columns.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ReportColumns {
    Planning {
        avg_sale: String,
        expected_tokens: i32,
        tokens: i32,
    },
    Real {
        total_tokens: i32,
        allocated_tokens: String,
        allocated_count: i64,
    },
}
