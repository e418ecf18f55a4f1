//! Report aggregation.
//!
//! Pure transformation from one mode's records plus district/station filters
//! into a print-ready hierarchical summary. Performs no I/O and never fails
//! on empty input.

use std::cmp::Ordering;

use entity::allocation_shop::AllocationMode;

use crate::{
    model::report::{
        DistrictCell, ReportColumns, ReportModel, ReportRow, ReportSection, ReportSummary,
        SummaryRow, SummaryTable,
    },
    server::service::allocation::quota,
};

static GENERIC_TITLE: &str = "Shop Token Manager Report";
static UNKNOWN_DISTRICT: &str = "Unknown District";
static UNKNOWN_STATION: &str = "Unknown Station";

#[derive(Debug, Default, Clone)]
pub struct ReportFilter {
    pub district: Option<String>,
    pub station: Option<String>,
}

/// Builds the report for one mode's full record set.
///
/// `shops` is the unfiltered collection; filtering, zero-quantity exclusion,
/// ordering, grouping, and totals all happen here.
pub fn build_report(
    mode: AllocationMode,
    shops: &[entity::allocation_shop::Model],
    filter: &ReportFilter,
    cap: i32,
) -> ReportModel {
    let station_wise = filter.station.is_some();

    let mut filtered: Vec<&entity::allocation_shop::Model> = shops
        .iter()
        .filter(|shop| {
            if let Some(district) = &filter.district {
                if shop.district.as_deref() != Some(district.as_str()) {
                    return false;
                }
            }
            if let Some(station) = &filter.station {
                if shop.station.as_deref() != Some(station.as_str()) {
                    return false;
                }
            }
            quota::counted_quantity(shop) > 0
        })
        .collect();

    filtered.sort_by(|a, b| {
        let district_a = a.district.as_deref().unwrap_or(UNKNOWN_DISTRICT);
        let district_b = b.district.as_deref().unwrap_or(UNKNOWN_DISTRICT);
        let station_a = a.station.as_deref().unwrap_or(UNKNOWN_STATION);
        let station_b = b.station.as_deref().unwrap_or(UNKNOWN_STATION);

        district_a
            .to_lowercase()
            .cmp(&district_b.to_lowercase())
            .then_with(|| station_a.to_lowercase().cmp(&station_b.to_lowercase()))
            .then_with(|| {
                natural_cmp(
                    a.gazette_code.as_deref().unwrap_or(""),
                    b.gazette_code.as_deref().unwrap_or(""),
                )
            })
    });

    // The panel reflects the zero-excluded set, not the raw collection
    let total_shops = filtered.len() as u64;
    let tokens_allocated: i64 = filtered.iter().map(|shop| quota::counted_quantity(shop)).sum();

    // Group by (district, station) in first-appearance order of the
    // sorted set
    let mut groups: Vec<(String, String, Vec<&entity::allocation_shop::Model>)> = Vec::new();
    for shop in filtered {
        let district = shop
            .district
            .as_deref()
            .unwrap_or(UNKNOWN_DISTRICT)
            .to_string();
        let station = shop
            .station
            .as_deref()
            .unwrap_or(UNKNOWN_STATION)
            .to_string();

        match groups
            .iter_mut()
            .find(|(d, s, _)| *d == district && *s == station)
        {
            Some((_, _, members)) => members.push(shop),
            None => groups.push((district, station, vec![shop])),
        }
    }

    let mut sections = Vec::with_capacity(groups.len());
    let mut serial: u32 = 0;
    for (district, station, members) in &groups {
        let mut rows = Vec::with_capacity(members.len());
        let mut subtotal: i64 = 0;

        for shop in members {
            serial += 1;
            subtotal += quota::counted_quantity(shop);

            rows.push(ReportRow {
                serial,
                display_name: display_name(shop),
                columns: match mode {
                    AllocationMode::Planning => ReportColumns::Planning {
                        avg_sale: shop.avg_sale.clone(),
                        expected_tokens: shop.expected_tokens,
                        tokens: shop.tokens,
                    },
                    AllocationMode::Real => ReportColumns::Real {
                        total_tokens: shop.total_tokens,
                        allocated_tokens: shop.allocated_tokens.clone(),
                        allocated_count: quota::token_count(&shop.allocated_tokens),
                    },
                },
            });
        }

        sections.push(ReportSection {
            district: district.clone(),
            station: station.clone(),
            rows,
            subtotal,
        });
    }

    let summary_table = if station_wise {
        None
    } else {
        Some(build_summary_table(&sections))
    };

    let (title, summary) = match (&filter.district, &filter.station) {
        (_, Some(station)) => (
            format!("{} Token Management", station.to_uppercase()),
            None,
        ),
        (Some(district), None) => (format!("{} DISTRICT SUMMARY", district.to_uppercase()), None),
        (None, None) => (
            GENERIC_TITLE.to_string(),
            Some(ReportSummary {
                token_cap: cap,
                total_shops,
                tokens_allocated,
                remaining: i64::from(cap) - tokens_allocated,
            }),
        ),
    };

    ReportModel {
        title,
        station_wise,
        summary,
        summary_table,
        sections,
    }
}

/// One summary row per section, with the district cell emitted only on the
/// first station of each district alongside its rowspan
fn build_summary_table(sections: &[ReportSection]) -> SummaryTable {
    let mut rows = Vec::with_capacity(sections.len());
    let mut grand_total: i64 = 0;

    for (index, section) in sections.iter().enumerate() {
        grand_total += section.subtotal;

        let is_first_of_district =
            index == 0 || sections[index - 1].district != section.district;

        let district = if is_first_of_district {
            let rowspan = sections[index..]
                .iter()
                .take_while(|s| s.district == section.district)
                .count() as u32;

            Some(DistrictCell {
                name: section.district.clone(),
                rowspan,
            })
        } else {
            None
        };

        rows.push(SummaryRow {
            serial: index as u32 + 1,
            district,
            station: section.station.clone(),
            tokens: section.subtotal,
        });
    }

    SummaryTable { rows, grand_total }
}

/// "{code} - {name}" with a category suffix, unless the category is empty or
/// the literal value "OPEN"
fn display_name(shop: &entity::allocation_shop::Model) -> String {
    let base = match shop.gazette_code.as_deref() {
        Some(code) if !code.is_empty() => format!("{code} - {}", shop.name),
        _ => shop.name.clone(),
    };

    match shop.category.as_deref() {
        Some(category) if !category.is_empty() && !category.eq_ignore_ascii_case("OPEN") => {
            format!("{base} ({category})")
        }
        _ => base,
    }
}

/// Case-insensitive comparison that orders embedded numbers by value, so
/// "A2" sorts before "A10"
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a_segments = segments(a);
    let b_segments = segments(b);

    let mut a_iter = a_segments.iter();
    let mut b_iter = b_segments.iter();

    loop {
        match (a_iter.next(), b_iter.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(left), Some(right)) => {
                let ordering = match (left, right) {
                    (Segment::Number(l), Segment::Number(r)) => l.cmp(r),
                    (Segment::Text(l), Segment::Text(r)) => l.cmp(r),
                    (Segment::Number(_), Segment::Text(_)) => Ordering::Less,
                    (Segment::Text(_), Segment::Number(_)) => Ordering::Greater,
                };

                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

#[derive(PartialEq)]
enum Segment {
    Number(u128),
    Text(String),
}

fn segments(value: &str) -> Vec<Segment> {
    let mut result = Vec::new();
    let mut buffer = String::new();
    let mut buffering_digits = false;

    for ch in value.to_lowercase().chars() {
        let is_digit = ch.is_ascii_digit();

        if !buffer.is_empty() && is_digit != buffering_digits {
            result.push(flush(&mut buffer, buffering_digits));
        }

        buffering_digits = is_digit;
        buffer.push(ch);
    }

    if !buffer.is_empty() {
        result.push(flush(&mut buffer, buffering_digits));
    }

    result
}

fn flush(buffer: &mut String, digits: bool) -> Segment {
    let value = std::mem::take(buffer);

    if digits {
        Segment::Number(value.parse().unwrap_or(u128::MAX))
    } else {
        Segment::Text(value)
    }
}
