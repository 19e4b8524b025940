use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical key format. Lexicographic order on keys equals chronological
/// order, so keys are compared as plain strings everywhere.
pub const KEY_FORMAT: &str = "%Y-%m-%d";

pub fn date_key(date: NaiveDate) -> String {
    date.format(KEY_FORMAT).to_string()
}

/// Lenient parse: blank or malformed input means "no bound".
pub fn parse_key(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, KEY_FORMAT).ok()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateKeyError {
    #[error("日付キーが空です")]
    Empty,
    #[error("日付キーの形式が不正です: {0}")]
    Malformed(String),
}

/// Strict parse for callers that want to log why a key was rejected.
pub fn parse_key_strict(value: &str) -> Result<NaiveDate, DateKeyError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DateKeyError::Empty);
    }
    NaiveDate::parse_from_str(trimmed, KEY_FORMAT)
        .map_err(|_| DateKeyError::Malformed(trimmed.to_string()))
}

pub fn display_label(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d %b %Y").to_string())
        .unwrap_or_default()
}

fn days_in_month(first: NaiveDate) -> u32 {
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.checked_sub_signed(Duration::days(1)))
        .map(|last| last.day())
        .unwrap_or(0)
}

/// Day cells for one month, padded with `None` so the grid is whole weeks:
/// leading placeholders up to the weekday of the 1st (0 = Sunday), then one
/// cell per day, then trailing placeholders to a multiple of seven.
pub fn month_cells(year: i32, month: u32) -> Vec<Option<u32>> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let leading = first.weekday().num_days_from_sunday() as usize;
    let mut cells = vec![None; leading];
    cells.extend((1..=days_in_month(first)).map(Some));
    while cells.len() % 7 != 0 {
        cells.push(None);
    }
    cells
}

/// A pair of optional endpoints. Whenever both are present, `from <= to`
/// holds; `pick` restores that invariant on every insert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn from_keys(from: Option<&str>, to: Option<&str>) -> Self {
        Self {
            from: from.and_then(parse_key),
            to: to.and_then(parse_key),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    /// One click of the two-click endpoint protocol. With only `from` set, a
    /// click completes the range, swapping endpoints when the user clicked
    /// backwards. Any other state starts a fresh range at the clicked day.
    pub fn pick(self, day: NaiveDate) -> Self {
        match (self.from, self.to) {
            (Some(from), None) => {
                if day < from {
                    Self {
                        from: Some(day),
                        to: Some(from),
                    }
                } else {
                    Self {
                        from: Some(from),
                        to: Some(day),
                    }
                }
            }
            _ => Self {
                from: Some(day),
                to: None,
            },
        }
    }
}

/// Visual state of one rendered day cell. Endpoint wins over in-range when
/// both would apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellFlags {
    pub endpoint: bool,
    pub in_range: bool,
    pub today: bool,
}

/// The hover cursor only previews an in-progress selection: it is ignored
/// entirely once `to` is set, and only extends the range when it lies after
/// `from`.
pub fn cell_flags(
    day: NaiveDate,
    range: DateRange,
    hover: Option<NaiveDate>,
    today: NaiveDate,
) -> CellFlags {
    let hover = if range.to.is_none() { hover } else { None };
    let endpoint = range.from == Some(day) || range.to == Some(day) || hover == Some(day);
    let effective_end = range
        .to
        .or_else(|| hover.filter(|h| range.from.is_some_and(|from| *h > from)));
    let in_range = match (range.from, effective_end) {
        (Some(from), Some(end)) => day > from && day < end,
        _ => false,
    };
    CellFlags {
        endpoint,
        in_range,
        today: day == today,
    }
}

/// Month shown in the left pane. The right pane is always `next()` of the
/// left one, so the two panes can never drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    pub month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn title(self) -> String {
        format!("{}年{}月", self.year, self.month)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetDefinition {
    pub label: &'static str,
    pub days: i64,
}

/// `days == 0` selects today alone; otherwise the range covers the `days`
/// calendar days before today through today.
pub fn resolve_preset(days: i64, today: NaiveDate) -> DateRange {
    let from = today
        .checked_sub_signed(Duration::days(days.max(0)))
        .unwrap_or(today);
    DateRange {
        from: Some(from),
        to: Some(today),
    }
}

/// The value handed to the owner on every committed action: canonical keys,
/// or absent endpoints. Nothing else ever crosses the component boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSelection {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl RangeSelection {
    pub fn from_range(range: DateRange) -> Self {
        Self {
            from: range.from.map(date_key),
            to: range.to.map(date_key),
        }
    }

    pub fn to_range(&self) -> DateRange {
        DateRange::from_keys(self.from.as_deref(), self.to.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn key_round_trips() {
        let date = d(2025, 6, 3);
        assert_eq!(date_key(date), "2025-06-03");
        assert_eq!(parse_key(&date_key(date)), Some(date));
    }

    #[test]
    fn key_order_matches_date_order() {
        let pairs = [
            (d(2024, 12, 31), d(2025, 1, 1)),
            (d(2025, 6, 3), d(2025, 6, 10)),
            (d(2025, 9, 30), d(2025, 10, 1)),
        ];
        for (a, b) in pairs {
            assert_eq!(date_key(a) < date_key(b), a < b);
        }
    }

    #[test]
    fn lenient_parse_treats_bad_input_as_absent() {
        assert_eq!(parse_key(""), None);
        assert_eq!(parse_key("   "), None);
        assert_eq!(parse_key("2025/06/03"), None);
        assert_eq!(parse_key("2025-13-01"), None);
        assert_eq!(parse_key(" 2025-06-03 "), Some(d(2025, 6, 3)));
    }

    #[test]
    fn strict_parse_names_the_failure() {
        assert_eq!(parse_key_strict(""), Err(DateKeyError::Empty));
        assert_eq!(
            parse_key_strict("not-a-date"),
            Err(DateKeyError::Malformed("not-a-date".into()))
        );
        assert_eq!(parse_key_strict("2025-06-03"), Ok(d(2025, 6, 3)));
    }

    #[test]
    fn display_label_formats_or_stays_blank() {
        assert_eq!(display_label(Some(d(2025, 6, 3))), "03 Jun 2025");
        assert_eq!(display_label(None), "");
    }

    #[test]
    fn month_grids_are_complete_weeks() {
        for year in [1999, 2024, 2025] {
            for month in 1..=12 {
                let cells = month_cells(year, month);
                assert_eq!(cells.len() % 7, 0, "{year}-{month}");

                let first = d(year, month, 1);
                let offset = cells.iter().position(|c| c.is_some()).unwrap();
                assert_eq!(offset, first.weekday().num_days_from_sunday() as usize);

                let numbers: Vec<u32> = cells.iter().flatten().copied().collect();
                let expected: Vec<u32> = (1..=days_in_month(first)).collect();
                assert_eq!(numbers, expected, "{year}-{month}");
            }
        }
    }

    #[test]
    fn leap_february_has_twenty_nine_cells() {
        let cells = month_cells(2024, 2);
        assert_eq!(cells.iter().flatten().count(), 29);
        // 2024-02-01 is a Thursday
        assert_eq!(cells.iter().position(|c| c.is_some()), Some(4));
    }

    #[test]
    fn pick_normalizes_out_of_order_clicks() {
        let range = DateRange::default().pick(d(2025, 2, 20)).pick(d(2025, 2, 10));
        assert_eq!(range.from, Some(d(2025, 2, 10)));
        assert_eq!(range.to, Some(d(2025, 2, 20)));
    }

    #[test]
    fn pick_in_order_keeps_endpoints() {
        let range = DateRange::default().pick(d(2025, 2, 10)).pick(d(2025, 2, 20));
        assert_eq!(range.from, Some(d(2025, 2, 10)));
        assert_eq!(range.to, Some(d(2025, 2, 20)));
    }

    #[test]
    fn third_click_starts_over() {
        let range = DateRange::default()
            .pick(d(2025, 2, 10))
            .pick(d(2025, 2, 20))
            .pick(d(2025, 3, 1));
        assert_eq!(range.from, Some(d(2025, 3, 1)));
        assert_eq!(range.to, None);
    }

    #[test]
    fn picking_the_same_day_twice_selects_one_day() {
        let range = DateRange::default().pick(d(2025, 2, 10)).pick(d(2025, 2, 10));
        assert_eq!(range.from, range.to);
        assert!(range.is_complete());
    }

    #[test]
    fn preset_zero_is_today_alone() {
        let today = d(2025, 6, 15);
        let range = resolve_preset(0, today);
        assert_eq!(range.from, Some(today));
        assert_eq!(range.to, Some(today));
    }

    #[test]
    fn preset_span_crosses_year_boundaries() {
        let range = resolve_preset(7, d(2025, 1, 3));
        assert_eq!(range.from, Some(d(2024, 12, 27)));
        assert_eq!(range.to, Some(d(2025, 1, 3)));
    }

    #[test]
    fn cell_flags_endpoint_dominates_in_range() {
        let range = DateRange::new(Some(d(2025, 6, 3)), Some(d(2025, 6, 10)));
        let today = d(2025, 6, 1);

        let from_flags = cell_flags(d(2025, 6, 3), range, None, today);
        assert!(from_flags.endpoint);

        let middle = cell_flags(d(2025, 6, 7), range, None, today);
        assert!(!middle.endpoint);
        assert!(middle.in_range);

        let outside = cell_flags(d(2025, 6, 11), range, None, today);
        assert!(!outside.endpoint);
        assert!(!outside.in_range);
    }

    #[test]
    fn hover_previews_only_forward_while_incomplete() {
        let partial = DateRange::new(Some(d(2025, 6, 10)), None);
        let today = d(2025, 6, 1);

        let previewed = cell_flags(d(2025, 6, 12), partial, Some(d(2025, 6, 15)), today);
        assert!(previewed.in_range);

        let hovered = cell_flags(d(2025, 6, 15), partial, Some(d(2025, 6, 15)), today);
        assert!(hovered.endpoint);

        // hovering before `from` extends nothing
        let backwards = cell_flags(d(2025, 6, 8), partial, Some(d(2025, 6, 5)), today);
        assert!(!backwards.in_range);
    }

    #[test]
    fn hover_is_ignored_once_complete() {
        let complete = DateRange::new(Some(d(2025, 6, 3)), Some(d(2025, 6, 10)));
        let flags = cell_flags(d(2025, 6, 12), complete, Some(d(2025, 6, 20)), d(2025, 6, 1));
        assert!(!flags.endpoint);
        assert!(!flags.in_range);
    }

    #[test]
    fn today_marker_is_independent_of_selection() {
        let today = d(2025, 6, 7);
        let range = DateRange::new(Some(d(2025, 6, 3)), Some(d(2025, 6, 10)));
        let flags = cell_flags(today, range, None, today);
        assert!(flags.today);
        assert!(flags.in_range);
    }

    #[test]
    fn cursor_pair_wraps_across_december() {
        let cursor = MonthCursor::new(2024, 12);
        assert_eq!(cursor.next(), MonthCursor::new(2025, 1));
        assert_eq!(MonthCursor::new(2025, 1).prev(), cursor);
        assert_eq!(cursor.title(), "2024年12月");
    }

    #[test]
    fn cursor_advances_in_lockstep() {
        let mut cursor = MonthCursor::new(2024, 11);
        for _ in 0..14 {
            cursor = cursor.next();
        }
        assert_eq!(cursor, MonthCursor::new(2026, 1));
        assert_eq!(cursor.next(), MonthCursor::new(2026, 2));
    }

    #[test]
    fn range_from_keys_tolerates_partial_input() {
        let range = DateRange::from_keys(Some("2025-06-03"), Some("garbage"));
        assert_eq!(range.from, Some(d(2025, 6, 3)));
        assert_eq!(range.to, None);

        let blank = DateRange::from_keys(None, None);
        assert!(blank.is_empty());
    }

    #[test]
    fn selection_serializes_as_plain_keys() {
        let selection =
            RangeSelection::from_range(DateRange::new(Some(d(2025, 6, 3)), Some(d(2025, 6, 10))));
        let json = serde_json::to_value(&selection).unwrap();
        assert_eq!(json["from"], serde_json::json!("2025-06-03"));
        assert_eq!(json["to"], serde_json::json!("2025-06-10"));

        let back: RangeSelection = serde_json::from_value(json).unwrap();
        assert_eq!(back.to_range(), selection.to_range());
    }
}
