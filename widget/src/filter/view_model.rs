use chrono::NaiveDate;
use leptos::*;

use crate::filter::utils::{
    display_label, resolve_preset, DateRange, MonthCursor, RangeSelection,
};
use crate::utils::time::today_in_app_tz;

/// Panel state for one filter instance. The draft is the only thing day
/// clicks touch; the committed range changes solely through `apply`,
/// `clear` and `apply_preset`, each of which notifies the owner exactly
/// once.
#[derive(Clone, Copy)]
pub struct DateRangeFilterState {
    open: RwSignal<bool>,
    draft: RwSignal<DateRange>,
    committed: RwSignal<DateRange>,
    hover: RwSignal<Option<NaiveDate>>,
    cursor: RwSignal<MonthCursor>,
    today: RwSignal<NaiveDate>,
    on_change: Callback<RangeSelection>,
}

impl DateRangeFilterState {
    pub fn new(
        initial_from: Option<&str>,
        initial_to: Option<&str>,
        on_change: Callback<RangeSelection>,
    ) -> Self {
        let committed = DateRange::from_keys(initial_from, initial_to);
        let today = today_in_app_tz();
        Self {
            open: create_rw_signal(false),
            draft: create_rw_signal(committed),
            committed: create_rw_signal(committed),
            hover: create_rw_signal(None),
            cursor: create_rw_signal(MonthCursor::for_date(committed.from.unwrap_or(today))),
            today: create_rw_signal(today),
            on_change,
        }
    }

    pub fn open_signal(&self) -> RwSignal<bool> {
        self.open
    }

    pub fn draft_signal(&self) -> RwSignal<DateRange> {
        self.draft
    }

    pub fn committed_signal(&self) -> RwSignal<DateRange> {
        self.committed
    }

    pub fn hover_signal(&self) -> RwSignal<Option<NaiveDate>> {
        self.hover
    }

    pub fn cursor_signal(&self) -> RwSignal<MonthCursor> {
        self.cursor
    }

    pub fn today_signal(&self) -> RwSignal<NaiveDate> {
        self.today
    }

    pub fn toggle_panel(&self) {
        if self.open.get_untracked() {
            self.dismiss();
        } else {
            self.open_panel();
        }
    }

    /// Seeds the draft from the committed range and re-anchors the calendar
    /// pair on the draft's month, or the current month when nothing is
    /// selected.
    pub fn open_panel(&self) {
        let committed = self.committed.get_untracked();
        let today = today_in_app_tz();
        self.draft.set(committed);
        self.hover.set(None);
        self.today.set(today);
        self.cursor
            .set(MonthCursor::for_date(committed.from.unwrap_or(today)));
        self.open.set(true);
    }

    /// Closes without committing. The draft is abandoned; the owner is not
    /// notified.
    pub fn dismiss(&self) {
        if self.open.get_untracked() {
            self.open.set(false);
        }
    }

    pub fn pick_day(&self, day: NaiveDate) {
        self.hover.set(None);
        self.draft.update(|range| *range = range.pick(day));
    }

    pub fn hover_day(&self, day: NaiveDate) {
        self.hover.set(Some(day));
    }

    pub fn show_prev_month(&self) {
        self.cursor.update(|cursor| *cursor = cursor.prev());
    }

    pub fn show_next_month(&self) {
        self.cursor.update(|cursor| *cursor = cursor.next());
    }

    pub fn can_apply(&self) -> bool {
        self.draft.get().from.is_some()
    }

    pub fn apply(&self) {
        let draft = self.draft.get_untracked();
        if draft.from.is_none() {
            return;
        }
        self.committed.set(draft);
        self.emit(draft);
        self.open.set(false);
    }

    pub fn clear(&self) {
        let cleared = DateRange::default();
        self.draft.set(cleared);
        self.committed.set(cleared);
        self.emit(cleared);
        self.open.set(false);
    }

    /// Presets skip the draft/apply cycle: the resolved range is staged and
    /// committed in one step, anchored on the current date.
    pub fn apply_preset(&self, days: i64) {
        let range = resolve_preset(days, today_in_app_tz());
        self.draft.set(range);
        self.committed.set(range);
        self.emit(range);
        self.open.set(false);
    }

    pub fn trigger_label(&self) -> String {
        let committed = self.committed.get();
        match (committed.from, committed.to) {
            (None, _) => "期間で絞り込み".to_string(),
            (Some(from), None) => format!("{} 〜", display_label(Some(from))),
            (Some(from), Some(to)) => format!(
                "{} 〜 {}",
                display_label(Some(from)),
                display_label(Some(to))
            ),
        }
    }

    fn emit(&self, range: DateRange) {
        self.on_change.call(RangeSelection::from_range(range));
    }
}
