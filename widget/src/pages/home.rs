use leptos::*;
use serde::Deserialize;

use crate::filter::panel::DateRangeFilter;
use crate::filter::utils::RangeSelection;
use crate::state::filter::{persist_range, restore_range, use_range_filter};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActivityRow {
    pub id: String,
    pub date: String,
    pub title: String,
    pub status: String,
}

const MOCK_ACTIVITIES: &str = r#"[
    { "id": "act-001", "date": "2025-05-22", "title": "5月分の勤怠を締め処理", "status": "done" },
    { "id": "act-002", "date": "2025-05-28", "title": "出張旅費の精算申請", "status": "pending" },
    { "id": "act-003", "date": "2025-06-02", "title": "発注書 PO-1084 を承認", "status": "done" },
    { "id": "act-004", "date": "2025-06-05", "title": "新入社員アカウントを作成", "status": "done" },
    { "id": "act-005", "date": "2025-06-09", "title": "6月度の請求書を発行", "status": "pending" },
    { "id": "act-006", "date": "2025-06-12", "title": "残業申請の差し戻し対応", "status": "alert" },
    { "id": "act-007", "date": "2025-06-18", "title": "仕入先マスタの棚卸し", "status": "done" },
    { "id": "act-008", "date": "2025-06-24", "title": "給与テーブルの改定レビュー", "status": "pending" },
    { "id": "act-009", "date": "2025-06-30", "title": "四半期売上レポートを共有", "status": "done" },
    { "id": "act-010", "date": "2025-07-03", "title": "未収金アラートの確認", "status": "alert" },
    { "id": "act-011", "date": "2025-07-07", "title": "役割権限の見直し会議", "status": "pending" }
]"#;

pub fn load_activities() -> Vec<ActivityRow> {
    serde_json::from_str(MOCK_ACTIVITIES).unwrap_or_else(|err| {
        log::error!("組み込みのアクティビティデータを読み込めません: {err}");
        Vec::new()
    })
}

/// Canonical keys compare lexicographically in date order, so the bounds
/// check needs no parsing. Both bounds are inclusive.
pub fn row_in_range(row: &ActivityRow, range: &RangeSelection) -> bool {
    if let Some(from) = &range.from {
        if row.date.as_str() < from.as_str() {
            return false;
        }
    }
    if let Some(to) = &range.to {
        if row.date.as_str() > to.as_str() {
            return false;
        }
    }
    true
}

pub fn status_badge(status: &str) -> (&'static str, &'static str) {
    match status {
        "done" => ("完了", "bg-status-success-bg text-status-success-text"),
        "pending" => ("保留", "bg-status-warning-bg text-status-warning-text"),
        "alert" => ("要対応", "bg-status-error-bg text-status-error-text"),
        _ => ("不明", "bg-surface-muted text-fg-muted"),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let (range, set_range) = use_range_filter();
    if cfg!(target_arch = "wasm32") {
        if let Some(stored) = restore_range() {
            set_range.set(stored);
        }
    }

    let activities = store_value(load_activities());
    let visible = create_memo(move |_| {
        let current = range.get();
        activities.with_value(|rows| {
            rows.iter()
                .filter(|row| row_in_range(row, &current))
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let on_change = Callback::new(move |selection: RangeSelection| {
        persist_range(&selection);
        set_range.set(selection);
    });

    let initial = range.get_untracked();

    view! {
        <div class="min-h-screen bg-surface">
            <div class="max-w-5xl mx-auto py-10 px-4 sm:px-6 lg:px-8 space-y-6">
                <div>
                    <h1 class="text-3xl font-extrabold text-fg">{"Kikan"}</h1>
                    <p class="mt-1 text-sm text-fg-muted">
                        {"期間フィルターのデモ。アクティビティ一覧を選択した期間で絞り込みます。"}
                    </p>
                </div>

                <div class="flex flex-col sm:flex-row sm:items-center justify-between gap-3">
                    <DateRangeFilter
                        initial_from=initial.from
                        initial_to=initial.to
                        on_change=on_change
                    />
                    <span class="text-xs text-fg-muted">
                        {move || format!("{} 件を表示中", visible.get().len())}
                    </span>
                </div>

                <ActivityTable rows=Signal::derive(move || visible.get()) />
            </div>
        </div>
    }
}

#[component]
fn ActivityTable(#[prop(into)] rows: Signal<Vec<ActivityRow>>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg border border-border overflow-hidden">
            <Show when=move || rows.get().is_empty()>
                <p class="p-6 text-sm text-fg-muted">
                    {"該当期間のアクティビティはありません。期間を変更して再検索してください。"}
                </p>
            </Show>
            <Show when=move || !rows.get().is_empty()>
                <ul class="divide-y divide-border">
                    <For
                        each=move || rows.get()
                        key=|row| row.id.clone()
                        children=move |row| {
                            view! { <ActivityItem row=row /> }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}

#[component]
fn ActivityItem(row: ActivityRow) -> impl IntoView {
    let (label, classes) = status_badge(&row.status);
    view! {
        <li class="flex items-center justify-between gap-3 px-4 py-3">
            <div class="flex items-center gap-3 min-w-0">
                <span class="text-xs font-mono text-fg-muted shrink-0">{row.date.clone()}</span>
                <span class="text-sm text-fg truncate">{row.title.clone()}</span>
            </div>
            <span class=format!(
                "shrink-0 rounded-full px-2.5 py-0.5 text-xs font-semibold {}",
                classes
            )>{label}</span>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_parses_and_is_sorted_by_date() {
        let rows = load_activities();
        assert!(!rows.is_empty());
        for pair in rows.windows(2) {
            assert!(pair[0].date <= pair[1].date);
        }
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let row = ActivityRow {
            id: "act-x".into(),
            date: "2025-06-05".into(),
            title: "テスト".into(),
            status: "done".into(),
        };
        let exact = RangeSelection {
            from: Some("2025-06-05".into()),
            to: Some("2025-06-05".into()),
        };
        assert!(row_in_range(&row, &exact));

        let before = RangeSelection {
            from: Some("2025-06-06".into()),
            to: None,
        };
        assert!(!row_in_range(&row, &before));

        let unbounded = RangeSelection::default();
        assert!(row_in_range(&row, &unbounded));
    }

    #[test]
    fn half_open_ranges_filter_one_side() {
        let row = ActivityRow {
            id: "act-y".into(),
            date: "2025-06-20".into(),
            title: "テスト".into(),
            status: "pending".into(),
        };
        let from_only = RangeSelection {
            from: Some("2025-06-01".into()),
            to: None,
        };
        assert!(row_in_range(&row, &from_only));

        let to_only = RangeSelection {
            from: None,
            to: Some("2025-06-19".into()),
        };
        assert!(!row_in_range(&row, &to_only));
    }

    #[test]
    fn unknown_status_gets_a_neutral_badge() {
        assert_eq!(status_badge("done").0, "完了");
        assert_eq!(status_badge("mystery").0, "不明");
    }
}
