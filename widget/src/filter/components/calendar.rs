use chrono::{Datelike, NaiveDate};
use leptos::*;

use crate::config;
use crate::filter::utils::{cell_flags, month_cells, DateRange, MonthCursor};

/// One month pane of the synchronized pair. Navigation arrows are rendered
/// only where the parent exposes them: back on the left pane, forward on the
/// right one.
#[component]
pub fn CalendarMonth(
    #[prop(into)] cursor: Signal<MonthCursor>,
    #[prop(into)] range: Signal<DateRange>,
    #[prop(into)] hover: Signal<Option<NaiveDate>>,
    #[prop(into)] today: Signal<NaiveDate>,
    #[prop(optional)] show_prev: bool,
    #[prop(optional)] show_next: bool,
    #[prop(optional, into)] on_prev: Option<Callback<()>>,
    #[prop(optional, into)] on_next: Option<Callback<()>>,
    on_pick: Callback<NaiveDate>,
    on_hover: Callback<NaiveDate>,
) -> impl IntoView {
    view! {
        <div class="w-64">
            <div class="flex items-center justify-between mb-2">
                {if show_prev {
                    view! {
                        <button
                            type="button"
                            aria-label="前の月へ"
                            class="h-7 w-7 flex items-center justify-center rounded-md text-fg-muted hover:bg-surface-muted hover:text-fg"
                            on:click=move |_| {
                                if let Some(cb) = on_prev {
                                    cb.call(())
                                }
                            }
                        >
                            <i class="fas fa-chevron-left text-xs"></i>
                        </button>
                    }
                    .into_view()
                } else {
                    view! { <span class="h-7 w-7"></span> }.into_view()
                }}
                <p class="text-sm font-bold text-fg">{move || cursor.get().title()}</p>
                {if show_next {
                    view! {
                        <button
                            type="button"
                            aria-label="次の月へ"
                            class="h-7 w-7 flex items-center justify-center rounded-md text-fg-muted hover:bg-surface-muted hover:text-fg"
                            on:click=move |_| {
                                if let Some(cb) = on_next {
                                    cb.call(())
                                }
                            }
                        >
                            <i class="fas fa-chevron-right text-xs"></i>
                        </button>
                    }
                    .into_view()
                } else {
                    view! { <span class="h-7 w-7"></span> }.into_view()
                }}
            </div>
            <div class="grid grid-cols-7 gap-1 mb-1">
                {config::WEEKDAY_LABELS
                    .iter()
                    .map(|label| {
                        view! {
                            <span class="h-6 flex items-center justify-center text-[11px] font-bold text-fg-muted">
                                {*label}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="grid grid-cols-7 gap-1">
                {move || {
                    let current = cursor.get();
                    month_cells(current.year, current.month)
                        .into_iter()
                        .map(|cell| day_cell(current, cell, range, hover, today, on_pick, on_hover))
                        .collect_view()
                }}
            </div>
        </div>
    }
}

fn day_cell(
    cursor: MonthCursor,
    cell: Option<u32>,
    range: Signal<DateRange>,
    hover: Signal<Option<NaiveDate>>,
    today: Signal<NaiveDate>,
    on_pick: Callback<NaiveDate>,
    on_hover: Callback<NaiveDate>,
) -> View {
    let date = cell.and_then(|day| NaiveDate::from_ymd_opt(cursor.year, cursor.month, day));
    let Some(date) = date else {
        return view! { <span class="h-8 w-8"></span> }.into_view();
    };

    let class = move || {
        let flags = cell_flags(date, range.get(), hover.get(), today.get());
        let mut class = String::from(
            "h-8 w-8 flex items-center justify-center text-xs rounded-full transition-colors ",
        );
        if flags.endpoint {
            class.push_str("bg-action-primary-bg text-action-primary-text font-bold");
        } else if flags.in_range {
            class.push_str("bg-primary-subtle text-action-primary-bg");
        } else {
            class.push_str("text-fg hover:bg-surface-muted");
        }
        if flags.today && !flags.endpoint {
            class.push_str(" ring-1 ring-action-primary-border-hover");
        }
        class
    };

    view! {
        <button
            type="button"
            class=class
            on:click=move |_| on_pick.call(date)
            on:mouseenter=move |_| on_hover.call(date)
        >
            {date.day()}
        </button>
    }
    .into_view()
}
