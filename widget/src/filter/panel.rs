use leptos::*;

use crate::components::common::{Button, ButtonVariant};
use crate::filter::components::{CalendarMonth, PresetList};
use crate::filter::utils::RangeSelection;
use crate::filter::view_model::DateRangeFilterState;
use crate::utils::dom::on_outside_mousedown;

/// Date range filter with a dual-month calendar, quick presets and an
/// explicit apply step. `on_change` fires once per committed action (apply,
/// clear, preset); closing the panel any other way leaves the owner's value
/// alone.
#[component]
pub fn DateRangeFilter(
    #[prop(optional_no_strip)] initial_from: Option<String>,
    #[prop(optional_no_strip)] initial_to: Option<String>,
    on_change: Callback<RangeSelection>,
) -> impl IntoView {
    let state =
        DateRangeFilterState::new(initial_from.as_deref(), initial_to.as_deref(), on_change);
    let root_ref = create_node_ref::<html::Div>();

    on_outside_mousedown(root_ref, move || state.dismiss());

    let open = state.open_signal();
    let right_cursor = Signal::derive(move || state.cursor_signal().get().next());

    view! {
        <div class="relative inline-block text-left" node_ref=root_ref>
            <button
                type="button"
                class="flex items-center gap-2 rounded-xl border-2 border-form-control-border bg-form-control-bg px-4 py-2 text-sm font-semibold text-fg shadow-sm transition-all duration-200 hover:border-action-primary-border-hover hover:shadow-md"
                on:click=move |_| state.toggle_panel()
            >
                <i class="far fa-calendar-alt text-action-primary-bg"></i>
                <span>{move || state.trigger_label()}</span>
                <i class="fas fa-chevron-down text-xs text-fg-muted"></i>
            </button>

            <Show when=move || open.get()>
                <div class="absolute left-0 z-40 mt-2 rounded-xl border border-border bg-surface-elevated p-4 shadow-xl">
                    <div class="flex gap-4">
                        <PresetList on_select=Callback::new(move |days| state.apply_preset(days)) />
                        <CalendarMonth
                            cursor=state.cursor_signal()
                            range=state.draft_signal()
                            hover=state.hover_signal()
                            today=state.today_signal()
                            show_prev=true
                            on_prev=Callback::new(move |_| state.show_prev_month())
                            on_pick=Callback::new(move |day| state.pick_day(day))
                            on_hover=Callback::new(move |day| state.hover_day(day))
                        />
                        <CalendarMonth
                            cursor=right_cursor
                            range=state.draft_signal()
                            hover=state.hover_signal()
                            today=state.today_signal()
                            show_next=true
                            on_next=Callback::new(move |_| state.show_next_month())
                            on_pick=Callback::new(move |day| state.pick_day(day))
                            on_hover=Callback::new(move |day| state.hover_day(day))
                        />
                    </div>
                    <div class="mt-4 flex items-center justify-between border-t border-border pt-3">
                        <Button
                            variant=ButtonVariant::Ghost
                            on_click=Callback::new(move |_| state.clear())
                        >
                            {"クリア"}
                        </Button>
                        <Button
                            variant=ButtonVariant::Primary
                            disabled=Signal::derive(move || !state.can_apply())
                            on_click=Callback::new(move |_| state.apply())
                        >
                            {"適用"}
                        </Button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
