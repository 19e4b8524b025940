use leptos::*;

use crate::config;

#[component]
pub fn PresetList(on_select: Callback<i64>) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-1 pr-4 border-r border-border min-w-[7.5rem]">
            <p class="px-2 py-1 text-xs font-bold text-fg-muted uppercase tracking-wider">
                {"クイック選択"}
            </p>
            {config::PRESETS
                .iter()
                .map(|preset| {
                    let days = preset.days;
                    view! {
                        <button
                            type="button"
                            class="text-left text-sm px-2 py-1.5 rounded-md text-fg hover:bg-surface-muted hover:text-action-primary-bg"
                            on:click=move |_| on_select.call(days)
                        >
                            {preset.label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
