use contracts::domain::a002_size_option::SizeOptionSet;
use leptos::prelude::*;

/// Single-select size buttons; the clicked option becomes the only active one
#[component]
pub fn SizeSelector(sizes: RwSignal<SizeOptionSet>) -> impl IntoView {
    let labels = sizes.with_untracked(|s| s.labels().to_vec());

    view! {
        <div class="size-selector">
            <span class="size-selector__label">"Size"</span>
            <div class="size-selector__options">
                {labels
                    .into_iter()
                    .enumerate()
                    .map(|(index, label)| {
                        view! {
                            <button
                                type="button"
                                class="size-option"
                                class:active=move || sizes.with(|s| s.is_active(index))
                                on:click=move |_| {
                                    sizes.update(|s| {
                                        s.select(index);
                                    });
                                }
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
