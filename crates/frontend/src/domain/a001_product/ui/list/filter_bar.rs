use contracts::domain::a002_category::aggregate::{display_name, CategoryDirectory, ALL_CATEGORIES};
use contracts::enums::sort_key::SortKey;
use leptos::prelude::*;

use crate::shared::components::ui::Select;

/// Опции селектора категорий: "All Categories" и затем справочник
pub fn category_options(directory: &CategoryDirectory) -> Vec<(String, String)> {
    std::iter::once((ALL_CATEGORIES.to_string(), "All Categories".to_string()))
        .chain(
            directory
                .categories()
                .iter()
                .map(|c| (c.clone(), display_name(c))),
        )
        .collect()
}

pub fn sort_options() -> Vec<(String, String)> {
    SortKey::all()
        .into_iter()
        .map(|k| (k.code().to_string(), k.display_name().to_string()))
        .collect()
}

#[component]
pub fn FilterBar(
    #[prop(into)] categories: Signal<CategoryDirectory>,
    #[prop(into)] selected_category: Signal<String>,
    on_category_change: Callback<String>,
    #[prop(into)] sort_option: Signal<String>,
    on_sort_change: Callback<String>,
) -> impl IntoView {
    let category_opts = Signal::derive(move || categories.with(category_options));

    view! {
        <div class="filter-bar">
            <Select
                id="category"
                label="Category"
                value=selected_category
                on_change=on_category_change
                options=category_opts
            />
            <Select
                id="sort"
                label="Sort By"
                value=sort_option
                on_change=on_sort_change
                options=Signal::derive(sort_options)
            />
        </div>
    }
}
