pub mod filter_bar;
pub mod projection;
pub mod state;
pub mod view_model;

use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Spinner};

use self::filter_bar::FilterBar;
use self::view_model::ProductListViewModel;
use crate::domain::a001_product::ui::card::ProductCard;

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let vm = ProductListViewModel::new();
    vm.init();

    let on_category_change = Callback::new(move |value: String| vm.select_category(value));
    let on_sort_change = Callback::new(move |code: String| vm.change_sort(code));

    // Каждый срез сессии отдельно, чтобы обновление одного поля
    // не пересоздавало всю страницу
    let error = vm.error_memo();
    let products = Memo::new(move |_| vm.products());
    let is_loading = Memo::new(move |_| vm.is_loading());
    let has_more = Memo::new(move |_| vm.has_more());
    let is_empty = Memo::new(move |_| vm.is_empty());
    let category_value = Memo::new(move |_| vm.category_value());
    let sort_code = Memo::new(move |_| vm.sort_code());

    view! {
        // Ошибка загрузки товаров заменяет всю страницу
        <Show
            when=move || error.with(|e| e.is_empty())
            fallback=move || view! {
                <div class="page-error">
                    <div class="page-error__message">{move || error.get()}</div>
                </div>
            }
        >
            <div class="container">
                <h1 class="page-title">"Product Explorer"</h1>

                <FilterBar
                    categories=vm.categories
                    selected_category=category_value
                    on_category_change=on_category_change
                    sort_option=sort_code
                    on_sort_change=on_sort_change
                />

                <ProductGrid products=products />

                <Show when=move || is_loading.get()>
                    <div class="loading">
                        <Spinner />
                    </div>
                </Show>

                <Show when=move || has_more.get() && !is_loading.get()>
                    <div class="load-more">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| vm.load_more()
                        >
                            "Load More"
                        </Button>
                    </div>
                </Show>

                <Show when=move || !has_more.get() && !is_empty.get()>
                    <div class="end-of-list">"No more products to load"</div>
                </Show>
            </div>
        </Show>
    }
}

#[component]
fn ProductGrid(#[prop(into)] products: Signal<Vec<Product>>) -> impl IntoView {
    view! {
        <Show
            when=move || products.with(|p| !p.is_empty())
            fallback=|| view! {
                <div class="empty-state">
                    <p>"No products found."</p>
                </div>
            }
        >
            <div class="product-grid">
                <For
                    each=move || products.get()
                    key=|p| p.id
                    children=move |product: Product| {
                        view! { <ProductCard product=product /> }
                    }
                />
            </div>
        </Show>
    }
}
