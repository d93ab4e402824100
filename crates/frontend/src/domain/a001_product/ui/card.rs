use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;
use thaw::Card;

/// Карточка товара в сетке каталога
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let card_id = format!("card-{}", product.id);
    let price = format!("${}", product.price);
    let rating = format!("{} ★", product.rating);

    view! {
        <div id=card_id class="product-card">
            <Card>
                <div class="product-card__image">
                    <img src=product.thumbnail alt=product.title.clone() />
                </div>
                <div class="product-card__body">
                    <h3 class="product-card__title">{product.title}</h3>
                    <p class="product-card__description">{product.description}</p>
                    <div class="product-card__footer">
                        <span class="product-card__price">{price}</span>
                        <span class="product-card__rating">{rating}</span>
                    </div>
                </div>
            </Card>
        </div>
    }
}
