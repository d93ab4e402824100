//! Клиентская сортировка накопленного списка.
//!
//! Проекция никогда не меняет источник: всегда возвращается новый вектор,
//! сортировки стабильные (равные элементы сохраняют входной порядок).

use contracts::domain::a001_product::aggregate::Product;
use contracts::enums::sort_key::SortKey;
use std::cmp::Ordering;

/// Порядок отображения товаров для выбранного ключа
pub fn project(items: &[Product], key: SortKey) -> Vec<Product> {
    let mut result = items.to_vec();
    match key {
        SortKey::Default => {}
        SortKey::PriceAsc => result.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => result.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::TitleAsc => result.sort_by(|a, b| collate(&a.title, &b.title)),
        SortKey::TitleDesc => result.sort_by(|a, b| collate(&b.title, &a.title)),
    }
    result
}

/// Сравнение строк "как в словаре": сначала без учёта регистра,
/// при равенстве строчные буквы идут раньше заглавных.
pub fn collate(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    primary.then_with(|| {
        a.chars()
            .map(|c| (c.is_uppercase(), c))
            .cmp(b.chars().map(|c| (c.is_uppercase(), c)))
    })
}
