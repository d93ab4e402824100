use serde::{Deserialize, Serialize};

/// Ключ клиентской сортировки списка товаров
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    /// Порядок накопления, без переупорядочивания
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    TitleAsc,
    TitleDesc,
}

impl SortKey {
    /// Получить код ключа (значение селектора)
    pub fn code(&self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::TitleAsc => "title-asc",
            SortKey::TitleDesc => "title-desc",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Default => "Default",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::TitleAsc => "Title: A to Z",
            SortKey::TitleDesc => "Title: Z to A",
        }
    }

    /// Получить все ключи в порядке отображения
    pub fn all() -> Vec<SortKey> {
        vec![
            SortKey::Default,
            SortKey::PriceAsc,
            SortKey::PriceDesc,
            SortKey::TitleAsc,
            SortKey::TitleDesc,
        ]
    }

    /// Парсинг из строки. Неизвестный код трактуется как `Default`
    pub fn from_code(code: &str) -> Self {
        match code {
            "price-asc" => SortKey::PriceAsc,
            "price-desc" => SortKey::PriceDesc,
            "title-asc" => SortKey::TitleAsc,
            "title-desc" => SortKey::TitleDesc,
            _ => SortKey::Default,
        }
    }
}

impl From<String> for SortKey {
    fn from(value: String) -> Self {
        SortKey::from_code(&value)
    }
}

impl From<SortKey> for String {
    fn from(value: SortKey) -> Self {
        value.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_roundtrip() {
        for key in SortKey::all() {
            assert_eq!(SortKey::from_code(key.code()), key);
        }
    }

    #[test]
    fn test_unknown_code_is_default() {
        assert_eq!(SortKey::from_code("rating-desc"), SortKey::Default);
        assert_eq!(SortKey::from_code(""), SortKey::Default);
    }
}
