use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Значение селектора для "все категории"
pub const ALL_CATEGORIES: &str = "all";

/// Выбранная категория: весь каталог или конкретный идентификатор
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategorySelection {
    #[default]
    All,
    Named(String),
}

impl CategorySelection {
    /// Парсинг из значения селектора. Пустая строка и "all" означают весь каталог
    pub fn from_value(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == ALL_CATEGORIES {
            CategorySelection::All
        } else {
            CategorySelection::Named(value.to_string())
        }
    }

    /// Значение для селектора и query-параметра
    pub fn as_value(&self) -> &str {
        match self {
            CategorySelection::All => ALL_CATEGORIES,
            CategorySelection::Named(name) => name,
        }
    }

    /// Идентификатор категории, если выбрана конкретная
    pub fn name(&self) -> Option<&str> {
        match self {
            CategorySelection::All => None,
            CategorySelection::Named(name) => Some(name),
        }
    }
}

impl From<String> for CategorySelection {
    fn from(value: String) -> Self {
        CategorySelection::from_value(&value)
    }
}

impl From<CategorySelection> for String {
    fn from(value: CategorySelection) -> Self {
        value.as_value().to_string()
    }
}

/// Справочник категорий.
///
/// Загружается один раз и дальше только читается. Содержит только строковые
/// идентификаторы, уникальные по значению, в порядке получения.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDirectory {
    categories: Vec<String>,
}

impl CategoryDirectory {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Собрать справочник из сырого ответа источника.
    ///
    /// Возвращает `None`, если ответ не массив. Нестроковые элементы
    /// (например, объекты `{slug, name, url}`) отбрасываются.
    pub fn from_payload(payload: &Value) -> Option<Self> {
        let items = payload.as_array()?;
        Some(Self::from_names(items.iter().filter_map(|item| match item {
            Value::String(name) => Some(name.clone()),
            _ => None,
        })))
    }

    /// Собрать справочник из готовых идентификаторов, убрав повторы
    pub fn from_names(names: impl IntoIterator<Item = String>) -> Self {
        let mut categories: Vec<String> = Vec::new();
        for name in names {
            if !categories.contains(&name) {
                categories.push(name);
            }
        }
        Self { categories }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Человекочитаемое название категории: "home-decoration" -> "Home Decoration"
pub fn display_name(category: &str) -> String {
    category
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_payload_keeps_strings_only() {
        let payload = json!(["smartphones", 42, {"slug": "beauty"}, null, "laptops"]);
        let directory = CategoryDirectory::from_payload(&payload).unwrap();
        assert_eq!(directory.categories(), &["smartphones", "laptops"]);
    }

    #[test]
    fn test_from_payload_dedupes_in_order() {
        let payload = json!(["laptops", "smartphones", "laptops"]);
        let directory = CategoryDirectory::from_payload(&payload).unwrap();
        assert_eq!(directory.categories(), &["laptops", "smartphones"]);
    }

    #[test]
    fn test_non_array_payload() {
        let payload = json!({"foo": "bar"});
        assert!(CategoryDirectory::from_payload(&payload).is_none());
    }

    #[test]
    fn test_object_entries_only_yield_empty_directory() {
        let payload = json!([{"slug": "beauty", "name": "Beauty"}]);
        let directory = CategoryDirectory::from_payload(&payload).unwrap();
        assert!(directory.is_empty());
    }

    #[test]
    fn test_selection_from_value() {
        assert_eq!(CategorySelection::from_value("all"), CategorySelection::All);
        assert_eq!(CategorySelection::from_value(""), CategorySelection::All);
        assert_eq!(
            CategorySelection::from_value("laptops"),
            CategorySelection::Named("laptops".into())
        );
        assert_eq!(CategorySelection::All.as_value(), "all");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("smartphones"), "Smartphones");
        assert_eq!(display_name("home-decoration"), "Home Decoration");
        assert_eq!(display_name("mens-shirts"), "Mens Shirts");
    }
}
