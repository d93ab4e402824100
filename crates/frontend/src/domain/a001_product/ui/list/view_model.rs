use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_category::aggregate::{CategoryDirectory, CategorySelection};
use contracts::enums::sort_key::SortKey;
use leptos::prelude::*;

use super::state::{FetchTicket, ListingSession, Resolution};
use crate::domain::a001_product::api;
use crate::domain::a002_category::api as category_api;

/// ViewModel страницы каталога.
///
/// Владеет сессией списка и справочником категорий. Все изменения идут
/// через методы сессии; сигнал лишь уведомляет представление.
#[derive(Clone, Copy)]
pub struct ProductListViewModel {
    pub session: RwSignal<ListingSession>,
    pub categories: RwSignal<CategoryDirectory>,
}

impl ProductListViewModel {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(ListingSession::default()),
            categories: RwSignal::new(CategoryDirectory::empty()),
        }
    }

    /// Начальная загрузка: справочник категорий и первая страница
    pub fn init(&self) {
        let categories = self.categories;
        wasm_bindgen_futures::spawn_local(async move {
            let directory = category_api::load_directory().await;
            log::debug!("Loaded {} categories", directory.len());
            categories.set(directory);
        });

        let ticket = self.session.try_update(|s| s.start()).flatten();
        self.dispatch(ticket);
    }

    pub fn select_category(&self, value: String) {
        let selection = CategorySelection::from_value(&value);
        let ticket = self
            .session
            .try_update(|s| s.select_category(selection))
            .flatten();
        self.dispatch(ticket);
    }

    pub fn change_sort(&self, code: String) {
        let key = SortKey::from_code(&code);
        self.session.update(|s| {
            s.change_sort(key);
        });
    }

    pub fn load_more(&self) {
        let ticket = self.session.try_update(|s| s.load_more()).flatten();
        self.dispatch(ticket);
    }

    fn dispatch(&self, ticket: Option<FetchTicket>) {
        let Some(ticket) = ticket else {
            return;
        };
        let session = self.session;
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_page(&ticket.request).await;
            match &result {
                Ok(page) => log::debug!(
                    "Page {} of '{}': {} items (total {})",
                    ticket.request.page_index,
                    ticket.request.category.as_value(),
                    page.items.len(),
                    page.declared_total
                ),
                Err(e) => log::error!("Failed to fetch products: {}", e),
            }

            let resolution = session
                .try_update(|s| s.on_fetch_resolved(&ticket, result))
                .unwrap_or(Resolution::Stale);
            if resolution == Resolution::Stale {
                log::debug!(
                    "Discarded stale page {} of '{}'",
                    ticket.request.page_index,
                    ticket.request.category.as_value()
                );
            }
        });
    }

    // Производные значения для представления

    pub fn products(&self) -> Vec<Product> {
        self.session.with(|s| s.projected().to_vec())
    }

    pub fn is_loading(&self) -> bool {
        self.session.with(|s| s.is_loading())
    }

    pub fn has_more(&self) -> bool {
        self.session.with(|s| s.has_more())
    }

    pub fn is_empty(&self) -> bool {
        self.session.with(|s| s.items().is_empty())
    }

    pub fn error_message(&self) -> String {
        self.session.with(|s| s.error_message().to_string())
    }

    /// Сообщение об ошибке, которое уведомляет только при смене текста
    pub fn error_memo(&self) -> Memo<String> {
        let vm = *self;
        Memo::new(move |_| vm.error_message())
    }

    pub fn category_value(&self) -> String {
        self.session.with(|s| s.category().as_value().to_string())
    }

    pub fn sort_code(&self) -> String {
        self.session.with(|s| s.sort_key().code().to_string())
    }
}

impl Default for ProductListViewModel {
    fn default() -> Self {
        Self::new()
    }
}
