//! Состояние списка товаров: категория, курсор страниц, накопление,
//! признак "есть ещё", загрузка/ошибка и ключ сортировки.
//!
//! Здесь нет ни сигналов, ни сети: операции возвращают [`FetchTicket`],
//! а результат загрузки применяется через [`ListingSession::on_fetch_resolved`].
//! Каждый билет помечен эпохой; ответ с устаревшей эпохой отбрасывается,
//! поэтому медленный ответ для старой категории не попадает в новую.

use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_category::aggregate::CategorySelection;
use contracts::enums::sort_key::SortKey;
use contracts::shared::api_error::PRODUCTS_FETCH_FAILED;
use contracts::shared::paging::query::{PageRequest, DEFAULT_PAGE_SIZE};

use super::projection;
use crate::domain::a001_product::api::PageResult;
use crate::shared::fetch_error::FetchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingStatus {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Выданный запрос на загрузку страницы
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub epoch: u64,
    pub request: PageRequest,
}

/// Что произошло с результатом загрузки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    Stale,
}

#[derive(Debug, Clone)]
pub struct ListingSession {
    category: CategorySelection,
    page_size: u32,
    // Нумерация с 1
    page_index: u32,
    items: Vec<Product>,
    has_more: bool,
    status: ListingStatus,
    error_message: String,
    sort_key: SortKey,
    epoch: u64,
    view: Vec<Product>,
}

impl Default for ListingSession {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ListingSession {
    pub fn new(page_size: u32) -> Self {
        Self {
            category: CategorySelection::All,
            page_size: page_size.max(1),
            page_index: 1,
            items: Vec::new(),
            has_more: true,
            status: ListingStatus::Idle,
            error_message: String::new(),
            sort_key: SortKey::Default,
            epoch: 0,
            view: Vec::new(),
        }
    }

    /// Первая загрузка после монтирования: страница 1 текущей категории
    pub fn start(&mut self) -> Option<FetchTicket> {
        if self.status != ListingStatus::Idle {
            return None;
        }
        Some(self.issue())
    }

    /// Сменить категорию.
    ///
    /// Сбрасывает курсор и накопление и выдаёт запрос на страницу 1, даже если
    /// предыдущая загрузка ещё не завершилась: её ответ станет устаревшим.
    pub fn select_category(&mut self, category: CategorySelection) -> Option<FetchTicket> {
        if category == self.category && self.status != ListingStatus::Idle {
            return None;
        }
        self.category = category;
        self.page_index = 1;
        self.items.clear();
        self.has_more = true;
        self.recompute_view();
        Some(self.issue())
    }

    /// Загрузить следующую страницу с добавлением к накоплению.
    ///
    /// Ничего не делает во время загрузки, если страниц больше нет,
    /// или если первая страница ещё не запрашивалась. После неудачной
    /// первой страницы запрашивает её повторно.
    pub fn load_more(&mut self) -> Option<FetchTicket> {
        if self.is_loading() || !self.has_more || self.status == ListingStatus::Idle {
            return None;
        }
        if !self.items.is_empty() {
            self.page_index += 1;
        }
        Some(self.issue())
    }

    /// Сменить ключ сортировки. Возвращает `true`, если ключ изменился
    pub fn change_sort(&mut self, key: SortKey) -> bool {
        if key == self.sort_key {
            return false;
        }
        self.sort_key = key;
        self.recompute_view();
        true
    }

    /// Применить результат загрузки, если билет всё ещё актуален
    pub fn on_fetch_resolved(
        &mut self,
        ticket: &FetchTicket,
        result: Result<PageResult, FetchError>,
    ) -> Resolution {
        if !self.is_current(ticket) {
            return Resolution::Stale;
        }

        match result {
            Ok(page) => {
                self.has_more = page.items.len() == self.page_size as usize;
                if ticket.request.page_index == 1 {
                    self.items = page.items;
                } else {
                    self.items.extend(page.items);
                }
                self.status = ListingStatus::Loaded;
                self.recompute_view();
            }
            Err(_) => {
                // Курсор возвращается к последней применённой странице,
                // иначе повторный load_more пропустит упавшую страницу
                self.page_index = ticket.request.page_index.saturating_sub(1).max(1);
                self.error_message = PRODUCTS_FETCH_FAILED.to_string();
                self.status = ListingStatus::Failed;
            }
        }
        Resolution::Applied
    }

    fn issue(&mut self) -> FetchTicket {
        self.epoch += 1;
        self.status = ListingStatus::Loading;
        self.error_message.clear();
        FetchTicket {
            epoch: self.epoch,
            request: PageRequest::new(self.category.clone(), self.page_size, self.page_index),
        }
    }

    fn is_current(&self, ticket: &FetchTicket) -> bool {
        self.status == ListingStatus::Loading
            && ticket.epoch == self.epoch
            && ticket.request.category == self.category
            && ticket.request.page_index == self.page_index
    }

    fn recompute_view(&mut self) {
        self.view = projection::project(&self.items, self.sort_key);
    }

    pub fn category(&self) -> &CategorySelection {
        &self.category
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn page_index(&self) -> u32 {
        self.page_index
    }

    /// Накопленные товары в порядке загрузки
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Товары в порядке отображения
    pub fn projected(&self) -> &[Product] {
        &self.view
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_loading(&self) -> bool {
        self.status == ListingStatus::Loading
    }

    pub fn status(&self) -> ListingStatus {
        self.status
    }

    /// Пустая строка, если ошибки нет
    pub fn error_message(&self) -> &str {
        &self.error_message
    }
}
