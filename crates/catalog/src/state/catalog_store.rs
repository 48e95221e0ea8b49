use super::subscribers::{CatalogObserver, Subscribers, Subscription};
use crate::domain::a001_product::{available_categories, visible_list};
use crate::domain::a002_wishlist::Wishlist;
use crate::shared::config::CatalogConfig;
use crate::shared::error::{CatalogError, FetchError};
use crate::usecases::u001_load_catalog::{parse_products, HttpProductTransport, ProductTransport};
use contracts::domain::a001_product::{Product, ProductId};
use contracts::enums::load_status::LoadStatus;
use contracts::enums::sort_selection::SortSelection;
use contracts::shared::catalog_snapshot::CatalogSnapshot;
use contracts::shared::category_filter::CategoryFilter;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

struct CatalogState {
    products: Vec<Product>,
    status: LoadStatus,
    category_filter: CategoryFilter,
    sort_selection: SortSelection,
    wishlist: Wishlist,
    last_error: Option<FetchError>,
    /// Номер последнего выданного запроса; ответы на более старые отбрасываются
    latest_request: u64,
}

impl CatalogState {
    fn new() -> Self {
        Self {
            products: Vec::new(),
            status: LoadStatus::Loading,
            category_filter: CategoryFilter::All,
            sort_selection: SortSelection::None,
            wishlist: Wishlist::new(),
            last_error: None,
            latest_request: 0,
        }
    }

    fn snapshot(&self) -> CatalogSnapshot {
        let visible_products = if self.status.is_displayable() {
            visible_list(&self.products, &self.category_filter, self.sort_selection)
        } else {
            Vec::new()
        };
        CatalogSnapshot {
            status: self.status,
            visible_products,
            categories: available_categories(&self.products),
            category_filter: self.category_filter.clone(),
            sort_selection: self.sort_selection,
            wishlist_ids: self.wishlist.ids(),
        }
    }
}

/// Store каталога: коллекция товаров, статус загрузки, фильтр, сортировка
/// и вишлист.
///
/// Все синхронные операции атомарны относительно друг друга. `load()` не
/// держит блокировку во время запроса, так что фильтр, сортировка и вишлист
/// продолжают работать с последней загруженной коллекцией.
pub struct CatalogStore {
    state: RwLock<CatalogState>,
    transport: Arc<dyn ProductTransport>,
    subscribers: Subscribers,
}

impl CatalogStore {
    pub fn new(transport: Arc<dyn ProductTransport>) -> Self {
        Self {
            state: RwLock::new(CatalogState::new()),
            transport,
            subscribers: Subscribers::new(),
        }
    }

    /// Store с HTTP-транспортом из конфигурации
    pub fn from_config(config: &CatalogConfig) -> Result<Self, FetchError> {
        let transport = HttpProductTransport::new(&config.api)?;
        Ok(Self::new(Arc::new(transport)))
    }

    fn read(&self) -> RwLockReadGuard<'_, CatalogState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CatalogState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Снимок берётся под той же блокировкой, что и изменение, а
    /// наблюдатели вызываются уже после её освобождения. При изменениях из
    /// разных потоков снимки могут дойти до наблюдателей не по порядку.
    fn publish(&self, state: RwLockWriteGuard<'_, CatalogState>) {
        let snapshot = state.snapshot();
        drop(state);
        self.subscribers.notify(&snapshot);
    }

    // ------------------------------------------------------------------
    // Загрузка
    // ------------------------------------------------------------------

    /// Загрузить каталог. Ошибка не пробрасывается: статус становится
    /// `Failed`, коллекция остаётся прежней.
    pub async fn load(&self) -> LoadStatus {
        match self.try_load().await {
            Ok(status) => status,
            Err(_) => LoadStatus::Failed,
        }
    }

    /// То же, что `load()`; предлагается пользователю в статусе `Failed`
    pub async fn retry(&self) -> LoadStatus {
        tracing::info!("Retrying catalog load");
        self.load().await
    }

    /// Загрузка с возвратом ошибки вызывающему.
    ///
    /// Ответ, пришедший после более нового запроса, отбрасывается; тогда
    /// возвращается текущий статус.
    pub async fn try_load(&self) -> Result<LoadStatus, CatalogError> {
        let request_id = {
            let mut state = self.write();
            state.latest_request += 1;
            state.status = LoadStatus::Loading;
            let request_id = state.latest_request;
            tracing::info!(request_id, "Loading catalog");
            self.publish(state);
            request_id
        };

        let result = match self.transport.fetch_raw().await {
            Ok(body) => parse_products(&body),
            Err(e) => Err(e),
        };

        let mut state = self.write();
        if request_id != state.latest_request {
            tracing::warn!(
                request_id,
                latest_request = state.latest_request,
                "Discarding response of a superseded catalog request"
            );
            return Ok(state.status);
        }

        let outcome = match result {
            Ok(products) => {
                tracing::info!(request_id, count = products.len(), "Catalog loaded");
                state.products = products;
                state.status = LoadStatus::Loaded;
                state.last_error = None;

                if let CategoryFilter::Category(selected) = &state.category_filter {
                    if !state.products.iter().any(|p| &p.category == selected) {
                        tracing::warn!(
                            category = %selected,
                            "Selected category is absent from the new collection"
                        );
                    }
                }
                Ok(LoadStatus::Loaded)
            }
            Err(e) => {
                tracing::error!(request_id, "Failed to load catalog: {}", e);
                state.status = LoadStatus::Failed;
                state.last_error = Some(e.clone());
                Err(CatalogError::Fetch(e))
            }
        };

        self.publish(state);
        outcome
    }

    // ------------------------------------------------------------------
    // Намерения пользователя
    // ------------------------------------------------------------------

    /// Установить фильтр без проверки; "All" снимает фильтр
    pub fn set_category_filter(&self, category: impl Into<String>) {
        let filter = CategoryFilter::from_label(category);
        tracing::debug!(category = %filter, "Category filter changed");
        let mut state = self.write();
        state.category_filter = filter;
        self.publish(state);
    }

    pub fn set_sort_selection(&self, selection: SortSelection) {
        tracing::debug!(sort = %selection, "Sort selection changed");
        let mut state = self.write();
        state.sort_selection = selection;
        self.publish(state);
    }

    /// Установить сортировку по коду; неизвестный код отклоняется,
    /// состояние не меняется
    pub fn set_sort_selection_code(&self, code: &str) -> Result<(), CatalogError> {
        let selection = SortSelection::from_code(code).ok_or_else(|| {
            tracing::warn!(code, "Rejected unknown sort selection");
            CatalogError::UnknownSortSelection(code.to_string())
        })?;
        self.set_sort_selection(selection);
        Ok(())
    }

    /// Переключить товар в вишлисте. Возвращает, находится ли товар в
    /// вишлисте после вызова. Id, которого нет в коллекции, добавить нельзя.
    pub fn toggle_wishlist(&self, id: ProductId) -> bool {
        let mut state = self.write();
        let in_wishlist = if state.wishlist.remove(id) {
            false
        } else {
            let product = match state.products.iter().find(|p| p.id == id) {
                Some(p) => p.clone(),
                None => {
                    tracing::debug!(product_id = %id, "Toggle ignored: product not in catalog");
                    return false;
                }
            };
            state.wishlist.toggle(&product)
        };
        tracing::debug!(product_id = %id, in_wishlist, "Wishlist toggled");
        self.publish(state);
        in_wishlist
    }

    // ------------------------------------------------------------------
    // Чтение состояния
    // ------------------------------------------------------------------

    pub fn status(&self) -> LoadStatus {
        self.read().status
    }

    /// Ошибка последней загрузки, если она завершилась неудачей
    pub fn last_error(&self) -> Option<FetchError> {
        self.read().last_error.clone()
    }

    /// Текущая коллекция, даже если статус не `Loaded`
    pub fn products(&self) -> Vec<Product> {
        self.read().products.clone()
    }

    pub fn category_filter(&self) -> CategoryFilter {
        self.read().category_filter.clone()
    }

    pub fn sort_selection(&self) -> SortSelection {
        self.read().sort_selection
    }

    pub fn available_categories(&self) -> Vec<String> {
        available_categories(&self.read().products)
    }

    /// Отфильтрованная и отсортированная копия коллекции
    pub fn visible_list(&self) -> Vec<Product> {
        let state = self.read();
        visible_list(&state.products, &state.category_filter, state.sort_selection)
    }

    pub fn is_in_wishlist(&self, id: ProductId) -> bool {
        self.read().wishlist.contains(id)
    }

    pub fn wishlist(&self) -> Vec<Product> {
        self.read().wishlist.items().to_vec()
    }

    pub fn wishlist_len(&self) -> usize {
        self.read().wishlist.len()
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        self.read().snapshot()
    }

    // ------------------------------------------------------------------
    // Подписки
    // ------------------------------------------------------------------

    /// Подписаться на изменения; наблюдатель вызывается вне блокировки
    pub fn subscribe(&self, observer: CatalogObserver) -> Subscription {
        self.subscribers.subscribe(observer)
    }

    pub fn observer_count(&self) -> usize {
        self.subscribers.len()
    }
}
