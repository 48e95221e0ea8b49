use contracts::shared::catalog_snapshot::CatalogSnapshot;
use std::sync::{Arc, Mutex, PoisonError};

/// Наблюдатель за изменениями каталога (например, слой отображения)
pub type CatalogObserver = Arc<dyn Fn(&CatalogSnapshot) + Send + Sync>;

/// Список подписчиков store
#[derive(Clone, Default)]
pub(crate) struct Subscribers {
    observers: Arc<Mutex<Vec<CatalogObserver>>>,
}

impl Subscribers {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn subscribe(&self, observer: CatalogObserver) -> Subscription {
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(observer.clone());
        Subscription {
            observer,
            observers: Arc::clone(&self.observers),
        }
    }

    /// Вызывает всех наблюдателей; список копируется, чтобы колбэк мог
    /// подписаться или отписаться сам
    pub(crate) fn notify(&self, snapshot: &CatalogSnapshot) {
        let observers = self
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for observer in observers {
            (observer)(snapshot);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Подписка на store; при удалении наблюдатель отписывается
#[must_use = "dropping a Subscription unsubscribes the observer"]
pub struct Subscription {
    observer: CatalogObserver,
    observers: Arc<Mutex<Vec<CatalogObserver>>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let mut observers = self
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        observers.retain(|item| !Arc::ptr_eq(item, &self.observer));
    }
}
