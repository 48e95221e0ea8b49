use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Фильтр по умолчанию: логи каталога, без шума HTTP-клиента
const DEFAULT_FILTER: &str = "info,reqwest=warn,hyper=warn";

/// Инициализация логирования (`RUST_LOG` переопределяет фильтр).
///
/// Повторный вызов ничего не делает.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
