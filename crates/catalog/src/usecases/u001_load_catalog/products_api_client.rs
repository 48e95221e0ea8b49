use crate::shared::config::ApiConfig;
use crate::shared::error::FetchError;
use async_trait::async_trait;

/// Источник сырого ответа API каталога
///
/// Store получает реализацию снаружи, поэтому в тестах её можно подменить.
#[async_trait]
pub trait ProductTransport: Send + Sync {
    /// Один GET за списком товаров; возвращает тело ответа как есть
    async fn fetch_raw(&self) -> Result<String, FetchError>;
}

/// HTTP-клиент для API каталога
pub struct HttpProductTransport {
    client: reqwest::Client,
    products_url: String,
}

impl HttpProductTransport {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder().timeout(config.timeout());
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;
        Ok(Self {
            client,
            products_url: config.products_url.clone(),
        })
    }
}

#[async_trait]
impl ProductTransport for HttpProductTransport {
    async fn fetch_raw(&self) -> Result<String, FetchError> {
        tracing::debug!("GET {}", self.products_url);

        let response = self
            .client
            .get(&self.products_url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let preview: String = body.chars().take(200).collect();
            tracing::error!(
                "Products API request failed with status {}: {}",
                status,
                preview
            );
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        tracing::debug!("Products API returned {} bytes", body.len());
        Ok(body)
    }
}
