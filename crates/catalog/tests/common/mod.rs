#![allow(dead_code)]

use async_trait::async_trait;
use catalog::{FetchError, ProductTransport};
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::sync::oneshot;

/// Четыре товара из демонстрационного набора
pub const FIXTURE_PAYLOAD: &str = r#"[
  { "id": 1, "title": "Essence Mascara Lash Princess", "description": "Volumizing mascara", "price": 9.99, "category": "beauty", "image": "https://i.dummyjson.com/data/products/1/thumbnail.jpg" },
  { "id": 2, "title": "Samsung Galaxy Watch 4", "description": "Smartwatch with fitness tracking", "price": 199.99, "category": "wearables", "image": "https://i.dummyjson.com/data/products/2/thumbnail.jpg" },
  { "id": 3, "title": "Sony Headphones", "description": "Noise cancelling over-ear headphones", "price": 299.99, "category": "electronics", "image": "https://i.dummyjson.com/data/products/3/thumbnail.jpg" },
  { "id": 4, "title": "Wooden Chair", "description": "Solid wood dining chair", "price": 59.99, "category": "furniture", "image": "https://i.dummyjson.com/data/products/4/thumbnail.jpg" }
]"#;

/// Отдаёт заранее заданные ответы по очереди; последний повторяется
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<String, FetchError>>>,
    calls: Mutex<usize>,
}

impl ScriptedTransport {
    pub fn new(responses: Vec<Result<String, FetchError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl ProductTransport for ScriptedTransport {
    async fn fetch_raw(&self) -> Result<String, FetchError> {
        *self.calls.lock().unwrap() += 1;
        let mut responses = self.responses.lock().unwrap();
        if responses.len() > 1 {
            responses.pop_front().unwrap()
        } else {
            responses
                .front()
                .cloned()
                .unwrap_or_else(|| Err(FetchError::Transport("no scripted response".into())))
        }
    }
}

/// Каждый запрос ждёт ответа из своего канала, тест сам решает,
/// в каком порядке запросы завершаются
pub struct GatedTransport {
    gates: Mutex<VecDeque<oneshot::Receiver<Result<String, FetchError>>>>,
}

impl GatedTransport {
    pub fn new(gates: Vec<oneshot::Receiver<Result<String, FetchError>>>) -> Self {
        Self {
            gates: Mutex::new(gates.into()),
        }
    }
}

#[async_trait]
impl ProductTransport for GatedTransport {
    async fn fetch_raw(&self) -> Result<String, FetchError> {
        let gate = self.gates.lock().unwrap().pop_front();
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(FetchError::Transport("gate dropped".into()))),
            None => Err(FetchError::Transport("no gate left".into())),
        }
    }
}
