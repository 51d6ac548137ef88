use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// On-device key/value persistence. Values are whole serialized blobs;
/// there is no partial update.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn get_item(&self, key: &str) -> Result<Option<String>>;
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// Process-local storage, for tests and embedders that persist elsewhere.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items.write().await.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_storage_overwrites_whole_value() {
        let s = MemoryStorage::new();
        assert!(s.get_item("k").await.unwrap().is_none());
        s.set_item("k", "one").await.unwrap();
        s.set_item("k", "two").await.unwrap();
        assert_eq!(s.get_item("k").await.unwrap().as_deref(), Some("two"));
        assert!(s.get_item("other").await.unwrap().is_none());
    }
}
