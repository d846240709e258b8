use super::{PluginRecord, ResourceKind};
use crate::config::HttpConfig;
use crate::error::{Result, StoreError};
use reqwest::Client;
use std::future::Future;
use std::pin::Pin;

/// レジストリのデータソース trait
pub trait RegistrySource: Send + Sync {
    /// コレクションを取得（レジストリ上の順序を保つ）
    fn fetch_collection<'a>(
        &'a self,
        kind: ResourceKind,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<PluginRecord>>> + Send + 'a>>;
}

/// HTTP 経由のレジストリクライアント
pub struct HttpRegistry {
    client: Client,
    base_url: String,
}

impl HttpRegistry {
    /// 新しいクライアントを作成
    pub fn new(base_url: impl Into<String>, config: &HttpConfig) -> Self {
        Self {
            client: config.build_client(),
            base_url: base_url.into(),
        }
    }

    /// コレクションの URL: `<base>/<kind>s.json`
    pub fn collection_url(&self, kind: ResourceKind) -> String {
        format!("{}/{}s.json", self.base_url.trim_end_matches('/'), kind.as_str())
    }

    async fn fetch(&self, kind: ResourceKind) -> Result<Vec<PluginRecord>> {
        let url = self.collection_url(kind);
        tracing::info!(%url, "fetching registry collection");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::RegistryApi {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let records: Vec<PluginRecord> = serde_json::from_str(&body)?;
        tracing::info!(count = records.len(), %kind, "registry collection loaded");
        Ok(records)
    }
}

impl RegistrySource for HttpRegistry {
    fn fetch_collection<'a>(
        &'a self,
        kind: ResourceKind,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<PluginRecord>>> + Send + 'a>> {
        Box::pin(self.fetch(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_url() {
        let registry = HttpRegistry::new("https://registry.nonebot.dev/", &HttpConfig::default());
        assert_eq!(
            registry.collection_url(ResourceKind::Plugin),
            "https://registry.nonebot.dev/plugins.json"
        );
        let trimmed = HttpRegistry::new("https://registry.nonebot.dev", &HttpConfig::default());
        assert_eq!(
            trimmed.collection_url(ResourceKind::Plugin),
            "https://registry.nonebot.dev/plugins.json"
        );
    }

    #[tokio::test]
    async fn test_unreachable_registry_is_network_error() {
        let registry = HttpRegistry::new("http://127.0.0.1:1", &HttpConfig::default());
        let err = registry
            .fetch_collection(ResourceKind::Plugin)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Network(_)));
    }
}
