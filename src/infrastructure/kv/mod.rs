use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use tokio::sync::Mutex;

/// File-backed string key-value store, standing in for the browser's local
/// storage: view counts and the one user-preference flag. Keys are
/// independent and each has a single logical writer, so plain
/// read-then-write is enough; there is no expiry and no schema version.
pub struct KvStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl KvStore {
    /// Open the store, loading whatever the file currently holds. A missing
    /// or unreadable file is a valid empty store.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "Discarding unreadable kv store");
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().await.get(key).cloned()
    }

    pub async fn set(&self, key: &str, value: &str) -> io::Result<()> {
        let mut entries = self.entries.lock().await;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries).await
    }

    /// Numeric counter on top of the string store; absent or non-numeric
    /// values count as zero. Returns the new value.
    pub async fn increment(&self, key: &str) -> io::Result<i64> {
        let mut entries = self.entries.lock().await;
        let current: i64 = entries
            .get(key)
            .and_then(|value| value.parse().ok())
            .unwrap_or(0);
        let next = current + 1;
        entries.insert(key.to_string(), next.to_string());
        self.persist(&entries).await?;
        Ok(next)
    }

    async fn persist(&self, entries: &HashMap<String, String>) -> io::Result<()> {
        let serialized = serde_json::to_string_pretty(entries).map_err(io::Error::other)?;
        tokio::fs::write(&self.path, serialized).await
    }
}
