use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tokio::sync::Mutex;

use ridelane_core::{BookingError, BookingResult};

/// Single-file JSON key-value store, the engine's stand-in for browser
/// local storage. The whole store is one JSON object; well-known keys are
/// `user` and `userBookings`.
///
/// All writes go through `update`, which holds the store lock across the
/// read-modify-write so concurrent handlers cannot lose an append.
pub struct LocalStore {
    path: PathBuf,
    lock: Mutex<()>,
}

pub const USER_KEY: &str = "user";
pub const BOOKINGS_KEY: &str = "userBookings";

impl LocalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    async fn read_all(&self) -> BookingResult<Map<String, Value>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice::<Value>(&bytes)
                .map_err(|e| BookingError::StorageUnavailable(e.to_string()))?
                .as_object()
                .cloned()
                .ok_or_else(|| {
                    BookingError::StorageUnavailable("store root is not an object".to_string())
                }),
            // A store that does not exist yet is simply empty.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(BookingError::StorageUnavailable(e.to_string())),
        }
    }

    async fn write_all(&self, map: &Map<String, Value>) -> BookingResult<()> {
        let bytes = serde_json::to_vec_pretty(&Value::Object(map.clone()))
            .map_err(|e| BookingError::StorageUnavailable(e.to_string()))?;
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| BookingError::StorageUnavailable(e.to_string()))
    }

    /// Read one key, deserialized. `Ok(None)` when the key is absent.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> BookingResult<Option<T>> {
        let _guard = self.lock.lock().await;
        let map = self.read_all().await?;
        match map.get(key) {
            None => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| BookingError::StorageUnavailable(e.to_string())),
        }
    }

    /// Replace one key wholesale.
    pub async fn set<T: Serialize>(&self, key: &str, value: &T) -> BookingResult<()> {
        let encoded = serde_json::to_value(value)
            .map_err(|e| BookingError::StorageUnavailable(e.to_string()))?;
        let _guard = self.lock.lock().await;
        let mut map = self.read_all().await?;
        map.insert(key.to_string(), encoded);
        self.write_all(&map).await
    }

    /// Atomic read-modify-write of one key. The closure receives the current
    /// value (or `Value::Null` when absent) and returns the replacement.
    pub async fn update<F>(&self, key: &str, mutate: F) -> BookingResult<()>
    where
        F: FnOnce(Value) -> BookingResult<Value>,
    {
        let _guard = self.lock.lock().await;
        let mut map = self.read_all().await?;
        let current = map.get(key).cloned().unwrap_or(Value::Null);
        let next = mutate(current)?;
        map.insert(key.to_string(), next);
        self.write_all(&map).await
    }

    /// Append one element to an array-valued key, creating the array if the
    /// key is absent. Never overwrites existing elements.
    pub async fn push<T: Serialize>(&self, key: &str, value: &T) -> BookingResult<()> {
        let encoded = serde_json::to_value(value)
            .map_err(|e| BookingError::StorageUnavailable(e.to_string()))?;
        self.update(key, move |current| {
            let mut items = match current {
                Value::Null => Vec::new(),
                Value::Array(items) => items,
                other => {
                    return Err(BookingError::StorageUnavailable(format!(
                        "expected array under key, found {other}"
                    )))
                }
            };
            items.push(encoded);
            Ok(Value::Array(items))
        })
        .await
    }
}
