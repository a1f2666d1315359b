//! Cached weather lookup.
//!
//! Two states: fresh (an entry written less than an hour ago) and
//! stale/absent. Only a successful fetch moves stale to fresh; the entry is
//! overwritten on every successful fetch and never invalidated otherwise.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::{keys, Adapter};
use crate::weather::{LocationProvider, Weather, WeatherCondition, WeatherSource};

/// How long a fetched reading is served from cache.
pub const CACHE_DURATION: Duration = Duration::hours(1);

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CachedReading {
    temperature: f64,
    condition: WeatherCondition,
    /// Unix millis of the fetch
    timestamp: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheEntry {
    data: CachedReading,
    /// Unix millis the entry was written
    timestamp: i64,
}

/// Weather lookup backed by the key/value store.
pub struct WeatherService<S, L> {
    adapter: Adapter,
    source: S,
    location: L,
}

impl<S: WeatherSource, L: LocationProvider> WeatherService<S, L> {
    pub fn new(adapter: Adapter, source: S, location: L) -> Self {
        Self {
            adapter,
            source,
            location,
        }
    }

    /// Current weather, or `None` if it cannot be determined right now.
    pub async fn current_weather(&self) -> Option<Weather> {
        self.current_weather_at(Utc::now()).await
    }

    /// Same as [`current_weather`](Self::current_weather) with an explicit clock.
    pub async fn current_weather_at(&self, now: DateTime<Utc>) -> Option<Weather> {
        if let Some(weather) = self.cached_at(now) {
            tracing::debug!("Serving cached weather");
            return Some(weather);
        }

        let Some(coords) = self.location.locate() else {
            tracing::debug!("No location available, skipping weather lookup");
            return None;
        };

        match self.source.fetch(coords).await {
            Ok(weather) => {
                self.store(&weather, now);
                Some(weather)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Weather lookup failed");
                None
            }
        }
    }

    /// The cached reading if it is still fresh at `now`.
    pub fn cached_at(&self, now: DateTime<Utc>) -> Option<Weather> {
        let entry: CacheEntry = self.adapter.read_record(keys::WEATHER_CACHE)?;
        let age_millis = now.timestamp_millis() - entry.timestamp;
        if age_millis >= CACHE_DURATION.num_milliseconds() {
            return None;
        }
        Some(Weather {
            temperature: entry.data.temperature,
            condition: entry.data.condition,
        })
    }

    fn store(&self, weather: &Weather, now: DateTime<Utc>) {
        let stamp = now.timestamp_millis();
        let entry = CacheEntry {
            data: CachedReading {
                temperature: weather.temperature,
                condition: weather.condition,
                timestamp: stamp,
            },
            timestamp: stamp,
        };
        if let Err(err) = self.adapter.write_record(keys::WEATHER_CACHE, &entry) {
            tracing::warn!(error = %err, "Failed to cache weather");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{RepsError, Result};
    use crate::storage::{KeyValueStore, MemoryStore};
    use crate::weather::{Coordinates, FixedLocation};
    use std::future::Future;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingSource {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingSource {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl WeatherSource for CountingSource {
        fn fetch(&self, _coords: Coordinates) -> impl Future<Output = Result<Weather>> + Send {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            let fail = self.fail;
            async move {
                if fail {
                    return Err(RepsError::Weather("offline".to_string()));
                }
                Ok(Weather {
                    temperature: 60.0 + n as f64,
                    condition: WeatherCondition::Cloudy,
                })
            }
        }
    }

    const HERE: Coordinates = Coordinates {
        latitude: 37.42,
        longitude: -122.16,
    };

    fn service(
        fail: bool,
        location: Option<Coordinates>,
    ) -> (Arc<MemoryStore>, WeatherService<CountingSource, FixedLocation>) {
        let store = Arc::new(MemoryStore::new());
        let service = WeatherService::new(
            Adapter::new(store.clone()),
            CountingSource::new(fail),
            FixedLocation(location),
        );
        (store, service)
    }

    fn at(minutes: i64) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-01-15T08:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
            + Duration::minutes(minutes)
    }

    #[tokio::test]
    async fn test_cache_fresh_for_one_hour() {
        let (_, service) = service(false, Some(HERE));

        let first = service.current_weather_at(at(0)).await.unwrap();
        assert_eq!(first.temperature, 60.0);
        assert_eq!(service.source.calls(), 1);

        let cached = service.current_weather_at(at(59)).await.unwrap();
        assert_eq!(cached, first);
        assert_eq!(service.source.calls(), 1);

        let refreshed = service.current_weather_at(at(61)).await.unwrap();
        assert_eq!(refreshed.temperature, 61.0);
        assert_eq!(service.source.calls(), 2);
    }

    #[tokio::test]
    async fn test_no_location_means_no_weather_and_no_fetch() {
        let (store, service) = service(false, None);
        assert!(service.current_weather_at(at(0)).await.is_none());
        assert_eq!(service.source.calls(), 0);
        assert!(store.get(keys::WEATHER_CACHE).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_cache_untouched() {
        let (store, service) = service(true, Some(HERE));
        assert!(service.current_weather_at(at(0)).await.is_none());
        assert!(service.current_weather_at(at(1)).await.is_none());
        assert_eq!(service.source.calls(), 2);
        assert!(store.get(keys::WEATHER_CACHE).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_legacy_cache_entry_is_honored() {
        let (store, service) = service(false, Some(HERE));
        let stamp = at(0).timestamp_millis();
        let legacy = format!(
            r#"{{"data":{{"temperature":41.5,"condition":"Snow","timestamp":{stamp}}},"timestamp":{stamp}}}"#
        );
        store.set(keys::WEATHER_CACHE, &legacy).unwrap();

        let weather = service.current_weather_at(at(30)).await.unwrap();
        assert_eq!(weather.condition, WeatherCondition::Snow);
        assert_eq!(service.source.calls(), 0);
    }

    #[tokio::test]
    async fn test_corrupt_cache_treated_as_absent() {
        let (store, service) = service(false, Some(HERE));
        store.set(keys::WEATHER_CACHE, "garbage").unwrap();

        assert!(service.current_weather_at(at(0)).await.is_some());
        assert_eq!(service.source.calls(), 1);
    }
}
