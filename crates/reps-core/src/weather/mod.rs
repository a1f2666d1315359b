//! Current-weather lookup with a one-hour cache.
//!
//! Any failure along the way (no location, network error, bad response)
//! yields "no weather" rather than an error; callers fall back to text that
//! does not mention the weather.

pub mod cache;
pub mod client;
pub mod condition;

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use cache::{WeatherService, CACHE_DURATION};
pub use client::WeatherClient;
pub use condition::WeatherCondition;

/// Current temperature (Fahrenheit) and sky condition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    pub temperature: f64,
    pub condition: WeatherCondition,
}

/// A point on the globe, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Something that can report current conditions for a location.
pub trait WeatherSource {
    fn fetch(&self, coords: Coordinates) -> impl Future<Output = Result<Weather>> + Send;
}

/// Device location access. `None` means permission was denied or no fix
/// is available.
pub trait LocationProvider {
    fn locate(&self) -> Option<Coordinates>;
}

/// Location taken from configuration rather than a sensor.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLocation(pub Option<Coordinates>);

impl LocationProvider for FixedLocation {
    fn locate(&self) -> Option<Coordinates> {
        self.0
    }
}
