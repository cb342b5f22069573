//! Location services.
//!
//! A single position fix behind the `LocationProvider` seam. The system
//! implementation goes through the OS location broker on Windows; other
//! desktop platforms currently report the service as unavailable, which
//! flows through the normal logged-and-ignored failure path.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::models::Coordinates;

/// Options for a position fix request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    /// Request the highest accuracy the platform offers.
    pub high_accuracy: bool,
    /// Upper bound on how long a fix may take.
    pub timeout: Duration,
    /// A cached fix younger than this is returned without a new lookup.
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(15),
            maximum_age: Duration::from_secs(10),
        }
    }
}

/// Access to the device location service.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Ask the user for location access.
    ///
    /// Platforms without an explicit consent flow return `true` without
    /// prompting.
    async fn request_permission(&self) -> bool;

    /// Obtain a single position fix honoring the given options.
    async fn current_position(&self, options: &PositionOptions) -> Result<Coordinates>;
}

/// Request permission and, if granted, a position fix.
///
/// A denied permission short-circuits: the provider's fix path is never
/// entered and `Error::PermissionDenied` is returned.
pub async fn acquire_position(
    provider: &dyn LocationProvider,
    options: &PositionOptions,
) -> Result<Coordinates> {
    if !provider.request_permission().await {
        return Err(Error::PermissionDenied);
    }
    provider.current_position(options).await
}

/// Production location provider backed by the OS location service.
#[derive(Debug, Default)]
pub struct SystemLocation {
    last_fix: Mutex<Option<(Coordinates, Instant)>>,
}

impl SystemLocation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn cached_fix(&self, maximum_age: Duration) -> Option<Coordinates> {
        let guard = self.last_fix.lock().ok()?;
        let (coordinates, at) = (*guard)?;
        if at.elapsed() <= maximum_age {
            Some(coordinates)
        } else {
            None
        }
    }

    fn store_fix(&self, coordinates: Coordinates, at: Instant) {
        if let Ok(mut guard) = self.last_fix.lock() {
            *guard = Some((coordinates, at));
        }
    }
}

#[async_trait]
impl LocationProvider for SystemLocation {
    async fn request_permission(&self) -> bool {
        platform::request_permission().await
    }

    async fn current_position(&self, options: &PositionOptions) -> Result<Coordinates> {
        if let Some(coordinates) = self.cached_fix(options.maximum_age) {
            tracing::debug!("Reusing cached position fix");
            return Ok(coordinates);
        }

        let fix = tokio::time::timeout(
            options.timeout,
            platform::position_fix(options.high_accuracy),
        )
        .await
        .map_err(|_| Error::LocationUnavailable("position fix timed out".to_string()))??;

        self.store_fix(fix, Instant::now());
        Ok(fix)
    }
}

#[cfg(windows)]
mod platform {
    use windows::Devices::Geolocation::{GeolocationAccessStatus, Geolocator, PositionAccuracy};

    use crate::error::{Error, Result};
    use crate::models::Coordinates;

    pub async fn request_permission() -> bool {
        let operation = match Geolocator::RequestAccessAsync() {
            Ok(operation) => operation,
            Err(error) => {
                tracing::error!("Failed to request location access: {}", error);
                return false;
            }
        };
        match operation.await {
            Ok(status) => status == GeolocationAccessStatus::Allowed,
            Err(error) => {
                tracing::error!("Location access request failed: {}", error);
                false
            }
        }
    }

    pub async fn position_fix(high_accuracy: bool) -> Result<Coordinates> {
        let unavailable = |error: windows::core::Error| Error::LocationUnavailable(error.to_string());

        let locator = Geolocator::new().map_err(unavailable)?;
        let accuracy = if high_accuracy {
            PositionAccuracy::High
        } else {
            PositionAccuracy::Default
        };
        locator.SetDesiredAccuracy(accuracy).map_err(unavailable)?;

        let position = locator
            .GetGeopositionAsync()
            .map_err(unavailable)?
            .await
            .map_err(unavailable)?;
        let point = position
            .Coordinate()
            .and_then(|coordinate| coordinate.Point())
            .map_err(unavailable)?;
        let basic = point.Position().map_err(unavailable)?;

        Ok(Coordinates {
            latitude: basic.Latitude,
            longitude: basic.Longitude,
        })
    }
}

#[cfg(not(windows))]
mod platform {
    use crate::error::{Error, Result};
    use crate::models::Coordinates;

    // No OS permission broker on these platforms; consent is implicit.
    pub async fn request_permission() -> bool {
        true
    }

    pub async fn position_fix(_high_accuracy: bool) -> Result<Coordinates> {
        Err(Error::LocationUnavailable(
            "no location service available on this platform".to_string(),
        ))
    }
}
