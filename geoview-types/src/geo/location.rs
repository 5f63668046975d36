use std::fmt::{Display, Formatter};
use std::str::FromStr;

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::error::GeoviewTypesError;
use crate::geo::traits::point::{GeoPoint, NewGeoPoint};

/// Geographic position on the map.
///
/// Latitude is nominally in `[-90, 90]` and longitude is unbounded; neither is clamped at
/// construction. Use [`Location::normalize_longitude`] to bring a longitude into `[-180, 180]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct Location {
    lat: f64,
    lon: f64,
}

impl Location {
    /// Location returned by inverse projections for points outside of their domain.
    pub const INVALID: Location = Location {
        lat: f64::NAN,
        lon: f64::NAN,
    };

    /// Creates a new location from latitude and longitude in degrees.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Returns true if both coordinates are finite numbers.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// Returns a copy of the location with a different longitude.
    pub fn with_lon(&self, lon: f64) -> Self {
        Self { lon, ..*self }
    }

    /// Returns a copy of the location with a different latitude.
    pub fn with_lat(&self, lat: f64) -> Self {
        Self { lat, ..*self }
    }

    /// Maps the longitude into the `[-180, 180]` range.
    pub fn normalize_longitude(lon: f64) -> f64 {
        if lon < -180.0 {
            ((lon + 180.0) % 360.0) + 180.0
        } else if lon > 180.0 {
            ((lon - 180.0) % 360.0) - 180.0
        } else {
            lon
        }
    }

    /// Returns a copy of the location with its longitude normalized.
    pub fn normalized(&self) -> Self {
        self.with_lon(Self::normalize_longitude(self.lon))
    }
}

impl GeoPoint for Location {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl NewGeoPoint<f64> for Location {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl AbsDiffEq for Location {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.lat.abs_diff_eq(&other.lat, epsilon) && self.lon.abs_diff_eq(&other.lon, epsilon)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// Parses `"latitude,longitude"`.
impl FromStr for Location {
    type Err = GeoviewTypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || GeoviewTypesError::InvalidLocation(s.to_string());

        let mut parts = s.split(',');
        let (Some(lat), Some(lon), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(err());
        };

        let lat = lat.trim().parse::<f64>().map_err(|_| err())?;
        let lon = lon.trim().parse::<f64>().map_err(|_| err())?;

        Ok(Self::new(lat, lon))
    }
}

/// Creates a new [`Location`] from latitude and longitude values (in degrees).
///
/// ```
/// use geoview_types::geo::GeoPoint;
/// use geoview_types::latlon;
///
/// let point = latlon!(38.0, 52.0);
/// assert_eq!(point.lat(), 38.0);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        <$crate::geo::Location as $crate::geo::NewGeoPoint<f64>>::latlon($lat, $lon)
    };
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn normalize_longitude() {
        assert_eq!(Location::normalize_longitude(0.0), 0.0);
        assert_eq!(Location::normalize_longitude(180.0), 180.0);
        assert_eq!(Location::normalize_longitude(-180.0), -180.0);
        assert_eq!(Location::normalize_longitude(190.0), -170.0);
        assert_eq!(Location::normalize_longitude(-190.0), 170.0);
        assert_eq!(Location::normalize_longitude(540.0), -180.0);
        assert_eq!(Location::normalize_longitude(725.0), 5.0);
        assert_eq!(Location::normalize_longitude(-725.0), -5.0);
    }

    #[test]
    fn validity() {
        assert!(latlon!(10.0, 500.0).is_valid());
        assert!(!Location::INVALID.is_valid());
        assert!(!latlon!(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn component_wise_equality() {
        assert_eq!(latlon!(1.0, 2.0), Location::new(1.0, 2.0));
        assert_ne!(latlon!(1.0, 2.0), latlon!(2.0, 1.0));
        assert_ne!(Location::INVALID, Location::INVALID);
    }

    #[test]
    fn parse() {
        assert_eq!("53.5, 8.2".parse::<Location>(), Ok(latlon!(53.5, 8.2)));
        assert_eq!("-1e1,170".parse::<Location>(), Ok(latlon!(-10.0, 170.0)));
        assert_matches!(
            "53.5".parse::<Location>(),
            Err(GeoviewTypesError::InvalidLocation(_))
        );
        assert_matches!(
            "1,2,3".parse::<Location>(),
            Err(GeoviewTypesError::InvalidLocation(_))
        );
        assert_matches!(
            "north,8".parse::<Location>(),
            Err(GeoviewTypesError::InvalidLocation(_))
        );
    }

    #[test]
    fn display_round_trip() {
        let location = latlon!(-33.5, 151.25);
        assert_eq!(location.to_string(), "-33.5,151.25");
        assert_eq!(location.to_string().parse::<Location>(), Ok(location));
    }
}
