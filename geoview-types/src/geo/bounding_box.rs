use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeoviewTypesError;
use crate::geo::location::Location;
use crate::geo::traits::point::GeoPoint;

/// Geographic area bounded by two parallels and two meridians.
///
/// A box crossing the anti-meridian is represented with `east > 180` (or `west < -180`) rather
/// than with `east < west`. [`BoundingBox::with_longitude_offset`] moves such a box by a whole
/// turn when the map center jumps over the anti-meridian.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct BoundingBox {
    south: f64,
    west: f64,
    north: f64,
    east: f64,
}

impl BoundingBox {
    /// Creates a new bounding box.
    pub const fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }

    /// Bounding box with all values set to NaN.
    pub const INVALID: BoundingBox = BoundingBox::new(f64::NAN, f64::NAN, f64::NAN, f64::NAN);

    /// Smallest bounding box that contains all the given locations. Returns `None` for an empty
    /// iterator. Longitudes are used as they are, without wrapping.
    pub fn from_locations<'a>(mut locations: impl Iterator<Item = &'a Location>) -> Option<Self> {
        let first = locations.next()?;
        let mut bbox = Self::new(first.lat(), first.lon(), first.lat(), first.lon());

        for location in std::iter::once(first).chain(locations) {
            if !location.is_valid() {
                return Some(Self::INVALID);
            }

            bbox.south = bbox.south.min(location.lat());
            bbox.north = bbox.north.max(location.lat());
            bbox.west = bbox.west.min(location.lon());
            bbox.east = bbox.east.max(location.lon());
        }

        Some(bbox)
    }

    /// Minimum latitude.
    pub fn south(&self) -> f64 {
        self.south
    }

    /// Minimum longitude.
    pub fn west(&self) -> f64 {
        self.west
    }

    /// Maximum latitude.
    pub fn north(&self) -> f64 {
        self.north
    }

    /// Maximum longitude.
    pub fn east(&self) -> f64 {
        self.east
    }

    /// Extent in degrees of longitude.
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    /// Extent in degrees of latitude.
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// Arithmetic center of the box in degrees.
    pub fn center(&self) -> Location {
        Location::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }

    /// Returns true if all the bounds are finite and the box is not inverted.
    pub fn is_valid(&self) -> bool {
        self.south.is_finite()
            && self.west.is_finite()
            && self.north.is_finite()
            && self.east.is_finite()
            && self.south <= self.north
            && self.west <= self.east
    }

    /// Returns a copy of the box moved by `offset` degrees of longitude.
    pub fn with_longitude_offset(&self, offset: f64) -> Self {
        Self {
            west: self.west + offset,
            east: self.east + offset,
            ..*self
        }
    }

    /// Returns true if the box spans over the anti-meridian.
    pub fn crosses_antimeridian(&self) -> bool {
        self.west < -180.0 || self.east > 180.0
    }
}

/// Parses `"south,west,north,east"`.
impl FromStr for BoundingBox {
    type Err = GeoviewTypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|v| v.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| GeoviewTypesError::InvalidBoundingBox(s.to_string()))?;

        let &[south, west, north, east] = values.as_slice() else {
            return Err(GeoviewTypesError::InvalidBoundingBox(s.to_string()));
        };

        Ok(Self::new(south, west, north, east))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::latlon;

    #[test]
    fn longitude_offset() {
        let bbox = BoundingBox::new(-10.0, 170.0, 10.0, 190.0);
        assert!(bbox.crosses_antimeridian());

        let moved = bbox.with_longitude_offset(-360.0);
        assert_eq!(moved, BoundingBox::new(-10.0, -190.0, 10.0, -170.0));
        assert!(moved.crosses_antimeridian());
        assert_eq!(moved.width(), bbox.width());
        assert_eq!(moved.height(), 20.0);
    }

    #[test]
    fn from_locations() {
        let locations = [latlon!(10.0, 20.0), latlon!(-5.0, 30.0), latlon!(3.0, -4.0)];
        let bbox = BoundingBox::from_locations(locations.iter()).unwrap();
        assert_eq!(bbox, BoundingBox::new(-5.0, -4.0, 10.0, 30.0));
        assert_eq!(bbox.center(), latlon!(2.5, 13.0));
        assert!(bbox.is_valid());

        let locations = [latlon!(10.0, 20.0), Location::INVALID];
        let bbox = BoundingBox::from_locations(locations.iter()).unwrap();
        assert!(!bbox.is_valid());
    }

    #[test]
    fn parse() {
        assert_eq!(
            "47, 5.5, 55, 15".parse::<BoundingBox>(),
            Ok(BoundingBox::new(47.0, 5.5, 55.0, 15.0))
        );
        assert_matches!(
            "47,5.5,55".parse::<BoundingBox>(),
            Err(GeoviewTypesError::InvalidBoundingBox(_))
        );
        assert_matches!(
            "47,5.5,55,east".parse::<BoundingBox>(),
            Err(GeoviewTypesError::InvalidBoundingBox(_))
        );
    }
}
