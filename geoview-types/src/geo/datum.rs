/// Earth model used by the projections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Datum {
    semimajor: f64,
}

impl Datum {
    /// WGS84 sphere with the equatorial radius of the ellipsoid.
    pub const WGS84: Self = Datum {
        semimajor: 6_378_137.0,
    };

    /// Equatorial radius in meters.
    pub fn semimajor(&self) -> f64 {
        self.semimajor
    }

    /// Length of one degree of arc along the equator in meters. Map coordinates of all the
    /// projections are scaled by this value.
    pub fn units_per_degree(&self) -> f64 {
        self.semimajor * std::f64::consts::PI / 180.0
    }
}

impl Default for Datum {
    fn default() -> Self {
        Self::WGS84
    }
}
