/// Description of a viewport update passed to [`ViewportListener`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewportChanged {
    /// The map projection was replaced.
    pub projection_changed: bool,
    /// Difference between the new and the previous center longitude in degrees.
    ///
    /// When the center crosses the antimeridian the offset is close to `±360`, and items
    /// positioned by longitude must be shifted by the same amount.
    pub longitude_offset: f64,
}

impl ViewportChanged {
    /// Returns true if the center moved across the antimeridian.
    pub fn crossed_antimeridian(&self) -> bool {
        self.longitude_offset.abs() > 180.0
    }
}

/// Receives notifications about changes of a [`MapViewport`](crate::MapViewport).
pub trait ViewportListener: Send + Sync {
    /// Called after every successful viewport update.
    fn viewport_changed(&self, event: &ViewportChanged);
}

impl<F> ViewportListener for F
where
    F: Fn(&ViewportChanged) + Send + Sync,
{
    fn viewport_changed(&self, event: &ViewportChanged) {
        self(event)
    }
}
