//! Map boundary: what the explorer hands to whatever draws the map.
//!
//! The map itself knows nothing about jobs. It receives a [`Viewport`] and
//! a list of [`Marker`]s, and reports clicks back as job ids.

use crate::model::{Category, Coordinates, Job, Trip};

/// Zoom level the explorer opens at.
pub const DEFAULT_ZOOM: u8 = 13;

/// Map tiles visible across the viewport's width at any zoom.
const TILES_ACROSS: f64 = 4.0;

/// One pin on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Reported back when the marker is clicked.
    pub job_id: String,
    pub position: Coordinates,
    pub glyph: String,
    pub category: Category,
}

impl Marker {
    pub fn for_job(job: &Job) -> Self {
        Self {
            job_id: job.id.clone(),
            position: job.location,
            glyph: job.icon.clone(),
            category: job.category,
        }
    }
}

/// Markers for the jobs on screen, in list order.
pub fn markers<'a>(jobs: impl IntoIterator<Item = &'a Job>) -> Vec<Marker> {
    jobs.into_iter().map(Marker::for_job).collect()
}

/// The visible window of the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: Coordinates,
    pub zoom: u8,
}

impl Viewport {
    pub fn new(center: Coordinates, zoom: u8) -> Self {
        Self { center, zoom }
    }

    /// Centered on the active trip, at the default zoom.
    pub fn for_trip(trip: &Trip) -> Self {
        Self::new(trip.center, DEFAULT_ZOOM)
    }

    /// Width of the window in degrees of longitude.
    ///
    /// One web-map tile spans `360 / 2^zoom` degrees.
    pub fn span_degrees(&self) -> f64 {
        TILES_ACROSS * 360.0 / f64::from(1_u32 << self.zoom.min(31))
    }

    /// `[min, max]` longitude bounds.
    pub fn lng_bounds(&self) -> [f64; 2] {
        let half = self.span_degrees() / 2.0;
        [self.center.lng - half, self.center.lng + half]
    }

    /// `[min, max]` latitude bounds for a window `aspect` times as tall as
    /// it is wide.
    pub fn lat_bounds(&self, aspect: f64) -> [f64; 2] {
        let half = self.span_degrees() * aspect / 2.0;
        [self.center.lat - half, self.center.lat + half]
    }

    pub fn contains(&self, position: Coordinates, aspect: f64) -> bool {
        let [min_lng, max_lng] = self.lng_bounds();
        let [min_lat, max_lat] = self.lat_bounds(aspect);
        (min_lng..=max_lng).contains(&position.lng) && (min_lat..=max_lat).contains(&position.lat)
    }
}
