//! Named regions, and picking the one that a point selects.
//!
//! A map screen typically has one path per region (a country, a room, a puzzle piece)
//! and needs to decide which of them a tap lands on.  Taps are imprecise, so a tap
//! that lands slightly outside every region still selects the nearest one, as long as
//! it is within a tolerance.
//!
//! Region maps can be loaded from JSON objects that map region ids to path data:
//!
//! ```json
//! {
//!   "lake": "M10,10 L20,10 L20,20 L10,20 Z",
//!   "forest": "M30,10 h10 v10 h-10 z"
//! }
//! ```

use serde::Deserialize;

use std::collections::BTreeMap;
use std::fs;

use crate::error::LoadingError;
use crate::geometry::Point;
use crate::hit_test::{HitTestOptions, HitTestResult};
use crate::path_builder::Path;
use crate::session::Session;
use crate::svghit_log;

#[derive(Deserialize)]
struct RegionData(BTreeMap<String, String>);

#[derive(Debug, Clone)]
struct Region {
    data: String,
    path: Path,
}

/// A set of regions keyed by id, kept in id order.
#[derive(Debug, Clone)]
pub struct RegionMap {
    session: Session,
    options: HitTestOptions,
    regions: BTreeMap<String, Region>,
}

/// The region selected by a point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RegionHit<'a> {
    pub id: &'a str,
    pub result: HitTestResult,
}

impl RegionMap {
    /// Creates an empty region map with default options.
    pub fn new() -> RegionMap {
        RegionMap::with_options(Session::new(), HitTestOptions::default())
    }

    pub fn with_options(session: Session, options: HitTestOptions) -> RegionMap {
        RegionMap {
            session,
            options,
            regions: BTreeMap::new(),
        }
    }

    /// Parses a JSON object that maps region ids to path data.
    pub fn from_json(
        json: &str,
        session: Session,
        options: HitTestOptions,
    ) -> Result<RegionMap, LoadingError> {
        let RegionData(regions) = serde_json::from_str(json)?;

        let mut map = RegionMap::with_options(session, options);
        for (id, data) in regions {
            map.insert(id, data);
        }

        Ok(map)
    }

    /// Reads a JSON region map from a file.
    pub fn from_file<P: AsRef<std::path::Path>>(
        path: P,
        session: Session,
        options: HitTestOptions,
    ) -> Result<RegionMap, LoadingError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| LoadingError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        svghit_log!(session, "loading region map from {:?}", path);

        RegionMap::from_json(&contents, session, options)
    }

    /// Adds a region, replacing any region with the same id.
    pub fn insert(&mut self, id: impl Into<String>, data: impl Into<String>) {
        let id = id.into();
        let data = data.into();
        let path = Path::parse_with_curves(&data, self.options.curves);

        svghit_log!(
            self.session,
            "region {:?}: {} commands, {} not traced",
            id,
            path.len(),
            path.num_untraced()
        );

        self.regions.insert(id, Region { data, path });
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Returns the path data of a region, as it was inserted.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.regions.get(id).map(|region| region.data.as_str())
    }

    /// Returns the region ids in order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    /// Tests a point against every region, in id order.
    pub fn hit_all(&self, point: Point) -> Vec<(&str, HitTestResult)> {
        self.regions
            .iter()
            .map(|(id, region)| (id.as_str(), region.path.hit_test(point)))
            .collect()
    }

    /// Picks the region that `point` selects.
    ///
    /// If the point is inside one or more regions, the first of them in id order is
    /// selected.  Otherwise, the region with the smallest finite distance to the point
    /// is selected if that distance is at most `tolerance`; ties go to the first region
    /// in id order.  Regions that draw nothing are never selected, even with an
    /// infinite tolerance.  Returns `None` if no region qualifies.
    pub fn hit(&self, point: Point, tolerance: f64) -> Option<RegionHit<'_>> {
        let mut nearest: Option<RegionHit<'_>> = None;

        for (id, result) in self.hit_all(point) {
            if result.inside {
                svghit_log!(self.session, "({}, {}) is inside {:?}", point.x, point.y, id);
                return Some(RegionHit { id, result });
            }

            let closer = match nearest {
                None => true,
                Some(ref best) => result.distance < best.result.distance,
            };

            if result.distance.is_finite() && result.distance <= tolerance && closer {
                nearest = Some(RegionHit { id, result });
            }
        }

        match nearest {
            Some(ref hit) => svghit_log!(
                self.session,
                "({}, {}) is {} away from {:?}",
                point.x,
                point.y,
                hit.result.distance,
                hit.id
            ),
            None => svghit_log!(
                self.session,
                "({}, {}) selects no region within {}",
                point.x,
                point.y,
                tolerance
            ),
        }

        nearest
    }
}

impl Default for RegionMap {
    fn default() -> RegionMap {
        RegionMap::new()
    }
}
