//! Resource markers placed on the game world map.
//!
//! Coordinates fall inside the playable map boundary; groups and tiers
//! mirror the resource catalogue used by the map's filters.

use marker_route::geo::Point;
use marker_route::traits::Stop;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Lumber,
    Mining,
    Herbalism,
    Hunting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    T1,
    T2,
    T3,
}

/// A placed resource marker.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceMarker {
    pub name: &'static str,
    pub group: Group,
    pub tier: Tier,
    pub lat: f64,
    pub lng: f64,
}

impl ResourceMarker {
    pub const fn new(name: &'static str, group: Group, tier: Tier, lat: f64, lng: f64) -> Self {
        Self {
            name,
            group,
            tier,
            lat,
            lng,
        }
    }
}

impl Stop for ResourceMarker {
    fn position(&self) -> Point {
        Point::new(self.lat, self.lng)
    }
}

pub const MARKERS: &[ResourceMarker] = &[
    ResourceMarker::new("Plumeria Wood", Group::Lumber, Tier::T1, 12.4821, -101.3377),
    ResourceMarker::new("Weeping Willow", Group::Lumber, Tier::T2, 14.0903, -99.8712),
    ResourceMarker::new("Dragon Tree", Group::Lumber, Tier::T2, 10.7315, -103.0468),
    ResourceMarker::new("Braidwood", Group::Lumber, Tier::T3, 18.2264, -96.5120),
    ResourceMarker::new("Slate", Group::Mining, Tier::T2, 11.9057, -98.2231),
    ResourceMarker::new("Lumadon", Group::Mining, Tier::T2, 13.3310, -97.0049),
    ResourceMarker::new("Rividium", Group::Mining, Tier::T3, 16.8846, -102.6658),
    ResourceMarker::new("Wyrdstone", Group::Mining, Tier::T3, 9.4412, -100.1893),
    ResourceMarker::new("Elephant Ear", Group::Herbalism, Tier::T1, 12.9954, -100.6120),
    ResourceMarker::new("Moonbell", Group::Herbalism, Tier::T2, 15.6021, -98.9940),
    ResourceMarker::new("Salvewort", Group::Herbalism, Tier::T2, 11.2076, -95.8834),
    ResourceMarker::new("Furnace Moss", Group::Herbalism, Tier::T3, 17.4419, -100.0027),
    ResourceMarker::new("Wolf", Group::Hunting, Tier::T1, 13.7750, -102.1209),
    ResourceMarker::new("Raptor", Group::Hunting, Tier::T2, 10.1183, -97.4475),
    ResourceMarker::new("Gryphon", Group::Hunting, Tier::T3, 19.0402, -99.2316),
    ResourceMarker::new("Basilisk", Group::Hunting, Tier::T3, 8.6630, -102.9981),
];

pub fn markers_in(group: Group) -> Vec<ResourceMarker> {
    MARKERS.iter().filter(|m| m.group == group).cloned().collect()
}
