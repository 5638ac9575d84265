//! `ix-map` — the map/lane collaborator interface.
//!
//! Road-network construction is out of scope for this framework: the
//! surrounding application builds whatever layout it likes and exposes it
//! through the narrow contracts here.  The decision core only ever asks a
//! lane for its speed limit, its length, a distance-along projection, and a
//! point at a normalized distance — and asks the map for its lanes, its
//! spawn points, and the rectangle beyond which vehicles are retired.
//!
//! | Module    | Contents                                     |
//! |-----------|----------------------------------------------|
//! | [`lane`]  | `Lane` trait, `StraightLane`                 |
//! | [`map`]   | `RoadMap` — lanes + spawn points + area      |
//! | [`spawn`] | `SpawnPoint`, `SpawnSpec`                    |
//! | [`error`] | `MapError`, `MapResult`                      |

pub mod error;
pub mod lane;
pub mod map;
pub mod spawn;


pub use error::{MapError, MapResult};
pub use lane::{Lane, StraightLane};
pub use map::RoadMap;
pub use spawn::{SpawnPoint, SpawnSpec};
