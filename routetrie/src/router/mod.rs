//! Defines the path template validator, the routing `Tree` and supporting types.

pub mod builder;
pub mod params;
pub mod path;
pub mod tree;
