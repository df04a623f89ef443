//! Spatial acceleration structures.
//!
//! - [`Bvh`] - a bounding volume hierarchy over bounded objects
//! - [`SpatialIndex`] - the box-query capability the matcher depends on
//! - [`ClusterIndex`] - a [`Bvh`]-backed index over a cluster snapshot

mod bvh;
mod index;

pub use bvh::{Bounded, Bvh, BvhNode};
pub use index::{ClusterIndex, SpatialIndex};
