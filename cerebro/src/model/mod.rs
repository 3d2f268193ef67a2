//! Values derived from API data on every frame. Nothing here talks to the network.

pub mod budget;
pub mod commitments;
pub mod icons;
pub mod stats;
