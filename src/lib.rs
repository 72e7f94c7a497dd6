//! Mission loadouts for a Metal Gear Solid V style deployment screen.
//!
//! A [`Loadout`] is assembled step by step through a [`LoadoutBuilder`] and
//! then frozen with [`LoadoutBuilder::build`].

pub mod loadout;

pub use loadout::{Loadout, LoadoutBuilder};
