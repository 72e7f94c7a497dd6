use super::Loadout;

/// Accumulates the choices for a [`Loadout`] one call at a time.
///
/// Every setter overwrites its field and returns the builder so calls can be
/// chained. The builder stays usable after [`build`](Self::build); each build
/// is an independent snapshot.
///
/// # Example
///
/// ```
/// use loadout::LoadoutBuilder;
/// let loadout = LoadoutBuilder::new()
///     .set_character("Raiden")
///     .add_item("Coolant")
///     .build();
/// assert_eq!(loadout.character(), "Raiden");
/// assert_eq!(loadout.items(), ["Coolant"]);
/// assert_eq!(loadout.vehicle(), "");
/// ```
#[derive(Clone, Debug, Default)]
pub struct LoadoutBuilder {
    loadout: Loadout,
}

impl LoadoutBuilder {
    pub fn new() -> Self {
        Self {
            loadout: Loadout::default(),
        }
    }

    pub fn set_primary_weapon(&mut self, weapon: impl Into<String>) -> &mut Self {
        self.loadout.primary_weapon = weapon.into();
        self
    }

    pub fn set_secondary_weapon(&mut self, weapon: impl Into<String>) -> &mut Self {
        self.loadout.secondary_weapon = weapon.into();
        self
    }

    pub fn set_support_weapon(&mut self, weapon: impl Into<String>) -> &mut Self {
        self.loadout.support_weapon = weapon.into();
        self
    }

    /// Appends a consumable. May be called any number of times; earlier items
    /// are kept in order.
    pub fn add_item(&mut self, item: impl Into<String>) -> &mut Self {
        self.loadout.items.push(item.into());
        self
    }

    pub fn set_buddy(&mut self, buddy: impl Into<String>) -> &mut Self {
        self.loadout.buddy = buddy.into();
        self
    }

    pub fn set_character(&mut self, character: impl Into<String>) -> &mut Self {
        self.loadout.character = character.into();
        self
    }

    pub fn set_vehicle(&mut self, vehicle: impl Into<String>) -> &mut Self {
        self.loadout.vehicle = vehicle.into();
        self
    }

    pub fn set_mission_time(&mut self, time: impl Into<String>) -> &mut Self {
        self.loadout.mission_time = time.into();
        self
    }

    /// Returns a snapshot of the current choices. Later changes to the
    /// builder do not affect the returned value.
    pub fn build(&self) -> Loadout {
        tracing::trace!(items = self.loadout.items.len(), "building loadout");
        self.loadout.clone()
    }
}
