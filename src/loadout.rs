mod builder;

use std::fmt;

use itertools::Itertools;

pub use builder::LoadoutBuilder;

/// The equipment and deployment options selected for a single mission.
///
/// A `Loadout` is normally produced by [`LoadoutBuilder::build`];
/// `Loadout::default()` gives the same value as building an untouched
/// builder. It cannot be changed afterwards. Fields that were never set are
/// empty strings.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Loadout {
    primary_weapon: String,
    secondary_weapon: String,
    support_weapon: String,
    items: Vec<String>,
    buddy: String,
    character: String,
    vehicle: String,
    mission_time: String,
}

impl Loadout {
    /// Starts an empty builder.
    ///
    /// # Example
    ///
    /// ```
    /// use loadout::Loadout;
    /// let loadout = Loadout::builder().set_buddy("Quiet").build();
    /// assert_eq!(loadout.buddy(), "Quiet");
    /// assert_eq!(loadout.character(), "");
    /// ```
    pub fn builder() -> LoadoutBuilder {
        LoadoutBuilder::new()
    }

    /// The main firearm.
    pub fn primary_weapon(&self) -> &str {
        &self.primary_weapon
    }

    /// The sidearm.
    pub fn secondary_weapon(&self) -> &str {
        &self.secondary_weapon
    }

    /// A special weapon such as a rocket launcher or sniper rifle.
    pub fn support_weapon(&self) -> &str {
        &self.support_weapon
    }

    /// Consumables in the order they were added. Duplicates are kept.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// The companion accompanying the player.
    pub fn buddy(&self) -> &str {
        &self.buddy
    }

    /// The player character.
    pub fn character(&self) -> &str {
        &self.character
    }

    /// Transport used for deployment or support.
    pub fn vehicle(&self) -> &str {
        &self.vehicle
    }

    /// Time of day for the deployment, e.g. `"06:00"`. Not validated.
    pub fn mission_time(&self) -> &str {
        &self.mission_time
    }
}

/// Renders the deployment briefing shown by the `loadout` binary. The support
/// weapon is not part of the briefing.
impl fmt::Display for Loadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MGSV Loadout:")?;
        writeln!(f, "Character: {}", self.character)?;
        writeln!(f, "Primary Weapon: {}", self.primary_weapon)?;
        writeln!(f, "Secondary Weapon: {}", self.secondary_weapon)?;
        writeln!(f, "Items: [{}]", self.items.iter().join(", "))?;
        writeln!(f, "Buddy: {}", self.buddy)?;
        writeln!(f, "Vehicle: {}", self.vehicle)?;
        write!(f, "Mission Time: {}", self.mission_time)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_is_empty() {
        let loadout = Loadout::default();
        assert_eq!(loadout, Loadout::builder().build());
        assert!(loadout.items().is_empty());
    }

    #[test]
    fn display() {
        let loadout = Loadout::builder()
            .set_character("Venom Snake")
            .set_primary_weapon("AM MRS-4")
            .set_secondary_weapon("WU Silent Pistol")
            .set_support_weapon("FB MR R-Launcher")
            .add_item("Magazine")
            .add_item("Water Pistol")
            .set_buddy("D-Dog")
            .set_vehicle("Jeep")
            .set_mission_time("18:00")
            .build();
        assert_eq!(
            loadout.to_string(),
            "MGSV Loadout:\n\
             Character: Venom Snake\n\
             Primary Weapon: AM MRS-4\n\
             Secondary Weapon: WU Silent Pistol\n\
             Items: [Magazine, Water Pistol]\n\
             Buddy: D-Dog\n\
             Vehicle: Jeep\n\
             Mission Time: 18:00"
        );
    }

    #[test]
    fn display_empty() {
        let report = Loadout::default().to_string();
        assert!(report.contains("\nItems: []\n"));
        assert!(report.ends_with("Mission Time: "));
    }
}
