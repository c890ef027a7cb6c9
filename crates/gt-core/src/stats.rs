//! Per-gear readouts for statistics panels

use std::fmt;

use uuid::Uuid;

use crate::gear::Gear;

/// Snapshot of one gear for display
#[derive(Debug, Clone, PartialEq)]
pub struct GearStats {
    /// 1-based position in the scene
    pub number: usize,
    pub id: Uuid,
    pub teeth: u32,
    pub radius: f32,
    pub angle_degrees: f32,
}

impl GearStats {
    pub fn from_gear(number: usize, gear: &Gear) -> Self {
        Self {
            number,
            id: gear.id(),
            teeth: gear.teeth(),
            radius: gear.radius(),
            angle_degrees: gear.rotation_degrees(),
        }
    }

    pub fn title(&self) -> String {
        format!("Gear {}", self.number)
    }
}

impl fmt::Display for GearStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Teeth: {} | Radius: {:.2} | Angle: {:.1}\u{00b0}",
            self.teeth, self.radius, self.angle_degrees
        )
    }
}

/// Snapshot of a whole scene
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneStats {
    /// Scene name, empty when built from bare gears
    pub name: String,
    pub gears: Vec<GearStats>,
}

impl SceneStats {
    pub fn from_gears<'a>(gears: impl IntoIterator<Item = &'a Gear>) -> Self {
        Self {
            name: String::new(),
            gears: gears
                .into_iter()
                .enumerate()
                .map(|(i, gear)| GearStats::from_gear(i + 1, gear))
                .collect(),
        }
    }

    pub fn gear_count(&self) -> usize {
        self.gears.len()
    }
}
