//! Ordered gear storage with id lookup

use std::collections::HashMap;

use uuid::Uuid;

use crate::gear::Gear;
use crate::propagation::GearTrain;

/// Gears in insertion order, indexed by id
#[derive(Debug, Clone, Default)]
pub struct GearSet {
    gears: Vec<Gear>,
    /// Id to position in `gears` (O(1) lookup)
    index: HashMap<Uuid, usize>,
}

impl GearSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a gear, returns its ID. A gear whose id is already present replaces the old entry.
    pub fn insert(&mut self, gear: Gear) -> Uuid {
        let id = gear.id();
        match self.index.get(&id) {
            Some(&slot) => self.gears[slot] = gear,
            None => {
                self.index.insert(id, self.gears.len());
                self.gears.push(gear);
            }
        }
        id
    }

    /// Get a gear by ID
    pub fn get(&self, id: Uuid) -> Option<&Gear> {
        self.index.get(&id).map(|&slot| &self.gears[slot])
    }

    /// Get a mutable gear by ID
    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut Gear> {
        self.index.get(&id).map(|&slot| &mut self.gears[slot])
    }

    /// Position of a gear in insertion order
    pub fn position_of(&self, id: Uuid) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.index.contains_key(&id)
    }

    /// Gears in insertion order
    pub fn as_slice(&self) -> &[Gear] {
        &self.gears
    }

    pub fn iter(&self) -> impl Iterator<Item = &Gear> {
        self.gears.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Gear> {
        self.gears.iter_mut()
    }

    pub fn ids(&self) -> impl Iterator<Item = Uuid> + '_ {
        self.gears.iter().map(Gear::id)
    }

    pub fn len(&self) -> usize {
        self.gears.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gears.is_empty()
    }

    /// Drop every gear
    pub fn clear(&mut self) {
        self.gears.clear();
        self.index.clear();
    }
}

impl GearTrain for GearSet {
    fn teeth(&self, id: Uuid) -> Option<u32> {
        self.get(id).map(Gear::teeth)
    }

    fn rotate_gear(&mut self, id: Uuid, delta: f32) -> bool {
        match self.get_mut(id) {
            Some(gear) => {
                gear.rotate_by(delta);
                true
            }
            None => false,
        }
    }
}

impl FromIterator<Gear> for GearSet {
    fn from_iter<I: IntoIterator<Item = Gear>>(iter: I) -> Self {
        let mut set = Self::new();
        for gear in iter {
            set.insert(gear);
        }
        set
    }
}
