use crate::domain::objects::{BodyDesc, ObjectKind};
use crate::systems::physics::{BodyHandle, PhysicsBackend};

use super::visual::VisualObject;

/// Stable index of a registry entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u32);

impl ObjectId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }
}

/// A visual paired with its physics body
#[derive(Clone, Debug)]
pub struct RegistryEntry {
    pub kind: ObjectKind,
    pub visual: VisualObject,
    pub body: BodyHandle,
    pub mass: f32,
}

impl RegistryEntry {
    #[inline]
    pub fn is_dynamic(&self) -> bool {
        self.mass > 0.0
    }
}

/// Owns every (visual, body) pair of the level
pub struct BodyRegistry {
    entries: Vec<RegistryEntry>,
    /// Dynamic objects in creation order; the only ones synced each frame
    tracked: Vec<ObjectId>,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            tracked: Vec::new(),
        }
    }

    /// Create the physics body for `visual` and register the pair.
    ///
    /// The visual starts at the descriptor's pose. Bodies with mass > 0 are
    /// appended to the tracked collection. Returns the new id and the
    /// backend's handle for the body.
    pub fn create_body<P: PhysicsBackend>(
        &mut self,
        physics: &mut P,
        kind: ObjectKind,
        mut visual: VisualObject,
        desc: &BodyDesc,
    ) -> (ObjectId, BodyHandle) {
        let body = physics.add_body(desc);
        visual.pose = desc.pose();

        let id = ObjectId(self.entries.len() as u32);
        self.entries.push(RegistryEntry {
            kind,
            visual,
            body,
            mass: desc.mass,
        });
        if desc.is_dynamic() {
            self.tracked.push(id);
        }
        (id, body)
    }

    pub fn get(&self, id: ObjectId) -> Option<&RegistryEntry> {
        self.entries.get(id.index())
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut RegistryEntry> {
        self.entries.get_mut(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &RegistryEntry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| (ObjectId(i as u32), e))
    }

    pub fn tracked(&self) -> &[ObjectId] {
        &self.tracked
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn dynamic_count(&self) -> usize {
        self.tracked.len()
    }

    pub fn static_count(&self) -> usize {
        self.entries.len() - self.tracked.len()
    }

    pub fn count_kind(&self, kind: ObjectKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }
}

impl Default for BodyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::{Quat, Vec3};
    use crate::domain::config::PhysicsSettings;
    use crate::domain::objects::Shape;
    use crate::systems::physics::ScriptedWorld;
    use super::super::visual::Representation;

    fn sphere(mass: f32) -> BodyDesc {
        BodyDesc::new(Shape::Sphere { radius: 1.0 }, mass, Vec3::new(1.0, 2.0, 3.0), Quat::identity())
    }

    fn visual() -> VisualObject {
        VisualObject::new(Representation::Sphere { radius: 1.0 }, 0xffffff)
    }

    #[test]
    fn only_dynamic_bodies_are_tracked() {
        let mut physics = ScriptedWorld::new(&PhysicsSettings::default());
        let mut registry = BodyRegistry::new();

        let (floor, _) = registry.create_body(&mut physics, ObjectKind::Floor, visual(), &sphere(0.0));
        let (ball, _) = registry.create_body(&mut physics, ObjectKind::Ball, visual(), &sphere(15.0));

        assert_eq!(registry.tracked(), &[ball]);
        assert_eq!(registry.static_count(), 1);
        assert_eq!(registry.dynamic_count(), 1);
        assert!(!registry.get(floor).unwrap().is_dynamic());
        assert_eq!(physics.body_count(), 2);
    }

    #[test]
    fn visual_starts_at_descriptor_pose() {
        let mut physics = ScriptedWorld::new(&PhysicsSettings::default());
        let mut registry = BodyRegistry::new();
        let (id, _) = registry.create_body(&mut physics, ObjectKind::Ball, visual(), &sphere(1.0));
        assert_eq!(registry.get(id).unwrap().visual.pose.translation, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn returned_handle_is_the_entry_body() {
        let mut physics = ScriptedWorld::new(&PhysicsSettings::default());
        let mut registry = BodyRegistry::new();
        assert!(registry.is_empty());
        registry.create_body(&mut physics, ObjectKind::Floor, visual(), &sphere(0.0));
        let (pin, body) = registry.create_body(&mut physics, ObjectKind::Pin, visual(), &sphere(2.0));
        assert_eq!(registry.get(pin).unwrap().body, body);
        assert_eq!(body.index(), 1);
        assert_eq!(physics.desc(body).unwrap().mass, 2.0);
    }
}
