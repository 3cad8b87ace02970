use bevy_ecs::prelude::Component;

/// Name of the group holding the draggable boxes.
pub const BOXES: &str = "boxes";
/// Name of the group holding curve point handles.
pub const HANDLES: &str = "handles";

/// Tag component naming the collection an entity belongs to.
///
/// Collision rules match on these names.
#[derive(Component, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Group(String);

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn is(&self, name: &str) -> bool {
        self.0 == name
    }
}
