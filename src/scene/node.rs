use glam::{Quat, Vec3};

/// Local TRS of a scene node.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub orientation: Quat,
    pub scale: Vec3,
}

impl Transform {
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

/// A named node in the scene graph.
///
/// Hierarchy is name-keyed: a node records its parent and children by
/// registry name, so the links survive entity replacement and never keep
/// another entity alive.
#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    /// Registry name of the parent node (`None` for root nodes)
    pub parent: Option<String>,
    /// Registry names of child nodes
    pub children: Vec<String>,
    /// Local transform
    pub transform: Transform,
    /// Visibility flag for culling
    pub visible: bool,
}

impl Node {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            parent: None,
            children: Vec::new(),
            transform: Transform::new(),
            visible: true,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
