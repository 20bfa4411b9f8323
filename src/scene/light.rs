use glam::Vec3;

#[derive(Debug, Clone)]
pub struct PointLight {
    pub range: f32,
}

#[derive(Debug, Clone)]
pub struct SpotLight {
    pub range: f32,
    pub inner_cone: f32,
    pub outer_cone: f32,
}

/// High-level abstraction: the light's emission shape.
#[derive(Debug, Clone)]
pub enum LightKind {
    Directional,
    Point(PointLight),
    Spot(SpotLight),
}

#[derive(Debug, Clone)]
pub struct Light {
    name: String,
    pub color: Vec3,
    pub intensity: f32,
    pub kind: LightKind,
}

impl Light {
    /// New directional white light. Kind and photometry are expected to
    /// be reconfigured after creation.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            color: Vec3::ONE,
            intensity: 1.0,
            kind: LightKind::Directional,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
