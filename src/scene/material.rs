use glam::{Vec3, Vec4};

/// Hand-authored material; renders through the pass named in `pass_name`.
#[derive(Debug, Clone)]
pub struct ManualMaterial {
    name: String,
    pub diffuse: Vec4,
    pub specular: Vec4,
    /// Registry name of the pass this material renders with
    pub pass_name: Option<String>,
}

impl ManualMaterial {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            diffuse: Vec4::ONE,
            specular: Vec4::ZERO,
            pass_name: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Physically-based shading pass.
#[derive(Debug, Clone)]
pub struct PbsPass {
    name: String,
    pub albedo: Vec3,
    pub roughness: f32,
    pub emissive: Vec3,
}

impl PbsPass {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            albedo: Vec3::splat(0.8),
            roughness: 0.5,
            emissive: Vec3::ZERO,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Fixed-function style pass with explicit lighting terms.
#[derive(Debug, Clone)]
pub struct ManualPass {
    name: String,
    pub diffuse: Vec4,
    pub specular: Vec4,
    pub ambient: Vec3,
    pub emissive: Vec3,
    pub shininess: f32,
}

impl ManualPass {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            diffuse: Vec4::ONE,
            specular: Vec4::ZERO,
            ambient: Vec3::ZERO,
            emissive: Vec3::ZERO,
            shininess: 32.0,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
