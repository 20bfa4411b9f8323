use glam::Vec3;

/// Billboard-style text label.
#[derive(Debug, Clone)]
pub struct TextGeometry {
    name: String,
    pub caption: String,
    /// Offset from the owning node's origin
    pub offset: Vec3,
}

impl TextGeometry {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            caption: String::new(),
            offset: Vec3::ZERO,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Axis-aligned box primitive.
#[derive(Debug, Clone)]
pub struct BoxGeometry {
    name: String,
    pub dimensions: Vec3,
}

impl BoxGeometry {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            dimensions: Vec3::ONE,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Geometry loaded from a model file on disk.
#[derive(Debug, Clone)]
pub struct FileGeometry {
    name: String,
    pub file_path: String,
}

impl FileGeometry {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            file_path: String::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Arbitrary face mesh.
///
/// `indices` holds face loops separated by `-1` sentinels, three floats
/// per vertex in `coordinates`.
#[derive(Debug, Clone)]
pub struct IndexedFaceSetGeometry {
    name: String,
    pub coordinates: Vec<f32>,
    pub indices: Vec<i32>,
    /// Registry name of the material to render with
    pub material_name: Option<String>,
}

impl IndexedFaceSetGeometry {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            coordinates: Vec::new(),
            indices: Vec::new(),
            material_name: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Polyline mesh, same index convention as [`IndexedFaceSetGeometry`].
#[derive(Debug, Clone)]
pub struct IndexedLineSetGeometry {
    name: String,
    pub coordinates: Vec<f32>,
    pub indices: Vec<i32>,
    pub color: Vec3,
}

impl IndexedLineSetGeometry {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            coordinates: Vec::new(),
            indices: Vec::new(),
            color: Vec3::ONE,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
