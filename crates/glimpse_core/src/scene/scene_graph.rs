//! Scene sub-graph: the renderable node hierarchy a scene owns
//!
//! A [`SceneGraph`] is a tree of [`SceneNode`]s. Drawable nodes own their
//! [`Geometry`] and [`Material`] resources outright, so disposing the graph
//! is a single exhaustive traversal that releases each resource exactly once.

use std::collections::BTreeMap;

use crate::foundation::math::{Transform, Vec3};

/// Value bound to a named shader uniform
#[derive(Debug, Clone, PartialEq)]
pub enum Uniform {
    /// Scalar, e.g. the `time` shader clock
    Float(f32),
    /// Vector, e.g. a camera position
    Vec3(Vec3),
    /// Linear RGB color
    Color([f32; 3]),
}

/// Vertex buffer owned by a drawable node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Geometry {
    label: String,
    vertex_count: usize,
    disposed: bool,
}

impl Geometry {
    /// Geometry with an explicit vertex count
    pub fn new(label: impl Into<String>, vertex_count: usize) -> Self {
        Self {
            label: label.into(),
            vertex_count,
            disposed: false,
        }
    }

    /// Subdivided plane with `(segments_x + 1) * (segments_y + 1)` vertices
    pub fn plane(label: impl Into<String>, segments_x: usize, segments_y: usize) -> Self {
        Self::new(label, (segments_x + 1) * (segments_y + 1))
    }

    /// UV sphere with `(width_segments + 1) * (height_segments + 1)` vertices
    pub fn sphere(label: impl Into<String>, width_segments: usize, height_segments: usize) -> Self {
        Self::new(label, (width_segments + 1) * (height_segments + 1))
    }

    /// Point cloud with one vertex per point
    pub fn points(label: impl Into<String>, count: usize) -> Self {
        Self::new(label, count)
    }

    /// Debug label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of vertices in the buffer
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Whether the buffer has been released
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Release the buffer; returns false if it was already released
    pub fn dispose(&mut self) -> bool {
        !std::mem::replace(&mut self.disposed, true)
    }
}

/// Shader program plus its uniform bindings
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    name: String,
    shader: String,
    uniforms: BTreeMap<String, Uniform>,
    disposed: bool,
}

impl Material {
    /// Material driven by a named shader program
    pub fn shader(name: impl Into<String>, shader: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shader: shader.into(),
            uniforms: BTreeMap::new(),
            disposed: false,
        }
    }

    /// Shader material with a `time` clock starting at zero
    pub fn animated(name: impl Into<String>, shader: impl Into<String>) -> Self {
        Self::shader(name, shader).with_uniform("time", Uniform::Float(0.0))
    }

    /// Plain lit material with a base color
    pub fn standard(name: impl Into<String>, color: [f32; 3]) -> Self {
        Self::shader(name, "standard").with_uniform("color", Uniform::Color(color))
    }

    /// Declare a uniform with its initial value
    pub fn with_uniform(mut self, key: impl Into<String>, value: Uniform) -> Self {
        self.uniforms.insert(key.into(), value);
        self
    }

    /// Update a declared uniform; returns false if the material has no such uniform
    pub fn set_uniform(&mut self, key: &str, value: Uniform) -> bool {
        match self.uniforms.get_mut(key) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Current value of a uniform
    pub fn uniform(&self, key: &str) -> Option<&Uniform> {
        self.uniforms.get(key)
    }

    /// Material name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shader program name
    pub fn shader_name(&self) -> &str {
        &self.shader
    }

    /// Whether the material has been released
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Release the material; returns false if it was already released
    pub fn dispose(&mut self) -> bool {
        !std::mem::replace(&mut self.disposed, true)
    }
}

/// Kind of light source
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    /// Uniform fill light
    Ambient,
    /// Infinitely distant light shining toward the origin
    Directional,
    /// Omni light with a falloff range
    Point {
        /// Distance at which the light fades out
        range: f32,
    },
}

/// Light source node payload
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    /// Light type
    pub kind: LightKind,
    /// Linear RGB color
    pub color: [f32; 3],
    /// Intensity multiplier
    pub intensity: f32,
}

impl Light {
    /// Build a light from a packed `0xRRGGBB` color
    pub fn from_hex(kind: LightKind, hex: u32, intensity: f32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        Self {
            kind,
            color: [channel(16), channel(8), channel(0)],
            intensity,
        }
    }
}

/// What a node contributes to the frame
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Pure transform node
    Group,
    /// Triangle mesh with one or more materials
    Mesh {
        /// Vertex data
        geometry: Geometry,
        /// Material per geometry group
        materials: Vec<Material>,
    },
    /// Point sprites
    Points {
        /// One vertex per point
        geometry: Geometry,
        /// Sprite material
        material: Material,
    },
    /// Light source
    Light(Light),
}

/// Node in a scene sub-graph
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// Node name, used for lookups and diagnostics
    pub name: String,
    /// Local transform
    pub transform: Transform,
    /// Node payload
    pub kind: NodeKind,
    /// Child nodes
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    fn with_kind(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            transform: Transform::identity(),
            kind,
            children: Vec::new(),
        }
    }

    /// Empty group node
    pub fn group(name: impl Into<String>) -> Self {
        Self::with_kind(name, NodeKind::Group)
    }

    /// Mesh node with a single material
    pub fn mesh(name: impl Into<String>, geometry: Geometry, material: Material) -> Self {
        Self::mesh_multi(name, geometry, vec![material])
    }

    /// Mesh node with several materials
    pub fn mesh_multi(name: impl Into<String>, geometry: Geometry, materials: Vec<Material>) -> Self {
        Self::with_kind(name, NodeKind::Mesh { geometry, materials })
    }

    /// Point cloud node
    pub fn points(name: impl Into<String>, geometry: Geometry, material: Material) -> Self {
        Self::with_kind(name, NodeKind::Points { geometry, material })
    }

    /// Light node
    pub fn light(name: impl Into<String>, light: Light) -> Self {
        Self::with_kind(name, NodeKind::Light(light))
    }

    /// Replace the local transform
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Append a child (builder form)
    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    /// Whether the renderer draws this node
    pub fn is_drawable(&self) -> bool {
        matches!(self.kind, NodeKind::Mesh { .. } | NodeKind::Points { .. })
    }

    /// Materials owned directly by this node
    pub fn materials_mut(&mut self) -> Vec<&mut Material> {
        match &mut self.kind {
            NodeKind::Mesh { materials, .. } => materials.iter_mut().collect(),
            NodeKind::Points { material, .. } => vec![material],
            NodeKind::Group | NodeKind::Light(_) => Vec::new(),
        }
    }

    /// Depth-first visit of this node and all descendants
    pub fn traverse<F: FnMut(&SceneNode)>(&self, visit: &mut F) {
        visit(self);
        for child in &self.children {
            child.traverse(visit);
        }
    }

    /// Depth-first mutable visit of this node and all descendants
    pub fn traverse_mut<F: FnMut(&mut SceneNode)>(&mut self, visit: &mut F) {
        visit(self);
        for child in &mut self.children {
            child.traverse_mut(visit);
        }
    }

    /// Release this node's own resources; returns how many were released
    fn dispose_resources(&mut self) -> usize {
        let mut released = 0;
        match &mut self.kind {
            NodeKind::Mesh { geometry, materials } => {
                released += usize::from(geometry.dispose());
                released += materials.iter_mut().map(|m| usize::from(m.dispose())).sum::<usize>();
            }
            NodeKind::Points { geometry, material } => {
                released += usize::from(geometry.dispose());
                released += usize::from(material.dispose());
            }
            NodeKind::Group | NodeKind::Light(_) => {}
        }
        released
    }
}

/// Renderable node hierarchy owned by one scene (or the idle backdrop)
#[derive(Debug, Clone, PartialEq)]
pub struct SceneGraph {
    root: SceneNode,
}

impl SceneGraph {
    /// Empty graph with a named root group
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            root: SceneNode::group(label),
        }
    }

    /// Root node
    pub fn root(&self) -> &SceneNode {
        &self.root
    }

    /// Attach a node under the root
    pub fn add(&mut self, node: SceneNode) {
        self.root.children.push(node);
    }

    /// Whether the root has no children
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Depth-first visit of every node, root included
    pub fn traverse<F: FnMut(&SceneNode)>(&self, mut visit: F) {
        self.root.traverse(&mut visit);
    }

    /// Depth-first mutable visit of every node, root included
    pub fn traverse_mut<F: FnMut(&mut SceneNode)>(&mut self, mut visit: F) {
        self.root.traverse_mut(&mut visit);
    }

    /// Total node count, root included
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.traverse(|_| count += 1);
        count
    }

    /// Number of mesh and point nodes
    pub fn drawable_count(&self) -> usize {
        let mut count = 0;
        self.traverse(|node| {
            if node.is_drawable() {
                count += 1;
            }
        });
        count
    }

    /// First node with the given name, depth-first
    pub fn find(&self, name: &str) -> Option<&SceneNode> {
        fn search<'a>(node: &'a SceneNode, name: &str) -> Option<&'a SceneNode> {
            if node.name == name {
                return Some(node);
            }
            node.children.iter().find_map(|child| search(child, name))
        }
        search(&self.root, name)
    }

    /// Mutable access to the first node with the given name
    pub fn find_mut(&mut self, name: &str) -> Option<&mut SceneNode> {
        fn search<'a>(node: &'a mut SceneNode, name: &str) -> Option<&'a mut SceneNode> {
            if node.name == name {
                return Some(node);
            }
            node.children.iter_mut().find_map(|child| search(child, name))
        }
        search(&mut self.root, name)
    }

    /// Set a uniform on every material that declares it
    ///
    /// Returns how many materials were updated.
    pub fn set_uniform_all(&mut self, key: &str, value: &Uniform) -> usize {
        let mut updated = 0;
        self.traverse_mut(|node| {
            for material in node.materials_mut() {
                if material.set_uniform(key, value.clone()) {
                    updated += 1;
                }
            }
        });
        updated
    }

    /// Release every geometry and material in the graph
    ///
    /// Returns how many resources were released by this call; resources that
    /// were already released are skipped, so a second call returns zero.
    pub fn dispose(&mut self) -> usize {
        let mut released = 0;
        self.traverse_mut(|node| released += node.dispose_resources());
        log::debug!("Disposed {} resources from graph '{}'", released, self.root.name);
        released
    }
}
