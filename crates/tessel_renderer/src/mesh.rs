/// A drawable mesh: host-side triangle soup plus, once compiled, one
/// immutable vertex buffer on the device.
///
/// Lifecycle:
///
/// ```text
/// new ── add/emit ── complete_mesh ── compile ── render … ── release
///  ▲                                                            │
///  └──────────────────── generate_* (release + rebuild) ◄───────┘
/// ```
///
/// The vertex buffer is `Arc`-shared. Cloning a compiled mesh gives a second
/// owner of the same buffer; the buffer is freed when the last owner releases
/// or drops it.
use std::sync::Arc;

use glam::{Mat4, Vec3};
use tessel_core::Color;

use crate::error::RenderError;
use crate::geometry::{MeshBuilder, Shape};
use crate::graph::{DrawCommand, FillMode, FramePacket};
use crate::resources::VertexUpload;
use crate::shader::{ShaderLookup, BASIC_SHADER};

/// How a mesh asks to be drawn: which shader, and the values written to the
/// `wire` uniform for the filled and the line pass.
#[derive(Debug, Clone, PartialEq)]
pub struct WireframeStyle {
    pub shader: String,
    /// Sentinel telling the shader to use vertex colors. Must have `x < 0`.
    pub solid_flag: Vec3,
    pub wire_color: Color,
}

impl Default for WireframeStyle {
    fn default() -> Self {
        Self {
            shader: BASIC_SHADER.to_string(),
            solid_flag: Vec3::NEG_ONE,
            wire_color: Color::MAGENTA,
        }
    }
}

impl WireframeStyle {
    pub fn with_shader(mut self, name: impl Into<String>) -> Self {
        self.shader = name.into();
        self
    }

    pub fn with_wire_color(mut self, color: Color) -> Self {
        self.wire_color = color;
        self
    }

    pub fn with_solid_flag(mut self, flag: Vec3) -> Self {
        self.solid_flag = flag;
        self
    }
}

pub struct MeshResource<B = wgpu::Buffer> {
    builder: MeshBuilder,
    vertex_count: u32,
    vertex_buffer: Option<Arc<B>>,
    shaders: Arc<dyn ShaderLookup>,
    style: WireframeStyle,
    /// Padding color for vertices that were never given one.
    fill_color: Color,
    label: &'static str,
}

impl<B> MeshResource<B> {
    /// An unbound, empty mesh that will resolve its shader through `shaders`.
    pub fn new(shaders: Arc<dyn ShaderLookup>) -> Self {
        Self {
            builder: MeshBuilder::new(),
            vertex_count: 0,
            vertex_buffer: None,
            shaders,
            style: WireframeStyle::default(),
            fill_color: Color::WHITE,
            label: "Mesh",
        }
    }

    pub fn with_style(mut self, style: WireframeStyle) -> Self {
        self.style = style;
        self
    }

    // ── Host-side assembly ────────────────────────────────────────────────

    pub fn add_vertex_position(&mut self, position: Vec3) {
        if self.reject_edit() {
            return;
        }
        self.builder.add_vertex_position(position);
        self.sync_count();
    }

    pub fn add_vertex_color(&mut self, color: Vec3) {
        if self.reject_edit() {
            return;
        }
        self.builder.add_vertex_color(color);
    }

    pub fn emit_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3) {
        if self.reject_edit() {
            return;
        }
        self.builder.emit_triangle(a, b, c);
        self.sync_count();
    }

    pub fn emit_quad(&mut self, bl: Vec3, br: Vec3, tl: Vec3, tr: Vec3) {
        if self.reject_edit() {
            return;
        }
        self.builder.emit_quad(bl, br, tl, tr);
        self.sync_count();
    }

    /// Pads every uncolored vertex with `color` and remembers it as the
    /// fill color for `compile`.
    pub fn complete_mesh(&mut self, color: Color) {
        if self.reject_edit() {
            return;
        }
        self.fill_color = color;
        self.builder.complete(color.to_vec3());
    }

    // ── Device lifecycle ──────────────────────────────────────────────────

    /// Uploads the interleaved vertex stream once. Does nothing when already
    /// bound or when there is nothing to upload.
    pub fn compile<D>(&mut self, device: &D)
    where
        D: VertexUpload<Buffer = B> + ?Sized,
    {
        if self.is_bound() {
            log::trace!("{}: already compiled", self.label);
            return;
        }
        self.sync_count();
        if self.vertex_count == 0 {
            log::trace!("{}: nothing to compile", self.label);
            return;
        }

        self.builder.complete(self.fill_color.to_vec3());
        let vertices = self.builder.interleave();
        let buffer = device.upload_vertices(self.label, &vertices);
        self.vertex_count = vertices.len() as u32;
        log::debug!(
            "{}: uploaded {} vertices ({} bytes)",
            self.label,
            vertices.len(),
            std::mem::size_of_val(vertices.as_slice())
        );
        self.vertex_buffer = Some(Arc::new(buffer));
    }

    /// Drops this owner's buffer reference and clears the host sequences.
    pub fn release(&mut self) {
        self.vertex_buffer = None;
        self.builder.clear();
        self.vertex_count = 0;
    }

    // ── Generators ────────────────────────────────────────────────────────

    /// Replaces the contents with `shape`, colored `color`, and compiles.
    pub fn generate<D>(&mut self, device: &D, shape: &Shape, color: Color)
    where
        D: VertexUpload<Buffer = B> + ?Sized,
    {
        self.release();
        self.builder = shape.build();
        self.label = shape.name();
        self.sync_count();
        self.complete_mesh(color);
        self.compile(device);
    }

    pub fn generate_cube<D>(&mut self, device: &D, size: f32, color: Color)
    where
        D: VertexUpload<Buffer = B> + ?Sized,
    {
        self.generate(device, &Shape::Cube { size }, color);
    }

    pub fn generate_cuboid<D>(&mut self, device: &D, dimensions: Vec3, color: Color)
    where
        D: VertexUpload<Buffer = B> + ?Sized,
    {
        self.generate(device, &Shape::Cuboid { dimensions }, color);
    }

    pub fn generate_cone<D>(&mut self, device: &D, radius: f32, height: f32, subdivisions: u32, color: Color)
    where
        D: VertexUpload<Buffer = B> + ?Sized,
    {
        self.generate(device, &Shape::Cone { radius, height, subdivisions }, color);
    }

    pub fn generate_cylinder<D>(&mut self, device: &D, radius: f32, height: f32, subdivisions: u32, color: Color)
    where
        D: VertexUpload<Buffer = B> + ?Sized,
    {
        self.generate(device, &Shape::Cylinder { radius, height, subdivisions }, color);
    }

    pub fn generate_tube<D>(
        &mut self,
        device: &D,
        outer_radius: f32,
        inner_radius: f32,
        height: f32,
        subdivisions: u32,
        color: Color,
    ) where
        D: VertexUpload<Buffer = B> + ?Sized,
    {
        let shape = Shape::Tube { outer_radius, inner_radius, height, subdivisions };
        self.generate(device, &shape, color);
    }

    pub fn generate_torus<D>(
        &mut self,
        device: &D,
        outer_radius: f32,
        inner_radius: f32,
        subdivisions_a: u32,
        subdivisions_b: u32,
        color: Color,
    ) where
        D: VertexUpload<Buffer = B> + ?Sized,
    {
        let shape = Shape::Torus { outer_radius, inner_radius, subdivisions_a, subdivisions_b };
        self.generate(device, &shape, color);
    }

    /// Zero subdivisions produce a cube of edge `2 * radius`.
    pub fn generate_sphere<D>(&mut self, device: &D, radius: f32, subdivisions: u32, color: Color)
    where
        D: VertexUpload<Buffer = B> + ?Sized,
    {
        self.generate(device, &Shape::Sphere { radius, subdivisions }, color);
    }

    // ── Drawing ───────────────────────────────────────────────────────────

    /// Queues a filled draw followed by a depth-biased wireframe draw.
    ///
    /// An unbound mesh queues nothing. An unregistered shader name is an
    /// error and also queues nothing.
    pub fn render(
        &self,
        projection: Mat4,
        view: Mat4,
        model: Mat4,
        packet: &mut FramePacket<B>,
    ) -> Result<(), RenderError> {
        let shader = self
            .shaders
            .resolve(&self.style.shader)
            .ok_or_else(|| RenderError::ShaderNotFound(self.style.shader.clone()))?;

        let Some(buffer) = &self.vertex_buffer else {
            return Ok(());
        };

        let mvp = projection * view * model;
        packet.push(DrawCommand {
            vertex_buffer: Arc::clone(buffer),
            vertex_count: self.vertex_count,
            shader,
            mvp,
            wire: self.style.solid_flag,
            fill_mode: FillMode::Solid,
        });
        packet.push(DrawCommand {
            vertex_buffer: Arc::clone(buffer),
            vertex_count: self.vertex_count,
            shader,
            mvp,
            wire: self.style.wire_color.to_vec3(),
            fill_mode: FillMode::Wireframe,
        });
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn is_bound(&self) -> bool {
        self.vertex_buffer.is_some()
    }

    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn vertex_buffer(&self) -> Option<&Arc<B>> {
        self.vertex_buffer.as_ref()
    }

    /// Host-side positions and colors. Empty for a clone.
    pub fn builder(&self) -> &MeshBuilder {
        &self.builder
    }

    pub fn style(&self) -> &WireframeStyle {
        &self.style
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    // ── Private helpers ───────────────────────────────────────────────────

    fn reject_edit(&self) -> bool {
        if self.is_bound() {
            log::warn!("{}: ignoring edit to a compiled mesh; release it first", self.label);
            return true;
        }
        false
    }

    fn sync_count(&mut self) {
        self.vertex_count = self.builder.vertex_count() as u32;
    }
}

/// A bound clone shares the buffer and leaves host history behind. An
/// unbound clone has no buffer to share, so it copies the host data it will
/// need to compile.
impl<B> Clone for MeshResource<B> {
    fn clone(&self) -> Self {
        let builder = if self.is_bound() {
            MeshBuilder::new()
        } else {
            self.builder.clone()
        };
        Self {
            builder,
            vertex_count: self.vertex_count,
            vertex_buffer: self.vertex_buffer.clone(),
            shaders: Arc::clone(&self.shaders),
            style: self.style.clone(),
            fill_color: self.fill_color,
            label: self.label,
        }
    }
}

impl<B> std::fmt::Debug for MeshResource<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeshResource")
            .field("label", &self.label)
            .field("vertex_count", &self.vertex_count)
            .field("bound", &self.is_bound())
            .field("style", &self.style)
            .finish()
    }
}
