//! The backend of the state cache, which should be responsible for only one thing:
//! forwarding state changes to the low-level fixed-function pipeline.
//!
//! The state cache decides _whether_ a call is issued, a backend only knows _how_.
//! Every method corresponds to exactly one call of the host API.

pub mod headless;
pub mod recorder;

use super::errors::*;
use super::state::types::*;
use super::MAX_TEXTURE_UNITS;

/// What the rendering context can do. Contrary to the state, these values never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendCapabilities {
    /// The number of texture units the fixed-function pipeline exposes.
    pub texture_units: usize,
    /// Whether `GL_EXT_stencil_two_side` is available.
    pub two_sided_stencil: bool,
}

impl Default for BackendCapabilities {
    fn default() -> Self {
        BackendCapabilities {
            texture_units: MAX_TEXTURE_UNITS,
            two_sided_stencil: true,
        }
    }
}

pub trait Backend {
    fn capabilities(&self) -> BackendCapabilities;

    fn active_texture(&mut self, unit: usize);

    fn alpha_func(&mut self, func: Comparison, reference: f32);

    fn blend_func(&mut self, src: BlendFactor, dst: BlendFactor);

    fn depth_func(&mut self, func: Comparison);

    /// Only called if the context supports two-sided stencil.
    fn active_stencil_face(&mut self, face: StencilFace);

    fn stencil_func(&mut self, func: Comparison, reference: i32, mask: u32);

    fn stencil_op(&mut self, fail: StencilOp, depth_fail: StencilOp, depth_pass: StencilOp);

    fn color_mask(&mut self, mask: [bool; 4]);

    fn depth_mask(&mut self, flag: bool);

    fn cull_face(&mut self, face: Face);

    fn front_face(&mut self, order: FrontFaceOrder);

    /// Sets the rasterization mode of both front and back faces.
    fn polygon_mode(&mut self, mode: PolygonMode);

    fn polygon_offset(&mut self, factor: f32, units: f32);

    /// Per-unit capabilities apply to the active texture unit.
    fn enable(&mut self, cap: Capability);

    fn disable(&mut self, cap: Capability);

    fn bind_texture(&mut self, target: TextureTarget, texture: u32);

    fn tex_env(&mut self, target: TexEnvTarget, param: TexEnvParam, value: TexEnvValue);

    /// Replaces the top of the matrix stack `slot` with a column-major matrix.
    fn load_matrix(&mut self, slot: MatrixSlot, matrix: &[f32; 16]);

    /// Reports errors the host API has recorded since the last check.
    fn check(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<B: Backend + ?Sized> Backend for Box<B> {
    fn capabilities(&self) -> BackendCapabilities {
        (**self).capabilities()
    }

    fn active_texture(&mut self, unit: usize) {
        (**self).active_texture(unit)
    }

    fn alpha_func(&mut self, func: Comparison, reference: f32) {
        (**self).alpha_func(func, reference)
    }

    fn blend_func(&mut self, src: BlendFactor, dst: BlendFactor) {
        (**self).blend_func(src, dst)
    }

    fn depth_func(&mut self, func: Comparison) {
        (**self).depth_func(func)
    }

    fn active_stencil_face(&mut self, face: StencilFace) {
        (**self).active_stencil_face(face)
    }

    fn stencil_func(&mut self, func: Comparison, reference: i32, mask: u32) {
        (**self).stencil_func(func, reference, mask)
    }

    fn stencil_op(&mut self, fail: StencilOp, depth_fail: StencilOp, depth_pass: StencilOp) {
        (**self).stencil_op(fail, depth_fail, depth_pass)
    }

    fn color_mask(&mut self, mask: [bool; 4]) {
        (**self).color_mask(mask)
    }

    fn depth_mask(&mut self, flag: bool) {
        (**self).depth_mask(flag)
    }

    fn cull_face(&mut self, face: Face) {
        (**self).cull_face(face)
    }

    fn front_face(&mut self, order: FrontFaceOrder) {
        (**self).front_face(order)
    }

    fn polygon_mode(&mut self, mode: PolygonMode) {
        (**self).polygon_mode(mode)
    }

    fn polygon_offset(&mut self, factor: f32, units: f32) {
        (**self).polygon_offset(factor, units)
    }

    fn enable(&mut self, cap: Capability) {
        (**self).enable(cap)
    }

    fn disable(&mut self, cap: Capability) {
        (**self).disable(cap)
    }

    fn bind_texture(&mut self, target: TextureTarget, texture: u32) {
        (**self).bind_texture(target, texture)
    }

    fn tex_env(&mut self, target: TexEnvTarget, param: TexEnvParam, value: TexEnvValue) {
        (**self).tex_env(target, param, value)
    }

    fn load_matrix(&mut self, slot: MatrixSlot, matrix: &[f32; 16]) {
        (**self).load_matrix(slot, matrix)
    }

    fn check(&mut self) -> Result<()> {
        (**self).check()
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod gl;

/// Creates an OpenGL backend, resolving entry points with `loader`.
///
/// # Safety
///
/// The OpenGL context that `loader` belongs to must be current on this thread, and
/// stay current for as long as the backend is used.
#[cfg(not(target_arch = "wasm32"))]
pub unsafe fn new<F>(loader: F) -> Result<Box<dyn Backend>>
where
    F: FnMut(&str) -> *const std::os::raw::c_void,
{
    let backend = self::gl::backend::GLBackend::new(loader)?;
    Ok(Box::new(backend))
}

pub fn new_headless() -> Box<dyn Backend> {
    Box::new(self::headless::HeadlessBackend::new())
}
