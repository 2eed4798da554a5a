use std::cmp;
use std::marker::PhantomData;
use std::os::raw::c_void;

use gl;
use gl::types::*;

use super::super::super::errors::{Error, Result};
use super::super::super::state::types::*;
use super::super::super::MAX_TEXTURE_UNITS;
use super::super::{Backend, BackendCapabilities};
use super::capabilities::{Capabilities, Version};
use super::legacy::Legacy;

/// Forwards state changes to the OpenGL context that is current on the creating
/// thread.
pub struct GLBackend {
    capabilities: Capabilities,
    legacy: Legacy,
    texture_units: usize,
    two_sided_stencil: bool,
    // The context is bound to the creating thread.
    _marker: PhantomData<*const ()>,
}

impl GLBackend {
    /// Loads all entry points with `loader` and inspects the context.
    ///
    /// # Unsafe
    ///
    /// The context that `loader` resolves symbols for must be current in this thread
    /// for the whole lifetime of the backend.
    pub unsafe fn new<F>(mut loader: F) -> Result<Self>
    where
        F: FnMut(&str) -> *const c_void,
    {
        gl::load_with(|symbol| loader(symbol));

        let capabilities = Capabilities::parse()?;
        info!("[GLBackend] {:#?}", capabilities);
        check_capabilities(&capabilities)?;

        let legacy = Legacy::load(&mut loader)?;
        let two_sided_stencil =
            capabilities.extensions.gl_ext_stencil_two_side && legacy.active_stencil_face.is_some();

        if !two_sided_stencil {
            info!("[GLBackend] Two-sided stencil is not available.");
        }

        check()?;

        Ok(GLBackend {
            texture_units: cmp::min(capabilities.max_texture_units, MAX_TEXTURE_UNITS),
            capabilities,
            legacy,
            two_sided_stencil,
            _marker: PhantomData,
        })
    }

    #[inline]
    pub fn gl_capabilities(&self) -> &Capabilities {
        &self.capabilities
    }
}

impl Backend for GLBackend {
    fn capabilities(&self) -> BackendCapabilities {
        BackendCapabilities {
            texture_units: self.texture_units,
            two_sided_stencil: self.two_sided_stencil,
        }
    }

    fn active_texture(&mut self, unit: usize) {
        unsafe { gl::ActiveTexture(gl::TEXTURE0 + unit as GLenum) }
    }

    fn alpha_func(&mut self, func: Comparison, reference: f32) {
        unsafe { (self.legacy.alpha_func)(func.into(), reference) }
    }

    fn blend_func(&mut self, src: BlendFactor, dst: BlendFactor) {
        unsafe { gl::BlendFunc(src.into(), dst.into()) }
    }

    fn depth_func(&mut self, func: Comparison) {
        unsafe { gl::DepthFunc(func.into()) }
    }

    fn active_stencil_face(&mut self, face: StencilFace) {
        if let Some(f) = self.legacy.active_stencil_face {
            unsafe { f(face.into()) }
        }
    }

    fn stencil_func(&mut self, func: Comparison, reference: i32, mask: u32) {
        unsafe { gl::StencilFunc(func.into(), reference, mask) }
    }

    fn stencil_op(&mut self, fail: StencilOp, depth_fail: StencilOp, depth_pass: StencilOp) {
        unsafe { gl::StencilOp(fail.into(), depth_fail.into(), depth_pass.into()) }
    }

    fn color_mask(&mut self, mask: [bool; 4]) {
        unsafe {
            gl::ColorMask(
                mask[0] as GLboolean,
                mask[1] as GLboolean,
                mask[2] as GLboolean,
                mask[3] as GLboolean,
            )
        }
    }

    fn depth_mask(&mut self, flag: bool) {
        unsafe { gl::DepthMask(if flag { gl::TRUE } else { gl::FALSE }) }
    }

    fn cull_face(&mut self, face: Face) {
        unsafe { gl::CullFace(face.into()) }
    }

    fn front_face(&mut self, order: FrontFaceOrder) {
        unsafe { gl::FrontFace(order.into()) }
    }

    fn polygon_mode(&mut self, mode: PolygonMode) {
        unsafe { gl::PolygonMode(gl::FRONT_AND_BACK, mode.into()) }
    }

    fn polygon_offset(&mut self, factor: f32, units: f32) {
        unsafe { gl::PolygonOffset(factor, units) }
    }

    fn enable(&mut self, cap: Capability) {
        unsafe { gl::Enable(cap.into()) }
    }

    fn disable(&mut self, cap: Capability) {
        unsafe { gl::Disable(cap.into()) }
    }

    fn bind_texture(&mut self, target: TextureTarget, texture: u32) {
        unsafe { gl::BindTexture(target.into(), texture) }
    }

    fn tex_env(&mut self, target: TexEnvTarget, param: TexEnvParam, value: TexEnvValue) {
        let target = target.into();
        let param = param.into();

        unsafe {
            match value {
                TexEnvValue::Int(v) => (self.legacy.tex_envi)(target, param, v),
                TexEnvValue::Float(v) => (self.legacy.tex_envf)(target, param, v),
                TexEnvValue::Ints(v) => (self.legacy.tex_enviv)(target, param, v.as_ptr()),
                TexEnvValue::Floats(v) => (self.legacy.tex_envfv)(target, param, v.as_ptr()),
            }
        }
    }

    fn load_matrix(&mut self, slot: MatrixSlot, matrix: &[f32; 16]) {
        unsafe {
            (self.legacy.matrix_mode)(slot.into());
            (self.legacy.load_matrixf)(matrix.as_ptr());
        }
    }

    fn check(&mut self) -> Result<()> {
        unsafe { Ok(check()?) }
    }
}

fn check_capabilities(caps: &Capabilities) -> Result<()> {
    if let Some(super::capabilities::Profile::Core) = caps.profile {
        return Err(Error::Requirement("a compatibility profile".into()));
    }

    if caps.version < Version::GL(1, 2) {
        return Err(Error::Requirement("OpenGL 1.2".into()));
    }

    if !caps.has_multitexture() {
        return Err(Error::Requirement("multitexturing".into()));
    }

    if !caps.has_cube_map() {
        return Err(Error::Requirement("cube map textures".into()));
    }

    Ok(())
}

unsafe fn check() -> crate::errors::Result<()> {
    match gl::GetError() {
        gl::NO_ERROR => Ok(()),

        gl::INVALID_ENUM => {
            bail!("[GL] An unacceptable value is specified for an enumerated argument.")
        }

        gl::INVALID_VALUE => bail!("[GL] A numeric argument is out of range."),

        gl::INVALID_OPERATION => {
            bail!("[GL] The specified operation is not allowed in the current state.")
        }

        gl::STACK_OVERFLOW => bail!("[GL] The command would cause a stack overflow."),

        gl::STACK_UNDERFLOW => bail!("[GL] The command would cause a stack underflow."),

        gl::OUT_OF_MEMORY => bail!("[GL] There is not enough memory left to execute the command."),
        _ => bail!("[GL] Oops, Unknown OpenGL error."),
    }
}
