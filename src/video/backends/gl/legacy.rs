//! Fixed-function entry points and enums that the core-profile bindings of the
//! `gl` crate do not provide.

use std::mem;
use std::os::raw::c_void;

use gl::types::*;

use crate::errors::*;

pub const ALPHA_TEST: GLenum = 0x0BC0;
pub const AUTO_NORMAL: GLenum = 0x0D80;
pub const COLOR_MATERIAL: GLenum = 0x0B57;
pub const FOG: GLenum = 0x0B60;
pub const LIGHTING: GLenum = 0x0B50;
pub const LINE_STIPPLE: GLenum = 0x0B24;
pub const NORMALIZE: GLenum = 0x0BA1;
pub const POINT_SMOOTH: GLenum = 0x0B10;
pub const POLYGON_STIPPLE: GLenum = 0x0B42;
pub const STENCIL_TEST_TWO_SIDE_EXT: GLenum = 0x8910;

pub const TEXTURE_GEN_S: GLenum = 0x0C60;
pub const TEXTURE_GEN_T: GLenum = 0x0C61;
pub const TEXTURE_GEN_R: GLenum = 0x0C62;
pub const TEXTURE_GEN_Q: GLenum = 0x0C63;

pub const MODELVIEW: GLenum = 0x1700;
pub const PROJECTION: GLenum = 0x1701;
pub const TEXTURE: GLenum = 0x1702;
pub const MATRIX0_ARB: GLenum = 0x88C0;

pub const TEXTURE_ENV: GLenum = 0x2300;
pub const TEXTURE_FILTER_CONTROL: GLenum = 0x8500;
pub const TEXTURE_ENV_MODE: GLenum = 0x2200;
pub const TEXTURE_ENV_COLOR: GLenum = 0x2201;
pub const COMBINE_RGB: GLenum = 0x8571;
pub const COMBINE_ALPHA: GLenum = 0x8572;
pub const RGB_SCALE: GLenum = 0x8573;
pub const ALPHA_SCALE: GLenum = 0x0D1C;

pub const MAX_TEXTURE_UNITS: GLenum = 0x84E2;

pub type AlphaFunc = unsafe extern "system" fn(GLenum, GLfloat);
pub type MatrixMode = unsafe extern "system" fn(GLenum);
pub type LoadMatrixf = unsafe extern "system" fn(*const GLfloat);
pub type TexEnvi = unsafe extern "system" fn(GLenum, GLenum, GLint);
pub type TexEnvf = unsafe extern "system" fn(GLenum, GLenum, GLfloat);
pub type TexEnviv = unsafe extern "system" fn(GLenum, GLenum, *const GLint);
pub type TexEnvfv = unsafe extern "system" fn(GLenum, GLenum, *const GLfloat);
pub type ActiveStencilFaceEXT = unsafe extern "system" fn(GLenum);

macro_rules! load {
    ($loader:expr, $name:expr, $ty:ty) => {{
        let ptr = $loader($name);
        if ptr.is_null() {
            None
        } else {
            Some(mem::transmute::<*const c_void, $ty>(ptr))
        }
    }};
}

macro_rules! require {
    ($loader:expr, $name:expr, $ty:ty) => {
        match load!($loader, $name, $ty) {
            Some(v) => v,
            None => bail!("[GL] Entry point {} is not available.", $name),
        }
    };
}

/// The fixed-function entry points, resolved once per context.
#[derive(Clone, Copy)]
pub struct Legacy {
    pub alpha_func: AlphaFunc,
    pub matrix_mode: MatrixMode,
    pub load_matrixf: LoadMatrixf,
    pub tex_envi: TexEnvi,
    pub tex_envf: TexEnvf,
    pub tex_enviv: TexEnviv,
    pub tex_envfv: TexEnvfv,
    /// `None` without `GL_EXT_stencil_two_side`.
    pub active_stencil_face: Option<ActiveStencilFaceEXT>,
}

impl Legacy {
    /// # Unsafe
    ///
    /// `loader` must resolve symbols of the context that is current in this thread.
    pub unsafe fn load<F>(loader: &mut F) -> Result<Legacy>
    where
        F: FnMut(&str) -> *const c_void,
    {
        Ok(Legacy {
            alpha_func: require!(loader, "glAlphaFunc", AlphaFunc),
            matrix_mode: require!(loader, "glMatrixMode", MatrixMode),
            load_matrixf: require!(loader, "glLoadMatrixf", LoadMatrixf),
            tex_envi: require!(loader, "glTexEnvi", TexEnvi),
            tex_envf: require!(loader, "glTexEnvf", TexEnvf),
            tex_enviv: require!(loader, "glTexEnviv", TexEnviv),
            tex_envfv: require!(loader, "glTexEnvfv", TexEnvfv),
            active_stencil_face: load!(loader, "glActiveStencilFaceEXT", ActiveStencilFaceEXT),
        })
    }
}
