use std::cmp;
use std::ffi;

use gl;
use gl::types::*;

use super::legacy;
use crate::errors::*;

/// Describes the OpenGL context profile.
#[derive(Debug, Copy, Clone)]
pub enum Profile {
    /// The context uses only future-compatible functions and definitions.
    Core,
    /// The context includes all immediate mode functions and definitions.
    Compatibility,
}

/// Describes a version.
///
/// A version can only be compared to another version if they belong to the same API.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Version {
    /// Regular OpenGL.
    GL(u8, u8),
    /// OpenGL embedded system.
    ES(u8, u8),
}

impl PartialOrd for Version {
    #[inline]
    fn partial_cmp(&self, other: &Version) -> Option<cmp::Ordering> {
        let (es1, major1, minor1) = match *self {
            Version::GL(major, minor) => (false, major, minor),
            Version::ES(major, minor) => (true, major, minor),
        };

        let (es2, major2, minor2) = match *other {
            Version::GL(major, minor) => (false, major, minor),
            Version::ES(major, minor) => (true, major, minor),
        };

        if es1 != es2 {
            None
        } else {
            match major1.cmp(&major2) {
                cmp::Ordering::Equal => Some(minor1.cmp(&minor2)),
                v => Some(v),
            }
        }
    }
}

impl Version {
    /// Parses a `GL_VERSION` string, like `2.1.2 NVIDIA 304.137` or `OpenGL ES 3.0 Mesa`.
    pub fn parse_str(desc: &str) -> Result<Version> {
        let (es, desc) = if desc.starts_with("OpenGL ES-") {
            (true, &desc[13..])
        } else if desc.starts_with("OpenGL ES ") {
            (true, &desc[10..])
        } else {
            (false, desc)
        };

        let desc = desc
            .split(' ')
            .next()
            .ok_or_else(|| format_err!("[GL] Version string is malformed."))?;

        let mut iter = desc.split('.');
        let mut next = || -> Result<u8> {
            let v = iter
                .next()
                .ok_or_else(|| format_err!("[GL] Version string is malformed."))?;
            v.parse()
                .map_err(|_| format_err!("[GL] Version string is malformed."))
        };

        let major = next()?;
        let minor = next()?;

        if es {
            Ok(Version::ES(major, minor))
        } else {
            Ok(Version::GL(major, minor))
        }
    }

    /// Obtains the OpenGL version of the current context using the loaded functions.
    ///
    /// # Unsafe
    ///
    /// You must ensure that the functions belong to the current context, otherwise you will get
    /// an undefined behavior.
    pub unsafe fn parse() -> Result<Version> {
        Version::parse_str(&parse_str(gl::VERSION)?)
    }
}

macro_rules! extensions {
    ($($string:expr => $field:ident,)+) => {
        /// Contains data about the list of extensions.
        #[derive(Debug, Clone, Copy)]
        pub struct Extensions {
            $(
                pub $field: bool,
            )+
        }

        impl Extensions {
            /// Returns the list of extensions supported by the current context.
            ///
            /// *Safety*: the OpenGL context corresponding to `gl` must be current in the thread.
            pub unsafe fn parse(version: Version) -> Result<Extensions> {
                let strings: Vec<String> = if version >= Version::GL(3, 0) {
                    let mut num_extensions = 0;
                    gl::GetIntegerv(gl::NUM_EXTENSIONS, &mut num_extensions);

                    let mut strings = Vec::with_capacity(num_extensions as usize);
                    for i in 0..num_extensions {
                        let ext = gl::GetStringi(gl::EXTENSIONS, i as GLuint);
                        if !ext.is_null() {
                            let ext = ffi::CStr::from_ptr(ext as *const _);
                            strings.push(ext.to_string_lossy().into_owned());
                        }
                    }

                    strings
                } else {
                    parse_str(gl::EXTENSIONS)?
                        .split(' ')
                        .map(|e| e.to_owned())
                        .collect()
                };

                Ok(Extensions::from_strings(strings.iter().map(|v| &v[..])))
            }

            pub fn from_strings<'a, T>(strings: T) -> Extensions
            where
                T: Iterator<Item = &'a str>,
            {
                let mut extensions = Extensions {
                    $(
                        $field: false,
                    )+
                };

                for extension in strings {
                    match extension {
                        $(
                            $string => extensions.$field = true,
                        )+
                        _ => ()
                    }
                }

                extensions
            }
        }
    }
}

extensions! {
    "GL_ARB_multitexture" => gl_arb_multitexture,
    "GL_ARB_texture_cube_map" => gl_arb_texture_cube_map,
    "GL_ARB_texture_env_combine" => gl_arb_texture_env_combine,
    "GL_ARB_vertex_program" => gl_arb_vertex_program,
    "GL_ARB_fragment_program" => gl_arb_fragment_program,
    "GL_EXT_texture3D" => gl_ext_texture3d,
    "GL_EXT_stencil_wrap" => gl_ext_stencil_wrap,
    "GL_EXT_stencil_two_side" => gl_ext_stencil_two_side,
}

/// Represents the capabilities of the context.
///
/// Contrary to the state, these values never change.
#[derive(Debug)]
pub struct Capabilities {
    /// Returns a version or release number. Vendor-specific information may follow the version
    /// number.
    pub version: Version,

    /// The company responsible for this GL implementation.
    pub vendor: String,

    /// The name of the renderer. This name is typically specific to a particular
    /// configuration of a hardware platform.
    pub renderer: String,

    /// The list of OpenGL extensions support by this implementation.
    pub extensions: Extensions,

    /// The OpenGL context profile if available.
    pub profile: Option<Profile>,

    /// The number of texture units of the fixed-function pipeline, or the number of
    /// texture image units if fragment programs are available.
    pub max_texture_units: usize,
}

impl Capabilities {
    pub unsafe fn parse() -> Result<Capabilities> {
        let version = Version::parse()?;
        let extensions = Extensions::parse(version)?;

        Ok(Capabilities {
            version,
            vendor: parse_str(gl::VENDOR)?,
            renderer: parse_str(gl::RENDERER)?,
            profile: Capabilities::parse_profile(version),
            max_texture_units: Capabilities::parse_texture_units(&extensions),
            extensions,
        })
    }

    #[inline]
    pub fn has_multitexture(&self) -> bool {
        self.version >= Version::GL(1, 3) || self.extensions.gl_arb_multitexture
    }

    #[inline]
    pub fn has_cube_map(&self) -> bool {
        self.version >= Version::GL(1, 3) || self.extensions.gl_arb_texture_cube_map
    }

    #[inline]
    pub fn has_programs(&self) -> bool {
        self.extensions.gl_arb_vertex_program && self.extensions.gl_arb_fragment_program
    }

    #[inline]
    unsafe fn parse_profile(version: Version) -> Option<Profile> {
        if version >= Version::GL(3, 2) {
            let mut val = 0;
            gl::GetIntegerv(gl::CONTEXT_PROFILE_MASK, &mut val);
            let val = val as GLenum;
            if (val & gl::CONTEXT_COMPATIBILITY_PROFILE_BIT) != 0 {
                Some(Profile::Compatibility)
            } else if (val & gl::CONTEXT_CORE_PROFILE_BIT) != 0 {
                Some(Profile::Core)
            } else {
                None
            }
        } else {
            None
        }
    }

    #[inline]
    unsafe fn parse_texture_units(exts: &Extensions) -> usize {
        let pname = if exts.gl_arb_vertex_program && exts.gl_arb_fragment_program {
            gl::MAX_TEXTURE_IMAGE_UNITS
        } else {
            legacy::MAX_TEXTURE_UNITS
        };

        let mut val = 1;
        gl::GetIntegerv(pname, &mut val);
        cmp::max(val, 1) as usize
    }
}

#[inline]
unsafe fn parse_str(id: GLenum) -> Result<String> {
    let s = gl::GetString(id);
    if s.is_null() {
        bail!("[GL] String of {} is null.", id);
    }

    String::from_utf8(ffi::CStr::from_ptr(s as *const _).to_bytes().to_vec())
        .map_err(|_| format_err!("[GL] String of {} is malformed.", id))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn versions() {
        assert_eq!(
            Version::parse_str("2.1.2 NVIDIA 304.137").unwrap(),
            Version::GL(2, 1)
        );
        assert_eq!(
            Version::parse_str("OpenGL ES 3.0 Mesa 18.0").unwrap(),
            Version::ES(3, 0)
        );
        assert!(Version::parse_str("garbage").is_err());
        assert_eq!(Version::GL(3, 0).partial_cmp(&Version::ES(3, 0)), None);
    }

    #[test]
    fn extensions() {
        let exts = Extensions::from_strings(
            "GL_ARB_multitexture GL_EXT_stencil_two_side GL_NV_foo".split(' '),
        );

        assert!(exts.gl_arb_multitexture);
        assert!(exts.gl_ext_stencil_two_side);
        assert!(!exts.gl_arb_texture_cube_map);
    }
}
