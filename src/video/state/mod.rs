//! A shadow copy of the fixed-function pipeline state that drops redundant
//! state changes.
//!
//! Every setter compares the requested value with the shadow copy first. If they
//! are equal the call returns immediately, otherwise the shadow copy is updated
//! and exactly one call is forwarded to the [`Backend`](../backends/trait.Backend.html).
//! This only works as long as nobody else changes the pipeline state behind the
//! back of the cache; call [`reset`](struct.StateCache.html#method.reset) after
//! handing the context to foreign code.
//!
//! ```rust
//! use matsys::prelude::*;
//!
//! let mut cache = StateCache::new(RecordingBackend::default());
//! cache.backend_mut().clear();
//!
//! cache.active_texture_unit(1);
//! cache.enable(Capability::Texture(TextureTarget::Texture2D));
//! cache.enable(Capability::Texture(TextureTarget::CubeMap));
//!
//! assert_eq!(
//!     cache.backend().calls(),
//!     &[
//!         Call::ActiveTexture(1),
//!         Call::Enable(Capability::Texture(TextureTarget::Texture2D)),
//!         Call::Disable(Capability::Texture(TextureTarget::Texture2D)),
//!         Call::Enable(Capability::Texture(TextureTarget::CubeMap)),
//!     ]
//! );
//! ```

pub mod pipeline;
pub mod types;

pub mod prelude {
    pub use super::pipeline::{LoadedMatrix, PipelineState, Statistics, StencilState, TexUnitState};
    pub use super::types::*;
    pub use super::StateCache;
}

use std::cmp;

use self::pipeline::*;
use self::types::*;

use super::backends::Backend;
use super::errors::*;
use super::matrix::DepRelMatrix;
use super::settings::VideoParams;
use super::MAX_TEXTURE_UNITS;

/// The state cache of one rendering context.
pub struct StateCache<B: Backend> {
    backend: B,
    state: PipelineState,
    two_sided_stencil: bool,
    warned_two_sided_stencil: bool,
    counting: bool,
    statistics: Statistics,
}

impl<B: Backend> StateCache<B> {
    /// Creates a state cache with default settings and resets the pipeline.
    pub fn new(backend: B) -> Self {
        StateCache::with_params(backend, VideoParams::default())
    }

    /// Creates a state cache and resets the pipeline. `params` can only narrow down
    /// what the backend supports.
    pub fn with_params(backend: B, params: VideoParams) -> Self {
        let caps = backend.capabilities();

        let mut units = cmp::min(caps.texture_units, MAX_TEXTURE_UNITS);
        if let Some(v) = params.max_texture_units {
            units = cmp::min(units, v);
        }

        let mut cache = StateCache {
            backend,
            state: PipelineState::new(cmp::max(units, 1)),
            two_sided_stencil: caps.two_sided_stencil && params.two_sided_stencil,
            warned_two_sided_stencil: false,
            counting: params.statistics,
            statistics: Statistics::default(),
        };

        cache.reset();
        cache
    }

    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Direct access to the backend. Changing the pipeline state through it
    /// desynchronizes the cache until the next `reset`.
    #[inline]
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    #[inline]
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// The shadow copy of the pipeline state.
    #[inline]
    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    /// The number of texture units that are tracked.
    #[inline]
    pub fn texture_units(&self) -> usize {
        self.state.texture_units.len()
    }

    #[inline]
    pub fn supports_two_sided_stencil(&self) -> bool {
        self.two_sided_stencil
    }

    #[inline]
    pub fn statistics(&self) -> Statistics {
        self.statistics
    }

    #[inline]
    pub fn reset_statistics(&mut self) {
        self.statistics = Statistics::default();
    }

    /// Reports errors the backend has recorded since the last check.
    pub fn check(&mut self) -> Result<()> {
        self.backend.check()
    }

    /// Sets every piece of tracked state to its default, and pushes all of it to the
    /// backend unconditionally.
    ///
    /// Loaded matrices are only forgotten, the next `load_matrix` of every slot
    /// uploads again.
    pub fn reset(&mut self) {
        let units = self.state.texture_units.len();
        debug!("[StateCache] Resets pipeline state with {} texture units.", units);

        self.state = PipelineState::new(units);
        let state = self.state.clone();
        let b = &mut self.backend;

        b.active_texture(0);
        b.alpha_func(state.alpha_func, state.alpha_ref);
        b.blend_func(state.blend_src, state.blend_dst);
        b.depth_func(state.depth_func);

        for face in &[StencilFace::Front, StencilFace::Back] {
            if self.two_sided_stencil {
                b.active_stencil_face(*face);
            }

            let s = state.stencil[face.index()];
            b.stencil_func(s.func, s.reference, s.mask);
            b.stencil_op(s.fail, s.depth_fail, s.depth_pass);
        }

        if self.two_sided_stencil {
            b.active_stencil_face(state.active_stencil_face);
        }

        b.color_mask(state.color_mask);
        b.depth_mask(state.depth_mask);
        b.cull_face(state.cull_face);
        b.front_face(state.front_face);
        b.polygon_mode(state.polygon_mode);
        b.polygon_offset(state.polygon_offset.0, state.polygon_offset.1);

        for &cap in Capability::FLAGS.iter() {
            if cap == Capability::StencilTestTwoSide && !self.two_sided_stencil {
                continue;
            }

            if state.is_enabled(cap) {
                b.enable(cap);
            } else {
                b.disable(cap);
            }
        }

        for unit in 0..units {
            if unit != 0 {
                b.active_texture(unit);
            }

            for &target in TextureTarget::ALL.iter() {
                b.bind_texture(target, 0);
            }

            for &target in TextureTarget::ALL.iter() {
                b.disable(Capability::Texture(target));
            }

            for &coord in TexCoord::ALL.iter() {
                b.disable(Capability::TextureGen(coord));
            }
        }

        if units > 1 {
            b.active_texture(0);
        }
    }

    /// Selects the texture unit that `bind_texture`, texturing targets and texture
    /// coordinate generation apply to.
    ///
    /// # Panics
    ///
    /// Panics if `unit` is not below `texture_units()`.
    pub fn active_texture_unit(&mut self, unit: usize) {
        assert!(
            unit < self.state.texture_units.len(),
            "texture unit {} is out of range",
            unit
        );

        if self.state.active_texture_unit != unit {
            self.state.active_texture_unit = unit;
            self.backend.active_texture(unit);
            self.count(true);
        } else {
            self.count(false);
        }
    }

    pub fn alpha_func(&mut self, func: Comparison, reference: f32) {
        let s = &mut self.state;

        if s.alpha_func != func || s.alpha_ref != reference {
            s.alpha_func = func;
            s.alpha_ref = reference;
            self.backend.alpha_func(func, reference);
            self.count(true);
        } else {
            self.count(false);
        }
    }

    pub fn blend_func(&mut self, src: BlendFactor, dst: BlendFactor) {
        let s = &mut self.state;

        if s.blend_src != src || s.blend_dst != dst {
            s.blend_src = src;
            s.blend_dst = dst;
            self.backend.blend_func(src, dst);
            self.count(true);
        } else {
            self.count(false);
        }
    }

    pub fn depth_func(&mut self, func: Comparison) {
        if self.state.depth_func != func {
            self.state.depth_func = func;
            self.backend.depth_func(func);
            self.count(true);
        } else {
            self.count(false);
        }
    }

    /// Selects the face that `stencil_func` and `stencil_op` apply to.
    ///
    /// The selection is tracked even if the context has no two-sided stencil,
    /// but it is only forwarded to contexts that do.
    ///
    /// Without two-sided stencil the context has a single stencil state, while
    /// the shadow copy still keeps one per face. Selecting the other face and
    /// setting a value that face already holds is dropped, even if the real
    /// state was changed through the first face. Callers on such contexts should
    /// stay on `StencilFace::Front`.
    pub fn active_stencil_face(&mut self, face: StencilFace) {
        if self.state.active_stencil_face == face {
            self.count(false);
            return;
        }

        self.state.active_stencil_face = face;
        if self.two_sided_stencil {
            self.backend.active_stencil_face(face);
            self.count(true);
        } else {
            self.count(false);
        }
    }

    /// Sets the stencil test of the active stencil face.
    pub fn stencil_func(&mut self, func: Comparison, reference: i32, mask: u32) {
        let index = self.state.active_stencil_face.index();
        let s = &mut self.state.stencil[index];

        if s.func != func || s.reference != reference || s.mask != mask {
            s.func = func;
            s.reference = reference;
            s.mask = mask;
            self.backend.stencil_func(func, reference, mask);
            self.count(true);
        } else {
            self.count(false);
        }
    }

    /// Sets the stencil actions of the active stencil face.
    pub fn stencil_op(&mut self, fail: StencilOp, depth_fail: StencilOp, depth_pass: StencilOp) {
        let index = self.state.active_stencil_face.index();
        let s = &mut self.state.stencil[index];

        if s.fail != fail || s.depth_fail != depth_fail || s.depth_pass != depth_pass {
            s.fail = fail;
            s.depth_fail = depth_fail;
            s.depth_pass = depth_pass;
            self.backend.stencil_op(fail, depth_fail, depth_pass);
            self.count(true);
        } else {
            self.count(false);
        }
    }

    /// Enable or disable writing color elements into the color buffer.
    pub fn color_mask(&mut self, red: bool, green: bool, blue: bool, alpha: bool) {
        let mask = [red, green, blue, alpha];

        if self.state.color_mask != mask {
            self.state.color_mask = mask;
            self.backend.color_mask(mask);
            self.count(true);
        } else {
            self.count(false);
        }
    }

    /// Enable or disable writing into the depth buffer.
    pub fn depth_mask(&mut self, flag: bool) {
        if self.state.depth_mask != flag {
            self.state.depth_mask = flag;
            self.backend.depth_mask(flag);
            self.count(true);
        } else {
            self.count(false);
        }
    }

    /// Specify whether front- or back-facing polygons are culled. Culling itself
    /// is switched with `Capability::CullFace`.
    pub fn cull_face(&mut self, face: Face) {
        if self.state.cull_face != face {
            self.state.cull_face = face;
            self.backend.cull_face(face);
            self.count(true);
        } else {
            self.count(false);
        }
    }

    pub fn front_face(&mut self, order: FrontFaceOrder) {
        if self.state.front_face != order {
            self.state.front_face = order;
            self.backend.front_face(order);
            self.count(true);
        } else {
            self.count(false);
        }
    }

    pub fn polygon_mode(&mut self, mode: PolygonMode) {
        if self.state.polygon_mode != mode {
            self.state.polygon_mode = mode;
            self.backend.polygon_mode(mode);
            self.count(true);
        } else {
            self.count(false);
        }
    }

    pub fn polygon_offset(&mut self, factor: f32, units: f32) {
        if self.state.polygon_offset != (factor, units) {
            self.state.polygon_offset = (factor, units);
            self.backend.polygon_offset(factor, units);
            self.count(true);
        } else {
            self.count(false);
        }
    }

    /// Enables a capability.
    ///
    /// Only one texturing target can be enabled per texture unit. Enabling another
    /// one disables the current target first.
    pub fn enable(&mut self, cap: Capability) {
        let unit = self.state.active_texture_unit;

        match cap {
            Capability::TextureGen(coord) => {
                let v = &mut self.state.texture_units[unit].texgen[coord.index()];
                if !*v {
                    *v = true;
                    self.backend.enable(cap);
                    self.count(true);
                } else {
                    self.count(false);
                }
            }

            Capability::Texture(target) => {
                let tu = &mut self.state.texture_units[unit];
                match tu.target {
                    Some(v) if v == target => {
                        self.count(false);
                    }
                    Some(v) => {
                        tu.target = Some(target);
                        self.backend.disable(Capability::Texture(v));
                        self.backend.enable(cap);
                        self.count(true);
                    }
                    None => {
                        tu.target = Some(target);
                        self.backend.enable(cap);
                        self.count(true);
                    }
                }
            }

            _ => self.set_flag(cap, true),
        }
    }

    /// Disables a capability.
    ///
    /// Disabling a texturing target that is not the enabled one does nothing.
    pub fn disable(&mut self, cap: Capability) {
        let unit = self.state.active_texture_unit;

        match cap {
            Capability::TextureGen(coord) => {
                let v = &mut self.state.texture_units[unit].texgen[coord.index()];
                if *v {
                    *v = false;
                    self.backend.disable(cap);
                    self.count(true);
                } else {
                    self.count(false);
                }
            }

            Capability::Texture(target) => {
                let tu = &mut self.state.texture_units[unit];
                if tu.target == Some(target) {
                    tu.target = None;
                    self.backend.disable(cap);
                    self.count(true);
                } else {
                    self.count(false);
                }
            }

            _ => self.set_flag(cap, false),
        }
    }

    /// Binds `texture` to `target` of the active texture unit. `0` unbinds.
    pub fn bind_texture(&mut self, target: TextureTarget, texture: u32) {
        let unit = self.state.active_texture_unit;
        let v = &mut self.state.texture_units[unit].textures[target.index()];

        if *v != texture {
            *v = texture;
            self.backend.bind_texture(target, texture);
            self.count(true);
        } else {
            self.count(false);
        }
    }

    /// Sets a texture environment parameter of the active texture unit. The texture
    /// environment is not tracked, so this is always forwarded.
    pub fn tex_env<T>(&mut self, target: TexEnvTarget, param: TexEnvParam, value: T)
    where
        T: Into<TexEnvValue>,
    {
        self.backend.tex_env(target, param, value.into());
        self.count(true);
    }

    /// Loads `matrix` into `slot`.
    ///
    /// Matrices are told apart by their id and age, not by their contents. The
    /// matrix must be up to date, `DepRelMatrix::update` is not called here.
    pub fn load_matrix<M>(&mut self, slot: MatrixSlot, matrix: &M)
    where
        M: DepRelMatrix + ?Sized,
    {
        let loaded = LoadedMatrix {
            id: matrix.id(),
            age: matrix.age(),
        };

        let v = &mut self.state.loaded_matrices[slot.index()];
        if *v != Some(loaded) {
            *v = Some(loaded);

            trace!(
                "[StateCache] Loads {} at age {} into {:?}.",
                loaded.id,
                loaded.age,
                slot
            );

            self.backend
                .load_matrix(slot, &matrix.matrix().to_column_major());
            self.count(true);
        } else {
            self.count(false);
        }
    }

    fn set_flag(&mut self, cap: Capability, enabled: bool) {
        let index = match cap.flag_index() {
            Some(v) => v,
            None => return,
        };

        if self.state.capabilities[index] == enabled {
            self.count(false);
            return;
        }

        self.state.capabilities[index] = enabled;

        if cap == Capability::StencilTestTwoSide && !self.two_sided_stencil {
            if !self.warned_two_sided_stencil {
                warn!("[StateCache] Two-sided stencil is not supported by this context.");
                self.warned_two_sided_stencil = true;
            }

            self.count(false);
            return;
        }

        if enabled {
            self.backend.enable(cap);
        } else {
            self.backend.disable(cap);
        }

        self.count(true);
    }

    #[inline]
    fn count(&mut self, issued: bool) {
        if self.counting {
            if issued {
                self.statistics.issued += 1;
            } else {
                self.statistics.skipped += 1;
            }
        }
    }
}
