//! The shadow copy of the fixed-function pipeline state.

use smallvec::SmallVec;

use super::types::*;
use crate::video::matrix::{Age, MatrixId};
use crate::video::MAX_TEXTURE_UNITS;

/// The stencil state of one face.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct StencilState {
    pub func: Comparison,
    pub reference: i32,
    pub mask: u32,
    pub fail: StencilOp,
    pub depth_fail: StencilOp,
    pub depth_pass: StencilOp,
}

impl Default for StencilState {
    fn default() -> Self {
        StencilState {
            func: Comparison::Always,
            reference: 0,
            mask: !0,
            fail: StencilOp::Keep,
            depth_fail: StencilOp::Keep,
            depth_pass: StencilOp::Keep,
        }
    }
}

/// The state of one texture unit.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TexUnitState {
    /// The bound texture object per `TextureTarget`, 0 if nothing is bound.
    pub textures: [u32; 4],
    /// The enabled texturing target. At most one target is enabled at a time.
    pub target: Option<TextureTarget>,
    /// Texture coordinate generation per `TexCoord`.
    pub texgen: [bool; 4],
}

impl TexUnitState {
    #[inline]
    pub fn texture(&self, target: TextureTarget) -> u32 {
        self.textures[target.index()]
    }
}

/// Identifies the contents of a matrix slot.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct LoadedMatrix {
    pub id: MatrixId,
    pub age: Age,
}

/// Everything the state cache knows about the pipeline.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PipelineState {
    pub active_texture_unit: usize,
    pub alpha_func: Comparison,
    pub alpha_ref: f32,
    pub blend_src: BlendFactor,
    pub blend_dst: BlendFactor,
    pub depth_func: Comparison,
    pub active_stencil_face: StencilFace,
    /// Indexed by `StencilFace::index`.
    pub stencil: [StencilState; 2],
    pub color_mask: [bool; 4],
    pub depth_mask: bool,
    pub cull_face: Face,
    pub front_face: FrontFaceOrder,
    pub polygon_mode: PolygonMode,
    pub polygon_offset: (f32, f32),
    /// Indexed by `Capability::flag_index`.
    pub capabilities: [bool; NUM_CAPABILITY_FLAGS],
    pub texture_units: SmallVec<[TexUnitState; MAX_TEXTURE_UNITS]>,
    /// Indexed by `MatrixSlot::index`.
    pub loaded_matrices: Vec<Option<LoadedMatrix>>,
}

impl PipelineState {
    /// Creates the default state for a context with `texture_units` units.
    pub fn new(texture_units: usize) -> Self {
        let mut capabilities = [false; NUM_CAPABILITY_FLAGS];
        for (flag, cap) in capabilities.iter_mut().zip(Capability::FLAGS.iter()) {
            *flag = *cap == Capability::DepthTest;
        }

        PipelineState {
            active_texture_unit: 0,
            alpha_func: Comparison::Always,
            alpha_ref: 0.0,
            blend_src: BlendFactor::One,
            blend_dst: BlendFactor::Zero,
            depth_func: Comparison::LessOrEqual,
            active_stencil_face: StencilFace::Front,
            stencil: [StencilState::default(); 2],
            color_mask: [true; 4],
            depth_mask: true,
            cull_face: Face::Back,
            front_face: FrontFaceOrder::CounterClockwise,
            polygon_mode: PolygonMode::Fill,
            polygon_offset: (0.0, 0.0),
            capabilities,
            texture_units: SmallVec::from_elem(TexUnitState::default(), texture_units),
            loaded_matrices: vec![None; NUM_MATRIX_SLOTS],
        }
    }

    /// Whether `cap` is enabled. Per-unit capabilities are looked up in the
    /// active texture unit.
    pub fn is_enabled(&self, cap: Capability) -> bool {
        match cap {
            Capability::TextureGen(coord) => self.active_unit().texgen[coord.index()],
            Capability::Texture(target) => self.active_unit().target == Some(target),
            _ => cap
                .flag_index()
                .map(|i| self.capabilities[i])
                .unwrap_or(false),
        }
    }

    #[inline]
    pub fn active_unit(&self) -> &TexUnitState {
        &self.texture_units[self.active_texture_unit]
    }

    #[inline]
    pub fn active_stencil(&self) -> &StencilState {
        &self.stencil[self.active_stencil_face.index()]
    }

    /// The matrix last loaded into `slot`, if any.
    #[inline]
    pub fn loaded_matrix(&self, slot: MatrixSlot) -> Option<LoadedMatrix> {
        self.loaded_matrices[slot.index()]
    }
}

/// Counts the setter calls that reached the backend and the ones that were
/// dropped because they were redundant.
///
/// A setter counts once even if it makes several backend calls, e.g. switching
/// the texturing target of a unit. `tex_env` is never cached and always counts
/// as issued.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub issued: u64,
    pub skipped: u64,
}

impl Statistics {
    /// The share of calls that were dropped, in `[0, 1]`.
    pub fn skip_ratio(&self) -> f32 {
        let total = self.issued + self.skipped;
        if total == 0 {
            0.0
        } else {
            self.skipped as f32 / total as f32
        }
    }
}
