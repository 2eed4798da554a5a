use super::super::state::types::*;
use super::{Backend, BackendCapabilities};

/// A single call that reached a backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Call {
    ActiveTexture(usize),
    AlphaFunc(Comparison, f32),
    BlendFunc(BlendFactor, BlendFactor),
    DepthFunc(Comparison),
    ActiveStencilFace(StencilFace),
    StencilFunc(Comparison, i32, u32),
    StencilOp(StencilOp, StencilOp, StencilOp),
    ColorMask([bool; 4]),
    DepthMask(bool),
    CullFace(Face),
    FrontFace(FrontFaceOrder),
    PolygonMode(PolygonMode),
    PolygonOffset(f32, f32),
    Enable(Capability),
    Disable(Capability),
    BindTexture(TextureTarget, u32),
    TexEnv(TexEnvTarget, TexEnvParam, TexEnvValue),
    LoadMatrix(MatrixSlot, [f32; 16]),
}

/// A backend that keeps every call it receives, in order.
///
/// ```rust
/// use matsys::prelude::*;
///
/// let mut cache = StateCache::new(RecordingBackend::default());
/// cache.backend_mut().clear();
///
/// cache.depth_func(Comparison::Less);
/// cache.depth_func(Comparison::Less);
/// assert_eq!(cache.backend().calls(), &[Call::DepthFunc(Comparison::Less)]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct RecordingBackend {
    capabilities: BackendCapabilities,
    calls: Vec<Call>,
}

impl RecordingBackend {
    pub fn new(capabilities: BackendCapabilities) -> Self {
        RecordingBackend {
            capabilities,
            calls: Vec::new(),
        }
    }

    #[inline]
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Counts the recorded calls that match `predicate`.
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Call) -> bool,
    {
        self.calls.iter().filter(|v| predicate(v)).count()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    #[inline]
    fn push(&mut self, call: Call) {
        self.calls.push(call);
    }
}

impl Backend for RecordingBackend {
    fn capabilities(&self) -> BackendCapabilities {
        self.capabilities
    }

    fn active_texture(&mut self, unit: usize) {
        self.push(Call::ActiveTexture(unit));
    }

    fn alpha_func(&mut self, func: Comparison, reference: f32) {
        self.push(Call::AlphaFunc(func, reference));
    }

    fn blend_func(&mut self, src: BlendFactor, dst: BlendFactor) {
        self.push(Call::BlendFunc(src, dst));
    }

    fn depth_func(&mut self, func: Comparison) {
        self.push(Call::DepthFunc(func));
    }

    fn active_stencil_face(&mut self, face: StencilFace) {
        self.push(Call::ActiveStencilFace(face));
    }

    fn stencil_func(&mut self, func: Comparison, reference: i32, mask: u32) {
        self.push(Call::StencilFunc(func, reference, mask));
    }

    fn stencil_op(&mut self, fail: StencilOp, depth_fail: StencilOp, depth_pass: StencilOp) {
        self.push(Call::StencilOp(fail, depth_fail, depth_pass));
    }

    fn color_mask(&mut self, mask: [bool; 4]) {
        self.push(Call::ColorMask(mask));
    }

    fn depth_mask(&mut self, flag: bool) {
        self.push(Call::DepthMask(flag));
    }

    fn cull_face(&mut self, face: Face) {
        self.push(Call::CullFace(face));
    }

    fn front_face(&mut self, order: FrontFaceOrder) {
        self.push(Call::FrontFace(order));
    }

    fn polygon_mode(&mut self, mode: PolygonMode) {
        self.push(Call::PolygonMode(mode));
    }

    fn polygon_offset(&mut self, factor: f32, units: f32) {
        self.push(Call::PolygonOffset(factor, units));
    }

    fn enable(&mut self, cap: Capability) {
        self.push(Call::Enable(cap));
    }

    fn disable(&mut self, cap: Capability) {
        self.push(Call::Disable(cap));
    }

    fn bind_texture(&mut self, target: TextureTarget, texture: u32) {
        self.push(Call::BindTexture(target, texture));
    }

    fn tex_env(&mut self, target: TexEnvTarget, param: TexEnvParam, value: TexEnvValue) {
        self.push(Call::TexEnv(target, param, value));
    }

    fn load_matrix(&mut self, slot: MatrixSlot, matrix: &[f32; 16]) {
        self.push(Call::LoadMatrix(slot, *matrix));
    }
}
