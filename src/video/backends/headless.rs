use super::super::state::types::*;
use super::{Backend, BackendCapabilities};

/// A backend without any context behind it. Every call is dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeadlessBackend {
    capabilities: BackendCapabilities,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        HeadlessBackend::default()
    }

    /// Pretends to be a context with the given capabilities.
    pub fn with_capabilities(capabilities: BackendCapabilities) -> Self {
        HeadlessBackend { capabilities }
    }
}

impl Backend for HeadlessBackend {
    fn capabilities(&self) -> BackendCapabilities {
        self.capabilities
    }

    fn active_texture(&mut self, _: usize) {}

    fn alpha_func(&mut self, _: Comparison, _: f32) {}

    fn blend_func(&mut self, _: BlendFactor, _: BlendFactor) {}

    fn depth_func(&mut self, _: Comparison) {}

    fn active_stencil_face(&mut self, _: StencilFace) {}

    fn stencil_func(&mut self, _: Comparison, _: i32, _: u32) {}

    fn stencil_op(&mut self, _: StencilOp, _: StencilOp, _: StencilOp) {}

    fn color_mask(&mut self, _: [bool; 4]) {}

    fn depth_mask(&mut self, _: bool) {}

    fn cull_face(&mut self, _: Face) {}

    fn front_face(&mut self, _: FrontFaceOrder) {}

    fn polygon_mode(&mut self, _: PolygonMode) {}

    fn polygon_offset(&mut self, _: f32, _: f32) {}

    fn enable(&mut self, _: Capability) {}

    fn disable(&mut self, _: Capability) {}

    fn bind_texture(&mut self, _: TextureTarget, _: u32) {}

    fn tex_env(&mut self, _: TexEnvTarget, _: TexEnvParam, _: TexEnvValue) {}

    fn load_matrix(&mut self, _: MatrixSlot, _: &[f32; 16]) {}
}
