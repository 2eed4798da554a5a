use gl;
use gl::types::*;

use super::super::super::state::types::*;
use super::legacy;

impl From<Comparison> for GLenum {
    fn from(cmp: Comparison) -> Self {
        match cmp {
            Comparison::Never => gl::NEVER,
            Comparison::Less => gl::LESS,
            Comparison::LessOrEqual => gl::LEQUAL,
            Comparison::Greater => gl::GREATER,
            Comparison::GreaterOrEqual => gl::GEQUAL,
            Comparison::Equal => gl::EQUAL,
            Comparison::NotEqual => gl::NOTEQUAL,
            Comparison::Always => gl::ALWAYS,
        }
    }
}

impl From<BlendFactor> for GLenum {
    fn from(factor: BlendFactor) -> Self {
        match factor {
            BlendFactor::Zero => gl::ZERO,
            BlendFactor::One => gl::ONE,
            BlendFactor::Value(BlendValue::SourceColor) => gl::SRC_COLOR,
            BlendFactor::Value(BlendValue::SourceAlpha) => gl::SRC_ALPHA,
            BlendFactor::Value(BlendValue::DestinationColor) => gl::DST_COLOR,
            BlendFactor::Value(BlendValue::DestinationAlpha) => gl::DST_ALPHA,
            BlendFactor::OneMinusValue(BlendValue::SourceColor) => gl::ONE_MINUS_SRC_COLOR,
            BlendFactor::OneMinusValue(BlendValue::SourceAlpha) => gl::ONE_MINUS_SRC_ALPHA,
            BlendFactor::OneMinusValue(BlendValue::DestinationColor) => gl::ONE_MINUS_DST_COLOR,
            BlendFactor::OneMinusValue(BlendValue::DestinationAlpha) => gl::ONE_MINUS_DST_ALPHA,
            BlendFactor::SourceAlphaSaturate => gl::SRC_ALPHA_SATURATE,
        }
    }
}

impl From<Face> for GLenum {
    fn from(face: Face) -> Self {
        match face {
            Face::Front => gl::FRONT,
            Face::Back => gl::BACK,
            Face::FrontAndBack => gl::FRONT_AND_BACK,
        }
    }
}

impl From<StencilFace> for GLenum {
    fn from(face: StencilFace) -> Self {
        match face {
            StencilFace::Front => gl::FRONT,
            StencilFace::Back => gl::BACK,
        }
    }
}

impl From<FrontFaceOrder> for GLenum {
    fn from(order: FrontFaceOrder) -> Self {
        match order {
            FrontFaceOrder::Clockwise => gl::CW,
            FrontFaceOrder::CounterClockwise => gl::CCW,
        }
    }
}

impl From<PolygonMode> for GLenum {
    fn from(mode: PolygonMode) -> Self {
        match mode {
            PolygonMode::Fill => gl::FILL,
            PolygonMode::Line => gl::LINE,
            PolygonMode::Point => gl::POINT,
        }
    }
}

impl From<StencilOp> for GLenum {
    fn from(op: StencilOp) -> Self {
        match op {
            StencilOp::Keep => gl::KEEP,
            StencilOp::Zero => gl::ZERO,
            StencilOp::Replace => gl::REPLACE,
            StencilOp::Increment => gl::INCR,
            StencilOp::IncrementWrap => gl::INCR_WRAP,
            StencilOp::Decrement => gl::DECR,
            StencilOp::DecrementWrap => gl::DECR_WRAP,
            StencilOp::Invert => gl::INVERT,
        }
    }
}

impl From<TextureTarget> for GLenum {
    fn from(target: TextureTarget) -> Self {
        match target {
            TextureTarget::Texture1D => gl::TEXTURE_1D,
            TextureTarget::Texture2D => gl::TEXTURE_2D,
            TextureTarget::Texture3D => gl::TEXTURE_3D,
            TextureTarget::CubeMap => gl::TEXTURE_CUBE_MAP,
        }
    }
}

impl From<TexCoord> for GLenum {
    fn from(coord: TexCoord) -> Self {
        match coord {
            TexCoord::S => legacy::TEXTURE_GEN_S,
            TexCoord::T => legacy::TEXTURE_GEN_T,
            TexCoord::R => legacy::TEXTURE_GEN_R,
            TexCoord::Q => legacy::TEXTURE_GEN_Q,
        }
    }
}

impl From<Capability> for GLenum {
    fn from(cap: Capability) -> Self {
        match cap {
            Capability::AlphaTest => legacy::ALPHA_TEST,
            Capability::AutoNormal => legacy::AUTO_NORMAL,
            Capability::Blend => gl::BLEND,
            Capability::ColorMaterial => legacy::COLOR_MATERIAL,
            Capability::CullFace => gl::CULL_FACE,
            Capability::DepthTest => gl::DEPTH_TEST,
            Capability::Dither => gl::DITHER,
            Capability::Fog => legacy::FOG,
            Capability::Lighting => legacy::LIGHTING,
            Capability::LineSmooth => gl::LINE_SMOOTH,
            Capability::LineStipple => legacy::LINE_STIPPLE,
            Capability::LogicOp => gl::COLOR_LOGIC_OP,
            Capability::Normalize => legacy::NORMALIZE,
            Capability::PointSmooth => legacy::POINT_SMOOTH,
            Capability::PolygonSmooth => gl::POLYGON_SMOOTH,
            Capability::PolygonStipple => legacy::POLYGON_STIPPLE,
            Capability::PolygonOffsetFill => gl::POLYGON_OFFSET_FILL,
            Capability::PolygonOffsetLine => gl::POLYGON_OFFSET_LINE,
            Capability::PolygonOffsetPoint => gl::POLYGON_OFFSET_POINT,
            Capability::ScissorTest => gl::SCISSOR_TEST,
            Capability::StencilTest => gl::STENCIL_TEST,
            Capability::StencilTestTwoSide => legacy::STENCIL_TEST_TWO_SIDE_EXT,
            Capability::TextureGen(coord) => coord.into(),
            Capability::Texture(target) => target.into(),
        }
    }
}

impl From<MatrixSlot> for GLenum {
    fn from(slot: MatrixSlot) -> Self {
        match slot {
            MatrixSlot::ModelView => legacy::MODELVIEW,
            MatrixSlot::Projection => legacy::PROJECTION,
            MatrixSlot::Texture => legacy::TEXTURE,
            MatrixSlot::Matrix(n) => legacy::MATRIX0_ARB + GLenum::from(n),
        }
    }
}

impl From<TexEnvTarget> for GLenum {
    fn from(target: TexEnvTarget) -> Self {
        match target {
            TexEnvTarget::Environment => legacy::TEXTURE_ENV,
            TexEnvTarget::FilterControl => legacy::TEXTURE_FILTER_CONTROL,
        }
    }
}

impl From<TexEnvParam> for GLenum {
    fn from(param: TexEnvParam) -> Self {
        match param {
            TexEnvParam::Mode => legacy::TEXTURE_ENV_MODE,
            TexEnvParam::Color => legacy::TEXTURE_ENV_COLOR,
            TexEnvParam::LodBias => gl::TEXTURE_LOD_BIAS,
            TexEnvParam::CombineRgb => legacy::COMBINE_RGB,
            TexEnvParam::CombineAlpha => legacy::COMBINE_ALPHA,
            TexEnvParam::RgbScale => legacy::RGB_SCALE,
            TexEnvParam::AlphaScale => legacy::ALPHA_SCALE,
        }
    }
}
