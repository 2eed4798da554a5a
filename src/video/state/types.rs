//! The typed values that can be pushed into the fixed-function pipeline.

use crate::video::MAX_EXTRA_MATRICES;

/// A pixel-wise comparison function.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Comparison {
    Never,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
    Equal,
    NotEqual,
    Always,
}

/// Blend values.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum BlendValue {
    SourceColor,
    SourceAlpha,
    DestinationColor,
    DestinationAlpha,
}

/// Blend factors.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum BlendFactor {
    Zero,
    One,
    Value(BlendValue),
    OneMinusValue(BlendValue),
    /// `min(As, 1 - Ad)`, only meaningful as source factor.
    SourceAlphaSaturate,
}

/// The blend factors of a material. `None` means the material does not blend,
/// and maps to `BlendFactor::Zero`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum MaterialBlendFactor {
    None,
    Zero,
    One,
    DestinationColor,
    SourceColor,
    OneMinusDestinationColor,
    OneMinusSourceColor,
    DestinationAlpha,
    SourceAlpha,
    OneMinusDestinationAlpha,
    OneMinusSourceAlpha,
}

impl From<MaterialBlendFactor> for BlendFactor {
    fn from(factor: MaterialBlendFactor) -> Self {
        match factor {
            MaterialBlendFactor::None => BlendFactor::Zero,
            MaterialBlendFactor::Zero => BlendFactor::Zero,
            MaterialBlendFactor::One => BlendFactor::One,
            MaterialBlendFactor::DestinationColor => BlendFactor::Value(BlendValue::DestinationColor),
            MaterialBlendFactor::SourceColor => BlendFactor::Value(BlendValue::SourceColor),
            MaterialBlendFactor::OneMinusDestinationColor => {
                BlendFactor::OneMinusValue(BlendValue::DestinationColor)
            }
            MaterialBlendFactor::OneMinusSourceColor => {
                BlendFactor::OneMinusValue(BlendValue::SourceColor)
            }
            MaterialBlendFactor::DestinationAlpha => BlendFactor::Value(BlendValue::DestinationAlpha),
            MaterialBlendFactor::SourceAlpha => BlendFactor::Value(BlendValue::SourceAlpha),
            MaterialBlendFactor::OneMinusDestinationAlpha => {
                BlendFactor::OneMinusValue(BlendValue::DestinationAlpha)
            }
            MaterialBlendFactor::OneMinusSourceAlpha => {
                BlendFactor::OneMinusValue(BlendValue::SourceAlpha)
            }
        }
    }
}

/// The vertex order of a mesh's front-facing triangles.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

impl From<Winding> for FrontFaceOrder {
    fn from(winding: Winding) -> Self {
        match winding {
            Winding::Clockwise => FrontFaceOrder::Clockwise,
            Winding::CounterClockwise => FrontFaceOrder::CounterClockwise,
        }
    }
}

/// Specify whether front- or back-facing polygons are culled.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Face {
    Front,
    Back,
    FrontAndBack,
}

/// The stencil face that `stencil_func` and `stencil_op` apply to when
/// two-sided stencil is in use.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum StencilFace {
    Front,
    Back,
}

impl StencilFace {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            StencilFace::Front => 0,
            StencilFace::Back => 1,
        }
    }
}

/// Define front- and back-facing polygons.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum FrontFaceOrder {
    Clockwise,
    CounterClockwise,
}

/// How polygons are rasterized.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum PolygonMode {
    Fill,
    Line,
    Point,
}

impl PolygonMode {
    /// The capability that enables polygon offset for this rasterization mode.
    pub fn offset_capability(self) -> Capability {
        match self {
            PolygonMode::Fill => Capability::PolygonOffsetFill,
            PolygonMode::Line => Capability::PolygonOffsetLine,
            PolygonMode::Point => Capability::PolygonOffsetPoint,
        }
    }
}

/// The action taken on the stencil buffer.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum StencilOp {
    Keep,
    Zero,
    Replace,
    Increment,
    IncrementWrap,
    Decrement,
    DecrementWrap,
    Invert,
}

/// The texturing targets of a texture unit.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum TextureTarget {
    Texture1D,
    Texture2D,
    Texture3D,
    CubeMap,
}

impl TextureTarget {
    pub const ALL: [TextureTarget; 4] = [
        TextureTarget::Texture1D,
        TextureTarget::Texture2D,
        TextureTarget::Texture3D,
        TextureTarget::CubeMap,
    ];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            TextureTarget::Texture1D => 0,
            TextureTarget::Texture2D => 1,
            TextureTarget::Texture3D => 2,
            TextureTarget::CubeMap => 3,
        }
    }
}

/// The texture coordinates that can be generated.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum TexCoord {
    S,
    T,
    R,
    Q,
}

impl TexCoord {
    pub const ALL: [TexCoord; 4] = [TexCoord::S, TexCoord::T, TexCoord::R, TexCoord::Q];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            TexCoord::S => 0,
            TexCoord::T => 1,
            TexCoord::R => 2,
            TexCoord::Q => 3,
        }
    }
}

/// The number of capabilities that are tracked by a single global flag.
pub const NUM_CAPABILITY_FLAGS: usize = 22;

/// Everything that can be passed to `enable` and `disable`.
///
/// Texture generation and texturing targets are per texture unit and apply to
/// the active unit. Everything else is global.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Capability {
    AlphaTest,
    AutoNormal,
    Blend,
    ColorMaterial,
    CullFace,
    DepthTest,
    Dither,
    Fog,
    Lighting,
    LineSmooth,
    LineStipple,
    LogicOp,
    Normalize,
    PointSmooth,
    PolygonSmooth,
    PolygonStipple,
    PolygonOffsetFill,
    PolygonOffsetLine,
    PolygonOffsetPoint,
    ScissorTest,
    StencilTest,
    /// Separate stencil state for front and back faces, needs
    /// `GL_EXT_stencil_two_side`.
    StencilTestTwoSide,
    TextureGen(TexCoord),
    Texture(TextureTarget),
}

impl Capability {
    /// All capabilities with a global flag, in flag order.
    pub const FLAGS: [Capability; NUM_CAPABILITY_FLAGS] = [
        Capability::AlphaTest,
        Capability::AutoNormal,
        Capability::Blend,
        Capability::ColorMaterial,
        Capability::CullFace,
        Capability::DepthTest,
        Capability::Dither,
        Capability::Fog,
        Capability::Lighting,
        Capability::LineSmooth,
        Capability::LineStipple,
        Capability::LogicOp,
        Capability::Normalize,
        Capability::PointSmooth,
        Capability::PolygonSmooth,
        Capability::PolygonStipple,
        Capability::PolygonOffsetFill,
        Capability::PolygonOffsetLine,
        Capability::PolygonOffsetPoint,
        Capability::ScissorTest,
        Capability::StencilTest,
        Capability::StencilTestTwoSide,
    ];

    /// The index of the global flag, or `None` for per-unit capabilities.
    pub fn flag_index(self) -> Option<usize> {
        let index = match self {
            Capability::AlphaTest => 0,
            Capability::AutoNormal => 1,
            Capability::Blend => 2,
            Capability::ColorMaterial => 3,
            Capability::CullFace => 4,
            Capability::DepthTest => 5,
            Capability::Dither => 6,
            Capability::Fog => 7,
            Capability::Lighting => 8,
            Capability::LineSmooth => 9,
            Capability::LineStipple => 10,
            Capability::LogicOp => 11,
            Capability::Normalize => 12,
            Capability::PointSmooth => 13,
            Capability::PolygonSmooth => 14,
            Capability::PolygonStipple => 15,
            Capability::PolygonOffsetFill => 16,
            Capability::PolygonOffsetLine => 17,
            Capability::PolygonOffsetPoint => 18,
            Capability::ScissorTest => 19,
            Capability::StencilTest => 20,
            Capability::StencilTestTwoSide => 21,
            Capability::TextureGen(_) | Capability::Texture(_) => return None,
        };

        Some(index)
    }
}

/// The number of matrix slots, see `MatrixSlot::index`.
pub const NUM_MATRIX_SLOTS: usize = 3 + MAX_EXTRA_MATRICES;

/// The matrix stacks that `load_matrix` can write into.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum MatrixSlot {
    ModelView,
    Projection,
    Texture,
    /// One of the generic program matrices `MATRIX0` .. `MATRIX31`.
    Matrix(u8),
}

impl MatrixSlot {
    /// # Panics
    ///
    /// Panics if a generic matrix is out of range.
    pub fn index(self) -> usize {
        match self {
            MatrixSlot::ModelView => 0,
            MatrixSlot::Projection => 1,
            MatrixSlot::Texture => 2,
            MatrixSlot::Matrix(n) => {
                assert!(
                    (n as usize) < MAX_EXTRA_MATRICES,
                    "matrix slot {} is out of range",
                    n
                );
                3 + n as usize
            }
        }
    }
}

/// The targets of a texture environment parameter.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum TexEnvTarget {
    Environment,
    FilterControl,
}

/// The texture environment parameters.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum TexEnvParam {
    Mode,
    Color,
    LodBias,
    CombineRgb,
    CombineAlpha,
    RgbScale,
    AlphaScale,
}

/// The texture functions selectable with `TexEnvParam::Mode`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum TexEnvMode {
    Modulate,
    Decal,
    Blend,
    Replace,
    Add,
    Combine,
}

impl TexEnvMode {
    /// The symbolic constant as it is passed to `glTexEnvi`.
    pub fn code(self) -> i32 {
        match self {
            TexEnvMode::Modulate => 0x2100,
            TexEnvMode::Decal => 0x2101,
            TexEnvMode::Blend => 0x0BE2,
            TexEnvMode::Replace => 0x1E01,
            TexEnvMode::Add => 0x0104,
            TexEnvMode::Combine => 0x8570,
        }
    }
}

/// A texture environment value, one variant per `glTexEnv*` entry point.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum TexEnvValue {
    Int(i32),
    Float(f32),
    Ints([i32; 4]),
    Floats([f32; 4]),
}

impl From<TexEnvMode> for TexEnvValue {
    fn from(mode: TexEnvMode) -> Self {
        TexEnvValue::Int(mode.code())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn flags_are_dense() {
        for (i, v) in Capability::FLAGS.iter().enumerate() {
            assert_eq!(v.flag_index(), Some(i));
        }

        assert_eq!(Capability::Texture(TextureTarget::CubeMap).flag_index(), None);
        assert_eq!(Capability::TextureGen(TexCoord::Q).flag_index(), None);
    }

    #[test]
    fn matrix_slots() {
        assert_eq!(MatrixSlot::ModelView.index(), 0);
        assert_eq!(MatrixSlot::Matrix(0).index(), 3);
        assert_eq!(MatrixSlot::Matrix(31).index(), NUM_MATRIX_SLOTS - 1);
    }

    #[test]
    #[should_panic]
    fn matrix_slot_out_of_range() {
        MatrixSlot::Matrix(32).index();
    }

    #[test]
    fn material_blend_factors() {
        assert_eq!(BlendFactor::from(MaterialBlendFactor::None), BlendFactor::Zero);
        assert_eq!(BlendFactor::from(MaterialBlendFactor::Zero), BlendFactor::Zero);
        assert_eq!(BlendFactor::from(MaterialBlendFactor::One), BlendFactor::One);
        assert_eq!(
            BlendFactor::from(MaterialBlendFactor::DestinationColor),
            BlendFactor::Value(BlendValue::DestinationColor)
        );
        assert_eq!(
            BlendFactor::from(MaterialBlendFactor::OneMinusSourceAlpha),
            BlendFactor::OneMinusValue(BlendValue::SourceAlpha)
        );
    }

    #[test]
    fn mesh_winding() {
        assert_eq!(
            FrontFaceOrder::from(Winding::Clockwise),
            FrontFaceOrder::Clockwise
        );
        assert_eq!(
            FrontFaceOrder::from(Winding::CounterClockwise),
            FrontFaceOrder::CounterClockwise
        );
    }

    #[test]
    fn offset_capabilities() {
        assert_eq!(
            PolygonMode::Line.offset_capability(),
            Capability::PolygonOffsetLine
        );
    }
}
