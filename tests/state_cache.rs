extern crate env_logger;
extern crate matsys;
extern crate serde_json;

use matsys::prelude::*;

fn cache_with(caps: BackendCapabilities) -> StateCache<RecordingBackend> {
    let _ = env_logger::try_init();

    let mut cache = StateCache::new(RecordingBackend::new(caps));
    cache.backend_mut().clear();
    cache.reset_statistics();
    cache
}

fn cache() -> StateCache<RecordingBackend> {
    cache_with(BackendCapabilities::default())
}

#[test]
fn setters_are_idempotent() {
    let mut cache = cache();

    for _ in 0..2 {
        cache.alpha_func(Comparison::Greater, 0.25);
        cache.blend_func(
            BlendFactor::Value(BlendValue::SourceAlpha),
            BlendFactor::OneMinusValue(BlendValue::SourceAlpha),
        );
        cache.depth_func(Comparison::Less);
        cache.color_mask(false, false, false, true);
        cache.depth_mask(false);
        cache.cull_face(Face::Front);
        cache.front_face(FrontFaceOrder::Clockwise);
        cache.polygon_mode(PolygonMode::Line);
        cache.polygon_offset(-1.0, -1.0);
        cache.enable(Capability::Blend);
        cache.bind_texture(TextureTarget::Texture2D, 7);
        cache.stencil_func(Comparison::Equal, 1, 0xFF);
        cache.stencil_op(StencilOp::Keep, StencilOp::IncrementWrap, StencilOp::Keep);
    }

    assert_eq!(cache.backend().calls().len(), 13);
    assert_eq!(cache.statistics().issued, 13);
    assert_eq!(cache.statistics().skipped, 13);
}

#[test]
fn enable_disable_enable() {
    let mut cache = cache();

    cache.enable(Capability::CullFace);
    cache.disable(Capability::CullFace);
    cache.enable(Capability::CullFace);

    assert_eq!(
        cache.backend().calls(),
        &[
            Call::Enable(Capability::CullFace),
            Call::Disable(Capability::CullFace),
            Call::Enable(Capability::CullFace),
        ]
    );
}

#[test]
fn one_texturing_target_per_unit() {
    let mut cache = cache();
    let tex2d = Capability::Texture(TextureTarget::Texture2D);
    let cube = Capability::Texture(TextureTarget::CubeMap);

    cache.enable(tex2d);
    cache.enable(tex2d);
    cache.enable(cube);
    cache.disable(tex2d);

    assert_eq!(
        cache.backend().calls(),
        &[Call::Enable(tex2d), Call::Disable(tex2d), Call::Enable(cube)]
    );

    assert!(cache.state().is_enabled(cube));
    assert!(!cache.state().is_enabled(tex2d));

    cache.disable(cube);
    assert!(!cache.state().is_enabled(cube));
    assert_eq!(cache.backend().calls().len(), 4);
}

#[test]
fn texture_units_are_independent() {
    let mut cache = cache();

    cache.bind_texture(TextureTarget::Texture2D, 3);
    cache.enable(Capability::Texture(TextureTarget::Texture2D));
    cache.active_texture_unit(1);
    cache.bind_texture(TextureTarget::Texture2D, 3);
    cache.enable(Capability::Texture(TextureTarget::Texture2D));
    cache.active_texture_unit(0);
    cache.bind_texture(TextureTarget::Texture2D, 3);

    assert_eq!(cache.backend().calls().len(), 6);
    assert_eq!(
        cache.state().texture_units[1].texture(TextureTarget::Texture2D),
        3
    );
}

#[test]
fn matrix_slots_are_guarded() {
    let mut cache = cache();
    let m = RootMatrix::identity();

    cache.load_matrix(MatrixSlot::ModelView, &m);
    cache.load_matrix(MatrixSlot::ModelView, &m);
    assert_eq!(cache.backend().calls().len(), 1);

    // Same matrix into another slot.
    cache.load_matrix(MatrixSlot::Matrix(3), &m);
    assert_eq!(cache.backend().calls().len(), 2);

    m.set_matrix(Matrix::from_translation(1.0, 2.0, 3.0));
    cache.load_matrix(MatrixSlot::ModelView, &m);
    assert_eq!(cache.backend().calls().len(), 3);

    match cache.backend().calls()[2] {
        Call::LoadMatrix(MatrixSlot::ModelView, ref v) => {
            assert_eq!(&v[12..16], &[1.0, 2.0, 3.0, 1.0]);
        }
        ref other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn equal_ages_are_told_apart_by_id() {
    let mut cache = cache();
    let a = RootMatrix::identity();
    let b = RootMatrix::new(Matrix::from_scale(2.0, 2.0, 2.0));
    assert_eq!(a.age(), b.age());

    cache.load_matrix(MatrixSlot::Projection, &a);
    cache.load_matrix(MatrixSlot::Projection, &b);
    cache.load_matrix(MatrixSlot::Projection, &a);
    assert_eq!(cache.backend().calls().len(), 3);
}

#[test]
#[should_panic]
fn extra_matrix_out_of_range() {
    let mut cache = cache();
    cache.load_matrix(MatrixSlot::Matrix(32), &RootMatrix::identity());
}

#[test]
fn stencil_faces_are_independent() {
    let mut cache = cache();

    cache.active_stencil_face(StencilFace::Back);
    cache.stencil_func(Comparison::Equal, 1, 0xFF);
    cache.active_stencil_face(StencilFace::Front);
    cache.stencil_func(Comparison::Always, 0, !0);
    cache.stencil_func(Comparison::Equal, 1, 0xFF);

    assert_eq!(
        cache.backend().calls(),
        &[
            Call::ActiveStencilFace(StencilFace::Back),
            Call::StencilFunc(Comparison::Equal, 1, 0xFF),
            Call::ActiveStencilFace(StencilFace::Front),
            Call::StencilFunc(Comparison::Equal, 1, 0xFF),
        ]
    );

    assert_eq!(cache.state().stencil[1].func, Comparison::Equal);
    assert_eq!(cache.state().stencil[0].func, Comparison::Equal);
}

#[test]
fn two_sided_stencil_without_support() {
    let mut cache = cache_with(BackendCapabilities {
        texture_units: 4,
        two_sided_stencil: false,
    });
    assert!(!cache.supports_two_sided_stencil());

    cache.enable(Capability::StencilTestTwoSide);
    cache.enable(Capability::StencilTestTwoSide);
    cache.active_stencil_face(StencilFace::Back);

    assert!(cache.backend().calls().is_empty());
    assert!(cache.state().is_enabled(Capability::StencilTestTwoSide));
    assert_eq!(cache.state().active_stencil_face, StencilFace::Back);

    cache.stencil_op(StencilOp::Keep, StencilOp::DecrementWrap, StencilOp::Keep);
    assert_eq!(cache.backend().calls().len(), 1);
    assert_eq!(cache.state().stencil[1].depth_fail, StencilOp::DecrementWrap);
    assert_eq!(cache.state().stencil[0].depth_fail, StencilOp::Keep);
}

#[test]
fn single_sided_stencil_shadows_both_faces() {
    let mut cache = cache_with(BackendCapabilities {
        texture_units: 4,
        two_sided_stencil: false,
    });

    cache.active_stencil_face(StencilFace::Back);
    cache.stencil_op(StencilOp::Keep, StencilOp::DecrementWrap, StencilOp::Keep);
    cache.active_stencil_face(StencilFace::Front);
    cache.stencil_op(StencilOp::Keep, StencilOp::Keep, StencilOp::Keep);

    // The context has one stencil state, but the front face still holds its
    // default in the shadow copy, so the second op is dropped.
    assert_eq!(
        cache.backend().calls(),
        &[Call::StencilOp(
            StencilOp::Keep,
            StencilOp::DecrementWrap,
            StencilOp::Keep
        )]
    );

    // Staying on the front face keeps the shadow copy and the context in sync.
    cache.stencil_op(StencilOp::Keep, StencilOp::IncrementWrap, StencilOp::Keep);
    cache.stencil_op(StencilOp::Keep, StencilOp::Keep, StencilOp::Keep);
    assert_eq!(cache.backend().calls().len(), 3);
}

#[test]
fn material_values_feed_the_cache() {
    let mut cache = cache();

    // `One`, `None` is the default blend function.
    cache.blend_func(
        MaterialBlendFactor::One.into(),
        MaterialBlendFactor::None.into(),
    );
    cache.front_face(Winding::CounterClockwise.into());
    assert!(cache.backend().calls().is_empty());

    cache.blend_func(
        MaterialBlendFactor::SourceAlpha.into(),
        MaterialBlendFactor::OneMinusSourceAlpha.into(),
    );
    cache.front_face(Winding::Clockwise.into());
    assert_eq!(
        cache.backend().calls(),
        &[
            Call::BlendFunc(
                BlendFactor::Value(BlendValue::SourceAlpha),
                BlendFactor::OneMinusValue(BlendValue::SourceAlpha)
            ),
            Call::FrontFace(FrontFaceOrder::Clockwise),
        ]
    );
}

#[test]
fn two_sided_stencil_can_be_switched_off() {
    let params = VideoParams::from_json(r#"{ "two_sided_stencil": false }"#).unwrap();
    let cache = StateCache::with_params(RecordingBackend::default(), params);

    assert!(!cache.supports_two_sided_stencil());
    assert_eq!(
        cache
            .backend()
            .count(|v| *v == Call::Disable(Capability::StencilTestTwoSide)),
        0
    );
}

#[test]
fn reset_restores_defaults() {
    let mut cache = cache();
    let m = RootMatrix::identity();

    cache.enable(Capability::Blend);
    cache.disable(Capability::DepthTest);
    cache.depth_func(Comparison::Greater);
    cache.active_texture_unit(3);
    cache.bind_texture(TextureTarget::CubeMap, 9);
    cache.enable(Capability::TextureGen(TexCoord::R));
    cache.load_matrix(MatrixSlot::ModelView, &m);

    cache.reset();
    assert_eq!(cache.state(), &PipelineState::new(cache.texture_units()));
    assert_eq!(cache.state().active_texture_unit, 0);
    assert!(cache.state().is_enabled(Capability::DepthTest));
    assert!(!cache.state().is_enabled(Capability::Blend));

    // Everything matches the defaults now, so nothing is issued.
    cache.backend_mut().clear();
    cache.depth_func(Comparison::LessOrEqual);
    cache.enable(Capability::DepthTest);
    cache.disable(Capability::Blend);
    cache.active_texture_unit(0);
    cache.bind_texture(TextureTarget::Texture2D, 0);
    assert!(cache.backend().calls().is_empty());

    // Loaded matrices are forgotten.
    cache.load_matrix(MatrixSlot::ModelView, &m);
    assert_eq!(cache.backend().calls().len(), 1);
}

#[test]
fn reset_touches_every_unit() {
    let mut cache = cache_with(BackendCapabilities {
        texture_units: 4,
        two_sided_stencil: true,
    });
    cache.reset();

    let b = cache.backend();
    for unit in 1..4 {
        assert_eq!(b.count(|v| *v == Call::ActiveTexture(unit)), 1);
    }

    assert_eq!(b.count(|v| *v == Call::ActiveTexture(0)), 2);
    assert_eq!(b.count(|v| *v == Call::BindTexture(TextureTarget::CubeMap, 0)), 4);
    assert_eq!(
        b.count(|v| *v == Call::Disable(Capability::TextureGen(TexCoord::Q))),
        4
    );
    assert_eq!(b.count(|v| *v == Call::Enable(Capability::DepthTest)), 1);
    assert_eq!(b.count(|v| *v == Call::StencilFunc(Comparison::Always, 0, !0)), 2);
    assert_eq!(b.count(|v| *v == Call::ActiveStencilFace(StencilFace::Front)), 2);
    assert_eq!(
        b.count(|v| match *v {
            Call::LoadMatrix(..) => true,
            _ => false,
        }),
        0
    );
    assert_eq!(b.calls().last(), Some(&Call::ActiveTexture(0)));
}

#[test]
fn headless_backend() {
    let mut cache = StateCache::new(matsys::video::backends::new_headless());
    cache.enable(Capability::Fog);
    cache.enable(Capability::Fog);

    assert!(cache.state().is_enabled(Capability::Fog));
    assert_eq!(cache.statistics().issued, 1);
    assert!(cache.check().is_ok());
}

#[test]
fn snapshot_as_json() {
    let mut cache = cache();
    cache.enable(Capability::AlphaTest);
    cache.active_texture_unit(2);
    cache.enable(Capability::Texture(TextureTarget::Texture3D));

    let json = serde_json::to_string_pretty(cache.state()).unwrap();
    let state: PipelineState = serde_json::from_str(&json).unwrap();

    assert_eq!(&state, cache.state());
    assert!(state.is_enabled(Capability::AlphaTest));
    assert!(state.is_enabled(Capability::Texture(TextureTarget::Texture3D)));
}
