extern crate matsys;

use matsys::prelude::*;

fn model_view_loads(cache: &StateCache<RecordingBackend>) -> usize {
    cache
        .backend()
        .count(|v| match *v {
            Call::LoadMatrix(MatrixSlot::ModelView, _) => true,
            _ => false,
        })
}

#[test]
fn push_and_pop() {
    let mut set = MatrixSet::new();
    set.translate(MatrixName::ModelToWorld, 1.0, 0.0, 0.0);

    set.push_matrix(MatrixName::ModelToWorld);
    set.scale(MatrixName::ModelToWorld, 4.0);
    let age = set.dep_rel_matrix(MatrixName::ModelToWorld).age();

    assert!(set.pop_matrix(MatrixName::ModelToWorld));
    assert_eq!(
        set.matrix(MatrixName::ModelToWorld),
        Matrix::from_translation(1.0, 0.0, 0.0)
    );
    assert_eq!(set.dep_rel_matrix(MatrixName::ModelToWorld).age(), age + 1);
    assert_eq!(set.stack_depth(MatrixName::ModelToWorld), 0);
    assert!(!set.pop_matrix(MatrixName::ModelToWorld));
}

#[test]
fn inverses_follow_their_roots() {
    let mut set = MatrixSet::new();
    set.translate(MatrixName::WorldToView, 0.0, -2.0, 0.0);

    let p = set
        .matrix_inv(MatrixName::WorldToView)
        .transform_point([0.0, -2.0, 0.0]);
    assert_eq!(p, [0.0, 0.0, 0.0]);

    set.set_matrix(MatrixName::WorldToView, Matrix::IDENTITY);
    assert_eq!(set.matrix_inv(MatrixName::WorldToView), Matrix::IDENTITY);
    assert_eq!(set.matrix_inv(MatrixName::Projection), Matrix::IDENTITY);
}

#[test]
fn upload_in_steady_state() {
    let mut cache = StateCache::new(RecordingBackend::default());
    let mut set = MatrixSet::new();
    set.set_matrix(
        MatrixName::Projection,
        Matrix::perspective(67.5, 4.0 / 3.0, 1.0, 0.0),
    );

    cache.backend_mut().clear();
    set.upload(&mut cache);
    assert_eq!(cache.backend().calls().len(), 2);

    cache.backend_mut().clear();
    for _ in 0..10 {
        set.upload(&mut cache);
    }
    assert!(cache.backend().calls().is_empty());

    set.rotate_z(MatrixName::ModelToWorld, 45.0);
    set.upload(&mut cache);
    assert_eq!(model_view_loads(&cache), 1);
    assert_eq!(cache.backend().calls().len(), 1);
}

#[test]
fn draw_loop() {
    let mut cache = StateCache::new(RecordingBackend::default());
    let mut set = MatrixSet::new();
    cache.backend_mut().clear();
    cache.reset_statistics();

    // Two frames of a fixed-function pass over three meshes that share a material.
    for _ in 0..2 {
        set.set_matrix(MatrixName::WorldToView, Matrix::from_translation(0.0, 0.0, -10.0));

        for mesh in 0..3 {
            set.push_matrix(MatrixName::ModelToWorld);
            set.translate(MatrixName::ModelToWorld, mesh as f32, 0.0, 0.0);

            cache.active_texture_unit(0);
            cache.enable(Capability::Texture(TextureTarget::Texture2D));
            cache.bind_texture(TextureTarget::Texture2D, 1);
            cache.tex_env(
                TexEnvTarget::Environment,
                TexEnvParam::Mode,
                TexEnvMode::Modulate,
            );
            cache.enable(Capability::Blend);
            cache.blend_func(
                BlendFactor::Value(BlendValue::SourceAlpha),
                BlendFactor::OneMinusValue(BlendValue::SourceAlpha),
            );
            set.upload(&mut cache);

            set.pop_matrix(MatrixName::ModelToWorld);
        }
    }

    // Every mesh has its own model-view matrix.
    assert_eq!(model_view_loads(&cache), 6);

    let stats = cache.statistics();
    assert!(stats.skipped > stats.issued);
}

#[test]
fn derived_from_shared_roots() {
    let set = MatrixSet::new();
    let model = set.dep_rel_matrix(MatrixName::ModelToWorld).clone();
    let normal = InverseMatrix::new(model.clone());

    model.scale(2.0);
    assert_eq!(normal.get(), Matrix::from_scale(0.5, 0.5, 0.5));
    assert_eq!(
        set.matrix(MatrixName::ModelToWorld),
        Matrix::from_scale(2.0, 2.0, 2.0)
    );
}
