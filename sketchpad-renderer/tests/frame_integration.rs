//! Integration tests for frame rendering (sketchpad-renderer).
//!
//! Drives the headless renderer with real scenes and checks element
//! identity, minimal updates and the overlay.

use proptest::prelude::*;
use sketchpad_core::{Color, IdStrategy, Scene, Shape, ShapeId};
use sketchpad_renderer::{
    HeadlessRenderer, OverlaySurface, RendererConfig, VectorSurface,
};

/// Create a scene of `count` rectangles laid out on a diagonal.
fn diagonal_scene(count: usize, strategy: IdStrategy) -> Scene {
    let mut scene = Scene::new(strategy);
    for i in 0..count {
        #[allow(clippy::cast_precision_loss)]
        let offset = (i as f32) * 5.0;
        let id = scene.allocate_id();
        scene
            .add(
                Shape::rectangle(id, offset, offset, 20.0, 10.0, Color::RED).expect("rectangle"),
            )
            .expect("add shape");
    }
    scene
}

// ==========================================================================
// Element identity tests
// ==========================================================================

#[test]
fn test_document_order_follows_insertion() {
    let scene = diagonal_scene(3, IdStrategy::Sequential);
    let mut renderer = HeadlessRenderer::headless(RendererConfig::default());
    renderer.render(&scene).expect("render");

    let keys: Vec<_> = renderer.vector().elements().map(|e| e.key.clone()).collect();
    let ids: Vec<_> = scene.shapes().iter().map(|s| s.id().clone()).collect();
    assert_eq!(keys, ids);
}

#[test]
fn test_new_shape_appends_on_top_without_touching_others() {
    let mut scene = diagonal_scene(2, IdStrategy::Sequential);
    let mut renderer = HeadlessRenderer::headless(RendererConfig::default());
    renderer.render(&scene).expect("render");

    let id = scene.allocate_id();
    let circle = Shape::circle(id.clone(), 0.0, 0.0, 30.0, Color::GREEN).expect("circle");
    scene.add(circle).expect("add shape");
    let stats = renderer.render(&scene).expect("render");

    assert_eq!(stats.reconcile.created, 1);
    assert_eq!(stats.reconcile.attribute_writes, 0);
    let last = renderer.vector().elements().last().expect("elements");
    assert_eq!(last.key, id);
    assert_eq!(last.attribute("cx"), Some("30"));
}

#[test]
fn test_moved_shape_writes_only_changed_attributes() {
    let mut scene = Scene::default();
    let id = scene.allocate_id();
    let circle = Shape::circle(id.clone(), 100.0, 100.0, 30.0, Color::GREEN).expect("circle");
    scene.add(circle).expect("add shape");

    let mut renderer = HeadlessRenderer::headless(RendererConfig::default());
    renderer.render(&scene).expect("render");

    // Horizontal move: only `cx` differs.
    scene.get_mut(&id).expect("circle").set_origin(150.0, 100.0);
    let stats = renderer.render(&scene).expect("render");
    assert_eq!(stats.reconcile.attribute_writes, 1);
    assert_eq!(renderer.vector().mutations().attribute_writes, 1);
    assert_eq!(
        renderer
            .vector()
            .element(&id)
            .and_then(|e| e.attribute("cx")),
        Some("180")
    );
}

#[test]
fn test_detached_shape_leaves_others_in_place() {
    let mut scene = diagonal_scene(3, IdStrategy::Sequential);
    let mut renderer = HeadlessRenderer::headless(RendererConfig::default());
    renderer.render(&scene).expect("render");

    let middle = scene.shapes()[1].id().clone();
    scene.remove(&middle);
    assert!(renderer.detach(&middle).expect("detach"));
    let stats = renderer.render(&scene).expect("render");

    assert_eq!(renderer.vector().len(), 2);
    assert_eq!(stats.reconcile.created, 0);
    assert_eq!(stats.reconcile.unchanged, 2);
    assert_eq!(renderer.vector().mutations().appends, 3);
}

// ==========================================================================
// Overlay tests
// ==========================================================================

#[test]
fn test_overlay_outlines_every_highlighted_shape() {
    let mut scene = diagonal_scene(3, IdStrategy::Sequential);
    let hits: Vec<ShapeId> = scene
        .query_highlighted(12.0, 12.0)
        .into_iter()
        .map(|s| s.id().clone())
        .collect();
    assert_eq!(hits.len(), 3);
    scene.set_highlighted(hits);

    let mut renderer = HeadlessRenderer::headless(RendererConfig::default());
    let stats = renderer.render(&scene).expect("render");
    assert_eq!(stats.highlighted, 3);
    assert_eq!(renderer.overlay().strokes().len(), 3);
    assert_eq!(renderer.overlay().size(), (400, 400));
}

// ==========================================================================
// Properties
// ==========================================================================

proptest! {
    #[test]
    fn prop_one_element_per_shape(count in 0usize..60, random in any::<bool>()) {
        let strategy = if random { IdStrategy::Random } else { IdStrategy::Sequential };
        let scene = diagonal_scene(count, strategy);
        let mut renderer = HeadlessRenderer::headless(RendererConfig::default());
        renderer.render(&scene).expect("render");

        prop_assert_eq!(renderer.vector().len(), count);
        let mut keys: Vec<_> = renderer.vector().elements().map(|e| e.key.clone()).collect();
        keys.sort();
        keys.dedup();
        prop_assert_eq!(keys.len(), count);
    }

    #[test]
    fn prop_second_render_is_write_free(count in 1usize..40, x in -200.0f32..600.0, y in -200.0f32..600.0) {
        let mut scene = diagonal_scene(count, IdStrategy::Sequential);
        let first = scene.shapes()[0].id().clone();
        scene.get_mut(&first).expect("first").center_on(x, y);

        let mut renderer = HeadlessRenderer::headless(RendererConfig::default());
        renderer.render(&scene).expect("render");
        let writes_before = renderer.vector().mutations().attribute_writes;

        let stats = renderer.render(&scene).expect("render");
        prop_assert_eq!(stats.reconcile.attribute_writes, 0);
        prop_assert_eq!(stats.reconcile.unchanged, count);
        prop_assert_eq!(renderer.vector().mutations().attribute_writes, writes_before);
    }

    #[test]
    fn prop_detaching_absent_changes_nothing(count in 0usize..20, token in "[a-z]{6}") {
        let scene = diagonal_scene(count, IdStrategy::Sequential);
        let mut renderer = HeadlessRenderer::headless(RendererConfig::default());
        renderer.render(&scene).expect("render");

        prop_assert!(!renderer.detach(&ShapeId::from_token(token)).expect("detach"));
        prop_assert_eq!(renderer.vector().len(), count);
    }
}
