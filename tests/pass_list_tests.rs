//! Pass List Tests
//!
//! Tests for:
//! - Scene fan-out across every pass
//! - Bulk readiness checks
//! - JSON export of pass state

use std::sync::Arc;

use myth_pass::{
    BlitPass, GpuResource, PassError, PassList, RenderPass, ResourceDesc, Scene, ShadowMapPass,
};
use serde_json::json;
use wgpu::TextureFormat;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sample_list() -> PassList {
    PassList::with_capacity(2)
        .with_pass(Box::new(ShadowMapPass::new("Shadow")))
        .with_pass(Box::new(BlitPass::new("Blit")))
}

#[test]
fn lookup_by_name() {
    let list = sample_list();
    assert_eq!(list.len(), 2);
    assert!(list.get("Shadow").is_some());
    assert!(list.get("Blit").is_some());
    assert!(list.get("blit").is_none());

    let names: Vec<&str> = list.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["Shadow", "Blit"]);
}

#[test]
fn set_scene_reaches_every_pass() {
    init_logger();
    let mut list = sample_list();
    let scene = Scene::new("Level");

    list.set_scene(Some(&scene));

    for pass in list.iter() {
        assert_eq!(pass.scene().map(|s| s.id), Some(scene.id));
    }
    // One reference per pass plus ours.
    assert_eq!(Arc::strong_count(&scene), 3);

    let json = list.export_json().unwrap();
    assert_eq!(json[0]["state"]["rebuilds"], json!(1));
}

#[test]
fn invalid_passes_until_bound() {
    init_logger();
    let mut list = sample_list();
    assert_eq!(list.invalid_passes(), vec!["Shadow", "Blit"]);

    let depth = GpuResource::new(
        "shadow_depth",
        ResourceDesc::texture_2d(2048, 2048, TextureFormat::Depth32Float),
    );
    let shadow = list.get_mut("Shadow").unwrap();
    assert!(shadow.bind_output(ShadowMapPass::OUTPUT_DEPTH, &depth));
    assert_eq!(list.invalid_passes(), vec!["Blit"]);

    let errors = list.validate_all();
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        PassError::InvalidPassState { pass, .. } if pass == "Blit"
    ));

    let color = GpuResource::new(
        "color",
        ResourceDesc::texture_2d(800, 600, TextureFormat::Rgba8Unorm),
    );
    let blit = list.get_mut("Blit").unwrap();
    assert!(blit.bind_input(BlitPass::INPUT_COLOR, &color));
    assert!(blit.bind_output(BlitPass::OUTPUT_RESULT, &color));

    assert!(list.invalid_passes().is_empty());
    assert!(list.validate_all().is_empty());
}

#[test]
fn export_json_lists_passes_in_order() {
    let list = sample_list();
    let json = list.export_json().unwrap();

    assert_eq!(
        json,
        json!([
            {
                "name": "Shadow",
                "state": { "resolution": 2048, "scene_id": null, "rebuilds": 0 }
            },
            {
                "name": "Blit",
                "state": { "format": "Rgba8Unorm", "has_mask": false }
            }
        ])
    );
}

#[test]
fn clear_empties_list() {
    let mut list = sample_list();
    list.clear();
    assert!(list.is_empty());
    assert!(list.export_json().unwrap().as_array().unwrap().is_empty());
}
