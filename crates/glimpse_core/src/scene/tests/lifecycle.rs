//! Registration, activation and disposal sequencing

use super::*;
use crate::error::ShowcaseError;
use approx::assert_relative_eq;

#[test]
fn test_switching_scenes_deactivates_before_activating() {
    let log = event_log();
    let mut manager = manager();
    add_probe(&mut manager, orbit_config("a"), &log);
    add_probe(&mut manager, flythrough_config("b"), &log);

    manager.set_active_scene(Some("a")).expect("activate a");
    manager.update();
    manager.set_active_scene(Some("b")).expect("activate b");
    manager.update();
    manager.update();

    assert_eq!(
        drain(&log),
        ["a:activate", "a:update", "a:deactivate", "b:activate", "b:update", "b:update"]
    );
    assert_eq!(manager.active_scene_id(), Some("b"));
}

#[test]
fn test_unknown_id_leaves_state_unchanged() {
    let log = event_log();
    let mut manager = manager();
    add_probe(&mut manager, orbit_config("a"), &log);
    manager.set_active_scene(Some("a")).expect("activate a");
    manager.update();
    let elapsed = manager.camera_controller().movement_elapsed();
    let position = manager.camera().position;
    drain(&log);

    let result = manager.set_active_scene(Some("missing"));

    assert!(matches!(result, Err(ShowcaseError::UnknownSceneId(id)) if id == "missing"));
    assert_eq!(manager.active_scene_id(), Some("a"));
    assert!(manager.camera_controller().is_active());
    assert_relative_eq!(manager.camera_controller().movement_elapsed(), elapsed);
    assert_eq!(manager.camera().position, position);
    assert!(drain(&log).is_empty());
}

#[test]
fn test_unknown_id_while_idle_stays_idle() {
    let mut manager = manager();
    assert!(manager.set_active_scene(Some("nowhere")).is_err());
    assert!(manager.is_idle());
    assert!(manager.current_scene_config().is_none());
}

#[test]
fn test_return_to_home_deactivates() {
    let log = event_log();
    let mut manager = manager();
    add_probe(&mut manager, orbit_config("a"), &log);

    manager.set_active_scene(Some("a")).expect("activate a");
    manager.set_active_scene(None).expect("go home");
    manager.update();

    assert_eq!(drain(&log), ["a:activate", "a:deactivate"]);
    assert!(manager.is_idle());
    assert!(!manager.camera_controller().is_active());
}

#[test]
fn test_home_clock_resets_on_return() {
    let log = event_log();
    let mut manager = manager_with_step(0.5);
    add_probe(&mut manager, orbit_config("a"), &log);

    manager.update();
    manager.update();
    assert_relative_eq!(manager.home_elapsed(), 1.0);

    manager.set_active_scene(Some("a")).expect("activate a");
    manager.update();
    assert_relative_eq!(manager.home_elapsed(), 1.0);

    manager.set_active_scene(None).expect("go home");
    assert!(manager.home_elapsed().abs() < f32::EPSILON);
}

#[test]
fn test_reactivating_active_scene_restarts_it() {
    let log = event_log();
    let mut manager = manager();
    add_probe(&mut manager, orbit_config("a"), &log);

    manager.set_active_scene(Some("a")).expect("activate a");
    manager.update();
    manager.set_active_scene(Some("a")).expect("reactivate a");

    assert_eq!(drain(&log), ["a:activate", "a:update", "a:deactivate", "a:activate"]);
    assert!(manager.camera_controller().movement_elapsed().abs() < f32::EPSILON);
    assert_eq!(manager.camera().position, Vec3::new(0.0, 2.0, 8.0));
}

#[test]
fn test_duplicate_scene_rejected() {
    let log = event_log();
    let mut manager = manager();
    add_probe(&mut manager, orbit_config("a"), &log);

    let result = manager.add_scene("a", ready_probe("a", &log), orbit_config("a"));

    assert!(matches!(result, Err(ShowcaseError::DuplicateSceneId(_))));
    assert_eq!(manager.scene_ids(), ["a"]);
}

#[test]
fn test_uninitialized_scene_rejected() {
    let log = event_log();
    let mut manager = manager();

    let result = manager.add_scene("a", Box::new(ProbeScene::new("a", &log)), orbit_config("a"));

    assert!(matches!(result, Err(ShowcaseError::SceneNotReady(_))));
    assert!(manager.scene_ids().is_empty());
}

#[test]
fn test_mismatched_config_rejected() {
    let log = event_log();
    let mut manager = manager();

    let result = manager.add_scene("a", ready_probe("a", &log), orbit_config("b"));

    assert!(matches!(result, Err(ShowcaseError::InvalidConfig { .. })));
}

#[test]
fn test_add_scene_injects_camera() {
    let log = event_log();
    let mut manager = manager();
    manager
        .add_scene("a", ready_probe("a", &log), orbit_config("a"))
        .expect("register");

    assert_eq!(drain(&log), ["a:init camera=false", "a:camera"]);
    let scene = manager.scene("a").expect("registered");
    assert!(scene.base().camera().is_some());
}

#[test]
fn test_load_scene_injects_camera_before_init() {
    let log = event_log();
    let mut registry = SceneRegistry::new();
    registry
        .register(orbit_config("a"), probe_factory("a", &log, false))
        .expect("register");

    let mut manager = manager();
    pollster::block_on(manager.load_scene(&registry, "a")).expect("load");

    let events = drain(&log);
    assert_eq!(events, ["a:camera", "a:init camera=true"]);
    assert_eq!(manager.scene_ids(), ["a"]);
    assert!(manager.scene("a").is_some_and(|scene| scene.is_initialized()));
}

#[test]
fn test_failed_init_registers_nothing() {
    let log = event_log();
    let mut registry = SceneRegistry::new();
    registry
        .register(orbit_config("broken"), probe_factory("broken", &log, true))
        .expect("register");

    let mut manager = manager();
    let result = pollster::block_on(manager.load_scene(&registry, "broken"));

    assert!(matches!(result, Err(ShowcaseError::SceneInitialization { .. })));
    assert!(manager.scene_ids().is_empty());
    assert!(manager.set_active_scene(Some("broken")).is_err());
    assert!(manager.is_idle());
}

#[test]
fn test_load_scene_unknown_id() {
    let registry = SceneRegistry::new();
    let mut manager = manager();
    let result = pollster::block_on(manager.load_scene(&registry, "ghost"));
    assert!(matches!(result, Err(ShowcaseError::UnknownSceneId(_))));
}

#[test]
fn test_scene_ids_follow_registration_order() {
    let log = event_log();
    let mut manager = manager();
    for id in ["c", "a", "b"] {
        add_probe(&mut manager, orbit_config(id), &log);
    }
    assert_eq!(manager.scene_ids(), ["c", "a", "b"]);
}

#[test]
fn test_resize_updates_camera_then_scene() {
    let log = event_log();
    let mut manager = manager();
    add_probe(&mut manager, orbit_config("a"), &log);

    manager.on_resize(800, 800);
    assert_relative_eq!(manager.camera().aspect, 1.0);
    assert!(drain(&log).is_empty());

    manager.set_active_scene(Some("a")).expect("activate a");
    manager.on_resize(1600, 800);
    manager.on_resize(0, 800);

    assert_relative_eq!(manager.camera().aspect, 2.0);
    assert_eq!(drain(&log), ["a:activate", "a:resize 1600x800"]);
}

#[test]
fn test_remove_active_scene_returns_home() {
    let log = event_log();
    let mut manager = manager();
    add_probe(&mut manager, orbit_config("a"), &log);
    manager.set_active_scene(Some("a")).expect("activate a");

    manager.remove_scene("a").expect("remove");

    assert_eq!(drain(&log), ["a:activate", "a:deactivate", "a:dispose"]);
    assert!(manager.is_idle());
    assert!(manager.scene_ids().is_empty());
    assert!(matches!(manager.remove_scene("a"), Err(ShowcaseError::UnknownSceneId(_))));
}

#[test]
fn test_drop_disposes_every_scene_once() {
    let log = event_log();
    let mut manager = manager();
    add_probe(&mut manager, orbit_config("a"), &log);
    add_probe(&mut manager, flythrough_config("b"), &log);
    manager.set_active_scene(Some("b")).expect("activate b");

    drop(manager);

    assert_eq!(drain(&log), ["b:activate", "b:deactivate", "a:dispose", "b:dispose"]);
}

#[test]
fn test_inactive_scene_never_updated() {
    let log = event_log();
    let mut manager = manager();
    add_probe(&mut manager, orbit_config("a"), &log);
    add_probe(&mut manager, orbit_config("b"), &log);

    manager.set_active_scene(Some("a")).expect("activate a");
    manager.set_active_scene(Some("b")).expect("activate b");
    for _ in 0..10 {
        manager.update();
    }

    assert!(!drain(&log).iter().any(|event| event == "a:update"));
    assert!(manager.scene("a").is_some_and(|scene| scene.base().time() == 0.0));
}
