mod test_globals;

use scene_rigs::components::transform::Transform;
use scene_rigs::game_loop::Stage;

use test_globals::{assert_close, RigFixture};

fn enabled_after_yaw(fixture: &mut RigFixture, yaw: f32) -> Vec<usize> {
    fixture.set_yaw(yaw);
    fixture.stage.tick(0.0).unwrap();
    fixture.enabled_indices()
}

#[test]
fn no_camera_is_enabled_before_the_first_tick() {
    let fixture = RigFixture::new(8, 30.0);
    assert!(fixture.enabled_indices().is_empty());
    assert_eq!(fixture.stage.rig(fixture.rig).unwrap().active_index(), None);
}

#[test]
fn eight_cameras_switch_every_forty_five_degrees() {
    let mut fixture = RigFixture::new(8, 30.0);
    assert_eq!(fixture.stage.rig(fixture.rig).unwrap().camera_step(), 45);

    assert_eq!(enabled_after_yaw(&mut fixture, 0.0), vec![0]);
    assert_eq!(enabled_after_yaw(&mut fixture, 44.0), vec![0]);
    assert_eq!(enabled_after_yaw(&mut fixture, 45.0), vec![1]);
    assert_eq!(enabled_after_yaw(&mut fixture, 200.0), vec![4]);
    assert_eq!(enabled_after_yaw(&mut fixture, 359.0), vec![7]);
}

#[test]
fn seven_cameras_clamp_the_last_slice() {
    let mut fixture = RigFixture::new(7, 30.0);
    assert_eq!(fixture.stage.rig(fixture.rig).unwrap().camera_step(), 51);

    assert_eq!(enabled_after_yaw(&mut fixture, 300.0), vec![5]);
    assert_eq!(enabled_after_yaw(&mut fixture, 320.0), vec![6]);
    assert_eq!(enabled_after_yaw(&mut fixture, 357.0), vec![6]);
    assert_eq!(fixture.stage.rig(fixture.rig).unwrap().active_index(), Some(6));
}

#[test]
fn orbit_advances_by_velocity_times_delta() {
    let mut fixture = RigFixture::new(8, 30.0);

    fixture.stage.tick(1.0).unwrap();
    assert_close(fixture.stage.transform(fixture.rig).unwrap().yaw_degrees(), 30.0);
    assert_eq!(fixture.enabled_indices(), vec![0]);

    fixture.stage.tick(1.0).unwrap();
    assert_close(fixture.stage.transform(fixture.rig).unwrap().yaw_degrees(), 60.0);
    assert_eq!(fixture.enabled_indices(), vec![1]);

    fixture.stage.run(9, 1.0).unwrap();
    assert_close(fixture.stage.transform(fixture.rig).unwrap().yaw_degrees(), 330.0);
    assert_eq!(fixture.enabled_indices(), vec![7]);
}

#[test]
fn exactly_one_camera_stays_enabled_through_a_full_orbit() {
    let mut fixture = RigFixture::new(5, 45.0);

    for _ in 0..100 {
        fixture.stage.tick(0.1).unwrap();
        assert_eq!(fixture.enabled_indices().len(), 1);
    }
}

#[test]
fn single_camera_is_always_enabled() {
    let mut fixture = RigFixture::new(1, 90.0);
    fixture.stage.run(7, 0.5).unwrap();
    assert_eq!(fixture.enabled_indices(), vec![0]);
}

#[test]
fn handle_without_camera_component_is_skipped() {
    let mut stage = Stage::new();
    let real = stage.spawn_camera("real");
    let not_a_camera = stage.spawn_with_drifter(Transform::default(), scene_rigs::components::random_drifter::RandomDrifter::initialize(&mut test_globals::seeded_rng()));
    let rig = stage.spawn_orbit_rig(Transform::default(), vec![not_a_camera, real], 0.0).unwrap();

    stage.tick(0.0).unwrap();

    assert_eq!(stage.rig(rig).unwrap().active_index(), Some(0));
    assert!(!stage.camera(real).unwrap().enabled);
    assert!(stage.camera(not_a_camera).is_none());
}

#[test]
fn cameras_outside_the_rig_are_untouched() {
    let mut fixture = RigFixture::new(4, 30.0);
    let bystander = fixture.stage.spawn_camera("bystander");

    fixture.stage.tick(0.5).unwrap();

    assert!(!fixture.stage.camera(bystander).unwrap().enabled);
    assert_eq!(fixture.stage.enabled_cameras(), vec![fixture.cameras[0]]);
}
