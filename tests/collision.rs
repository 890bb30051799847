use bevy_ecs::event::Events;
use bevy_ecs::system::RunSystemOnce;
use glam::Vec3;
use speculoos::prelude::*;

use paloma::constants::{boost, collider, hunger};
use paloma::events::PickupEvent;
use paloma::systems::{
    collision_system, pickup_system, AudioEvent, CollectibleKind, Hunger, ScoreResource, SpeedBoost,
};

mod common;

#[test]
fn test_pickup_fires_within_radius() {
    let mut world = common::create_test_world();
    common::spawn_test_player(&mut world, Vec3::new(0.0, 5.0, 0.0));
    common::spawn_test_collectible(&mut world, CollectibleKind::Donut, Vec3::new(5.0, 5.0, 0.0));

    world.run_system_once(collision_system).expect("System should run successfully");

    let events = world.resource::<Events<PickupEvent>>();
    assert_that(&events.len()).is_equal_to(1);
}

#[test]
fn test_no_pickup_at_or_beyond_radius() {
    let mut world = common::create_test_world();
    common::spawn_test_player(&mut world, Vec3::new(0.0, 5.0, 0.0));
    // Exactly at the threshold; the comparison is strict.
    common::spawn_test_collectible(&mut world, CollectibleKind::Donut, Vec3::new(collider::PICKUP_RADIUS, 5.0, 0.0));
    common::spawn_test_collectible(&mut world, CollectibleKind::GoldenDonut, Vec3::new(0.0, 5.0, 50.0));

    world.run_system_once(collision_system).expect("System should run successfully");

    let events = world.resource::<Events<PickupEvent>>();
    assert_that(&events.len()).is_equal_to(0);
}

#[test]
fn test_several_collectibles_in_range_all_fire() {
    let mut world = common::create_test_world();
    common::spawn_test_player(&mut world, Vec3::new(0.0, 5.0, 0.0));
    common::spawn_test_collectible(&mut world, CollectibleKind::Donut, Vec3::new(2.0, 5.0, 0.0));
    common::spawn_test_collectible(&mut world, CollectibleKind::GoldenDonut, Vec3::new(-2.0, 5.0, 0.0));
    common::spawn_test_collectible(&mut world, CollectibleKind::SpeedRing, Vec3::new(0.0, 5.0, 3.0));

    world.run_system_once(collision_system).expect("System should run successfully");

    let events = world.resource::<Events<PickupEvent>>();
    assert_that(&events.len()).is_equal_to(3);
}

#[test]
fn test_donut_pickup_scores_and_restores() {
    let mut world = common::create_test_world();
    world.resource_mut::<Hunger>().value = 50.0;
    let donut = common::spawn_test_collectible(&mut world, CollectibleKind::Donut, Vec3::new(0.0, 5.0, 0.0));

    common::send_pickup_event(&mut world, donut);
    world.run_system_once(pickup_system).expect("System should run successfully");

    assert_that(&world.resource::<ScoreResource>().0).is_equal_to(1);
    assert_that(&world.resource::<Hunger>().value).is_equal_to(50.0 + hunger::DONUT_RESTORE);

    // Removal and respawn are paired, so the population is unchanged.
    assert_that(&common::count_collectibles(&mut world, CollectibleKind::Donut)).is_equal_to(1);
    assert!(world.get_entity(donut).is_err());
}

#[test]
fn test_golden_pickup_scores_and_restores_more() {
    let mut world = common::create_test_world();
    world.resource_mut::<Hunger>().value = 30.0;
    let golden = common::spawn_test_collectible(&mut world, CollectibleKind::GoldenDonut, Vec3::new(0.0, 5.0, 0.0));

    common::send_pickup_event(&mut world, golden);
    world.run_system_once(pickup_system).expect("System should run successfully");

    assert_that(&world.resource::<ScoreResource>().0).is_equal_to(5);
    assert_that(&world.resource::<Hunger>().value).is_equal_to(30.0 + hunger::GOLDEN_RESTORE);
    assert_that(&common::count_collectibles(&mut world, CollectibleKind::GoldenDonut)).is_equal_to(1);
}

#[test]
fn test_restore_clamps_at_full_meter() {
    let mut world = common::create_test_world();
    world.resource_mut::<Hunger>().value = 95.0;
    let golden = common::spawn_test_collectible(&mut world, CollectibleKind::GoldenDonut, Vec3::new(0.0, 5.0, 0.0));

    common::send_pickup_event(&mut world, golden);
    world.run_system_once(pickup_system).expect("System should run successfully");

    assert_that(&world.resource::<Hunger>().value).is_equal_to(hunger::MAX_HUNGER);
}

#[test]
fn test_ring_pickup_activates_boost_without_score() {
    let mut world = common::create_test_world();
    let ring = common::spawn_test_collectible(&mut world, CollectibleKind::SpeedRing, Vec3::new(0.0, 5.0, 0.0));

    common::send_pickup_event(&mut world, ring);
    world.run_system_once(pickup_system).expect("System should run successfully");

    let speed_boost = world.resource::<SpeedBoost>();
    assert_that(&speed_boost.active()).is_true();
    assert_that(&speed_boost.remaining).is_equal_to(boost::DURATION);
    assert_that(&world.resource::<ScoreResource>().0).is_equal_to(0);
    assert_that(&common::count_collectibles(&mut world, CollectibleKind::SpeedRing)).is_equal_to(1);
}

#[test]
fn test_boost_doubles_pickup_score() {
    let mut world = common::create_test_world();
    world.resource_mut::<SpeedBoost>().activate();
    let donut = common::spawn_test_collectible(&mut world, CollectibleKind::Donut, Vec3::new(0.0, 5.0, 0.0));
    let golden = common::spawn_test_collectible(&mut world, CollectibleKind::GoldenDonut, Vec3::new(10.0, 5.0, 0.0));

    common::send_pickup_event(&mut world, donut);
    common::send_pickup_event(&mut world, golden);
    world.run_system_once(pickup_system).expect("System should run successfully");

    assert_that(&world.resource::<ScoreResource>().0).is_equal_to(2 + 10);
}

#[test]
fn test_duplicate_events_resolve_once() {
    let mut world = common::create_test_world();
    let donut = common::spawn_test_collectible(&mut world, CollectibleKind::Donut, Vec3::new(0.0, 5.0, 0.0));

    common::send_pickup_event(&mut world, donut);
    common::send_pickup_event(&mut world, donut);
    world.run_system_once(pickup_system).expect("System should run successfully");

    assert_that(&world.resource::<ScoreResource>().0).is_equal_to(1);
    assert_that(&common::count_collectibles(&mut world, CollectibleKind::Donut)).is_equal_to(1);
}

#[test]
fn test_stale_event_for_despawned_entity_is_skipped() {
    let mut world = common::create_test_world();
    let donut = common::spawn_test_collectible(&mut world, CollectibleKind::Donut, Vec3::new(0.0, 5.0, 0.0));
    common::send_pickup_event(&mut world, donut);
    world.despawn(donut);

    world.run_system_once(pickup_system).expect("System should run successfully");

    assert_that(&world.resource::<ScoreResource>().0).is_equal_to(0);
    assert_that(&common::count_collectibles(&mut world, CollectibleKind::Donut)).is_equal_to(0);
}

#[test]
fn test_theft_racing_pickup_resolves_to_player() {
    let mut world = common::create_test_world();
    let donut = common::spawn_test_collectible(&mut world, CollectibleKind::Donut, Vec3::new(0.0, 5.0, 0.0));
    let flamingo = common::spawn_test_flamingo(&mut world, Vec3::new(2.0, 2.5, 0.0), 12.0);

    // Pickup events are read before theft events, so the player wins.
    common::send_pickup_event(&mut world, donut);
    common::send_theft_event(&mut world, flamingo, donut);
    world.run_system_once(pickup_system).expect("System should run successfully");

    assert_that(&world.resource::<ScoreResource>().0).is_equal_to(1);
    assert_that(&common::count_collectibles(&mut world, CollectibleKind::Donut)).is_equal_to(1);
}

#[test]
fn test_theft_removes_without_scoring() {
    let mut world = common::create_test_world();
    world.resource_mut::<Hunger>().value = 50.0;
    let donut = common::spawn_test_collectible(&mut world, CollectibleKind::Donut, Vec3::new(0.0, 5.0, 0.0));
    let flamingo = common::spawn_test_flamingo(&mut world, Vec3::new(2.0, 2.5, 0.0), 12.0);

    common::send_theft_event(&mut world, flamingo, donut);
    world.run_system_once(pickup_system).expect("System should run successfully");

    assert_that(&world.resource::<ScoreResource>().0).is_equal_to(0);
    assert_that(&world.resource::<Hunger>().value).is_equal_to(50.0);
    assert!(world.get_entity(donut).is_err());
    assert_that(&common::count_collectibles(&mut world, CollectibleKind::Donut)).is_equal_to(1);
}

#[test]
fn test_pickup_emits_sound_and_burst() {
    let mut world = common::create_test_world();
    let donut = common::spawn_test_collectible(&mut world, CollectibleKind::Donut, Vec3::new(0.0, 5.0, 0.0));

    common::send_pickup_event(&mut world, donut);
    world.run_system_once(pickup_system).expect("System should run successfully");

    let audio_events = common::drained_audio_events(&mut world);
    assert_that(&audio_events.len()).is_equal_to(1);

    let particle_count = world.query::<&paloma::systems::Particle>().iter(&world).count();
    assert_that(&particle_count).is_equal_to(paloma::constants::effects::BURST_PARTICLES);
}
