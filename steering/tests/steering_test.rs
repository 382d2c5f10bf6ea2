use bevy::prelude::*;
use common::Position;
use steering::prelude::*;

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(SteeringPlugin);
    app
}

fn spawn_seeker(
    app: &mut App,
    position: Vec2,
    velocity: Vec2,
    params: VehicleParams,
    target: Vec2,
) -> Entity {
    app.world_mut()
        .spawn((
            Position(position),
            Vehicle::with_velocity(velocity),
            params,
            SteerSeek,
            SteeringTargetVec2(target),
        ))
        .id()
}

fn kinematics(app: &App, entity: Entity) -> (Vec2, Vec2) {
    let position = app.world().entity(entity).get::<Position>().unwrap().0;
    let velocity = app.world().entity(entity).get::<Vehicle>().unwrap().velocity;
    (position, velocity)
}

#[test]
fn velocity_never_exceeds_max_speed() {
    let mut app = test_app();

    let params = VehicleParams::default();
    let entity = app
        .world_mut()
        .spawn((
            Position(Vec2::ZERO),
            Vehicle {
                velocity: Vec2::new(3.0, 0.0),
                acceleration: Vec2::new(50.0, -80.0),
            },
            params,
        ))
        .id();

    app.update();

    let (_, velocity) = kinematics(&app, entity);
    assert!(velocity.length() <= params.max_speed + 1e-5);
}

#[test]
fn one_seek_step_matches_expected_kinematics() {
    let mut app = test_app();

    let params = VehicleParams {
        max_speed: 4.0,
        max_force: 0.1,
        radius: 4.0,
    };
    let entity = spawn_seeker(
        &mut app,
        Vec2::ZERO,
        Vec2::new(2.0, 0.0),
        params,
        Vec2::new(100.0, 0.0),
    );

    app.update();

    let (position, velocity) = kinematics(&app, entity);
    assert!(velocity.x > 2.0 && velocity.x <= 2.1 + 1e-6);
    assert_eq!(velocity.y, 0.0);
    // Started at the origin, so position equals the new velocity.
    assert_eq!(position, velocity);

    let vehicle = app.world().entity(entity).get::<Vehicle>().unwrap();
    assert_eq!(vehicle.acceleration, Vec2::ZERO);
}

#[test]
fn seeking_moves_closer_to_a_far_target() {
    let mut app = test_app();

    let target = Vec2::new(300.0, 120.0);
    let entity = spawn_seeker(
        &mut app,
        Vec2::ZERO,
        Vec2::ZERO,
        VehicleParams::default(),
        target,
    );

    let mut last = target.length();
    for _ in 0..10 {
        app.update();
        let (position, _) = kinematics(&app, entity);
        let distance = position.distance(target);
        assert!(distance < last);
        last = distance;
    }
}

#[test]
fn seeking_own_position_stays_finite() {
    let mut app = test_app();

    let entity = spawn_seeker(
        &mut app,
        Vec2::new(7.0, 7.0),
        Vec2::ZERO,
        VehicleParams::default(),
        Vec2::new(7.0, 7.0),
    );

    app.update();

    let (position, velocity) = kinematics(&app, entity);
    assert!(velocity.is_finite());
    assert_eq!(velocity, Vec2::ZERO);
    assert_eq!(position, Vec2::new(7.0, 7.0));
}

#[test]
fn follow_steers_only_when_prediction_leaves_the_band() {
    let mut app = test_app();
    app.insert_resource(Path::new(
        Vec2::new(-320.0, 0.0),
        Vec2::new(320.0, 0.0),
        20.0,
    ));

    let on_path = app
        .world_mut()
        .spawn((
            Position(Vec2::new(0.0, 5.0)),
            Vehicle::with_velocity(Vec2::new(2.0, 0.0)),
            VehicleParams::default(),
            SteerPathFollow::default(),
        ))
        .id();
    let off_path = app
        .world_mut()
        .spawn((
            Position(Vec2::new(0.0, 120.0)),
            Vehicle::with_velocity(Vec2::new(2.0, 0.0)),
            VehicleParams::default(),
            SteerPathFollow::default(),
        ))
        .id();

    app.update();

    let on_velocity = app.world().entity(on_path).get::<Vehicle>().unwrap().velocity;
    let off_velocity = app
        .world()
        .entity(off_path)
        .get::<Vehicle>()
        .unwrap()
        .velocity;
    assert_eq!(on_velocity, Vec2::new(2.0, 0.0));
    assert_ne!(off_velocity.y, 0.0);
}

#[test]
fn followers_wrap_from_path_end_to_start() {
    let mut app = test_app();
    app.insert_resource(Path::new(
        Vec2::new(-320.0, 0.0),
        Vec2::new(320.0, 0.0),
        20.0,
    ));

    let params = VehicleParams::default();
    // At rest inside the band but past the end of the path.
    let entity = app
        .world_mut()
        .spawn((
            Position(Vec2::new(330.0, 8.0)),
            Vehicle::with_velocity(Vec2::ZERO),
            params,
            SteerPathFollow::default(),
        ))
        .id();

    app.update();

    let position = app.world().entity(entity).get::<Position>().unwrap().0;
    assert_eq!(position.x, -320.0 - params.radius);
    assert_eq!(position.y, 8.0);
}
