use approx::assert_relative_eq;
use drone::{Control, FrameDriver, RigidBody2D, SimConfig};

#[test]
fn one_frame_of_upward_thrust() {
    let mut body = RigidBody2D::new(1.0, 1.0, cgmath::vec2(0.0, 0.0), 0.0).unwrap();
    body.apply_force(cgmath::vec2(0.0, 20.0), cgmath::vec2(0.0, 0.0));
    body.update(0.1, drone::DEFAULT_GRAVITY);

    assert_relative_eq!(body.linear_velocity().x, 0.0);
    assert_relative_eq!(body.linear_velocity().y, 1.02, epsilon = 1e-5);
    assert_relative_eq!(body.position().x, 0.0);
    assert_relative_eq!(body.position().y, 0.102, epsilon = 1e-6);
    assert_eq!(body.angular_velocity(), 0.0);
    assert_eq!(body.orientation(), 0.0);
}

#[test]
fn hovering_against_gravity() {
    let mut config = SimConfig::from_json(r#"{ "clamp": null }"#).unwrap();
    config.controls.main.force = cgmath::vec2(0.0, config.gravity * config.body.mass);
    let mut driver = FrameDriver::new(config).unwrap();

    for _ in 0..600 {
        driver.step(1.0 / 60.0, &[Control::MainThruster]);
    }
    let pose = driver.pose();
    assert_relative_eq!(pose.position.x, 0.0);
    assert_relative_eq!(pose.position.y, 0.0, epsilon = 1e-4);
    assert_eq!(pose.orientation, 0.0);
}

#[test]
fn steering_tilts_then_thrust_drifts_sideways() {
    let mut driver = FrameDriver::new(SimConfig {
        clamp: None,
        gravity: 0.0,
        ..SimConfig::default()
    })
    .unwrap();

    for _ in 0..10 {
        driver.step(0.01, &[Control::LeftThruster]);
    }
    let tilt = driver.pose().orientation;
    assert!(tilt > 0.0);

    let angular_velocity = driver.body().angular_velocity();
    for _ in 0..10 {
        driver.step(0.01, &[Control::MainThruster]);
    }
    // Centered thrust adds no spin, and with a positive (clockwise) tilt the
    // body's up axis leans towards +x.
    assert_relative_eq!(driver.body().angular_velocity(), angular_velocity);
    assert!(driver.body().linear_velocity().x > 0.0);
}

#[test]
fn clamped_body_stays_in_view_while_falling() {
    let mut driver = FrameDriver::new(SimConfig::default()).unwrap();
    let bounds = driver.config().clamp.unwrap();

    let dt = 1.0 / 60.0;
    let mut previous_speed = 0.0;
    for _ in 0..200 {
        let pose = driver.step(dt, &[]);
        let velocity = driver.body().linear_velocity().y;
        // Clamping happens before integration, so the body is at most one
        // step outside the box.
        assert!(pose.position.y >= bounds.min.y + velocity * dt - 1e-4);
        // The clamp never slows the body down.
        let speed = -velocity;
        assert!(speed > previous_speed);
        previous_speed = speed;
    }
}
