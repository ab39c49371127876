use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};
use std::env;

use flyer_control::{
    components::{CameraData, FlightCamera},
    physics::{KinematicConfig, KinematicFlightModel, NoiseTerrain, TerrainQuery},
    plugins::{FlightCameraPlugin, FlightControlPlugin, FlightFault, ResetRequestEvent},
    resources::{ControlSnapshot, FlightController, SimulationConfig},
    utils::rad_to_deg,
};

const TERRAIN_SEED: u64 = 42;
const MARKER_SPACING: f64 = 150.0;
const MARKER_COUNT: i32 = 20;

#[derive(Component)]
struct HudText;

#[derive(Resource, Default)]
struct FaultBanner(Option<String>);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional YAML config path as the first argument
    let config = match env::args().nth(1) {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "flyer control".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(
            FlightControlPlugin::new(KinematicFlightModel, KinematicConfig::default())
                .with_config(config)
                .with_terrain(NoiseTerrain::new(TERRAIN_SEED)),
        )
        .add_plugins(FlightCameraPlugin::<KinematicFlightModel>::default())
        .init_resource::<FaultBanner>()
        .add_systems(Startup, setup_scene)
        .add_systems(
            Update,
            (cursor_capture_system, reset_key_system, fault_banner_system, hud_system),
        )
        .run();

    Ok(())
}

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let terrain = NoiseTerrain::new(TERRAIN_SEED);
    let extent = (MARKER_SPACING * MARKER_COUNT as f64 * 2.0) as f32;

    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(extent, extent))),
        MeshMaterial3d(materials.add(Color::srgb(0.25, 0.45, 0.25))),
        Transform::from_xyz(0.0, (terrain.base_height - terrain.amplitude) as f32, 0.0),
    ));

    // Columns standing on the terrain surface so height changes are visible
    let column = meshes.add(Cuboid::new(8.0, 1.0, 8.0));
    let column_material = materials.add(Color::srgb(0.55, 0.5, 0.4));
    let floor = terrain.base_height - terrain.amplitude;
    for i in -MARKER_COUNT..=MARKER_COUNT {
        for j in -MARKER_COUNT..=MARKER_COUNT {
            let x = i as f64 * MARKER_SPACING;
            let z = j as f64 * MARKER_SPACING;
            let height = (terrain.height_at(x, z) - floor).max(1.0);
            commands.spawn((
                Mesh3d(column.clone()),
                MeshMaterial3d(column_material.clone()),
                Transform::from_xyz(x as f32, (floor + height / 2.0) as f32, z as f32)
                    .with_scale(Vec3::new(1.0, height as f32, 1.0)),
            ));
        }
    }

    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            ..default()
        },
        Transform::from_xyz(0.0, 1000.0, 0.0).looking_at(Vec3::new(0.3, 0.0, 0.2), Vec3::Y),
    ));

    commands.spawn((
        Camera3d::default(),
        FlightCamera,
        CameraData::default(),
        Transform::default(),
    ));

    commands.spawn((
        Text::new(""),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(8.0),
            ..default()
        },
        HudText,
    ));
}

/// Click to capture the cursor, Escape to release it.
fn cursor_capture_system(
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    mouse: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
) {
    let Ok(mut window) = windows.get_single_mut() else {
        return;
    };
    if mouse.just_pressed(MouseButton::Left) {
        window.cursor_options.grab_mode = CursorGrabMode::Locked;
        window.cursor_options.visible = false;
    }
    if keys.just_pressed(KeyCode::Escape) {
        window.cursor_options.grab_mode = CursorGrabMode::None;
        window.cursor_options.visible = true;
    }
}

fn reset_key_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut resets: EventWriter<ResetRequestEvent>,
    mut banner: ResMut<FaultBanner>,
) {
    if keys.just_pressed(KeyCode::KeyR) {
        resets.send(ResetRequestEvent::default());
        banner.0 = None;
    }
}

fn fault_banner_system(mut faults: EventReader<FlightFault>, mut banner: ResMut<FaultBanner>) {
    for fault in faults.read() {
        warn!("{}; press R to reset", fault.message);
        banner.0 = Some(fault.message.clone());
    }
}

fn hud_system(
    snapshot: Res<ControlSnapshot>,
    controller: Res<FlightController<KinematicFlightModel>>,
    banner: Res<FaultBanner>,
    mut hud: Query<&mut Text, With<HudText>>,
) {
    let Ok(mut text) = hud.get_single_mut() else {
        return;
    };
    let state = controller.state();
    let heading = rad_to_deg(-state.yaw).rem_euclid(360.0);
    let height = controller
        .terrain_height(state.position.x, state.position.z)
        .map_or(state.position.y, |ground| state.position.y - ground);
    let mut line = format!(
        "throttle {:>3.0}%  flaps {:>3.0}%  {}\nspeed {:>5.1} m/s  heading {:>5.1}  height {:>6.1} m",
        snapshot.throttle * 100.0,
        snapshot.flaps * 100.0,
        if snapshot.is_active {
            "captured (Esc to release)"
        } else {
            "click to fly"
        },
        state.speed(),
        heading,
        height,
    );
    if let Some(message) = &banner.0 {
        line.push_str(&format!("\nFLIGHT FAULT: {} - press R to reset", message));
    }
    text.0 = line;
}
