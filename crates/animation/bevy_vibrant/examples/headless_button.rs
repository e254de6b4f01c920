//! A centered button that lights up on hover and spins when clicked,
//! driven headlessly with scripted pointer input.

use anyhow::Result;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_vibrant::vibrant_core::{
    Button, ButtonState, Canvas, Config, DrawCommand, Ease, FramePacer, Hsl, PointerSnapshot, Rgb,
    Shape, Timing,
};
use bevy_vibrant::vibrant_layout::{strength::REQUIRED, EQ, GE};
use bevy_vibrant::{
    Body, FrameInput, LayoutWorldExt, LeftClick, MouseEnter, MouseLeave, Mouseable, Renderable,
    Tween, TweenCommandsExt, VibrantAppExt, VibrantPlugin, VibrantSet,
};

const IDLE: Rgb = Rgb::new(33.0 / 255.0, 150.0 / 255.0, 243.0 / 255.0);

fn hover_colors(
    mut commands: Commands,
    mut enter: EventReader<MouseEnter>,
    mut leave: EventReader<MouseLeave>,
) -> Result<()> {
    let timing = Timing::new(0.25, Ease::OutQuad)?;
    for event in enter.read() {
        let mut lit = Hsl::from(IDLE);
        lit.l = (lit.l + 0.15).min(1.0);
        commands.tween(event.entity, Tween::FillColor(lit.into()), timing);
    }
    for event in leave.read() {
        commands.tween(event.entity, Tween::FillColor(IDLE), timing);
    }
    Ok(())
}

fn spin_on_click(
    mut commands: Commands,
    mut clicks: EventReader<LeftClick>,
    bodies: Query<&Body>,
) -> Result<()> {
    let timing = Timing::new(0.6, Ease::OutBack)?;
    for click in clicks.read() {
        if let Ok(body) = bodies.get(click.entity) {
            let turn = body.rotation + std::f64::consts::FRAC_PI_2;
            commands.tween(click.entity, Tween::Rotation(turn), timing);
        }
    }
    Ok(())
}

fn log_errors(In(result): In<Result<()>>) {
    if let Err(err) = result {
        error!("behavior failed: {err}");
    }
}

struct Printer;

impl Canvas for Printer {
    fn draw(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Rectangle { corners, fill, .. } => {
                println!("rect {:?} fill {:?}", corners[0], fill.color)
            }
            DrawCommand::Line { from, to, .. } => println!("line {from:?} -> {to:?}"),
        }
    }
}

fn main() -> Result<()> {
    let config = Config::from_json(r#"{ "viewport": [1280, 720], "min_frame_interval_ms": 5 }"#)?;
    let mut pacer = FramePacer::from_millis(config.min_frame_interval_ms);

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .add_plugins(VibrantPlugin::new(config))
        .add_systems(
            Update,
            (hover_colors.pipe(log_errors), spin_on_click.pipe(log_errors))
                .in_set(VibrantSet::Behavior),
        );

    let button = app.world_mut().spawn_laid_out(
        (
            Body::default(),
            Renderable(Shape::filled_rectangle(IDLE)),
            Mouseable::default(),
        ),
        |vars, b| {
            vec![
                vars.width | GE(REQUIRED) | 100.0,
                vars.height | GE(REQUIRED) | 25.0,
                vars.x | EQ(REQUIRED) | b.left + b.right / 2.0,
                vars.y | EQ(REQUIRED) | b.top + b.bottom / 2.0,
            ]
        },
    )?;
    info!("spawned button {button:?}");

    let center = app.world().get::<Body>(button).map(|b| b.position);
    let (cx, cy) = center.map_or((0.0, 0.0), |p| (p.x, p.y));
    let script = [
        PointerSnapshot::at(0.0, 0.0),
        PointerSnapshot::at(cx, cy),
        PointerSnapshot::at(cx, cy).with(Button::Left, ButtonState::Pressed),
        PointerSnapshot::at(cx, cy).with(Button::Left, ButtonState::Released),
        PointerSnapshot::at(0.0, 0.0),
    ];

    for pointer in script.into_iter().cycle().take(60) {
        // The host loop skips frames that arrive too early.
        let delta = loop {
            if let Some(delta) = pacer.tick() {
                break delta;
            }
            std::thread::sleep(std::time::Duration::from_millis(1));
        };
        app.advance_frame(FrameInput::new(delta).with_pointer(pointer))?;
    }

    app.advance_frame(FrameInput::new(0.016).with_viewport(800.0, 600.0))?;
    app.world().resource::<bevy_vibrant::DrawList>().render(&mut Printer);
    Ok(())
}
