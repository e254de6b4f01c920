use bevy::prelude::*;
use bevy_vibrant::vibrant_core::{
    Button, ButtonState, Ease, PointerSnapshot, Rgb, Shape, Timing, Vector2,
};
use bevy_vibrant::{
    Body, FrameInput, LeftClick, MiddleClick, MouseEnter, MouseLeave, Mouseable, Renderable,
    RightClick, Tween, TweenCommandsExt, VibrantAppExt, VibrantPlugin, VibrantSet,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Seen {
    Enter(Entity),
    Leave(Entity),
    Left(Entity),
    Middle(Entity),
    Right(Entity),
}

#[derive(Resource, Default)]
struct Recorded(Vec<Seen>);

fn record(
    mut enter: EventReader<MouseEnter>,
    mut leave: EventReader<MouseLeave>,
    mut left: EventReader<LeftClick>,
    mut middle: EventReader<MiddleClick>,
    mut right: EventReader<RightClick>,
    mut recorded: ResMut<Recorded>,
) {
    recorded.0.extend(enter.read().map(|e| Seen::Enter(e.entity)));
    recorded.0.extend(leave.read().map(|e| Seen::Leave(e.entity)));
    recorded.0.extend(left.read().map(|e| Seen::Left(e.entity)));
    recorded.0.extend(middle.read().map(|e| Seen::Middle(e.entity)));
    recorded.0.extend(right.read().map(|e| Seen::Right(e.entity)));
}

fn app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(VibrantPlugin::default())
        .init_resource::<Recorded>()
        .add_systems(Update, record.in_set(VibrantSet::Behavior));
    app
}

fn button(app: &mut App) -> Entity {
    app.world_mut()
        .spawn((
            Body::new(Vector2::new(100.0, 100.0), Vector2::new(50.0, 20.0)),
            Mouseable::default(),
        ))
        .id()
}

fn pointer_frame(app: &mut App, x: f64, y: f64, left: ButtonState) -> Vec<Seen> {
    let pointer = PointerSnapshot::at(x, y).with(Button::Left, left);
    app.advance_frame(FrameInput::new(0.016).with_pointer(pointer))
        .unwrap();
    std::mem::take(&mut app.world_mut().resource_mut::<Recorded>().0)
}

#[test]
fn hover_press_release_clicks() {
    let mut app = app();
    let b = button(&mut app);

    assert_eq!(
        pointer_frame(&mut app, 100.0, 100.0, ButtonState::Idle),
        vec![Seen::Enter(b)]
    );
    assert!(pointer_frame(&mut app, 110.0, 105.0, ButtonState::Pressed).is_empty());
    assert!(app.world().get::<Mouseable>(b).unwrap().left_down_on);

    assert_eq!(
        pointer_frame(&mut app, 110.0, 105.0, ButtonState::Released),
        vec![Seen::Left(b)]
    );
    assert!(!app.world().get::<Mouseable>(b).unwrap().left_down_on);

    assert_eq!(
        pointer_frame(&mut app, 300.0, 300.0, ButtonState::Idle),
        vec![Seen::Leave(b)]
    );
}

#[test]
fn leaving_while_pressed_cancels_the_click() {
    let mut app = app();
    let b = button(&mut app);

    pointer_frame(&mut app, 100.0, 100.0, ButtonState::Pressed);
    assert_eq!(
        pointer_frame(&mut app, 0.0, 0.0, ButtonState::Held),
        vec![Seen::Leave(b)]
    );
    assert!(pointer_frame(&mut app, 0.0, 0.0, ButtonState::Released).is_empty());
    // Coming back and releasing again does not resurrect it.
    assert_eq!(
        pointer_frame(&mut app, 100.0, 100.0, ButtonState::Released),
        vec![Seen::Enter(b)]
    );
}

#[test]
fn right_and_middle_buttons() {
    let mut app = app();
    let b = button(&mut app);

    let press = PointerSnapshot::at(100.0, 100.0)
        .with(Button::Middle, ButtonState::Pressed)
        .with(Button::Right, ButtonState::Pressed);
    let release = PointerSnapshot::at(100.0, 100.0)
        .with(Button::Middle, ButtonState::Released)
        .with(Button::Right, ButtonState::Released);
    app.advance_frame(FrameInput::new(0.016).with_pointer(press))
        .unwrap();
    app.advance_frame(FrameInput::new(0.016).with_pointer(release))
        .unwrap();

    assert_eq!(
        app.world().resource::<Recorded>().0,
        vec![Seen::Enter(b), Seen::Middle(b), Seen::Right(b)]
    );
}

#[test]
fn frames_without_pointer_leave_state_alone() {
    let mut app = app();
    let b = button(&mut app);
    pointer_frame(&mut app, 100.0, 100.0, ButtonState::Pressed);

    app.advance_frame(FrameInput::new(0.016)).unwrap();
    let state = *app.world().get::<Mouseable>(b).unwrap();
    assert!(state.hover);
    assert!(state.left_down_on);
    assert!(app.world().resource::<Recorded>().0.is_empty());
}

#[test]
fn events_name_the_entity_under_the_pointer() {
    let mut app = app();
    let a = button(&mut app);
    let far = app
        .world_mut()
        .spawn((
            Body::new(Vector2::new(500.0, 500.0), Vector2::new(10.0, 10.0)),
            Mouseable::default(),
        ))
        .id();

    assert_eq!(
        pointer_frame(&mut app, 500.0, 503.0, ButtonState::Idle),
        vec![Seen::Enter(far)]
    );
    assert_eq!(
        pointer_frame(&mut app, 100.0, 100.0, ButtonState::Idle),
        vec![Seen::Enter(a), Seen::Leave(far)]
    );
}

#[test]
fn rotation_changes_the_hit_area() {
    let mut app = app();
    let b = app
        .world_mut()
        .spawn((
            Body::new(Vector2::ZERO, Vector2::new(100.0, 10.0))
                .with_rotation(std::f64::consts::FRAC_PI_2),
            Mouseable::default(),
        ))
        .id();

    assert!(pointer_frame(&mut app, 40.0, 0.0, ButtonState::Idle).is_empty());
    assert_eq!(
        pointer_frame(&mut app, 0.0, 40.0, ButtonState::Idle),
        vec![Seen::Enter(b)]
    );
}

fn highlight_on_enter(mut commands: Commands, mut enter: EventReader<MouseEnter>) {
    for event in enter.read() {
        commands.tween(
            event.entity,
            Tween::FillColor(Rgb::WHITE),
            Timing::new(1.0, Ease::OutQuad).unwrap(),
        );
    }
}

#[test]
fn behaviors_react_within_the_frame() {
    let mut app = app();
    app.add_systems(Update, highlight_on_enter.in_set(VibrantSet::Behavior));
    let b = app
        .world_mut()
        .spawn((
            Body::new(Vector2::new(10.0, 10.0), Vector2::new(10.0, 10.0)),
            Mouseable::default(),
            Renderable(Shape::filled_rectangle(Rgb::BLACK)),
        ))
        .id();

    pointer_frame(&mut app, 10.0, 10.0, ButtonState::Idle);
    app.advance_frame(FrameInput::new(1.0)).unwrap();
    let shape = app.world().get::<Renderable>(b).unwrap();
    assert_eq!(shape.fill().unwrap().color, Rgb::WHITE);
}

#[test]
#[should_panic(expected = "no Body")]
fn mouseable_without_body_panics() {
    let mut app = app();
    app.world_mut().spawn(Mouseable::default());
    pointer_frame(&mut app, 0.0, 0.0, ButtonState::Idle);
}

#[test]
fn zero_sized_body_is_never_hovered() {
    let mut app = app();
    let e = app
        .world_mut()
        .spawn((Body::default(), Mouseable::default()))
        .id();

    assert!(pointer_frame(&mut app, 0.0, 0.0, ButtonState::Pressed).is_empty());
    assert!(pointer_frame(&mut app, 4000.0, -4000.0, ButtonState::Released).is_empty());
    assert!(!app.world().get::<Mouseable>(e).unwrap().hover);
}
