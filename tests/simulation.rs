use bounce_pong::Config;
use bounce_pong::platform::{FrameLoop, HeadlessScheduler, InputEvent, NoInput, ScriptedInput};
use bounce_pong::renderer::{Canvas, VertexBatch, draw_scene};
use bounce_pong::sim::*;
use glam::Vec2;

/// Counts draw calls per frame
#[derive(Default)]
struct CountingCanvas {
    rects: usize,
    circles: usize,
    frames: usize,
}

impl Canvas for CountingCanvas {
    fn size(&self) -> Vec2 {
        Vec2::new(800.0, 600.0)
    }

    fn begin_frame(&mut self) {
        self.frames += 1;
        self.rects = 0;
        self.circles = 0;
    }

    fn fill_rect(&mut self, _origin: Vec2, _size: Vec2, _color: Color) {
        self.rects += 1;
    }

    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Color) {
        self.circles += 1;
    }
}

fn running(seed: u64) -> SimState {
    let mut state = SimState::new(Config::default(), seed);
    state.initialize();
    state
}

#[test]
fn test_fixed_seed_initial_layout() {
    let state = running(12345);
    assert_eq!(state.bodies.len(), 5);
    let colors: Vec<Color> = state.bodies.iter().map(|b| b.color).collect();
    assert_eq!(
        colors,
        vec![Color::Red, Color::Blue, Color::Yellow, Color::Cyan, Color::Purple]
    );
    for body in &state.bodies {
        assert_eq!(body.pos, Vec2::new(400.0, 300.0));
        assert!(body.radius > 0.0);
    }
    assert_eq!(state.player.pos, Vec2::new(0.0, 180.0));
    assert_eq!(state.autopilot.pos, Vec2::new(790.0, 270.0));
}

#[test]
fn test_player_paddle_stays_on_screen_without_input() {
    let mut state = running(2);
    let max_y = state.playfield.height - state.player.size.y;
    for _ in 0..1000 {
        tick(&mut state);
        assert!(state.player.pos.y >= 0.0 && state.player.pos.y <= max_y);
    }
    // Untouched keys leave the player paddle where it started
    assert_eq!(state.player.pos.y, 180.0);
}

#[test]
fn test_player_paddle_stays_on_screen_with_held_keys() {
    let mut state = running(3);
    let max_y = state.playfield.height - state.player.size.y;
    state.keys.key_down(KEY_UP);
    for frame in 0..1000 {
        if frame == 500 {
            state.keys.key_up(KEY_UP);
            state.keys.key_down(KEY_DOWN);
        }
        tick(&mut state);
        assert!(state.player.pos.y >= 0.0 && state.player.pos.y <= max_y);
    }
}

#[test]
fn test_autopilot_keeps_oscillating() {
    let mut state = running(4);
    let mut flips = 0;
    let mut direction = state.autopilot.direction;
    for _ in 0..1000 {
        tick(&mut state);
        if state.autopilot.direction != direction {
            flips += 1;
            direction = state.autopilot.direction;
        }
        // Never more than one step past an edge
        assert!(state.autopilot.top() > -state.autopilot.speed);
        assert!(state.autopilot.bottom() < state.playfield.height + state.autopilot.speed);
    }
    // 5 steps of 0.8 per frame over a 500px range
    assert!(flips >= 5, "only {flips} reversals");
}

#[test]
fn test_bodies_stay_in_population_and_near_field() {
    let mut state = running(5);
    for _ in 0..2000 {
        tick(&mut state);
        assert_eq!(state.bodies.len(), 5);
        for body in &state.bodies {
            // Respawn keeps every body within one step of the playfield
            assert!(body.pos.x > -6.0 && body.pos.x < 806.0);
            assert!(body.pos.y > -40.0 && body.pos.y < 640.0);
        }
    }
}

#[test]
fn test_frame_loop_with_scripted_keys() {
    let state = SimState::new(Config::default(), 6);
    let mut frame_loop = FrameLoop::new(state, VertexBatch::new(Vec2::new(800.0, 600.0)));
    let mut input = ScriptedInput::new(vec![
        (0, InputEvent::KeyDown(KEY_UP.into())),
        (10, InputEvent::KeyUp(KEY_UP.into())),
    ]);

    let frames = frame_loop.run(&mut HeadlessScheduler::new(30), &mut input);
    assert_eq!(frames, 30);
    // 10 frames x 5 bodies x 0.7 px
    assert!((frame_loop.state.player.pos.y - (180.0 - 35.0)).abs() < 1e-2);
    assert!(!frame_loop.state.keys.is_pressed(KEY_UP));
}

#[test]
fn test_every_frame_redraws_full_scene() {
    let state = SimState::new(Config::default(), 7);
    let mut frame_loop = FrameLoop::new(state, CountingCanvas::default());
    frame_loop.run(&mut HeadlessScheduler::new(25), &mut NoInput);
    assert_eq!(frame_loop.canvas.frames, 25);
    assert_eq!(frame_loop.canvas.circles, 5);
    assert_eq!(frame_loop.canvas.rects, 3);
}

#[test]
fn test_custom_body_count_cycles_palette() {
    let config = Config {
        body_count: 12,
        ..Config::default()
    };
    let mut state = SimState::new(config, 8);
    state.initialize();
    assert_eq!(state.bodies.len(), 12);
    for (i, body) in state.bodies.iter().enumerate() {
        assert_eq!(body.color, BALL_PALETTE[i % 5]);
    }
    assert_eq!(state.paddle_steps_per_frame(), 12);

    let mut canvas = CountingCanvas::default();
    draw_scene(&state, &mut canvas);
    assert_eq!(canvas.circles, 12);
}

#[test]
fn test_unstyled_canvas_keeps_paddles_on_screen() {
    let config = Config::default().with_playfield(300.0, 150.0);
    let mut state = SimState::new(config, 9);
    state.initialize();

    for paddle in [&state.player, &state.autopilot] {
        assert!(paddle.top() >= 0.0, "{paddle:?}");
        assert!(paddle.bottom() <= state.playfield.height, "{paddle:?}");
    }

    // The player paddle can still travel
    let start = state.player.pos.y;
    state.keys.key_down(KEY_DOWN);
    let max_y = state.playfield.height - state.player.size.y;
    for _ in 0..100 {
        tick(&mut state);
        assert!(state.player.pos.y >= 0.0 && state.player.pos.y <= max_y);
    }
    assert!(state.player.pos.y > start);
}
