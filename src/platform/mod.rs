//! Platform seams
//!
//! Input events and frame scheduling. The browser driver in `main.rs`
//! feeds keyboard events and requestAnimationFrame callbacks into a
//! [`FrameLoop`]; native and test runs use [`HeadlessScheduler`].

use crate::renderer::{Canvas, draw_scene};
use crate::sim::{KeyState, Phase, SimState, tick};

/// A discrete key transition from the host, keyed by platform key identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(String),
    KeyUp(String),
}

impl InputEvent {
    pub fn apply(&self, keys: &mut KeyState) {
        match self {
            InputEvent::KeyDown(key) => keys.key_down(key),
            InputEvent::KeyUp(key) => keys.key_up(key),
        }
    }
}

/// Source of input events delivered between frames
pub trait InputSource {
    /// Events that arrived before `frame` is ticked
    fn drain(&mut self, frame: u64) -> Vec<InputEvent>;
}

/// No input at all
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl InputSource for NoInput {
    fn drain(&mut self, _frame: u64) -> Vec<InputEvent> {
        Vec::new()
    }
}

/// Events scheduled ahead of time, each delivered before its frame
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    /// (frame, event), sorted by frame
    events: Vec<(u64, InputEvent)>,
}

impl ScriptedInput {
    pub fn new(mut events: Vec<(u64, InputEvent)>) -> Self {
        events.sort_by_key(|(frame, _)| *frame);
        Self { events }
    }
}

impl InputSource for ScriptedInput {
    fn drain(&mut self, frame: u64) -> Vec<InputEvent> {
        let due = self.events.partition_point(|(at, _)| *at <= frame);
        self.events.drain(..due).map(|(_, event)| event).collect()
    }
}

/// "Call me again before the next refresh"
pub trait FrameScheduler {
    /// Request another frame. `false` means the host is shutting the loop down.
    fn request_frame(&mut self) -> bool;
}

/// Grants a fixed number of frames, then declines
#[derive(Debug, Clone)]
pub struct HeadlessScheduler {
    remaining: u64,
}

impl HeadlessScheduler {
    /// Allow `frames` frames in total (the first frame always runs)
    pub fn new(frames: u64) -> Self {
        Self {
            remaining: frames.saturating_sub(1),
        }
    }
}

impl FrameScheduler for HeadlessScheduler {
    fn request_frame(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// Drives the simulation: input, tick, draw, repeat
pub struct FrameLoop<C: Canvas> {
    pub state: SimState,
    pub canvas: C,
}

impl<C: Canvas> FrameLoop<C> {
    pub fn new(state: SimState, canvas: C) -> Self {
        Self { state, canvas }
    }

    pub fn handle_input(&mut self, event: &InputEvent) {
        event.apply(&mut self.state.keys);
    }

    /// Tick once and redraw
    pub fn frame(&mut self) {
        tick(&mut self.state);
        draw_scene(&self.state, &mut self.canvas);
    }

    /// Run until the scheduler declines. Returns the number of frames ticked.
    pub fn run<S, I>(&mut self, scheduler: &mut S, input: &mut I) -> u64
    where
        S: FrameScheduler + ?Sized,
        I: InputSource + ?Sized,
    {
        if self.state.phase == Phase::Uninitialized {
            self.state.initialize();
        }

        loop {
            for event in input.drain(self.state.frame) {
                self.handle_input(&event);
            }
            self.frame();
            if !scheduler.request_frame() {
                break;
            }
        }

        log::info!("Frame loop stopped after {} frames", self.state.frame);
        self.state.frame
    }
}
