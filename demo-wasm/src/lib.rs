use sticks::{FrameInput, InputEvent, Sandbox, SandboxConfig, Vec2};
use wasm_bindgen::prelude::*;

// ---- Sandbox Demo ----

/// Browser wrapper: JS forwards pointer and key events, calls `update` once
/// per animation frame, then draws from the flat buffers.
#[wasm_bindgen]
pub struct SandboxDemo {
    sandbox: Sandbox<f32>,
    pending: Vec<InputEvent<f32>>,
    pointer: Vec2<f32>,
    secondary_held: bool,
}

#[wasm_bindgen]
impl SandboxDemo {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        SandboxDemo {
            sandbox: Sandbox::default(),
            pending: Vec::new(),
            pointer: Vec2::new(0.0, 0.0),
            secondary_held: false,
        }
    }

    /// Start with a custom gravity scale and relaxation count.
    pub fn with_tuning(gravity_scale: f32, iterations: usize) -> Result<SandboxDemo, JsError> {
        let config = SandboxConfig::new()
            .with_gravity_scale(gravity_scale)
            .with_iterations(iterations);
        let sandbox = Sandbox::new(config).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(SandboxDemo {
            sandbox,
            pending: Vec::new(),
            pointer: Vec2::new(0.0, 0.0),
            secondary_held: false,
        })
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    pub fn primary_down(&mut self, x: f32, y: f32) {
        self.pending.push(InputEvent::Primary(Vec2::new(x, y)));
    }

    pub fn secondary_down(&mut self, x: f32, y: f32) {
        self.secondary_held = true;
        self.pending.push(InputEvent::SecondaryPressed(Vec2::new(x, y)));
    }

    pub fn secondary_up(&mut self, x: f32, y: f32) {
        self.secondary_held = false;
        self.pending.push(InputEvent::SecondaryReleased(Vec2::new(x, y)));
    }

    pub fn toggle_mode(&mut self) {
        self.pending.push(InputEvent::ToggleMode);
    }

    pub fn generate_grid(&mut self) {
        self.pending.push(InputEvent::GenerateGrid);
    }

    pub fn update(&mut self, dt: f32) {
        let input = FrameInput {
            pointer: self.pointer,
            events: std::mem::take(&mut self.pending),
            secondary_held: self.secondary_held,
        };
        self.sandbox.advance(&input, dt);
    }

    pub fn is_simulating(&self) -> bool {
        self.sandbox.mode().is_simulating()
    }

    /// Returns flat [x0, y0, x1, y1, ...] positions
    pub fn positions(&self) -> Vec<f32> {
        let view = self.sandbox.view(self.pointer);
        let mut out = Vec::with_capacity(view.point_count() * 2);
        for (p, _) in view.points() {
            out.push(p.x);
            out.push(p.y);
        }
        out
    }

    /// One flag per point: 1 when locked.
    pub fn locked(&self) -> Vec<u8> {
        self.sandbox.view(self.pointer).points().map(|(_, locked)| locked as u8).collect()
    }

    /// Returns flat [ax, ay, bx, by, ...] stick endpoints
    pub fn segments(&self) -> Vec<f32> {
        let view = self.sandbox.view(self.pointer);
        let mut out = Vec::with_capacity(view.stick_count() * 4);
        for (a, b) in view.segments() {
            out.extend_from_slice(&[a.x, a.y, b.x, b.y]);
        }
        out
    }

    /// [ax, ay, bx, by] of the link being drawn, or empty.
    pub fn preview(&self) -> Vec<f32> {
        match self.sandbox.view(self.pointer).preview_link() {
            Some((a, b)) => vec![a.x, a.y, b.x, b.y],
            None => Vec::new(),
        }
    }

    pub fn point_radius(&self) -> f32 {
        self.sandbox.config().point_radius
    }
}

impl Default for SandboxDemo {
    fn default() -> Self {
        Self::new()
    }
}
