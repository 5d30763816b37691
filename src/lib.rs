//! Point-and-stick Verlet sandbox.
//!
//! `sticks` is the model behind an interactive toy: in edit mode the user
//! drops point masses, locks some of them, and links pairs with rigid sticks;
//! in simulate mode gravity pulls everything down while repeated stick
//! relaxation holds the structure together, and sticks can be cut with the
//! pointer. Windowing, drawing, and timing belong to the host, which feeds a
//! [`FrameInput`] to [`Sandbox::advance`] each frame and draws from
//! [`Sandbox::view`].
//!
//! # Features
//!
//! - **Verlet integration**: Position-based dynamics with implicit velocity
//! - **Stick relaxation**: Fixed-iteration midpoint projection, locked points stay put
//! - **Editing**: Place, lock, link, and seed a lattice with explicit gesture states
//! - **Hit testing**: Disc picks for points, capsule picks for sticks
//! - **Observable**: Monitor physics steps via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use sticks::{FrameInput, InputEvent, Sandbox, Vec2};
//!
//! let mut sandbox = Sandbox::<f32>::default();
//! let frame = FrameInput::idle(Vec2::new(0.0, 0.0))
//!     .with_event(InputEvent::GenerateGrid)
//!     .with_event(InputEvent::ToggleMode);
//! sandbox.advance(&frame, 1.0 / 60.0);
//! assert_eq!(sandbox.store().point_count(), 225);
//! assert_eq!(sandbox.step_count(), 1);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod geometry;
pub mod point;
pub mod constraint;
pub mod store;
pub mod grid;
pub mod editor;
pub mod simulation;
pub mod mode;
pub mod input;
pub mod clock;
pub mod view;
pub mod sandbox;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Vec2};
pub use point::{PointId, PointMass};
pub use constraint::{Stick, StickId};
pub use store::EntityStore;
pub use grid::GridConfig;
pub use editor::{EditAction, EditState};
pub use mode::Mode;
pub use input::{FrameInput, InputEvent};
pub use clock::{FixedStepClock, FrameClock, ManualClock};
pub use view::SceneView;
pub use sandbox::{FrameReport, Sandbox};
pub use config::{NewPointPolicy, SandboxConfig};
pub use observer::{NoOpStepObserver, StepCounter, StepObserver};
pub use error::SandboxError;
