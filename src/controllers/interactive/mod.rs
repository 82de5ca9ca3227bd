//! Interactive controller for real-time fractal exploration.
//!
//! Input handlers feed viewport and parameter changes in; a worker thread
//! renders the fractal or steps the automaton and hands finished frames to a
//! presenter port.

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod pointer_drag;
pub mod ports;
pub mod scheduler;

pub use controller::InteractiveController;
pub use events::render_event::RenderEvent;
pub use ports::presenter_port::InteractiveControllerPresenterPort;
