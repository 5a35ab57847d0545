mod core;
mod messages;
mod state;

pub use self::core::{InteractionController, Transition, apply};
pub use messages::{LocationSelected, TransitionOutcome};
pub use state::ControllerState;
