mod health;
mod message;
mod metrics;
mod verify;

pub use health::*;
pub use message::*;
pub use metrics::*;
pub use verify::*;
