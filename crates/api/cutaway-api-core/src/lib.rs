//! cutaway-api-core: shared pose & keyframe write API (engine-agnostic)

pub mod channel;
pub mod key_ops;
pub mod pose;

pub use channel::{Channel, ParseChannelError};
pub use key_ops::{Frame, KeyBatch, KeyOp};
pub use pose::Pose;
