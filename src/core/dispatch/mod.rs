//! Action dispatch
//!
//! Resolves a `{action, payload}` envelope to exactly one upstream call and
//! normalizes the upstream response into a `{result}` envelope.
//!
//! Each [`Action`] has a payload type implementing [`ActionHandler`], which
//! owns the payload schema, the upstream request shape, the model family and
//! the normalization rule for that action.

mod action;
mod dispatcher;
mod envelope;
mod handlers;
pub mod normalize;
mod payload;
mod request;

pub use action::Action;
pub use dispatcher::Dispatcher;
pub use envelope::{ActionOutput, ErrorEnvelope, GroundedAnswer, RequestEnvelope, SuccessEnvelope};
pub use handlers::{ActionHandler, dance_prompt};
pub use payload::{
    AnalyzeContentPayload, ChatRole, ChatWithSearchPayload, EditImagePayload, FastTextPayload,
    GenerateDancePayload, GenerateImagePayload, HistoryTurn, ImageSize,
};
pub use request::ActionRequest;
