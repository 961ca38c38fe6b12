pub mod env;
mod event;
mod movie;

pub use event::{GatewayEvent, RequestContext, RequestIdentity};
pub use movie::{DEFAULT_TITLE, DEFAULT_YEAR, MalformedPayload, Movie, Payload};

pub type Error = Box<dyn std::error::Error + Send + Sync>;
