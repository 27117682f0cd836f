pub mod composer;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod message;
pub mod scroll;
pub mod session;
pub mod transcript;

pub use composer::{ComposeState, CompositionBuffer};
pub use config::{Config, LoggingConfig, SessionConfig, UiConfig};
pub use controller::{Key, SubmissionController, SubmitOutcome, ViewEffect};
pub use error::{Error, Result};
pub use message::{Author, Message};
pub use scroll::{ScrollBehavior, ScrollRequest, ScrollSynchronizer, ScrollTarget};
pub use session::ChatSession;
pub use transcript::{MessageStore, TranscriptChange, TranscriptReceiver};
