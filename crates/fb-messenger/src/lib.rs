//! fb-messenger: Facebook Messenger Send API client
//!
//! Thin client over the Messenger Platform Send API, Messenger Profile
//! settings, and User Profile lookup. Each operation validates its inputs,
//! posts one JSON payload with the page access token as a query parameter,
//! and passes the raw response back to the caller.

pub mod api;
pub mod config;
pub mod error;
pub mod types;

pub use api::{DEFAULT_START_PAYLOAD, MessengerApi};
pub use config::{Config, DEFAULT_GRAPH_URL, PAGE_ACCESS_TOKEN_VAR};
pub use error::{MessengerError, Result};
pub use types::{
    Attachment, AttachmentKind, Button, DefaultAction, Delivery, GenericElement, Greeting,
    ImageAspectRatio, MediaPayload, MenuItem, Message, MessageContent, MessagingType,
    OutgoingMessage, PersistentMenu, QuickReply, Recipient, SendReceipt, SenderAction,
    TemplatePayload, UserProfile,
};
