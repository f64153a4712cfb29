//! Messenger Platform wire types
//!
//! Typed payloads for the Send API and Messenger Profile API. Each content
//! variant is a tagged type, so an unsupported shape cannot be constructed.

use serde::{Deserialize, Serialize};

use crate::error::{MessengerError, Result};

/// Maximum characters in an outgoing text message.
pub const TEXT_CHAR_LIMIT: usize = 320;

/// Maximum characters in a greeting text.
pub const GREETING_CHAR_LIMIT: usize = 160;

/// Maximum quick replies per message.
pub const QUICK_REPLY_LIMIT: usize = 11;

/// Maximum domains per whitelist request.
pub const DOMAIN_WHITELIST_LIMIT: usize = 10;

/// Maximum characters in a button template text.
pub const BUTTON_TEMPLATE_TEXT_LIMIT: usize = 640;

/// Maximum buttons on a button template.
pub const BUTTON_TEMPLATE_BUTTON_LIMIT: usize = 3;

/// Maximum elements in a generic template carousel.
pub const GENERIC_TEMPLATE_ELEMENT_LIMIT: usize = 10;

/// Maximum characters in a generic template title or subtitle.
pub const GENERIC_TEMPLATE_TEXT_LIMIT: usize = 80;

pub(crate) fn ensure_absolute_url(field: &str, value: &str) -> Result<()> {
    url::Url::parse(value).map_err(|_| {
        MessengerError::Validation(format!("{field} must be an absolute URL: {value}"))
    })?;
    Ok(())
}

/// Message target (page-scoped user id)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipient {
    pub id: String,
}

impl Recipient {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Messaging type carried on every Send API payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessagingType {
    #[default]
    Response,
    Update,
    MessageTag,
}

/// Sender action shown in the conversation thread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SenderAction {
    TypingOn,
    TypingOff,
    MarkSeen,
}

/// Media attachment kinds accepted by the Send API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Audio,
    File,
    Image,
    Video,
}

/// Payload of a media attachment: a hosted URL or a reusable attachment id
#[derive(Debug, Clone, Default, Serialize)]
pub struct MediaPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_reusable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_id: Option<String>,
}

impl MediaPayload {
    /// Payload referencing a hosted media URL.
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Payload referencing a hosted media URL, marked reusable so the
    /// response carries an `attachment_id`.
    pub fn reusable_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            is_reusable: Some(true),
            ..Default::default()
        }
    }

    /// Payload referencing a previously uploaded attachment.
    pub fn attachment_id(id: impl Into<String>) -> Self {
        Self {
            attachment_id: Some(id.into()),
            ..Default::default()
        }
    }
}

/// Message attachment: media by kind, or a structured template
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "lowercase")]
pub enum Attachment {
    Audio(MediaPayload),
    File(MediaPayload),
    Image(MediaPayload),
    Video(MediaPayload),
    Template(TemplatePayload),
}

impl Attachment {
    /// Media attachment of the given kind.
    pub fn media(kind: AttachmentKind, payload: MediaPayload) -> Self {
        match kind {
            AttachmentKind::Audio => Attachment::Audio(payload),
            AttachmentKind::File => Attachment::File(payload),
            AttachmentKind::Image => Attachment::Image(payload),
            AttachmentKind::Video => Attachment::Video(payload),
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            Attachment::Audio(media)
            | Attachment::File(media)
            | Attachment::Image(media)
            | Attachment::Video(media) => {
                if media.url.is_none() && media.attachment_id.is_none() {
                    return Err(MessengerError::Validation(
                        "attachment needs a url or an attachment_id".to_string(),
                    ));
                }
                if let Some(url) = &media.url {
                    ensure_absolute_url("attachment url", url)?;
                }
                Ok(())
            }
            Attachment::Template(template) => template.validate(),
        }
    }
}

/// Structured template payloads
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "template_type", rename_all = "lowercase")]
pub enum TemplatePayload {
    Button {
        text: String,
        buttons: Vec<Button>,
        #[serde(skip_serializing_if = "Option::is_none")]
        sharable: Option<bool>,
    },
    Generic {
        elements: Vec<GenericElement>,
        #[serde(skip_serializing_if = "Option::is_none")]
        sharable: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        image_aspect_ratio: Option<ImageAspectRatio>,
    },
}

impl TemplatePayload {
    pub fn button(text: impl Into<String>, buttons: Vec<Button>) -> Self {
        TemplatePayload::Button {
            text: text.into(),
            buttons,
            sharable: None,
        }
    }

    pub fn generic(elements: Vec<GenericElement>) -> Self {
        TemplatePayload::Generic {
            elements,
            sharable: None,
            image_aspect_ratio: None,
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            TemplatePayload::Button { text, buttons, .. } => {
                if text.chars().count() > BUTTON_TEMPLATE_TEXT_LIMIT {
                    return Err(MessengerError::Validation(format!(
                        "button template text exceeds {BUTTON_TEMPLATE_TEXT_LIMIT} characters"
                    )));
                }
                if buttons.is_empty() || buttons.len() > BUTTON_TEMPLATE_BUTTON_LIMIT {
                    return Err(MessengerError::Validation(format!(
                        "button template takes 1 to {BUTTON_TEMPLATE_BUTTON_LIMIT} buttons"
                    )));
                }
                for button in buttons {
                    button.validate()?;
                }
                Ok(())
            }
            TemplatePayload::Generic { elements, .. } => {
                if elements.is_empty() || elements.len() > GENERIC_TEMPLATE_ELEMENT_LIMIT {
                    return Err(MessengerError::Validation(format!(
                        "generic template takes 1 to {GENERIC_TEMPLATE_ELEMENT_LIMIT} elements"
                    )));
                }
                for element in elements {
                    element.validate()?;
                }
                Ok(())
            }
        }
    }
}

/// Image rendering ratio for generic template elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageAspectRatio {
    Horizontal,
    Square,
}

/// Call-to-action button
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Button {
    WebUrl { title: String, url: String },
    Postback { title: String, payload: String },
    PhoneNumber { title: String, payload: String },
    ElementShare,
}

impl Button {
    pub fn web_url(title: impl Into<String>, url: impl Into<String>) -> Self {
        Button::WebUrl {
            title: title.into(),
            url: url.into(),
        }
    }

    pub fn postback(title: impl Into<String>, payload: impl Into<String>) -> Self {
        Button::Postback {
            title: title.into(),
            payload: payload.into(),
        }
    }

    /// Call button; `phone_number` must carry a leading `+` country code.
    pub fn call(title: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Button::PhoneNumber {
            title: title.into(),
            payload: phone_number.into(),
        }
    }

    fn validate(&self) -> Result<()> {
        if let Button::WebUrl { url, .. } = self {
            ensure_absolute_url("button url", url)?;
        }
        Ok(())
    }
}

/// One element of a generic template
#[derive(Debug, Clone, Serialize)]
pub struct GenericElement {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_action: Option<DefaultAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<Button>>,
}

impl GenericElement {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            image_url: None,
            subtitle: None,
            default_action: None,
            buttons: None,
        }
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_default_action(mut self, action: DefaultAction) -> Self {
        self.default_action = Some(action);
        self
    }

    pub fn with_buttons(mut self, buttons: Vec<Button>) -> Self {
        self.buttons = Some(buttons);
        self
    }

    fn validate(&self) -> Result<()> {
        if self.title.is_empty() || self.title.chars().count() > GENERIC_TEMPLATE_TEXT_LIMIT {
            return Err(MessengerError::Validation(format!(
                "element title takes 1 to {GENERIC_TEMPLATE_TEXT_LIMIT} characters"
            )));
        }
        if let Some(subtitle) = &self.subtitle {
            if subtitle.chars().count() > GENERIC_TEMPLATE_TEXT_LIMIT {
                return Err(MessengerError::Validation(format!(
                    "element subtitle exceeds {GENERIC_TEMPLATE_TEXT_LIMIT} characters"
                )));
            }
        }
        if let Some(image_url) = &self.image_url {
            ensure_absolute_url("element image_url", image_url)?;
        }
        if let Some(buttons) = &self.buttons {
            for button in buttons {
                button.validate()?;
            }
        }
        Ok(())
    }
}

/// Default tap action on a generic template element
#[derive(Debug, Clone, Serialize)]
pub struct DefaultAction {
    #[serde(rename = "type")]
    pub action_type: String,
    pub url: String,
}

impl DefaultAction {
    pub fn web_url(url: impl Into<String>) -> Self {
        Self {
            action_type: "web_url".to_string(),
            url: url.into(),
        }
    }
}

/// Quick reply option shown under a message
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "content_type", rename_all = "snake_case")]
pub enum QuickReply {
    Text {
        title: String,
        payload: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        image_url: Option<String>,
    },
    Location,
}

impl QuickReply {
    pub fn text(title: impl Into<String>, payload: impl Into<String>) -> Self {
        QuickReply::Text {
            title: title.into(),
            payload: payload.into(),
            image_url: None,
        }
    }
}

/// Message content: text, attachment, quick replies, or any combination
/// the Send API accepts
#[derive(Debug, Clone, Default, Serialize)]
pub struct Message {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_replies: Option<Vec<QuickReply>>,
}

impl Message {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn attachment(attachment: Attachment) -> Self {
        Self {
            attachment: Some(attachment),
            ..Default::default()
        }
    }

    pub fn with_quick_replies(mut self, quick_replies: Vec<QuickReply>) -> Self {
        self.quick_replies = Some(quick_replies);
        self
    }

    fn validate(&self) -> Result<()> {
        if self.text.is_none() && self.attachment.is_none() {
            return Err(MessengerError::Validation(
                "message needs text or an attachment".to_string(),
            ));
        }
        if let Some(text) = &self.text {
            if text.is_empty() {
                return Err(MessengerError::Validation("text must not be empty".to_string()));
            }
            if text.chars().count() > TEXT_CHAR_LIMIT {
                return Err(MessengerError::Validation(format!(
                    "text exceeds {TEXT_CHAR_LIMIT} characters"
                )));
            }
        }
        if let Some(attachment) = &self.attachment {
            attachment.validate()?;
        }
        if let Some(quick_replies) = &self.quick_replies {
            if quick_replies.is_empty() || quick_replies.len() > QUICK_REPLY_LIMIT {
                return Err(MessengerError::Validation(format!(
                    "quick replies take 1 to {QUICK_REPLY_LIMIT} entries"
                )));
            }
        }
        Ok(())
    }
}

/// Either a message body or a bare sender action
#[derive(Debug, Clone, Serialize)]
pub enum MessageContent {
    #[serde(rename = "message")]
    Message(Message),
    #[serde(rename = "sender_action")]
    SenderAction(SenderAction),
}

/// Complete Send API payload
#[derive(Debug, Clone, Serialize)]
pub struct OutgoingMessage {
    pub recipient: Recipient,
    pub messaging_type: MessagingType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(flatten)]
    pub content: MessageContent,
}

impl OutgoingMessage {
    /// Message payload with the default `RESPONSE` messaging type.
    pub fn message(recipient_id: impl Into<String>, message: Message) -> Self {
        Self {
            recipient: Recipient::new(recipient_id),
            messaging_type: MessagingType::default(),
            tag: None,
            content: MessageContent::Message(message),
        }
    }

    /// Sender action payload.
    pub fn sender_action(recipient_id: impl Into<String>, action: SenderAction) -> Self {
        Self {
            recipient: Recipient::new(recipient_id),
            messaging_type: MessagingType::default(),
            tag: None,
            content: MessageContent::SenderAction(action),
        }
    }

    pub fn with_messaging_type(mut self, messaging_type: MessagingType) -> Self {
        self.messaging_type = messaging_type;
        self
    }

    /// Attach a message tag. Tagged sends use the `MESSAGE_TAG` type.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self.messaging_type = MessagingType::MessageTag;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.recipient.id.trim().is_empty() {
            return Err(MessengerError::Validation(
                "recipient id must not be empty".to_string(),
            ));
        }
        match &self.content {
            MessageContent::Message(message) => message.validate(),
            MessageContent::SenderAction(_) => Ok(()),
        }
    }
}

/// Localized greeting text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Greeting {
    pub locale: String,
    pub text: String,
}

impl Greeting {
    pub fn new(locale: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            text: text.into(),
        }
    }

    /// Greeting for the `default` locale.
    pub fn default_locale(text: impl Into<String>) -> Self {
        Self::new("default", text)
    }
}

/// Per-locale persistent menu
#[derive(Debug, Clone, Serialize)]
pub struct PersistentMenu {
    pub locale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composer_input_disabled: Option<bool>,
    pub call_to_actions: Vec<MenuItem>,
}

impl PersistentMenu {
    pub fn new(locale: impl Into<String>, call_to_actions: Vec<MenuItem>) -> Self {
        Self {
            locale: locale.into(),
            composer_input_disabled: None,
            call_to_actions,
        }
    }
}

/// Persistent menu entry
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MenuItem {
    Postback {
        title: String,
        payload: String,
    },
    WebUrl {
        title: String,
        url: String,
    },
    Nested {
        title: String,
        call_to_actions: Vec<MenuItem>,
    },
}

/// User profile fields returned by the Graph API
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub profile_pic: Option<String>,
    /// Extra fields requested beyond the defaults.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Identifiers the Send API reports back for a delivered message
#[derive(Debug, Clone, Deserialize)]
pub struct SendReceipt {
    #[serde(default)]
    pub recipient_id: Option<String>,
    #[serde(default)]
    pub message_id: Option<String>,
    #[serde(default)]
    pub attachment_id: Option<String>,
}

/// Raw successful response from the Graph API
#[derive(Debug, Clone)]
pub struct Delivery {
    /// HTTP status code (always 2xx).
    pub status: u16,
    /// Response body, passed through untouched.
    pub body: String,
}

impl Delivery {
    /// Decode the body into the identifiers the Send API reports.
    pub fn receipt(&self) -> Result<SendReceipt> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_message_shape() {
        let message = OutgoingMessage::message("123", Message::text("Hi there"));
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(
            value,
            json!({
                "recipient": {"id": "123"},
                "messaging_type": "RESPONSE",
                "message": {"text": "Hi there"},
            })
        );
    }

    #[test]
    fn test_sender_action_shape() {
        let message = OutgoingMessage::sender_action("123", SenderAction::TypingOn);
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(
            value,
            json!({
                "recipient": {"id": "123"},
                "messaging_type": "RESPONSE",
                "sender_action": "typing_on",
            })
        );
    }

    #[test]
    fn test_media_attachment_shape() {
        let attachment = Attachment::media(
            AttachmentKind::Image,
            MediaPayload::url("https://example.com/cat.jpg"),
        );
        let value = serde_json::to_value(&attachment).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "image",
                "payload": {"url": "https://example.com/cat.jpg"},
            })
        );
    }

    #[test]
    fn test_reusable_attachment_shape() {
        let attachment = Attachment::media(
            AttachmentKind::Video,
            MediaPayload::attachment_id("1745504518999123"),
        );
        let value = serde_json::to_value(&attachment).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "video",
                "payload": {"attachment_id": "1745504518999123"},
            })
        );
    }

    #[test]
    fn test_quick_reply_tagging() {
        let replies = vec![
            QuickReply::text("Yes!", "USER_SAY_YES"),
            QuickReply::Location,
        ];
        let value = serde_json::to_value(&replies).unwrap();
        assert_eq!(
            value,
            json!([
                {"content_type": "text", "title": "Yes!", "payload": "USER_SAY_YES"},
                {"content_type": "location"},
            ])
        );
    }

    #[test]
    fn test_button_template_shape() {
        let template = TemplatePayload::button(
            "Would you like to log in?",
            vec![
                Button::web_url("Log in", "https://example.com/login"),
                Button::postback("Later", "USER_POSTPONED"),
                Button::ElementShare,
            ],
        );
        let value = serde_json::to_value(&template).unwrap();
        assert_eq!(
            value,
            json!({
                "template_type": "button",
                "text": "Would you like to log in?",
                "buttons": [
                    {"type": "web_url", "title": "Log in", "url": "https://example.com/login"},
                    {"type": "postback", "title": "Later", "payload": "USER_POSTPONED"},
                    {"type": "element_share"},
                ],
            })
        );
    }

    #[test]
    fn test_generic_template_shape() {
        let template = TemplatePayload::generic(vec![
            GenericElement::new("Classic White T-Shirt")
                .with_subtitle("100% cotton")
                .with_image_url("https://example.com/shirt.jpg")
                .with_default_action(DefaultAction::web_url("https://example.com/shop"))
                .with_buttons(vec![Button::postback("Buy", "BUY_SHIRT")]),
        ]);
        let value = serde_json::to_value(&template).unwrap();
        assert_eq!(
            value,
            json!({
                "template_type": "generic",
                "elements": [{
                    "title": "Classic White T-Shirt",
                    "image_url": "https://example.com/shirt.jpg",
                    "subtitle": "100% cotton",
                    "default_action": {"type": "web_url", "url": "https://example.com/shop"},
                    "buttons": [{"type": "postback", "title": "Buy", "payload": "BUY_SHIRT"}],
                }],
            })
        );
    }

    #[test]
    fn test_call_button_shape() {
        let button = Button::call("Call now", "+16505551234");
        let value = serde_json::to_value(&button).unwrap();
        assert_eq!(
            value,
            json!({"type": "phone_number", "title": "Call now", "payload": "+16505551234"})
        );
    }

    #[test]
    fn test_nested_menu_shape() {
        let menu = PersistentMenu::new(
            "default",
            vec![
                MenuItem::Nested {
                    title: "Options".to_string(),
                    call_to_actions: vec![MenuItem::Postback {
                        title: "Help".to_string(),
                        payload: "HELP".to_string(),
                    }],
                },
                MenuItem::WebUrl {
                    title: "Website".to_string(),
                    url: "https://example.com".to_string(),
                },
            ],
        );
        let value = serde_json::to_value(&menu).unwrap();
        assert_eq!(
            value,
            json!({
                "locale": "default",
                "call_to_actions": [
                    {
                        "type": "nested",
                        "title": "Options",
                        "call_to_actions": [
                            {"type": "postback", "title": "Help", "payload": "HELP"},
                        ],
                    },
                    {"type": "web_url", "title": "Website", "url": "https://example.com"},
                ],
            })
        );
    }

    #[test]
    fn test_tagged_send_uses_message_tag_type() {
        let message = OutgoingMessage::message("123", Message::text("Your order shipped"))
            .with_tag("POST_PURCHASE_UPDATE");
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["messaging_type"], "MESSAGE_TAG");
        assert_eq!(value["tag"], "POST_PURCHASE_UPDATE");
    }

    #[test]
    fn test_greeting_default_locale() {
        let greeting = Greeting::default_locale("Hello, {{user_first_name}}!");
        let value = serde_json::to_value(&greeting).unwrap();
        assert_eq!(
            value,
            json!({"locale": "default", "text": "Hello, {{user_first_name}}!"})
        );
    }

    #[test]
    fn test_user_profile_extra_fields() {
        let profile: UserProfile = serde_json::from_str(
            r#"{
                "id": "123",
                "first_name": "Ada",
                "last_name": "Lovelace",
                "profile_pic": "https://cdn.example.com/123.jpg",
                "locale": "en_GB"
            }"#,
        )
        .unwrap();
        assert_eq!(profile.first_name.as_deref(), Some("Ada"));
        assert_eq!(profile.extra["locale"], "en_GB");
    }

    #[test]
    fn test_delivery_receipt() {
        let delivery = Delivery {
            status: 200,
            body: r#"{"recipient_id":"123","message_id":"mid.1"}"#.to_string(),
        };
        let receipt = delivery.receipt().unwrap();
        assert_eq!(receipt.recipient_id.as_deref(), Some("123"));
        assert_eq!(receipt.message_id.as_deref(), Some("mid.1"));
        assert!(receipt.attachment_id.is_none());
    }

    #[test]
    fn test_validate_rejects_oversized_text() {
        let message = OutgoingMessage::message("123", Message::text("x".repeat(321)));
        assert!(matches!(
            message.validate(),
            Err(MessengerError::Validation(_))
        ));

        let message = OutgoingMessage::message("123", Message::text("x".repeat(320)));
        assert!(message.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_relative_attachment_url() {
        let message = OutgoingMessage::message(
            "123",
            Message::attachment(Attachment::media(
                AttachmentKind::Image,
                MediaPayload::url("img/cat.jpg"),
            )),
        );
        assert!(matches!(
            message.validate(),
            Err(MessengerError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_recipient() {
        let message = OutgoingMessage::message("", Message::text("Hi"));
        assert!(matches!(
            message.validate(),
            Err(MessengerError::Validation(_))
        ));
    }
}
