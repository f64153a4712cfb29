//! Facebook Messenger Graph API client
//!
//! One method per Send API / Messenger Profile operation. Every call
//! validates its inputs, serializes a typed payload, attaches the page
//! access token as a query parameter, and performs a single request.

use reqwest::Client;
use serde::Serialize;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::{MessengerError, Result};
use crate::types::*;

const MESSAGES_PATH: &str = "me/messages";
const MESSAGE_ATTACHMENTS_PATH: &str = "me/message_attachments";
const MESSENGER_PROFILE_PATH: &str = "me/messenger_profile";
const THREAD_SETTINGS_PATH: &str = "me/thread_settings";

/// Get-started payload installed by [`MessengerApi::apply_default_settings`].
pub const DEFAULT_START_PAYLOAD: &str = "USER_START";

/// Facebook Messenger API client
#[derive(Clone)]
pub struct MessengerApi {
    client: Client,
    page_access_token: String,
    graph_url: String,
}

impl MessengerApi {
    /// Create a new Messenger API client from a resolved configuration.
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| MessengerError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            page_access_token: config.page_access_token,
            graph_url: config.graph_url,
        })
    }

    /// Create a client configured from the `PAGE_ACCESS_TOKEN` environment
    /// variable.
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env()?)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.graph_url, path)
    }

    async fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Delivery> {
        let response = self
            .client
            .post(self.endpoint(path))
            .query(&[("access_token", &self.page_access_token)])
            .json(body)
            .send()
            .await?;

        self.finish(response).await
    }

    async fn finish(&self, response: reqwest::Response) -> Result<Delivery> {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status.is_success() {
            Ok(Delivery {
                status: status.as_u16(),
                body,
            })
        } else if status.is_client_error() {
            error!("Graph API rejected request: {} - {}", status, body);
            Err(MessengerError::RemoteRejected {
                status: status.as_u16(),
                body,
            })
        } else {
            error!("Graph API unavailable: {} - {}", status, body);
            Err(MessengerError::Transport(format!("{status}: {body}")))
        }
    }

    // ------------------------------------------------------------------
    // Send API
    // ------------------------------------------------------------------

    /// Send a fully assembled message payload.
    pub async fn send_message(&self, message: &OutgoingMessage) -> Result<Delivery> {
        message.validate()?;

        debug!("Sending message to {}", message.recipient.id);

        let delivery = self.post_json(MESSAGES_PATH, message).await?;
        info!("Message sent to {}", message.recipient.id);
        Ok(delivery)
    }

    /// Send a plain text message.
    pub async fn send_text(&self, recipient_id: &str, text: &str) -> Result<Delivery> {
        self.send_message(&OutgoingMessage::message(recipient_id, Message::text(text)))
            .await
    }

    /// Send a series of text messages in order, one call each.
    pub async fn send_texts(&self, recipient_id: &str, texts: &[String]) -> Result<Vec<Delivery>> {
        let mut deliveries = Vec::with_capacity(texts.len());
        for text in texts {
            deliveries.push(self.send_text(recipient_id, text).await?);
        }
        Ok(deliveries)
    }

    /// Send a media attachment hosted at `url`.
    pub async fn send_attachment(
        &self,
        recipient_id: &str,
        kind: AttachmentKind,
        url: &str,
    ) -> Result<Delivery> {
        self.send_message(&OutgoingMessage::message(
            recipient_id,
            Message::attachment(Attachment::media(kind, MediaPayload::url(url))),
        ))
        .await
    }

    /// Send an audio attachment.
    pub async fn send_audio(&self, recipient_id: &str, url: &str) -> Result<Delivery> {
        self.send_attachment(recipient_id, AttachmentKind::Audio, url).await
    }

    /// Send a file attachment.
    pub async fn send_file(&self, recipient_id: &str, url: &str) -> Result<Delivery> {
        self.send_attachment(recipient_id, AttachmentKind::File, url).await
    }

    /// Send an image attachment.
    pub async fn send_image(&self, recipient_id: &str, url: &str) -> Result<Delivery> {
        self.send_attachment(recipient_id, AttachmentKind::Image, url).await
    }

    /// Send a video attachment.
    pub async fn send_video(&self, recipient_id: &str, url: &str) -> Result<Delivery> {
        self.send_attachment(recipient_id, AttachmentKind::Video, url).await
    }

    /// Send a media attachment marked reusable; the response carries an
    /// `attachment_id` that can resend it without another upload.
    pub async fn send_attachment_reusable(
        &self,
        recipient_id: &str,
        kind: AttachmentKind,
        url: &str,
    ) -> Result<Delivery> {
        self.send_message(&OutgoingMessage::message(
            recipient_id,
            Message::attachment(Attachment::media(kind, MediaPayload::reusable_url(url))),
        ))
        .await
    }

    /// Send a previously uploaded attachment by id.
    pub async fn send_reusable_attachment(
        &self,
        recipient_id: &str,
        kind: AttachmentKind,
        attachment_id: &str,
    ) -> Result<Delivery> {
        self.send_message(&OutgoingMessage::message(
            recipient_id,
            Message::attachment(Attachment::media(
                kind,
                MediaPayload::attachment_id(attachment_id),
            )),
        ))
        .await
    }

    /// Upload a hosted media file for later reuse; returns the attachment id.
    pub async fn upload_attachment(&self, kind: AttachmentKind, url: &str) -> Result<String> {
        ensure_absolute_url("attachment url", url)?;

        let attachment = Attachment::media(kind, MediaPayload::reusable_url(url));
        let body = serde_json::json!({"message": {"attachment": attachment}});

        debug!("Uploading {:?} attachment for reuse", kind);

        let delivery = self.post_json(MESSAGE_ATTACHMENTS_PATH, &body).await?;
        let receipt = delivery.receipt()?;
        receipt.attachment_id.ok_or_else(|| {
            MessengerError::Parse("upload response carries no attachment_id".to_string())
        })
    }

    /// Send text with quick reply buttons.
    pub async fn send_quick_replies(
        &self,
        recipient_id: &str,
        text: &str,
        replies: Vec<QuickReply>,
    ) -> Result<Delivery> {
        self.send_message(&OutgoingMessage::message(
            recipient_id,
            Message::text(text).with_quick_replies(replies),
        ))
        .await
    }

    /// Send an image with quick reply buttons.
    pub async fn send_image_with_quick_replies(
        &self,
        recipient_id: &str,
        image_url: &str,
        replies: Vec<QuickReply>,
    ) -> Result<Delivery> {
        self.send_message(&OutgoingMessage::message(
            recipient_id,
            Message::attachment(Attachment::media(
                AttachmentKind::Image,
                MediaPayload::url(image_url),
            ))
            .with_quick_replies(replies),
        ))
        .await
    }

    /// Send a button template.
    pub async fn send_button_template(
        &self,
        recipient_id: &str,
        text: &str,
        buttons: Vec<Button>,
    ) -> Result<Delivery> {
        self.send_message(&OutgoingMessage::message(
            recipient_id,
            Message::attachment(Attachment::Template(TemplatePayload::button(text, buttons))),
        ))
        .await
    }

    /// Send generic template elements (up to 10 render as a carousel).
    pub async fn send_generic_template(
        &self,
        recipient_id: &str,
        elements: Vec<GenericElement>,
    ) -> Result<Delivery> {
        self.send_message(&OutgoingMessage::message(
            recipient_id,
            Message::attachment(Attachment::Template(TemplatePayload::generic(elements))),
        ))
        .await
    }

    /// Show or hide the typing indicator, or mark the thread seen.
    pub async fn sender_action(
        &self,
        recipient_id: &str,
        action: SenderAction,
    ) -> Result<Delivery> {
        self.send_message(&OutgoingMessage::sender_action(recipient_id, action))
            .await
    }

    // ------------------------------------------------------------------
    // Messenger Profile API
    // ------------------------------------------------------------------

    /// Set localized greeting texts.
    pub async fn set_greeting(&self, greetings: &[Greeting]) -> Result<Delivery> {
        if greetings.is_empty() {
            return Err(MessengerError::Validation(
                "at least one greeting is required".to_string(),
            ));
        }
        for greeting in greetings {
            validate_greeting_text(&greeting.text)?;
        }

        debug!("Setting {} greeting(s)", greetings.len());

        let body = serde_json::json!({"greeting": greetings});
        self.post_json(MESSENGER_PROFILE_PATH, &body).await
    }

    /// Set the greeting text for the `default` locale.
    pub async fn set_default_greeting(&self, text: &str) -> Result<Delivery> {
        self.set_greeting(&[Greeting::default_locale(text)]).await
    }

    /// Set the get-started button postback payload.
    pub async fn set_get_started(&self, payload: &str) -> Result<Delivery> {
        if payload.trim().is_empty() {
            return Err(MessengerError::Validation(
                "get-started payload must not be empty".to_string(),
            ));
        }

        debug!("Setting get-started button");

        let body = serde_json::json!({"get_started": {"payload": payload}});
        self.post_json(MESSENGER_PROFILE_PATH, &body).await
    }

    /// Set the persistent menu shown in the chat view.
    pub async fn set_persistent_menu(&self, menus: &[PersistentMenu]) -> Result<Delivery> {
        if menus.is_empty() {
            return Err(MessengerError::Validation(
                "at least one menu locale is required".to_string(),
            ));
        }
        for menu in menus {
            if menu.call_to_actions.is_empty() {
                return Err(MessengerError::Validation(format!(
                    "menu for locale {} has no entries",
                    menu.locale
                )));
            }
        }

        debug!("Setting persistent menu for {} locale(s)", menus.len());

        let body = serde_json::json!({"persistent_menu": menus});
        self.post_json(MESSENGER_PROFILE_PATH, &body).await
    }

    /// Whitelist domains for the Messenger Extensions SDK.
    pub async fn whitelist_domains(&self, domains: &[String]) -> Result<Delivery> {
        if domains.is_empty() || domains.len() > DOMAIN_WHITELIST_LIMIT {
            return Err(MessengerError::Validation(format!(
                "whitelist takes 1 to {DOMAIN_WHITELIST_LIMIT} domains"
            )));
        }
        for domain in domains {
            ensure_absolute_url("whitelisted domain", domain)?;
        }

        debug!("Whitelisting {} domain(s)", domains.len());

        let body = serde_json::json!({"whitelisted_domains": domains});
        self.post_json(MESSENGER_PROFILE_PATH, &body).await
    }

    /// Delete the whitelisted domains set previously.
    pub async fn delete_whitelisted_domains(&self) -> Result<Delivery> {
        debug!("Deleting whitelisted domains");

        let body = serde_json::json!({"fields": ["whitelisted_domains"]});
        let response = self
            .client
            .delete(self.endpoint(MESSENGER_PROFILE_PATH))
            .query(&[("access_token", &self.page_access_token)])
            .json(&body)
            .send()
            .await?;

        self.finish(response).await
    }

    /// Set the account linking URL for the business login flow.
    pub async fn set_account_linking_url(&self, url: &str) -> Result<Delivery> {
        ensure_absolute_url("account linking url", url)?;

        debug!("Setting account linking URL");

        let body = serde_json::json!({"account_linking_url": url});
        self.post_json(MESSENGER_PROFILE_PATH, &body).await
    }

    /// Install the legacy thread-settings greeting and a get-started button
    /// with the [`DEFAULT_START_PAYLOAD`] payload, in that order.
    pub async fn apply_default_settings(
        &self,
        greeting_text: &str,
    ) -> Result<(Delivery, Delivery)> {
        validate_greeting_text(greeting_text)?;

        let body = serde_json::json!({
            "setting_type": "greeting",
            "greeting": {"text": greeting_text},
        });
        let greeting = self.post_json(THREAD_SETTINGS_PATH, &body).await?;
        let button = self.set_get_started(DEFAULT_START_PAYLOAD).await?;
        Ok((greeting, button))
    }

    // ------------------------------------------------------------------
    // User Profile API
    // ------------------------------------------------------------------

    /// Get a user's basic profile: name, first/last name, profile picture.
    pub async fn get_user_profile(&self, user_id: &str) -> Result<UserProfile> {
        self.get_user_profile_with_fields(user_id, &[]).await
    }

    /// Get a user profile with extra fields the app is allowed to request
    /// (e.g. `locale`, `timezone`).
    pub async fn get_user_profile_with_fields(
        &self,
        user_id: &str,
        extra_fields: &[&str],
    ) -> Result<UserProfile> {
        if user_id.trim().is_empty() {
            return Err(MessengerError::Validation(
                "user id must not be empty".to_string(),
            ));
        }

        let mut fields = vec!["name", "first_name", "last_name", "profile_pic"];
        fields.extend_from_slice(extra_fields);
        let fields = fields.join(",");

        debug!("Getting profile for user {}", user_id);

        let response = self
            .client
            .get(self.endpoint(user_id))
            .query(&[
                ("fields", fields.as_str()),
                ("access_token", self.page_access_token.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(MessengerError::NotFound(user_id.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Get profile failed: {} - {}", status, body);
            return if status.is_client_error() {
                Err(MessengerError::RemoteRejected {
                    status: status.as_u16(),
                    body,
                })
            } else {
                Err(MessengerError::Transport(format!("{status}: {body}")))
            };
        }

        let profile: UserProfile = response
            .json()
            .await
            .map_err(|e| MessengerError::Parse(e.to_string()))?;

        Ok(profile)
    }
}

fn validate_greeting_text(text: &str) -> Result<()> {
    if text.is_empty() {
        return Err(MessengerError::Validation(
            "greeting text must not be empty".to_string(),
        ));
    }
    if text.chars().count() > GREETING_CHAR_LIMIT {
        return Err(MessengerError::Validation(format!(
            "greeting text exceeds {GREETING_CHAR_LIMIT} characters"
        )));
    }
    Ok(())
}
