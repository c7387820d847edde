//! Connected Telegram session: startup identity fetch plus file delivery.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{InputFile, User};
use tracing::info;

use courier_core::config::TelegramConfig;
use courier_core::types::{FileMessage, MessageId, Messenger, Profile};
use courier_core::Result;

use crate::error::{classify_connect, classify_send, TelegramError};

/// Bot tokens are issued as `<client id>:<client secret>`.
fn bot_token(config: &TelegramConfig) -> String {
    format!("{}:{}", config.app_id, config.app_secret)
}

fn profile_from_user(user: &User) -> Profile {
    Profile {
        id: user.id.0,
        username: user.username.clone(),
        first_name: user.first_name.clone(),
        is_bot: user.is_bot,
    }
}

/// A connected session holding the identity fetched at connect time.
///
/// Exclusively owned by the process for its whole lifetime; the scheduled
/// delivery job borrows it per send.
pub struct TelegramSession {
    bot: Bot,
    profile: Profile,
}

impl TelegramSession {
    /// Authenticate against Telegram and fetch our own identity.
    ///
    /// Transport failures surface as `Connection`; any other rejection of
    /// `getMe` means the credentials are bad and surfaces as `AuthFailed`.
    pub async fn connect(config: &TelegramConfig) -> Result<Self> {
        let bot = Bot::new(bot_token(config));
        let me = bot.get_me().await.map_err(classify_connect)?;
        let profile = profile_from_user(&me);
        info!(identity = %profile, "authenticated to Telegram");
        Ok(Self { bot, profile })
    }

    /// Identity captured when the session was established.
    pub fn cached_profile(&self) -> &Profile {
        &self.profile
    }
}

#[async_trait]
impl Messenger for TelegramSession {
    async fn identity(&self) -> Result<Profile> {
        let me = self.bot.get_me().await.map_err(classify_connect)?;
        Ok(profile_from_user(&me))
    }

    async fn send_file(&self, destination: i64, message: &FileMessage) -> Result<MessageId> {
        // Surface a missing file before any network round-trip.
        if !message.path.exists() {
            return Err(TelegramError::Transmission {
                path: message.path.clone(),
                reason: "file not found".into(),
            }
            .into());
        }

        let document = InputFile::file(message.path.clone()).file_name(message.title.clone());
        let sent = self
            .bot
            .send_document(ChatId(destination), document)
            .caption(message.caption.clone())
            .await
            .map_err(|e| classify_send(e, &message.path))?;

        info!(
            chat = destination,
            message_id = sent.id.0,
            file = %message.path.display(),
            "file delivered"
        );
        Ok(MessageId(sent.id.0))
    }
}

#[cfg(test)]
mod tests {
    use courier_core::CourierError;

    use super::*;

    #[test]
    fn token_joins_id_and_secret() {
        let config = TelegramConfig {
            app_id: 23784791,
            app_secret: "fbdf07ff5007992b".into(),
        };
        assert_eq!(bot_token(&config), "23784791:fbdf07ff5007992b");
    }

    #[test]
    fn profile_captures_identity_fields() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": 23784791,
            "is_bot": true,
            "first_name": "Courier",
            "username": "courier_bot"
        }))
        .unwrap();

        let profile = profile_from_user(&user);
        assert_eq!(profile.id, 23784791);
        assert_eq!(profile.username.as_deref(), Some("courier_bot"));
        assert_eq!(profile.first_name, "Courier");
        assert!(profile.is_bot);
    }

    #[tokio::test]
    async fn missing_file_fails_before_any_network_call() {
        let session = TelegramSession {
            bot: Bot::new("23784791:test"),
            profile: Profile {
                id: 23784791,
                username: None,
                first_name: "Courier".into(),
                is_bot: true,
            },
        };

        let message = FileMessage {
            path: "/definitely/not/here.png".into(),
            caption: "It is caption!".into(),
            title: "It is title!".into(),
        };

        let err = session.send_file(-862023086, &message).await.unwrap_err();
        assert!(matches!(err, CourierError::Transmission(_)));
    }
}
