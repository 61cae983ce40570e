//! Notifications API

use serde_json::{Value, json};
use shared::models::Notification;
use shared::response::decode_list;
use urlencoding::encode;

use super::NOTIFICATIONS;
use crate::{ClientResult, HttpClient};

pub struct NotificationsApi<'a, C: HttpClient> {
    http: &'a C,
}

impl<'a, C: HttpClient> NotificationsApi<'a, C> {
    pub fn new(http: &'a C) -> Self {
        Self { http }
    }

    /// Notifications of the current user, newest first as the server orders them
    pub async fn list(&self) -> ClientResult<Vec<Notification>> {
        let value: Value = self.http.get(NOTIFICATIONS).await?;
        Ok(decode_list(value)?)
    }

    pub async fn unread_count(&self) -> ClientResult<usize> {
        Ok(unread_count(&self.list().await?))
    }

    /// Flip the read flag of one notification
    pub async fn mark_read(&self, id: &str) -> ClientResult<()> {
        let _: Value = self
            .http
            .patch(&format!("{NOTIFICATIONS}/{}/read", encode(id)), &json!({ "readStatus": true }))
            .await?;
        Ok(())
    }

    pub async fn mark_all_read(&self) -> ClientResult<()> {
        let _: Value = self
            .http
            .patch(&format!("{NOTIFICATIONS}/read-all"), &json!({}))
            .await?;
        Ok(())
    }
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read_status).count()
}
