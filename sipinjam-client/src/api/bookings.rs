//! Bookings (peminjaman) API

use std::path::Path;

use serde_json::{Value, json};
use shared::models::{Booking, BookingAction, BookingExportQuery, BookingForm, BookingQuery};
use shared::response::Paginated;
use urlencoding::encode;

use super::{BOOKINGS, decode_one};
use crate::download::{Download, default_export_name};
use crate::multipart::FormPayload;
use crate::{ClientResult, HttpClient};

pub struct BookingsApi<'a, C: HttpClient> {
    http: &'a C,
}

impl<'a, C: HttpClient> BookingsApi<'a, C> {
    pub fn new(http: &'a C) -> Self {
        Self { http }
    }

    /// All bookings (admin / building manager view)
    pub async fn list(&self, query: &BookingQuery) -> ClientResult<Paginated<Booking>> {
        let value: Value = self.http.get_with_query(BOOKINGS, query).await?;
        Ok(Paginated::from_value(value, query.page, query.limit)?)
    }

    /// Bookings of the logged-in borrower
    pub async fn mine(&self, query: &BookingQuery) -> ClientResult<Paginated<Booking>> {
        let value: Value = self
            .http
            .get_with_query(&format!("{BOOKINGS}/me"), query)
            .await?;
        Ok(Paginated::from_value(value, query.page, query.limit)?)
    }

    pub async fn get(&self, id: &str) -> ClientResult<Booking> {
        let value: Value = self.http.get(&format!("{BOOKINGS}/{}", encode(id))).await?;
        decode_one(value)
    }

    /// Submit a booking. JSON, or multipart when a supporting letter is attached.
    pub async fn create(&self, form: &BookingForm, attachment: Option<&Path>) -> ClientResult<Booking> {
        let value: Value = match attachment {
            Some(path) => {
                let payload = FormPayload::from_serializable(form)?
                    .with_file("attachment", path)
                    .await?;
                self.http.post_multipart(BOOKINGS, payload).await?
            }
            None => self.http.post(BOOKINGS, form).await?,
        };
        let booking: Booking = decode_one(value)?;
        tracing::info!(booking = %booking.booking_id, status = %booking.status, "Booking submitted");
        Ok(booking)
    }

    /// Request a status transition; the server decides whether it is allowed
    pub async fn transition(
        &self,
        id: &str,
        action: BookingAction,
        reason: Option<&str>,
    ) -> ClientResult<Booking> {
        let body = match reason {
            Some(reason) => json!({ "reason": reason }),
            None => json!({}),
        };
        let value: Value = self
            .http
            .patch(&format!("{BOOKINGS}/{}/{}", encode(id), action.path_segment()), &body)
            .await?;
        decode_one(value)
    }

    pub async fn approve(&self, id: &str) -> ClientResult<Booking> {
        self.transition(id, BookingAction::Approve, None).await
    }

    pub async fn reject(&self, id: &str, reason: &str) -> ClientResult<Booking> {
        self.transition(id, BookingAction::Reject, Some(reason)).await
    }

    pub async fn complete(&self, id: &str) -> ClientResult<Booking> {
        self.transition(id, BookingAction::Complete, None).await
    }

    pub async fn cancel(&self, id: &str, reason: Option<&str>) -> ClientResult<Booking> {
        self.transition(id, BookingAction::Cancel, reason).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        let _: Value = self.http.delete(&format!("{BOOKINGS}/{}", encode(id))).await?;
        Ok(())
    }

    /// Spreadsheet export of the filtered list
    pub async fn export(&self, query: &BookingExportQuery) -> ClientResult<Download> {
        self.http
            .download(&format!("{BOOKINGS}/export"), query, &default_export_name("bookings"))
            .await
    }
}
