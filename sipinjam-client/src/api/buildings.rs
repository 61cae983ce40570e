//! Buildings (gedung) API, including the availability check

use std::path::Path;

use serde_json::Value;
use shared::models::{AvailabilityRequest, Building, BuildingForm, BuildingQuery};
use shared::response::{Paginated, decode_list};
use urlencoding::encode;

use super::{BUILDINGS, decode_one};
use crate::multipart::FormPayload;
use crate::{ClientResult, HttpClient};

pub struct BuildingsApi<'a, C: HttpClient> {
    http: &'a C,
}

impl<'a, C: HttpClient> BuildingsApi<'a, C> {
    pub fn new(http: &'a C) -> Self {
        Self { http }
    }

    pub async fn list(&self, query: &BuildingQuery) -> ClientResult<Paginated<Building>> {
        let value: Value = self.http.get_with_query(BUILDINGS, query).await?;
        Ok(Paginated::from_value(value, query.page, query.limit)?)
    }

    pub async fn get(&self, id: &str) -> ClientResult<Building> {
        let value: Value = self.http.get(&format!("{BUILDINGS}/{}", encode(id))).await?;
        decode_one(value)
    }

    /// Create a building; multipart with an optional photo
    pub async fn create(&self, form: &BuildingForm, photo: Option<&Path>) -> ClientResult<Building> {
        let payload = Self::payload(form, photo).await?;
        let value: Value = self.http.post_multipart(BUILDINGS, payload).await?;
        decode_one(value)
    }

    pub async fn update(
        &self,
        id: &str,
        form: &BuildingForm,
        photo: Option<&Path>,
    ) -> ClientResult<Building> {
        let payload = Self::payload(form, photo).await?;
        let value: Value = self
            .http
            .put_multipart(&format!("{BUILDINGS}/{}", encode(id)), payload)
            .await?;
        decode_one(value)
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        let _: Value = self.http.delete(&format!("{BUILDINGS}/{}", encode(id))).await?;
        Ok(())
    }

    /// Buildings free at the given date/time.
    ///
    /// Accepts a bare array, `{ data: [...] }`, or `{ data: { buildings: [...] } }`;
    /// any other shape yields an empty list.
    pub async fn check_availability(&self, request: &AvailabilityRequest) -> ClientResult<Vec<Building>> {
        let value: Value = self
            .http
            .post(&format!("{BUILDINGS}/check-availability"), request)
            .await?;
        let buildings: Vec<Building> = decode_list(value)?;
        tracing::debug!(date = %request.date, count = buildings.len(), "Availability checked");
        Ok(buildings)
    }

    async fn payload(form: &BuildingForm, photo: Option<&Path>) -> ClientResult<FormPayload> {
        let payload = FormPayload::from_serializable(form)?;
        match photo {
            Some(path) => payload.with_file("photo", path).await,
            None => Ok(payload),
        }
    }
}
