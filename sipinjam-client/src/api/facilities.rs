//! Facilities API

use serde_json::Value;
use shared::models::{Facility, FacilityForm};
use shared::response::decode_list;
use urlencoding::encode;

use super::{FACILITIES, decode_one};
use crate::{ClientResult, HttpClient};

pub struct FacilitiesApi<'a, C: HttpClient> {
    http: &'a C,
}

impl<'a, C: HttpClient> FacilitiesApi<'a, C> {
    pub fn new(http: &'a C) -> Self {
        Self { http }
    }

    /// Facilities are a small lookup list, not paginated
    pub async fn list(&self) -> ClientResult<Vec<Facility>> {
        let value: Value = self.http.get(FACILITIES).await?;
        Ok(decode_list(value)?)
    }

    pub async fn get(&self, id: &str) -> ClientResult<Facility> {
        let value: Value = self.http.get(&format!("{FACILITIES}/{}", encode(id))).await?;
        decode_one(value)
    }

    pub async fn create(&self, form: &FacilityForm) -> ClientResult<Facility> {
        let value: Value = self.http.post(FACILITIES, form).await?;
        decode_one(value)
    }

    pub async fn update(&self, id: &str, form: &FacilityForm) -> ClientResult<Facility> {
        let value: Value = self.http.put(&format!("{FACILITIES}/{}", encode(id)), form).await?;
        decode_one(value)
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        let _: Value = self.http.delete(&format!("{FACILITIES}/{}", encode(id))).await?;
        Ok(())
    }
}
