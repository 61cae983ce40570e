//! Building managers API

use serde_json::Value;
use shared::models::{BuildingManager, BuildingManagerForm};
use shared::response::Paginated;
use urlencoding::encode;

use super::{BUILDING_MANAGERS, PageQuery, decode_one};
use crate::{ClientResult, HttpClient};

pub struct ManagersApi<'a, C: HttpClient> {
    http: &'a C,
}

impl<'a, C: HttpClient> ManagersApi<'a, C> {
    pub fn new(http: &'a C) -> Self {
        Self { http }
    }

    pub async fn list(&self, query: &PageQuery) -> ClientResult<Paginated<BuildingManager>> {
        let value: Value = self.http.get_with_query(BUILDING_MANAGERS, query).await?;
        Ok(Paginated::from_value(value, query.page, query.limit)?)
    }

    pub async fn get(&self, id: &str) -> ClientResult<BuildingManager> {
        let value: Value = self.http.get(&format!("{BUILDING_MANAGERS}/{}", encode(id))).await?;
        decode_one(value)
    }

    pub async fn create(&self, form: &BuildingManagerForm) -> ClientResult<BuildingManager> {
        let value: Value = self.http.post(BUILDING_MANAGERS, form).await?;
        decode_one(value)
    }

    pub async fn update(&self, id: &str, form: &BuildingManagerForm) -> ClientResult<BuildingManager> {
        let value: Value = self
            .http
            .put(&format!("{BUILDING_MANAGERS}/{}", encode(id)), form)
            .await?;
        decode_one(value)
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        let _: Value = self.http.delete(&format!("{BUILDING_MANAGERS}/{}", encode(id))).await?;
        Ok(())
    }
}
