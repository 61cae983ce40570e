//! Transactions API

use serde_json::Value;
use shared::models::{
    PaymentStatus, Transaction, TransactionExportQuery, TransactionQuery, TransactionStatusUpdate,
};
use shared::response::Paginated;
use urlencoding::encode;

use super::{TRANSACTIONS, decode_one};
use crate::download::{Download, default_export_name};
use crate::{ClientResult, HttpClient};

pub struct TransactionsApi<'a, C: HttpClient> {
    http: &'a C,
}

impl<'a, C: HttpClient> TransactionsApi<'a, C> {
    pub fn new(http: &'a C) -> Self {
        Self { http }
    }

    pub async fn list(&self, query: &TransactionQuery) -> ClientResult<Paginated<Transaction>> {
        let value: Value = self.http.get_with_query(TRANSACTIONS, query).await?;
        Ok(Paginated::from_value(value, query.page, query.limit)?)
    }

    pub async fn get(&self, id: &str) -> ClientResult<Transaction> {
        let value: Value = self.http.get(&format!("{TRANSACTIONS}/{}", encode(id))).await?;
        decode_one(value)
    }

    /// Ask the server to move a transaction to another payment status
    pub async fn update_status(&self, id: &str, status: PaymentStatus) -> ClientResult<Transaction> {
        let body = TransactionStatusUpdate {
            payment_status: status,
        };
        let value: Value = self
            .http
            .patch(&format!("{TRANSACTIONS}/{}/status", encode(id)), &body)
            .await?;
        decode_one(value)
    }

    /// Spreadsheet export of the filtered list
    pub async fn export(&self, query: &TransactionExportQuery) -> ClientResult<Download> {
        self.http
            .download(
                &format!("{TRANSACTIONS}/export"),
                query,
                &default_export_name("transactions"),
            )
            .await
    }
}
