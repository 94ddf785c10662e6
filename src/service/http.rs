//! HTTP surface for the customer service.
//!
//! **Requires the `http` feature to be enabled.**
//!
//! | Method | Path                     | Result                               |
//! |--------|--------------------------|--------------------------------------|
//! | POST   | `/customers`             | 200 + saved customer                 |
//! | GET    | `/customers?name=<name>` | 200 + customer, 404 when absent      |
//! | GET    | `/customers/:id`         | 200 + customer, 404 when absent      |
//!
//! Service failures map to 500 with `{ "error": "<message>" }`.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::ServiceError;
use crate::model::{Customer, Identifiable};
use crate::repository::CustomerRepository;

use super::customer::CustomerService;

/// An inbound customer (typically deserialized from an HTTP POST body).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRequest {
    /// Existing identity; omitted for new customers.
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
}

impl From<CustomerRequest> for Customer {
    fn from(req: CustomerRequest) -> Self {
        let customer = Customer::new(req.name);
        match req.id {
            Some(id) => customer.identified_by(id),
            None => customer,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NameQuery {
    pub name: String,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        error!(error = %self, "customer request failed");
        let body = serde_json::json!({ "error": self.to_string() });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Build the customer router over a shared service.
pub fn router<R>(service: Arc<CustomerService<R>>) -> Router
where
    R: CustomerRepository + 'static,
{
    Router::new()
        .route("/customers", post(save_customer::<R>).get(find_by_name::<R>))
        .route("/customers/:id", get(find_by_id::<R>))
        .with_state(service)
}

async fn save_customer<R>(
    State(service): State<Arc<CustomerService<R>>>,
    Json(req): Json<CustomerRequest>,
) -> Result<Json<Customer>, ServiceError>
where
    R: CustomerRepository + 'static,
{
    Ok(Json(service.save(Customer::from(req))?))
}

async fn find_by_name<R>(
    State(service): State<Arc<CustomerService<R>>>,
    Query(query): Query<NameQuery>,
) -> Result<Response, ServiceError>
where
    R: CustomerRepository + 'static,
{
    Ok(match service.find_by(&query.name)? {
        Some(customer) => Json(customer).into_response(),
        None => not_found(format!("no customer named {}", query.name)),
    })
}

async fn find_by_id<R>(
    State(service): State<Arc<CustomerService<R>>>,
    Path(id): Path<u64>,
) -> Result<Response, ServiceError>
where
    R: CustomerRepository + 'static,
{
    Ok(match service.find_by_id(id)? {
        Some(customer) => Json(customer).into_response(),
        None => not_found(format!("no customer with id {}", id)),
    })
}

fn not_found(message: String) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": message })),
    )
        .into_response()
}
