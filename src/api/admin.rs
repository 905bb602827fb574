//! Admin shell call sites. Only the paginated customer listing is wired
//! up; the rest of the admin surface lives on the backend.

use super::types::{Customer, Page};
use super::{ApiClient, ApiError};
use reqwest::Method;

pub const CUSTOMERS_PATH: &str = "/api/admin/customers/";

/// List customers, ten per page, newest first (backend ordering).
pub async fn customers(client: &mut ApiClient, page: u32) -> Result<Page<Customer>, ApiError> {
    let path = if page <= 1 {
        CUSTOMERS_PATH.to_string()
    } else {
        format!("{CUSTOMERS_PATH}?page={page}")
    };

    let value = client.request(Method::GET, &path, None).await?;
    serde_json::from_value(value).map_err(|err| ApiError::Parse(err.to_string()))
}
