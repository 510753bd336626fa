use crate::domain::product::ProductRecord;
use serde::{Deserialize, Serialize};

/// JSON reply of `POST /add_product`.
///
/// On success the backend echoes the stored product so the page can
/// append a row without a refetch; on failure `product_data` is absent
/// and `message` carries the user-facing reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddProductResponse {
    pub success: bool,

    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_data: Option<ProductRecord>,
}
