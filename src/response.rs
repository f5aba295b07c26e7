use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema, Clone, PartialEq, Eq)]
pub struct Meta {
    pub current_page: u64,
    pub per_page: u64,
    pub total: u64,
    pub last_page: u64,
}

impl Meta {
    pub fn new(current_page: u64, per_page: u64, total: u64) -> Self {
        Self {
            current_page,
            per_page,
            total,
            last_page: total.div_ceil(per_page.max(1)),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            message: None,
            data,
            meta: None,
        }
    }

    pub fn paginated(data: T, meta: Meta) -> Self {
        Self {
            message: None,
            data,
            meta: Some(meta),
        }
    }

    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            message: Some(message.into()),
            data,
            meta: None,
        }
    }
}
