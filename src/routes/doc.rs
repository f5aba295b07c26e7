use utoipa::{
    Modify, OpenApi,
    openapi::{
        self, OpenApi as OpenApiSpec,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        categories::PartnerCategory,
        orders::{
            CreateOrderPayload, LineItem, PartnerCustomer, PartnerOrder, ShippingDetails,
            UpdateOrderPayload,
        },
        products::{PartnerProduct, PartnerVariant},
        tracking::{TrackOrderRequest, TrackedOrder},
        webhooks::{RegisterWebhookPayload, WebhookRegistration},
    },
    models::{OrderStatus, ProductStatus, ProductType},
    response::Meta,
    routes::{categories, health, orders, products, tracking, webhooks},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_key",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("X-API-KEY"))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::status,
        categories::list_categories,
        products::list_products,
        products::get_product,
        orders::list_orders,
        orders::create_order,
        orders::get_order,
        orders::update_order,
        webhooks::register_webhook,
        tracking::track_order
    ),
    components(
        schemas(
            health::HealthData,
            PartnerCategory,
            PartnerProduct,
            PartnerVariant,
            PartnerOrder,
            PartnerCustomer,
            CreateOrderPayload,
            ShippingDetails,
            LineItem,
            UpdateOrderPayload,
            RegisterWebhookPayload,
            WebhookRegistration,
            TrackOrderRequest,
            TrackedOrder,
            OrderStatus,
            ProductStatus,
            ProductType,
            Meta
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service status"),
        (name = "Catalog", description = "Categories and products in partner shape"),
        (name = "Orders", description = "Partner order lifecycle"),
        (name = "Webhooks", description = "Partner callback registration"),
        (name = "Tracking", description = "Public order lookup"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
