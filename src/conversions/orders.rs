//! Order ⇄ partner order.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::{
    dto::{
        orders::{CreateOrderPayload, LineItem, PartnerCustomer, PartnerOrder, UpdateOrderPayload},
        tracking::TrackedOrder,
    },
    models::{NewOrder, Order, OrderChanges, OrderStatus},
};

pub const MOVEDROP_PAYMENT_METHOD: &str = "movedrop";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown order status `{0}`")]
pub struct InvalidStatus(pub String);

pub fn convert_order(order: Order) -> PartnerOrder {
    PartnerOrder {
        id: order.id,
        tracking_id: order.tracking_id,
        customer: PartnerCustomer {
            name: order.customer_name,
            phone: order.customer_phone,
            address: order.customer_address,
        },
        product_ids: order.product_ids,
        selected_sizes: order.selected_sizes,
        selected_colors: order.selected_colors,
        quantities: order.quantities,
        total_amount: order.total_amount,
        delivery_charge: order.delivery_charge,
        payment_method: order.payment_method,
        status: order.status,
        notes: order.notes,
        created_at: order.created_at,
        updated_at: order.updated_at,
    }
}

pub fn convert_tracked_order(order: Order) -> TrackedOrder {
    TrackedOrder {
        tracking_id: order.tracking_id,
        status: order.status,
        customer_name: order.customer_name,
        total_amount: order.total_amount,
        delivery_charge: order.delivery_charge,
        created_at: order.created_at,
        updated_at: order.updated_at,
    }
}

/// Resolve a partner creation body into a pending MoveDrop order.
///
/// Each field reads the primary name first, then the partner-native
/// fallback, then defaults to empty/zero.
pub fn convert_create_payload(payload: CreateOrderPayload, tracking_id: String) -> NewOrder {
    let shipping = payload.shipping.unwrap_or_default();
    let line_items = payload.line_items.unwrap_or_default();

    let product_ids = payload.product_ids.unwrap_or_else(|| {
        line_items
            .iter()
            .filter_map(|item| item.product_id.clone())
            .collect()
    });
    let quantities = payload
        .quantities
        .unwrap_or_else(|| associate(&line_items, |item| item.quantity));
    let selected_sizes = payload
        .selected_sizes
        .unwrap_or_else(|| associate(&line_items, |item| item.size.clone()));
    let selected_colors = payload
        .selected_colors
        .unwrap_or_else(|| associate(&line_items, |item| item.color.clone()));

    let reference = payload
        .order_number
        .or(payload.order_id)
        .filter(|r| !r.trim().is_empty());

    NewOrder {
        tracking_id,
        customer_name: payload.customer_name.or(shipping.name).unwrap_or_default(),
        customer_phone: payload.customer_phone.or(shipping.phone).unwrap_or_default(),
        customer_address: payload
            .customer_address
            .or(shipping.address)
            .unwrap_or_default(),
        product_ids,
        selected_sizes,
        selected_colors,
        quantities,
        total_amount: payload.total_amount.or(payload.total).unwrap_or_default(),
        delivery_charge: payload
            .delivery_charge
            .or(payload.shipping_charge)
            .unwrap_or_default(),
        payment_method: MOVEDROP_PAYMENT_METHOD.to_string(),
        status: OrderStatus::Pending,
        notes: Some(partner_notes(reference.as_deref(), payload.notes.as_deref())),
    }
}

/// Only status, tracking number and notes are writable by the partner.
pub fn convert_update_payload(payload: UpdateOrderPayload) -> Result<OrderChanges, InvalidStatus> {
    let status = match payload.status {
        Some(raw) => Some(OrderStatus::parse(&raw).ok_or(InvalidStatus(raw))?),
        None => None,
    };
    let tracking_id = payload
        .tracking_number
        .or(payload.tracking_id)
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());

    Ok(OrderChanges {
        status,
        tracking_id,
        notes: payload.notes,
    })
}

fn associate<T>(
    line_items: &[LineItem],
    value: impl Fn(&LineItem) -> Option<T>,
) -> BTreeMap<String, T> {
    line_items
        .iter()
        .filter_map(|item| Some((item.product_id.clone()?, value(item)?)))
        .collect()
}

fn partner_notes(reference: Option<&str>, notes: Option<&str>) -> String {
    let mut text = match reference {
        Some(reference) => format!("MoveDrop order #{}", reference.trim()),
        None => "MoveDrop order".to_string(),
    };
    if let Some(notes) = notes.map(str::trim).filter(|n| !n.is_empty()) {
        text.push_str(" | ");
        text.push_str(notes);
    }
    text
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn payload(json: serde_json::Value) -> CreateOrderPayload {
        serde_json::from_value(json).expect("payload")
    }

    #[test]
    fn primary_fields_are_used_as_is() {
        let order = convert_create_payload(
            payload(serde_json::json!({
                "customer_name": "Karim",
                "customer_phone": "01700000000",
                "customer_address": "Mirpur 10, Dhaka",
                "product_ids": ["p1"],
                "quantities": { "p1": 2 },
                "total_amount": 500,
                "delivery_charge": "60",
                "order_number": 88123,
                "shipping": { "name": "Ignored" }
            })),
            "MD00000001".into(),
        );

        assert_eq!(order.customer_name, "Karim");
        assert_eq!(order.customer_address, "Mirpur 10, Dhaka");
        assert_eq!(order.product_ids, vec!["p1".to_string()]);
        assert_eq!(order.quantities.get("p1"), Some(&2));
        assert_eq!(order.total_amount, Decimal::new(500, 0));
        assert_eq!(order.delivery_charge, Decimal::new(60, 0));
        assert_eq!(order.payment_method, "movedrop");
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.notes.as_deref(), Some("MoveDrop order #88123"));
    }

    #[test]
    fn partner_native_fields_fill_the_gaps() {
        let order = convert_create_payload(
            payload(serde_json::json!({
                "shipping": { "name": "Rahima", "phone": "01800000000", "address": "Khulna" },
                "line_items": [
                    { "product_id": "p1", "quantity": 1, "size": "M", "color": "Red" },
                    { "product_id": 42, "quantity": 3 }
                ],
                "total": 1500.5,
                "shipping_charge": 120,
                "order_id": "MD-77",
                "notes": "leave at gate"
            })),
            "MD00000002".into(),
        );

        assert_eq!(order.customer_name, "Rahima");
        assert_eq!(order.customer_phone, "01800000000");
        assert_eq!(order.customer_address, "Khulna");
        assert_eq!(order.product_ids, vec!["p1".to_string(), "42".to_string()]);
        assert_eq!(order.quantities.get("42"), Some(&3));
        assert_eq!(order.selected_sizes.get("p1").map(String::as_str), Some("M"));
        assert_eq!(order.selected_colors.len(), 1);
        assert_eq!(order.total_amount, Decimal::new(15005, 1));
        assert_eq!(order.delivery_charge, Decimal::new(120, 0));
        assert_eq!(
            order.notes.as_deref(),
            Some("MoveDrop order #MD-77 | leave at gate")
        );
    }

    #[test]
    fn empty_payload_defaults_to_blank_order() {
        let order = convert_create_payload(CreateOrderPayload::default(), "MD1".into());
        assert!(order.customer_name.is_empty());
        assert!(order.product_ids.is_empty());
        assert_eq!(order.total_amount, Decimal::ZERO);
        assert_eq!(order.notes.as_deref(), Some("MoveDrop order"));
    }

    #[test]
    fn update_payload_maps_tracking_number_onto_tracking_id() {
        let changes = convert_update_payload(UpdateOrderPayload {
            status: Some("Shipped".into()),
            tracking_number: Some(" PATHAO-991 ".into()),
            ..Default::default()
        })
        .expect("valid");

        assert_eq!(changes.status, Some(OrderStatus::Shipped));
        assert_eq!(changes.tracking_id.as_deref(), Some("PATHAO-991"));
        assert_eq!(changes.notes, None);
    }

    #[test]
    fn blank_tracking_override_is_ignored() {
        let changes = convert_update_payload(UpdateOrderPayload {
            tracking_id: Some("  ".into()),
            ..Default::default()
        })
        .expect("valid");
        assert!(changes.is_empty());
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = convert_update_payload(UpdateOrderPayload {
            status: Some("teleported".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, InvalidStatus("teleported".into()));
    }
}
