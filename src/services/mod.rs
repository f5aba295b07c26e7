pub mod catalog_service;
pub mod order_service;
pub mod tracking_service;
pub mod webhook_service;
