//! Product → partner product.

use crate::{
    dto::products::{PartnerProduct, PartnerVariant},
    models::Product,
};

/// Lower-case the name and join whitespace-separated words with `-`.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Cross product of sizes and colours, sizes in the outer loop.
pub fn derive_variants(sizes: &[String], colors: &[String]) -> Vec<PartnerVariant> {
    match (sizes.is_empty(), colors.is_empty()) {
        (true, true) => Vec::new(),
        (false, true) => sizes
            .iter()
            .map(|size| PartnerVariant {
                sku: size.clone(),
                size: Some(size.clone()),
                color: None,
            })
            .collect(),
        (true, false) => colors
            .iter()
            .map(|color| PartnerVariant {
                sku: color.clone(),
                size: None,
                color: Some(color.clone()),
            })
            .collect(),
        (false, false) => sizes
            .iter()
            .flat_map(|size| {
                colors.iter().map(move |color| PartnerVariant {
                    sku: format!("{size}-{color}"),
                    size: Some(size.clone()),
                    color: Some(color.clone()),
                })
            })
            .collect(),
    }
}

pub fn convert_product(product: Product) -> PartnerProduct {
    let slug = product
        .slug
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| slugify(&product.name));
    let variants = derive_variants(&product.sizes, &product.colors);

    PartnerProduct {
        id: product.id,
        name: product.name,
        slug,
        description: product.description,
        price: product.price,
        sale_price: product.discount_price,
        stock: product.stock,
        images: product.images,
        category_id: product.category_id,
        status: product.status,
        product_type: product.product_type,
        variants,
        created_at: product.created_at,
    }
}
