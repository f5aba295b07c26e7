use super::products::slugify;
use crate::{dto::categories::PartnerCategory, models::Category};

pub fn convert_category(category: Category) -> PartnerCategory {
    let slug = category
        .slug
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| slugify(&category.name));

    PartnerCategory {
        id: category.id,
        name: category.name,
        slug,
        position: category.sort_order,
    }
}
