pub mod categories;
pub mod orders;
pub mod products;
pub mod settings;

pub use categories::Entity as Categories;
pub use orders::Entity as Orders;
pub use products::Entity as Products;
pub use settings::Entity as Settings;
