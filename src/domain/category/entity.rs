use crate::domain::category::value_objects::{CategoryId, CategoryName};

/// Reference data: categories are seeded and maintained outside this service.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
}
