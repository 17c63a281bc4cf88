use serde::{Deserialize, Serialize};

use solidshop_core::{Entity, ProductId};

/// A catalog product: an identifier and a display name.
///
/// Immutable once constructed; accessors hand back the stored fields unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
