//! Entity trait: things identified by an id rather than by their values.

/// Anything in the catalog that has a stable identity (e.g. a product).
pub trait Entity {
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Identity of this entity; two entities with the same id are the same thing.
    fn id(&self) -> &Self::Id;
}
