//! Entity trait: things with identity (a storage slot stays the same slot
//! whatever is stocked in it).

pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
