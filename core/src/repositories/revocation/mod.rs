pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;

pub mod memory;

pub use memory::InMemoryRevocationStore;
pub use r#trait::RevocationStore;

#[cfg(test)]
mod tests;
