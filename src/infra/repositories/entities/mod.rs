//! SeaORM entity definitions
//!
//! Table-shaped models kept apart from the domain types; the repository
//! maps between the two.

pub mod user;

#[allow(unused_imports)]
pub use user::{ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel};
