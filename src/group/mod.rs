// src/group/mod.rs

pub mod character;
pub mod computed;
pub mod constants;
pub mod element;
pub mod monster_group;
pub mod summary;

pub use character::CharacterTableInfo;
pub use computed::Computed;
pub use element::MonsterElement;
pub use monster_group::MonsterGroup;
pub use summary::GroupSummary;
