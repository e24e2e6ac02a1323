// src/group/character.rs

use serde::Serialize;

/// Summary counts of the Monster's character table. The table itself is not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharacterTableInfo {
    pub irreducible_representations: usize,
    pub smallest_faithful_representation: u64,
    pub moonshine_connection: bool,
    /// Leading coefficients of j(τ) - 744, starting at q^1.
    pub j_invariant_coefficients: &'static [u64],
}
