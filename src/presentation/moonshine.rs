// src/presentation/moonshine.rs

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoonshineInfo {
    pub description: &'static str,
    pub j_invariant_expansion: &'static str,
    pub significance: &'static str,
    pub generalized_moonshine: &'static str,
    pub fields_medalist: &'static str,
}

const MOONSHINE: MoonshineInfo = MoonshineInfo {
    description: "Monstrous moonshine is a connection between the Monster group and modular functions",
    j_invariant_expansion: "j(τ) = q^(-1) + 744 + 196884q + 21493760q^2 + ...",
    significance: "The coefficient 196884 = 196883 + 1, where 196883 is the dimension of the smallest faithful representation of M",
    generalized_moonshine: "Extends to other sporadic groups",
    fields_medalist: "Richard Borcherds proved the moonshine conjectures in 1992, winning the Fields Medal in 1998",
};

pub fn get_moonshine_info() -> MoonshineInfo {
    MOONSHINE
}
