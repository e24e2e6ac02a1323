// src/group/constants.rs
//
// Fixed facts about the Monster group M. Nothing here is computed; the only
// cross-check performed on this data is that the prime powers multiply out to
// the stored order (see MonsterGroup::verify_order).

use lazy_static::lazy_static;
use num::BigUint;

use crate::group::character::CharacterTableInfo;
use crate::integer_math::PrimeFactorization;

pub const MONSTER_NAME: &str = "Monster";
pub const MONSTER_SYMBOL: &str = "M";

/// |M| = 808,017,424,794,512,875,886,459,904,961,710,757,005,754,368,000,000,000 ≈ 8.08 × 10^53
pub const MONSTER_ORDER_DECIMAL: &str = "808017424794512875886459904961710757005754368000000000";

/// 2^46 × 3^20 × 5^9 × 7^6 × 11^2 × 13^3 × 17 × 19 × 23 × 29 × 31 × 41 × 47 × 59 × 71
pub const MONSTER_FACTORIZATION: [(u64, u32); 15] = [
    (2, 46),
    (3, 20),
    (5, 9),
    (7, 6),
    (11, 2),
    (13, 3),
    (17, 1),
    (19, 1),
    (23, 1),
    (29, 1),
    (31, 1),
    (41, 1),
    (47, 1),
    (59, 1),
    (71, 1),
];

pub const CONJUGACY_CLASS_COUNT: usize = 194;

/// A selection of maximal subgroups, in presentation order.
pub const MAXIMAL_SUBGROUPS: [&str; 10] = [
    "2^1+24.Co1 (Baby Monster normalizer)",
    "2^2+11+22.(M24 × S3)",
    "3^1+12.2.Suz.2",
    "2^5+10+20.(S3 × L5(2))",
    "5^1+6.2.J2.4",
    "7^1+4.(3 × 2S7)",
    "11^1+2.(5 × 2S5)",
    "13^1+2.(3 × 4S4)",
    "(D10 × HN).2",
    "2^10+16.O10^+(2)",
];

pub const J_INVARIANT_COEFFICIENTS: [u64; 3] = [196884, 21493760, 864299970];

pub const CHARACTER_TABLE: CharacterTableInfo = CharacterTableInfo {
    irreducible_representations: 194,
    smallest_faithful_representation: 196883,
    moonshine_connection: true,
    j_invariant_coefficients: &J_INVARIANT_COEFFICIENTS,
};

lazy_static! {
    static ref MONSTER_ORDER: BigUint = BigUint::parse_bytes(MONSTER_ORDER_DECIMAL.as_bytes(), 10)
        .expect("MONSTER_ORDER_DECIMAL is a decimal literal");
    static ref MONSTER_PRIME_FACTORIZATION: PrimeFactorization =
        PrimeFactorization::from_pairs(&MONSTER_FACTORIZATION);
}

pub fn monster_order() -> &'static BigUint {
    &MONSTER_ORDER
}

pub fn monster_factorization() -> &'static PrimeFactorization {
    &MONSTER_PRIME_FACTORIZATION
}
