// src/integer_math/combinatorics.rs

use num::{BigUint, One};

pub struct Combinatorics;

impl Combinatorics {
    /// n! computed exactly. 0! = 1.
    pub fn factorial(n: u32) -> BigUint {
        (2..=n).fold(BigUint::one(), |acc, k| acc * BigUint::from(k))
    }
}
