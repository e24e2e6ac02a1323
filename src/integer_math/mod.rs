// src/integer_math/mod.rs

pub mod combinatorics;
pub mod factorization;

pub use combinatorics::Combinatorics;
pub use factorization::{verify_order, PrimeFactorization};
