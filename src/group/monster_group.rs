// src/group/monster_group.rs

use log::{debug, info};
use num::BigUint;
use std::fmt::{self, Debug, Display};

use crate::error::Result;
use crate::group::character::CharacterTableInfo;
use crate::group::constants::{
    monster_factorization, monster_order, CHARACTER_TABLE, CONJUGACY_CLASS_COUNT,
    MAXIMAL_SUBGROUPS, MONSTER_NAME, MONSTER_SYMBOL,
};
use crate::integer_math::{verify_order, PrimeFactorization};

/// The Monster group M, the largest of the 26 sporadic simple groups.
///
/// A handle onto fixed data: every instance reads the same process-wide
/// constants, so copies are free and all queries are pure.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct MonsterGroup {
    _private: (),
}

impl MonsterGroup {
    pub fn new() -> Self {
        MonsterGroup { _private: () }
    }

    /// Constructs the group and checks that the stored order matches its factorization.
    pub fn checked() -> Result<Self> {
        let group = MonsterGroup::new();
        group.get_factorization().ensure_product(group.order())?;
        info!("Monster order verified against {} prime powers", group.get_factorization().len());
        Ok(group)
    }

    pub fn order(&self) -> &'static BigUint {
        monster_order()
    }

    pub fn name(&self) -> &'static str {
        MONSTER_NAME
    }

    pub fn symbol(&self) -> &'static str {
        MONSTER_SYMBOL
    }

    pub fn is_sporadic(&self) -> bool {
        true
    }

    pub fn is_simple(&self) -> bool {
        true
    }

    /// |M| = 2^46 × 3^20 × 5^9 × 7^6 × 11^2 × 13^3 × 17 × 19 × 23 × 29 × 31 × 41 × 47 × 59 × 71
    pub fn get_factorization(&self) -> &'static PrimeFactorization {
        monster_factorization()
    }

    /// Recomputes the order from the factorization and compares it to the stored literal.
    pub fn verify_order(&self) -> bool {
        let verified = verify_order(self.get_factorization(), self.order());
        debug!("Monster order verification: {}", verified);
        verified
    }

    pub fn get_maximal_subgroups_info(&self) -> &'static [&'static str] {
        &MAXIMAL_SUBGROUPS
    }

    pub fn get_conjugacy_classes_count(&self) -> usize {
        CONJUGACY_CLASS_COUNT
    }

    pub fn get_character_table_info(&self) -> CharacterTableInfo {
        CHARACTER_TABLE
    }
}

impl Display for MonsterGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} Group ({}) - Order: {}", self.name(), self.symbol(), self.order())
    }
}

impl Debug for MonsterGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("MonsterGroup").field("order", self.order()).finish()
    }
}
