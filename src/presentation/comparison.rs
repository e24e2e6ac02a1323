// src/presentation/comparison.rs

use log::debug;
use num::BigUint;
use std::cmp::Ordering;

use crate::group::constants::monster_order;
use crate::integer_math::Combinatorics;
use crate::presentation::number_format::scientific_ratio;

/// How the Monster's order relates to a reference group's order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeRelation {
    Larger,
    Same,
    Smaller,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupComparison {
    pub category: &'static str,
    pub name: &'static str,
    pub order: BigUint,
    pub relation: SizeRelation,
    pub description: String,
}

fn reference_groups() -> Vec<(&'static str, &'static str, BigUint)> {
    let symmetric = "Symmetric S_n groups";
    let sporadic = "Sporadic groups";
    vec![
        (symmetric, "S_5", Combinatorics::factorial(5)),
        (symmetric, "S_10", Combinatorics::factorial(10)),
        (symmetric, "S_20", Combinatorics::factorial(20)),
        (sporadic, "Mathieu M_24", BigUint::from(244823040u64)),
        (sporadic, "Conway Co_1", BigUint::from(4157776806543360000u64)),
        (sporadic, "Baby Monster B", BigUint::from(4154781481226426191177580544000000u128)),
        (sporadic, "Monster M", monster_order().clone()),
    ]
}

/// Describes `monster` relative to `reference`.
///
/// The three-way split is an exact integer comparison; the magnitude is the
/// exact rational ratio rounded to two decimals in scientific notation. A zero
/// order has no finite ratio and renders as `0`, as in `format_large_number`.
pub fn describe_relation(monster: &BigUint, reference: &BigUint) -> (SizeRelation, String) {
    match monster.cmp(reference) {
        Ordering::Equal => (SizeRelation::Same, "Same as Monster".to_string()),
        Ordering::Greater => {
            let ratio = scientific_ratio(monster, reference, 2)
                .map(|s| s.to_string())
                .unwrap_or_else(|| "0".to_string());
            (SizeRelation::Larger, format!("Monster is {} times larger", ratio))
        }
        Ordering::Less => {
            let ratio = scientific_ratio(reference, monster, 2)
                .map(|s| s.to_string())
                .unwrap_or_else(|| "0".to_string());
            (SizeRelation::Smaller, format!("Monster is {} times smaller", ratio))
        }
    }
}

/// The Monster's order set against a fixed list of notable groups, in table order.
pub fn compare_group_orders() -> Vec<GroupComparison> {
    let monster = monster_order();
    reference_groups()
        .into_iter()
        .map(|(category, name, order)| {
            let (relation, description) = describe_relation(monster, &order);
            debug!("{}: {}", name, description);
            GroupComparison {
                category,
                name,
                order,
                relation,
                description,
            }
        })
        .collect()
}
