// src/group/summary.rs

use serde::Serialize;

use crate::group::character::CharacterTableInfo;
use crate::group::monster_group::MonsterGroup;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SerializablePrimePower {
    pub prime: u64,
    pub exponent: u32,
}

/// Snapshot of every fact the descriptor exposes, with the order as a decimal string.
#[derive(Debug, Clone, Serialize)]
pub struct GroupSummary {
    pub name: String,
    pub symbol: String,
    pub order: String,
    pub order_verified: bool,
    pub sporadic: bool,
    pub simple: bool,
    pub factorization: Vec<SerializablePrimePower>,
    pub conjugacy_classes: usize,
    pub maximal_subgroups: Vec<String>,
    pub character_table: CharacterTableInfo,
}

impl From<&MonsterGroup> for GroupSummary {
    fn from(group: &MonsterGroup) -> Self {
        GroupSummary {
            name: group.name().to_string(),
            symbol: group.symbol().to_string(),
            order: group.order().to_string(),
            order_verified: group.verify_order(),
            sporadic: group.is_sporadic(),
            simple: group.is_simple(),
            factorization: group
                .get_factorization()
                .iter()
                .map(|(prime, exponent)| SerializablePrimePower { prime, exponent })
                .collect(),
            conjugacy_classes: group.get_conjugacy_classes_count(),
            maximal_subgroups: group
                .get_maximal_subgroups_info()
                .iter()
                .map(|s| s.to_string())
                .collect(),
            character_table: group.get_character_table_info(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_json_keeps_exact_order() {
        let summary = GroupSummary::from(&MonsterGroup::new());
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["order"], "808017424794512875886459904961710757005754368000000000");
        assert_eq!(json["order_verified"], true);
        assert_eq!(json["factorization"].as_array().unwrap().len(), 15);
        assert_eq!(json["factorization"][0]["prime"], 2);
        assert_eq!(json["factorization"][0]["exponent"], 46);
        assert_eq!(json["character_table"]["smallest_faithful_representation"], 196883);
        assert_eq!(json["maximal_subgroups"].as_array().unwrap().len(), 10);
    }
}
