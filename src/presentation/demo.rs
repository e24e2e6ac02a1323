// src/presentation/demo.rs
//
// Canned walkthroughs of the library, written to any io::Write so the binary
// can print them and tests can capture them.

use log::info;
use std::io::Write;

use crate::config::MonsterConfig;
use crate::error::{MonsterError, Result};
use crate::group::{GroupSummary, MonsterElement, MonsterGroup};
use crate::presentation::comparison::{compare_group_orders, SizeRelation};
use crate::presentation::moonshine::get_moonshine_info;
use crate::presentation::number_format::{format_large_number_with_precision, group_thousands};
use crate::presentation::report::analyze_factorization_report;

pub fn demonstrate_monster_group<W: Write>(out: &mut W, config: &MonsterConfig) -> Result<()> {
    info!("Running group demonstration");
    let monster = MonsterGroup::new();

    writeln!(out, "Monster Group Demonstration")?;
    writeln!(out, "{}", "=".repeat(30))?;
    writeln!(out, "Group: {}", monster)?;
    writeln!(out, "Order: {}", group_thousands(monster.order().clone()))?;
    writeln!(out, "Is sporadic: {}", monster.is_sporadic())?;
    writeln!(out, "Is simple: {}", monster.is_simple())?;
    writeln!(out, "Conjugacy classes: {}", monster.get_conjugacy_classes_count())?;

    writeln!(out, "\nOrder verification: {}", monster.verify_order())?;

    writeln!(out, "\nPrime factorization:")?;
    for (prime, exponent) in monster.get_factorization().iter() {
        writeln!(out, "  {}^{}", prime, exponent)?;
    }

    writeln!(out, "\nSome maximal subgroups:")?;
    for subgroup in monster.get_maximal_subgroups_info().iter().take(config.demo.subgroup_preview) {
        writeln!(out, "  {}", subgroup)?;
    }

    let char_info = monster.get_character_table_info();
    writeln!(out, "\nCharacter table info:")?;
    writeln!(out, "  Irreducible representations: {}", char_info.irreducible_representations)?;
    writeln!(out, "  Smallest faithful representation: {}", char_info.smallest_faithful_representation)?;
    writeln!(out, "  Moonshine connection: {}", char_info.moonshine_connection)?;

    let identity = MonsterElement::identity();
    writeln!(out, "\nMonster group elements:")?;
    writeln!(out, "  Identity: {}", identity)?;
    writeln!(out, "  Identity order: {}", identity.order())?;
    writeln!(out, "  Identity conjugacy class: {}", identity.conjugacy_class())?;
    Ok(())
}

pub fn demonstrate_utilities<W: Write>(out: &mut W, config: &MonsterConfig) -> Result<()> {
    info!("Running utilities demonstration");
    let monster = MonsterGroup::new();
    let precision = config.report.scientific_precision;

    writeln!(out, "Monster Group Utilities Demonstration")?;
    writeln!(out, "{}", "=".repeat(40))?;
    writeln!(
        out,
        "\nMonster group order: {}",
        format_large_number_with_precision(monster.order().clone(), precision)
    )?;

    writeln!(out, "\nGroup Order Comparisons:")?;
    for comparison in compare_group_orders().iter().take(config.demo.comparison_limit) {
        writeln!(out, "  {}: {}", comparison.name, group_thousands(comparison.order.clone()))?;
        writeln!(out, "    {}", comparison.description)?;
    }

    let moonshine = get_moonshine_info();
    writeln!(out, "\nMonstrous Moonshine:")?;
    writeln!(out, "  {}", moonshine.description)?;
    writeln!(out, "  J-invariant: {}", moonshine.j_invariant_expansion)?;
    writeln!(out, "  Significance: {}", moonshine.significance)?;

    writeln!(out, "\n")?;
    write!(out, "{}", analyze_factorization_report(&config.report))?;
    Ok(())
}

/// Six-part tour of the public API.
pub fn run_example<W: Write>(out: &mut W, config: &MonsterConfig) -> Result<()> {
    info!("Running example walkthrough");
    let precision = config.report.scientific_precision;

    writeln!(out, "Monster Group Implementation Example")?;
    writeln!(out, "{}", "=".repeat(40))?;

    writeln!(out, "\n1. Creating and exploring the Monster group:")?;
    let monster = MonsterGroup::new();
    writeln!(out, "   Name: {}", monster.name())?;
    writeln!(out, "   Symbol: {}", monster.symbol())?;
    writeln!(
        out,
        "   Order: {}",
        format_large_number_with_precision(monster.order().clone(), precision)
    )?;
    writeln!(out, "   Is simple: {}", monster.is_simple())?;
    writeln!(out, "   Is sporadic: {}", monster.is_sporadic())?;

    writeln!(out, "\n2. Working with Monster group elements:")?;
    let identity = MonsterElement::default();
    let element_g = MonsterElement::from("g");
    writeln!(out, "   Identity element: {}", identity)?;
    writeln!(out, "   Identity is identity: {}", identity.is_identity())?;
    writeln!(out, "   Identity order: {}", identity.order())?;
    writeln!(out, "   General element: {}", element_g)?;
    writeln!(out, "   General element is identity: {}", element_g.is_identity())?;
    writeln!(out, "   General element order: {}", element_g.order())?;

    writeln!(out, "\n3. Prime factorization verification:")?;
    let factorization = monster.get_factorization();
    writeln!(out, "   Number of distinct primes: {}", factorization.len())?;
    if let Some(largest) = factorization.largest_prime() {
        writeln!(out, "   Largest prime: {}", largest)?;
    }
    writeln!(out, "   Order verification: {}", monster.verify_order())?;

    writeln!(out, "\n4. Mathematical properties:")?;
    writeln!(out, "   Conjugacy classes: {}", monster.get_conjugacy_classes_count())?;
    let char_info = monster.get_character_table_info();
    writeln!(out, "   Irreducible representations: {}", char_info.irreducible_representations)?;
    writeln!(out, "   Smallest faithful representation: {}", char_info.smallest_faithful_representation)?;

    writeln!(out, "\n5. Monstrous Moonshine connection:")?;
    let moonshine = get_moonshine_info();
    writeln!(out, "   {}", moonshine.description)?;
    writeln!(out, "   Key insight: {}", moonshine.significance)?;

    // the three largest reference groups, minus the Monster itself
    writeln!(out, "\n6. Size comparison with other groups:")?;
    let comparisons = compare_group_orders();
    let start = comparisons.len().saturating_sub(3);
    for comparison in &comparisons[start..] {
        if comparison.relation == SizeRelation::Same {
            continue;
        }
        writeln!(out, "   {}: {}", comparison.name, comparison.description)?;
    }

    writeln!(out, "\n{}", "=".repeat(40))?;
    writeln!(out, "Example completed successfully!")?;
    Ok(())
}

/// Dispatches one of `group`, `utilities`, `example`, `report`, `json`, `all`.
///
/// The group is built with [`MonsterGroup::checked`] first, so a fact table
/// that does not multiply out to the order fails every command.
pub fn run_command<W: Write>(command: &str, out: &mut W, config: &MonsterConfig) -> Result<()> {
    let monster = MonsterGroup::checked()?;
    info!("Running command: {}", command);

    match command {
        "group" => demonstrate_monster_group(out, config)?,
        "utilities" => demonstrate_utilities(out, config)?,
        "example" => run_example(out, config)?,
        "report" => write!(out, "{}", analyze_factorization_report(&config.report))?,
        "json" => {
            let summary = GroupSummary::from(&monster);
            writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
        }
        "all" => {
            demonstrate_monster_group(out, config)?;
            writeln!(out)?;
            demonstrate_utilities(out, config)?;
            writeln!(out)?;
            run_example(out, config)?;
        }
        other => return Err(MonsterError::UnknownCommand(other.to_string())),
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture<F>(run: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buffer = Vec::new();
        run(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_group_demo_respects_subgroup_preview() {
        let mut config = MonsterConfig::default();
        config.demo.subgroup_preview = 2;
        let text = capture(|out| demonstrate_monster_group(out, &config));

        assert!(text.contains("  2^1+24.Co1 (Baby Monster normalizer)"));
        assert!(text.contains("  2^2+11+22.(M24 × S3)"));
        assert!(!text.contains("3^1+12.2.Suz.2"));
        assert!(text.contains("Order verification: true"));
        assert!(text.contains("  Identity conjugacy class: 1A"));
    }

    #[test]
    fn test_utilities_demo_respects_comparison_limit() {
        let mut config = MonsterConfig::default();
        config.demo.comparison_limit = 3;
        let text = capture(|out| demonstrate_utilities(out, &config));

        assert!(text.contains("  S_20: 2,432,902,008,176,640,000"));
        assert!(!text.contains("Mathieu M_24"));
        assert!(text.contains("Largest prime factor: 71"));
    }

    #[test]
    fn test_example_skips_monster_row() {
        let text = capture(|out| run_example(out, &MonsterConfig::default()));

        assert!(text.contains("   General element order: unknown"));
        assert!(text.contains("   Conway Co_1: Monster is"));
        assert!(text.contains("   Baby Monster B: Monster is 1.94 × 10^20 times larger"));
        assert!(!text.contains("Same as Monster"));
        assert!(text.ends_with("Example completed successfully!\n"));
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        let mut buffer = Vec::new();
        let result = run_command("frobnicate", &mut buffer, &MonsterConfig::default());

        match result {
            Err(MonsterError::UnknownCommand(command)) => assert_eq!(command, "frobnicate"),
            other => panic!("expected unknown command, got {:?}", other),
        }
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_json_command_writes_verified_summary() {
        let text = capture(|out| run_command("json", out, &MonsterConfig::default()));
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(json["order_verified"], true);
        assert_eq!(json["name"], "Monster");
        assert_eq!(json["order"], "808017424794512875886459904961710757005754368000000000");
    }

    #[test]
    fn test_report_command() {
        let text = capture(|out| run_command("report", out, &MonsterConfig::default()));
        assert!(text.starts_with("Monster Group Prime Factorization Analysis"));
    }
}
