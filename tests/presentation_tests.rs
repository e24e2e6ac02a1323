// tests/presentation_tests.rs

use monster_group::config::MonsterConfig;
use monster_group::presentation::{
    analyze_factorization_report, compare_group_orders, demonstrate_monster_group,
    demonstrate_utilities, format_large_number, get_moonshine_info, run_example, SizeRelation,
};
use monster_group::MonsterGroup;

#[test]
fn test_format_large_number_thousand() {
    let formatted = format_large_number(1000);
    assert!(formatted.starts_with("1,000 "));
    assert!(formatted.contains("1.00 × 10^3"));
}

#[test]
fn test_compare_group_orders_contains_monster() {
    let comparisons = compare_group_orders();
    assert_eq!(comparisons.len(), 7);

    let monster = comparisons.iter().find(|c| c.name == "Monster M").unwrap();
    assert_eq!(&monster.order, MonsterGroup::new().order());
    assert_eq!(monster.description, "Same as Monster");

    assert!(comparisons
        .iter()
        .filter(|c| c.name != "Monster M")
        .all(|c| c.relation == SizeRelation::Larger && c.description.ends_with("times larger")));
}

#[test]
fn test_moonshine_info() {
    let info = get_moonshine_info();
    assert!(info.description.contains("modular functions"));
    assert!(info.fields_medalist.contains("Borcherds"));
}

#[test]
fn test_report_is_stable() {
    let config = MonsterConfig::default();
    let first = analyze_factorization_report(&config.report);
    let second = analyze_factorization_report(&config.report);
    assert_eq!(first, second);
    assert_eq!(first.contributions.len(), 15);
}

#[test]
fn test_demonstrations_run() {
    let config = MonsterConfig::default();
    let mut buffer: Vec<u8> = Vec::new();

    demonstrate_monster_group(&mut buffer, &config).unwrap();
    demonstrate_utilities(&mut buffer, &config).unwrap();
    run_example(&mut buffer, &config).unwrap();

    let text = String::from_utf8(buffer).unwrap();
    assert!(text.contains("Monster Group Demonstration"));
    assert!(text.contains("Monster Group Utilities Demonstration"));
    assert!(text.contains("Monster Group Prime Factorization Analysis"));
    assert!(text.contains("Example completed successfully!"));
}
