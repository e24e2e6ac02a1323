// src/presentation/mod.rs

pub mod comparison;
pub mod demo;
pub mod moonshine;
pub mod number_format;
pub mod report;

pub use comparison::{compare_group_orders, GroupComparison, SizeRelation};
pub use demo::{demonstrate_monster_group, demonstrate_utilities, run_command, run_example};
pub use moonshine::{get_moonshine_info, MoonshineInfo};
pub use number_format::{format_large_number, format_large_number_with_precision, group_thousands};
pub use report::{analyze_factorization_report, FactorizationReport};
