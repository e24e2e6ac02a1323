// src/presentation/report.rs

use log::debug;
use num::BigUint;
use std::fmt::{self, Display};

use crate::config::ReportConfig;
use crate::group::MonsterGroup;
use crate::presentation::number_format::{
    format_fixed_ratio, format_large_number_with_precision, group_thousands,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeContribution {
    pub prime: u64,
    pub exponent: u32,
    pub contribution: BigUint,
    /// Share of the total order in percent, fixed-point.
    pub percentage: String,
}

/// Breakdown of the Monster's order by prime power.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorizationReport {
    pub total_order: String,
    pub factorization: String,
    pub distinct_primes: usize,
    pub largest_prime: u64,
    pub highest_power: u32,
    pub highest_power_primes: Vec<u64>,
    pub contributions: Vec<PrimeContribution>,
}

pub fn analyze_factorization_report(config: &ReportConfig) -> FactorizationReport {
    let monster = MonsterGroup::new();
    let factorization = monster.get_factorization();
    let total = monster.order();
    let precision = config.effective_percentage_precision();
    let hundred = BigUint::from(100u32);

    let contributions = factorization
        .iter()
        .map(|(prime, exponent)| {
            let contribution = BigUint::from(prime).pow(exponent);
            let percentage = format_fixed_ratio(&(&contribution * &hundred), total, precision);
            debug!("{}^{} contributes {}%", prime, exponent, percentage);
            PrimeContribution {
                prime,
                exponent,
                contribution,
                percentage,
            }
        })
        .collect();

    FactorizationReport {
        total_order: format_large_number_with_precision(total.clone(), config.scientific_precision),
        factorization: factorization.to_string(),
        distinct_primes: factorization.len(),
        largest_prime: factorization.largest_prime().unwrap_or(1),
        highest_power: factorization.max_exponent().unwrap_or(0),
        highest_power_primes: factorization.primes_with_max_exponent(),
        contributions,
    }
}

impl Display for FactorizationReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Monster Group Prime Factorization Analysis")?;
        writeln!(f, "{}", "=".repeat(45))?;
        writeln!(f)?;
        writeln!(f, "Total order: {}", self.total_order)?;
        writeln!(f)?;
        writeln!(f, "Prime factorization: M = {}", self.factorization)?;
        writeln!(f)?;
        writeln!(f, "Number of distinct prime factors: {}", self.distinct_primes)?;
        writeln!(f, "Largest prime factor: {}", self.largest_prime)?;

        let primes: Vec<String> = self.highest_power_primes.iter().map(|p| p.to_string()).collect();
        let label = if primes.len() == 1 { "prime" } else { "primes" };
        writeln!(f, "Highest power: {} (for {} {})", self.highest_power, label, primes.join(", "))?;

        writeln!(f)?;
        writeln!(f, "Contribution of each prime to the total order:")?;
        for c in &self.contributions {
            writeln!(
                f,
                "  {}^{} contributes {} ({}%)",
                c.prime,
                c.exponent,
                group_thousands(c.contribution.clone()),
                c.percentage
            )?;
        }
        Ok(())
    }
}
