//! `rule-equality` — walk through value equality of rules.

use anyhow::Context;
use ruleval_core::ValueObject;
use ruleval_observability::{ObservabilityConfig, try_init};
use ruleval_rules::Rule;

fn main() -> anyhow::Result<()> {
    try_init(&ObservabilityConfig::from_env()).context("failed to initialize tracing")?;

    let rule_1 = Rule::new("0001", "years_old", ">", 18);
    let rule_2 = Rule::new("0001", "years_old", ">", 18);
    report("identical fields", &rule_1, &rule_2)?;

    let rule_3 = rule_2.clone().with_value(19);
    report("different threshold", &rule_1, &rule_3)?;

    tracing::info!(
        same_instance = rule_1.same_instance(&rule_2),
        equal = rule_1 == rule_2,
        "equal rules are still distinct instances"
    );
    tracing::info!(
        equal = rule_1.value_eq(&"0001: years_old > 18"),
        "rule compared against its rendered string"
    );

    Ok(())
}

fn report(case: &str, left: &Rule, right: &Rule) -> anyhow::Result<()> {
    let left_json = serde_json::to_string(left).context("serialize left rule")?;
    let right_json = serde_json::to_string(right).context("serialize right rule")?;

    tracing::info!(
        case,
        left = %left_json,
        right = %right_json,
        equal = left.equals(right),
        "compared rules"
    );
    Ok(())
}
