//! Then steps for overdue-fee BDD scenarios.

use super::world::FeeWorld;
use rstest_bdd_macros::then;

#[then(r#"the fee is {fee:u64} charged under "{strategy}""#)]
fn fee_charged_under_strategy(
    world: &FeeWorld,
    fee: u64,
    strategy: String,
) -> Result<(), eyre::Report> {
    let report = world
        .report
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing fee report in scenario world"))?;

    if report.fee != fee {
        return Err(eyre::eyre!(
            "expected fee {fee}, calculated {}",
            report.fee
        ));
    }
    if report.calculation_strategy.name() != strategy {
        return Err(eyre::eyre!(
            "expected strategy {strategy}, selected {}",
            report.calculation_strategy.name()
        ));
    }
    Ok(())
}
