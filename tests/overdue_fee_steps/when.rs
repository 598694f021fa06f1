//! When steps for overdue-fee BDD scenarios.

use super::world::{FeeWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when("the overdue fee is calculated")]
fn calculate_overdue_fee(world: &mut FeeWorld) -> Result<(), eyre::Report> {
    let task_id = world
        .task_id
        .clone()
        .ok_or_else(|| eyre::eyre!("missing task under test in scenario world"))?;
    let service = world
        .service
        .as_ref()
        .ok_or_else(|| eyre::eyre!("scenario must fix the calendar before billing"))?;
    let report = run_async(service.overdue_fee_report(&task_id))
        .wrap_err("calculate overdue fee for scenario")?;
    world.report = Some(report);
    Ok(())
}
