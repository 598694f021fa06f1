//! Given steps for overdue-fee BDD scenarios.

use super::world::{FeeWorld, FixedClock, run_async};
use campusflow::task::services::{CreateTaskRequest, TaskLifecycleService};
use chrono::NaiveDate;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use std::sync::Arc;

#[given(r#"the calendar is fixed at "{date}""#)]
fn calendar_fixed_at(world: &mut FeeWorld, date: String) -> Result<(), eyre::Report> {
    let parsed: NaiveDate = date
        .parse()
        .wrap_err("parse fixed calendar date for scenario")?;
    world.service = Some(TaskLifecycleService::new(
        Arc::new(world.repository.clone()),
        Arc::new(FixedClock::at(parsed)),
    ));
    Ok(())
}

#[given(r#"a pending task titled "{title}" due on "{due}""#)]
fn pending_task_due_on(
    world: &mut FeeWorld,
    title: String,
    due: String,
) -> Result<(), eyre::Report> {
    let service = world
        .service
        .as_ref()
        .ok_or_else(|| eyre::eyre!("scenario must fix the calendar before creating tasks"))?;
    let created = run_async(service.create_task(CreateTaskRequest::new(title, due)))
        .wrap_err("create task for scenario")?;
    world.task_id = created.id().cloned();
    Ok(())
}

#[given("the task has been completed")]
fn task_has_been_completed(world: &mut FeeWorld) -> Result<(), eyre::Report> {
    let task_id = world
        .task_id
        .clone()
        .ok_or_else(|| eyre::eyre!("missing task under test in scenario world"))?;
    let service = world
        .service
        .as_ref()
        .ok_or_else(|| eyre::eyre!("scenario must fix the calendar before completing tasks"))?;
    run_async(service.complete_task(&task_id)).wrap_err("complete task for scenario")?;
    Ok(())
}
