//! Then steps for task workflow behaviour scenarios.

use super::world::WorkflowWorld;
use rstest_bdd_macros::then;
use taskboard::task::{domain::Workflow, services::TaskWorkflowError};

#[then(r#"the board holds one task titled "{title}" that is not completed"#)]
fn board_holds_single_open_task(
    world: &WorkflowWorld,
    title: String,
) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.service.task_count() == 1,
        "expected exactly one task, found {}",
        world.service.task_count()
    );
    let task = world
        .service
        .tasks()
        .next()
        .ok_or_else(|| eyre::eyre!("expected a task on the board"))?;
    eyre::ensure!(
        task.title().as_str() == title,
        "unexpected task title {}",
        task.title()
    );
    eyre::ensure!(!task.completed(), "a new task should start open");
    Ok(())
}

#[then("no workflow is active")]
fn no_workflow_is_active(world: &WorkflowWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.service.workflow().is_idle(),
        "expected idle workflow, found {}",
        world.service.workflow().as_str()
    );
    Ok(())
}

#[then(r#"the save is rejected with "{message}""#)]
fn save_rejected_with_message(
    world: &WorkflowWorld,
    message: String,
) -> Result<(), eyre::Report> {
    let result = world
        .last_save
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing save result in scenario world"))?;
    let Err(failure) = result else {
        return Err(eyre::eyre!("expected the save to be rejected"));
    };
    eyre::ensure!(
        matches!(failure, TaskWorkflowError::Validation(_)),
        "expected a validation rejection, got {failure:?}"
    );
    eyre::ensure!(
        failure.to_string() == message,
        "unexpected rejection message: {failure}"
    );

    let recorded = world
        .service
        .last_error()
        .ok_or_else(|| eyre::eyre!("expected the rejection to be recorded for display"))?;
    eyre::ensure!(
        recorded.to_string() == message,
        "recorded error does not match the rejection: {recorded}"
    );
    Ok(())
}

#[then("the board is empty")]
fn board_is_empty(world: &WorkflowWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.service.task_count() == 0,
        "expected an empty board, found {} tasks",
        world.service.task_count()
    );
    Ok(())
}

#[then("the add workflow is still open")]
fn add_workflow_still_open(world: &WorkflowWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        matches!(world.service.workflow(), Workflow::Add),
        "expected the add workflow to stay open, found {}",
        world.service.workflow().as_str()
    );
    Ok(())
}

#[then(r#"only the task titled "{title}" remains"#)]
fn only_named_task_remains(world: &WorkflowWorld, title: String) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.service.task_count() == 1,
        "expected exactly one remaining task, found {}",
        world.service.task_count()
    );
    let task = world
        .service
        .tasks()
        .next()
        .ok_or_else(|| eyre::eyre!("expected a remaining task"))?;
    eyre::ensure!(
        task.title().as_str() == title,
        "unexpected remaining task {}",
        task.title()
    );
    Ok(())
}

#[then("the deletion fails with a persistence error")]
fn deletion_fails_with_persistence_error(world: &WorkflowWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_delete
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing delete result in scenario world"))?;
    eyre::ensure!(
        matches!(result, Err(TaskWorkflowError::Persistence(_))),
        "expected a persistence failure, got {result:?}"
    );
    Ok(())
}

#[then("the delete workflow is still armed")]
fn delete_workflow_still_armed(world: &WorkflowWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        matches!(world.service.workflow(), Workflow::Delete(_)),
        "expected the delete confirmation to stay armed, found {}",
        world.service.workflow().as_str()
    );
    Ok(())
}

#[then("both seeded tasks remain")]
fn both_seeded_tasks_remain(world: &WorkflowWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.service.task_count() == 2,
        "expected both seeded tasks, found {}",
        world.service.task_count()
    );
    Ok(())
}
