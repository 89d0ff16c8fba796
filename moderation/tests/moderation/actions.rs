use std::time::Duration;

use mock_api::store::Fault;
use moderation::{
    ActionOutcome, ActionRefused, AuthAccessor, Confirmation, ControllerError,
    Effect, EndpointConfig, FetchOutcome, ModerationAction, StatusTab,
    send_action,
};
use payloads::{
    EntityId, ModerationStatus,
    responses::{Alumni, Job, RegistrationRequest, Student},
};
use serde_json::json;
use test_helpers::{
    alumni_a, alumni_b, job, registration, spawn_app, start_time, student,
};

use crate::open;

fn id(value: &str) -> EntityId {
    EntityId::from(value)
}

#[tokio::test]
async fn approving_on_pending_tab_removes_the_row() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.store.seed("alumni", vec![alumni_a()]);
    let list = open::<Alumni>(&app, EndpointConfig::alumni());
    list.refresh().await;

    let outcome = list.perform(&id("A"), ModerationAction::Approve).await?;

    assert_eq!(
        outcome,
        ActionOutcome::Confirmed(Confirmation {
            id: id("A"),
            action: ModerationAction::Approve,
            effect: Effect::Status(ModerationStatus::Approved),
        })
    );
    list.with(|list| {
        assert!(list.items().is_empty());
        assert!(!list.is_in_flight(&id("A")));
    });
    assert_eq!(app.status_of("alumni", "A"), Some(ModerationStatus::Approved));

    // a refetch agrees with the local state
    assert_eq!(list.refresh().await, FetchOutcome::Applied { count: 0 });
    Ok(())
}

#[tokio::test]
async fn rejecting_on_all_tab_updates_in_place() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.store.seed("alumni", vec![alumni_a(), alumni_b()]);
    let list = open::<Alumni>(&app, EndpointConfig::alumni());
    list.show_tab(StatusTab::All).await;

    list.perform(&id("A"), ModerationAction::Reject).await?;

    list.with(|list| {
        assert_eq!(list.items().len(), 2);
        assert_eq!(
            list.get(&id("A")).map(|a| a.status),
            Some(ModerationStatus::Rejected)
        );
    });
    Ok(())
}

#[tokio::test]
async fn actions_on_different_rows_run_concurrently() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.store.seed(
        "jobs",
        vec![
            job("J1", "Backend Engineer", ModerationStatus::Pending),
            job("J2", "Data Analyst", ModerationStatus::Pending),
        ],
    );
    let list = open::<Job>(&app, EndpointConfig::jobs());
    list.refresh().await;
    app.store
        .push_fault("jobs", Fault::Delay(Duration::from_millis(200)));

    let j1 = id("J1");
    let first = list.perform(&j1, ModerationAction::Approve);
    let second = async {
        // both markers are visible while the first request is held
        let in_flight = list.with(|list| list.is_in_flight(&id("J1")));
        let outcome = list.perform(&id("J2"), ModerationAction::Reject).await;
        (in_flight, outcome)
    };
    let (first, (in_flight, second)) = tokio::join!(first, second);

    assert!(in_flight);
    assert!(matches!(first?, ActionOutcome::Confirmed(_)));
    assert!(matches!(second?, ActionOutcome::Confirmed(_)));
    assert_eq!(app.status_of("jobs", "J1"), Some(ModerationStatus::Approved));
    assert_eq!(app.status_of("jobs", "J2"), Some(ModerationStatus::Rejected));
    list.with(|list| assert!(list.items().is_empty()));
    Ok(())
}

#[tokio::test]
async fn second_action_on_same_row_is_refused() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.store.seed("alumni", vec![alumni_a()]);
    let list = open::<Alumni>(&app, EndpointConfig::alumni());
    list.refresh().await;
    app.store
        .push_fault("alumni", Fault::Delay(Duration::from_millis(200)));

    let a = id("A");
    let first = list.perform(&a, ModerationAction::Approve);
    let second = list.perform(&a, ModerationAction::Reject);
    let (first, second) = tokio::join!(first, second);

    assert!(matches!(first?, ActionOutcome::Confirmed(_)));
    assert_eq!(second, Err(ActionRefused::InFlight));
    assert_eq!(app.status_of("alumni", "A"), Some(ModerationStatus::Approved));
    Ok(())
}

#[tokio::test]
async fn server_refusal_is_shown_on_the_row() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.store.seed("alumni", vec![alumni_a()]);
    let list = open::<Alumni>(&app, EndpointConfig::alumni());
    list.refresh().await;
    app.store.push_fault(
        "alumni",
        Fault::Envelope("Alumni email is not verified".to_string()),
    );

    let outcome = list.perform(&id("A"), ModerationAction::Approve).await?;

    assert_eq!(
        outcome,
        ActionOutcome::Failed(ControllerError::Rejected(
            "Alumni email is not verified".to_string()
        ))
    );
    list.with(|list| {
        assert_eq!(
            list.row_error(&id("A")),
            Some("Alumni email is not verified")
        );
        assert_eq!(
            list.get(&id("A")).map(|a| a.status),
            Some(ModerationStatus::Pending)
        );
    });

    // retrying clears the message
    list.perform(&id("A"), ModerationAction::Approve).await?;
    list.with(|list| assert_eq!(list.row_error(&id("A")), None));
    Ok(())
}

#[tokio::test]
async fn server_fault_on_action_can_be_retried() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.store.seed("alumni", vec![alumni_a()]);
    let list = open::<Alumni>(&app, EndpointConfig::alumni());
    list.refresh().await;
    app.store.push_fault(
        "alumni",
        Fault::Status(503, "Service Unavailable".to_string()),
    );

    let outcome = list.perform(&id("A"), ModerationAction::Approve).await?;

    assert!(matches!(
        outcome,
        ActionOutcome::Failed(ControllerError::Transient(_))
    ));
    list.with(|list| {
        assert_eq!(list.row_error(&id("A")), None);
        assert!(!list.is_in_flight(&id("A")));
        assert_eq!(
            list.get(&id("A")).map(|a| a.status),
            Some(ModerationStatus::Pending)
        );
    });
    assert_eq!(app.status_of("alumni", "A"), Some(ModerationStatus::Pending));

    // the same action goes through once the server recovers
    list.perform(&id("A"), ModerationAction::Approve).await?;
    assert_eq!(
        app.status_of("alumni", "A"),
        Some(ModerationStatus::Approved)
    );
    Ok(())
}

#[tokio::test]
async fn numeric_ids_round_trip_through_actions() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.store.seed(
        "alumni",
        vec![
            json!({ "id": 1, "name": "A", "status": "pending" }),
            json!({ "id": 2, "name": "B", "status": "pending" }),
        ],
    );
    let list = open::<Alumni>(&app, EndpointConfig::alumni());
    assert_eq!(list.refresh().await, FetchOutcome::Applied { count: 2 });

    list.perform(&id("1"), ModerationAction::Approve).await?;

    list.with(|list| {
        let ids: Vec<&str> =
            list.items().iter().map(|a| a.id.0.as_str()).collect();
        assert_eq!(ids, vec!["2"]);
    });
    assert_eq!(app.status_of("alumni", "1"), Some(ModerationStatus::Approved));
    Ok(())
}

#[tokio::test]
async fn unsupported_action_sends_nothing() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.store.seed(
        "pending-requests",
        vec![registration("R1", "Riya", "student")],
    );
    let config = EndpointConfig::registrations();
    let auth = AuthAccessor::new({
        let record = app.session_record();
        move || Some(record.clone())
    });
    let before = app.store.request_count("pending-requests");

    let result = send_action(
        &app.client,
        &config,
        &auth,
        start_time(),
        &id("R1"),
        ModerationAction::Delete,
    )
    .await;

    assert_eq!(
        result,
        Err(ControllerError::Rejected(
            ActionRefused::Unsupported.to_string()
        ))
    );
    assert_eq!(app.store.request_count("pending-requests"), before);
    assert!(app.exists("pending-requests", "R1"));
    Ok(())
}

#[tokio::test]
async fn reviewing_twice_reports_the_server_message() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.store.seed("alumni", vec![alumni_a()]);
    let list = open::<Alumni>(&app, EndpointConfig::alumni());
    list.refresh().await;
    // another admin got there first
    app.store
        .review("alumni", &id("A"), ModerationStatus::Approved)?;

    let outcome = list.perform(&id("A"), ModerationAction::Reject).await?;

    assert_eq!(
        outcome,
        ActionOutcome::Failed(ControllerError::Rejected(
            "This request has already been reviewed".to_string()
        ))
    );
    list.with(|list| assert!(list.contains(&id("A"))));
    Ok(())
}

#[tokio::test]
async fn deleting_missing_entry_surfaces_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.store.seed("alumni", vec![alumni_a()]);
    let list = open::<Alumni>(&app, EndpointConfig::alumni());
    list.refresh().await;
    app.store.delete("alumni", &id("A"))?;

    let outcome = list.perform(&id("A"), ModerationAction::Delete).await?;

    assert_eq!(
        outcome,
        ActionOutcome::Failed(ControllerError::Rejected(
            "Record not found".to_string()
        ))
    );
    Ok(())
}

#[tokio::test]
async fn older_fetch_cannot_resurrect_deleted_entry() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.store.seed("alumni", vec![alumni_a(), alumni_b()]);
    let list = open::<Alumni>(&app, EndpointConfig::alumni());
    list.show_tab(StatusTab::All).await;

    // the refetch reads A before the delete lands, but answers after it
    app.store
        .push_fault("alumni", Fault::Delay(Duration::from_millis(400)));
    let fetch = list.refresh();
    let delete = async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        list.perform(&id("A"), ModerationAction::Delete).await
    };
    let (fetch, delete) = tokio::join!(fetch, delete);

    assert!(matches!(delete?, ActionOutcome::Confirmed(_)));
    assert_eq!(fetch, FetchOutcome::Applied { count: 1 });
    list.with(|list| {
        assert!(!list.contains(&id("A")));
        assert!(list.contains(&id("B")));
    });
    assert!(!app.exists("alumni", "A"));
    Ok(())
}

#[tokio::test]
async fn deleting_the_selected_entry_closes_the_detail() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.store.seed("alumni", vec![alumni_a()]);
    let list = open::<Alumni>(&app, EndpointConfig::alumni());
    list.refresh().await;
    assert!(list.update(|list| list.select(&id("A"))));

    list.perform(&id("A"), ModerationAction::Delete).await?;

    list.with(|list| assert!(list.selected().is_none()));
    Ok(())
}

#[tokio::test]
async fn student_status_toggles_in_place() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.store.seed(
        "students",
        vec![student("S1", "Farhan Ali", ModerationStatus::Active)],
    );
    let list = open::<Student>(&app, EndpointConfig::students());
    list.refresh().await;

    let deactivate = ModerationAction::SetStatus(ModerationStatus::Inactive);
    list.perform(&id("S1"), deactivate).await?;

    list.with(|list| {
        assert_eq!(
            list.get(&id("S1")).map(|s| s.status),
            Some(ModerationStatus::Inactive)
        );
    });
    assert_eq!(
        app.status_of("students", "S1"),
        Some(ModerationStatus::Inactive)
    );

    // students are never approved
    assert_eq!(
        list.perform(&id("S1"), ModerationAction::Approve).await,
        Err(ActionRefused::Unsupported)
    );
    Ok(())
}

#[tokio::test]
async fn approved_registration_leaves_the_queue() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.store.seed(
        "pending-requests",
        vec![
            registration("R1", "Ishita Singh", "alumni"),
            registration("R2", "Jay Mehta", "student"),
        ],
    );
    let list =
        open::<RegistrationRequest>(&app, EndpointConfig::registrations());
    list.refresh().await;

    list.perform(&id("R1"), ModerationAction::Approve).await?;
    assert_eq!(
        list.perform(&id("R2"), ModerationAction::Delete).await,
        Err(ActionRefused::Unsupported)
    );

    list.with(|list| {
        let ids: Vec<_> = list.items().iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids, [id("R2")]);
    });
    assert_eq!(list.refresh().await, FetchOutcome::Applied { count: 1 });
    Ok(())
}

#[tokio::test]
async fn results_after_detach_are_ignored() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.store.seed("alumni", vec![alumni_a()]);
    let list = open::<Alumni>(&app, EndpointConfig::alumni());
    list.refresh().await;
    app.store
        .push_fault("alumni", Fault::Delay(Duration::from_millis(300)));

    let a = id("A");
    let action = list.perform(&a, ModerationAction::Approve);
    let leave = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        list.detach();
    };
    let (action, ()) = tokio::join!(action, leave);

    assert_eq!(action?, ActionOutcome::Detached);
    // the request itself still went through
    assert_eq!(app.status_of("alumni", "A"), Some(ModerationStatus::Approved));
    list.with(|list| {
        assert!(list.contains(&id("A")));
        assert!(!list.is_in_flight(&id("A")));
    });
    Ok(())
}

#[tokio::test]
async fn confirmation_reaches_other_lists() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.store.seed("alumni", vec![alumni_a(), alumni_b()]);
    let pending = open::<Alumni>(&app, EndpointConfig::alumni());
    let everything = open::<Alumni>(&app, EndpointConfig::alumni());
    pending.refresh().await;
    everything.show_tab(StatusTab::All).await;

    let outcome = pending.perform(&id("A"), ModerationAction::Approve).await?;
    let ActionOutcome::Confirmed(confirmation) = outcome else {
        panic!("expected confirmation, got {outcome:?}");
    };
    everything.update(|list| list.absorb(&confirmation));

    everything.with(|list| {
        assert_eq!(
            list.get(&id("A")).map(|a| a.status),
            Some(ModerationStatus::Approved)
        );
    });
    Ok(())
}
