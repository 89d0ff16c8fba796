use std::time::Duration;

use mock_api::store::Fault;
use moderation::{
    AuthAccessor, ControllerError, EndpointConfig, FetchOutcome,
    ModerationList, StatusTab,
};
use payloads::{
    EntityId, ModerationStatus,
    responses::{Alumni, MentorshipRequest, RegistrationRequest},
};
use serde_json::json;
use test_helpers::{
    alumni_a, alumni_b, job, registration, spawn_app, start_time,
};

use crate::open;

#[tokio::test]
async fn default_tab_requests_pending_only() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.store.seed("alumni", vec![alumni_a(), alumni_b()]);
    let list = open::<Alumni>(&app, EndpointConfig::alumni());

    let outcome = list.refresh().await;

    assert_eq!(outcome, FetchOutcome::Applied { count: 1 });
    list.with(|list| {
        assert!(list.is_fetched());
        assert!(!list.is_loading());
        assert_eq!(list.items()[0].id, EntityId::from("A"));
    });
    Ok(())
}

#[tokio::test]
async fn switching_tabs_refetches() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.store.seed("alumni", vec![alumni_a(), alumni_b()]);
    let list = open::<Alumni>(&app, EndpointConfig::alumni());
    list.refresh().await;

    let outcome = list.show_tab(StatusTab::All).await;
    assert_eq!(outcome, Some(FetchOutcome::Applied { count: 2 }));

    // same tab again is a no-op
    assert_eq!(list.show_tab(StatusTab::All).await, None);
    assert_eq!(app.store.request_count("alumni"), 2);

    let outcome = list
        .show_tab(StatusTab::Only(ModerationStatus::Approved))
        .await;
    assert_eq!(outcome, Some(FetchOutcome::Applied { count: 1 }));
    list.with(|list| assert_eq!(list.items()[0].id, EntityId::from("B")));
    Ok(())
}

#[tokio::test]
async fn search_and_facets_narrow_the_fetched_list() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.store.seed("alumni", vec![alumni_a(), alumni_b()]);
    let list = open::<Alumni>(&app, EndpointConfig::alumni());
    list.show_tab(StatusTab::All).await;

    list.update(|list| list.set_query("GWAL".to_string()));
    list.with(|list| {
        let visible = list.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, EntityId::from("A"));
    });

    list.update(|list| {
        list.set_query(String::new());
        list.set_facet("branch", "ece".to_string());
    });
    list.with(|list| {
        let visible = list.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, EntityId::from("B"));
    });

    list.update(|list| list.clear_filters());
    list.with(|list| assert_eq!(list.visible().len(), 2));
    // filtering never triggers a request
    assert_eq!(app.store.request_count("alumni"), 1);
    Ok(())
}

#[tokio::test]
async fn lists_are_read_from_their_named_field() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.store.seed(
        "mentorships",
        vec![json!({
            "_id": "M1",
            "menteeName": "Farhan Ali",
            "topic": "Backend development",
            "status": "pending",
        })],
    );
    app.store.seed(
        "pending-requests",
        vec![
            registration("R1", "Ishita Singh", "alumni"),
            json!({
                "_id": "R2",
                "name": "Already Done",
                "status": "approved",
            }),
        ],
    );

    let mentorship =
        open::<MentorshipRequest>(&app, EndpointConfig::mentorship());
    assert_eq!(
        mentorship.refresh().await,
        FetchOutcome::Applied { count: 1 }
    );

    let registrations =
        open::<RegistrationRequest>(&app, EndpointConfig::registrations());
    assert_eq!(
        registrations.refresh().await,
        FetchOutcome::Applied { count: 1 }
    );
    registrations.with(|list| {
        assert_eq!(list.items()[0].name, "Ishita Singh");
    });
    Ok(())
}

#[tokio::test]
async fn failed_fetch_keeps_previous_items() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.store.seed("alumni", vec![alumni_a(), alumni_b()]);
    let list = open::<Alumni>(&app, EndpointConfig::alumni());
    list.show_tab(StatusTab::All).await;

    app.store.push_fault("alumni", Fault::Malformed);
    let outcome = list.refresh().await;

    assert!(matches!(
        outcome,
        FetchOutcome::Failed(ControllerError::Transient(_))
    ));
    list.with(|list| {
        assert_eq!(list.items().len(), 2);
        assert!(list.error().is_some());
        assert!(!list.is_loading());
    });

    // next successful fetch clears the error
    assert_eq!(list.refresh().await, FetchOutcome::Applied { count: 2 });
    list.with(|list| assert!(list.error().is_none()));
    Ok(())
}

#[tokio::test]
async fn server_message_is_surfaced() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.store
        .push_fault("jobs", Fault::Status(422, "Unknown status filter".into()));
    let list = open::<payloads::responses::Job>(&app, EndpointConfig::jobs());

    let outcome = list.refresh().await;

    assert_eq!(
        outcome,
        FetchOutcome::Failed(ControllerError::Rejected(
            "Unknown status filter".into()
        ))
    );
    list.with(|list| assert!(!list.is_fetched()));
    Ok(())
}

#[tokio::test]
async fn server_fault_is_transient() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.store.seed(
        "jobs",
        vec![job("J1", "Backend Engineer", ModerationStatus::Pending)],
    );
    let list = open::<payloads::responses::Job>(&app, EndpointConfig::jobs());
    list.refresh().await;
    app.store
        .push_fault("jobs", Fault::Status(500, "Database unavailable".into()));

    let outcome = list.refresh().await;

    match outcome {
        FetchOutcome::Failed(ControllerError::Transient(message)) => {
            assert!(!message.contains("Database unavailable"));
        }
        other => panic!("expected a transient failure, got {other:?}"),
    }
    // the rows from the last good read stay on screen
    list.with(|list| {
        assert_eq!(list.items().len(), 1);
        assert!(!list.is_loading());
    });
    Ok(())
}

#[tokio::test]
async fn newest_fetch_wins() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.store.seed("alumni", vec![alumni_a(), alumni_b()]);
    let list = open::<Alumni>(&app, EndpointConfig::alumni());
    list.update(|list| list.set_tab(StatusTab::All));

    // the first fetch reads both entries but answers late
    app.store
        .push_fault("alumni", Fault::Delay(Duration::from_millis(400)));
    let slow = list.refresh();
    let fast = async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        app.store.seed("alumni", vec![alumni_a()]);
        list.refresh().await
    };
    let (slow, fast) = tokio::join!(slow, fast);

    assert_eq!(fast, FetchOutcome::Applied { count: 1 });
    assert_eq!(slow, FetchOutcome::Stale);
    list.with(|list| {
        assert_eq!(list.items().len(), 1);
        assert!(!list.is_loading());
    });
    Ok(())
}

#[tokio::test]
async fn slow_server_times_out() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.store.seed("alumni", vec![alumni_a()]);
    app.store
        .push_fault("alumni", Fault::Delay(Duration::from_secs(2)));
    let list = ModerationList::<Alumni, _>::build(
        EndpointConfig::alumni(),
        app.client_with_timeout(Duration::from_millis(200)),
        AuthAccessor::new({
            let record = app.session_record();
            move || Some(record.clone())
        }),
        start_time,
        None,
    );

    let outcome = list.refresh().await;

    match outcome {
        FetchOutcome::Failed(e) => assert!(e.is_transient(), "{e:?}"),
        other => panic!("expected a timeout, got {other:?}"),
    }
    Ok(())
}
