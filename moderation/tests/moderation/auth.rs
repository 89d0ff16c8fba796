use jiff::SignedDuration;
use moderation::{
    ActionOutcome, AuthAccessor, ControllerError, EndpointConfig, FetchOutcome,
    ModerationAction, ModerationList,
};
use payloads::{
    APIClient, ClientError, EntityId, ModerationStatus, UserType,
    requests::LoginCredentials, responses::Alumni,
};
use std::{cell::RefCell, rc::Rc};
use test_helpers::{
    ADMIN_EMAIL, ADMIN_PASSWORD, alumni_a, session_record, spawn_app,
    start_time,
};

use crate::{open, open_with_record};

fn is_unauthorized(outcome: &FetchOutcome) -> bool {
    matches!(outcome, FetchOutcome::Failed(e) if e.is_unauthorized())
}

#[tokio::test]
async fn missing_session_makes_no_request() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.store.seed("alumni", vec![alumni_a()]);
    let list = open_with_record::<Alumni>(&app, EndpointConfig::alumni(), None);

    let outcome = list.refresh().await;

    assert!(is_unauthorized(&outcome), "{outcome:?}");
    assert_eq!(app.store.request_count("alumni"), 0);
    list.with(|list| assert!(!list.is_loading()));
    Ok(())
}

#[tokio::test]
async fn expired_session_makes_no_request() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let record = app.expired_session_record();
    let list = open_with_record::<Alumni>(
        &app,
        EndpointConfig::alumni(),
        Some(record),
    );

    let outcome = list.refresh().await;

    assert!(is_unauthorized(&outcome), "{outcome:?}");
    assert_eq!(app.store.request_count("alumni"), 0);
    Ok(())
}

#[tokio::test]
async fn unreadable_session_makes_no_request() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let list = open_with_record::<Alumni>(
        &app,
        EndpointConfig::alumni(),
        Some("not json".to_string()),
    );

    let outcome = list.refresh().await;

    assert!(is_unauthorized(&outcome), "{outcome:?}");
    assert_eq!(app.store.request_count("alumni"), 0);
    Ok(())
}

#[tokio::test]
async fn refused_token_is_unauthorized() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let record = session_record(
        "revoked",
        start_time() + SignedDuration::from_hours(1),
    );
    let list = open_with_record::<Alumni>(
        &app,
        EndpointConfig::alumni(),
        Some(record),
    );

    let outcome = list.refresh().await;

    assert!(is_unauthorized(&outcome), "{outcome:?}");
    assert_eq!(app.store.request_count("alumni"), 1);
    Ok(())
}

#[tokio::test]
async fn action_without_session_sends_nothing() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.store.seed("alumni", vec![alumni_a()]);
    let record = Rc::new(RefCell::new(Some(app.session_record())));
    let list = ModerationList::<Alumni, _>::build(
        EndpointConfig::alumni(),
        APIClient::new(app.client.address.clone()),
        AuthAccessor::new({
            let record = record.clone();
            move || record.borrow().clone()
        }),
        start_time,
        None,
    );
    list.refresh().await;

    // signed out in another tab
    record.replace(None);
    let outcome = list
        .perform(&EntityId::from("A"), ModerationAction::Approve)
        .await?;

    assert!(matches!(
        outcome,
        ActionOutcome::Failed(ControllerError::Unauthorized(_))
    ));
    assert_eq!(app.store.request_count("alumni"), 1);
    assert_eq!(app.status_of("alumni", "A"), Some(ModerationStatus::Pending));
    list.with(|list| assert!(!list.is_in_flight(&EntityId::from("A"))));
    Ok(())
}

#[tokio::test]
async fn login_issues_a_usable_session() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.store.seed("alumni", vec![alumni_a()]);

    let response = app
        .client
        .login(&LoginCredentials {
            email: ADMIN_EMAIL.to_string(),
            password: ADMIN_PASSWORD.to_string(),
            user_type: UserType::Admin,
        })
        .await?;
    assert_eq!(response.user_type, UserType::Admin);
    assert!(response.expiry > start_time());

    let record = session_record(&response.access_token, response.expiry);
    let list = open_with_record::<Alumni>(
        &app,
        EndpointConfig::alumni(),
        Some(record),
    );
    assert_eq!(list.refresh().await, FetchOutcome::Applied { count: 1 });
    Ok(())
}

#[tokio::test]
async fn wrong_password_is_unauthorized() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app
        .client
        .login(&LoginCredentials {
            email: ADMIN_EMAIL.to_string(),
            password: "wrong-password".to_string(),
            user_type: UserType::Admin,
        })
        .await;

    match result {
        Err(ClientError::Unauthorized(message)) => {
            assert_eq!(message, "Invalid email or password")
        }
        other => panic!("expected unauthorized, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn non_admin_token_is_forbidden() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (token, expiry) = app.store.issue_token(UserType::Student);
    let list = open_with_record::<Alumni>(
        &app,
        EndpointConfig::alumni(),
        Some(session_record(&token, expiry)),
    );

    let outcome = list.refresh().await;

    assert!(is_unauthorized(&outcome), "{outcome:?}");
    // a signed-in admin still works
    let list = open::<Alumni>(&app, EndpointConfig::alumni());
    assert!(matches!(list.refresh().await, FetchOutcome::Applied { .. }));
    Ok(())
}
