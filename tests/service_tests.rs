//! Service-level tests with a deterministic selector, pinning the exact
//! reviewer choices and the error taxonomy.

mod common;

use pr_review_service::db::models::PrStatus;
use pr_review_service::service::pr::PullRequestService;
use pr_review_service::service::user::UserService;
use pr_review_service::ServiceError;

use common::*;

#[tokio::test]
async fn create_picks_first_candidates_in_order() {
    let db = setup_test_db().await;
    seed_team(
        &db,
        "backend",
        &[("u1", true), ("u2", true), ("u3", true), ("u4", true)],
    )
    .await;
    let service = PullRequestService::new(&db, &PickFirst);

    let pr = service.create_pr("pr-1", "x", "u1").await.unwrap();

    assert_eq!(pr.pr.status, PrStatus::Open);
    assert!(pr.pr.merged_at.is_none());
    assert_eq!(pr.reviewers, vec!["u2".to_string(), "u3".to_string()]);
}

#[tokio::test]
async fn create_duplicate_id_fails() {
    let db = setup_test_db().await;
    seed_team(&db, "backend", &[("u1", true)]).await;
    let service = PullRequestService::new(&db, &PickFirst);

    service.create_pr("pr-1", "x", "u1").await.unwrap();
    let err = service.create_pr("pr-1", "y", "u1").await.unwrap_err();
    assert!(matches!(err, ServiceError::PrExists(_)));
}

#[tokio::test]
async fn create_unknown_author_fails() {
    let db = setup_test_db().await;
    let service = PullRequestService::new(&db, &PickFirst);

    let err = service.create_pr("pr-1", "x", "ghost").await.unwrap_err();
    assert!(matches!(err, ServiceError::AuthorNotFound(_)));
}

#[tokio::test]
async fn merge_twice_keeps_first_timestamp() {
    let db = setup_test_db().await;
    seed_team(&db, "backend", &[("u1", true), ("u2", true)]).await;
    let service = PullRequestService::new(&db, &PickFirst);

    service.create_pr("pr-1", "x", "u1").await.unwrap();
    let first = service.merge_pr("pr-1").await.unwrap();
    let second = service.merge_pr("pr-1").await.unwrap();

    assert_eq!(first.pr.status, PrStatus::Merged);
    assert_eq!(second.pr.status, PrStatus::Merged);
    assert!(first.pr.merged_at.is_some());
    assert_eq!(first.pr.merged_at, second.pr.merged_at);
    // Reviewer set survives the merge untouched.
    assert_eq!(first.reviewers, second.reviewers);
    assert_eq!(first.reviewers, vec!["u2".to_string()]);
}

#[tokio::test]
async fn merge_unknown_pr_fails() {
    let db = setup_test_db().await;
    let service = PullRequestService::new(&db, &PickFirst);

    let err = service.merge_pr("nope").await.unwrap_err();
    assert!(matches!(err, ServiceError::PrNotFound(_)));
}

#[tokio::test]
async fn reassign_swaps_single_assignment() {
    let db = setup_test_db().await;
    seed_team(
        &db,
        "backend",
        &[("u1", true), ("u2", true), ("u3", true), ("u4", true)],
    )
    .await;
    let service = PullRequestService::new(&db, &PickFirst);

    service.create_pr("pr-1", "x", "u1").await.unwrap();

    // Replacement pool is [u1, u4]; PickFirst lands on u1. The author is a
    // legitimate replacement, only initial selection avoids the author.
    let (pr, new_id) = service.reassign_reviewer("pr-1", "u2").await.unwrap();

    assert_eq!(new_id, "u1");
    assert_eq!(pr.reviewers, vec!["u1".to_string(), "u3".to_string()]);
}

#[tokio::test]
async fn reassign_rejects_unassigned_reviewer() {
    let db = setup_test_db().await;
    seed_team(&db, "backend", &[("u1", true), ("u2", true), ("u3", true)]).await;
    let service = PullRequestService::new(&db, &PickFirst);

    service.create_pr("pr-1", "x", "u1").await.unwrap();
    // u4 does not exist and is certainly not assigned.
    let err = service.reassign_reviewer("pr-1", "u4").await.unwrap_err();
    assert!(matches!(err, ServiceError::ReviewerNotAssigned { .. }));
}

#[tokio::test]
async fn reassign_without_candidates_fails() {
    let db = setup_test_db().await;
    seed_team(&db, "pair", &[("u1", true), ("u2", true)]).await;
    let service = PullRequestService::new(&db, &PickFirst);

    service.create_pr("pr-1", "x", "u1").await.unwrap();
    UserService::new(&db)
        .set_is_active("u1", false)
        .await
        .unwrap();

    let err = service.reassign_reviewer("pr-1", "u2").await.unwrap_err();
    assert!(matches!(err, ServiceError::NoCandidate));
}

#[tokio::test]
async fn reassign_merged_pr_fails() {
    let db = setup_test_db().await;
    seed_team(&db, "backend", &[("u1", true), ("u2", true)]).await;
    let service = PullRequestService::new(&db, &PickFirst);

    service.create_pr("pr-1", "x", "u1").await.unwrap();
    service.merge_pr("pr-1").await.unwrap();

    let err = service.reassign_reviewer("pr-1", "u2").await.unwrap_err();
    assert!(matches!(err, ServiceError::PrMerged(_)));
}

#[tokio::test]
async fn prs_for_reviewer_is_empty_for_unknown_user() {
    let db = setup_test_db().await;
    let service = PullRequestService::new(&db, &PickFirst);

    let prs = service.prs_for_reviewer("ghost").await.unwrap();
    assert!(prs.is_empty());
}

#[tokio::test]
async fn set_is_active_unknown_user_fails() {
    let db = setup_test_db().await;
    let err = UserService::new(&db)
        .set_is_active("ghost", true)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::UserNotFound(_)));
}
