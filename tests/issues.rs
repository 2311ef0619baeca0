//
//  bitbucket-rest
//  tests/issues.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! v1 issue tracker over real HTTP against a local mock server.

use bitbucket_rest::api::v1::{Comment, Issue, Milestone};
use bitbucket_rest::api::{ApiError, QueryParams};
use bitbucket_rest::BitbucketClient;
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

const REPO: &str = "/1.0/repositories/acme/widget";

fn client(server: &ServerGuard) -> BitbucketClient {
    BitbucketClient::new()
        .unwrap()
        .with_base_urls(&format!("{}/1.0", server.url()), &format!("{}/2.0", server.url()))
        .unwrap()
}

#[tokio::test]
async fn test_get_issue() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", format!("{}/issues/7/", REPO).as_str())
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "local_id": 7,
                "title": "Crash on start",
                "status": "open",
                "reported_by": {"username": "jdoe"}
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let issue = client(&server)
        .v1()
        .repositories("acme", "widget")
        .get_issue(7)
        .await
        .unwrap();

    assert_eq!(issue.local_id, Some(7));
    assert_eq!(issue.status.as_deref(), Some("open"));
    assert_eq!(issue.reported_by.and_then(|u| u.username).as_deref(), Some("jdoe"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_issues_with_filter() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", format!("{}/issues/", REPO).as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("status".into(), "open".into()),
            Matcher::UrlEncoded("limit".into(), "2".into()),
        ]))
        .with_body(json!({"count": 14, "issues": [{"local_id": 1}, {"local_id": 2}]}).to_string())
        .expect(1)
        .create_async()
        .await;

    let query = QueryParams::new().with("status", "open").with("limit", 2);
    let info = client(&server)
        .v1()
        .issues("acme", "widget")
        .list_issues_with(&query)
        .await
        .unwrap();

    assert_eq!(info.count, 14);
    assert_eq!(info.issues.len(), 2);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_post_and_update_issue_comment() {
    let mut server = Server::new_async().await;

    let post = server
        .mock("POST", format!("{}/issues/7/comments/", REPO).as_str())
        .match_body(Matcher::Json(json!({"content": "Looking into it"})))
        .with_body(json!({"comment_id": 31, "content": "Looking into it"}).to_string())
        .expect(1)
        .create_async()
        .await;
    let put = server
        .mock("PUT", format!("{}/issues/7/comments/31/", REPO).as_str())
        .match_body(Matcher::Json(json!({"comment_id": 31, "content": "Fixed"})))
        .with_body(json!({"comment_id": 31, "content": "Fixed"}).to_string())
        .expect(1)
        .create_async()
        .await;

    let issue = client(&server).v1().issues("acme", "widget").issue(7);

    let mut comment = issue.post_comment(&Comment::new("Looking into it")).await.unwrap();
    comment.content = Some("Fixed".to_string());
    let updated = issue.put_comment(&comment).await.unwrap();
    assert_eq!(updated.content.as_deref(), Some("Fixed"));

    post.assert_async().await;
    put.assert_async().await;
}

#[tokio::test]
async fn test_delete_milestone() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("DELETE", format!("{}/issues/milestones/3/", REPO).as_str())
        .with_status(204)
        .expect(1)
        .create_async()
        .await;

    client(&server)
        .v1()
        .issues("acme", "widget")
        .delete_milestone(3)
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_record_without_identifier_is_rejected_locally() {
    let mut server = Server::new_async().await;

    let any = server
        .mock("PUT", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let issues = client(&server).v1().issues("acme", "widget");

    let err = issues.put_issue(&Issue::default()).await.unwrap_err();
    assert!(matches!(err, ApiError::MissingIdentifier("issue")));

    let err = issues
        .put_milestone(&Milestone::named("v2"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::MissingIdentifier("milestone")));

    any.assert_async().await;
}

#[tokio::test]
async fn test_unauthorized_is_passed_through() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("POST", format!("{}/issues/", REPO).as_str())
        .with_status(401)
        .with_body("")
        .create_async()
        .await;

    let err = client(&server)
        .v1()
        .issues("acme", "widget")
        .post_issue(&Issue {
            title: Some("New".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(reqwest::StatusCode::UNAUTHORIZED));
}
