mod common;

use axum::http::{StatusCode, header::AUTHORIZATION};
use serde_json::{Value, json};

#[tokio::test]
async fn test_list_courses_empty() {
    let server = common::create_test_server();

    let response = server.get("/courses").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_create_then_get_course() {
    let server = common::create_test_server();
    common::seed_users(&server).await;

    let response = server
        .post("/courses")
        .add_header(AUTHORIZATION, common::joe_auth())
        .json(&common::bookcase(1))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert!(response.text().is_empty());

    let response = server.get("/courses/1").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({
            "course": {
                "id": 1,
                "title": "Build a Basic Bookcase",
                "description": "High-end furniture projects are great to dream about.",
                "estimatedTime": "12 hours",
                "materialsNeeded": "* 1/2 x 3/4 inch parting strip",
                "userId": 1,
                "owner": {
                    "id": 1,
                    "firstName": "Joe",
                    "lastName": "Smith",
                    "emailAddress": common::JOE_EMAIL
                }
            }
        })
    );
}

#[tokio::test]
async fn test_list_courses_ordered_with_owners() {
    let server = common::create_test_server();
    common::seed_users(&server).await;

    common::create_course(&server, &common::bookcase(1)).await;
    common::create_course(
        &server,
        &json!({
            "title": "Learn How to Program",
            "description": "In this course, you'll learn how to write code.",
            "userId": 2
        }),
    )
    .await;

    let response = server.get("/courses").await;

    response.assert_status_ok();
    let courses = response.json::<Value>();
    let courses = courses.as_array().unwrap();
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0]["id"], 1);
    assert_eq!(courses[1]["id"], 2);
    assert_eq!(courses[1]["owner"]["firstName"], "Sally");
    assert_eq!(courses[1]["estimatedTime"], Value::Null);

    for course in courses {
        assert!(course.get("createdAt").is_none());
        assert!(course.get("updatedAt").is_none());
        assert!(course["owner"].get("password").is_none());
        assert!(course["owner"].get("createdAt").is_none());
    }
}

#[tokio::test]
async fn test_get_missing_course() {
    let server = common::create_test_server();

    let response = server.get("/courses/999").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "Course does not exist" })
    );
}

#[tokio::test]
async fn test_get_course_non_integer_id() {
    let server = common::create_test_server();

    let response = server.get("/courses/abc").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["errors"].is_array());
}

#[tokio::test]
async fn test_create_course_requires_credentials() {
    let server = common::create_test_server();
    common::seed_users(&server).await;

    let response = server
        .post("/courses")
        .json(&common::bookcase(1))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "Access Denied" })
    );
    server.get("/courses").await.assert_json(&json!([]));
}

#[tokio::test]
async fn test_create_course_reports_exactly_missing_fields() {
    let server = common::create_test_server();
    common::seed_users(&server).await;

    let cases = [
        (
            json!({ "description": "d", "userId": 1 }),
            json!(["Please provide a value for \"title\""]),
        ),
        (
            json!({ "title": "t", "userId": 1 }),
            json!(["Please provide a value for \"description\""]),
        ),
        (
            json!({ "title": "", "description": "", "userId": 1 }),
            json!([
                "Please provide a value for \"title\"",
                "Please provide a value for \"description\""
            ]),
        ),
    ];

    for (body, expected) in cases {
        let response = server
            .post("/courses")
            .add_header(AUTHORIZATION, common::joe_auth())
            .json(&body)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["errors"], expected);
    }

    let response = server
        .post("/courses")
        .add_header(AUTHORIZATION, common::joe_auth())
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["errors"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_create_course_wrong_types_keep_rule_messages() {
    let server = common::create_test_server();
    common::seed_users(&server).await;

    let response = server
        .post("/courses")
        .add_header(AUTHORIZATION, common::joe_auth())
        .json(&json!({ "description": 42, "userId": 1 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["errors"],
        json!(["Please provide a value for \"title\""])
    );

    let response = server
        .post("/courses")
        .add_header(AUTHORIZATION, common::joe_auth())
        .json(&json!({ "title": null, "description": false, "userId": 1 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["errors"],
        json!([
            "Please provide a value for \"title\"",
            "Please provide a value for \"description\""
        ])
    );
    server.get("/courses").await.assert_json(&json!([]));
}

#[tokio::test]
async fn test_create_course_non_object_body() {
    let server = common::create_test_server();
    common::seed_users(&server).await;

    let response = server
        .post("/courses")
        .add_header(AUTHORIZATION, common::joe_auth())
        .json(&json!(["Build a Basic Bookcase"]))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["errors"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_course_accepts_numeric_string_owner() {
    let server = common::create_test_server();
    common::seed_users(&server).await;

    let id = common::create_course(
        &server,
        &json!({ "title": "t", "description": "d", "userId": "1" }),
    )
    .await;

    let course = server.get(&format!("/courses/{id}")).await.json::<Value>();
    assert_eq!(course["course"]["userId"], 1);
    assert_eq!(course["course"]["owner"]["emailAddress"], common::JOE_EMAIL);

    let response = server
        .post("/courses")
        .add_header(AUTHORIZATION, common::joe_auth())
        .json(&json!({ "title": "t", "description": "d", "userId": "joe" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["errors"],
        json!(["Please provide a \"userId\" that references an existing user"])
    );
}

#[tokio::test]
async fn test_create_course_with_unknown_owner() {
    let server = common::create_test_server();
    common::seed_users(&server).await;

    for body in [
        common::bookcase(42),
        json!({ "title": "t", "description": "d" }),
    ] {
        let response = server
            .post("/courses")
            .add_header(AUTHORIZATION, common::joe_auth())
            .json(&body)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>()["errors"],
            json!(["Please provide a \"userId\" that references an existing user"])
        );
    }
}

#[tokio::test]
async fn test_create_course_owner_comes_from_body() {
    let server = common::create_test_server();
    common::seed_users(&server).await;

    let id = common::create_course(&server, &common::bookcase(2)).await;

    let course = server.get(&format!("/courses/{id}")).await.json::<Value>();
    assert_eq!(course["course"]["userId"], 2);
    assert_eq!(course["course"]["owner"]["emailAddress"], common::SALLY_EMAIL);
}

#[tokio::test]
async fn test_update_course_by_owner() {
    let server = common::create_test_server();
    common::seed_users(&server).await;
    let id = common::create_course(&server, &common::bookcase(1)).await;

    let response = server
        .put(&format!("/courses/{id}"))
        .add_header(AUTHORIZATION, common::joe_auth())
        .json(&json!({
            "title": "Build a Bigger Bookcase",
            "description": "Now with more shelves.",
            "materialsNeeded": "Plywood",
            "userId": 2
        }))
        .await;

    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.text().is_empty());

    let course = server.get(&format!("/courses/{id}")).await.json::<Value>();
    assert_eq!(course["course"]["title"], "Build a Bigger Bookcase");
    assert_eq!(course["course"]["description"], "Now with more shelves.");
    assert_eq!(course["course"]["materialsNeeded"], "Plywood");
    assert_eq!(course["course"]["estimatedTime"], "12 hours");
    assert_eq!(course["course"]["userId"], 1);
}

#[tokio::test]
async fn test_update_course_null_clears_optional_fields() {
    let server = common::create_test_server();
    common::seed_users(&server).await;
    let id = common::create_course(&server, &common::bookcase(1)).await;

    let response = server
        .put(&format!("/courses/{id}"))
        .add_header(AUTHORIZATION, common::joe_auth())
        .json(&json!({
            "title": "t",
            "description": "d",
            "estimatedTime": null,
            "materialsNeeded": null
        }))
        .await;

    response.assert_status(StatusCode::NO_CONTENT);

    let course = server.get(&format!("/courses/{id}")).await.json::<Value>();
    assert_eq!(course["course"]["title"], "t");
    assert_eq!(course["course"]["estimatedTime"], Value::Null);
    assert_eq!(course["course"]["materialsNeeded"], Value::Null);
}

#[tokio::test]
async fn test_update_course_by_non_owner() {
    let server = common::create_test_server();
    common::seed_users(&server).await;
    let id = common::create_course(&server, &common::bookcase(1)).await;
    let before = server.get(&format!("/courses/{id}")).await.json::<Value>();

    let response = server
        .put(&format!("/courses/{id}"))
        .add_header(AUTHORIZATION, common::sally_auth())
        .json(&json!({ "title": "Hijacked", "description": "Mine now." }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "User does not own course" })
    );

    server
        .get(&format!("/courses/{id}"))
        .await
        .assert_json(&before);
}

#[tokio::test]
async fn test_update_course_validation_and_missing() {
    let server = common::create_test_server();
    common::seed_users(&server).await;
    let id = common::create_course(&server, &common::bookcase(1)).await;

    let response = server
        .put(&format!("/courses/{id}"))
        .add_header(AUTHORIZATION, common::joe_auth())
        .json(&json!({ "title": "Only a title" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["errors"],
        json!(["Please provide a value for \"description\""])
    );

    let response = server
        .put("/courses/999")
        .add_header(AUTHORIZATION, common::joe_auth())
        .json(&json!({ "title": "t", "description": "d" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "Course does not exist" })
    );
}

#[tokio::test]
async fn test_update_course_requires_credentials() {
    let server = common::create_test_server();
    common::seed_users(&server).await;
    let id = common::create_course(&server, &common::bookcase(1)).await;

    let response = server
        .put(&format!("/courses/{id}"))
        .json(&json!({ "title": "t", "description": "d" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_delete_course_by_non_owner() {
    let server = common::create_test_server();
    common::seed_users(&server).await;
    let id = common::create_course(&server, &common::bookcase(1)).await;

    let response = server
        .delete(&format!("/courses/{id}"))
        .add_header(AUTHORIZATION, common::sally_auth())
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    server
        .get(&format!("/courses/{id}"))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_delete_course_by_owner() {
    let server = common::create_test_server();
    common::seed_users(&server).await;
    let id = common::create_course(&server, &common::bookcase(1)).await;

    let response = server
        .delete(&format!("/courses/{id}"))
        .add_header(AUTHORIZATION, common::joe_auth())
        .await;

    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.text().is_empty());

    server
        .get(&format!("/courses/{id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let response = server
        .delete(&format!("/courses/{id}"))
        .add_header(AUTHORIZATION, common::joe_auth())
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_course_requires_credentials() {
    let server = common::create_test_server();

    let response = server.delete("/courses/1").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}
