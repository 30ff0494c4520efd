//! DTOs for the course endpoints.

use serde::Serialize;

use crate::api::middleware::validation::{Check, FieldRule, FieldRules, Fields};
use crate::domain::entities::{CourseChanges, CourseWithOwner, NewCourse, UserSummary};

/// Request body for `POST /courses` and `PUT /courses/{id}`.
///
/// `userId` is only read on creation; updates never change the owner. It may
/// be a JSON integer or a numeric string; anything else leaves it unset and
/// storage rejects the course as having no owner.
///
/// The optional fields keep an omitted key (`None`) apart from an explicit
/// `null` (`Some(None)`), so an update can clear them.
#[derive(Debug, Default)]
pub struct CourseRequest {
    pub title: String,
    pub description: String,
    pub estimated_time: Option<Option<String>>,
    pub materials_needed: Option<Option<String>>,
    pub user_id: Option<i64>,
}

impl FieldRules for CourseRequest {
    const RULES: &'static [FieldRule] = &[
        FieldRule::new(
            "title",
            Check::Present,
            "Please provide a value for \"title\"",
        ),
        FieldRule::new(
            "description",
            Check::Present,
            "Please provide a value for \"description\"",
        ),
    ];

    fn from_fields(fields: &Fields) -> Self {
        Self {
            title: fields.text("title").unwrap_or_default(),
            description: fields.text("description").unwrap_or_default(),
            estimated_time: fields.nullable_text("estimatedTime"),
            materials_needed: fields.nullable_text("materialsNeeded"),
            user_id: fields.integer("userId"),
        }
    }
}

impl CourseRequest {
    pub fn into_new_course(self) -> NewCourse {
        NewCourse {
            title: self.title,
            description: self.description,
            estimated_time: self.estimated_time.flatten(),
            materials_needed: self.materials_needed.flatten(),
            user_id: self.user_id,
        }
    }

    pub fn into_changes(self) -> CourseChanges {
        CourseChanges {
            title: self.title,
            description: self.description,
            estimated_time: self.estimated_time,
            materials_needed: self.materials_needed,
        }
    }
}

/// Owner fields embedded in a course: no password, no timestamps.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

impl From<UserSummary> for OwnerResponse {
    fn from(owner: UserSummary) -> Self {
        Self {
            id: owner.id,
            first_name: owner.first_name,
            last_name: owner.last_name,
            email_address: owner.email_address,
        }
    }
}

/// A course as returned by the API, without audit timestamps.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub user_id: i64,
    pub owner: OwnerResponse,
}

impl From<CourseWithOwner> for CourseResponse {
    fn from(CourseWithOwner { course, owner }: CourseWithOwner) -> Self {
        Self {
            id: course.id,
            title: course.title,
            description: course.description,
            estimated_time: course.estimated_time,
            materials_needed: course.materials_needed,
            user_id: course.user_id,
            owner: owner.into(),
        }
    }
}

/// Response body for `GET /courses/{id}`: `{"course": {...}}`.
#[derive(Debug, Serialize)]
pub struct CourseEnvelope {
    pub course: CourseResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Course;
    use chrono::Utc;

    #[test]
    fn test_course_response_shape() {
        let now = Utc::now();
        let response = CourseResponse::from(CourseWithOwner {
            course: Course {
                id: 1,
                title: "Build a Basic Bookcase".to_string(),
                description: "Learn...".to_string(),
                estimated_time: None,
                materials_needed: Some("wood".to_string()),
                user_id: 1,
                created_at: now,
                updated_at: now,
            },
            owner: UserSummary {
                id: 1,
                first_name: "Joe".to_string(),
                last_name: "Smith".to_string(),
                email_address: "joe@smith.com".to_string(),
            },
        });

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["materialsNeeded"], "wood");
        assert!(json["estimatedTime"].is_null());
        assert_eq!(json["userId"], 1);
        assert_eq!(json["owner"]["emailAddress"], "joe@smith.com");
        assert!(json.get("createdAt").is_none());
        assert!(json.get("updatedAt").is_none());
        assert!(json["owner"].get("password").is_none());
    }

    fn request(body: serde_json::Value) -> CourseRequest {
        match body {
            serde_json::Value::Object(map) => CourseRequest::from_fields(&Fields::from(map)),
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn test_course_request_reads_camel_case() {
        let new_course = request(serde_json::json!({
            "title": "t",
            "description": "d",
            "estimatedTime": "2 hours",
            "userId": 4
        }))
        .into_new_course();

        assert_eq!(new_course.estimated_time.as_deref(), Some("2 hours"));
        assert_eq!(new_course.user_id, Some(4));
        assert!(new_course.materials_needed.is_none());
    }

    #[test]
    fn test_course_request_coerces_loose_types() {
        let new_course = request(serde_json::json!({
            "title": "t",
            "description": 42,
            "userId": "1"
        }))
        .into_new_course();

        assert_eq!(new_course.description, "42");
        assert_eq!(new_course.user_id, Some(1));

        let unowned = request(serde_json::json!({
            "title": "t",
            "description": "d",
            "userId": "one"
        }));
        assert_eq!(unowned.user_id, None);
    }

    #[test]
    fn test_changes_keep_null_apart_from_absent() {
        let changes = request(serde_json::json!({
            "title": "t",
            "description": "d",
            "estimatedTime": null
        }))
        .into_changes();

        assert_eq!(changes.estimated_time, Some(None));
        assert_eq!(changes.materials_needed, None);
    }
}
