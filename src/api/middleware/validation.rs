//! Declarative request-body validation.
//!
//! A request DTO lists its [`FieldRule`]s in order. The [`Valid`] extractor
//! parses the body into a JSON object, evaluates every rule against the raw
//! [`Fields`] (no short-circuit) and either builds the typed body for the
//! handler or rejects with `400 {"errors": [...]}` listing the failed rules'
//! messages in declaration order.
//!
//! Rules read the JSON values themselves, so a field of an unexpected type
//! is judged like any other value instead of failing the whole parse.
//!
//! ```rust,ignore
//! async fn create_course_handler(
//!     State(state): State<AppState>,
//!     Valid(payload): Valid<CourseRequest>,
//! ) -> Result<StatusCode, AppError> { ... }
//! ```

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::{Map, Value};
use validator::ValidateEmail;

use crate::application::services::UserService;
use crate::error::AppError;
use crate::state::AppState;

/// The condition a field must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Present and not falsy: `null`, `""`, `0` and `false` all fail, as do
    /// arrays and objects, which have no text form.
    Present,
    /// Present, possibly empty.
    Exists,
    /// A string holding a valid email address. Absent values pass; pair with
    /// [`Check::Exists`] to require the field.
    Email,
    /// No registered user has this email address. Only consulted for a
    /// valid email.
    UniqueEmail,
}

/// One rule: a field, a check and the message reported when it fails.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub check: Check,
    pub message: &'static str,
}

impl FieldRule {
    pub const fn new(field: &'static str, check: Check, message: &'static str) -> Self {
        Self {
            field,
            check,
            message,
        }
    }
}

/// The members of a JSON object request body, keyed by wire name.
#[derive(Debug, Default, Clone)]
pub struct Fields(Map<String, Value>);

impl Fields {
    /// Parses a request body. Blank content is the empty object.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for malformed JSON or a JSON value
    /// that is not an object.
    pub fn parse(bytes: &[u8]) -> Result<Self, AppError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            Ok(_) => Err(AppError::invalid("Request body must be a JSON object")),
            Err(e) => Err(AppError::invalid(format!("Malformed JSON body: {e}"))),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Text form of a scalar field. Numbers and booleans are stringified;
    /// `null`, arrays, objects and absent fields have none.
    pub fn text(&self, name: &str) -> Option<String> {
        self.get(name).and_then(scalar_text)
    }

    /// Like [`Fields::text`], but keeps an absent field apart from one that
    /// is present and `null`: `None` is absent, `Some(None)` is `null`.
    pub fn nullable_text(&self, name: &str) -> Option<Option<String>> {
        self.get(name).map(scalar_text)
    }

    /// Integer value of a field given as a JSON integer or a numeric string.
    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.get(name)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl From<Map<String, Value>> for Fields {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Bool(b) => *b,
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}

/// Whether `address` is a deliverable email address.
///
/// On top of the RFC syntax check, the domain must be a dotted name whose
/// last label is alphabetic and at least two characters long, so
/// `a@localhost` and `a@10.0.0.1` are rejected.
pub fn is_email(address: &str) -> bool {
    if !address.validate_email() {
        return false;
    }

    let Some((_, domain)) = address.rsplit_once('@') else {
        return false;
    };

    domain.rsplit_once('.').is_some_and(|(host, tld)| {
        !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
    })
}

/// A request body with declared field rules.
pub trait FieldRules: Sized {
    /// Rules in evaluation and reporting order.
    const RULES: &'static [FieldRule];

    /// Builds the typed body from fields that passed every rule.
    fn from_fields(fields: &Fields) -> Self;
}

/// Evaluates every rule against `fields`.
///
/// # Errors
///
/// Returns [`AppError::Validation`] with one message per failed rule.
/// Returns [`AppError::Internal`] if the uniqueness lookup fails.
pub async fn check_rules(
    fields: &Fields,
    rules: &[FieldRule],
    users: &UserService,
) -> Result<(), AppError> {
    let mut failures = Vec::new();

    for rule in rules {
        let value = fields.get(rule.field);

        let passed = match rule.check {
            Check::Present => value.is_some_and(is_truthy),
            Check::Exists => value.is_some(),
            Check::Email => match value {
                None => true,
                Some(Value::String(s)) => is_email(s),
                Some(_) => false,
            },
            Check::UniqueEmail => match value {
                Some(Value::String(email)) if is_email(email) => {
                    !users.is_email_taken(email).await?
                }
                _ => true,
            },
        };

        if !passed {
            failures.push(rule.message.to_string());
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        tracing::debug!(?failures, "Request body failed validation");
        Err(AppError::validation(failures))
    }
}

/// Extractor that parses a JSON object body and enforces its [`FieldRules`].
///
/// An empty body is treated as `{}` so that every presence rule reports.
pub struct Valid<T>(pub T);

impl<T> FromRequest<AppState> for Valid<T>
where
    T: FieldRules + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::invalid(e.body_text()))?;

        let fields = Fields::parse(&bytes)?;
        check_rules(&fields, T::RULES, &state.user_service).await?;

        Ok(Valid(T::from_fields(&fields)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dto::course::CourseRequest;
    use crate::api::dto::user::CreateUserRequest;
    use crate::domain::entities::User;
    use crate::domain::repositories::MockUserRepository;
    use chrono::Utc;
    use serde_json::json;
    use std::sync::Arc;

    fn users_with(existing: Option<&'static str>) -> UserService {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_find_by_email().returning(move |email| {
            Ok((Some(email) == existing).then(|| {
                let now = Utc::now();
                User {
                    id: 1,
                    first_name: "Joe".to_string(),
                    last_name: "Smith".to_string(),
                    email_address: email.to_string(),
                    password: "hash".to_string(),
                    created_at: now,
                    updated_at: now,
                }
            }))
        });
        UserService::new(Arc::new(mock_repo), 4)
    }

    fn fields(body: Value) -> Fields {
        match body {
            Value::Object(map) => Fields::from(map),
            other => panic!("expected an object, got {other}"),
        }
    }

    fn errors(result: Result<(), AppError>) -> Vec<String> {
        match result {
            Err(AppError::Validation { errors }) => errors,
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    fn sally(email: Value) -> Fields {
        fields(json!({
            "firstName": "Sally",
            "lastName": "Jones",
            "emailAddress": email,
            "password": "pw"
        }))
    }

    #[tokio::test]
    async fn test_all_failures_reported_in_order() {
        let result = check_rules(
            &Fields::default(),
            CreateUserRequest::RULES,
            &users_with(None),
        )
        .await;

        assert_eq!(
            errors(result),
            vec![
                "Please provide a value for \"firstName\"",
                "Please provide a value for \"lastName\"",
                "Please provide a value for \"emailAddress\"",
                "Please provide a value for \"password\"",
            ]
        );
    }

    #[tokio::test]
    async fn test_falsy_values_fail_presence() {
        for title in [json!(""), json!(null), json!(0), json!(false), json!([])] {
            let body = fields(json!({ "title": title, "description": "d" }));

            let result = check_rules(&body, CourseRequest::RULES, &users_with(None)).await;

            assert_eq!(errors(result), vec!["Please provide a value for \"title\""]);
        }
    }

    #[tokio::test]
    async fn test_non_string_values_count_as_present() {
        let body = fields(json!({ "title": true, "description": 42 }));

        assert!(
            check_rules(&body, CourseRequest::RULES, &users_with(None))
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_invalid_email_format() {
        for email in [json!("not-an-email"), json!("a@localhost"), json!(null), json!(7)] {
            let result = check_rules(&sally(email), CreateUserRequest::RULES, &users_with(None)).await;

            assert_eq!(errors(result), vec!["Email must be a valid \"email address\""]);
        }
    }

    #[tokio::test]
    async fn test_taken_email_reported() {
        let result = check_rules(
            &sally(json!("joe@smith.com")),
            CreateUserRequest::RULES,
            &users_with(Some("joe@smith.com")),
        )
        .await;

        assert_eq!(errors(result), vec![crate::error::EMAIL_TAKEN]);
    }

    #[tokio::test]
    async fn test_unused_email_passes() {
        let result = check_rules(
            &sally(json!("sally@jones.com")),
            CreateUserRequest::RULES,
            &users_with(Some("joe@smith.com")),
        )
        .await;

        assert!(result.is_ok());
    }

    #[test]
    fn test_is_email_requires_dotted_domain() {
        assert!(is_email("joe@smith.com"));
        assert!(is_email("a.b+c@mail.example.co"));
        assert!(!is_email("a@localhost"));
        assert!(!is_email("a@10.0.0.1"));
        assert!(!is_email("a@example.c"));
        assert!(!is_email("sally.jones"));
    }

    #[test]
    fn test_parse_rejects_non_objects() {
        assert!(Fields::parse(b"  \n").unwrap().get("title").is_none());
        assert!(matches!(
            Fields::parse(b"[1, 2]"),
            Err(AppError::Validation { .. })
        ));
        assert!(matches!(
            Fields::parse(b"{\"title\": "),
            Err(AppError::Validation { .. })
        ));
    }

    #[test]
    fn test_field_readers() {
        let body = fields(json!({
            "text": "t",
            "number": 42,
            "flag": true,
            "null": null,
            "list": ["x"],
            "numeric": " 7 ",
            "word": "seven",
            "fraction": 1.5
        }));

        assert_eq!(body.text("text").as_deref(), Some("t"));
        assert_eq!(body.text("number").as_deref(), Some("42"));
        assert_eq!(body.text("flag").as_deref(), Some("true"));
        assert_eq!(body.text("null"), None);
        assert_eq!(body.text("list"), None);

        assert_eq!(body.nullable_text("absent"), None);
        assert_eq!(body.nullable_text("null"), Some(None));
        assert_eq!(body.nullable_text("text"), Some(Some("t".to_string())));

        assert_eq!(body.integer("number"), Some(42));
        assert_eq!(body.integer("numeric"), Some(7));
        assert_eq!(body.integer("word"), None);
        assert_eq!(body.integer("fraction"), None);
        assert_eq!(body.integer("absent"), None);
    }
}
