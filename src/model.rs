//! Student entity and request payload.

use serde::{Deserialize, Serialize};

/// A stored student. `id` is `None` only before the repository assigns one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Student {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub course: Option<String>,
}

/// Body of create and update requests. Any `id` sent by the caller is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct StudentPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
}

impl Student {
    /// Unsaved student built from a request payload.
    pub fn from_payload(payload: StudentPayload) -> Self {
        Self {
            id: None,
            name: payload.name,
            email: payload.email,
            course: payload.course,
        }
    }

    /// Overwrite the mutable fields, keeping `id`.
    pub fn apply(&mut self, payload: StudentPayload) {
        self.name = payload.name;
        self.email = payload.email;
        self.course = payload.course;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_ignores_id_and_unknown_fields() {
        let payload: StudentPayload =
            serde_json::from_str(r#"{"id":42,"name":"Ann","email":"a@x.com","course":"CS","year":2}"#).unwrap();
        assert_eq!(payload.name.as_deref(), Some("Ann"));
        assert_eq!(Student::from_payload(payload).id, None);
    }

    #[test]
    fn missing_fields_become_null() {
        let payload: StudentPayload = serde_json::from_str(r#"{"name":"Ann"}"#).unwrap();
        let student = Student { id: Some(3), ..Student::from_payload(payload) };
        let json = serde_json::to_value(&student).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 3, "name": "Ann", "email": null, "course": null})
        );
    }

    #[test]
    fn apply_keeps_id() {
        let mut student = Student {
            id: Some(7),
            name: Some("Ann".into()),
            email: Some("a@x.com".into()),
            course: Some("CS".into()),
        };
        student.apply(StudentPayload {
            name: Some("Anna".into()),
            email: None,
            course: Some("Math".into()),
        });
        assert_eq!(student.id, Some(7));
        assert_eq!(student.name.as_deref(), Some("Anna"));
        assert_eq!(student.email, None);
        assert_eq!(student.course.as_deref(), Some("Math"));
    }
}
