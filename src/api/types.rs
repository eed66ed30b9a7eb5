// Student API response types.
// Defines structs for deserializing the student list and evaluation responses.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Student identifier, kept exactly as the API sent it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StudentId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudentId::Number(n) => write!(f, "{}", n),
            StudentId::Text(s) => f.write_str(s),
        }
    }
}

/// A student record from `/estudantes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    #[serde(rename = "name_estudante")]
    pub name: String,
    #[serde(default)]
    pub photo: Option<String>,
}

/// Evaluation score, numeric or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Number(f64),
    Text(String),
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Number(n) => write!(f, "{}", n),
            Score::Text(s) => f.write_str(s),
        }
    }
}

/// A student's evaluation from `/avaliacao/<id>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    #[serde(rename = "nota")]
    pub score: Score,
    #[serde(rename = "professor")]
    pub teacher: String,
    #[serde(rename = "materia")]
    pub subject: String,
    #[serde(rename = "sala")]
    pub room: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_wire_format() {
        let json = r#"[
            {"id": 1, "name_estudante": "Ana", "photo": "https://img/1.png"},
            {"id": "b2", "name_estudante": "Bruno", "photo": null},
            {"id": 3, "name_estudante": "Carla"}
        ]"#;

        let students: Vec<Student> = serde_json::from_str(json).unwrap();
        assert_eq!(students.len(), 3);
        assert_eq!(students[0].id, StudentId::Number(1.into()));
        assert_eq!(students[0].photo.as_deref(), Some("https://img/1.png"));
        assert_eq!(students[1].id, StudentId::Text("b2".to_string()));
        assert_eq!(students[1].name, "Bruno");
        assert!(students[2].photo.is_none());
    }

    #[test]
    fn test_student_id_keeps_its_json_type() {
        let json = serde_json::to_string(&StudentId::Number(5.into())).unwrap();
        assert_eq!(json, "5");
        let json = serde_json::to_string(&StudentId::Text("5".to_string())).unwrap();
        assert_eq!(json, "\"5\"");
    }

    #[test]
    fn test_signed_and_fractional_ids_are_kept() {
        let json = r#"[
            {"id": 1, "name_estudante": "Ana"},
            {"id": -3, "name_estudante": "Bruno"},
            {"id": 2.5, "name_estudante": "Carla"}
        ]"#;

        let students: Vec<Student> = serde_json::from_str(json).unwrap();
        assert_eq!(students.len(), 3);
        assert_eq!(students[1].id.to_string(), "-3");
        assert_eq!(students[2].id.to_string(), "2.5");

        // Cached copies come back as the same ids
        let cached = serde_json::to_string(&students).unwrap();
        let restored: Vec<Student> = serde_json::from_str(&cached).unwrap();
        assert_eq!(restored, students);
        assert!(cached.contains(r#""id":-3"#));
        assert!(cached.contains(r#""id":2.5"#));
    }

    #[test]
    fn test_evaluation_wire_format() {
        let json = r#"{"nota": 8.5, "professor": "Silva", "materia": "Math", "sala": "B12"}"#;
        let evaluation: Evaluation = serde_json::from_str(json).unwrap();

        assert_eq!(evaluation.score, Score::Number(8.5));
        assert_eq!(evaluation.teacher, "Silva");
        assert_eq!(evaluation.subject, "Math");
        assert_eq!(evaluation.room, "B12");

        let text: Evaluation = serde_json::from_str(
            r#"{"nota": "A", "professor": "p", "materia": "m", "sala": "s"}"#,
        )
        .unwrap();
        assert_eq!(text.score.to_string(), "A");
    }
}
