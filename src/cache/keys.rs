// Session cache keys.
// Names the entries the gallery writes: the student list and one evaluation per student.

use crate::api::StudentId;

/// Key holding the full student list.
pub const STUDENTS_KEY: &str = "alunosData";

/// Key holding the evaluation of one student.
pub fn evaluation_key(id: &StudentId) -> String {
    format!("avaliacao_{}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluation_key() {
        assert_eq!(evaluation_key(&StudentId::Number(12.into())), "avaliacao_12");
        assert_eq!(
            evaluation_key(&StudentId::Text("a-7".to_string())),
            "avaliacao_a-7"
        );
        assert_eq!(evaluation_key(&StudentId::Number((-3).into())), "avaliacao_-3");
        let fractional: StudentId = serde_json::from_str("2.5").unwrap();
        assert_eq!(evaluation_key(&fractional), "avaliacao_2.5");
    }
}
