use serde::{Deserialize, Serialize};

/// Body of `POST /get_response`. A missing `query` reads as empty.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub query: String,
}

/// Reply of `POST /get_response`: catalog data when the query names a known
/// condition, free text from the model otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnswerResponse {
    Disease {
        disease_info: String,
        prevention: String,
        remedies: String,
        doctor_recommendations: String,
    },
    Generic {
        response: String,
    },
}

/// A condition the service can answer about without the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disease {
    pub name: &'static str,
    pub information: &'static str,
    pub prevention: &'static str,
    pub remedies: &'static str,
    pub specialties: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Doctor {
    pub name: &'static str,
    pub specialty: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
}

impl std::fmt::Display for Doctor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Specialty: {}", self.specialty)?;
        writeln!(f, "Phone: {}", self.phone)?;
        writeln!(f, "Email: {}", self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_query_defaults_to_empty() {
        let req: QueryRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(req.query, "");
    }

    #[test]
    fn responses_serialize_without_tag() {
        let generic = AnswerResponse::Generic { response: "hi".to_string() };
        assert_eq!(serde_json::to_value(&generic).unwrap(), json!({"response": "hi"}));

        let disease = AnswerResponse::Disease {
            disease_info: "a".to_string(),
            prevention: "b".to_string(),
            remedies: "c".to_string(),
            doctor_recommendations: "d".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&disease).unwrap(),
            json!({
                "disease_info": "a",
                "prevention": "b",
                "remedies": "c",
                "doctor_recommendations": "d",
            })
        );
    }
}
