use crate::models::{Disease, Doctor};

/// Conditions answered from the catalog, in match priority order.
pub const DISEASES: &[Disease] = &[
    Disease {
        name: "back pain",
        information: "Back pain is a common condition that can affect people of all ages.",
        prevention: "To prevent back pain, practice good posture, avoid heavy lifting, and engage in regular exercise.",
        remedies: "Over-the-counter pain relievers, rest, and ice or heat therapy may help alleviate back pain.",
        specialties: &["Orthopedic", "Physiotherapist"],
    },
    Disease {
        name: "fever",
        information: "Fever is a common symptom of many illnesses, ranging from viral infections to more serious conditions.",
        prevention: "Preventing fever involves proper hygiene, getting vaccinated, and avoiding exposure to infected individuals.",
        remedies: "Rest, drinking plenty of fluids, and fever-reducing medications like acetaminophen can help manage fever.",
        specialties: &["General Physician", "Infectious Disease Specialist"],
    },
    Disease {
        name: "headache",
        information: "Headaches can be caused by stress, dehydration, or underlying medical conditions like migraines.",
        prevention: "To prevent headaches, stay hydrated, manage stress, and maintain good posture.",
        remedies: "Over-the-counter pain medications can help relieve headaches. If headaches persist, consult a doctor.",
        specialties: &["Neurologist"],
    },
];

pub const DOCTORS: &[Doctor] = &[
    Doctor {
        name: "Dr. John Smith",
        specialty: "Cardiologist",
        phone: "+1234567890",
        email: "john.smith@hospital.com",
    },
    Doctor {
        name: "Dr. Alice Brown",
        specialty: "Neurologist",
        phone: "+9876543210",
        email: "alice.brown@hospital.com",
    },
    Doctor {
        name: "Dr. David Lee",
        specialty: "Orthopedic",
        phone: "+1928374650",
        email: "david.lee@hospital.com",
    },
    Doctor {
        name: "Dr. Emily White",
        specialty: "Dermatologist",
        phone: "+1122334455",
        email: "emily.white@hospital.com",
    },
    Doctor {
        name: "Dr. Michael Green",
        specialty: "Pediatrician",
        phone: "+9988776655",
        email: "michael.green@hospital.com",
    },
];

const NO_SPECIALTIES: &str = "Sorry, no specialties found for the disease you mentioned.";
const NO_DOCTORS: &str = "Sorry, no doctors found for this disease.";

/// First catalog condition mentioned anywhere in `query`, ignoring case.
pub fn match_disease(query: &str) -> Option<&'static Disease> {
    let query = query.to_lowercase();
    DISEASES.iter().find(|d| query.contains(d.name))
}

/// Contact details of every doctor whose specialty treats `disease`, as a
/// plain-text block ready to show the user.
pub fn recommend_doctor(disease: &str) -> String {
    let disease = disease.to_lowercase();
    let Some(entry) = DISEASES.iter().find(|d| d.name == disease) else {
        return NO_SPECIALTIES.to_string();
    };

    let blocks: Vec<String> = DOCTORS
        .iter()
        .filter(|doc| entry.specialties.contains(&doc.specialty))
        .map(Doctor::to_string)
        .collect();

    if blocks.is_empty() {
        NO_DOCTORS.to_string()
    } else {
        blocks.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_case_insensitively_inside_sentence() {
        let found = match_disease("I've had a HEADACHE since Monday").map(|d| d.name);
        assert_eq!(found, Some("headache"));
    }

    #[test]
    fn earlier_catalog_entry_wins() {
        let found = match_disease("headache, fever and back pain").map(|d| d.name);
        assert_eq!(found, Some("back pain"));
    }

    #[test]
    fn unknown_condition_does_not_match() {
        assert_eq!(match_disease("my knee is sore"), None);
    }

    #[test]
    fn recommends_orthopedic_for_back_pain() {
        assert_eq!(
            recommend_doctor("Back Pain"),
            "Name: Dr. David Lee\nSpecialty: Orthopedic\nPhone: +1928374650\nEmail: david.lee@hospital.com\n"
        );
    }

    #[test]
    fn recommends_neurologist_for_headache() {
        assert!(recommend_doctor("headache").starts_with("Name: Dr. Alice Brown\n"));
    }

    #[test]
    fn fever_has_no_listed_doctor() {
        assert_eq!(recommend_doctor("fever"), NO_DOCTORS);
    }

    #[test]
    fn unknown_disease_has_no_specialties() {
        assert_eq!(recommend_doctor("gout"), NO_SPECIALTIES);
    }
}
