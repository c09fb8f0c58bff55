use crate::config::form_number::FormNumber;
use crate::config::raw_config::RawConfig;
use crate::config::request::ScheduleRequest;

/// Builds the request body from a snapshot of the form.
///
/// Total: blank or malformed fields never fail. List fields are split on
/// `,` and trimmed, keeping empty elements so the count matches what was
/// typed. Number fields go through `FormNumber::coerce`.
pub fn encode(raw: &RawConfig) -> ScheduleRequest {
    ScheduleRequest {
        divisions:          FormNumber::coerce(&raw.divisions),
        batches:            split_list(&raw.batches),
        theory_rooms:       FormNumber::coerce(&raw.theory_rooms),
        lab_rooms:          FormNumber::coerce(&raw.lab_rooms),
        teachers:           split_list(&raw.teachers),
        subjects:           split_list(&raw.subjects),
        practical_subjects: split_list(&raw.practical_subjects),
        lab_subjects:       raw.lab_subjects.to_vec(),
        start_time:         FormNumber::coerce(&raw.start_time),
        end_time:           FormNumber::coerce(&raw.end_time),
        lec_duration:       FormNumber::coerce(&raw.lec_duration),
        lab_duration:       FormNumber::coerce(&raw.lab_duration),
        days:               split_list(&raw.days),
        total_faculty:      FormNumber::coerce(&raw.total_faculty),
    }
}

/// Splits comma-separated form text. `""` yields one empty element.
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',').map(|s| s.trim().to_owned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::lab_subjects::{LabSubjects, SubjectTeacher};

    #[test]
    fn default_form_encodes_to_the_service_schema() {
        let req = encode(&RawConfig::default());
        let json: serde_json::Value = serde_json::from_str(&req.to_json().unwrap()).unwrap();

        assert_eq!(json["divisions"], 1);
        assert_eq!(json["batches"], serde_json::json!(["K4", "L4", "M4", "N4"]));
        assert_eq!(json["theory_rooms"], 4);
        assert_eq!(json["lab_rooms"], 5);
        assert_eq!(json["start_time"], 8);
        assert_eq!(json["end_time"], 15);
        assert_eq!(json["total_faculty"], 10);
        assert_eq!(json["days"].as_array().map(|d| d.len()), Some(5));
        assert!(json.get("lab_subjects").is_none());
    }

    #[test]
    fn list_fields_are_trimmed_but_empties_are_kept() {
        assert_eq!(split_list(" K4 , ,L4,"), vec!["K4", "", "L4", ""]);
        assert_eq!(split_list(""), vec![""]);
    }

    #[test]
    fn malformed_numbers_are_forwarded_as_null() {
        let mut raw = RawConfig::default();
        raw.end_time = "late".into();
        let req = encode(&raw);
        assert!(req.end_time.is_nan());

        let json: serde_json::Value = serde_json::from_str(&req.to_json().unwrap()).unwrap();
        assert!(json["end_time"].is_null());
    }

    #[test]
    fn encoding_is_a_pure_function_of_the_form() {
        let mut raw = RawConfig::default();
        raw.lab_duration = "??".into();
        raw.lab_subjects = LabSubjects::new(vec![SubjectTeacher::new("LP1", "Teacher2")]);
        let snapshot = raw.clone();

        assert_eq!(encode(&raw), encode(&raw));
        assert_eq!(raw, snapshot);
    }

    #[test]
    fn lab_subject_pairs_keep_their_positions() {
        let mut raw = RawConfig::default();
        raw.lab_subjects = LabSubjects::new(vec![
            SubjectTeacher::new("DBMSL", "T1"),
            SubjectTeacher::new("LP1", "T2"),
        ])
        .with_subject(1, "CNSL");

        let req = encode(&raw);
        assert_eq!(req.lab_subjects[0], SubjectTeacher::new("DBMSL", "T1"));
        assert_eq!(req.lab_subjects[1], SubjectTeacher::new("CNSL", "T2"));
    }
}
