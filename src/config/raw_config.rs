use crate::config::lab_subjects::LabSubjects;

/// How a form field's text is interpreted by the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Comma-separated list of names.
    List,
    /// A single number, coerced permissively.
    Number,
}

/// Every free-text field of the scheduling form.
///
/// `key()` is both the HTML input name and the wire key of the request field
/// the value ends up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Divisions,
    Batches,
    TheoryRooms,
    LabRooms,
    TotalFaculty,
    Teachers,
    Subjects,
    PracticalSubjects,
    StartTime,
    EndTime,
    LecDuration,
    LabDuration,
    Days,
}

impl FormField {
    /// Form order, top to bottom.
    pub const ALL: [FormField; 13] = [
        FormField::Divisions,
        FormField::Batches,
        FormField::TheoryRooms,
        FormField::LabRooms,
        FormField::TotalFaculty,
        FormField::Teachers,
        FormField::Subjects,
        FormField::PracticalSubjects,
        FormField::StartTime,
        FormField::EndTime,
        FormField::LecDuration,
        FormField::LabDuration,
        FormField::Days,
    ];

    pub fn key(self) -> &'static str {
        match self {
            FormField::Divisions         => "divisions",
            FormField::Batches           => "batches",
            FormField::TheoryRooms       => "theory_rooms",
            FormField::LabRooms          => "lab_rooms",
            FormField::TotalFaculty      => "total_faculty",
            FormField::Teachers          => "teachers",
            FormField::Subjects          => "subjects",
            FormField::PracticalSubjects => "practical_subjects",
            FormField::StartTime         => "start_time",
            FormField::EndTime           => "end_time",
            FormField::LecDuration       => "lec_duration",
            FormField::LabDuration       => "lab_duration",
            FormField::Days              => "days",
        }
    }

    pub fn from_key(key: &str) -> Option<FormField> {
        FormField::ALL.iter().copied().find(|f| f.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Divisions         => "Divisions",
            FormField::Batches           => "Batches (comma separated)",
            FormField::TheoryRooms       => "Total Theory Rooms",
            FormField::LabRooms          => "Total Lab Rooms",
            FormField::TotalFaculty      => "Total Faculty",
            FormField::Teachers          => "Teachers (comma separated)",
            FormField::Subjects          => "Subjects (comma separated)",
            FormField::PracticalSubjects => "Practical Subjects (comma separated)",
            FormField::StartTime         => "Start Time",
            FormField::EndTime           => "End Time",
            FormField::LecDuration       => "Lecture Duration (hours)",
            FormField::LabDuration       => "Lab Duration (hours)",
            FormField::Days              => "Days (comma separated)",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FormField::Batches
            | FormField::Teachers
            | FormField::Subjects
            | FormField::PracticalSubjects
            | FormField::Days => FieldKind::List,
            _ => FieldKind::Number,
        }
    }
}

/// The scheduling form exactly as the user typed it.
///
/// Nothing is validated here; values may be blank or malformed. `encode`
/// turns a snapshot of this into a `ScheduleRequest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawConfig {
    pub divisions:          String,
    pub batches:            String,
    pub theory_rooms:       String,
    pub lab_rooms:          String,
    pub total_faculty:      String,
    pub teachers:           String,
    pub subjects:           String,
    pub practical_subjects: String,
    pub start_time:         String,
    pub end_time:           String,
    pub lec_duration:       String,
    pub lab_duration:       String,
    pub days:               String,
    /// Practical subjects paired with a teacher, edited by position.
    pub lab_subjects:       LabSubjects,
}

impl Default for RawConfig {
    fn default() -> Self {
        RawConfig {
            divisions:          "1".into(),
            batches:            "K4,L4,M4,N4".into(),
            theory_rooms:       "4".into(),
            lab_rooms:          "5".into(),
            total_faculty:      "10".into(),
            teachers:           "Teacher1,Teacher2,Teacher3,Teacher4,Teacher5,Teacher6,Teacher7,Teacher8".into(),
            subjects:           "CNS,TOC,SPOS,HCI,DBMS".into(),
            practical_subjects: "DBMSL,LP1,CNSL".into(),
            start_time:         "8".into(),
            end_time:           "15".into(),
            lec_duration:       "1".into(),
            lab_duration:       "2".into(),
            days:               "Monday,Tuesday,Wednesday,Thursday,Friday".into(),
            lab_subjects:       LabSubjects::default(),
        }
    }
}

impl RawConfig {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Divisions         => &self.divisions,
            FormField::Batches           => &self.batches,
            FormField::TheoryRooms       => &self.theory_rooms,
            FormField::LabRooms          => &self.lab_rooms,
            FormField::TotalFaculty      => &self.total_faculty,
            FormField::Teachers          => &self.teachers,
            FormField::Subjects          => &self.subjects,
            FormField::PracticalSubjects => &self.practical_subjects,
            FormField::StartTime         => &self.start_time,
            FormField::EndTime           => &self.end_time,
            FormField::LecDuration       => &self.lec_duration,
            FormField::LabDuration       => &self.lab_duration,
            FormField::Days              => &self.days,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        let slot = match field {
            FormField::Divisions         => &mut self.divisions,
            FormField::Batches           => &mut self.batches,
            FormField::TheoryRooms       => &mut self.theory_rooms,
            FormField::LabRooms          => &mut self.lab_rooms,
            FormField::TotalFaculty      => &mut self.total_faculty,
            FormField::Teachers          => &mut self.teachers,
            FormField::Subjects          => &mut self.subjects,
            FormField::PracticalSubjects => &mut self.practical_subjects,
            FormField::StartTime         => &mut self.start_time,
            FormField::EndTime           => &mut self.end_time,
            FormField::LecDuration       => &mut self.lec_duration,
            FormField::LabDuration       => &mut self.lab_duration,
            FormField::Days              => &mut self.days,
        };
        *slot = value;
    }

    /// Applies a `key=value` override (as given on the command line).
    ///
    /// Returns `false` when the key names no form field.
    pub fn apply_override(&mut self, assignment: &str) -> bool {
        let (key, value) = match assignment.split_once('=') {
            Some(kv) => kv,
            None => return false,
        };
        match FormField::from_key(key.trim()) {
            Some(field) => {
                self.set(field, value);
                true
            }
            None => false,
        }
    }
}
