pub mod form_number;
pub mod lab_subjects;
pub mod raw_config;
pub mod request;
pub mod encoder;

pub use form_number::FormNumber;
pub use lab_subjects::{LabSubjects, SubjectTeacher};
pub use raw_config::{FieldKind, FormField, RawConfig};
pub use request::ScheduleRequest;
pub use encoder::{encode, split_list};
