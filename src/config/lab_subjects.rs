use std::sync::Arc;
use serde::{Deserialize, Serialize};

/// One practical subject and the teacher who runs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SubjectTeacher {
    pub subject: String,
    pub teacher: String,
}

impl SubjectTeacher {
    pub fn new(subject: impl Into<String>, teacher: impl Into<String>) -> Self {
        SubjectTeacher { subject: subject.into(), teacher: teacher.into() }
    }
}

/// Ordered list of {subject, teacher} pairs, addressed by position.
///
/// The list is immutable: every edit returns a new `LabSubjects` with exactly
/// one entry replaced, appended, or removed. Other holders of the previous
/// value (a pending request, a rendered page) never observe the edit.
///
/// Out-of-range indices leave the list unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LabSubjects {
    entries: Arc<Vec<SubjectTeacher>>,
}

impl LabSubjects {
    pub fn new(entries: Vec<SubjectTeacher>) -> Self {
        LabSubjects { entries: Arc::new(entries) }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SubjectTeacher> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SubjectTeacher> {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<SubjectTeacher> {
        self.entries.as_ref().clone()
    }

    /// Returns a copy with the entry at `index` replaced.
    pub fn with_entry(&self, index: usize, entry: SubjectTeacher) -> Self {
        if index >= self.entries.len() {
            return self.clone();
        }
        let mut next = self.to_vec();
        next[index] = entry;
        LabSubjects::new(next)
    }

    /// Returns a copy with only the subject of entry `index` changed.
    pub fn with_subject(&self, index: usize, subject: impl Into<String>) -> Self {
        match self.get(index) {
            Some(e) => self.with_entry(index, SubjectTeacher::new(subject, e.teacher.clone())),
            None => self.clone(),
        }
    }

    /// Returns a copy with only the teacher of entry `index` changed.
    pub fn with_teacher(&self, index: usize, teacher: impl Into<String>) -> Self {
        match self.get(index) {
            Some(e) => self.with_entry(index, SubjectTeacher::new(e.subject.clone(), teacher)),
            None => self.clone(),
        }
    }

    pub fn with_pushed(&self, entry: SubjectTeacher) -> Self {
        let mut next = self.to_vec();
        next.push(entry);
        LabSubjects::new(next)
    }

    pub fn without(&self, index: usize) -> Self {
        if index >= self.entries.len() {
            return self.clone();
        }
        let mut next = self.to_vec();
        next.remove(index);
        LabSubjects::new(next)
    }
}

impl FromIterator<SubjectTeacher> for LabSubjects {
    fn from_iter<I: IntoIterator<Item = SubjectTeacher>>(iter: I) -> Self {
        LabSubjects::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LabSubjects {
        LabSubjects::new(vec![
            SubjectTeacher::new("DBMSL", "T1"),
            SubjectTeacher::new("DBMSL", "T1"),
            SubjectTeacher::new("LP1", "T2"),
        ])
    }

    #[test]
    fn editing_one_entry_leaves_identical_neighbours_alone() {
        let before = sample();
        let after = before.with_teacher(1, "T9");

        assert_eq!(after.get(0), Some(&SubjectTeacher::new("DBMSL", "T1")));
        assert_eq!(after.get(1), Some(&SubjectTeacher::new("DBMSL", "T9")));
        assert_eq!(after.get(2), Some(&SubjectTeacher::new("LP1", "T2")));
        // The original value is untouched.
        assert_eq!(before.get(1), Some(&SubjectTeacher::new("DBMSL", "T1")));
    }

    #[test]
    fn out_of_range_edits_are_no_ops() {
        let list = sample();
        assert_eq!(list.with_subject(7, "X"), list);
        assert_eq!(list.without(3), list);
    }

    #[test]
    fn push_and_remove_shift_positions() {
        let list = sample().with_pushed(SubjectTeacher::new("CNSL", "T3")).without(0);
        let subjects: Vec<&str> = list.iter().map(|e| e.subject.as_str()).collect();
        assert_eq!(subjects, vec!["DBMSL", "LP1", "CNSL"]);
    }
}
