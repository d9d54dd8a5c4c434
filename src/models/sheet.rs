use crate::models::mark::Mark;
use crate::models::student::Student;

/// The attendance matrix of one section: date columns × student rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceSheet {
    pub dates: Vec<String>,
    pub students: Vec<Student>,
}

impl AttendanceSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_date(&self, date: &str) -> bool {
        self.dates.iter().any(|d| d == date)
    }

    /// Add a date column if missing, keeping the columns sorted.
    /// Returns `true` when the column was added.
    pub fn add_date(&mut self, date: &str) -> bool {
        if self.has_date(date) {
            return false;
        }
        self.dates.push(date.to_string());
        self.dates.sort();
        true
    }

    pub fn student(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn contains_student(&self, id: &str) -> bool {
        self.student(id).is_some()
    }

    /// Append an unmarked student unless the id is already present.
    /// Returns `true` when the student was added.
    pub fn add_student(&mut self, id: &str) -> bool {
        if self.contains_student(id) {
            return false;
        }
        self.students.push(Student::new(id));
        true
    }

    /// Set one cell, creating the date column and the student row as needed.
    pub fn set_mark(&mut self, date: &str, student_id: &str, mark: Mark) {
        self.add_date(date);
        self.add_student(student_id);
        if let Some(student) = self.students.iter_mut().find(|s| s.id == student_id) {
            student.set_mark(date, mark);
        }
    }

    pub fn mark_of(&self, student_id: &str, date: &str) -> Option<Mark> {
        self.student(student_id).and_then(|s| s.mark_on(date))
    }

    /// Students without a mark on `date`, in sheet order.
    pub fn unmarked_on(&self, date: &str) -> Vec<&Student> {
        self.students
            .iter()
            .filter(|s| s.is_unmarked_on(date))
            .collect()
    }

    pub fn student_ids(&self) -> Vec<&str> {
        self.students.iter().map(|s| s.id.as_str()).collect()
    }
}
