pub mod mark;
pub mod section;
pub mod sheet;
pub mod student;

pub use mark::Mark;
pub use section::Section;
pub use sheet::AttendanceSheet;
pub use student::Student;
