//! Integration specifications for the cohort CSV import.

use career_compass::guidance::cohort::{parse_results, CohortImportError, CohortReport};
use career_compass::guidance::{Grade, Subject, SubjectGrade};

const CLASS_SHEET: &str = "\
Name,English,Kiswahili,Mathematics,Biology,Chemistry,Physics,History,Geography,CRE,IRE,HRE,Agriculture,Business Studies,Computer Studies,Home Science,Art & Design
Wanjiku Njeri,A,A,A-,A-,,,A,,,,,,,A,,
Otieno Okoth,B+,B,B,A-,,,B+,,,,,,,B+,,
Amina Yusuf,C,C,C,C,,,C,,,,,,C,,,
Kiptoo Chumo,B,B-,C+,,C,,,B,,,,X,,,B-,
";

#[test]
fn imports_a_full_class_sheet() {
    let entries = parse_results(CLASS_SHEET.as_bytes()).expect("sheet parses");
    assert_eq!(entries.len(), 4);

    assert_eq!(
        entries[0].submission.grade(Subject::Mathematics),
        SubjectGrade::Graded(Grade::AMinus)
    );
    // An explicit X cell reads as the sentinel, same as a blank.
    assert_eq!(
        entries[3].submission.grade(Subject::Agriculture),
        SubjectGrade::NotTaken
    );
    assert_eq!(
        entries[3].submission.grade(Subject::Physics),
        SubjectGrade::NotTaken
    );
}

#[test]
fn report_summarizes_bands_and_completeness() {
    let entries = parse_results(CLASS_SHEET.as_bytes()).expect("sheet parses");
    let report = CohortReport::build(&entries);

    assert_eq!(report.students.len(), 4);
    assert_eq!(report.students[1].mean.mean_grade, Grade::BPlus);
    assert!(report.students[1].complete);
    assert_eq!(report.students[2].mean.mean_grade, Grade::C);

    let observed: usize = report.band_distribution.iter().map(|band| band.count).sum();
    assert_eq!(observed, 4);
}

#[test]
fn malformed_grades_abort_the_import_with_the_row() {
    let sheet = "\
Name,English,Kiswahili,Mathematics
Wanjiku Njeri,A,A,A
Otieno Okoth,B,B,G+
";
    let error = parse_results(sheet.as_bytes()).expect_err("G+ is not a grade");
    match error {
        CohortImportError::Grade { row, name, .. } => {
            assert_eq!(row, 3);
            assert_eq!(name, "Otieno Okoth");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_sheets_build_an_empty_report() {
    let sheet = "Name,English,Kiswahili,Mathematics\n";
    let entries = parse_results(sheet.as_bytes()).expect("header-only sheet parses");
    let report = CohortReport::build(&entries);
    assert!(report.students.is_empty());
    assert_eq!(report.cohort_mean_points, 0.0);
}
