use std::path::PathBuf;

use career_compass::error::AppError;
use career_compass::guidance::cohort::{self, CohortReport};
use career_compass::guidance::{
    check_submission, top_strengths, MeanGradeSummary, RecommendationBundle, StudentSubmission,
    Subject, SubjectGrade,
};
use clap::Args;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Subject grade pair, e.g. --grade mathematics=B+ (repeatable)
    #[arg(
        long = "grade",
        value_name = "SUBJECT=GRADE",
        value_parser = parse_grade_pair,
        required = true
    )]
    pub(crate) grades: Vec<(Subject, SubjectGrade)>,
}

fn parse_grade_pair(raw: &str) -> Result<(Subject, SubjectGrade), String> {
    let (subject, grade) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected SUBJECT=GRADE, got '{raw}'"))?;
    let subject = subject
        .trim()
        .parse::<Subject>()
        .map_err(|err| err.to_string())?;
    let grade = grade
        .trim()
        .parse::<SubjectGrade>()
        .map_err(|err| err.to_string())?;
    Ok((subject, grade))
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let mut submission = StudentSubmission::new();
    for (subject, grade) in args.grades {
        submission.set(subject, grade);
    }

    let report = check_submission(&submission);
    let mean = MeanGradeSummary::for_submission(&submission);
    let strengths = top_strengths(&submission, 3);
    let bundle = RecommendationBundle::for_grade(mean.mean_grade);

    println!(
        "Mean grade: {} ({:.2} points over {} subjects)",
        mean.mean_grade, mean.mean_points, mean.scored_subjects
    );

    if !report.is_complete() {
        println!("\nIncomplete submission");
        for violation in &report.violations {
            println!("- {violation}");
        }
    }

    if !strengths.is_empty() {
        let labels: Vec<&str> = strengths.iter().map(|area| area.label()).collect();
        println!("\nStrengths: {}", labels.join(", "));
    }

    println!("\n{}", bundle.title);
    println!("{}", bundle.description);

    println!("\nCareers");
    for career in bundle.careers {
        println!("- {career}");
    }

    println!("\nUniversities");
    for university in bundle.universities {
        println!("- {university}");
    }

    println!("\nCourses");
    for course in bundle.courses {
        println!("- {course}");
    }

    println!("\nSkills to develop");
    for skill in bundle.skills {
        println!("- {skill}");
    }

    Ok(())
}

#[derive(Args, Debug)]
pub(crate) struct CohortReportArgs {
    /// Class results CSV export
    #[arg(long)]
    pub(crate) results_csv: PathBuf,
    /// Include a per-student listing in the output
    #[arg(long)]
    pub(crate) list_students: bool,
}

pub(crate) fn run_cohort_report(args: CohortReportArgs) -> Result<(), AppError> {
    let entries = cohort::from_path(&args.results_csv)?;
    let report = CohortReport::build(&entries);

    println!("Cohort report ({} students)", report.students.len());
    println!("Cohort mean: {:.2} points", report.cohort_mean_points);

    println!("\nMean grade distribution");
    for band in &report.band_distribution {
        if band.count > 0 {
            println!("- {}: {}", band.grade, band.count);
        }
    }

    let incomplete = report
        .students
        .iter()
        .filter(|student| !student.complete)
        .count();
    if incomplete > 0 {
        println!("\n{incomplete} student(s) have incomplete submissions");
    }

    if args.list_students {
        println!("\nStudents by entry order");
        for student in &report.students {
            println!(
                "- {} | {} | {:.2} points over {} subjects",
                student.name,
                student.mean.mean_grade,
                student.mean.mean_points,
                student.mean.scored_subjects
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use career_compass::guidance::Grade;

    #[test]
    fn grade_pairs_parse_subject_and_token() {
        let (subject, grade) = parse_grade_pair("mathematics=B+").expect("pair parses");
        assert_eq!(subject, Subject::Mathematics);
        assert_eq!(grade, SubjectGrade::Graded(Grade::BPlus));

        let (subject, grade) = parse_grade_pair("Business Studies=not_taken").expect("pair parses");
        assert_eq!(subject, Subject::BusinessStudies);
        assert_eq!(grade, SubjectGrade::NotTaken);
    }

    #[test]
    fn malformed_pairs_are_rejected() {
        assert!(parse_grade_pair("mathematics").is_err());
        assert!(parse_grade_pair("needlework=B").is_err());
        assert!(parse_grade_pair("mathematics=G+").is_err());
    }
}
