//! Scripted walkthrough of the roster API.
//!
//! [`run`] seeds a roster with three students and records the result of each
//! operation as a [`Step`], which the CLI then prints.

use std::io::Write;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::outcome::Outcome;
use crate::roster::Roster;
use crate::student::Student;

/// Banner printed before the walkthrough.
pub const BANNER: &str = "Student Roster";

/// One narrated operation of the walkthrough.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    /// Heading printed above the result.
    pub title: &'static str,
    /// What the operation returned.
    pub body: StepBody,
}

/// The value returned by a walkthrough operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StepBody {
    /// A listing of students.
    Students(Vec<Student>),
    /// An outcome from a lookup or mutation.
    Outcome(Outcome<Student>),
    /// An aggregate value.
    Average(f64),
}

/// The three students the walkthrough starts from.
#[must_use]
pub fn seed() -> Vec<Student> {
    vec![
        Student::new(1, "Mateo", 20, "Gastronomy", 9.0),
        Student::new(2, "Danny", 18, "Software", 8.0),
        Student::new(3, "Jairo", 19, "Law", 7.0),
    ]
}

/// Seed `roster` and run the scripted operations against it.
pub fn run(roster: &mut Roster) -> Vec<Step> {
    for student in seed() {
        let outcome = roster.add(student);
        if !outcome.ok {
            tracing::warn!("Seed student rejected: {}", outcome.message);
        }
    }

    vec![
        Step {
            title: "Listing",
            body: StepBody::Students(roster.list().to_vec()),
        },
        Step {
            title: "Find by ID (2)",
            body: StepBody::Outcome(roster.find_by_id(2).cloned()),
        },
        Step {
            title: "Update Average",
            body: StepBody::Outcome(roster.update_gpa(2, 9.5).cloned()),
        },
        Step {
            title: "Set Status to Inactive",
            body: StepBody::Outcome(roster.set_active(3, false).cloned()),
        },
        Step {
            title: "List Active Only",
            body: StepBody::Students(roster.list_active().into_iter().cloned().collect()),
        },
        Step {
            title: "Overall Average",
            body: StepBody::Average(roster.overall_average()),
        },
    ]
}

/// Write the banner and every step to `out` in the given format.
///
/// # Errors
///
/// Returns an error if writing or JSON encoding fails.
pub fn render(out: &mut impl Write, steps: &[Step], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => render_plain(out, steps),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, steps)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

fn render_plain(out: &mut impl Write, steps: &[Step]) -> Result<()> {
    writeln!(out, "{BANNER}")?;
    writeln!(out, "{}", "=".repeat(BANNER.len()))?;

    for step in steps {
        writeln!(out)?;
        writeln!(out, "[{}]", step.title)?;
        match &step.body {
            StepBody::Students(students) => {
                for student in students {
                    writeln!(out, "  {student}")?;
                }
            }
            StepBody::Outcome(outcome) => {
                let status = if outcome.ok { "ok" } else { "failed" };
                writeln!(out, "  {status}: {}", outcome.message)?;
                if let Some(student) = outcome.data() {
                    writeln!(out, "  {student}")?;
                }
            }
            StepBody::Average(avg) => writeln!(out, "  {avg}")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(step: &Step) -> &Outcome<Student> {
        match &step.body {
            StepBody::Outcome(outcome) => outcome,
            other => panic!("expected an outcome, got {other:?}"),
        }
    }

    fn student_ids(step: &Step) -> Vec<i64> {
        match &step.body {
            StepBody::Students(students) => students.iter().map(|s| s.id).collect(),
            other => panic!("expected students, got {other:?}"),
        }
    }

    #[test]
    fn test_seed() {
        let students = seed();
        assert_eq!(students.len(), 3);
        assert!(students.iter().all(|s| s.active));
        assert_eq!(students[0].program, "Gastronomy");
    }

    #[test]
    fn test_run_walkthrough() {
        let mut roster = Roster::new();
        let steps = run(&mut roster);
        assert_eq!(steps.len(), 6);

        assert_eq!(student_ids(&steps[0]), vec![1, 2, 3]);

        let found = outcome(&steps[1]);
        assert!(found.ok);
        assert_eq!(found.data().map(|s| s.gpa), Some(8.0));

        let updated = outcome(&steps[2]);
        assert_eq!(updated.message, "Average updated");
        assert_eq!(updated.data().map(|s| s.gpa), Some(9.5));

        let status = outcome(&steps[3]);
        assert_eq!(status.message, "Status updated");
        assert_eq!(status.data().map(|s| s.active), Some(false));

        assert_eq!(student_ids(&steps[4]), vec![1, 2]);

        match steps[5].body {
            StepBody::Average(avg) => assert!((avg - 8.5).abs() < f64::EPSILON),
            ref other => panic!("expected an average, got {other:?}"),
        }
    }

    #[test]
    fn test_run_leaves_roster_updated() {
        let mut roster = Roster::new();
        run(&mut roster);

        assert_eq!(roster.find_by_id(2).data().map(|s| s.gpa), Some(9.5));
        assert_eq!(roster.stats().inactive, 1);
    }

    #[test]
    fn test_step_serialization() {
        let mut roster = Roster::new();
        let steps = run(&mut roster);
        let json = serde_json::to_value(&steps).unwrap();

        assert_eq!(json[0]["title"], "Listing");
        assert_eq!(json[0]["body"][0]["name"], "Mateo");
        assert_eq!(json[1]["body"]["message"], "Student found");
        assert_eq!(json[5]["body"], 8.5);
    }

    #[test]
    fn test_render_plain() {
        let mut roster = Roster::new();
        let steps = run(&mut roster);
        let mut out = Vec::new();
        render(&mut out, &steps, OutputFormat::Plain).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Student Roster\n"));
        assert!(text.contains("[Find by ID (2)]\n  ok: Student found\n  #2 Danny (18, Software) gpa 8 [active]"));
        assert!(text.contains("#3 Jairo (19, Law) gpa 7 [inactive]"));
        assert!(text.trim_end().ends_with("8.5"));
    }

    #[test]
    fn test_render_json_is_parseable() {
        let mut roster = Roster::new();
        let steps = run(&mut roster);
        let mut out = Vec::new();
        render(&mut out, &steps, OutputFormat::Json).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.as_array().map(Vec::len), Some(6));
    }
}
