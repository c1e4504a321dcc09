//! Offline settlement plan command.

use anyhow::Context;
use console::style;

use super::PlanArgs;
use crate::cli::icons::{bullet, dim_arrow, error, success};
use crate::config::Settings;
use crate::plan::{self, RawFormState, MISSING_FIELDS_WARNING};

/// Form state equivalent to filling in the web form with these arguments.
fn form_state(args: &PlanArgs) -> RawFormState {
    let mut raw = RawFormState {
        student_name: args.student.clone(),
        settlement_name: args.settlement.clone(),
        region: args.region.clone(),
        latitude: args.latitude.map(|v| v.to_string()),
        longitude: args.longitude.map(|v| v.to_string()),
        challenges: args.challenges.clone(),
        resources: args.resources.clone(),
        vision: args.vision.clone(),
        strategy: args.strategy.clone(),
        ..Default::default()
    };
    for tag in &args.priorities {
        raw.set_checked(*tag, true);
    }
    raw
}

/// Validate the plan, then write the report file or print it.
pub fn cmd_plan(settings: &Settings, args: PlanArgs) -> anyhow::Result<()> {
    let raw = form_state(&args);

    let submitted = match plan::submit(&raw) {
        Ok(submitted) => submitted,
        Err(e) => {
            eprintln!("{} {}", error(), MISSING_FIELDS_WARNING);
            for field in e.missing_fields() {
                eprintln!("  {} missing {}", bullet(), field.label());
            }
            return Err(e.into());
        }
    };

    if args.stdout {
        print!("{}", submitted.export.body);
        return Ok(());
    }

    let dir = args
        .output_dir
        .unwrap_or_else(|| settings.reports_dir.clone());
    let path = submitted
        .export
        .write_to(&dir)
        .with_context(|| format!("Failed to write report into {}", dir.display()))?;

    println!("{} {}", success(), submitted.summary.banner);
    print!("{}", style(submitted.summary.to_text()).dim());
    println!("{} Saved {}", dim_arrow(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriorityTag;

    #[test]
    fn test_form_state_from_args() {
        let args = PlanArgs {
            student: "Jane".to_string(),
            settlement: "New Hope".to_string(),
            region: "Grand River Valley".to_string(),
            latitude: Some(43.0),
            longitude: None,
            priorities: vec![PriorityTag::Defense, PriorityTag::WaterAccess],
            challenges: String::new(),
            resources: String::new(),
            vision: String::new(),
            strategy: String::new(),
            output_dir: None,
            stdout: true,
        };

        let raw = form_state(&args);
        assert_eq!(raw.latitude.as_deref(), Some("43"));
        assert!(raw.longitude.is_none());
        assert!(raw.is_checked(PriorityTag::Defense));
        assert!(raw.is_checked(PriorityTag::WaterAccess));
        assert!(!raw.is_checked(PriorityTag::Timber));

        let plan = plan::validate(&raw).unwrap();
        assert_eq!(
            plan.priorities,
            vec![PriorityTag::WaterAccess, PriorityTag::Defense]
        );
        assert_eq!(plan.coordinates.latitude_str(), "43.0");
        assert_eq!(plan.coordinates.longitude_str(), "-84.5");
    }
}
