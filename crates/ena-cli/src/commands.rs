use anyhow::{Context, Result};
use tracing::warn;

use ena_checklist::{ChecklistResolver, ResolverConfig};
use ena_cli::pipeline::{
    ReleasePlan, SampleRunOptions, SampleRunResult, prepare_release, run_samples,
};
use ena_submit::{Credentials, DropBoxClient, Submission, SubmissionOutcome, Target};

use crate::cli::{ChecklistArgs, ReleaseArgs, SamplesArgs};
use crate::summary::print_catalog;

/// Result of the `samples` command.
pub struct SamplesOutcome {
    pub run: SampleRunResult,
    pub submission: Option<(Target, SubmissionOutcome)>,
}

impl SamplesOutcome {
    pub fn has_errors(&self) -> bool {
        self.submission
            .as_ref()
            .is_some_and(|(_, outcome)| !outcome.receipt.success)
    }
}

fn target(production: bool) -> Target {
    if production {
        Target::Production
    } else {
        Target::Test
    }
}

fn drop_box(production: bool, credentials: Option<&std::path::Path>) -> Result<DropBoxClient> {
    let credentials =
        Credentials::load_or_default(credentials).context("load drop-box credentials")?;
    DropBoxClient::new(target(production), credentials).context("create drop-box client")
}

pub fn run_samples_command(args: &SamplesArgs) -> Result<SamplesOutcome> {
    if args.submit.production && !args.submit.submit {
        warn!("--production has no effect without --submit");
    }
    // Credentials are checked before any document is written.
    let client = if args.submit.submit {
        Some(drop_box(
            args.submit.production,
            args.submit.credentials.as_deref(),
        )?)
    } else {
        None
    };

    let resolver =
        ChecklistResolver::http(&ResolverConfig::default()).context("create checklist client")?;
    let options = SampleRunOptions {
        input: args.input.clone(),
        output_dir: args.output_dir.clone(),
        delimiter: args.delimiter,
        checklist: args.checklist.clone(),
        center: args.center.clone(),
        mapping: args.mapping.clone(),
        hold_until: args.hold_until,
    };
    let run = run_samples(&options, &resolver)?;

    let submission = match client {
        Some(client) => {
            let submission = Submission::new(
                &run.outputs.submission,
                Some(run.outputs.samples.clone()),
            );
            let outcome = client
                .submit_and_record(&submission, &args.output_dir)
                .context("submit documents")?;
            Some((client.target(), outcome))
        }
        None => None,
    };
    Ok(SamplesOutcome { run, submission })
}

pub fn run_checklist(args: &ChecklistArgs) -> Result<()> {
    let resolver =
        ChecklistResolver::http(&ResolverConfig::default()).context("create checklist client")?;
    let catalog = resolver
        .resolve(&args.checklist)
        .with_context(|| format!("resolve checklist {}", args.checklist))?;
    if args.json {
        let json = serde_json::to_string_pretty(&catalog).context("serialize catalog")?;
        println!("{json}");
    } else {
        print_catalog(&catalog);
    }
    Ok(())
}

/// Result of the `release` command.
pub struct ReleaseOutcome {
    pub plan: ReleasePlan,
    pub target: Target,
    pub submission: SubmissionOutcome,
}

pub fn run_release(args: &ReleaseArgs) -> Result<ReleaseOutcome> {
    let client = drop_box(args.production, args.credentials.as_deref())?;
    let plan = prepare_release(&args.output_dir, args.accession.as_deref())?;
    let submission = Submission::new(&plan.manifest, plan.samples.clone());
    let submission = client
        .submit_and_record(&submission, &args.output_dir)
        .with_context(|| format!("release {}", plan.accession))?;
    Ok(ReleaseOutcome {
        plan,
        target: client.target(),
        submission,
    })
}
