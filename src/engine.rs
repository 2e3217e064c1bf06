use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::allowlist;
use crate::cli::{CheckArgs, EnsureDirsArgs, ExtArgs, ResolveArgs};
use crate::error::PathGuardError;
use crate::events::Event;
use crate::exit_codes::exit;
use crate::model;
use crate::reporter::Reporter;
use crate::runtime_dirs;

/// Run a check plan: ensure directories, then resolve every candidate.
pub fn check(args: CheckArgs) -> Result<i32> {
    let mut reporter = Reporter::new(args.json);

    let mut plan = model::load_plan(&args.plan).context("failed to load plan")?;
    if let Some(base) = args.base {
        plan.base = base;
    }
    plan.validate()?;
    reporter.record(Event::PlanValidated {
        base: plan.base.clone(),
        candidates: plan.candidates.len(),
    });

    if args.validate_only {
        return Ok(exit::SUCCESS);
    }

    if !plan.ensure_dirs.is_empty() {
        let paths = runtime_dirs::ensure_dirs(&plan.base, &plan.ensure_dirs)?;
        reporter.record(Event::DirsEnsured { paths });
    }

    let mut accepted = 0;
    let mut rejected = 0;
    let mut denied = 0;
    for (index, candidate) in plan.candidates.iter().enumerate() {
        match crate::resolve::safe_join(&plan.base, &candidate.segments) {
            Ok(resolved) => {
                if candidate.check_extension {
                    let filename = candidate.segments.last().map(String::as_str).unwrap_or("");
                    if !allowlist::is_extension_allowed(filename, &plan.allowlist) {
                        info!(index, filename, "extension not in allowlist");
                        reporter.record(Event::ExtensionDenied {
                            index,
                            filename: filename.to_string(),
                        });
                        denied += 1;
                        continue;
                    }
                }
                debug!(index, resolved = %resolved.display(), "candidate accepted");
                reporter.record(Event::CandidateAccepted { index, resolved });
                accepted += 1;
            }
            Err(err @ PathGuardError::PathTraversal { .. }) => {
                warn!(index, %err, "candidate rejected");
                reporter.record(Event::CandidateRejected {
                    index,
                    reason: err.to_string(),
                });
                rejected += 1;
            }
            Err(err) => return Err(err.into()),
        }
    }
    reporter.record(Event::CheckCompleted {
        accepted,
        rejected,
        denied,
    });
    if !args.json {
        println!("{}", reporter.summary());
    }

    if rejected > 0 {
        Ok(exit::TRAVERSAL_DETECTED)
    } else if denied > 0 {
        Ok(exit::EXTENSION_DENIED)
    } else {
        Ok(exit::SUCCESS)
    }
}

/// Resolve a single sequence of segments against a base.
pub fn resolve(args: ResolveArgs) -> Result<i32> {
    match crate::resolve::safe_join(&args.base, &args.segments) {
        Ok(resolved) => {
            if args.json {
                println!("{}", serde_json::json!({ "resolved": resolved }));
            } else {
                println!("{}", resolved.display());
            }
            Ok(exit::SUCCESS)
        }
        Err(err @ PathGuardError::PathTraversal { .. }) => {
            eprintln!("{err}");
            Ok(exit::TRAVERSAL_DETECTED)
        }
        Err(err) => Err(err.into()),
    }
}

/// Check a filename against an allowlist.
pub fn ext(args: ExtArgs) -> Result<i32> {
    let allowed = if args.allow.is_empty() {
        allowlist::is_extension_allowed(&args.filename, allowlist::DEFAULT_ALLOWED_EXTENSIONS)
    } else {
        allowlist::is_extension_allowed(&args.filename, &args.allow)
    };
    if allowed {
        println!("allowed");
        Ok(exit::SUCCESS)
    } else {
        println!("denied");
        Ok(exit::EXTENSION_DENIED)
    }
}

/// Idempotently create subdirectories under a base.
pub fn ensure_dirs(args: EnsureDirsArgs) -> Result<i32> {
    match runtime_dirs::ensure_dirs(&args.base, &args.names) {
        Ok(paths) => {
            if args.json {
                println!("{}", serde_json::json!({ "paths": paths }));
            } else {
                for path in &paths {
                    println!("{}", path.display());
                }
            }
            Ok(exit::SUCCESS)
        }
        Err(err @ PathGuardError::PathTraversal { .. }) => {
            eprintln!("{err}");
            Ok(exit::TRAVERSAL_DETECTED)
        }
        Err(err) => Err(err.into()),
    }
}
