use crate::directive::Directive;
use crate::error::TransformError;
use crate::schedule::schedule;
use crate::transform::Transform;
use grapher_coretable::{ColumnDef, ColumnSlug, ColumnStore};

/// A definition that could not be applied. Its target column was left as it was.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    pub slug: ColumnSlug,
    pub directive: String,
    pub error: TransformError,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "error performing transform `{}` for column {}: {}",
            self.directive, self.slug, self.error
        )
    }
}

/// Outcome of [`apply_transforms`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformReport {
    /// Slugs written to the store, in execution order.
    pub applied: Vec<ColumnSlug>,
    /// One entry per definition that failed, in declaration order for configuration errors and
    /// execution order for runtime failures.
    pub diagnostics: Vec<Diagnostic>,
}

impl TransformReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn diagnostic(&self, slug: &str) -> Option<&Diagnostic> {
        self.diagnostics.iter().find(|d| d.slug == slug)
    }

    fn fail(&mut self, slug: &str, directive: &str, error: TransformError) {
        let diagnostic = Diagnostic {
            slug: slug.to_owned(),
            directive: directive.to_owned(),
            error,
        };
        log::warn!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }
}

struct Planned<'a> {
    slug: &'a str,
    directive: &'a str,
    transform: Transform,
}

/// Runs the transform of every definition that has one and writes each result into `store` under
/// the definition's slug.
///
/// Directives are parsed up front; definitions then execute in dependency order (a definition that
/// reads another definition's slug runs after it). Failures are isolated per definition: they are
/// logged, reported in the returned [`TransformReport`], and leave the target column untouched.
pub fn apply_transforms(store: &mut ColumnStore, defs: &[ColumnDef]) -> TransformReport {
    let mut report = TransformReport::default();

    let mut planned = Vec::new();
    for def in defs {
        let Some(directive) = def.directive() else {
            continue;
        };
        match Directive::parse(directive).and_then(|d| d.bind()) {
            Ok(transform) => planned.push(Planned {
                slug: &def.slug,
                directive,
                transform,
            }),
            Err(err) => report.fail(&def.slug, directive, err),
        }
    }

    let nodes: Vec<(&str, Vec<&str>)> = planned
        .iter()
        .map(|p| (p.slug, p.transform.input_columns()))
        .collect();
    let plan = schedule(&nodes);

    for (idx, cycle) in plan.cycles {
        let p = &planned[idx];
        report.fail(p.slug, p.directive, TransformError::DependencyCycle { cycle });
    }

    log::debug!(
        "applying {} transforms in order: {:?}",
        plan.order.len(),
        plan.order.iter().map(|&idx| planned[idx].slug).collect::<Vec<_>>()
    );

    for idx in plan.order {
        let p = &planned[idx];
        match p.transform.apply(store) {
            Ok(column) => {
                if column.len() != store.row_count() {
                    log::debug!(
                        "{} produced {} rows for a table of {} rows",
                        p.slug,
                        column.len(),
                        store.row_count()
                    );
                }
                store.set(p.slug, column);
                report.applied.push(p.slug.to_owned());
            }
            Err(err) => report.fail(p.slug, p.directive, err),
        }
    }

    report
}
