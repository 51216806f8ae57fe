use thiserror::Error;

/// Errors produced while deducing, interpolating or applying aircraft parameters.
#[derive(Debug, Error)]
pub enum MorphError {
    /// Two parameter sets do not share the same components and parameter names,
    /// or a parameter has a different kind on either side.
    #[error("schema mismatch at `{component}.{parameter}`: {reason}")]
    SchemaMismatch {
        component: String,
        parameter: String,
        reason: String,
    },
    /// A named aircraft part is absent.
    #[error("no part named `{0}` in the aircraft")]
    MissingComponent(String),
    /// A part has fewer cross-sections than the operation relies on.
    #[error("part `{uid}` needs at least {required} sections, found {found}")]
    InsufficientSections {
        uid: String,
        required: usize,
        found: usize,
    },
    /// Failure surfaced by the geometry, renderer or frame assembly collaborators.
    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),
}

impl MorphError {
    pub(crate) fn schema_mismatch(
        component: impl Into<String>,
        parameter: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::SchemaMismatch {
            component: component.into(),
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}
