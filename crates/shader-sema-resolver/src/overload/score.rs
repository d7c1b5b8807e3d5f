//! Scoring one overload against a call.
//!
//! A score of zero is a full match. Anything else measures how far the
//! overload is from the call and orders the candidates of a diagnostic,
//! closest first.

use shader_sema_catalog::Overload;
use shader_sema_core::{EvaluationStage, TypeHandle, TypeUniverse};

use super::matcher::MatchState;
use crate::template::TemplateState;

/// Per missing or extra argument.
const MISMATCHED_PARAM_COUNT: u32 = 3;
/// Per argument the parameter pattern rejects.
const MISMATCHED_PARAM_TYPE: u32 = 2;
/// Per explicit template argument the overload does not declare.
const MISMATCHED_TEMPLATE_COUNT: u32 = 1;
/// Per template type left unbound or outside its constraint.
const MISMATCHED_TEMPLATE_TYPE: u32 = 1;
/// Per template number left unbound or outside its constraint.
const MISMATCHED_TEMPLATE_NUMBER: u32 = 1;

/// An overload evaluated against one call.
#[derive(Debug, Clone)]
pub(crate) struct Candidate<'o> {
    /// Declaration index within the intrinsic.
    pub index: usize,
    pub overload: &'o Overload,
    pub score: u32,
    pub templates: TemplateState,
    /// Resolved parameter types. Only populated for full matches.
    pub parameters: Vec<TypeHandle>,
}

impl Candidate<'_> {
    #[inline]
    pub fn is_match(&self) -> bool {
        self.score == 0
    }
}

/// Match the call's arguments against `overload`.
///
/// `template_arg` is the explicit type of a constructor call such as
/// `vec3<f32>(...)`; it pre-binds the first template type.
pub(crate) fn score_overload<'o>(
    types: &mut TypeUniverse,
    overload: &'o Overload,
    index: usize,
    args: &[TypeHandle],
    template_arg: Option<TypeHandle>,
    stage: EvaluationStage,
    f16: bool,
) -> Candidate<'o> {
    let params = overload.parameters.len();
    let mut score = MISMATCHED_PARAM_COUNT.saturating_mul(params.abs_diff(args.len()) as u32);

    let mut templates = TemplateState::new();
    if let Some(ty) = template_arg {
        if !overload.template_types.is_empty() {
            templates.set_type(0, ty);
        }
    }

    let mut state = MatchState::new(types, &mut templates, stage, f16);

    for (param, &arg) in overload.parameters.iter().zip(args) {
        let arg = state.types.unwrap_ref(arg);
        if state.match_type(&param.pattern, arg).is_none() {
            score += MISMATCHED_PARAM_TYPE;
        }
    }

    if score == 0 {
        let provided = usize::from(template_arg.is_some());
        let expected = overload.template_types.len();
        if provided > expected {
            score += MISMATCHED_TEMPLATE_COUNT * (provided - expected) as u32;
        }
    }

    if score == 0 {
        for (i, template) in overload.template_types.iter().enumerate() {
            let Some(constraint) = &template.constraint else {
                continue;
            };
            let narrowed = state
                .templates
                .ty(i)
                .and_then(|bound| state.match_type(constraint, bound));
            match narrowed {
                Some(ty) => state.templates.set_type(i, ty),
                None => score += MISMATCHED_TEMPLATE_TYPE,
            }
        }
    }

    if score == 0 {
        for (i, template) in overload.template_numbers.iter().enumerate() {
            let Some(constraint) = &template.constraint else {
                continue;
            };
            let satisfied = state
                .templates
                .number(i)
                .is_some_and(|value| constraint.admits(value));
            if !satisfied {
                score += MISMATCHED_TEMPLATE_NUMBER;
            }
        }
    }

    // Constraints may have narrowed the bindings; resolve the parameters
    // against the final ones.
    let mut parameters = Vec::new();
    if score == 0 {
        let resolved: Option<Vec<_>> = overload
            .parameters
            .iter()
            .zip(args)
            .map(|(param, &arg)| {
                let arg = state.types.unwrap_ref(arg);
                state.match_type(&param.pattern, arg)
            })
            .collect();
        match resolved {
            Some(resolved) => parameters = resolved,
            None => score += MISMATCHED_PARAM_TYPE,
        }
    }

    Candidate {
        index,
        overload,
        score,
        templates,
        parameters,
    }
}
