//! Ranking fully matching overloads.
//!
//! Candidates that match with a score of zero are compared on three keys,
//! in order:
//!
//! 1. the conversion rank of each argument to its resolved parameter, left
//!    to right (exact matches beat abstract conversions);
//! 2. whether the overload can be evaluated at the requested stage;
//! 3. declaration order.
//!
//! The catalog is expected to be free of true ties. When one occurs anyway
//! the first-declared overload wins without complaint.

use shader_sema_core::{EvaluationStage, TypeHandle, TypeUniverse};

use super::score::Candidate;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct RankKey {
    conversions: Vec<u32>,
    stage_penalty: u8,
    index: usize,
}

fn rank_key(
    types: &TypeUniverse,
    candidate: &Candidate<'_>,
    args: &[TypeHandle],
    stage: EvaluationStage,
) -> RankKey {
    let conversions = args
        .iter()
        .zip(&candidate.parameters)
        .map(|(&arg, &param)| {
            types
                .conversion_rank(arg, param)
                .map_or(u32::MAX, |rank| rank.0)
        })
        .collect();
    let stage_penalty =
        u8::from(stage == EvaluationStage::Constant && !candidate.overload.is_const_eval());
    RankKey {
        conversions,
        stage_penalty,
        index: candidate.index,
    }
}

/// Pick the best of the fully matching candidates.
///
/// Returns `None` only when `matched` is empty.
pub(crate) fn find_best_match<'o>(
    types: &TypeUniverse,
    matched: Vec<Candidate<'o>>,
    args: &[TypeHandle],
    stage: EvaluationStage,
) -> Option<Candidate<'o>> {
    if matched.len() <= 1 {
        return matched.into_iter().next();
    }
    matched
        .into_iter()
        .map(|candidate| (rank_key(types, &candidate, args, stage), candidate))
        .min_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(_, candidate)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::TemplateState;
    use shader_sema_catalog::{Overload, OverloadKind};

    fn candidate<'o>(
        overload: &'o Overload,
        index: usize,
        parameters: Vec<TypeHandle>,
    ) -> Candidate<'o> {
        Candidate {
            index,
            overload,
            score: 0,
            templates: TemplateState::new(),
            parameters,
        }
    }

    #[test]
    fn single_candidate_returns_it() {
        let types = TypeUniverse::new();
        let overload = Overload::builder(OverloadKind::Function).build();
        let best = find_best_match(
            &types,
            vec![candidate(&overload, 3, vec![TypeHandle::F32])],
            &[TypeHandle::F32],
            EvaluationStage::Runtime,
        );
        assert_eq!(best.map(|c| c.index), Some(3));
    }

    #[test]
    fn empty_returns_none() {
        let types = TypeUniverse::new();
        assert!(find_best_match(&types, Vec::new(), &[], EvaluationStage::Runtime).is_none());
    }

    #[test]
    fn cheaper_conversion_wins() {
        let types = TypeUniverse::new();
        let overload = Overload::builder(OverloadKind::Function).build();
        let best = find_best_match(
            &types,
            vec![
                candidate(&overload, 0, vec![TypeHandle::U32]),
                candidate(&overload, 1, vec![TypeHandle::I32]),
            ],
            &[TypeHandle::ABSTRACT_INT],
            EvaluationStage::Runtime,
        );
        assert_eq!(best.map(|c| c.index), Some(1));
    }

    #[test]
    fn leftmost_argument_decides_first() {
        let types = TypeUniverse::new();
        let overload = Overload::builder(OverloadKind::Function).build();
        let args = [TypeHandle::ABSTRACT_FLOAT, TypeHandle::ABSTRACT_FLOAT];
        let best = find_best_match(
            &types,
            vec![
                candidate(&overload, 0, vec![TypeHandle::F16, TypeHandle::F32]),
                candidate(&overload, 1, vec![TypeHandle::F32, TypeHandle::F16]),
            ],
            &args,
            EvaluationStage::Runtime,
        );
        assert_eq!(best.map(|c| c.index), Some(1));
    }

    #[test]
    fn const_eval_preferred_at_constant_stage() {
        let types = TypeUniverse::new();
        let runtime_only = Overload::builder(OverloadKind::Function).build();
        let const_eval = Overload::builder(OverloadKind::Function)
            .const_eval()
            .build();
        let best = find_best_match(
            &types,
            vec![
                candidate(&runtime_only, 0, vec![TypeHandle::F32]),
                candidate(&const_eval, 1, vec![TypeHandle::F32]),
            ],
            &[TypeHandle::F32],
            EvaluationStage::Constant,
        );
        assert_eq!(best.map(|c| c.index), Some(1));
    }

    #[test]
    fn exact_tie_goes_to_first_declared() {
        let types = TypeUniverse::new();
        let overload = Overload::builder(OverloadKind::Function).build();
        let best = find_best_match(
            &types,
            vec![
                candidate(&overload, 4, vec![TypeHandle::F32]),
                candidate(&overload, 7, vec![TypeHandle::F32]),
            ],
            &[TypeHandle::F32],
            EvaluationStage::Runtime,
        );
        assert_eq!(best.map(|c| c.index), Some(4));
    }
}
