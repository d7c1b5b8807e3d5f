//! The intrinsic table: resolving calls against a catalog.
//!
//! [`IntrinsicTable`] is the entry point of the resolver. Given a call
//! target, the argument types, and the evaluation stage, it either returns
//! a [`MatchResult`] describing the chosen overload instantiated for the
//! call, or a [`MatchError`] carrying the diagnostic shown to the user.
//!
//! One table serves one compilation: it borrows the shared catalog and
//! owns the signature cache, while the [`TypeUniverse`] is passed to each
//! lookup.
//!
//! # Example
//!
//! ```
//! use shader_sema_catalog::Catalog;
//! use shader_sema_core::{EvaluationStage, Span, TypeHandle, TypeUniverse};
//! use shader_sema_resolver::IntrinsicTable;
//!
//! let catalog = Catalog::wgsl().unwrap();
//! let mut types = TypeUniverse::new();
//! let mut table = IntrinsicTable::new(&catalog);
//!
//! let result = table
//!     .builtin(
//!         &mut types,
//!         "clamp",
//!         &[TypeHandle::ABSTRACT_FLOAT; 3],
//!         EvaluationStage::Runtime,
//!         Span::UNKNOWN,
//!     )
//!     .unwrap();
//! assert_eq!(result.return_type, TypeHandle::F32);
//! ```

use std::fmt;

use tracing::{debug, trace};

use shader_sema_catalog::{Catalog, Intrinsic, OverloadFlags, OverloadKind, PipelineStages};
use shader_sema_core::{
    BinaryOp, CallKind, EvaluationStage, FriendlyNames, IntrinsicHash, MatchError, ParameterUsage,
    Span, TypeHandle, TypePrinter, TypeUniverse, UnaryOp,
};

use crate::config::MatcherConfig;
use crate::formatter::{attempted_call, no_match_diagnostic};
use crate::materialize::{materialize, materialize_for};
use crate::overload::{Candidate, MatchState, find_best_match, score_overload};
use crate::signature::{SignatureCache, SignatureId, SignatureKey};

/// What is being called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallTarget<'a> {
    /// A builtin function such as `textureLoad`.
    Builtin(&'a str),
    Unary(UnaryOp),
    /// A binary operator, or its compound assignment form (`+=`).
    Binary { op: BinaryOp, compound: bool },
    /// A value constructor or conversion such as `vec3<f32>(...)`.
    Constructor {
        name: &'a str,
        template_arg: Option<TypeHandle>,
    },
}

impl CallTarget<'_> {
    fn hash(&self) -> IntrinsicHash {
        match *self {
            CallTarget::Builtin(name) => IntrinsicHash::builtin(name),
            CallTarget::Unary(op) => IntrinsicHash::unary(op),
            CallTarget::Binary { op, .. } => IntrinsicHash::binary(op),
            CallTarget::Constructor { name, .. } => IntrinsicHash::ctor_conv(name),
        }
    }

    fn call_kind(&self) -> CallKind {
        match self {
            CallTarget::Builtin(_) => CallKind::Function,
            CallTarget::Unary(_) | CallTarget::Binary { .. } => CallKind::Operator,
            CallTarget::Constructor { .. } => CallKind::Constructor,
        }
    }

    fn template_arg(&self) -> Option<TypeHandle> {
        match *self {
            CallTarget::Constructor { template_arg, .. } => template_arg,
            _ => None,
        }
    }

    /// The name candidates and the attempted call are printed with.
    fn display_name(&self, intrinsic: &Intrinsic) -> String {
        match *self {
            CallTarget::Binary { op, compound: true } => format!("operator {}= ", op),
            _ => intrinsic.name.clone(),
        }
    }
}

impl fmt::Display for CallTarget<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallTarget::Builtin(name) => f.write_str(name),
            CallTarget::Unary(op) => write!(f, "operator {}", op),
            CallTarget::Binary { op, compound } => {
                write!(f, "operator {}{}", op, if *compound { "=" } else { "" })
            }
            CallTarget::Constructor { name, .. } => f.write_str(name),
        }
    }
}

/// One call being resolved.
struct CallSite<'a> {
    target: CallTarget<'a>,
    hash: IntrinsicHash,
    args: &'a [TypeHandle],
    stage: EvaluationStage,
    span: Span,
}

/// A parameter of the chosen overload, instantiated for the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedParameter {
    pub ty: TypeHandle,
    pub usage: ParameterUsage,
}

/// Resolved operand types of an operator call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operands {
    Unary(TypeHandle),
    Binary { lhs: TypeHandle, rhs: TypeHandle },
}

/// A successfully resolved call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Shared by every call resolving to the same instantiated signature.
    pub signature: SignatureId,
    pub intrinsic: IntrinsicHash,
    /// Declaration index of the chosen overload.
    pub overload_index: usize,
    pub kind: OverloadKind,
    /// [`TypeHandle::VOID`] for overloads returning nothing.
    pub return_type: TypeHandle,
    pub parameters: Vec<ResolvedParameter>,
    /// Set for operator calls.
    pub operands: Option<Operands>,
    /// `Constant` only if the overload is constant-evaluable and the call
    /// was requested at the constant stage.
    pub stage: EvaluationStage,
    pub pipeline_stages: PipelineStages,
    pub must_use: bool,
    pub deprecated: bool,
}

impl MatchResult {
    /// Resolved parameter types, in order.
    pub fn parameter_types(&self) -> impl Iterator<Item = TypeHandle> + '_ {
        self.parameters.iter().map(|p| p.ty)
    }

    /// The first parameter with the given usage.
    pub fn parameter(&self, usage: ParameterUsage) -> Option<&ResolvedParameter> {
        self.parameters.iter().find(|p| p.usage == usage)
    }
}

/// Resolves intrinsic calls for one compilation.
pub struct IntrinsicTable<'c> {
    catalog: &'c Catalog,
    config: MatcherConfig,
    printer: Box<dyn TypePrinter + 'c>,
    signatures: SignatureCache,
}

impl fmt::Debug for IntrinsicTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntrinsicTable")
            .field("config", &self.config)
            .field("signatures", &self.signatures.len())
            .finish_non_exhaustive()
    }
}

impl<'c> IntrinsicTable<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self::with_config(catalog, MatcherConfig::default())
    }

    pub fn with_config(catalog: &'c Catalog, config: MatcherConfig) -> Self {
        Self {
            catalog,
            config,
            printer: Box::new(FriendlyNames),
            signatures: SignatureCache::new(),
        }
    }

    /// Use `printer` to render argument types in diagnostics.
    pub fn with_printer(mut self, printer: impl TypePrinter + 'c) -> Self {
        self.printer = Box::new(printer);
        self
    }

    #[inline]
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    #[inline]
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Number of distinct signatures recorded by de-duplication.
    pub fn signature_count(&self) -> usize {
        self.signatures.len()
    }

    /// Resolve a call to `target` with `args` at `stage`.
    ///
    /// # Errors
    ///
    /// - [`MatchError::UnknownIntrinsic`] if the catalog has no such target,
    ///   or the operator has no compound form.
    /// - [`MatchError::NoMatchingOverload`] if no overload accepts the
    ///   arguments.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn lookup(
        &mut self,
        types: &mut TypeUniverse,
        target: CallTarget<'_>,
        args: &[TypeHandle],
        stage: EvaluationStage,
        span: Span,
    ) -> Result<MatchResult, MatchError> {
        let unknown = || MatchError::UnknownIntrinsic {
            name: target.to_string(),
            span,
        };
        if let CallTarget::Binary { op, compound: true } = target {
            if !op.has_compound_form() {
                return Err(unknown());
            }
        }
        let call = CallSite {
            target,
            hash: target.hash(),
            args,
            stage,
            span,
        };
        let catalog = self.catalog;
        let intrinsic = catalog.get(call.hash).ok_or_else(unknown)?;
        let name = target.display_name(intrinsic);
        let template_arg = target.template_arg();
        let f16 = self.config.f16_enabled();

        let mut candidates: Vec<Candidate<'c>> = intrinsic
            .overloads
            .iter()
            .enumerate()
            .map(|(index, overload)| {
                let candidate =
                    score_overload(types, overload, index, args, template_arg, stage, f16);
                trace!(
                    intrinsic = %name,
                    overload = index,
                    score = candidate.score,
                    "scored candidate"
                );
                candidate
            })
            .collect();

        if !candidates.iter().any(Candidate::is_match) {
            candidates.sort_by_key(|c| c.score);
            let attempted = attempted_call(types, &*self.printer, &name, template_arg, args);
            debug!(
                intrinsic = %name,
                candidates = candidates.len(),
                "no matching overload"
            );
            let diagnostic = no_match_diagnostic(
                span,
                target.call_kind(),
                attempted,
                &name,
                &candidates,
                self.config.max_candidates(),
            );
            return Err(MatchError::NoMatchingOverload(Box::new(diagnostic)));
        }

        candidates.retain(Candidate::is_match);
        let Some(best) = find_best_match(types, candidates, args, stage) else {
            return Err(MatchError::Internal {
                message: format!("no best candidate for '{}'", name),
                span,
            });
        };
        let result = self.instantiate(types, &call, best)?;
        debug!(
            intrinsic = %name,
            overload = result.overload_index,
            return_type = %types.friendly_name(result.return_type),
            "resolved call"
        );
        Ok(result)
    }

    /// Materialize the winning candidate for the call and build its result.
    fn instantiate(
        &mut self,
        types: &mut TypeUniverse,
        call: &CallSite<'_>,
        best: Candidate<'c>,
    ) -> Result<MatchResult, MatchError> {
        let Candidate {
            index,
            overload,
            mut templates,
            ..
        } = best;

        let result_stage = if overload.is_const_eval() && call.stage == EvaluationStage::Constant {
            EvaluationStage::Constant
        } else {
            EvaluationStage::Runtime
        };

        // Unconstrained bindings never went through class precedence, so
        // they may still hold abstract types.
        if result_stage == EvaluationStage::Runtime {
            for (i, template) in overload.template_types.iter().enumerate() {
                if template.constraint.is_some() {
                    continue;
                }
                if let Some(ty) = templates.ty(i) {
                    if types.holds_abstract(ty) {
                        let concrete = materialize(types, ty);
                        templates.set_type(i, concrete);
                    }
                }
            }
        }

        let internal = |message: String| MatchError::Internal {
            message,
            span: call.span,
        };
        let f16 = self.config.f16_enabled();
        let mut state = MatchState::new(types, &mut templates, call.stage, f16);

        let mut parameters = Vec::with_capacity(overload.parameters.len());
        for (i, (param, &arg)) in overload.parameters.iter().zip(call.args).enumerate() {
            let arg = state.types.unwrap_ref(arg);
            let ty = state
                .match_type(&param.pattern, arg)
                .ok_or_else(|| internal(format!("parameter {} no longer matches", i)))?;
            parameters.push(ResolvedParameter {
                ty: materialize_for(state.types, ty, result_stage),
                usage: param.usage,
            });
        }

        let return_type = match &overload.return_type {
            None => TypeHandle::VOID,
            Some(pattern) => {
                let ty = state.build_type(pattern).ok_or_else(|| {
                    internal(format!(
                        "cannot build return type '{}'",
                        overload.pattern_name(pattern)
                    ))
                })?;
                materialize_for(state.types, ty, result_stage)
            }
        };

        let signature = if self.config.signature_dedup() {
            self.signatures.intern(SignatureKey {
                intrinsic: call.hash,
                overload: index,
                return_type,
                parameters: parameters.iter().map(|p| (p.ty, p.usage)).collect(),
            })
        } else {
            self.signatures.fresh()
        };

        let operands = match (call.target, parameters.as_slice()) {
            (CallTarget::Unary(_), [operand]) => Some(Operands::Unary(operand.ty)),
            (CallTarget::Binary { .. }, [lhs, rhs]) => Some(Operands::Binary {
                lhs: lhs.ty,
                rhs: rhs.ty,
            }),
            _ => None,
        };

        Ok(MatchResult {
            signature,
            intrinsic: call.hash,
            overload_index: index,
            kind: overload.kind,
            return_type,
            parameters,
            operands,
            stage: result_stage,
            pipeline_stages: overload.stages,
            must_use: overload.flags.contains(OverloadFlags::MUST_USE),
            deprecated: overload.flags.contains(OverloadFlags::DEPRECATED),
        })
    }

    /// Resolve a builtin function call.
    pub fn builtin(
        &mut self,
        types: &mut TypeUniverse,
        name: &str,
        args: &[TypeHandle],
        stage: EvaluationStage,
        span: Span,
    ) -> Result<MatchResult, MatchError> {
        self.lookup(types, CallTarget::Builtin(name), args, stage, span)
    }

    /// Resolve a unary operator.
    pub fn unary(
        &mut self,
        types: &mut TypeUniverse,
        op: UnaryOp,
        operand: TypeHandle,
        stage: EvaluationStage,
        span: Span,
    ) -> Result<MatchResult, MatchError> {
        self.lookup(types, CallTarget::Unary(op), &[operand], stage, span)
    }

    /// Resolve a binary operator.
    pub fn binary(
        &mut self,
        types: &mut TypeUniverse,
        op: BinaryOp,
        lhs: TypeHandle,
        rhs: TypeHandle,
        stage: EvaluationStage,
        span: Span,
    ) -> Result<MatchResult, MatchError> {
        self.binary_operator(types, op, false, [lhs, rhs], stage, span)
    }

    /// Resolve the compound assignment form of `op`, as in `lhs op= rhs`.
    ///
    /// The compound form shares the overloads of the plain operator.
    pub fn compound_assign(
        &mut self,
        types: &mut TypeUniverse,
        op: BinaryOp,
        lhs: TypeHandle,
        rhs: TypeHandle,
        stage: EvaluationStage,
        span: Span,
    ) -> Result<MatchResult, MatchError> {
        self.binary_operator(types, op, true, [lhs, rhs], stage, span)
    }

    fn binary_operator(
        &mut self,
        types: &mut TypeUniverse,
        op: BinaryOp,
        compound: bool,
        operands: [TypeHandle; 2],
        stage: EvaluationStage,
        span: Span,
    ) -> Result<MatchResult, MatchError> {
        let target = CallTarget::Binary { op, compound };
        self.lookup(types, target, &operands, stage, span)
    }

    /// Resolve a value constructor or conversion, e.g. `vec3<f32>(...)`.
    pub fn construct(
        &mut self,
        types: &mut TypeUniverse,
        name: &str,
        template_arg: Option<TypeHandle>,
        args: &[TypeHandle],
        stage: EvaluationStage,
        span: Span,
    ) -> Result<MatchResult, MatchError> {
        self.lookup(
            types,
            CallTarget::Constructor { name, template_arg },
            args,
            stage,
            span,
        )
    }
}
