//! Overload signatures.
//!
//! An [`Overload`] is one immutable signature of an intrinsic: its template
//! parameters with their constraints, its parameter patterns with usage
//! tags, and its return pattern. Overloads are created while a catalog is
//! built and never change afterwards.

use shader_sema_core::ParameterUsage;

use crate::flags::{OverloadFlags, PipelineStages};
use crate::matcher::{NumberMatcher, TypeMatcher};

/// What an overload implements. Decides diagnostic grouping and how the
/// candidate name is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverloadKind {
    Function,
    Operator,
    Constructor,
    Conversion,
}

impl OverloadKind {
    /// Singular noun used in diagnostics.
    pub const fn noun(self) -> &'static str {
        match self {
            OverloadKind::Function => "function",
            OverloadKind::Operator => "operator",
            OverloadKind::Constructor => "constructor",
            OverloadKind::Conversion => "conversion",
        }
    }
}

/// A template type parameter, e.g. `T` in `clamp<T: fia_fiu32_f16>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateType {
    pub name: &'static str,
    /// Types the binding must satisfy. `None` means unconstrained.
    pub constraint: Option<TypeMatcher>,
}

/// A template number parameter, e.g. `N` in `vecN<T>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateNumber {
    pub name: &'static str,
    pub constraint: Option<NumberMatcher>,
}

/// One parameter of an overload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    pub usage: ParameterUsage,
    pub pattern: TypeMatcher,
}

/// One signature of an intrinsic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Overload {
    pub kind: OverloadKind,
    pub flags: OverloadFlags,
    pub stages: PipelineStages,
    pub template_types: Vec<TemplateType>,
    pub template_numbers: Vec<TemplateNumber>,
    pub parameters: Vec<Parameter>,
    /// `None` for overloads returning nothing.
    pub return_type: Option<TypeMatcher>,
}

impl Overload {
    pub fn builder(kind: OverloadKind) -> OverloadBuilder {
        OverloadBuilder::new(kind)
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    #[inline]
    pub fn is_const_eval(&self) -> bool {
        self.flags.contains(OverloadFlags::CONST_EVAL)
    }
}

/// Builder for [`Overload`].
///
/// ```
/// use shader_sema_catalog::{Overload, OverloadKind, TypeClass, TypeMatcher};
/// use shader_sema_core::ParameterUsage;
///
/// let abs = Overload::builder(OverloadKind::Function)
///     .template_type("T", Some(TypeMatcher::Class(TypeClass::FIA_FIU32_F16)))
///     .param(ParameterUsage::None, TypeMatcher::Template(0))
///     .returns(TypeMatcher::Template(0))
///     .const_eval()
///     .build();
/// assert_eq!(abs.arity(), 1);
/// assert!(abs.is_const_eval());
/// ```
#[derive(Debug, Clone)]
pub struct OverloadBuilder {
    overload: Overload,
}

impl OverloadBuilder {
    pub fn new(kind: OverloadKind) -> Self {
        Self {
            overload: Overload {
                kind,
                flags: OverloadFlags::empty(),
                stages: PipelineStages::all(),
                template_types: Vec::new(),
                template_numbers: Vec::new(),
                parameters: Vec::new(),
                return_type: None,
            },
        }
    }

    /// Declare the next template type. Its index is the number of template
    /// types declared before it.
    pub fn template_type(mut self, name: &'static str, constraint: Option<TypeMatcher>) -> Self {
        self.overload
            .template_types
            .push(TemplateType { name, constraint });
        self
    }

    /// Declare the next template number.
    pub fn template_number(
        mut self,
        name: &'static str,
        constraint: Option<NumberMatcher>,
    ) -> Self {
        self.overload
            .template_numbers
            .push(TemplateNumber { name, constraint });
        self
    }

    pub fn param(mut self, usage: ParameterUsage, pattern: TypeMatcher) -> Self {
        self.overload.parameters.push(Parameter { usage, pattern });
        self
    }

    pub fn returns(mut self, pattern: TypeMatcher) -> Self {
        self.overload.return_type = Some(pattern);
        self
    }

    pub fn const_eval(mut self) -> Self {
        self.overload.flags |= OverloadFlags::CONST_EVAL;
        self
    }

    pub fn must_use(mut self) -> Self {
        self.overload.flags |= OverloadFlags::MUST_USE;
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.overload.flags |= OverloadFlags::DEPRECATED;
        self
    }

    pub fn stages(mut self, stages: PipelineStages) -> Self {
        self.overload.stages = stages;
        self
    }

    pub fn build(self) -> Overload {
        self.overload
    }
}
