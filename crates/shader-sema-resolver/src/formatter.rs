//! Rendering failed calls and their candidates.

use std::fmt::Write;

use shader_sema_catalog::{Overload, OverloadKind};
use shader_sema_core::{
    CallKind, CandidateSection, Diagnostic, Span, TypeHandle, TypePrinter, TypeUniverse,
};

use crate::overload::Candidate;

/// The call as written: `name[<targ>](arg, ...)`, with references shown as
/// their store type.
pub(crate) fn attempted_call(
    types: &TypeUniverse,
    printer: &dyn TypePrinter,
    name: &str,
    template_arg: Option<TypeHandle>,
    args: &[TypeHandle],
) -> String {
    let mut out = String::from(name);
    if let Some(ty) = template_arg {
        let _ = write!(out, "<{}>", printer.type_name(types, ty));
    }
    out.push('(');
    for (i, &arg) in args.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&printer.type_name(types, types.unwrap_ref(arg)));
    }
    out.push(')');
    out
}

/// One candidate line: `name[<T>](usage: pattern, ...)[ -> ret][  where: ...]`.
pub(crate) fn candidate_line(name: &str, overload: &Overload) -> String {
    let mut out = String::from(name);

    let show_template = match overload.kind {
        OverloadKind::Conversion => true,
        OverloadKind::Constructor => overload.parameters.is_empty(),
        OverloadKind::Function | OverloadKind::Operator => false,
    };
    if show_template {
        if let Some(first) = overload.template_types.first() {
            let _ = write!(out, "<{}>", first.name);
        }
    }

    out.push('(');
    for (i, param) in overload.parameters.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        if param.usage.is_named() {
            let _ = write!(out, "{}: ", param.usage);
        }
        out.push_str(&overload.pattern_name(&param.pattern));
    }
    out.push(')');

    if let Some(ret) = &overload.return_type {
        let _ = write!(out, " -> {}", overload.pattern_name(ret));
    }
    out.push_str(&overload.where_clause());
    out
}

fn section(
    noun: &'static str,
    name: &str,
    candidates: &[&Candidate<'_>],
    limit: Option<usize>,
) -> CandidateSection {
    let shown = limit.unwrap_or(usize::MAX);
    let lines = candidates
        .iter()
        .take(shown)
        .map(|c| candidate_line(name, c.overload))
        .collect();
    CandidateSection::new(noun, candidates.len(), lines)
}

fn of_kind<'a, 'o>(candidates: &'a [Candidate<'o>], kind: OverloadKind) -> Vec<&'a Candidate<'o>> {
    candidates
        .iter()
        .filter(|c| c.overload.kind == kind)
        .collect()
}

/// Build the diagnostic for a call no overload accepts.
///
/// `candidates` must already be in closest-first order. Constructor calls
/// list constructors and conversions in separate sections.
pub(crate) fn no_match_diagnostic(
    span: Span,
    kind: CallKind,
    attempted: String,
    name: &str,
    candidates: &[Candidate<'_>],
    limit: Option<usize>,
) -> Diagnostic {
    let sections = match kind {
        CallKind::Constructor => vec![
            section(
                OverloadKind::Constructor.noun(),
                name,
                &of_kind(candidates, OverloadKind::Constructor),
                limit,
            ),
            section(
                OverloadKind::Conversion.noun(),
                name,
                &of_kind(candidates, OverloadKind::Conversion),
                limit,
            ),
        ],
        CallKind::Operator => vec![section(
            OverloadKind::Operator.noun(),
            name,
            &candidates.iter().collect::<Vec<_>>(),
            limit,
        )],
        CallKind::Function => vec![section(
            OverloadKind::Function.noun(),
            name,
            &candidates.iter().collect::<Vec<_>>(),
            limit,
        )],
    };

    Diagnostic {
        span,
        kind,
        attempted,
        sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::TemplateState;
    use shader_sema_catalog::{NumberMatcher, TypeClass, TypeMatcher};
    use shader_sema_core::{Access, AddressSpace, FriendlyNames, ParameterUsage, ScalarKind};

    fn vec_n_t() -> TypeMatcher {
        TypeMatcher::Vector {
            width: NumberMatcher::Template(0),
            element: Box::new(TypeMatcher::Template(0)),
        }
    }

    #[test]
    fn attempted_call_unwraps_references() {
        let mut types = TypeUniverse::new();
        let v = types.vector(TypeHandle::F32, 3);
        let r = types.reference(v, AddressSpace::Function, Access::ReadWrite);
        let text = attempted_call(&types, &FriendlyNames, "length", None, &[r]);
        assert_eq!(text, "length(vec3<f32>)");
    }

    #[test]
    fn attempted_constructor_shows_template_argument() {
        let types = TypeUniverse::new();
        let text = attempted_call(
            &types,
            &FriendlyNames,
            "vec3",
            Some(TypeHandle::F32),
            &[TypeHandle::I32, TypeHandle::BOOL],
        );
        assert_eq!(text, "vec3<f32>(i32, bool)");
        assert_eq!(
            attempted_call(&types, &FriendlyNames, "f", None, &[]),
            "f()"
        );
    }

    #[test]
    fn function_line_with_usages() {
        let overload = Overload::builder(OverloadKind::Function)
            .template_type("L", Some(TypeMatcher::Class(TypeClass::IU32)))
            .param(
                ParameterUsage::Texture,
                TypeMatcher::DepthTexture(shader_sema_core::TextureDimension::D2),
            )
            .param(ParameterUsage::Level, TypeMatcher::Template(0))
            .returns(TypeMatcher::Vector {
                width: NumberMatcher::Fixed(2),
                element: Box::new(TypeMatcher::Scalar(ScalarKind::U32)),
            })
            .build();
        assert_eq!(
            candidate_line("textureDimensions", &overload),
            "textureDimensions(texture: texture_depth_2d, level: L) -> vec2<u32>  \
             where: L is i32 or u32"
        );
    }

    #[test]
    fn operator_line() {
        let overload = Overload::builder(OverloadKind::Operator)
            .template_type("T", Some(TypeMatcher::Class(TypeClass::FIA_FI32_F16)))
            .template_number("N", None)
            .param(ParameterUsage::None, vec_n_t())
            .returns(vec_n_t())
            .build();
        assert_eq!(
            candidate_line("operator - ", &overload),
            "operator - (vecN<T>) -> vecN<T>  \
             where: T is abstract-float, abstract-int, f32, i32 or f16"
        );
    }

    #[test]
    fn conversion_line_names_first_template() {
        let overload = Overload::builder(OverloadKind::Conversion)
            .template_type("T", Some(TypeMatcher::Scalar(ScalarKind::F32)))
            .template_type("U", Some(TypeMatcher::Class(TypeClass::SCALAR_NO_F32)))
            .param(
                ParameterUsage::None,
                TypeMatcher::Vector {
                    width: NumberMatcher::Fixed(3),
                    element: Box::new(TypeMatcher::Template(1)),
                },
            )
            .returns(TypeMatcher::Vector {
                width: NumberMatcher::Fixed(3),
                element: Box::new(TypeMatcher::Scalar(ScalarKind::F32)),
            })
            .build();
        assert_eq!(
            candidate_line("vec3", &overload),
            "vec3<T>(vec3<U>) -> vec3<f32>  where: T is f32, \
             U is abstract-int, abstract-float, i32, f16, u32 or bool"
        );
    }

    #[test]
    fn void_function_has_no_arrow() {
        let overload = Overload::builder(OverloadKind::Function).build();
        assert_eq!(
            candidate_line("workgroupBarrier", &overload),
            "workgroupBarrier()"
        );
    }

    #[test]
    fn constructor_sections_and_elision() {
        let ctor = Overload::builder(OverloadKind::Constructor)
            .returns(TypeMatcher::Scalar(ScalarKind::F32))
            .build();
        let conv = Overload::builder(OverloadKind::Conversion)
            .template_type("T", Some(TypeMatcher::Class(TypeClass::SCALAR_NO_F32)))
            .param(ParameterUsage::None, TypeMatcher::Template(0))
            .returns(TypeMatcher::Scalar(ScalarKind::F32))
            .build();
        let candidate = |overload, index| Candidate {
            index,
            overload,
            score: 3,
            templates: TemplateState::new(),
            parameters: Vec::new(),
        };
        let candidates = vec![
            candidate(&ctor, 0),
            candidate(&ctor, 1),
            candidate(&conv, 2),
        ];
        let diag = no_match_diagnostic(
            Span::UNKNOWN,
            CallKind::Constructor,
            "f32(bool, bool)".to_string(),
            "f32",
            &candidates,
            Some(1),
        );
        assert_eq!(diag.sections.len(), 2);
        assert_eq!(diag.sections[0].noun, "constructor");
        assert_eq!(diag.sections[0].total, 2);
        assert_eq!(diag.sections[0].lines, vec!["f32() -> f32".to_string()]);
        assert_eq!(diag.sections[1].noun, "conversion");
        assert_eq!(diag.sections[1].total, 1);
        assert!(diag.message().contains("  ... 1 more\n"));
    }
}
