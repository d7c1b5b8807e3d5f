//! Rendering overload patterns for diagnostics.
//!
//! Patterns print the way they are declared: template names stand for
//! themselves (`vecN<T>`), type classes list their members in declaration
//! order (`abstract-float, f32 or f16`).

use std::fmt::Display;

use crate::matcher::{NumberMatcher, TypeClass, TypeMatcher};
use crate::overload::Overload;

/// Join items as `a, b or c`.
pub fn join_or<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let items: Vec<String> = items.into_iter().map(|i| i.to_string()).collect();
    match items.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
    }
}

impl TypeClass {
    pub fn display_name(&self) -> String {
        join_or(self.members.iter().map(|m| m.name()))
    }
}

impl Overload {
    /// The declared name of a type pattern.
    pub fn pattern_name(&self, pattern: &TypeMatcher) -> String {
        match pattern {
            TypeMatcher::Scalar(kind) => kind.name().to_string(),
            TypeMatcher::Template(i) => self
                .template_types
                .get(*i)
                .map_or_else(|| format!("T{}", i), |t| t.name.to_string()),
            TypeMatcher::Class(class) => class.display_name(),
            TypeMatcher::Vector { width, element } => format!(
                "vec{}<{}>",
                self.number_name(width),
                self.pattern_name(element)
            ),
            TypeMatcher::Matrix {
                columns,
                rows,
                element,
            } => format!(
                "mat{}x{}<{}>",
                self.number_name(columns),
                self.number_name(rows),
                self.pattern_name(element)
            ),
            TypeMatcher::RuntimeArray(element) => format!("array<{}>", self.pattern_name(element)),
            TypeMatcher::Pointer {
                space,
                store,
                access,
            } => format!(
                "ptr<{}, {}, {}>",
                self.number_name(space),
                self.pattern_name(store),
                self.number_name(access)
            ),
            TypeMatcher::Atomic(element) => format!("atomic<{}>", self.pattern_name(element)),
            TypeMatcher::Sampler(kind) => kind.name().to_string(),
            TypeMatcher::SampledTexture { dim, element } => {
                format!("texture_{}<{}>", dim, self.pattern_name(element))
            }
            TypeMatcher::MultisampledTexture { dim, element } => format!(
                "texture_multisampled_{}<{}>",
                dim,
                self.pattern_name(element)
            ),
            TypeMatcher::DepthTexture(dim) => format!("texture_depth_{}", dim),
            TypeMatcher::DepthMultisampledTexture(dim) => {
                format!("texture_depth_multisampled_{}", dim)
            }
            TypeMatcher::StorageTexture {
                dim,
                format,
                access,
            } => format!(
                "texture_storage_{}<{}, {}>",
                dim,
                self.number_name(format),
                self.number_name(access)
            ),
            TypeMatcher::ExternalTexture => "texture_external".to_string(),
            TypeMatcher::ModfResult(element) => {
                format!("__modf_result_{}", self.pattern_name(element))
            }
            TypeMatcher::ModfResultVec { width, element } => format!(
                "__modf_result_vec{}_{}",
                self.number_name(width),
                self.pattern_name(element)
            ),
            TypeMatcher::FrexpResult(element) => {
                format!("__frexp_result_{}", self.pattern_name(element))
            }
            TypeMatcher::FrexpResultVec { width, element } => format!(
                "__frexp_result_vec{}_{}",
                self.number_name(width),
                self.pattern_name(element)
            ),
        }
    }

    /// The declared name of a number pattern.
    pub fn number_name(&self, number: &NumberMatcher) -> String {
        match number {
            NumberMatcher::Fixed(n) => n.to_string(),
            NumberMatcher::Template(i) => self
                .template_numbers
                .get(*i)
                .map_or_else(|| format!("N{}", i), |n| n.name.to_string()),
            NumberMatcher::Access(set) => join_or(set.iter()),
            NumberMatcher::AddressSpace(set) => join_or(set.iter()),
            NumberMatcher::TexelFormat(set) => join_or(set.iter()),
        }
    }

    /// The `where:` clause listing each constrained template parameter, or
    /// an empty string when there are none.
    pub fn where_clause(&self) -> String {
        let types = self.template_types.iter().filter_map(|t| {
            t.constraint
                .as_ref()
                .map(|c| format!("{} is {}", t.name, self.pattern_name(c)))
        });
        let numbers = self.template_numbers.iter().filter_map(|n| {
            n.constraint
                .as_ref()
                .map(|c| format!("{} is {}", n.name, self.number_name(c)))
        });
        let clauses: Vec<String> = types.chain(numbers).collect();
        if clauses.is_empty() {
            String::new()
        } else {
            format!("  where: {}", clauses.join(", "))
        }
    }
}
