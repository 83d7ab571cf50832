//! Rule-based validator over extracted values
//!
//! A [`Validator`] is built from rules, one per field:
//!
//! - `field` checks a constraint against the field itself
//! - `extracted` unwraps the field with a registered extractor and checks
//!   every reported value
//! - `cascade` unwraps the field and runs a nested validator on every
//!   reported value
//!
//! Violation paths use the field name for plain values, `name[i]` for list
//! elements and `name[]` for set elements, joined with `.` for nesting,
//! e.g. `wheels[1].screws`.

use crate::constraint::Constraint;
use crate::error::{ValidationError, ValidationResult};
use crate::extractor::CollectingReceiver;
use crate::registry::ExtractorRegistry;
use std::any::type_name;
use std::fmt;
use tracing::trace;

/// A failed constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Property path of the offending value
    pub path: String,
    /// Name of the failed constraint
    pub constraint: &'static str,
    /// Failure message
    pub message: String,
}

impl Violation {
    fn new(path: String, constraint: &'static str, message: String) -> Self {
        Violation {
            path,
            constraint,
            message,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

type Rule<B> = Box<
    dyn Fn(&B, &ExtractorRegistry, &str, &mut Vec<Violation>) -> ValidationResult<()>
        + Send
        + Sync,
>;

/// Validator for values of type `B`
pub struct Validator<B> {
    rules: Vec<Rule<B>>,
}

impl<B: 'static> Validator<B> {
    /// Validator with no rules
    pub fn new() -> Self {
        Validator { rules: Vec::new() }
    }

    /// Check `constraint` against the field returned by `accessor`.
    pub fn field<C, A, K>(mut self, name: &'static str, accessor: A, constraint: K) -> Self
    where
        C: 'static,
        A: Fn(&B) -> &C + Send + Sync + 'static,
        K: Constraint<C> + 'static,
    {
        self.rules.push(Box::new(
            move |bean: &B,
                  _registry: &ExtractorRegistry,
                  prefix: &str,
                  out: &mut Vec<Violation>|
                  -> ValidationResult<()> {
                if !constraint.is_valid(Some(accessor(bean))) {
                    out.push(Violation::new(
                        join(prefix, name),
                        constraint.name(),
                        constraint.message(),
                    ));
                }
                Ok(())
            },
        ));
        self
    }

    /// Check `constraint` against every value of type `I` extracted from the
    /// field.
    ///
    /// Running the validator fails with [`ValidationError::MissingExtractor`]
    /// if no extractor for `C` yielding `I` is registered.
    pub fn extracted<I, C, A, K>(mut self, name: &'static str, accessor: A, constraint: K) -> Self
    where
        C: 'static,
        I: 'static,
        A: Fn(&B) -> &C + Send + Sync + 'static,
        K: Constraint<I> + 'static,
    {
        self.rules.push(Box::new(
            move |bean: &B,
                  registry: &ExtractorRegistry,
                  prefix: &str,
                  out: &mut Vec<Violation>|
                  -> ValidationResult<()> {
                let extractor = registry.get::<C, I>().ok_or_else(missing::<C, I>)?;
                let mut receiver = CollectingReceiver::new();
                extractor.extract_values(accessor(bean), &mut receiver);
                let path = join(prefix, name);
                for (node, value) in receiver.into_values() {
                    if !constraint.is_valid(value) {
                        out.push(Violation::new(
                            node.render(&path),
                            constraint.name(),
                            constraint.message(),
                        ));
                    }
                }
                Ok(())
            },
        ));
        self
    }

    /// Run `nested` on every non-null value extracted from the field.
    pub fn cascade<C, I, A>(mut self, name: &'static str, accessor: A, nested: Validator<I>) -> Self
    where
        C: 'static,
        I: 'static,
        A: Fn(&B) -> &C + Send + Sync + 'static,
    {
        self.rules.push(Box::new(
            move |bean: &B,
                  registry: &ExtractorRegistry,
                  prefix: &str,
                  out: &mut Vec<Violation>|
                  -> ValidationResult<()> {
                let extractor = registry.get::<C, I>().ok_or_else(missing::<C, I>)?;
                let mut receiver = CollectingReceiver::new();
                extractor.extract_values(accessor(bean), &mut receiver);
                let path = join(prefix, name);
                for (node, value) in receiver.into_values() {
                    if let Some(item) = value {
                        nested.validate_at(item, registry, &node.render(&path), out)?;
                    }
                }
                Ok(())
            },
        ));
        self
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the validator has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Validate `bean`, returning every violation found.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingExtractor` if a rule needs an
    /// extractor that `registry` does not hold.
    pub fn validate(&self, bean: &B, registry: &ExtractorRegistry) -> ValidationResult<Vec<Violation>> {
        let mut violations = Vec::new();
        self.validate_at(bean, registry, "", &mut violations)?;
        trace!(
            target: "json_nullable::validation",
            bean = type_name::<B>(),
            violations = violations.len(),
            "Validated"
        );
        Ok(violations)
    }

    fn validate_at(
        &self,
        bean: &B,
        registry: &ExtractorRegistry,
        prefix: &str,
        out: &mut Vec<Violation>,
    ) -> ValidationResult<()> {
        for rule in &self.rules {
            rule(bean, registry, prefix, out)?;
        }
        Ok(())
    }
}

impl<B: 'static> Default for Validator<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> fmt::Debug for Validator<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("bean", &type_name::<B>())
            .field("rules", &self.rules.len())
            .finish()
    }
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}

fn missing<C, I>() -> ValidationError {
    ValidationError::MissingExtractor {
        container: type_name::<C>(),
        item: type_name::<I>(),
    }
}
