//! Leaf validators shared by the section validators, plus the path
//! annotation used while a failure unwinds.

use grinder_common::{Choice, ClosedSet, PathSegment, ValidationError};

use crate::schema::RangePair;

/// Whether a range pair may have a bound of exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ZeroPolicy {
    Allow,
    Forbid,
}

/// Prefix a failure with the section it came from.
pub(crate) trait Annotate {
    fn in_section(self, name: &'static str) -> Self;
    fn at_index(self, index: usize) -> Self;
}

impl<T> Annotate for Result<T, ValidationError> {
    fn in_section(self, name: &'static str) -> Self {
        self.map_err(|e| e.within(PathSegment::Field(name)))
    }

    fn at_index(self, index: usize) -> Self {
        self.map_err(|e| e.within(PathSegment::Index(index)))
    }
}

fn is_non_negative(value: f64) -> bool {
    // false for NaN
    value >= 0.0
}

/// Check a `(min, max)` window.
///
/// Negative bounds are reported first, then forbidden zeros, then
/// ordering, so a pair that is both negative and reversed reports the
/// negative bound.
pub(crate) fn validate_range_pair<R: RangePair>(
    pair: &R,
    zero: ZeroPolicy,
) -> Result<(), ValidationError> {
    let (min, max) = pair.bounds();

    for (field, value) in [(R::MIN_FIELD, min), (R::MAX_FIELD, max)] {
        if !is_non_negative(value) {
            return Err(
                ValidationError::range(format!("{} cannot be negative", R::SUBJECT))
                    .with_field(field)
                    .with_value(value),
            );
        }
    }

    if zero == ZeroPolicy::Forbid {
        for (field, value) in [(R::MIN_FIELD, min), (R::MAX_FIELD, max)] {
            if value == 0.0 {
                return Err(
                    ValidationError::range(format!("{} cannot be 0", R::SUBJECT))
                        .with_field(field)
                        .with_value(value),
                );
            }
        }
    }

    if min > max {
        return Err(ValidationError::range(format!(
            "{} cannot be greater than {}",
            R::MIN_FIELD,
            R::MAX_FIELD
        ))
        .with_field(R::MIN_FIELD)
        .with_value(min));
    }

    Ok(())
}

/// Check that a probability lies in `[0, 1]`.
pub(crate) fn validate_probability(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(
            ValidationError::range(format!("{field} must be between 0 and 1"))
                .with_field(field)
                .with_value(value),
        )
    }
}

/// Check that a value is a member of its closed set.
///
/// Raw text is accepted when it names a member exactly.
pub(crate) fn validate_choice<T: ClosedSet>(
    field: &'static str,
    label: &str,
    choice: &Choice<T>,
) -> Result<(), ValidationError> {
    match choice {
        Choice::Known(_) => Ok(()),
        Choice::Raw(raw) if T::contains(raw) => Ok(()),
        Choice::Raw(raw) => Err(ValidationError::membership(format!("invalid {label}: {raw}"))
            .with_field(field)
            .with_value(raw)),
    }
}

/// Check a non-empty list of closed-set values, stopping at the first bad one.
pub(crate) fn validate_choices<T: ClosedSet>(
    field: &'static str,
    label: &str,
    choices: &[Choice<T>],
    empty_message: &str,
) -> Result<(), ValidationError> {
    require_non_empty(field, choices, empty_message)?;
    for choice in choices {
        validate_choice(field, label, choice)?;
    }
    Ok(())
}

pub(crate) fn require_non_empty_str(
    field: &'static str,
    value: &str,
    message: &str,
) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::emptiness(message).with_field(field));
    }
    Ok(())
}

pub(crate) fn require_non_empty<T>(
    field: &'static str,
    items: &[T],
    message: &str,
) -> Result<(), ValidationError> {
    if items.is_empty() {
        return Err(ValidationError::emptiness(message).with_field(field));
    }
    Ok(())
}

/// Fail only when both lists are empty.
pub(crate) fn require_any<A, B>(first: &[A], second: &[B], message: &str) -> Result<(), ValidationError> {
    if first.is_empty() && second.is_empty() {
        return Err(ValidationError::emptiness(message));
    }
    Ok(())
}

pub(crate) fn require_non_negative(
    field: &'static str,
    value: i64,
    message: &str,
) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::range(message)
            .with_field(field)
            .with_value(value));
    }
    Ok(())
}

/// Like [`require_non_negative`], but only enforced while `enabled` is set.
pub(crate) fn require_non_negative_when(
    enabled: bool,
    field: &'static str,
    value: i64,
    message: &str,
) -> Result<(), ValidationError> {
    if enabled && value < 0 {
        return Err(ValidationError::conditional(message)
            .with_field(field)
            .with_value(value));
    }
    Ok(())
}
