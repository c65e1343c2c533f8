//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects of the same concrete type with the same
//! values are considered equal.
//!
//! A type opts in by implementing [`ValueObject::equality_components`] and invoking
//! [`impl_value_object!`](crate::impl_value_object), which wires `PartialEq`, `Eq` and
//! `Hash` to the structural engine below.

use core::any::Any;
use core::fmt;
use core::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

const HASH_SEED: u64 = 17;
const HASH_FACTOR: u64 = 31;
/// Hash contributed by an absent component.
const ABSENT_HASH: u64 = 0;

/// Access to the concrete type behind a trait object.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A single equality component (scalar, string, nested value object, ...).
///
/// Implemented for every `Eq + Hash + Debug` type. Two components are equal only
/// when they have the same concrete type and compare equal under that type.
pub trait Component: AsAny + fmt::Debug {
    fn component_eq(&self, other: &dyn Component) -> bool;

    /// Deterministic hash of this component.
    fn component_hash(&self) -> u64;
}

impl<T> Component for T
where
    T: Any + Eq + Hash + fmt::Debug,
{
    fn component_eq(&self, other: &dyn Component) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn component_hash(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

/// Ordered equality components of a value object.
///
/// Each slot holds a component or nothing (an absent optional value). Absent
/// slots are equal only to absent slots.
#[derive(Debug, Default)]
pub struct EqualityComponents<'a> {
    slots: Vec<Option<&'a dyn Component>>,
}

impl<'a> EqualityComponents<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<C: Component>(mut self, component: &'a C) -> Self {
        self.slots.push(Some(component as &dyn Component));
        self
    }

    pub fn with_optional<C: Component>(mut self, component: Option<&'a C>) -> Self {
        self.slots
            .push(component.map(|component| component as &dyn Component));
        self
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&'a dyn Component>> + '_ {
        self.slots.iter().copied()
    }

    /// Position-by-position comparison; lengths must match.
    pub fn structurally_equal(&self, other: &EqualityComponents<'_>) -> bool {
        self.len() == other.len()
            && self.iter().zip(other.iter()).all(|pair| match pair {
                (None, None) => true,
                (Some(left), Some(right)) => left.component_eq(right),
                _ => false,
            })
    }

    /// Order-sensitive fold of every component hash.
    pub fn combined_hash(&self) -> u64 {
        self.iter().fold(HASH_SEED, |acc, slot| {
            let hash = slot.map_or(ABSENT_HASH, |component| component.component_hash());
            acc.wrapping_mul(HASH_FACTOR).wrapping_add(hash)
        })
    }
}

/// Immutable domain value compared by its components.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (two value objects with same values are equal)
/// - **Entity**: has identity (two entities with same ID are the same entity)
///
/// ## Equality rules
///
/// - absent `other` is never equal;
/// - `other` must be exactly the same concrete type (no cross-type equality, even
///   with identical components);
/// - the same instance is always equal to itself, without enumerating components;
/// - otherwise components are compared position by position.
///
/// Hashing folds the component hashes in order, so equal values hash equally.
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone)]
/// struct Money {
///     amount: i64,
///     currency: String,
/// }
///
/// impl ValueObject for Money {
///     fn equality_components(&self) -> EqualityComponents<'_> {
///         EqualityComponents::new().with(&self.amount).with(&self.currency)
///     }
/// }
///
/// impl_value_object!(Money);
/// ```
pub trait ValueObject: StructuralEquality + fmt::Debug {
    /// Components that determine identity, in a stable order.
    ///
    /// Each call builds a fresh list.
    fn equality_components(&self) -> EqualityComponents<'_>;
}

/// Equality and hashing derived from [`ValueObject::equality_components`].
///
/// Blanket-implemented for every sized value object; also reachable through
/// `dyn ValueObject`.
pub trait StructuralEquality: AsAny {
    /// Structural equality against a value of any type (or none).
    fn equals(&self, other: Option<&dyn Any>) -> bool;

    fn hash_code(&self) -> u64;
}

impl<T: ValueObject> StructuralEquality for T {
    fn equals(&self, other: Option<&dyn Any>) -> bool {
        let Some(other) = other.and_then(|other| other.downcast_ref::<T>()) else {
            return false;
        };
        if core::ptr::eq(self, other) {
            return true;
        }
        self.equality_components()
            .structurally_equal(&other.equality_components())
    }

    fn hash_code(&self) -> u64 {
        self.equality_components().combined_hash()
    }
}

impl<'a> PartialEq for dyn ValueObject + 'a {
    fn eq(&self, other: &Self) -> bool {
        self.equals(Some(other.as_any()))
    }
}

impl<'a> Eq for dyn ValueObject + 'a {}

impl<'a> Hash for dyn ValueObject + 'a {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

/// `==` over possibly absent value objects: both absent are equal, one absent is not.
pub fn equal_optional(left: Option<&dyn ValueObject>, right: Option<&dyn ValueObject>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(left), Some(right)) => left.equals(Some(right.as_any())),
        _ => false,
    }
}

/// `!=` over possibly absent value objects.
pub fn not_equal_optional(
    left: Option<&dyn ValueObject>,
    right: Option<&dyn ValueObject>,
) -> bool {
    !equal_optional(left, right)
}

/// Implements `PartialEq`, `Eq` and `Hash` for value objects through the
/// structural engine.
#[macro_export]
macro_rules! impl_value_object {
    ($($t:ty),+ $(,)?) => {
        $(
            impl ::core::cmp::PartialEq for $t {
                fn eq(&self, other: &Self) -> bool {
                    $crate::StructuralEquality::equals(
                        self,
                        ::core::option::Option::Some(other as &dyn ::core::any::Any),
                    )
                }
            }

            impl ::core::cmp::Eq for $t {}

            impl ::core::hash::Hash for $t {
                fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                    state.write_u64($crate::StructuralEquality::hash_code(self));
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[derive(Debug, Clone)]
    struct FakeSimpleValueObject {
        text: String,
        number: i32,
    }

    impl FakeSimpleValueObject {
        fn new(text: &str, number: i32) -> Self {
            Self {
                text: text.to_string(),
                number,
            }
        }
    }

    impl ValueObject for FakeSimpleValueObject {
        fn equality_components(&self) -> EqualityComponents<'_> {
            EqualityComponents::new().with(&self.text).with(&self.number)
        }
    }

    #[derive(Debug, Clone)]
    struct FakeComplexValueObject {
        text: String,
        number: i32,
        nested: FakeSimpleValueObject,
    }

    impl FakeComplexValueObject {
        fn new(text: &str, number: i32, nested: FakeSimpleValueObject) -> Self {
            Self {
                text: text.to_string(),
                number,
                nested,
            }
        }
    }

    impl ValueObject for FakeComplexValueObject {
        fn equality_components(&self) -> EqualityComponents<'_> {
            EqualityComponents::new()
                .with(&self.text)
                .with(&self.number)
                .with(&self.nested)
        }
    }

    /// Same components as `FakeSimpleValueObject`, different concrete type.
    #[derive(Debug, Clone)]
    struct FakeDerivedValueObject(FakeSimpleValueObject);

    impl ValueObject for FakeDerivedValueObject {
        fn equality_components(&self) -> EqualityComponents<'_> {
            self.0.equality_components()
        }
    }

    #[derive(Debug, Clone)]
    struct FakeOptionalValueObject {
        text: Option<String>,
        number: Option<i32>,
    }

    impl ValueObject for FakeOptionalValueObject {
        fn equality_components(&self) -> EqualityComponents<'_> {
            EqualityComponents::new()
                .with_optional(self.text.as_ref())
                .with_optional(self.number.as_ref())
        }
    }

    #[derive(Debug, Clone)]
    struct FakePair(String, String);

    impl ValueObject for FakePair {
        fn equality_components(&self) -> EqualityComponents<'_> {
            EqualityComponents::new().with(&self.0).with(&self.1)
        }
    }

    impl_value_object!(
        FakeSimpleValueObject,
        FakeComplexValueObject,
        FakeDerivedValueObject,
        FakeOptionalValueObject,
        FakePair,
    );

    #[derive(Debug)]
    struct UnrelatedObject;

    fn some(value: &dyn Any) -> Option<&dyn Any> {
        Some(value)
    }

    fn new_value_object() -> FakeSimpleValueObject {
        FakeSimpleValueObject::new("abcd", 1)
    }

    type Pair = (Box<dyn ValueObject>, Box<dyn ValueObject>);

    fn pair(a: impl ValueObject, b: impl ValueObject) -> Pair {
        (
            Box::new(a) as Box<dyn ValueObject>,
            Box::new(b) as Box<dyn ValueObject>,
        )
    }

    fn simple(text: &str, number: i32) -> FakeSimpleValueObject {
        FakeSimpleValueObject::new(text, number)
    }

    fn complex(text: &str, number: i32, nested: FakeSimpleValueObject) -> FakeComplexValueObject {
        FakeComplexValueObject::new(text, number, nested)
    }

    fn value_objects_with_same_equality_components() -> Vec<Pair> {
        vec![
            pair(simple("abcd", 1), simple("abcd", 1)),
            pair(
                complex("abcd", 1, simple("abcd", 1)),
                complex("abcd", 1, simple("abcd", 1)),
            ),
        ]
    }

    fn value_objects_with_different_equality_components() -> Vec<Pair> {
        vec![
            pair(simple("abcd", 1), simple("efjh", 1)),
            pair(simple("abcd", 1), simple("abcd", 2)),
            pair(simple("abcd", 1), simple("ABCD", 2)),
            pair(
                complex("abcd", 1, simple("abcd", 1)),
                complex("efjh", 1, simple("abcd", 1)),
            ),
            pair(
                complex("abcd", 1, simple("abcd", 1)),
                complex("abcd", 2, simple("abcd", 1)),
            ),
            pair(
                complex("abcd", 1, simple("abcd", 1)),
                complex("abcd", 1, simple("efjh", 1)),
            ),
        ]
    }

    fn value_objects_with_different_types() -> Vec<Pair> {
        vec![
            pair(simple("abcd", 1), complex("abcd", 1, simple("abcd", 1))),
            pair(simple("abcd", 1), FakeDerivedValueObject(simple("abcd", 1))),
        ]
    }

    #[test]
    fn equals_with_same_equality_components_returns_true() {
        for (a, b) in value_objects_with_same_equality_components() {
            let (a, b) = (&*a, &*b);
            assert!(a.equals(Some(b.as_any())), "{a:?} should equal {b:?}");
        }
    }

    #[test]
    fn equals_with_different_equality_components_returns_false() {
        for (a, b) in value_objects_with_different_equality_components() {
            let (a, b) = (&*a, &*b);
            assert!(!a.equals(Some(b.as_any())), "{a:?} should not equal {b:?}");
        }
    }

    #[test]
    fn equals_with_different_value_object_type_returns_false() {
        for (a, b) in value_objects_with_different_types() {
            let (a, b) = (&*a, &*b);
            assert!(!a.equals(Some(b.as_any())), "{a:?} should not equal {b:?}");
            assert!(!b.equals(Some(a.as_any())), "{b:?} should not equal {a:?}");
        }
    }

    #[test]
    fn equals_with_unrelated_type_returns_false() {
        let a = new_value_object();
        assert!(!a.equals(some(&UnrelatedObject)));
        assert!(!a.equals(some(&"abcd")));
        assert!(!a.equals(some(&("abcd".to_string(), 1))));
    }

    #[test]
    fn equals_with_absent_other_returns_false() {
        let a = new_value_object();
        assert!(!a.equals(None));

        let a: &dyn ValueObject = &a;
        assert!(!a.equals(None));
    }

    #[test]
    fn equals_with_same_instance_returns_true() {
        let a = new_value_object();
        assert!(a.equals(some(&a)));

        let b: &dyn ValueObject = &a;
        assert!(b.equals(Some(b.as_any())));
    }

    #[test]
    fn same_address_with_different_type_is_not_same_instance() {
        // `nested` may live at the same address as its parent.
        let parent = complex("abcd", 1, simple("abcd", 1));
        assert!(!parent.equals(some(&parent.nested)));
        assert!(!parent.nested.equals(some(&parent)));
    }

    #[test]
    fn eq_operator_agrees_with_equals() {
        for (a, b) in value_objects_with_same_equality_components() {
            assert!(*a == *b);
            assert!(!(*a != *b));
        }
        for (a, b) in value_objects_with_different_equality_components()
            .into_iter()
            .chain(value_objects_with_different_types())
        {
            assert!(*a != *b);
            assert!(!(*a == *b));
        }

        let a = new_value_object();
        let same = &a;
        assert_eq!(a, a.clone());
        assert!(a == *same);
        assert_ne!(a, simple("ABCD", 2));
    }

    #[test]
    fn operators_on_absent_operands() {
        let a = new_value_object();
        let present: Option<&dyn ValueObject> = Some(&a);
        let absent: Option<&dyn ValueObject> = None;

        assert!(equal_optional(absent, absent));
        assert!(!not_equal_optional(absent, absent));
        assert!(!equal_optional(present, absent));
        assert!(!equal_optional(absent, present));
        assert!(not_equal_optional(present, absent));
        assert!(equal_optional(present, present));

        // Option's own operators follow the same rules.
        let also_absent: Option<&dyn ValueObject> = None;
        let also_present: Option<&dyn ValueObject> = Some(&a);
        assert!(absent == also_absent);
        assert!(present != absent);
        assert!(present == also_present);
    }

    #[test]
    fn hash_code_with_same_equality_components_returns_same_value() {
        for (a, b) in value_objects_with_same_equality_components() {
            assert_eq!(a.hash_code(), b.hash_code());
        }
    }

    #[test]
    fn hash_code_with_different_equality_components_returns_different_values() {
        for (a, b) in value_objects_with_different_equality_components() {
            assert_ne!(a.hash_code(), b.hash_code(), "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn hash_code_is_stable_across_calls() {
        let a = complex("abcd", 1, simple("abcd", 1));
        assert_eq!(a.hash_code(), a.hash_code());
        assert_eq!(a.hash_code(), a.clone().hash_code());
    }

    #[test]
    fn absent_components_are_only_equal_to_absent_components() {
        let none = FakeOptionalValueObject {
            text: None,
            number: None,
        };
        let text_only = FakeOptionalValueObject {
            text: Some("abcd".to_string()),
            number: None,
        };

        assert_eq!(none, none.clone());
        assert_eq!(none.hash_code(), none.clone().hash_code());
        assert_ne!(none, text_only);
        assert_ne!(text_only, none);
        assert_eq!(text_only, text_only.clone());
    }

    #[test]
    fn comparison_is_order_sensitive() {
        let ab = FakePair("a".to_string(), "b".to_string());
        let ba = FakePair("b".to_string(), "a".to_string());
        assert_ne!(ab, ba);
        assert_ne!(ab.hash_code(), ba.hash_code());
    }

    #[test]
    fn value_objects_deduplicate_in_hash_sets() {
        let mut set = HashSet::new();
        set.insert(simple("abcd", 1));
        set.insert(simple("abcd", 1));
        set.insert(simple("ABCD", 1));
        assert_eq!(set.len(), 2);

        let mut boxed: HashSet<Box<dyn ValueObject>> = HashSet::new();
        boxed.insert(Box::new(simple("abcd", 1)));
        boxed.insert(Box::new(FakeDerivedValueObject(simple("abcd", 1))));
        boxed.insert(Box::new(simple("abcd", 1)));
        assert_eq!(boxed.len(), 2);
    }

    #[test]
    fn components_are_rebuilt_on_every_call() {
        let a = complex("abcd", 1, simple("abcd", 1));
        let first = a.equality_components();
        let second = a.equality_components();
        assert_eq!(first.len(), 3);
        assert!(first.structurally_equal(&second));
        assert_eq!(first.combined_hash(), second.combined_hash());
    }

    #[test]
    fn empty_component_lists_are_equal() {
        assert!(EqualityComponents::new().is_empty());
        assert!(EqualityComponents::new().structurally_equal(&EqualityComponents::new()));
    }

    #[test]
    fn components_of_different_types_are_not_equal() {
        let as_i32 = 1_i32;
        let as_i64 = 1_i64;
        let left = EqualityComponents::new().with(&as_i32);
        let right = EqualityComponents::new().with(&as_i64);
        assert!(!left.structurally_equal(&right));
    }

    #[test]
    fn component_lists_of_different_length_are_not_equal() {
        let text = "abcd".to_string();
        let left = EqualityComponents::new().with(&text);
        let right = EqualityComponents::new()
            .with(&text)
            .with_optional(None::<&String>);
        assert!(!left.structurally_equal(&right));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: every value object equals itself and a copy of itself.
        #[test]
        fn equality_is_reflexive(text in "[a-zA-Z]{0,8}", number in any::<i32>()) {
            let a = FakeSimpleValueObject::new(&text, number);
            prop_assert!(a.equals(some(&a)));
            prop_assert!(a == a.clone());
            prop_assert_eq!(a.hash_code(), a.clone().hash_code());
        }

        /// Property: equality agrees with component equality, and `==`/`!=` agree with `equals`.
        #[test]
        fn equality_follows_components(
            left in ("[a-zA-Z]{0,4}", 0i32..4),
            right in ("[a-zA-Z]{0,4}", 0i32..4),
            nested in ("[a-zA-Z]{0,4}", 0i32..4),
        ) {
            let a = FakeSimpleValueObject::new(&left.0, left.1);
            let b = FakeSimpleValueObject::new(&right.0, right.1);
            let same_components = left == right;

            prop_assert_eq!(a.equals(some(&b)), same_components);
            prop_assert_eq!(a == b, a.equals(some(&b)));
            prop_assert_eq!(a != b, !a.equals(some(&b)));
            if same_components {
                prop_assert_eq!(a.hash_code(), b.hash_code());
            }

            let inner = FakeSimpleValueObject::new(&nested.0, nested.1);
            let complex_a = FakeComplexValueObject::new(&left.0, left.1, inner.clone());
            let complex_b = FakeComplexValueObject::new(&right.0, right.1, inner);
            prop_assert_eq!(complex_a == complex_b, same_components);
            prop_assert!(!complex_a.equals(some(&a)));
        }

        /// Property: equality is symmetric.
        #[test]
        fn equality_is_symmetric(
            left in ("[ab]{0,2}", 0i32..2),
            right in ("[ab]{0,2}", 0i32..2),
        ) {
            let a = FakeSimpleValueObject::new(&left.0, left.1);
            let b = FakeSimpleValueObject::new(&right.0, right.1);
            prop_assert_eq!(a == b, b == a);
        }
    }
}
