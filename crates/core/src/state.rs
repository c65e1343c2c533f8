//! Conversion of domain values into flat persistence states.

/// A domain value that can be flattened into a persistence-oriented state.
///
/// The state is a plain, order-preserving field-by-field copy. It carries no
/// invariants of its own and is what storage collaborators read and write.
pub trait ToState {
    type State;

    fn to_state(&self) -> Self::State;
}
