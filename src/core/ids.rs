//! Opaque identifiers handed out by the declaration registry.
//!
//! Identifiers are arena indices tagged with the blueprint that produced
//! them, so an identifier from one blueprint is never mistaken for an
//! entry of another.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Tag identifying the blueprint an identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct MachineKey(u64);

impl MachineKey {
    /// Allocate a key never handed out before in this process.
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

macro_rules! declaration_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name {
            machine: MachineKey,
            index: usize,
        }

        impl $name {
            pub(crate) fn new(machine: MachineKey, index: usize) -> Self {
                Self { machine, index }
            }

            pub(crate) fn machine(&self) -> MachineKey {
                self.machine
            }

            /// Position of the declaration, in declaration order.
            pub fn index(&self) -> usize {
                self.index
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}", $kind, self.index)
            }
        }
    };
}

declaration_id!(
    /// Identifier of a declared state.
    StateId,
    "state"
);

declaration_id!(
    /// Identifier of a declared input.
    InputId,
    "input"
);

declaration_id!(
    /// Identifier of a declared output.
    OutputId,
    "output"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn machine_keys_are_unique() {
        let a = MachineKey::next();
        let b = MachineKey::next();
        assert_ne!(a, b);
    }

    #[test]
    fn ids_from_different_machines_differ() {
        let a = StateId::new(MachineKey::next(), 0);
        let b = StateId::new(MachineKey::next(), 0);

        assert_eq!(a.index(), b.index());
        assert_ne!(a, b);
    }

    #[test]
    fn display_names_the_kind() {
        let key = MachineKey::next();
        assert_eq!(StateId::new(key, 2).to_string(), "state#2");
        assert_eq!(InputId::new(key, 0).to_string(), "input#0");
        assert_eq!(OutputId::new(key, 5).to_string(), "output#5");
    }
}
