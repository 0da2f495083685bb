//! Register store
//!
//! Owns every [`Register`] created during a run. Registers are created on
//! first reference and never removed.

use super::register::Register;
use rustc_hash::FxHashMap;

/// Mapping from register name to register
#[derive(Debug, Clone, Default)]
pub struct RegisterStore {
    registers: FxHashMap<String, Register>,
}

impl RegisterStore {
    pub fn new() -> Self {
        RegisterStore {
            registers: FxHashMap::default(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Register> {
        self.registers.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Register> {
        self.registers.get_mut(name)
    }

    /// Look up a register, inserting a fresh zero-valued one if absent
    pub fn get_or_create(&mut self, name: &str) -> &mut Register {
        if !self.registers.contains_key(name) {
            tracing::trace!(register = name, "creating register");
        }
        self.registers
            .entry(name.to_string())
            .or_insert_with(|| Register::new(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.registers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.registers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_create_inserts_once() {
        let mut store = RegisterStore::new();
        assert!(store.is_empty());

        store.get_or_create("a").add_operation("add", "1");
        store.get_or_create("a").add_operation("add", "2");

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("a").map(|r| r.pending_len()), Some(2));
    }

    #[test]
    fn test_get_does_not_create() {
        let store = RegisterStore::new();
        assert!(store.get("missing").is_none());
        assert!(!store.contains("missing"));
        assert!(store.is_empty());
    }
}
