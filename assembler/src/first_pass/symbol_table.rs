//! Predefined-plus-user symbol table.
//!
//! The fixed entries are a `phf::Map` (grounded in the retrieved
//! `onenewcode-Nand2Tetris/project6/src/symbol_table.rs`, itself the
//! idiomatic way to express a compile-time-known lookup table in Rust)
//! so the virtual-register and I/O-port addresses cost nothing at
//! runtime to look up. User symbols (labels, variables) go in a
//! `HashMap` seeded from the predefined set, so labels, predefined
//! names and variables share one flat namespace and a label recorded in
//! pass 1 takes precedence over any variable pass 2 would otherwise
//! allocate for the same name.

use std::collections::HashMap;

static PREDEFINED_SYMBOLS: phf::Map<&'static str, u16> = phf::phf_map! {
    "SP" => 0,
    "LCL" => 1,
    "ARG" => 2,
    "THIS" => 3,
    "THAT" => 4,
    "R0" => 0,
    "R1" => 1,
    "R2" => 2,
    "R3" => 3,
    "R4" => 4,
    "R5" => 5,
    "R6" => 6,
    "R7" => 7,
    "R8" => 8,
    "R9" => 9,
    "R10" => 10,
    "R11" => 11,
    "R12" => 12,
    "R13" => 13,
    "R14" => 14,
    "R15" => 15,
    "SCREEN" => 16384,
    "KBD" => 24576,
};

const FIRST_VARIABLE_ADDRESS: u16 = 16;

#[derive(Debug, Clone)]
pub struct SymbolTable {
    entries: HashMap<String, u16>,
    next_variable: u16,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        let entries = PREDEFINED_SYMBOLS
            .entries()
            .map(|(&name, &addr)| (name.to_string(), addr))
            .collect();
        Self {
            entries,
            next_variable: FIRST_VARIABLE_ADDRESS,
        }
    }

    /// Record a label at `address`. Returns the address of a prior
    /// definition if `name` was already present (i.e. a duplicate).
    pub fn insert_label(&mut self, name: &str, address: u16) -> Option<u16> {
        if let Some(&existing) = self.entries.get(name) {
            return Some(existing);
        }
        self.entries.insert(name.to_string(), address);
        None
    }

    pub fn get(&self, name: &str) -> Option<u16> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Resolve `name` to an address, allocating the next free RAM slot
    /// (starting at 16, monotonically increasing) if it is not already
    /// a predefined symbol, label, or previously allocated variable.
    pub fn resolve_or_allocate(&mut self, name: &str) -> u16 {
        if let Some(addr) = self.entries.get(name) {
            return *addr;
        }
        let addr = self.next_variable;
        self.entries.insert(name.to_string(), addr);
        self.next_variable += 1;
        addr
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predefined_symbols_are_present() {
        let table = SymbolTable::new();
        assert_eq!(table.get("SP"), Some(0));
        assert_eq!(table.get("SCREEN"), Some(16384));
        assert_eq!(table.get("KBD"), Some(24576));
        assert_eq!(table.get("R15"), Some(15));
    }

    #[test]
    fn labels_take_precedence_over_new_variables() {
        let mut table = SymbolTable::new();
        assert_eq!(table.insert_label("LOOP", 10), None);
        assert_eq!(table.resolve_or_allocate("LOOP"), 10);
    }

    #[test]
    fn variables_allocate_starting_at_16() {
        let mut table = SymbolTable::new();
        assert_eq!(table.resolve_or_allocate("i"), 16);
        assert_eq!(table.resolve_or_allocate("sum"), 17);
        assert_eq!(table.resolve_or_allocate("i"), 16);
    }

    #[test]
    fn duplicate_label_reports_original_address() {
        let mut table = SymbolTable::new();
        assert_eq!(table.insert_label("LOOP", 5), None);
        assert_eq!(table.insert_label("LOOP", 9), Some(5));
    }
}
