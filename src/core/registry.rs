//! Currency registry
//!
//! Holds the built-in currencies (USD, EUR, COP) and any custom
//! currencies registered at runtime. There is no global state: the
//! registry is a plain value the evaluator owns. Reads take `&self`
//! and registration takes `&mut self`, so a shared registry cannot be
//! mutated without external synchronization.
//!
//! Custom codes that collide with a built-in code are never rejected
//! and never overwrite the built-in: a monotonically increasing suffix
//! is appended ("USD" becomes "USD_1") and the suffixed code is
//! returned to the caller.

use tracing::info;

use crate::types::{CurrencyDefinition, Denomination, DenominationTable};

/// Registry of built-in and custom currencies
///
/// Lookup is case-insensitive; storage is keyed by canonical uppercase
/// code. `supported_codes` preserves ordering: built-ins first, then
/// customs in registration order.
pub struct CurrencyRegistry {
    builtin: Vec<CurrencyDefinition>,
    custom: Vec<CurrencyDefinition>,
    next_suffix: u64,
}

impl CurrencyRegistry {
    /// Create a registry seeded with the built-in currencies
    pub fn new() -> Self {
        CurrencyRegistry {
            builtin: builtin_currencies(),
            custom: Vec::new(),
            next_suffix: 0,
        }
    }

    /// Look up a currency by code, case-insensitively
    ///
    /// Built-ins are checked before custom currencies.
    ///
    /// # Arguments
    ///
    /// * `code` - The currency code in any casing
    ///
    /// # Returns
    ///
    /// The matching definition, or None if the code is not registered
    pub fn lookup(&self, code: &str) -> Option<&CurrencyDefinition> {
        let normalized = code.to_uppercase();
        self.builtin
            .iter()
            .chain(self.custom.iter())
            .find(|currency| currency.code == normalized)
    }

    /// All supported codes: built-ins first, then customs in
    /// registration order
    pub fn supported_codes(&self) -> Vec<String> {
        self.builtin
            .iter()
            .chain(self.custom.iter())
            .map(|currency| currency.code.clone())
            .collect()
    }

    /// Register a custom currency and return the code it was stored under
    ///
    /// The definition's code is normalized to uppercase. A code equal
    /// to a built-in code is disambiguated with the next free
    /// `<code>_<n>` suffix instead of failing; re-registering an
    /// existing custom code replaces that entry in place, keeping its
    /// position in `supported_codes`.
    pub fn register(&mut self, mut definition: CurrencyDefinition) -> String {
        let requested = definition.code.to_uppercase();

        let code = if self.is_builtin(&requested) {
            let assigned = self.disambiguate(&requested);
            info!(%requested, %assigned, "built-in code collision disambiguated");
            assigned
        } else {
            requested
        };
        definition.code = code.clone();

        match self
            .custom
            .iter()
            .position(|currency| currency.code == code)
        {
            Some(index) => self.custom[index] = definition,
            None => self.custom.push(definition),
        }

        code
    }

    /// Whether an uppercase code names a built-in currency
    fn is_builtin(&self, code: &str) -> bool {
        self.builtin.iter().any(|currency| currency.code == code)
    }

    /// Whether an uppercase code is taken by anything
    fn is_registered(&self, code: &str) -> bool {
        self.is_builtin(code) || self.custom.iter().any(|currency| currency.code == code)
    }

    /// Next free `<code>_<n>` candidate; the counter only ever grows,
    /// so assigned suffixes are strictly increasing within a registry
    fn disambiguate(&mut self, code: &str) -> String {
        loop {
            self.next_suffix += 1;
            let candidate = format!("{}_{}", code, self.next_suffix);
            if !self.is_registered(&candidate) {
                return candidate;
            }
        }
    }
}

impl Default for CurrencyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The three built-in currency definitions
///
/// All three tables are canonical coin systems, so the greedy walk is
/// minimal for them. COP's smallest coin is 50 centavos; COP change
/// smaller than that is dropped by both decomposition paths.
fn builtin_currencies() -> Vec<CurrencyDefinition> {
    vec![
        CurrencyDefinition {
            code: "USD".to_string(),
            name: "US Dollar".to_string(),
            symbol: "$".to_string(),
            denominations: DenominationTable::new(vec![
                Denomination::new("dollar", 100),
                Denomination::new("quarter", 25),
                Denomination::new("dime", 10),
                Denomination::new("nickel", 5),
                Denomination::new("penny", 1),
            ]),
        },
        CurrencyDefinition {
            code: "EUR".to_string(),
            name: "Euro".to_string(),
            symbol: "€".to_string(),
            denominations: DenominationTable::new(vec![
                Denomination::new("2_euro", 200),
                Denomination::new("1_euro", 100),
                Denomination::new("50_cent", 50),
                Denomination::new("20_cent", 20),
                Denomination::new("10_cent", 10),
                Denomination::new("5_cent", 5),
                Denomination::new("2_cent", 2),
                Denomination::new("1_cent", 1),
            ]),
        },
        CurrencyDefinition {
            code: "COP".to_string(),
            name: "Colombian Peso".to_string(),
            symbol: "$".to_string(),
            denominations: DenominationTable::new(vec![
                Denomination::new("50000_peso", 50_000),
                Denomination::new("20000_peso", 20_000),
                Denomination::new("10000_peso", 10_000),
                Denomination::new("5000_peso", 5_000),
                Denomination::new("2000_peso", 2_000),
                Denomination::new("1000_peso", 1_000),
                Denomination::new("500_peso", 500),
                Denomination::new("200_peso", 200),
                Denomination::new("100_peso", 100),
                Denomination::new("50_peso", 50),
            ]),
        },
    ]
}
