//! Transaction evaluation
//!
//! This module provides the Evaluator, the public face of the engine.
//! It owns the currency registry and coordinates parsing, strategy
//! selection, decomposition and formatting for one transaction at a
//! time.
//!
//! The check order is part of the observable contract: number parsing,
//! payment sufficiency, currency lookup, the zero-change shortcut, and
//! only then decomposition. "Insufficient payment" therefore wins over
//! an unknown currency code.

use rand::Rng;

use crate::core::decompose::{decompose, Strategy};
use crate::core::format::render_decomposition;
use crate::core::registry::CurrencyRegistry;
use crate::io::definition_format::parse_definition;
use crate::types::{ChangeError, Transaction};

/// Result string when the change rounds to zero
pub const NO_CHANGE_MESSAGE: &str = "No change owed";

/// Change evaluation engine
///
/// Owns a CurrencyRegistry and evaluates one owed/paid pair at a time.
/// Evaluation takes `&self`; only currency registration needs `&mut`.
pub struct Evaluator {
    registry: CurrencyRegistry,
}

impl Evaluator {
    /// Create an evaluator with the built-in currencies only
    pub fn new() -> Self {
        Evaluator {
            registry: CurrencyRegistry::new(),
        }
    }

    /// Create an evaluator around an existing registry
    pub fn with_registry(registry: CurrencyRegistry) -> Self {
        Evaluator { registry }
    }

    /// The underlying registry
    pub fn registry(&self) -> &CurrencyRegistry {
        &self.registry
    }

    /// Evaluate one transaction with the thread-local RNG
    ///
    /// See [`Evaluator::evaluate_with`] for the semantics; this is the
    /// entry point for callers that do not care about determinism.
    pub fn evaluate(
        &self,
        owed_text: &str,
        paid_text: &str,
        currency_code: &str,
    ) -> Result<String, ChangeError> {
        self.evaluate_with(owed_text, paid_text, currency_code, &mut rand::thread_rng())
    }

    /// Evaluate one transaction with a caller-provided RNG
    ///
    /// Parses the amounts, selects the decomposition strategy (owed
    /// minor units divisible by 3 randomize), and renders the change
    /// as a comma-separated phrase. Change of zero renders as
    /// "No change owed"; change smaller than every denomination in the
    /// table renders as the empty string.
    ///
    /// # Arguments
    ///
    /// * `owed_text` - Amount owed as decimal text
    /// * `paid_text` - Amount paid as decimal text
    /// * `currency_code` - Currency code in any casing
    /// * `rng` - Random source for the randomized path
    ///
    /// # Errors
    ///
    /// * `InvalidNumberFormat` - an amount does not parse
    /// * `InsufficientPayment` - paid is less than owed
    /// * `UnsupportedCurrency` - the code is not registered; the
    ///   message lists every supported code
    pub fn evaluate_with<R: Rng + ?Sized>(
        &self,
        owed_text: &str,
        paid_text: &str,
        currency_code: &str,
        rng: &mut R,
    ) -> Result<String, ChangeError> {
        let transaction = Transaction::parse(owed_text, paid_text)?;

        let currency = self.registry.lookup(currency_code).ok_or_else(|| {
            ChangeError::unsupported_currency(currency_code, &self.registry.supported_codes())
        })?;

        if transaction.change_minor_units == 0 {
            return Ok(NO_CHANGE_MESSAGE.to_string());
        }

        let strategy = Strategy::select(transaction.owed_minor_units);
        let decomposition = decompose(
            transaction.change_minor_units,
            &currency.denominations,
            strategy,
            rng,
        );

        Ok(render_decomposition(&decomposition))
    }

    /// Codes accepted by evaluate: built-ins first, then customs in
    /// registration order
    pub fn supported_codes(&self) -> Vec<String> {
        self.registry.supported_codes()
    }

    /// Parse and register a custom currency definition
    ///
    /// Returns the code the currency was stored under, which differs
    /// from the definition's own code when that collided with a
    /// built-in.
    ///
    /// # Errors
    ///
    /// `InvalidDefinition` when the definition text fails validation.
    pub fn register_currency(&mut self, definition_text: &str) -> Result<String, ChangeError> {
        let definition = parse_definition(definition_text)?;
        Ok(self.registry.register(definition))
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::rstest;

    const GEM_DEFINITION: &str = "\
CURRENCY_CODE=GEM
CURRENCY_NAME=Gemstones
CURRENCY_SYMBOL=G$
gem=10
shard=1
";

    #[test]
    fn test_minimal_path_usd() {
        let evaluator = Evaluator::new();
        let result = evaluator.evaluate("2.14", "3.00", "USD").unwrap();
        assert_eq!(result, "3 quarters, 1 dime, 1 penny");
    }

    #[test]
    fn test_no_change_owed() {
        let evaluator = Evaluator::new();
        let result = evaluator.evaluate("5.00", "5.00", "USD").unwrap();
        assert_eq!(result, "No change owed");
    }

    #[test]
    fn test_insufficient_payment() {
        let evaluator = Evaluator::new();
        let error = evaluator.evaluate("5.00", "3.00", "USD").unwrap_err();
        assert!(matches!(error, ChangeError::InsufficientPayment { .. }));
    }

    #[test]
    fn test_insufficient_payment_wins_over_unknown_currency() {
        let evaluator = Evaluator::new();
        let error = evaluator.evaluate("5.00", "3.00", "NOPE").unwrap_err();
        assert!(matches!(error, ChangeError::InsufficientPayment { .. }));
    }

    #[test]
    fn test_invalid_number_format() {
        let evaluator = Evaluator::new();
        let error = evaluator.evaluate("abc", "3.00", "USD").unwrap_err();
        assert_eq!(
            error,
            ChangeError::InvalidNumberFormat {
                input: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_unsupported_currency_lists_codes() {
        let evaluator = Evaluator::new();
        let error = evaluator.evaluate("2.14", "3.00", "XYZ").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Unsupported currency 'XYZ'. Supported: USD, EUR, COP"
        );
    }

    #[rstest]
    #[case::lowercase("usd")]
    #[case::uppercase("USD")]
    #[case::mixed("uSd")]
    fn test_currency_code_case_insensitive(#[case] code: &str) {
        let evaluator = Evaluator::new();
        let result = evaluator.evaluate("2.14", "3.00", code).unwrap();
        assert_eq!(result, "3 quarters, 1 dime, 1 penny");
    }

    #[test]
    fn test_minimal_path_eur() {
        let evaluator = Evaluator::new();
        let result = evaluator.evaluate("2.14", "3.00", "EUR").unwrap();
        assert_eq!(result, "50 cent, 20 cent, 10 cent, 5 cent, 1 cent");
    }

    #[test]
    fn test_minimal_path_cop() {
        let evaluator = Evaluator::new();
        let result = evaluator.evaluate("1000", "2000", "COP").unwrap();
        assert_eq!(result, "2 50000 pesos");
    }

    #[test]
    fn test_change_below_smallest_denomination_renders_empty() {
        // 0.25 change against COP's 50-centavo floor decomposes to
        // nothing.
        let evaluator = Evaluator::new();
        let result = evaluator.evaluate("0.20", "0.45", "COP").unwrap();
        assert_eq!(result, "");
    }

    #[test]
    fn test_randomized_path_is_seed_stable() {
        let evaluator = Evaluator::new();
        let first = evaluator
            .evaluate_with("2.13", "3.00", "USD", &mut StdRng::seed_from_u64(11))
            .unwrap();
        let second = evaluator
            .evaluate_with("2.13", "3.00", "USD", &mut StdRng::seed_from_u64(11))
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_randomized_path_uses_table_names_only() {
        let evaluator = Evaluator::new();
        let denominations = ["dollar", "quarter", "dime", "nickel", "penny", "pennies"];

        for seed in 0..10 {
            let result = evaluator
                .evaluate_with("2.13", "3.00", "USD", &mut StdRng::seed_from_u64(seed))
                .unwrap();
            assert!(!result.is_empty());
            assert_ne!(result, NO_CHANGE_MESSAGE);
            for phrase in result.split(", ") {
                assert!(
                    denominations.iter().any(|name| phrase.contains(name)),
                    "unexpected phrase: {}",
                    phrase
                );
            }
        }
    }

    #[test]
    fn test_register_and_evaluate_custom_currency() {
        let mut evaluator = Evaluator::new();
        let code = evaluator.register_currency(GEM_DEFINITION).unwrap();
        assert_eq!(code, "GEM");

        // 0.02 owed is not divisible by 3, so the deterministic
        // minimal path renders.
        let result = evaluator.evaluate("0.02", "0.99", "GEM").unwrap();
        assert_eq!(result, "9 gems, 7 shards");

        assert_eq!(evaluator.supported_codes(), vec!["USD", "EUR", "COP", "GEM"]);
    }

    #[test]
    fn test_register_colliding_code_gets_suffix() {
        let mut evaluator = Evaluator::new();
        let definition = "\
CURRENCY_CODE=USD
CURRENCY_NAME=House Dollars
CURRENCY_SYMBOL=H$
chip=25
token=1
";
        let code = evaluator.register_currency(definition).unwrap();
        assert_eq!(code, "USD_1");

        // The built-in USD still answers with its own table.
        let result = evaluator.evaluate("2.14", "3.00", "USD").unwrap();
        assert_eq!(result, "3 quarters, 1 dime, 1 penny");

        let result = evaluator.evaluate("2.14", "3.00", "USD_1").unwrap();
        assert_eq!(result, "3 chips, 11 tokens");
    }

    #[test]
    fn test_unsupported_message_includes_custom_codes() {
        let mut evaluator = Evaluator::new();
        evaluator.register_currency(GEM_DEFINITION).unwrap();
        let error = evaluator.evaluate("1", "2", "XYZ").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Unsupported currency 'XYZ'. Supported: USD, EUR, COP, GEM"
        );
    }

    #[test]
    fn test_invalid_definition_is_reported() {
        let mut evaluator = Evaluator::new();
        let error = evaluator
            .register_currency("CURRENCY_CODE=BAD\n")
            .unwrap_err();
        assert!(matches!(error, ChangeError::InvalidDefinition(_)));
    }
}
