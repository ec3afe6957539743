//! Change decomposition algorithms
//!
//! Two algorithms produce a valid decomposition of a change amount
//! over a denomination table:
//!
//! - **minimal**: a greedy largest-first walk. For canonical coin
//!   systems (all three built-ins are canonical) this yields the
//!   fewest pieces; for arbitrary custom tables the result is valid
//!   but not necessarily minimal.
//! - **randomized**: a single pass over a shuffled copy of the table,
//!   drawing a uniform count in [0, max] per denomination, followed by
//!   exactly one corrective step with the smallest denomination. The
//!   emitted lines are stably sorted back into table order, so the
//!   output order never depends on the shuffle.
//!
//! Strategy selection is the owed-divisibility rule: owed minor units
//! divisible by 3 take the randomized path.
//!
//! Both algorithms drop a remainder smaller than the smallest
//! denomination. Tables with a unit denomination never leave one; for
//! tables without one (COP stops at 50) the dropped remainder is
//! logged at debug level.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::types::{ChangeLine, Decomposition, DenominationTable, MinorUnits};

/// Decomposition algorithm choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Greedy largest-first decomposition
    Minimal,
    /// Shuffled uniform-draw decomposition
    Randomized,
}

impl Strategy {
    /// Select the strategy for an owed amount
    ///
    /// Owed minor units divisible by 3 select the randomized path;
    /// zero is divisible by 3, so a zero owed amount randomizes too.
    pub fn select(owed_minor_units: MinorUnits) -> Self {
        if owed_minor_units % 3 == 0 {
            Strategy::Randomized
        } else {
            Strategy::Minimal
        }
    }
}

/// Decompose a change amount with the given strategy
///
/// The RNG is only consulted on the randomized path; the minimal path
/// is fully deterministic.
pub fn decompose<R: Rng + ?Sized>(
    change: MinorUnits,
    table: &DenominationTable,
    strategy: Strategy,
    rng: &mut R,
) -> Decomposition {
    match strategy {
        Strategy::Minimal => minimal(change, table),
        Strategy::Randomized => randomized(change, table, rng),
    }
}

/// Greedy minimal decomposition
///
/// Walks the table largest-first, taking as many of each denomination
/// as fit. Denominations with a zero count are omitted.
pub fn minimal(change: MinorUnits, table: &DenominationTable) -> Decomposition {
    let mut remaining = change;
    let mut lines = Vec::new();

    for denomination in table.entries() {
        if remaining >= denomination.value {
            let count = remaining / denomination.value;
            remaining %= denomination.value;
            lines.push(ChangeLine {
                name: denomination.name.clone(),
                count,
            });
        }
    }

    if remaining > 0 {
        debug!(
            remaining,
            "remainder below the smallest denomination dropped"
        );
    }

    Decomposition { lines }
}

/// Randomized valid decomposition
///
/// One pass over the table in shuffled order: each denomination that
/// still fits draws a uniform count in [0, remaining / value]. One
/// corrective step with the table's smallest denomination then settles
/// what it can of the remainder. The corrective step emits its own
/// line even when the pass already used that denomination; the stable
/// sort back into table order keeps the two lines adjacent, pass line
/// first.
pub fn randomized<R: Rng + ?Sized>(
    change: MinorUnits,
    table: &DenominationTable,
    rng: &mut R,
) -> Decomposition {
    let mut remaining = change;
    let mut indexed: Vec<(usize, ChangeLine)> = Vec::new();

    let mut order: Vec<usize> = (0..table.len()).collect();
    order.shuffle(rng);

    for index in order {
        if remaining == 0 {
            break;
        }

        let denomination = &table.entries()[index];
        let max_count = remaining / denomination.value;
        if max_count > 0 {
            let count = rng.gen_range(0..=max_count);
            if count > 0 {
                remaining -= count * denomination.value;
                indexed.push((
                    index,
                    ChangeLine {
                        name: denomination.name.clone(),
                        count,
                    },
                ));
            }
        }
    }

    if remaining > 0 {
        if let Some(smallest) = table.smallest() {
            let count = remaining / smallest.value;
            if count > 0 {
                remaining -= count * smallest.value;
                indexed.push((
                    table.len() - 1,
                    ChangeLine {
                        name: smallest.name.clone(),
                        count,
                    },
                ));
            }
        }
    }

    if remaining > 0 {
        debug!(
            remaining,
            "remainder below the smallest denomination dropped"
        );
    }

    indexed.sort_by_key(|(index, _)| *index);

    Decomposition {
        lines: indexed.into_iter().map(|(_, line)| line).collect(),
    }
}
