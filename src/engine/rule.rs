use crate::board::Cell;

/// Number of possible live-neighbor counts in a Moore neighborhood (0 through 8)
const NEIGHBOR_COUNTS: usize = 9;
type RuleTable = [[Cell; NEIGHBOR_COUNTS]; 2];

/// Lookup table for B3/S23, indexed by `[current state][live neighbors]`
static RULE: RuleTable = generate_rule_table();

/// Creates the lookup table for the Game of Life ruleset
///
/// A live cell survives with 2 or 3 live neighbors, a dead cell is born with
/// exactly 3, and every other cell is dead in the next generation.
const fn generate_rule_table() -> RuleTable {
    let mut table = [[Cell::Dead; NEIGHBOR_COUNTS]; 2];
    table[Cell::Alive as usize][2] = Cell::Alive;
    table[Cell::Alive as usize][3] = Cell::Alive;
    table[Cell::Dead as usize][3] = Cell::Alive;
    table
}

/// State of a cell in the next generation
#[inline]
pub(super) fn next_state(current: Cell, neighbors: u8) -> Cell {
    debug_assert!(
        (neighbors as usize) < NEIGHBOR_COUNTS,
        "{neighbors} neighbors in a Moore neighborhood"
    );
    RULE[current as usize][neighbors as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_match_conway_life() {
        assert_eq!(next_state(Cell::Alive, 2), Cell::Alive);
        assert_eq!(next_state(Cell::Alive, 3), Cell::Alive);
        assert_eq!(next_state(Cell::Dead, 3), Cell::Alive);

        assert_eq!(next_state(Cell::Alive, 0), Cell::Dead);
        assert_eq!(next_state(Cell::Alive, 1), Cell::Dead);
        assert_eq!(next_state(Cell::Alive, 4), Cell::Dead);
        assert_eq!(next_state(Cell::Alive, 8), Cell::Dead);
        assert_eq!(next_state(Cell::Dead, 2), Cell::Dead);
        assert_eq!(next_state(Cell::Dead, 4), Cell::Dead);
    }

    #[test]
    fn only_three_births() {
        let births = (0..NEIGHBOR_COUNTS as u8)
            .filter(|&n| next_state(Cell::Dead, n).is_alive())
            .collect::<Vec<_>>();

        assert_eq!(births, vec![3]);
    }
}
