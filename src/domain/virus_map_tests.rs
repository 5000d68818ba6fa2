/// Unit tests for the `virus_map` module: construction validation and the
/// solver's edge cases. The scenario-level tests live in
/// `tests/test_virus_map.rs`.
#[cfg(test)]
mod tests {
    use crate::domain::virus_map::{Cell, Outcome, VirusMap};
    use crate::error::Error;

    fn map(values: Vec<Vec<u8>>) -> VirusMap {
        let rows = values.len();
        let cols = values[0].len();
        VirusMap::new(rows, cols, values).unwrap()
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(matches!(VirusMap::new(0, 5, vec![]), Err(Error::GridDimensions { .. })));
        assert!(matches!(VirusMap::new(3, 0, vec![vec![], vec![], vec![]]), Err(Error::GridDimensions { .. })));
    }

    #[test]
    fn test_rejects_row_count_mismatch() {
        let values = vec![vec![0, 0], vec![0, 0]];
        assert!(matches!(VirusMap::new(3, 2, values), Err(Error::GridShape { .. })));
    }

    #[test]
    fn test_rejects_short_row() {
        let values = vec![vec![0, 0, 0], vec![0, 0], vec![0, 0, 0]];
        let err = VirusMap::new(3, 3, values).unwrap_err();
        match err {
            Error::GridShape { row, count, .. } => {
                assert_eq!(row, 1);
                assert_eq!(count, 2);
            }
            other => panic!("expected GridShape, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_out_of_range_cell_value() {
        let values = vec![vec![0, 1], vec![2, 3]];
        let err = VirusMap::new(2, 2, values).unwrap_err();
        match err {
            Error::CellValue { row, col, value } => {
                assert_eq!((row, col, value), (1, 1, 3));
            }
            other => panic!("expected CellValue, got {:?}", other),
        }
    }

    #[test]
    fn test_single_cell_grids() {
        assert_eq!(map(vec![vec![0]]).solve(), Outcome::Elapsed(0));
        assert_eq!(map(vec![vec![2]]).solve(), Outcome::Elapsed(0));
        assert_eq!(map(vec![vec![1]]).solve(), Outcome::Infeasible);
    }

    #[test]
    fn test_no_sources_with_guests_is_infeasible() {
        let mut m = map(vec![vec![1, 1], vec![1, 1]]);
        assert_eq!(m.solve(), Outcome::Infeasible);
        // Nothing spread: every guest is still healthy.
        for r in 0..2 {
            for c in 0..2 {
                assert_eq!(m.cell(r, c), Some(Cell::Healthy));
            }
        }
    }

    #[test]
    fn test_no_guests_is_zero_regardless_of_sources() {
        assert_eq!(map(vec![vec![0, 0], vec![0, 0]]).solve(), Outcome::Elapsed(0));
        assert_eq!(map(vec![vec![2, 0], vec![0, 2]]).solve(), Outcome::Elapsed(0));
    }

    #[test]
    fn test_infected_set_is_monotone() {
        let values = vec![vec![2, 1, 0, 2, 1], vec![1, 1, 1, 1, 1], vec![1, 0, 0, 2, 1]];
        let mut m = map(values.clone());
        m.solve();
        for (r, row) in values.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                if v == 2 {
                    assert_eq!(m.cell(r, c), Some(Cell::Infected));
                }
            }
        }
    }

    #[test]
    fn test_empty_cells_never_change() {
        let mut m = map(vec![vec![2, 0, 1], vec![2, 0, 1]]);
        assert_eq!(m.solve(), Outcome::Infeasible);
        assert_eq!(m.cell(0, 1), Some(Cell::Empty));
        assert_eq!(m.cell(1, 1), Some(Cell::Empty));
        assert_eq!(m.cell(0, 2), Some(Cell::Healthy));
    }

    #[test]
    fn test_solve_is_idempotent_after_termination() {
        let mut m = map(vec![vec![2, 1, 1], vec![1, 1, 1]]);
        assert_eq!(m.solve(), Outcome::Elapsed(3));
        // A second run finds no healthy cells and takes zero steps.
        assert_eq!(m.solve(), Outcome::Elapsed(0));
    }

    #[test]
    fn test_deterministic_across_runs() {
        let values = vec![vec![1, 1, 1, 1, 1], vec![1, 0, 0, 0, 0], vec![1, 1, 1, 1, 2]];
        let a = map(values.clone()).solve();
        let b = map(values).solve();
        assert_eq!(a, b);
    }

    #[test]
    fn test_outcome_integer_convention() {
        assert_eq!(Outcome::Elapsed(2).as_steps(), 2);
        assert_eq!(Outcome::Infeasible.as_steps(), -1);
        assert_eq!(Outcome::Elapsed(2).to_string(), "2");
        assert_eq!(Outcome::Infeasible.to_string(), "-1");
    }
}
