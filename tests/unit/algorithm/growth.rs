//! Tests for synchronous growth rounds

#[cfg(test)]
mod tests {
    use tamtam::algorithm::assembly::TileAssembly;
    use tamtam::spatial::{PlacementMap, Position};
    use tamtam::tiles::{GluePattern, TileSet};
    use tamtam::{AlgorithmError, Result};

    fn pattern(labels: [&str; 4]) -> GluePattern {
        GluePattern::from_labels(labels)
    }

    fn tile_set(types: &[(&str, [&str; 4])]) -> TileSet {
        types
            .iter()
            .map(|&(name, labels)| (name.to_string(), pattern(labels)))
            .collect()
    }

    fn seeded(types: &[(&str, [&str; 4])], seed: &[(Position, [&str; 4])]) -> Result<TileAssembly> {
        let seed: PlacementMap = seed
            .iter()
            .map(|&(pos, labels)| (pos, pattern(labels)))
            .collect();
        let mut assembly = TileAssembly::new(tile_set(types), seed, 1)?;
        assembly.flush_newly_added_tiles();
        Ok(assembly)
    }

    // Eastward chain: every placed tile exposes "a" to its east
    fn chain() -> Result<TileAssembly> {
        seeded(
            &[("link", ["", "a", "", "a"])],
            &[(Position::new(0, 0), ["", "a", "", ""])],
        )
    }

    // Tests a round only fills positions eligible before it started
    #[test]
    fn test_round_reads_pre_round_snapshot() -> Result<()> {
        let mut assembly = chain()?;

        assert!(assembly.grow_sync(true)?);
        assert_eq!(assembly.size(), 2);
        assert!(assembly.tiles().contains(Position::new(1, 0)));
        assert!(!assembly.tiles().contains(Position::new(2, 0)));
        assert!(assembly.frontier().contains(&Position::new(2, 0)));

        assert!(assembly.grow_sync(true)?);
        assert_eq!(assembly.size(), 3);
        Ok(())
    }

    // Tests directed growth fails on ambiguity without placing anything
    #[test]
    fn test_directed_ambiguity_is_atomic() -> Result<()> {
        let mut assembly = seeded(
            &[
                ("north", ["b", "", "", "a"]),
                ("south", ["", "", "b", "a"]),
                ("single", ["", "", "", "z"]),
            ],
            &[
                (Position::new(0, 0), ["", "a", "", ""]),
                (Position::new(0, 5), ["", "z", "", ""]),
            ],
        )?;
        let before = assembly.clone();

        let result = assembly.grow_sync(true);

        match result {
            Err(AlgorithmError::NonDeterminism {
                position,
                candidates,
            }) => {
                assert_eq!(position, Position::new(1, 0));
                assert_eq!(candidates, vec!["north", "south"]);
            }
            other => unreachable!("expected non-determinism, got {other:?}"),
        }
        // (1, 5) had a unique match but was not placed either
        assert_eq!(assembly, before);
        assert_eq!(assembly.frontier(), before.frontier());
        assert!(assembly.newly_added_tiles().is_empty());
        Ok(())
    }

    // Tests undirected growth places the first match in name order, once
    #[test]
    fn test_undirected_first_match_wins() -> Result<()> {
        let mut assembly = seeded(
            &[("b_second", ["", "", "b", "a"]), ("a_first", ["b", "", "", "a"])],
            &[(Position::new(0, 0), ["", "a", "", ""])],
        )?;

        assert!(assembly.grow_sync(false)?);

        assert_eq!(
            assembly.tiles().get(Position::new(1, 0)),
            Some(&pattern(["b", "", "", "a"]))
        );
        assert_eq!(assembly.newly_added_tiles().len(), 1);
        Ok(())
    }

    // Tests unmatched frontier positions stay in the frontier
    #[test]
    fn test_unmatched_positions_remain_frontier() -> Result<()> {
        let mut assembly = seeded(
            &[("other", ["", "", "", "q"])],
            &[(Position::new(0, 0), ["", "a", "", ""])],
        )?;

        assert!(!assembly.grow_sync(true)?);
        assert!(assembly.frontier().contains(&Position::new(1, 0)));
        Ok(())
    }

    // Tests growing a converged assembly changes nothing
    #[test]
    fn test_converged_round_is_idempotent() -> Result<()> {
        let mut assembly = seeded(
            &[("end", ["", "", "", "a"])],
            &[(Position::new(0, 0), ["", "a", "", ""])],
        )?;
        assert!(assembly.grow_sync(true)?);
        assembly.flush_newly_added_tiles();

        let tiles = assembly.tiles().clone();
        let frontier = assembly.frontier().clone();

        assert!(!assembly.grow_sync(true)?);
        assert!(!assembly.grow_sync(false)?);
        assert_eq!(assembly.tiles(), &tiles);
        assert_eq!(assembly.frontier(), &frontier);
        assert!(assembly.newly_added_tiles().is_empty());
        Ok(())
    }

    // Tests rounds log placements in position order
    #[test]
    fn test_round_log_is_position_ordered() -> Result<()> {
        let mut assembly = seeded(
            &[("cap", ["", "", "", "a"])],
            &[
                (Position::new(4, 0), ["", "a", "", ""]),
                (Position::new(0, 3), ["", "a", "", ""]),
                (Position::new(0, -3), ["", "a", "", ""]),
            ],
        )?;

        assert!(assembly.grow_sync(true)?);

        let logged: Vec<_> = assembly
            .newly_added_tiles()
            .iter()
            .map(|t| t.position)
            .collect();
        assert_eq!(
            logged,
            vec![Position::new(1, -3), Position::new(1, 3), Position::new(5, 0)]
        );
        Ok(())
    }
}
