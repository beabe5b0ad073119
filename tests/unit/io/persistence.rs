//! Tests for JSON save and restore

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use tamtam::algorithm::assembly::TileAssembly;
    use tamtam::algorithm::driver::GrowthDriver;
    use tamtam::io::persistence::{from_json, load_assembly, save_assembly, to_json};
    use tamtam::io::seed::l_shaped_boundary;
    use tamtam::spatial::Position;
    use tamtam::tiles::crt::crt_tile_set;
    use tamtam::{AlgorithmError, Result};

    fn grown() -> Result<TileAssembly> {
        let mut assembly = TileAssembly::new(crt_tile_set(2, 3)?, l_shaped_boundary(4)?, 2)?;
        GrowthDriver::new(true).run_to_convergence(&mut assembly)?;
        Ok(assembly)
    }

    // Tests the string form reloads to an equal assembly
    #[test]
    fn test_json_round_trip() -> Result<()> {
        let assembly = grown()?;

        let reloaded = from_json(&to_json(&assembly)?)?;

        assert_eq!(reloaded, assembly);
        assert_eq!(reloaded.frontier(), assembly.frontier());
        Ok(())
    }

    // Tests the file form reloads and keeps growing identically
    #[test]
    fn test_file_round_trip() -> Result<()> {
        let dir = tempfile::tempdir().map_err(|e| {
            tamtam::io::error::file_system_error("tempdir", "create directory", e)
        })?;
        let path = dir.path().join("nested").join("assembly.json");
        let assembly = grown()?;

        save_assembly(&assembly, &path)?;
        let mut reloaded = load_assembly(&path)?;

        assert_eq!(reloaded, assembly);
        assert!(!reloaded.grow_sync(true)?);
        Ok(())
    }

    // Tests a missing file reports the path
    #[test]
    fn test_load_missing_file() {
        let result = load_assembly(std::path::Path::new("/nonexistent/assembly.json"));

        assert!(matches!(result, Err(AlgorithmError::FileSystem { .. })));
    }

    // Tests malformed records surface as serialization errors
    #[test]
    fn test_malformed_record() {
        let records = [
            // unparseable position key
            r#"{"tile_set":{},"tile_map":{"[x,0]":["","","",""]},"threshold":1}"#,
            // threshold above four bonds
            r#"{"tile_set":{},"tile_map":{},"threshold":5}"#,
            // missing threshold
            r#"{"tile_set":{},"tile_map":{}}"#,
            // wrong glue pattern arity
            r#"{"tile_set":{"a":["","",""]},"tile_map":{},"threshold":1}"#,
        ];

        for record in records {
            let result = from_json(record);
            assert!(
                matches!(result, Err(AlgorithmError::Serialization(_))),
                "{record} -> {result:?}"
            );
        }
    }

    // Tests tiles on the edge of the coordinate range load without wrapping
    #[test]
    fn test_record_at_grid_edge() -> Result<()> {
        let mut assembly = from_json(
            r#"{"tile_set":{},"tile_map":{"[9223372036854775807,0]":["a","a","a","a"],"[-9223372036854775808,-9223372036854775808]":["b","b","b","b"]},"threshold":1}"#,
        )?;

        assert_eq!(assembly.size(), 2);
        let expected: HashSet<Position> = [
            Position::new(i64::MAX, 1),
            Position::new(i64::MAX, -1),
            Position::new(i64::MAX - 1, 0),
            Position::new(i64::MIN, i64::MIN + 1),
            Position::new(i64::MIN + 1, i64::MIN),
        ]
        .into_iter()
        .collect();
        assert_eq!(assembly.frontier(), &expected);
        assert!(!assembly.grow_sync(true)?);

        let reloaded = from_json(&to_json(&assembly)?)?;
        assert_eq!(reloaded, assembly);
        Ok(())
    }
}
