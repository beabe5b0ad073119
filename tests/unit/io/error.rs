//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use tamtam::AlgorithmError;
    use tamtam::spatial::Position;
    use tamtam::tiles::GluePattern;

    // Tests NonDeterminism names the position and the candidates
    #[test]
    fn test_non_determinism_message() {
        let error = AlgorithmError::NonDeterminism {
            position: Position::new(3, -1),
            candidates: vec!["07".to_string(), "11".to_string()],
        };

        let message = error.to_string();
        assert!(message.contains("(3, -1)"));
        assert!(message.contains("07, 11"));
    }

    // Tests NotFound shows the pattern
    #[test]
    fn test_not_found_message() {
        let error = AlgorithmError::NotFound {
            pattern: GluePattern::from_labels(["1", "", "0", "2"]),
        };

        assert!(error.to_string().contains("[1 - 0 2]"));
    }

    // Tests Configuration error contains all fields
    #[test]
    fn test_configuration_message() {
        let error = tamtam::io::error::invalid_parameter("p, q", &"4, 6", &"must be coprime");

        let message = error.to_string();
        assert!(message.contains("p, q"));
        assert!(message.contains("4, 6"));
        assert!(message.contains("must be coprime"));
    }

    // Tests error source chaining for I/O failures
    #[test]
    fn test_file_system_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = tamtam::io::error::file_system_error("/tmp/a.json", "read assembly", io_error);

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("/tmp/a.json"));
        assert!(message.contains("read assembly"));
    }

    // Tests JSON errors convert into serialization errors
    #[test]
    fn test_serialization_from_json_error() {
        let json_error = serde_json::from_str::<u32>("nope").err();

        let error = json_error.map(AlgorithmError::from);

        assert!(matches!(error, Some(AlgorithmError::Serialization(_))));
        assert!(error.is_some_and(|e| e.source().is_some()));
    }
}
