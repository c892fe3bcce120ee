#[cfg(test)]
mod test {
    use crate::core::Direction::*;
    use crate::core::*;
    use crate::level::LevelError;
    use crate::replay::{verify_solution, ReplayReport};

    const LEVEL: &str = "42003\n00000";
    const SOLUTION: [Direction; 6] = [Down, Right, Right, Right, Right, Up];

    #[test]
    fn valid_solution_is_accepted() {
        let report = verify_solution(LEVEL, &SOLUTION).unwrap();
        assert_eq!(report, ReplayReport { first_rejected: None, move_count: 6, completed: true });
        assert!(report.is_valid_solution(6));
        assert!(!report.is_valid_solution(5));
    }

    #[test]
    fn illegal_move_stops_the_replay() {
        let report = verify_solution(LEVEL, &[Down, Down, Right]).unwrap();
        assert_eq!(report.first_rejected, Some(1));
        assert_eq!(report.move_count, 1);
        assert!(!report.completed);
        assert!(!report.is_valid_solution(3));
    }

    #[test]
    fn moves_after_reaching_exit_are_rejected() {
        let mut directions = SOLUTION.to_vec();
        directions.push(Left);
        let report = verify_solution(LEVEL, &directions).unwrap();
        assert_eq!(report.first_rejected, Some(6));
        assert!(report.completed);
        assert!(!report.is_valid_solution(7));
    }

    #[test]
    fn stepping_back_counts_as_a_move() {
        let directions = [Down, Up, Down, Right, Right, Right, Right, Up];
        let report = verify_solution(LEVEL, &directions).unwrap();
        assert!(report.is_valid_solution(8));
    }

    #[test]
    fn incomplete_solution_is_not_valid() {
        let report = verify_solution(LEVEL, &SOLUTION[..5]).unwrap();
        assert_eq!(report.first_rejected, None);
        assert!(!report.completed);
        assert!(!report.is_valid_solution(5));
    }

    #[test]
    fn malformed_level_is_an_error() {
        assert_eq!(verify_solution("42z03", &SOLUTION), Err(LevelError::InvalidCharacter { ch: 'z', row: 0, column: 2 }));
    }

    #[test]
    fn move_lists_serialize_as_plain_directions() {
        let directions: Vec<Direction> = serde_json::from_str(r#"["Down","Right","Up"]"#).unwrap();
        assert_eq!(directions, vec![Down, Right, Up]);

        let moves = vec![
            Move { direction: Right, block_id: Some(0) },
            Move { direction: Left, block_id: None },
        ];
        let json = serde_json::to_string(&moves).unwrap();
        assert_eq!(json, r#"[{"direction":"Right","block_id":0},{"direction":"Left"}]"#);
        let parsed: Vec<Move> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, moves);
    }

    #[test]
    fn report_serializes_to_json() {
        let report = verify_solution(LEVEL, &SOLUTION).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["move_count"], 6);
        assert_eq!(json["completed"], true);
        assert!(json["first_rejected"].is_null());
    }
}
