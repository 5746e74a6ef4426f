mod tests {
    use word_clock_composer::catalog::{Segment, SegmentCatalog, Word};
    use word_clock_composer::topology::{GridTopology, Wiring};
    use word_clock_composer::Error;

    #[test]
    fn test_row_major() {
        let grid = GridTopology::new(4, 3, Wiring::RowMajor);
        assert_eq!(grid.map(0, 0), 0);
        assert_eq!(grid.map(1, 0), 4);
        assert_eq!(grid.map(2, 3), 11);
    }

    #[test]
    fn test_row_major_alternating() {
        let grid = GridTopology::new(10, 10, Wiring::RowMajorAlternating);
        assert_eq!(grid.map(0, 0), 0);
        assert_eq!(grid.map(0, 3), 3);
        assert_eq!(grid.map(1, 0), 19);
        assert_eq!(grid.map(1, 9), 10);
        assert_eq!(grid.map(2, 0), 20);
    }

    #[test]
    fn test_row_major_alternating_180() {
        let grid = GridTopology::WORD_CLOCK_10X10;
        // IT sits in the top-left corner, at the far end of the strip
        assert_eq!(grid.map(0, 0), 99);
        assert_eq!(grid.map(0, 1), 80);
        // Strip enters at the top-right corner and runs down the last column
        assert_eq!(grid.map(0, 9), 0);
        assert_eq!(grid.map(1, 9), 1);
        assert_eq!(grid.map(9, 9), 9);
        // ...then back up the column before it
        assert_eq!(grid.map(9, 8), 10);
        assert_eq!(grid.map(0, 8), 19);
        assert_eq!(grid.map(9, 0), 90);
    }

    #[test]
    fn test_word_clock_runs_follow_columns() {
        let grid = GridTopology::WORD_CLOCK_10X10;
        for column in 0..10 {
            for row in 0..9 {
                let a = grid.map(row, column);
                let b = grid.map(row + 1, column);
                assert_eq!(a.abs_diff(b), 1, "row {row} column {column}");
            }
        }
    }

    #[test]
    fn test_non_square_alternating_180_is_a_permutation() {
        let grid = GridTopology::new(4, 3, Wiring::RowMajorAlternating180);
        let mut seen = [false; 12];
        for row in 0..3 {
            for column in 0..4 {
                let index = grid.map(row, column);
                assert!(!seen[index], "row {row} column {column}");
                seen[index] = true;
            }
        }
        assert!(seen.iter().all(|hit| *hit));
        assert_eq!(grid.map(0, 3), 0);
        assert_eq!(grid.map(0, 0), 11);
    }

    #[test]
    fn test_columns_are_physically_adjacent() {
        for wiring in [Wiring::RowMajor, Wiring::RowMajorAlternating] {
            let grid = GridTopology::new(10, 10, wiring);
            for row in 0..10 {
                for column in 0..9 {
                    let a = grid.map(row, column);
                    let b = grid.map(row, column + 1);
                    assert_eq!(a.abs_diff(b), 1, "{wiring:?} row {row} column {column}");
                }
            }
        }
    }

    #[test]
    fn test_mapping_is_a_permutation() {
        let grid = GridTopology::WORD_CLOCK_10X10;
        let mut seen = [false; 100];
        for row in 0..10 {
            for column in 0..10 {
                let index = grid.map(row, column);
                assert!(!seen[index]);
                seen[index] = true;
            }
        }
        assert!(seen.iter().all(|hit| *hit));
        assert_eq!(grid.pixel_count(), 100);
    }

    #[test]
    fn test_out_of_range_is_clamped_or_rejected() {
        let grid = GridTopology::WORD_CLOCK_10X10;
        assert_eq!(grid.map(12, 15), grid.map(9, 9));
        assert_eq!(grid.try_map(10, 0), None);
        assert_eq!(grid.try_map(0, 10), None);
        assert_eq!(grid.try_map(0, 0), Some(99));
    }

    #[test]
    fn test_default_catalog_fits_the_face() {
        let catalog = SegmentCatalog::DEFAULT;
        assert_eq!(catalog.validate(10, 10), Ok(()));
        assert_eq!(
            catalog.validate(9, 10),
            Err(Error::SegmentOutOfGrid {
                row: 0,
                start_column: 6,
                end_column: 9
            })
        );
    }

    #[test]
    fn test_custom_catalog_validation() {
        let mut segments = [Segment::new(0, 0, 0); Word::COUNT];
        segments[Word::Half as usize] = Segment::new(1, 3, 2);
        let catalog = SegmentCatalog::new(segments);
        assert!(catalog.validate(10, 10).is_err());
    }

    #[test]
    fn test_segment_columns() {
        let segment = SegmentCatalog::DEFAULT.segment(Word::Quarter);
        assert_eq!(segment.light_count(), 7);
        assert_eq!(segment.columns().collect::<Vec<_>>(), [0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(Word::hour(12), Some(Word::HourTwelve));
        assert_eq!(Word::hour(0), None);
    }
}
