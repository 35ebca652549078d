//! Integration tests for loading, navigating, editing and saving boards.

use aacboard::models::{AddOutcome, Navigation, OrderedMap, Page, SymbolBoard, DEFAULT_CAPACITY};
use aacboard::parser::{
    generate_board_text, parse_board_file, parse_board_str, save_board, save_board_file,
    SkipReason,
};
use aacboard::BoardError;

mod fixtures;
use fixtures::*;

// ============================================================================
// Ordered map
// ============================================================================

#[test]
fn test_map_keeps_first_insertion_order() {
    let mut map = OrderedMap::new();
    for (i, key) in ["pear", "apple", "fig", "kiwi"].iter().enumerate() {
        assert_eq!(map.set(key.to_string(), i), None);
    }

    assert_eq!(map.size(), 4);
    let keys: Vec<&str> = map.keys_in_order().map(String::as_str).collect();
    assert_eq!(keys, vec!["pear", "apple", "fig", "kiwi"]);
}

#[test]
fn test_map_update_keeps_position() {
    let mut map = OrderedMap::new();
    map.set("a".to_string(), 1);
    map.set("b".to_string(), 2);
    assert_eq!(map.set("a".to_string(), 10), Some(1));

    assert_eq!(map.size(), 2);
    assert_eq!(map.get("a"), Ok(&10));
    assert_eq!(map.keys_in_order().next().map(String::as_str), Some("a"));
}

#[test]
fn test_map_remove_and_miss() {
    let mut map = OrderedMap::new();
    for key in ["a", "b", "c"] {
        map.set(key.to_string(), key.to_uppercase());
    }

    assert_eq!(map.remove("b"), Ok("B".to_string()));
    assert_eq!(map.size(), 2);
    let keys: Vec<&str> = map.keys_in_order().map(String::as_str).collect();
    assert_eq!(keys, vec!["a", "c"]);

    assert_eq!(map.remove("b"), Err(BoardError::key_not_found("b")));
    assert!(map.get("b").unwrap_err().is_not_found());

    map.set("b".to_string(), "again".to_string());
    let keys: Vec<&str> = map.keys_in_order().map(String::as_str).collect();
    assert_eq!(keys, vec!["a", "c", "b"]);
}

#[test]
fn test_map_growth_past_default_capacity() {
    let mut map = OrderedMap::new();
    assert_eq!(map.capacity(), DEFAULT_CAPACITY);

    for i in 0..=DEFAULT_CAPACITY {
        map.set(format!("img/{i}.png"), i);
    }

    assert_eq!(map.capacity(), DEFAULT_CAPACITY * 2);
    assert_eq!(map.size(), DEFAULT_CAPACITY + 1);
    let values: Vec<usize> = map.values().copied().collect();
    assert_eq!(values, (0..=DEFAULT_CAPACITY).collect::<Vec<_>>());
}

// ============================================================================
// Load and save
// ============================================================================

#[test]
fn test_round_trip_is_byte_identical() {
    let report = parse_board_str(SAMPLE_BOARD);
    assert!(report.is_clean());
    assert_eq!(generate_board_text(&report.board), SAMPLE_BOARD);
}

#[test]
fn test_save_lines_in_order() {
    let board = parse_board_str(SAMPLE_BOARD).board;
    let lines = save_board(&board);
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "img/food/plate.png food");
    assert_eq!(lines[3], "img/clothing/hanger.png clothing");
    assert_eq!(lines[5], ">img/clothing/shoes.png shoes");
}

#[test]
fn test_malformed_lines_reported() {
    let report = parse_board_str(MESSY_BOARD);

    let lines: Vec<usize> = report.skipped.iter().map(|s| s.line_number).collect();
    assert_eq!(lines, MESSY_SKIPPED_LINES);
    assert_eq!(report.skipped[0].reason, SkipReason::NoCategory);
    assert_eq!(report.skipped[1].reason, SkipReason::MissingText);
    assert_eq!(report.skipped[2].content, "img/empty.png");

    assert_eq!(report.board.category_count(), 1);
    assert_eq!(report.board.entry_count(), 1);
    assert_eq!(
        generate_board_text(&report.board),
        "img/food/plate.png food\n>img/food/fries.png french fries\n"
    );
}

#[test]
fn test_edited_board_survives_reload() {
    let mut board = parse_board_str(SAMPLE_BOARD).board;
    assert!(board.add_entry("img/toys/ball.png", " toys").is_applied());
    board.select("img/toys/ball.png").unwrap();
    assert!(board.add_entry("img/toys/car.png", "toy  car ").is_applied());
    assert_eq!(board.select("img/toys/car.png").unwrap(), "toy car");
    board.reset();

    let reloaded = parse_board_str(&generate_board_text(&board));
    assert!(reloaded.is_clean());
    assert_eq!(reloaded.board, board);
    assert_eq!(reloaded.board.category("img/toys/ball.png").unwrap().name(), "toys");
}

#[test]
fn test_file_round_trip_after_edit() {
    let (path, _temp_dir) = create_temp_board_file(SAMPLE_BOARD);

    let mut board = parse_board_file(&path).unwrap().board;
    board.select("img/food/plate.png").unwrap();
    assert_eq!(
        board.add_entry("img/food/apple.png", "apple"),
        AddOutcome::Added
    );
    save_board_file(&board, &path).unwrap();

    let saved = read_board(&path);
    assert!(saved.starts_with(
        "img/food/plate.png food\n>img/food/fries.png french fries\n\
         >img/food/watermelon.png watermelon\n>img/food/apple.png apple\n"
    ));
    assert!(saved.ends_with(">img/clothing/shoes.png shoes\n"));
}

#[test]
fn test_missing_file_is_error() {
    let temp_dir = create_temp_config_dir();
    let result = parse_board_file(&temp_dir.path().join("nope.txt"));
    assert!(result.is_err());
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_navigation_walkthrough() {
    let mut board = parse_board_str(SAMPLE_BOARD).board;
    assert_eq!(board.navigation(), &Navigation::Top);
    assert_eq!(board.label(), "");

    assert_eq!(board.select("img/food/plate.png").unwrap(), "");
    assert_eq!(board.label(), "food");
    assert_eq!(board.current_key(), Some("img/food/plate.png"));

    assert_eq!(board.select("img/food/fries.png").unwrap(), "french fries");

    let err = board.select("img/food/nope.png").unwrap_err();
    assert_eq!(err, BoardError::key_not_found("img/food/nope.png"));
    assert_eq!(board.label(), "food");

    board.reset();
    assert!(board.is_at_top());
    assert_eq!(board.label(), "");
}

#[test]
fn test_top_level_miss_stays_at_top() {
    let mut board = parse_board_str(SAMPLE_BOARD).board;
    assert!(board.select("img/food/fries.png").is_err());
    assert!(board.is_at_top());
}

#[test]
fn test_list_entries_follows_page() {
    let mut board = parse_board_str(SAMPLE_BOARD).board;
    assert_eq!(
        board.list_entries(),
        vec!["img/food/plate.png", "img/clothing/hanger.png"]
    );

    board.select("img/clothing/hanger.png").unwrap();
    assert_eq!(
        board.list_entries(),
        vec!["img/clothing/shirt.png", "img/clothing/shoes.png"]
    );
}

#[test]
fn test_add_category_then_select() {
    let mut board = parse_board_str(SAMPLE_BOARD).board;
    assert_eq!(
        board.add_entry("img/toys/ball.png", "toys"),
        AddOutcome::Added
    );

    assert_eq!(board.select("img/toys/ball.png").unwrap(), "");
    assert_eq!(board.label(), "toys");
    assert!(board.list_entries().is_empty());
}

#[test]
fn test_invalid_add_is_ignored() {
    let mut board = parse_board_str(SAMPLE_BOARD).board;
    let before = generate_board_text(&board);

    assert!(!board.add_entry("", "nothing").is_applied());
    assert!(!board.add_entry("img/a b.png", "space").is_applied());
    assert!(!board.add_entry(">img/x.png", "marker").is_applied());
    assert!(!board.add_entry("img/x.png", "   ").is_applied());
    assert!(!board.add_entry("img/x.png", "two\nlines").is_applied());

    assert_eq!(generate_board_text(&board), before);
}

#[test]
fn test_current_category_at_top_is_invalid_state() {
    let board = SymbolBoard::new();
    assert!(matches!(
        board.current_category(),
        Err(BoardError::InvalidState { .. })
    ));
}

#[test]
fn test_removing_open_category_resets() {
    let mut board = parse_board_str(SAMPLE_BOARD).board;
    board.select("img/food/plate.png").unwrap();

    let removed = board.remove_category("img/food/plate.png").unwrap();
    assert_eq!(removed.name(), "food");
    assert!(board.is_at_top());
    assert_eq!(board.list_entries(), vec!["img/clothing/hanger.png"]);
}

#[test]
fn test_board_through_dyn_page() {
    let mut board = parse_board_str(SAMPLE_BOARD).board;
    let page: &mut dyn Page = &mut board;

    assert!(page.contains_key("img/food/plate.png"));
    page.select("img/food/plate.png").unwrap();
    assert!(page.contains_key("img/food/fries.png"));
    assert!(!page.contains_key("img/food/plate.png"));
}
