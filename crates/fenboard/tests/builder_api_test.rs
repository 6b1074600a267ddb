//! Integration tests for the DiagramBuilder API

use fenboard::{
    BlockKind, DiagramBuilder, FenboardError,
    annotation::{Annotation, Palette},
    board::Chessboard,
    config::AppConfig,
    orientation::Orientation,
};

const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

const GAME: &str = r#"[Event "Casual"]
[White "A"]
[Black "B"]

1. e4 e5 2. Nf3 {develops} Nc6 3. Bb5 (3. Bc4 Bc5) a6 1/2-1/2
"#;

#[test]
fn test_builder_api_exists() {
    let _builder = DiagramBuilder::default();
}

#[test]
fn test_parse_scenario_block() {
    let builder = DiagramBuilder::default();
    let block = builder
        .parse_block(&format!("{START}\nannotations: He4 Ae2-e4"))
        .expect("Failed to parse block");

    assert_eq!(block.position, START);
    assert_eq!(block.orientation, Orientation::White);
    assert_eq!(
        block.annotations,
        vec![
            Annotation::Highlight {
                square: "e4".parse().unwrap(),
                color: Palette::Red.color(),
            },
            Annotation::Arrow {
                from: "e2".parse().unwrap(),
                to: "e4".parse().unwrap(),
                color: Palette::Yellow.color(),
            },
        ]
    );

    // The placement-only line loads as the standard start position.
    let board = Chessboard::from_fen(&block.position, false).unwrap();
    assert_eq!(board, Chessboard::from_pgn("", Some(0)).unwrap());
}

#[test]
fn test_render_block() {
    let builder = DiagramBuilder::default();
    let svg = builder
        .render_block(&format!("fen: {START}\norientation: black\nannotations: He4/g !!f3 junk"))
        .expect("Failed to render block");

    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains("data-orientation=\"black\""));
    assert!(svg.contains("data-icon=\"brilliant\""));
    assert_eq!(svg.matches("data-piece=").count(), 32);
}

#[test]
fn test_render_block_uses_configured_width() {
    let config: AppConfig = toml::from_str("[board]\nwidth = 400").unwrap();
    let svg = DiagramBuilder::new(config).render_block(START).unwrap();
    assert!(svg.contains("width=\"400\""));
    assert!(svg.contains("viewBox=\"0 0 320 320\""));
}

#[test]
fn test_render_block_accepts_unreplayed_fen_fields() {
    let builder = DiagramBuilder::default();

    // White has just given check; the side to move is taken as written.
    let svg = builder
        .render_block("4k3/8/8/8/8/8/8/4R1K1\nannotations: He8")
        .expect("Check delivered by the side to move should render");
    assert_eq!(svg.matches("data-piece=").count(), 3);

    let svg = builder
        .render_block("fen: 4k3/8/8/8/8/8/8/4K3 w KQkq e6 0 1")
        .expect("Stale castling and en passant fields should render");
    assert_eq!(svg.matches("data-piece=").count(), 2);
}

#[test]
fn test_render_block_errors() {
    let builder = DiagramBuilder::default();

    let err = builder
        .render_block(&format!("{START}\norientation: up"))
        .unwrap_err();
    assert!(matches!(err, FenboardError::Parse { .. }));

    let err = builder.render_block("not a position").unwrap_err();
    assert!(matches!(err, FenboardError::InvalidPosition(_)));

    let config: AppConfig = toml::from_str("[style]\nlight_square_color = \"nope\"").unwrap();
    let err = DiagramBuilder::new(config).render_block(START).unwrap_err();
    assert!(matches!(err, FenboardError::Config(_)));
}

#[test]
fn test_render_block_or_error_never_fails() {
    let builder = DiagramBuilder::default();

    let svg = builder.render_block_or_error(BlockKind::Fen, "8/8/8/8/8/8/8/8");
    assert!(svg.contains("data-error=\"invalid_position\""));

    let svg = builder.render_block_or_error(BlockKind::Pgn, "1. e4 e4");
    assert!(svg.contains("data-error=\"invalid_position\""));

    let svg = builder.render_block_or_error(BlockKind::Pgn, "ply: x\n1. e4");
    assert!(svg.contains("data-error=\"parse\""));

    let svg = builder.render_block_or_error(BlockKind::Fen, START);
    assert!(!svg.contains("data-error"));
}

#[test]
fn test_render_pgn_block_plies() {
    let builder = DiagramBuilder::default();

    let end = builder.render_pgn_block(GAME, None).unwrap();
    assert!(end.contains("Move 3: ...a6 (6/6)"));

    let ply_directive = builder
        .render_pgn_block(&format!("ply: 2\n{GAME}"), None)
        .unwrap();
    assert!(ply_directive.contains("Move 1: ...e5 (2/6)"));

    let overridden = builder
        .render_pgn_block(&format!("ply: 2\n{GAME}"), Some(0))
        .unwrap();
    assert!(overridden.contains("Starting position (0/6)"));
}

#[test]
fn test_render_pgn_block_show_move() {
    let config: AppConfig = toml::from_str("[board]\nshow_move = \"arrow\"").unwrap();
    let builder = DiagramBuilder::new(config);

    let svg = builder.render_pgn_block(GAME, Some(1)).unwrap();
    assert!(svg.contains("data-layer=\"highlights\""));
    assert!(svg.contains("data-layer=\"arrows\""));

    // Nothing to show at the start position.
    let svg = builder.render_pgn_block(GAME, Some(0)).unwrap();
    assert!(!svg.contains("data-layer=\"arrows\""));
}

#[test]
fn test_render_pgn_plies() {
    let builder = DiagramBuilder::default();
    let documents = builder.render_pgn_plies(GAME).unwrap();

    assert_eq!(documents.len(), 7);
    assert!(documents[0].contains("Starting position"));
    assert!(documents[6].contains("(6/6)"));
}

#[test]
fn test_pgn_with_setup_position() {
    let pgn = "[SetUp \"1\"]\n[FEN \"4k3/8/8/8/8/8/4P3/4K3 w - - 0 1\"]\n\n1. e4 Kd7";
    let builder = DiagramBuilder::default();

    let start = builder.render_pgn_block(pgn, Some(0)).unwrap();
    assert_eq!(start.matches("data-piece=").count(), 3);
}
