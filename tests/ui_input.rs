//! 메뉴 입력 처리와 카탈로그 조회 테스트.
use std::io::{Cursor, ErrorKind};

use assert_matches::assert_matches;
use heatstack::app::AppError;
use heatstack::catalog::{self, CARDS};
use heatstack::i18n::Translator;
use heatstack::ui_cli::{is_end_of_input, main_menu_from, read_line_from, MenuChoice};

#[test]
fn closed_input_is_end_of_input() {
    let mut input = Cursor::new("");
    let err = read_line_from(&mut input, "> ").expect_err("eof");
    assert_matches!(&err, AppError::Io(e) if e.kind() == ErrorKind::UnexpectedEof);
    assert!(is_end_of_input(&err));
}

#[test]
fn empty_line_is_not_end_of_input() {
    let mut input = Cursor::new("\n");
    assert_eq!(read_line_from(&mut input, "> ").expect("line"), "\n");
}

#[test]
fn main_menu_exits_when_input_closes() {
    let tr = Translator::new("en");
    let mut input = Cursor::new("");
    assert_eq!(main_menu_from(&tr, &mut input).expect("menu"), MenuChoice::Exit);

    // 잘못된 입력 뒤에 입력이 끝나도 종료
    let mut input = Cursor::new("9\n\n");
    assert_eq!(main_menu_from(&tr, &mut input).expect("menu"), MenuChoice::Exit);
}

#[test]
fn main_menu_skips_invalid_choices() {
    let tr = Translator::new("en");
    let mut input = Cursor::new("x\n 4 \n");
    assert_eq!(main_menu_from(&tr, &mut input).expect("menu"), MenuChoice::Arena);
}

#[test]
fn catalog_lookup_by_id() {
    let card = catalog::find("seawater").expect("seawater card");
    assert_eq!(card.title, "Seawater Heat Rejection");
    assert!(!card.pros.is_empty() && !card.cons.is_empty());
    assert!(catalog::find("plasma").is_none());
    assert!(catalog::find("Seawater").is_none());
    assert_eq!(CARDS.len(), 6);
}
