use crate::tests::completion_dsl::index;
use crate::{
    comment_lines, hover_token, indent_count, on_statement_terminator,
    strip_trailing_class_names, uncomment_lines, untabify,
};
use decoda_analyzer::ApiTable;

fn apis() -> ApiTable {
    index()
        .apis(&["void Player.Jump()", "Weapon Entity:weapon()"])
        .build()
        .apis
}

#[test]
fn placeholder_class_segment_is_removed() {
    let apis = apis();
    assert_eq!(
        strip_trailing_class_names(&apis, "obj.Player.Jump();").as_deref(),
        Some("obj.Jump();")
    );
    assert_eq!(
        strip_trailing_class_names(&apis, "\tlocal w = e:Entity:weapon();").as_deref(),
        Some("\tlocal w = e:weapon();")
    );
}

#[test]
fn non_class_segments_are_kept_verbatim() {
    let apis = apis();
    assert_eq!(
        strip_trailing_class_names(&apis, "a.b:c(d.e);").as_deref(),
        Some("a.b:c(d.e);")
    );
    assert_eq!(
        strip_trailing_class_names(&apis, "player.Jump();").as_deref(),
        Some("player.Jump();")
    );
}

#[test]
fn empty_segments_are_collapsed() {
    assert_eq!(
        strip_trailing_class_names(&apis(), "a..b;").as_deref(),
        Some("a.b;")
    );
}

#[test]
fn line_terminator_is_preserved() {
    assert_eq!(
        strip_trailing_class_names(&apis(), "o.Player.Jump();\r\n").as_deref(),
        Some("o.Jump();\r\n")
    );
}

#[test]
fn line_without_separator_is_untouched() {
    assert_eq!(strip_trailing_class_names(&apis(), "x = 1;"), None);
    assert_eq!(strip_trailing_class_names(&apis(), "x = 1;\n.Player"), None);
}

#[test]
fn statement_terminator_reports_only_changes() {
    let apis = apis();
    assert_eq!(
        on_statement_terminator(&apis, "o.Player.Jump();").as_deref(),
        Some("o.Jump();")
    );
    assert_eq!(on_statement_terminator(&apis, "o.Jump();"), None);
    assert_eq!(on_statement_terminator(&apis, "x = 1;"), None);
}

#[test]
fn lone_end_loses_one_tab() {
    let apis = apis();
    assert_eq!(
        on_statement_terminator(&apis, "\t\tend\n").as_deref(),
        Some("\tend\n")
    );
    assert_eq!(on_statement_terminator(&apis, "end"), None);
}

#[test]
fn indent_follows_blocks_and_brackets() {
    assert_eq!(indent_count("function foo()"), 1);
    assert_eq!(indent_count("\tif x then"), 2);
    assert_eq!(indent_count("for i = 1, 10 do"), 1);
    assert_eq!(indent_count("local t = {"), 1);
    assert_eq!(indent_count("\t\tcall(a, {b}"), 3);
    assert_eq!(indent_count("})"), 0);
    assert_eq!(indent_count("x = 1"), 0);
}

#[test]
fn commenting_uses_the_shallowest_indentation() {
    let block = "\tif x then\n\t\tf()\n\n\tend\n";
    let commented = comment_lines(block);
    assert_eq!(commented, "\t--if x then\n\t--\tf()\n\n\t--end\n");
    assert_eq!(uncomment_lines(&commented), block);
}

#[test]
fn commenting_a_blank_block_changes_nothing() {
    assert_eq!(comment_lines("  \n\t\n"), "  \n\t\n");
    assert_eq!(comment_lines(""), "");
}

#[test]
fn uncommenting_only_touches_leading_markers() {
    assert_eq!(
        uncomment_lines("--  f()\n  -- c\nx -- y\n----z"),
        "  f()\n   c\nx -- y\n--z"
    );
}

#[test]
fn untabify_reports_whether_anything_changed() {
    assert_eq!(
        untabify("\tx = 1\n\t\ty", 4).as_deref(),
        Some("    x = 1\n        y")
    );
    assert_eq!(untabify("\t", 2).as_deref(), Some("  "));
    assert_eq!(untabify("no tabs here", 4), None);
}

#[test]
fn hover_joins_on_dots_only() {
    let line = "local v = obj:pos.x";
    assert_eq!(hover_token(line, line.len() - 1), Some("pos.x"));
    assert_eq!(hover_token(line, line.find("obj").unwrap()), Some("obj"));
    assert_eq!(hover_token(line, line.find(':').unwrap()), None);
}
