use crate::api::{ApiEntry, parse_declaration};

fn parsed(line: &str) -> (String, String, String) {
    let entry = parse_declaration(line).unwrap_or_else(|| panic!("expected an entry for {line:?}"));
    (entry.return_type_name, entry.class_owner, entry.member_name)
}

fn owned(ret: &str, class: &str, member: &str) -> (String, String, String) {
    (ret.to_string(), class.to_string(), member.to_string())
}

#[test]
fn return_type_class_and_member_with_args() {
    assert_eq!(parsed("Ret Class.Func(args)"), owned("Ret", "Class", "Func"));
    assert_eq!(parsed("Entity World.spawn(name, x, y)"), owned("Entity", "World", "spawn"));
}

#[test]
fn colon_separator_splits_like_dot() {
    assert_eq!(parsed("Class:Func"), parsed("Class.Func"));
    assert_eq!(parsed("Ret Class:Func(a)"), owned("Ret", "Class", "Func"));
}

#[test]
fn first_separator_wins_even_inside_args() {
    assert_eq!(parsed("Vec math:lerp(a.x, b)"), owned("Vec", "math", "lerp"));
    assert_eq!(parsed("a.b:c()"), owned("", "a", "b:c"));
}

#[test]
fn free_function_with_and_without_return_type() {
    assert_eq!(parsed("Entity spawn()"), owned("Entity", "", "spawn"));
    assert_eq!(parsed("print(s)"), owned("", "", "print"));
    assert_eq!(parsed("dofile"), owned("", "", "dofile"));
}

#[test]
fn raw_text_is_the_normalized_line() {
    let entry = parse_declaration("\tvoid\tPlayer.Jump( height )  \r\n").unwrap();
    assert_eq!(
        entry,
        ApiEntry {
            class_owner: "Player".into(),
            member_name: "Jump".into(),
            return_type_name: "void".into(),
            raw_text: "void Player.Jump( height )".into(),
        }
    );
}

#[test]
fn blank_comment_and_memberless_lines_are_dropped() {
    for line in ["", "   ", "\t\r\n", "-- comment", "// comment", "Class.", "Ret Class:(x)", "Class.  "] {
        assert_eq!(parse_declaration(line), None, "line {line:?}");
    }
}

#[test]
fn class_part_keeps_only_the_word_after_return_type() {
    assert_eq!(parsed("number   Vector.length()"), owned("number", "Vector", "length"));
}

#[test]
fn member_name_is_trimmed_before_args() {
    assert_eq!(parsed("Player.Jump (h)"), owned("", "Player", "Jump"));
}
