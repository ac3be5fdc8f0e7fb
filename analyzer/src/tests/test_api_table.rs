use crate::ApiTable;
use crate::tests::common::trim_indent;

fn table(source: &str) -> ApiTable {
    ApiTable::from_source(&trim_indent(source))
}

fn members(table: &ApiTable) -> Vec<(&str, &str)> {
    table
        .iter()
        .map(|e| (e.class_owner.as_str(), e.member_name.as_str()))
        .collect()
}

#[test]
fn entries_iterate_in_declaration_order() {
    let t = table(
        r#"
        -- player api
        void Player.Move(x, y)
        void Player.Jump()

        // free functions
        Entity spawn(name)
        "#,
    );

    assert_eq!(
        members(&t),
        vec![("Player", "Move"), ("Player", "Jump"), ("", "spawn")]
    );
}

#[test]
fn duplicate_keys_collapse_to_first_declaration() {
    let t = table(
        r#"
        void Player.Jump()
        bool Player:Jump(height)
        void player.Jump()
        "#,
    );

    assert_eq!(t.len(), 2);
    assert_eq!(t.get("Player", "Jump").unwrap().raw_text, "void Player.Jump()");
    assert_eq!(t.get("player", "Jump").unwrap().return_type_name, "void");
}

#[test]
fn known_classes_are_case_sensitive_and_distinct() {
    let t = table(
        r#"
        Player.Jump()
        World.spawn()
        Player.Move()
        print(s)
        "#,
    );

    assert_eq!(t.classes(), vec!["Player", "World"]);
    assert!(t.is_class("Player"));
    assert!(!t.is_class("player"));
    assert!(!t.is_class("print"));
    assert!(!t.is_class(""));
}

#[test]
fn members_and_free_functions_filter_by_owner() {
    let t = table(
        r#"
        Player.Jump()
        print(s)
        World.spawn()
        Player.Move()
        "#,
    );

    let player: Vec<&str> = t.members_of("Player").map(|e| e.member_name.as_str()).collect();
    assert_eq!(player, vec!["Jump", "Move"]);
    let free: Vec<&str> = t.free_functions().map(|e| e.member_name.as_str()).collect();
    assert_eq!(free, vec!["print"]);
}

#[test]
fn extend_reports_only_new_entries() {
    let mut t = ApiTable::new();
    assert_eq!(t.extend_from_source("a.b\na.c\n-- x\n"), 2);
    assert_eq!(t.extend_from_source("a.b\na.d\n"), 1);
    assert_eq!(t.len(), 3);

    t.clear();
    assert!(t.is_empty());
}
