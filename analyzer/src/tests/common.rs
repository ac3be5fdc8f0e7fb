use crate::symbol::{Symbol, SymbolKind};
use crate::{ApiTable, Index, SymbolTable};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Strips the common indentation of a raw-string fixture, dropping its first (empty) line.
pub fn trim_indent(s: &str) -> String {
    let lines: Vec<&str> = s.lines().collect();
    let min_indent = lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.chars().take_while(|c| c.is_whitespace()).count())
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .skip(1)
        .map(|l| {
            if l.len() >= min_indent {
                &l[min_indent..]
            } else {
                *l
            }
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

#[test]
fn test_trim_indent() {
    let s = r#"
        void Player.Jump()
            -- nested
        Player:Move(x, y)"#;
    let expected = "void Player.Jump()\n    -- nested\nPlayer:Move(x, y)";
    assert_eq!(expected, trim_indent(s));
}

pub fn index(apis: &str, symbols: Vec<Symbol>) -> Index {
    init_tracing();
    Index {
        apis: ApiTable::from_source(&trim_indent(apis)),
        symbols: symbols.into_iter().collect::<SymbolTable>(),
        ..Index::default()
    }
}

pub fn ret(name: &str) -> Symbol {
    Symbol::new(SymbolKind::ReturnIdentifier, name)
}

pub fn call(name: &str) -> Symbol {
    Symbol::new(SymbolKind::FunctionCall, name)
}

pub fn table(name: &str) -> Symbol {
    Symbol::new(SymbolKind::Table, name)
}

pub fn table_func(name: &str) -> Symbol {
    Symbol::new(SymbolKind::TableFunction, name)
}

pub fn func(name: &str) -> Symbol {
    Symbol::new(SymbolKind::Function, name)
}
