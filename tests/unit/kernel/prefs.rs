use super::*;

fn keys(items: &[&str]) -> Vec<ColumnKey> {
    items.iter().map(|k| ColumnKey::new(k)).collect()
}

fn strs(items: &[ColumnKey]) -> Vec<&str> {
    items.iter().map(ColumnKey::as_str).collect()
}

fn cols(items: &[&str]) -> Vec<ColumnDef> {
    items
        .iter()
        .map(|k| ColumnDef::new(k, k.to_uppercase()))
        .collect()
}

fn prefs(order: &[&str], hidden: &[&str]) -> ColumnPrefs {
    let mut prefs = ColumnPrefs::fresh(&keys(order));
    for key in hidden {
        prefs.set_visible(key, false);
    }
    prefs
}

#[test]
fn fresh_collapses_repeated_keys() {
    let prefs = ColumnPrefs::fresh(&keys(&["a", "b", "a", "c"]));
    assert_eq!(strs(prefs.order()), vec!["a", "b", "c"]);
    assert!(prefs.hidden().is_empty());
}

#[test]
fn reconcile_appends_new_columns_visible() {
    let prefs = prefs(&["a", "b"], &["b"]);
    let next = prefs.reconcile(&keys(&["a", "b", "c"]));

    assert_eq!(strs(next.order()), vec!["a", "b", "c"]);
    assert_eq!(strs(next.hidden()), vec!["b"]);
}

#[test]
fn reconcile_drops_stale_columns_from_order_and_hidden() {
    let prefs = prefs(&["a", "b", "c"], &["b"]);
    let next = prefs.reconcile(&keys(&["a", "c"]));

    assert_eq!(strs(next.order()), vec!["a", "c"]);
    assert!(next.hidden().is_empty());
}

#[test]
fn reconcile_is_idempotent() {
    let prefs = prefs(&["c", "x", "a"], &["x", "a"]);
    let columns = keys(&["a", "b", "c", "d"]);

    let once = prefs.reconcile(&columns);
    let twice = once.reconcile(&columns);
    assert_eq!(once, twice);
    assert_eq!(strs(once.order()), vec!["c", "a", "b", "d"]);
    assert_eq!(strs(once.hidden()), vec!["a"]);
}

#[test]
fn reconcile_keeps_user_order_over_caller_order() {
    let prefs = prefs(&["c", "a", "b"], &[]);
    let next = prefs.reconcile(&keys(&["a", "b", "c"]));
    assert_eq!(strs(next.order()), vec!["c", "a", "b"]);
}

#[test]
fn reconcile_ignores_hidden_keys_missing_from_order() {
    let saved = ColumnPrefs::parse(br#"{"order":["a","a","b"],"hidden":["c","b","b"]}"#).unwrap();
    let next = saved.reconcile(&keys(&["a", "b", "c"]));

    assert_eq!(strs(next.order()), vec!["a", "b", "c"]);
    assert_eq!(strs(next.hidden()), vec!["b"]);
}

#[test]
fn reorder_moves_single_element() {
    let mut prefs = prefs(&["a", "b", "c", "d"], &[]);
    assert!(prefs.reorder(0, 2));
    assert_eq!(strs(prefs.order()), vec!["b", "c", "a", "d"]);

    assert!(prefs.reorder(3, 0));
    assert_eq!(strs(prefs.order()), vec!["d", "b", "c", "a"]);
}

#[test]
fn reorder_out_of_bounds_or_same_slot_is_noop() {
    let mut prefs = prefs(&["a", "b", "c"], &[]);
    assert!(!prefs.reorder(1, 1));
    assert!(!prefs.reorder(3, 0));
    assert!(!prefs.reorder(0, 3));
    assert_eq!(strs(prefs.order()), vec!["a", "b", "c"]);
}

#[test]
fn set_visible_is_idempotent_and_keeps_order() {
    let mut prefs = prefs(&["a", "b", "c"], &[]);

    assert!(prefs.set_visible("b", false));
    assert!(!prefs.set_visible("b", false));
    assert_eq!(strs(prefs.hidden()), vec!["b"]);
    assert_eq!(strs(prefs.order()), vec!["a", "b", "c"]);

    assert!(prefs.set_visible("b", true));
    assert!(!prefs.set_visible("b", true));
    assert!(prefs.hidden().is_empty());
}

#[test]
fn set_visible_ignores_unknown_key() {
    let mut prefs = prefs(&["a"], &[]);
    assert!(!prefs.set_visible("zzz", false));
    assert!(prefs.hidden().is_empty());
}

#[test]
fn visible_columns_filters_hidden_in_order() {
    let columns = cols(&["a", "b", "c"]);
    let prefs = prefs(&["c", "b", "a"], &["b"]);

    let visible: Vec<&str> = prefs
        .visible_columns(&columns)
        .iter()
        .map(|c| c.title.as_str())
        .collect();
    assert_eq!(visible, vec!["C", "A"]);
}

#[test]
fn visible_columns_appends_unknown_columns() {
    let columns = cols(&["a", "new", "b"]);
    let prefs = prefs(&["b", "a"], &[]);

    let visible: Vec<&str> = prefs
        .visible_columns(&columns)
        .iter()
        .map(|c| c.title.as_str())
        .collect();
    assert_eq!(visible, vec!["B", "A", "NEW"]);
}

#[test]
fn visible_columns_skips_keys_without_columns() {
    let columns = cols(&["a"]);
    let prefs = prefs(&["gone", "a"], &[]);

    assert_eq!(prefs.visible_columns(&columns).len(), 1);
}

#[test]
fn parse_accepts_object_with_order() {
    let prefs = ColumnPrefs::parse(br#"{"order":["a","b"],"hidden":["b"]}"#).unwrap();
    assert_eq!(strs(prefs.order()), vec!["a", "b"]);
    assert_eq!(strs(prefs.hidden()), vec!["b"]);

    let no_hidden = ColumnPrefs::parse(br#"{"order":["a"]}"#).unwrap();
    assert!(no_hidden.hidden().is_empty());
}

#[test]
fn parse_rejects_malformed_values() {
    for raw in [
        &b""[..],
        b"not json",
        b"null",
        b"42",
        br#""order""#,
        br#"["a","b"]"#,
        br#"[["a","b"]]"#,
        br#"{}"#,
        br#"{"order":"a"}"#,
        br#"{"order":["a",1]}"#,
        br#"{"order":["a"],"hidden":"a"}"#,
    ] {
        assert!(
            ColumnPrefs::parse(raw).is_none(),
            "{:?} should be rejected",
            String::from_utf8_lossy(raw)
        );
    }
}

#[test]
fn persisted_form_has_order_and_hidden_fields() {
    let prefs = prefs(&["a", "b"], &["a"]);
    let bytes = prefs.to_bytes().unwrap();
    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        r#"{"order":["a","b"],"hidden":["a"]}"#
    );
}
