use super::*;

#[test]
fn parse_known_paths() {
    assert_eq!(Route::parse("/"), Route::Dashboard);
    assert_eq!(Route::parse("/table"), Route::Table);
    assert_eq!(Route::parse("/table/"), Route::Table);
    assert_eq!(Route::parse("pro-table"), Route::ProTable);
}

#[test]
fn unknown_paths_redirect_to_dashboard() {
    assert_eq!(Route::parse("/nope"), Route::Dashboard);
    assert_eq!(Route::parse(""), Route::Dashboard);
}

#[test]
fn path_roundtrips_through_parse() {
    for route in [Route::Dashboard, Route::Table, Route::ProTable] {
        assert_eq!(Route::parse(route.path()), route);
    }
}
