use product_query_api::catalog::domain::model::value_objects::column_selection::{
    ColumnSelection, DEFAULT_COLUMNS,
};

#[test]
fn parse_keeps_allowlisted_columns_in_request_order() {
    let selection = ColumnSelection::parse(Some("product_weight_g,product_category_name"));

    assert_eq!(
        selection.columns(),
        ["product_weight_g", "product_category_name"]
    );
}

#[test]
fn parse_trims_whitespace_per_entry() {
    let selection = ColumnSelection::parse(Some(" product_photos_qty , product_height_cm "));

    assert_eq!(
        selection.columns(),
        ["product_photos_qty", "product_height_cm"]
    );
}

#[test]
fn parse_drops_unknown_entries_silently() {
    let selection =
        ColumnSelection::parse(Some("product_weight_g,password,1=1;--,product_width_cm"));

    assert_eq!(selection.columns(), ["product_weight_g", "product_width_cm"]);
}

#[test]
fn parse_preserves_duplicates() {
    let selection = ColumnSelection::parse(Some("product_weight_g,product_weight_g"));

    assert_eq!(selection.columns(), ["product_weight_g", "product_weight_g"]);
}

#[test]
fn parse_substitutes_default_pair_when_nothing_valid_remains() {
    assert_eq!(ColumnSelection::parse(None).columns(), DEFAULT_COLUMNS);
    assert_eq!(ColumnSelection::parse(Some("")).columns(), DEFAULT_COLUMNS);
    assert_eq!(
        ColumnSelection::parse(Some("nope,also_nope")).columns(),
        DEFAULT_COLUMNS
    );
}
