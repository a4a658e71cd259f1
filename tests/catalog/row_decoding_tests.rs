use product_query_api::catalog::infrastructure::persistence::repositories::postgres::sqlx_product_repository_impl::SqlxProductRepositoryImpl;
use serde_json::Value;

#[test]
fn text_fallback_passes_valid_utf8_through() {
    assert_eq!(
        SqlxProductRepositoryImpl::text_fallback(b"cama_mesa_banho"),
        Value::from("cama_mesa_banho")
    );
}

#[test]
fn text_fallback_produces_a_string_for_invalid_utf8() {
    let decoded = SqlxProductRepositoryImpl::text_fallback(&[0x66, 0x6f, 0xff, 0x6f]);

    assert_eq!(decoded, Value::from("fo\u{fffd}o"));
}

#[test]
fn text_fallback_never_yields_null() {
    assert!(SqlxProductRepositoryImpl::text_fallback(&[]).is_string());
    assert!(SqlxProductRepositoryImpl::text_fallback(&[0x00, 0xc3]).is_string());
}
