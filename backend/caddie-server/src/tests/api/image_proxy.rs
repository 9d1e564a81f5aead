use crate::api::image_proxy::image_proxy::product_name_from_url;

#[test]
fn test_product_name_strips_extension_and_separators() {
    assert_eq!(
        product_name_from_url("https://cdn.example.com/imgs/ping-g430_7iron.jpg"),
        Some("ping g430 7iron".to_string())
    );
}

#[test]
fn test_product_name_ignores_query_and_fragment() {
    assert_eq!(
        product_name_from_url("https://cdn.example.com/t200.png?w=400&h=300#main"),
        Some("t200".to_string())
    );
}

#[test]
fn test_product_name_without_extension() {
    assert_eq!(
        product_name_from_url("https://cdn.example.com/rogue-st-max"),
        Some("rogue st max".to_string())
    );
}

#[test]
fn test_product_name_empty_for_bare_host() {
    assert_eq!(product_name_from_url("https://cdn.example.com/"), None);
}
