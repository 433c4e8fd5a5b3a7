#[test]
fn shop_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/shop_error_pass.rs");
    t.pass("tests/ui/shop_error_kind.rs");
}
