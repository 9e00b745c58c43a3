#[test]
fn ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/request_basic.rs");
    t.pass("tests/ui/request_custom.rs");
}
