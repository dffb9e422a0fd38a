#[test]
fn derives_compile() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/*.rs");
}
