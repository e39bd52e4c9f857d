//! Tree shapes the type system must keep unrepresentable

#[test]
fn test_structural_misuse_does_not_compile() {
    let cases = trybuild::TestCases::new();
    cases.compile_fail("tests/compile_fail/*.rs");
}
