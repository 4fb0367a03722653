use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_components_lists_registry() {
    cargo_bin_cmd!("sage")
        .arg("components")
        .assert()
        .success()
        .stdout(predicate::str::contains("ProductGrid"))
        .stdout(predicate::str::contains("ComparisonTable"))
        .stdout(predicate::str::contains("CheckoutWizard"))
        .stdout(predicate::str::contains("VirtualTryOn"));
}

#[test]
fn test_components_includes_descriptions() {
    cargo_bin_cmd!("sage")
        .arg("components")
        .assert()
        .success()
        .stdout(predicate::str::contains("grid"));
}
