use super::*;

#[test]
fn code_challenge_matches_rfc_7636_appendix_b() {
    let verifier = "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk";
    assert_eq!(code_challenge(verifier), "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM");
}

#[test]
fn generate_verifier_is_64_unreserved_chars() {
    let verifier = generate_verifier();
    assert_eq!(verifier.len(), 64);
    assert!(verifier.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_verifier_is_not_constant() {
    assert_ne!(generate_verifier(), generate_verifier());
}
