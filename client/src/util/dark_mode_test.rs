#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn apply_is_noop_but_callable() {
    apply(ThemeState { dark: false });
    apply(ThemeState { dark: true });
    clear();
}

