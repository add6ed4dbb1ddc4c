// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for manifest parsing.
//!
//! Arbitrary bytes must either parse into a manifest that honors its own
//! header or be rejected with an error. Never a panic.

#![no_main]

use abstractor::Manifest;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let Ok(manifest) = text.parse::<Manifest>() else {
        return;
    };

    assert!(manifest.workers.get() >= 1);
    for reference in &manifest.documents {
        assert!(!reference.is_empty(), "empty reference accepted");
        assert_eq!(reference.trim(), reference, "reference not trimmed");
    }

    // Query terms are distinct and mirror the sorted set
    assert_eq!(manifest.query.terms.len(), manifest.query.set.len());
    for term in &manifest.query.terms {
        assert!(manifest.query.set.contains(term));
    }
});
