// tests/integration_test.rs
use version_manager::{ErrorKind, Version, VersionBump, VersionManager, VersionManagerError};

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_and_release() {
    let cases = [
        ("0.0.1", "0.0.1"),
        ("1", "1.0.0"),
        ("1.2", "1.2.0"),
        ("1.2.3", "1.2.3"),
        ("1.2.3-rc1", "1.2.3"),
        ("10.20.30+build.7", "10.20.30"),
    ];

    for (input, expected) in cases {
        let version = VersionManager::parse(input).unwrap();
        assert_eq!(
            version.release(),
            expected,
            "Parsing '{}' should release '{}'",
            input,
            expected
        );
    }
}

#[test]
fn test_parse_invalid() {
    for input in ["invalid", "", ".1.2", "v1.0.0", "a1.2.3"] {
        let err = VersionManager::parse(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat, "input: {:?}", input);
        assert_eq!(err.to_string(), "Error occurred while parsing version!");
    }
}

#[test]
fn test_parse_via_from_str() {
    let version: VersionManager = "2.7".parse().unwrap();
    assert_eq!(version.version(), Version::new(2, 7, 0));
}

// ============================================================================
// Increments
// ============================================================================

#[test]
fn test_increment_major() {
    let mut version = VersionManager::parse("1.2.3").unwrap();
    version.increment_major();
    assert_eq!(version.release(), "2.0.0");
}

#[test]
fn test_chain() {
    let mut version = VersionManager::parse("1.2.3").unwrap();
    version.increment_major().increment_minor().increment_patch();
    assert_eq!(version.release(), "2.1.1");
}

#[test]
fn test_increment_major_always_resets() {
    for input in ["0.0.0", "0.9.9", "3.0.7", "12.34.56"] {
        let mut version = VersionManager::parse(input).unwrap();
        let before = version.major();
        version.increment_major();
        assert_eq!(version.major(), before + 1);
        assert_eq!(version.minor(), 0);
        assert_eq!(version.patch(), 0);
    }
}

#[test]
fn test_generic_increment_matches_named_ones() {
    let mut named = VersionManager::parse("5.5.5").unwrap();
    named.increment_minor().increment_patch();

    let mut generic = VersionManager::parse("5.5.5").unwrap();
    for bump in ["minor", "patch"] {
        generic.increment(bump.parse::<VersionBump>().unwrap());
    }

    assert_eq!(named, generic);
}

// ============================================================================
// Rollback
// ============================================================================

#[test]
fn test_rollback() {
    let mut version = VersionManager::parse("1.2.3").unwrap();
    version.increment_major().increment_minor().increment_patch();
    assert_eq!(version.release(), "2.1.1");

    version.rollback().unwrap();
    assert_eq!(version.release(), "2.1.0");
    version.rollback().unwrap();
    assert_eq!(version.release(), "2.0.0");
    version.rollback().unwrap();
    assert_eq!(version.release(), "1.2.3");

    let err = version.rollback().unwrap_err();
    assert_eq!(err, VersionManagerError::NoHistory);
    assert_eq!(err.to_string(), "Cannot rollback!");
    assert_eq!(version.release(), "1.2.3");
}

#[test]
fn test_rollback_on_fresh_manager() {
    let mut version = VersionManager::default();
    assert_eq!(version.rollback().unwrap_err().kind(), ErrorKind::NoHistory);
    assert_eq!(version.release(), "0.0.1");
}

#[test]
fn test_rollback_after_interleaved_operations() -> anyhow::Result<()> {
    let mut version = VersionManager::parse("0.1.0")?;
    version.increment_patch().increment_patch();
    version.rollback()?;
    version.increment_minor();
    assert_eq!(version.release(), "0.2.0");

    version.rollback()?;
    assert_eq!(version.release(), "0.1.1");
    version.rollback()?;
    assert_eq!(version.release(), "0.1.0");
    assert!(!version.can_rollback());
    Ok(())
}

#[test]
fn test_manager_can_be_shared_behind_mutex() {
    use std::sync::{Arc, Mutex};
    use std::thread;

    let shared = Arc::new(Mutex::new(VersionManager::parse("1.0.0").unwrap()));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                shared.lock().unwrap().increment_patch();
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let version = shared.lock().unwrap();
    assert_eq!(version.release(), "1.0.4");
    assert_eq!(version.history_len(), 4);
}
