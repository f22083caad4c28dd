use super::*;

#[test]
fn display_prefixes_are_stable() {
    let e = KinegraphError::validation("bad input");
    assert_eq!(e.to_string(), "validation error: bad input");
    let e = KinegraphError::interpolation("bad span");
    assert_eq!(e.to_string(), "interpolation error: bad span");
}

#[test]
fn collaborator_variants_carry_indices() {
    let e = KinegraphError::Capture {
        index: 3,
        source: anyhow::anyhow!("view gone"),
    };
    assert_eq!(e.to_string(), "capture failed for key 3: view gone");

    let e = KinegraphError::Apply {
        frame: 12,
        source: anyhow::anyhow!("detached"),
    };
    assert_eq!(e.to_string(), "apply failed at frame 12: detached");

    let e = KinegraphError::Export {
        frame: 7,
        written: 7,
        source: anyhow::anyhow!("disk full"),
    };
    assert_eq!(
        e.to_string(),
        "export failed at frame 7 after 7 frames written: disk full"
    );
}

#[test]
fn anyhow_converts_into_other() {
    fn fallible() -> KinegraphResult<()> {
        Err(anyhow::anyhow!("io"))?;
        Ok(())
    }
    assert!(matches!(fallible(), Err(KinegraphError::Other(_))));
}
