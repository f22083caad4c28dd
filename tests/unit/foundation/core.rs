use super::*;

#[test]
fn fps_rejects_zero() {
    assert!(Fps::new(0).is_err());
    assert_eq!(Fps::new(24).map(Fps::get).ok(), Some(24));
}

#[test]
fn fps_period_is_millis_quotient() {
    let fps = Fps::new(10).unwrap();
    assert_eq!(fps.period(), std::time::Duration::from_millis(100));
    let fps = Fps::new(30).unwrap();
    assert_eq!(fps.period(), std::time::Duration::from_millis(33));
}

#[test]
fn fps_period_never_reaches_zero() {
    let fps = Fps::new(2000).unwrap();
    assert_eq!(fps.period(), std::time::Duration::from_millis(1));
}

#[test]
fn default_fps_is_thirty() {
    assert_eq!(Fps::default().get(), 30);
    assert_eq!(DEFAULT_FPS.get(), 30);
}

#[test]
fn minter_never_reuses_ids() {
    let mut minter = IdMinter::new();
    let a = minter.mint();
    let b = minter.mint();
    let c = minter.mint();
    assert_eq!((a, b, c), (0, 1, 2));
}

#[test]
fn rgba_alpha_helpers() {
    let c = Rgba::opaque(10, 20, 30);
    assert_eq!(c.a, 255);
    assert_eq!(c.with_alpha(0), Rgba::new(10, 20, 30, 0));
    assert_eq!(Rgba::transparent(), Rgba::new(0, 0, 0, 0));
}

#[test]
fn ids_order_by_inner_value() {
    let mut ids = vec![NodeId(3), NodeId(1), NodeId(2)];
    ids.sort();
    assert_eq!(ids, vec![NodeId(1), NodeId(2), NodeId(3)]);
}
