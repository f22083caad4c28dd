use super::*;

use crate::foundation::core::{Point3, Rgba};

fn run(from: Frame, to: Frame, n: usize) -> Vec<Frame> {
    let mut mid = vec![Frame::default(); n];
    SceneInterpolator.interpolate(&from, &to, &mut mid);
    mid
}

#[test]
fn zoom_and_center_blend() {
    let mut from = Frame::new();
    from.scene.zoom = 1.0;
    from.scene.center = Point3::new(0.0, 0.0, 0.0);
    let mut to = Frame::new();
    to.scene.zoom = 3.0;
    to.scene.center = Point3::new(100.0, 50.0, 0.0);

    let mid = run(from, to, 3);
    assert_eq!(mid[1].scene.zoom, 2.0);
    assert_eq!(mid[1].scene.center, Point3::new(50.0, 25.0, 0.0));
}

#[test]
fn background_fades_with_alpha() {
    let mut from = Frame::new();
    from.scene.background = Rgba::new(255, 255, 255, 255);
    let mut to = Frame::new();
    to.scene.background = Rgba::new(255, 255, 255, 0);

    let mid = run(from, to, 4);
    let alphas: Vec<u8> = mid.iter().map(|f| f.scene.background.a).collect();
    assert_eq!(alphas, vec![204, 153, 102, 51]);
}

#[test]
fn title_switches_at_the_half() {
    let mut from = Frame::new();
    from.scene.title = "first".into();
    let mut to = Frame::new();
    to.scene.title = "second".into();

    let mid = run(from, to, 5);
    let titles: Vec<&str> = mid.iter().map(|f| f.scene.title.as_str()).collect();
    assert_eq!(titles, vec!["first", "first", "second", "second", "second"]);
}

#[test]
fn identical_scenes_hold_constant() {
    let mut from = Frame::new();
    from.scene.width = 800.0;
    from.scene.height = 600.0;
    let to = from.clone();

    let mid = run(from.clone(), to, 3);
    for frame in &mid {
        assert_eq!(frame.scene, from.scene);
    }
}
