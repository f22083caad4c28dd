use super::*;

use crate::{
    frame::model::Frame,
    host::{StillExport, ViewApply, ViewCapture},
};

#[derive(Default)]
struct NullHost;

impl ViewCapture for NullHost {
    fn capture_state(&self) -> anyhow::Result<Frame> {
        Ok(Frame::new())
    }
}

impl ViewApply for NullHost {
    fn apply_state(&mut self, _frame: &Frame) -> anyhow::Result<()> {
        Ok(())
    }

    fn clear_transients(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

impl StillExport for NullHost {
    fn export_still(&mut self, _path: &std::path::Path) -> anyhow::Result<()> {
        Ok(())
    }
}

#[test]
fn get_or_create_reuses_the_same_animator() {
    let mut registry = AnimatorRegistry::new();
    registry
        .get_or_create(GraphId(1), NullHost::default)
        .capture_key()
        .unwrap();
    assert_eq!(registry.len(), 1);

    let again = registry.get_or_create(GraphId(1), NullHost::default);
    assert_eq!(again.keys().len(), 1);
    assert_eq!(registry.len(), 1);
}

#[test]
fn graphs_get_independent_animators() {
    let mut registry = AnimatorRegistry::new();
    registry
        .get_or_create(GraphId(1), NullHost::default)
        .capture_key()
        .unwrap();
    registry.get_or_create(GraphId(2), NullHost::default);

    assert_eq!(registry.get(GraphId(1)).unwrap().keys().len(), 1);
    assert!(registry.get(GraphId(2)).unwrap().keys().is_empty());
}

#[test]
fn remove_takes_the_animator_out() {
    let mut registry = AnimatorRegistry::new();
    registry.get_or_create(GraphId(9), NullHost::default);
    assert!(registry.remove(GraphId(9)).is_some());
    assert!(registry.remove(GraphId(9)).is_none());
    assert!(registry.is_empty());
    assert!(registry.get_mut(GraphId(9)).is_none());
}
