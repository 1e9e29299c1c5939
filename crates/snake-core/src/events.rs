// File: crates/snake-core/src/events.rs
// Summary: Pointer dispatch from scene hit regions to chart callbacks (click / hover).

use crate::scene::{HitTarget, Scene};

/// Chart callbacks. Invoked synchronously from `dispatch_click`/`dispatch_hover`
/// with the index of the entity in the chart input.
pub trait ChartEvents {
    fn on_point_click(&mut self, _series: usize, _index: usize) {}
    fn on_segment_click(&mut self, _index: usize) {}
    fn on_hex_click(&mut self, _index: usize) {}
    fn on_ridge_click(&mut self, _index: usize) {}
    fn on_bar_click(&mut self, _index: usize) {}
    /// `None` when the pointer leaves every bar.
    fn on_bar_hover(&mut self, _index: Option<usize>) {}
}

/// Closure-backed callbacks; unset hooks are ignored.
#[derive(Default)]
pub struct Callbacks {
    pub on_point_click: Option<Box<dyn FnMut(usize, usize)>>,
    pub on_segment_click: Option<Box<dyn FnMut(usize)>>,
    pub on_hex_click: Option<Box<dyn FnMut(usize)>>,
    pub on_ridge_click: Option<Box<dyn FnMut(usize)>>,
    pub on_bar_click: Option<Box<dyn FnMut(usize)>>,
    pub on_bar_hover: Option<Box<dyn FnMut(Option<usize>)>>,
}

impl ChartEvents for Callbacks {
    fn on_point_click(&mut self, series: usize, index: usize) {
        if let Some(f) = self.on_point_click.as_mut() { f(series, index) }
    }
    fn on_segment_click(&mut self, index: usize) {
        if let Some(f) = self.on_segment_click.as_mut() { f(index) }
    }
    fn on_hex_click(&mut self, index: usize) {
        if let Some(f) = self.on_hex_click.as_mut() { f(index) }
    }
    fn on_ridge_click(&mut self, index: usize) {
        if let Some(f) = self.on_ridge_click.as_mut() { f(index) }
    }
    fn on_bar_click(&mut self, index: usize) {
        if let Some(f) = self.on_bar_click.as_mut() { f(index) }
    }
    fn on_bar_hover(&mut self, index: Option<usize>) {
        if let Some(f) = self.on_bar_hover.as_mut() { f(index) }
    }
}

/// Route a click at `(x, y)` to the matching callback. Returns the target hit.
pub fn dispatch_click<H: ChartEvents + ?Sized>(scene: &Scene, x: f64, y: f64, handler: &mut H) -> Option<HitTarget> {
    let target = scene.target_at(x, y)?;
    match target {
        HitTarget::Point { series, index } => handler.on_point_click(series, index),
        HitTarget::Segment(i) => handler.on_segment_click(i),
        HitTarget::Hex(i) => handler.on_hex_click(i),
        HitTarget::Ridge(i) => handler.on_ridge_click(i),
        HitTarget::Bar(i) => handler.on_bar_click(i),
    }
    Some(target)
}

/// Tracks the hovered target so enter/leave is reported once per change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    current: Option<HitTarget>,
}

impl HoverState {
    pub fn current(&self) -> Option<HitTarget> { self.current }

    /// Update from a pointer move; bar hover callbacks fire only when the hovered bar changes.
    pub fn dispatch<H: ChartEvents + ?Sized>(&mut self, scene: &Scene, x: f64, y: f64, handler: &mut H) {
        let next = scene.target_at(x, y);
        if next == self.current {
            return;
        }
        let bar = |t: Option<HitTarget>| match t {
            Some(HitTarget::Bar(i)) => Some(i),
            _ => None,
        };
        if bar(next) != bar(self.current) {
            handler.on_bar_hover(bar(next));
        }
        self.current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::HitRegion;
    use crate::theme::Color;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn bars_scene() -> Scene {
        let mut s = Scene::new(100.0, 100.0, Color::rgb(0, 0, 0));
        s.region(HitRegion::Rect { x: 0.0, y: 0.0, width: 40.0, height: 100.0 }, HitTarget::Bar(0));
        s.region(HitRegion::Rect { x: 60.0, y: 0.0, width: 40.0, height: 100.0 }, HitTarget::Bar(1));
        s
    }

    #[test]
    fn click_reaches_bar_callback() {
        let clicked = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&clicked);
        let mut cb = Callbacks { on_bar_click: Some(Box::new(move |i| *sink.borrow_mut() = Some(i))), ..Default::default() };
        assert_eq!(dispatch_click(&bars_scene(), 70.0, 50.0, &mut cb), Some(HitTarget::Bar(1)));
        assert_eq!(*clicked.borrow(), Some(1));
        assert_eq!(dispatch_click(&bars_scene(), 50.0, 50.0, &mut cb), None);
    }

    #[test]
    fn hover_reports_changes_only() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let mut cb = Callbacks { on_bar_hover: Some(Box::new(move |i| sink.borrow_mut().push(i))), ..Default::default() };
        let scene = bars_scene();
        let mut hover = HoverState::default();
        for x in [10.0, 20.0, 50.0, 70.0, 80.0] {
            hover.dispatch(&scene, x, 50.0, &mut cb);
        }
        assert_eq!(*log.borrow(), vec![Some(0), None, Some(1)]);
    }
}
