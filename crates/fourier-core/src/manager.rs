//! Which panel is on screen, and the per-frame step → render → present cycle.

use crate::controls::{Control, PointerInput, Readout};
use crate::demos::{Demo, DemoKind};
use crate::draw::{DrawList, Surface, Viewport};
use crate::error::CoreError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DriverState {
    #[default]
    Inactive,
    Active,
}

/// Host-visible UI state: which tab is selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewModel {
    pub active: DemoKind,
}

impl ViewModel {
    pub fn select(self, kind: DemoKind) -> Self {
        Self { active: kind }
    }

    pub fn is_active(&self, kind: DemoKind) -> bool {
        self.active == kind
    }
}

/// Owns one driver per panel. Only the active driver is stepped and drawn.
pub struct DemoManager {
    demos: Vec<Box<dyn Demo>>,
    states: [DriverState; DemoKind::COUNT],
    view: ViewModel,
    viewport: Viewport,
    list: DrawList,
}

impl DemoManager {
    /// Build every driver with default parameters and activate `initial`.
    pub fn new(viewport: Viewport, initial: DemoKind) -> Self {
        let demos = DemoKind::ALL.into_iter().map(DemoKind::build).collect();
        Self::with_demos(demos, viewport, initial)
    }

    /// Use pre-built drivers, one per [`DemoKind`] in tab order.
    pub fn with_demos(demos: Vec<Box<dyn Demo>>, viewport: Viewport, initial: DemoKind) -> Self {
        debug_assert!(demos
            .iter()
            .zip(DemoKind::ALL)
            .all(|(d, k)| d.kind() == k));
        let mut manager = Self {
            demos,
            states: [DriverState::Inactive; DemoKind::COUNT],
            view: ViewModel { active: initial },
            viewport,
            list: DrawList::new(),
        };
        manager.activate(initial);
        manager
    }

    pub fn view(&self) -> ViewModel {
        self.view
    }

    pub fn active(&self) -> DemoKind {
        self.view.active
    }

    pub fn state(&self, kind: DemoKind) -> DriverState {
        self.states[kind.index()]
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn demo(&self, kind: DemoKind) -> &dyn Demo {
        self.demos[kind.index()].as_ref()
    }

    /// Make `kind` the visible panel. Returns false if it already was.
    pub fn switch_to(&mut self, kind: DemoKind) -> bool {
        if self.view.is_active(kind) && self.state(kind) == DriverState::Active {
            return false;
        }
        let previous = self.view.active;
        if self.state(previous) == DriverState::Active {
            self.demos[previous.index()].deactivate();
            self.states[previous.index()] = DriverState::Inactive;
        }
        self.view = self.view.select(kind);
        self.activate(kind);
        log::info!("[demos] {} -> {}", previous, kind);
        true
    }

    /// Switch by 0-based tab index.
    pub fn switch_to_index(&mut self, index: usize) -> Result<bool, CoreError> {
        let kind = DemoKind::from_index(index)?;
        Ok(self.switch_to(kind))
    }

    /// Advance the active driver by `dt_sec`, draw it and present the result.
    pub fn frame(&mut self, dt_sec: f64, surface: &mut dyn Surface) -> Result<(), CoreError> {
        let demo = &mut self.demos[self.view.active.index()];
        demo.step(dt_sec);
        self.list.reset();
        demo.render(&mut self.list);
        surface.present(&self.list)
    }

    /// New surface size. Only the active driver is reinitialised; the others
    /// pick the size up on their next activation.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let kind = self.view.active;
        self.demos[kind.index()].resize(viewport);
        log::debug!(
            "[demos] resized {} to {}x{}",
            kind,
            viewport.width,
            viewport.height
        );
    }

    /// Forward a control to the active driver.
    pub fn apply(&mut self, control: Control) -> bool {
        let handled = self.demos[self.view.active.index()].apply(control);
        if !handled {
            log::trace!("[demos] {} ignored {:?}", self.view.active, control);
        }
        handled
    }

    pub fn pointer(&mut self, input: PointerInput) {
        self.demos[self.view.active.index()].pointer(input);
    }

    pub fn drawing(&self) -> bool {
        self.demos[self.view.active.index()].drawing()
    }

    pub fn readouts(&self) -> Vec<Readout> {
        self.demos[self.view.active.index()].readouts()
    }

    /// Last list handed to the surface.
    pub fn draw_list(&self) -> &DrawList {
        &self.list
    }

    fn activate(&mut self, kind: DemoKind) {
        self.demos[kind.index()].activate(self.viewport);
        self.states[kind.index()] = DriverState::Active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::REFERENCE_FRAME_SEC;
    use crate::draw::RecordingSurface;

    fn manager() -> (DemoManager, RecordingSurface) {
        let vp = Viewport::new(800.0, 600.0);
        (DemoManager::new(vp, DemoKind::Intro), RecordingSurface::new(vp))
    }

    #[test]
    fn only_the_initial_driver_starts_active() {
        let (m, _) = manager();
        assert_eq!(m.state(DemoKind::Intro), DriverState::Active);
        for kind in &DemoKind::ALL[1..] {
            assert_eq!(m.state(*kind), DriverState::Inactive);
        }
    }

    #[test]
    fn switching_deactivates_the_previous_driver() {
        let (mut m, _) = manager();
        assert!(m.switch_to(DemoKind::Spirograph));
        assert_eq!(m.state(DemoKind::Intro), DriverState::Inactive);
        assert_eq!(m.state(DemoKind::Spirograph), DriverState::Active);
        assert_eq!(m.view().active, DemoKind::Spirograph);
        assert!(!m.switch_to(DemoKind::Spirograph));
    }

    #[test]
    fn frame_presents_once() {
        let (mut m, mut surface) = manager();
        m.frame(REFERENCE_FRAME_SEC, &mut surface).unwrap();
        m.frame(REFERENCE_FRAME_SEC, &mut surface).unwrap();
        assert_eq!(surface.frames, 2);
        assert_eq!(surface.last.len(), m.draw_list().len());
    }

    #[test]
    fn controls_reach_only_the_active_driver() {
        let (mut m, _) = manager();
        assert!(m.apply(Control::SetTerms(9)));
        assert_eq!(m.readouts()[0], Readout::new("epi-count", "9"));
        assert!(!m.apply(Control::ToggleDrawing));
        m.switch_to(DemoKind::Square);
        assert_eq!(m.readouts()[0], Readout::new("sq-count", "5"));
    }

    #[test]
    fn only_the_freehand_panel_draws() {
        let (mut m, _) = manager();
        assert!(!m.drawing());
        m.switch_to(DemoKind::Freehand);
        assert!(m.drawing());
    }

    #[test]
    fn bad_index_is_an_error() {
        let (mut m, _) = manager();
        assert_eq!(m.switch_to_index(42), Err(CoreError::DemoIndex(42)));
        assert_eq!(m.switch_to_index(4), Ok(true));
        assert_eq!(m.active(), DemoKind::Presets);
    }

    #[test]
    fn view_model_select_is_pure() {
        let v = ViewModel::default();
        let w = v.select(DemoKind::Signal);
        assert_eq!(v.active, DemoKind::Intro);
        assert!(w.is_active(DemoKind::Signal));
    }
}
