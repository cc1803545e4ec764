// Concrete end-to-end cases with known answers.

use fourier_core::constants::REFERENCE_FRAME_SEC;
use fourier_core::{
    compute_dft, evaluate_epicycles, resample_path_with, Control, DemoKind, DemoManager,
    DrawCommand, EpicycleChain, Point, PointerInput, Readout, RecordingSurface, Spacing,
    Viewport,
};

fn close(a: Point, b: Point) -> bool {
    a.distance(b) < 1e-9
}

#[test]
fn four_point_square_is_one_pure_rotation() {
    let pts = [
        Point::new(1.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(-1.0, 0.0),
        Point::new(0.0, -1.0),
    ];
    let dft = compute_dft(&pts);
    assert_eq!(dft.len(), 4);
    assert!(dft[0].amplitude < 1e-12, "dc {}", dft[0].amplitude);
    assert!((dft[1].amplitude - 1.0).abs() < 1e-12);

    let chain = EpicycleChain::from_points(&pts);
    assert_eq!(chain.components()[0].frequency, 1);
    for (i, corner) in pts.iter().enumerate() {
        let t = i as f64 * 0.25;
        let tip = evaluate_epicycles(chain.components(), t, 1).tip;
        assert!(close(tip, *corner), "t={t} {tip:?}");
    }
}

#[test]
fn straight_segment_resamples_evenly() {
    let seg = [Point::ZERO, Point::new(10.0, 0.0)];
    let open = resample_path_with(&seg, 5, Spacing::Open);
    let expected = [0.0, 2.5, 5.0, 7.5, 10.0];
    assert_eq!(open.len(), 5);
    for (p, x) in open.iter().zip(expected) {
        assert!(close(*p, Point::new(x, 0.0)), "{p:?}");
    }

    // the closed spacing stops one step short of the end
    let closed = resample_path_with(&seg, 5, Spacing::Closed);
    assert!(close(closed[1], Point::new(2.0, 0.0)));
    assert!(close(closed[4], Point::new(8.0, 0.0)));
}

#[test]
fn silent_chain_stays_at_the_origin() {
    let chain = compute_dft(&[Point::ZERO]);
    assert_eq!(chain.len(), 1);
    for i in 0..10 {
        let r = evaluate_epicycles(&chain, i as f64 * 0.37, 5);
        assert_eq!(r.tip, Point::ZERO);
    }
    assert_eq!(evaluate_epicycles(&[], 0.5, 3).tip, Point::ZERO);
}

#[test]
fn freehand_session_through_the_manager() {
    let vp = Viewport::new(800.0, 600.0);
    let mut manager = DemoManager::new(vp, DemoKind::Intro);
    let mut surface = RecordingSurface::new(vp);
    assert!(manager.switch_to(DemoKind::Freehand));

    // a small closed triangle drawn around the centre
    let corners = [
        Point::new(400.0, 200.0),
        Point::new(500.0, 380.0),
        Point::new(300.0, 380.0),
        Point::new(400.0, 200.0),
    ];
    manager.pointer(PointerInput::Down(corners[0]));
    for w in corners.windows(2) {
        for s in 1..=10 {
            let f = s as f64 / 10.0;
            manager.pointer(PointerInput::Move(w[0] + (w[1] - w[0]) * f));
        }
    }
    manager.pointer(PointerInput::Up);
    assert_eq!(
        manager.readouts()[2],
        Readout::new("draw-pts", "31")
    );

    assert!(manager.apply(Control::ToggleDrawing));
    assert_eq!(manager.readouts()[0], Readout::new("draw-mode", "Playing"));
    assert_eq!(manager.readouts()[3], Readout::new("draw-nepi", "80"));

    for _ in 0..30 {
        manager
            .frame(REFERENCE_FRAME_SEC, &mut surface)
            .expect("recording surface never fails");
    }
    assert_eq!(surface.frames, 30);
    assert!(matches!(surface.last.first(), Some(DrawCommand::Clear(_))));

    // leaving and coming back resumes the replay
    manager.switch_to(DemoKind::Signal);
    manager.switch_to(DemoKind::Freehand);
    assert_eq!(manager.readouts()[0], Readout::new("draw-mode", "Playing"));

    manager.apply(Control::Clear);
    assert_eq!(manager.readouts()[2], Readout::new("draw-pts", "0"));
}

#[test]
fn every_panel_renders_after_a_resize() {
    let mut manager = DemoManager::new(Viewport::new(800.0, 600.0), DemoKind::Intro);
    let small = Viewport::new(320.0, 240.0);
    let mut surface = RecordingSurface::new(small);
    for kind in DemoKind::ALL {
        manager.switch_to(kind);
        manager.resize(small);
        for _ in 0..3 {
            manager
                .frame(REFERENCE_FRAME_SEC, &mut surface)
                .expect("recording surface never fails");
        }
        assert!(!surface.last.is_empty(), "{kind} drew nothing");
        assert!(!manager.readouts().is_empty(), "{kind} has no readouts");
    }
}
