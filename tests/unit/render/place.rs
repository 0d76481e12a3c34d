use super::*;

const DIMS: [u32; 9] = [1, 2, 3, 7, 50, 99, 100, 150, 333];

#[test]
fn cover_is_minimal_full_coverage() {
    for &sw in &DIMS {
        for &sh in &DIMS {
            for &tw in &DIMS {
                for &th in &DIMS {
                    let p = place(RenderTarget::new(tw, th), sw, sh, FitPolicy::Cover).unwrap();
                    let eps = 1e-9;
                    assert!(p.scale * f64::from(sw) >= f64::from(tw) - eps);
                    assert!(p.scale * f64::from(sh) >= f64::from(th) - eps);
                    assert!(p.draw_width >= tw, "{sw}x{sh} -> {tw}x{th}: {p:?}");
                    assert!(p.draw_height >= th, "{sw}x{sh} -> {tw}x{th}: {p:?}");
                    // Minimal: one axis is matched exactly.
                    let w_exact = (p.scale * f64::from(sw) - f64::from(tw)).abs() < 1e-6;
                    let h_exact = (p.scale * f64::from(sh) - f64::from(th)).abs() < 1e-6;
                    assert!(w_exact || h_exact);
                }
            }
        }
    }
}

#[test]
fn fill_width_matches_short_side_to_width() {
    for &sw in &DIMS {
        for &sh in &DIMS {
            for &tw in &DIMS {
                let p = place(
                    RenderTarget::new(tw, 10),
                    sw,
                    sh,
                    FitPolicy::FillWidthByShortSide,
                )
                .unwrap();
                let short = f64::from(sw.min(sh));
                assert!((p.scale * short - f64::from(tw)).abs() < 1e-9);
                assert!(p.draw_width >= tw);
            }
        }
    }
}

#[test]
fn square_source_doubles_into_200_square() {
    let p = place(RenderTarget::new(200, 200), 100, 100, FitPolicy::Cover).unwrap();
    assert_eq!(p.scale, 2.0);
    assert_eq!((p.draw_width, p.draw_height), (200, 200));
}

#[test]
fn rounded_mode_shrinks_300_square_into_200_wide() {
    let p = place(
        RenderTarget::new(200, 100),
        300,
        300,
        FitPolicy::FillWidthByShortSide,
    )
    .unwrap();
    assert!((p.scale - 200.0 / 300.0).abs() < 1e-12);
    assert_eq!((p.draw_width, p.draw_height), (200, 200));
}

#[test]
fn zero_dimensions_are_invalid() {
    for (target, sw, sh) in [
        (RenderTarget::new(0, 150), 10, 10),
        (RenderTarget::new(150, 0), 10, 10),
        (RenderTarget::new(150, 150), 0, 10),
        (RenderTarget::new(150, 150), 10, 0),
    ] {
        assert!(matches!(
            place(target, sw, sh, FitPolicy::Cover),
            Err(MaskError::InvalidDimension(_))
        ));
    }
}

#[test]
fn sides_beyond_rasterizer_limit_are_invalid() {
    for (target, sw, sh) in [
        (RenderTarget::new(70_000, 2), 10, 10),
        (RenderTarget::new(2, 65_536), 10, 10),
        (RenderTarget::new(20, 20), 70_000, 1),
        (RenderTarget::new(20, 20), 1, 65_536),
    ] {
        let err = place(target, sw, sh, FitPolicy::Cover).unwrap_err();
        assert!(matches!(err, MaskError::InvalidDimension(_)), "{err}");
    }
    assert!(place(RenderTarget::new(65_535, 1), 65_535, 1, FitPolicy::Cover).is_ok());
}
