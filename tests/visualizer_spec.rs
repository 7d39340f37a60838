use ares::models::{page, RocketGeometryParams};
use ares::visualizer::{build_geometry, render, to_figure};
use speculate2::speculate;

const EPS: f64 = 1e-9;

speculate! {
    before {
        let params = RocketGeometryParams {
            height: 10.0,
            body_radius: 1.0,
            nose_height: 2.0,
            ..Default::default()
        };
        let geometry = build_geometry(&params);
    }

    describe "body" {
        it "spans z from 0 to height" {
            assert_eq!(geometry.body.z_range(), (0.0, 10.0));
        }

        it "has the body radius everywhere" {
            for row in 0..geometry.body.rows() {
                for col in 0..geometry.body.cols() {
                    assert!((geometry.body.radius_at(row, col) - 1.0).abs() < EPS);
                }
            }
        }
    }

    describe "nose" {
        it "spans z from height to height plus nose height" {
            assert_eq!(geometry.nose.z_range(), (10.0, 12.0));
        }

        it "tapers from the body radius to a point" {
            let nose = &geometry.nose;
            for row in 0..nose.rows() {
                assert!((nose.radius_at(row, 0) - 1.0).abs() < EPS);
                assert!(nose.radius_at(row, nose.cols() - 1).abs() < EPS);
                for col in 1..nose.cols() {
                    assert!(nose.radius_at(row, col) < nose.radius_at(row, col - 1));
                }
            }
        }
    }

    describe "flame" {
        it "widens from a point below the body to the flame radius at z 0" {
            let flame = &geometry.flame;
            assert_eq!(flame.z_range(), (-1.0, 0.0));
            assert!(flame.radius_at(0, 0).abs() < EPS);
            assert!((flame.radius_at(0, flame.cols() - 1) - 0.5).abs() < EPS);
        }
    }

    describe "fins" {
        it "are spaced evenly around the body" {
            let params = RocketGeometryParams { fin_count: 6, ..params };
            let fins = build_geometry(&params).fins;
            assert_eq!(fins.len(), 6);
            for (i, fin) in fins.iter().enumerate() {
                let expected = i as f64 * std::f64::consts::TAU / 6.0;
                assert!((fin.angle - expected).abs() < EPS);
                // Inner corners sit on the body surface.
                assert!((fin.x[0].hypot(fin.y[0]) - (1.0f64.hypot(0.1))).abs() < EPS);
                assert_eq!(fin.z, [0.0, 0.0, params.fin_height, params.fin_height]);
            }
        }

        it "are omitted when fin count is zero" {
            let params = RocketGeometryParams { fin_count: 0, ..params };
            let geometry = build_geometry(&params);
            assert!(geometry.fins.is_empty());
            assert_eq!(to_figure(&geometry).data.len(), 3);
        }
    }

    describe "slider bounds" {
        it "produces consistent finite surfaces at every extreme" {
            let lo = RocketGeometryParams {
                height: page::ROCKET_HEIGHT.min,
                body_radius: page::BODY_RADIUS.min,
                nose_height: page::NOSE_HEIGHT.min,
                fin_count: page::FIN_COUNT.min as u32,
                fin_height: page::FIN_HEIGHT.min,
                flame_radius: page::FLAME_RADIUS.min,
                flame_height: page::FLAME_HEIGHT.min,
            };
            let hi = RocketGeometryParams {
                height: page::ROCKET_HEIGHT.max,
                body_radius: page::BODY_RADIUS.max,
                nose_height: page::NOSE_HEIGHT.max,
                fin_count: page::FIN_COUNT.max as u32,
                fin_height: page::FIN_HEIGHT.max,
                flame_radius: page::FLAME_RADIUS.max,
                flame_height: page::FLAME_HEIGHT.max,
            };
            for p in [lo, hi] {
                let g = render(&p).expect("params in range");
                assert!(g.body.is_consistent());
                assert!(g.nose.is_consistent());
                assert!(g.flame.is_consistent());
                assert!(g.fins.iter().all(|f| f.x.iter().chain(&f.y).all(|v| v.is_finite())));
            }
        }

        it "rejects a radius outside its slider" {
            let params = RocketGeometryParams { body_radius: 3.5, ..params };
            assert!(render(&params).is_err());
        }
    }
}
