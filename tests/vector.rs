// Copyright © 2025 Hs293Go
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation
// the rights to use, copy, modify, merge, publish, distribute, sublicense,
// and/or sell copies of the Software, and to permit persons to whom the
// Software is furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included
// in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES
// OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT.
// IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM,
// DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT,
// TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE
// OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

#[cfg(feature = "nalgebra")]
mod test_three_axis {

    use nalgebra::Vector3;
    use tick_pid::pid::PidController;
    use tick_pid::vector::PidController3;

    fn make_vector_controller() -> PidController3<f64> {
        PidController3::new(2.0, 1.0, 0.5, 100.0)
    }

    fn make_scalar_bank() -> [PidController<f64>; 3] {
        [PidController::new(2.0, 1.0, 0.5, 100.0); 3]
    }

    #[test]
    fn test_axes_match_three_scalar_controllers() {
        let mut vector_pid = make_vector_controller();
        let mut bank = make_scalar_bank();

        let errors = [
            Vector3::new(0.5, -1.0, 2.0),
            Vector3::new(0.25, -0.75, 1.5),
            Vector3::new(0.0, 0.5, 1.0),
            Vector3::new(-0.125, 1.25, 0.5),
        ];

        // Identical arithmetic runs per axis, so the match is exact
        for error in errors {
            let out = vector_pid.update(error, 0.1);
            for axis in 0..3 {
                assert_eq!(out[axis], bank[axis].update(error[axis], 0.1));
            }
        }
    }

    #[test]
    fn test_nan_component_drops_the_whole_tick() {
        let mut pid = make_vector_controller();

        // Seed some history first so the test can watch it survive
        pid.update(Vector3::new(1.0, 2.0, 3.0), 0.1);
        let before = pid;

        let glitched = Vector3::new(1.0, f64::NAN, 3.0);
        assert_eq!(pid.update(glitched, 0.1), Vector3::zeros());
        assert_eq!(pid.update_pd(glitched, 0.1), Vector3::zeros());
        assert_eq!(pid.update_pi(glitched, 0.1), Vector3::zeros());
        assert_eq!(pid.update_p(glitched), Vector3::zeros());

        assert_eq!(pid, before);
    }

    #[test]
    fn test_zero_dt_drops_the_tick() {
        let mut pid = make_vector_controller();
        let before = pid;

        let error = Vector3::new(1.0, -1.0, 0.5);
        assert_eq!(pid.update(error, 0.0), Vector3::zeros());
        assert_eq!(pid.update_pd(error, 0.0), Vector3::zeros());
        assert_eq!(pid.update_pi(error, 0.0), Vector3::zeros());

        assert_eq!(pid, before);
    }

    #[test]
    fn test_components_clamp_independently() {
        let pid = PidController3::new(1.0, 0.0, 0.0, 10.0);

        let out = pid.update_p(Vector3::new(1_000.0, -1_000.0, 0.5));
        assert_eq!(out, Vector3::new(10.0, -10.0, 0.5));
    }

    #[test]
    fn test_reduced_laws_touch_only_their_own_state() {
        let error = Vector3::new(3.0, -1.0, 0.5);

        let mut pid = make_vector_controller();
        pid.update_pd(error, 0.5);
        assert_eq!(pid.prev_error(), error);
        assert_eq!(pid.integral_error(), Vector3::zeros());

        let mut pid = make_vector_controller();
        pid.update_pi(error, 0.5);
        assert_eq!(pid.prev_error(), Vector3::zeros());
        assert_eq!(pid.integral_error(), Vector3::new(1.5, -0.5, 0.25));
    }

    #[test]
    fn test_update_pid_is_update() {
        let mut a = make_vector_controller();
        let mut b = make_vector_controller();

        let error = Vector3::new(0.5, -0.25, 1.0);
        assert_eq!(a.update(error, 0.1), b.update_pid(error, 0.1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_reset_zeroes_every_axis() {
        let mut pid = make_vector_controller();

        pid.update(Vector3::new(1.0, 2.0, 3.0), 0.25);
        pid.reset();

        assert_eq!(pid, make_vector_controller());
    }
}
