#![warn(missing_docs)]

//! # Tick-Driven PID Controller Library
//!
//! This library provides a discrete PID (Proportional-Integral-Derivative)
//! controller primitive for real-time control loops that run on ticks: feed
//! it one `(error, delta-time)` pair per tick and apply what comes back.
//!
//! ## Features
//!
//! - Built for the realities of a control tick:
//!   - Symmetric output clamping to a configurable magnitude limit.
//!   - Glitch tolerance: a zero delta-time or a NaN error drops the tick
//!     (zero output, untouched state) instead of panicking or poisoning the
//!     error history.
//!   - Reduced laws (P, PD, PI) next to the full PID form, each mutating
//!     only the state it actually reads.
//!
//! - Generic over the float type (`f32`, `f64`, or anything implementing
//!   `num_traits::float::FloatCore`) and `no_std` at heart.
//!
//! - Optional extras:
//!   - A three-axis controller over `nalgebra::Vector3` behind the
//!     `nalgebra` feature.
//!   - Clock adapters that turn raw timestamps into per-tick elapsed time.
//!
//! ## Usage
//!
//! ### Driving a control loop
//!
//! ```rust
//! use tick_pid::pid::PidController;
//!
//! let mut pid = PidController::<f64>::new(1.2, 0.3, 0.05, 10.0);
//!
//! let setpoint = 2.0;
//! let mut measurement = 0.0;
//! let dt = 0.01; // 100 Hz loop
//!
//! for _ in 0..100 {
//!     let command = pid.update(setpoint - measurement, dt);
//!     assert!(command.abs() <= 10.0);
//!     measurement += command * dt; // stand-in for the real plant
//! }
//! ```
//!
//! ### Validated construction
//!
//! Field access is unchecked by design; when the tuning comes from a config
//! file or a tuning UI, go through the builder instead.
//!
//! ```rust
//! use tick_pid::pid::{PidConfigError, PidControllerBuilder};
//!
//! let pid = PidControllerBuilder::default()
//!     .kp(2.0)
//!     .ki(0.5)
//!     .output_limit(10.0)
//!     .build()
//!     .expect("finite gains");
//! assert_eq!(pid.output_limit, 10.0);
//!
//! let rejected = PidControllerBuilder::default().kp(f64::NAN).build();
//! assert_eq!(rejected.unwrap_err(), PidConfigError::InvalidProportionalGain);
//! ```
//!
//! ### Reduced control laws
//!
//! ```rust
//! use tick_pid::pid::{ControlLaw, PidController};
//!
//! let mut pid = PidController::<f64>::new(2.0, 0.0, 0.5, 40.0);
//! assert_eq!(pid.control_law(), ControlLaw::Pd);
//!
//! // Dispatch on the law the gains select, or call update_pd directly
//! let law = pid.control_law();
//! let output = pid.update_law(law, 1.5, 0.01);
//! assert!(output.abs() <= 40.0);
//! ```
//!
//! ### Deriving delta time from a clock
//!
//! ```rust
//! use tick_pid::pid::PidController;
//! use tick_pid::time::{DeltaTimer, Millis};
//!
//! let mut pid = PidController::new(1.0, 0.1, 0.0, 5.0);
//! let mut timer = DeltaTimer::new();
//!
//! // First tick has no predecessor: dt is 0.0 and the controller drops it
//! let out = pid.update(0.5, timer.tick(Millis(1000)));
//! assert_eq!(out, 0.0);
//!
//! // From the second tick on, dt is the gap between timestamps
//! let out = pid.update(0.5, timer.tick(Millis(1250)));
//! assert!(out > 0.0);
//! ```
//!
//! ## License
//!
//! MIT
#![no_std]

#[cfg(feature = "std")]
extern crate std;

/// The main module for the PID controller library.
pub mod pid;

/// The module containing clock adapters that produce per-tick elapsed time.
pub mod time;

/// The module containing the component-wise three-axis PID controller.
#[cfg(feature = "nalgebra")]
pub mod vector;

#[doc(hidden)]
#[cfg(feature = "simulation")]
pub mod sim;

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
