/*
 * Copyright (c) 2003-2025. Trevor Campbell and others.
 *
 * This file is part of Kelpie Performance Model.
 *
 * Kelpie Performance Model is free software; you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation; either version 2 of the License, or
 * (at your option) any later version.
 *
 * Kelpie Performance Model is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Kelpie Performance Model; if not, write to the Free Software
 * Foundation, Inc., 59 Temple Place, Suite 330, Boston, MA  02111-1307  USA
 *
 * Contributors:
 *      Trevor Campbell
 *
 */
#![forbid(unsafe_code)]

use log::{warn, LevelFilter};
use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, TermLogger, TerminalMode, WriteLogger,
};
use std::error::Error;

pub mod snapshot_io;

// Round to the nearest multiple of step, halves away from zero. Altitudes
// here are non-negative, so this behaves as half-up.
pub fn round_to_step(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}

// Flag a non-finite entry without rejecting it. Range and sanity checking
// belongs to the input layer, not this crate.
pub fn flag_non_finite(field: &str, value: Option<f64>) -> Option<f64> {
    if let Some(v) = value {
        if !v.is_finite() {
            warn!("Non-finite value {} stored for {}", v, field);
        }
    }
    value
}

pub struct Logger;

impl Logger {
    pub fn new() -> Self {
        Self::init_logger();
        Logger
    }

    fn init_logger() {
        if let Some(home_path) = home::home_dir() {
            let log_path = home_path.join("kelpie-perf-model.log");
            let condition = RollingConditionBasic::new().daily().max_size(1024 * 1024);
            let file_appender = BasicRollingFileAppender::new(log_path, condition, 2);
            match file_appender {
                Ok(file) => {
                    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
                    CombinedLogger::init(vec![
                        TermLogger::new(
                            LevelFilter::Warn,
                            Config::default(),
                            TerminalMode::Mixed,
                            ColorChoice::Auto,
                        ),
                        WriteLogger::new(LevelFilter::Info, config, file),
                    ])
                    .unwrap_or_else(|e| {
                        Self::print_error(&e);
                    });
                    return;
                }
                Err(e) => {
                    Self::print_error(&e);
                }
            }
        }
        TermLogger::init(
            LevelFilter::Warn,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        )
        .unwrap_or_else(|e| {
            Self::print_error(&e);
        });
    }

    fn print_error(e: &dyn Error) {
        println!("Unable to initiate logger: {}", e);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        log::logger().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::{flag_non_finite, round_to_step};

    #[test]
    fn test_round_to_nearest_ten() {
        assert_eq!(round_to_step(1504.0, 10.0), 1500.0);
        assert_eq!(round_to_step(1505.0, 10.0), 1510.0);
        assert_eq!(round_to_step(36090.0, 10.0), 36090.0);
        assert_eq!(round_to_step(0.0, 10.0), 0.0);
    }

    #[test]
    fn test_round_to_nearest_unit() {
        assert_eq!(round_to_step(184.4, 1.0), 184.0);
        assert_eq!(round_to_step(184.5, 1.0), 185.0);
        assert_eq!(round_to_step(185.0, 1.0), 185.0);
    }

    #[test]
    fn test_round_idempotent() {
        for v in [0.0, 1500.0, 36090.0, 18000.0] {
            assert_eq!(round_to_step(v, 10.0), v);
            assert_eq!(round_to_step(round_to_step(v, 10.0), 10.0), round_to_step(v, 10.0));
        }
    }

    #[test]
    fn test_flag_non_finite_is_permissive() {
        assert_eq!(flag_non_finite("v1", Some(142.0)), Some(142.0));
        assert_eq!(flag_non_finite("v1", None), None);
        let stored = flag_non_finite("v1", Some(f64::NAN));
        assert!(stored.is_some_and(|v| v.is_nan()));
    }
}
